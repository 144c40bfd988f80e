//! Short name allocation: discovered identifier → a, b, .., z, aa, ab, ..

use crate::collect::Collection;
use std::collections::{HashMap, HashSet};
use tracing::{debug, warn};
use tsm_core::{MinimizeError, MinimizerConfig, Result};

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// Lazy sequence of candidate names in length-then-lexicographic order.
#[derive(Debug, Clone)]
pub struct ShortNames {
    digits: Vec<usize>,
    max_len: Option<usize>,
}

impl ShortNames {
    /// Unbounded sequence.
    pub fn new() -> Self {
        Self { digits: vec![0], max_len: None }
    }

    /// Sequence that ends after the last name of `max_len` letters.
    pub fn with_max_len(max_len: usize) -> Self {
        Self { digits: vec![0], max_len: Some(max_len) }
    }
}

impl Default for ShortNames {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for ShortNames {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.max_len.is_some_and(|max| self.digits.len() > max) {
            return None;
        }
        let name = self.digits.iter().map(|&d| ALPHABET[d] as char).collect();

        // Odometer increment; roll over into the next length class.
        let mut pos = self.digits.len();
        loop {
            if pos == 0 {
                self.digits = vec![0; self.digits.len() + 1];
                break;
            }
            pos -= 1;
            self.digits[pos] += 1;
            if self.digits[pos] < ALPHABET.len() {
                break;
            }
            self.digits[pos] = 0;
        }
        Some(name)
    }
}

/// Injective map from original identifier to short name, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct RenameMap {
    entries: Vec<(String, String)>,
    index: HashMap<String, usize>,
}

impl RenameMap {
    pub fn get(&self, original: &str) -> Option<&str> {
        self.index.get(original).map(|&i| self.entries[i].1.as_str())
    }

    /// `(original, short)` pairs in discovery order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(o, s)| (o.as_str(), s.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, original: String, short: String) {
        self.index.insert(original.clone(), self.entries.len());
        self.entries.push((original, short));
    }
}

/// Distinct names in first-discovery order.
///
/// A name found twice (say a variable and a subroutine) collapses onto
/// one short name unless the config rejects duplicates.
fn distinct_names<'c>(collection: &'c Collection, config: &MinimizerConfig) -> Result<Vec<&'c str>> {
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(collection.identifiers.len());
    for ident in &collection.identifiers {
        if seen.insert(ident.name.as_str()) {
            names.push(ident.name.as_str());
            continue;
        }
        if config.reject_duplicates {
            return Err(MinimizeError::DuplicateIdentifier { name: ident.name.clone() });
        }
        warn!(name = %ident.name, line = ident.line, "identifier discovered twice, sharing one short name");
    }
    Ok(names)
}

/// Bind every collected identifier to a free short name.
pub fn allocate(collection: &Collection, config: &MinimizerConfig) -> Result<RenameMap> {
    let names = distinct_names(collection, config)?;
    let shorts: Vec<String> = ShortNames::with_max_len(config.max_name_len)
        .filter(|candidate| !config.is_reserved(candidate))
        .take(names.len())
        .collect();

    if shorts.len() < names.len() {
        return Err(MinimizeError::NameSpaceExhausted {
            needed: names.len(),
            available: shorts.len(),
            max_len: config.max_name_len,
        });
    }

    let mut map = RenameMap::default();
    for (original, short) in names.into_iter().zip(shorts) {
        map.insert(original.to_string(), short);
    }
    debug!(identifiers = map.len(), "allocated short names");
    Ok(map)
}
