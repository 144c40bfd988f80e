//! Identifier collection: declared variables, then subroutine names.

use crate::classify::{self, DeclarationRole};
use tracing::{debug, warn};
use tsm_core::types::{QUOTE, TYPE_SEPARATOR};
use tsm_core::{Identifier, IdentifierKind, MinimizeError, Result, ScriptCounters};

/// Everything the collection pass found, in discovery order.
#[derive(Debug, Clone, Default)]
pub struct Collection {
    /// Variables first, then subroutines. Repeated names are kept.
    pub identifiers: Vec<Identifier>,
    pub counters: ScriptCounters,
    /// Index of the line that ended the declaration region.
    pub declaration_end: usize,
}

impl Collection {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.identifiers.iter().map(|i| i.name.as_str())
    }
}

/// One parsed declaration line (`p:counter=0`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration<'a> {
    pub name: &'a str,
    pub kind: IdentifierKind,
    pub value: &'a str,
}

/// Parse a declaration line; `line_no` is 1-based and only used for errors.
pub fn parse_declaration(line: &str, line_no: usize) -> Result<Declaration<'_>> {
    let (lhs, value) = line.split_once('=').unwrap_or((line, ""));
    let (kind, name) = match lhs.split_once(TYPE_SEPARATOR) {
        Some((prefix, name)) => (IdentifierKind::from_prefix(prefix), name.trim()),
        None => (IdentifierKind::Variable, lhs.trim()),
    };
    if name.is_empty() {
        return Err(MinimizeError::MalformedDeclaration {
            line: line_no,
            content: line.trim_end().to_string(),
        });
    }
    Ok(Declaration { name, kind, value: value.trim() })
}

/// Walk the declaration region, then the rest of the script for subroutines.
pub fn collect(lines: &[&str]) -> Result<Collection> {
    let mut collection = Collection {
        declaration_end: lines.len(),
        ..Default::default()
    };

    for (idx, line) in lines.iter().enumerate() {
        match classify::declaration_role(line) {
            DeclarationRole::Blank | DeclarationRole::Header | DeclarationRole::Comment => continue,
            DeclarationRole::RegionEnd => {
                collection.declaration_end = idx;
                break;
            }
            DeclarationRole::Declaration => {}
        }
        let decl = parse_declaration(line, idx + 1)?;
        let counters = &mut collection.counters;
        counters.variables += 1;
        match decl.kind {
            IdentifierKind::Permanent => counters.permanent += 1,
            IdentifierKind::Array => counters.arrays += 1,
            _ => {}
        }
        if decl.value.contains(QUOTE) {
            counters.strings += 1;
        }
        collection.identifiers.push(Identifier::new(decl.name, decl.kind, idx + 1));
    }

    let start = collection.declaration_end;
    for (idx, line) in lines.iter().enumerate().skip(start) {
        let Some(name) = classify::subroutine_header(line) else { continue };
        if name.is_empty() {
            warn!(line = idx + 1, "subroutine header without a name");
            continue;
        }
        collection
            .identifiers
            .push(Identifier::new(name, IdentifierKind::Subroutine, idx + 1));
    }

    debug!(
        identifiers = collection.identifiers.len(),
        variables = collection.counters.variables,
        permanent = collection.counters.permanent,
        arrays = collection.counters.arrays,
        strings = collection.counters.strings,
        "collected identifiers"
    );
    Ok(collection)
}
