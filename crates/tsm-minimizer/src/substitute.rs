//! Whole-word identifier substitution.
//!
//! A single left-to-right scan splits text into word runs and everything
//! else; each word run is looked up in the rename map once.

use crate::allocate::RenameMap;
use tsm_core::types::SUBROUTINE_MARKER;

/// Characters that may appear inside an identifier or number.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// A maximal run of word characters, by byte offsets into the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct WordRun {
    start: usize,
    end: usize,
}

fn word_runs(text: &str) -> impl Iterator<Item = WordRun> + '_ {
    let mut chars = text.char_indices().peekable();
    std::iter::from_fn(move || {
        let (start, _) = chars.by_ref().find(|&(_, c)| is_word_char(c))?;
        let mut end = text.len();
        while let Some(&(i, c)) = chars.peek() {
            if !is_word_char(c) {
                end = i;
                break;
            }
            chars.next();
        }
        Some(WordRun { start, end })
    })
}

/// Rebuild `text`, letting `pick` rewrite each word run.
///
/// `pick` gets the run and returns `(offset, short)` to replace
/// `run[offset..]` with `short`, or `None` to keep the run.
fn rewrite_runs<'m>(
    text: &str,
    mut pick: impl FnMut(&str, WordRun) -> Option<(usize, &'m str)>,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;
    for run in word_runs(text) {
        if let Some((offset, short)) = pick(text, run) {
            let cut = run.start + offset;
            out.push_str(&text[last..cut]);
            out.push_str(short);
            last = run.end;
        }
    }
    out.push_str(&text[last..]);
    out
}

/// Replace every word that is a known identifier.
pub fn rename_words(text: &str, map: &RenameMap) -> String {
    rewrite_runs(text, |text, run| {
        map.get(&text[run.start..run.end]).map(|short| (0, short))
    })
}

/// Replace only identifiers directly followed by a `%` format marker.
///
/// Used on `print` lines so literal words in the printed text survive.
/// A precision prefix is skipped, so `%2temp%` renames `temp`.
pub fn rename_format_fields(text: &str, map: &RenameMap) -> String {
    rewrite_runs(text, |text, run| {
        if !text[run.end..].starts_with('%') {
            return None;
        }
        let word = &text[run.start..run.end];
        let digits = word.len() - word.trim_start_matches(|c: char| c.is_ascii_digit()).len();
        (0..=digits).find_map(|offset| map.get(&word[offset..]).map(|short| (offset, short)))
    })
}

fn opens_reference(c: char) -> bool {
    matches!(c, '(' | '%') || c == SUBROUTINE_MARKER || c.is_ascii_digit()
}

/// Replace identifiers in web sections.
///
/// There a reference follows `(`, `%`, `#` or a digit (`%2temp%` prints
/// `temp` with two decimals), so the match may start after leading
/// digits of a word run. The leftmost qualifying start wins and the
/// match always extends to the end of the run.
pub fn rename_positional(text: &str, map: &RenameMap) -> String {
    rewrite_runs(text, |text, run| {
        let word = &text[run.start..run.end];
        let mut prev = text[..run.start].chars().next_back();
        for (offset, c) in word.char_indices() {
            if prev.is_some_and(opens_reference) {
                if let Some(short) = map.get(&word[offset..]) {
                    return Some((offset, short));
                }
            }
            prev = Some(c);
        }
        None
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs(text: &str) -> Vec<&str> {
        word_runs(text).map(|r| &text[r.start..r.end]).collect()
    }

    #[test]
    fn test_word_runs() {
        assert_eq!(runs("a=b+12 c_d"), vec!["a", "b", "12", "c_d"]);
        assert_eq!(runs("  "), Vec::<&str>::new());
        assert_eq!(runs("end"), vec!["end"]);
    }

    #[test]
    fn test_word_runs_unicode() {
        assert_eq!(runs("t=\"°C\" x"), vec!["t", "C", "x"]);
    }
}
