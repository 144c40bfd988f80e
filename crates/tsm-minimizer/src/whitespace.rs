//! Whitespace removal in layered rule sets gated by aggressiveness.
//!
//! Every rule decides the fate of a whole whitespace run. A run is dropped
//! when any enabled rule matches; otherwise it shrinks to its first
//! character, which keeps two words apart.

use crate::substitute::is_word_char;
use tsm_core::Aggressiveness;

/// Whitespace around these characters never matters.
pub const OPERATORS: &[char] = &[
    '=', '+', '-', '*', '/', '%', '&', '|', '^', '<', '>', '!', '(', ')', '[', ']',
];
/// Keywords that need no whitespace after them.
pub const TRAILING_KEYWORDS: &[&str] = &["and", "or", "then", "print", "for", "if", "switch", "case"];
/// Keywords that need no whitespace before them when a digit precedes.
pub const DIGIT_KEYWORDS: &[&str] = &["and", "or", "then", "case"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct WhitespaceRules {
    pub after_keywords: bool,
    pub digit_before_keyword: bool,
}

impl WhitespaceRules {
    pub fn for_level(level: Aggressiveness) -> Self {
        Self {
            after_keywords: level.strips_after_keywords(),
            digit_before_keyword: level.strips_digit_keyword_gap(),
        }
    }

    /// Remove non-semantic whitespace from one line (no line terminator).
    pub fn strip(&self, line: &str) -> String {
        let chars: Vec<char> = line.chars().collect();
        let mut out = String::with_capacity(line.len());
        let mut i = 0;
        while i < chars.len() {
            if !chars[i].is_whitespace() {
                out.push(chars[i]);
                i += 1;
                continue;
            }
            let end = chars[i..]
                .iter()
                .position(|c| !c.is_whitespace())
                .map_or(chars.len(), |n| i + n);
            if !self.drops_run(&chars, i, end) {
                out.push(chars[i]);
            }
            i = end;
        }
        out
    }

    fn drops_run(&self, chars: &[char], start: usize, end: usize) -> bool {
        let prev = start.checked_sub(1).map(|p| chars[p]);
        let next = chars.get(end).copied();

        // Line end, operators on either side, or nothing word-like before.
        if next.map_or(true, |c| OPERATORS.contains(&c)) {
            return true;
        }
        if prev.map_or(true, |c| !c.is_ascii_alphanumeric()) {
            return true;
        }
        if self.after_keywords && ends_with_keyword(&chars[..start], TRAILING_KEYWORDS) {
            return true;
        }
        self.digit_before_keyword
            && prev.is_some_and(|c| c.is_ascii_digit())
            && starts_with_keyword(&chars[end..], DIGIT_KEYWORDS)
    }
}

fn ends_with_keyword(before: &[char], keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        let len = kw.chars().count();
        before.len() >= len
            && before[before.len() - len..].iter().copied().eq(kw.chars())
            && before[..before.len() - len].last().map_or(true, |&c| !is_word_char(c))
    })
}

fn starts_with_keyword(after: &[char], keywords: &[&str]) -> bool {
    keywords.iter().any(|kw| {
        let len = kw.chars().count();
        after.len() >= len
            && after[..len].iter().copied().eq(kw.chars())
            && after.get(len).map_or(true, |&c| !is_word_char(c))
    })
}

/// Strip `line` at `level`; level 0 leaves it untouched.
pub fn compress(line: &str, level: Aggressiveness) -> String {
    if !level.strips_whitespace() {
        return line.to_string();
    }
    WhitespaceRules::for_level(level).strip(line)
}
