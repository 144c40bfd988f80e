//! Lexical classification of raw script lines.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use tsm_core::types::{
    COMMENT_MARKER, DECLARATION_MARKER, QUOTE, SECTION_MARKER, SUBROUTINE_ASSIGN, SUBROUTINE_MARKER,
};

static RE_SUBROUTINE_HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*#([^#(;]*)").unwrap());

/// Role of a line while scanning the declaration region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationRole {
    Blank,
    /// `>D` header; structural, does not end the region.
    Header,
    /// First section header or subroutine header; ends the region.
    RegionEnd,
    Comment,
    Declaration,
}

pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

pub fn declaration_role(line: &str) -> DeclarationRole {
    if is_blank(line) {
        return DeclarationRole::Blank;
    }
    if line.starts_with(DECLARATION_MARKER) {
        return DeclarationRole::Header;
    }
    if line.starts_with(SECTION_MARKER) || line.starts_with(SUBROUTINE_MARKER) {
        return DeclarationRole::RegionEnd;
    }
    let starts_with_letter = line.chars().next().is_some_and(char::is_alphabetic);
    if line.contains(COMMENT_MARKER) && !starts_with_letter {
        return DeclarationRole::Comment;
    }
    DeclarationRole::Declaration
}

/// Name declared by a subroutine header such as `#calc(x)`.
///
/// Parameters are not returned; they must be declared variables.
pub fn subroutine_header(line: &str) -> Option<&str> {
    RE_SUBROUTINE_HEADER
        .captures(line)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim())
}

/// A line that is nothing but a comment.
pub fn is_comment_line(line: &str) -> bool {
    line.starts_with(COMMENT_MARKER)
}

/// Cut a trailing comment. Lines carrying one are also trimmed.
pub fn strip_comment(line: &str) -> Cow<'_, str> {
    match line.split_once(COMMENT_MARKER) {
        Some((code, _)) => Cow::Owned(code.trim().to_string()),
        None => Cow::Borrowed(line),
    }
}

/// True if the line's first word is exactly `keyword`.
pub fn starts_with_keyword(line: &str, keyword: &str) -> bool {
    line.trim_start()
        .strip_prefix(keyword)
        .is_some_and(|rest| !rest.starts_with(crate::substitute::is_word_char))
}

/// Split a line at its first quote into code and string tail.
///
/// The tail keeps its opening quote. A tail containing `=#` assigns a
/// subroutine name, so the whole line counts as code.
pub fn split_string_tail(line: &str) -> (&str, &str) {
    match line.find(QUOTE) {
        Some(pos) if !line[pos + 1..].contains(SUBROUTINE_ASSIGN) => line.split_at(pos),
        _ => (line, ""),
    }
}
