use crate::error::{MinimizeError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Starts every section header line (`>D`, `>B`, `>W` ...).
pub const SECTION_MARKER: char = '>';
/// Declaration section header.
pub const DECLARATION_MARKER: &str = ">D";
pub const DECLARATION_CODE: &str = "D";
/// Starts a comment, running to end of line.
pub const COMMENT_MARKER: char = ';';
/// Starts a subroutine header (`#name(param)`) and subroutine references.
pub const SUBROUTINE_MARKER: char = '#';
pub const QUOTE: char = '"';
/// A subroutine name assigned into a variable: `str="text" =#sub`.
pub const SUBROUTINE_ASSIGN: &str = "=#";
/// Separates a type prefix from a declared name (`p:counter`).
pub const TYPE_SEPARATOR: char = ':';
/// Lines starting with this keyword get the print-line treatment.
pub const PRINT_KEYWORD: &str = "print";

/// Section a script line belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", content = "code", rename_all = "lowercase")]
pub enum Section {
    /// Leading declarations, before any marker or inside `>D`.
    #[default]
    Declaration,
    /// Web sections using positional references and keeping inline comments.
    Special(String),
    Other(String),
}

impl Section {
    /// Classify a section code against the configured special codes.
    pub fn from_code(code: &str, special: &[String]) -> Self {
        if code == DECLARATION_CODE {
            Self::Declaration
        } else if special.iter().any(|s| s == code) {
            Self::Special(code.to_string())
        } else {
            Self::Other(code.to_string())
        }
    }

    /// Section opened by a header line, or `None` if the line is no header.
    ///
    /// The code is the single character after the marker, so `>D 48`
    /// opens `D` and `>WS` opens `W`.
    pub fn from_header(line: &str, special: &[String]) -> Option<Self> {
        let rest = line.strip_prefix(SECTION_MARKER)?;
        let end = rest.chars().next().map_or(0, char::len_utf8);
        Some(Self::from_code(&rest[..end], special))
    }

    /// State after reading `line`.
    pub fn transition(&self, line: &str, special: &[String]) -> Self {
        Self::from_header(line, special).unwrap_or_else(|| self.clone())
    }

    pub fn is_special(&self) -> bool {
        matches!(self, Self::Special(_))
    }

    pub fn code(&self) -> &str {
        match self {
            Self::Declaration => DECLARATION_CODE,
            Self::Special(code) | Self::Other(code) => code,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", SECTION_MARKER, self.code())
    }
}

/// What a discovered identifier names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum IdentifierKind {
    Variable,
    /// Survives reboots (`p:` prefix).
    Permanent,
    /// Array or map (`m:` prefix).
    Array,
    Subroutine,
}

impl IdentifierKind {
    /// Kind for a declaration type prefix. Unknown prefixes declare an ordinary variable.
    pub fn from_prefix(prefix: &str) -> Self {
        match prefix.trim() {
            "p" => Self::Permanent,
            "m" => Self::Array,
            _ => Self::Variable,
        }
    }
}

/// A user-chosen name found in the script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
    pub kind: IdentifierKind,
    /// 1-based source line.
    pub line: usize,
}

impl Identifier {
    pub fn new(name: impl Into<String>, kind: IdentifierKind, line: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}

/// Per-script statistics gathered while collecting identifiers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptCounters {
    pub variables: usize,
    pub strings: usize,
    pub arrays: usize,
    pub permanent: usize,
}

/// Minimization level 0-5. Each level enables everything below it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Aggressiveness(u8);

impl Aggressiveness {
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(MinimizeError::InvalidAggressiveness(level));
        }
        Ok(Self(level))
    }

    pub fn level(&self) -> u8 {
        self.0
    }

    /// Any whitespace removal at all.
    pub fn strips_whitespace(&self) -> bool {
        self.0 > 0
    }

    /// Drop whitespace after `and`, `or`, `then`, `print`, `for`, `if`, `switch`, `case`.
    pub fn strips_after_keywords(&self) -> bool {
        self.0 >= 1
    }

    /// Drop whitespace between a digit and `and`, `or`, `then`, `case`.
    pub fn strips_digit_keyword_gap(&self) -> bool {
        self.0 >= 2
    }

    /// Remove whitespace from `print` lines too.
    pub fn compacts_print_lines(&self) -> bool {
        self.0 > 3
    }

    /// Rename every identifier on `print` lines, not only `%`-tagged ones.
    pub fn renames_print_lines(&self) -> bool {
        self.0 > 4
    }
}

impl Default for Aggressiveness {
    fn default() -> Self {
        Self(1)
    }
}

impl TryFrom<u8> for Aggressiveness {
    type Error = MinimizeError;

    fn try_from(level: u8) -> Result<Self> {
        Self::new(level)
    }
}

impl From<Aggressiveness> for u8 {
    fn from(a: Aggressiveness) -> u8 {
        a.0
    }
}

impl fmt::Display for Aggressiveness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
