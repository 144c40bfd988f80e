//! Rewrite pass: comments, identifier substitution, whitespace removal.

use crate::allocate::RenameMap;
use crate::{classify, substitute, whitespace};
use tracing::trace;
use tsm_core::types::PRINT_KEYWORD;
use tsm_core::{Aggressiveness, MinimizerConfig, Section};

/// Output of the rewrite pass.
#[derive(Debug, Clone, Default)]
pub struct Rewritten {
    /// Retained lines without terminators.
    pub lines: Vec<String>,
    /// Bytes of the newline-terminated output.
    pub output_len: usize,
}

/// Rewrites lines against a finished rename map.
pub struct Rewriter<'a> {
    map: &'a RenameMap,
    level: Aggressiveness,
    special_sections: &'a [String],
}

impl<'a> Rewriter<'a> {
    pub fn new(map: &'a RenameMap, config: &'a MinimizerConfig) -> Self {
        Self {
            map,
            level: config.aggressiveness,
            special_sections: &config.special_sections,
        }
    }

    /// Rewrite the whole script, tracking the current section.
    pub fn rewrite(&self, lines: &[&str]) -> Rewritten {
        let mut out = Rewritten::default();
        let mut section = Section::default();
        for (idx, line) in lines.iter().enumerate() {
            if classify::is_blank(line) {
                continue;
            }
            section = section.transition(line, self.special_sections);
            if let Some(rewritten) = self.rewrite_line(line, &section) {
                trace!(line = idx + 1, %section, output = %rewritten, "rewrote line");
                out.output_len += rewritten.len() + 1;
                out.lines.push(rewritten);
            }
        }
        out
    }

    /// Rewrite one non-blank line inside `section`. `None` drops the line.
    pub fn rewrite_line(&self, line: &str, section: &Section) -> Option<String> {
        if section.is_special() {
            return Some(substitute::rename_positional(line, self.map));
        }

        if classify::is_comment_line(line) {
            return None;
        }
        let code = classify::strip_comment(line);
        if code.trim().is_empty() {
            return None;
        }

        let is_print = classify::starts_with_keyword(&code, PRINT_KEYWORD);
        let renamed = if is_print && !self.level.renames_print_lines() {
            substitute::rename_format_fields(&code, self.map)
        } else {
            let (head, tail) = classify::split_string_tail(&code);
            let mut renamed = substitute::rename_words(head, self.map);
            renamed.push_str(tail);
            renamed
        };

        if is_print && !self.level.compacts_print_lines() {
            return Some(renamed);
        }
        Some(whitespace::compress(&renamed, self.level))
    }
}

/// Rewrite `lines` with `map` under `config`.
pub fn rewrite(lines: &[&str], map: &RenameMap, config: &MinimizerConfig) -> Rewritten {
    Rewriter::new(map, config).rewrite(lines)
}
