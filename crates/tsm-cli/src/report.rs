//! Human-readable run report.

use std::path::Path;
use tsm_core::ReportLimits;
use tsm_minimizer::MinimizeResult;

pub const BIN_NAME: &str = "tasmota-minimizer";

/// How much of the rename mapping to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictPrint {
    /// Statistics only.
    None,
    /// Statistics, then `original -> short` lines.
    WithStats,
    /// Only `short<TAB>original` lines.
    Only,
}

impl From<u8> for DictPrint {
    fn from(level: u8) -> Self {
        match level {
            0 => Self::None,
            1 => Self::WithStats,
            _ => Self::Only,
        }
    }
}

pub struct Report<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub result: &'a MinimizeResult,
}

impl Report<'_> {
    pub fn render(&self, dict: DictPrint, limits: &ReportLimits) -> String {
        let mut lines = Vec::new();
        if dict != DictPrint::Only {
            lines.extend(self.stats(limits));
        }
        let rename = self.result.rename.iter();
        match dict {
            DictPrint::None => {}
            DictPrint::WithStats => {
                lines.push(String::new());
                lines.extend(rename.map(|(original, short)| format!("{original} -> {short}")));
            }
            DictPrint::Only => {
                lines.extend(rename.map(|(original, short)| format!("{short}\t{original}")));
            }
        }
        lines.into_iter().map(|l| l + "\n").collect()
    }

    fn stats(&self, limits: &ReportLimits) -> Vec<String> {
        let r = self.result;
        let c = &r.counters;
        let mut lines = vec![
            "INPUT".to_string(),
            format!("File: {}", self.input.display()),
            format!("File Size: {} byte", r.input_len),
            format!("Variable Count: {}", c.variables),
            format!("String Count: {}", c.strings),
            format!("Array Count: {}", c.arrays),
            format!("Permanent Variable Count: {}", c.permanent),
            "-".repeat(27),
            "OUTPUT".to_string(),
            format!("File: {}", self.output.display()),
            format!("Minimized Size: {} byte", r.output_len),
            format!("Reduction Rate: {:.2}%", r.reduction_pct()),
        ];
        lines.extend(r.warnings(limits).iter().map(|w| format!("Warning: {w}")));
        lines
    }
}

/// Tool information printed by `--info`.
pub fn tool_info() -> String {
    let rule = format!("# {}", "=".repeat(78));
    let bin = BIN_NAME;
    [
        rule.clone(),
        format!("Name: {bin}"),
        format!("Version: {}", env!("CARGO_PKG_VERSION")),
        format!("License: {}", env!("CARGO_PKG_LICENSE")),
        format!("Description: {}", env!("CARGO_PKG_DESCRIPTION")),
        format!("Example 1: {bin} testscript.txt"),
        format!("Example 2: {bin} testscript.txt -o minimized.txt -a 3"),
        rule,
    ]
    .join("\n")
        + "\n"
}
