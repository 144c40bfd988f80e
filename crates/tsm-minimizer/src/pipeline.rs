//! Minimization pipeline — collect, allocate, rewrite.

use crate::allocate::{self, RenameMap};
use crate::collect;
use crate::rewrite;
use std::fmt;
use tracing::debug;
use tsm_core::{Aggressiveness, MinimizerConfig, ReportLimits, Result, ScriptCounters};

/// A script exceeds what the target device handles comfortably.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Warning {
    OutputTooLarge { limit: usize },
    TooManyVariables { limit: usize },
    TooManyPermanent { limit: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutputTooLarge { limit } => write!(f, "Script is longer than {limit} byte!"),
            Self::TooManyVariables { limit } => write!(f, "More than {limit} variables used!"),
            Self::TooManyPermanent { limit } => write!(f, "More than {limit} permanent variables used!"),
        }
    }
}

/// Minimization result with statistics.
#[derive(Debug, Clone)]
pub struct MinimizeResult {
    /// Rewritten lines without terminators.
    pub lines: Vec<String>,
    pub input_len: usize,
    pub output_len: usize,
    pub counters: ScriptCounters,
    pub rename: RenameMap,
    pub aggressiveness: Aggressiveness,
}

impl MinimizeResult {
    /// The rewritten script, every line newline-terminated.
    pub fn output(&self) -> String {
        let mut out = String::with_capacity(self.output_len);
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Size saved relative to the input, in percent.
    pub fn reduction_pct(&self) -> f64 {
        if self.input_len == 0 {
            return 0.0;
        }
        100.0 - (100.0 * self.output_len as f64 / self.input_len as f64)
    }

    /// Limits this script exceeds, in report order.
    pub fn warnings(&self, limits: &ReportLimits) -> Vec<Warning> {
        let mut out = Vec::new();
        if self.output_len > limits.max_output_bytes {
            out.push(Warning::OutputTooLarge { limit: limits.max_output_bytes });
        }
        if self.counters.variables > limits.max_variables {
            out.push(Warning::TooManyVariables { limit: limits.max_variables });
        }
        if self.counters.permanent > limits.max_permanent {
            out.push(Warning::TooManyPermanent { limit: limits.max_permanent });
        }
        out
    }
}

/// The main minimizer pipeline.
pub struct Minimizer {
    pub config: MinimizerConfig,
}

impl Minimizer {
    pub fn new(config: MinimizerConfig) -> Self {
        Self { config }
    }

    pub fn with_aggressiveness(level: Aggressiveness) -> Self {
        Self::new(MinimizerConfig::default().with_aggressiveness(level))
    }

    /// Minimize a whole script.
    ///
    /// Fails before producing any output if a declaration is malformed or
    /// the short name space runs out.
    pub fn minimize(&self, source: &str) -> Result<MinimizeResult> {
        self.config.validate()?;
        let lines: Vec<&str> = source.lines().collect();
        let collection = collect::collect(&lines)?;
        let rename = allocate::allocate(&collection, &self.config)?;
        let rewritten = rewrite::rewrite(&lines, &rename, &self.config);

        debug!(
            input = source.len(),
            output = rewritten.output_len,
            level = %self.config.aggressiveness,
            "minimized script"
        );

        Ok(MinimizeResult {
            lines: rewritten.lines,
            input_len: source.len(),
            output_len: rewritten.output_len,
            counters: collection.counters,
            rename,
            aggressiveness: self.config.aggressiveness,
        })
    }
}

impl Default for Minimizer {
    fn default() -> Self {
        Self::new(MinimizerConfig::default())
    }
}
