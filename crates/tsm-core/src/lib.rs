//! Shared types for the Tasmota script minimizer.

pub mod config;
pub mod error;
pub mod reserved;
pub mod types;

pub use config::{MinimizerConfig, ReportLimits};
pub use error::{MinimizeError, Result};
pub use types::{Aggressiveness, Identifier, IdentifierKind, ScriptCounters, Section};

#[cfg(test)]
mod tests;
