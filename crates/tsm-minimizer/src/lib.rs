//! Tasmota script minimizer: identifier renaming and whitespace removal.
//!
//! Phases:
//! 1. Classify: section, comment and declaration roles of raw lines
//! 2. Collect: declared variables and subroutine names, plus counters
//! 3. Allocate: bind each name to the next free short name (a, b, .., aa)
//! 4. Rewrite: strip comments, rename identifiers, remove whitespace

pub mod allocate;
pub mod classify;
pub mod collect;
pub mod pipeline;
pub mod rewrite;
pub mod substitute;
pub mod whitespace;

pub use allocate::{RenameMap, ShortNames};
pub use collect::Collection;
pub use pipeline::{MinimizeResult, Minimizer, Warning};
