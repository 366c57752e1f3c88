//! radref-report
//!
//! Report-fragment assembly: turns a matched category and the answers that
//! produced it into the copyable text shown under each calculator.

pub mod error;
pub mod format;
pub mod render;

pub use render::{assemble_report, check_template};
