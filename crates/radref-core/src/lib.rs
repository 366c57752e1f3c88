//! radref-core
//!
//! Decision-table evaluation for clinical scoring schemes. Pure computation:
//! no I/O, no clock, no shared mutable state. A scheme is data (fields,
//! derived formulas, categories, ordered rules); this crate validates answer
//! sets against it and runs the rule table.

pub mod check;
pub mod error;
pub mod evaluate;
pub mod compute;
pub mod models;
pub mod validate;

pub use evaluate::evaluate;
pub use validate::{relevant_fields, validate};
