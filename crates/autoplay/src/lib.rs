//! Baseline legal-move search over the core round API. Finds a legal
//! answer, not a good one.

mod action;
mod error;
mod search;
mod trace;

pub use action::*;
pub use error::*;
pub use search::*;
pub use trace::*;
