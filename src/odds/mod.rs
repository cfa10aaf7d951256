//! Drop-chance engine: single-item odds, whole-set odds, attempts needed for
//! near-certainty, time estimates and chart curves.
//!
//! Every function is a pure function of its arguments. Invalid inputs are
//! rejected with [`CalcError`] rather than producing NaN or infinity.

pub mod error;
pub mod logic;
pub mod types;

pub use error::*;
pub use logic::*;
pub use types::*;
