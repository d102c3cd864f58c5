//! Series RLC parameter representation and validation.
//!
//! This module turns the untyped input bundle ([`RawParameters`]) into a
//! checked [`CircuitParameters`] record that the formulas in
//! [`crate::analysis`] can rely on.

mod types;
mod validate;
mod value;

pub use types::*;
pub use validate::{is_positive_finite, require_positive, validate};
pub use value::parse_value;
