//! Request body validation against declarative field constraints.
//!
//! A [`Schema`] is a static list of [`FieldRule`]s. Validating a JSON value
//! either yields a normalized object (defaults applied, unknown keys stripped)
//! ready for `serde_json::from_value`, or the full list of [`Violation`]s.

mod rule;
pub use rule::{DefaultValue, FieldKind, FieldRule, Schema};

mod violation;
pub use violation::{Violation, ViolationCode};
