//! Exact aggregation of every numeric quantity in a JSON value tree.
//!
//! The crate exposes one operation: [`aggregate`] walks a
//! [`serde_json::Value`] and returns the sum of every number it can find as
//! an unbounded [`num_bigint::BigInt`] — JSON number literals directly, plus
//! any whitespace-delimited token inside a string (object keys included) that
//! parses under the grammar in [`numeric`].

pub mod aggregate;
pub mod numeric;

pub use aggregate::aggregate;
