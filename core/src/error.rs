//! Crate-level error types for value access and conversion.

use snafu::Snafu;

/// An error triggered when accessing a primitive value
/// as a variant it does not hold.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {}", requested, got))]
pub struct CastValueError {
    /// the name of the variant requested by the caller
    pub requested: &'static str,
    /// the name of the variant actually held by the value
    pub got: &'static str,
}

/// An error triggered when converting a primitive value
/// into a different type, such as parsing a number out of a string.
#[derive(Debug, Clone, PartialEq, Eq, Snafu)]
#[snafu(display("could not convert value to {}: {}", requested, reason))]
pub struct ConvertValueError {
    /// the name of the type requested by the caller
    pub requested: &'static str,
    /// what went wrong during the conversion
    pub reason: &'static str,
}
