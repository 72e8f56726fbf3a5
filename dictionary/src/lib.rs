//! This crate implements the standard DICOM attribute dictionary
//! and constants used by dcmstream.
//!
//! - [`data_element`] contains the run-time dictionary mapping attribute
//!   tags to their alias and standard value representation.
//!   It is provided as a singleton behind a unit type,
//!   initialized upon first use.
//!   The dictionary is consulted for human-readable diagnostics and for
//!   value representation inference under implicit VR transfer syntaxes;
//!   it never drives parsing control flow.
//! - [`tags`] maps attribute aliases to DICOM tags at compile time.
//! - [`uids`] declares the transfer syntax unique identifiers that the
//!   decoder recognizes.

pub mod data_element;
pub mod tags;
pub mod uids;

pub use data_element::{DictionaryEntry, StandardDictionary};
