//! This crate provides the element stream scanner of dcmstream:
//! the state machine that walks a DICOM data set after the file
//! preamble, tracks the transfer syntax discovered in the stream,
//! and yields raw `(header, value bytes)` pairs.
//!
//! The scanner is deliberately lenient. Production medical files are
//! frequently truncated or exported by non-conformant systems, so a
//! mid-stream problem ends the walk cleanly instead of failing the
//! whole read; everything collected up to that point remains usable.
//! Every degradation is recorded as a [`Warning`](read::Warning) and
//! logged through `tracing`.

pub mod read;

pub use read::{DataSetReader, RawElement, Warning};
