//! # dcmstream
//!
//! This crate serves as a parent for the library crates in the
//! dcmstream project, a lenient streaming decoder for DICOM files.
//!
//! - For reading DICOM data sets out of buffers or files,
//!   see the [`object`] module; [`object::parse`] and
//!   [`object::open_file`] are the usual entry points, and
//!   [`object::extract_frame`] slices frames out of multi-frame
//!   pixel data.
//! - The [`core`] module contains the data types the other crates
//!   rely on: attribute tags ([`Tag`](dcmstream_core::Tag)), value
//!   representations ([`VR`](dcmstream_core::VR)), and in-memory
//!   values ([`PrimitiveValue`](dcmstream_core::PrimitiveValue))
//!   carried in data elements.
//! - The standard attribute dictionary is in [`dictionary`],
//!   with tag constants in [`dictionary::tags`] and transfer syntax
//!   identifiers in [`dictionary::uids`].
//! - [`encoding`] holds the byte-level decoding primitives and
//!   [`parser`] the lenient data set scanner, in case the high-level
//!   `object` API is unfit for a certain task.
//!
//! These modules are also available as crates which can be fetched
//! independently; they carry the `dcmstream-` prefix.

pub use dcmstream_core as core;
pub use dcmstream_dictionary as dictionary;
pub use dcmstream_encoding as encoding;
pub use dcmstream_object as object;
pub use dcmstream_parser as parser;

pub use dcmstream_object::{
    extract_frame, is_dicom_file, open_file, parse, parse_lenient, sop_class_of,
    transfer_syntax_of, Dataset, FrameError, ParseError, Warning,
};
