//! DICOM decoding primitives.
//!
//! This crate provides the byte-level building blocks used by the
//! dcmstream scanner: a pure cursor over an in-memory byte buffer,
//! data element header decoding for both value representation modes,
//! text decoding with character repertoire fallback, and primitive
//! value decoding.
//!
//! Every step here is a pure function of `(buffer, cursor)`:
//! reads return the decoded value together with the advanced cursor,
//! and out-of-bounds reads yield `None` instead of panicking.

pub mod cursor;
pub mod decode;
pub mod text;
pub mod transfer_syntax;
pub mod value;

pub use cursor::Cursor;
pub use decode::{decode_header, decode_tag};
pub use transfer_syntax::TransferSyntax;

// re-export byteordered, which is part of the public API
pub use byteordered::Endianness;
