#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]

//! This is the core library of dcmstream,
//! containing the data types shared by every other crate in the project.
//!
//! - [`header`] holds the DICOM attribute tag, value representation,
//!   length and data element types.
//! - [`value`] holds the in-memory representation of primitive values,
//!   with awareness of multiplicity.
//! - [`error`] contains the value cast and conversion error types.
//!
//! [`error`]: ./error/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod error;
pub mod header;
pub mod value;

pub use error::{CastValueError, ConvertValueError};
pub use header::{DataElement, DataElementHeader, Length, Tag, VR};
pub use value::{PrimitiveValue, C};

// re-export crates that are part of the public API
pub use smallvec;
