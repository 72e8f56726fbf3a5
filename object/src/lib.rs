//! This crate contains a high-level abstraction for reading DICOM
//! data sets out of in-memory byte buffers.
//! At this level, a data set is comparable to a dictionary of elements
//! indexed by attribute tag, with a few derived attribute accessors
//! on top. The end user should prefer this abstraction when consuming
//! DICOM files.
//!
//! Parsing a buffer can be done with ease via the function [`parse`],
//! or [`open_file`] when starting from a path:
//!
//! ```no_run
//! use dcmstream_dictionary::tags;
//! use dcmstream_object::open_file;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//!
//! let patient_name = obj.element(tags::PATIENT_NAME).unwrap().to_str()?;
//! let rows = obj.rows();
//! # Ok(())
//! # }
//! ```
//!
//! The decoder is deliberately lenient towards the truncated and
//! non-conformant files that real modalities produce: a mid-stream
//! problem ends the scan cleanly and the elements read so far remain
//! available, with the degradations reported in
//! [`Dataset::warnings`]. Only format-level failures (no `DICM` magic
//! code, or pixel data present without the geometry needed to
//! interpret it) surface as errors.

pub mod file;
pub mod frame;
pub mod mem;
pub mod uid;

use dcmstream_parser::DataSetReader;
use snafu::{ensure, Snafu};

pub use crate::file::open_file;
pub use crate::frame::extract_frame;
pub use crate::mem::Dataset;
pub use dcmstream_core::{DataElement, PrimitiveValue, Tag, VR};
pub use dcmstream_parser::Warning;

/// The number of unexamined preamble bytes at the start of a file.
pub const PREAMBLE_LENGTH: usize = 128;

/// The magic code expected right after the preamble.
const DICM_MAGIC_CODE: [u8; 4] = [b'D', b'I', b'C', b'M'];

/// The minimum byte count of any DICOM file:
/// the preamble plus the magic code.
const MINIMUM_FILE_LENGTH: usize = PREAMBLE_LENGTH + DICM_MAGIC_CODE.len();

/// An error surfaced when a buffer cannot be opened as a DICOM file.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ParseError {
    /// The bytes after the preamble are not the `DICM` magic code.
    #[snafu(display("not a DICOM file: no DICM code after the preamble"))]
    NotDicom,

    /// The buffer cannot hold the 128-byte preamble and magic code.
    #[snafu(display("buffer of {} bytes is too short for a DICOM file (need {})", len, needed))]
    BufferTooShort {
        /// the length of the given buffer
        len: usize,
        /// the minimum length of a DICOM file
        needed: usize,
    },

    /// Pixel data is present, but the geometry needed to interpret it
    /// (rows, columns, bits stored) is not. The metadata that was
    /// read can still be obtained through [`parse_lenient`].
    #[snafu(display("incomplete data set: missing {}", missing.join(", ")))]
    IncompleteDataset {
        /// the names of the missing mandatory attributes
        missing: Vec<&'static str>,
    },

    /// The file could not be read from storage.
    #[snafu(display("could not read file: {}", source))]
    ReadFile {
        /// the underlying I/O error
        source: std::io::Error,
    },
}

/// An error surfaced when a frame cannot be cut out of a pixel data
/// payload. Frame extraction failures are always explicit: returning
/// wrong image data would be worse than refusing.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum FrameError {
    /// The requested frame does not fit in the pixel data payload.
    #[snafu(display(
        "frame {} out of range: pixel data holds {} whole frame(s)",
        index,
        available
    ))]
    FrameOutOfRange {
        /// the requested frame index
        index: u32,
        /// how many whole frames the payload holds
        available: usize,
    },

    /// The data set carries no geometry to slice frames with.
    #[snafu(display("missing image geometry for frame extraction"))]
    MissingGeometry,
}

/// Check whether the buffer looks like a DICOM file:
/// at least 132 bytes, with the `DICM` magic code at offset 128.
///
/// This is the same gate that [`parse`] applies before reading any
/// element, exposed for cheap file discrimination.
pub fn is_dicom_file(buffer: &[u8]) -> bool {
    buffer.len() >= MINIMUM_FILE_LENGTH
        && buffer[PREAMBLE_LENGTH..MINIMUM_FILE_LENGTH] == DICM_MAGIC_CODE
}

/// Decode a whole DICOM file from a byte buffer.
///
/// On success the returned [`Dataset`] holds every element that could
/// be read, with the pixel data payload (if any) kept as raw binary.
/// Mid-stream truncation does not fail the parse; see
/// [`Dataset::warnings`] for anything that degraded along the way.
///
/// Fails with [`ParseError::IncompleteDataset`] when the file carries
/// pixel data but not the geometry to interpret it. Metadata-only
/// consumers can fall back to [`parse_lenient`] in that case.
pub fn parse(buffer: &[u8]) -> Result<Dataset, ParseError> {
    let dataset = parse_lenient(buffer)?;
    if dataset.pixel_data().is_some() {
        let missing = dataset.missing_geometry();
        ensure!(missing.is_empty(), IncompleteDatasetSnafu { missing });
    }
    Ok(dataset)
}

/// Decode a whole DICOM file from a byte buffer,
/// without requiring image geometry.
///
/// Unlike [`parse`], this succeeds even when pixel data is present
/// without rows/columns/bits-stored, for consumers that only care
/// about metadata. Check [`Dataset::is_valid`] before interpreting
/// pixels.
pub fn parse_lenient(buffer: &[u8]) -> Result<Dataset, ParseError> {
    ensure!(
        buffer.len() >= MINIMUM_FILE_LENGTH,
        BufferTooShortSnafu {
            len: buffer.len(),
            needed: MINIMUM_FILE_LENGTH,
        }
    );
    ensure!(
        buffer[PREAMBLE_LENGTH..MINIMUM_FILE_LENGTH] == DICM_MAGIC_CODE,
        NotDicomSnafu
    );
    let reader = DataSetReader::new(&buffer[MINIMUM_FILE_LENGTH..]);
    Ok(Dataset::from_reader(reader))
}

/// Fetch the declared transfer syntax UID of a file without decoding
/// the pixel data.
pub fn transfer_syntax_of(buffer: &[u8]) -> Option<String> {
    string_element_of(buffer, dcmstream_dictionary::tags::TRANSFER_SYNTAX_UID)
}

/// Fetch the SOP class UID of a file without decoding the pixel data.
pub fn sop_class_of(buffer: &[u8]) -> Option<String> {
    string_element_of(buffer, dcmstream_dictionary::tags::SOP_CLASS_UID)
}

/// Scan for one textual element, stopping short of the pixel data.
fn string_element_of(buffer: &[u8], tag: Tag) -> Option<String> {
    if !is_dicom_file(buffer) {
        return None;
    }
    let mut reader = DataSetReader::new(&buffer[MINIMUM_FILE_LENGTH..]).stop_before_pixel_data();
    while let Some(raw) = reader.next_element() {
        if raw.header.tag() == tag {
            let (value, _) =
                dcmstream_encoding::value::decode_value(raw.header.vr(), raw.data, raw.byte_order);
            return value.string().ok().map(str::to_owned);
        }
    }
    None
}
