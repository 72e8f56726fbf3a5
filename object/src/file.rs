//! Convenience functions for reading data sets straight from storage.

use crate::{parse, Dataset, ParseError, ReadFileSnafu};
use snafu::ResultExt;
use std::path::Path;

/// Read and decode a DICOM file from the given path.
///
/// This reads the whole file into memory and hands it to [`parse`];
/// discovering and iterating over collections of files remains the
/// caller's concern.
pub fn open_file<P>(path: P) -> Result<Dataset, ParseError>
where
    P: AsRef<Path>,
{
    let buffer = std::fs::read(path).context(ReadFileSnafu)?;
    parse(&buffer)
}
