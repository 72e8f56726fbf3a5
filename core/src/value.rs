//! This module includes a high level abstraction over a DICOM data
//! element's value.

use crate::error::{CastValueError, ConvertValueError};
use crate::header::Tag;
use itertools::Itertools;
use num_traits::NumCast;
use smallvec::SmallVec;
use std::borrow::Cow;

/// An aggregation of one or more values with the same type.
pub type C<T> = SmallVec<[T; 2]>;

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value may be one of the
/// enumerated types depending on its content and value representation.
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Used for zero-length elements and for values which
    /// failed to decode.
    Empty,

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of strings.
    /// Used for the remaining textual VRs (AE, AS, CS, DA, DS, DT, IS,
    /// LO, PN, SH, TM, UC, UI).
    Strs(C<String>),

    /// A sequence of attribute tags. Used specifically for AT.
    Tags(C<Tag>),

    /// A sequence of unsigned 8-bit integers.
    /// Used for OB and UN, and for any payload kept as raw binary.
    U8(C<u8>),

    /// A sequence of signed 16-bit integers. Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers. Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers. Used for SL.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers. Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers. Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers. Used for UV and OV.
    U64(C<u64>),

    /// A sequence of 32-bit floating point numbers. Used for FL and OF.
    F32(C<f32>),

    /// A sequence of 64-bit floating point numbers. Used for FD and OD.
    F64(C<f64>),
}

impl PrimitiveValue {
    /// Obtain the name of the variant held, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            PrimitiveValue::Empty => "empty",
            PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => "string",
            PrimitiveValue::Tags(_) => "tag",
            PrimitiveValue::U8(_) => "u8",
            PrimitiveValue::I16(_) => "i16",
            PrimitiveValue::U16(_) => "u16",
            PrimitiveValue::I32(_) => "i32",
            PrimitiveValue::U32(_) => "u32",
            PrimitiveValue::I64(_) => "i64",
            PrimitiveValue::U64(_) => "u64",
            PrimitiveValue::F32(_) => "f32",
            PrimitiveValue::F64(_) => "f64",
        }
    }

    /// Obtain the number of individual values.
    pub fn multiplicity(&self) -> u32 {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Str(_) => 1,
            PrimitiveValue::Strs(v) => v.len() as u32,
            PrimitiveValue::Tags(v) => v.len() as u32,
            PrimitiveValue::U8(v) => v.len() as u32,
            PrimitiveValue::I16(v) => v.len() as u32,
            PrimitiveValue::U16(v) => v.len() as u32,
            PrimitiveValue::I32(v) => v.len() as u32,
            PrimitiveValue::U32(v) => v.len() as u32,
            PrimitiveValue::I64(v) => v.len() as u32,
            PrimitiveValue::U64(v) => v.len() as u32,
            PrimitiveValue::F32(v) => v.len() as u32,
            PrimitiveValue::F64(v) => v.len() as u32,
        }
    }

    /// Check whether the value holds no data.
    pub fn is_empty(&self) -> bool {
        self.multiplicity() == 0
    }

    /// Retrieve the value as a single clean string.
    ///
    /// If the value contains multiple strings, they are concatenated
    /// (separated by `'\\'`) into an owned string.
    ///
    /// Returns an error if the value is not textual.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        match self {
            PrimitiveValue::Str(v) => Ok(Cow::from(v.as_str())),
            PrimitiveValue::Strs(v) => {
                if v.len() == 1 {
                    Ok(Cow::from(v[0].as_str()))
                } else {
                    Ok(Cow::from(v.iter().join("\\")))
                }
            }
            _ => Err(CastValueError {
                requested: "string",
                got: self.type_name(),
            }),
        }
    }

    /// Get the first string of a textual value without copying.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            PrimitiveValue::Str(v) => Ok(v),
            PrimitiveValue::Strs(v) if !v.is_empty() => Ok(&v[0]),
            _ => Err(CastValueError {
                requested: "string",
                got: self.type_name(),
            }),
        }
    }

    /// Retrieve the value as a slice of raw bytes,
    /// without conversion from other variants.
    pub fn as_bytes(&self) -> Result<&[u8], CastValueError> {
        match self {
            PrimitiveValue::U8(v) => Ok(v),
            _ => Err(CastValueError {
                requested: "u8",
                got: self.type_name(),
            }),
        }
    }

    /// Convert the first value into an integer,
    /// parsing textual values when needed.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
    {
        let requested = "integer";
        match self {
            PrimitiveValue::I16(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::U16(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::I32(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::U32(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::I64(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::U64(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::U8(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::F32(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::F64(v) if !v.is_empty() => cast(v[0], requested),
            PrimitiveValue::Str(_) | PrimitiveValue::Strs(_) => {
                parse_num(self.string().map_err(|_| ConvertValueError {
                    requested,
                    reason: "value is empty",
                })?)
                .ok_or(ConvertValueError {
                    requested,
                    reason: "text does not contain a number",
                })
                .and_then(|n: f64| cast(n, requested))
            }
            _ => Err(ConvertValueError {
                requested,
                reason: "value is not numeric",
            }),
        }
    }

    /// Convert the first value into a double-precision floating point
    /// number, parsing textual values when needed.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.to_int()
    }

    /// Convert the full value into a sequence of double-precision
    /// floating point numbers, parsing textual values when needed.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        let requested = "f64";
        match self {
            PrimitiveValue::I16(v) => Ok(v.iter().map(|&n| <f64 as From<_>>::from(n)).collect()),
            PrimitiveValue::U16(v) => Ok(v.iter().map(|&n| <f64 as From<_>>::from(n)).collect()),
            PrimitiveValue::I32(v) => Ok(v.iter().map(|&n| <f64 as From<_>>::from(n)).collect()),
            PrimitiveValue::U32(v) => Ok(v.iter().map(|&n| <f64 as From<_>>::from(n)).collect()),
            PrimitiveValue::I64(v) => Ok(v.iter().map(|&n| n as f64).collect()),
            PrimitiveValue::U64(v) => Ok(v.iter().map(|&n| n as f64).collect()),
            PrimitiveValue::F32(v) => Ok(v.iter().map(|&n| <f64 as From<_>>::from(n)).collect()),
            PrimitiveValue::F64(v) => Ok(v.to_vec()),
            PrimitiveValue::Str(s) => parse_num(s)
                .map(|n| vec![n])
                .ok_or(ConvertValueError {
                    requested,
                    reason: "text does not contain a number",
                }),
            PrimitiveValue::Strs(v) => v
                .iter()
                .map(|s| {
                    parse_num(s).ok_or(ConvertValueError {
                        requested,
                        reason: "text does not contain a number",
                    })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested,
                reason: "value is not numeric",
            }),
        }
    }
}

fn cast<T, U>(value: U, requested: &'static str) -> Result<T, ConvertValueError>
where
    T: NumCast,
    U: num_traits::ToPrimitive,
{
    NumCast::from(value).ok_or(ConvertValueError {
        requested,
        reason: "number out of range for the requested type",
    })
}

/// Numeric reading of one textual value.
/// Accepts the integer and decimal string forms used by IS and DS.
pub fn parse_num(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Strs(smallvec::smallvec![value.to_owned()])
    }
}

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Strs(smallvec::smallvec![value])
    }
}

impl From<u16> for PrimitiveValue {
    fn from(value: u16) -> Self {
        PrimitiveValue::U16(smallvec::smallvec![value])
    }
}

impl From<u32> for PrimitiveValue {
    fn from(value: u32) -> Self {
        PrimitiveValue::U32(smallvec::smallvec![value])
    }
}

impl From<f64> for PrimitiveValue {
    fn from(value: f64) -> Self {
        PrimitiveValue::F64(smallvec::smallvec![value])
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(value.into())
    }
}
