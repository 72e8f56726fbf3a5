//! This module contains the types required for interpreting DICOM data
//! elements: the attribute tag, the value representation, the element
//! length, and the element composite types.

use crate::error::{CastValueError, ConvertValueError};
use crate::value::{PrimitiveValue, C};
use num_traits::NumCast;
use std::borrow::Cow;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are ordered pairs of 16-bit unsigned integers
/// and are the key for every element lookup in a data set.
/// Both `(u16, u16)` and `[u16; 2]` can be efficiently converted
/// to this type.
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// A type for representing data element value length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length, which occurs on sequences and on
/// encapsulated pixel data.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value with the given number of bytes.
    #[inline]
    pub fn defined(len: u32) -> Self {
        debug_assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether the length is undefined (unknown a priori).
    #[inline]
    pub fn is_undefined(self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether the length is well defined (not undefined).
    #[inline]
    pub fn is_defined(self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if defined.
    #[inline]
    pub fn get(self) -> Option<u32> {
        if self.is_undefined() {
            None
        } else {
            Some(self.0)
        }
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("U/L")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// An enum type for a DICOM value representation.
#[derive(Debug, Eq, PartialEq, Hash, Copy, Clone, Ord, PartialOrd)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn as_str(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Check whether this VR is in the long-length family:
    /// in explicit encoding, its header carries a 16-bit reserved field
    /// followed by a 32-bit length, instead of a 16-bit length.
    /// (PS3.5 §7.1.2, Table 7.1-1)
    pub fn is_long_length(self) -> bool {
        use VR::*;
        matches!(self, OB | OD | OF | OL | OV | OW | SQ | UC | UN | UR | UT)
    }

    /// Check whether values of this VR hold character data,
    /// to be decoded through a text codec.
    pub fn is_textual(self) -> bool {
        use VR::*;
        matches!(
            self,
            AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT
        )
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation, as found on the wire or inferred
    pub vr: VR,
    /// Element value length
    pub len: Length,
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    #[inline]
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element's tag.
    #[inline]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Retrieve the element's value representation, which can be unknown.
    #[inline]
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Retrieve the element's value length.
    #[inline]
    pub fn length(&self) -> Length {
        self.len
    }

    /// Check whether this is the header of a sequence item.
    #[inline]
    pub fn is_item(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    #[inline]
    pub fn is_item_delimiter(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    #[inline]
    pub fn is_sequence_delimiter(&self) -> bool {
        self.tag == Tag(0xFFFE, 0xE0DD)
    }

    /// Check whether this is the header of the pixel data element.
    #[inline]
    pub fn is_pixel_data(&self) -> bool {
        self.tag == Tag(0x7FE0, 0x0010)
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// Aside from the decoded primitive value, the element retains the
/// numeric reading of a textual value when one exists, so that
/// consumers can use either form without re-parsing.
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement {
    header: DataElementHeader,
    value: PrimitiveValue,
    numbers: Option<C<f64>>,
}

impl DataElement {
    /// Create a data element from the given parts,
    /// with no numeric reading attached.
    pub fn new<T>(tag: Tag, vr: VR, value: T) -> Self
    where
        T: Into<PrimitiveValue>,
    {
        DataElement {
            header: DataElementHeader {
                tag,
                vr,
                len: Length(0),
            },
            value: value.into(),
            numbers: None,
        }
    }

    /// Create a data element from a decoded header, value and the
    /// numeric reading obtained at decoding time, if any.
    pub fn from_parts(
        header: DataElementHeader,
        value: PrimitiveValue,
        numbers: Option<C<f64>>,
    ) -> Self {
        DataElement {
            header,
            value,
            numbers,
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the element's tag.
    pub fn tag(&self) -> Tag {
        self.header.tag
    }

    /// Retrieve the value representation, which may be unknown or not
    /// applicable.
    pub fn vr(&self) -> VR {
        self.header.vr
    }

    /// Retrieve the value length as declared on the wire.
    pub fn length(&self) -> Length {
        self.header.len
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &PrimitiveValue {
        &self.value
    }

    /// Move the data value out of the element, discarding the rest.
    pub fn into_value(self) -> PrimitiveValue {
        self.value
    }

    /// Retrieve the numeric reading of the value, if one exists:
    /// either the numbers parsed out of a textual value at decoding time,
    /// or the value itself converted to `f64`s.
    pub fn numbers(&self) -> Option<Cow<[f64]>> {
        if let Some(numbers) = &self.numbers {
            return Some(Cow::from(&numbers[..]));
        }
        self.value.to_multi_float64().ok().map(Cow::from)
    }

    /// Retrieve the first numeric reading of the value, if one exists.
    pub fn number(&self) -> Option<f64> {
        self.numbers().and_then(|ns| ns.first().copied())
    }

    /// Retrieve the element's value as a single clean string,
    /// with no trailing whitespace.
    ///
    /// Returns an error if the value is not textual.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_str()
    }

    /// Retrieve and convert the first value of the data element
    /// into an integer, parsing textual values when needed.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: NumCast,
    {
        self.value.to_int()
    }

    /// Retrieve and convert the first value of the data element
    /// into a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.value.to_float64()
    }

    /// Retrieve the full value as raw bytes,
    /// without conversion from other variants.
    ///
    /// Returns an error if the value is not a byte sequence.
    pub fn as_bytes(&self) -> Result<&[u8], CastValueError> {
        self.value.as_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_ordering_and_format() {
        assert!(Tag(0x0008, 0x0018) < Tag(0x0010, 0x0010));
        assert!(Tag(0x0028, 0x0010) < Tag(0x0028, 0x0011));
        assert_eq!(Tag(0x7FE0, 0x0010).to_string(), "(7FE0,0010)");
        assert_eq!(Tag(0x0028, 0x0010), (0x0028, 0x0010));
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary([b'U', b'S']), Some(VR::US));
        assert_eq!(VR::from_binary([b'O', b'B']), Some(VR::OB));
        assert_eq!(VR::from_binary([b'?', b'?']), None);
    }

    #[test]
    fn vr_length_family() {
        for vr in [VR::OB, VR::OW, VR::OF, VR::SQ, VR::UN, VR::UC, VR::UR, VR::UT] {
            assert!(vr.is_long_length(), "{} should be long-length", vr);
        }
        for vr in [VR::AE, VR::US, VR::SS, VR::UI, VR::DS, VR::IS, VR::PN, VR::TM] {
            assert!(!vr.is_long_length(), "{} should be short-length", vr);
        }
    }

    #[test]
    fn length_undefined() {
        assert!(Length(0xFFFF_FFFF).is_undefined());
        assert_eq!(Length(0xFFFF_FFFF).get(), None);
        assert_eq!(Length(16).get(), Some(16));
        assert_eq!(Length::UNDEFINED.to_string(), "U/L");
    }
}
