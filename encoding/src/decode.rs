//! Data element header decoding for both value representation modes.
//!
//! The two encodings differ in whether a VR code is present on the
//! wire and in the width of the length field:
//!
//! - explicit VR: tag, 2-byte VR code, then either a 2-byte length or
//!   (for the long-length VR family) 2 reserved bytes and a 4-byte
//!   length (PS3.5 §7.1.2);
//! - implicit VR: tag, then a 4-byte length. The VR is inferred from
//!   the data dictionary for interpretation purposes only; it never
//!   affects how the stream is walked.
//!
//! Delimiter items (group 0xFFFE) carry no VR in either mode.

use crate::cursor::Cursor;
use crate::transfer_syntax::TransferSyntax;
use byteordered::Endianness;
use dcmstream_core::{DataElementHeader, Length, Tag, VR};
use dcmstream_dictionary::StandardDictionary;

/// Decode an attribute tag in the given byte order.
pub fn decode_tag(cursor: Cursor, byte_order: Endianness) -> Option<(Tag, Cursor)> {
    let (group, cursor) = cursor.read_u16(byte_order)?;
    let (element, cursor) = cursor.read_u16(byte_order)?;
    Some((Tag(group, element), cursor))
}

/// Decode a full data element header under the given transfer syntax.
///
/// Returns `None` when the remaining buffer cannot hold the header,
/// leaving the decision of how to proceed to the caller.
pub fn decode_header<'a>(
    cursor: Cursor<'a>,
    syntax: TransferSyntax,
) -> Option<(DataElementHeader, Cursor<'a>)> {
    let byte_order = syntax.byte_order;
    let (tag, cursor) = decode_tag(cursor, byte_order)?;

    // item and delimiter headers have no VR or reserved field
    if tag.group() == 0xFFFE {
        let (len, cursor) = cursor.read_u32(byte_order)?;
        return Some((DataElementHeader::new(tag, VR::UN, Length(len)), cursor));
    }

    if syntax.implicit_vr {
        let (len, cursor) = cursor.read_u32(byte_order)?;
        let vr = StandardDictionary::vr_of(tag);
        return Some((DataElementHeader::new(tag, vr, Length(len)), cursor));
    }

    let (vr_bytes, cursor) = cursor.take(2)?;
    let vr = VR::from_binary([vr_bytes[0], vr_bytes[1]]).unwrap_or(VR::UN);

    let (len, cursor) = if vr.is_long_length() {
        // 2 reserved bytes, then a 4-byte length
        let cursor = cursor.skip(2)?;
        cursor.read_u32(byte_order)?
    } else {
        let (len, cursor) = cursor.read_u16(byte_order)?;
        (u32::from(len), cursor)
    };

    Some((DataElementHeader::new(tag, vr, Length(len)), cursor))
}

#[cfg(test)]
mod tests {
    use super::*;

    // manually crafted data elements, explicit VR little endian
    #[rustfmt::skip]
    const RAW_EXPLICIT_LE: &[u8] = &[
        0x28, 0x00, 0x10, 0x00,     // (0028,0010) Rows
            b'U', b'S',             // VR: US
            0x02, 0x00,             // Length: 2
                0x00, 0x02,         // 512
        0xE0, 0x7F, 0x10, 0x00,     // (7FE0,0010) Pixel Data
            b'O', b'B',             // VR: OB
            0x00, 0x00,             // Reserved
            0x04, 0x00, 0x00, 0x00, // Length: 4
                0x01, 0x02, 0x03, 0x04,
    ];

    #[test]
    fn decode_explicit_le_headers() {
        let syntax = TransferSyntax::explicit_vr_little_endian();
        let cursor = Cursor::new(RAW_EXPLICIT_LE);

        let (header, cursor) = decode_header(cursor, syntax).unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(header.vr(), VR::US);
        assert_eq!(header.length(), Length(2));
        let cursor = cursor.skip(2).unwrap();

        let (header, cursor) = decode_header(cursor, syntax).unwrap();
        assert_eq!(header.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(header.vr(), VR::OB);
        assert_eq!(header.length(), Length(4));
        assert_eq!(cursor.remaining(), 4);
    }

    #[test]
    fn decode_implicit_le_header() {
        // (0028,0010) Rows, length 2, no VR on the wire
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x28, 0x00, 0x10, 0x00,
            0x02, 0x00, 0x00, 0x00,
            0x00, 0x02,
        ];
        let syntax = TransferSyntax {
            byte_order: Endianness::Little,
            implicit_vr: true,
            encapsulated: false,
        };
        let (header, cursor) = decode_header(Cursor::new(raw), syntax).unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0010));
        // inferred from the dictionary
        assert_eq!(header.vr(), VR::US);
        assert_eq!(header.length(), Length(2));
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn decode_implicit_le_unknown_tag_defaults_to_un() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x09, 0x00, 0x01, 0x10,
            0x02, 0x00, 0x00, 0x00,
            0xAB, 0xCD,
        ];
        let syntax = TransferSyntax {
            byte_order: Endianness::Little,
            implicit_vr: true,
            encapsulated: false,
        };
        let (header, _) = decode_header(Cursor::new(raw), syntax).unwrap();
        assert_eq!(header.vr(), VR::UN);
        assert_eq!(header.length(), Length(2));
    }

    #[test]
    fn decode_explicit_be_header() {
        // (0028,0011) Columns in big endian: length 2, value 512
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x00, 0x28, 0x00, 0x11,
            b'U', b'S',
            0x00, 0x02,
            0x02, 0x00,
        ];
        let syntax = TransferSyntax {
            byte_order: Endianness::Big,
            implicit_vr: false,
            encapsulated: false,
        };
        let (header, cursor) = decode_header(Cursor::new(raw), syntax).unwrap();
        assert_eq!(header.tag(), Tag(0x0028, 0x0011));
        assert_eq!(header.vr(), VR::US);
        assert_eq!(header.length(), Length(2));
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn unknown_vr_code_reads_as_un() {
        // a garbage VR code takes the reserved + 4-byte length form
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0x01, 0xC0, 0x34, 0x12, // (C001,1234) private
            b'?', b'?',             // not a known VR
            0x00, 0x00,             // reserved
            0x02, 0x00, 0x00, 0x00, // length 2
            0xAA, 0xBB,
        ];
        let syntax = TransferSyntax::explicit_vr_little_endian();
        let (header, cursor) = decode_header(Cursor::new(raw), syntax).unwrap();
        assert_eq!(header.vr(), VR::UN);
        assert_eq!(header.length(), Length(2));
        assert_eq!(cursor.remaining(), 2);
    }

    #[test]
    fn item_delimiters_have_no_vr() {
        #[rustfmt::skip]
        let raw: &[u8] = &[
            0xFE, 0xFF, 0x00, 0xE0,     // (FFFE,E000) Item
            0xFF, 0xFF, 0xFF, 0xFF,     // undefined length
        ];
        let syntax = TransferSyntax::explicit_vr_little_endian();
        let (header, cursor) = decode_header(Cursor::new(raw), syntax).unwrap();
        assert!(header.is_item());
        assert!(header.length().is_undefined());
        assert!(cursor.is_at_end());
    }

    #[test]
    fn truncated_header_returns_none() {
        let raw: &[u8] = &[0x28, 0x00, 0x10, 0x00, b'U'];
        let syntax = TransferSyntax::explicit_vr_little_endian();
        assert!(decode_header(Cursor::new(raw), syntax).is_none());
    }
}
