//! Primitive value decoding.
//!
//! Turns a raw byte span plus its (explicit or inferred) value
//! representation into a [`PrimitiveValue`], honoring the active byte
//! order for binary numbers and applying the text trimming rules for
//! character data. Decoding never fails: malformed input degrades to
//! an empty value or to raw bytes.

use crate::text::{decode_text, split_values, trim_text};
use byteordered::byteorder::{BigEndian, ByteOrder, LittleEndian};
use byteordered::Endianness;
use dcmstream_core::value::parse_num;
use dcmstream_core::{PrimitiveValue, Tag, C, VR};
use smallvec::SmallVec;

/// Values above this size are retained as raw binary instead of being
/// decoded as text, so that memory-dense elements are not mangled by
/// a character decoding pass. Pixel data never reaches this path.
pub const INLINE_TEXT_LIMIT: usize = 64 * 1024;

macro_rules! chunked {
    ($data:expr, $n:expr, $byte_order:expr, $le:path, $be:path) => {
        $data
            .chunks_exact($n)
            .map(|chunk| match $byte_order {
                Endianness::Little => $le(chunk),
                Endianness::Big => $be(chunk),
            })
            .collect()
    };
}

/// Decode a value span according to its value representation.
///
/// Returns the decoded value together with the numeric reading of a
/// textual value, when the text parses as numbers. A trailing partial
/// item in a binary numeric value is ignored.
pub fn decode_value(
    vr: VR,
    data: &[u8],
    byte_order: Endianness,
) -> (PrimitiveValue, Option<C<f64>>) {
    if data.is_empty() {
        return (PrimitiveValue::Empty, None);
    }
    use VR::*;
    let value = match vr {
        US => PrimitiveValue::U16(chunked!(
            data, 2, byte_order, LittleEndian::read_u16, BigEndian::read_u16
        )),
        OW => PrimitiveValue::U16(chunked!(
            data, 2, byte_order, LittleEndian::read_u16, BigEndian::read_u16
        )),
        SS => PrimitiveValue::I16(chunked!(
            data, 2, byte_order, LittleEndian::read_i16, BigEndian::read_i16
        )),
        UL | OL => PrimitiveValue::U32(chunked!(
            data, 4, byte_order, LittleEndian::read_u32, BigEndian::read_u32
        )),
        SL => PrimitiveValue::I32(chunked!(
            data, 4, byte_order, LittleEndian::read_i32, BigEndian::read_i32
        )),
        UV | OV => PrimitiveValue::U64(chunked!(
            data, 8, byte_order, LittleEndian::read_u64, BigEndian::read_u64
        )),
        SV => PrimitiveValue::I64(chunked!(
            data, 8, byte_order, LittleEndian::read_i64, BigEndian::read_i64
        )),
        FL | OF => PrimitiveValue::F32(chunked!(
            data, 4, byte_order, LittleEndian::read_f32, BigEndian::read_f32
        )),
        FD | OD => PrimitiveValue::F64(chunked!(
            data, 8, byte_order, LittleEndian::read_f64, BigEndian::read_f64
        )),
        AT => PrimitiveValue::Tags(decode_tags(data, byte_order)),
        OB | UN => PrimitiveValue::U8(SmallVec::from_slice(data)),
        // sequence values are handled structurally by the scanner,
        // not through this path
        SQ => PrimitiveValue::Empty,
        AE | AS | CS | DA | DS | DT | IS | LO | LT | PN | SH | ST | TM | UC | UI | UR | UT => {
            return decode_text_value(vr, data);
        }
    };
    (value, None)
}

fn decode_tags(data: &[u8], byte_order: Endianness) -> C<Tag> {
    data.chunks_exact(4)
        .map(|chunk| match byte_order {
            Endianness::Little => Tag(
                LittleEndian::read_u16(&chunk[0..2]),
                LittleEndian::read_u16(&chunk[2..4]),
            ),
            Endianness::Big => Tag(
                BigEndian::read_u16(&chunk[0..2]),
                BigEndian::read_u16(&chunk[2..4]),
            ),
        })
        .collect()
}

fn decode_text_value(vr: VR, data: &[u8]) -> (PrimitiveValue, Option<C<f64>>) {
    if data.len() > INLINE_TEXT_LIMIT {
        return (PrimitiveValue::U8(SmallVec::from_slice(data)), None);
    }
    let text = decode_text(data);

    // ST, LT, UT and UR are never multi-valued
    if matches!(vr, VR::ST | VR::LT | VR::UT | VR::UR) {
        let trimmed = trim_text(&text);
        if trimmed.is_empty() {
            return (PrimitiveValue::Empty, None);
        }
        let numbers = parse_num(trimmed).map(|n| smallvec::smallvec![n]);
        return (PrimitiveValue::Str(trimmed.to_owned()), numbers);
    }

    let values: C<String> = split_values(&text).map(str::to_owned).collect();
    if values.iter().all(|v| v.is_empty()) {
        return (PrimitiveValue::Empty, None);
    }
    let numbers: Option<C<f64>> = values.iter().map(|v| parse_num(v)).collect();
    (PrimitiveValue::Strs(values), numbers)
}
