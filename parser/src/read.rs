//! Lenient reading of a whole DICOM data set from a byte buffer.

use dcmstream_core::{DataElementHeader, Tag};
use dcmstream_dictionary::{tags, StandardDictionary};
use dcmstream_encoding::cursor::Cursor;
use dcmstream_encoding::decode::{decode_header, decode_tag};
use dcmstream_encoding::text::{decode_text, trim_text};
use dcmstream_encoding::transfer_syntax::TransferSyntax;
use dcmstream_encoding::Endianness;
use std::fmt;

/// One element as found on the wire: the decoded header and the value
/// byte span, borrowed from the source buffer.
#[derive(Debug, Clone, Copy)]
pub struct RawElement<'a> {
    /// The decoded element header.
    pub header: DataElementHeader,
    /// The value bytes. For a truncated pixel data element this holds
    /// whatever bytes were present, not the declared length.
    pub data: &'a [u8],
    /// The byte order in effect when this element was read,
    /// to be honored when decoding the value bytes.
    pub byte_order: Endianness,
}

/// A non-fatal problem found while walking a data set.
///
/// The scanner never fails mid-stream; it records one of these and
/// either skips the affected element or ends the walk, keeping every
/// element collected so far.
#[derive(Debug, Clone, PartialEq)]
pub enum Warning {
    /// The buffer ended in the middle of an element.
    PrematureEnd {
        /// position of the affected element, relative to the data set start
        offset: usize,
    },
    /// An element declared more value bytes than the buffer holds.
    OversizedLength {
        /// the affected element
        tag: Tag,
        /// the declared value length
        declared: u32,
        /// the bytes actually available
        available: usize,
    },
    /// Pixel data declared more bytes than the buffer holds;
    /// the payload was truncated to the available bytes.
    TruncatedPixelData {
        /// the declared value length
        declared: u32,
        /// the bytes actually kept
        available: usize,
    },
    /// Pixel data is encapsulated (compressed); the payload was passed
    /// through unchanged.
    EncapsulatedPixelData,
    /// A sequence element was skipped without decoding its items.
    SkippedSequence {
        /// the affected element
        tag: Tag,
    },
    /// A sequence could not be walked to its delimiter.
    MalformedSequence {
        /// the affected element
        tag: Tag,
    },
    /// The declared transfer syntax is recognized but its pixel data
    /// cannot be decoded here; the payload is passed through.
    UnsupportedTransferSyntax {
        /// the declared transfer syntax UID
        uid: String,
    },
    /// The declared transfer syntax is not recognized at all;
    /// scanning continues with the current state.
    UnrecognizedTransferSyntax {
        /// the declared transfer syntax UID
        uid: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Warning::PrematureEnd { offset } => {
                write!(f, "data set ends prematurely at offset {}", offset)
            }
            Warning::OversizedLength {
                tag,
                declared,
                available,
            } => write!(
                f,
                "element {} declares {} bytes but only {} remain",
                tag_with_name(*tag),
                declared,
                available
            ),
            Warning::TruncatedPixelData {
                declared,
                available,
            } => write!(
                f,
                "pixel data declares {} bytes but only {} remain; payload truncated",
                declared, available
            ),
            Warning::EncapsulatedPixelData => {
                f.write_str("encapsulated pixel data passed through undecoded")
            }
            Warning::SkippedSequence { tag } => {
                write!(f, "sequence {} skipped", tag_with_name(*tag))
            }
            Warning::MalformedSequence { tag } => {
                write!(f, "sequence {} is malformed; scan stopped", tag_with_name(*tag))
            }
            Warning::UnsupportedTransferSyntax { uid } => {
                write!(f, "transfer syntax {} is not decodable here", uid)
            }
            Warning::UnrecognizedTransferSyntax { uid } => {
                write!(f, "unrecognized transfer syntax {}", uid)
            }
        }
    }
}

/// Format a tag with its dictionary alias when one is known.
/// The dictionary is only consulted for diagnostics, never for
/// parsing decisions.
fn tag_with_name(tag: Tag) -> String {
    match StandardDictionary::name_of(tag) {
        Some(name) => format!("{} {}", tag, name),
        None => tag.to_string(),
    }
}

/// A lenient reader over the data set portion of a DICOM file
/// (everything after the 132-byte preamble and magic code).
///
/// Reading starts in _Explicit VR Little Endian_, which always governs
/// the file meta group. A transfer syntax declared in (0002,0010)
/// takes effect on the first element outside group 0002 and stays
/// fixed for the remainder of the stream.
#[derive(Debug)]
pub struct DataSetReader<'a> {
    cursor: Cursor<'a>,
    syntax: TransferSyntax,
    /// syntax declared in the meta group, not yet in effect
    pending_syntax: Option<TransferSyntax>,
    warnings: Vec<Warning>,
    read_pixel_data: bool,
    done: bool,
}

impl<'a> DataSetReader<'a> {
    /// Create a reader over the given data set bytes.
    pub fn new(data: &'a [u8]) -> Self {
        DataSetReader {
            cursor: Cursor::new(data),
            syntax: TransferSyntax::explicit_vr_little_endian(),
            pending_syntax: None,
            warnings: Vec::new(),
            read_pixel_data: true,
            done: false,
        }
    }

    /// Configure the reader to end the walk upon reaching the pixel
    /// data element, for cheap metadata-only queries.
    pub fn stop_before_pixel_data(mut self) -> Self {
        self.read_pixel_data = false;
        self
    }

    /// The warnings recorded so far.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consume the reader, returning all recorded warnings.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }

    fn warn(&mut self, warning: Warning) {
        tracing::warn!("{}", warning);
        self.warnings.push(warning);
    }

    /// Produce the next data element, skipping over whatever the
    /// leniency policy says to skip. Returns `None` once the walk has
    /// ended; the reader stays ended thereafter.
    pub fn next_element(&mut self) -> Option<RawElement<'a>> {
        loop {
            if self.done {
                return None;
            }
            // an element header takes at least 8 bytes
            if self.cursor.remaining() < 8 {
                if self.cursor.remaining() > 0 {
                    let offset = self.cursor.position();
                    self.warn(Warning::PrematureEnd { offset });
                }
                self.done = true;
                return None;
            }

            // a syntax declared in the meta group takes effect on the
            // first element outside group 0002
            if self.pending_syntax.is_some() {
                if let Some((tag, _)) = decode_tag(self.cursor, self.syntax.byte_order) {
                    if tag.group() != 0x0002 {
                        if let Some(syntax) = self.pending_syntax.take() {
                            self.syntax = syntax;
                        }
                    }
                }
            }

            let offset = self.cursor.position();
            let (header, cursor) = match decode_header(self.cursor, self.syntax) {
                Some(decoded) => decoded,
                None => {
                    self.warn(Warning::PrematureEnd { offset });
                    self.done = true;
                    return None;
                }
            };

            // stray delimiter items at the data set level carry no value
            if header.tag().group() == 0xFFFE {
                self.warn(Warning::MalformedSequence { tag: header.tag() });
                self.cursor = cursor;
                continue;
            }

            if header.is_pixel_data() {
                return self.read_pixel_element(header, cursor);
            }

            // sequences and other undefined-length elements are walked
            // structurally and not represented in the output
            if header.length().is_undefined() {
                match skip_sequence(cursor, self.syntax.byte_order) {
                    Some(cursor) => {
                        self.warn(Warning::SkippedSequence { tag: header.tag() });
                        self.cursor = cursor;
                        continue;
                    }
                    None => {
                        self.warn(Warning::MalformedSequence { tag: header.tag() });
                        self.done = true;
                        return None;
                    }
                }
            }

            let len = header.length().0 as usize;
            if len == 0 {
                self.cursor = cursor;
                continue;
            }
            if len > cursor.remaining() {
                self.warn(Warning::OversizedLength {
                    tag: header.tag(),
                    declared: header.length().0,
                    available: cursor.remaining(),
                });
                self.done = true;
                return None;
            }

            let (data, cursor) = match cursor.take(len) {
                Some(taken) => taken,
                None => {
                    self.done = true;
                    return None;
                }
            };
            // odd lengths are followed by one padding byte
            self.cursor = if len % 2 == 1 {
                cursor.skip(1).unwrap_or(cursor)
            } else {
                cursor
            };

            if header.tag() == tags::TRANSFER_SYNTAX_UID {
                self.declare_transfer_syntax(data);
            }

            return Some(RawElement {
                header,
                data,
                byte_order: self.syntax.byte_order,
            });
        }
    }

    fn read_pixel_element(
        &mut self,
        header: DataElementHeader,
        cursor: Cursor<'a>,
    ) -> Option<RawElement<'a>> {
        if !self.read_pixel_data {
            self.done = true;
            return None;
        }
        if header.length().is_undefined() {
            // encapsulated payload: pass the item stream through whole
            self.warn(Warning::EncapsulatedPixelData);
            let (data, cursor) = cursor.take_remaining();
            self.cursor = cursor;
            self.done = true;
            return Some(RawElement {
                header,
                data,
                byte_order: self.syntax.byte_order,
            });
        }
        let len = header.length().0 as usize;
        if len == 0 {
            self.cursor = cursor;
            return self.next_element();
        }
        if len > cursor.remaining() {
            // pixel bytes are never dropped while any exist
            self.warn(Warning::TruncatedPixelData {
                declared: header.length().0,
                available: cursor.remaining(),
            });
            let (data, cursor) = cursor.take_remaining();
            self.cursor = cursor;
            return Some(RawElement {
                header,
                data,
                byte_order: self.syntax.byte_order,
            });
        }
        let (data, cursor) = cursor.take(len)?;
        self.cursor = if len % 2 == 1 {
            cursor.skip(1).unwrap_or(cursor)
        } else {
            cursor
        };
        Some(RawElement {
            header,
            data,
            byte_order: self.syntax.byte_order,
        })
    }

    fn declare_transfer_syntax(&mut self, data: &[u8]) {
        let text = decode_text(data);
        let uid = trim_text(&text);
        match TransferSyntax::from_uid(uid) {
            Some(syntax) => {
                if syntax.encapsulated {
                    self.warn(Warning::UnsupportedTransferSyntax {
                        uid: uid.to_owned(),
                    });
                }
                self.pending_syntax = Some(syntax);
            }
            None => {
                self.warn(Warning::UnrecognizedTransferSyntax {
                    uid: uid.to_owned(),
                });
            }
        }
    }
}

impl<'a> Iterator for DataSetReader<'a> {
    type Item = RawElement<'a>;

    fn next(&mut self) -> Option<RawElement<'a>> {
        self.next_element()
    }
}

/// Walk an undefined-length sequence to its delimiter.
/// Returns the cursor past the delimiter, or `None` when the sequence
/// cannot be walked (which ends the scan leniently).
fn skip_sequence(mut cursor: Cursor, byte_order: Endianness) -> Option<Cursor> {
    loop {
        let (tag, next) = decode_tag(cursor, byte_order)?;
        let (len, next) = next.read_u32(byte_order)?;
        match (tag.group(), tag.element()) {
            // sequence delimiter: the sequence ends here
            (0xFFFE, 0xE0DD) => return Some(next),
            // item delimiter: tolerated, keep walking
            (0xFFFE, 0xE00D) => cursor = next,
            (0xFFFE, 0xE000) => {
                if len == 0xFFFF_FFFF {
                    // item of undefined length: would require nested
                    // data set traversal, bail out leniently
                    return None;
                }
                cursor = next.skip(len as usize)?;
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dcmstream_core::{Length, VR};

    fn elem_short(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        out.extend_from_slice(&(value.len() as u16).to_le_bytes());
        out.extend_from_slice(value);
        if value.len() % 2 == 1 {
            out.push(0x00);
        }
        out
    }

    fn elem_long(group: u16, element: u16, vr: &[u8; 2], value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(vr);
        out.extend_from_slice(&[0x00, 0x00]);
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        out.extend_from_slice(value);
        if value.len() % 2 == 1 {
            out.push(0x00);
        }
        out
    }

    fn elem_implicit(group: u16, element: u16, value: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        out.extend_from_slice(&group.to_le_bytes());
        out.extend_from_slice(&element.to_le_bytes());
        out.extend_from_slice(&(value.len() as u32).to_le_bytes());
        out.extend_from_slice(value);
        if value.len() % 2 == 1 {
            out.push(0x00);
        }
        out
    }

    fn meta_group(transfer_syntax: &str) -> Vec<u8> {
        elem_short(0x0002, 0x0010, b"UI", transfer_syntax.as_bytes())
    }

    #[test]
    fn walks_explicit_le_elements_in_order() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0060, b"CS", b"CT"));
        data.extend(elem_short(0x0028, 0x0010, b"US", &512u16.to_le_bytes()));
        data.extend(elem_long(0x7FE0, 0x0010, b"OB", &[1, 2, 3, 4]));

        let mut reader = DataSetReader::new(&data);
        let first = reader.next_element().unwrap();
        assert_eq!(first.header.tag(), Tag(0x0008, 0x0060));
        assert_eq!(first.header.vr(), VR::CS);
        assert_eq!(first.data, b"CT");

        let second = reader.next_element().unwrap();
        assert_eq!(second.header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(second.data, &512u16.to_le_bytes());

        let third = reader.next_element().unwrap();
        assert_eq!(third.header.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(third.data, &[1, 2, 3, 4]);

        assert!(reader.next_element().is_none());
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn odd_length_values_consume_a_padding_byte() {
        let mut data = Vec::new();
        // odd declared length, writer pads with one byte
        data.extend(elem_short(0x0008, 0x1030, b"LO", b"CHEST"));
        data.extend(elem_short(0x0028, 0x0010, b"US", &256u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let first = reader.next_element().unwrap();
        assert_eq!(first.header.length(), Length(5));
        assert_eq!(first.data, b"CHEST");

        // the padding byte must not desynchronize the next tag
        let second = reader.next_element().unwrap();
        assert_eq!(second.header.tag(), Tag(0x0028, 0x0010));
        assert!(reader.warnings().is_empty());
    }

    #[test]
    fn switches_to_implicit_vr_after_meta_group() {
        let mut data = Vec::new();
        data.extend(meta_group("1.2.840.10008.1.2"));
        data.extend(elem_implicit(0x0028, 0x0010, &512u16.to_le_bytes()));
        data.extend(elem_implicit(0x0028, 0x0011, &256u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let ts = reader.next_element().unwrap();
        assert_eq!(ts.header.tag(), Tag(0x0002, 0x0010));

        let rows = reader.next_element().unwrap();
        assert_eq!(rows.header.tag(), Tag(0x0028, 0x0010));
        // VR inferred from the dictionary
        assert_eq!(rows.header.vr(), VR::US);
        assert_eq!(rows.data, &512u16.to_le_bytes());

        let columns = reader.next_element().unwrap();
        assert_eq!(columns.header.tag(), Tag(0x0028, 0x0011));
        assert_eq!(columns.data, &256u16.to_le_bytes());
        assert!(reader.next_element().is_none());
    }

    #[test]
    fn switches_to_big_endian_after_meta_group() {
        let mut data = Vec::new();
        data.extend(meta_group("1.2.840.10008.1.2.2"));
        // (0028,0010), US, length 2, value 512 — all big endian
        data.extend_from_slice(&[0x00, 0x28, 0x00, 0x10, b'U', b'S', 0x00, 0x02, 0x02, 0x00]);

        let mut reader = DataSetReader::new(&data);
        let _ts = reader.next_element().unwrap();
        let rows = reader.next_element().unwrap();
        assert_eq!(rows.header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(rows.data, &[0x02, 0x00]);
        assert!(reader.next_element().is_none());
    }

    #[test]
    fn zero_length_elements_are_skipped() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0050, b"SH", b""));
        data.extend(elem_short(0x0028, 0x0010, b"US", &16u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let first = reader.next_element().unwrap();
        assert_eq!(first.header.tag(), Tag(0x0028, 0x0010));
        assert!(reader.next_element().is_none());
    }

    #[test]
    fn oversized_element_ends_the_walk() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0060, b"CS", b"MR"));
        // declares 512 bytes but provides 2
        data.extend_from_slice(&[0x30, 0x10, 0x30, 0x10, b'L', b'O', 0x00, 0x02, 0x41, 0x42]);

        let mut reader = DataSetReader::new(&data);
        assert!(reader.next_element().is_some());
        assert!(reader.next_element().is_none());
        assert_eq!(
            reader.warnings(),
            &[Warning::OversizedLength {
                tag: Tag(0x1030, 0x1030),
                declared: 512,
                available: 2,
            }]
        );
    }

    #[test]
    fn truncation_mid_header_keeps_prior_elements() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0028, 0x0010, b"US", &64u16.to_le_bytes()));
        data.extend_from_slice(&[0x28, 0x00, 0x11, 0x00, b'U']); // cut mid element

        let mut reader = DataSetReader::new(&data);
        assert!(reader.next_element().is_some());
        assert!(reader.next_element().is_none());
        assert!(matches!(
            reader.warnings(),
            [Warning::PrematureEnd { .. }]
        ));
    }

    #[test]
    fn truncated_pixel_data_is_kept_with_warning() {
        let mut data = Vec::new();
        data.extend_from_slice(&[0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00]);
        data.extend_from_slice(&64u32.to_le_bytes());
        data.extend_from_slice(&[0xAB; 10]); // only 10 of 64 declared bytes

        let mut reader = DataSetReader::new(&data);
        let pixel = reader.next_element().unwrap();
        assert_eq!(pixel.header.tag(), Tag(0x7FE0, 0x0010));
        assert_eq!(pixel.data.len(), 10);
        assert_eq!(
            reader.warnings(),
            &[Warning::TruncatedPixelData {
                declared: 64,
                available: 10,
            }]
        );
    }

    #[test]
    fn defined_length_sequences_pass_as_elements() {
        // a sequence with defined length is consumed like any element
        let mut data = Vec::new();
        let item: Vec<u8> = {
            let mut i = Vec::new();
            i.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0]);
            i.extend_from_slice(&8u32.to_le_bytes());
            i.extend(elem_implicit(0x0008, 0x0060, &[]));
            i
        };
        let mut sq = Vec::new();
        sq.extend_from_slice(&[0x08, 0x00, 0x3F, 0x10, b'S', b'Q', 0x00, 0x00]);
        sq.extend_from_slice(&(item.len() as u32).to_le_bytes());
        sq.extend(item);
        data.extend(sq);
        data.extend(elem_short(0x0028, 0x0010, b"US", &32u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let seq = reader.next_element().unwrap();
        assert_eq!(seq.header.vr(), VR::SQ);
        let rows = reader.next_element().unwrap();
        assert_eq!(rows.header.tag(), Tag(0x0028, 0x0010));
    }

    #[test]
    fn undefined_length_sequences_are_skipped() {
        let mut data = Vec::new();
        // SQ with undefined length: one empty item, then the delimiter
        data.extend_from_slice(&[0x08, 0x00, 0x3F, 0x10, b'S', b'Q', 0x00, 0x00]);
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        data.extend_from_slice(&[0xFE, 0xFF, 0x00, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        data.extend_from_slice(&[0xFE, 0xFF, 0xDD, 0xE0, 0x00, 0x00, 0x00, 0x00]);
        data.extend(elem_short(0x0028, 0x0010, b"US", &32u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let rows = reader.next_element().unwrap();
        assert_eq!(rows.header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(
            reader.warnings(),
            &[Warning::SkippedSequence {
                tag: Tag(0x0008, 0x103F),
            }]
        );
    }

    #[test]
    fn unterminated_sequence_ends_the_walk() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0060, b"CS", b"US"));
        data.extend_from_slice(&[0x08, 0x00, 0x3F, 0x10, b'S', b'Q', 0x00, 0x00]);
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        // garbage instead of an item header
        data.extend_from_slice(&[0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08]);

        let mut reader = DataSetReader::new(&data);
        assert!(reader.next_element().is_some());
        assert!(reader.next_element().is_none());
        assert_eq!(
            reader.warnings(),
            &[Warning::MalformedSequence {
                tag: Tag(0x0008, 0x103F),
            }]
        );
    }

    #[test]
    fn encapsulated_pixel_data_passes_through() {
        let mut data = Vec::new();
        data.extend(meta_group("1.2.840.10008.1.2.4.50"));
        // pixel data with undefined length: item stream passed through
        data.extend_from_slice(&[0xE0, 0x7F, 0x10, 0x00, b'O', b'B', 0x00, 0x00]);
        data.extend_from_slice(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let payload = [0xFE, 0xFF, 0x00, 0xE0, 0x02, 0x00, 0x00, 0x00, 0xAA, 0xBB];
        data.extend_from_slice(&payload);

        let mut reader = DataSetReader::new(&data);
        let _ts = reader.next_element().unwrap();
        let pixel = reader.next_element().unwrap();
        assert_eq!(pixel.data, &payload);
        assert!(reader.next_element().is_none());
        assert_eq!(
            reader.warnings(),
            &[
                Warning::UnsupportedTransferSyntax {
                    uid: "1.2.840.10008.1.2.4.50".to_owned(),
                },
                Warning::EncapsulatedPixelData,
            ]
        );
    }

    #[test]
    fn stop_before_pixel_data() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0016, b"UI", b"1.2.840.10008.5.1.4.1.1.2\0"));
        data.extend(elem_long(0x7FE0, 0x0010, b"OB", &[0u8; 32]));

        let mut reader = DataSetReader::new(&data).stop_before_pixel_data();
        let sop = reader.next_element().unwrap();
        assert_eq!(sop.header.tag(), Tag(0x0008, 0x0016));
        assert!(reader.next_element().is_none());
    }

    #[test]
    fn trailing_garbage_is_reported() {
        let mut data = Vec::new();
        data.extend(elem_short(0x0008, 0x0060, b"CS", b"CR"));
        data.extend_from_slice(&[0x01, 0x02, 0x03]);

        let mut reader = DataSetReader::new(&data);
        assert!(reader.next_element().is_some());
        assert!(reader.next_element().is_none());
        assert!(matches!(
            reader.warnings(),
            [Warning::PrematureEnd { .. }]
        ));
    }

    #[test]
    fn unrecognized_transfer_syntax_keeps_scanning() {
        let mut data = Vec::new();
        data.extend(meta_group("1.2.3.4.5"));
        data.extend(elem_short(0x0028, 0x0010, b"US", &16u16.to_le_bytes()));

        let mut reader = DataSetReader::new(&data);
        let _ts = reader.next_element().unwrap();
        let rows = reader.next_element().unwrap();
        assert_eq!(rows.header.tag(), Tag(0x0028, 0x0010));
        assert_eq!(
            reader.warnings(),
            &[Warning::UnrecognizedTransferSyntax {
                uid: "1.2.3.4.5".to_owned(),
            }]
        );
    }
}
