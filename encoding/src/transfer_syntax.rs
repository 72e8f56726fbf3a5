//! Recognition of transfer syntax specifiers.
//!
//! The decoder only needs to know three things about a transfer
//! syntax: the byte order, whether value representations are explicit
//! on the wire, and whether the pixel data payload is encapsulated
//! (compressed). Compressed payloads are passed through unchanged;
//! codec implementations are out of scope.

use byteordered::Endianness;
use dcmstream_dictionary::uids;

/// The decoding properties of a recognized transfer syntax.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferSyntax {
    /// The byte order of the data set.
    pub byte_order: Endianness,
    /// Whether value representations are absent from the wire.
    pub implicit_vr: bool,
    /// Whether the pixel data payload is encapsulated in items
    /// (a compressed syntax).
    pub encapsulated: bool,
}

impl TransferSyntax {
    /// The properties of _Explicit VR Little Endian_,
    /// which also govern the file meta group of every file.
    pub const fn explicit_vr_little_endian() -> Self {
        TransferSyntax {
            byte_order: Endianness::Little,
            implicit_vr: false,
            encapsulated: false,
        }
    }

    /// Look up the declared transfer syntax UID.
    /// Returns `None` for unrecognized specifiers.
    pub fn from_uid(uid: &str) -> Option<Self> {
        match uid {
            uids::IMPLICIT_VR_LITTLE_ENDIAN => Some(TransferSyntax {
                byte_order: Endianness::Little,
                implicit_vr: true,
                encapsulated: false,
            }),
            uids::EXPLICIT_VR_LITTLE_ENDIAN | uids::DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN => {
                Some(TransferSyntax::explicit_vr_little_endian())
            }
            uids::EXPLICIT_VR_BIG_ENDIAN => Some(TransferSyntax {
                byte_order: Endianness::Big,
                implicit_vr: false,
                encapsulated: false,
            }),
            uids::JPEG_BASELINE
            | uids::JPEG_EXTENDED
            | uids::JPEG_LOSSLESS_SV1
            | uids::JPEG_LS_LOSSLESS
            | uids::JPEG_2000_LOSSLESS
            | uids::JPEG_2000
            | uids::RLE_LOSSLESS => Some(TransferSyntax {
                byte_order: Endianness::Little,
                implicit_vr: false,
                encapsulated: true,
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognized_syntaxes() {
        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2").unwrap();
        assert!(ts.implicit_vr);
        assert_eq!(ts.byte_order, Endianness::Little);
        assert!(!ts.encapsulated);

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.1").unwrap();
        assert!(!ts.implicit_vr);
        assert_eq!(ts.byte_order, Endianness::Little);

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.2").unwrap();
        assert_eq!(ts.byte_order, Endianness::Big);

        let ts = TransferSyntax::from_uid("1.2.840.10008.1.2.4.50").unwrap();
        assert!(ts.encapsulated);
    }

    #[test]
    fn unknown_syntax() {
        assert_eq!(TransferSyntax::from_uid("1.2.3.4"), None);
        assert_eq!(TransferSyntax::from_uid(""), None);
    }
}
