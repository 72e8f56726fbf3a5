//! Slicing individual frames out of a multi-frame pixel payload.

use crate::{FrameError, FrameOutOfRangeSnafu};
use snafu::ensure;

/// Slice one frame out of a native (uncompressed) pixel data payload.
///
/// A frame spans `columns × rows × ceil(bits_stored / 8)` bytes;
/// frame `index` starts at `index` times that size. The returned
/// slice borrows from the payload, so the operation performs no copy
/// and has no side effects.
///
/// Fails with [`FrameError::FrameOutOfRange`] whenever the requested
/// frame is not fully contained in the payload. Out-of-range requests
/// are never clamped: handing back wrong image data would be worse
/// than refusing.
pub fn extract_frame(
    pixel_data: &[u8],
    index: u32,
    columns: u32,
    rows: u32,
    bits_stored: u16,
) -> Result<&[u8], FrameError> {
    let bytes_per_pixel = (u32::from(bits_stored) + 7) / 8;
    let frame_size = columns as usize * rows as usize * bytes_per_pixel as usize;
    ensure!(
        frame_size > 0,
        FrameOutOfRangeSnafu {
            index,
            available: 0usize,
        }
    );
    let available = pixel_data.len() / frame_size;
    let offset = index as usize * frame_size;
    ensure!(
        offset + frame_size <= pixel_data.len(),
        FrameOutOfRangeSnafu { index, available }
    );
    Ok(&pixel_data[offset..offset + frame_size])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_are_disjoint_and_sized() {
        // 2 frames of 3x2 pixels, 16 bits stored
        let pixel: Vec<u8> = (0..24u8).collect();
        let first = extract_frame(&pixel, 0, 3, 2, 16).unwrap();
        let second = extract_frame(&pixel, 1, 3, 2, 16).unwrap();
        assert_eq!(first, &pixel[..12]);
        assert_eq!(second, &pixel[12..]);
    }

    #[test]
    fn out_of_range_is_refused() {
        let pixel = vec![0u8; 24];
        assert!(matches!(
            extract_frame(&pixel, 2, 3, 2, 16),
            Err(FrameError::FrameOutOfRange {
                index: 2,
                available: 2,
            })
        ));
    }

    #[test]
    fn partial_trailing_frame_is_refused() {
        // room for one frame and a half
        let pixel = vec![0u8; 18];
        assert!(extract_frame(&pixel, 0, 3, 2, 16).is_ok());
        assert!(extract_frame(&pixel, 1, 3, 2, 16).is_err());
    }

    #[test]
    fn bits_stored_rounds_up_to_whole_bytes() {
        // 12 stored bits occupy 2 bytes per pixel
        let pixel = vec![0u8; 8];
        let frame = extract_frame(&pixel, 0, 2, 2, 12).unwrap();
        assert_eq!(frame.len(), 8);
    }

    #[test]
    fn degenerate_geometry_is_refused() {
        let pixel = vec![0u8; 8];
        assert!(extract_frame(&pixel, 0, 0, 2, 16).is_err());
        assert!(extract_frame(&pixel, 0, 2, 2, 0).is_err());
    }
}
