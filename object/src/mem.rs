//! This module contains the in-memory DICOM data set
//! and the fold that assembles it from the element stream.

use crate::frame::extract_frame;
use crate::{uid, FrameError};
use dcmstream_core::{DataElement, PrimitiveValue, Tag, VR};
use dcmstream_dictionary::{tags, StandardDictionary};
use dcmstream_encoding::value::decode_value;
use dcmstream_parser::{DataSetReader, Warning};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// An in-memory DICOM data set: every element read from a file,
/// indexed by attribute tag, plus the warnings recorded while
/// scanning.
///
/// Repeated tags resolve last-write-wins. The pixel data element is
/// kept as raw binary regardless of its nominal value representation;
/// interpreting the payload is the frame extraction's concern.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    entries: BTreeMap<Tag, DataElement>,
    warnings: Vec<Warning>,
}

impl Dataset {
    /// Create an empty data set.
    pub fn new() -> Self {
        Dataset::default()
    }

    /// Fold the reader's element stream into a data set.
    pub(crate) fn from_reader(mut reader: DataSetReader<'_>) -> Self {
        let mut entries = BTreeMap::new();
        while let Some(raw) = reader.next_element() {
            let element = if raw.header.is_pixel_data() {
                // untyped payload, bypassing value decoding
                DataElement::from_parts(
                    raw.header,
                    PrimitiveValue::U8(SmallVec::from_slice(raw.data)),
                    None,
                )
            } else {
                let (value, numbers) = decode_value(raw.header.vr(), raw.data, raw.byte_order);
                if value.is_empty() {
                    // empty after trimming: treated as absent
                    continue;
                }
                DataElement::from_parts(raw.header, value, numbers)
            };
            entries.insert(element.tag(), element);
        }
        let mut dataset = Dataset {
            entries,
            warnings: reader.into_warnings(),
        };
        if !dataset.entries.is_empty() {
            dataset.synthesize_identifiers();
        }
        dataset
    }

    /// Insert an element, replacing any previous element with the
    /// same tag.
    pub fn put(&mut self, element: DataElement) {
        self.entries.insert(element.tag(), element);
    }

    /// Retrieve the element with the given tag, if present.
    pub fn element(&self, tag: Tag) -> Option<&DataElement> {
        self.entries.get(&tag)
    }

    /// Retrieve an element by its standard dictionary alias,
    /// such as `"PatientName"`.
    pub fn element_by_name(&self, name: &str) -> Option<&DataElement> {
        let entry = StandardDictionary::entry_by_name(name)?;
        self.element(entry.tag)
    }

    /// Iterate over the elements in tag order.
    pub fn iter(&self) -> impl Iterator<Item = (&Tag, &DataElement)> {
        self.entries.iter()
    }

    /// The number of elements in the data set.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the data set holds no elements.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The degradations recorded while this data set was read.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Check whether the mandatory image geometry
    /// (rows, columns, bits stored) is present.
    pub fn is_valid(&self) -> bool {
        self.missing_geometry().is_empty()
    }

    /// The names of the missing mandatory geometry attributes.
    pub fn missing_geometry(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.rows().is_none() {
            missing.push("Rows");
        }
        if self.columns().is_none() {
            missing.push("Columns");
        }
        if self.bits_stored().is_none() {
            missing.push("BitsStored");
        }
        missing
    }

    fn string_value(&self, tag: Tag) -> Option<&str> {
        self.element(tag).and_then(|e| e.value().string().ok())
    }

    fn u16_value(&self, tag: Tag) -> Option<u16> {
        self.element(tag).and_then(|e| e.to_int::<u16>().ok())
    }

    fn f64_value(&self, tag: Tag) -> Option<f64> {
        self.element(tag).and_then(|e| e.number())
    }

    /// Image height in pixels.
    pub fn rows(&self) -> Option<u16> {
        self.u16_value(tags::ROWS)
    }

    /// Image width in pixels.
    pub fn columns(&self) -> Option<u16> {
        self.u16_value(tags::COLUMNS)
    }

    /// Bits allocated per sample.
    pub fn bits_allocated(&self) -> Option<u16> {
        self.u16_value(tags::BITS_ALLOCATED)
    }

    /// Bits actually stored per sample.
    pub fn bits_stored(&self) -> Option<u16> {
        self.u16_value(tags::BITS_STORED)
    }

    /// 0 for unsigned samples, 1 for two's complement.
    pub fn pixel_representation(&self) -> Option<u16> {
        self.u16_value(tags::PIXEL_REPRESENTATION)
    }

    /// Samples per pixel; 1 when absent.
    pub fn samples_per_pixel(&self) -> u16 {
        self.u16_value(tags::SAMPLES_PER_PIXEL).unwrap_or(1)
    }

    /// Photometric interpretation, such as `MONOCHROME2` or `RGB`.
    pub fn photometric_interpretation(&self) -> Option<&str> {
        self.string_value(tags::PHOTOMETRIC_INTERPRETATION)
    }

    /// In-plane pixel spacing in millimeters, row spacing first.
    /// A single-valued element is taken as isotropic spacing.
    pub fn pixel_spacing(&self) -> Option<[f64; 2]> {
        let element = self.element(tags::PIXEL_SPACING)?;
        let numbers = element.numbers()?;
        match numbers.len() {
            0 => None,
            1 => Some([numbers[0], numbers[0]]),
            _ => Some([numbers[0], numbers[1]]),
        }
    }

    /// Slice thickness in millimeters.
    pub fn slice_thickness(&self) -> Option<f64> {
        self.f64_value(tags::SLICE_THICKNESS)
    }

    /// Window center values. When the file does not declare any,
    /// a mid-range default is derived from the stored sample depth.
    pub fn window_center(&self) -> Vec<f64> {
        self.window_values(tags::WINDOW_CENTER, |bits| f64::from(1u32 << (bits - 1)))
    }

    /// Window width values. When the file does not declare any,
    /// the full stored sample range is used.
    pub fn window_width(&self) -> Vec<f64> {
        self.window_values(tags::WINDOW_WIDTH, |bits| f64::from(1u32 << bits))
    }

    fn window_values(&self, tag: Tag, derive: impl Fn(u16) -> f64) -> Vec<f64> {
        if let Some(element) = self.element(tag) {
            if let Some(numbers) = element.numbers() {
                if !numbers.is_empty() {
                    return numbers.into_owned();
                }
            }
        }
        match self.bits_stored() {
            Some(bits) if (1..=31).contains(&bits) => vec![derive(bits)],
            _ => Vec::new(),
        }
    }

    /// Rescale slope; 1 when absent.
    pub fn rescale_slope(&self) -> f64 {
        self.f64_value(tags::RESCALE_SLOPE).unwrap_or(1.0)
    }

    /// Rescale intercept; 0 when absent.
    pub fn rescale_intercept(&self) -> f64 {
        self.f64_value(tags::RESCALE_INTERCEPT).unwrap_or(0.0)
    }

    /// Number of frames in the pixel data; 1 when absent or invalid.
    pub fn number_of_frames(&self) -> u32 {
        self.element(tags::NUMBER_OF_FRAMES)
            .and_then(|e| e.to_int::<i64>().ok())
            .filter(|&n| n >= 1)
            .map(|n| n as u32)
            .unwrap_or(1)
    }

    /// The declared transfer syntax UID.
    pub fn transfer_syntax_uid(&self) -> Option<&str> {
        self.string_value(tags::TRANSFER_SYNTAX_UID)
    }

    /// The SOP class UID.
    pub fn sop_class_uid(&self) -> Option<&str> {
        self.string_value(tags::SOP_CLASS_UID)
    }

    /// The SOP instance UID, possibly synthesized.
    pub fn sop_instance_uid(&self) -> Option<&str> {
        self.string_value(tags::SOP_INSTANCE_UID)
    }

    /// The study instance UID, possibly synthesized.
    pub fn study_instance_uid(&self) -> Option<&str> {
        self.string_value(tags::STUDY_INSTANCE_UID)
    }

    /// The series instance UID, possibly synthesized.
    pub fn series_instance_uid(&self) -> Option<&str> {
        self.string_value(tags::SERIES_INSTANCE_UID)
    }

    /// The patient identifier.
    pub fn patient_id(&self) -> Option<&str> {
        self.string_value(tags::PATIENT_ID)
    }

    /// The patient name, in its raw `Family^Given` form.
    pub fn patient_name(&self) -> Option<&str> {
        self.string_value(tags::PATIENT_NAME)
    }

    /// The study description.
    pub fn study_description(&self) -> Option<&str> {
        self.string_value(tags::STUDY_DESCRIPTION)
    }

    /// The series description.
    pub fn series_description(&self) -> Option<&str> {
        self.string_value(tags::SERIES_DESCRIPTION)
    }

    /// The study date, in its raw `YYYYMMDD` form.
    pub fn study_date(&self) -> Option<&str> {
        self.string_value(tags::STUDY_DATE)
    }

    /// The modality, such as `CT` or `MR`.
    pub fn modality(&self) -> Option<&str> {
        self.string_value(tags::MODALITY)
    }

    /// The instance number within the series.
    pub fn instance_number(&self) -> Option<i32> {
        self.element(tags::INSTANCE_NUMBER)
            .and_then(|e| e.to_int::<i32>().ok())
    }

    /// The raw pixel data payload, if any. Compressed payloads are
    /// handed out exactly as found in the file.
    pub fn pixel_data(&self) -> Option<&[u8]> {
        self.element(tags::PIXEL_DATA).and_then(|e| e.as_bytes().ok())
    }

    /// Slice one frame out of the pixel data using this data set's
    /// geometry.
    pub fn frame(&self, index: u32) -> Result<&[u8], FrameError> {
        let rows = self.rows().ok_or(FrameError::MissingGeometry)?;
        let columns = self.columns().ok_or(FrameError::MissingGeometry)?;
        let bits_stored = self.bits_stored().ok_or(FrameError::MissingGeometry)?;
        let pixel = self.pixel_data().ok_or(FrameError::FrameOutOfRange {
            index,
            available: 0,
        })?;
        extract_frame(
            pixel,
            index,
            u32::from(columns),
            u32::from(rows),
            bits_stored,
        )
    }

    /// Fill in any missing study/series/SOP instance identifier with a
    /// deterministic substitute, so that repeated parses of the same
    /// file group into the same study and series.
    fn synthesize_identifiers(&mut self) {
        let study_uid = match self.study_instance_uid() {
            Some(uid) => uid.to_owned(),
            None => {
                let uid = uid::synthetic_study_uid(
                    self.patient_id(),
                    self.study_description(),
                    self.study_date(),
                );
                tracing::debug!("study instance UID absent, using {}", uid);
                self.put(DataElement::new(
                    tags::STUDY_INSTANCE_UID,
                    VR::UI,
                    uid.clone(),
                ));
                uid
            }
        };
        let series_uid = match self.series_instance_uid() {
            Some(uid) => uid.to_owned(),
            None => {
                let uid = uid::synthetic_series_uid(
                    &study_uid,
                    self.modality(),
                    self.series_description(),
                );
                self.put(DataElement::new(
                    tags::SERIES_INSTANCE_UID,
                    VR::UI,
                    uid.clone(),
                ));
                uid
            }
        };
        if self.sop_instance_uid().is_none() {
            let uid = uid::synthetic_sop_instance_uid(&series_uid, self.instance_number());
            self.put(DataElement::new(tags::SOP_INSTANCE_UID, VR::UI, uid));
        }
    }
}
