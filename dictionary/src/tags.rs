//! Tag constants and the attribute table behind the standard dictionary.
//!
//! The table covers the attributes this decoder and its consumers care
//! about: file meta information, patient/study/series identification,
//! acquisition geometry, windowing and rescale parameters, and pixel data.

use crate::data_element::DictionaryEntry;
use dcmstream_core::{Tag, VR};

/// File Meta Information Group Length (0002,0000)
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version (0002,0001)
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID (0002,0002)
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID (0002,0003)
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID (0002,0010)
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID (0002,0012)
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name (0002,0013)
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);

/// Specific Character Set (0008,0005)
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Image Type (0008,0008)
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// SOP Class UID (0008,0016)
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID (0008,0018)
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Study Date (0008,0020)
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date (0008,0021)
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Content Date (0008,0023)
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Study Time (0008,0030)
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Accession Number (0008,0050)
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality (0008,0060)
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Manufacturer (0008,0070)
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name (0008,0080)
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Referring Physician's Name (0008,0090)
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Study Description (0008,1030)
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Series Description (0008,103E)
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);

/// Patient's Name (0010,0010)
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID (0010,0020)
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Patient's Birth Date (0010,0030)
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Sex (0010,0040)
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient's Age (0010,1010)
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);

/// Body Part Examined (0018,0015)
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Slice Thickness (0018,0050)
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP (0018,0060)
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Spacing Between Slices (0018,0088)
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Frame Time (0018,1063)
pub const FRAME_TIME: Tag = Tag(0x0018, 0x1063);

/// Study Instance UID (0020,000D)
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID (0020,000E)
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID (0020,0010)
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number (0020,0011)
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Instance Number (0020,0013)
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Image Position (Patient) (0020,0032)
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (Patient) (0020,0037)
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Slice Location (0020,1041)
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);

/// Samples per Pixel (0028,0002)
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation (0028,0004)
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Number of Frames (0028,0008)
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows (0028,0010)
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns (0028,0011)
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing (0028,0030)
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Bits Allocated (0028,0100)
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored (0028,0101)
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit (0028,0102)
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation (0028,0103)
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Window Center (0028,1050)
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width (0028,1051)
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept (0028,1052)
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope (0028,1053)
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);

/// Pixel Data (7FE0,0010)
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// The attribute table indexed by the standard dictionary registry.
#[rustfmt::skip]
pub(crate) static ENTRIES: &[DictionaryEntry] = &[
    DictionaryEntry { tag: FILE_META_INFORMATION_GROUP_LENGTH, alias: "FileMetaInformationGroupLength", vr: VR::UL },
    DictionaryEntry { tag: FILE_META_INFORMATION_VERSION, alias: "FileMetaInformationVersion", vr: VR::OB },
    DictionaryEntry { tag: MEDIA_STORAGE_SOP_CLASS_UID, alias: "MediaStorageSOPClassUID", vr: VR::UI },
    DictionaryEntry { tag: MEDIA_STORAGE_SOP_INSTANCE_UID, alias: "MediaStorageSOPInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: TRANSFER_SYNTAX_UID, alias: "TransferSyntaxUID", vr: VR::UI },
    DictionaryEntry { tag: IMPLEMENTATION_CLASS_UID, alias: "ImplementationClassUID", vr: VR::UI },
    DictionaryEntry { tag: IMPLEMENTATION_VERSION_NAME, alias: "ImplementationVersionName", vr: VR::SH },
    DictionaryEntry { tag: SPECIFIC_CHARACTER_SET, alias: "SpecificCharacterSet", vr: VR::CS },
    DictionaryEntry { tag: IMAGE_TYPE, alias: "ImageType", vr: VR::CS },
    DictionaryEntry { tag: SOP_CLASS_UID, alias: "SOPClassUID", vr: VR::UI },
    DictionaryEntry { tag: SOP_INSTANCE_UID, alias: "SOPInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: STUDY_DATE, alias: "StudyDate", vr: VR::DA },
    DictionaryEntry { tag: SERIES_DATE, alias: "SeriesDate", vr: VR::DA },
    DictionaryEntry { tag: CONTENT_DATE, alias: "ContentDate", vr: VR::DA },
    DictionaryEntry { tag: STUDY_TIME, alias: "StudyTime", vr: VR::TM },
    DictionaryEntry { tag: ACCESSION_NUMBER, alias: "AccessionNumber", vr: VR::SH },
    DictionaryEntry { tag: MODALITY, alias: "Modality", vr: VR::CS },
    DictionaryEntry { tag: MANUFACTURER, alias: "Manufacturer", vr: VR::LO },
    DictionaryEntry { tag: INSTITUTION_NAME, alias: "InstitutionName", vr: VR::LO },
    DictionaryEntry { tag: REFERRING_PHYSICIAN_NAME, alias: "ReferringPhysicianName", vr: VR::PN },
    DictionaryEntry { tag: STUDY_DESCRIPTION, alias: "StudyDescription", vr: VR::LO },
    DictionaryEntry { tag: SERIES_DESCRIPTION, alias: "SeriesDescription", vr: VR::LO },
    DictionaryEntry { tag: PATIENT_NAME, alias: "PatientName", vr: VR::PN },
    DictionaryEntry { tag: PATIENT_ID, alias: "PatientID", vr: VR::LO },
    DictionaryEntry { tag: PATIENT_BIRTH_DATE, alias: "PatientBirthDate", vr: VR::DA },
    DictionaryEntry { tag: PATIENT_SEX, alias: "PatientSex", vr: VR::CS },
    DictionaryEntry { tag: PATIENT_AGE, alias: "PatientAge", vr: VR::AS },
    DictionaryEntry { tag: BODY_PART_EXAMINED, alias: "BodyPartExamined", vr: VR::CS },
    DictionaryEntry { tag: SLICE_THICKNESS, alias: "SliceThickness", vr: VR::DS },
    DictionaryEntry { tag: KVP, alias: "KVP", vr: VR::DS },
    DictionaryEntry { tag: SPACING_BETWEEN_SLICES, alias: "SpacingBetweenSlices", vr: VR::DS },
    DictionaryEntry { tag: FRAME_TIME, alias: "FrameTime", vr: VR::DS },
    DictionaryEntry { tag: STUDY_INSTANCE_UID, alias: "StudyInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: SERIES_INSTANCE_UID, alias: "SeriesInstanceUID", vr: VR::UI },
    DictionaryEntry { tag: STUDY_ID, alias: "StudyID", vr: VR::SH },
    DictionaryEntry { tag: SERIES_NUMBER, alias: "SeriesNumber", vr: VR::IS },
    DictionaryEntry { tag: INSTANCE_NUMBER, alias: "InstanceNumber", vr: VR::IS },
    DictionaryEntry { tag: IMAGE_POSITION_PATIENT, alias: "ImagePositionPatient", vr: VR::DS },
    DictionaryEntry { tag: IMAGE_ORIENTATION_PATIENT, alias: "ImageOrientationPatient", vr: VR::DS },
    DictionaryEntry { tag: SLICE_LOCATION, alias: "SliceLocation", vr: VR::DS },
    DictionaryEntry { tag: SAMPLES_PER_PIXEL, alias: "SamplesPerPixel", vr: VR::US },
    DictionaryEntry { tag: PHOTOMETRIC_INTERPRETATION, alias: "PhotometricInterpretation", vr: VR::CS },
    DictionaryEntry { tag: NUMBER_OF_FRAMES, alias: "NumberOfFrames", vr: VR::IS },
    DictionaryEntry { tag: ROWS, alias: "Rows", vr: VR::US },
    DictionaryEntry { tag: COLUMNS, alias: "Columns", vr: VR::US },
    DictionaryEntry { tag: PIXEL_SPACING, alias: "PixelSpacing", vr: VR::DS },
    DictionaryEntry { tag: BITS_ALLOCATED, alias: "BitsAllocated", vr: VR::US },
    DictionaryEntry { tag: BITS_STORED, alias: "BitsStored", vr: VR::US },
    DictionaryEntry { tag: HIGH_BIT, alias: "HighBit", vr: VR::US },
    DictionaryEntry { tag: PIXEL_REPRESENTATION, alias: "PixelRepresentation", vr: VR::US },
    DictionaryEntry { tag: WINDOW_CENTER, alias: "WindowCenter", vr: VR::DS },
    DictionaryEntry { tag: WINDOW_WIDTH, alias: "WindowWidth", vr: VR::DS },
    DictionaryEntry { tag: RESCALE_INTERCEPT, alias: "RescaleIntercept", vr: VR::DS },
    DictionaryEntry { tag: RESCALE_SLOPE, alias: "RescaleSlope", vr: VR::DS },
    DictionaryEntry { tag: PIXEL_DATA, alias: "PixelData", vr: VR::OW },
];
