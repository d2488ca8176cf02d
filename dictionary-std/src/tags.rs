//! Data element tag constants and their dictionary records.
//!
//! This module provides a constant for each supported attribute,
//! named after the attribute's keyword in upper snake case,
//! plus the table of records backing the run-time dictionary.
//! The listing is curated from [DICOM PS3.6]:
//! it covers the command and file meta groups in full,
//! the attributes ruling pixel data interpretation,
//! and the most common identifying and descriptive attributes
//! of patients, studies, series, and instances.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html

use medicom_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*};
use medicom_core::Tag;
use medicom_core::VR::*;

/// Command Group Length
pub const COMMAND_GROUP_LENGTH: Tag = Tag(0x0000, 0x0000);
/// Affected SOP Class UID
pub const AFFECTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0002);
/// Requested SOP Class UID
pub const REQUESTED_SOP_CLASS_UID: Tag = Tag(0x0000, 0x0003);
/// Command Field
pub const COMMAND_FIELD: Tag = Tag(0x0000, 0x0100);
/// Message ID
pub const MESSAGE_ID: Tag = Tag(0x0000, 0x0110);
/// Message ID Being Responded To
pub const MESSAGE_ID_BEING_RESPONDED_TO: Tag = Tag(0x0000, 0x0120);
/// Command Data Set Type
pub const COMMAND_DATA_SET_TYPE: Tag = Tag(0x0000, 0x0800);
/// Status
pub const STATUS: Tag = Tag(0x0000, 0x0900);
/// Affected SOP Instance UID
pub const AFFECTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1000);
/// Requested SOP Instance UID
pub const REQUESTED_SOP_INSTANCE_UID: Tag = Tag(0x0000, 0x1001);

/// File Meta Information Group Length
pub const FILE_META_INFORMATION_GROUP_LENGTH: Tag = Tag(0x0002, 0x0000);
/// File Meta Information Version
pub const FILE_META_INFORMATION_VERSION: Tag = Tag(0x0002, 0x0001);
/// Media Storage SOP Class UID
pub const MEDIA_STORAGE_SOP_CLASS_UID: Tag = Tag(0x0002, 0x0002);
/// Media Storage SOP Instance UID
pub const MEDIA_STORAGE_SOP_INSTANCE_UID: Tag = Tag(0x0002, 0x0003);
/// Transfer Syntax UID
pub const TRANSFER_SYNTAX_UID: Tag = Tag(0x0002, 0x0010);
/// Implementation Class UID
pub const IMPLEMENTATION_CLASS_UID: Tag = Tag(0x0002, 0x0012);
/// Implementation Version Name
pub const IMPLEMENTATION_VERSION_NAME: Tag = Tag(0x0002, 0x0013);
/// Source Application Entity Title
pub const SOURCE_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0016);
/// Sending Application Entity Title
pub const SENDING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0017);
/// Receiving Application Entity Title
pub const RECEIVING_APPLICATION_ENTITY_TITLE: Tag = Tag(0x0002, 0x0018);
/// Private Information Creator UID
pub const PRIVATE_INFORMATION_CREATOR_UID: Tag = Tag(0x0002, 0x0100);
/// Private Information
pub const PRIVATE_INFORMATION: Tag = Tag(0x0002, 0x0102);

/// Specific Character Set
pub const SPECIFIC_CHARACTER_SET: Tag = Tag(0x0008, 0x0005);
/// Image Type
pub const IMAGE_TYPE: Tag = Tag(0x0008, 0x0008);
/// SOP Class UID
pub const SOP_CLASS_UID: Tag = Tag(0x0008, 0x0016);
/// SOP Instance UID
pub const SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x0018);
/// Study Date
pub const STUDY_DATE: Tag = Tag(0x0008, 0x0020);
/// Series Date
pub const SERIES_DATE: Tag = Tag(0x0008, 0x0021);
/// Acquisition Date
pub const ACQUISITION_DATE: Tag = Tag(0x0008, 0x0022);
/// Content Date
pub const CONTENT_DATE: Tag = Tag(0x0008, 0x0023);
/// Acquisition DateTime
pub const ACQUISITION_DATE_TIME: Tag = Tag(0x0008, 0x002A);
/// Study Time
pub const STUDY_TIME: Tag = Tag(0x0008, 0x0030);
/// Series Time
pub const SERIES_TIME: Tag = Tag(0x0008, 0x0031);
/// Acquisition Time
pub const ACQUISITION_TIME: Tag = Tag(0x0008, 0x0032);
/// Content Time
pub const CONTENT_TIME: Tag = Tag(0x0008, 0x0033);
/// Accession Number
pub const ACCESSION_NUMBER: Tag = Tag(0x0008, 0x0050);
/// Modality
pub const MODALITY: Tag = Tag(0x0008, 0x0060);
/// Conversion Type
pub const CONVERSION_TYPE: Tag = Tag(0x0008, 0x0064);
/// Manufacturer
pub const MANUFACTURER: Tag = Tag(0x0008, 0x0070);
/// Institution Name
pub const INSTITUTION_NAME: Tag = Tag(0x0008, 0x0080);
/// Referring Physician's Name
pub const REFERRING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x0090);
/// Station Name
pub const STATION_NAME: Tag = Tag(0x0008, 0x1010);
/// Study Description
pub const STUDY_DESCRIPTION: Tag = Tag(0x0008, 0x1030);
/// Series Description
pub const SERIES_DESCRIPTION: Tag = Tag(0x0008, 0x103E);
/// Performing Physician's Name
pub const PERFORMING_PHYSICIAN_NAME: Tag = Tag(0x0008, 0x1050);
/// Operators' Name
pub const OPERATORS_NAME: Tag = Tag(0x0008, 0x1070);
/// Manufacturer's Model Name
pub const MANUFACTURER_MODEL_NAME: Tag = Tag(0x0008, 0x1090);
/// Referenced Study Sequence
pub const REFERENCED_STUDY_SEQUENCE: Tag = Tag(0x0008, 0x1110);
/// Referenced Series Sequence
pub const REFERENCED_SERIES_SEQUENCE: Tag = Tag(0x0008, 0x1115);
/// Referenced Image Sequence
pub const REFERENCED_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x1140);
/// Referenced SOP Class UID
pub const REFERENCED_SOP_CLASS_UID: Tag = Tag(0x0008, 0x1150);
/// Referenced SOP Instance UID
pub const REFERENCED_SOP_INSTANCE_UID: Tag = Tag(0x0008, 0x1155);
/// Source Image Sequence
pub const SOURCE_IMAGE_SEQUENCE: Tag = Tag(0x0008, 0x2112);
/// Derivation Code Sequence
pub const DERIVATION_CODE_SEQUENCE: Tag = Tag(0x0008, 0x9215);

/// Patient's Name
pub const PATIENT_NAME: Tag = Tag(0x0010, 0x0010);
/// Patient ID
pub const PATIENT_ID: Tag = Tag(0x0010, 0x0020);
/// Patient's Birth Date
pub const PATIENT_BIRTH_DATE: Tag = Tag(0x0010, 0x0030);
/// Patient's Sex
pub const PATIENT_SEX: Tag = Tag(0x0010, 0x0040);
/// Patient's Age
pub const PATIENT_AGE: Tag = Tag(0x0010, 0x1010);
/// Patient's Size
pub const PATIENT_SIZE: Tag = Tag(0x0010, 0x1020);
/// Patient's Weight
pub const PATIENT_WEIGHT: Tag = Tag(0x0010, 0x1030);
/// Pregnancy Status
pub const PREGNANCY_STATUS: Tag = Tag(0x0010, 0x21C0);
/// Patient Comments
pub const PATIENT_COMMENTS: Tag = Tag(0x0010, 0x4000);

/// Body Part Examined
pub const BODY_PART_EXAMINED: Tag = Tag(0x0018, 0x0015);
/// Slice Thickness
pub const SLICE_THICKNESS: Tag = Tag(0x0018, 0x0050);
/// KVP
pub const KVP: Tag = Tag(0x0018, 0x0060);
/// Spacing Between Slices
pub const SPACING_BETWEEN_SLICES: Tag = Tag(0x0018, 0x0088);
/// Software Versions
pub const SOFTWARE_VERSIONS: Tag = Tag(0x0018, 0x1020);
/// Protocol Name
pub const PROTOCOL_NAME: Tag = Tag(0x0018, 0x1030);
/// X-Ray Tube Current
pub const X_RAY_TUBE_CURRENT: Tag = Tag(0x0018, 0x1151);
/// Patient Position
pub const PATIENT_POSITION: Tag = Tag(0x0018, 0x5100);

/// Study Instance UID
pub const STUDY_INSTANCE_UID: Tag = Tag(0x0020, 0x000D);
/// Series Instance UID
pub const SERIES_INSTANCE_UID: Tag = Tag(0x0020, 0x000E);
/// Study ID
pub const STUDY_ID: Tag = Tag(0x0020, 0x0010);
/// Series Number
pub const SERIES_NUMBER: Tag = Tag(0x0020, 0x0011);
/// Acquisition Number
pub const ACQUISITION_NUMBER: Tag = Tag(0x0020, 0x0012);
/// Instance Number
pub const INSTANCE_NUMBER: Tag = Tag(0x0020, 0x0013);
/// Patient Orientation
pub const PATIENT_ORIENTATION: Tag = Tag(0x0020, 0x0020);
/// Image Position (Patient)
pub const IMAGE_POSITION_PATIENT: Tag = Tag(0x0020, 0x0032);
/// Image Orientation (Patient)
pub const IMAGE_ORIENTATION_PATIENT: Tag = Tag(0x0020, 0x0037);
/// Frame of Reference UID
pub const FRAME_OF_REFERENCE_UID: Tag = Tag(0x0020, 0x0052);
/// Slice Location
pub const SLICE_LOCATION: Tag = Tag(0x0020, 0x1041);
/// Image Comments
pub const IMAGE_COMMENTS: Tag = Tag(0x0020, 0x4000);

/// Samples per Pixel
pub const SAMPLES_PER_PIXEL: Tag = Tag(0x0028, 0x0002);
/// Photometric Interpretation
pub const PHOTOMETRIC_INTERPRETATION: Tag = Tag(0x0028, 0x0004);
/// Planar Configuration
pub const PLANAR_CONFIGURATION: Tag = Tag(0x0028, 0x0006);
/// Number of Frames
pub const NUMBER_OF_FRAMES: Tag = Tag(0x0028, 0x0008);
/// Rows
pub const ROWS: Tag = Tag(0x0028, 0x0010);
/// Columns
pub const COLUMNS: Tag = Tag(0x0028, 0x0011);
/// Pixel Spacing
pub const PIXEL_SPACING: Tag = Tag(0x0028, 0x0030);
/// Bits Allocated
pub const BITS_ALLOCATED: Tag = Tag(0x0028, 0x0100);
/// Bits Stored
pub const BITS_STORED: Tag = Tag(0x0028, 0x0101);
/// High Bit
pub const HIGH_BIT: Tag = Tag(0x0028, 0x0102);
/// Pixel Representation
pub const PIXEL_REPRESENTATION: Tag = Tag(0x0028, 0x0103);
/// Smallest Image Pixel Value
pub const SMALLEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0106);
/// Largest Image Pixel Value
pub const LARGEST_IMAGE_PIXEL_VALUE: Tag = Tag(0x0028, 0x0107);
/// Window Center
pub const WINDOW_CENTER: Tag = Tag(0x0028, 0x1050);
/// Window Width
pub const WINDOW_WIDTH: Tag = Tag(0x0028, 0x1051);
/// Rescale Intercept
pub const RESCALE_INTERCEPT: Tag = Tag(0x0028, 0x1052);
/// Rescale Slope
pub const RESCALE_SLOPE: Tag = Tag(0x0028, 0x1053);
/// Rescale Type
pub const RESCALE_TYPE: Tag = Tag(0x0028, 0x1054);
/// Red Palette Color Lookup Table Descriptor
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1101);
/// Green Palette Color Lookup Table Descriptor
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1102);
/// Blue Palette Color Lookup Table Descriptor
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR: Tag = Tag(0x0028, 0x1103);
/// Red Palette Color Lookup Table Data
pub const RED_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1201);
/// Green Palette Color Lookup Table Data
pub const GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1202);
/// Blue Palette Color Lookup Table Data
pub const BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA: Tag = Tag(0x0028, 0x1203);
/// Lossy Image Compression
pub const LOSSY_IMAGE_COMPRESSION: Tag = Tag(0x0028, 0x2110);
/// Lossy Image Compression Ratio
pub const LOSSY_IMAGE_COMPRESSION_RATIO: Tag = Tag(0x0028, 0x2112);
/// Presentation LUT Shape
pub const PRESENTATION_LUT_SHAPE: Tag = Tag(0x2050, 0x0020);

/// Overlay Rows
pub const OVERLAY_ROWS: Tag = Tag(0x6000, 0x0010);
/// Overlay Columns
pub const OVERLAY_COLUMNS: Tag = Tag(0x6000, 0x0011);
/// Overlay Type
pub const OVERLAY_TYPE: Tag = Tag(0x6000, 0x0040);
/// Overlay Origin
pub const OVERLAY_ORIGIN: Tag = Tag(0x6000, 0x0050);
/// Overlay Bits Allocated
pub const OVERLAY_BITS_ALLOCATED: Tag = Tag(0x6000, 0x0100);
/// Overlay Bit Position
pub const OVERLAY_BIT_POSITION: Tag = Tag(0x6000, 0x0102);
/// Overlay Data
pub const OVERLAY_DATA: Tag = Tag(0x6000, 0x3000);

/// Float Pixel Data
pub const FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0008);
/// Double Float Pixel Data
pub const DOUBLE_FLOAT_PIXEL_DATA: Tag = Tag(0x7FE0, 0x0009);
/// Pixel Data
pub const PIXEL_DATA: Tag = Tag(0x7FE0, 0x0010);

/// The table of dictionary records for the attributes above.
#[rustfmt::skip]
pub(crate) const ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
    DataDictionaryEntryRef { tag: Single(COMMAND_GROUP_LENGTH), alias: "CommandGroupLength", vr: Exact(UL) },
    DataDictionaryEntryRef { tag: Single(AFFECTED_SOP_CLASS_UID), alias: "AffectedSOPClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(REQUESTED_SOP_CLASS_UID), alias: "RequestedSOPClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(COMMAND_FIELD), alias: "CommandField", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(MESSAGE_ID), alias: "MessageID", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(MESSAGE_ID_BEING_RESPONDED_TO), alias: "MessageIDBeingRespondedTo", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(COMMAND_DATA_SET_TYPE), alias: "CommandDataSetType", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(STATUS), alias: "Status", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(AFFECTED_SOP_INSTANCE_UID), alias: "AffectedSOPInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(REQUESTED_SOP_INSTANCE_UID), alias: "RequestedSOPInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(FILE_META_INFORMATION_GROUP_LENGTH), alias: "FileMetaInformationGroupLength", vr: Exact(UL) },
    DataDictionaryEntryRef { tag: Single(FILE_META_INFORMATION_VERSION), alias: "FileMetaInformationVersion", vr: Exact(OB) },
    DataDictionaryEntryRef { tag: Single(MEDIA_STORAGE_SOP_CLASS_UID), alias: "MediaStorageSOPClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(MEDIA_STORAGE_SOP_INSTANCE_UID), alias: "MediaStorageSOPInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(TRANSFER_SYNTAX_UID), alias: "TransferSyntaxUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(IMPLEMENTATION_CLASS_UID), alias: "ImplementationClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(IMPLEMENTATION_VERSION_NAME), alias: "ImplementationVersionName", vr: Exact(SH) },
    DataDictionaryEntryRef { tag: Single(SOURCE_APPLICATION_ENTITY_TITLE), alias: "SourceApplicationEntityTitle", vr: Exact(AE) },
    DataDictionaryEntryRef { tag: Single(SENDING_APPLICATION_ENTITY_TITLE), alias: "SendingApplicationEntityTitle", vr: Exact(AE) },
    DataDictionaryEntryRef { tag: Single(RECEIVING_APPLICATION_ENTITY_TITLE), alias: "ReceivingApplicationEntityTitle", vr: Exact(AE) },
    DataDictionaryEntryRef { tag: Single(PRIVATE_INFORMATION_CREATOR_UID), alias: "PrivateInformationCreatorUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(PRIVATE_INFORMATION), alias: "PrivateInformation", vr: Exact(OB) },
    DataDictionaryEntryRef { tag: Single(SPECIFIC_CHARACTER_SET), alias: "SpecificCharacterSet", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(IMAGE_TYPE), alias: "ImageType", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(SOP_CLASS_UID), alias: "SOPClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(SOP_INSTANCE_UID), alias: "SOPInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(STUDY_DATE), alias: "StudyDate", vr: Exact(DA) },
    DataDictionaryEntryRef { tag: Single(SERIES_DATE), alias: "SeriesDate", vr: Exact(DA) },
    DataDictionaryEntryRef { tag: Single(ACQUISITION_DATE), alias: "AcquisitionDate", vr: Exact(DA) },
    DataDictionaryEntryRef { tag: Single(CONTENT_DATE), alias: "ContentDate", vr: Exact(DA) },
    DataDictionaryEntryRef { tag: Single(ACQUISITION_DATE_TIME), alias: "AcquisitionDateTime", vr: Exact(DT) },
    DataDictionaryEntryRef { tag: Single(STUDY_TIME), alias: "StudyTime", vr: Exact(TM) },
    DataDictionaryEntryRef { tag: Single(SERIES_TIME), alias: "SeriesTime", vr: Exact(TM) },
    DataDictionaryEntryRef { tag: Single(ACQUISITION_TIME), alias: "AcquisitionTime", vr: Exact(TM) },
    DataDictionaryEntryRef { tag: Single(CONTENT_TIME), alias: "ContentTime", vr: Exact(TM) },
    DataDictionaryEntryRef { tag: Single(ACCESSION_NUMBER), alias: "AccessionNumber", vr: Exact(SH) },
    DataDictionaryEntryRef { tag: Single(MODALITY), alias: "Modality", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(CONVERSION_TYPE), alias: "ConversionType", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(MANUFACTURER), alias: "Manufacturer", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(INSTITUTION_NAME), alias: "InstitutionName", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(REFERRING_PHYSICIAN_NAME), alias: "ReferringPhysicianName", vr: Exact(PN) },
    DataDictionaryEntryRef { tag: Single(STATION_NAME), alias: "StationName", vr: Exact(SH) },
    DataDictionaryEntryRef { tag: Single(STUDY_DESCRIPTION), alias: "StudyDescription", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(SERIES_DESCRIPTION), alias: "SeriesDescription", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(PERFORMING_PHYSICIAN_NAME), alias: "PerformingPhysicianName", vr: Exact(PN) },
    DataDictionaryEntryRef { tag: Single(OPERATORS_NAME), alias: "OperatorsName", vr: Exact(PN) },
    DataDictionaryEntryRef { tag: Single(MANUFACTURER_MODEL_NAME), alias: "ManufacturerModelName", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(REFERENCED_STUDY_SEQUENCE), alias: "ReferencedStudySequence", vr: Exact(SQ) },
    DataDictionaryEntryRef { tag: Single(REFERENCED_SERIES_SEQUENCE), alias: "ReferencedSeriesSequence", vr: Exact(SQ) },
    DataDictionaryEntryRef { tag: Single(REFERENCED_IMAGE_SEQUENCE), alias: "ReferencedImageSequence", vr: Exact(SQ) },
    DataDictionaryEntryRef { tag: Single(REFERENCED_SOP_CLASS_UID), alias: "ReferencedSOPClassUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(REFERENCED_SOP_INSTANCE_UID), alias: "ReferencedSOPInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(SOURCE_IMAGE_SEQUENCE), alias: "SourceImageSequence", vr: Exact(SQ) },
    DataDictionaryEntryRef { tag: Single(DERIVATION_CODE_SEQUENCE), alias: "DerivationCodeSequence", vr: Exact(SQ) },
    DataDictionaryEntryRef { tag: Single(PATIENT_NAME), alias: "PatientName", vr: Exact(PN) },
    DataDictionaryEntryRef { tag: Single(PATIENT_ID), alias: "PatientID", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(PATIENT_BIRTH_DATE), alias: "PatientBirthDate", vr: Exact(DA) },
    DataDictionaryEntryRef { tag: Single(PATIENT_SEX), alias: "PatientSex", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(PATIENT_AGE), alias: "PatientAge", vr: Exact(AS) },
    DataDictionaryEntryRef { tag: Single(PATIENT_SIZE), alias: "PatientSize", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(PATIENT_WEIGHT), alias: "PatientWeight", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(PREGNANCY_STATUS), alias: "PregnancyStatus", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(PATIENT_COMMENTS), alias: "PatientComments", vr: Exact(LT) },
    DataDictionaryEntryRef { tag: Single(BODY_PART_EXAMINED), alias: "BodyPartExamined", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(SLICE_THICKNESS), alias: "SliceThickness", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(KVP), alias: "KVP", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(SPACING_BETWEEN_SLICES), alias: "SpacingBetweenSlices", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(SOFTWARE_VERSIONS), alias: "SoftwareVersions", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(PROTOCOL_NAME), alias: "ProtocolName", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(X_RAY_TUBE_CURRENT), alias: "XRayTubeCurrent", vr: Exact(IS) },
    DataDictionaryEntryRef { tag: Single(PATIENT_POSITION), alias: "PatientPosition", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(STUDY_INSTANCE_UID), alias: "StudyInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(SERIES_INSTANCE_UID), alias: "SeriesInstanceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(STUDY_ID), alias: "StudyID", vr: Exact(SH) },
    DataDictionaryEntryRef { tag: Single(SERIES_NUMBER), alias: "SeriesNumber", vr: Exact(IS) },
    DataDictionaryEntryRef { tag: Single(ACQUISITION_NUMBER), alias: "AcquisitionNumber", vr: Exact(IS) },
    DataDictionaryEntryRef { tag: Single(INSTANCE_NUMBER), alias: "InstanceNumber", vr: Exact(IS) },
    DataDictionaryEntryRef { tag: Single(PATIENT_ORIENTATION), alias: "PatientOrientation", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(IMAGE_POSITION_PATIENT), alias: "ImagePositionPatient", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(IMAGE_ORIENTATION_PATIENT), alias: "ImageOrientationPatient", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(FRAME_OF_REFERENCE_UID), alias: "FrameOfReferenceUID", vr: Exact(UI) },
    DataDictionaryEntryRef { tag: Single(SLICE_LOCATION), alias: "SliceLocation", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(IMAGE_COMMENTS), alias: "ImageComments", vr: Exact(LT) },
    DataDictionaryEntryRef { tag: Single(SAMPLES_PER_PIXEL), alias: "SamplesPerPixel", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(PHOTOMETRIC_INTERPRETATION), alias: "PhotometricInterpretation", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(PLANAR_CONFIGURATION), alias: "PlanarConfiguration", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(NUMBER_OF_FRAMES), alias: "NumberOfFrames", vr: Exact(IS) },
    DataDictionaryEntryRef { tag: Single(ROWS), alias: "Rows", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(COLUMNS), alias: "Columns", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(PIXEL_SPACING), alias: "PixelSpacing", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(BITS_ALLOCATED), alias: "BitsAllocated", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(BITS_STORED), alias: "BitsStored", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(HIGH_BIT), alias: "HighBit", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(PIXEL_REPRESENTATION), alias: "PixelRepresentation", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Single(SMALLEST_IMAGE_PIXEL_VALUE), alias: "SmallestImagePixelValue", vr: Xs },
    DataDictionaryEntryRef { tag: Single(LARGEST_IMAGE_PIXEL_VALUE), alias: "LargestImagePixelValue", vr: Xs },
    DataDictionaryEntryRef { tag: Single(WINDOW_CENTER), alias: "WindowCenter", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(WINDOW_WIDTH), alias: "WindowWidth", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(RESCALE_INTERCEPT), alias: "RescaleIntercept", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(RESCALE_SLOPE), alias: "RescaleSlope", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(RESCALE_TYPE), alias: "RescaleType", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "RedPaletteColorLookupTableDescriptor", vr: Xs },
    DataDictionaryEntryRef { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "GreenPaletteColorLookupTableDescriptor", vr: Xs },
    DataDictionaryEntryRef { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DESCRIPTOR), alias: "BluePaletteColorLookupTableDescriptor", vr: Xs },
    DataDictionaryEntryRef { tag: Single(RED_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "RedPaletteColorLookupTableData", vr: Lt },
    DataDictionaryEntryRef { tag: Single(GREEN_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "GreenPaletteColorLookupTableData", vr: Lt },
    DataDictionaryEntryRef { tag: Single(BLUE_PALETTE_COLOR_LOOKUP_TABLE_DATA), alias: "BluePaletteColorLookupTableData", vr: Lt },
    DataDictionaryEntryRef { tag: Single(LOSSY_IMAGE_COMPRESSION), alias: "LossyImageCompression", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(LOSSY_IMAGE_COMPRESSION_RATIO), alias: "LossyImageCompressionRatio", vr: Exact(DS) },
    DataDictionaryEntryRef { tag: Single(PRESENTATION_LUT_SHAPE), alias: "PresentationLUTShape", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_ROWS), alias: "OverlayRows", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_COLUMNS), alias: "OverlayColumns", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_TYPE), alias: "OverlayType", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_ORIGIN), alias: "OverlayOrigin", vr: Exact(SS) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_BITS_ALLOCATED), alias: "OverlayBitsAllocated", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_BIT_POSITION), alias: "OverlayBitPosition", vr: Exact(US) },
    DataDictionaryEntryRef { tag: Group100(OVERLAY_DATA), alias: "OverlayData", vr: Ox },
    DataDictionaryEntryRef { tag: Single(FLOAT_PIXEL_DATA), alias: "FloatPixelData", vr: Exact(OF) },
    DataDictionaryEntryRef { tag: Single(DOUBLE_FLOAT_PIXEL_DATA), alias: "DoubleFloatPixelData", vr: Exact(OD) },
    DataDictionaryEntryRef { tag: Single(PIXEL_DATA), alias: "PixelData", vr: Px },
];
