//! UID declarations
//!
//! A curated listing of normative DICOM unique identifiers:
//! all of the transfer syntaxes recognized by this library,
//! plus the storage SOP classes most often found in image files.

/// SOP Class: Verification SOP Class
#[rustfmt::skip]
pub const VERIFICATION: &str = "1.2.840.10008.1.1";
/// Transfer Syntax: Implicit VR Little Endian: Default Transfer Syntax for DICOM
#[rustfmt::skip]
pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
/// Transfer Syntax: Explicit VR Little Endian
#[rustfmt::skip]
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
/// Transfer Syntax: Deflated Explicit VR Little Endian
#[rustfmt::skip]
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
/// Transfer Syntax: Explicit VR Big Endian (Retired)
#[rustfmt::skip]
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
/// Transfer Syntax: JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression
#[rustfmt::skip]
pub const JPEG_BASELINE8_BIT: &str = "1.2.840.10008.1.2.4.50";
/// Transfer Syntax: JPEG Extended (Process 2 & 4): Default Transfer Syntax for Lossy JPEG 12 Bit Image Compression (Process 4 only)
#[rustfmt::skip]
pub const JPEG_EXTENDED12_BIT: &str = "1.2.840.10008.1.2.4.51";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical (Process 14)
#[rustfmt::skip]
pub const JPEG_LOSSLESS: &str = "1.2.840.10008.1.2.4.57";
/// Transfer Syntax: JPEG Lossless, Non-Hierarchical, First-Order Prediction (Process 14 [Selection Value 1]): Default Transfer Syntax for Lossless JPEG Image Compression
#[rustfmt::skip]
pub const JPEG_LOSSLESS_SV1: &str = "1.2.840.10008.1.2.4.70";
/// Transfer Syntax: JPEG-LS Lossless Image Compression
#[rustfmt::skip]
pub const JPEG_LS_LOSSLESS: &str = "1.2.840.10008.1.2.4.80";
/// Transfer Syntax: JPEG-LS Lossy (Near-Lossless) Image Compression
#[rustfmt::skip]
pub const JPEG_LS_NEAR_LOSSLESS: &str = "1.2.840.10008.1.2.4.81";
/// Transfer Syntax: JPEG 2000 Image Compression (Lossless Only)
#[rustfmt::skip]
pub const JPEG_2000_LOSSLESS: &str = "1.2.840.10008.1.2.4.90";
/// Transfer Syntax: JPEG 2000 Image Compression
#[rustfmt::skip]
pub const JPEG_2000: &str = "1.2.840.10008.1.2.4.91";
/// Transfer Syntax: RLE Lossless
#[rustfmt::skip]
pub const RLE_LOSSLESS: &str = "1.2.840.10008.1.2.5";
/// SOP Class: Computed Radiography Image Storage
#[rustfmt::skip]
pub const COMPUTED_RADIOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.1";
/// SOP Class: Digital X-Ray Image Storage - For Presentation
#[rustfmt::skip]
pub const DIGITAL_X_RAY_IMAGE_STORAGE_FOR_PRESENTATION: &str = "1.2.840.10008.5.1.4.1.1.1.1";
/// SOP Class: CT Image Storage
#[rustfmt::skip]
pub const CT_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.2";
/// SOP Class: Ultrasound Image Storage
#[rustfmt::skip]
pub const ULTRASOUND_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.6.1";
/// SOP Class: MR Image Storage
#[rustfmt::skip]
pub const MR_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.4";
/// SOP Class: Secondary Capture Image Storage
#[rustfmt::skip]
pub const SECONDARY_CAPTURE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.7";
/// SOP Class: Nuclear Medicine Image Storage
#[rustfmt::skip]
pub const NUCLEAR_MEDICINE_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.20";
/// SOP Class: Positron Emission Tomography Image Storage
#[rustfmt::skip]
pub const POSITRON_EMISSION_TOMOGRAPHY_IMAGE_STORAGE: &str = "1.2.840.10008.5.1.4.1.1.128";
