//! Extraction of pixel data from an in-memory DICOM object.
//!
//! The entry point is [`extract_pixel_data`],
//! which locates the _Pixel Data_ element (7FE0,0010)
//! and presents its content in one of two ways:
//! native pixel data comes out as a single contiguous byte buffer
//! together with the image attributes needed to interpret it,
//! whereas encapsulated pixel data is handed over unmodified,
//! as a basic offset table plus the ordered compressed fragments.
//!
//! Interpreting the pixel bytes themselves
//! (decompression, windowing, color transforms)
//! is out of the scope of this crate.
use std::borrow::Cow;

use medicom_core::dictionary::DataDictionary;
use medicom_core::value::Value;
use medicom_core::Tag;
use medicom_dictionary_std::tags;
use snafu::{Backtrace, OptionExt, Snafu};

use crate::mem::InMemDicomObject;
use crate::ErrorKind;

/// An error which occurred when extracting pixel data from an object.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    /// The object has no pixel data element.
    #[snafu(display("Data set has no pixel data element"))]
    MissingPixelData { backtrace: Backtrace },
    /// An attribute required to interpret native pixel data is not present.
    #[snafu(display("Missing mandatory image attribute {}", name))]
    MissingAttribute {
        name: &'static str,
        backtrace: Backtrace,
    },
    /// An image attribute is present but its value could not be read.
    #[snafu(display("Invalid value for image attribute {}", name))]
    InvalidAttribute {
        name: &'static str,
        backtrace: Backtrace,
    },
    /// The pixel data element holds a data set sequence.
    #[snafu(display("Unexpected data set sequence in pixel data element"))]
    PixelDataSequence { backtrace: Backtrace },
}

impl Error {
    /// Classify this error into a broad failure category.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::MissingPixelData { .. } | Error::MissingAttribute { .. } => {
                ErrorKind::IncompleteImageMetadata
            }
            _ => ErrorKind::MalformedValue,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// The image attributes which describe the layout of native pixel data.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageGeometry {
    /// number of rows (height) in each frame
    pub rows: u16,
    /// number of columns (width) in each frame
    pub columns: u16,
    /// number of bits allocated for each sample
    pub bits_allocated: u16,
    /// number of bits effectively used, when declared
    pub bits_stored: Option<u16>,
    /// number of samples (channels) per pixel
    pub samples_per_pixel: u16,
    /// whether multi-sample data is interleaved (0) or planar (1)
    pub planar_configuration: u16,
    /// the color space of the pixel samples
    pub photometric_interpretation: String,
    /// whether sample values are unsigned (0) or two's complement (1)
    pub pixel_representation: u16,
    /// number of frames in the pixel data
    pub number_of_frames: u32,
}

/// A view over the pixel data of a DICOM object.
#[derive(Debug, Clone, PartialEq)]
pub enum PixelView<'a> {
    /// Native (uncompressed) pixel data,
    /// one contiguous buffer covering all frames.
    Native {
        /// the raw pixel bytes, in the encoded sample order
        data: Cow<'a, [u8]>,
        /// the attributes needed to interpret the buffer
        geometry: ImageGeometry,
    },
    /// Encapsulated (compressed) pixel data,
    /// kept in its encoded form.
    Encapsulated {
        /// the basic offset table, possibly empty
        offset_table: &'a [u32],
        /// the compressed fragments, in the order they were encoded
        fragments: &'a [Vec<u8>],
    },
}

/// Obtain a view over the pixel data of the given object.
///
/// Native pixel data requires the mandatory image attributes
/// (_Rows_, _Columns_, _Bits Allocated_, _Samples per Pixel_,
/// _Photometric Interpretation_, and _Pixel Representation_)
/// to be present in the object,
/// failing with an error of kind
/// [`IncompleteImageMetadata`](ErrorKind::IncompleteImageMetadata)
/// otherwise.
/// Encapsulated pixel data is returned as is,
/// with no attempt at decoding the fragments.
pub fn extract_pixel_data<D>(obj: &InMemDicomObject<D>) -> Result<PixelView<'_>>
where
    D: DataDictionary,
    D: Clone,
{
    let elem = obj.get(tags::PIXEL_DATA).context(MissingPixelDataSnafu)?;
    match elem.value() {
        Value::Primitive(v) => Ok(PixelView::Native {
            data: v.to_bytes(),
            geometry: image_geometry(obj)?,
        }),
        Value::PixelSequence {
            fragments,
            offset_table,
        } => Ok(PixelView::Encapsulated {
            offset_table: &offset_table[..],
            fragments: &fragments[..],
        }),
        Value::Sequence { .. } => PixelDataSequenceSnafu.fail(),
    }
}

fn image_geometry<D>(obj: &InMemDicomObject<D>) -> Result<ImageGeometry>
where
    D: DataDictionary,
    D: Clone,
{
    Ok(ImageGeometry {
        rows: required_u16(obj, tags::ROWS, "Rows")?,
        columns: required_u16(obj, tags::COLUMNS, "Columns")?,
        bits_allocated: required_u16(obj, tags::BITS_ALLOCATED, "BitsAllocated")?,
        bits_stored: optional_u16(obj, tags::BITS_STORED, "BitsStored")?,
        samples_per_pixel: required_u16(obj, tags::SAMPLES_PER_PIXEL, "SamplesPerPixel")?,
        planar_configuration: optional_u16(obj, tags::PLANAR_CONFIGURATION, "PlanarConfiguration")?
            .unwrap_or(0),
        photometric_interpretation: {
            let name = "PhotometricInterpretation";
            let elem = obj
                .get(tags::PHOTOMETRIC_INTERPRETATION)
                .context(MissingAttributeSnafu { name })?;
            elem.to_str()
                .ok()
                .context(InvalidAttributeSnafu { name })?
                .to_string()
        },
        pixel_representation: required_u16(obj, tags::PIXEL_REPRESENTATION, "PixelRepresentation")?,
        number_of_frames: match obj.get(tags::NUMBER_OF_FRAMES) {
            // encoded as a string of digits (VR IS)
            Some(elem) => elem.to_int().ok().context(InvalidAttributeSnafu {
                name: "NumberOfFrames",
            })?,
            None => 1,
        },
    })
}

fn required_u16<D>(obj: &InMemDicomObject<D>, tag: Tag, name: &'static str) -> Result<u16>
where
    D: DataDictionary,
    D: Clone,
{
    obj.get(tag)
        .context(MissingAttributeSnafu { name })?
        .to_int()
        .ok()
        .context(InvalidAttributeSnafu { name })
}

fn optional_u16<D>(obj: &InMemDicomObject<D>, tag: Tag, name: &'static str) -> Result<Option<u16>>
where
    D: DataDictionary,
    D: Clone,
{
    match obj.get(tag) {
        Some(elem) => Ok(Some(
            elem.to_int().ok().context(InvalidAttributeSnafu { name })?,
        )),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use medicom_core::{dicom_value, DataElement, PrimitiveValue, VR};
    use smallvec::smallvec;

    fn geometry_elements() -> Vec<crate::mem::InMemElement> {
        vec![
            DataElement::new(tags::SAMPLES_PER_PIXEL, VR::US, dicom_value!(U16, [1])),
            DataElement::new(
                tags::PHOTOMETRIC_INTERPRETATION,
                VR::CS,
                dicom_value!(Str, "MONOCHROME2 "),
            ),
            DataElement::new(tags::ROWS, VR::US, dicom_value!(U16, [2])),
            DataElement::new(tags::COLUMNS, VR::US, dicom_value!(U16, [4])),
            DataElement::new(tags::BITS_ALLOCATED, VR::US, dicom_value!(U16, [8])),
            DataElement::new(tags::BITS_STORED, VR::US, dicom_value!(U16, [8])),
            DataElement::new(tags::PIXEL_REPRESENTATION, VR::US, dicom_value!(U16, [0])),
        ]
    }

    #[test]
    fn extract_native_pixel_data() {
        let mut obj = InMemDicomObject::from_element_iter(geometry_elements());
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(vec![0x55; 8].into()),
        ));

        let view = extract_pixel_data(&obj).unwrap();
        match view {
            PixelView::Native { data, geometry } => {
                assert_eq!(&*data, &[0x55; 8][..]);
                assert_eq!(
                    geometry,
                    ImageGeometry {
                        rows: 2,
                        columns: 4,
                        bits_allocated: 8,
                        bits_stored: Some(8),
                        samples_per_pixel: 1,
                        planar_configuration: 0,
                        photometric_interpretation: "MONOCHROME2".to_string(),
                        pixel_representation: 0,
                        number_of_frames: 1,
                    },
                );
            }
            view => panic!("unexpected pixel data view {:?}", view),
        }
    }

    #[test]
    fn extract_encapsulated_pixel_data() {
        let mut obj = InMemDicomObject::from_element_iter(geometry_elements());
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            Value::PixelSequence {
                fragments: smallvec![vec![0x11; 16], vec![0x22; 16], vec![0x33; 8]],
                offset_table: smallvec![0, 24, 48],
            },
        ));

        let view = extract_pixel_data(&obj).unwrap();
        match view {
            PixelView::Encapsulated {
                offset_table,
                fragments,
            } => {
                assert_eq!(offset_table, &[0, 24, 48][..]);
                assert_eq!(fragments.len(), 3);
                assert_eq!(fragments[0], vec![0x11; 16]);
                assert_eq!(fragments[1], vec![0x22; 16]);
                assert_eq!(fragments[2], vec![0x33; 8]);
            }
            view => panic!("unexpected pixel data view {:?}", view),
        }
    }

    #[test]
    fn missing_pixel_data_is_detected() {
        let obj = InMemDicomObject::from_element_iter(geometry_elements());

        let err = extract_pixel_data(&obj).unwrap_err();
        assert!(matches!(err, Error::MissingPixelData { .. }));
        assert_eq!(err.kind(), ErrorKind::IncompleteImageMetadata);
    }

    #[test]
    fn missing_geometry_is_detected() {
        // no Rows nor Columns
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(vec![0x55; 8].into()),
        ));

        let err = extract_pixel_data(&obj).unwrap_err();
        assert!(matches!(err, Error::MissingAttribute { name: "Rows", .. }));
        assert_eq!(err.kind(), ErrorKind::IncompleteImageMetadata);

        // encapsulated pixel data does not need the geometry
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            Value::PixelSequence {
                fragments: smallvec![vec![0x11; 16]],
                offset_table: Default::default(),
            },
        ));
        assert!(extract_pixel_data(&obj).is_ok());
    }

    #[test]
    fn defaults_for_absent_attributes() {
        let mut obj = InMemDicomObject::from_element_iter(geometry_elements());
        obj.remove_element(tags::BITS_STORED);
        obj.put(DataElement::new(
            tags::NUMBER_OF_FRAMES,
            VR::IS,
            dicom_value!(Str, "2"),
        ));
        obj.put(DataElement::new(
            tags::PIXEL_DATA,
            VR::OB,
            PrimitiveValue::U8(vec![0x55; 16].into()),
        ));

        match extract_pixel_data(&obj).unwrap() {
            PixelView::Native { geometry, .. } => {
                assert_eq!(geometry.bits_stored, None);
                assert_eq!(geometry.planar_configuration, 0);
                assert_eq!(geometry.number_of_frames, 2);
            }
            view => panic!("unexpected pixel data view {:?}", view),
        }
    }
}
