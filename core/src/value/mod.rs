//! This module includes a high level abstraction over a DICOM data element's value.

use crate::header::{EmptyObject, HasLength, Length};
use std::borrow::Cow;
use std::str::FromStr;

pub mod deserialize;
pub mod partial;
pub mod primitive;
pub mod serialize;

pub use self::deserialize::Error as DeserializeError;
pub use self::partial::{AsTemporalRange, DateComponent, DicomDate, DicomDateTime, DicomTime};
pub use self::primitive::{
    CastValueError, ConvertValueError, InvalidValueReadError, PrimitiveValue, ValueType, C,
};

/// The type of a pixel data fragment
/// when fully residing in memory.
pub type InMemFragment = Vec<u8>;

/// A trait for a value that maps to a DICOM element data value.
pub trait DicomValueType: HasLength {
    /// Retrieve the specific type of this value.
    fn value_type(&self) -> ValueType;

    /// Retrieve the number of elements contained in the DICOM value.
    ///
    /// In a sequence value, this is the number of items in the sequence.
    /// In an encapsulated pixel data sequence, the output is always 1.
    /// Otherwise, the output is the number of elements effectively encoded
    /// in the value.
    fn cardinality(&self) -> usize;
}

/// Representation of a full DICOM value, which may be either primitive or
/// another DICOM object.
///
/// `I` is the complex type for nested data set items,
/// which should usually implement [`HasLength`].
/// `P` is the type of the pixel data fragment,
/// which should usually implement `AsRef<[u8]>`.
///
/// [`HasLength`]: ../header/trait.HasLength.html
#[derive(Debug, Clone, PartialEq)]
pub enum Value<I = EmptyObject, P = InMemFragment> {
    /// Primitive value.
    Primitive(PrimitiveValue),

    /// A complex sequence of items.
    Sequence {
        /// Item collection.
        items: C<I>,
        /// The size in bytes (as from the data element's length),
        /// which may be undefined.
        size: Length,
    },

    /// A sequence of encapsulated pixel data fragments.
    PixelSequence {
        /// The value contents of the basic offset table.
        offset_table: C<u32>,
        /// The compressed fragments.
        fragments: C<P>,
    },
}

impl<I, P> Value<I, P> {
    /// Create a new DICOM value from a primitive value.
    pub fn new(value: PrimitiveValue) -> Self {
        Value::Primitive(value)
    }

    /// Create a new DICOM value from a sequence of items
    /// and the sequence's byte length.
    pub fn new_sequence(items: impl Into<C<I>>, size: Length) -> Self {
        Value::Sequence {
            items: items.into(),
            size,
        }
    }

    /// Create a new DICOM value from an encapsulated pixel data's
    /// basic offset table and fragments.
    pub fn new_pixel_sequence(offset_table: C<u32>, fragments: impl Into<C<P>>) -> Self {
        Value::PixelSequence {
            offset_table,
            fragments: fragments.into(),
        }
    }

    /// Obtain the number of individual values.
    /// In a primitive, this is the number of individual elements in the value.
    /// In a sequence item, this is the number of items.
    /// In a pixel sequence, this is currently set to 1
    /// regardless of the number of compressed fragments or frames.
    pub fn multiplicity(&self) -> u32 {
        match self {
            Value::Primitive(v) => v.multiplicity(),
            Value::Sequence { items, .. } => items.len() as u32,
            Value::PixelSequence { .. } => 1,
        }
    }

    /// Gets a reference to the primitive value.
    pub fn primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a mutable reference to the primitive value.
    pub fn primitive_mut(&mut self) -> Option<&mut PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Gets a reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Gets a mutable reference to the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items_mut(&mut self) -> Option<&mut C<I>> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Retrieves the primitive value.
    pub fn into_primitive(self) -> Option<PrimitiveValue> {
        match self {
            Value::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Retrieves the items of a sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn into_items(self) -> Option<C<I>> {
        match self {
            Value::Sequence { items, .. } => Some(items),
            _ => None,
        }
    }

    /// Gets a reference to the encapsulated pixel data's basic offset table.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn offset_table(&self) -> Option<&[u32]> {
        match self {
            Value::PixelSequence { offset_table, .. } => Some(offset_table),
            _ => None,
        }
    }

    /// Gets a reference to the encapsulated pixel data's fragments.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn fragments(&self) -> Option<&[P]> {
        match self {
            Value::PixelSequence { fragments, .. } => Some(fragments),
            _ => None,
        }
    }

    /// Retrieves the encapsulated pixel data's fragments.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn into_fragments(self) -> Option<C<P>> {
        match self {
            Value::PixelSequence { fragments, .. } => Some(fragments),
            _ => None,
        }
    }
}

impl<I, P> HasLength for Value<I, P> {
    fn length(&self) -> Length {
        match self {
            Value::Primitive(v) => v.length(),
            Value::Sequence { size, .. } => *size,
            Value::PixelSequence { .. } => Length::UNDEFINED,
        }
    }
}

impl<I, P> DicomValueType for Value<I, P>
where
    I: HasLength,
{
    fn value_type(&self) -> ValueType {
        match self {
            Value::Primitive(v) => v.value_type(),
            Value::Sequence { .. } => ValueType::Item,
            Value::PixelSequence { .. } => ValueType::PixelSequence,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            Value::Primitive(v) => v.cardinality(),
            Value::Sequence { items, .. } => items.len(),
            Value::PixelSequence { .. } => 1,
        }
    }
}

/// Macro for delegating a getter method to the primitive value,
/// returning a cast error on the other variants.
///
/// Should be placed inside `Value`'s impl block.
macro_rules! impl_value_getters {
    ($name_single: ident, $name_multi: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        ///
        /// If it contains multiple values,
        /// only the first one is returned.
        /// An error is returned if the variant is not compatible.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            match self {
                Value::Primitive(v) => v.$name_single(),
                value => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: value.value_type(),
                }),
            }
        }

        /// Get a sequence of values of the requested type without copying.
        ///
        /// An error is returned if the variant is not compatible.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            match self {
                Value::Primitive(v) => v.$name_multi(),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

impl<I, P> Value<I, P>
where
    I: HasLength,
{
    /// Convert the full primitive value into a single string.
    ///
    /// If the value contains multiple strings,
    /// they are joined together by the standard value delimiter (`'\\'`).
    /// Trailing padding characters are stripped from each string.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        match self {
            Value::Primitive(prim) => Ok(prim.to_str()),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Convert the full primitive value into a single raw string,
    /// with trailing padding characters kept.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_raw_str(&self) -> Result<Cow<str>, CastValueError> {
        match self {
            Value::Primitive(prim) => Ok(prim.to_raw_str()),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Convert the full primitive value into a sequence of strings.
    ///
    /// If the value is a string, it is converted into a vector of one string.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_multi_str(&self) -> Result<Cow<[String]>, CastValueError> {
        match self {
            Value::Primitive(prim) => Ok(prim.to_multi_str()),
            value => Err(CastValueError {
                requested: "string",
                got: value.value_type(),
            }),
        }
    }

    /// Convert the full primitive value into raw bytes.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided in UTF-8.
    /// Numeric values are in the platform's native byte order.
    ///
    /// Returns an error if the value is not primitive.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, CastValueError> {
        match self {
            Value::Primitive(prim) => Ok(prim.to_bytes()),
            value => Err(CastValueError {
                requested: "bytes",
                got: value.value_type(),
            }),
        }
    }

    /// Retrieve and convert the primitive value into an integer.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: Clone,
        T: num_traits::NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            Value::Primitive(v) => v.to_int::<T>(),
            value => Err(ConvertValueError {
                requested: "integer",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a sequence of integers.
    ///
    /// If the value is a string or sequence of strings,
    /// each string is parsed to obtain an integer.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: Clone,
        T: num_traits::NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            Value::Primitive(v) => v.to_multi_int::<T>(),
            value => Err(ConvertValueError {
                requested: "integer",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value
    /// into a single-precision floating point number.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_float32(),
            value => Err(ConvertValueError {
                requested: "float32",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value
    /// into a sequence of single-precision floating point numbers.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_float32(),
            value => Err(ConvertValueError {
                requested: "float32",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value
    /// into a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_float64(),
            value => Err(ConvertValueError {
                requested: "float64",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value
    /// into a sequence of double-precision floating point numbers.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_float64(),
            value => Err(ConvertValueError {
                requested: "float64",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a date.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a date.
    pub fn to_date(&self) -> Result<DicomDate, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_date(),
            value => Err(ConvertValueError {
                requested: "Date",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the full primitive value into a sequence of dates.
    pub fn to_multi_date(&self) -> Result<Vec<DicomDate>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_date(),
            value => Err(ConvertValueError {
                requested: "Date",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a time.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a time.
    pub fn to_time(&self) -> Result<DicomTime, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_time(),
            value => Err(ConvertValueError {
                requested: "Time",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the full primitive value into a sequence of times.
    pub fn to_multi_time(&self) -> Result<Vec<DicomTime>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_time(),
            value => Err(ConvertValueError {
                requested: "Time",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a date-time.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a date-time.
    pub fn to_datetime(&self) -> Result<DicomDateTime, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_datetime(),
            value => Err(ConvertValueError {
                requested: "DateTime",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the full primitive value
    /// into a sequence of date-times.
    pub fn to_multi_datetime(&self) -> Result<Vec<DicomDateTime>, ConvertValueError> {
        match self {
            Value::Primitive(v) => v.to_multi_datetime(),
            value => Err(ConvertValueError {
                requested: "DateTime",
                original: value.value_type(),
                cause: None,
            }),
        }
    }

    /// Get a single string value.
    ///
    /// If the value contains multiple strings, only the first one is returned.
    /// An error is returned if the variant is not compatible.
    pub fn string(&self) -> Result<&str, CastValueError> {
        match self {
            Value::Primitive(v) => v.string(),
            value => Err(CastValueError {
                requested: "Str",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values,
    /// if the variant is either `Str` or `Strs`.
    ///
    /// An error is returned if the variant is not compatible.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        match self {
            Value::Primitive(v) => v.strings(),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    impl_value_getters!(tag, tags, crate::header::Tag);
    impl_value_getters!(date, dates, DicomDate);
    impl_value_getters!(time, times, DicomTime);
    impl_value_getters!(datetime, datetimes, DicomDateTime);
    impl_value_getters!(uint8, uint8_slice, u8);
    impl_value_getters!(uint16, uint16_slice, u16);
    impl_value_getters!(int16, int16_slice, i16);
    impl_value_getters!(uint32, uint32_slice, u32);
    impl_value_getters!(int32, int32_slice, i32);
    impl_value_getters!(int64, int64_slice, i64);
    impl_value_getters!(uint64, uint64_slice, u64);
    impl_value_getters!(float32, float32_slice, f32);
    impl_value_getters!(float64, float64_slice, f64);
}

impl<I, P> From<PrimitiveValue> for Value<I, P> {
    fn from(v: PrimitiveValue) -> Self {
        Value::Primitive(v)
    }
}

impl<I, P> From<&str> for Value<I, P> {
    fn from(v: &str) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl<I, P> From<String> for Value<I, P> {
    fn from(v: String) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl<I, P> From<DicomDate> for Value<I, P> {
    fn from(v: DicomDate) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl<I, P> From<DicomTime> for Value<I, P> {
    fn from(v: DicomTime) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}

impl<I, P> From<DicomDateTime> for Value<I, P> {
    fn from(v: DicomDateTime) -> Self {
        Value::Primitive(PrimitiveValue::from(v))
    }
}
