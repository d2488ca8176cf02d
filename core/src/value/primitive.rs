//! Declaration and implementation of a DICOM primitive value.
//!
//! See [`PrimitiveValue`](./enum.PrimitiveValue.html).

use super::deserialize::Error as DeserializeError;
use super::partial::{DicomDate, DicomDateTime, DicomTime};
use super::DicomValueType;
use crate::header::{HasLength, Length, Tag};
use itertools::Itertools;
use num_traits::{NumCast, ToPrimitive};
use safe_transmute::to_bytes::transmute_to_bytes;
use smallvec::SmallVec;
use snafu::{Backtrace, IntoError, Snafu};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// An aggregation of one or more elements in a value.
pub type C<T> = SmallVec<[T; 2]>;

/// An error type for reading a primitive value
/// as another data type.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum InvalidValueReadError {
    /// The value cannot be converted to the target type requested.
    #[snafu(display("Cannot convert `{}` to the target type requested", value))]
    NarrowConvert { value: String, backtrace: Backtrace },
    /// Failed to read a number from a textual value.
    #[snafu(display("Failed to read text as an integer"))]
    ParseInteger {
        source: std::num::ParseIntError,
        backtrace: Backtrace,
    },
    /// Failed to read a floating point number from a textual value.
    #[snafu(display("Failed to read text as a floating point number"))]
    ParseFloat {
        source: std::num::ParseFloatError,
        backtrace: Backtrace,
    },
    /// Failed to read a date, time or date-time from a textual value.
    #[snafu(display("Failed to read text as a date or time"))]
    ParseDateTime {
        #[snafu(backtrace)]
        source: DeserializeError,
    },
}

/// An error type for a failed attempt at converting a value
/// into another representation.
#[derive(Debug)]
pub struct ConvertValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's original representation
    pub original: ValueType,
    /// The reason why the conversion was unsuccessful,
    /// or none if the conversion from an empty value was attempted
    pub cause: Option<Box<InvalidValueReadError>>,
}

impl fmt::Display for ConvertValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Could not convert {:?} to a {}: ",
            self.original, self.requested
        )?;
        if let Some(cause) = &self.cause {
            write!(f, "{}", cause)?;
        } else {
            write!(f, "conversion not possible")?;
        }
        Ok(())
    }
}

impl std::error::Error for ConvertValueError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause.as_ref().map(|e| &**e as _)
    }
}

/// An error type for an attempt of accessing a value
/// in one internal representation as another.
#[derive(Debug, Clone, Copy, PartialEq, Snafu)]
#[snafu(display("bad value cast: requested {} but value is {:?}", requested, got))]
pub struct CastValueError {
    /// The value format requested
    pub requested: &'static str,
    /// The value's actual representation
    pub got: ValueType,
}

/// An enum representing a primitive value from a DICOM element.
/// The result of decoding an element's data value
/// may be one of the enumerated types
/// depending on its content and value representation.
///
/// Multiple elements are contained in a [`smallvec`] vector,
/// conveniently aliased to the type [`C`].
///
/// See the macro [`dicom_value!`] for a more intuitive means
/// of constructing these values.
/// Alternatively, `From` conversions into `PrimitiveValue` exist
/// for single element types,
/// including numeric types, `String`, and `&str`.
///
/// # Example
///
/// ```
/// # use medicom_core::PrimitiveValue;
/// # use smallvec::smallvec;
/// let value = PrimitiveValue::from("Smith^John");
/// assert_eq!(value, PrimitiveValue::Str("Smith^John".to_string()));
/// assert_eq!(value.multiplicity(), 1);
///
/// let value = PrimitiveValue::from(512_u16);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![512]));
/// ```
///
/// [`smallvec`]: ../../smallvec/index.html
/// [`C`]: ./type.C.html
/// [`dicom_value!`]: ../macro.dicom_value.html
#[derive(Debug, PartialEq, Clone)]
pub enum PrimitiveValue {
    /// No data. Usually employed for zero-lengthed values.
    Empty,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    /// Can also be used for IS, DS, DA, DT and TM when decoding
    /// with format preservation.
    Strs(C<String>),

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str(String),

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags(C<Tag>),

    /// The value is a sequence of unsigned 8-bit integers.
    /// Used for OB and UN.
    U8(C<u8>),

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16(C<i16>),

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16(C<u16>),

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32(C<i32>),

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32(C<u32>),

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64(C<i64>),

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64(C<u64>),

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32(C<f32>),

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD, FD and DS.
    F64(C<f64>),

    /// A sequence of dates with arbitrary precision.
    /// Used for the DA representation.
    Date(C<DicomDate>),

    /// A sequence of date-time values with arbitrary precision.
    /// Used for the DT representation.
    DateTime(C<DicomDateTime>),

    /// A sequence of time values with arbitrary precision.
    /// Used for the TM representation.
    Time(C<DicomTime>),
}

/// A utility macro for implementing the conversion from a core type into a
/// DICOM primitive value with a single element.
macro_rules! impl_from_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_elem(value, 1))
            }
        }
    };
}

impl_from_for_primitive!(u8, U8);
impl_from_for_primitive!(u16, U16);
impl_from_for_primitive!(i16, I16);
impl_from_for_primitive!(u32, U32);
impl_from_for_primitive!(i32, I32);
impl_from_for_primitive!(u64, U64);
impl_from_for_primitive!(i64, I64);
impl_from_for_primitive!(f32, F32);
impl_from_for_primitive!(f64, F64);

impl_from_for_primitive!(Tag, Tags);
impl_from_for_primitive!(DicomDate, Date);
impl_from_for_primitive!(DicomTime, Time);
impl_from_for_primitive!(DicomDateTime, DateTime);

impl From<String> for PrimitiveValue {
    fn from(value: String) -> Self {
        PrimitiveValue::Str(value)
    }
}

impl From<&str> for PrimitiveValue {
    fn from(value: &str) -> Self {
        PrimitiveValue::Str(value.to_owned())
    }
}

impl From<Vec<u8>> for PrimitiveValue {
    fn from(value: Vec<u8>) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

impl From<&[u8]> for PrimitiveValue {
    fn from(value: &[u8]) -> Self {
        PrimitiveValue::U8(C::from(value))
    }
}

macro_rules! impl_from_array_for_primitive {
    ($typ: ty, $variant: ident) => {
        impl From<$typ> for PrimitiveValue {
            fn from(value: $typ) -> Self {
                PrimitiveValue::$variant(C::from_slice(&value[..]))
            }
        }
    };
}

macro_rules! impl_from_array_for_primitive_1_to_8 {
    ($typ: ty, $variant: ident) => {
        impl_from_array_for_primitive!([$typ; 1], $variant);
        impl_from_array_for_primitive!([$typ; 2], $variant);
        impl_from_array_for_primitive!([$typ; 3], $variant);
        impl_from_array_for_primitive!([$typ; 4], $variant);
        impl_from_array_for_primitive!([$typ; 5], $variant);
        impl_from_array_for_primitive!([$typ; 6], $variant);
        impl_from_array_for_primitive!([$typ; 7], $variant);
        impl_from_array_for_primitive!([$typ; 8], $variant);
        impl_from_array_for_primitive!(&[$typ; 1], $variant);
        impl_from_array_for_primitive!(&[$typ; 2], $variant);
        impl_from_array_for_primitive!(&[$typ; 3], $variant);
        impl_from_array_for_primitive!(&[$typ; 4], $variant);
        impl_from_array_for_primitive!(&[$typ; 5], $variant);
        impl_from_array_for_primitive!(&[$typ; 6], $variant);
        impl_from_array_for_primitive!(&[$typ; 7], $variant);
        impl_from_array_for_primitive!(&[$typ; 8], $variant);
    };
}

impl_from_array_for_primitive_1_to_8!(u16, U16);
impl_from_array_for_primitive_1_to_8!(i16, I16);
impl_from_array_for_primitive_1_to_8!(u32, U32);
impl_from_array_for_primitive_1_to_8!(i32, I32);
impl_from_array_for_primitive_1_to_8!(u64, U64);
impl_from_array_for_primitive_1_to_8!(i64, I64);
impl_from_array_for_primitive_1_to_8!(f32, F32);
impl_from_array_for_primitive_1_to_8!(f64, F64);
impl_from_array_for_primitive_1_to_8!(DicomDate, Date);
impl_from_array_for_primitive_1_to_8!(DicomTime, Time);
impl_from_array_for_primitive_1_to_8!(DicomDateTime, DateTime);

impl PrimitiveValue {
    /// Create a single unsigned 16-bit value.
    pub fn new_u16(value: u16) -> Self {
        PrimitiveValue::U16(C::from_elem(value, 1))
    }

    /// Create a single unsigned 32-bit value.
    pub fn new_u32(value: u32) -> Self {
        PrimitiveValue::U32(C::from_elem(value, 1))
    }

    /// Create a single signed 32-bit value.
    pub fn new_i32(value: i32) -> Self {
        PrimitiveValue::I32(C::from_elem(value, 1))
    }

    /// Obtain the number of individual elements. This number may not
    /// match the DICOM value multiplicity in some value representations.
    pub fn multiplicity(&self) -> u32 {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            Str(_) => 1,
            Strs(c) => c.len() as u32,
            Tags(c) => c.len() as u32,
            U8(c) => c.len() as u32,
            I16(c) => c.len() as u32,
            U16(c) => c.len() as u32,
            I32(c) => c.len() as u32,
            U32(c) => c.len() as u32,
            I64(c) => c.len() as u32,
            U64(c) => c.len() as u32,
            F32(c) => c.len() as u32,
            F64(c) => c.len() as u32,
            Date(c) => c.len() as u32,
            DateTime(c) => c.len() as u32,
            Time(c) => c.len() as u32,
        }
    }

    /// Determine the number of bytes that this value would need to occupy
    /// in a DICOM file, without compression and without the header.
    /// As mandated by the standard, it is always even.
    /// The calculated number does not need to match the size of the original
    /// byte stream.
    pub fn calculate_byte_len(&self) -> usize {
        use self::PrimitiveValue::*;
        match self {
            Empty => 0,
            U8(c) => (c.len() + 1) & !1,
            I16(c) => c.len() * 2,
            U16(c) => c.len() * 2,
            U32(c) => c.len() * 4,
            I32(c) => c.len() * 4,
            U64(c) => c.len() * 8,
            I64(c) => c.len() * 8,
            F32(c) => c.len() * 4,
            F64(c) => c.len() * 8,
            Tags(c) => c.len() * 4,
            Str(s) => (s.as_bytes().len() + 1) & !1,
            Strs(c) if c.is_empty() => 0,
            Strs(c) => {
                let len = c.iter().map(|s| s.as_bytes().len() + 1).sum::<usize>() - 1;
                (len + 1) & !1
            }
            Date(c) if c.is_empty() => 0,
            Date(c) => {
                let len = c.iter().map(|d| d.to_encoded().len() + 1).sum::<usize>() - 1;
                (len + 1) & !1
            }
            Time(c) if c.is_empty() => 0,
            Time(c) => {
                let len = c.iter().map(|t| t.to_encoded().len() + 1).sum::<usize>() - 1;
                (len + 1) & !1
            }
            DateTime(c) if c.is_empty() => 0,
            DateTime(c) => {
                let len = c
                    .iter()
                    .map(|dt| dt.to_encoded().len() + 1)
                    .sum::<usize>()
                    - 1;
                (len + 1) & !1
            }
        }
    }

    /// Convert the primitive value into a string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided with trailing padding characters
    /// (spaces and null characters) stripped,
    /// and as is otherwise.
    /// In the case of `Strs` with multiple values,
    /// the strings are first joined together
    /// with a backslash (`'\\'`).
    /// All other type variants are first converted to a string,
    /// then joined together with a backslash.
    ///
    /// # Example
    ///
    /// ```
    /// # use medicom_core::dicom_value;
    /// # use medicom_core::value::PrimitiveValue;
    /// assert_eq!(
    ///     dicom_value!(Str, "Smith^John").to_str(),
    ///     "Smith^John",
    /// );
    ///
    /// assert_eq!(
    ///     dicom_value!(Strs, ["DERIVED", "PRIMARY"]).to_str(),
    ///     "DERIVED\\PRIMARY",
    /// );
    /// ```
    pub fn to_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(values) => {
                Cow::from(values.trim_end_matches(|c| c == ' ' || c == '\u{0}'))
            }
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    Cow::from(values[0].trim_end_matches(|c| c == ' ' || c == '\u{0}'))
                } else {
                    Cow::from(
                        values
                            .iter()
                            .map(|s| s.trim_end_matches(|c| c == ' ' || c == '\u{0}'))
                            .join("\\"),
                    )
                }
            }
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Convert the primitive value into a raw string representation.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided as is, with trailing padding characters kept.
    /// In the case of `Strs` with multiple values,
    /// the strings are first joined together
    /// with a backslash (`'\\'`).
    /// All other type variants are first converted to a string,
    /// then joined together with a backslash.
    pub fn to_raw_str(&self) -> Cow<str> {
        match self {
            PrimitiveValue::Empty => Cow::from(""),
            PrimitiveValue::Str(values) => Cow::from(values.as_str()),
            PrimitiveValue::Strs(values) if values.len() == 1 => Cow::from(values[0].as_str()),
            prim => Cow::from(prim.to_string()),
        }
    }

    /// Convert the primitive value into a sequence of strings.
    ///
    /// If the value is a string, it is converted into a vector of one string.
    /// If the value is a sequence of strings,
    /// it is returned without copying
    /// unless one of the strings carries trailing padding,
    /// in which case each string is provided
    /// with trailing whitespace and null characters removed.
    /// All other type variants are converted
    /// into their respective textual representations.
    pub fn to_multi_str(&self) -> Cow<[String]> {
        /// Auxiliary function for converting displayable values
        /// into a vector of strings.
        fn seq_to_str<I>(iter: I) -> Vec<String>
        where
            I: IntoIterator,
            I::Item: std::fmt::Display,
        {
            iter.into_iter().map(|x| x.to_string()).collect()
        }

        fn is_padding(c: char) -> bool {
            c == ' ' || c == '\u{0}'
        }

        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::Str(values) if values.ends_with(is_padding) => {
                vec![values.trim_end_matches(is_padding).to_string()].into()
            }
            PrimitiveValue::Str(values) => Cow::from(std::slice::from_ref(values)),
            PrimitiveValue::Strs(values) if values.iter().any(|s| s.ends_with(is_padding)) => {
                values
                    .iter()
                    .map(|s| s.trim_end_matches(is_padding).to_string())
                    .collect::<Vec<_>>()
                    .into()
            }
            PrimitiveValue::Strs(values) => Cow::from(&values[..]),
            PrimitiveValue::Date(values) => values
                .iter()
                .map(|date| date.to_encoded())
                .collect::<Vec<_>>()
                .into(),
            PrimitiveValue::Time(values) => values
                .iter()
                .map(|time| time.to_encoded())
                .collect::<Vec<_>>()
                .into(),
            PrimitiveValue::DateTime(values) => values
                .iter()
                .map(|dt| dt.to_encoded())
                .collect::<Vec<_>>()
                .into(),
            PrimitiveValue::U8(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::U16(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::I16(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::U32(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::I32(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::U64(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::I64(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::F32(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::F64(values) => Cow::Owned(seq_to_str(values)),
            PrimitiveValue::Tags(values) => Cow::Owned(seq_to_str(values)),
        }
    }

    /// Convert the full primitive value into raw bytes.
    ///
    /// String values already encoded with the `Str` and `Strs` variants
    /// are provided in UTF-8.
    /// Numeric values are in the platform's native byte order.
    ///
    /// # Example
    ///
    /// ```
    /// # use medicom_core::dicom_value;
    /// # use medicom_core::value::PrimitiveValue;
    /// assert_eq!(
    ///     PrimitiveValue::from("Smith^John").to_bytes(),
    ///     &b"Smith^John"[..],
    /// );
    /// ```
    pub fn to_bytes(&self) -> Cow<[u8]> {
        match self {
            PrimitiveValue::Empty => Cow::from(&[][..]),
            PrimitiveValue::U8(values) => Cow::from(&values[..]),
            PrimitiveValue::U16(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I16(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::U32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::U64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::I64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::F32(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::F64(values) => Cow::Borrowed(transmute_to_bytes(values)),
            PrimitiveValue::Str(values) => Cow::from(values.as_bytes()),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    // no need to copy if it's a single string
                    Cow::from(values[0].as_bytes())
                } else {
                    Cow::from(values.iter().join("\\").into_bytes())
                }
            }
            prim => match prim.to_str() {
                Cow::Borrowed(string) => Cow::Borrowed(string.as_bytes()),
                Cow::Owned(string) => Cow::Owned(string.into_bytes()),
            },
        }
    }

    /// Retrieve and convert the primitive value into an integer.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain an integer,
    /// potentially failing if the string does not represent a valid integer.
    /// If the value is already represented as a number,
    /// it is returned after a conversion to the target type.
    /// An error is returned if the number cannot be represented
    /// by the requested number type.
    ///
    /// # Example
    ///
    /// ```
    /// # use medicom_core::dicom_value;
    /// # use medicom_core::value::PrimitiveValue;
    /// assert_eq!(
    ///     dicom_value!(I32, [1, 2, 5]).to_int::<u32>().unwrap(),
    ///     1_u32,
    /// );
    ///
    /// assert_eq!(
    ///     dicom_value!(Strs, ["-73", "2"]).to_int::<i32>().unwrap(),
    ///     -73_i32,
    /// );
    /// ```
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: Clone,
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        match self {
            PrimitiveValue::Str(s) => {
                s.trim().parse().map_err(|err| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseIntegerSnafu.into_error(err))),
                })
            }
            PrimitiveValue::Strs(s) if !s.is_empty() => {
                s[0].trim().parse().map_err(|err| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseIntegerSnafu.into_error(err))),
                })
            }
            PrimitiveValue::U8(bytes) if !bytes.is_empty() => {
                NumCast::from(bytes[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: bytes[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::U16(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I16(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::U32(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I32(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::U64(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I64(s) if !s.is_empty() => {
                NumCast::from(s[0]).ok_or_else(|| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: s[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve and convert the primitive value into a sequence of integers.
    ///
    /// If the value is a string or sequence of strings,
    /// each string is parsed to obtain an integer.
    /// If the value is already represented as a sequence of numbers,
    /// each number is converted to the target type.
    /// An error is returned if any of the numbers cannot be represented
    /// by the requested number type.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: Clone,
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        /// Auxiliary function for converting a sequence of numbers
        /// into the target number type.
        fn numbers_to<N, T>(
            original: &PrimitiveValue,
            numbers: &[N],
        ) -> Result<Vec<T>, ConvertValueError>
        where
            N: ToString + ToPrimitive + Copy,
            T: NumCast,
        {
            numbers
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "integer",
                        original: original.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect()
        }

        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let out = s.trim().parse().map_err(|err| ConvertValueError {
                    requested: "integer",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseIntegerSnafu.into_error(err))),
                })?;
                Ok(vec![out])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|v| {
                    v.trim().parse().map_err(|err| ConvertValueError {
                        requested: "integer",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseIntegerSnafu.into_error(err))),
                    })
                })
                .collect(),
            PrimitiveValue::U8(c) => numbers_to(self, c),
            PrimitiveValue::U16(c) => numbers_to(self, c),
            PrimitiveValue::I16(c) => numbers_to(self, c),
            PrimitiveValue::U32(c) => numbers_to(self, c),
            PrimitiveValue::I32(c) => numbers_to(self, c),
            PrimitiveValue::U64(c) => numbers_to(self, c),
            PrimitiveValue::I64(c) => numbers_to(self, c),
            _ => Err(ConvertValueError {
                requested: "integer",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve one single-precision floating point from this value.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain a number.
    /// If the value is already represented as a number,
    /// it is returned after a conversion to `f32`.
    /// An error is returned if the number cannot be represented
    /// by the given number type.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        match self {
            PrimitiveValue::Str(s) => s.trim().parse().map_err(|err| ConvertValueError {
                requested: "float32",
                original: self.value_type(),
                cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
            }),
            PrimitiveValue::Strs(s) if !s.is_empty() => {
                s[0].trim().parse().map_err(|err| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                })
            }
            PrimitiveValue::U8(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::U16(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::I16(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::U32(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I32(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::U64(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I64(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::F32(c) if !c.is_empty() => Ok(c[0]),
            PrimitiveValue::F64(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            _ => Err(ConvertValueError {
                requested: "float32",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a sequence of single-precision floating points from this value.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let out = s.trim().parse().map_err(|err| ConvertValueError {
                    requested: "float32",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                })?;
                Ok(vec![out])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|v| {
                    v.trim().parse().map_err(|err| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                    })
                })
                .collect(),
            PrimitiveValue::U8(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U32(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::I32(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::U64(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::I64(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::F32(c) => Ok(c[..].to_owned()),
            PrimitiveValue::F64(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float32",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested: "float32",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve one double-precision floating point from this value.
    ///
    /// If the value is a string or sequence of strings,
    /// the first string is parsed to obtain a number.
    /// If the value is already represented as a number,
    /// it is returned after a conversion to `f64`.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        match self {
            PrimitiveValue::Str(s) => s.trim().parse().map_err(|err| ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
            }),
            PrimitiveValue::Strs(s) if !s.is_empty() => {
                s[0].trim().parse().map_err(|err| ConvertValueError {
                    requested: "float64",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                })
            }
            PrimitiveValue::U8(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::U16(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::I16(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::U32(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::I32(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::U64(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float64",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::I64(c) if !c.is_empty() => {
                NumCast::from(c[0]).ok_or_else(|| ConvertValueError {
                    requested: "float64",
                    original: self.value_type(),
                    cause: Some(Box::new(
                        NarrowConvertSnafu {
                            value: c[0].to_string(),
                        }
                        .build(),
                    )),
                })
            }
            PrimitiveValue::F32(c) if !c.is_empty() => Ok(c[0].into()),
            PrimitiveValue::F64(c) if !c.is_empty() => Ok(c[0]),
            _ => Err(ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a sequence of double-precision floating points from this value.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        match self {
            PrimitiveValue::Empty => Ok(Vec::new()),
            PrimitiveValue::Str(s) => {
                let out = s.trim().parse().map_err(|err| ConvertValueError {
                    requested: "float64",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                })?;
                Ok(vec![out])
            }
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|v| {
                    v.trim().parse().map_err(|err| ConvertValueError {
                        requested: "float64",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseFloatSnafu.into_error(err))),
                    })
                })
                .collect(),
            PrimitiveValue::U8(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I16(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::I32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::U64(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float64",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::I64(c) => c
                .iter()
                .map(|&v| {
                    NumCast::from(v).ok_or_else(|| ConvertValueError {
                        requested: "float64",
                        original: self.value_type(),
                        cause: Some(Box::new(
                            NarrowConvertSnafu {
                                value: v.to_string(),
                            }
                            .build(),
                        )),
                    })
                })
                .collect(),
            PrimitiveValue::F32(c) => Ok(c.iter().map(|&v| v.into()).collect()),
            PrimitiveValue::F64(c) => Ok(c[..].to_owned()),
            _ => Err(ConvertValueError {
                requested: "float64",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a single date from this value.
    ///
    /// If the value is already represented as a date, it is returned as is.
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a date,
    /// potentially failing if the string does not represent a valid date.
    /// If the value is a sequence of U8 bytes,
    /// the bytes are first interpreted as an ASCII character string.
    ///
    /// # Example
    ///
    /// ```
    /// # use medicom_core::dicom_value;
    /// # use medicom_core::value::{DicomDate, PrimitiveValue};
    /// assert_eq!(
    ///     dicom_value!(Str, "20141012").to_date().unwrap(),
    ///     DicomDate::from_ymd(2014, 10, 12).unwrap(),
    /// );
    /// ```
    pub fn to_date(&self) -> Result<DicomDate, ConvertValueError> {
        match self {
            PrimitiveValue::Date(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => super::deserialize::parse_date(s.trim_end().as_bytes())
                .map(|(date, _rest)| date)
                .map_err(|err| ConvertValueError {
                    requested: "Date",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                }),
            PrimitiveValue::Strs(s) => super::deserialize::parse_date(
                s.first().map(|s| s.trim_end().as_bytes()).unwrap_or(&[]),
            )
            .map(|(date, _rest)| date)
            .map_err(|err| ConvertValueError {
                requested: "Date",
                original: self.value_type(),
                cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
            }),
            PrimitiveValue::U8(bytes) => {
                super::deserialize::parse_date(trim_last_whitespace(bytes))
                    .map(|(date, _rest)| date)
                    .map_err(|err| ConvertValueError {
                        requested: "Date",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                    })
            }
            _ => Err(ConvertValueError {
                requested: "Date",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve the full sequence of dates from this value.
    pub fn to_multi_date(&self) -> Result<Vec<DicomDate>, ConvertValueError> {
        match self {
            PrimitiveValue::Date(v) => Ok(v.to_vec()),
            PrimitiveValue::Str(s) => super::deserialize::parse_date(s.trim_end().as_bytes())
                .map(|(date, _rest)| vec![date])
                .map_err(|err| ConvertValueError {
                    requested: "Date",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                }),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_date(s.trim_end().as_bytes())
                        .map(|(date, _rest)| date)
                        .map_err(|err| ConvertValueError {
                            requested: "Date",
                            original: self.value_type(),
                            cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                        })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested: "Date",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a single time from this value.
    ///
    /// If the value is already represented as a time, it is returned as is.
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a time,
    /// potentially failing if the string does not represent a valid time.
    /// If the value is a sequence of U8 bytes,
    /// the bytes are first interpreted as an ASCII character string.
    ///
    /// # Example
    ///
    /// ```
    /// # use medicom_core::dicom_value;
    /// # use medicom_core::value::{DicomTime, PrimitiveValue};
    /// assert_eq!(
    ///     dicom_value!(Str, "110926").to_time().unwrap(),
    ///     DicomTime::from_hms(11, 9, 26).unwrap(),
    /// );
    /// ```
    pub fn to_time(&self) -> Result<DicomTime, ConvertValueError> {
        match self {
            PrimitiveValue::Time(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => super::deserialize::parse_time(s.trim_end().as_bytes())
                .map(|(time, _rest)| time)
                .map_err(|err| ConvertValueError {
                    requested: "Time",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                }),
            PrimitiveValue::Strs(s) => super::deserialize::parse_time(
                s.first().map(|s| s.trim_end().as_bytes()).unwrap_or(&[]),
            )
            .map(|(time, _rest)| time)
            .map_err(|err| ConvertValueError {
                requested: "Time",
                original: self.value_type(),
                cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
            }),
            PrimitiveValue::U8(bytes) => {
                super::deserialize::parse_time(trim_last_whitespace(bytes))
                    .map(|(time, _rest)| time)
                    .map_err(|err| ConvertValueError {
                        requested: "Time",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                    })
            }
            _ => Err(ConvertValueError {
                requested: "Time",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve the full sequence of times from this value.
    pub fn to_multi_time(&self) -> Result<Vec<DicomTime>, ConvertValueError> {
        match self {
            PrimitiveValue::Time(v) => Ok(v.to_vec()),
            PrimitiveValue::Str(s) => super::deserialize::parse_time(s.trim_end().as_bytes())
                .map(|(time, _rest)| vec![time])
                .map_err(|err| ConvertValueError {
                    requested: "Time",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                }),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_time(s.trim_end().as_bytes())
                        .map(|(time, _rest)| time)
                        .map_err(|err| ConvertValueError {
                            requested: "Time",
                            original: self.value_type(),
                            cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                        })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested: "Time",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve a single date-time from this value.
    ///
    /// If the value is already represented as a date-time, it is returned as is.
    /// If the value is a string or sequence of strings,
    /// the first string is decoded to obtain a date-time,
    /// potentially failing if the string does not represent a valid date-time.
    /// If the value is a sequence of U8 bytes,
    /// the bytes are first interpreted as an ASCII character string.
    ///
    /// A value without a time zone suffix is left without a time zone,
    /// usually to be interpreted in the local time zone of the application.
    pub fn to_datetime(&self) -> Result<DicomDateTime, ConvertValueError> {
        match self {
            PrimitiveValue::DateTime(v) if !v.is_empty() => Ok(v[0]),
            PrimitiveValue::Str(s) => {
                super::deserialize::parse_datetime(s.trim_end().as_bytes()).map_err(|err| {
                    ConvertValueError {
                        requested: "DateTime",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                    }
                })
            }
            PrimitiveValue::Strs(s) => super::deserialize::parse_datetime(
                s.first().map(|s| s.trim_end().as_bytes()).unwrap_or(&[]),
            )
            .map_err(|err| ConvertValueError {
                requested: "DateTime",
                original: self.value_type(),
                cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
            }),
            PrimitiveValue::U8(bytes) => {
                super::deserialize::parse_datetime(trim_last_whitespace(bytes)).map_err(|err| {
                    ConvertValueError {
                        requested: "DateTime",
                        original: self.value_type(),
                        cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                    }
                })
            }
            _ => Err(ConvertValueError {
                requested: "DateTime",
                original: self.value_type(),
                cause: None,
            }),
        }
    }

    /// Retrieve the full sequence of date-times from this value.
    pub fn to_multi_datetime(&self) -> Result<Vec<DicomDateTime>, ConvertValueError> {
        match self {
            PrimitiveValue::DateTime(v) => Ok(v.to_vec()),
            PrimitiveValue::Str(s) => super::deserialize::parse_datetime(s.trim_end().as_bytes())
                .map(|dt| vec![dt])
                .map_err(|err| ConvertValueError {
                    requested: "DateTime",
                    original: self.value_type(),
                    cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                }),
            PrimitiveValue::Strs(s) => s
                .iter()
                .map(|s| {
                    super::deserialize::parse_datetime(s.trim_end().as_bytes()).map_err(|err| {
                        ConvertValueError {
                            requested: "DateTime",
                            original: self.value_type(),
                            cause: Some(Box::new(ParseDateTimeSnafu.into_error(err))),
                        }
                    })
                })
                .collect(),
            _ => Err(ConvertValueError {
                requested: "DateTime",
                original: self.value_type(),
                cause: None,
            }),
        }
    }
}

fn trim_last_whitespace(x: &[u8]) -> &[u8] {
    match x.last() {
        Some(b' ') | Some(b'\0') => &x[..x.len() - 1],
        _ => x,
    }
}

/// Macro for implementing getters to single and multi-values of each variant.
///
/// Should be placed inside `PrimitiveValue`'s impl block.
macro_rules! impl_primitive_getters {
    ($name_single: ident, $name_multi: ident, $variant: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        ///
        /// If it contains multiple values,
        /// only the first one is returned.
        /// An error is returned if the variant is not compatible.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            match self {
                PrimitiveValue::$variant(c) if c.is_empty() => Err(CastValueError {
                    requested: stringify!($name_single),
                    got: ValueType::Empty,
                }),
                PrimitiveValue::$variant(c) => Ok(c[0]),
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
                PrimitiveValue::$variant(c) => Ok(c),
                value => Err(CastValueError {
                    requested: stringify!($name_multi),
                    got: value.value_type(),
                }),
            }
        }
    };
}

/// Per variant, strongly checked getters to DICOM values.
///
/// Conversions from one representation to another do not take place
/// when using these methods.
impl PrimitiveValue {
    /// Get a single string value.
    ///
    /// If it contains multiple strings,
    /// only the first one is returned.
    ///
    /// An error is returned if the variant is not compatible.
    ///
    /// To enable conversions of other variants to a textual representation,
    /// see [`to_str()`] instead.
    ///
    /// [`to_str()`]: #method.to_str
    pub fn string(&self) -> Result<&str, CastValueError> {
        use self::PrimitiveValue::*;
        match self {
            Strs(c) if c.is_empty() => Err(CastValueError {
                requested: "Str",
                got: ValueType::Empty,
            }),
            Strs(c) => Ok(&c[0]),
            Str(s) => Ok(s),
            value => Err(CastValueError {
                requested: "Str",
                got: value.value_type(),
            }),
        }
    }

    /// Get the inner sequence of string values
    /// if the variant is either `Str` or `Strs`.
    ///
    /// An error is returned if the variant is not compatible.
    ///
    /// To enable conversions of other variants to a textual representation,
    /// see [`to_str()`] instead.
    ///
    /// [`to_str()`]: #method.to_str
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        use self::PrimitiveValue::*;
        match self {
            Strs(c) => Ok(c),
            Str(s) => Ok(std::slice::from_ref(s)),
            value => Err(CastValueError {
                requested: "strings",
                got: value.value_type(),
            }),
        }
    }

    impl_primitive_getters!(tag, tags, Tags, Tag);
    impl_primitive_getters!(date, dates, Date, DicomDate);
    impl_primitive_getters!(time, times, Time, DicomTime);
    impl_primitive_getters!(datetime, datetimes, DateTime, DicomDateTime);
    impl_primitive_getters!(uint8, uint8_slice, U8, u8);
    impl_primitive_getters!(uint16, uint16_slice, U16, u16);
    impl_primitive_getters!(int16, int16_slice, I16, i16);
    impl_primitive_getters!(uint32, uint32_slice, U32, u32);
    impl_primitive_getters!(int32, int32_slice, I32, i32);
    impl_primitive_getters!(int64, int64_slice, I64, i64);
    impl_primitive_getters!(uint64, uint64_slice, U64, u64);
    impl_primitive_getters!(float32, float32_slice, F32, f32);
    impl_primitive_getters!(float64, float64_slice, F64, f64);
}

/// The output of this method is a sequence of textual values
/// joined by a backslash (`'\\'`).
impl fmt::Display for PrimitiveValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        /// Auxiliary function for turning a sequence of values
        /// into a backslash-delimited string.
        fn seq_to_str<I>(iter: I) -> String
        where
            I: IntoIterator,
            I::Item: fmt::Display,
        {
            iter.into_iter().map(|x| x.to_string()).join("\\")
        }

        match self {
            PrimitiveValue::Empty => Ok(()),
            PrimitiveValue::Str(value) => f.write_str(value),
            PrimitiveValue::Strs(values) => {
                if values.len() == 1 {
                    f.write_str(&values[0])
                } else {
                    f.write_str(&seq_to_str(values))
                }
            }
            PrimitiveValue::Date(values) => {
                f.write_str(&values.iter().map(|date| date.to_encoded()).join("\\"))
            }
            PrimitiveValue::Time(values) => {
                f.write_str(&values.iter().map(|time| time.to_encoded()).join("\\"))
            }
            PrimitiveValue::DateTime(values) => {
                f.write_str(&values.iter().map(|dt| dt.to_encoded()).join("\\"))
            }
            PrimitiveValue::U8(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I16(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::U64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::I64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F32(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::F64(values) => f.write_str(&seq_to_str(values)),
            PrimitiveValue::Tags(values) => f.write_str(&seq_to_str(values)),
        }
    }
}

impl HasLength for PrimitiveValue {
    fn length(&self) -> Length {
        Length::defined(self.calculate_byte_len() as u32)
    }
}

/// An enum representing an abstraction of a DICOM element's data value type.
/// This should be the equivalent of `PrimitiveValue` without the content,
/// plus the `Item` and `PixelSequence` entries.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ValueType {
    /// No data. Used for any value of length 0.
    Empty,

    /// An item. Used for elements in a SQ, regardless of content.
    Item,

    /// An item. Used for the values of encapsulated pixel data.
    PixelSequence,

    /// A sequence of strings.
    /// Used for AE, AS, PN, SH, CS, LO, UI and UC.
    /// Can also be used for IS, DS, DA, DT and TM when decoding
    /// with format preservation.
    Strs,

    /// A single string.
    /// Used for ST, LT, UT and UR, which are never multi-valued.
    Str,

    /// A sequence of attribute tags.
    /// Used specifically for AT.
    Tags,

    /// The value is a sequence of unsigned 8-bit integers.
    /// Used for OB and UN.
    U8,

    /// The value is a sequence of signed 16-bit integers.
    /// Used for SS.
    I16,

    /// A sequence of unsigned 16-bit integers.
    /// Used for US and OW.
    U16,

    /// A sequence of signed 32-bit integers.
    /// Used for SL and IS.
    I32,

    /// A sequence of unsigned 32-bit integers.
    /// Used for UL and OL.
    U32,

    /// A sequence of signed 64-bit integers.
    /// Used for SV.
    I64,

    /// A sequence of unsigned 64-bit integers.
    /// Used for UV and OV.
    U64,

    /// The value is a sequence of 32-bit floating point numbers.
    /// Used for OF and FL.
    F32,

    /// The value is a sequence of 64-bit floating point numbers.
    /// Used for OD, FD and DS.
    F64,

    /// A sequence of dates.
    /// Used for the DA representation.
    Date,

    /// A sequence of date-time values.
    /// Used for the DT representation.
    DateTime,

    /// A sequence of time values.
    /// Used for the TM representation.
    Time,
}

impl DicomValueType for PrimitiveValue {
    fn value_type(&self) -> ValueType {
        match *self {
            PrimitiveValue::Empty => ValueType::Empty,
            PrimitiveValue::Date(_) => ValueType::Date,
            PrimitiveValue::DateTime(_) => ValueType::DateTime,
            PrimitiveValue::F32(_) => ValueType::F32,
            PrimitiveValue::F64(_) => ValueType::F64,
            PrimitiveValue::I16(_) => ValueType::I16,
            PrimitiveValue::I32(_) => ValueType::I32,
            PrimitiveValue::I64(_) => ValueType::I64,
            PrimitiveValue::Str(_) => ValueType::Str,
            PrimitiveValue::Strs(_) => ValueType::Strs,
            PrimitiveValue::Tags(_) => ValueType::Tags,
            PrimitiveValue::Time(_) => ValueType::Time,
            PrimitiveValue::U16(_) => ValueType::U16,
            PrimitiveValue::U32(_) => ValueType::U32,
            PrimitiveValue::U64(_) => ValueType::U64,
            PrimitiveValue::U8(_) => ValueType::U8,
        }
    }

    fn cardinality(&self) -> usize {
        match self {
            PrimitiveValue::Empty => 0,
            PrimitiveValue::Str(_) => 1,
            PrimitiveValue::Date(b) => b.len(),
            PrimitiveValue::DateTime(b) => b.len(),
            PrimitiveValue::F32(b) => b.len(),
            PrimitiveValue::F64(b) => b.len(),
            PrimitiveValue::I16(b) => b.len(),
            PrimitiveValue::I32(b) => b.len(),
            PrimitiveValue::I64(b) => b.len(),
            PrimitiveValue::Strs(b) => b.len(),
            PrimitiveValue::Tags(b) => b.len(),
            PrimitiveValue::Time(b) => b.len(),
            PrimitiveValue::U16(b) => b.len(),
            PrimitiveValue::U32(b) => b.len(),
            PrimitiveValue::U64(b) => b.len(),
            PrimitiveValue::U8(b) => b.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CastValueError;
    use crate::dicom_value;
    use crate::value::partial::{DicomDate, DicomDateTime, DicomTime};
    use crate::value::{PrimitiveValue, ValueType};
    use smallvec::smallvec;

    #[test]
    fn primitive_value_to_str() {
        assert_eq!(PrimitiveValue::Empty.to_str(), "");

        // does not copy on a single string
        let value = PrimitiveValue::Str("Smith^John".to_string());
        let string = value.to_str();
        assert_eq!(string, "Smith^John");
        match string {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected string to be borrowed, but was owned"),
        }

        assert_eq!(
            PrimitiveValue::Date(smallvec![DicomDate::from_ymd(2014, 10, 12).unwrap()]).to_str(),
            "20141012",
        );
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY", "WHOLE BODY", "EMISSION"]).to_str(),
            "DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION",
        );

        // sequence of numbers
        let value = PrimitiveValue::from(vec![10, 11, 12]);
        assert_eq!(value.to_str(), "10\\11\\12");

        // trailing padding is stripped
        assert_eq!(PrimitiveValue::from("1.2.840.10008.1.2\0").to_str(), "1.2.840.10008.1.2");

        // raw string keeps the padding
        assert_eq!(
            PrimitiveValue::from("1.2.840.10008.1.2\0").to_raw_str(),
            "1.2.840.10008.1.2\0",
        );
    }

    #[test]
    fn primitive_value_to_multi_str() {
        // does not copy when no padding is present
        let value = dicom_value!(Strs, ["DERIVED", "PRIMARY"]);
        let strings = value.to_multi_str();
        assert_eq!(&*strings, ["DERIVED", "PRIMARY"]);
        match strings {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected strings to be borrowed, but were owned"),
        }

        // trailing padding is stripped from each value
        assert_eq!(
            &*dicom_value!(Strs, ["ORIGINAL", "PRIMARY "]).to_multi_str(),
            ["ORIGINAL", "PRIMARY"],
        );
        assert_eq!(
            &*PrimitiveValue::from("1.2.840.10008.1.2\0").to_multi_str(),
            ["1.2.840.10008.1.2"],
        );
    }

    #[test]
    fn primitive_value_to_bytes() {
        assert_eq!(PrimitiveValue::Empty.to_bytes(), &[][..]);

        if cfg!(target_endian = "little") {
            assert_eq!(
                PrimitiveValue::U16(smallvec![1, 2, 0x0601]).to_bytes(),
                &[0x01, 0x00, 0x02, 0x00, 0x01, 0x06][..],
            );
        } else {
            assert_eq!(
                PrimitiveValue::U16(smallvec![0x0001, 0x0002, 0x0601]).to_bytes(),
                &[0x00, 0x01, 0x00, 0x02, 0x06, 0x01][..],
            );
        }

        // does not copy on a single string
        let value = PrimitiveValue::from("Smith^John");
        let bytes = value.to_bytes();
        assert_eq!(bytes, &b"Smith^John"[..]);
        match bytes {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected bytes to be borrowed, but are owned"),
        }

        assert_eq!(
            PrimitiveValue::Date(smallvec![DicomDate::from_ymd(2014, 10, 12).unwrap()])
                .to_bytes(),
            &b"20141012"[..],
        );
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY", "WHOLE BODY", "EMISSION"]).to_bytes(),
            &b"DERIVED\\PRIMARY\\WHOLE BODY\\EMISSION"[..],
        );

        // does not copy on bytes
        let value = PrimitiveValue::from(vec![0x99; 16]);
        let bytes = value.to_bytes();
        assert_eq!(bytes, &[0x99; 16][..]);
        match bytes {
            std::borrow::Cow::Borrowed(_) => {} // good
            _ => panic!("expected bytes to be borrowed, but are owned"),
        }
    }

    #[test]
    fn primitive_value_to_int() {
        assert!(PrimitiveValue::Empty.to_int::<i32>().is_err());

        // exact match
        assert_eq!(
            PrimitiveValue::from(0x0601_u16).to_int::<u16>().unwrap(),
            0x0601,
        );
        // conversions are automatically applied
        assert_eq!(
            PrimitiveValue::from(0x0601_u16).to_int::<u32>().unwrap(),
            0x0601,
        );
        assert_eq!(
            PrimitiveValue::from(0x0601_u16).to_int::<i64>().unwrap(),
            0x0601,
        );

        // takes the first number
        assert_eq!(dicom_value!(I32, [1, 2, 5]).to_int::<i32>().unwrap(), 1);

        // admits an integer as text, with or without spaces
        assert_eq!(dicom_value!(Strs, ["-73", "2"]).to_int::<i32>().unwrap(), -73);
        assert_eq!(dicom_value!(Str, " 42 ").to_int::<u8>().unwrap(), 42);

        // does not admit destructive conversions
        assert!(PrimitiveValue::from(-1).to_int::<u32>().is_err());

        // does not admit strings which are not numbers
        assert!(dicom_value!(Strs, ["Smith^John"]).to_int::<u8>().is_err());

        // full sequence of integers
        assert_eq!(
            dicom_value!(U16, [5, 6, 7]).to_multi_int::<u32>().unwrap(),
            vec![5_u32, 6, 7],
        );
        assert_eq!(
            dicom_value!(Strs, ["5", "6", "7"]).to_multi_int::<u8>().unwrap(),
            vec![5_u8, 6, 7],
        );
    }

    #[test]
    fn primitive_value_to_float() {
        assert_eq!(PrimitiveValue::from(3.5_f64).to_float64().unwrap(), 3.5);
        assert_eq!(dicom_value!(Str, "-6.75").to_float64().unwrap(), -6.75);
        assert_eq!(dicom_value!(Str, "-6.75").to_float32().unwrap(), -6.75);
        assert_eq!(
            dicom_value!(Strs, ["1.5", "2.5"]).to_multi_float64().unwrap(),
            vec![1.5, 2.5],
        );
        assert_eq!(
            PrimitiveValue::from(4_u16).to_float32().unwrap(),
            4.,
        );
        assert!(dicom_value!(Str, "Smith^John").to_float64().is_err());
    }

    #[test]
    fn primitive_value_to_date() {
        // trivial conversion
        assert_eq!(
            PrimitiveValue::Date(smallvec![DicomDate::from_ymd(2014, 10, 12).unwrap()])
                .to_date()
                .unwrap(),
            DicomDate::from_ymd(2014, 10, 12).unwrap(),
        );
        // from text (Str)
        assert_eq!(
            dicom_value!(Str, "20141012").to_date().unwrap(),
            DicomDate::from_ymd(2014, 10, 12).unwrap(),
        );
        // from text (Strs)
        assert_eq!(
            dicom_value!(Strs, ["20141012"]).to_date().unwrap(),
            DicomDate::from_ymd(2014, 10, 12).unwrap(),
        );
        // from bytes
        assert_eq!(
            PrimitiveValue::from(&b"20141012"[..]).to_date().unwrap(),
            DicomDate::from_ymd(2014, 10, 12).unwrap(),
        );
        // partial precision is preserved
        assert_eq!(
            dicom_value!(Str, "201410").to_date().unwrap(),
            DicomDate::from_ym(2014, 10).unwrap(),
        );
        // not a date
        assert!(PrimitiveValue::Str("Smith^John".to_string()).to_date().is_err());
    }

    #[test]
    fn primitive_value_to_time() {
        // trivial conversion
        assert_eq!(
            PrimitiveValue::from(DicomTime::from_hms(11, 9, 26).unwrap())
                .to_time()
                .unwrap(),
            DicomTime::from_hms(11, 9, 26).unwrap(),
        );
        // from text (Str)
        assert_eq!(
            dicom_value!(Str, "110926").to_time().unwrap(),
            DicomTime::from_hms(11, 9, 26).unwrap(),
        );
        // from text (Strs) with fraction of a second
        assert_eq!(
            dicom_value!(Strs, ["110926.123456"]).to_time().unwrap(),
            DicomTime::from_hms_micro(11, 9, 26, 123_456).unwrap(),
        );
        // from bytes with fraction of a second
        assert_eq!(
            PrimitiveValue::from(&b"110926.987"[..]).to_time().unwrap(),
            DicomTime::from_hmsf(11, 9, 26, 987, 3).unwrap(),
        );
        // not a time
        assert!(PrimitiveValue::Str("Smith^John".to_string()).to_time().is_err());
    }

    #[test]
    fn primitive_value_to_datetime() {
        assert_eq!(
            dicom_value!(Str, "20121221093001").to_datetime().unwrap(),
            DicomDateTime::from_date_and_time(
                DicomDate::from_ymd(2012, 12, 21).unwrap(),
                DicomTime::from_hms(9, 30, 1).unwrap(),
            )
            .unwrap(),
        );
        assert_eq!(
            dicom_value!(Str, "20121221").to_datetime().unwrap(),
            DicomDateTime::from_date(DicomDate::from_ymd(2012, 12, 21).unwrap()),
        );
        assert!(dicom_value!(Str, "Smith^John").to_datetime().is_err());
    }

    #[test]
    fn primitive_value_getters() {
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY"]).string().unwrap(),
            "DERIVED"
        );
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY"]).strings().unwrap(),
            &["DERIVED".to_owned(), "PRIMARY".to_owned()][..]
        );
        assert_eq!(dicom_value!(U16, [1, 2, 5]).uint16().unwrap(), 1);
        assert_eq!(
            dicom_value!(U16, [1, 2, 5]).uint16_slice().unwrap(),
            &[1, 2, 5][..]
        );
        assert_eq!(
            dicom_value!(U16, [1, 2, 5]).uint32(),
            Err(CastValueError {
                requested: "uint32",
                got: ValueType::U16,
            })
        );
        assert_eq!(
            PrimitiveValue::Empty.uint16(),
            Err(CastValueError {
                requested: "uint16",
                got: ValueType::Empty,
            })
        );
    }

    #[test]
    fn calculate_byte_len() {
        // single even string
        assert_eq!(dicom_value!(Str, "MR").calculate_byte_len(), 2);
        // single odd string is padded
        assert_eq!(dicom_value!(Str, "ISO_IR 100").calculate_byte_len(), 10);
        assert_eq!(dicom_value!(Str, "ISO_IR 6").calculate_byte_len(), 8);
        assert_eq!(dicom_value!(Str, "A").calculate_byte_len(), 2);
        // multiple strings are joined by a separator, then padded
        assert_eq!(
            dicom_value!(Strs, ["DERIVED", "PRIMARY"]).calculate_byte_len(),
            16
        );
        assert_eq!(dicom_value!(Strs, ["A", "B"]).calculate_byte_len(), 4);
        // numbers
        assert_eq!(dicom_value!(U16, [1, 2, 5]).calculate_byte_len(), 6);
        assert_eq!(PrimitiveValue::from(1.25_f64).calculate_byte_len(), 8);
        // odd number of bytes is padded
        assert_eq!(PrimitiveValue::from(vec![1_u8, 2, 3]).calculate_byte_len(), 4);
        // dates
        assert_eq!(
            PrimitiveValue::from(DicomDate::from_ymd(2014, 10, 12).unwrap()).calculate_byte_len(),
            8
        );
        assert_eq!(
            PrimitiveValue::from(DicomDate::from_ym(2014, 10).unwrap()).calculate_byte_len(),
            6
        );
    }
}
