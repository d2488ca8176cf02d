//! This module contains an assortment of types required for interpreting
//! DICOM data elements.
//! It comprises a variety of basic data types, such as the DICOM attribute tag,
//! the data element header, and the element composite types.

use crate::value::{
    CastValueError, ConvertValueError, DicomDate, DicomDateTime, DicomTime, DicomValueType,
    InMemFragment, PrimitiveValue, Value,
};
use num_traits::NumCast;
use snafu::{ensure, Backtrace, OptionExt, Snafu};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::str::{from_utf8, FromStr};

/// Error type for issues constructing a sequence item header.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum SequenceItemHeaderError {
    /// Unexpected header tag.
    /// Only Item (0xFFFE, 0xE000),
    /// Item Delimiter (0xFFFE, 0xE00D),
    /// or Sequence Delimiter (0xFFFE, 0xE0DD)
    /// are admitted.
    #[snafu(display("Unexpected tag {}", tag))]
    UnexpectedTag { tag: Tag, backtrace: Backtrace },
    /// Unexpected delimiter value length.
    /// Must be zero for item delimiters.
    #[snafu(display("Unexpected delimiter length {}", len))]
    UnexpectedDelimiterLength { len: Length, backtrace: Backtrace },
}

type Result<T, E = SequenceItemHeaderError> = std::result::Result<T, E>;

/// Trait for any DICOM entity (element or item) which may have a length.
pub trait HasLength {
    /// Retrieve the value data's length as specified by the data element or
    /// item, in bytes.
    ///
    /// It is named `length` to make it distinct from the conventional method
    /// signature `len(&self) -> usize` for the number of elements of a
    /// collection.
    ///
    /// According to the standard, the concrete value size may be undefined,
    /// which can be the case for sequence elements or specific primitive
    /// values.
    fn length(&self) -> Length;

    /// Check whether the value is empty (0 length).
    fn is_empty(&self) -> bool {
        self.length() == Length(0)
    }
}

/// A trait for a data type containing a DICOM header.
#[allow(clippy::len_without_is_empty)]
pub trait Header: HasLength {
    /// Retrieve the element's tag as a `(group, element)` tuple.
    fn tag(&self) -> Tag;

    /// Check whether this is the header of an item.
    fn is_item(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE000)
    }

    /// Check whether this is the header of an item delimiter.
    fn is_item_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE00D)
    }

    /// Check whether this is the header of a sequence delimiter.
    fn is_sequence_delimiter(&self) -> bool {
        self.tag() == Tag(0xFFFE, 0xE0DD)
    }

    /// Check whether this is the header of an encapsulated pixel data element.
    fn is_encapsulated_pixeldata(&self) -> bool {
        self.tag() == Tag(0x7FE0, 0x0010) && self.length().is_undefined()
    }
}

/// A data type that represents and owns a DICOM data element.
///
/// This type is capable of representing any data element fully in memory,
/// whether it be a primitive value,
/// a nested data set (in which each item of type `I`
/// is an abstraction over data sets),
/// or encapsulated pixel data,
/// in which each fragment is of type `P`.
///
/// # Example
///
/// ```
/// # use medicom_core::header::{DataElement, Tag, VR};
/// let patient_name: DataElement = DataElement::new(
///     Tag(0x0010, 0x0010),
///     VR::PN,
///     "Doe^John",
/// );
/// assert_eq!(patient_name.to_str().unwrap(), "Doe^John");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct DataElement<I = EmptyObject, P = InMemFragment> {
    header: DataElementHeader,
    value: Value<I, P>,
}

/// A data type that represents a DICOM sequence item header,
/// as interpreted while traversing a sequence.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum SequenceItemHeader {
    /// The cursor contains an item.
    Item {
        /// the length of the item in bytes (can be undefined)
        len: Length,
    },
    /// The cursor read an item delimiter.
    /// The element ends here and should not be read any further.
    ItemDelimiter,
    /// The cursor read a sequence delimiter.
    /// The element ends here and should not be read any further.
    SequenceDelimiter,
}

impl SequenceItemHeader {
    /// Create a sequence item header using the element's raw properties.
    /// An error can be raised if the given properties do not relate to a
    /// sequence item, an item delimiter or a sequence delimiter.
    pub fn new<T: Into<Tag>>(tag: T, len: Length) -> Result<SequenceItemHeader> {
        match tag.into() {
            Tag(0xFFFE, 0xE000) => {
                // item
                Ok(SequenceItemHeader::Item { len })
            }
            Tag(0xFFFE, 0xE00D) => {
                // item delimiter
                // delimiters should not have a positive length
                if len != Length(0) {
                    UnexpectedDelimiterLengthSnafu { len }.fail()
                } else {
                    Ok(SequenceItemHeader::ItemDelimiter)
                }
            }
            Tag(0xFFFE, 0xE0DD) => {
                // sequence delimiter
                Ok(SequenceItemHeader::SequenceDelimiter)
            }
            tag => UnexpectedTagSnafu { tag }.fail(),
        }
    }
}

impl HasLength for SequenceItemHeader {
    fn length(&self) -> Length {
        match self {
            SequenceItemHeader::Item { len } => *len,
            SequenceItemHeader::ItemDelimiter | SequenceItemHeader::SequenceDelimiter => Length(0),
        }
    }
}

impl Header for SequenceItemHeader {
    fn tag(&self) -> Tag {
        match self {
            SequenceItemHeader::Item { .. } => Tag(0xFFFE, 0xE000),
            SequenceItemHeader::ItemDelimiter => Tag(0xFFFE, 0xE00D),
            SequenceItemHeader::SequenceDelimiter => Tag(0xFFFE, 0xE0DD),
        }
    }
}

/// A data structure for a data element header, containing
/// a tag, value representation and specified length.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct DataElementHeader {
    /// DICOM tag
    pub tag: Tag,
    /// Value Representation
    pub vr: VR,
    /// Element length
    pub len: Length,
}

impl HasLength for DataElementHeader {
    fn length(&self) -> Length {
        self.len
    }
}

impl Header for DataElementHeader {
    fn tag(&self) -> Tag {
        self.tag
    }
}

impl DataElementHeader {
    /// Create a new data element header with the given properties.
    /// This is just a trivial constructor.
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, len: Length) -> DataElementHeader {
        DataElementHeader {
            tag: tag.into(),
            vr,
            len,
        }
    }

    /// Retrieve the element header's value representation.
    pub fn vr(&self) -> VR {
        self.vr
    }

    /// Check whether the header suggests the value to be a non-primitive
    /// value, such as a data set sequence or an encapsulated pixel data
    /// sequence.
    pub fn is_non_primitive(&self) -> bool {
        self.vr == VR::SQ || self.is_encapsulated_pixeldata()
    }
}

impl From<SequenceItemHeader> for DataElementHeader {
    fn from(value: SequenceItemHeader) -> DataElementHeader {
        DataElementHeader {
            tag: value.tag(),
            vr: VR::UN,
            len: value.length(),
        }
    }
}

impl<I, P> HasLength for DataElement<I, P> {
    #[inline]
    fn length(&self) -> Length {
        self.header.length()
    }
}

impl<I, P> Header for DataElement<I, P> {
    #[inline]
    fn tag(&self) -> Tag {
        self.header.tag()
    }
}

impl<I, P> HasLength for &DataElement<I, P> {
    #[inline]
    fn length(&self) -> Length {
        (**self).length()
    }
}

impl<I, P> Header for &DataElement<I, P> {
    #[inline]
    fn tag(&self) -> Tag {
        (**self).tag()
    }
}

impl<I, P> DataElement<I, P> {
    /// Create an empty data element.
    pub fn empty<T: Into<Tag>>(tag: T, vr: VR) -> Self {
        DataElement {
            header: DataElementHeader {
                tag: tag.into(),
                vr,
                len: Length(0),
            },
            value: PrimitiveValue::Empty.into(),
        }
    }

    /// Retrieve the element header.
    pub fn header(&self) -> &DataElementHeader {
        &self.header
    }

    /// Retrieve the element header's value representation.
    pub fn vr(&self) -> VR {
        self.header.vr()
    }

    /// Retrieve the data value.
    pub fn value(&self) -> &Value<I, P> {
        &self.value
    }

    /// Move the data value out of the element, discarding the header.
    pub fn into_value(self) -> Value<I, P> {
        self.value
    }

    /// Split the constituent parts of this element into a tuple.
    pub fn into_parts(self) -> (DataElementHeader, Value<I, P>) {
        (self.header, self.value)
    }

    /// Gets a reference to the items of a data set sequence.
    ///
    /// Returns `None` if the value is not a data set sequence.
    pub fn items(&self) -> Option<&[I]> {
        self.value.items()
    }

    /// Gets a reference to the fragments of an encapsulated pixel data value.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn fragments(&self) -> Option<&[P]> {
        self.value.fragments()
    }

    /// Gets a reference to the encapsulated pixel data's basic offset table.
    ///
    /// Returns `None` if the value is not a pixel data fragment sequence.
    pub fn offset_table(&self) -> Option<&[u32]> {
        self.value.offset_table()
    }
}

impl<I, P> DataElement<I, P>
where
    I: HasLength,
{
    /// Create a new data element.
    ///
    /// The element's length is inferred from the given value.
    pub fn new<T: Into<Tag>>(tag: T, vr: VR, value: impl Into<Value<I, P>>) -> Self {
        let value = value.into();
        DataElement {
            header: DataElementHeader {
                tag: tag.into(),
                vr,
                len: value.length(),
            },
            value,
        }
    }

    /// Create a new data element with the given length.
    ///
    /// The length is not checked against the value's effective byte size.
    pub fn new_with_len<T: Into<Tag>>(
        tag: T,
        vr: VR,
        length: Length,
        value: impl Into<Value<I, P>>,
    ) -> Self {
        DataElement {
            header: DataElementHeader {
                tag: tag.into(),
                vr,
                len: length,
            },
            value: value.into(),
        }
    }

    /// Apply the given function over the data value,
    /// then update the header's length to match the new value.
    pub fn update_value(&mut self, mut f: impl FnMut(&mut Value<I, P>)) {
        f(&mut self.value);
        self.header.len = self.value.length();
    }

    /// Retrieve the value data as a single string.
    ///
    /// If the value contains multiple strings,
    /// they are joined together by a backslash (`'\\'`).
    /// Trailing padding characters are stripped.
    pub fn to_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_str()
    }

    /// Retrieve the value data as a single raw string,
    /// with trailing padding characters kept.
    pub fn to_raw_str(&self) -> Result<Cow<str>, CastValueError> {
        self.value.to_raw_str()
    }

    /// Retrieve the value data as a sequence of strings.
    pub fn to_multi_str(&self) -> Result<Cow<[String]>, CastValueError> {
        self.value.to_multi_str()
    }

    /// Retrieve the value data as raw bytes.
    pub fn to_bytes(&self) -> Result<Cow<[u8]>, CastValueError> {
        self.value.to_bytes()
    }

    /// Retrieve and convert the value data into an integer.
    pub fn to_int<T>(&self) -> Result<T, ConvertValueError>
    where
        T: Clone,
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.value.to_int::<T>()
    }

    /// Retrieve and convert the value data into a sequence of integers.
    pub fn to_multi_int<T>(&self) -> Result<Vec<T>, ConvertValueError>
    where
        T: Clone,
        T: NumCast,
        T: FromStr<Err = std::num::ParseIntError>,
    {
        self.value.to_multi_int::<T>()
    }

    /// Retrieve and convert the value data
    /// into a single-precision floating point number.
    pub fn to_float32(&self) -> Result<f32, ConvertValueError> {
        self.value.to_float32()
    }

    /// Retrieve and convert the value data
    /// into a sequence of single-precision floating point numbers.
    pub fn to_multi_float32(&self) -> Result<Vec<f32>, ConvertValueError> {
        self.value.to_multi_float32()
    }

    /// Retrieve and convert the value data
    /// into a double-precision floating point number.
    pub fn to_float64(&self) -> Result<f64, ConvertValueError> {
        self.value.to_float64()
    }

    /// Retrieve and convert the value data
    /// into a sequence of double-precision floating point numbers.
    pub fn to_multi_float64(&self) -> Result<Vec<f64>, ConvertValueError> {
        self.value.to_multi_float64()
    }

    /// Retrieve and convert the value data into a date.
    pub fn to_date(&self) -> Result<DicomDate, ConvertValueError> {
        self.value.to_date()
    }

    /// Retrieve and convert the value data into a sequence of dates.
    pub fn to_multi_date(&self) -> Result<Vec<DicomDate>, ConvertValueError> {
        self.value.to_multi_date()
    }

    /// Retrieve and convert the value data into a time.
    pub fn to_time(&self) -> Result<DicomTime, ConvertValueError> {
        self.value.to_time()
    }

    /// Retrieve and convert the value data into a sequence of times.
    pub fn to_multi_time(&self) -> Result<Vec<DicomTime>, ConvertValueError> {
        self.value.to_multi_time()
    }

    /// Retrieve and convert the value data into a date-time.
    pub fn to_datetime(&self) -> Result<DicomDateTime, ConvertValueError> {
        self.value.to_datetime()
    }

    /// Retrieve and convert the value data into a sequence of date-times.
    pub fn to_multi_datetime(&self) -> Result<Vec<DicomDateTime>, ConvertValueError> {
        self.value.to_multi_datetime()
    }
}

/// Macro for delegating a getter method to the data element's value.
///
/// Should be placed inside `DataElement`'s impl block.
macro_rules! impl_element_getters {
    ($name_single: ident, $name_multi: ident, $ret: ty) => {
        /// Get a single value of the requested type.
        ///
        /// If it contains multiple values,
        /// only the first one is returned.
        /// An error is returned if the value is not of the requested type.
        pub fn $name_single(&self) -> Result<$ret, CastValueError> {
            self.value.$name_single()
        }

        /// Get a sequence of values of the requested type without copying.
        ///
        /// An error is returned if the value is not of the requested type.
        pub fn $name_multi(&self) -> Result<&[$ret], CastValueError> {
            self.value.$name_multi()
        }
    };
}

/// Per-variant, strongly checked getters to the element's value.
///
/// Conversions from one representation to another do not take place
/// when using these methods.
impl<I, P> DataElement<I, P>
where
    I: HasLength,
{
    /// Get a single string value.
    ///
    /// If the value contains multiple strings, only the first one is returned.
    pub fn string(&self) -> Result<&str, CastValueError> {
        self.value.string()
    }

    /// Get the inner sequence of string values,
    /// if the variant is either `Str` or `Strs`.
    pub fn strings(&self) -> Result<&[String], CastValueError> {
        self.value.strings()
    }

    /// Get a single attribute tag value.
    ///
    /// If it contains multiple values, only the first one is returned.
    /// An error is returned if the value is not of the requested type.
    pub fn tag_value(&self) -> Result<Tag, CastValueError> {
        self.value.tag()
    }

    /// Get a sequence of attribute tag values without copying.
    ///
    /// An error is returned if the value is not of the requested type.
    pub fn tag_values(&self) -> Result<&[Tag], CastValueError> {
        self.value.tags()
    }

    impl_element_getters!(date, dates, DicomDate);
    impl_element_getters!(time, times, DicomTime);
    impl_element_getters!(datetime, datetimes, DicomDateTime);
    impl_element_getters!(uint8, uint8_slice, u8);
    impl_element_getters!(uint16, uint16_slice, u16);
    impl_element_getters!(int16, int16_slice, i16);
    impl_element_getters!(uint32, uint32_slice, u32);
    impl_element_getters!(int32, int32_slice, i32);
    impl_element_getters!(int64, int64_slice, i64);
    impl_element_getters!(uint64, uint64_slice, u64);
    impl_element_getters!(float32, float32_slice, f32);
    impl_element_getters!(float64, float64_slice, f64);
}

/// A dummy object type which can never be constructed,
/// for use as the item type of elements which can never be
/// data set sequences.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum EmptyObject {}

impl HasLength for EmptyObject {
    fn length(&self) -> Length {
        unreachable!()
    }
}

impl DicomValueType for EmptyObject {
    fn value_type(&self) -> crate::value::ValueType {
        unreachable!()
    }

    fn cardinality(&self) -> usize {
        unreachable!()
    }
}

/// An enum type for a data element's value representation.
///
/// The variants are named after the respective two letter codes
/// defined by the standard.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum VR {
    /// Application Entity
    AE,
    /// Age String
    AS,
    /// Attribute Tag
    AT,
    /// Code String
    CS,
    /// Date
    DA,
    /// Decimal String
    DS,
    /// Date Time
    DT,
    /// Floating Point Single
    FL,
    /// Floating Point Double
    FD,
    /// Integer String
    IS,
    /// Long String
    LO,
    /// Long Text
    LT,
    /// Other Byte
    OB,
    /// Other Double
    OD,
    /// Other Float
    OF,
    /// Other Long
    OL,
    /// Other Very Long
    OV,
    /// Other Word
    OW,
    /// Person Name
    PN,
    /// Short String
    SH,
    /// Signed Long
    SL,
    /// Sequence of Items
    SQ,
    /// Signed Short
    SS,
    /// Short Text
    ST,
    /// Signed Very Long
    SV,
    /// Time
    TM,
    /// Unlimited Characters
    UC,
    /// Unique Identifier (UID)
    UI,
    /// Unsigned Long
    UL,
    /// Unknown
    UN,
    /// Universal Resource Identifier or Universal Resource Locator (URI/URL)
    UR,
    /// Unsigned Short
    US,
    /// Unlimited Text
    UT,
    /// Unsigned Very Long
    UV,
}

impl VR {
    /// Obtain the value representation corresponding to the given two bytes.
    /// Each byte should represent an alphabetic character in upper case.
    pub fn from_binary(chars: [u8; 2]) -> Option<Self> {
        from_utf8(chars.as_ref())
            .ok()
            .and_then(|s| VR::from_str(s).ok())
    }

    /// Retrieve a string representation of this VR.
    pub fn to_string(self) -> &'static str {
        use VR::*;
        match self {
            AE => "AE",
            AS => "AS",
            AT => "AT",
            CS => "CS",
            DA => "DA",
            DS => "DS",
            DT => "DT",
            FL => "FL",
            FD => "FD",
            IS => "IS",
            LO => "LO",
            LT => "LT",
            OB => "OB",
            OD => "OD",
            OF => "OF",
            OL => "OL",
            OV => "OV",
            OW => "OW",
            PN => "PN",
            SH => "SH",
            SL => "SL",
            SQ => "SQ",
            SS => "SS",
            ST => "ST",
            SV => "SV",
            TM => "TM",
            UC => "UC",
            UI => "UI",
            UL => "UL",
            UN => "UN",
            UR => "UR",
            US => "US",
            UT => "UT",
            UV => "UV",
        }
    }

    /// Retrieve a copy of this VR's byte representation.
    /// The function returns two alphabetic characters in upper case.
    pub fn to_bytes(self) -> [u8; 2] {
        let bytes = self.to_string().as_bytes();
        [bytes[0], bytes[1]]
    }
}

/// Obtain the value representation corresponding to the given string.
/// The string should hold exactly two UTF-8 encoded alphabetic characters
/// in upper case, otherwise no match is made.
impl FromStr for VR {
    type Err = &'static str;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        use VR::*;
        match string {
            "AE" => Ok(AE),
            "AS" => Ok(AS),
            "AT" => Ok(AT),
            "CS" => Ok(CS),
            "DA" => Ok(DA),
            "DS" => Ok(DS),
            "DT" => Ok(DT),
            "FL" => Ok(FL),
            "FD" => Ok(FD),
            "IS" => Ok(IS),
            "LO" => Ok(LO),
            "LT" => Ok(LT),
            "OB" => Ok(OB),
            "OD" => Ok(OD),
            "OF" => Ok(OF),
            "OL" => Ok(OL),
            "OV" => Ok(OV),
            "OW" => Ok(OW),
            "PN" => Ok(PN),
            "SH" => Ok(SH),
            "SL" => Ok(SL),
            "SQ" => Ok(SQ),
            "SS" => Ok(SS),
            "ST" => Ok(ST),
            "SV" => Ok(SV),
            "TM" => Ok(TM),
            "UC" => Ok(UC),
            "UI" => Ok(UI),
            "UL" => Ok(UL),
            "UN" => Ok(UN),
            "UR" => Ok(UR),
            "US" => Ok(US),
            "UT" => Ok(UT),
            "UV" => Ok(UV),
            _ => Err("no such value representation"),
        }
    }
}

impl fmt::Display for VR {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(VR::to_string(*self))
    }
}

/// Idiomatic alias for a tag's group number.
pub type GroupNumber = u16;
/// Idiomatic alias for a tag's element number.
pub type ElementNumber = u16;

/// The data type for DICOM data element tags.
///
/// Tags are composed by a (group, element) pair of 16-bit unsigned integers.
/// Aside from writing a struct expression,
/// a `Tag` may also be built by converting a `(u16, u16)` or a `[u16; 2]`,
/// or by parsing a string in one of the supported text formats.
///
/// # Example
///
/// ```
/// # use medicom_core::Tag;
/// let patient_name = Tag(0x0010, 0x0010);
/// assert_eq!(patient_name, Tag::from((0x0010, 0x0010)));
/// assert_eq!(patient_name, "(0010,0010)".parse::<Tag>().unwrap());
/// assert_eq!(patient_name.to_string(), "(0010,0010)");
/// ```
#[derive(PartialEq, Eq, Hash, PartialOrd, Ord, Clone, Copy)]
pub struct Tag(pub GroupNumber, pub ElementNumber);

impl Tag {
    /// Getter for the tag's group value.
    #[inline]
    pub fn group(self) -> GroupNumber {
        self.0
    }

    /// Getter for the tag's element value.
    #[inline]
    pub fn element(self) -> ElementNumber {
        self.1
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#06X?}, {:#06X?})", self.0, self.1)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({:04X},{:04X})", self.0, self.1)
    }
}

impl PartialEq<(u16, u16)> for Tag {
    fn eq(&self, other: &(u16, u16)) -> bool {
        self.0 == other.0 && self.1 == other.1
    }
}

impl PartialEq<[u16; 2]> for Tag {
    fn eq(&self, other: &[u16; 2]) -> bool {
        self.0 == other[0] && self.1 == other[1]
    }
}

impl From<(u16, u16)> for Tag {
    #[inline]
    fn from(value: (u16, u16)) -> Tag {
        Tag(value.0, value.1)
    }
}

impl From<[u16; 2]> for Tag {
    #[inline]
    fn from(value: [u16; 2]) -> Tag {
        Tag(value[0], value[1])
    }
}

/// An error which may occur when parsing a DICOM data element tag
/// from its text form.
#[derive(Debug, Snafu)]
#[snafu(display("expected tag in the format `(gggg,eeee)` or `gggg,eeee`"))]
pub struct ParseTagError {
    backtrace: Backtrace,
}

/// This parser implementation
/// is responsible for parsing a tag from a string,
/// which should be in one of the following text formats:
/// - `(gggg,eeee)`
/// - `gggg,eeee`
///
/// where `gggg` and `eeee` are the group and element numbers
/// in hexadecimal, always 4 digits each.
impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(s);
        let mut parts = s.splitn(2, ',');
        let group = parts.next().unwrap_or("");
        let element = parts.next().context(ParseTagSnafu)?;
        ensure!(group.len() == 4 && element.len() == 4, ParseTagSnafu);
        let group = GroupNumber::from_str_radix(group, 16)
            .ok()
            .context(ParseTagSnafu)?;
        let element = ElementNumber::from_str_radix(element, 16)
            .ok()
            .context(ParseTagSnafu)?;
        Ok(Tag(group, element))
    }
}

/// A type for representing data set content length, in bytes.
/// An internal value of `0xFFFF_FFFF` represents an undefined
/// (unspecified) length,
/// which would be verifiable via the [`is_undefined`](Length::is_undefined)
/// method.
///
/// # Example
///
/// ```
/// # use medicom_core::Length;
/// let length = Length::defined(64);
/// assert!(!length.is_undefined());
/// assert_eq!(length.get(), Some(64));
///
/// // comparing between undefined lengths is always false
/// assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
/// ```
#[derive(Clone, Copy)]
pub struct Length(pub u32);

const UNDEFINED_LEN: u32 = 0xFFFF_FFFF;

impl Length {
    /// A length that is undefined.
    pub const UNDEFINED: Self = Length(UNDEFINED_LEN);

    /// Create a new length value from its internal representation.
    /// This is equivalent to `Length(len)`.
    #[inline]
    pub fn new(len: u32) -> Self {
        Length(len)
    }

    /// Create a new length value which is always defined.
    ///
    /// # Panics
    ///
    /// This function will panic in debug mode
    /// if the given length is `0xFFFF_FFFF`,
    /// which is reserved for the undefined length.
    #[inline]
    pub fn defined(len: u32) -> Self {
        debug_assert_ne!(len, UNDEFINED_LEN);
        Length(len)
    }

    /// Check whether this length is undefined (unknown).
    #[inline]
    pub fn is_undefined(&self) -> bool {
        self.0 == UNDEFINED_LEN
    }

    /// Check whether this length is well defined (known).
    #[inline]
    pub fn is_defined(&self) -> bool {
        !self.is_undefined()
    }

    /// Fetch the concrete length value, if defined.
    /// Returns `None` if it represents an undefined length.
    #[inline]
    pub fn get(self) -> Option<u32> {
        match self.0 {
            UNDEFINED_LEN => None,
            v => Some(v),
        }
    }

    /// Check whether the length is equally defined as another length.
    /// Unlike the implemented `PartialEq`,
    /// two undefined lengths are considered equivalent by this method.
    #[inline]
    pub fn inner_eq(self, other: Length) -> bool {
        self.0 == other.0
    }
}

impl From<u32> for Length {
    #[inline]
    fn from(o: u32) -> Self {
        Length(o)
    }
}

impl PartialEq<Length> for Length {
    fn eq(&self, rhs: &Length) -> bool {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => false,
            (l1, l2) => l1 == l2,
        }
    }
}

impl PartialEq<u32> for Length {
    fn eq(&self, rhs: &u32) -> bool {
        self.0 == *rhs
    }
}

impl PartialEq<usize> for Length {
    fn eq(&self, rhs: &usize) -> bool {
        self.0 as usize == *rhs
    }
}

impl PartialOrd<Length> for Length {
    fn partial_cmp(&self, rhs: &Length) -> Option<Ordering> {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => None,
            (l1, l2) => Some(l1.cmp(&l2)),
        }
    }
}

impl std::ops::Add<Length> for Length {
    type Output = Length;

    fn add(self, rhs: Length) -> Self::Output {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => Length::UNDEFINED,
            (l1, l2) => {
                let o = l1 + l2;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF is reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl std::ops::Add<i32> for Length {
    type Output = Length;

    fn add(self, rhs: i32) -> Self::Output {
        match self.0 {
            UNDEFINED_LEN => Length::UNDEFINED,
            len => {
                let o = (len as i32 + rhs) as u32;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF is reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl std::ops::Sub<Length> for Length {
    type Output = Length;

    fn sub(self, rhs: Length) -> Self::Output {
        match (self.0, rhs.0) {
            (UNDEFINED_LEN, _) | (_, UNDEFINED_LEN) => Length::UNDEFINED,
            (l1, l2) => {
                let o = l1 - l2;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF is reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl std::ops::Sub<i32> for Length {
    type Output = Length;

    fn sub(self, rhs: i32) -> Self::Output {
        match self.0 {
            UNDEFINED_LEN => Length::UNDEFINED,
            len => {
                let o = (len as i32 - rhs) as u32;
                debug_assert!(
                    o != UNDEFINED_LEN,
                    "integer overflow (0xFFFF_FFFF is reserved for undefined length)"
                );
                Length(o)
            }
        }
    }
}

impl std::ops::SubAssign<Length> for Length {
    fn sub_assign(&mut self, rhs: Length) {
        *self = *self - rhs;
    }
}

impl std::ops::SubAssign<i32> for Length {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl fmt::Debug for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("Length(Undefined)")
        } else {
            f.debug_tuple("Length").field(&self.0).finish()
        }
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_undefined() {
            f.write_str("U/L")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dicom_value;
    use crate::value::DicomDate;

    #[test]
    fn tag_from_u16_pair() {
        let t = Tag::from((0x0010u16, 0x0020u16));
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_u16_array() {
        let t = Tag::from([0x0010u16, 0x0020u16]);
        assert_eq!(0x0010u16, t.group());
        assert_eq!(0x0020u16, t.element());
    }

    #[test]
    fn tag_from_str() {
        assert_eq!("(0010,0020)".parse::<Tag>().unwrap(), Tag(0x0010, 0x0020));
        assert_eq!("0010,0020".parse::<Tag>().unwrap(), Tag(0x0010, 0x0020));
        assert_eq!("7fe0,0010".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));
        assert_eq!(" (7FE0,0010) ".parse::<Tag>().unwrap(), Tag(0x7FE0, 0x0010));

        assert!("PatientName".parse::<Tag>().is_err());
        assert!("(0010,0020".parse::<Tag>().is_err());
        assert!("10,20".parse::<Tag>().is_err());
        assert!("(0010,00ZZ)".parse::<Tag>().is_err());
    }

    #[test]
    fn create_data_element_from_primitive() {
        let data_element: DataElement = DataElement::new(
            Tag(0x0028, 0x3002),
            VR::US,
            crate::value::Value::new(dicom_value!(U16, [256, 0, 16])),
        );
        assert_eq!(data_element.uint16_slice().unwrap(), &[256, 0, 16][..]);
        assert_eq!(data_element.length(), Length(6));
    }

    #[test]
    fn get_date_value() {
        let data_element: DataElement = DataElement::new(
            Tag(0x0008, 0x0020),
            VR::DA,
            dicom_value!(Str, "19941012"),
        );
        assert_eq!(
            data_element.to_date().unwrap(),
            DicomDate::from_ymd(1994, 10, 12).unwrap(),
        );
    }

    #[test]
    fn data_element_to_str_strips_padding() {
        let data_element: DataElement =
            DataElement::new(Tag(0x0008, 0x0060), VR::CS, dicom_value!(Str, "MR "));
        assert_eq!(data_element.to_str().unwrap(), "MR");
        assert_eq!(data_element.to_raw_str().unwrap(), "MR ");
    }

    #[test]
    fn length_arithmetic() {
        assert_eq!(Length(36) + Length(12), Length(48));
        assert_eq!(Length(36) + 12, Length(48));
        assert_eq!(Length(10) - 2, Length(8));
        assert!((Length::UNDEFINED + Length(2)).is_undefined());
        assert!((Length::UNDEFINED - 2).is_undefined());

        // comparing undefined lengths is always false
        assert_ne!(Length::UNDEFINED, Length::UNDEFINED);
        assert!(Length::UNDEFINED.inner_eq(Length::UNDEFINED));
    }

    #[test]
    fn sequence_item_header_from_raw_parts() {
        assert_eq!(
            SequenceItemHeader::new(Tag(0xFFFE, 0xE000), Length(0x0000_0208)).unwrap(),
            SequenceItemHeader::Item {
                len: Length(0x0000_0208)
            },
        );
        assert_eq!(
            SequenceItemHeader::new(Tag(0xFFFE, 0xE00D), Length(0)).unwrap(),
            SequenceItemHeader::ItemDelimiter,
        );
        assert!(matches!(
            SequenceItemHeader::new(Tag(0xFFFE, 0xE00D), Length(4)),
            Err(SequenceItemHeaderError::UnexpectedDelimiterLength { .. })
        ));
        assert!(matches!(
            SequenceItemHeader::new(Tag(0x0008, 0x0060), Length(2)),
            Err(SequenceItemHeaderError::UnexpectedTag { .. })
        ));
    }

    #[test]
    fn vr_from_binary() {
        assert_eq!(VR::from_binary([b'U', b'I']), Some(VR::UI));
        assert_eq!(VR::from_binary([b'O', b'B']), Some(VR::OB));
        assert_eq!(VR::from_binary([b'z', b'z']), None);
        assert_eq!(VR::UI.to_bytes(), [b'U', b'I']);
    }
}
