#![crate_type = "lib"]
#![deny(trivial_numeric_casts, unsafe_code, unstable_features)]
#![warn(
    missing_debug_implementations,
    missing_docs,
    unused_qualifications,
    unused_import_braces
)]
#![recursion_limit = "80"]

//! This is the core library of the workspace,
//! containing the concepts, data structures and traits
//! for handling tag-oriented, self-describing binary containers
//! in the DICOM fashion.
//!
//! The current structure of this crate is as follows:
//!
//! - [`header`] comprises various data types for the data element header,
//!   including common definitions for tags, value representations
//!   and element lengths.
//! - [`dictionary`] describes common behavior of data element dictionaries,
//!   which translate attribute names and/or tags to a dictionary entry
//!   containing relevant information about the attribute.
//! - [`value`] holds definitions for values in standard data elements,
//!   with the awareness of multiplicity, representation,
//!   and the possible presence of sequences.
//!
//! [`dictionary`]: ./dictionary/index.html
//! [`header`]: ./header/index.html
//! [`value`]: ./value/index.html

pub mod dictionary;
pub mod header;
pub mod value;

pub use dictionary::DataDictionary;
pub use header::{DataElement, DataElementHeader, Length, Tag, VR};
pub use value::{PrimitiveValue, Value as DicomValue};

// re-export crates that are part of the public API
pub use chrono;
pub use smallvec;

/// Helper macro for constructing a primitive value,
/// of an arbitrary variant and multiplicity.
///
/// The base syntax is a value type identifier,
/// which is one of the variants of [`PrimitiveValue`],
/// followed by either an expression resolving to one standard Rust value,
/// or an explicitly laid out array of Rust values.
/// The type variant may be omitted in some cases.
///
/// Passing a single expression for multiple values is not supported.
/// Please use standard `From` conversions instead.
///
/// ```none
/// dicom_value!() // empty value
/// dicom_value!(«Type», «expression») // one value
/// dicom_value!(«Type», [«expression1», «expression2», ...]) // multiple values
/// dicom_value!(«expression») // one value, type inferred
/// ```
///
/// # Examples:
///
/// ```
/// use medicom_core::dicom_value;
/// use medicom_core::value::{C, PrimitiveValue};
/// use smallvec::smallvec;
///
/// let value = dicom_value!(U16, [1, 2, 5]);
/// assert_eq!(value, PrimitiveValue::U16(smallvec![1, 2, 5]));
///
/// // type can be inferred in single-value cases
/// let value = dicom_value!("PALETTE COLOR ");
/// assert_eq!(value, PrimitiveValue::Str("PALETTE COLOR ".to_string()));
/// ```
#[macro_export]
macro_rules! dicom_value {
    () => { $crate::value::PrimitiveValue::Empty };
    (Str, $string: expr) => {
        $crate::value::PrimitiveValue::Str(String::from($string))
    };
    (Strs, [ $($elem: expr),+ , ]) => {
        $crate::value::PrimitiveValue :: Strs ($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    (Strs, [ $($elem: expr),+ ]) => {
        $crate::value::PrimitiveValue :: Strs ($crate::smallvec::smallvec![$($elem.to_owned(),)*])
    };
    ($typ: ident, [ $($elem: expr),+ , ]) => {
        $crate::value::PrimitiveValue :: $typ ($crate::smallvec::smallvec![$($elem,)*])
    };
    ($typ: ident, [ $($elem: expr),+ ]) => {
        $crate::value::PrimitiveValue :: $typ ($crate::smallvec::smallvec![$($elem,)*])
    };
    ($typ: ident, $elem: expr) => {
        $crate::value::PrimitiveValue :: $typ ($crate::value::C::from_elem($elem, 1))
    };
    ($elem: expr) => {
        $crate::value::PrimitiveValue::from($elem)
    };
}
