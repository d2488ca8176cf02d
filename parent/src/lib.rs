//! # medicom library
//!
//! This crate serves as a parent for the library crates in the medicom
//! project.
//!
//! It aggregates the key modules
//! that you are likely to require when handling DICOM data.
//! These modules are also available as crates
//! which can be fetched independently,
//! in complement or as an alternative to using the `medicom` crate.
//! They generally carry the `medicom-` prefix:
//! for instance, the module `object`
//! lives in the crate named `medicom-object`.
//!
//! ## Basic
//!
//! - For an idiomatic API to reading and writing DICOM data
//!   from files, byte buffers, or other sources,
//!   see the [`object`] module.
//!   It also offers [`parse`](object::parse) and [`encode`](object::encode)
//!   for working over in-memory byte buffers,
//!   and [`extract_pixel_data`](object::extract_pixel_data)
//!   for a view over an object's imaging content.
//! - The [`core`] module contains most of the data types
//!   that the other crates rely on,
//!   including types for tags ([`Tag`](medicom_core::Tag)),
//!   value representations ([`VR`](medicom_core::VR)),
//!   and in-memory representations of [values](medicom_core::DicomValue),
//!   contained in [data elements](medicom_core::DataElement).
//!   For convenience, the [`dicom_value!`] macro
//!   has been re-exported here as well.
//! - The standard data dictionary is in [`dictionary_std`],
//!   which not only provides a singleton to a standard tag index
//!   that can be queried at run-time,
//!   it also provides constants for known tags
//!   in the [`tags`](dictionary_std::tags) module.
//!
//! ## Advanced
//!
//! - The [`encoding`] module holds the data element codecs,
//!   character set support,
//!   and the global [transfer syntax registry](encoding::transfer_syntax::registry).
//! - [`parser`] contains the mid-level abstractions for
//!   reading and writing DICOM data sets as token streams.
//!   It might only be truly needed if
//!   the `object` API is unfit or too inefficient for a certain task.
//!
//! ## Example
//!
//! ```no_run
//! use medicom::object::open_file;
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//! let patient_name = obj.element_by_name("PatientName")?.to_str()?;
//! let modality = obj.element_by_name("Modality")?.to_str()?;
//! # Ok(())
//! # }
//! ```
pub use medicom_core as core;
pub use medicom_dictionary_std as dictionary_std;
pub use medicom_encoding as encoding;
pub use medicom_object as object;
pub use medicom_parser as parser;

pub use medicom_core::dicom_value;
pub use medicom_core::{DataElement, Tag, VR};
pub use medicom_object::{encode, extract_pixel_data, from_reader, open_file, parse};
