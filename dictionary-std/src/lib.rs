//! This crate implements a standard DICOM dictionary and related constants.
//!
//! ## Run-time dictionary
//!
//! The [`data_element`] module provides a run-time queriable dictionary
//! of the DICOM attributes supported by this library,
//! which is used by default in most other abstractions available.
//! Its records are collected from [DICOM PS3.6],
//! restricted to the attributes which the rest of the ecosystem
//! knows how to manipulate:
//! the complete file meta group,
//! the attributes ruling image pixel data interpretation,
//! and the most common identifying and descriptive attributes.
//! The dictionary is provided as a singleton
//! behind a unit type for efficiency and ease of use.
//!
//! [DICOM PS3.6]: https://dicom.nema.org/medical/dicom/current/output/chtml/part06/ps3.6.html
//!
//! ## Constants
//!
//! The following modules contain constant declarations,
//! which perform an equivalent mapping at compile time,
//! thus without incurring a look-up cost:
//!
//! - [`tags`], which map an attribute alias to a DICOM tag
//! - [`uids`], for various normative DICOM unique identifiers
pub mod data_element;
mod private;
pub mod tags;
pub mod uids;

pub use data_element::{StandardDataDictionary, StandardDataDictionaryRegistry};
