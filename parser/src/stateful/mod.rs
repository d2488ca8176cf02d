//! Stateful decoding and encoding.
//!
//! This module provides an abstraction for the process of decoding and
//! encoding DICOM data element streams. Unlike the types in
//! [`medicom_encoding`], a stateful decoder or encoder keeps track of the
//! current position in the data stream and of the active specific character
//! set, which may change mid-way through a data set.
pub mod decode;
pub mod encode;
