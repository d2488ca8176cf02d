//! DICOM encoding and decoding primitives.
//!
//! This crate provides interfaces and data structures for reading and writing
//! data in accordance to the DICOM standard. This crate also hosts the concept
//! of [transfer syntax specifier], which can be used to produce DICOM encoders
//! and decoders at run-time, as well as the built-in [transfer syntax
//! registry].
//!
//! For the time being, all APIs are based on synchronous I/O.
//!
//! [transfer syntax specifier]: ./transfer_syntax/struct.TransferSyntax.html
//! [transfer syntax registry]: ./transfer_syntax/registry/index.html
#![recursion_limit = "80"]

pub mod decode;
pub mod encode;
pub mod text;
pub mod transfer_syntax;

pub use crate::decode::basic::BasicDecoder;
pub use crate::decode::{Decode, DecodeFrom};
pub use crate::encode::{Encode, EncodeTo, EncoderFor};
pub use crate::text::{SpecificCharacterSet, TextCodec};
pub use crate::transfer_syntax::registry::TransferSyntaxRegistry;
pub use crate::transfer_syntax::{Codec, TransferSyntax, TransferSyntaxIndex};
