//! This crate works on top of the encoding primitives
//! to provide a level of abstraction
//! in which data sets are interpreted as token streams.
//!
//! The [`StatefulDecoder`](stateful::decode::StatefulDecoder)
//! can be used to decode a data set sequentially
//! while keeping track of the current position
//! and the active specific character set.
//! The [`DataSetReader`](dataset::read::DataSetReader) builds on top of it
//! to produce a stream of [data set tokens](dataset::DataToken),
//! and the [`DataSetWriter`](dataset::write::DataSetWriter)
//! consumes such a stream to encode a data set back into bytes.

pub mod dataset;
pub mod stateful;

pub use dataset::read::DataSetReader;
pub use dataset::write::DataSetWriter;
pub use stateful::decode::{DynStatefulDecoder, StatefulDecode, StatefulDecoder};
pub use stateful::encode::{DynStatefulEncoder, StatefulEncoder};
