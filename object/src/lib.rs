#![allow(clippy::derive_partial_eq_without_eq)]
//! This crate contains a high-level abstraction for reading and manipulating
//! DICOM objects.
//! At this level, objects are comparable to a dictionary of elements,
//! in which some of them can have DICOM objects themselves.
//! The end user should prefer using this abstraction when dealing with DICOM
//! objects.
//!
//! Loading a DICOM file can be done with ease via the function [`open_file`].
//! For additional file reading options, use [`OpenFileOptions`].
//! New DICOM instances can be built from scratch using [`InMemDicomObject`]
//! (see the [`mem`] module for more details).
//!
//! # Examples
//!
//! Read an object and fetch some attributes:
//!
//! ```no_run
//! use medicom_dictionary_std::tags;
//! use medicom_object::open_file;
//! # fn foo() -> Result<(), Box<dyn std::error::Error>> {
//! let obj = open_file("0001.dcm")?;
//!
//! let patient_name = obj.element(tags::PATIENT_NAME)?.to_str()?;
//! let modality = obj.element_by_name("Modality")?.to_str()?;
//! # Ok(())
//! # }
//! ```
//!
//! Elements can be fetched by tag,
//! either by creating a [`Tag`]
//! or by using one of the constants
//! in the `medicom-dictionary-std` crate.
//!
//! By default, the entire data set is fully loaded into memory.
//! The pixel data and following elements can be ignored
//! by using [`OpenFileOptions`]:
//!
//! ```no_run
//! use medicom_object::OpenFileOptions;
//!
//! let obj = OpenFileOptions::new()
//!     .read_until(medicom_dictionary_std::tags::PIXEL_DATA)
//!     .open_file("0002.dcm")?;
//! # Result::<(), medicom_object::ReadError>::Ok(())
//! ```
//!
//! Parsing from an arbitrary byte slice
//! is done through [`parse`],
//! which also distinguishes the failure modes
//! through [`ParseError::kind`]
//! and retains the partially decoded object when possible:
//!
//! ```no_run
//! use medicom_object::{parse, ErrorKind, ParseOptions};
//! # fn run(data: &[u8]) {
//! match parse(data, ParseOptions::new()) {
//!     Ok(obj) => { /* use obj */ }
//!     Err(e) if e.kind() == ErrorKind::TruncatedData => {
//!         if let Some(partial) = e.partial_object() {
//!             // inspect what was decoded before the data ended
//!         }
//!     }
//!     Err(e) => eprintln!("{}", e),
//! }
//! # }
//! ```
//!
//! Finally, DICOM objects can be serialized back into DICOM encoded bytes.
//! A method is provided for writing a file DICOM object into a new DICOM file.
//!
//! ```no_run
//! # use medicom_object::{DefaultDicomObject, Tag};
//! # fn something(obj: DefaultDicomObject) -> Result<(), Box<dyn std::error::Error>> {
//! obj.write_to_file("0001_new.dcm")?;
//! # Ok(())
//! # }
//! ```
//!
//! This method requires you to write a [file meta table] first.
//! When creating a new DICOM object from scratch,
//! use a [`FileMetaTableBuilder`] to construct the file meta group,
//! then use [`with_meta`] or [`with_exact_meta`]:
//!
//! [file meta table]: crate::meta::FileMetaTable
//! [`FileMetaTableBuilder`]: crate::meta::FileMetaTableBuilder
//! [`with_meta`]: crate::InMemDicomObject::with_meta
//! [`with_exact_meta`]: crate::InMemDicomObject::with_exact_meta
//!
//! ```no_run
//! # use medicom_object::{InMemDicomObject, FileMetaTableBuilder};
//! # fn something(obj: InMemDicomObject) -> Result<(), Box<dyn std::error::Error>> {
//! let file_obj = obj.with_meta(
//!     FileMetaTableBuilder::new()
//!         // Implicit VR Little Endian
//!         .transfer_syntax("1.2.840.10008.1.2")
//!         // Computed Radiography image storage
//!         .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
//! )?;
//! file_obj.write_to_file("0001_new.dcm")?;
//! # Ok(())
//! # }
//! ```
//!
//! In order to write a plain DICOM data set,
//! use one of the various data set writing methods
//! such as [`write_dataset_with_ts`]:
//!
//! [`write_dataset_with_ts`]: crate::InMemDicomObject::write_dataset_with_ts
//! ```
//! # use medicom_object::InMemDicomObject;
//! # use medicom_core::{DataElement, Tag, VR};
//! # fn run() -> Result<(), Box<dyn std::error::Error>> {
//! use medicom_encoding::transfer_syntax::registry;
//!
//! // build your object
//! let mut obj = InMemDicomObject::new_empty();
//! let patient_name = DataElement::new(
//!     Tag(0x0010, 0x0010),
//!     VR::PN,
//!     "Doe^John",
//! );
//! obj.put(patient_name);
//!
//! // write the object's data set
//! let mut serialized = Vec::new();
//! let ts = registry::EXPLICIT_VR_LITTLE_ENDIAN.erased();
//! obj.write_dataset_with_ts(&mut serialized, &ts)?;
//! assert!(!serialized.is_empty());
//! # Ok(())
//! # }
//! # run().unwrap();
//! ```
pub mod file;
pub mod mem;
pub mod meta;
pub mod pixeldata;
pub mod tokens;

pub use crate::file::{
    encode, from_reader, open_file, parse, EncodeOptions, OpenFileOptions, ParseOptions,
    ReadPreamble,
};
pub use crate::mem::InMemDicomObject;
pub use crate::meta::{FileMetaTable, FileMetaTableBuilder};
pub use crate::pixeldata::{extract_pixel_data, ImageGeometry, PixelView};
pub use medicom_core::Tag;
pub use medicom_dictionary_std::StandardDataDictionary;

/// The default implementation of a root DICOM object.
pub type DefaultDicomObject<D = StandardDataDictionary> = FileDicomObject<mem::InMemDicomObject<D>>;

use medicom_core::header::Header;
use medicom_encoding::transfer_syntax::registry::get_registry;
use medicom_parser::dataset::{DataSetWriter, IntoTokens};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// The implementation class UID generically referring to this library.
///
/// Automatically generated as per the standard, part 5, section B.2.
///
/// This UID is subject to changes in future versions.
pub const IMPLEMENTATION_CLASS_UID: &str = "2.25.316379501402517631821312982157523151198";

/// The implementation version name generically referring to this library.
///
/// This name is subject to changes in future versions.
pub const IMPLEMENTATION_VERSION_NAME: &str = "medicom 0.1";

/// Trait type for a DICOM object.
/// This is a high-level abstraction where an object is accessed and
/// manipulated as dictionary of entries indexed by tags, which in
/// turn may contain a DICOM object.
pub trait DicomObject {
    type Element: Header;

    /// Retrieve a particular DICOM element by its tag.
    fn element(&self, tag: Tag) -> Result<Self::Element, AccessError>;

    /// Retrieve a particular DICOM element by its name.
    fn element_by_name(&self, name: &str) -> Result<Self::Element, AccessByNameError>;

    /// Retrieve the processed meta information table, if available.
    ///
    /// This table will generally not be reachable from children objects
    /// in another object with a valid meta table. As such, it is recommended
    /// for this method to be called at the root of a DICOM object.
    fn meta(&self) -> Option<&FileMetaTable> {
        None
    }
}

/// A general categorization of the failures
/// which may occur when reading a DICOM object,
/// so that consumers can react to whole classes of errors
/// without inspecting the full error chain.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The data does not look like a DICOM file at all,
    /// such as when the `DICM` magic code is absent.
    NotThisFormat,
    /// The file declares a transfer syntax
    /// which is not supported by this library.
    UnsupportedTransferSyntax,
    /// The data ended before the data set was complete.
    TruncatedData,
    /// A value or structural element in the data set
    /// could not be interpreted.
    MalformedValue,
    /// A specific character set or text encoding
    /// in the data set is not supported.
    UnsupportedEncoding,
    /// The attributes required to interpret the image
    /// are missing or inconsistent.
    IncompleteImageMetadata,
    /// Sequence nesting exceeded the configured depth limit.
    RecursionLimitExceeded,
}

/// An error which may occur when loading a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum ReadError {
    #[snafu(display("Could not open file '{}'", filename.display()))]
    OpenFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not read from file '{}'", filename.display()))]
    ReadFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    /// Could not read preamble bytes
    ReadPreambleBytes {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not parse meta group data set"))]
    ParseMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not create data set parser"))]
    CreateParser {
        #[snafu(backtrace)]
        source: medicom_parser::dataset::read::Error,
    },
    #[snafu(display("Could not read data set token"))]
    ReadToken {
        #[snafu(backtrace)]
        source: medicom_parser::dataset::read::Error,
    },
    #[snafu(display("Missing element value after header token"))]
    MissingElementValue { backtrace: Backtrace },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    ReadUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
    #[snafu(display("Unexpected token {:?}", token))]
    UnexpectedToken {
        token: Box<medicom_parser::dataset::DataToken>,
        backtrace: Backtrace,
    },
    #[snafu(display("Data element tagged {} appears out of ascending tag order", tag))]
    OutOfOrderTag { tag: Tag, backtrace: Backtrace },
    #[snafu(display("Premature data set end"))]
    PrematureEnd { backtrace: Backtrace },
}

/// Test whether the error chain bottoms out
/// at an unexpected end of file.
fn caused_by_eof(e: &(dyn std::error::Error + 'static)) -> bool {
    let mut source = Some(e);
    while let Some(e) = source {
        if let Some(io_error) = e.downcast_ref::<std::io::Error>() {
            if io_error.kind() == std::io::ErrorKind::UnexpectedEof {
                return true;
            }
        }
        source = e.source();
    }
    false
}

impl ReadError {
    /// Categorize this error into one of the broad [`ErrorKind`] classes.
    pub fn kind(&self) -> ErrorKind {
        use medicom_parser::dataset::read::Error as DataSetError;
        use medicom_parser::stateful::decode::Error as DecoderError;

        fn kind_of_decoder_error(e: &DecoderError) -> Option<ErrorKind> {
            match e {
                DecoderError::UnsupportedTransferSyntax { .. } => {
                    Some(ErrorKind::UnsupportedTransferSyntax)
                }
                DecoderError::UnsupportedCharacterSet { .. } | DecoderError::DecodeText { .. } => {
                    Some(ErrorKind::UnsupportedEncoding)
                }
                _ => None,
            }
        }

        fn kind_of_dataset_error(e: &DataSetError) -> Option<ErrorKind> {
            match e {
                DataSetError::ExceededSequenceDepth { .. } => {
                    Some(ErrorKind::RecursionLimitExceeded)
                }
                DataSetError::CreateDecoder { source, .. }
                | DataSetError::ReadHeader { source, .. }
                | DataSetError::ReadItemHeader { source, .. }
                | DataSetError::ReadValue { source, .. }
                | DataSetError::ReadItemValue { source, .. } => kind_of_decoder_error(source),
                _ => None,
            }
        }

        match self {
            ReadError::ParseMetaDataSet { source } => match source {
                crate::meta::Error::NotDicom { .. } | crate::meta::Error::ReadMagicCode { .. } => {
                    ErrorKind::NotThisFormat
                }
                _ if caused_by_eof(source) => ErrorKind::TruncatedData,
                _ => ErrorKind::MalformedValue,
            },
            ReadError::ReadUnsupportedTransferSyntax { .. } => {
                ErrorKind::UnsupportedTransferSyntax
            }
            ReadError::CreateParser { source } | ReadError::ReadToken { source } => {
                if let Some(kind) = kind_of_dataset_error(source) {
                    kind
                } else if caused_by_eof(source) {
                    ErrorKind::TruncatedData
                } else {
                    ErrorKind::MalformedValue
                }
            }
            ReadError::MissingElementValue { .. } | ReadError::PrematureEnd { .. } => {
                ErrorKind::TruncatedData
            }
            ReadError::OpenFile { source, .. }
            | ReadError::ReadFile { source, .. }
            | ReadError::ReadPreambleBytes { source, .. } => {
                if source.kind() == std::io::ErrorKind::UnexpectedEof {
                    ErrorKind::TruncatedData
                } else {
                    ErrorKind::MalformedValue
                }
            }
            _ => ErrorKind::MalformedValue,
        }
    }
}

/// An error which occurred when parsing an in-memory DICOM file,
/// possibly retaining the part of the object
/// which was successfully decoded until the point of failure.
///
/// The failure can be broadly categorized through [`kind`](ParseError::kind),
/// and the full cause is available in the error source chain.
#[derive(Debug)]
pub struct ParseError {
    source: ReadError,
    partial: Option<Box<DefaultDicomObject>>,
}

impl ParseError {
    pub(crate) fn new(source: ReadError, partial: Option<Box<DefaultDicomObject>>) -> Self {
        ParseError { source, partial }
    }

    /// Categorize this error into one of the broad [`ErrorKind`] classes.
    pub fn kind(&self) -> ErrorKind {
        self.source.kind()
    }

    /// Obtain the portion of the object which was decoded
    /// before the error occurred, if any.
    ///
    /// Only the top-level data elements which were fully read are retained,
    /// and no partial object is available
    /// when the failure precedes the main data set.
    pub fn partial_object(&self) -> Option<&DefaultDicomObject> {
        self.partial.as_deref()
    }

    /// Discard the error and keep the partially decoded object, if any.
    pub fn into_partial_object(self) -> Option<DefaultDicomObject> {
        self.partial.map(|obj| *obj)
    }

    /// Deconstruct this error into the underlying read error
    /// and the partially decoded object.
    pub fn into_parts(self) -> (ReadError, Option<DefaultDicomObject>) {
        (self.source, self.partial.map(|obj| *obj))
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.source, f)
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<ParseError> for ReadError {
    fn from(e: ParseError) -> Self {
        e.source
    }
}

/// An error which may occur when writing a DICOM object
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WriteError {
    #[snafu(display("Could not write to file '{}'", filename.display()))]
    WriteFile {
        filename: std::path::PathBuf,
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write object preamble"))]
    WritePreamble {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not write magic code"))]
    WriteMagicCode {
        backtrace: Backtrace,
        source: std::io::Error,
    },
    #[snafu(display("Could not create data set printer"))]
    CreatePrinter {
        #[snafu(backtrace)]
        source: medicom_parser::dataset::write::Error,
    },
    #[snafu(display("Could not prepare file meta group"))]
    PrepareMeta {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print meta group data set"))]
    PrintMetaDataSet {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    #[snafu(display("Could not print data set"))]
    PrintDataSet {
        #[snafu(backtrace)]
        source: medicom_parser::dataset::write::Error,
    },
    #[snafu(display("Unsupported transfer syntax `{}`", uid))]
    WriteUnsupportedTransferSyntax { uid: String, backtrace: Backtrace },
}

/// An error which may occur when looking up a DICOM object's attributes.
#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum AccessError {
    #[snafu(display("No such data element with tag {}", tag))]
    NoSuchDataElementTag { tag: Tag, backtrace: Backtrace },
}

impl AccessError {
    pub fn into_access_by_name(self, alias: impl Into<String>) -> AccessByNameError {
        match self {
            AccessError::NoSuchDataElementTag { tag, backtrace } => {
                AccessByNameError::NoSuchDataElementAlias {
                    tag,
                    alias: alias.into(),
                    backtrace,
                }
            }
        }
    }
}

/// An error which may occur when looking up a DICOM object's attributes
/// by a keyword (or alias) instead of by tag.
///
/// These accesses incur a look-up at the data element dictionary,
/// which may fail if no such entry exists.
#[derive(Debug, Snafu)]
pub enum AccessByNameError {
    #[snafu(display("No such data element {} (with tag {})", alias, tag))]
    NoSuchDataElementAlias {
        tag: Tag,
        alias: String,
        backtrace: Backtrace,
    },

    /// Could not resolve attribute name from the data dictionary
    #[snafu(display("Unknown data attribute named `{}`", name))]
    NoSuchAttributeName { name: String, backtrace: Backtrace },
}

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum WithMetaError {
    /// Could not build file meta table
    BuildMetaTable {
        #[snafu(backtrace)]
        source: crate::meta::Error,
    },
    /// Could not prepare file meta table
    PrepareMetaTable {
        source: medicom_core::value::CastValueError,
        backtrace: Backtrace,
    },
}

/// A root DICOM object retrieved from a standard DICOM file,
/// containing additional information from the file meta group
/// in a separate table value.
#[derive(Debug, Clone, PartialEq)]
pub struct FileDicomObject<O> {
    meta: FileMetaTable,
    obj: O,
}

impl<O> FileDicomObject<O> {
    /// Retrieve the processed meta header table.
    pub fn meta(&self) -> &FileMetaTable {
        &self.meta
    }

    /// Retrieve a mutable reference to the processed meta header table.
    ///
    /// Considerable care should be taken when modifying this table,
    /// as it may influence object reading and writing operations.
    pub fn meta_mut(&mut self) -> &mut FileMetaTable {
        &mut self.meta
    }

    /// Retrieve the inner DICOM object structure, discarding the meta table.
    pub fn into_inner(self) -> O {
        self.obj
    }
}

impl<O> FileDicomObject<O>
where
    for<'a> &'a O: IntoTokens,
{
    /// Write the entire object as a DICOM file
    /// into the given file path.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), WriteError> {
        let path = path.as_ref();
        let file = File::create(path).context(WriteFileSnafu { filename: path })?;
        let mut to = BufWriter::new(file);

        // write preamble
        to.write_all(&[0_u8; 128][..])
            .context(WriteFileSnafu { filename: path })?;

        // write magic sequence
        to.write_all(b"DICM")
            .context(WriteFileSnafu { filename: path })?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        // prepare encoder
        let ts = get_registry()
            .get(&self.meta.transfer_syntax)
            .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax.clone(),
            })?;
        let mut dset_writer = DataSetWriter::with_ts(to, ts).context(CreatePrinterSnafu)?;

        dset_writer
            .write_sequence((&self.obj).into_tokens())
            .context(PrintDataSetSnafu)?;

        Ok(())
    }

    /// Write the entire object as a DICOM file
    /// into the given writer.
    /// Preamble, magic code, and file meta group will be included
    /// before the inner object.
    pub fn write_all<W: Write>(&self, to: W) -> Result<(), WriteError> {
        let mut to = BufWriter::new(to);

        // write preamble
        to.write_all(&[0_u8; 128][..]).context(WritePreambleSnafu)?;

        // write magic sequence
        to.write_all(b"DICM").context(WriteMagicCodeSnafu)?;

        // write meta group
        self.meta.write(&mut to).context(PrintMetaDataSetSnafu)?;

        // prepare encoder
        let ts = get_registry()
            .get(&self.meta.transfer_syntax)
            .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax.clone(),
            })?;
        let mut dset_writer = DataSetWriter::with_ts(to, ts).context(CreatePrinterSnafu)?;

        dset_writer
            .write_sequence((&self.obj).into_tokens())
            .context(PrintDataSetSnafu)?;

        Ok(())
    }

    /// Write the file meta group set into the given writer.
    ///
    /// This is equivalent to `self.meta().write(to)`.
    pub fn write_meta<W: Write>(&self, to: W) -> Result<(), WriteError> {
        self.meta.write(to).context(PrintMetaDataSetSnafu)
    }

    /// Write the inner data set into the given writer,
    /// without preamble, magic code, nor file meta group.
    ///
    /// The transfer syntax is selected from the file meta table.
    pub fn write_dataset<W: Write>(&self, to: W) -> Result<(), WriteError> {
        let to = BufWriter::new(to);

        // prepare encoder
        let ts = get_registry()
            .get(&self.meta.transfer_syntax)
            .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
                uid: self.meta.transfer_syntax.clone(),
            })?;
        let mut dset_writer = DataSetWriter::with_ts(to, ts).context(CreatePrinterSnafu)?;

        // write object
        dset_writer
            .write_sequence((&self.obj).into_tokens())
            .context(PrintDataSetSnafu)?;

        Ok(())
    }
}

impl<O> ::std::ops::Deref for FileDicomObject<O> {
    type Target = O;

    fn deref(&self) -> &Self::Target {
        &self.obj
    }
}

impl<O> ::std::ops::DerefMut for FileDicomObject<O> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.obj
    }
}

impl<O> DicomObject for FileDicomObject<O>
where
    O: DicomObject,
{
    type Element = <O as DicomObject>::Element;

    fn element(&self, tag: Tag) -> Result<Self::Element, AccessError> {
        self.obj.element(tag)
    }

    fn element_by_name(&self, name: &str) -> Result<Self::Element, AccessByNameError> {
        self.obj.element_by_name(name)
    }

    fn meta(&self) -> Option<&FileMetaTable> {
        Some(&self.meta)
    }
}

impl<'a, O: 'a> DicomObject for &'a FileDicomObject<O>
where
    O: DicomObject,
{
    type Element = <O as DicomObject>::Element;

    fn element(&self, tag: Tag) -> Result<Self::Element, AccessError> {
        self.obj.element(tag)
    }

    fn element_by_name(&self, name: &str) -> Result<Self::Element, AccessByNameError> {
        self.obj.element_by_name(name)
    }
}

/// This implementation creates an iterator
/// to the elements of the underlying data set,
/// consuming the whole object.
/// The attributes in the file meta group are _not_ included.
///
/// To obtain an iterator over the meta elements,
/// use [`into_element_iter`](FileMetaTable::into_element_iter).
impl<O> IntoIterator for FileDicomObject<O>
where
    O: IntoIterator,
{
    type Item = <O as IntoIterator>::Item;
    type IntoIter = <O as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        self.obj.into_iter()
    }
}

/// This implementation creates an iterator
/// to the elements of the underlying data set.
/// The attributes in the file meta group are _not_ included.
///
/// To obtain an iterator over the meta elements,
/// use [`into_element_iter`](FileMetaTable::into_element_iter).
impl<'a, O> IntoIterator for &'a FileDicomObject<O>
where
    &'a O: IntoIterator,
{
    type Item = <&'a O as IntoIterator>::Item;
    type IntoIter = <&'a O as IntoIterator>::IntoIter;

    fn into_iter(self) -> Self::IntoIter {
        (&self.obj).into_iter()
    }
}

#[cfg(test)]
mod tests {
    use medicom_core::{DataElement, PrimitiveValue, VR};
    use medicom_encoding::transfer_syntax::registry;

    use crate::meta::FileMetaTableBuilder;
    use crate::{AccessError, FileDicomObject, InMemDicomObject};

    fn assert_type_not_too_large<T>(max_size: usize) {
        let size = std::mem::size_of::<T>();
        if size > max_size {
            panic!(
                "Type {} of byte size {} exceeds acceptable size {}",
                std::any::type_name::<T>(),
                size,
                max_size
            );
        }
    }

    #[test]
    fn errors_not_too_large() {
        assert_type_not_too_large::<AccessError>(56);
    }

    #[test]
    fn smoke_test() {
        const FILE_NAME: &str = ".smoke-test.dcm";

        let meta = FileMetaTableBuilder::new()
            .transfer_syntax(registry::EXPLICIT_VR_LITTLE_ENDIAN.uid())
            .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
            .media_storage_sop_instance_uid("1.2.3.456")
            .implementation_class_uid("1.2.345.6.7890.1.234")
            .build()
            .unwrap();
        let obj = FileDicomObject::new_empty_with_meta(meta);

        obj.write_to_file(FILE_NAME).unwrap();

        let obj2 = FileDicomObject::open_file(FILE_NAME).unwrap();

        assert_eq!(obj, obj2);

        let _ = std::fs::remove_file(FILE_NAME);
    }

    /// A FileDicomObject<InMemDicomObject>
    /// can be used like a DICOM object.
    #[test]
    fn file_dicom_object_can_use_inner() {
        let mut obj = InMemDicomObject::new_empty();

        obj.put(DataElement::new(
            medicom_dictionary_std::tags::PATIENT_NAME,
            VR::PN,
            PrimitiveValue::from("John Doe"),
        ));

        let mut obj = obj
            .with_meta(
                FileMetaTableBuilder::new()
                    .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                    .media_storage_sop_instance_uid("1.2.23456789")
                    .transfer_syntax("1.2.840.10008.1.2.1"),
            )
            .unwrap();

        // contains patient name
        assert_eq!(
            obj.element(medicom_dictionary_std::tags::PATIENT_NAME)
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "John Doe",
        );

        // can be removed with take
        obj.take_element(medicom_dictionary_std::tags::PATIENT_NAME)
            .unwrap();

        assert!(matches!(
            obj.element(medicom_dictionary_std::tags::PATIENT_NAME),
            Err(AccessError::NoSuchDataElementTag { .. }),
        ));
    }

    #[test]
    fn file_dicom_object_can_iterate_over_elements() {
        let mut obj = InMemDicomObject::new_empty();

        obj.put(DataElement::new(
            medicom_dictionary_std::tags::PATIENT_NAME,
            VR::PN,
            PrimitiveValue::from("John Doe"),
        ));
        obj.put(DataElement::new(
            medicom_dictionary_std::tags::SOP_INSTANCE_UID,
            VR::UI,
            PrimitiveValue::from("1.2.987654321"),
        ));

        let obj = obj
            .with_meta(
                FileMetaTableBuilder::new()
                    .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.7")
                    .media_storage_sop_instance_uid("1.2.987654321")
                    .transfer_syntax("1.2.840.10008.1.2.1"),
            )
            .unwrap();

        // iter
        let mut iter = (&obj).into_iter();
        assert_eq!(
            iter.next().unwrap().header().tag,
            medicom_dictionary_std::tags::SOP_INSTANCE_UID
        );
        assert_eq!(
            iter.next().unwrap().header().tag,
            medicom_dictionary_std::tags::PATIENT_NAME
        );
        assert_eq!(iter.next(), None);

        // into_iter
        let mut iter = obj.into_iter();
        assert_eq!(
            iter.next().unwrap().header().tag,
            medicom_dictionary_std::tags::SOP_INSTANCE_UID
        );
        assert_eq!(
            iter.next().unwrap().header().tag,
            medicom_dictionary_std::tags::PATIENT_NAME
        );
        assert_eq!(iter.next(), None);
    }
}
