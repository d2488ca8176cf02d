//! Convenience functions and options for reading and writing DICOM files
//! and in-memory buffers.
use medicom_core::{DataDictionary, Tag};
use medicom_dictionary_std::StandardDataDictionary;
use medicom_encoding::decode::UnknownVrBehavior;
use medicom_encoding::transfer_syntax::registry::{get_registry, TransferSyntaxRegistry};
use medicom_encoding::transfer_syntax::TransferSyntaxIndex;
use medicom_parser::dataset::{DataSetWriter, IntoTokens};
use snafu::{OptionExt, ResultExt};

use crate::{
    CreatePrinterSnafu, DefaultDicomObject, ParseError, PrepareMetaSnafu, PrintDataSetSnafu,
    PrintMetaDataSetSnafu, WriteError, WriteMagicCodeSnafu, WritePreambleSnafu,
    WriteUnsupportedTransferSyntaxSnafu,
};
use std::io::{Read, Write};
use std::path::Path;

/// Create a DICOM object by reading from a byte source.
///
/// This function assumes the standard file encoding structure without the
/// preamble: file meta group, followed by the rest of the data set.
pub fn from_reader<F>(file: F) -> Result<DefaultDicomObject, crate::ReadError>
where
    F: Read,
{
    OpenFileOptions::new().from_reader(file)
}

/// Create a DICOM object by reading from a file.
///
/// This function assumes the standard file encoding structure: 128-byte
/// preamble, file meta group, and the rest of the data set.
pub fn open_file<P>(path: P) -> Result<DefaultDicomObject, crate::ReadError>
where
    P: AsRef<Path>,
{
    OpenFileOptions::new().open_file(path)
}

/// Decode a DICOM object from an in-memory buffer.
///
/// The buffer is expected to hold a complete file data set:
/// preamble (unless [`allow_missing_preamble`] is enabled),
/// magic code, file meta group, and the main data set.
///
/// On failure, the error value retains the top-level data elements
/// which were successfully decoded until that point,
/// accessible through [`ParseError::partial_object`].
///
/// [`allow_missing_preamble`]: ParseOptions::allow_missing_preamble
/// [`ParseError::partial_object`]: crate::ParseError::partial_object
pub fn parse(data: &[u8], options: ParseOptions) -> Result<DefaultDicomObject, ParseError> {
    let read_preamble = if options.allow_missing_preamble {
        // sniff for the magic code after a 128-byte preamble,
        // falling back to no preamble when it is not there
        if data.len() >= 132 && &data[128..132] == b"DICM" {
            ReadPreamble::Always
        } else {
            ReadPreamble::Never
        }
    } else {
        ReadPreamble::Always
    };

    DefaultDicomObject::from_reader_with_all_options_partial(
        data,
        StandardDataDictionary,
        get_registry(),
        None,
        read_preamble,
        options,
    )
    .map_err(|(e, partial)| ParseError::new(e, partial))
}

/// Encode a DICOM object into an in-memory buffer,
/// under the transfer syntax identified by `transfer_syntax_uid`.
///
/// The file meta group is adjusted to declare the requested transfer syntax,
/// with the group length recalculated accordingly.
/// The main data set is not transcoded:
/// the given transfer syntax must describe an uncompressed pixel data layout
/// supported by this crate,
/// otherwise [`WriteError::WriteUnsupportedTransferSyntax`] is returned.
pub fn encode(
    obj: &DefaultDicomObject,
    transfer_syntax_uid: &str,
    options: EncodeOptions,
) -> Result<Vec<u8>, WriteError> {
    let ts = get_registry()
        .get(transfer_syntax_uid)
        .filter(|ts| ts.fully_supported())
        .with_context(|| WriteUnsupportedTransferSyntaxSnafu {
            uid: transfer_syntax_uid.to_string(),
        })?;

    let meta = if obj.meta().transfer_syntax() == ts.uid() {
        obj.meta().clone()
    } else {
        obj.meta()
            .to_builder()
            .transfer_syntax(ts.uid())
            .build()
            .context(PrepareMetaSnafu)?
    };

    let mut out = Vec::new();

    if options.include_preamble {
        out.write_all(&[0_u8; 128][..]).context(WritePreambleSnafu)?;
    }

    // write magic sequence
    out.write_all(b"DICM").context(WriteMagicCodeSnafu)?;

    // write meta group
    meta.write(&mut out).context(PrintMetaDataSetSnafu)?;

    // write the main data set,
    // releasing the writer before the buffer is returned
    {
        let mut dset_writer = DataSetWriter::with_ts(&mut out, ts).context(CreatePrinterSnafu)?;
        dset_writer
            .write_sequence((&**obj).into_tokens())
            .context(PrintDataSetSnafu)?;
    }

    Ok(out)
}

/// A builder type for opening a DICOM file with additional options.
///
/// This builder exposes additional properties
/// to configure the reading of a DICOM file.
///
/// # Example
///
/// Create a `OpenFileOptions`,
/// call adaptor methods in a chain,
/// and finish the operation with [`.open_file()`](OpenFileOptions::open_file).
///
/// ```no_run
/// # use medicom_object::OpenFileOptions;
/// let file = OpenFileOptions::new()
///     .read_until(medicom_dictionary_std::tags::PIXEL_DATA)
///     .open_file("path/to/file.dcm")?;
/// # Result::<(), Box<dyn std::error::Error>>::Ok(())
/// ```
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct OpenFileOptions<D = StandardDataDictionary, T = &'static TransferSyntaxRegistry> {
    data_dictionary: D,
    ts_index: T,
    read_until: Option<Tag>,
    read_preamble: ReadPreamble,
    parse_options: ParseOptions,
}

impl OpenFileOptions {
    pub fn new() -> Self {
        OpenFileOptions::default()
    }
}

impl<D> Default for OpenFileOptions<D, &'static TransferSyntaxRegistry>
where
    D: Default,
{
    fn default() -> Self {
        OpenFileOptions {
            data_dictionary: D::default(),
            ts_index: get_registry(),
            read_until: None,
            read_preamble: ReadPreamble::default(),
            parse_options: ParseOptions::default(),
        }
    }
}

impl<D, T> OpenFileOptions<D, T> {
    /// Set the operation to read only until the given tag is found.
    ///
    /// The reading process ends immediately after this tag,
    /// or any other tag that is next in the standard DICOM tag ordering,
    /// is found in the object's root data set.
    /// An element with the exact tag will be excluded from the output.
    pub fn read_until(mut self, tag: Tag) -> Self {
        self.read_until = Some(tag);
        self
    }

    /// Set the operation to read all elements of the data set to the end.
    ///
    /// This is the default behavior.
    pub fn read_all(mut self) -> Self {
        self.read_until = None;
        self
    }

    /// Set whether to read the 128-byte DICOM file preamble.
    pub fn read_preamble(mut self, option: ReadPreamble) -> Self {
        self.read_preamble = option;
        self
    }

    /// Set the options which govern data set parsing.
    pub fn parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Set the transfer syntax index to use when reading the file.
    pub fn transfer_syntax_index<Tr>(self, ts_index: Tr) -> OpenFileOptions<D, Tr>
    where
        Tr: TransferSyntaxIndex,
    {
        OpenFileOptions {
            data_dictionary: self.data_dictionary,
            read_until: self.read_until,
            read_preamble: self.read_preamble,
            parse_options: self.parse_options,
            ts_index,
        }
    }

    /// Set the data element dictionary to use when reading the file.
    pub fn dictionary<Di>(self, dict: Di) -> OpenFileOptions<Di, T>
    where
        Di: DataDictionary,
        Di: Clone,
    {
        OpenFileOptions {
            data_dictionary: dict,
            read_until: self.read_until,
            read_preamble: self.read_preamble,
            parse_options: self.parse_options,
            ts_index: self.ts_index,
        }
    }

    /// Open the file at the given path.
    pub fn open_file<P>(self, path: P) -> Result<DefaultDicomObject<D>, crate::ReadError>
    where
        P: AsRef<Path>,
        D: DataDictionary,
        D: Clone,
        T: TransferSyntaxIndex,
    {
        DefaultDicomObject::open_file_with_all_options(
            path,
            self.data_dictionary,
            self.ts_index,
            self.read_until,
            self.read_preamble,
            self.parse_options,
        )
    }

    /// Obtain a DICOM object by reading from a byte source.
    ///
    /// This method assumes
    /// the standard file encoding structure without the preamble:
    /// file meta group, followed by the rest of the data set.
    pub fn from_reader<R>(self, from: R) -> Result<DefaultDicomObject<D>, crate::ReadError>
    where
        R: Read,
        D: DataDictionary,
        D: Clone,
        T: TransferSyntaxIndex,
    {
        DefaultDicomObject::from_reader_with_all_options(
            from,
            self.data_dictionary,
            self.ts_index,
            self.read_until,
            self.read_preamble,
            self.parse_options,
        )
    }
}

/// An enumerate of supported options for
/// whether to read the 128-byte DICOM file preamble.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
pub enum ReadPreamble {
    /// Read the preamble only when opening a file by path,
    /// and do not read the preamble when reading from a byte source.
    Auto,
    /// Never read the preamble,
    /// thus assuming that the original source does not have it.
    Never,
    /// Always read the preamble first,
    /// thus assuming that the original source always has it.
    Always,
}

impl Default for ReadPreamble {
    fn default() -> Self {
        ReadPreamble::Auto
    }
}

/// The set of options which govern the parsing of a DICOM data set.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct ParseOptions {
    /// Whether to reject data sets
    /// whose elements are not in ascending tag order.
    pub strict_tag_ordering: bool,
    /// Whether to accept in-memory buffers
    /// which start at the magic code,
    /// without the 128-byte preamble.
    pub allow_missing_preamble: bool,
    /// What to do when an unrecognized explicit VR code is found.
    pub unknown_vr_policy: UnknownVrBehavior,
    /// The maximum allowed nesting depth of data set sequences.
    pub max_sequence_depth: u32,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            strict_tag_ordering: false,
            allow_missing_preamble: false,
            unknown_vr_policy: UnknownVrBehavior::default(),
            max_sequence_depth: 64,
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        ParseOptions::default()
    }

    /// Reject data sets whose elements are not in ascending tag order.
    pub fn strict_tag_ordering(mut self, strict: bool) -> Self {
        self.strict_tag_ordering = strict;
        self
    }

    /// Accept in-memory buffers which start directly at the magic code.
    pub fn allow_missing_preamble(mut self, allow: bool) -> Self {
        self.allow_missing_preamble = allow;
        self
    }

    /// Replace the behavior for unrecognized explicit VR codes.
    pub fn unknown_vr_policy(mut self, policy: UnknownVrBehavior) -> Self {
        self.unknown_vr_policy = policy;
        self
    }

    /// Replace the maximum sequence nesting depth.
    pub fn max_sequence_depth(mut self, depth: u32) -> Self {
        self.max_sequence_depth = depth;
        self
    }
}

/// The set of options for encoding a DICOM object into an in-memory buffer.
#[derive(Debug, Copy, Clone, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub struct EncodeOptions {
    /// Whether to write the 128-byte preamble
    /// before the magic code.
    pub include_preamble: bool,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            include_preamble: true,
        }
    }
}

impl EncodeOptions {
    pub fn new() -> Self {
        EncodeOptions::default()
    }

    /// Set whether to write the 128-byte preamble before the magic code.
    pub fn include_preamble(mut self, include: bool) -> Self {
        self.include_preamble = include;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, FileMetaTableBuilder, InMemDicomObject};
    use medicom_core::{dicom_value, DataElement, Tag, VR};

    fn sample_object() -> DefaultDicomObject {
        let mut obj = InMemDicomObject::new_empty();
        obj.put(DataElement::new(
            Tag(0x0008, 0x0018),
            VR::UI,
            dicom_value!(Str, "1.4.645.212121"),
        ));
        obj.put(DataElement::new(
            Tag(0x0008, 0x0060),
            VR::CS,
            dicom_value!(Str, "CR"),
        ));
        obj.put(DataElement::new(
            Tag(0x0010, 0x0010),
            VR::PN,
            dicom_value!(Str, "Doe^John"),
        ));
        obj.with_meta(
            FileMetaTableBuilder::default()
                // Explicit VR Little Endian
                .transfer_syntax("1.2.840.10008.1.2.1")
                // Computed Radiography image storage
                .media_storage_sop_class_uid("1.2.840.10008.5.1.4.1.1.1")
                .implementation_class_uid(crate::IMPLEMENTATION_CLASS_UID),
        )
        .unwrap()
    }

    #[test]
    fn encode_and_parse_roundtrip() {
        let obj = sample_object();

        let bytes = encode(&obj, "1.2.840.10008.1.2.1", EncodeOptions::default()).unwrap();

        // preamble, magic code, and some data must be there
        assert!(bytes.len() > 132);
        assert!(bytes[..128].iter().all(|b| *b == 0));
        assert_eq!(&bytes[128..132], b"DICM");

        let obj2 = parse(&bytes, ParseOptions::default()).unwrap();
        assert_eq!(obj, obj2);
    }

    #[test]
    fn encode_changes_transfer_syntax() {
        let obj = sample_object();

        // re-encode in Implicit VR Little Endian
        let bytes = encode(&obj, "1.2.840.10008.1.2", EncodeOptions::default()).unwrap();
        let obj2 = parse(&bytes, ParseOptions::default()).unwrap();

        assert_eq!(obj2.meta().transfer_syntax(), "1.2.840.10008.1.2");
        assert_eq!(
            obj2.element(Tag(0x0010, 0x0010))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "Doe^John",
        );
    }

    #[test]
    fn encode_rejects_unknown_transfer_syntax() {
        let obj = sample_object();

        let err = encode(&obj, "1.2.840.10008.999", EncodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::WriteUnsupportedTransferSyntax { ref uid, .. } if uid == "1.2.840.10008.999",
        ));

        // recognized, but data set encoding is not supported
        let err = encode(&obj, "1.2.840.10008.1.2.1.99", EncodeOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            WriteError::WriteUnsupportedTransferSyntax { .. },
        ));
    }

    #[test]
    fn encode_without_preamble() {
        let obj = sample_object();

        let bytes = encode(
            &obj,
            "1.2.840.10008.1.2.1",
            EncodeOptions::new().include_preamble(false),
        )
        .unwrap();
        assert_eq!(&bytes[..4], b"DICM");

        // not parseable with the default options
        let err = parse(&bytes, ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotThisFormat);

        // parseable when a missing preamble is tolerated
        let obj2 = parse(&bytes, ParseOptions::new().allow_missing_preamble(true)).unwrap();
        assert_eq!(obj, obj2);
    }

    #[test]
    fn parse_classifies_truncated_data() {
        let obj = sample_object();
        let bytes = encode(&obj, "1.2.840.10008.1.2.1", EncodeOptions::default()).unwrap();

        // truncate in the middle of the last data element
        let err = parse(&bytes[..bytes.len() - 4], ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::TruncatedData);

        // the elements before the point of failure are retained
        let partial = err.into_partial_object().expect("should retain a partial object");
        assert_eq!(
            partial
                .element(Tag(0x0008, 0x0060))
                .unwrap()
                .value()
                .to_str()
                .unwrap(),
            "CR",
        );
        assert!(matches!(
            partial.element(Tag(0x0010, 0x0010)),
            Err(crate::AccessError::NoSuchDataElementTag { .. }),
        ));
    }

    #[test]
    fn parse_classifies_truncation_at_every_offset() {
        let obj = sample_object();
        let bytes = encode(&obj, "1.2.840.10008.1.2.1", EncodeOptions::default()).unwrap();

        let full_len = (&*obj).into_iter().count();
        for len in 0..bytes.len() {
            match parse(&bytes[..len], ParseOptions::default()) {
                // a cut at a data element boundary leaves a valid prefix
                Ok(prefix) => {
                    assert!((&*prefix).into_iter().count() <= full_len, "offset {}", len);
                }
                Err(err) => {
                    assert!(
                        matches!(
                            err.kind(),
                            ErrorKind::NotThisFormat | ErrorKind::TruncatedData,
                        ),
                        "offset {}: unexpected error kind {:?}",
                        len,
                        err.kind(),
                    );
                }
            }
        }
    }

    #[test]
    fn parse_classifies_arbitrary_data() {
        let err = parse(&[0x55; 200], ParseOptions::default()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotThisFormat);
        assert!(err.partial_object().is_none());
    }

    #[test]
    fn parse_with_strict_tag_ordering() {
        let obj = sample_object();
        let bytes = encode(&obj, "1.2.840.10008.1.2.1", EncodeOptions::default()).unwrap();

        // in-memory objects are kept in ascending tag order,
        // so strict ordering must accept this buffer
        let obj2 = parse(&bytes, ParseOptions::new().strict_tag_ordering(true)).unwrap();
        assert_eq!(obj, obj2);
    }
}
