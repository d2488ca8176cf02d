//! Stateful encoding of data set content to a write target.
//!
//! The [`StatefulEncoder`] supports encoding of binary data and text
//! while applying the necessary padding to keep data element values
//! at an even length.
use medicom_core::{value::PrimitiveValue, DataElementHeader, Length, VR};
use medicom_dictionary_std::tags;
use medicom_encoding::transfer_syntax::DynEncoder;
use medicom_encoding::{
    encode::EncodeTo,
    text::{DefaultCharacterSetCodec, SpecificCharacterSet, TextCodec},
    TransferSyntax,
};
use snafu::{Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Write;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("unsupported transfer syntax `{}`", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("unsupported character set code `{}`", code))]
    UnsupportedCharacterSet { code: String, backtrace: Backtrace },

    #[snafu(display("could not encode a data piece at position {}", position))]
    EncodeData {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_encoding::encode::Error,
    },

    #[snafu(display("could not encode text at position {}", position))]
    EncodeText {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_encoding::text::EncodeTextError,
    },

    #[snafu(display("could not write value data at position {}", position))]
    WriteValueData {
        position: u64,
        backtrace: Backtrace,
        source: std::io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Also called a printer, this encoder type provides a stateful mid-level
/// abstraction for writing data set content. Unlike `Encode`,
/// the stateful encoder knows how to write text values and keeps track
/// of how many bytes were written.
/// `W` is the write target, `E` is the encoder, and `T` is the text codec.
#[derive(Debug)]
pub struct StatefulEncoder<W, E, T = SpecificCharacterSet> {
    to: W,
    encoder: E,
    text: T,
    bytes_written: u64,
    buffer: Vec<u8>,
}

/// A stateful encoder with its element encoder
/// resolved at run time from a transfer syntax.
pub type DynStatefulEncoder<'w, W> = StatefulEncoder<W, DynEncoder<'w, W>>;

impl<W, E, T> StatefulEncoder<W, E, T> {
    pub fn new(to: W, encoder: E, text: T) -> Self {
        StatefulEncoder {
            to,
            encoder,
            text,
            bytes_written: 0,
            buffer: Vec::with_capacity(128),
        }
    }
}

impl<'s, W> DynStatefulEncoder<'s, W>
where
    W: Write + 's,
{
    pub fn from_transfer_syntax(
        to: W,
        ts: &TransferSyntax,
        charset: SpecificCharacterSet,
    ) -> Result<Self> {
        let encoder = ts
            .encoder_for()
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;

        Ok(StatefulEncoder::new(to, encoder, charset))
    }
}

impl<W, E> StatefulEncoder<W, E>
where
    W: Write,
    E: EncodeTo<W>,
{
    /// Encode and write a data element header.
    pub fn encode_element_header(&mut self, mut de: DataElementHeader) -> Result<()> {
        if let Some(len) = de.len.get() {
            de.len = Length(even_len(len))
        }
        let bytes = self
            .encoder
            .encode_element_header(&mut self.to, de)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += bytes as u64;
        Ok(())
    }

    /// Encode and write an item header,
    /// where `len` is the specified length of the item
    /// (can be `0xFFFF_FFFF` for undefined length).
    pub fn encode_item_header(&mut self, len: u32) -> Result<()> {
        let len = if len == 0xFFFF_FFFF {
            len
        } else {
            even_len(len)
        };
        self.encoder
            .encode_item_header(&mut self.to, len)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write an item delimiter.
    pub fn encode_item_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_item_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Encode and write a sequence delimiter.
    pub fn encode_sequence_delimiter(&mut self) -> Result<()> {
        self.encoder
            .encode_sequence_delimiter(&mut self.to)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;
        self.bytes_written += 8;
        Ok(())
    }

    /// Write the given bytes directly to the inner writer.
    ///
    /// Note that this method
    /// (unlike [`write_bytes`](StatefulEncoder::write_bytes))
    /// does not perform any additional padding.
    pub fn write_raw_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        self.to.write_all(bytes).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += bytes.len() as u64;
        Ok(())
    }

    /// Write a primitive value as a bunch of bytes
    /// directly to the inner writer.
    ///
    /// This method will perform the necessary padding
    /// (always with zeros)
    /// to ensure that the encoded value has an even number of bytes.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        debug_assert!(bytes.len() < u32::MAX as usize);
        self.to.write_all(bytes).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += bytes.len() as u64;
        if bytes.len() % 2 != 0 {
            self.to.write_all(&[0]).context(WriteValueDataSnafu {
                position: self.bytes_written,
            })?;
            self.bytes_written += 1;
        }
        Ok(())
    }

    /// Retrieve the number of bytes written so far by this printer.
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Encode and write the values of a pixel data offset table.
    pub fn encode_offset_table(&mut self, table: &[u32]) -> Result<()> {
        self.encoder
            .encode_offset_table(&mut self.to, table)
            .context(EncodeDataSnafu {
                position: self.bytes_written,
            })?;

        self.bytes_written += table.len() as u64 * 4;
        Ok(())
    }

    /// Encode and write a data element with a primitive value.
    ///
    /// This method will perform the necessary padding to ensure that the
    /// encoded value is an even number of bytes.
    /// Where applicable,
    /// this will use the inner text codec for textual values.
    /// The length property of the header is ignored,
    /// the true byte length of the value in its encoded form is used instead.
    pub fn encode_primitive_element(
        &mut self,
        de: &DataElementHeader,
        value: &PrimitiveValue,
    ) -> Result<()> {
        // intercept string encoding calls to use the text codec
        match value {
            PrimitiveValue::Str(text) => {
                self.encode_text_element(text, *de)?;
                Ok(())
            }
            PrimitiveValue::Strs(texts) => {
                self.encode_texts_element(&texts[..], *de)?;
                Ok(())
            }
            _ => {
                let byte_len = value.calculate_byte_len();
                self.encode_element_header(DataElementHeader {
                    tag: de.tag,
                    vr: de.vr,
                    len: Length(byte_len as u32),
                })?;
                let bytes =
                    self.encoder
                        .encode_primitive(&mut self.to, value)
                        .context(EncodeDataSnafu {
                            position: self.bytes_written,
                        })?;

                self.bytes_written += bytes as u64;
                if bytes % 2 != 0 {
                    self.to.write_all(&[0]).context(WriteValueDataSnafu {
                        position: self.bytes_written,
                    })?;
                    self.bytes_written += 1;
                }
                Ok(())
            }
        }
    }

    fn try_new_codec(&mut self, name: &str) -> Result<()> {
        let name = name.trim_end();
        let codec = if name.is_empty() {
            SpecificCharacterSet::Default
        } else {
            SpecificCharacterSet::from_code(name)
                .context(UnsupportedCharacterSetSnafu { code: name })?
        };
        self.text = codec;
        Ok(())
    }

    fn encode_text_element(&mut self, text: &str, de: DataElementHeader) -> Result<()> {
        // encode it in memory first so that we know the real length
        let mut encoded_value = self.convert_text_untrailed(text, de.vr)?;
        // pad to even length
        if encoded_value.len() % 2 == 1 {
            let pad = if de.vr == VR::UI { b'\0' } else { b' ' };
            encoded_value.push(pad);
        }

        // now we can write the header with the correct length
        self.encode_element_header(DataElementHeader {
            tag: de.tag,
            vr: de.vr,
            len: Length(encoded_value.len() as u32),
        })?;
        self.to.write_all(&encoded_value).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += encoded_value.len() as u64;

        // a specific character set element
        // replaces the active text codec
        if de.tag == tags::SPECIFIC_CHARACTER_SET {
            self.try_new_codec(text)?;
        }

        Ok(())
    }

    fn encode_texts_element<S>(&mut self, texts: &[S], de: DataElementHeader) -> Result<()>
    where
        S: AsRef<str>,
    {
        self.buffer.clear();
        for (i, t) in texts.iter().enumerate() {
            let encoded = self.convert_text_untrailed(t.as_ref(), de.vr)?;
            self.buffer.extend_from_slice(&encoded);
            if i < texts.len() - 1 {
                self.buffer.push(b'\\');
            }
        }
        // pad to even length
        if self.buffer.len() % 2 == 1 {
            let pad = if de.vr == VR::UI { b'\0' } else { b' ' };
            self.buffer.push(pad);
        }

        // now we can write the header with the correct length
        self.encode_element_header(DataElementHeader {
            tag: de.tag,
            vr: de.vr,
            len: Length(self.buffer.len() as u32),
        })?;

        self.to.write_all(&self.buffer).context(WriteValueDataSnafu {
            position: self.bytes_written,
        })?;
        self.bytes_written += self.buffer.len() as u64;

        // a specific character set element
        // replaces the active text codec
        if de.tag == tags::SPECIFIC_CHARACTER_SET {
            if let Some(charset_name) = texts.first() {
                self.try_new_codec(charset_name.as_ref())?;
            }
        }

        Ok(())
    }

    fn convert_text_untrailed(&self, text: &str, vr: VR) -> Result<Vec<u8>> {
        match vr {
            VR::AE | VR::AS | VR::CS | VR::DA | VR::DS | VR::DT | VR::IS | VR::TM | VR::UI => {
                // these VRs always use the default character repertoire
                DefaultCharacterSetCodec
                    .encode(text)
                    .context(EncodeTextSnafu {
                        position: self.bytes_written,
                    })
            }
            _ => self.text.encode(text).context(EncodeTextSnafu {
                position: self.bytes_written,
            }),
        }
    }
}

#[inline]
fn even_len(l: u32) -> u32 {
    (l + 1) & !1
}
