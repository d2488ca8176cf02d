//! Stateful decoding of data set content from a data source.
use medicom_core::header::{DataElementHeader, HasLength, Header, Length, SequenceItemHeader, Tag, VR};
use medicom_core::value::deserialize::{parse_date, parse_datetime, parse_time};
use medicom_core::value::{PrimitiveValue, C};
use medicom_dictionary_std::tags;
use medicom_encoding::decode::basic::BasicDecoder;
use medicom_encoding::decode::{BasicDecode, DecodeFrom, UnknownVrBehavior};
use medicom_encoding::text::{
    DecodeTextError, DefaultCharacterSetCodec, SpecificCharacterSet, TextCodec,
};
use medicom_encoding::transfer_syntax::{DynDecoder, TransferSyntax};
use smallvec::smallvec;
use snafu::{ensure, Backtrace, OptionExt, ResultExt, Snafu};
use std::io::Read;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Snafu)]
#[non_exhaustive]
pub enum Error {
    #[snafu(display("unsupported transfer syntax `{}`", ts))]
    UnsupportedTransferSyntax {
        ts: &'static str,
        backtrace: Backtrace,
    },

    #[snafu(display("unsupported character set code `{}` at position {}", code, position))]
    UnsupportedCharacterSet {
        code: String,
        position: u64,
        backtrace: Backtrace,
    },

    #[snafu(display("could not decode element header at position {}", position))]
    DecodeElementHeader {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_encoding::decode::Error,
    },

    #[snafu(display("could not decode item header at position {}", position))]
    DecodeItemHeader {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_encoding::decode::Error,
    },

    #[snafu(display("could not decode text at position {}", position))]
    DecodeText {
        position: u64,
        #[snafu(backtrace)]
        source: DecodeTextError,
    },

    #[snafu(display("could not read value from the data source at position {}", position))]
    ReadValueData {
        position: u64,
        backtrace: Backtrace,
        source: std::io::Error,
    },

    #[snafu(display("could not parse value as a date at position {}", position))]
    ParseDateValue {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_core::value::DeserializeError,
    },

    #[snafu(display("could not parse value as a time at position {}", position))]
    ParseTimeValue {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_core::value::DeserializeError,
    },

    #[snafu(display("could not parse value as a date-time at position {}", position))]
    ParseDateTimeValue {
        position: u64,
        #[snafu(backtrace)]
        source: medicom_core::value::DeserializeError,
    },

    #[snafu(display("could not parse value as an integer at position {}", position))]
    ParseIntegerValue {
        position: u64,
        backtrace: Backtrace,
        source: std::num::ParseIntError,
    },

    #[snafu(display("could not parse value as a floating point number at position {}", position))]
    ParseFloatValue {
        position: u64,
        backtrace: Backtrace,
        source: std::num::ParseFloatError,
    },

    #[snafu(display("undefined value length of element tagged {}", tag))]
    UndefinedValueLength { tag: Tag, backtrace: Backtrace },

    #[snafu(display("attempted to read a value of a non-primitive element at position {}", position))]
    NonPrimitiveType { position: u64, backtrace: Backtrace },

    #[snafu(display("invalid data length {} at position {}, must be a multiple of 4", length, position))]
    UnalignedLength {
        length: u32,
        position: u64,
        backtrace: Backtrace,
    },
}

/// The initial capacity of the parser's value reading buffer.
const PARSER_BUFFER_CAPACITY: usize = 2048;

/// Interface for a stateful decoder of data set content,
/// which maintains the necessary context between one
/// decoding operation and the next.
pub trait StatefulDecode {
    /// Decode and retrieve the next data element header from the source.
    ///
    /// At the end of this operation, the source will be pointing
    /// at the element's value data, which should be read or skipped
    /// as necessary.
    fn decode_header(&mut self) -> Result<DataElementHeader>;

    /// Decode and retrieve the next sequence item header from the source.
    fn decode_item_header(&mut self) -> Result<SequenceItemHeader>;

    /// Eagerly read the following data in the source as a primitive data
    /// value. When reading values in text form, a conversion to a more
    /// maleable type may be performed so as to make things easier
    /// (e.g. numbers in text are converted to their binary number types).
    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue>;

    /// Read the following data in the source as a primitive data value,
    /// but keep the value in its original format:
    /// numbers saved as text are retained as text.
    fn read_value_preserved(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue>;

    /// Read the following data in the source as a sequence of bytes,
    /// regardless of its value representation.
    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue>;

    /// Read `length` bytes verbatim from the source
    /// and append them to the given vector.
    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()>;

    /// Read `length` bytes from the source as a sequence of unsigned
    /// 32-bit integers and append them to the given vector.
    fn read_u32_to_vec(&mut self, length: u32, vec: &mut Vec<u32>) -> Result<()>;

    /// Retrieve the known position of the inner source.
    /// If the stateful decoder was constructed at the beginning
    /// of the source's data, this equals the number of bytes read so far.
    fn position(&self) -> u64;
}

/// A stateful decoder for data set content,
/// on top of a source of bytes,
/// an element decoder for a specific transfer syntax,
/// a basic decoder for the transfer syntax's endianness,
/// and the active specific character set for text values.
#[derive(Debug)]
pub struct StatefulDecoder<D, S, BD = BasicDecoder, TC = SpecificCharacterSet> {
    from: S,
    decoder: D,
    basic: BD,
    text: TC,
    buffer: Vec<u8>,
    position: u64,
}

/// A stateful decoder with its element decoder
/// resolved at run time from a transfer syntax.
pub type DynStatefulDecoder<S> = StatefulDecoder<DynDecoder<S>, S>;

impl<D, S, BD, TC> StatefulDecoder<D, S, BD, TC> {
    /// Create a new stateful decoder
    /// assuming that the source is at the beginning of its data.
    pub fn new(from: S, decoder: D, basic: BD, text: TC) -> Self {
        Self::new_with_position(from, decoder, basic, text, 0)
    }

    /// Create a new stateful decoder
    /// with the source's current position given in `position`.
    pub fn new_with_position(from: S, decoder: D, basic: BD, text: TC, position: u64) -> Self {
        StatefulDecoder {
            from,
            decoder,
            basic,
            text,
            buffer: Vec::with_capacity(PARSER_BUFFER_CAPACITY),
            position,
        }
    }
}

impl<S> DynStatefulDecoder<S>
where
    S: Read,
{
    /// Create a new stateful decoder for the given transfer syntax
    /// and specific character set,
    /// with the source's current position given in `position`.
    pub fn new_with(
        from: S,
        ts: &TransferSyntax,
        charset: SpecificCharacterSet,
        position: u64,
    ) -> Result<Self> {
        Self::new_with_unknown_vr(from, ts, charset, position, UnknownVrBehavior::default())
    }

    /// Create a new stateful decoder for the given transfer syntax
    /// and specific character set,
    /// with the source's current position given in `position`
    /// and the given behavior for unrecognized explicit VR codes.
    pub fn new_with_unknown_vr(
        from: S,
        ts: &TransferSyntax,
        charset: SpecificCharacterSet,
        position: u64,
        unknown_vr: UnknownVrBehavior,
    ) -> Result<Self> {
        let basic = ts.basic_decoder();
        let decoder = ts
            .decoder_for_options(unknown_vr)
            .context(UnsupportedTransferSyntaxSnafu { ts: ts.uid() })?;

        Ok(StatefulDecoder::new_with_position(
            from, decoder, basic, charset, position,
        ))
    }
}

impl<D, S, BD> StatefulDecoder<D, S, BD, SpecificCharacterSet>
where
    D: DecodeFrom<S>,
    BD: BasicDecode,
    S: Read,
{
    /// Replace the active specific character set
    /// for the decoding of cleartext values.
    pub fn set_character_set(&mut self, charset: SpecificCharacterSet) {
        self.text = charset;
    }

    fn require_known_length(&self, header: &DataElementHeader) -> Result<usize> {
        header
            .length()
            .get()
            .map(|len| len as usize)
            .context(UndefinedValueLengthSnafu { tag: header.tag() })
    }

    fn read_value_tag(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // tags
        let ntags = len >> 2;
        let parts: Result<C<Tag>> = (0..ntags)
            .map(|_| {
                self.basic
                    .decode_tag(&mut self.from)
                    .context(ReadValueDataSnafu {
                        position: self.position,
                    })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::Tags(parts?))
    }

    fn read_value_ob(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 8-bit integers (or just byte data)
        let len = self.require_known_length(header)?;
        let mut buf = smallvec![0u8; len];
        self.from.read_exact(&mut buf).context(ReadValueDataSnafu {
            position: self.position,
        })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U8(buf))
    }

    fn read_value_strs(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;
        // sequence of strings
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;

        let position = self.position;
        let parts: Result<C<String>> = match header.vr() {
            VR::AE | VR::CS | VR::AS => self
                .buffer
                .split(|v| *v == b'\\')
                .map(|slice| {
                    DefaultCharacterSetCodec
                        .decode(slice)
                        .context(DecodeTextSnafu { position })
                })
                .collect(),
            _ => self
                .buffer
                .split(|v| *v == b'\\')
                .map(|slice| self.text.decode(slice).context(DecodeTextSnafu { position }))
                .collect(),
        };
        let parts = parts?;

        self.position += len as u64;

        // a specific character set named in the data set
        // replaces the active one right away,
        // so that the text values which follow are decoded accordingly
        if header.tag() == tags::SPECIFIC_CHARACTER_SET {
            let charset = match parts.first().map(|name| name.trim_end()) {
                None | Some("") => SpecificCharacterSet::Default,
                Some(code) => {
                    SpecificCharacterSet::from_code(code).context(UnsupportedCharacterSetSnafu {
                        code,
                        position: self.position,
                    })?
                }
            };
            self.set_character_set(charset);
        }

        Ok(PrimitiveValue::Strs(parts))
    }

    fn read_value_str(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // a single string
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let text = self.text.decode(&self.buffer).context(DecodeTextSnafu {
            position: self.position,
        })?;
        self.position += len as u64;
        Ok(PrimitiveValue::Str(text))
    }

    fn read_value_ss(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 16-bit signed integers
        let len = self.require_known_length(header)?;

        let n = len >> 1;
        let mut vec = smallvec![0; n];
        self.basic
            .decode_ss_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::I16(vec))
    }

    fn read_value_fl(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 32-bit floats
        let len = self.require_known_length(header)?;

        let n = len >> 2;
        let mut vec = smallvec![0.; n];
        self.basic
            .decode_fl_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::F32(vec))
    }

    fn read_value_od(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 64-bit floats
        let len = self.require_known_length(header)?;

        let n = len >> 3;
        let mut vec = smallvec![0.; n];
        self.basic
            .decode_fd_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::F64(vec))
    }

    fn read_value_ul(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 32-bit unsigned integers
        let len = self.require_known_length(header)?;

        let n = len >> 2;
        let mut vec = smallvec![0u32; n];
        self.basic
            .decode_ul_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U32(vec))
    }

    fn read_value_us(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 16-bit unsigned integers
        let len = self.require_known_length(header)?;

        let n = len >> 1;
        let mut vec = smallvec![0u16; n];
        self.basic
            .decode_us_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U16(vec))
    }

    fn read_value_uv(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 64-bit unsigned integers
        let len = self.require_known_length(header)?;

        let n = len >> 3;
        let mut vec = smallvec![0u64; n];
        self.basic
            .decode_uv_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::U64(vec))
    }

    fn read_value_sl(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 32-bit signed integers
        let len = self.require_known_length(header)?;

        let n = len >> 2;
        let mut vec = smallvec![0i32; n];
        self.basic
            .decode_sl_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::I32(vec))
    }

    fn read_value_sv(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        // sequence of 64-bit signed integers
        let len = self.require_known_length(header)?;

        let n = len >> 3;
        let mut vec = smallvec![0i64; n];
        self.basic
            .decode_sv_into(&mut self.from, &mut vec[..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += len as u64;
        Ok(PrimitiveValue::I64(vec))
    }

    fn read_value_da(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // sequence of dates
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let buf = trim_trail_empty_bytes(&self.buffer);
        if buf.is_empty() {
            self.position += len as u64;
            return Ok(PrimitiveValue::Empty);
        }

        let position = self.position;
        let vec: Result<C<_>> = buf
            .split(|b| *b == b'\\')
            .map(|part| {
                parse_date(part)
                    .map(|t| t.0)
                    .context(ParseDateValueSnafu { position })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::Date(vec?))
    }

    fn read_value_ds(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // sequence of doubles in text form
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let buf = trim_trail_empty_bytes(&self.buffer);
        if buf.is_empty() {
            self.position += len as u64;
            return Ok(PrimitiveValue::Empty);
        }

        let position = self.position;
        let parts: Result<C<f64>> = buf
            .split(|b| *b == b'\\')
            .map(|slice| {
                let txt = DefaultCharacterSetCodec
                    .decode(slice)
                    .context(DecodeTextSnafu { position })?;
                txt.trim()
                    .parse::<f64>()
                    .context(ParseFloatValueSnafu { position })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::F64(parts?))
    }

    fn read_value_dt(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // sequence of date-times
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let buf = trim_trail_empty_bytes(&self.buffer);
        if buf.is_empty() {
            self.position += len as u64;
            return Ok(PrimitiveValue::Empty);
        }

        let position = self.position;
        let vec: Result<C<_>> = buf
            .split(|b| *b == b'\\')
            .map(|part| parse_datetime(part).context(ParseDateTimeValueSnafu { position }))
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::DateTime(vec?))
    }

    fn read_value_is(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // sequence of integers in text form
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let buf = trim_trail_empty_bytes(&self.buffer);
        if buf.is_empty() {
            self.position += len as u64;
            return Ok(PrimitiveValue::Empty);
        }

        let position = self.position;
        let parts: Result<C<i32>> = buf
            .split(|b| *b == b'\\')
            .map(|slice| {
                let txt = DefaultCharacterSetCodec
                    .decode(slice)
                    .context(DecodeTextSnafu { position })?;
                txt.trim()
                    .parse::<i32>()
                    .context(ParseIntegerValueSnafu { position })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::I32(parts?))
    }

    fn read_value_tm(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        let len = self.require_known_length(header)?;

        // sequence of times
        self.buffer.resize_with(len, Default::default);
        self.from
            .read_exact(&mut self.buffer)
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        let buf = trim_trail_empty_bytes(&self.buffer);
        if buf.is_empty() {
            self.position += len as u64;
            return Ok(PrimitiveValue::Empty);
        }

        let position = self.position;
        let vec: Result<C<_>> = buf
            .split(|b| *b == b'\\')
            .map(|part| {
                parse_time(part)
                    .map(|t| t.0)
                    .context(ParseTimeValueSnafu { position })
            })
            .collect();
        self.position += len as u64;
        Ok(PrimitiveValue::Time(vec?))
    }
}

impl<D, S, BD> StatefulDecode for StatefulDecoder<D, S, BD, SpecificCharacterSet>
where
    D: DecodeFrom<S>,
    BD: BasicDecode,
    S: Read,
{
    fn decode_header(&mut self) -> Result<DataElementHeader> {
        self.decoder
            .decode_header(&mut self.from)
            .context(DecodeElementHeaderSnafu {
                position: self.position,
            })
            .map(|(header, bytes_read)| {
                self.position += bytes_read as u64;
                header
            })
    }

    fn decode_item_header(&mut self) -> Result<SequenceItemHeader> {
        self.decoder
            .decode_item_header(&mut self.from)
            .context(DecodeItemHeaderSnafu {
                position: self.position,
            })
            .map(|header| {
                // item header is always 8 bytes
                self.position += 8;
                header
            })
    }

    fn read_value(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        if header.length() == Length(0) {
            return Ok(PrimitiveValue::Empty);
        }

        match header.vr() {
            VR::SQ => {
                // sequence objects should not head over here, they are
                // handled at a higher level
                NonPrimitiveTypeSnafu {
                    position: self.position,
                }
                .fail()
            }
            VR::AT => self.read_value_tag(header),
            VR::AE | VR::AS | VR::PN | VR::SH | VR::LO | VR::UC | VR::CS | VR::UI => {
                self.read_value_strs(header)
            }
            VR::UT | VR::ST | VR::UR | VR::LT => self.read_value_str(header),
            VR::UN | VR::OB => self.read_value_ob(header),
            VR::US | VR::OW => self.read_value_us(header),
            VR::SS => self.read_value_ss(header),
            VR::DA => self.read_value_da(header),
            VR::DT => self.read_value_dt(header),
            VR::TM => self.read_value_tm(header),
            VR::DS => self.read_value_ds(header),
            VR::FD | VR::OD => self.read_value_od(header),
            VR::FL | VR::OF => self.read_value_fl(header),
            VR::IS => self.read_value_is(header),
            VR::SL => self.read_value_sl(header),
            VR::SV => self.read_value_sv(header),
            VR::OL | VR::UL => self.read_value_ul(header),
            VR::OV | VR::UV => self.read_value_uv(header),
        }
    }

    fn read_value_preserved(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        if header.length() == Length(0) {
            return Ok(PrimitiveValue::Empty);
        }

        match header.vr() {
            VR::SQ => {
                // sequence objects should not head over here, they are
                // handled at a higher level
                NonPrimitiveTypeSnafu {
                    position: self.position,
                }
                .fail()
            }
            VR::AT => self.read_value_tag(header),
            VR::AE
            | VR::AS
            | VR::PN
            | VR::SH
            | VR::LO
            | VR::UC
            | VR::CS
            | VR::UI
            | VR::IS
            | VR::DS
            | VR::DA
            | VR::TM
            | VR::DT => self.read_value_strs(header),
            VR::UT | VR::ST | VR::UR | VR::LT => self.read_value_str(header),
            VR::UN | VR::OB => self.read_value_ob(header),
            VR::US | VR::OW => self.read_value_us(header),
            VR::SS => self.read_value_ss(header),
            VR::FD | VR::OD => self.read_value_od(header),
            VR::FL | VR::OF => self.read_value_fl(header),
            VR::SL => self.read_value_sl(header),
            VR::SV => self.read_value_sv(header),
            VR::OL | VR::UL => self.read_value_ul(header),
            VR::OV | VR::UV => self.read_value_uv(header),
        }
    }

    fn read_value_bytes(&mut self, header: &DataElementHeader) -> Result<PrimitiveValue> {
        if header.length() == Length(0) {
            return Ok(PrimitiveValue::Empty);
        }

        match header.vr() {
            VR::SQ => NonPrimitiveTypeSnafu {
                position: self.position,
            }
            .fail(),
            _ => self.read_value_ob(header),
        }
    }

    fn read_to_vec(&mut self, length: u32, vec: &mut Vec<u8>) -> Result<()> {
        let start = vec.len();
        vec.resize(start + length as usize, 0);
        self.from
            .read_exact(&mut vec[start..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += u64::from(length);
        Ok(())
    }

    fn read_u32_to_vec(&mut self, length: u32, vec: &mut Vec<u32>) -> Result<()> {
        ensure!(
            length % 4 == 0,
            UnalignedLengthSnafu {
                length,
                position: self.position,
            }
        );
        let start = vec.len();
        vec.resize(start + length as usize / 4, 0);
        self.basic
            .decode_ul_into(&mut self.from, &mut vec[start..])
            .context(ReadValueDataSnafu {
                position: self.position,
            })?;
        self.position += u64::from(length);
        Ok(())
    }

    fn position(&self) -> u64 {
        self.position
    }
}

/// Remove trailing spaces and null characters.
fn trim_trail_empty_bytes(mut x: &[u8]) -> &[u8] {
    while x.last() == Some(&b' ') || x.last() == Some(&b'\0') {
        x = &x[..x.len() - 1];
    }
    x
}
