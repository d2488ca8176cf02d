//! Interpretation of DICOM data sets as streams of tokens.
use medicom_core::header::{DataElement, DataElementHeader, EmptyObject, HasLength, Length};
use medicom_core::value::{DicomValueType, PrimitiveValue, Value, C};
use medicom_core::{Tag, VR};
use std::fmt;

pub mod read;
pub mod write;

pub use self::read::DataSetReader;
pub use self::write::DataSetWriter;

/// A token of a DICOM data set stream. This is part of the interpretation of a
/// data set as a stream of symbols, which may either represent data headers or
/// actual value data.
#[derive(Debug, Clone)]
pub enum DataToken {
    /// A data header of a primitive value.
    ElementHeader(DataElementHeader),
    /// The beginning of a sequence element.
    SequenceStart { tag: Tag, len: Length },
    /// The beginning of an encapsulated pixel data element.
    PixelSequenceStart,
    /// The ending delimiter of a sequence or encapsulated pixel data.
    SequenceEnd,
    /// The beginning of a new item in the sequence.
    ItemStart { len: Length },
    /// The ending delimiter of an item.
    ItemEnd,
    /// A primitive data element value.
    PrimitiveValue(PrimitiveValue),
    /// An owned piece of raw data representing an item's value.
    ///
    /// This variant is used to represent the value of an encapsulated
    /// pixel data fragment. It should not be used to represent nested
    /// data sets.
    ItemValue(Vec<u8>),
    /// The values of the basic offset table
    /// of an encapsulated pixel data element.
    OffsetTable(Vec<u32>),
}

impl fmt::Display for DataToken {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DataToken::PrimitiveValue(ref v) => write!(f, "PrimitiveValue({:?})", v.value_type()),
            DataToken::ItemValue(ref data) => write!(f, "ItemValue({} bytes)", data.len()),
            DataToken::OffsetTable(ref table) => write!(f, "OffsetTable({} offsets)", table.len()),
            other => write!(f, "{:?}", other),
        }
    }
}

/// This implementation treats undefined lengths as equal.
impl PartialEq<Self> for DataToken {
    fn eq(&self, other: &Self) -> bool {
        use DataToken::*;
        match (self, other) {
            (
                ElementHeader(DataElementHeader {
                    tag: tag1,
                    vr: vr1,
                    len: len1,
                }),
                ElementHeader(DataElementHeader {
                    tag: tag2,
                    vr: vr2,
                    len: len2,
                }),
            ) => tag1 == tag2 && vr1 == vr2 && len1.inner_eq(*len2),
            (
                SequenceStart {
                    tag: tag1,
                    len: len1,
                },
                SequenceStart {
                    tag: tag2,
                    len: len2,
                },
            ) => tag1 == tag2 && len1.inner_eq(*len2),
            (ItemStart { len: len1 }, ItemStart { len: len2 }) => len1.inner_eq(*len2),
            (PrimitiveValue(v1), PrimitiveValue(v2)) => v1 == v2,
            (ItemValue(v1), ItemValue(v2)) => v1 == v2,
            (OffsetTable(v1), OffsetTable(v2)) => v1 == v2,
            (ItemEnd, ItemEnd)
            | (SequenceEnd, SequenceEnd)
            | (PixelSequenceStart, PixelSequenceStart) => true,
            _ => false,
        }
    }
}

impl From<DataElementHeader> for DataToken {
    fn from(header: DataElementHeader) -> Self {
        match (header.vr(), header.tag) {
            (VR::OB, Tag(0x7fe0, 0x0010)) if header.len.is_undefined() => {
                DataToken::PixelSequenceStart
            }
            (VR::SQ, _) => DataToken::SequenceStart {
                tag: header.tag,
                len: header.len,
            },
            _ => DataToken::ElementHeader(header),
        }
    }
}

impl DataToken {
    /// Check whether this token represents the start of a sequence
    /// of nested data sets.
    pub fn is_sequence_start(&self) -> bool {
        matches!(self, DataToken::SequenceStart { .. })
    }

    /// Check whether this token represents the end of a sequence
    /// or the end of an encapsulated pixel data element.
    pub fn is_sequence_end(&self) -> bool {
        matches!(self, DataToken::SequenceEnd)
    }
}

/// The type of delimiter: sequence or item.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SeqTokenType {
    Sequence,
    Item,
}

/// A type that can be converted into a stream of data set tokens.
/// The conversion is infallible. Sources which may fail to produce
/// tokens should instead expose an iterator of token results.
pub trait IntoTokens {
    /// The iterator type through which tokens are obtained.
    type Iter: Iterator<Item = DataToken>;

    /// Convert the value into tokens.
    fn into_tokens(self) -> Self::Iter;
}

impl IntoTokens for EmptyObject {
    type Iter = std::iter::Empty<DataToken>;

    fn into_tokens(self) -> Self::Iter {
        unreachable!()
    }
}

/// A pixel data fragment is expressed as a single item with binary data.
impl IntoTokens for Vec<u8> {
    type Iter = ItemValueTokens<Vec<u8>>;

    fn into_tokens(self) -> Self::Iter {
        ItemValueTokens::new(self)
    }
}

/// Placeholder fragment type for data sets which cannot hold pixel data,
/// such as the file meta group.
impl IntoTokens for [u8; 0] {
    type Iter = ItemValueTokens<[u8; 0]>;

    fn into_tokens(self) -> Self::Iter {
        ItemValueTokens::new(self)
    }
}

impl<T> IntoTokens for C<T>
where
    T: IntoTokens,
{
    type Iter = FlattenTokens<<C<T> as IntoIterator>::IntoIter, T::Iter>;

    fn into_tokens(self) -> Self::Iter {
        FlattenTokens {
            seq: self.into_iter(),
            tokens: None,
        }
    }
}

impl<I, P> IntoTokens for DataElement<I, P>
where
    I: IntoTokens + HasLength,
    P: IntoTokens + AsRef<[u8]>,
{
    type Iter = DataElementTokens<I, P>;

    fn into_tokens(self) -> Self::Iter {
        DataElementTokens::Start(self)
    }
}

/// A stream of tokens from a single DICOM data element.
#[derive(Debug)]
pub enum DataElementTokens<I, P>
where
    I: IntoTokens,
    P: IntoTokens,
{
    /// at the beginning of the element
    Start(DataElement<I, P>),
    /// the header of a plain primitive element was given,
    /// the value comes next
    Value(PrimitiveValue),
    /// iterating over the items of a sequence
    Items(FlattenTokens<<C<AsItem<I>> as IntoIterator>::IntoIter, ItemTokens<I::Iter>>),
    /// the start of an encapsulated pixel data element was given,
    /// the basic offset table item comes next
    PixelData(C<P>, C<u32>),
    /// the basic offset table item was open,
    /// the offset values come next
    OffsetTable(C<P>, C<u32>),
    /// the basic offset table was given,
    /// the item delimiter comes next
    OffsetTableEnd(C<P>),
    /// iterating over the pixel data fragment items
    Fragments(FlattenTokens<<C<P> as IntoIterator>::IntoIter, P::Iter>),
    /// no more tokens
    End,
}

impl<I, P> Iterator for DataElementTokens<I, P>
where
    I: IntoTokens + HasLength,
    P: IntoTokens + AsRef<[u8]>,
{
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        let (out, next_state) = match std::mem::replace(self, DataElementTokens::End) {
            DataElementTokens::Start(elem) => {
                let header = *elem.header();
                match DataToken::from(header) {
                    token @ DataToken::SequenceStart { .. } => match elem.into_value() {
                        Value::Sequence { items, .. } => {
                            let items: C<_> = items
                                .into_iter()
                                .map(|item| AsItem(item.length(), item))
                                .collect();
                            (token, DataElementTokens::Items(items.into_tokens()))
                        }
                        _ => unreachable!("inconsistent data element"),
                    },
                    token @ DataToken::PixelSequenceStart => match elem.into_value() {
                        Value::PixelSequence {
                            fragments,
                            offset_table,
                        } => (token, DataElementTokens::PixelData(fragments, offset_table)),
                        _ => unreachable!("inconsistent data element"),
                    },
                    token => match elem.into_value() {
                        Value::Primitive(value) => (token, DataElementTokens::Value(value)),
                        _ => unreachable!("inconsistent data element"),
                    },
                }
            }
            DataElementTokens::Value(value) => {
                (DataToken::PrimitiveValue(value), DataElementTokens::End)
            }
            DataElementTokens::Items(mut tokens) => match tokens.next() {
                Some(token) => {
                    *self = DataElementTokens::Items(tokens);
                    return Some(token);
                }
                None => (DataToken::SequenceEnd, DataElementTokens::End),
            },
            DataElementTokens::PixelData(fragments, offset_table) => {
                let len = Length(4 * offset_table.len() as u32);
                if offset_table.is_empty() {
                    (
                        DataToken::ItemStart { len },
                        DataElementTokens::OffsetTableEnd(fragments),
                    )
                } else {
                    (
                        DataToken::ItemStart { len },
                        DataElementTokens::OffsetTable(fragments, offset_table),
                    )
                }
            }
            DataElementTokens::OffsetTable(fragments, offset_table) => (
                DataToken::OffsetTable(offset_table.into_vec()),
                DataElementTokens::OffsetTableEnd(fragments),
            ),
            DataElementTokens::OffsetTableEnd(fragments) => (
                DataToken::ItemEnd,
                DataElementTokens::Fragments(fragments.into_tokens()),
            ),
            DataElementTokens::Fragments(mut tokens) => match tokens.next() {
                Some(token) => {
                    *self = DataElementTokens::Fragments(tokens);
                    return Some(token);
                }
                None => (DataToken::SequenceEnd, DataElementTokens::End),
            },
            DataElementTokens::End => return None,
        };
        *self = next_state;
        Some(out)
    }
}

/// Flatten a sequence of elements into their respective
/// token sequence in order.
#[derive(Debug)]
pub struct FlattenTokens<O, K> {
    seq: O,
    tokens: Option<K>,
}

impl<O, K> Iterator for FlattenTokens<O, K>
where
    O: Iterator,
    O::Item: IntoTokens<Iter = K>,
    K: Iterator<Item = DataToken>,
{
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        // ensure a token sequence
        if self.tokens.is_none() {
            match self.seq.next() {
                Some(entries) => {
                    self.tokens = Some(entries.into_tokens());
                }
                None => return None,
            }
        }

        // retrieve the next token
        match self.tokens.as_mut().and_then(|s| s.next()) {
            Some(token) => Some(token),
            None => {
                self.tokens = None;
                self.next()
            }
        }
    }
}

/// A newtype for interpreting a nested data set as a sequence item.
/// When converting a value of this type into tokens, the inner data set
/// tokens are surrounded by an item start and an item end delimiter.
#[derive(Debug, Clone, PartialEq)]
pub struct AsItem<I>(Length, I);

impl<I> AsItem<I> {
    pub fn new(len: Length, inner: I) -> Self {
        AsItem(len, inner)
    }
}

impl<I> IntoTokens for AsItem<I>
where
    I: IntoTokens,
{
    type Iter = ItemTokens<I::Iter>;

    fn into_tokens(self) -> Self::Iter {
        ItemTokens::new(self.0, self.1)
    }
}

impl<I> HasLength for AsItem<I> {
    fn length(&self) -> Length {
        self.0
    }
}

/// A token iterator type for data set items.
#[derive(Debug)]
pub enum ItemTokens<T> {
    /// the item start comes next
    Start {
        len: Length,
        // Option is used for easy taking from a &mut,
        // should always be Some in practice
        inner: Option<T>,
    },
    /// the inner tokens of the item are being retrieved
    Inner { tokens: T },
    /// no more tokens
    Done,
}

impl<T> ItemTokens<T>
where
    T: Iterator<Item = DataToken>,
{
    pub fn new<I>(len: Length, inner: I) -> Self
    where
        I: IntoTokens<Iter = T>,
    {
        ItemTokens::Start {
            len,
            inner: Some(inner.into_tokens()),
        }
    }
}

impl<T> Iterator for ItemTokens<T>
where
    T: Iterator<Item = DataToken>,
{
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            ItemTokens::Start { len, inner } => {
                let len = *len;
                let tokens = inner.take()?;
                *self = ItemTokens::Inner { tokens };
                Some(DataToken::ItemStart { len })
            }
            ItemTokens::Inner { tokens } => match tokens.next() {
                Some(token) => Some(token),
                None => {
                    *self = ItemTokens::Done;
                    Some(DataToken::ItemEnd)
                }
            },
            ItemTokens::Done => None,
        }
    }
}

/// A token iterator type for a pixel data fragment,
/// which is expressed as a single item with binary data.
#[derive(Debug)]
pub enum ItemValueTokens<P> {
    /// the item start comes next
    Start(P),
    /// the item value comes next
    Value(P),
    /// the item delimiter comes next
    End,
    /// no more tokens
    Done,
}

impl<P> ItemValueTokens<P> {
    #[inline]
    pub fn new(value: P) -> Self {
        ItemValueTokens::Start(value)
    }
}

impl<P> Iterator for ItemValueTokens<P>
where
    P: AsRef<[u8]>,
{
    type Item = DataToken;

    fn next(&mut self) -> Option<Self::Item> {
        let (out, next_state) = match std::mem::replace(self, ItemValueTokens::Done) {
            ItemValueTokens::Start(value) => {
                let len = Length(value.as_ref().len() as u32);
                (
                    DataToken::ItemStart { len },
                    if len == Length(0) {
                        ItemValueTokens::End
                    } else {
                        ItemValueTokens::Value(value)
                    },
                )
            }
            ItemValueTokens::Value(value) => (
                DataToken::ItemValue(value.as_ref().to_owned()),
                ItemValueTokens::End,
            ),
            ItemValueTokens::End => (DataToken::ItemEnd, ItemValueTokens::Done),
            ItemValueTokens::Done => return None,
        };
        *self = next_state;
        Some(out)
    }
}
