//! This module provides a stub dictionary.

use super::{DataDictionary, DataDictionaryEntryRef};
use crate::header::Tag;

/// An empty attribute dictionary.
/// Attribute lookups always return `None`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StubDataDictionary;

impl DataDictionary for StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

impl DataDictionary for &StubDataDictionary {
    type Entry = DataDictionaryEntryRef<'static>;
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}

impl DataDictionary for Box<StubDataDictionary> {
    type Entry = DataDictionaryEntryRef<'static>;
    fn by_name(&self, _: &str) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }

    fn by_tag(&self, _: Tag) -> Option<&DataDictionaryEntryRef<'static>> {
        None
    }
}
