//! Supplementary dictionary records for well-known private attributes.
//!
//! Private attributes are defined by equipment vendors
//! rather than by the standard,
//! and are only meaningful when the matching private creator
//! is registered in the same group of the data set.
//! The records below assume the canonical block `0x10`,
//! where the respective creators are conventionally placed.
//!
//! This table is kept separate from the standard records in [`tags`]
//! and is merged into the run-time registry when it is built,
//! leaving the standard table untouched.
//!
//! [`tags`]: crate::tags

use medicom_core::dictionary::{DataDictionaryEntryRef, TagRange::*, VirtualVr::*};
use medicom_core::Tag;
use medicom_core::VR::*;

#[rustfmt::skip]
pub(crate) const PRIVATE_ENTRIES: &[DataDictionaryEntryRef<'static>] = &[
    // GEMS_IDEN_01
    DataDictionaryEntryRef { tag: Single(Tag(0x0009, 0x1001)), alias: "FullFidelity", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0009, 0x1002)), alias: "SuiteId", vr: Exact(SH) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0009, 0x1004)), alias: "ProductId", vr: Exact(SH) },
    // SIEMENS CSA HEADER
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1008)), alias: "CSAImageHeaderType", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1009)), alias: "CSAImageHeaderVersion", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1010)), alias: "CSAImageHeaderInfo", vr: Exact(OB) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1018)), alias: "CSASeriesHeaderType", vr: Exact(CS) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1019)), alias: "CSASeriesHeaderVersion", vr: Exact(LO) },
    DataDictionaryEntryRef { tag: Single(Tag(0x0029, 0x1020)), alias: "CSASeriesHeaderInfo", vr: Exact(OB) },
];
