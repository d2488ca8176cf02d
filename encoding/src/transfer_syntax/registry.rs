//! The transfer syntax registry,
//! mapping DICOM transfer syntax UIDs
//! to the respective transfer syntax specifiers.
//!
//! The constants exported here refer to the library's built-in support
//! for DICOM transfer syntaxes.
//!
//! - **Fully implemented** means that the registry provides built-in support
//!   for reading and writing data sets in this transfer syntax.
//! - **Stub descriptors** serve to provide information about the transfer
//!   syntax, and may provide partial support. For the encapsulated pixel data
//!   stubs below, it is possible to read and write data sets, but the pixel
//!   data is only available in its encapsulated form.

use std::collections::HashMap;
use std::fmt;

use byteordered::Endianness;
use lazy_static::lazy_static;

use super::{AdapterFreeTransferSyntax as Ts, Codec, TransferSyntax, TransferSyntaxIndex};

// -- the three base transfer syntaxes, fully supported --

/// **Fully implemented:** Implicit VR Little Endian: Default Transfer Syntax for DICOM
pub const IMPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2",
    "Implicit VR Little Endian",
    Endianness::Little,
    false,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Little Endian
pub const EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.1",
    "Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::None,
);

/// **Fully implemented:** Explicit VR Big Endian
pub const EXPLICIT_VR_BIG_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.2",
    "Explicit VR Big Endian",
    Endianness::Big,
    true,
    Codec::None,
);

// -- stub transfer syntaxes, known but not supported --

/// **Stub descriptor:** Deflated Explicit VR Little Endian
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: Ts = Ts::new(
    "1.2.840.10008.1.2.1.99",
    "Deflated Explicit VR Little Endian",
    Endianness::Little,
    true,
    Codec::Unsupported,
);

// -- stub transfer syntaxes, partially supported due to pixel data encapsulation --

/// **Stub descriptor:** JPEG Baseline (Process 1): Default Transfer Syntax for Lossy JPEG 8 Bit Image Compression
pub const JPEG_BASELINE: Ts = create_ts_stub("1.2.840.10008.1.2.4.50", "JPEG Baseline (Process 1)");

/// **Stub descriptor:** JPEG Extended (Process 2 & 4): Default Transfer Syntax for Lossy JPEG 12 Bit Image Compression (Process 4 only)
pub const JPEG_EXTENDED: Ts =
    create_ts_stub("1.2.840.10008.1.2.4.51", "JPEG Extended (Process 2 & 4)");

/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical (Process 14)
pub const JPEG_LOSSLESS_NON_HIERARCHICAL: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.57",
    "JPEG Lossless, Non-Hierarchical (Process 14)",
);

/// **Stub descriptor:** JPEG Lossless, Non-Hierarchical, First-Order Prediction
/// (Process 14 [Selection Value 1]):
/// Default Transfer Syntax for Lossless JPEG Image Compression
pub const JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.70",
    "JPEG Lossless, Non-Hierarchical, First-Order Prediction",
);

/// **Stub descriptor:** JPEG-LS Lossless Image Compression
pub const JPEG_LS_LOSSLESS_IMAGE_COMPRESSION: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.80",
    "JPEG-LS Lossless Image Compression",
);

/// **Stub descriptor:** JPEG-LS Lossy (Near-Lossless) Image Compression
pub const JPEG_LS_LOSSY_IMAGE_COMPRESSION: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.81",
    "JPEG-LS Lossy (Near-Lossless) Image Compression",
);

/// **Stub descriptor:** JPEG 2000 Image Compression (Lossless Only)
pub const JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY: Ts = create_ts_stub(
    "1.2.840.10008.1.2.4.90",
    "JPEG 2000 Image Compression (Lossless Only)",
);

/// **Stub descriptor:** JPEG 2000 Image Compression
pub const JPEG_2000_IMAGE_COMPRESSION: Ts =
    create_ts_stub("1.2.840.10008.1.2.4.91", "JPEG 2000 Image Compression");

/// **Stub descriptor:** RLE Lossless
pub const RLE_LOSSLESS: Ts = create_ts_stub("1.2.840.10008.1.2.5", "RLE Lossless");

/// Create a TS with an unsupported pixel encapsulation.
const fn create_ts_stub(uid: &'static str, name: &'static str) -> Ts {
    TransferSyntax::new(
        uid,
        name,
        Endianness::Little,
        true,
        Codec::EncapsulatedPixelData,
    )
}

/// Data type for a registry of DICOM transfer syntaxes.
pub struct TransferSyntaxRegistry {
    m: HashMap<&'static str, TransferSyntax>,
}

impl fmt::Debug for TransferSyntaxRegistry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: HashMap<&str, &str> =
            self.m.iter().map(|(uid, ts)| (*uid, ts.name())).collect();
        f.debug_struct("TransferSyntaxRegistry")
            .field("m", &entries)
            .finish()
    }
}

impl TransferSyntaxRegistry {
    /// Obtain a DICOM transfer syntax by its respective UID.
    ///
    /// Trailing null characters are ignored,
    /// since they may appear in UIDs taken directly from a data set.
    pub fn get<U: AsRef<str>>(&self, uid: U) -> Option<&TransferSyntax> {
        let ts_uid = {
            let uid = uid.as_ref();
            if uid.ends_with('\0') {
                &uid[..uid.len() - 1]
            } else {
                uid
            }
        };
        self.m.get(ts_uid)
    }
}

impl TransferSyntaxIndex for TransferSyntaxRegistry {
    fn get(&self, uid: &str) -> Option<&TransferSyntax> {
        Self::get(self, uid)
    }
}

lazy_static! {
    static ref REGISTRY: TransferSyntaxRegistry = TransferSyntaxRegistry {
        m: initialize_codecs()
    };
}

/// Retrieve the default transfer syntax.
pub fn default() -> Ts {
    IMPLICIT_VR_LITTLE_ENDIAN
}

/// Retrieve the global transfer syntax registry.
pub fn get_registry() -> &'static TransferSyntaxRegistry {
    &REGISTRY
}

fn initialize_codecs() -> HashMap<&'static str, TransferSyntax> {
    let mut m = HashMap::<&'static str, TransferSyntax>::new();

    // the three base transfer syntaxes, fully supported
    let ts = IMPLICIT_VR_LITTLE_ENDIAN;
    m.insert(ts.uid(), ts.erased());
    let ts = EXPLICIT_VR_LITTLE_ENDIAN;
    m.insert(ts.uid(), ts.erased());
    let ts = EXPLICIT_VR_BIG_ENDIAN;
    m.insert(ts.uid(), ts.erased());

    // stub transfer syntaxes, only partially supported due
    // to pixel data encapsulation
    let ts = JPEG_BASELINE;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_EXTENDED;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_LOSSLESS_NON_HIERARCHICAL;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_LOSSLESS_NON_HIERARCHICAL_FIRST_ORDER_PREDICTION;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_LS_LOSSLESS_IMAGE_COMPRESSION;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_LS_LOSSY_IMAGE_COMPRESSION;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_2000_IMAGE_COMPRESSION_LOSSLESS_ONLY;
    m.insert(ts.uid(), ts.erased());
    let ts = JPEG_2000_IMAGE_COMPRESSION;
    m.insert(ts.uid(), ts.erased());
    let ts = RLE_LOSSLESS;
    m.insert(ts.uid(), ts.erased());

    // stub transfer syntaxes, known but not supported
    let ts = DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN;
    m.insert(ts.uid(), ts.erased());

    m
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_syntaxes_are_fully_supported() {
        let registry = get_registry();
        for uid in &[
            "1.2.840.10008.1.2",
            "1.2.840.10008.1.2.1",
            "1.2.840.10008.1.2.2",
        ] {
            let ts = registry
                .get(uid)
                .unwrap_or_else(|| panic!("missing transfer syntax {}", uid));
            assert_eq!(ts.uid(), *uid);
            assert!(ts.fully_supported());
            assert!(ts.decoder().is_some());
            assert!(ts.encoder().is_some());
        }

        let ts = registry.get("1.2.840.10008.1.2.2").unwrap();
        assert_eq!(ts.endianness(), Endianness::Big);
    }

    #[test]
    fn lookup_ignores_trailing_nul() {
        let registry = get_registry();
        let ts = registry.get("1.2.840.10008.1.2.1\0").unwrap();
        assert_eq!(ts.uid(), "1.2.840.10008.1.2.1");
        assert_eq!(ts.name(), "Explicit VR Little Endian");
    }

    #[test]
    fn encapsulated_stubs_still_decode_data_sets() {
        let registry = get_registry();
        let ts = registry.get("1.2.840.10008.1.2.4.50").unwrap();
        assert!(!ts.fully_supported());
        assert!(ts.unsupported_pixel_encapsulation());
        // data set decoding goes through Explicit VR Little Endian
        assert!(ts.decoder().is_some());
    }

    #[test]
    fn deflated_is_recognized_but_unsupported() {
        let registry = get_registry();
        let ts = registry.get("1.2.840.10008.1.2.1.99").unwrap();
        assert!(ts.unsupported());
        assert!(!ts.fully_supported());
    }

    #[test]
    fn unknown_uid_is_not_found() {
        let registry = get_registry();
        assert!(registry.get("1.2.840.10008.1.1").is_none());
    }
}
