//! Document Codec
//!
//! Converts a dump forest to a `calypsoDump` document and back:
//!
//! ```text
//! <calypsoDump>
//!   <file filename="...">
//!     <record>HEX</record>*      leaf files
//!     <file filename="...">*     dedicated files
//!   </file>*
//! </calypsoDump>
//! ```

pub mod decode;
pub mod document;
pub mod encode;
pub mod hex;

use crate::tree::DEFAULT_MAX_DEPTH;

pub use self::document::{Document, Element, XML_DECLARATION};
pub use self::hex::{HexCodec, LowerHex};

pub const ROOT_TAG: &str = "calypsoDump";
pub const FILE_TAG: &str = "file";
pub const RECORD_TAG: &str = "record";
pub const FILENAME_ATTR: &str = "filename";

/// Encoder and decoder for dump documents
#[derive(Debug, Clone)]
pub struct DocumentCodec<H: HexCodec = LowerHex> {
    hex: H,
    max_depth: usize,
}

impl Default for DocumentCodec<LowerHex> {
    fn default() -> Self {
        Self::new(LowerHex, DEFAULT_MAX_DEPTH)
    }
}

impl<H: HexCodec> DocumentCodec<H> {
    pub fn new(hex: H, max_depth: usize) -> Self {
        Self { hex, max_depth }
    }

    pub fn hex(&self) -> &H {
        &self.hex
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }
}
