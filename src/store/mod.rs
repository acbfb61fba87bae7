//! Document Store
//!
//! Loads and writes named dump documents. A locator is an opaque name; the
//! filesystem store treats it as a path, the memory store as a map key.

pub mod fs;
pub mod memory;

use crate::codec::Document;
use crate::error::DumpError;

pub use fs::FsDocumentStore;
pub use memory::MemoryDocumentStore;

/// Document store interface
pub trait DocumentStore {
    fn load_document(&self, locator: &str) -> Result<Document, DumpError>;
    fn write_document(&self, document: &Document, locator: &str) -> Result<(), DumpError>;
}
