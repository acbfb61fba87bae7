//! In-memory document store

use super::DocumentStore;
use crate::codec::Document;
use crate::error::{DumpError, StorageError};
use parking_lot::RwLock;
use std::collections::HashMap;

/// Keeps documents in a map; safe to share between threads
#[derive(Debug, Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, Document>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, locator: &str) -> bool {
        self.documents.read().contains_key(locator)
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

impl DocumentStore for MemoryDocumentStore {
    fn load_document(&self, locator: &str) -> Result<Document, DumpError> {
        self.documents
            .read()
            .get(locator)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(locator.to_string()).into())
    }

    fn write_document(&self, document: &Document, locator: &str) -> Result<(), DumpError> {
        self.documents
            .write()
            .insert(locator.to_string(), document.clone());
        Ok(())
    }
}
