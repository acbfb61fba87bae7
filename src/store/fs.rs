//! Filesystem document store

use super::DocumentStore;
use crate::codec::{Document, XML_DECLARATION};
use crate::error::{DumpError, StorageError};
use crate::tree::DEFAULT_MAX_DEPTH;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Stores documents as XML files; locators are paths relative to `base`
#[derive(Debug, Clone)]
pub struct FsDocumentStore {
    base: Option<PathBuf>,
    indent: Option<usize>,
    max_depth: usize,
}

impl Default for FsDocumentStore {
    fn default() -> Self {
        Self {
            base: None,
            indent: None,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl FsDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve relative locators against `base`
    pub fn with_base(mut self, base: impl Into<PathBuf>) -> Self {
        self.base = Some(base.into());
        self
    }

    /// Pretty-print written documents with `width` spaces per level
    pub fn with_indent(mut self, indent: Option<usize>) -> Self {
        self.indent = indent;
        self
    }

    /// Reject loaded documents whose files nest deeper than `max_depth`
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn path_for(&self, locator: &str) -> PathBuf {
        match &self.base {
            Some(base) => base.join(locator),
            None => PathBuf::from(locator),
        }
    }
}

impl DocumentStore for FsDocumentStore {
    fn load_document(&self, locator: &str) -> Result<Document, DumpError> {
        let path = self.path_for(locator);
        let text = std::fs::read_to_string(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => StorageError::NotFound(path.display().to_string()).into(),
            ErrorKind::InvalidData => DumpError::MalformedDocument(format!(
                "{} is not valid UTF-8 text",
                path.display()
            )),
            _ => StorageError::Io {
                locator: path.display().to_string(),
                source: e,
            }
            .into(),
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "Loaded dump document");
        Document::parse_with_limit(&text, self.max_depth)
    }

    fn write_document(&self, document: &Document, locator: &str) -> Result<(), DumpError> {
        let path = self.path_for(locator);
        let body = document.to_xml_string(self.indent)?;
        let io_error = |source: std::io::Error| StorageError::Io {
            locator: path.display().to_string(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_error)?;
        }
        std::fs::write(&path, format!("{}\n{}\n", XML_DECLARATION, body)).map_err(io_error)?;
        tracing::debug!(path = %path.display(), "Wrote dump document");
        Ok(())
    }
}
