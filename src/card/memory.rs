//! In-memory card tree

use super::{CardEnvironment, CardFile, CardFileType};
use crate::error::DumpError;
use crate::types::Record;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryCardFile {
    pub file_type: CardFileType,
    pub description: String,
    pub records: Vec<Record>,
    pub children: Vec<MemoryCardFile>,
}

impl MemoryCardFile {
    pub fn ef(description: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            file_type: CardFileType::Ef,
            description: description.into(),
            records,
            children: Vec::new(),
        }
    }

    pub fn df(description: impl Into<String>, children: Vec<MemoryCardFile>) -> Self {
        Self {
            file_type: CardFileType::Df,
            description: description.into(),
            records: Vec::new(),
            children,
        }
    }

    pub fn mf(description: impl Into<String>, children: Vec<MemoryCardFile>) -> Self {
        Self {
            file_type: CardFileType::Mf,
            ..Self::df(description, children)
        }
    }
}

impl CardFile for MemoryCardFile {
    fn file_type(&self) -> CardFileType {
        self.file_type
    }

    fn description(&self) -> String {
        self.description.clone()
    }

    fn raw_records(&self) -> Result<Vec<Record>, DumpError> {
        Ok(self.records.clone())
    }

    fn children(&self) -> Result<Vec<Self>, DumpError> {
        Ok(self.children.clone())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryCardEnvironment {
    pub files: Vec<MemoryCardFile>,
}

impl MemoryCardEnvironment {
    pub fn new(files: Vec<MemoryCardFile>) -> Self {
        Self { files }
    }
}

impl CardEnvironment for MemoryCardEnvironment {
    type File = MemoryCardFile;

    fn root_files(&self) -> Result<Vec<MemoryCardFile>, DumpError> {
        Ok(self.files.clone())
    }
}
