//! Directory-backed card tree
//!
//! Maps a directory on disk onto the card file model: top-level directories
//! are MF files, nested directories are DF files, and regular files are EF
//! files whose content is cut into fixed-size records.

use super::{CardEnvironment, CardFile, CardFileType};
use crate::error::DumpError;
use crate::types::Record;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Calypso record length in bytes
pub const DEFAULT_RECORD_SIZE: usize = 29;

#[derive(Debug, Clone)]
pub struct FsCardFile {
    path: PathBuf,
    file_type: CardFileType,
    record_size: usize,
}

impl FsCardFile {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CardFile for FsCardFile {
    fn file_type(&self) -> CardFileType {
        self.file_type
    }

    fn description(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    fn raw_records(&self) -> Result<Vec<Record>, DumpError> {
        let content = std::fs::read(&self.path).map_err(|e| {
            DumpError::Source(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        Ok(split_records(&content, self.record_size))
    }

    fn children(&self) -> Result<Vec<Self>, DumpError> {
        list_dir(&self.path, CardFileType::Df, self.record_size)
    }
}

/// Card environment rooted at a directory
#[derive(Debug, Clone)]
pub struct FsCardEnvironment {
    root: PathBuf,
    record_size: usize,
}

impl FsCardEnvironment {
    pub fn new(root: impl Into<PathBuf>, record_size: usize) -> Result<Self, DumpError> {
        let root = root.into();
        if record_size == 0 {
            return Err(DumpError::Source("Record size must be non-zero".to_string()));
        }
        if !root.is_dir() {
            return Err(DumpError::Source(format!(
                "Card source is not a directory: {}",
                root.display()
            )));
        }
        Ok(Self { root, record_size })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl CardEnvironment for FsCardEnvironment {
    type File = FsCardFile;

    fn root_files(&self) -> Result<Vec<FsCardFile>, DumpError> {
        list_dir(&self.root, CardFileType::Mf, self.record_size)
    }
}

/// List the direct entries of `dir` in file-name order.
fn list_dir(
    dir: &Path,
    dir_type: CardFileType,
    record_size: usize,
) -> Result<Vec<FsCardFile>, DumpError> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.map_err(|e| {
            DumpError::Source(format!("Failed to list {}: {}", dir.display(), e))
        })?;
        let file_type = if entry.file_type().is_dir() {
            dir_type
        } else if entry.file_type().is_file() {
            CardFileType::Ef
        } else {
            tracing::warn!("Skipping non-regular entry {}", entry.path().display());
            continue;
        };
        files.push(FsCardFile {
            path: entry.into_path(),
            file_type,
            record_size,
        });
    }
    Ok(files)
}

fn split_records(content: &[u8], record_size: usize) -> Vec<Record> {
    content
        .chunks(record_size)
        .map(<[u8]>::to_vec)
        .collect()
}
