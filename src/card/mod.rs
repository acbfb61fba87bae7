//! Live Card File Tree
//!
//! The snapshot builder reads a live card through these traits. A card exposes
//! its root files; every file reports its kind, a description, and either its
//! raw records (EF) or its child files (MF, DF).

pub mod fs;
pub mod memory;

use crate::error::DumpError;
use crate::types::Record;
use serde::{Deserialize, Serialize};

pub use fs::{FsCardEnvironment, FsCardFile};
pub use memory::{MemoryCardEnvironment, MemoryCardFile};

/// Calypso file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardFileType {
    /// Master file, the card root
    Mf,
    /// Dedicated file, an application directory
    Df,
    /// Elementary file, holds records
    Ef,
}

impl CardFileType {
    pub fn is_elementary(&self) -> bool {
        matches!(self, CardFileType::Ef)
    }
}

/// A file in a live card tree
pub trait CardFile: Sized {
    fn file_type(&self) -> CardFileType;

    /// Human-readable label, used as the dump file name
    fn description(&self) -> String;

    /// Raw records in card order; only meaningful for EF files
    fn raw_records(&self) -> Result<Vec<Record>, DumpError>;

    /// Child files in card order; only meaningful for MF and DF files
    fn children(&self) -> Result<Vec<Self>, DumpError>;
}

/// Root access to a live card tree
pub trait CardEnvironment {
    type File: CardFile;

    fn root_files(&self) -> Result<Vec<Self::File>, DumpError>;
}
