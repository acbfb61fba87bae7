//! Raw Dump
//!
//! Ties the snapshot builder, the document codec and a document store
//! together. A `RawDump` is either captured from a live card or loaded from a
//! stored document; in both cases it owns a fresh, detached forest.

use crate::card::CardEnvironment;
use crate::codec::{Document, DocumentCodec, HexCodec};
use crate::error::DumpError;
use crate::store::DocumentStore;
use crate::tree::node::DumpNode;
use crate::tree::SnapshotBuilder;
use crate::types::DumpForest;
use serde::Serialize;

/// Indentation step of the debug listing
const DEBUG_INDENT: usize = 4;

/// Summary counts over a dump
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DumpStats {
    pub files: usize,
    pub leaf_files: usize,
    pub records: usize,
    pub bytes: usize,
    pub depth: usize,
    /// Container files whose own records are not written to documents
    pub shadowed_files: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDump {
    files: DumpForest,
}

impl RawDump {
    pub fn new(files: DumpForest) -> Self {
        Self { files }
    }

    /// Snapshot every root file of a live card.
    pub fn capture<E: CardEnvironment>(
        env: &E,
        builder: &SnapshotBuilder,
    ) -> Result<Self, DumpError> {
        Ok(Self::new(builder.capture(env)?))
    }

    /// Load and decode a stored dump document.
    pub fn load<S: DocumentStore, H: HexCodec>(
        store: &S,
        locator: &str,
        codec: &DocumentCodec<H>,
    ) -> Result<Self, DumpError> {
        let document = store.load_document(locator)?;
        Ok(Self::new(codec.from_document(&document)?))
    }

    /// Encode this dump and hand it to the store.
    pub fn write<S: DocumentStore, H: HexCodec>(
        &self,
        store: &S,
        locator: &str,
        codec: &DocumentCodec<H>,
    ) -> Result<(), DumpError> {
        store.write_document(&self.to_document(codec), locator)
    }

    pub fn to_document<H: HexCodec>(&self, codec: &DocumentCodec<H>) -> Document {
        codec.to_document(&self.files)
    }

    pub fn files(&self) -> &[DumpNode] {
        &self.files
    }

    pub fn into_files(self) -> DumpForest {
        self.files
    }

    pub fn stats(&self) -> DumpStats {
        let mut stats = DumpStats {
            depth: self.files.iter().map(DumpNode::depth).max().unwrap_or(0),
            ..Default::default()
        };
        for file in &self.files {
            collect_stats(&mut stats, file);
        }
        stats
    }

    /// Indented listing of every file and record.
    ///
    /// ```text
    /// File MF :
    ///     File EF1 :
    ///         Record : 0102
    /// ```
    pub fn render_debug<H: HexCodec>(&self, codec: &DocumentCodec<H>) -> String {
        let mut out = String::new();
        for file in &self.files {
            render_file(&mut out, codec.hex(), file, 0);
        }
        out
    }

    /// Print the debug listing to stdout.
    pub fn debug_print<H: HexCodec>(&self, codec: &DocumentCodec<H>) {
        print!("{}", self.render_debug(codec));
    }
}

fn collect_stats(stats: &mut DumpStats, file: &DumpNode) {
    stats.files += 1;
    if file.is_leaf() {
        stats.leaf_files += 1;
        stats.records += file.records.len();
        stats.bytes += file.records.iter().map(Vec::len).sum::<usize>();
    } else if !file.records.is_empty() {
        stats.shadowed_files += 1;
    }
    for child in &file.children {
        collect_stats(stats, child);
    }
}

fn render_file<H: HexCodec>(out: &mut String, hex: &H, file: &DumpNode, level: usize) {
    out.push_str(&format!("{:level$}File {} :\n", "", file.name, level = level));
    let inner = level + DEBUG_INDENT;
    for record in &file.records {
        out.push_str(&format!(
            "{:inner$}Record : {}\n",
            "",
            hex.bytes_to_hex(record),
            inner = inner
        ));
    }
    for child in &file.children {
        render_file(out, hex, child, inner);
    }
}
