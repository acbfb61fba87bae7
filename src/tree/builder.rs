//! Snapshot builder
//!
//! Walks a live card tree and produces a detached dump tree of the same shape.
//! One dump node is produced per live file, in card order, with no reordering
//! or deduplication.

use crate::card::{CardEnvironment, CardFile};
use crate::error::DumpError;
use crate::tree::node::DumpNode;
use crate::types::DumpForest;

/// Default recursion limit for snapshots and decoding
pub const DEFAULT_MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, Copy)]
pub struct SnapshotBuilder {
    max_depth: usize,
}

impl Default for SnapshotBuilder {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH)
    }
}

impl SnapshotBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self { max_depth }
    }

    /// Build the dump node for one live file and everything below it.
    ///
    /// EF files copy their raw records verbatim; all other files recurse into
    /// their children.
    pub fn build_dump<F: CardFile>(&self, file: &F) -> Result<DumpNode, DumpError> {
        self.build_at_depth(file, 1)
    }

    /// Build one dump node per root file, preserving root order.
    pub fn build_dump_forest<F: CardFile>(&self, roots: &[F]) -> Result<DumpForest, DumpError> {
        roots.iter().map(|file| self.build_dump(file)).collect()
    }

    /// Snapshot every root file of a card environment.
    pub fn capture<E: CardEnvironment>(&self, env: &E) -> Result<DumpForest, DumpError> {
        let roots = env.root_files()?;
        tracing::debug!(roots = roots.len(), "Starting card snapshot");
        let forest = self.build_dump_forest(&roots)?;
        tracing::debug!(
            nodes = forest.iter().map(DumpNode::node_count).sum::<usize>(),
            "Card snapshot complete"
        );
        Ok(forest)
    }

    fn build_at_depth<F: CardFile>(&self, file: &F, depth: usize) -> Result<DumpNode, DumpError> {
        if depth > self.max_depth {
            return Err(DumpError::DepthLimitExceeded(self.max_depth));
        }

        let name = file.description();
        if file.file_type().is_elementary() {
            return Ok(DumpNode::leaf(name, file.raw_records()?));
        }

        let children = file
            .children()?
            .iter()
            .map(|child| self.build_at_depth(child, depth + 1))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DumpNode::dedicated(name, children))
    }
}
