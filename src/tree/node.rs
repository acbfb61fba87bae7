//! Dump node representation

use crate::types::Record;
use serde::{Deserialize, Serialize};

/// One card file captured at snapshot time.
///
/// An EF carries `records` and no children; an MF or DF carries `children`
/// and no records. The struct does not forbid both being populated, but the
/// encoder writes only the children of such a node, so its records do not
/// survive a document round trip.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DumpNode {
    pub name: String,
    #[serde(with = "hex_records", default)]
    pub records: Vec<Record>,
    #[serde(default)]
    pub children: Vec<DumpNode>,
}

impl DumpNode {
    /// Elementary file holding data records
    pub fn leaf(name: impl Into<String>, records: Vec<Record>) -> Self {
        Self {
            name: name.into(),
            records,
            children: Vec::new(),
        }
    }

    /// Dedicated file holding child files
    pub fn dedicated(name: impl Into<String>, children: Vec<DumpNode>) -> Self {
        Self {
            name: name.into(),
            records: Vec::new(),
            children,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of nodes in this subtree, including this one
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(DumpNode::node_count).sum::<usize>()
    }

    /// Depth of this subtree; a lone node has depth 1
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(DumpNode::depth).max().unwrap_or(0)
    }

    /// Records that survive encoding, summed over the subtree
    pub fn record_count(&self) -> usize {
        if self.is_leaf() {
            self.records.len()
        } else {
            self.children.iter().map(DumpNode::record_count).sum()
        }
    }

    /// Record bytes that survive encoding, summed over the subtree
    pub fn byte_count(&self) -> usize {
        if self.is_leaf() {
            self.records.iter().map(Vec::len).sum()
        } else {
            self.children.iter().map(DumpNode::byte_count).sum()
        }
    }

    /// Whether any node in this subtree holds records that encoding would drop
    pub fn has_shadowed_records(&self) -> bool {
        (!self.children.is_empty() && !self.records.is_empty())
            || self.children.iter().any(DumpNode::has_shadowed_records)
    }
}

/// Serialize records as lowercase hex strings instead of byte arrays
mod hex_records {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(records: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(records.iter().map(hex::encode))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let encoded: Vec<String> = Vec::deserialize(deserializer)?;
        encoded
            .iter()
            .map(|s| hex::decode(s).map_err(serde::de::Error::custom))
            .collect()
    }
}
