//! Document to dump forest

use super::{
    Document, DocumentCodec, Element, HexCodec, FILENAME_ATTR, FILE_TAG, RECORD_TAG, ROOT_TAG,
};
use crate::error::DumpError;
use crate::tree::node::DumpNode;
use crate::types::DumpForest;

impl<H: HexCodec> DocumentCodec<H> {
    /// Rebuild the dump forest from a `calypsoDump` document.
    ///
    /// Decoding stops at the first offending element; no partial forest is
    /// returned.
    pub fn from_document(&self, document: &Document) -> Result<DumpForest, DumpError> {
        let root = &document.root;
        if root.name != ROOT_TAG {
            return Err(DumpError::MalformedDocument(format!(
                "Expected root element <{}>, found <{}>",
                ROOT_TAG, root.name
            )));
        }
        if !root.text.is_empty() {
            return Err(unexpected_text(ROOT_TAG));
        }

        let forest = root
            .children
            .iter()
            .map(|element| {
                if element.name != FILE_TAG {
                    return Err(unexpected_tag(&element.name, ROOT_TAG));
                }
                self.decode_node(element)
            })
            .collect::<Result<DumpForest, DumpError>>()?;
        tracing::debug!(files = forest.len(), "Decoded dump document");
        Ok(forest)
    }

    /// Decode one `file` element and its subtree.
    ///
    /// `record` children become records and `file` children become child
    /// nodes, each in document order. An element with no children decodes
    /// to an empty leaf.
    pub fn decode_node(&self, element: &Element) -> Result<DumpNode, DumpError> {
        self.decode_at_depth(element, 1)
    }

    fn decode_at_depth(&self, element: &Element, depth: usize) -> Result<DumpNode, DumpError> {
        if depth > self.max_depth() {
            return Err(DumpError::DepthLimitExceeded(self.max_depth()));
        }

        let name = element.attribute(FILENAME_ATTR).ok_or_else(|| {
            DumpError::MalformedDocument(format!(
                "<{}> element without a {} attribute",
                FILE_TAG, FILENAME_ATTR
            ))
        })?;
        let mut node = DumpNode {
            name: name.to_string(),
            ..Default::default()
        };

        if let Some(other) = element
            .children
            .iter()
            .find(|c| c.name != RECORD_TAG && c.name != FILE_TAG)
        {
            return Err(unexpected_tag(&other.name, FILE_TAG));
        }
        if !element.text.is_empty() {
            return Err(unexpected_text(FILE_TAG));
        }

        for record in element.children_named(RECORD_TAG) {
            if let Some(nested) = record.children.first() {
                return Err(unexpected_tag(&nested.name, RECORD_TAG));
            }
            node.records.push(self.hex().hex_to_bytes(record.text.trim())?);
        }
        for child in element.children_named(FILE_TAG) {
            node.children.push(self.decode_at_depth(child, depth + 1)?);
        }
        Ok(node)
    }
}

fn unexpected_tag(tag: &str, parent: &str) -> DumpError {
    DumpError::MalformedDocument(format!("Unexpected element <{}> inside <{}>", tag, parent))
}

fn unexpected_text(parent: &str) -> DumpError {
    DumpError::MalformedDocument(format!("Unexpected text content inside <{}>", parent))
}
