//! Dump forest to document

use super::{
    Document, DocumentCodec, Element, HexCodec, FILENAME_ATTR, FILE_TAG, RECORD_TAG, ROOT_TAG,
};
use crate::tree::node::DumpNode;

impl<H: HexCodec> DocumentCodec<H> {
    /// Build a `calypsoDump` document holding one `file` element per root.
    pub fn to_document(&self, forest: &[DumpNode]) -> Document {
        let mut root = Element::new(ROOT_TAG);
        for node in forest {
            root.push_child(self.encode_node(node));
        }
        tracing::debug!(files = forest.len(), "Encoded dump document");
        Document::new(root)
    }

    /// Encode one node and its subtree.
    ///
    /// A node with children is written as a container only: any records it
    /// also holds are not written.
    pub fn encode_node(&self, node: &DumpNode) -> Element {
        let mut element = Element::new(FILE_TAG);
        element.set_attribute(FILENAME_ATTR, node.name.as_str());

        if node.children.is_empty() {
            for record in &node.records {
                let mut record_element = Element::new(RECORD_TAG);
                record_element.text = self.hex.bytes_to_hex(record);
                element.push_child(record_element);
            }
        } else {
            for child in &node.children {
                element.push_child(self.encode_node(child));
            }
        }
        element
    }
}
