//! Core types shared across the dump, codec and card layers.

use crate::tree::node::DumpNode;

/// Record: one fixed unit of card data, stored as opaque bytes
pub type Record = Vec<u8>;

/// DumpForest: the ordered root files of a dump
pub type DumpForest = Vec<DumpNode>;
