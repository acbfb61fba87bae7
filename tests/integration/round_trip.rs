use calypso_dump::card::{MemoryCardEnvironment, MemoryCardFile};
use calypso_dump::codec::{Document, HexCodec, LowerHex};
use calypso_dump::tree::SnapshotBuilder;
use calypso_dump::{DocumentCodec, DumpNode};
use proptest::prelude::*;

fn arb_record() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..32)
}

fn arb_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 _<>&\"'-]{0,12}"
}

/// Trees where only leaves carry records
fn arb_tree() -> impl Strategy<Value = DumpNode> {
    let leaf = (arb_name(), prop::collection::vec(arb_record(), 0..5))
        .prop_map(|(name, records)| DumpNode::leaf(name, records));
    leaf.prop_recursive(4, 48, 5, |inner| {
        (arb_name(), prop::collection::vec(inner, 1..5))
            .prop_map(|(name, children)| DumpNode::dedicated(name, children))
    })
}

fn through_text(codec: &DocumentCodec, forest: &[DumpNode], indent: Option<usize>) -> Vec<DumpNode> {
    let xml = codec.to_document(forest).to_xml_string(indent).unwrap();
    codec.from_document(&Document::parse(&xml).unwrap()).unwrap()
}

/// Give every container the records it would carry in a mixed tree
fn add_container_records(node: &mut DumpNode, record: &[u8]) {
    if !node.children.is_empty() {
        node.records.push(record.to_vec());
        for child in &mut node.children {
            add_container_records(child, record);
        }
    }
}

fn strip_container_records(node: &mut DumpNode) {
    if !node.children.is_empty() {
        node.records.clear();
        for child in &mut node.children {
            strip_container_records(child);
        }
    }
}

proptest! {
    #[test]
    fn pure_leaf_trees_round_trip(forest in prop::collection::vec(arb_tree(), 0..4)) {
        let codec = DocumentCodec::default();
        prop_assert_eq!(&through_text(&codec, &forest, None), &forest);
        prop_assert_eq!(&through_text(&codec, &forest, Some(2)), &forest);
    }

    #[test]
    fn encoded_shape_matches_tree(tree in arb_tree()) {
        fn count(e: &calypso_dump::codec::Element) -> usize {
            1 + e.children_named("file").map(count).sum::<usize>()
        }
        let element = DocumentCodec::default().encode_node(&tree);
        prop_assert_eq!(count(&element), tree.node_count());
    }

    #[test]
    fn container_records_are_always_dropped(
        tree in arb_tree(),
        record in prop::collection::vec(any::<u8>(), 1..8),
    ) {
        let mut mixed = tree.clone();
        add_container_records(&mut mixed, &record);

        let decoded = through_text(&DocumentCodec::default(), &[mixed.clone()], None);
        let mut expected = mixed;
        strip_container_records(&mut expected);
        prop_assert_eq!(decoded, vec![expected]);
    }

    #[test]
    fn hex_round_trip(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
        let text = LowerHex.bytes_to_hex(&bytes);
        prop_assert_eq!(text.len(), bytes.len() * 2);
        prop_assert!(text.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
        prop_assert_eq!(LowerHex.hex_to_bytes(&text).unwrap(), bytes);
    }

    #[test]
    fn snapshot_preserves_order_and_duplicates(
        entries in prop::collection::vec((prop::sample::select(vec!["EF1", "EF2"]), arb_record()), 0..10),
    ) {
        let files: Vec<MemoryCardFile> = entries
            .iter()
            .map(|(name, record)| MemoryCardFile::ef(*name, vec![record.clone(), record.clone()]))
            .collect();
        let env = MemoryCardEnvironment::new(vec![MemoryCardFile::mf("MF", files)]);
        let forest = SnapshotBuilder::default().capture(&env).unwrap();

        let names: Vec<&str> = forest[0].children.iter().map(|c| c.name.as_str()).collect();
        let expected: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
        prop_assert_eq!(names, expected);

        let decoded = through_text(&DocumentCodec::default(), &forest, None);
        prop_assert_eq!(decoded, forest);
    }
}

#[test]
fn lossy_case_at_depth() {
    let mut inner = DumpNode::dedicated("DF2", vec![DumpNode::leaf("EF", vec![vec![0x01]])]);
    inner.records.push(vec![0xFF]);
    let tree = DumpNode::dedicated("MF", vec![DumpNode::dedicated("DF1", vec![inner])]);

    let decoded = through_text(&DocumentCodec::default(), &[tree], None);
    let df2 = &decoded[0].children[0].children[0];
    assert_eq!(df2.name, "DF2");
    assert!(df2.records.is_empty());
    assert_eq!(df2.children[0].records, vec![vec![0x01]]);
}
