use calypso_dump::card::{CardEnvironment, FsCardEnvironment};
use calypso_dump::store::FsDocumentStore;
use calypso_dump::tree::SnapshotBuilder;
use calypso_dump::{DocumentCodec, DumpNode, RawDump};
use std::fs;
use tempfile::TempDir;

/// 3F00 (MF) holding an EF and a DF with one EF
fn card_dir() -> TempDir {
    let temp = TempDir::new().unwrap();
    let mf = temp.path().join("3F00");
    fs::create_dir_all(mf.join("2000")).unwrap();
    fs::write(mf.join("0002"), [0x11u8; 29]).unwrap();
    fs::write(mf.join("2000").join("2001"), [0x22u8; 30]).unwrap();
    fs::write(mf.join("2000").join("2010"), b"").unwrap();
    temp
}

#[test]
fn directory_snapshot_mirrors_tree() {
    let temp = card_dir();
    let env = FsCardEnvironment::new(temp.path(), 29).unwrap();
    let forest = SnapshotBuilder::default().capture(&env).unwrap();

    assert_eq!(
        forest,
        vec![DumpNode::dedicated(
            "3F00",
            vec![
                DumpNode::leaf("0002", vec![vec![0x11; 29]]),
                DumpNode::dedicated(
                    "2000",
                    vec![
                        DumpNode::leaf("2001", vec![vec![0x22; 29], vec![0x22]]),
                        DumpNode::leaf("2010", vec![]),
                    ]
                ),
            ]
        )]
    );
}

#[test]
fn directory_snapshot_survives_file_store() {
    let temp = card_dir();
    let out = TempDir::new().unwrap();
    let env = FsCardEnvironment::new(temp.path(), 8).unwrap();
    let codec = DocumentCodec::default();
    let store = FsDocumentStore::new()
        .with_base(out.path())
        .with_indent(Some(2));

    let dump = RawDump::capture(&env, &SnapshotBuilder::default()).unwrap();
    dump.write(&store, "card.xml", &codec).unwrap();

    let text = fs::read_to_string(out.path().join("card.xml")).unwrap();
    assert!(text.contains("<file filename=\"3F00\">"));
    assert!(text.contains("<record>1111111111111111</record>"));

    let loaded = RawDump::load(&store, "card.xml", &codec).unwrap();
    assert_eq!(loaded, dump);
}

#[test]
fn empty_source_directory_gives_empty_dump() {
    let temp = TempDir::new().unwrap();
    let env = FsCardEnvironment::new(temp.path(), 29).unwrap();
    assert!(env.root_files().unwrap().is_empty());
    let dump = RawDump::capture(&env, &SnapshotBuilder::default()).unwrap();
    assert!(dump.files().is_empty());
}

#[test]
fn snapshot_depth_limit_applies_to_directories() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join("a/b/c/d")).unwrap();
    let env = FsCardEnvironment::new(temp.path(), 29).unwrap();
    assert!(SnapshotBuilder::new(4).capture(&env).is_ok());
    assert!(SnapshotBuilder::new(3).capture(&env).is_err());
}
