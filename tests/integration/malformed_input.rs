use calypso_dump::codec::{Document, HexCodec};
use calypso_dump::store::{DocumentStore, FsDocumentStore, MemoryDocumentStore};
use calypso_dump::{DocumentCodec, DumpError, RawDump, StorageError};

fn decode(xml: &str) -> Result<Vec<calypso_dump::DumpNode>, DumpError> {
    DocumentCodec::default().from_document(&Document::parse(xml)?)
}

#[test]
fn file_without_filename_is_malformed() {
    let err = decode(r#"<calypsoDump><file filename="MF"><file/></file></calypsoDump>"#).unwrap_err();
    assert!(matches!(err, DumpError::MalformedDocument(_)), "{err}");
}

#[test]
fn odd_length_record_is_invalid_hex() {
    let err = decode(r#"<calypsoDump><file filename="EF"><record>0af</record></file></calypsoDump>"#)
        .unwrap_err();
    match err {
        DumpError::InvalidHex { text, .. } => assert_eq!(text, "0af"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn non_hex_record_is_invalid_hex() {
    let err = decode(r#"<calypsoDump><file filename="EF"><record>0ag1</record></file></calypsoDump>"#)
        .unwrap_err();
    assert!(matches!(err, DumpError::InvalidHex { .. }));
}

#[test]
fn decoding_stops_at_first_bad_record() {
    // Later records are valid; no partial forest comes back
    let result = decode(
        r#"<calypsoDump><file filename="A"><record>zz</record></file><file filename="B"><record>01</record></file></calypsoDump>"#,
    );
    assert!(result.is_err());
}

#[test]
fn syntax_errors_are_malformed() {
    for xml in ["<calypsoDump><file filename=\"A\"></calypsoDump>", "not xml at all", ""] {
        assert!(matches!(decode(xml), Err(DumpError::MalformedDocument(_))), "{xml:?}");
    }
}

/// Hex codec that refuses everything, to exercise error propagation
struct RejectingHex;

impl HexCodec for RejectingHex {
    fn bytes_to_hex(&self, bytes: &[u8]) -> String {
        bytes.iter().map(|_| "zz").collect()
    }

    fn hex_to_bytes(&self, text: &str) -> Result<Vec<u8>, DumpError> {
        Err(DumpError::InvalidHex {
            text: text.to_string(),
            reason: "rejected".to_string(),
        })
    }
}

#[test]
fn injected_hex_codec_is_used_both_ways() {
    let codec = DocumentCodec::new(RejectingHex, 8);
    let doc = codec.to_document(&[calypso_dump::DumpNode::leaf("EF", vec![vec![1, 2]])]);
    assert_eq!(doc.root.children[0].children[0].text, "zzzz");

    let err = codec.from_document(&doc).unwrap_err();
    assert!(matches!(err, DumpError::InvalidHex { ref reason, .. } if reason == "rejected"));
}

#[test]
fn missing_documents_surface_storage_errors() {
    let codec = DocumentCodec::default();
    let err = RawDump::load(&MemoryDocumentStore::new(), "absent", &codec).unwrap_err();
    assert!(matches!(err, DumpError::Storage(StorageError::NotFound(_))));

    let temp = tempfile::tempdir().unwrap();
    let store = FsDocumentStore::new().with_base(temp.path());
    let err = store.load_document("absent.xml").unwrap_err();
    assert!(matches!(err, DumpError::Storage(StorageError::NotFound(_))));
}

#[test]
fn unwritable_location_is_storage_error() {
    let temp = tempfile::tempdir().unwrap();
    // A regular file where a parent directory is expected
    std::fs::write(temp.path().join("blocker"), b"x").unwrap();
    let store = FsDocumentStore::new().with_base(temp.path());
    let doc = DocumentCodec::default().to_document(&[]);
    let err = store.write_document(&doc, "blocker/dump.xml").unwrap_err();
    assert!(matches!(err, DumpError::Storage(StorageError::Io { .. })));
}

fn deeply_nested(depth: usize) -> String {
    format!(
        "<calypsoDump>{}{}</calypsoDump>",
        "<file filename=\"a\">".repeat(depth),
        "</file>".repeat(depth)
    )
}

#[test]
fn very_deep_document_hits_depth_limit() {
    let err = decode(&deeply_nested(200_000)).unwrap_err();
    assert!(matches!(err, DumpError::DepthLimitExceeded(64)), "{err}");
}

#[test]
fn very_deep_stored_document_hits_depth_limit() {
    let temp = tempfile::tempdir().unwrap();
    std::fs::write(temp.path().join("deep.xml"), deeply_nested(100_000)).unwrap();
    let store = FsDocumentStore::new()
        .with_base(temp.path())
        .with_max_depth(16);
    let err = RawDump::load(&store, "deep.xml", &DocumentCodec::default()).unwrap_err();
    assert!(matches!(err, DumpError::DepthLimitExceeded(16)), "{err}");
}

#[test]
fn nested_content_in_record_is_malformed() {
    let err = decode(
        r#"<calypsoDump><file filename="EF"><record>01<file filename="X"/></record></file></calypsoDump>"#,
    )
    .unwrap_err();
    assert!(matches!(err, DumpError::MalformedDocument(_)), "{err}");

    let err = decode(
        r#"<calypsoDump><file filename="EF">garbage<record>01</record></file></calypsoDump>"#,
    )
    .unwrap_err();
    assert!(matches!(err, DumpError::MalformedDocument(_)), "{err}");
}
