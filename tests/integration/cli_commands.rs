use calypso_dump::config::DumpConfig;
use calypso_dump::tooling::cli::{CliContext, Commands};
use calypso_dump::ApiError;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn snapshot(temp: &TempDir) -> (CliContext, PathBuf) {
    let source = temp.path().join("card");
    fs::create_dir_all(source.join("3F00/2000")).unwrap();
    fs::write(source.join("3F00/2000/2001"), [0x01u8, 0x02, 0xAB]).unwrap();
    let output = temp.path().join("out/card.xml");

    let cli = CliContext::from_config(DumpConfig::default()).unwrap();
    let message = cli
        .execute(&Commands::Snapshot {
            source,
            output: output.clone(),
            record_size: Some(2),
            indent: None,
        })
        .unwrap();
    assert!(message.contains("Wrote 3 files (2 records)"), "{message}");
    (cli, output)
}

#[test]
fn snapshot_writes_expected_document() {
    let temp = TempDir::new().unwrap();
    let (_, output) = snapshot(&temp);
    let text = fs::read_to_string(output).unwrap();
    assert!(text.contains(
        r#"<calypsoDump><file filename="3F00"><file filename="2000"><file filename="2001"><record>0102</record><record>ab</record></file></file></file></calypsoDump>"#
    ));
}

#[test]
fn show_text_and_json() {
    let temp = TempDir::new().unwrap();
    let (cli, output) = snapshot(&temp);

    let text = cli
        .execute(&Commands::Show {
            file: output.clone(),
            format: "text".to_string(),
        })
        .unwrap();
    assert_eq!(
        text,
        "File 3F00 :\n    File 2000 :\n        File 2001 :\n            Record : 0102\n            Record : ab"
    );

    let json = cli
        .execute(&Commands::Show {
            file: output,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed[0]["name"], "3F00");
    assert_eq!(parsed[0]["children"][0]["children"][0]["records"][1], "ab");
}

#[test]
fn stats_json_contract() {
    let temp = TempDir::new().unwrap();
    let (cli, output) = snapshot(&temp);
    let json = cli
        .execute(&Commands::Stats {
            file: output,
            format: "json".to_string(),
        })
        .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed["files"], 3);
    assert_eq!(parsed["leaf_files"], 1);
    assert_eq!(parsed["records"], 2);
    assert_eq!(parsed["bytes"], 3);
    assert_eq!(parsed["depth"], 3);
    assert_eq!(parsed["shadowed_files"], 0);
}

#[test]
fn verify_accepts_snapshot_and_rejects_mixed_files() {
    let temp = TempDir::new().unwrap();
    let (cli, output) = snapshot(&temp);
    let message = cli.execute(&Commands::Verify { file: output }).unwrap();
    assert!(message.contains("3 files round-trip without loss"));

    let mixed = temp.path().join("mixed.xml");
    fs::write(
        &mixed,
        r#"<calypsoDump><file filename="DF"><record>01</record><file filename="EF"/></file></calypsoDump>"#,
    )
    .unwrap();
    let err = cli.execute(&Commands::Verify { file: mixed }).unwrap_err();
    assert!(matches!(err, ApiError::VerificationFailed(_)));
}

#[test]
fn unknown_output_format_rejected() {
    let temp = TempDir::new().unwrap();
    let (cli, output) = snapshot(&temp);
    let err = cli
        .execute(&Commands::Show {
            file: output,
            format: "yaml".to_string(),
        })
        .unwrap_err();
    assert!(matches!(err, ApiError::ConfigError(_)));
}

#[test]
fn invalid_config_rejected() {
    let mut config = DumpConfig::default();
    config.source.record_size = 0;
    assert!(CliContext::from_config(config).is_err());
}
