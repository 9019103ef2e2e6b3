//! Integration tests for CLI routing

use super::test_utils::{combine_archive_manifest, write_manifest};
use clap::Parser;
use omextree::cli::{map_error, Cli, RunContext};
use omextree::config::TreeConfig;
use omextree::manifest::ManifestEntry;
use tempfile::TempDir;

fn run(args: &[&str]) -> Result<String, String> {
    let cli = Cli::try_parse_from(args).map_err(|e| e.to_string())?;
    let mut config = TreeConfig::default();
    config.logging.color = false;
    RunContext::from_config(config)
        .execute(&cli.command)
        .map_err(|e| map_error(&e))
}

#[test]
fn test_tree_text_archive_root() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(temp.path(), "manifest.json", &combine_archive_manifest());
    let path = path.to_string_lossy();

    let output = run(&["omextree", "tree", path.as_ref(), "--archive-root"]).unwrap();
    assert_eq!(
        output,
        "manifest.xml\n\
         e_coli_core.xml [model]\n\
         FROG/\n  \
         cobrapy/\n    \
         01_objective.tsv\n    \
         02_fva.tsv\n    \
         metadata.json"
    );
}

#[test]
fn test_tree_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(
        temp.path(),
        "manifest.json",
        &[ManifestEntry::new("docs/readme.txt", "text")],
    );
    let path = path.to_string_lossy();

    let output = run(&["omextree", "tree", path.as_ref(), "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["root"][0]["type"], "folder");
    assert_eq!(value["root"][0]["children"][0]["type"], "otherFiles");
}

#[test]
fn test_stats_json_output() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(temp.path(), "manifest.json", &combine_archive_manifest());
    let path = path.to_string_lossy();

    let output = run(&["omextree", "stats", path.as_ref(), "--format", "json"]).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["models"], 1);
    assert_eq!(value["total"], 8);
}

#[test]
fn test_malformed_manifest_reports_entry() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("bad.json");
    std::fs::write(&path, r#"{"entries": [{"location": "a.txt"}]}"#).unwrap();
    let path = path.to_string_lossy();

    let err = run(&["omextree", "tree", path.as_ref()]).unwrap_err();
    assert_eq!(err, "Error: Manifest entry 0 has no usable format (entry #1)");
}

#[test]
fn test_unknown_format_rejected() {
    let temp = TempDir::new().unwrap();
    let path = write_manifest(temp.path(), "manifest.json", &combine_archive_manifest());
    let path = path.to_string_lossy();

    assert!(run(&["omextree", "tree", path.as_ref(), "--format", "yaml"]).is_err());
}

#[test]
fn test_config_command_prints_toml() {
    let output = run(&["omextree", "config"]).unwrap();
    assert!(output.contains("[builder]"));
    assert!(output.contains("model_marker = \"sbml\""));
}
