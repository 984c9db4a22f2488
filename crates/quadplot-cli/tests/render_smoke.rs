use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use assert_cmd::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn fixture() -> PathBuf {
    let path = repo_root().join("fixtures").join("bilingual.json");
    assert!(path.exists(), "fixture missing: {}", path.display());
    path
}

#[test]
fn cli_render_defaults_to_svg_next_to_the_input() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let input = tmp.path().join("bilingual.json");
    fs::copy(fixture(), &input).expect("copy fixture");

    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    Command::new(exe)
        .args(["render", input.to_string_lossy().as_ref()])
        .assert()
        .success();

    let svg = fs::read_to_string(input.with_extension("svg")).expect("read svg");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains(r#"viewBox="0 0 600 400""#));
    // Id derived from the input file name.
    assert!(svg.contains(r#"id="bilingual""#));
    assert!(svg.contains("Mesa de ayuda 0"));
}

#[test]
fn cli_render_streams_to_stdout_with_dash_out() {
    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    let assert = Command::new(exe)
        .args(["render", "--out", "-", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let svg = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 svg");
    assert!(svg.starts_with("<svg"));
}

#[test]
fn cli_writes_svg_file_with_out_flag_and_explicit_id() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let out = tmp.path().join("chart.svg");

    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    Command::new(exe)
        .args([
            "render",
            "--id",
            "portfolio view",
            "--out",
            out.to_string_lossy().as_ref(),
            fixture().to_string_lossy().as_ref(),
        ])
        .assert()
        .success();

    let svg = fs::read_to_string(&out).expect("read svg");
    assert!(svg.contains(r#"id="portfolio-view""#));
    assert!(svg.contains("#portfolio-view .data-point:hover .tooltip"));
}

#[test]
fn cli_layout_prints_json() {
    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    let assert = Command::new(exe)
        .args(["layout", fixture().to_string_lossy().as_ref()])
        .assert()
        .success();

    let stdout = assert.get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&stdout).expect("layout json");
    assert_eq!(value["width"], 600.0);
    assert_eq!(value["height"], 400.0);
    assert_eq!(value["quadrants"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["points"].as_array().map(Vec::len), Some(6));
}

#[test]
fn cli_reads_stdin_when_path_is_dash() {
    let json = fs::read_to_string(fixture()).expect("fixture json");

    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    let assert = Command::new(exe)
        .args(["render", "-"])
        .write_stdin(json)
        .assert()
        .success();

    let svg = String::from_utf8(assert.get_output().stdout.clone()).expect("utf-8 svg");
    assert!(svg.contains(r#"id="quadplot""#));
}

#[test]
fn cli_rejects_unknown_flags_with_usage() {
    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    Command::new(exe)
        .args(["render", "--nope"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn cli_reports_invalid_spec_on_stderr() {
    let exe = assert_cmd::cargo_bin!("quadplot-cli");
    Command::new(exe)
        .args(["render", "-"])
        .write_stdin(r#"{"data": []}"#)
        .assert()
        .failure()
        .code(1);
}
