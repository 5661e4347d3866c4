use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("stackbar"));
}

#[test]
fn options_prints_defaults() {
    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("options");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"yAxisTitle\""))
        .stdout(predicate::str::contains("#4472C4"));
}

#[test]
fn render_html_with_overrides() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    let opts = dir.path().join("opts.json");
    let out = dir.path().join("chart.html");
    fs::write(&data, "[[1, 2], [3]]").unwrap();
    fs::write(&opts, r#"{ "title": { "text": "From file" }, "legend.text": ["A", "B"] }"#).unwrap();

    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("render")
        .arg("--data")
        .arg(&data)
        .arg("--options")
        .arg(&opts)
        .args(["--set", "values.precision=1", "--width", "800"])
        .arg("--out")
        .arg(&out);
    cmd.assert()
        .success()
        .stderr(predicate::str::contains("800x400"))
        .stderr(predicate::str::contains("2 bars"));

    let html = fs::read_to_string(&out).unwrap();
    assert!(html.contains("From file"));
    assert!(html.contains(">A</div>"));
    assert!(html.contains(">3.0</div>"));
}

#[test]
fn render_svg_from_csv() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.csv");
    let out = dir.path().join("chart.svg");
    fs::write(&data, "north,south\n1,2\n3,4\n").unwrap();

    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("render")
        .arg("--data")
        .arg(&data)
        .args(["--set", "title.text=Regions"])
        .arg("--out")
        .arg(&out);
    cmd.assert().success();
    let svg = fs::read_to_string(&out).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("Regions"));
}

#[test]
fn unsupported_output_fails() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "[1, 2]").unwrap();

    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("render")
        .arg("--data")
        .arg(&data)
        .arg("--out")
        .arg(dir.path().join("chart.png"));
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unsupported output format"));
}

#[test]
fn malformed_set_fails() {
    let dir = tempdir().unwrap();
    let data = dir.path().join("data.json");
    fs::write(&data, "[1]").unwrap();

    let mut cmd = Command::cargo_bin("stackbar").unwrap();
    cmd.arg("render")
        .arg("--data")
        .arg(&data)
        .args(["--set", "no-equals-sign"])
        .arg("--out")
        .arg(dir.path().join("c.html"));
    cmd.assert().failure().stderr(predicate::str::contains("KEY=VALUE"));
}
