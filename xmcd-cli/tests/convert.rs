//! End-to-end CLI tests: run the real binary against worksheets on disk.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

const SAMPLE: &str = r#"<worksheet xmlns="http://schemas.mathsoft.com/worksheet30"
           xmlns:ml="http://schemas.mathsoft.com/math30">
<metadata/><settings/><styles/>
<regions>
<region><math><ml:define><ml:id>x</ml:id><ml:apply><ml:plus/><ml:real>1</ml:real><ml:real>2</ml:real></ml:apply></ml:define></math></region>
<region><text><p>Done.</p></text></region>
</regions></worksheet>"#;

fn xmcdtex() -> Command {
    Command::cargo_bin("xmcdtex").expect("binary builds")
}

#[test]
fn converts_a_worksheet_to_tex() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.xmcd");
    fs::write(&input, SAMPLE).unwrap();
    let out_dir = dir.path().join("out");

    xmcdtex()
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("sample.tex"));

    let tex = fs::read_to_string(out_dir.join("sample.tex")).unwrap();
    assert!(tex.starts_with("\\documentclass[10pt,a4paper]{report}"));
    assert!(tex.contains("$ x = 1 + 2 $\\\\"));
    assert!(tex.contains("Done."));
    assert!(tex.ends_with("\\end{document}"));
}

#[test]
fn skipped_regions_are_reported_but_not_fatal() {
    let src = SAMPLE.replace(
        "<ml:plus/>",
        "<ml:integral/>",
    );
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("partial.xmcd");
    fs::write(&input, src).unwrap();
    let out_dir = dir.path().join("out");

    xmcdtex()
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 region(s) skipped"))
        .stderr(predicate::str::contains("region 1"))
        .stderr(predicate::str::contains("integral"));

    // The text region still made it into the document.
    let tex = fs::read_to_string(out_dir.join("partial.tex")).unwrap();
    assert!(tex.contains("Done."));
}

#[test]
fn json_diagnostics() {
    let src = SAMPLE.replace("<ml:plus/>", "<ml:integral/>");
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("partial.xmcd");
    fs::write(&input, src).unwrap();

    xmcdtex()
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .arg("--diagnostics")
        .arg("json")
        .assert()
        .success()
        .stderr(predicate::str::contains("\"kind\": \"unknown_operator\""))
        .stderr(predicate::str::contains("\"operator\": \"integral\""));
}

#[test]
fn rejects_non_xmcd_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("notes.txt");
    fs::write(&input, "not a worksheet").unwrap();

    xmcdtex()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains(".xmcd"));
}

#[test]
fn missing_region_list_is_fatal_with_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("short.xmcd");
    fs::write(&input, "<worksheet><metadata/><settings/></worksheet>").unwrap();
    let out_dir = dir.path().join("out");

    xmcdtex()
        .arg(&input)
        .arg("--output-dir")
        .arg(&out_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("region list"));

    assert!(!out_dir.exists());
}

#[test]
fn verbose_prints_progress_notes() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sample.xmcd");
    fs::write(&input, SAMPLE).unwrap();

    xmcdtex()
        .arg(&input)
        .arg("--output-dir")
        .arg(dir.path().join("out"))
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("region 1: math region"))
        .stderr(predicate::str::contains("region 2: text region"));
}
