use std::path::PathBuf;

use assert_cmd::Command;
use image::{Rgb, RgbImage};
use predicates::prelude::*;

fn write_uniform_png(dir: &tempfile::TempDir, name: &str, size: (u32, u32), level: u8) -> PathBuf {
    let path = dir.path().join(name);
    RgbImage::from_pixel(size.0, size.1, Rgb([level, level, level]))
        .save(&path)
        .unwrap();
    path
}

fn lungscan() -> Command {
    Command::cargo_bin("lungscan").unwrap()
}

#[test]
fn uniform_qualifying_scan_reports_both_lungs() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(&dir, "scan.png", (400, 300), 15);

    lungscan()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "35 cases found: left and right lungs.",
        ));
}

#[test]
fn clean_scan_reports_zero_cases() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(&dir, "scan.png", (400, 300), 50);

    lungscan()
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("0 cases found."));
}

#[test]
fn json_report_carries_the_count() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(&dir, "scan.png", (400, 300), 15);

    lungscan()
        .arg(&input)
        .arg("--json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"case_count\": 35"))
        .stdout(predicate::str::contains("\"fallback_band\": true"));
}

#[test]
fn writes_the_annotated_image() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(&dir, "scan.png", (400, 300), 15);
    let output = dir.path().join("annotated.png");

    lungscan()
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success();

    let annotated = image::open(&output).unwrap().to_rgb8();
    assert_eq!(annotated.dimensions(), (400, 300));
    // (0, 0) sits on the ring of the first confirmed window.
    assert_eq!(*annotated.get_pixel(0, 0), Rgb([255, 0, 0]));
}

#[test]
fn undersized_scan_fails_with_a_crop_error() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_uniform_png(&dir, "small.png", (399, 300), 15);

    lungscan()
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("smaller than"));
}
