use std::error::Error;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::tempdir;

fn parkscan_cmd() -> Command {
    Command::cargo_bin("parkscan").expect("Failed to find parkscan binary")
}

/// Writes a uniform bright test image and a two-slot JSON list into the
/// given directory.
fn write_fixtures(dir: &std::path::Path) -> Result<(PathBuf, PathBuf), Box<dyn Error>> {
    let image_path = dir.join("lot.png");
    let gray = image::GrayImage::from_pixel(320, 240, image::Luma([235]));
    gray.save(&image_path)?;

    let slots_path = dir.join("slots.json");
    std::fs::write(
        &slots_path,
        r#"[{"x": 10, "y": 10, "width": 100, "height": 150},
            {"x": 150, "y": 10, "width": 100, "height": 150}]"#,
    )?;

    Ok((image_path, slots_path))
}

#[test]
fn analyze_prints_a_summary() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, slots_path) = write_fixtures(dir.path())?;

    parkscan_cmd()
        .arg("analyze")
        .arg(&image_path)
        .arg("--slots")
        .arg(&slots_path)
        .assert()
        .success()
        .stdout(contains("Total: 2"));

    Ok(())
}

#[test]
fn analyze_json_emits_report_entries() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, slots_path) = write_fixtures(dir.path())?;

    parkscan_cmd()
        .arg("analyze")
        .arg(&image_path)
        .arg("--slots")
        .arg(&slots_path)
        .arg("--strategy")
        .arg("pixel-count")
        .arg("--json")
        .assert()
        .success()
        .stdout(contains("\"entries\""));

    Ok(())
}

#[test]
fn analyze_requires_a_slot_source() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, _) = write_fixtures(dir.path())?;

    parkscan_cmd()
        .arg("analyze")
        .arg(&image_path)
        .assert()
        .failure();

    Ok(())
}

#[test]
fn analyze_rejects_out_of_range_thresholds() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, slots_path) = write_fixtures(dir.path())?;

    parkscan_cmd()
        .arg("analyze")
        .arg(&image_path)
        .arg("--slots")
        .arg(&slots_path)
        .arg("--empty-std-max")
        .arg("500")
        .assert()
        .failure();

    Ok(())
}

#[test]
fn analyze_writes_an_annotated_image() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, slots_path) = write_fixtures(dir.path())?;
    let annotated_path = dir.path().join("annotated.png");

    parkscan_cmd()
        .arg("analyze")
        .arg(&image_path)
        .arg("--slots")
        .arg(&slots_path)
        .arg("--annotate")
        .arg(&annotated_path)
        .assert()
        .success();

    assert!(annotated_path.exists());
    Ok(())
}

#[test]
fn detect_on_a_blank_image_finds_nothing() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let (image_path, _) = write_fixtures(dir.path())?;

    parkscan_cmd()
        .arg("detect")
        .arg(&image_path)
        .assert()
        .success()
        .stdout(contains("No candidate slots"));

    Ok(())
}

#[test]
fn nonexistent_image_fails() {
    parkscan_cmd()
        .arg("analyze")
        .arg("surely/this/does/not/exist/lot.png")
        .arg("--auto-detect")
        .assert()
        .failure();
}
