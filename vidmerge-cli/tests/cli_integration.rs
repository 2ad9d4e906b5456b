use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn vidmerge_cmd() -> Command {
    let mut cmd = Command::cargo_bin("vidmerge").expect("Failed to find vidmerge binary");
    cmd.env("NO_COLOR", "1")
        .env_remove("VIDMERGE_FFMPEG")
        .env_remove("VIDMERGE_FFPROBE")
        .env_remove("VIDMERGE_HWACCEL");
    cmd
}

fn touch(dir: &Path, names: &[&str]) -> Result<(), Box<dyn Error>> {
    for name in names {
        fs::write(dir.join(name), "dummy content")?;
    }
    Ok(())
}

#[test]
fn test_list_prints_natural_order() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    touch(
        input_dir.path(),
        &["clip10.mp4", "clip2.mp4", "clip1.mp4", "notes.txt"],
    )?;

    let output = vidmerge_cmd()
        .arg("list")
        .arg(input_dir.path())
        .assert()
        .success()
        .stdout(contains("MERGE ORDER"))
        .stdout(contains("notes.txt").not())
        .get_output()
        .stdout
        .clone();

    let stdout = String::from_utf8(output)?;
    let first = stdout.find("1. clip1.mp4").expect("clip1 listed");
    let second = stdout.find("2. clip2.mp4").expect("clip2 listed");
    let third = stdout.find("3. clip10.mp4").expect("clip10 listed");
    assert!(first < second && second < third);
    Ok(())
}

#[test]
fn test_list_non_existent_input() -> Result<(), Box<dyn Error>> {
    vidmerge_cmd()
        .arg("list")
        .arg("surely/this/does/not/exist/clip.mp4")
        .assert()
        .failure()
        .stderr(contains("does not exist"));
    Ok(())
}

#[test]
fn test_list_directory_without_videos() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    touch(input_dir.path(), &["readme.md"])?;

    vidmerge_cmd()
        .arg("list")
        .arg(input_dir.path())
        .assert()
        .failure()
        .stderr(contains("No video files selected"));
    Ok(())
}

#[test]
fn test_merge_reports_missing_tools() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    touch(input_dir.path(), &["a.mp4", "b.mp4"])?;
    let missing = input_dir.path().join("no-such-tools");

    vidmerge_cmd()
        .arg("merge")
        .arg(input_dir.path())
        .arg("-o")
        .arg(input_dir.path().join("merged.mp4"))
        .arg("--ffmpeg")
        .arg(missing.join("ffmpeg"))
        .arg("--ffprobe")
        .arg(missing.join("ffprobe"))
        .assert()
        .failure()
        .stderr(contains("Required tool not found"));

    assert!(!input_dir.path().join("merged.mp4").exists());
    Ok(())
}

#[test]
fn test_merge_rejects_invalid_hwaccel() -> Result<(), Box<dyn Error>> {
    vidmerge_cmd()
        .args(["merge", "a.mp4", "-o", "out.mp4", "--hwaccel", "sometimes"])
        .assert()
        .failure()
        .stderr(contains("sometimes"));
    Ok(())
}

#[test]
fn test_merge_requires_output() -> Result<(), Box<dyn Error>> {
    vidmerge_cmd()
        .args(["merge", "a.mp4"])
        .assert()
        .failure()
        .stderr(contains("--output"));
    Ok(())
}

#[test]
fn test_log_dir_receives_run_log() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    let log_dir = tempdir()?;
    touch(input_dir.path(), &["part1.mkv"])?;

    vidmerge_cmd()
        .arg("list")
        .arg(input_dir.path())
        .arg("--log-dir")
        .arg(log_dir.path())
        .assert()
        .success();

    let logs: Vec<_> = fs::read_dir(log_dir.path())?
        .filter_map(|e| e.ok())
        .map(|e| e.file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(logs.len(), 1);
    assert!(logs[0].starts_with("vidmerge_run_") && logs[0].ends_with(".log"));

    let contents = fs::read_to_string(log_dir.path().join(&logs[0]))?;
    assert!(contents.contains("part1.mkv"));
    Ok(())
}

#[test]
fn test_merge_rejects_missing_temp_dir() -> Result<(), Box<dyn Error>> {
    let input_dir = tempdir()?;
    touch(input_dir.path(), &["a.mp4"])?;

    vidmerge_cmd()
        .arg("merge")
        .arg(input_dir.path())
        .arg("-o")
        .arg(input_dir.path().join("merged.mp4"))
        .arg("--temp-dir")
        .arg(input_dir.path().join("missing"))
        .assert()
        .failure()
        .stderr(contains("Invalid configuration"))
        .stderr(contains("temp directory"));
    Ok(())
}
