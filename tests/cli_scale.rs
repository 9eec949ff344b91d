//! CLI integration tests for `pxscale scale` and `pxscale list`
//!
//! These tests run the built binary in a scratch directory and check exit
//! codes and output image dimensions.

use pixelscale::bitmap;
use pixelscale::PixelGrid;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Run pxscale in `dir` with no config reachable outside it.
fn pxscale(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pxscale"))
        .args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir.join("xdg"))
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute pxscale")
}

/// Scratch directory holding a 3x2 `in.bmp`.
fn scratch() -> TempDir {
    let temp = TempDir::new().expect("should create temp dir");
    let grid = PixelGrid::from_fn(3, 2, |x, y| if (x + y) % 2 == 0 { 0xFF000000 } else { 0xFFFFFFFF });
    bitmap::save(&grid, &temp.path().join("in.bmp")).expect("should write input");
    temp
}

/// Get image dimensions from a BMP file
fn get_image_dimensions(path: &Path) -> (u32, u32) {
    let img = image::open(path).expect("Failed to open output image");
    (img.width(), img.height())
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_scale_with_algorithm_and_output() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "hq3xA", "in.bmp", "big.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("big.bmp")), (9, 6));
}

#[test]
fn test_scale_defaults_to_scale2x_and_output_bmp() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "in.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("output.bmp")), (6, 4));
}

#[test]
fn test_scale_two_args_input_and_output_with_configured_algorithm() {
    let temp = scratch();
    fs::write(temp.path().join("pxscale.toml"), "[scale]\nalgorithm = \"scale2x\"\n").expect("should write config");

    let output = pxscale(temp.path(), &["scale", "in.bmp", "nested/dir/out.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("nested/dir/out.bmp")), (6, 4));
}

#[test]
fn test_scale_two_args_unknown_algorithm_exits_2() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "hq2x", "in.bmp"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown algorithm 'hq2x'"), "{}", stderr(&output));
    assert!(!temp.path().join("output.bmp").exists());
}

#[test]
fn test_scale_two_args_without_configured_algorithm_exits_2() {
    // A config that leaves the algorithm unset does not enable INPUT OUTPUT
    let temp = scratch();
    fs::write(temp.path().join("pxscale.toml"), "[scale]\noutput = \"cfg.bmp\"\n").expect("should write config");

    let output = pxscale(temp.path(), &["scale", "in.bmp", "out.bmp"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown algorithm 'in.bmp'"), "{}", stderr(&output));
    assert!(!temp.path().join("out.bmp").exists());
}

#[test]
fn test_scale_two_args_algorithm_and_input() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "block3", "in.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("output.bmp")), (9, 6));
}

#[test]
fn test_scale_every_algorithm() {
    let temp = scratch();
    for name in ["copy", "scale2xPad", "scale2xSFX", "scale3x", "scale3xPad", "scale3xSFX", "hq2xB", "superXBR"] {
        let out = format!("{}.bmp", name);
        let output = pxscale(temp.path(), &["scale", name, "in.bmp", &out]);
        assert!(output.status.success(), "{} failed: {}", name, stderr(&output));
        assert!(temp.path().join(&out).exists(), "{} wrote nothing", name);
    }
}

#[test]
fn test_scale_uses_config_file() {
    let temp = scratch();
    fs::write(temp.path().join("pxscale.toml"), "[scale]\nalgorithm = \"block3\"\noutput = \"cfg.bmp\"\njobs = 1\n")
        .expect("should write config");

    let output = pxscale(temp.path(), &["scale", "in.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("cfg.bmp")), (9, 6));
}

#[test]
fn test_cli_algorithm_overrides_config() {
    let temp = scratch();
    fs::write(temp.path().join("pxscale.toml"), "[scale]\nalgorithm = \"block3\"\n").expect("should write config");

    let output = pxscale(temp.path(), &["scale", "copy", "in.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert_eq!(get_image_dimensions(&temp.path().join("output.bmp")), (3, 2));
}

#[test]
fn test_invalid_config_exits_2() {
    let temp = scratch();
    fs::write(temp.path().join("bad.toml"), "[scale]\nalgorithm = \"bilinear\"\n").expect("should write config");

    let output = pxscale(temp.path(), &["scale", "--config", "bad.toml", "in.bmp"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("bilinear"));
    assert!(!temp.path().join("output.bmp").exists());
}

#[test]
fn test_unknown_algorithm_exits_2() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "lanczos", "in.bmp", "out.bmp"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("unknown algorithm 'lanczos'"));
    assert!(!temp.path().join("out.bmp").exists());
}

#[test]
fn test_missing_input_exits_1() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "scale2x", "missing.bmp", "out.bmp"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("file not found"));
    assert!(!temp.path().join("out.bmp").exists());
}

#[test]
fn test_non_bitmap_input_exits_1() {
    let temp = scratch();
    fs::write(temp.path().join("notes.txt"), "not an image").expect("should write file");

    let output = pxscale(temp.path(), &["scale", "scale2x", "notes.txt", "out.bmp"]);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("bad magic"));
}

#[test]
fn test_zero_jobs_is_rejected() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "--jobs", "0", "in.bmp"]);

    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn test_verbose_logs_to_stderr() {
    let temp = scratch();
    let output = pxscale(temp.path(), &["scale", "-v", "-j", "2", "hq2xA", "in.bmp"]);

    assert!(output.status.success(), "Scale failed: {}", stderr(&output));
    assert!(stderr(&output).contains("scaling"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_list_prints_algorithms() {
    let temp = TempDir::new().expect("should create temp dir");
    let output = pxscale(temp.path(), &["list"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for name in ["copy", "block2", "scale2xSFX", "hq3xB", "superXBR"] {
        assert!(stdout.contains(name), "list is missing {}", name);
    }
    assert!(stdout.contains("scale3xPad"));
}
