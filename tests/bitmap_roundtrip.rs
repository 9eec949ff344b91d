//! Integration tests for 24-bit BMP loading and saving

use pixelscale::bitmap::{self, BitmapError};
use pixelscale::{Algorithm, PixelGrid};
use std::fs;
use tempfile::TempDir;

/// Opaque gradient; odd widths exercise BMP row padding.
fn gradient(width: u32, height: u32) -> PixelGrid {
    PixelGrid::from_fn(width, height, |x, y| {
        0xFF000000 | ((x * 37 % 256) << 16) | ((y * 59 % 256) << 8) | ((x + y) * 13 % 256)
    })
}

#[test]
fn test_round_trip_various_widths() {
    let temp = TempDir::new().expect("should create temp dir");
    for (width, height) in [(1, 1), (2, 3), (3, 2), (5, 5), (7, 1), (16, 9)] {
        let grid = gradient(width, height);
        let path = temp.path().join(format!("g_{}x{}.bmp", width, height));

        bitmap::save(&grid, &path).expect("should save bitmap");
        let loaded = bitmap::load(&path, 0).expect("should load bitmap");

        assert_eq!(loaded, grid, "{}x{}", width, height);
    }
}

#[test]
fn test_save_drops_alpha() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("translucent.bmp");

    bitmap::save(&PixelGrid::filled(2, 2, 0x40A0B0C0), &path).expect("should save bitmap");
    let loaded = bitmap::load(&path, 0).expect("should load bitmap");

    assert!(loaded.data().iter().all(|&p| p == 0xFFA0B0C0));
}

#[test]
fn test_load_with_padding_replicates_edges() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("pad.bmp");
    let grid = gradient(3, 2);
    bitmap::save(&grid, &path).expect("should save bitmap");

    let loaded = bitmap::load(&path, 2).expect("should load bitmap");
    assert_eq!(loaded.pad(), 2);
    assert_eq!(loaded.stride(), 7);
    assert_eq!(loaded.interior(), grid.data().to_vec());

    // Top-left corner of the border is the top-left interior pixel.
    assert_eq!(loaded.data()[0], grid.get(0, 0));
    // Bottom-right corner of the border is the bottom-right interior pixel.
    assert_eq!(*loaded.data().last().unwrap(), grid.get(2, 1));
}

#[test]
fn test_scale_and_save_dimensions() {
    let temp = TempDir::new().expect("should create temp dir");
    let input_path = temp.path().join("in.bmp");
    bitmap::save(&gradient(5, 4), &input_path).expect("should save bitmap");

    for algorithm in Algorithm::ALL {
        let input = bitmap::load(&input_path, algorithm.padding()).expect("should load bitmap");
        let scaled = algorithm.scale(&input).expect("padding was supplied");
        let out_path = temp.path().join("out").join(format!("{}.bmp", algorithm));
        bitmap::save(&scaled, &out_path).expect("should save bitmap");

        let image = image::open(&out_path).expect("should open output");
        let f = algorithm.factor();
        assert_eq!((image.width(), image.height()), (5 * f, 4 * f), "{}", algorithm);
    }
}

#[test]
fn test_png_is_rejected() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("sprite.bmp");
    gradient(2, 2).to_rgba_image().save_with_format(&path, image::ImageFormat::Png).expect("should write png");

    let result = bitmap::load(&path, 0);
    assert!(matches!(result, Err(BitmapError::BadMagic)), "got {:?}", result);
}

#[test]
fn test_empty_file_is_rejected() {
    let temp = TempDir::new().expect("should create temp dir");
    let path = temp.path().join("empty.bmp");
    fs::write(&path, b"").expect("should write file");

    assert!(bitmap::load(&path, 0).is_err());
}
