//! 24-bit Windows bitmap loading and saving.
//!
//! Only uncompressed BMP files with a 40-byte `BITMAPINFOHEADER` and 24 bits
//! per pixel are accepted. The header is checked here; pixel decoding and
//! encoding go through the `image` crate's BMP codec.

use crate::grid::PixelGrid;
use image::{DynamicImage, ImageFormat};
use std::fs;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Size of the file header preceding the DIB header.
const FILE_HEADER_LEN: usize = 14;
/// The only DIB header size accepted (`BITMAPINFOHEADER`).
const INFO_HEADER_LEN: u32 = 40;
/// The only pixel depth accepted.
const BITS_PER_PIXEL: u16 = 24;

/// Error loading or saving a bitmap
#[derive(Debug, Error)]
pub enum BitmapError {
    /// The input file does not exist
    #[error("file not found: {}", path.display())]
    NotFound { path: PathBuf },
    /// Reading or writing failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The file does not start with `BM`
    #[error("not a bitmap file (bad magic number)")]
    BadMagic,
    /// The DIB header is not a 40-byte `BITMAPINFOHEADER`
    #[error("unsupported bitmap header size {found} (expected 40)")]
    HeaderSize { found: u32 },
    /// Pixels are not 24-bit
    #[error("unsupported bit depth {found} (expected 24)")]
    BitDepth { found: u16 },
    /// The file ends inside the headers
    #[error("bitmap header is truncated")]
    Truncated,
    /// The pixel data could not be decoded or encoded
    #[error("bitmap codec error: {0}")]
    Image(#[from] image::ImageError),
}

/// Load a 24-bit bitmap as an opaque grid with `pad` pixels of border.
///
/// Every pixel gets alpha `0xFF`. The border satisfies the clamp-to-edge
/// padding invariant.
pub fn load(path: &Path, pad: u32) -> Result<PixelGrid, BitmapError> {
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => BitmapError::NotFound { path: path.to_path_buf() },
        _ => BitmapError::Io { path: path.to_path_buf(), source },
    })?;
    let grid = decode(&bytes)?;
    tracing::debug!(path = %path.display(), width = grid.width(), height = grid.height(), "loaded bitmap");
    Ok(if pad > 0 { grid.padded(pad) } else { grid })
}

/// Decode an in-memory 24-bit bitmap into an unpadded opaque grid.
pub fn decode(bytes: &[u8]) -> Result<PixelGrid, BitmapError> {
    check_header(bytes)?;
    let mut rgba = image::load_from_memory_with_format(bytes, ImageFormat::Bmp)?.into_rgba8();
    for p in rgba.pixels_mut() {
        p.0[3] = 0xFF;
    }
    Ok(PixelGrid::from_rgba_image(&rgba))
}

fn check_header(bytes: &[u8]) -> Result<(), BitmapError> {
    if bytes.len() < 2 || &bytes[..2] != b"BM" {
        return Err(BitmapError::BadMagic);
    }
    let u32_at = |at: usize| -> Result<u32, BitmapError> {
        let field = bytes.get(at..at + 4).ok_or(BitmapError::Truncated)?;
        Ok(u32::from_le_bytes([field[0], field[1], field[2], field[3]]))
    };
    let u16_at = |at: usize| -> Result<u16, BitmapError> {
        let field = bytes.get(at..at + 2).ok_or(BitmapError::Truncated)?;
        Ok(u16::from_le_bytes([field[0], field[1]]))
    };

    let header_len = u32_at(FILE_HEADER_LEN)?;
    if header_len != INFO_HEADER_LEN {
        return Err(BitmapError::HeaderSize { found: header_len });
    }
    let bits = u16_at(FILE_HEADER_LEN + 14)?;
    if bits != BITS_PER_PIXEL {
        return Err(BitmapError::BitDepth { found: bits });
    }
    Ok(())
}

/// Encode the interior of `grid` as an in-memory 24-bit bitmap, dropping
/// alpha.
pub fn encode(grid: &PixelGrid) -> Result<Vec<u8>, BitmapError> {
    let rgb = DynamicImage::ImageRgba8(grid.to_rgba_image()).into_rgb8();
    let mut bytes = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Bmp)?;
    Ok(bytes)
}

/// Save the interior of `grid` as a 24-bit bitmap, dropping alpha.
///
/// Missing parent directories are created. The bitmap is encoded in memory
/// and written to a sibling temporary file that is renamed over `path`, so a
/// failed save never leaves a partial bitmap behind.
pub fn save(grid: &PixelGrid, path: &Path) -> Result<(), BitmapError> {
    let bytes = encode(grid)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)
                .map_err(|source| BitmapError::Io { path: parent.to_path_buf(), source })?;
        }
    }

    let staging = staging_path(path);
    let written = fs::write(&staging, &bytes).and_then(|()| fs::rename(&staging, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&staging);
        return Err(BitmapError::Io { path: path.to_path_buf(), source });
    }
    tracing::debug!(path = %path.display(), width = grid.width(), height = grid.height(), "saved bitmap");
    Ok(())
}

/// `out.bmp` stages as `.out.bmp.part` in the same directory, so the final
/// rename never crosses filesystems.
fn staging_path(path: &Path) -> PathBuf {
    let mut name = std::ffi::OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| std::ffi::OsStr::new("output")));
    name.push(".part");
    path.with_file_name(name)
}
