//! Pixel buffers, border padding and neighbourhood access.
//!
//! Every scaler reads its input through a [`PixelGrid`]: a flat row-major
//! buffer of ARGB32 pixels, optionally surrounded by a border of replicated
//! edge pixels. Scalers that need out-of-bounds-safe neighbour reads ask for a
//! padded grid and read through a [`Window`]; the rest clamp coordinates with
//! a [`ClampedWindow`]. Both implement [`Neighborhood`], which gives the
//! compass-named accessors the edge rules are written in.
//!
//! ```text
//!          north2
//!   nw     north     ne
//! west2 west center east east2
//!   sw     south     se
//!          south2
//! ```

use image::{Rgba, RgbaImage};
use thiserror::Error;

/// A 32-bit colour, `0xAARRGGBB`.
pub type Pixel = u32;

/// Alpha channel of a pixel.
#[inline]
pub fn alpha(p: Pixel) -> u8 {
    (p >> 24) as u8
}

/// Red channel of a pixel.
#[inline]
pub fn red(p: Pixel) -> u8 {
    (p >> 16) as u8
}

/// Green channel of a pixel.
#[inline]
pub fn green(p: Pixel) -> u8 {
    (p >> 8) as u8
}

/// Blue channel of a pixel.
#[inline]
pub fn blue(p: Pixel) -> u8 {
    p as u8
}

/// Assemble a pixel from its four channels.
#[inline]
pub fn argb(a: u8, r: u8, g: u8, b: u8) -> Pixel {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Error building a grid from caller-supplied pixels
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    /// The pixel vector does not hold `width * height` entries
    #[error("pixel buffer holds {found} pixels, expected {expected} for a {width}x{height} grid")]
    SizeMismatch { width: u32, height: u32, expected: usize, found: usize },
}

/// A row-major ARGB pixel buffer with an optional replicated border.
///
/// `width` and `height` always describe the interior image. The stored buffer
/// is `(width + 2 * pad) x (height + 2 * pad)`; every border pixel equals the
/// nearest interior pixel (clamp-to-edge).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    width: u32,
    height: u32,
    pad: u32,
    data: Vec<Pixel>,
}

impl PixelGrid {
    /// Create an unpadded grid of transparent black pixels.
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, 0)
    }

    /// Create an unpadded grid where every pixel is `color`.
    pub fn filled(width: u32, height: u32, color: Pixel) -> Self {
        Self { width, height, pad: 0, data: vec![color; width as usize * height as usize] }
    }

    /// Create an unpadded grid by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Pixel) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self { width, height, pad: 0, data }
    }

    /// Wrap a row-major pixel vector as an unpadded grid.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<Pixel>) -> Result<Self, GridError> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GridError::SizeMismatch { width, height, expected, found: pixels.len() });
        }
        Ok(Self { width, height, pad: 0, data: pixels })
    }

    /// Wrap a buffer whose length the caller has already checked.
    pub(crate) fn from_sized(width: u32, height: u32, data: Vec<Pixel>) -> Self {
        debug_assert_eq!(data.len(), width as usize * height as usize);
        Self { width, height, pad: 0, data }
    }

    /// Convert an RGBA image. Alpha is carried through unchanged.
    pub fn from_rgba_image(image: &RgbaImage) -> Self {
        let (width, height) = image.dimensions();
        let data = image.pixels().map(|&Rgba([r, g, b, a])| argb(a, r, g, b)).collect();
        Self { width, height, pad: 0, data }
    }

    /// Convert the interior to an RGBA image.
    pub fn to_rgba_image(&self) -> RgbaImage {
        RgbaImage::from_fn(self.width, self.height, |x, y| {
            let p = self.get(x, y);
            Rgba([red(p), green(p), blue(p), alpha(p)])
        })
    }

    /// Interior width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Interior height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Border width on each side.
    pub fn pad(&self) -> u32 {
        self.pad
    }

    /// Distance in pixels between vertically adjacent stored pixels.
    pub fn stride(&self) -> usize {
        (self.width + 2 * self.pad) as usize
    }

    /// The full stored buffer, border included.
    pub fn data(&self) -> &[Pixel] {
        &self.data
    }

    /// Consume the grid, returning the stored buffer.
    pub fn into_data(self) -> Vec<Pixel> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y + self.pad) as usize * self.stride() + (x + self.pad) as usize
    }

    /// Interior pixel at `(x, y)`.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Pixel {
        self.data[self.index(x, y)]
    }

    /// Interior pixel with coordinates clamped to the interior bounds.
    #[inline]
    pub fn get_clamped(&self, x: i64, y: i64) -> Pixel {
        let cx = x.clamp(0, self.width as i64 - 1) as u32;
        let cy = y.clamp(0, self.height as i64 - 1) as u32;
        self.get(cx, cy)
    }

    /// Overwrite an interior pixel. The border is not refreshed.
    pub fn set(&mut self, x: u32, y: u32, color: Pixel) {
        let i = self.index(x, y);
        self.data[i] = color;
    }

    /// Copy of the interior as a row-major vector.
    pub fn interior(&self) -> Vec<Pixel> {
        if self.pad == 0 {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.width as usize * self.height as usize);
        for y in 0..self.height {
            let start = self.index(0, y);
            out.extend_from_slice(&self.data[start..start + self.width as usize]);
        }
        out
    }

    /// Return a copy of the interior surrounded by `pad` replicated pixels.
    pub fn padded(&self, pad: u32) -> PixelGrid {
        let data = if self.pad == 0 {
            pad_pixels(&self.data, self.width, self.height, pad)
        } else {
            pad_pixels(&self.interior(), self.width, self.height, pad)
        };
        PixelGrid { width: self.width, height: self.height, pad, data }
    }

    /// Window over the padded buffer centred on interior pixel `(x, y)`.
    ///
    /// Reads may reach up to `pad` pixels away from the centre.
    #[inline]
    pub fn window(&self, x: u32, y: u32) -> Window<'_> {
        Window { data: &self.data, stride: self.stride() as isize, index: self.index(x, y), reach: self.pad as i32 }
    }

    /// Clamp-to-edge window centred on interior pixel `(x, y)`.
    #[inline]
    pub fn clamped_window(&self, x: u32, y: u32) -> ClampedWindow<'_> {
        ClampedWindow { grid: self, x: x as i64, y: y as i64 }
    }
}

/// Surround a row-major `width x height` image with `pad` replicated pixels.
///
/// The interior is copied verbatim, edge rows and columns are repeated
/// outward, and each corner block takes the nearest interior corner pixel.
/// A degenerate image (zero width or height) yields a zero-filled buffer.
///
/// # Panics
///
/// Panics if `image.len() != width * height`.
pub fn pad_pixels(image: &[Pixel], width: u32, height: u32, pad: u32) -> Vec<Pixel> {
    assert_eq!(image.len(), width as usize * height as usize, "image does not match {}x{}", width, height);

    let full_w = (width + 2 * pad) as usize;
    let full_h = (height + 2 * pad) as usize;
    if width == 0 || height == 0 {
        return vec![0; full_w * full_h];
    }

    let mut out = Vec::with_capacity(full_w * full_h);
    for sy in 0..full_h {
        let y = (sy as i64 - pad as i64).clamp(0, height as i64 - 1) as usize;
        let row = &image[y * width as usize..(y + 1) * width as usize];
        out.extend(std::iter::repeat(row[0]).take(pad as usize));
        out.extend_from_slice(row);
        out.extend(std::iter::repeat(row[width as usize - 1]).take(pad as usize));
    }
    out
}

/// Compass-named access to the pixels around a centre pixel.
///
/// Implementors provide [`Neighborhood::at`]; offsets are `(dx, dy)` with
/// `dy` growing downward.
pub trait Neighborhood {
    /// Pixel at offset `(dx, dy)` from the centre.
    fn at(&self, dx: i32, dy: i32) -> Pixel;

    #[inline]
    fn center(&self) -> Pixel {
        self.at(0, 0)
    }
    #[inline]
    fn north(&self) -> Pixel {
        self.at(0, -1)
    }
    #[inline]
    fn south(&self) -> Pixel {
        self.at(0, 1)
    }
    #[inline]
    fn west(&self) -> Pixel {
        self.at(-1, 0)
    }
    #[inline]
    fn east(&self) -> Pixel {
        self.at(1, 0)
    }
    #[inline]
    fn north_west(&self) -> Pixel {
        self.at(-1, -1)
    }
    #[inline]
    fn north_east(&self) -> Pixel {
        self.at(1, -1)
    }
    #[inline]
    fn south_west(&self) -> Pixel {
        self.at(-1, 1)
    }
    #[inline]
    fn south_east(&self) -> Pixel {
        self.at(1, 1)
    }
    #[inline]
    fn north2(&self) -> Pixel {
        self.at(0, -2)
    }
    #[inline]
    fn south2(&self) -> Pixel {
        self.at(0, 2)
    }
    #[inline]
    fn west2(&self) -> Pixel {
        self.at(-2, 0)
    }
    #[inline]
    fn east2(&self) -> Pixel {
        self.at(2, 0)
    }

    /// The 3x3 block in row-major order, centre at index 4.
    fn square3(&self) -> [Pixel; 9] {
        [
            self.north_west(),
            self.north(),
            self.north_east(),
            self.west(),
            self.center(),
            self.east(),
            self.south_west(),
            self.south(),
            self.south_east(),
        ]
    }
}

/// Unchecked-offset view into a padded buffer.
///
/// Offsets beyond the grid's padding trip a debug assertion; in release
/// builds they still land inside the stored buffer or panic on the slice
/// index, never in foreign memory.
#[derive(Debug, Clone, Copy)]
pub struct Window<'a> {
    data: &'a [Pixel],
    stride: isize,
    index: usize,
    reach: i32,
}

impl Neighborhood for Window<'_> {
    #[inline]
    fn at(&self, dx: i32, dy: i32) -> Pixel {
        debug_assert!(
            dx.abs() <= self.reach && dy.abs() <= self.reach,
            "offset ({}, {}) exceeds padding {}",
            dx,
            dy,
            self.reach
        );
        let offset = dy as isize * self.stride + dx as isize;
        self.data[(self.index as isize + offset) as usize]
    }
}

/// Clamp-to-edge view used by scalers that take unpadded input.
#[derive(Debug, Clone, Copy)]
pub struct ClampedWindow<'a> {
    grid: &'a PixelGrid,
    x: i64,
    y: i64,
}

impl Neighborhood for ClampedWindow<'_> {
    #[inline]
    fn at(&self, dx: i32, dy: i32) -> Pixel {
        self.grid.get_clamped(self.x + dx as i64, self.y + dy as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(width: u32, height: u32) -> PixelGrid {
        PixelGrid::from_fn(width, height, |x, y| 0xFF00_0000 | (y * 16 + x))
    }

    #[test]
    fn test_channel_helpers() {
        let p = argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(p, 0x1234_5678);
        assert_eq!(alpha(p), 0x12);
        assert_eq!(red(p), 0x34);
        assert_eq!(green(p), 0x56);
        assert_eq!(blue(p), 0x78);
    }

    #[test]
    fn test_from_pixels_size_mismatch() {
        let err = PixelGrid::from_pixels(2, 2, vec![0; 3]).unwrap_err();
        assert_eq!(err, GridError::SizeMismatch { width: 2, height: 2, expected: 4, found: 3 });
    }

    #[test]
    fn test_pad_2x2_by_1() {
        // a b
        // c d
        let (a, b, c, d) = (0xFF00_0001, 0xFF00_0002, 0xFF00_0003, 0xFF00_0004);
        let padded = pad_pixels(&[a, b, c, d], 2, 2, 1);

        #[rustfmt::skip]
        let expected = vec![
            a, a, b, b,
            a, a, b, b,
            c, c, d, d,
            c, c, d, d,
        ];
        assert_eq!(padded, expected);
    }

    #[test]
    fn test_pad_every_border_pixel_is_nearest_interior() {
        let grid = numbered(3, 2);
        let padded = grid.padded(2);
        assert_eq!(padded.stride(), 7);
        assert_eq!(padded.data().len(), 7 * 6);

        for sy in 0..6i64 {
            for sx in 0..7i64 {
                let stored = padded.data()[sy as usize * 7 + sx as usize];
                assert_eq!(stored, grid.get_clamped(sx - 2, sy - 2), "stored ({}, {})", sx, sy);
            }
        }
    }

    #[test]
    fn test_padded_keeps_interior() {
        let grid = numbered(4, 3);
        let padded = grid.padded(1);
        assert_eq!(padded.width(), 4);
        assert_eq!(padded.height(), 3);
        assert_eq!(padded.interior(), grid.interior());
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(padded.get(x, y), grid.get(x, y));
            }
        }
    }

    #[test]
    fn test_repad_uses_interior() {
        let grid = numbered(2, 2);
        assert_eq!(grid.padded(1).padded(2), grid.padded(2));
    }

    #[test]
    fn test_pad_degenerate_image() {
        assert_eq!(pad_pixels(&[], 0, 3, 1), vec![0; 2 * 5]);
    }

    #[test]
    fn test_window_matches_clamped_window_on_padded_grid() {
        let grid = numbered(3, 3);
        let padded = grid.padded(2);
        for y in 0..3 {
            for x in 0..3 {
                let w = padded.window(x, y);
                let c = grid.clamped_window(x, y);
                for dy in -2..=2 {
                    for dx in -2..=2 {
                        assert_eq!(w.at(dx, dy), c.at(dx, dy));
                    }
                }
            }
        }
    }

    #[test]
    fn test_named_accessors() {
        let grid = numbered(5, 5);
        let n = grid.clamped_window(2, 2);
        assert_eq!(n.center(), grid.get(2, 2));
        assert_eq!(n.north(), grid.get(2, 1));
        assert_eq!(n.south(), grid.get(2, 3));
        assert_eq!(n.west(), grid.get(1, 2));
        assert_eq!(n.east(), grid.get(3, 2));
        assert_eq!(n.north_west(), grid.get(1, 1));
        assert_eq!(n.south_east(), grid.get(3, 3));
        assert_eq!(n.north2(), grid.get(2, 0));
        assert_eq!(n.east2(), grid.get(4, 2));
        assert_eq!(n.square3()[4], n.center());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "exceeds padding")]
    fn test_window_rejects_reads_past_padding() {
        let padded = numbered(3, 3).padded(1);
        padded.window(0, 0).west2();
    }

    #[test]
    fn test_rgba_round_trip_keeps_alpha() {
        let grid = PixelGrid::from_pixels(2, 1, vec![0x80FF_0000, 0x0000_FF00]).unwrap();
        let image = grid.to_rgba_image();
        assert_eq!(*image.get_pixel(0, 0), Rgba([255, 0, 0, 128]));
        assert_eq!(PixelGrid::from_rgba_image(&image), grid);
    }
}
