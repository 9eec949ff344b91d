//! Pixel art scaling algorithms.
//!
//! Every scaler maps a [`PixelGrid`] to an unpadded output buffer of
//! `(width * factor) x (height * factor)` pixels. Scalers are total: given a
//! correctly sized output slice and an input with the padding listed below,
//! they never fail.
//!
//! # Available Algorithms
//!
//! | Algorithm | Factor | Pad | Module |
//! |-----------|--------|-----|--------|
//! | `copy` | 1 | 0 | [`block`] |
//! | `block2` | 2 | 0 | [`block`] |
//! | `block3` | 3 | 0 | [`block`] |
//! | `scale2x` | 2 | 0 | [`scale2x`] |
//! | `scale2xPad` | 2 | 1 | [`scale2x`] |
//! | `scale2xSFX` | 2 | 2 | [`scale2x`] |
//! | `scale3x` | 3 | 1 | [`scale3x`] |
//! | `scale3xSFX` | 3 | 2 | [`scale3x`] |
//! | `hq2xA` / `hq2xB` | 2 | 0 | [`hqx`] |
//! | `hq3xA` / `hq3xB` | 3 | 0 | [`hqx`] |
//! | `superXBR` | 2 | 0 | [`xbr`] |
//!
//! Rows of output are computed in parallel on the current rayon pool.

pub mod block;
pub mod hqx;
pub mod scale2x;
pub mod scale3x;
pub mod xbr;

pub use block::{block2, block3, copy};
pub use hqx::{hq2x_a, hq2x_b, hq3x_a, hq3x_b};
pub use scale2x::{scale2x, scale2x_pad, scale2x_sfx};
pub use scale3x::{scale3x_pad, scale3x_sfx};
pub use xbr::super_xbr;

use crate::grid::{Pixel, PixelGrid};
use image::RgbaImage;
use rayon::prelude::*;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error raised when selecting or invoking an algorithm
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlgorithmError {
    /// No algorithm has this name
    #[error("unknown algorithm '{name}' (expected one of: {})", Algorithm::names().join(", "))]
    Unknown { name: String },
    /// The input grid lacks the border the algorithm reads
    #[error("{algorithm} needs {required} pixel(s) of padding, input has {found}")]
    InsufficientPadding { algorithm: Algorithm, required: u32, found: u32 },
}

/// A scaling algorithm, selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Verbatim copy (factor 1)
    Copy,
    /// Each pixel becomes a 2x2 block
    Block2,
    /// Each pixel becomes a 3x3 block
    Block3,
    /// Scale2x with inline edge clamping
    Scale2x,
    /// Scale2x reading a 1-pixel border
    Scale2xPad,
    /// Sp00kyFox's Scale2x refinement
    Scale2xSfx,
    /// Scale3x reading a 1-pixel border
    Scale3x,
    /// Sp00kyFox's Scale3x refinement
    Scale3xSfx,
    /// HQ2x with the strict difference test
    Hq2xA,
    /// HQ2x with the luma-led difference test
    Hq2xB,
    /// HQ3x with the strict difference test
    Hq3xA,
    /// HQ3x with the luma-led difference test
    Hq3xB,
    /// Hyllian's three-pass Super-xBR
    SuperXbr,
}

impl Algorithm {
    /// Every algorithm, in the order `pxscale list` prints them.
    pub const ALL: [Algorithm; 13] = [
        Algorithm::Copy,
        Algorithm::Block2,
        Algorithm::Block3,
        Algorithm::Scale2x,
        Algorithm::Scale2xPad,
        Algorithm::Scale2xSfx,
        Algorithm::Scale3x,
        Algorithm::Scale3xSfx,
        Algorithm::Hq2xA,
        Algorithm::Hq2xB,
        Algorithm::Hq3xA,
        Algorithm::Hq3xB,
        Algorithm::SuperXbr,
    ];

    /// Canonical name, as accepted on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Copy => "copy",
            Algorithm::Block2 => "block2",
            Algorithm::Block3 => "block3",
            Algorithm::Scale2x => "scale2x",
            Algorithm::Scale2xPad => "scale2xPad",
            Algorithm::Scale2xSfx => "scale2xSFX",
            Algorithm::Scale3x => "scale3x",
            Algorithm::Scale3xSfx => "scale3xSFX",
            Algorithm::Hq2xA => "hq2xA",
            Algorithm::Hq2xB => "hq2xB",
            Algorithm::Hq3xA => "hq3xA",
            Algorithm::Hq3xB => "hq3xB",
            Algorithm::SuperXbr => "superXBR",
        }
    }

    /// Canonical names of all algorithms.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Algorithm::name).collect()
    }

    /// Look an algorithm up by name.
    ///
    /// Canonical names match exactly; `scale3xPad` is an alias of `scale3x`.
    /// Failing an exact match, names are compared ignoring ASCII case.
    ///
    /// # Examples
    ///
    /// ```
    /// use pixelscale::algorithms::Algorithm;
    ///
    /// assert_eq!(Algorithm::from_name("hq3xB").unwrap(), Algorithm::Hq3xB);
    /// assert_eq!(Algorithm::from_name("scale3xPad").unwrap(), Algorithm::Scale3x);
    /// assert!(Algorithm::from_name("bilinear").is_err());
    /// ```
    pub fn from_name(name: &str) -> Result<Algorithm, AlgorithmError> {
        if name == "scale3xPad" {
            return Ok(Algorithm::Scale3x);
        }
        if let Some(a) = Self::ALL.iter().find(|a| a.name() == name) {
            return Ok(*a);
        }
        if name.eq_ignore_ascii_case("scale3xPad") {
            return Ok(Algorithm::Scale3x);
        }
        Self::ALL
            .iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
            .copied()
            .ok_or_else(|| AlgorithmError::Unknown { name: name.to_string() })
    }

    /// Output pixels per input pixel along each axis.
    pub fn factor(&self) -> u32 {
        match self {
            Algorithm::Copy => 1,
            Algorithm::Block2
            | Algorithm::Scale2x
            | Algorithm::Scale2xPad
            | Algorithm::Scale2xSfx
            | Algorithm::Hq2xA
            | Algorithm::Hq2xB
            | Algorithm::SuperXbr => 2,
            Algorithm::Block3
            | Algorithm::Scale3x
            | Algorithm::Scale3xSfx
            | Algorithm::Hq3xA
            | Algorithm::Hq3xB => 3,
        }
    }

    /// Border the input grid must carry on every side.
    pub fn padding(&self) -> u32 {
        match self {
            Algorithm::Scale2xPad | Algorithm::Scale3x => 1,
            Algorithm::Scale2xSfx | Algorithm::Scale3xSfx => 2,
            _ => 0,
        }
    }

    /// Number of output pixels produced for `input`.
    pub fn output_len(&self, input: &PixelGrid) -> usize {
        let f = self.factor() as usize;
        input.width() as usize * f * input.height() as usize * f
    }

    /// Run the algorithm into a caller-owned output slice.
    ///
    /// # Panics
    ///
    /// Panics if `out` is not [`Algorithm::output_len`] long or the input has
    /// less than [`Algorithm::padding`] pixels of border.
    pub fn run(&self, input: &PixelGrid, out: &mut [Pixel]) {
        match self {
            Algorithm::Copy => copy(input, out),
            Algorithm::Block2 => block2(input, out),
            Algorithm::Block3 => block3(input, out),
            Algorithm::Scale2x => scale2x(input, out),
            Algorithm::Scale2xPad => scale2x_pad(input, out),
            Algorithm::Scale2xSfx => scale2x_sfx(input, out),
            Algorithm::Scale3x => scale3x_pad(input, out),
            Algorithm::Scale3xSfx => scale3x_sfx(input, out),
            Algorithm::Hq2xA => hq2x_a(input, out),
            Algorithm::Hq2xB => hq2x_b(input, out),
            Algorithm::Hq3xA => hq3x_a(input, out),
            Algorithm::Hq3xB => hq3x_b(input, out),
            Algorithm::SuperXbr => super_xbr(input, out),
        }
    }

    /// Scale a grid that already carries the required padding.
    pub fn scale(&self, input: &PixelGrid) -> Result<PixelGrid, AlgorithmError> {
        if input.pad() < self.padding() {
            return Err(AlgorithmError::InsufficientPadding {
                algorithm: *self,
                required: self.padding(),
                found: input.pad(),
            });
        }

        tracing::debug!(
            algorithm = self.name(),
            width = input.width(),
            height = input.height(),
            factor = self.factor(),
            "scaling"
        );

        let mut out = vec![0; self.output_len(input)];
        self.run(input, &mut out);
        let f = self.factor();
        Ok(PixelGrid::from_sized(input.width() * f, input.height() * f, out))
    }

    /// Scale an RGBA image, padding it as the algorithm requires.
    pub fn scale_image(&self, image: &RgbaImage) -> RgbaImage {
        let grid = PixelGrid::from_rgba_image(image).padded(self.padding());
        match self.scale(&grid) {
            Ok(scaled) => scaled.to_rgba_image(),
            Err(e) => unreachable!("padding was supplied: {}", e),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = AlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_name(s)
    }
}

/// Check the caller's half of the scaler contract.
pub(crate) fn check_contract(input: &PixelGrid, out: &[Pixel], factor: u32, pad: u32) {
    assert!(input.pad() >= pad, "input needs {} pixel(s) of padding, has {}", pad, input.pad());
    let expected = (input.width() * factor) as usize * (input.height() * factor) as usize;
    assert_eq!(out.len(), expected, "output buffer must hold {} pixels", expected);
}

/// Fill `out` with one `N x N` block per source position.
///
/// `block(x, y)` returns the block for source pixel `(x, y)` as rows. Each
/// source row owns a disjoint band of `N` output rows, so bands are filled in
/// parallel.
pub(crate) fn expand<const N: usize, F>(width: u32, height: u32, out: &mut [Pixel], block: F)
where
    F: Fn(u32, u32) -> [[Pixel; N]; N] + Sync,
{
    let out_w = width as usize * N;
    debug_assert_eq!(out.len(), out_w * height as usize * N);
    if out_w == 0 || height == 0 {
        return;
    }

    out.par_chunks_mut(out_w * N).enumerate().for_each(|(y, band)| {
        for x in 0..width {
            let rows = block(x, y as u32);
            for (dy, row) in rows.iter().enumerate() {
                let start = dy * out_w + x as usize * N;
                band[start..start + N].copy_from_slice(row);
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_and_padding_table() {
        let table: Vec<(&str, u32, u32)> =
            Algorithm::ALL.iter().map(|a| (a.name(), a.factor(), a.padding())).collect();
        assert_eq!(
            table,
            vec![
                ("copy", 1, 0),
                ("block2", 2, 0),
                ("block3", 3, 0),
                ("scale2x", 2, 0),
                ("scale2xPad", 2, 1),
                ("scale2xSFX", 2, 2),
                ("scale3x", 3, 1),
                ("scale3xSFX", 3, 2),
                ("hq2xA", 2, 0),
                ("hq2xB", 2, 0),
                ("hq3xA", 3, 0),
                ("hq3xB", 3, 0),
                ("superXBR", 2, 0),
            ]
        );
    }

    #[test]
    fn test_from_name_round_trips() {
        for a in Algorithm::ALL {
            assert_eq!(Algorithm::from_name(a.name()), Ok(a));
            assert_eq!(a.to_string().parse::<Algorithm>(), Ok(a));
        }
    }

    #[test]
    fn test_from_name_aliases_and_case() {
        assert_eq!(Algorithm::from_name("scale3xPad"), Ok(Algorithm::Scale3x));
        assert_eq!(Algorithm::from_name("SCALE3XPAD"), Ok(Algorithm::Scale3x));
        assert_eq!(Algorithm::from_name("superxbr"), Ok(Algorithm::SuperXbr));
        assert_eq!(Algorithm::from_name("HQ2XA"), Ok(Algorithm::Hq2xA));
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Algorithm::from_name("lanczos").unwrap_err();
        assert_eq!(err, AlgorithmError::Unknown { name: "lanczos".to_string() });
        let message = err.to_string();
        assert!(message.contains("lanczos"));
        assert!(message.contains("scale2xSFX"));
    }

    #[test]
    fn test_scale_rejects_missing_padding() {
        let grid = PixelGrid::new(2, 2);
        let err = Algorithm::Scale3xSfx.scale(&grid).unwrap_err();
        assert_eq!(
            err,
            AlgorithmError::InsufficientPadding { algorithm: Algorithm::Scale3xSfx, required: 2, found: 0 }
        );
    }

    #[test]
    fn test_scale_output_dimensions() {
        for a in Algorithm::ALL {
            let grid = PixelGrid::filled(5, 3, 0xFF33_6699).padded(a.padding());
            let out = a.scale(&grid).unwrap();
            assert_eq!((out.width(), out.height()), (5 * a.factor(), 3 * a.factor()), "{}", a);
            assert_eq!(out.pad(), 0);
        }
    }

    #[test]
    fn test_scale_image_pads_for_the_caller() {
        let image = RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 255]));
        let out = Algorithm::Scale2xSfx.scale_image(&image);
        assert_eq!(out.dimensions(), (6, 4));
        assert!(out.pixels().all(|p| *p == image::Rgba([10, 20, 30, 255])));
    }

    #[test]
    fn test_expand_places_blocks() {
        let mut out = vec![0; 4 * 2];
        expand::<2, _>(2, 1, &mut out, |x, _| [[x, x + 10], [x + 20, x + 30]]);
        assert_eq!(out, vec![0, 10, 1, 11, 20, 30, 21, 31]);
    }

    #[test]
    #[should_panic(expected = "padding")]
    fn test_check_contract_padding() {
        check_contract(&PixelGrid::new(1, 1), &[0; 4], 2, 1);
    }

    #[test]
    #[should_panic(expected = "output buffer")]
    fn test_check_contract_output_len() {
        check_contract(&PixelGrid::new(1, 1), &[0; 3], 2, 0);
    }
}
