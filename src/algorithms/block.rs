//! Nearest-neighbour baselines.
//!
//! `copy` reproduces the input, `block2` and `block3` turn every input pixel
//! into a solid 2x2 or 3x3 block. They ignore neighbours entirely, which makes
//! them the reference the edge-aware scalers are compared against.

use super::{check_contract, expand};
use crate::grid::{Pixel, PixelGrid};

/// Copy the interior of `input` into `out` unchanged.
///
/// # Panics
///
/// Panics if `out` does not hold `width * height` pixels.
pub fn copy(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 1, 0);
    let width = input.width() as usize;
    if width == 0 {
        return;
    }
    for (y, row) in out.chunks_mut(width).enumerate() {
        for (x, p) in row.iter_mut().enumerate() {
            *p = input.get(x as u32, y as u32);
        }
    }
}

/// Replicate every pixel into a 2x2 block.
///
/// # Panics
///
/// Panics if `out` does not hold `2w * 2h` pixels.
pub fn block2(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 2, 0);
    expand::<2, _>(input.width(), input.height(), out, |x, y| [[input.get(x, y); 2]; 2]);
}

/// Replicate every pixel into a 3x3 block.
///
/// # Panics
///
/// Panics if `out` does not hold `3w * 3h` pixels.
pub fn block3(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 3, 0);
    expand::<3, _>(input.width(), input.height(), out, |x, y| [[input.get(x, y); 3]; 3]);
}
