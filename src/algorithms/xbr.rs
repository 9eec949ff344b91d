//! Super-xBR 2x (Hyllian, 2016).
//!
//! Super-xBR doubles the image in three passes, each scoring edge directions
//! over a 4x4 luma window and interpolating along the cheaper one:
//!
//! 1. Every input pixel fills three slots of its 2x2 output block; the
//!    bottom-right slot is interpolated across the diagonal with the lower
//!    edge cost.
//! 2. The two remaining slots of each block are interpolated from a window
//!    rotated by 45 degrees over the pass-1 buffer.
//! 3. Every output pixel is re-filtered with a horizontal/vertical edge test.
//!
//! Every interpolated channel is clamped to the range of the four central
//! samples, which keeps the negative lobe of the filter from ringing.
//!
//! Each pass reads only the buffer produced by the previous one, so pixels
//! within a pass are independent and rows are computed in parallel.

use super::{check_contract, expand};
use crate::grid::{alpha, argb, blue, green, red, Pixel, PixelGrid};
use rayon::prelude::*;

const WGT1: f32 = 0.129_633;
const WGT2: f32 = 0.175_068;
const W1: f32 = -WGT1;
const W2: f32 = WGT1 + 0.5;
const W3: f32 = -WGT2;
const W4: f32 = WGT2 + 0.5;

/// Edge-cost weights for the diagonal and cross tests.
const WP_FULL: [f32; 6] = [2.0, 1.0, -1.0, 4.0, -1.0, 1.0];
const WP_AXIS: [f32; 6] = [2.0, 0.0, 0.0, 0.0, 0.0, 0.0];

/// A 4x4 window indexed `[x][y]`.
type Mat = [[f32; 4]; 4];

/// The sample pairs one blend reads: `outer` gets the small (negative)
/// weight, `inner` the large one.
struct Taps {
    outer: [(usize, usize); 2],
    inner: [(usize, usize); 2],
}

const DIAG_RISING: Taps = Taps { outer: [(0, 3), (3, 0)], inner: [(1, 2), (2, 1)] };
const DIAG_FALLING: Taps = Taps { outer: [(0, 0), (3, 3)], inner: [(1, 1), (2, 2)] };
const CROSS_HORIZONTAL: Taps = Taps { outer: [(0, 1), (3, 1)], inner: [(1, 1), (2, 1)] };
const CROSS_VERTICAL: Taps = Taps { outer: [(1, 0), (1, 3)], inner: [(1, 1), (1, 2)] };

/// Scale by two with Super-xBR. Takes unpadded input.
///
/// # Panics
///
/// Panics if `out` does not hold `2w * 2h` pixels.
pub fn super_xbr(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 2, 0);
    let (width, height) = (input.width(), input.height());
    if width == 0 || height == 0 {
        return;
    }
    let plane = Plane { width: width as usize * 2, height: height as usize * 2 };

    let mut first = vec![0; out.len()];
    expand::<2, _>(width, height, &mut first, |x, y| {
        let s = Samples::gather(|i, j| input.get_clamped(x as i64 + i - 1, y as i64 + j - 1));
        let e = input.get(x, y);
        let d = s.blend(diagonal_edge(&s.luma, &WP_FULL), &DIAG_RISING, &DIAG_FALLING, W1, W2);
        [[e, e], [e, d]]
    });
    tracing::trace!(width, height, "super-xbr diagonal pass done");

    let mut second = vec![0; out.len()];
    expand::<2, _>(width, height, &mut second, |bx, by| {
        let (x, y) = (bx as i64 * 2, by as i64 * 2);
        let right = Samples::gather(|i, j| {
            let (sx, sy) = (i - 1, j - 1);
            plane.get(&first, sx + sy + x, sx - sy + y)
        });
        let below = Samples::gather(|i, j| {
            let (sx, sy) = (i - 1, j - 1);
            plane.get(&first, sx + sy - 1 + x, sx - sy + 1 + y)
        });
        let right = right.blend(diagonal_edge(&right.luma, &WP_AXIS), &DIAG_RISING, &DIAG_FALLING, W3, W4);
        let below = below.blend(diagonal_edge(&below.luma, &WP_AXIS), &DIAG_RISING, &DIAG_FALLING, W3, W4);
        [[plane.get(&first, x, y), right], [below, plane.get(&first, x + 1, y + 1)]]
    });
    tracing::trace!(width, height, "super-xbr rotated pass done");

    out.par_chunks_mut(plane.width).enumerate().for_each(|(y, row)| {
        for (x, p) in row.iter_mut().enumerate() {
            let s = Samples::gather(|i, j| plane.get(&second, x as i64 + i - 2, y as i64 + j - 2));
            *p = s.blend(cross_edge(&s.luma, &WP_FULL), &CROSS_HORIZONTAL, &CROSS_VERTICAL, W3, W4);
        }
    });
}

/// Dimensions of an intermediate output buffer.
#[derive(Clone, Copy)]
struct Plane {
    width: usize,
    height: usize,
}

impl Plane {
    #[inline]
    fn get(&self, buf: &[Pixel], x: i64, y: i64) -> Pixel {
        let x = x.clamp(0, self.width as i64 - 1) as usize;
        let y = y.clamp(0, self.height as i64 - 1) as usize;
        buf[y * self.width + x]
    }
}

/// Per-channel 4x4 windows plus the matching luma window.
struct Samples {
    /// Alpha, red, green, blue.
    channels: [Mat; 4],
    luma: Mat,
}

impl Samples {
    /// Sample `at(i, j)` for `i, j` in `0..4`.
    fn gather(at: impl Fn(i64, i64) -> Pixel) -> Samples {
        let mut s = Samples { channels: [[[0.0; 4]; 4]; 4], luma: [[0.0; 4]; 4] };
        for i in 0..4 {
            for j in 0..4 {
                let p = at(i as i64, j as i64);
                let (r, g, b) = (red(p) as f32, green(p) as f32, blue(p) as f32);
                s.channels[0][i][j] = alpha(p) as f32;
                s.channels[1][i][j] = r;
                s.channels[2][i][j] = g;
                s.channels[3][i][j] = b;
                s.luma[i][j] = 0.2126 * r + 0.7152 * g + 0.0722 * b;
            }
        }
        s
    }

    /// Interpolate with `first` when `edge <= 0`, else with `second`.
    fn blend(&self, edge: f32, first: &Taps, second: &Taps, w_outer: f32, w_inner: f32) -> Pixel {
        let taps = if edge <= 0.0 { first } else { second };
        let mut c = [0u8; 4];
        for (k, m) in self.channels.iter().enumerate() {
            let at = |(i, j): (usize, usize)| m[i][j];
            let v = w_outer * (at(taps.outer[0]) + at(taps.outer[1])) + w_inner * (at(taps.inner[0]) + at(taps.inner[1]));
            let lo = m[1][1].min(m[2][1]).min(m[1][2]).min(m[2][2]);
            let hi = m[1][1].max(m[2][1]).max(m[1][2]).max(m[2][2]);
            c[k] = (v.clamp(lo, hi).ceil() as i32).clamp(0, 255) as u8;
        }
        argb(c[0], c[1], c[2], c[3])
    }
}

#[inline]
fn df(a: f32, b: f32) -> f32 {
    (a - b).abs()
}

/// Edge cost along the rising diagonal minus the cost along the falling one.
fn diagonal_edge(m: &Mat, wp: &[f32; 6]) -> f32 {
    let dw1 = wp[0] * (df(m[0][2], m[1][1]) + df(m[1][1], m[2][0]) + df(m[1][3], m[2][2]) + df(m[2][2], m[3][1]))
        + wp[1] * (df(m[0][3], m[1][2]) + df(m[2][1], m[3][0]))
        + wp[2] * (df(m[0][3], m[2][1]) + df(m[1][2], m[3][0]))
        + wp[3] * df(m[1][2], m[2][1])
        + wp[4] * (df(m[0][2], m[2][0]) + df(m[1][3], m[3][1]))
        + wp[5] * (df(m[0][1], m[1][0]) + df(m[2][3], m[3][2]));

    let dw2 = wp[0] * (df(m[0][1], m[1][2]) + df(m[1][2], m[2][3]) + df(m[1][0], m[2][1]) + df(m[2][1], m[3][2]))
        + wp[1] * (df(m[0][0], m[1][1]) + df(m[2][2], m[3][3]))
        + wp[2] * (df(m[0][0], m[2][2]) + df(m[1][1], m[3][3]))
        + wp[3] * df(m[1][1], m[2][2])
        + wp[4] * (df(m[1][0], m[3][2]) + df(m[0][1], m[2][3]))
        + wp[5] * (df(m[0][2], m[1][3]) + df(m[2][0], m[3][1]));

    dw1 - dw2
}

/// Horizontal gradient cost minus vertical gradient cost.
fn cross_edge(m: &Mat, wp: &[f32; 6]) -> f32 {
    let hvw1 = wp[3] * (df(m[1][1], m[2][1]) + df(m[1][2], m[2][2]))
        + wp[0] * (df(m[0][1], m[1][1]) + df(m[2][1], m[3][1]) + df(m[0][2], m[1][2]) + df(m[2][2], m[3][2]))
        + wp[2] * (df(m[0][1], m[2][1]) + df(m[1][1], m[3][1]) + df(m[0][2], m[2][2]) + df(m[1][2], m[3][2]));

    let hvw2 = wp[3] * (df(m[1][1], m[1][2]) + df(m[2][1], m[2][2]))
        + wp[0] * (df(m[1][0], m[1][1]) + df(m[2][0], m[2][1]) + df(m[1][2], m[1][3]) + df(m[2][2], m[2][3]))
        + wp[2] * (df(m[1][0], m[1][2]) + df(m[1][1], m[1][3]) + df(m[2][0], m[2][2]) + df(m[2][1], m[2][3]));

    hvw1 - hvw2
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(grid: &PixelGrid) -> Vec<Pixel> {
        let mut out = vec![0; grid.width() as usize * grid.height() as usize * 4];
        super_xbr(grid, &mut out);
        out
    }

    fn columns(split: usize) -> Mat {
        let mut m = [[0.0; 4]; 4];
        for (x, col) in m.iter_mut().enumerate() {
            if x >= split {
                *col = [100.0; 4];
            }
        }
        m
    }

    #[test]
    fn test_edge_costs_vanish_on_flat_window() {
        let m = [[42.0; 4]; 4];
        assert_eq!(diagonal_edge(&m, &WP_FULL), 0.0);
        assert_eq!(cross_edge(&m, &WP_FULL), 0.0);
    }

    #[test]
    fn test_cross_edge_sign_follows_gradient() {
        // Values change along x: horizontal cost dominates.
        assert_eq!(cross_edge(&columns(2), &WP_FULL), 400.0);

        let mut rows = [[0.0; 4]; 4];
        for col in rows.iter_mut() {
            col[2] = 100.0;
            col[3] = 100.0;
        }
        assert_eq!(cross_edge(&rows, &WP_FULL), -400.0);
    }

    #[test]
    fn test_blend_clamps_to_central_samples() {
        // An outlier in the outer ring cannot push the result past the
        // central samples.
        let s = Samples::gather(|i, j| if (i, j) == (0, 3) { 0xFFFF_FFFF } else { 0xFF80_8080 });
        assert_eq!(s.blend(-1.0, &DIAG_RISING, &DIAG_FALLING, W1, W2), 0xFF80_8080);
    }

    #[test]
    fn test_solid_color() {
        let grid = PixelGrid::filled(4, 3, 0xFF33_6699);
        assert!(run(&grid).iter().all(|&p| p == 0xFF33_6699));
    }

    #[test]
    fn test_single_pixel() {
        let grid = PixelGrid::filled(1, 1, 0x80AB_CDEF);
        assert_eq!(run(&grid), vec![0x80AB_CDEF; 4]);
    }

    #[test]
    fn test_staircase_reference_output() {
        // Black top-left triangle cut along the anti-diagonal.
        let (k, w) = (0xFF00_0000, 0xFFFF_FFFF);
        let grid = PixelGrid::from_fn(3, 3, |x, y| if x + y < 2 { k } else { w });
        let (a, b, c, d) = (0xFF80_8080, 0xFF2A_2A2A, 0xFFC0_C0C0, 0xFFD6_D6D6);
        #[rustfmt::skip]
        let expected = vec![
            k, k, k, k, a, w,
            k, k, k, b, c, w,
            k, k, b, d, w, w,
            k, b, d, w, w, w,
            a, c, w, w, w, w,
            w, w, w, w, w, w,
        ];
        assert_eq!(run(&grid), expected);
    }

    #[test]
    fn test_black_and_white_stays_grey() {
        // Equal channel windows give equal channel results, so a
        // monochrome image scales to shades of grey with opaque alpha.
        let grid = PixelGrid::from_fn(5, 5, |x, y| if x + y < 5 { 0xFF00_0000 } else { 0xFFFF_FFFF });
        for p in run(&grid) {
            assert_eq!(alpha(p), 0xFF);
            assert_eq!(red(p), green(p));
            assert_eq!(green(p), blue(p));
        }
    }

    #[test]
    fn test_empty_input() {
        let grid = PixelGrid::new(3, 0);
        assert!(run(&grid).is_empty());
    }
}
