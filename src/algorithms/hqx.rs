//! HQ2x and HQ3x pattern-table interpolation.
//!
//! HQx works in two stages for every input pixel:
//! 1. Classify each of the 8 neighbours of a 3x3 window as "same" or
//!    "different" from the centre, using thresholds on a luma/chroma/alpha
//!    projection of the colours. This gives an 8-bit pattern.
//! 2. Look the pattern up in a table that gives, per output sub-pixel, which
//!    colours to blend and with which integer weights.
//!
//! # Neighbourhood
//!
//! ```text
//!   0 1 2
//!   3 4 5      4 is the centre; pattern bit k is neighbour k,
//!   6 7 8      counting left to right and skipping the centre
//! ```
//!
//! # Variants
//!
//! The A and B variants share the blend tables and differ only in the
//! difference predicate: [`is_different_a`] treats any channel over its
//! threshold as a difference, [`is_different_b`] lets small chroma drift
//! through unless both chroma channels move.
//!
//! The blend tables follow the classic hq2x/hq3x case lists.
//! Some slots carry a second comparison between two orthogonal neighbours
//! made at run time; the slot then holds one blend for each outcome.
//!
//! Out-of-range neighbours are clamped to the nearest edge pixel, so the
//! input needs no padding.

use super::{check_contract, expand};
use crate::grid::{alpha, blue, green, red, Neighborhood, Pixel, PixelGrid};
use crate::mix::{mix2, mix3};

mod tables;

const THRESHOLD_Y: i32 = 0x30;
const THRESHOLD_U: i32 = 0x07;
const THRESHOLD_V: i32 = 0x06;
const THRESHOLD_A: i32 = 0x50;

/// Neighbour id of the centre pixel.
const C: u8 = 4;

/// Comparison-only projection of a colour: `(alpha, Y, U, V)`.
fn ayuv(p: Pixel) -> (i32, i32, i32, i32) {
    let (r, g, b) = (red(p) as f64, green(p) as f64, blue(p) as f64);
    let y = (0.299 * r + 0.587 * g + 0.114 * b) as i32;
    let u = (-0.169 * r - 0.331 * g + 0.5 * b) as i32 + 128;
    let v = (0.5 * r - 0.419 * g - 0.081 * b) as i32 + 128;
    (alpha(p) as i32, y, u, v)
}

/// Which of the four channel tests fire: `(alpha, Y, U, V)`.
fn channel_tests(c1: Pixel, c2: Pixel) -> (bool, bool, bool, bool) {
    let (a1, y1, u1, v1) = ayuv(c1);
    let (a2, y2, u2, v2) = ayuv(c2);
    (
        (a1 - a2).abs() > THRESHOLD_A,
        (y1 - y2).abs() > THRESHOLD_Y,
        (u1 - u2).abs() > THRESHOLD_U,
        (v1 - v2).abs() > THRESHOLD_V,
    )
}

/// Strict difference: any channel beyond its threshold.
pub fn is_different_a(c1: Pixel, c2: Pixel) -> bool {
    if c1 == c2 {
        return false;
    }
    let (ta, ty, tu, tv) = channel_tests(c1, c2);
    ta || ty || tu || tv
}

/// Luma-led difference: alpha or luma beyond threshold, or both chroma
/// channels at once.
pub fn is_different_b(c1: Pixel, c2: Pixel) -> bool {
    if c1 == c2 {
        return false;
    }
    let (ta, ty, tu, tv) = channel_tests(c1, c2);
    ta || ty || (tu && tv)
}

/// HQ2x with [`is_different_a`].
///
/// # Panics
///
/// Panics if `out` does not hold `2w * 2h` pixels.
pub fn hq2x_a(input: &PixelGrid, out: &mut [Pixel]) {
    hq2x(input, out, is_different_a);
}

/// HQ2x with [`is_different_b`].
///
/// # Panics
///
/// Panics if `out` does not hold `2w * 2h` pixels.
pub fn hq2x_b(input: &PixelGrid, out: &mut [Pixel]) {
    hq2x(input, out, is_different_b);
}

/// HQ3x with [`is_different_a`].
///
/// # Panics
///
/// Panics if `out` does not hold `3w * 3h` pixels.
pub fn hq3x_a(input: &PixelGrid, out: &mut [Pixel]) {
    hq3x(input, out, is_different_a);
}

/// HQ3x with [`is_different_b`].
///
/// # Panics
///
/// Panics if `out` does not hold `3w * 3h` pixels.
pub fn hq3x_b(input: &PixelGrid, out: &mut [Pixel]) {
    hq3x(input, out, is_different_b);
}

type Predicate = fn(Pixel, Pixel) -> bool;

fn hq2x(input: &PixelGrid, out: &mut [Pixel], is_different: Predicate) {
    check_contract(input, out, 2, 0);
    expand::<2, _>(input.width(), input.height(), out, |x, y| {
        let w = input.clamped_window(x, y).square3();
        let slots = &HQ2X_TABLE[pattern(&w, is_different) as usize];
        let px = |i: usize| slots[i].resolve(&w, is_different);
        [[px(0), px(1)], [px(2), px(3)]]
    });
}

fn hq3x(input: &PixelGrid, out: &mut [Pixel], is_different: Predicate) {
    check_contract(input, out, 3, 0);
    expand::<3, _>(input.width(), input.height(), out, |x, y| {
        let w = input.clamped_window(x, y).square3();
        let slots = &HQ3X_TABLE[pattern(&w, is_different) as usize];
        let px = |i: usize| slots[i].resolve(&w, is_different);
        [[px(0), px(1), px(2)], [px(3), px(4), px(5)], [px(6), px(7), px(8)]]
    });
}

/// Difference pattern of a 3x3 window: bit k set when neighbour k differs
/// from the centre.
fn pattern(w: &[Pixel; 9], is_different: Predicate) -> u8 {
    let mut bits = 0u8;
    let mut k = 0;
    for (id, &p) in w.iter().enumerate() {
        if id == C as usize {
            continue;
        }
        if is_different(w[C as usize], p) {
            bits |= 1 << k;
        }
        k += 1;
    }
    bits
}

/// A weighted blend of window pixels, by neighbour id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Blend {
    Center,
    Mix2 { a: u8, b: u8, wa: u8, wb: u8 },
    Mix3 { a: u8, b: u8, c: u8, wa: u8, wb: u8, wc: u8 },
}

impl Blend {
    fn apply(&self, w: &[Pixel; 9]) -> Pixel {
        match *self {
            Blend::Center => w[C as usize],
            Blend::Mix2 { a, b, wa, wb } => mix2(w[a as usize], w[b as usize], wa as u32, wb as u32),
            Blend::Mix3 { a, b, c, wa, wb, wc } => {
                mix3(w[a as usize], w[b as usize], w[c as usize], wa as u32, wb as u32, wc as u32)
            }
        }
    }
}

const fn m2(a: u8, b: u8, wa: u8, wb: u8) -> Blend {
    Blend::Mix2 { a, b, wa, wb }
}

const fn m3(a: u8, b: u8, c: u8, wa: u8, wb: u8, wc: u8) -> Blend {
    Blend::Mix3 { a, b, c, wa, wb, wc }
}

/// One output sub-pixel of a pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Slot {
    /// Neighbours compared at run time. Without a test, `same` is used.
    test: Option<(u8, u8)>,
    same: Blend,
    different: Blend,
}

impl Slot {
    const fn fixed(blend: Blend) -> Slot {
        Slot { test: None, same: blend, different: blend }
    }

    const fn tested(p: u8, q: u8, same: Blend, different: Blend) -> Slot {
        Slot { test: Some((p, q)), same, different }
    }

    #[inline]
    fn resolve(&self, w: &[Pixel; 9], is_different: Predicate) -> Pixel {
        let blend = match self.test {
            Some((p, q)) if is_different(w[p as usize], w[q as usize]) => self.different,
            _ => self.same,
        };
        blend.apply(w)
    }
}

static HQ2X_TABLE: [[Slot; 4]; 256] = tables::index(tables::HQ2X_CASES);
static HQ3X_TABLE: [[Slot; 9]; 256] = tables::index(tables::HQ3X_CASES);
