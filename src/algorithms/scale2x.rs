//! Scale2x (AdvMAME2x) and Sp00kyFox's Scale2xSFX refinement.
//!
//! Scale2x expands each input pixel E into a 2x2 block using its four
//! orthogonal neighbours:
//! ```text
//!     B
//!   D E F
//!     H
//! ```
//!
//! When the block sits on a diagonal edge (`B != H` and `D != F`) each output
//! corner takes the matching neighbour if the two neighbours flanking that
//! corner agree:
//! ```text
//!   E0 = D == B ? D : E      E1 = B == F ? F : E
//!   E2 = D == H ? D : E      E3 = H == F ? F : E
//! ```
//! Otherwise all four outputs are E.
//!
//! `scale2x` clamps neighbour coordinates at the image edge; `scale2x_pad`
//! reads the same neighbours straight from a 1-pixel padded buffer. Both
//! produce identical output.
//!
//! # Scale2xSFX
//!
//! SFX widens the window to the 3x3 square plus the second ring
//! ```text
//!       J
//!     A B C
//!   K D E F L
//!     G H I
//!       M
//! ```
//! and only fires a corner when the surrounding pixels do not mark E as an
//! isolated dot, which keeps single-pixel details from growing diagonal tails.

use super::{check_contract, expand};
use crate::grid::{Neighborhood, Pixel, PixelGrid};

/// Scale2x with clamp-to-edge neighbour reads. Takes unpadded input.
///
/// # Panics
///
/// Panics if `out` does not hold `2w * 2h` pixels.
pub fn scale2x(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 2, 0);
    expand::<2, _>(input.width(), input.height(), out, |x, y| {
        scale2x_block(&input.clamped_window(x, y))
    });
}

/// Scale2x over a grid padded by at least one pixel.
///
/// # Panics
///
/// Panics if the grid has no padding or `out` does not hold `2w * 2h` pixels.
pub fn scale2x_pad(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 2, 1);
    expand::<2, _>(input.width(), input.height(), out, |x, y| scale2x_block(&input.window(x, y)));
}

/// Scale2xSFX over a grid padded by at least two pixels.
///
/// # Panics
///
/// Panics if the grid has less than two pixels of padding or `out` does not
/// hold `2w * 2h` pixels.
pub fn scale2x_sfx(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 2, 2);
    expand::<2, _>(input.width(), input.height(), out, |x, y| sfx_block(&input.window(x, y)));
}

fn scale2x_block<N: Neighborhood>(n: &N) -> [[Pixel; 2]; 2] {
    let (b, d, e, f, h) = (n.north(), n.west(), n.center(), n.east(), n.south());

    if b != h && d != f {
        [
            [if d == b { d } else { e }, if b == f { f } else { e }],
            [if d == h { d } else { e }, if h == f { f } else { e }],
        ]
    } else {
        [[e; 2]; 2]
    }
}

fn sfx_block<N: Neighborhood>(n: &N) -> [[Pixel; 2]; 2] {
    let [a, b, c, d, e, f, g, h, i] = n.square3();
    let (j, k, l, m) = (n.north2(), n.west2(), n.east2(), n.south2());

    let e0 = b == d && b != f && d != h && (e != a || e == c || e == g || a == j || a == k);
    let e1 = b == f && b != d && f != h && (e != c || e == a || e == i || c == j || c == l);
    let e2 = d == h && b != d && f != h && (e != g || e == a || e == i || g == k || g == m);
    let e3 = f == h && b != f && d != h && (e != i || e == c || e == g || i == l || i == m);

    [
        [if e0 { d } else { e }, if e1 { f } else { e }],
        [if e2 { d } else { e }, if e3 { f } else { e }],
    ]
}
