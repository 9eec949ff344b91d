//! Scale3x (AdvMAME3x) and Sp00kyFox's Scale3xSFX refinement.
//!
//! Both read the 3x3 square around E from a padded buffer:
//! ```text
//!   A B C          E0 E1 E2
//!   D E F   -->    E3 E4 E5
//!   G H I          E6 E7 E8
//! ```
//! Corner outputs copy a neighbour when its two flanking neighbours agree,
//! edge outputs additionally require the far corner to differ from E. The
//! centre output is always E.

use super::{check_contract, expand};
use crate::grid::{Neighborhood, Pixel, PixelGrid};
use crate::mix::average;

/// Scale3x over a grid padded by at least one pixel.
///
/// # Panics
///
/// Panics if the grid has no padding or `out` does not hold `3w * 3h` pixels.
pub fn scale3x_pad(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 3, 1);
    expand::<3, _>(input.width(), input.height(), out, |x, y| scale3x_block(&input.window(x, y)));
}

/// Scale3xSFX over a grid padded by at least two pixels.
///
/// Corners blend the two agreeing neighbours instead of copying one of them.
///
/// # Panics
///
/// Panics if the grid has less than two pixels of padding or `out` does not
/// hold `3w * 3h` pixels.
pub fn scale3x_sfx(input: &PixelGrid, out: &mut [Pixel]) {
    check_contract(input, out, 3, 2);
    expand::<3, _>(input.width(), input.height(), out, |x, y| sfx_block(&input.window(x, y)));
}

fn scale3x_block<N: Neighborhood>(n: &N) -> [[Pixel; 3]; 3] {
    let [a, b, c, d, e, f, g, h, i] = n.square3();

    if b == h || d == f {
        return [[e; 3]; 3];
    }

    let pick = |cond: bool, p: Pixel| if cond { p } else { e };
    [
        [
            pick(d == b, d),
            pick((d == b && e != c) || (b == f && e != a), b),
            pick(b == f, f),
        ],
        [
            pick((d == b && e != g) || (d == h && e != a), d),
            e,
            pick((b == f && e != i) || (h == f && e != c), f),
        ],
        [
            pick(d == h, d),
            pick((d == h && e != i) || (h == f && e != g), h),
            pick(h == f, f),
        ],
    ]
}

fn sfx_block<N: Neighborhood>(n: &N) -> [[Pixel; 3]; 3] {
    let [a, b, c, d, e, f, g, h, i] = n.square3();
    let (j, k, l, m) = (n.north2(), n.west2(), n.east2(), n.south2());

    // Base corner conditions, shared with the edge outputs.
    let tl = b == d && b != f && d != h && (e != a || e == c || e == g || a == j || a == k);
    let tr = b == f && b != d && f != h && (e != c || e == a || e == i || c == j || c == l);
    let bl = d == h && b != d && f != h && (e != g || e == a || e == i || g == k || g == m);
    let br = f == h && b != f && d != h && (e != i || e == c || e == g || i == l || i == m);

    // Corners also fire on a one-pixel step along the edge.
    let e0 = tl || (b == d && c == e && c != j && a != e) || (b == d && e == g && a != e && g != k);
    let e2 = tr || (b == f && a == e && a != j && c != e) || (b == f && e == i && c != e && i != l);
    let e6 = bl || (d == h && a == e && a != k && e != g) || (d == h && e == i && e != g && i != m);
    let e8 = br || (f == h && c == e && c != l && e != i) || (f == h && e == g && e != i && g != m);

    let pick = |cond: bool, p: Pixel| if cond { p } else { e };
    [
        [
            if e0 { average(b, d) } else { e },
            pick((tl && e != c) || (tr && e != a), b),
            if e2 { average(b, f) } else { e },
        ],
        [
            pick((tl && e != g) || (bl && e != a), d),
            e,
            pick((br && e != c) || (tr && e != i), f),
        ],
        [
            if e6 { average(d, h) } else { e },
            pick((br && e != g) || (bl && e != i), h),
            if e8 { average(f, h) } else { e },
        ],
    ]
}
