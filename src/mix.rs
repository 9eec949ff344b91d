//! Integer-weighted colour mixing.
//!
//! Each channel (alpha, red, green, blue) is mixed on its own as
//! `sum(c_i * w_i) / sum(w_i)`, truncated toward zero. Mixing a colour with
//! itself returns it unchanged for any weights.

use crate::grid::Pixel;

const SHIFTS: [u32; 4] = [24, 16, 8, 0];

#[inline]
fn channel(p: Pixel, shift: u32) -> u32 {
    (p >> shift) & 0xFF
}

/// Weighted mix of two colours.
#[inline]
pub fn mix2(c0: Pixel, c1: Pixel, w0: u32, w1: u32) -> Pixel {
    let total = w0 + w1;
    SHIFTS.iter().fold(0, |acc, &s| {
        let v = (channel(c0, s) * w0 + channel(c1, s) * w1) / total;
        acc | v << s
    })
}

/// Weighted mix of three colours.
#[inline]
pub fn mix3(c0: Pixel, c1: Pixel, c2: Pixel, w0: u32, w1: u32, w2: u32) -> Pixel {
    let total = w0 + w1 + w2;
    SHIFTS.iter().fold(0, |acc, &s| {
        let v = (channel(c0, s) * w0 + channel(c1, s) * w1 + channel(c2, s) * w2) / total;
        acc | v << s
    })
}

/// Per-channel truncated mean of two colours.
#[inline]
pub fn average(c0: Pixel, c1: Pixel) -> Pixel {
    mix2(c0, c1, 1, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mix2_truncates() {
        // (0 * 3 + 255 * 1) / 4 = 63.75 -> 63
        assert_eq!(mix2(0x0000_0000, 0xFFFF_FFFF, 3, 1), 0x3F3F_3F3F);
    }

    #[test]
    fn test_mix2_channels_are_independent() {
        // A carry out of blue must not leak into green.
        let a = 0x00FF_00FF;
        let b = 0xFF00_FF00;
        assert_eq!(mix2(a, b, 1, 1), 0x7F7F_7F7F);
    }

    #[test]
    fn test_mix3_weights() {
        let white = 0xFFFF_FFFF;
        let black = 0xFF00_0000;
        // (14 * 255 + 0 + 0) / 16 = 223.125
        assert_eq!(mix3(white, black, black, 14, 1, 1), 0xFFDF_DFDF);
        // (2 * 255 + 7 * 0 + 7 * 0) / 16 = 31.875
        assert_eq!(mix3(white, black, black, 2, 7, 7), 0xFF1F_1F1F);
        // (5 * 0 + 2 * 255 + 1 * 0) / 8 = 63.75
        assert_eq!(mix3(black, white, black, 5, 2, 1), 0xFF3F_3F3F);
    }

    #[test]
    fn test_mix_identical_colors_is_identity() {
        let c = 0x8012_3456;
        assert_eq!(mix2(c, c, 7, 1), c);
        assert_eq!(mix3(c, c, c, 2, 3, 3), c);
        assert_eq!(average(c, c), c);
    }

    #[test]
    fn test_average_rounds_down() {
        assert_eq!(average(0x0000_0001, 0x0000_0002), 0x0000_0001);
        assert_eq!(average(0xFF10_2030, 0x0130_4051), 0x8020_3040);
    }
}
