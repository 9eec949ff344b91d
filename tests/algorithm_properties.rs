//! Properties every scaler must satisfy
//!
//! These tests run each algorithm through the public [`Algorithm`] API on
//! generated images and check the laws shared by the whole family:
//! - Output dimensions are `factor` times the input
//! - Block replication is exact
//! - Flat regions stay flat
//! - Tiny images never read outside the padded border

use pixelscale::{Algorithm, Pixel, PixelGrid};

// ============================================================================
// Test Utilities
// ============================================================================

/// Deterministic pseudo-random opaque image drawn from a small palette.
///
/// A small palette makes equal neighbours common, so the edge rules of the
/// Scale2x and HQx families actually fire.
fn noisy_grid(width: u32, height: u32, seed: u32) -> PixelGrid {
    const PALETTE: [Pixel; 4] = [0xFF000000, 0xFFFFFFFF, 0xFFE04020, 0xFF2060C0];
    let mut state = seed.wrapping_mul(2654435761).wrapping_add(1);
    PixelGrid::from_fn(width, height, |_, _| {
        state ^= state << 13;
        state ^= state >> 17;
        state ^= state << 5;
        PALETTE[(state >> 7) as usize % PALETTE.len()]
    })
}

fn scale(algorithm: Algorithm, grid: &PixelGrid) -> PixelGrid {
    algorithm.scale(&grid.padded(algorithm.padding())).expect("padding was supplied")
}

// ============================================================================
// Dimensions
// ============================================================================

#[test]
fn test_output_dimensions() {
    let grid = noisy_grid(7, 5, 1);
    for algorithm in Algorithm::ALL {
        let out = scale(algorithm, &grid);
        let f = algorithm.factor();
        assert_eq!((out.width(), out.height()), (7 * f, 5 * f), "{}", algorithm);
        assert_eq!(out.pad(), 0, "{}", algorithm);
        assert_eq!(out.data().len(), algorithm.output_len(&grid), "{}", algorithm);
    }
}

#[test]
fn test_empty_image_scales_to_empty() {
    let grid = PixelGrid::new(0, 0);
    for algorithm in Algorithm::ALL {
        let out = scale(algorithm, &grid);
        assert!(out.data().is_empty(), "{}", algorithm);
    }
}

// ============================================================================
// Block Replication
// ============================================================================

#[test]
fn test_copy_is_identity() {
    let grid = noisy_grid(9, 4, 2);
    let out = scale(Algorithm::Copy, &grid);
    assert_eq!(out, grid);
}

#[test]
fn test_block_law() {
    let grid = noisy_grid(6, 5, 3);
    for algorithm in [Algorithm::Block2, Algorithm::Block3] {
        let n = algorithm.factor();
        let out = scale(algorithm, &grid);
        for y in 0..out.height() {
            for x in 0..out.width() {
                assert_eq!(out.get(x, y), grid.get(x / n, y / n), "{} at ({}, {})", algorithm, x, y);
            }
        }
    }
}

// ============================================================================
// Flat Regions
// ============================================================================

#[test]
fn test_solid_image_stays_solid() {
    for color in [0xFF000000, 0xFFFFFFFF, 0xFF7F3FA0, 0x80102030] {
        let grid = PixelGrid::filled(5, 4, color);
        for algorithm in Algorithm::ALL {
            let out = scale(algorithm, &grid);
            assert!(
                out.data().iter().all(|&p| p == color),
                "{} changed a solid {:#010X} image",
                algorithm,
                color
            );
        }
    }
}

#[test]
fn test_flat_interior_of_two_tone_image() {
    // Left half black, right half white. Super-xBR reaches furthest, so only
    // columns four or more away from the boundary are checked.
    let grid = PixelGrid::from_fn(16, 6, |x, _| if x < 8 { 0xFF000000 } else { 0xFFFFFFFF });
    for algorithm in Algorithm::ALL {
        let f = algorithm.factor();
        let out = scale(algorithm, &grid);
        for y in 0..out.height() {
            for x in 0..out.width() {
                let sx = x / f;
                if sx <= 3 {
                    assert_eq!(out.get(x, y), 0xFF000000, "{} at ({}, {})", algorithm, x, y);
                } else if sx >= 12 {
                    assert_eq!(out.get(x, y), 0xFFFFFFFF, "{} at ({}, {})", algorithm, x, y);
                }
            }
        }
    }
}

// ============================================================================
// Boundary Safety
// ============================================================================

#[test]
fn test_small_images_stay_in_bounds() {
    for height in 1..=4 {
        for width in 1..=4 {
            let grid = noisy_grid(width, height, width * 7 + height);
            for algorithm in Algorithm::ALL {
                let out = scale(algorithm, &grid);
                let f = algorithm.factor();
                assert_eq!((out.width(), out.height()), (width * f, height * f), "{}", algorithm);
            }
        }
    }
}

#[test]
fn test_extra_padding_does_not_change_output() {
    let grid = noisy_grid(5, 5, 11);
    for algorithm in Algorithm::ALL {
        let exact = scale(algorithm, &grid);
        let generous = algorithm.scale(&grid.padded(algorithm.padding() + 2)).expect("padding was supplied");
        assert_eq!(exact, generous, "{}", algorithm);
    }
}

// ============================================================================
// Family Relations
// ============================================================================

#[test]
fn test_scale2x_variants_agree() {
    for seed in 0..8 {
        let grid = noisy_grid(8, 6, seed);
        assert_eq!(scale(Algorithm::Scale2x, &grid), scale(Algorithm::Scale2xPad, &grid), "seed {}", seed);
    }
}

#[test]
fn test_hqx_commutes_with_mirroring() {
    fn mirror(grid: &PixelGrid) -> PixelGrid {
        let w = grid.width();
        PixelGrid::from_fn(w, grid.height(), |x, y| grid.get(w - 1 - x, y))
    }
    fn flip(grid: &PixelGrid) -> PixelGrid {
        let h = grid.height();
        PixelGrid::from_fn(grid.width(), h, |x, y| grid.get(x, h - 1 - y))
    }

    for seed in 0..4 {
        let grid = noisy_grid(7, 5, seed);
        for algorithm in [Algorithm::Hq2xA, Algorithm::Hq2xB, Algorithm::Hq3xA, Algorithm::Hq3xB] {
            let out = scale(algorithm, &grid);
            assert_eq!(scale(algorithm, &mirror(&grid)), mirror(&out), "{} seed {}", algorithm, seed);
            assert_eq!(scale(algorithm, &flip(&grid)), flip(&out), "{} seed {}", algorithm, seed);
        }
    }
}

#[test]
fn test_scale_family_only_copies_input_colours() {
    let grid = noisy_grid(8, 8, 5);
    let palette = grid.data().to_vec();
    for algorithm in [Algorithm::Scale2x, Algorithm::Scale2xPad, Algorithm::Scale3x] {
        let out = scale(algorithm, &grid);
        assert!(out.data().iter().all(|p| palette.contains(p)), "{} invented a colour", algorithm);
    }
}

#[test]
fn test_scale_image_matches_grid_path() {
    let grid = noisy_grid(4, 3, 9);
    let image = grid.to_rgba_image();
    for algorithm in Algorithm::ALL {
        let via_image = PixelGrid::from_rgba_image(&algorithm.scale_image(&image));
        assert_eq!(via_image, scale(algorithm, &grid), "{}", algorithm);
    }
}
