//! Determinism of parallel scaling
//!
//! Every scaler fills output rows in parallel. These tests hash the raw
//! output produced on a single worker thread and on the default pool and
//! require the hashes to match.

use pixelscale::{Algorithm, PixelGrid};
use sha2::{Digest, Sha256};

/// SHA256 of the raw ARGB words, little-endian.
fn hash_grid(grid: &PixelGrid) -> String {
    let mut hasher = Sha256::new();
    for p in grid.data() {
        hasher.update(p.to_le_bytes());
    }
    format!("{:x}", hasher.finalize())
}

/// A 24x20 test card: diagonal stripes, a ring and a soft gradient corner.
fn test_card() -> PixelGrid {
    PixelGrid::from_fn(24, 20, |x, y| {
        let (cx, cy) = (x as i32 - 12, y as i32 - 10);
        let r2 = cx * cx + cy * cy;
        if (36..=64).contains(&r2) {
            0xFFE0C020
        } else if (x + y) % 6 < 2 {
            0xFF202060
        } else if x > 18 && y > 14 {
            0xFF000000 | ((x * 10) << 16) | ((y * 12) << 8) | 0x40
        } else {
            0xFFF0F0F0
        }
    })
}

fn scale_on(pool: &rayon::ThreadPool, algorithm: Algorithm, grid: &PixelGrid) -> PixelGrid {
    pool.install(|| algorithm.scale(&grid.padded(algorithm.padding())).expect("padding was supplied"))
}

#[test]
fn test_single_thread_matches_parallel() {
    let sequential = rayon::ThreadPoolBuilder::new().num_threads(1).build().expect("should build pool");
    let parallel = rayon::ThreadPoolBuilder::new().num_threads(4).build().expect("should build pool");
    let card = test_card();

    for algorithm in Algorithm::ALL {
        let a = scale_on(&sequential, algorithm, &card);
        let b = scale_on(&parallel, algorithm, &card);
        assert_eq!(hash_grid(&a), hash_grid(&b), "{} differs between thread counts", algorithm);
    }
}

#[test]
fn test_repeated_runs_are_identical() {
    let card = test_card();
    for algorithm in Algorithm::ALL {
        let first = hash_grid(&algorithm.scale(&card.padded(algorithm.padding())).expect("padding was supplied"));
        let second = hash_grid(&algorithm.scale(&card.padded(algorithm.padding())).expect("padding was supplied"));
        assert_eq!(first, second, "{}", algorithm);
    }
}

#[test]
fn test_distinct_algorithms_produce_distinct_output() {
    let card = test_card();
    let hashes: Vec<String> = [Algorithm::Block2, Algorithm::Scale2x, Algorithm::Hq2xA, Algorithm::SuperXbr]
        .iter()
        .map(|a| hash_grid(&a.scale(&card.padded(a.padding())).expect("padding was supplied")))
        .collect();

    for i in 0..hashes.len() {
        for j in i + 1..hashes.len() {
            assert_ne!(hashes[i], hashes[j]);
        }
    }
}
