//! Pixelscale - Edge-preserving upscalers for pixel art
//!
//! This library provides:
//! - A padded ARGB pixel grid with clamp-to-edge borders
//! - Block, Scale2x/3x, HQ2x/3x and Super-xBR scalers
//! - Loading and saving 24-bit BMP files
//!
//! # Example
//!
//! ```
//! use pixelscale::{Algorithm, PixelGrid};
//!
//! let algorithm: Algorithm = "scale2x".parse().unwrap();
//! let input = PixelGrid::filled(4, 3, 0xFF336699).padded(algorithm.padding());
//! let output = algorithm.scale(&input).unwrap();
//! assert_eq!((output.width(), output.height()), (8, 6));
//! ```

pub mod algorithms;
pub mod bitmap;
pub mod cli;
pub mod config;
pub mod grid;
pub mod mix;

pub use algorithms::{Algorithm, AlgorithmError};
pub use bitmap::BitmapError;
pub use grid::{Pixel, PixelGrid};
