//! Map the notes of a major scale onto a guitar fretboard and draw them.
//!
//! ```
//! use fretboard::fretboard::{build_grid, filter_by_position, Fret};
//! use fretboard::scale;
//! use fretboard::tuning::Tuning;
//!
//! let scale = scale::build_major_scale("G").unwrap();
//! let grid = build_grid(scale, Tuning::standard());
//! let box_shape = filter_by_position(&grid, Fret::new(1).unwrap());
//!
//! assert_eq!(box_shape.to_string().lines().next(), Some("1 E | 0:E 2:F# 3:G"));
//! ```

pub mod diagram;
pub mod error;
pub mod fretboard;
pub mod note;
pub mod scale;
pub mod tuning;

pub use error::FretboardError;
