//! Polyshift Morph Engine
//!
//! Polygon-to-polygon morph animation:
//!
//! - **Transforms**: pure per-axis interpolation strategies (linear, quadratic)
//! - **Morph generation**: a deterministic, precomputed sequence of
//!   intermediate polygons covering t in [0, 1)
//! - **Playback**: an atomically published frame cursor for looping playback
//!   over the immutable sequence
//!
//! # Example
//!
//! ```rust
//! use polyshift_animation::{morph, Transform};
//! use polyshift_core::Polygon;
//!
//! let from = Polygon::from_points([(0, 0), (10, 0), (10, 10), (0, 10)]);
//! let to = Polygon::from_points([(0, 0), (20, 0), (20, 20), (0, 20)]);
//!
//! let sequence = morph(&from, &to, 0.25, Transform::Linear);
//! assert_eq!(sequence.len(), 4);
//! assert_eq!(sequence[0], from);
//! ```

pub mod morph;
pub mod playback;
pub mod transform;

pub use morph::{morph, MorphSequence};
pub use playback::Playback;
pub use transform::{ParseTransformError, Transform};
