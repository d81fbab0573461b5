//! Polyshift Geometry Primitives
//!
//! Pure value types shared by the morph engine and any host:
//!
//! - **Point**: an immutable (x, y) coordinate pair in integer pixel space
//! - **Polygon**: an ordered, implicitly closed vertex sequence
//!
//! These types carry no interpolation or rendering logic. Conversion to a
//! platform drawing primitive belongs to the host, at the render boundary.

pub mod point;
pub mod polygon;

pub use point::Point;
pub use polygon::Polygon;
