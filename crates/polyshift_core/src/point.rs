//! 2D points in integer pixel space

/// A 2D point
///
/// Coordinates are `i32`: polygon geometry lives in integer pixel space, and
/// interpolated coordinates are truncated back to integers by the transform
/// functions that produce them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
