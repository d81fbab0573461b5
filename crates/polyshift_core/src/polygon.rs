//! Polygon value type

use smallvec::SmallVec;

use crate::point::Point;

/// An ordered sequence of vertices
///
/// Vertex order is significant: consecutive vertices define edges, and the
/// polygon is implicitly closed between the last and first vertex. A valid
/// polygon has at least 3 vertices, but the type itself tolerates any count —
/// degenerate shapes are the caller's concern, not an invariant enforced here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Polygon {
    points: SmallVec<[Point; 8]>,
}

impl Polygon {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a polygon from anything yielding points (or `(x, y)` tuples).
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Point>,
    {
        Self {
            points: points.into_iter().map(Into::into).collect(),
        }
    }

    /// Append a vertex, preserving insertion order.
    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The vertices, in order.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn get(&self, index: usize) -> Option<&Point> {
        self.points.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.points.iter()
    }
}

impl std::ops::Index<usize> for Polygon {
    type Output = Point;

    fn index(&self, index: usize) -> &Point {
        &self.points[index]
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}
