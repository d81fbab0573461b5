//! Morph sequence generation

use polyshift_core::{Point, Polygon};

use crate::transform::Transform;

/// A precomputed morph animation: one polygon per sampled t in [0, 1)
///
/// Produced once by [`morph`] and immutable afterwards. Frames are ordered by
/// strictly increasing t starting at 0.0, so frame 0 always equals the "from"
/// polygon, and every frame has the vertex count of both inputs. The sequence
/// is random-access and safe to share between threads for concurrent reads.
#[derive(Clone, Debug, PartialEq)]
pub struct MorphSequence {
    frames: Vec<Polygon>,
    step_size: f64,
}

impl MorphSequence {
    /// Number of frames.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Polygon> {
        self.frames.get(index)
    }

    /// All frames, in playback order.
    pub fn frames(&self) -> &[Polygon] {
        &self.frames
    }

    /// The step size the sequence was generated with.
    pub fn step_size(&self) -> f64 {
        self.step_size
    }

    /// Progress fraction for a frame index: `index / len`, in [0, 1).
    pub fn progress(&self, index: usize) -> f32 {
        if self.frames.is_empty() {
            return 0.0;
        }
        index as f32 / self.frames.len() as f32
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Polygon> {
        self.frames.iter()
    }
}

impl std::ops::Index<usize> for MorphSequence {
    type Output = Polygon;

    fn index(&self, index: usize) -> &Polygon {
        &self.frames[index]
    }
}

impl<'a> IntoIterator for &'a MorphSequence {
    type Item = &'a Polygon;
    type IntoIter = std::slice::Iter<'a, Polygon>;

    fn into_iter(self) -> Self::IntoIter {
        self.frames.iter()
    }
}

/// Generate the morph sequence between two polygons.
///
/// Samples t from 0.0 in increments of `step_size`, strictly below 1.0, and
/// interpolates each vertex pair with `transform` at every sample. Inputs are
/// not mutated; each call produces a fresh sequence.
///
/// Iteration is by integer frame index (`t = i * step_size`) rather than
/// repeated addition, so the frame count is bit-reproducible and equals
/// `ceil(1.0 / step_size)` without accumulation drift. A `step_size >= 1.0`
/// degenerates to a single-frame sequence.
///
/// # Panics
///
/// Both conditions are contract violations, not recoverable errors:
/// - `from` and `to` differ in vertex count;
/// - `step_size` is not a positive finite number (a non-positive step would
///   otherwise loop forever).
pub fn morph(from: &Polygon, to: &Polygon, step_size: f64, transform: Transform) -> MorphSequence {
    assert_eq!(
        from.len(),
        to.len(),
        "morph endpoints must have the same vertex count"
    );
    assert!(
        step_size > 0.0 && step_size.is_finite(),
        "step size must be a positive finite number, got {step_size}"
    );

    let mut frames = Vec::with_capacity((1.0 / step_size).ceil() as usize);
    let mut index: u64 = 0;
    loop {
        let t = index as f64 * step_size;
        if t >= 1.0 {
            break;
        }
        frames.push(morph_step(from, to, t, transform));
        index += 1;
    }

    tracing::debug!(
        frames = frames.len(),
        step_size,
        %transform,
        "generated morph sequence"
    );
    MorphSequence { frames, step_size }
}

/// One intermediate polygon at time `t`, preserving input vertex order.
fn morph_step(from: &Polygon, to: &Polygon, t: f64, transform: Transform) -> Polygon {
    from.iter()
        .zip(to.iter())
        .map(|(a, b)| Point::new(transform.apply(a.x, b.x, t), transform.apply(a.y, b.y, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_square() -> Polygon {
        Polygon::from_points([(0, 0), (10, 0), (10, 10), (0, 10)])
    }

    fn double_square() -> Polygon {
        Polygon::from_points([(0, 0), (20, 0), (20, 20), (0, 20)])
    }

    #[test]
    fn test_every_frame_keeps_vertex_count() {
        let from = Polygon::from_points([(10, 10), (10, 100), (100, 10), (100, 100)]);
        let to = Polygon::from_points([(10, 10), (10, 200), (200, 10), (200, 200)]);

        let sequence = morph(&from, &to, 0.1, Transform::Quadratic);

        for frame in &sequence {
            assert_eq!(frame.len(), 4);
        }
    }

    #[test]
    fn test_morph_to_self_is_constant() {
        let polygon = unit_square();
        let sequence = morph(&polygon, &polygon, 0.1, Transform::Linear);

        assert_eq!(sequence.len(), 10);
        for frame in &sequence {
            assert_eq!(frame, &polygon);
        }
    }

    #[test]
    fn test_morph_to_self_is_constant_at_fine_steps() {
        // Fine steps hit t values where a naive (1 - t) * x1 + t * x2
        // evaluation drops a pixel to truncation on constant coordinates.
        let polygon = Polygon::from_points([(10, 10), (10, 100), (100, 10), (100, 100)]);

        for transform in [Transform::Linear, Transform::Quadratic] {
            let sequence = morph(&polygon, &polygon, 0.005, transform);
            assert_eq!(sequence.len(), 200);
            for (i, frame) in sequence.iter().enumerate() {
                assert_eq!(frame, &polygon, "frame {i} ({transform})");
            }
        }
    }

    #[test]
    fn test_first_frame_equals_from_polygon() {
        let from = unit_square();
        let to = double_square();

        for transform in [Transform::Linear, Transform::Quadratic] {
            let sequence = morph(&from, &to, 0.25, transform);
            assert_eq!(sequence[0], from, "transform {transform}");
        }
    }

    #[test]
    fn test_frame_counts_match_step_size() {
        let from = unit_square();
        let to = double_square();

        assert_eq!(morph(&from, &to, 0.1, Transform::Linear).len(), 10);
        assert_eq!(morph(&from, &to, 0.25, Transform::Linear).len(), 4);
    }

    #[test]
    fn test_half_step_scenario() {
        let sequence = morph(&unit_square(), &double_square(), 0.5, Transform::Linear);

        assert_eq!(sequence.len(), 2);
        assert_eq!(sequence[0], unit_square());
        assert_eq!(
            sequence[1],
            Polygon::from_points([(0, 0), (15, 0), (15, 15), (0, 15)])
        );
    }

    #[test]
    fn test_oversized_step_yields_single_frame() {
        let sequence = morph(&unit_square(), &double_square(), 1.5, Transform::Linear);

        assert_eq!(sequence.len(), 1);
        assert_eq!(sequence[0], unit_square());
    }

    #[test]
    fn test_empty_polygons_morph_to_empty_frames() {
        let empty = Polygon::new();
        let sequence = morph(&empty, &empty, 0.5, Transform::Linear);

        assert_eq!(sequence.len(), 2);
        assert!(sequence[0].is_empty());
    }

    #[test]
    fn test_progress_stays_below_one() {
        let sequence = morph(&unit_square(), &double_square(), 0.25, Transform::Linear);

        assert_eq!(sequence.progress(0), 0.0);
        assert_eq!(sequence.progress(2), 0.5);
        assert!(sequence.progress(sequence.len() - 1) < 1.0);
    }

    #[test]
    #[should_panic(expected = "same vertex count")]
    fn test_mismatched_vertex_counts_fail_fast() {
        let triangle = Polygon::from_points([(0, 0), (10, 0), (5, 10)]);
        morph(&triangle, &unit_square(), 0.1, Transform::Linear);
    }

    #[test]
    #[should_panic(expected = "positive finite")]
    fn test_zero_step_size_fails_fast() {
        let square = unit_square();
        morph(&square, &square, 0.0, Transform::Linear);
    }

    #[test]
    #[should_panic(expected = "positive finite")]
    fn test_negative_step_size_fails_fast() {
        let square = unit_square();
        morph(&square, &square, -0.1, Transform::Linear);
    }
}
