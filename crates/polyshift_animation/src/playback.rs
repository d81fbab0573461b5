//! Looping playback over a precomputed morph sequence
//!
//! Replaces the legacy pattern of a producer thread mutating shared canvas and
//! progress fields: the sequence itself is immutable, and the only shared
//! mutable state is a single atomically published frame cursor plus a liveness
//! flag. A `Playback` wrapped in `Arc` needs no further synchronization
//! between the task that advances it and the loop that renders from it.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;

use polyshift_core::Polygon;

use crate::morph::MorphSequence;

/// Shared playback cursor
///
/// Playback loops: advancing past the last frame wraps to frame 0. The cursor
/// is written with a plain load/store publish and is therefore single-producer:
/// exactly one task calls [`advance`](Self::advance), while any number of
/// readers observe [`current`](Self::current) and its derived accessors.
pub struct Playback {
    sequence: Arc<MorphSequence>,
    cursor: AtomicUsize,
    live: AtomicBool,
}

impl Playback {
    /// # Panics
    ///
    /// Panics if the sequence has no frames; there is nothing to play.
    pub fn new(sequence: Arc<MorphSequence>) -> Self {
        assert!(!sequence.is_empty(), "playback requires at least one frame");
        Self {
            sequence,
            cursor: AtomicUsize::new(0),
            live: AtomicBool::new(true),
        }
    }

    /// The sequence being played.
    pub fn sequence(&self) -> &MorphSequence {
        &self.sequence
    }

    /// The currently published frame index.
    pub fn current(&self) -> usize {
        self.cursor.load(Ordering::Acquire)
    }

    /// The frame at the published index.
    pub fn current_frame(&self) -> &Polygon {
        &self.sequence[self.current()]
    }

    /// Progress fraction of the published frame, in [0, 1).
    pub fn progress(&self) -> f32 {
        self.sequence.progress(self.current())
    }

    /// Advance to the next frame, wrapping at the end. Returns the new index.
    ///
    /// Once halted, the cursor stays put and the current index is returned.
    pub fn advance(&self) -> usize {
        let current = self.cursor.load(Ordering::Acquire);
        if !self.is_live() {
            return current;
        }
        let next = (current + 1) % self.sequence.len();
        self.cursor.store(next, Ordering::Release);
        next
    }

    /// Stop playback. Idempotent; checked by the producer once per iteration.
    pub fn halt(&self) {
        self.live.store(false, Ordering::Release);
        tracing::debug!(frame = self.current(), "playback halted");
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }
}
