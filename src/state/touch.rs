// Touch-sequence state for the gesture surface.

use crate::error::ViewError;
use crate::transform::{Matrix, Point};

/// Snapshot taken when the second finger lands: the two reference points and
/// the transform in effect at that moment. Every later move is computed
/// against this snapshot, never against the previous move's result.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureStart {
    pub one: Point,
    pub two: Point,
    pub base: Matrix,
}

impl GestureStart {
    /// Fails when the two reference points coincide, which would divide the
    /// scale factor by zero.
    pub fn capture(one: Point, two: Point, base: Matrix) -> Result<Self, ViewError> {
        if one.distance(two) <= 0.0 {
            return Err(ViewError::DegenerateGeometry);
        }
        Ok(Self { one, two, base })
    }
}

/// Where the surface is in a touch sequence.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum TouchPhase {
    #[default]
    Idle,
    /// One finger down: default scrolling is suppressed, nothing transforms.
    SinglePassive,
    /// Two fingers down: each move produces a transform against the snapshot.
    Gesturing(GestureStart),
}

#[derive(Debug, Clone, Default)]
pub struct TouchState {
    pub phase: TouchPhase,
}

impl TouchState {
    pub fn begin_single(&mut self) {
        self.phase = TouchPhase::SinglePassive;
    }

    /// A new two-finger start always supersedes whatever was active.
    pub fn begin_pinch(&mut self, start: GestureStart) {
        self.phase = TouchPhase::Gesturing(start);
    }

    pub fn reset(&mut self) {
        self.phase = TouchPhase::Idle;
    }

    pub fn gesture(&self) -> Option<&GestureStart> {
        match &self.phase {
            TouchPhase::Gesturing(start) => Some(start),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_rejects_coincident_points() {
        let p = Point::new(3.0, 3.0);
        let err = GestureStart::capture(p, p, Matrix::identity());
        assert_eq!(err.unwrap_err(), ViewError::DegenerateGeometry);
    }

    #[test]
    fn pinch_supersedes_a_single_touch() {
        let mut state = TouchState::default();
        state.begin_single();
        assert_eq!(state.phase, TouchPhase::SinglePassive);
        assert!(state.gesture().is_none());

        let start = GestureStart::capture(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Matrix::identity(),
        )
        .expect("distinct points");
        state.begin_pinch(start.clone());
        assert_eq!(state.gesture(), Some(&start));
    }

    #[test]
    fn reset_returns_to_idle() {
        let mut state = TouchState::default();
        state.begin_single();
        state.reset();
        assert_eq!(state.phase, TouchPhase::Idle);
    }
}
