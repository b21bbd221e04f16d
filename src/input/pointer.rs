//! Two-slot buffer of points accumulated across a gesture.

use crate::util::Point;

/// Holds at most two buffered points, `last` and `current`.
///
/// Pushing shifts `current` into `last`; the oldest point falls out. Freehand
/// strokes read the pair as a segment, line and triangle gestures read it as the
/// endpoints collected so far.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PointerTracker {
    slots: [Option<Point>; 2],
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shifts the buffer: `last ← current`, `current ← point`.
    pub fn push(&mut self, point: Point) {
        self.slots = [self.slots[1], Some(point)];
    }

    /// Forgets both points.
    pub fn clear(&mut self) {
        self.slots = [None, None];
    }

    pub fn last(&self) -> Option<Point> {
        self.slots[0]
    }

    pub fn current(&self) -> Option<Point> {
        self.slots[1]
    }

    /// Both points, when the buffer is full.
    pub fn pair(&self) -> Option<(Point, Point)> {
        Some((self.slots[0]?, self.slots[1]?))
    }

    pub fn is_empty(&self) -> bool {
        self.slots == [None, None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_shifts_current_into_last() {
        let mut tracker = PointerTracker::new();
        tracker.push(Point::new(1, 1));
        assert_eq!(tracker.last(), None);
        assert_eq!(tracker.current(), Some(Point::new(1, 1)));
        assert_eq!(tracker.pair(), None);

        tracker.push(Point::new(2, 2));
        tracker.push(Point::new(3, 3));
        assert_eq!(tracker.pair(), Some((Point::new(2, 2), Point::new(3, 3))));
    }

    #[test]
    fn clear_empties_both_slots() {
        let mut tracker = PointerTracker::new();
        tracker.push(Point::new(4, 4));
        tracker.push(Point::new(5, 5));
        tracker.clear();
        assert!(tracker.is_empty());
        assert_eq!(tracker.current(), None);
    }
}
