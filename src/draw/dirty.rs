//! Dirty region tracking for incremental repaint.
//!
//! Collects the rectangles touched by primitives until the host drains them.

use crate::util::Rect;

/// Tracks dirty rectangles accumulated between repaints.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present, falling back to full damage otherwise.
    pub fn mark_bounds(&mut self, rect: Option<Rect>) {
        match rect {
            Some(rect) => self.mark_rect(rect),
            None => self.mark_full(),
        }
    }

    /// Returns true when nothing has been marked since the last drain.
    pub fn is_clean(&self) -> bool {
        !self.force_full && self.regions.is_empty()
    }

    /// Drains the dirty regions gathered so far, clipped to the surface.
    ///
    /// When the full surface is marked, returns a single rectangle covering the
    /// entire surface; otherwise returns accumulated rectangles that still
    /// intersect it.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            return Rect::new(0, 0, width, height).into_iter().collect();
        }
        self.regions
            .drain(..)
            .filter_map(|rect| rect.clipped_to(width, height))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marked_rects_are_clipped_on_drain() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_rect(Rect::new(-3, -3, 10, 10).unwrap());
        tracker.mark_rect(Rect::new(500, 500, 4, 4).unwrap());

        let rects = tracker.take_regions(100, 100);
        assert_eq!(rects, vec![Rect::new(0, 0, 7, 7).unwrap()]);
        assert!(tracker.is_clean());
    }

    #[test]
    fn mark_full_takes_precedence() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_rect(Rect::new(5, 5, 10, 10).unwrap());
        tracker.mark_full();
        tracker.mark_rect(Rect::new(20, 20, 15, 15).unwrap());

        let rects = tracker.take_regions(200, 100);
        assert_eq!(rects, vec![Rect::new(0, 0, 200, 100).unwrap()]);
        assert!(tracker.take_regions(200, 100).is_empty());
    }

    #[test]
    fn missing_bounds_escalate_to_full_damage() {
        let mut tracker = DirtyTracker::new();
        tracker.mark_bounds(None);
        assert_eq!(tracker.take_regions(30, 20), vec![Rect::new(0, 0, 30, 20).unwrap()]);
    }
}
