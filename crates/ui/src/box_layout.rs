//! Box Layout
//!
//! Distributes children along one axis. Children with a fixed hint keep
//! their requested extent (shrinking only when the hints overflow), auto
//! children share what is left.

use smallvec::SmallVec;

use crate::geometry::{Axis, Rect, SizeHint};

/// Horizontal or vertical box layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLayout {
    axis: Axis,
}

impl BoxLayout {
    pub fn new(axis: Axis) -> Self {
        Self { axis }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    pub fn axis(&self) -> Axis {
        self.axis
    }

    /// Primary-axis extent of every child, in order
    ///
    /// Auto children split `max(0, remaining)` evenly and the last one takes
    /// the division remainder. Hinted children absorb `min(remaining, 0)` the
    /// same way, so with any auto child present (or when hints overflow) the
    /// extents add up to exactly `length`.
    pub fn extents(&self, length: i32, hints: &[SizeHint]) -> SmallVec<[i32; 16]> {
        let mut hinted_sum = 0;
        let mut auto_count = 0;
        for hint in hints {
            match hint.extent(self.axis) {
                Some(extent) => hinted_sum += extent,
                None => auto_count += 1,
            }
        }
        let hinted_count = hints.len() as i32 - auto_count;
        let remaining = length - hinted_sum;

        let auto_extent = if auto_count == 0 {
            0
        } else {
            remaining.div_euclid(auto_count).max(0)
        };
        let last_auto_extent = remaining.max(0) - (auto_count - 1) * auto_extent;

        let hinted_delta = if hinted_count == 0 {
            0
        } else {
            remaining.div_euclid(hinted_count).min(0)
        };
        let last_hinted_delta = remaining.min(0) - (hinted_count - 1) * hinted_delta;

        let mut seen_auto = 0;
        let mut seen_hinted = 0;
        hints
            .iter()
            .map(|hint| match hint.extent(self.axis) {
                None => {
                    seen_auto += 1;
                    if seen_auto == auto_count {
                        last_auto_extent
                    } else {
                        auto_extent
                    }
                }
                Some(extent) => {
                    seen_hinted += 1;
                    if seen_hinted == hinted_count {
                        extent + last_hinted_delta
                    } else {
                        extent + hinted_delta
                    }
                }
            })
            .collect()
    }

    /// Child rectangles laid end to end inside `rect`
    pub fn arrange(&self, rect: Rect, hints: &[SizeHint]) -> SmallVec<[Rect; 16]> {
        let cross = self.axis.cross();
        let cross_span = (rect.origin(cross), rect.extent(cross));

        let mut offset = rect.origin(self.axis);
        self.extents(rect.extent(self.axis), hints)
            .into_iter()
            .map(|extent| {
                let child = self.axis.compose((offset, extent), cross_span);
                offset += extent;
                child
            })
            .collect()
    }

    /// Index of the child under `(x, y)`
    ///
    /// Walks the children's current extents from the container origin; the
    /// first child whose end lies past the coordinate wins.
    pub fn child_at(
        &self,
        rect: Rect,
        child_rects: impl IntoIterator<Item = Rect>,
        x: i32,
        y: i32,
    ) -> Option<usize> {
        let coord = match self.axis {
            Axis::Horizontal => x,
            Axis::Vertical => y,
        };
        let origin = rect.origin(self.axis);

        let mut offset = 0;
        for (index, child) in child_rects.into_iter().enumerate() {
            offset += child.extent(self.axis);
            if origin + offset > coord {
                return Some(index);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sum(extents: &[i32]) -> i32 {
        extents.iter().sum()
    }

    #[test]
    fn test_auto_children_split_evenly() {
        let layout = BoxLayout::horizontal();
        let extents = layout.extents(100, &[SizeHint::Auto, SizeHint::Auto, SizeHint::Auto]);
        assert_eq!(extents.as_slice(), &[33, 33, 34]);
    }

    #[test]
    fn test_hinted_children_keep_size_with_slack() {
        let layout = BoxLayout::vertical();
        let hints = [SizeHint::height(20), SizeHint::Auto, SizeHint::height(30)];
        let extents = layout.extents(200, &hints);
        assert_eq!(extents.as_slice(), &[20, 150, 30]);
    }

    #[test]
    fn test_hinted_children_shrink_on_overflow() {
        let layout = BoxLayout::horizontal();
        let hints = [SizeHint::width(40), SizeHint::width(40), SizeHint::width(40), SizeHint::Auto];
        // remaining = -10, floor(-10 / 3) = -4, last absorbs -2
        let extents = layout.extents(110, &hints);
        assert_eq!(extents.as_slice(), &[36, 36, 38, 0]);
        assert_eq!(sum(&extents), 110);
    }

    #[test]
    fn test_only_hinted_children_leave_slack() {
        let layout = BoxLayout::horizontal();
        let extents = layout.extents(100, &[SizeHint::width(10), SizeHint::width(20)]);
        assert_eq!(extents.as_slice(), &[10, 20]);
    }

    #[test]
    fn test_cross_axis_hint_is_ignored() {
        let layout = BoxLayout::horizontal();
        // Only the width counts in a horizontal box
        let extents = layout.extents(50, &[SizeHint::fixed(10, 999), SizeHint::Auto]);
        assert_eq!(extents.as_slice(), &[10, 40]);
    }

    #[test]
    fn test_conservation_over_many_inputs() {
        let layout = BoxLayout::horizontal();
        let hint_sets: Vec<Vec<SizeHint>> = vec![
            vec![SizeHint::Auto],
            vec![SizeHint::Auto; 7],
            vec![SizeHint::width(13), SizeHint::Auto, SizeHint::width(5), SizeHint::Auto],
            vec![SizeHint::width(100), SizeHint::width(100), SizeHint::Auto],
            vec![SizeHint::width(0), SizeHint::Auto, SizeHint::Auto, SizeHint::Auto],
            vec![SizeHint::width(33), SizeHint::width(33), SizeHint::width(33)],
        ];

        for hints in &hint_sets {
            let hinted: i32 = hints.iter().filter_map(|h| h.extent(Axis::Horizontal)).sum();
            let has_auto = hints.iter().any(SizeHint::is_auto);
            for length in 0..=257 {
                let extents = layout.extents(length, hints);
                assert_eq!(extents.len(), hints.len());
                if has_auto || hinted >= length {
                    assert_eq!(sum(&extents), length, "hints {:?} length {}", hints, length);
                } else {
                    assert_eq!(sum(&extents), hinted);
                }
            }
        }
    }

    #[test]
    fn test_arrange_is_contiguous() {
        let layout = BoxLayout::vertical();
        let rect = Rect::new(5, 10, 80, 100);
        let rects = layout.arrange(rect, &[SizeHint::height(25), SizeHint::Auto]);

        assert_eq!(rects[0], Rect::new(5, 10, 80, 25));
        assert_eq!(rects[1], Rect::new(5, 35, 80, 75));
    }

    #[test]
    fn test_empty_layout() {
        let layout = BoxLayout::horizontal();
        assert!(layout.extents(100, &[]).is_empty());
        assert_eq!(layout.child_at(Rect::new(0, 0, 100, 10), std::iter::empty(), 5, 5), None);
    }

    #[test]
    fn test_child_at() {
        let layout = BoxLayout::horizontal();
        let rect = Rect::new(100, 0, 90, 20);
        let rects = layout.arrange(rect, &[SizeHint::Auto, SizeHint::Auto, SizeHint::Auto]);

        assert_eq!(layout.child_at(rect, rects.iter().copied(), 100, 5), Some(0));
        assert_eq!(layout.child_at(rect, rects.iter().copied(), 129, 5), Some(0));
        assert_eq!(layout.child_at(rect, rects.iter().copied(), 130, 5), Some(1));
        assert_eq!(layout.child_at(rect, rects.iter().copied(), 189, 5), Some(2));
        // Past the last child
        assert_eq!(layout.child_at(rect, rects.iter().copied(), 190, 5), None);
    }

    #[test]
    fn test_child_at_with_slack() {
        let layout = BoxLayout::vertical();
        let rect = Rect::new(0, 0, 10, 100);
        let rects = layout.arrange(rect, &[SizeHint::height(30)]);

        assert_eq!(layout.child_at(rect, rects.iter().copied(), 5, 29), Some(0));
        assert_eq!(layout.child_at(rect, rects.iter().copied(), 5, 30), None);
    }
}
