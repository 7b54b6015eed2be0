//! Hover tracking
//!
//! Turns per-frame hover flags into enter/leave edges.

/// Hover transition reported once per change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseEdge {
    Enter,
    Leave,
}

/// Two-frame hover state
///
/// `is_over` accumulates during the current frame's hover pass,
/// `was_over` holds the value resolved at the previous frame boundary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MouseTracker {
    is_over: bool,
    was_over: bool,
}

impl MouseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the pointer is over the element this frame
    pub fn mark(&mut self) {
        self.is_over = true;
    }

    /// Hover state as of the last resolved frame
    pub fn is_hovered(&self) -> bool {
        self.was_over
    }

    /// Close the frame: report the edge, if any, and start accumulating again
    pub fn resolve(&mut self) -> Option<MouseEdge> {
        let edge = match (self.was_over, self.is_over) {
            (false, true) => Some(MouseEdge::Enter),
            (true, false) => Some(MouseEdge::Leave),
            _ => None,
        };
        self.was_over = self.is_over;
        self.is_over = false;
        edge
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_table() {
        let mut t = MouseTracker::new();

        // false -> false
        assert_eq!(t.resolve(), None);

        // false -> true
        t.mark();
        assert_eq!(t.resolve(), Some(MouseEdge::Enter));
        assert!(t.is_hovered());

        // true -> true
        t.mark();
        assert_eq!(t.resolve(), None);

        // true -> false
        assert_eq!(t.resolve(), Some(MouseEdge::Leave));
        assert!(!t.is_hovered());
    }

    #[test]
    fn test_multiple_marks_in_one_frame() {
        let mut t = MouseTracker::new();
        t.mark();
        t.mark();
        t.mark();
        assert_eq!(t.resolve(), Some(MouseEdge::Enter));
        assert_eq!(t.resolve(), Some(MouseEdge::Leave));
    }
}
