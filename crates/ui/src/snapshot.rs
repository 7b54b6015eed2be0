//! Layout snapshots
//!
//! A serializable copy of the tree's computed geometry, for dumps and tests.

use serde::Serialize;

use crate::element::Element;
use crate::geometry::{Rect, SizeHint};

/// Computed geometry of one element and its subtree
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutSnapshot {
    pub name: &'static str,
    pub kind: &'static str,
    pub rect: Rect,
    pub size_hint: SizeHint,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<LayoutSnapshot>,
}

impl LayoutSnapshot {
    pub fn capture<S>(element: &Element<S>) -> Self {
        Self {
            name: element.name(),
            kind: element.container_ref().map_or("leaf", |c| c.layout().tag()),
            rect: element.rect(),
            size_hint: element.size_hint(),
            children: element.children().iter().map(LayoutSnapshot::capture).collect(),
        }
    }

    /// Number of nodes in the snapshot
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(LayoutSnapshot::len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_tree() {
        let mut root: Element<()> = Element::vbox()
            .named("root")
            .with_child(Element::empty().named("bar").with_hint(SizeHint::height(10)))
            .with_child(Element::empty());
        root.set_rect(Rect::new(0, 0, 40, 30));

        let snapshot = LayoutSnapshot::capture(&root);
        assert_eq!(snapshot.kind, "vbox");
        assert_eq!(snapshot.len(), 3);
        assert_eq!(snapshot.children[0].name, "bar");
        assert_eq!(snapshot.children[1].rect, Rect::new(0, 10, 40, 20));
        assert_eq!(snapshot.children[1].kind, "leaf");
    }
}
