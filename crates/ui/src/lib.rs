//! Easel UI
//!
//! Retained element tree with box and grid layouts, hover tracking and
//! click routing, driven one frame at a time.

mod box_layout;
mod container;
mod element;
mod frame;
mod geometry;
mod grid;
mod input;
mod mouse;
mod snapshot;
mod widget;

pub use box_layout::BoxLayout;
pub use container::{Container, LayoutKind};
pub use element::Element;
pub use frame::Ui;
pub use geometry::{Axis, Rect, SizeHint};
pub use grid::GridLayout;
pub use input::{ButtonAction, Modifiers, MouseButton, MouseClick};
pub use mouse::{MouseEdge, MouseTracker};
pub use snapshot::LayoutSnapshot;
pub use widget::{PaintContext, Widget};
