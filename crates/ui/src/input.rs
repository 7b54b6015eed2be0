//! Input types
//!
//! Mouse button edges as delivered to the element tree.

/// Mouse button types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u8),
}

/// Press or release edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonAction {
    Press,
    Release,
}

/// Keyboard modifier state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Modifiers {
    /// Ctrl key is held
    pub ctrl: bool,
    /// Alt key is held
    pub alt: bool,
    /// Shift key is held
    pub shift: bool,
}

/// One mouse button edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseClick {
    pub button: MouseButton,
    pub action: ButtonAction,
    pub modifiers: Modifiers,
}

impl MouseClick {
    pub fn new(button: MouseButton, action: ButtonAction, modifiers: Modifiers) -> Self {
        Self {
            button,
            action,
            modifiers,
        }
    }

    /// Unmodified press
    pub fn press(button: MouseButton) -> Self {
        Self::new(button, ButtonAction::Press, Modifiers::default())
    }

    /// Unmodified release
    pub fn release(button: MouseButton) -> Self {
        Self::new(button, ButtonAction::Release, Modifiers::default())
    }

    pub fn is_press(&self) -> bool {
        self.action == ButtonAction::Press
    }
}
