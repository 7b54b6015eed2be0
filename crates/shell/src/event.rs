//! SDL event handling
//!
//! Polls SDL events and converts them to shell events.

use easel_ui::{Modifiers, MouseButton};

/// Shell event types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// Close the window
    Quit,
    /// Mouse button pressed
    MouseDown { x: i32, y: i32, button: MouseButton },
    /// Mouse button released
    MouseUp { x: i32, y: i32, button: MouseButton },
    /// Mouse moved
    MouseMove { x: i32, y: i32 },
    /// Pointer left the window
    MouseLeave,
    /// Key pressed
    KeyDown { scancode: u32, modifiers: Modifiers },
    /// Window resize
    WindowResize { width: u32, height: u32 },
}

// SDL event type constants
const SDL_QUIT: u32 = 0x100;
const SDL_WINDOWEVENT: u32 = 0x200;
const SDL_KEYDOWN: u32 = 0x300;
const SDL_MOUSEMOTION: u32 = 0x400;
const SDL_MOUSEBUTTONDOWN: u32 = 0x401;
const SDL_MOUSEBUTTONUP: u32 = 0x402;

// SDL scancode constants
pub const SCANCODE_ESCAPE: u32 = 41;
pub const SCANCODE_F1: u32 = 58;
pub const SCANCODE_N: u32 = 17;
pub const SCANCODE_X: u32 = 27;

// Digit row, 1 through 9 are contiguous
pub const SCANCODE_1: u32 = 30;
pub const SCANCODE_9: u32 = 38;

// Zoom keys
pub const SCANCODE_MINUS: u32 = 45;
pub const SCANCODE_EQUALS: u32 = 46;
pub const SCANCODE_KP_MINUS: u32 = 86;
pub const SCANCODE_KP_PLUS: u32 = 87;

// SDL keyboard modifier masks
const KMOD_CTRL: u16 = 0x00C0;
const KMOD_ALT: u16 = 0x0300;
const KMOD_SHIFT: u16 = 0x0003;

// SDL window event subtypes
const SDL_WINDOWEVENT_SIZE_CHANGED: u8 = 6;
const SDL_WINDOWEVENT_LEAVE: u8 = 11;
const SDL_WINDOWEVENT_CLOSE: u8 = 14;

fn mouse_button(raw: u8) -> MouseButton {
    match raw {
        1 => MouseButton::Left,
        2 => MouseButton::Middle,
        3 => MouseButton::Right,
        b => MouseButton::Other(b),
    }
}

/// Digit for a digit-row scancode
pub fn scancode_digit(scancode: u32) -> Option<u32> {
    (SCANCODE_1..=SCANCODE_9)
        .contains(&scancode)
        .then(|| scancode - SCANCODE_1 + 1)
}

/// Poll all pending SDL events
///
/// # Safety
/// This function uses raw SDL2 calls.
pub fn poll_events() -> Vec<ShellEvent> {
    let mut events = Vec::new();

    unsafe {
        let mut raw_event: sdl2::sys::SDL_Event = std::mem::zeroed();

        while sdl2::sys::SDL_PollEvent(&mut raw_event) != 0 {
            match raw_event.type_ {
                SDL_QUIT => {
                    events.push(ShellEvent::Quit);
                }

                SDL_KEYDOWN => {
                    let key_event = raw_event.key;
                    let scancode = key_event.keysym.scancode as u32;
                    let mod_state = key_event.keysym.mod_;
                    let modifiers = Modifiers {
                        ctrl: (mod_state & KMOD_CTRL) != 0,
                        alt: (mod_state & KMOD_ALT) != 0,
                        shift: (mod_state & KMOD_SHIFT) != 0,
                    };
                    events.push(ShellEvent::KeyDown { scancode, modifiers });
                }

                SDL_MOUSEMOTION => {
                    let motion_event = raw_event.motion;
                    events.push(ShellEvent::MouseMove {
                        x: motion_event.x,
                        y: motion_event.y,
                    });
                }

                SDL_MOUSEBUTTONDOWN => {
                    let button_event = raw_event.button;
                    events.push(ShellEvent::MouseDown {
                        x: button_event.x,
                        y: button_event.y,
                        button: mouse_button(button_event.button),
                    });
                }

                SDL_MOUSEBUTTONUP => {
                    let button_event = raw_event.button;
                    events.push(ShellEvent::MouseUp {
                        x: button_event.x,
                        y: button_event.y,
                        button: mouse_button(button_event.button),
                    });
                }

                SDL_WINDOWEVENT => {
                    let window_event = raw_event.window;
                    match window_event.event {
                        SDL_WINDOWEVENT_CLOSE => {
                            events.push(ShellEvent::Quit);
                        }
                        SDL_WINDOWEVENT_SIZE_CHANGED => {
                            events.push(ShellEvent::WindowResize {
                                width: window_event.data1.max(0) as u32,
                                height: window_event.data2.max(0) as u32,
                            });
                        }
                        SDL_WINDOWEVENT_LEAVE => {
                            events.push(ShellEvent::MouseLeave);
                        }
                        _ => {}
                    }
                }

                _ => {
                    // Ignore unknown events
                }
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scancode_digits() {
        assert_eq!(scancode_digit(SCANCODE_1), Some(1));
        assert_eq!(scancode_digit(37), Some(8));
        assert_eq!(scancode_digit(39), None);
        assert_eq!(scancode_digit(SCANCODE_X), None);
    }

    #[test]
    fn test_mouse_buttons() {
        assert_eq!(mouse_button(1), MouseButton::Left);
        assert_eq!(mouse_button(3), MouseButton::Right);
        assert_eq!(mouse_button(4), MouseButton::Other(4));
    }
}
