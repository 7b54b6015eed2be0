//! Easel Shell
//!
//! Editor state, the paint widgets, the element tree and the SDL window
//! driving it.

mod canvas;
mod chrome;
mod error;
mod event;
mod state;
mod tools;
mod transition;
mod tree;

pub use canvas::{CanvasView, ResizeGrip};
pub use chrome::{Label, MenuEntry, Panel, Side, StatusBar};
pub use error::{ShellError, ShellResult};
pub use state::{ColorRole, Document, Drag, EditorState, Stroke, Tool, MAX_ZOOM, MIN_ZOOM};
pub use tools::{ColorRoles, Swatch, ToolButton};
pub use transition::{apply_easing, Fade, TimingFunction};
pub use tree::build_ui;

use easel_render::{CursorType, DisplayList, RenderBackend, RenderColor, SdlBackend};
use easel_ui::{Element, Modifiers, MouseClick, Ui};

use crate::event::{poll_events, scancode_digit, ShellEvent};

/// Window background behind the element tree
const CLEAR_COLOR: RenderColor = RenderColor::rgb(240, 240, 240);

/// Shell configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Start with the hit-test overlay on
    pub debug_hits: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            title: String::from("Easel"),
            width: 1024,
            height: 768,
            debug_hits: false,
        }
    }
}

/// Parse a `WIDTHxHEIGHT` window size
pub fn parse_size(text: &str) -> ShellResult<(u32, u32)> {
    let bad = || ShellError::BadSize(text.to_string());
    let (width, height) = text.split_once(['x', 'X']).ok_or_else(bad)?;
    let width: i64 = width.trim().parse().map_err(|_| bad())?;
    let height: i64 = height.trim().parse().map_err(|_| bad())?;
    validate_size(width, height)
}

fn validate_size(width: i64, height: i64) -> ShellResult<(u32, u32)> {
    if width <= 0 || height <= 0 || width > i32::MAX as i64 || height > i32::MAX as i64 {
        return Err(ShellError::InvalidSize { width, height });
    }
    Ok((width as u32, height as u32))
}

/// Lay the editor out at the given size without opening a window and
/// return the layout as pretty-printed JSON
pub fn dump_layout(width: u32, height: u32) -> ShellResult<String> {
    let (width, height) = validate_size(width as i64, height as i64)?;
    let mut ui = Ui::new(build_ui());
    ui.resize(width as i32, height as i32);
    Ok(serde_json::to_string_pretty(&ui.snapshot())?)
}

/// What a key press asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Quit,
    ToggleOverlay,
}

/// Apply a keyboard shortcut to the editor state
pub fn handle_key(scancode: u32, modifiers: Modifiers, state: &mut EditorState) -> KeyAction {
    use crate::event::{
        SCANCODE_EQUALS, SCANCODE_ESCAPE, SCANCODE_F1, SCANCODE_KP_MINUS, SCANCODE_KP_PLUS, SCANCODE_MINUS,
        SCANCODE_N, SCANCODE_X,
    };

    // Ctrl+N: New image
    if modifiers.ctrl {
        if scancode == SCANCODE_N {
            state.clear_document();
        }
        return KeyAction::None;
    }

    match scancode {
        SCANCODE_ESCAPE => return KeyAction::Quit,
        SCANCODE_F1 => return KeyAction::ToggleOverlay,
        SCANCODE_EQUALS | SCANCODE_KP_PLUS => state.zoom_in(),
        SCANCODE_MINUS | SCANCODE_KP_MINUS => state.zoom_out(),
        SCANCODE_X => state.swap_colors(),
        _ => {
            if let Some(tool) = scancode_digit(scancode).and_then(Tool::from_digit) {
                state.set_tool(tool);
            }
        }
    }
    KeyAction::None
}

/// Cursor matching what the pointer is over
pub fn cursor_for(root: &Element<EditorState>, state: &EditorState) -> CursorType {
    let hit = |name: &str| root.find(name).is_some_and(Element::is_hit);

    match state.drag {
        Some(Drag::ResizeCanvas { .. }) => return CursorType::ResizeDiagonal,
        Some(Drag::Stroke) => return CursorType::Crosshair,
        None => {}
    }

    if hit("grip") {
        CursorType::ResizeDiagonal
    } else if state.doc_pointer.is_some() && state.tool.draws() {
        CursorType::Crosshair
    } else if ["menubar", "tools", "swatches", "roles"].into_iter().any(hit) {
        CursorType::Hand
    } else {
        CursorType::Arrow
    }
}

/// The editor window
pub struct Shell {
    pub config: ShellConfig,
    backend: SdlBackend,
    ui: Ui<EditorState>,
    state: EditorState,
    display_list: DisplayList,
    current_cursor: CursorType,
}

impl Shell {
    /// Open the window and build the editor
    pub fn new(config: ShellConfig) -> ShellResult<Self> {
        let (width, height) = validate_size(config.width as i64, config.height as i64)?;
        let backend = SdlBackend::new(&config.title, width, height)?;

        let mut ui = Ui::new(build_ui());
        ui.set_debug_overlay(config.debug_hits);
        ui.resize(width as i32, height as i32);

        log::info!("Window {}x{} ready", width, height);

        Ok(Self {
            config,
            backend,
            ui,
            state: EditorState::new(),
            display_list: DisplayList::new(),
            current_cursor: CursorType::Arrow,
        })
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Run the frame loop until the window is closed
    pub fn run(&mut self) -> ShellResult<()> {
        'running: loop {
            self.ui.begin_frame(&mut self.state);

            for event in poll_events() {
                match event {
                    ShellEvent::Quit => {
                        break 'running;
                    }

                    ShellEvent::KeyDown { scancode, modifiers } => {
                        match handle_key(scancode, modifiers, &mut self.state) {
                            KeyAction::Quit => break 'running,
                            KeyAction::ToggleOverlay => {
                                let enabled = !self.ui.debug_overlay();
                                log::info!("Hit-test overlay {}", if enabled { "on" } else { "off" });
                                self.ui.set_debug_overlay(enabled);
                            }
                            KeyAction::None => {}
                        }
                    }

                    ShellEvent::MouseMove { x, y } => {
                        log::trace!("MouseMove: x={}, y={}", x, y);
                        self.state.pointer = Some((x, y));
                        self.ui.pointer_moved(x, y);
                    }

                    ShellEvent::MouseDown { x, y, button } => {
                        self.state.pointer = Some((x, y));
                        self.ui.pointer_moved(x, y);
                        self.ui.click(MouseClick::press(button), &mut self.state);
                    }

                    ShellEvent::MouseUp { x, y, button } => {
                        // The release may land outside the widget that started the drag
                        self.state.end_drag();
                        self.state.pointer = Some((x, y));
                        self.ui.pointer_moved(x, y);
                        self.ui.click(MouseClick::release(button), &mut self.state);
                    }

                    ShellEvent::MouseLeave => {
                        self.state.pointer = None;
                        self.ui.pointer_left();
                    }

                    ShellEvent::WindowResize { width, height } => {
                        self.config.width = width;
                        self.config.height = height;
                        self.backend.resize(width, height);
                        self.ui.resize(width as i32, height as i32);
                    }
                }
            }

            self.render();
            self.update_cursor();

            // Small sleep to avoid busy-waiting (~60 FPS)
            std::thread::sleep(std::time::Duration::from_millis(16));
        }

        log::info!("Shutting down");
        Ok(())
    }

    fn update_cursor(&mut self) {
        let desired_cursor = cursor_for(self.ui.root(), &self.state);
        if desired_cursor != self.current_cursor {
            self.current_cursor = desired_cursor;
            self.backend.set_cursor(desired_cursor);
        }
    }

    /// Tick and paint one frame
    fn render(&mut self) {
        self.display_list.clear();
        self.ui.end_frame(&mut self.state, &mut self.display_list);

        self.backend.clear(CLEAR_COLOR);
        self.backend.render(&self.display_list);
        self.backend.present();
    }
}
