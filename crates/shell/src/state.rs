//! Editor state
//!
//! Everything the widgets share: tool, colors, zoom, the document and the
//! active drag. Passed down the UI tree by reference every frame.

use easel_render::RenderColor;

/// Smallest zoom level in percent
pub const MIN_ZOOM: u32 = 25;

/// Largest zoom level in percent
pub const MAX_ZOOM: u32 = 800;

/// Size of a fresh document
pub const DEFAULT_DOCUMENT_SIZE: (i32, i32) = (480, 320);

/// Drawing tools on the shelf
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    Select,
    Pencil,
    Brush,
    Eraser,
    Fill,
    Picker,
    Line,
    Rectangle,
}

impl Tool {
    /// Shelf order, also the order of the `1`..`8` shortcuts
    pub const ALL: [Tool; 8] = [
        Tool::Select,
        Tool::Pencil,
        Tool::Brush,
        Tool::Eraser,
        Tool::Fill,
        Tool::Picker,
        Tool::Line,
        Tool::Rectangle,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tool::Select => "Select",
            Tool::Pencil => "Pencil",
            Tool::Brush => "Brush",
            Tool::Eraser => "Eraser",
            Tool::Fill => "Fill",
            Tool::Picker => "Picker",
            Tool::Line => "Line",
            Tool::Rectangle => "Rect",
        }
    }

    /// Tool for a shortcut digit, `1` being the first
    pub fn from_digit(digit: u32) -> Option<Tool> {
        let index = digit.checked_sub(1)? as usize;
        Tool::ALL.get(index).copied()
    }

    /// True for tools that leave freehand strokes
    pub fn draws(&self) -> bool {
        matches!(self, Tool::Pencil | Tool::Brush | Tool::Eraser)
    }

    /// Stroke width in document pixels
    pub fn stroke_width(&self) -> f32 {
        match self {
            Tool::Brush => 6.0,
            Tool::Eraser => 10.0,
            _ => 1.0,
        }
    }
}

/// Which of the two current colors a palette click targets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorRole {
    Foreground,
    Background,
}

/// A freehand stroke in document coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: RenderColor,
    pub width: f32,
    pub points: Vec<(i32, i32)>,
}

/// The picture being edited
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub width: i32,
    pub height: i32,
    pub strokes: Vec<Stroke>,
}

impl Document {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            width: width.max(1),
            height: height.max(1),
            strokes: Vec::new(),
        }
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DEFAULT_DOCUMENT_SIZE.0, DEFAULT_DOCUMENT_SIZE.1)
    }
}

/// A drag in progress, ended by any button release
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Drag {
    /// Appending to the last stroke of the document
    Stroke,
    /// Resizing the document from the grip
    ResizeCanvas {
        /// Pointer position when the drag started, window pixels
        origin: (i32, i32),
        /// Document size when the drag started
        start_size: (i32, i32),
    },
}

/// Shared state of the editor
#[derive(Debug, Clone)]
pub struct EditorState {
    pub tool: Tool,
    pub active_role: ColorRole,
    pub foreground: RenderColor,
    pub background: RenderColor,
    zoom: u32,
    pub document: Document,
    /// Pointer in window pixels, `None` outside the window
    pub pointer: Option<(i32, i32)>,
    /// Pointer in document pixels while it is over the page
    pub doc_pointer: Option<(i32, i32)>,
    pub drag: Option<Drag>,
    pub status: String,
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            tool: Tool::Pencil,
            active_role: ColorRole::Foreground,
            foreground: RenderColor::black(),
            background: RenderColor::white(),
            zoom: 100,
            document: Document::default(),
            pointer: None,
            doc_pointer: None,
            drag: None,
            status: String::from("Ready"),
        }
    }

    /// Zoom in percent
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom.saturating_mul(2));
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom / 2);
    }

    pub fn set_zoom(&mut self, zoom: u32) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        log::debug!("Zoom {}%", self.zoom);
    }

    /// Window-pixel length of `doc` document pixels
    pub fn to_screen(&self, doc: i32) -> i32 {
        doc * self.zoom as i32 / 100
    }

    /// Document-pixel length of `screen` window pixels, rounding down
    pub fn to_document(&self, screen: i32) -> i32 {
        (screen * 100).div_euclid(self.zoom as i32)
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::debug!("Tool {:?}", tool);
        }
        self.tool = tool;
        self.status = format!("{} tool", tool.label());
    }

    /// Color of the given role
    pub fn color(&self, role: ColorRole) -> RenderColor {
        match role {
            ColorRole::Foreground => self.foreground,
            ColorRole::Background => self.background,
        }
    }

    pub fn set_color(&mut self, role: ColorRole, color: RenderColor) {
        match role {
            ColorRole::Foreground => self.foreground = color,
            ColorRole::Background => self.background = color,
        }
        self.active_role = role;
    }

    pub fn swap_colors(&mut self) {
        std::mem::swap(&mut self.foreground, &mut self.background);
    }

    /// Start a stroke with the current tool at a document point
    ///
    /// Does nothing for tools that don't draw.
    pub fn begin_stroke(&mut self, point: (i32, i32)) {
        if !self.tool.draws() {
            return;
        }
        let color = match self.tool {
            Tool::Eraser => self.background,
            _ => self.foreground,
        };
        self.document.strokes.push(Stroke {
            color,
            width: self.tool.stroke_width(),
            points: vec![point],
        });
        self.drag = Some(Drag::Stroke);
    }

    /// Append a point to the stroke being drawn, skipping repeats
    pub fn extend_stroke(&mut self, point: (i32, i32)) {
        if self.drag != Some(Drag::Stroke) {
            return;
        }
        if let Some(stroke) = self.document.strokes.last_mut() {
            if stroke.points.last() != Some(&point) {
                stroke.points.push(point);
            }
        }
    }

    /// Start resizing the document from the window point `origin`
    pub fn begin_resize(&mut self, origin: (i32, i32)) {
        self.drag = Some(Drag::ResizeCanvas {
            origin,
            start_size: (self.document.width, self.document.height),
        });
    }

    /// Follow the pointer during a resize drag
    pub fn resize_to(&mut self, pointer: (i32, i32)) {
        let Some(Drag::ResizeCanvas { origin, start_size }) = self.drag else {
            return;
        };
        let width = start_size.0 + self.to_document(pointer.0 - origin.0);
        let height = start_size.1 + self.to_document(pointer.1 - origin.1);
        self.document.width = width.max(1);
        self.document.height = height.max(1);
    }

    pub fn end_drag(&mut self) {
        if let Some(drag) = self.drag.take() {
            log::trace!("Drag ended: {:?}", drag);
            if let Drag::ResizeCanvas { .. } = drag {
                self.status = format!("Canvas resized to {}x{}", self.document.width, self.document.height);
            }
        }
    }

    /// Drop every stroke, keeping the document size
    pub fn clear_document(&mut self) {
        self.drag = None;
        self.document.strokes.clear();
        self.status = String::from("New image");
    }
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}
