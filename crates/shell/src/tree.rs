//! The editor's element tree
//!
//! Menu bar on top, tool shelf on the left, the canvas filling the rest,
//! then the palette and the status bar along the bottom.

use easel_render::RenderColor;
use easel_ui::{Element, GridLayout, SizeHint};

use crate::canvas::{CanvasView, ResizeGrip};
use crate::chrome::{Label, MenuEntry, Panel, Side, StatusBar};
use crate::state::{EditorState, Tool};
use crate::tools::{ColorRoles, Swatch, ToolButton};

pub const MENU_BAR_HEIGHT: i32 = 24;
pub const STATUS_BAR_HEIGHT: i32 = 22;
pub const PALETTE_HEIGHT: i32 = 44;
pub const SHELF_WIDTH: i32 = 120;

const MENU_ENTRY_WIDTH: i32 = 56;
const TOOL_ROWS: i32 = 4;
const TOOL_COLS: i32 = 2;
const TOOL_BUTTON_HEIGHT: i32 = 28;
const TOOL_SPACING: i32 = 2;
const COLOR_ROLES_HEIGHT: i32 = 56;
const GRIP_SIZE: i32 = 12;
const SWATCH_SIZE: i32 = 18;
const SWATCH_SPACING: i32 = 2;
const PALETTE_ROWS: i32 = 2;

const CHROME_COLOR: RenderColor = RenderColor::rgb(245, 246, 247);
const SEPARATOR_COLOR: RenderColor = RenderColor::rgb(218, 219, 220);
const STATUS_COLOR: RenderColor = RenderColor::rgb(240, 240, 240);

pub const MENUS: [&str; 6] = ["File", "Edit", "View", "Image", "Colors", "Help"];

/// Default palette, two rows
pub const PALETTE: [RenderColor; 28] = [
    RenderColor::rgb(0, 0, 0),
    RenderColor::rgb(128, 128, 128),
    RenderColor::rgb(128, 0, 0),
    RenderColor::rgb(128, 128, 0),
    RenderColor::rgb(0, 128, 0),
    RenderColor::rgb(0, 128, 128),
    RenderColor::rgb(0, 0, 128),
    RenderColor::rgb(128, 0, 128),
    RenderColor::rgb(128, 128, 64),
    RenderColor::rgb(0, 64, 64),
    RenderColor::rgb(0, 128, 255),
    RenderColor::rgb(0, 64, 128),
    RenderColor::rgb(64, 0, 255),
    RenderColor::rgb(128, 64, 0),
    RenderColor::rgb(255, 255, 255),
    RenderColor::rgb(192, 192, 192),
    RenderColor::rgb(255, 0, 0),
    RenderColor::rgb(255, 255, 0),
    RenderColor::rgb(0, 255, 0),
    RenderColor::rgb(0, 255, 255),
    RenderColor::rgb(0, 0, 255),
    RenderColor::rgb(255, 0, 255),
    RenderColor::rgb(255, 255, 128),
    RenderColor::rgb(0, 255, 128),
    RenderColor::rgb(128, 255, 255),
    RenderColor::rgb(128, 128, 255),
    RenderColor::rgb(255, 0, 128),
    RenderColor::rgb(255, 128, 64),
];

fn menu_bar() -> Element<EditorState> {
    let entries = MENUS.iter().map(|&label| {
        Element::leaf(MenuEntry::new(label))
            .named(label)
            .tracking_mouse()
            .with_hint(SizeHint::width(MENU_ENTRY_WIDTH))
    });

    Element::hbox()
        .named("menubar")
        .with_widget(Panel::new(CHROME_COLOR).with_separator(Side::Bottom, SEPARATOR_COLOR))
        .with_hint(SizeHint::height(MENU_BAR_HEIGHT))
        .with_children(entries)
        .with_child(Element::empty())
}

fn shelf() -> Element<EditorState> {
    let tools_height = TOOL_ROWS * TOOL_BUTTON_HEIGHT + (TOOL_ROWS - 1) * TOOL_SPACING;
    let buttons = Tool::ALL.iter().map(|&tool| {
        Element::leaf(ToolButton::new(tool))
            .named(tool.label())
            .tracking_mouse()
    });

    Element::vbox()
        .named("shelf")
        .with_widget(Panel::new(CHROME_COLOR).with_separator(Side::Right, SEPARATOR_COLOR))
        .with_hint(SizeHint::width(SHELF_WIDTH))
        .with_child(Element::empty().with_hint(SizeHint::height(4)))
        .with_child(
            Element::grid(GridLayout::new(TOOL_ROWS, TOOL_COLS).with_spacing(TOOL_SPACING, TOOL_SPACING))
                .named("tools")
                .with_hint(SizeHint::height(tools_height))
                .with_children(buttons),
        )
        .with_child(Element::empty().with_hint(SizeHint::height(8)))
        .with_child(Element::leaf(Label::new("Colors")).with_hint(SizeHint::height(18)))
        .with_child(
            Element::leaf(ColorRoles)
                .named("roles")
                .with_hint(SizeHint::height(COLOR_ROLES_HEIGHT)),
        )
        .with_child(Element::empty())
}

fn canvas_area() -> Element<EditorState> {
    let grip_row = Element::hbox()
        .with_hint(SizeHint::height(GRIP_SIZE))
        .with_child(Element::empty())
        .with_child(
            Element::leaf(ResizeGrip::new())
                .named("grip")
                .with_hint(SizeHint::width(GRIP_SIZE)),
        );

    Element::vbox()
        .named("canvas-area")
        .with_child(Element::leaf(CanvasView::new()).named("canvas"))
        .with_child(grip_row)
}

fn palette() -> Element<EditorState> {
    let cols = PALETTE.len() as i32 / PALETTE_ROWS;
    let width = cols * SWATCH_SIZE + (cols - 1) * SWATCH_SPACING;
    let height = PALETTE_ROWS * SWATCH_SIZE + (PALETTE_ROWS - 1) * SWATCH_SPACING;
    let pad = (PALETTE_HEIGHT - height) / 2;

    let swatches = Element::grid(GridLayout::new(PALETTE_ROWS, cols).with_spacing(SWATCH_SPACING, SWATCH_SPACING))
        .named("swatches")
        .with_children(PALETTE.iter().map(|&color| Element::leaf(Swatch::new(color))));

    Element::hbox()
        .named("palette")
        .with_widget(Panel::new(CHROME_COLOR).with_separator(Side::Top, SEPARATOR_COLOR))
        .with_hint(SizeHint::height(PALETTE_HEIGHT))
        .with_child(Element::empty().with_hint(SizeHint::width(SHELF_WIDTH)))
        .with_child(
            Element::vbox()
                .with_hint(SizeHint::width(width))
                .with_child(Element::empty().with_hint(SizeHint::height(pad)))
                .with_child(swatches.with_hint(SizeHint::height(height)))
                .with_child(Element::empty()),
        )
        .with_child(Element::empty())
}

/// Build the editor's element tree, unplaced
pub fn build_ui() -> Element<EditorState> {
    let body = Element::hbox()
        .named("body")
        .with_child(shelf())
        .with_child(canvas_area());

    Element::vbox()
        .named("root")
        .with_child(menu_bar())
        .with_child(body)
        .with_child(palette())
        .with_child(
            Element::hbox()
                .named("status")
                .with_widget(Panel::new(STATUS_COLOR).with_separator(Side::Top, SEPARATOR_COLOR))
                .with_hint(SizeHint::height(STATUS_BAR_HEIGHT))
                .with_child(Element::leaf(StatusBar)),
        )
}
