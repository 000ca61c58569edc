//! View catalog
//!
//! Every screen is a centered window laid out on a grid of
//! (glyph pitch x line height) units, so the same layout drives the 80x25
//! text backend and the 320x200 pixel backend. Geometry is recomputed on
//! every draw.

use super::nav::{NavState, MENU_ITEMS};
use super::palette::COLORS;
use crate::gfx::compositor::{self, WINDOW_PAINT};
use crate::gfx::{Color, Metrics, Paint, Rect, Surface};

const DIM_PAINT: Paint = Paint::new(Color::DarkGray, Color::White);

/// First grid row below the title band.
const CONTENT_ROW: i32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Menu,
    Hello,
    Help,
    About,
    Settings,
}

impl View {
    pub const fn title(self) -> &'static str {
        match self {
            View::Menu => "Start",
            View::Hello => "Hello",
            View::Help => "Help",
            View::About => "About",
            View::Settings => "Settings",
        }
    }

    /// Window size in grid units.
    const fn grid_size(self) -> (i32, i32) {
        match self {
            View::Menu => (30, 10),
            View::Hello => (40, 12),
            View::Help => (50, 15),
            View::About => (40, 12),
            View::Settings => (30, 16),
        }
    }

    /// Window rectangle in surface units, centered on the surface.
    pub fn geometry(self, m: &Metrics) -> Rect {
        let (cols, rows) = self.grid_size();
        Rect::centered(cols * m.pitch, rows * m.line_height, m.width, m.height)
    }

    /// Draw the window and its content. Reads selection and palette state
    /// from `state` and nothing else.
    pub fn draw<S: Surface + ?Sized>(self, surface: &mut S, state: &NavState) {
        let m = surface.metrics();
        let rect = self.geometry(&m);
        compositor::draw_window(surface, rect, Some(self.title()));

        let grid = Grid::new(rect, &m);
        match self {
            View::Menu => draw_menu(surface, &grid, state.menu_selection()),
            View::Hello => draw_hello(surface, &grid),
            View::Help => draw_help(surface, &grid),
            View::About => draw_about(surface, &grid),
            View::Settings => {
                draw_settings(surface, &grid, state.settings_selection(), state.background())
            }
        }
    }
}

/// Converts window-relative grid positions to surface coordinates.
struct Grid {
    origin: Rect,
    pitch: i32,
    line_height: i32,
}

impl Grid {
    fn new(origin: Rect, m: &Metrics) -> Self {
        Grid {
            origin,
            pitch: m.pitch,
            line_height: m.line_height,
        }
    }

    fn x(&self, col: i32) -> i32 {
        self.origin.x + col * self.pitch
    }

    fn y(&self, row: i32) -> i32 {
        self.origin.y + row * self.line_height
    }
}

fn cursor(selected: bool) -> &'static str {
    if selected {
        ">"
    } else {
        " "
    }
}

fn draw_menu<S: Surface + ?Sized>(surface: &mut S, grid: &Grid, selected: usize) {
    for (i, item) in MENU_ITEMS.iter().enumerate() {
        let y = grid.y(CONTENT_ROW + i as i32);
        compositor::draw_string(surface, cursor(i == selected), grid.x(4), y, WINDOW_PAINT);
        compositor::draw_string(surface, item.label(), grid.x(6), y, WINDOW_PAINT);
    }
}

fn draw_hello<S: Surface + ?Sized>(surface: &mut S, grid: &Grid) {
    compositor::draw_string_centered(surface, "HELLO WORLD", grid.y(5), WINDOW_PAINT);
    compositor::draw_string_centered(surface, "Press ESC to return", grid.y(8), DIM_PAINT);
}

const HELP_LINES: [&str; 3] = [
    "Use UP/DOWN arrows to navigate.",
    "Press ENTER to select.",
    "Press ESC to go back.",
];

fn draw_help<S: Surface + ?Sized>(surface: &mut S, grid: &Grid) {
    for (i, line) in HELP_LINES.iter().enumerate() {
        compositor::draw_string(surface, line, grid.x(4), grid.y(CONTENT_ROW + i as i32), WINDOW_PAINT);
    }
}

fn draw_about<S: Surface + ?Sized>(surface: &mut S, grid: &Grid) {
    compositor::draw_string_centered(surface, "BaseOS Kernel", grid.y(4), WINDOW_PAINT);
    compositor::draw_string_centered(surface, "Version 0.1.0", grid.y(5), DIM_PAINT);
    compositor::draw_string_centered(surface, "(c) 2025 CCG", grid.y(7), WINDOW_PAINT);
    compositor::draw_string_centered(surface, "All Rights Reserved", grid.y(8), WINDOW_PAINT);
}

const SETTINGS_HINT: &str = "ENTER apply - ESC back";

fn draw_settings<S: Surface + ?Sized>(surface: &mut S, grid: &Grid, selected: usize, committed: usize) {
    for (i, entry) in COLORS.iter().enumerate() {
        let y = grid.y(CONTENT_ROW + i as i32);
        compositor::draw_string(surface, cursor(i == selected), grid.x(2), y, WINDOW_PAINT);
        compositor::draw_swatch(surface, grid.x(4), y, entry.color);
        compositor::draw_string(surface, entry.name, grid.x(6), y, WINDOW_PAINT);
        if i == committed {
            compositor::draw_string(surface, "*", grid.x(20), y, WINDOW_PAINT);
        }
    }
    let hint_row = CONTENT_ROW + COLORS.len() as i32;
    compositor::draw_string_centered(surface, SETTINGS_HINT, grid.y(hint_row), DIM_PAINT);
}
