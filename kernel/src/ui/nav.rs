//! Navigation state machine
//!
//! Pure state transitions: a key goes in, the state and its redraw flags
//! come out. Drawing and hardware effects happen in the caller.

use super::palette::{COLORS, COLOR_COUNT};
use super::views::View;
use crate::drivers::keyboard::Key;
use crate::gfx::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Help,
    Hello,
    About,
    Settings,
    Shutdown,
}

pub const MENU_ITEMS: [MenuItem; 5] = [
    MenuItem::Help,
    MenuItem::Hello,
    MenuItem::About,
    MenuItem::Settings,
    MenuItem::Shutdown,
];

pub const MENU_COUNT: usize = MENU_ITEMS.len();

impl MenuItem {
    pub const fn label(self) -> &'static str {
        match self {
            MenuItem::Help => "HELP",
            MenuItem::Hello => "HELLO",
            MenuItem::About => "ABOUT",
            MenuItem::Settings => "SETTINGS",
            MenuItem::Shutdown => "SHUTDOWN",
        }
    }

    /// View opened by this item; `None` for the terminal shutdown entry.
    pub const fn target(self) -> Option<View> {
        match self {
            MenuItem::Help => Some(View::Help),
            MenuItem::Hello => Some(View::Hello),
            MenuItem::About => Some(View::About),
            MenuItem::Settings => Some(View::Settings),
            MenuItem::Shutdown => None,
        }
    }
}

/// Effects the state machine cannot carry out itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavState {
    view: View,
    menu_selection: usize,
    settings_selection: usize,
    background: usize,
    dirty: bool,
    full_redraw: bool,
}

impl Default for NavState {
    fn default() -> Self {
        Self::new()
    }
}

impl NavState {
    /// Startup state: menu, first entries selected, everything to paint.
    pub const fn new() -> Self {
        NavState {
            view: View::Menu,
            menu_selection: 0,
            settings_selection: 0,
            background: 0,
            dirty: true,
            full_redraw: true,
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn menu_selection(&self) -> usize {
        self.menu_selection
    }

    pub fn settings_selection(&self) -> usize {
        self.settings_selection
    }

    /// Index into [`COLORS`] of the committed desktop color.
    pub fn background(&self) -> usize {
        self.background
    }

    pub fn background_color(&self) -> Color {
        COLORS[self.background].color
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn needs_full_redraw(&self) -> bool {
        self.full_redraw
    }

    pub fn background_painted(&mut self) {
        self.full_redraw = false;
    }

    pub fn redraw_done(&mut self) {
        self.dirty = false;
        self.full_redraw = false;
    }

    /// Apply one key press.
    ///
    /// Returns a command when the key asks for something outside the UI.
    /// On [`Command::Shutdown`] the state is left exactly as it was.
    pub fn handle(&mut self, key: Key) -> Option<Command> {
        match (self.view, key) {
            (View::Menu, Key::Up) => {
                self.menu_selection = wrap_prev(self.menu_selection, MENU_COUNT);
                self.dirty = true;
            }
            (View::Menu, Key::Down) => {
                self.menu_selection = wrap_next(self.menu_selection, MENU_COUNT);
                self.dirty = true;
            }
            (View::Menu, Key::Enter) => match MENU_ITEMS[self.menu_selection].target() {
                Some(view) => self.open(view),
                None => return Some(Command::Shutdown),
            },
            (View::Menu, Key::Escape) => {}

            (View::Settings, Key::Up) => {
                self.settings_selection = wrap_prev(self.settings_selection, COLOR_COUNT);
                self.dirty = true;
            }
            (View::Settings, Key::Down) => {
                self.settings_selection = wrap_next(self.settings_selection, COLOR_COUNT);
                self.dirty = true;
            }
            (View::Settings, Key::Enter) => {
                // New desktop color: the whole background has to be repainted.
                self.background = self.settings_selection;
                self.dirty = true;
                self.full_redraw = true;
            }

            (_, Key::Escape) => self.open(View::Menu),
            _ => {}
        }
        None
    }

    fn open(&mut self, view: View) {
        self.view = view;
        self.dirty = true;
        self.full_redraw = true;
    }
}

const fn wrap_prev(index: usize, count: usize) -> usize {
    if index == 0 {
        count - 1
    } else {
        index - 1
    }
}

const fn wrap_next(index: usize, count: usize) -> usize {
    if index + 1 >= count {
        0
    } else {
        index + 1
    }
}
