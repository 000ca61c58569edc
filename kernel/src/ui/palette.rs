//! Desktop colors offered by the settings screen

use crate::gfx::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamedColor {
    pub name: &'static str,
    pub color: Color,
}

const fn named(name: &'static str, color: Color) -> NamedColor {
    NamedColor { name, color }
}

/// Entry 0 is the startup desktop color.
pub const COLORS: [NamedColor; 10] = [
    named("CYAN", Color::Cyan),
    named("BLUE", Color::Blue),
    named("GREEN", Color::Green),
    named("RED", Color::Red),
    named("MAGENTA", Color::Magenta),
    named("BROWN", Color::Brown),
    named("GREY", Color::LightGray),
    named("DARK GREY", Color::DarkGray),
    named("LIGHT BLUE", Color::LightBlue),
    named("BLACK", Color::Black),
];

pub const COLOR_COUNT: usize = COLORS.len();
