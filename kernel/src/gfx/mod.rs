//! Drawing surface shared by the text-mode and pixel-mode backends
//!
//! Everything above this layer (compositor, views, navigation) is written
//! against [`Surface`] and never touches video memory directly.

pub mod compositor;
pub mod font;

#[cfg(test)]
pub(crate) mod canvas;

/// Standard 16-entry VGA palette. Mode 13h keeps the same first sixteen
/// entries, so one set of indices serves both backends.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0x0,
    Blue = 0x1,
    Green = 0x2,
    Cyan = 0x3,
    Red = 0x4,
    Magenta = 0x5,
    Brown = 0x6,
    LightGray = 0x7,
    DarkGray = 0x8,
    LightBlue = 0x9,
    LightGreen = 0xA,
    LightCyan = 0xB,
    LightRed = 0xC,
    Pink = 0xD,
    Yellow = 0xE,
    White = 0xF,
}

impl Color {
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }
}

/// Foreground/background pair used for text and borders.
///
/// The pixel backend draws text transparently and only reads `fg`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub fg: Color,
    pub bg: Color,
}

impl Paint {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Paint { fg, bg }
    }
}

/// Axis-aligned rectangle in surface units (cells or pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    /// A `w`x`h` rectangle centered on a surface of the given size.
    pub const fn centered(w: i32, h: i32, surface_w: i32, surface_h: i32) -> Self {
        Rect::new((surface_w - w) / 2, (surface_h - h) / 2, w, h)
    }

    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Rect::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    pub const fn right(&self) -> i32 {
        self.x + self.w - 1
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.h - 1
    }
}

/// Fixed geometry of a backend. All values are in surface units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Metrics {
    pub width: i32,
    pub height: i32,
    /// Horizontal advance per character.
    pub pitch: i32,
    /// Vertical advance per text row.
    pub line_height: i32,
    /// Drop shadow offset on both axes.
    pub shadow: i32,
    /// Offset of the title text below the window top.
    pub title_row: i32,
    /// Offset of the title separator below the window top.
    pub title_band: i32,
    /// Edge length of a color swatch.
    pub swatch: i32,
}

impl Metrics {
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && x < self.width && y < self.height
    }

    /// Cell index of `(x, y)` in a row-major buffer, `None` when off-surface.
    #[inline]
    pub const fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    pub const fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Write-only display memory.
///
/// Writes outside `[0, width) x [0, height)` are dropped silently. Nothing
/// is buffered: every call lands in video memory immediately.
pub trait Surface {
    fn metrics(&self) -> Metrics;

    /// Fill one cell with a solid color.
    fn plot(&mut self, x: i32, y: i32, color: Color);

    /// Fill every cell with a solid color.
    fn clear(&mut self, color: Color);

    /// Draw one character with its top-left corner at `(x, y)`.
    fn put_glyph(&mut self, c: u8, x: i32, y: i32, paint: Paint);

    /// One-unit border around `rect`.
    fn frame(&mut self, rect: Rect, paint: Paint);

    /// Horizontal rule `w` units wide that joins the window border.
    fn separator(&mut self, x: i32, y: i32, w: i32, paint: Paint);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_splits_slack_evenly() {
        let r = Rect::centered(30, 10, 80, 25);
        assert_eq!(r, Rect::new(25, 7, 30, 10));
        assert_eq!(r.right(), 54);
        assert_eq!(r.bottom(), 16);
    }

    #[test]
    fn index_rejects_every_edge() {
        let m = Metrics {
            width: 4,
            height: 3,
            pitch: 1,
            line_height: 1,
            shadow: 1,
            title_row: 1,
            title_band: 2,
            swatch: 1,
        };
        assert_eq!(m.index(0, 0), Some(0));
        assert_eq!(m.index(3, 2), Some(11));
        assert_eq!(m.index(-1, 0), None);
        assert_eq!(m.index(0, -1), None);
        assert_eq!(m.index(4, 0), None);
        assert_eq!(m.index(0, 3), None);
    }
}
