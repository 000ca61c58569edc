//! VGA text-mode backend
//!
//! 80x25 cells at 0xB8000, two bytes per cell: code page 437 character,
//! then attribute `(background << 4) | foreground`.

use volatile::Volatile;

use crate::gfx::{Color, Metrics, Paint, Rect, Surface};

const VGA_BUFFER: usize = 0xB8000;
const VGA_WIDTH: i32 = 80;
const VGA_HEIGHT: i32 = 25;

pub const METRICS: Metrics = Metrics {
    width: VGA_WIDTH,
    height: VGA_HEIGHT,
    pitch: 1,
    line_height: 1,
    shadow: 1,
    title_row: 1,
    title_band: 2,
    swatch: 1,
};

// Code page 437 box drawing
const BOX_TOP_LEFT: u8 = 218;
const BOX_TOP_RIGHT: u8 = 191;
const BOX_BOTTOM_LEFT: u8 = 192;
const BOX_BOTTOM_RIGHT: u8 = 217;
const BOX_HORIZONTAL: u8 = 196;
const BOX_VERTICAL: u8 = 179;
const BOX_TEE_LEFT: u8 = 195;
const BOX_TEE_RIGHT: u8 = 180;

pub const fn color_code(fg: Color, bg: Color) -> u8 {
    ((bg as u8) << 4) | (fg as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenChar {
    pub ascii: u8,
    pub color: u8,
}

impl ScreenChar {
    pub const fn new(ascii: u8, color: u8) -> Self {
        ScreenChar { ascii, color }
    }
}

pub struct TextSurface<'a> {
    cells: &'a mut [Volatile<ScreenChar>],
}

impl<'a> TextSurface<'a> {
    /// Wrap a row-major 80x25 cell buffer.
    pub fn new(cells: &'a mut [Volatile<ScreenChar>]) -> Self {
        debug_assert_eq!(cells.len(), METRICS.cell_count());
        TextSurface { cells }
    }

    fn write_cell(&mut self, x: i32, y: i32, ascii: u8, color: u8) {
        let Some(index) = METRICS.index(x, y) else {
            return;
        };
        if let Some(cell) = self.cells.get_mut(index) {
            cell.write(ScreenChar::new(ascii, color));
        }
    }
}

impl TextSurface<'static> {
    /// The hardware text buffer.
    ///
    /// # Safety
    ///
    /// The display must be in 80x25 text mode with 0xB8000 identity-mapped,
    /// and no other `TextSurface` over it may be alive.
    pub unsafe fn vga() -> Self {
        let cells = core::slice::from_raw_parts_mut(
            VGA_BUFFER as *mut Volatile<ScreenChar>,
            METRICS.cell_count(),
        );
        TextSurface::new(cells)
    }
}

impl Surface for TextSurface<'_> {
    fn metrics(&self) -> Metrics {
        METRICS
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        self.write_cell(x, y, b' ', color_code(Color::White, color));
    }

    fn clear(&mut self, color: Color) {
        let blank = ScreenChar::new(b' ', color_code(Color::White, color));
        for cell in self.cells.iter_mut() {
            cell.write(blank);
        }
    }

    fn put_glyph(&mut self, c: u8, x: i32, y: i32, paint: Paint) {
        self.write_cell(x, y, c, color_code(paint.fg, paint.bg));
    }

    fn frame(&mut self, rect: Rect, paint: Paint) {
        let color = color_code(paint.fg, paint.bg);
        let (left, top, right, bottom) = (rect.x, rect.y, rect.right(), rect.bottom());

        for x in left + 1..right {
            self.write_cell(x, top, BOX_HORIZONTAL, color);
            self.write_cell(x, bottom, BOX_HORIZONTAL, color);
        }
        for y in top + 1..bottom {
            self.write_cell(left, y, BOX_VERTICAL, color);
            self.write_cell(right, y, BOX_VERTICAL, color);
        }

        self.write_cell(left, top, BOX_TOP_LEFT, color);
        self.write_cell(right, top, BOX_TOP_RIGHT, color);
        self.write_cell(left, bottom, BOX_BOTTOM_LEFT, color);
        self.write_cell(right, bottom, BOX_BOTTOM_RIGHT, color);
    }

    fn separator(&mut self, x: i32, y: i32, w: i32, paint: Paint) {
        let color = color_code(paint.fg, paint.bg);
        let last = x + w - 1;
        for cx in x..=last {
            let glyph = if cx == x {
                BOX_TEE_LEFT
            } else if cx == last {
                BOX_TEE_RIGHT
            } else {
                BOX_HORIZONTAL
            };
            self.write_cell(cx, y, glyph, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gfx::compositor;

    const UNTOUCHED: ScreenChar = ScreenChar::new(0, 0);

    fn cells() -> Vec<Volatile<ScreenChar>> {
        (0..METRICS.cell_count()).map(|_| Volatile::new(UNTOUCHED)).collect()
    }

    fn at(cells: &[Volatile<ScreenChar>], x: i32, y: i32) -> ScreenChar {
        cells[(y * VGA_WIDTH + x) as usize].read()
    }

    #[test]
    fn attribute_packs_background_high() {
        assert_eq!(color_code(Color::White, Color::Cyan), 0x3F);
        assert_eq!(color_code(Color::Black, Color::White), 0xF0);
    }

    #[test]
    fn out_of_range_plots_touch_nothing() {
        let mut buf = cells();
        let mut surface = TextSurface::new(&mut buf);
        for (x, y) in [(-1, 0), (0, -1), (80, 0), (0, 25), (80, 24), (i32::MIN, i32::MAX)] {
            surface.plot(x, y, Color::Red);
            surface.put_glyph(b'X', x, y, compositor::WINDOW_PAINT);
        }
        assert!(buf.iter().all(|c| c.read() == UNTOUCHED));
    }

    #[test]
    fn glyph_cell_carries_character_and_attribute() {
        let mut buf = cells();
        let mut surface = TextSurface::new(&mut buf);
        surface.put_glyph(b'A', 79, 24, Paint::new(Color::Yellow, Color::Blue));
        assert_eq!(at(&buf, 79, 24), ScreenChar::new(b'A', 0x1E));
    }

    #[test]
    fn clear_fills_every_cell() {
        let mut buf = cells();
        TextSurface::new(&mut buf).clear(Color::Cyan);
        assert!(buf.iter().all(|c| c.read() == ScreenChar::new(b' ', 0x3F)));
    }

    #[test]
    fn frame_uses_corner_and_edge_glyphs() {
        let mut buf = cells();
        let mut surface = TextSurface::new(&mut buf);
        surface.frame(Rect::new(2, 3, 5, 4), compositor::WINDOW_PAINT);

        assert_eq!(at(&buf, 2, 3).ascii, BOX_TOP_LEFT);
        assert_eq!(at(&buf, 6, 3).ascii, BOX_TOP_RIGHT);
        assert_eq!(at(&buf, 2, 6).ascii, BOX_BOTTOM_LEFT);
        assert_eq!(at(&buf, 6, 6).ascii, BOX_BOTTOM_RIGHT);
        assert_eq!(at(&buf, 4, 3).ascii, BOX_HORIZONTAL);
        assert_eq!(at(&buf, 4, 6).ascii, BOX_HORIZONTAL);
        assert_eq!(at(&buf, 2, 4).ascii, BOX_VERTICAL);
        assert_eq!(at(&buf, 6, 5).ascii, BOX_VERTICAL);
        assert_eq!(at(&buf, 4, 4), UNTOUCHED);
    }

    #[test]
    fn window_separator_joins_both_borders() {
        let mut buf = cells();
        let mut surface = TextSurface::new(&mut buf);
        compositor::draw_window(&mut surface, Rect::new(25, 7, 30, 10), Some("Start"));

        assert_eq!(at(&buf, 25, 9).ascii, BOX_TEE_LEFT);
        assert_eq!(at(&buf, 54, 9).ascii, BOX_TEE_RIGHT);
        assert!((26..54).all(|x| at(&buf, x, 9).ascii == BOX_HORIZONTAL));
        assert_eq!(at(&buf, 37, 8), ScreenChar::new(b'S', 0xF0));
        // Shadow: one cell down and right, black on black.
        assert_eq!(at(&buf, 55, 17), ScreenChar::new(b' ', 0x0F));
    }
}
