//! Mode 13h framebuffer backend
//! 320x200, one palette index per pixel, linear at 0xA0000

use volatile::Volatile;

use crate::gfx::{compositor, font, Color, Metrics, Paint, Rect, Surface};

const FB_ADDR: usize = 0xA0000;
const FB_WIDTH: i32 = 320;
const FB_HEIGHT: i32 = 200;

pub const METRICS: Metrics = Metrics {
    width: FB_WIDTH,
    height: FB_HEIGHT,
    pitch: font::PITCH,
    line_height: 10,
    shadow: 2,
    title_row: 2,
    title_band: 12,
    swatch: 8,
};

pub struct PixelSurface<'a> {
    pixels: &'a mut [Volatile<u8>],
}

impl<'a> PixelSurface<'a> {
    /// Wrap a row-major 320x200 pixel buffer.
    pub fn new(pixels: &'a mut [Volatile<u8>]) -> Self {
        debug_assert_eq!(pixels.len(), METRICS.cell_count());
        PixelSurface { pixels }
    }
}

impl PixelSurface<'static> {
    /// The hardware framebuffer.
    ///
    /// # Safety
    ///
    /// The display must already be in mode 13h with 0xA0000 identity-mapped,
    /// and no other `PixelSurface` over it may be alive.
    pub unsafe fn mode13h() -> Self {
        let pixels = core::slice::from_raw_parts_mut(FB_ADDR as *mut Volatile<u8>, METRICS.cell_count());
        PixelSurface::new(pixels)
    }
}

impl Surface for PixelSurface<'_> {
    fn metrics(&self) -> Metrics {
        METRICS
    }

    #[inline]
    fn plot(&mut self, x: i32, y: i32, color: Color) {
        let Some(index) = METRICS.index(x, y) else {
            return;
        };
        if let Some(pixel) = self.pixels.get_mut(index) {
            pixel.write(color.index());
        }
    }

    fn clear(&mut self, color: Color) {
        for pixel in self.pixels.iter_mut() {
            pixel.write(color.index());
        }
    }

    fn put_glyph(&mut self, c: u8, x: i32, y: i32, paint: Paint) {
        font::draw_char(self, c, x, y, paint.fg);
    }

    fn frame(&mut self, rect: Rect, paint: Paint) {
        compositor::draw_outline(self, rect, paint.fg);
    }

    fn separator(&mut self, x: i32, y: i32, w: i32, paint: Paint) {
        compositor::draw_line(self, x, y, x + w - 1, y, paint.fg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNTOUCHED: u8 = 0xEE;

    fn pixels() -> Vec<Volatile<u8>> {
        (0..METRICS.cell_count()).map(|_| Volatile::new(UNTOUCHED)).collect()
    }

    fn at(pixels: &[Volatile<u8>], x: i32, y: i32) -> u8 {
        pixels[(y * FB_WIDTH + x) as usize].read()
    }

    #[test]
    fn out_of_range_plots_touch_nothing() {
        let mut buf = pixels();
        let mut surface = PixelSurface::new(&mut buf);
        for (x, y) in [(-1, 0), (0, -1), (320, 0), (0, 200), (320, 199), (-320, 1), (i32::MAX, 0)] {
            surface.plot(x, y, Color::Red);
        }
        assert!(buf.iter().all(|p| p.read() == UNTOUCHED));
    }

    #[test]
    fn corners_are_addressable() {
        let mut buf = pixels();
        let mut surface = PixelSurface::new(&mut buf);
        surface.plot(0, 0, Color::Blue);
        surface.plot(319, 199, Color::Green);
        assert_eq!(at(&buf, 0, 0), Color::Blue.index());
        assert_eq!(at(&buf, 319, 199), Color::Green.index());
        assert_eq!(buf[0].read(), Color::Blue.index());
        assert_eq!(buf[63_999].read(), Color::Green.index());
    }

    #[test]
    fn glyphs_are_transparent() {
        let mut buf = pixels();
        let mut surface = PixelSurface::new(&mut buf);
        surface.put_glyph(b'-', 10, 10, Paint::new(Color::Black, Color::White));
        assert_eq!(at(&buf, 10, 13), Color::Black.index());
        assert_eq!(at(&buf, 10, 12), UNTOUCHED);
        assert_eq!(at(&buf, 14, 13), UNTOUCHED);
    }

    #[test]
    fn separator_spans_window_width() {
        let mut buf = pixels();
        let mut surface = PixelSurface::new(&mut buf);
        compositor::draw_window(&mut surface, Rect::new(70, 50, 180, 100), Some("Start"));
        assert!((70..250).all(|x| at(&buf, x, 62) == Color::Black.index()));
        assert_eq!(at(&buf, 69, 62), UNTOUCHED);
        // Outline corners, body inside.
        assert_eq!(at(&buf, 70, 50), Color::Black.index());
        assert_eq!(at(&buf, 249, 149), Color::Black.index());
        assert_eq!(at(&buf, 71, 51), Color::White.index());
    }
}
