//! Recording surface for host tests.

use super::{Color, Metrics, Paint, Rect, Surface};

pub struct Canvas {
    metrics: Metrics,
    cells: Vec<Option<u8>>,
    pub glyphs: Vec<(u8, i32, i32, Paint)>,
    pub frames: Vec<(Rect, Paint)>,
    pub separators: Vec<(i32, i32, i32)>,
    pub clears: Vec<Color>,
}

impl Canvas {
    pub fn new(metrics: Metrics) -> Self {
        Canvas {
            metrics,
            cells: vec![None; metrics.cell_count()],
            glyphs: Vec::new(),
            frames: Vec::new(),
            separators: Vec::new(),
            clears: Vec::new(),
        }
    }

    pub fn text() -> Self {
        Canvas::new(crate::drivers::vga_buffer::METRICS)
    }

    pub fn pixel() -> Self {
        Canvas::new(crate::drivers::framebuffer::METRICS)
    }

    pub fn at(&self, x: i32, y: i32) -> Option<u8> {
        self.metrics.index(x, y).and_then(|i| self.cells[i])
    }

    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Text of all glyphs drawn on row `y`, in drawing order.
    pub fn row_text(&self, y: i32) -> String {
        self.glyphs
            .iter()
            .filter(|g| g.2 == y)
            .map(|g| g.0 as char)
            .collect()
    }

    /// Position of the first glyph of `text` drawn as a contiguous run.
    pub fn find_text(&self, text: &str) -> Option<(i32, i32)> {
        let bytes = text.as_bytes();
        self.glyphs
            .windows(bytes.len())
            .find(|run| run.iter().zip(bytes).all(|(g, b)| g.0 == *b))
            .map(|run| (run[0].1, run[0].2))
    }

    pub fn reset(&mut self) {
        self.cells.iter_mut().for_each(|c| *c = None);
        self.glyphs.clear();
        self.frames.clear();
        self.separators.clear();
        self.clears.clear();
    }
}

impl Surface for Canvas {
    fn metrics(&self) -> Metrics {
        self.metrics
    }

    fn plot(&mut self, x: i32, y: i32, color: Color) {
        if let Some(i) = self.metrics.index(x, y) {
            self.cells[i] = Some(color.index());
        }
    }

    fn clear(&mut self, color: Color) {
        self.cells.iter_mut().for_each(|c| *c = Some(color.index()));
        self.clears.push(color);
    }

    fn put_glyph(&mut self, c: u8, x: i32, y: i32, paint: Paint) {
        self.glyphs.push((c, x, y, paint));
    }

    fn frame(&mut self, rect: Rect, paint: Paint) {
        self.frames.push((rect, paint));
    }

    fn separator(&mut self, x: i32, y: i32, w: i32, _paint: Paint) {
        self.separators.push((x, y, w));
    }
}
