//! Rectangles, lines, text runs and bordered windows
//!
//! Works on any [`Surface`]; the backend decides what a border or a glyph
//! looks like, the compositor decides where things go and in what order.

use super::{Color, Paint, Rect, Surface};

/// Window body and border: black on white.
pub const WINDOW_PAINT: Paint = Paint::new(Color::Black, Color::White);
pub const SHADOW_COLOR: Color = Color::Black;

pub fn draw_rect<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    for y in rect.y..rect.y + rect.h {
        for x in rect.x..rect.x + rect.w {
            surface.plot(x, y, color);
        }
    }
}

/// Horizontal or vertical line, endpoints inclusive. Diagonals are not
/// supported.
pub fn draw_line<S: Surface + ?Sized>(surface: &mut S, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    debug_assert!(x1 == x2 || y1 == y2, "diagonal line ({x1},{y1})-({x2},{y2})");
    if y1 == y2 {
        for x in x1.min(x2)..=x1.max(x2) {
            surface.plot(x, y1, color);
        }
    } else if x1 == x2 {
        for y in y1.min(y2)..=y1.max(y2) {
            surface.plot(x1, y, color);
        }
    }
}

/// One-unit hollow rectangle.
pub fn draw_outline<S: Surface + ?Sized>(surface: &mut S, rect: Rect, color: Color) {
    if rect.w <= 0 || rect.h <= 0 {
        return;
    }
    draw_line(surface, rect.x, rect.y, rect.right(), rect.y, color);
    draw_line(surface, rect.x, rect.bottom(), rect.right(), rect.bottom(), color);
    draw_line(surface, rect.x, rect.y, rect.x, rect.bottom(), color);
    draw_line(surface, rect.right(), rect.y, rect.right(), rect.bottom(), color);
}

/// Width of `text` in surface units.
pub fn text_width<S: Surface + ?Sized>(surface: &S, text: &str) -> i32 {
    text.len() as i32 * surface.metrics().pitch
}

pub fn draw_string<S: Surface + ?Sized>(surface: &mut S, text: &str, x: i32, y: i32, paint: Paint) {
    let pitch = surface.metrics().pitch;
    let mut cx = x;
    for byte in text.bytes() {
        surface.put_glyph(byte, cx, y, paint);
        cx += pitch;
    }
}

/// Draw `text` horizontally centered on the whole surface.
pub fn draw_string_centered<S: Surface + ?Sized>(surface: &mut S, text: &str, y: i32, paint: Paint) {
    let x = (surface.metrics().width - text_width(surface, text)) / 2;
    draw_string(surface, text, x.max(0), y, paint);
}

/// Shadow, body, border and optional title bar, in that order.
pub fn draw_window<S: Surface + ?Sized>(surface: &mut S, rect: Rect, title: Option<&str>) {
    let m = surface.metrics();

    draw_rect(surface, rect.offset(m.shadow, m.shadow), SHADOW_COLOR);
    draw_rect(surface, rect, WINDOW_PAINT.bg);
    surface.frame(rect, WINDOW_PAINT);

    if let Some(title) = title {
        let start = rect.x + (rect.w - text_width(surface, title)) / 2;
        draw_string(surface, title, start, rect.y + m.title_row, WINDOW_PAINT);
        surface.separator(rect.x, rect.y + m.title_band, rect.w, WINDOW_PAINT);
    }
}

/// Solid color sample with a black outline when the swatch is larger
/// than one cell.
pub fn draw_swatch<S: Surface + ?Sized>(surface: &mut S, x: i32, y: i32, color: Color) {
    let size = surface.metrics().swatch;
    let rect = Rect::new(x, y, size, size);
    draw_rect(surface, rect, color);
    if size > 1 {
        draw_outline(surface, rect, Color::Black);
    }
}
