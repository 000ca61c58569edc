//! 5x8 bitmap font for the pixel backend
//!
//! Each glyph is five column bytes; bit `n` of a column is row `n` counted
//! from the top. Digits and letters come from the tables, a handful of
//! punctuation marks are stroked procedurally, everything else draws
//! nothing.

use super::{Color, Surface};

pub const GLYPH_WIDTH: i32 = 5;
pub const GLYPH_HEIGHT: i32 = 8;
/// Horizontal advance: glyph width plus one column of spacing.
pub const PITCH: i32 = 6;

type Bitmap = [u8; GLYPH_WIDTH as usize];

static DIGITS: [Bitmap; 10] = [
    [0x3E, 0x51, 0x49, 0x45, 0x3E], // 0
    [0x00, 0x42, 0x7F, 0x40, 0x00], // 1
    [0x42, 0x61, 0x51, 0x49, 0x46], // 2
    [0x21, 0x41, 0x45, 0x4B, 0x31], // 3
    [0x18, 0x14, 0x12, 0x7F, 0x10], // 4
    [0x27, 0x45, 0x45, 0x45, 0x39], // 5
    [0x3C, 0x4A, 0x49, 0x49, 0x30], // 6
    [0x01, 0x71, 0x09, 0x05, 0x03], // 7
    [0x36, 0x49, 0x49, 0x49, 0x36], // 8
    [0x06, 0x49, 0x49, 0x29, 0x1E], // 9
];

static UPPER: [Bitmap; 26] = [
    [0x7C, 0x12, 0x11, 0x12, 0x7C], // A
    [0x7F, 0x49, 0x49, 0x49, 0x36], // B
    [0x3E, 0x41, 0x41, 0x41, 0x22], // C
    [0x7F, 0x41, 0x41, 0x22, 0x1C], // D
    [0x7F, 0x49, 0x49, 0x49, 0x41], // E
    [0x7F, 0x09, 0x09, 0x09, 0x01], // F
    [0x3E, 0x41, 0x49, 0x49, 0x7A], // G
    [0x7F, 0x08, 0x08, 0x08, 0x7F], // H
    [0x00, 0x41, 0x7F, 0x41, 0x00], // I
    [0x20, 0x40, 0x41, 0x3F, 0x01], // J
    [0x7F, 0x08, 0x14, 0x22, 0x41], // K
    [0x7F, 0x40, 0x40, 0x40, 0x40], // L
    [0x7F, 0x02, 0x0C, 0x02, 0x7F], // M
    [0x7F, 0x04, 0x08, 0x10, 0x7F], // N
    [0x3E, 0x41, 0x41, 0x41, 0x3E], // O
    [0x7F, 0x09, 0x09, 0x09, 0x06], // P
    [0x3E, 0x41, 0x51, 0x21, 0x5E], // Q
    [0x7F, 0x09, 0x19, 0x29, 0x46], // R
    [0x46, 0x49, 0x49, 0x49, 0x31], // S
    [0x01, 0x01, 0x7F, 0x01, 0x01], // T
    [0x3F, 0x40, 0x40, 0x40, 0x3F], // U
    [0x1F, 0x20, 0x40, 0x20, 0x1F], // V
    [0x3F, 0x40, 0x38, 0x40, 0x3F], // W
    [0x63, 0x14, 0x08, 0x14, 0x63], // X
    [0x07, 0x08, 0x70, 0x08, 0x07], // Y
    [0x61, 0x51, 0x49, 0x45, 0x43], // Z
];

static LOWER: [Bitmap; 26] = [
    [0x20, 0x54, 0x54, 0x54, 0x78], // a
    [0x7F, 0x48, 0x44, 0x44, 0x38], // b
    [0x38, 0x44, 0x44, 0x44, 0x20], // c
    [0x38, 0x44, 0x44, 0x48, 0x7F], // d
    [0x38, 0x54, 0x54, 0x54, 0x18], // e
    [0x08, 0x7E, 0x09, 0x01, 0x02], // f
    [0x18, 0xA4, 0xA4, 0xA4, 0x7C], // g
    [0x7F, 0x08, 0x04, 0x04, 0x78], // h
    [0x00, 0x44, 0x7D, 0x40, 0x00], // i
    [0x40, 0x80, 0x84, 0x7D, 0x00], // j
    [0x7F, 0x10, 0x28, 0x44, 0x00], // k
    [0x00, 0x41, 0x7F, 0x40, 0x00], // l
    [0x7C, 0x04, 0x18, 0x04, 0x78], // m
    [0x7C, 0x08, 0x04, 0x04, 0x78], // n
    [0x38, 0x44, 0x44, 0x44, 0x38], // o
    [0xFC, 0x24, 0x24, 0x24, 0x18], // p
    [0x18, 0x24, 0x24, 0x18, 0xFC], // q
    [0x7C, 0x08, 0x04, 0x04, 0x08], // r
    [0x48, 0x54, 0x54, 0x54, 0x20], // s
    [0x04, 0x3F, 0x44, 0x40, 0x20], // t
    [0x3C, 0x40, 0x40, 0x20, 0x7C], // u
    [0x1C, 0x20, 0x40, 0x20, 0x1C], // v
    [0x3C, 0x40, 0x30, 0x40, 0x3C], // w
    [0x44, 0x28, 0x10, 0x28, 0x44], // x
    [0x1C, 0xA0, 0xA0, 0xA0, 0x7C], // y
    [0x44, 0x64, 0x54, 0x4C, 0x44], // z
];

/// Emits the set pixels of a symbol as offsets from the glyph origin.
pub type Stroke = fn(&mut dyn FnMut(i32, i32));

/// Where the pixels of a character come from.
#[derive(Clone, Copy)]
pub enum GlyphSource {
    Bitmap(&'static [Bitmap], usize),
    Procedural(Stroke),
    Blank,
}

impl GlyphSource {
    pub fn resolve(c: u8) -> GlyphSource {
        match c {
            b'0'..=b'9' => GlyphSource::Bitmap(&DIGITS, (c - b'0') as usize),
            b'A'..=b'Z' => GlyphSource::Bitmap(&UPPER, (c - b'A') as usize),
            b'a'..=b'z' => GlyphSource::Bitmap(&LOWER, (c - b'a') as usize),
            b'>' => GlyphSource::Procedural(chevron),
            b'-' => GlyphSource::Procedural(dash),
            b'.' => GlyphSource::Procedural(dot),
            b'*' => GlyphSource::Procedural(star),
            _ => GlyphSource::Blank,
        }
    }

    /// Feed every set pixel, relative to the glyph origin, to `emit`.
    pub fn render(self, emit: &mut dyn FnMut(i32, i32)) {
        match self {
            GlyphSource::Bitmap(table, index) => {
                for (col, &bits) in table[index].iter().enumerate() {
                    for row in 0..GLYPH_HEIGHT {
                        if bits & (1u8 << row) != 0 {
                            emit(col as i32, row);
                        }
                    }
                }
            }
            GlyphSource::Procedural(stroke) => stroke(emit),
            GlyphSource::Blank => {}
        }
    }
}

fn chevron(emit: &mut dyn FnMut(i32, i32)) {
    for i in 0..5 {
        for col in 0..=i {
            emit(col, i);
            emit(col, 8 - i);
        }
    }
}

fn dash(emit: &mut dyn FnMut(i32, i32)) {
    for col in 0..4 {
        emit(col, 3);
    }
}

fn dot(emit: &mut dyn FnMut(i32, i32)) {
    emit(2, 6);
}

fn star(emit: &mut dyn FnMut(i32, i32)) {
    for i in 0..5 {
        emit(i, 3);
        emit(2, 1 + i);
    }
    for (dx, dy) in [(1, 2), (3, 2), (1, 4), (3, 4)] {
        emit(dx, dy);
    }
}

/// Plot `c` with its top-left corner at `(x, y)`.
pub fn draw_char<S: Surface + ?Sized>(surface: &mut S, c: u8, x: i32, y: i32, color: Color) {
    GlyphSource::resolve(c).render(&mut |dx, dy| surface.plot(x + dx, y + dy, color));
}
