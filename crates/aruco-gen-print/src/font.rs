//! Minimal 5×7 digit glyphs for marker-id captions.
//!
//! Captions are bare numeric ids, so digits are all that is needed; each
//! glyph row is a 5-bit pattern, MSB on the left.

use image::{GrayImage, Luma};

pub(crate) const GLYPH_WIDTH: u32 = 5;
pub(crate) const GLYPH_HEIGHT: u32 = 7;
/// Blank columns between adjacent glyphs, in glyph units.
const GLYPH_GAP: u32 = 1;

#[rustfmt::skip]
const DIGITS: [[u8; 7]; 10] = [
    [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110], // 0
    [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110], // 1
    [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111], // 2
    [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110], // 3
    [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010], // 4
    [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110], // 5
    [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110], // 6
    [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000], // 7
    [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110], // 8
    [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100], // 9
];

/// Rendered width of `value` in pixels at the given glyph scale.
pub(crate) fn number_width(value: u32, scale: u32) -> u32 {
    let digits = value.checked_ilog10().unwrap_or(0) + 1;
    digits * GLYPH_WIDTH * scale + (digits - 1) * GLYPH_GAP * scale
}

/// Rendered glyph height in pixels at the given scale.
pub(crate) fn number_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw `value` in decimal with its top-left corner at `(x, y)`, each glyph
/// pixel expanded to a `scale × scale` block.
///
/// Pixels outside the canvas are skipped rather than wrapped.
pub(crate) fn draw_number(
    canvas: &mut GrayImage,
    value: u32,
    x: u32,
    y: u32,
    scale: u32,
    shade: u8,
) {
    let text = value.to_string();
    let mut pen_x = x;
    for ch in text.chars() {
        let glyph = &DIGITS[ch as usize - '0' as usize];
        for (gy, row) in glyph.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if (row >> (GLYPH_WIDTH - 1 - gx)) & 1 == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = pen_x + gx * scale + sx;
                        let py = y + gy as u32 * scale + sy;
                        if px < canvas.width() && py < canvas.height() {
                            canvas.put_pixel(px, py, Luma([shade]));
                        }
                    }
                }
            }
        }
        pen_x += (GLYPH_WIDTH + GLYPH_GAP) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_width_counts_digits() {
        assert_eq!(number_width(7, 1), 5);
        assert_eq!(number_width(42, 1), 11);
        assert_eq!(number_width(100, 2), 34);
    }

    #[test]
    fn draw_touches_only_text_box() {
        let mut canvas = GrayImage::from_pixel(40, 20, Luma([255]));
        draw_number(&mut canvas, 8, 3, 2, 1, 60);
        for (x, y, p) in canvas.enumerate_pixels() {
            if p[0] != 255 {
                assert!((3..8).contains(&x) && (2..9).contains(&y));
                assert_eq!(p[0], 60);
            }
        }
    }

    #[test]
    fn clipping_does_not_panic() {
        let mut canvas = GrayImage::from_pixel(8, 8, Luma([255]));
        draw_number(&mut canvas, 1234, 5, 5, 3, 0);
    }
}
