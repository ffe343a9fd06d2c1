use image::{Rgb, RgbImage};

pub const GLYPH_WIDTH: u32 = 5;

/// Advance per character including the one column gap.
const ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Shown for characters the face has no glyph for.
const TOFU: [u8; 7] = [
    0b11111, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11111,
];

/// 5x7 rows, top first, most significant of the low five bits leftmost.
#[rustfmt::skip]
fn rows(character: char) -> [u8; 7] {
    match character {
        ' ' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        'A' => [0b01110, 0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001],
        'B' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => [0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => [0b11100, 0b10010, 0b10001, 0b10001, 0b10001, 0b10010, 0b11100],
        'E' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => [0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => [0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01111],
        'H' => [0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => [0b01110, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        'J' => [0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => [0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => [0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => [0b10001, 0b11011, 0b10101, 0b10101, 0b10001, 0b10001, 0b10001],
        'N' => [0b10001, 0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001],
        'O' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => [0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => [0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => [0b01111, 0b10000, 0b10000, 0b01110, 0b00001, 0b00001, 0b11110],
        'T' => [0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => [0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => [0b10001, 0b10001, 0b10001, 0b10101, 0b10101, 0b10101, 0b01010],
        'X' => [0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => [0b10001, 0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100],
        'Z' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => [0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => [0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b01000, 0b11111],
        '3' => [0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => [0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => [0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => [0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => [0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => [0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => [0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        '#' => [0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        ':' => [0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b01100, 0b00000],
        '/' => [0b00001, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b10000],
        '.' => [0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        ',' => [0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '-' => [0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '(' => [0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => [0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        '!' => [0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '?' => [0b01110, 0b10001, 0b00001, 0b00010, 0b00100, 0b00000, 0b00100],
        '+' => [0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '%' => [0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '\'' => [0b00110, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        _ => TOFU,
    }
}

/// Pixel width of a rendered string at the given scale.
#[must_use]
pub fn text_width(text: &str, scale: u32) -> u32 {
    let characters = text.chars().count() as u32;

    if characters == 0 {
        0
    } else {
        characters * ADVANCE * scale - scale
    }
}

fn plot(canvas: &mut RgbImage, x: i64, y: i64, colour: Rgb<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < canvas.width() && (y as u32) < canvas.height() {
        canvas.put_pixel(x as u32, y as u32, colour);
    }
}

/// Draws `text` with its top-left corner at `(x, y)`. Lowercase is folded to
/// uppercase, anything without a glyph becomes a box. Pixels falling outside
/// the canvas are clipped, never panicked on.
pub fn draw_text(canvas: &mut RgbImage, x: i64, y: i64, text: &str, scale: u32, colour: Rgb<u8>) {
    for (index, character) in text.chars().enumerate() {
        let origin = x + index as i64 * i64::from(ADVANCE * scale);
        let glyph = rows(character.to_ascii_uppercase());

        for (row, bits) in glyph.iter().enumerate() {
            for column in 0..GLYPH_WIDTH {
                if bits & (1 << (GLYPH_WIDTH - 1 - column)) == 0 {
                    continue;
                }

                for dy in 0..scale {
                    for dx in 0..scale {
                        plot(
                            canvas,
                            origin + i64::from(column * scale + dx),
                            y + row as i64 * i64::from(scale) + i64::from(dy),
                            colour,
                        );
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    #[test]
    fn test_text_width_counts_gaps() {
        assert_eq!(text_width("", 1), 0);
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 3), 33);
    }

    #[test]
    fn test_draw_text_marks_pixels() {
        let mut canvas = RgbImage::from_pixel(20, 10, BLACK);

        draw_text(&mut canvas, 0, 0, "A", 1, WHITE);

        let lit = canvas.pixels().filter(|pixel| **pixel == WHITE).count();
        assert!(lit > 0);
    }

    #[test]
    fn test_lowercase_renders_like_uppercase() {
        let mut upper = RgbImage::from_pixel(20, 10, BLACK);
        let mut lower = RgbImage::from_pixel(20, 10, BLACK);

        draw_text(&mut upper, 0, 0, "HI", 1, WHITE);
        draw_text(&mut lower, 0, 0, "hi", 1, WHITE);

        assert_eq!(upper.as_raw(), lower.as_raw());
    }

    #[test]
    fn test_unknown_characters_render_as_boxes() {
        let mut canvas = RgbImage::from_pixel(10, 10, BLACK);

        draw_text(&mut canvas, 0, 0, "日", 1, WHITE);

        // The box outline lights all four corners of the glyph cell.
        assert_eq!(*canvas.get_pixel(0, 0), WHITE);
        assert_eq!(*canvas.get_pixel(4, 0), WHITE);
        assert_eq!(*canvas.get_pixel(0, 6), WHITE);
        assert_eq!(*canvas.get_pixel(4, 6), WHITE);
    }

    #[test]
    fn test_offscreen_text_is_clipped_without_panic() {
        let mut canvas = RgbImage::from_pixel(10, 10, BLACK);

        draw_text(&mut canvas, -30, -30, "CLIPPED", 2, WHITE);
        draw_text(&mut canvas, 8, 8, "CLIPPED", 2, WHITE);
    }

    #[test]
    fn test_scale_multiplies_footprint() {
        let mut small = RgbImage::from_pixel(40, 40, BLACK);
        let mut large = RgbImage::from_pixel(40, 40, BLACK);

        draw_text(&mut small, 0, 0, "I", 1, WHITE);
        draw_text(&mut large, 0, 0, "I", 2, WHITE);

        let small_lit = small.pixels().filter(|pixel| **pixel == WHITE).count();
        let large_lit = large.pixels().filter(|pixel| **pixel == WHITE).count();
        assert_eq!(large_lit, small_lit * 4);
    }
}
