use arcade_env::arcade_display::Color;

/// Fake NTSC style palette: the high nibble picks the hue, bits 1-3 the
/// luminance and bit 0 is ignored, like the real console.
pub fn palette_color(code: u8) -> Color {
    let hue = code >> 4;
    let luminance = (code >> 1) & 0x07;
    let base = luminance * 36;

    Color::new(
        base.saturating_add(hue * 3),
        base,
        base.saturating_sub(hue * 2),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_bit_is_ignored() {
        for code in (0..=u8::MAX).step_by(2) {
            assert_eq!(palette_color(code), palette_color(code | 1));
        }
    }

    #[test]
    fn black_and_white() {
        assert_eq!(palette_color(0x00), Color::new(0, 0, 0));
        assert_eq!(palette_color(0x0E), Color::new(252, 252, 252));
    }
}
