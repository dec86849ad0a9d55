#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// every channel divided by 255, so always inside `[0.0, 1.0]`
    pub fn normalized(&self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalized_bounds() {
        assert_eq!(Color::new(0, 0, 0).normalized(), [0.0, 0.0, 0.0]);
        assert_eq!(Color::new(255, 255, 255).normalized(), [1.0, 1.0, 1.0]);

        let [r, g, b] = Color::new(51, 102, 204).normalized();
        assert!((r - 0.2).abs() < 1e-6);
        assert!((g - 0.4).abs() < 1e-6);
        assert!((b - 0.8).abs() < 1e-6);
    }
}
