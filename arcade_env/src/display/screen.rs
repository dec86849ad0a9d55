use super::color::Color;

pub const SCREEN_WIDTH: usize = 160;
pub const SCREEN_HEIGHT: usize = 210;
pub const SCREEN_PIXELS: usize = SCREEN_WIDTH * SCREEN_HEIGHT;
pub const COLOR_CHANNELS: usize = 3;
pub const OBSERVATION_SIZE: usize = SCREEN_PIXELS * COLOR_CHANNELS;
/// (channels, height, width)
pub const OBSERVATION_SHAPE: [usize; 3] = [COLOR_CHANNELS, SCREEN_HEIGHT, SCREEN_WIDTH];

/// One rendered frame in planar layout: all red values, then all green
/// values, then all blue values, each plane in raster order and every value
/// inside `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Observation {
    data: Vec<f32>,
}

impl Observation {
    pub(crate) fn from_planar(data: Vec<f32>) -> Self {
        debug_assert_eq!(data.len(), OBSERVATION_SIZE);
        Self { data }
    }

    pub fn shape(&self) -> [usize; 3] {
        OBSERVATION_SHAPE
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    pub fn red(&self) -> &[f32] {
        &self.data[..SCREEN_PIXELS]
    }

    pub fn green(&self) -> &[f32] {
        &self.data[SCREEN_PIXELS..2 * SCREEN_PIXELS]
    }

    pub fn blue(&self) -> &[f32] {
        &self.data[2 * SCREEN_PIXELS..]
    }

    /// normalized color of the pixel at column `x`, row `y`
    pub fn pixel(&self, x: usize, y: usize) -> Option<[f32; 3]> {
        if x >= SCREEN_WIDTH || y >= SCREEN_HEIGHT {
            return None;
        }
        let index = y * SCREEN_WIDTH + x;

        Some([self.red()[index], self.green()[index], self.blue()[index]])
    }
}

impl AsRef<[f32]> for Observation {
    fn as_ref(&self) -> &[f32] {
        &self.data
    }
}

/// Translate the palette codes in `raw` into normalized planar colors in
/// `out`.
///
/// `out` must hold exactly `COLOR_CHANNELS * raw.len()` values. Each distinct
/// code is resolved through `palette` only once per call.
pub(crate) fn write_planar<F>(raw: &[u8], mut palette: F, out: &mut [f32])
where
    F: FnMut(u8) -> Color,
{
    let pixels = raw.len();
    debug_assert_eq!(out.len(), pixels * COLOR_CHANNELS);

    let mut resolved: [Option<[f32; 3]>; 256] = [None; 256];

    let (red, rest) = out.split_at_mut(pixels);
    let (green, blue) = rest.split_at_mut(pixels);

    for (i, &code) in raw.iter().enumerate() {
        let [r, g, b] = *resolved[code as usize].get_or_insert_with(|| palette(code).normalized());

        red[i] = r;
        green[i] = g;
        blue[i] = b;
    }
}
