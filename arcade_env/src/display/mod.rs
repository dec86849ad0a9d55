mod color;
mod screen;

pub use color::Color;
pub use screen::{
    Observation, COLOR_CHANNELS, OBSERVATION_SHAPE, OBSERVATION_SIZE, SCREEN_HEIGHT,
    SCREEN_PIXELS, SCREEN_WIDTH,
};

pub(crate) use screen::write_planar;
