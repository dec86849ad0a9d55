mod action;
mod config;
mod display;
mod engine;
mod environment;
mod error;

#[cfg(test)]
mod tests;

pub use crate::config::{EnvConfig, DEFAULT_FRAME_SKIP};
pub use crate::engine::{Engine, EngineError};
pub use crate::environment::{
    ArcadeEnvironment, EngineFactory, EpisodeStats, GameState, StepOutcome,
};
pub use crate::error::{EnvError, Result};

pub mod arcade_action {
    pub use super::action::{Action, ActionCatalog, JoystickState};
}
pub mod arcade_display {
    pub use super::display::{
        Color, Observation, COLOR_CHANNELS, OBSERVATION_SHAPE, OBSERVATION_SIZE, SCREEN_HEIGHT,
        SCREEN_PIXELS, SCREEN_WIDTH,
    };
}
