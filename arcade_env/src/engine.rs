use crate::action::Action;
use crate::display::Color;
use std::path::Path;
use thiserror::Error;

/// Opaque failure reported by an emulator engine.
///
/// The environment never decodes it, it only carries the message up to the
/// caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EngineError {
    message: String,
}

impl EngineError {
    pub fn new<S: Into<String>>(message: S) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// The capabilities the environment needs from an emulator engine.
///
/// An engine owns the emulated console: the loaded cartridge, the CPU and
/// video state, the internal frame buffer and the color palette.
pub trait Engine {
    /// Replace the loaded cartridge with the image at `path`.
    ///
    /// On failure the engine must keep whatever cartridge it had before.
    fn load_rom(&mut self, path: &Path) -> Result<(), EngineError>;

    /// The ordered set of actions meaningful for the loaded cartridge.
    fn minimal_action_set(&self) -> Vec<Action>;

    /// Apply `action` for the configured number of ticks, returning the
    /// accumulated reward.
    fn act(&mut self, action: Action) -> i32;

    fn set_frame_skip(&mut self, frame_skip: u32);

    fn frame_skip(&self) -> u32;

    fn game_over(&self) -> bool;

    /// Go back to the initial playable state of the loaded cartridge.
    fn reset_game(&mut self);

    /// Palette codes of the current frame in raster order.
    fn screen(&self) -> &[u8];

    /// Resolve a palette code to its color.
    fn palette_color(&self, code: u8) -> Color;
}

impl<E: Engine + ?Sized> Engine for Box<E> {
    fn load_rom(&mut self, path: &Path) -> Result<(), EngineError> {
        (**self).load_rom(path)
    }

    fn minimal_action_set(&self) -> Vec<Action> {
        (**self).minimal_action_set()
    }

    fn act(&mut self, action: Action) -> i32 {
        (**self).act(action)
    }

    fn set_frame_skip(&mut self, frame_skip: u32) {
        (**self).set_frame_skip(frame_skip)
    }

    fn frame_skip(&self) -> u32 {
        (**self).frame_skip()
    }

    fn game_over(&self) -> bool {
        (**self).game_over()
    }

    fn reset_game(&mut self) {
        (**self).reset_game()
    }

    fn screen(&self) -> &[u8] {
        (**self).screen()
    }

    fn palette_color(&self, code: u8) -> Color {
        (**self).palette_color(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EnvError;

    #[test]
    fn message_is_displayed_as_is() {
        let err = EngineError::new("bank switch out of range");

        assert_eq!(err.to_string(), "bank switch out of range");
        assert_eq!(err.message(), "bank switch out of range");

        let fault: EnvError = err.into();
        assert!(fault.to_string().contains("bank switch out of range"));
    }
}
