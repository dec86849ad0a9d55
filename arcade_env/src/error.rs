use crate::engine::EngineError;
use std::{io::Error as ioError, path::PathBuf};
use thiserror::Error;

/// Errors returned by the environment operations.
///
/// A failing operation always leaves the environment as it was before the
/// call.
#[derive(Debug, Error)]
pub enum EnvError {
    /// The operation needs a loaded cartridge and none is loaded.
    #[error("no cartridge is loaded")]
    NotInitialized,

    /// The cartridge file could not be read or was refused by the engine.
    #[error("could not load cartridge `{}`: {reason}", path.display())]
    RomLoadError { path: PathBuf, reason: String },

    /// An invalid configuration value, for example a frame-skip of zero.
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// The configuration file could not be read or parsed.
    #[error("could not read configuration file `{}`: {reason}", path.display())]
    ConfigFile { path: PathBuf, reason: String },

    #[error("action index {index} is out of range, the cartridge has {count} actions")]
    InvalidActionIndex { index: usize, count: usize },

    /// An action was submitted after the game ended, the game must be reset
    /// first.
    #[error("the game is over, reset it before acting")]
    EpisodeOver,

    #[error("observation buffer must hold {expected} values, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The engine could not be created.
    #[error("could not create the emulator engine: {0}")]
    HandleInit(EngineError),

    /// The engine misbehaved in a way the environment cannot recover from.
    #[error("emulator engine fault: {0}")]
    EngineFault(#[from] EngineError),
}

impl EnvError {
    pub(crate) fn rom_io(path: PathBuf, err: ioError) -> Self {
        Self::RomLoadError {
            path,
            reason: err.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, EnvError>;
