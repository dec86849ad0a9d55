use crate::error::{EnvError, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

pub const DEFAULT_FRAME_SKIP: u32 = 1;

/// Settings applied to the engine when the environment creates it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnvConfig {
    /// number of emulated frames advanced by every `act`
    pub frame_skip: u32,
    /// cartridge to load when the environment is opened
    pub rom: Option<PathBuf>,
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self {
            frame_skip: DEFAULT_FRAME_SKIP,
            rom: None,
        }
    }
}

impl EnvConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|err| EnvError::ConfigError(format!("malformed JSON: {}", err)))?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|err| EnvError::ConfigFile {
            path: path.to_owned(),
            reason: err.to_string(),
        })?;

        let config: Self =
            serde_json::from_str(&content).map_err(|err| EnvError::ConfigFile {
                path: path.to_owned(),
                reason: err.to_string(),
            })?;
        config.validate()?;

        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        check_frame_skip(self.frame_skip)
    }
}

pub(crate) fn check_frame_skip(frame_skip: u32) -> Result<()> {
    if frame_skip == 0 {
        Err(EnvError::ConfigError(
            "frame_skip must be at least 1".to_owned(),
        ))
    } else {
        Ok(())
    }
}
