use arcade_env::arcade_action::Action;
use std::{fs, io::Error as ioError, path::Path};
use thiserror::Error;

pub const CARTRIDGE_MAGIC: [u8; 4] = *b"A26S";
pub const CARTRIDGE_SIZES: [usize; 3] = [2048, 4096, 8192];

const ACTION_COUNT_OFFSET: usize = 4;
const ACTION_IDS_OFFSET: usize = 5;
const LIFETIME_OFFSET: usize = ACTION_IDS_OFFSET + Action::COUNT;
const REWARD_PERIOD_OFFSET: usize = LIFETIME_OFFSET + 2;

/// Error happening when loading a scripted cartridge.
#[derive(Debug, Error)]
pub enum CartridgeError {
    #[error("FileError: {0}")]
    FileError(#[from] ioError),

    /// Contains the size of the file in bytes.
    #[error("cartridge size of {0} bytes is not supported")]
    SizeError(usize),

    #[error("this is not a scripted cartridge image")]
    HeaderError,

    #[error("the cartridge declares {0} actions, expected 1 to 18")]
    ActionCountError(u8),

    #[error("unknown action id {0}")]
    UnknownAction(u8),

    #[error("the reward period must be at least one frame")]
    RewardPeriodError,
}

/// The game described by a scripted cartridge image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScriptedCartridge {
    pub actions: Vec<Action>,
    /// frames until the game is over, zero means the game never ends
    pub lifetime: u16,
    /// holding fire gives one point every `reward_period` frames
    pub reward_period: u8,
}

impl ScriptedCartridge {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;

        Self::from_bytes(&data)
    }

    pub fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if !CARTRIDGE_SIZES.contains(&data.len()) {
            return Err(CartridgeError::SizeError(data.len()));
        }

        if data[..4] != CARTRIDGE_MAGIC {
            return Err(CartridgeError::HeaderError);
        }

        let count = data[ACTION_COUNT_OFFSET];
        if count == 0 || count as usize > Action::COUNT {
            return Err(CartridgeError::ActionCountError(count));
        }

        let actions = data[ACTION_IDS_OFFSET..ACTION_IDS_OFFSET + count as usize]
            .iter()
            .map(|&id| Action::from_id(id).ok_or(CartridgeError::UnknownAction(id)))
            .collect::<Result<Vec<_>, _>>()?;

        let lifetime = u16::from_le_bytes([data[LIFETIME_OFFSET], data[LIFETIME_OFFSET + 1]]);

        let reward_period = data[REWARD_PERIOD_OFFSET];
        if reward_period == 0 {
            return Err(CartridgeError::RewardPeriodError);
        }

        Ok(Self {
            actions,
            lifetime,
            reward_period,
        })
    }

    /// Build the smallest image describing this cartridge.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut data = vec![0; CARTRIDGE_SIZES[0]];

        data[..4].copy_from_slice(&CARTRIDGE_MAGIC);
        data[ACTION_COUNT_OFFSET] = self.actions.len() as u8;
        for (slot, action) in data[ACTION_IDS_OFFSET..].iter_mut().zip(&self.actions) {
            *slot = action.id();
        }
        data[LIFETIME_OFFSET..LIFETIME_OFFSET + 2].copy_from_slice(&self.lifetime.to_le_bytes());
        data[REWARD_PERIOD_OFFSET] = self.reward_period;

        data
    }
}
