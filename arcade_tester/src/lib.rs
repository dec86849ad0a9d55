//! A deterministic engine for testing `arcade_env` without a real emulator.
//!
//! Cartridges are small scripted images: a header describing the legal
//! actions, the episode length and the reward rule, padded to one of the
//! usual cartridge sizes.

mod cartridge;
mod engine;
mod palette;

pub use cartridge::{CartridgeError, ScriptedCartridge, CARTRIDGE_MAGIC, CARTRIDGE_SIZES};
pub use engine::{ScriptedEngine, PLAYER_CODE, PLAYER_SIZE};
pub use palette::palette_color;
