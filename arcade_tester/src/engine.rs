use crate::cartridge::ScriptedCartridge;
use crate::palette::palette_color;
use arcade_env::arcade_action::{Action, JoystickState};
use arcade_env::arcade_display::{Color, SCREEN_HEIGHT, SCREEN_PIXELS, SCREEN_WIDTH};
use arcade_env::{Engine, EngineError};
use std::path::Path;

/// side of the square the player is drawn with
pub const PLAYER_SIZE: usize = 8;
pub const PLAYER_CODE: u8 = 0x0E;

/// Engine running scripted cartridges.
///
/// The game is a square moved by the joystick over a scrolling checkerboard.
/// Holding fire scores a point every `reward_period` frames and the game is
/// over after `lifetime` frames.
pub struct ScriptedEngine {
    cartridge: Option<ScriptedCartridge>,
    frame_skip: u32,

    /// frames emulated since the last reset
    frame_number: u32,
    player_x: usize,
    player_y: usize,
    over: bool,

    screen: Vec<u8>,
}

impl Default for ScriptedEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedEngine {
    pub fn new() -> Self {
        let mut engine = Self {
            cartridge: None,
            frame_skip: 1,
            frame_number: 0,
            player_x: 0,
            player_y: 0,
            over: false,
            screen: vec![0; SCREEN_PIXELS],
        };
        engine.restart();

        engine
    }

    pub fn cartridge(&self) -> Option<&ScriptedCartridge> {
        self.cartridge.as_ref()
    }

    pub fn frame_number(&self) -> u32 {
        self.frame_number
    }

    /// top-left corner of the player square
    pub fn player_position(&self) -> (usize, usize) {
        (self.player_x, self.player_y)
    }

    fn restart(&mut self) {
        self.frame_number = 0;
        self.player_x = (SCREEN_WIDTH - PLAYER_SIZE) / 2;
        self.player_y = (SCREEN_HEIGHT - PLAYER_SIZE) / 2;
        self.over = false;
        self.render();
    }

    /// emulate one frame, returns the reward of that frame
    fn tick(&mut self, joystick: JoystickState, lifetime: u16, reward_period: u8) -> i32 {
        if joystick.contains(JoystickState::LEFT) {
            self.player_x = self.player_x.saturating_sub(1);
        }
        if joystick.contains(JoystickState::RIGHT) {
            self.player_x = (self.player_x + 1).min(SCREEN_WIDTH - PLAYER_SIZE);
        }
        if joystick.contains(JoystickState::UP) {
            self.player_y = self.player_y.saturating_sub(1);
        }
        if joystick.contains(JoystickState::DOWN) {
            self.player_y = (self.player_y + 1).min(SCREEN_HEIGHT - PLAYER_SIZE);
        }

        self.frame_number += 1;

        if lifetime != 0 && self.frame_number >= lifetime as u32 {
            self.over = true;
        }

        if joystick.contains(JoystickState::FIRE) && self.frame_number % reward_period as u32 == 0
        {
            1
        } else {
            0
        }
    }

    fn render(&mut self) {
        let scroll = (self.frame_number / 8) as usize;

        for (y, row) in self.screen.chunks_exact_mut(SCREEN_WIDTH).enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                let inside_player = (self.player_x..self.player_x + PLAYER_SIZE).contains(&x)
                    && (self.player_y..self.player_y + PLAYER_SIZE).contains(&y);

                *pixel = if inside_player {
                    PLAYER_CODE
                } else {
                    (((x / 16 + y / 16 + scroll) % 8) as u8) << 4 | 0x04
                };
            }
        }
    }
}

impl Engine for ScriptedEngine {
    fn load_rom(&mut self, path: &Path) -> Result<(), EngineError> {
        let cartridge =
            ScriptedCartridge::from_file(path).map_err(|err| EngineError::new(err.to_string()))?;

        self.cartridge = Some(cartridge);
        self.restart();

        Ok(())
    }

    fn minimal_action_set(&self) -> Vec<Action> {
        self.cartridge
            .as_ref()
            .map(|cartridge| cartridge.actions.clone())
            .unwrap_or_default()
    }

    fn act(&mut self, action: Action) -> i32 {
        let (lifetime, reward_period) = match &self.cartridge {
            Some(cartridge) => (cartridge.lifetime, cartridge.reward_period),
            None => return 0,
        };

        let joystick = action.joystick();
        let mut reward = 0;

        for _ in 0..self.frame_skip {
            if self.over {
                break;
            }
            reward += self.tick(joystick, lifetime, reward_period);
        }
        self.render();

        reward
    }

    fn set_frame_skip(&mut self, frame_skip: u32) {
        self.frame_skip = frame_skip;
    }

    fn frame_skip(&self) -> u32 {
        self.frame_skip
    }

    fn game_over(&self) -> bool {
        self.over
    }

    fn reset_game(&mut self) {
        self.restart();
    }

    fn screen(&self) -> &[u8] {
        &self.screen
    }

    fn palette_color(&self, code: u8) -> Color {
        palette_color(code)
    }
}
