use crate::action::Action;
use crate::display::{Color, SCREEN_PIXELS};
use crate::engine::{Engine, EngineError};
use crate::environment::{ArcadeEnvironment, GameState};
use crate::error::EnvError;
use std::cell::Cell;
use std::path::{Path, PathBuf};
use std::rc::Rc;


/// Minimal engine with knobs for the failure paths the environment must
/// survive.
#[derive(Default)]
struct StubEngine {
    actions: Vec<Action>,
    frame_skip: u32,
    frames: u32,
    lifetime: u32,
    frame: Vec<u8>,

    refuse_loads: bool,
    empty_action_set: bool,
    short_frame: bool,
}

impl StubEngine {
    fn new() -> Self {
        Self {
            actions: vec![Action::Noop, Action::Fire, Action::Left, Action::Right],
            lifetime: 10,
            frame: vec![0; SCREEN_PIXELS],
            ..Self::default()
        }
    }
}

impl Engine for StubEngine {
    fn load_rom(&mut self, _path: &Path) -> Result<(), EngineError> {
        if self.refuse_loads {
            return Err(EngineError::new("unknown cartridge format"));
        }
        self.frames = 0;

        Ok(())
    }

    fn minimal_action_set(&self) -> Vec<Action> {
        if self.empty_action_set {
            Vec::new()
        } else {
            self.actions.clone()
        }
    }

    fn act(&mut self, action: Action) -> i32 {
        self.frames += self.frame_skip;
        self.frame.iter_mut().for_each(|p| *p = p.wrapping_add(2));

        if action == Action::Fire {
            self.frame_skip as i32
        } else {
            0
        }
    }

    fn set_frame_skip(&mut self, frame_skip: u32) {
        self.frame_skip = frame_skip;
    }

    fn frame_skip(&self) -> u32 {
        self.frame_skip
    }

    fn game_over(&self) -> bool {
        self.frames >= self.lifetime
    }

    fn reset_game(&mut self) {
        self.frames = 0;
        self.frame.iter_mut().for_each(|p| *p = 0);
    }

    fn screen(&self) -> &[u8] {
        if self.short_frame {
            &self.frame[1..]
        } else {
            &self.frame
        }
    }

    fn palette_color(&self, code: u8) -> Color {
        Color::new(code, code, code)
    }
}

fn environment_with(configure: fn(&mut StubEngine)) -> ArcadeEnvironment<StubEngine> {
    ArcadeEnvironment::new(move || {
        let mut engine = StubEngine::new();
        configure(&mut engine);
        Ok(engine)
    })
}

fn stub_environment() -> ArcadeEnvironment<StubEngine> {
    environment_with(|_| {})
}

/// any existing regular file works for the stub engine
fn rom_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/roms/pong.bin")
}

fn other_rom_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/roms/breakout.bin")
}

/// Counts how many times the factory built an engine.
fn counting_environment() -> (ArcadeEnvironment<StubEngine>, Rc<Cell<u32>>) {
    let created = Rc::new(Cell::new(0));
    let counter = created.clone();

    let env = ArcadeEnvironment::new(move || {
        counter.set(counter.get() + 1);
        Ok(StubEngine::new())
    });

    (env, created)
}

fn assert_not_initialized<T: std::fmt::Debug>(result: Result<T, EnvError>) {
    match result {
        Err(EnvError::NotInitialized) => {}
        other => panic!("expected NotInitialized, got {:?}", other),
    }
}

fn assert_state(env: &ArcadeEnvironment<StubEngine>, state: GameState) {
    assert_eq!(env.state(), state);
}
