use crate::action::{Action, ActionCatalog};
use crate::config::{check_frame_skip, EnvConfig};
use crate::display::{write_planar, Observation, OBSERVATION_SIZE, SCREEN_PIXELS};
use crate::engine::{Engine, EngineError};
use crate::error::{EnvError, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};

pub type EngineFactory<E> = Box<dyn FnMut() -> std::result::Result<E, EngineError>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GameState {
    /// no cartridge loaded yet
    Uninitialized,
    Playing,
    Over,
}

/// Reward and number of actions since the cartridge was loaded or the game
/// was last reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EpisodeStats {
    pub total_reward: i64,
    pub steps: u64,
}

impl EpisodeStats {
    fn record(&mut self, reward: i32) {
        self.total_reward += reward as i64;
        self.steps += 1;
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StepOutcome {
    pub reward: i32,
    pub game_over: bool,
}

/// A reinforcement learning environment on top of one emulator engine.
///
/// The engine is created on first use through the factory given at
/// construction and lives as long as the environment. Every mutating
/// operation takes `&mut self`, so all calls on one environment are
/// serialized. Use one environment per worker to run games concurrently.
pub struct ArcadeEnvironment<E: Engine> {
    factory: EngineFactory<E>,
    config: EnvConfig,
    engine: Option<E>,

    /// present only while a cartridge is loaded
    catalog: Option<ActionCatalog>,
    rom_path: Option<PathBuf>,

    episode: EpisodeStats,
}

impl<E: Engine> ArcadeEnvironment<E> {
    pub fn new<F>(factory: F) -> Self
    where
        F: FnMut() -> std::result::Result<E, EngineError> + 'static,
    {
        Self {
            factory: Box::new(factory),
            config: EnvConfig::default(),
            engine: None,
            catalog: None,
            rom_path: None,
            episode: EpisodeStats::default(),
        }
    }

    pub fn with_config<F>(config: EnvConfig, factory: F) -> Result<Self>
    where
        F: FnMut() -> std::result::Result<E, EngineError> + 'static,
    {
        config.validate()?;

        let mut env = Self::new(factory);
        env.config = config;

        Ok(env)
    }

    /// Same as [`with_config`](Self::with_config), but also loads the
    /// configured cartridge if there is one.
    pub fn open<F>(config: EnvConfig, factory: F) -> Result<Self>
    where
        F: FnMut() -> std::result::Result<E, EngineError> + 'static,
    {
        let rom = config.rom.clone();
        let mut env = Self::with_config(config, factory)?;

        if let Some(rom) = rom {
            env.load_rom(rom)?;
        }

        Ok(env)
    }

    /// Create the engine if it does not exist yet.
    pub fn ensure_handle(&mut self) -> Result<()> {
        self.engine_mut().map(|_| ())
    }

    /// The engine, created on demand. Loading cartridges through it would
    /// leave the catalog stale, so it stays inside the crate.
    pub(crate) fn engine_mut(&mut self) -> Result<&mut E> {
        let engine = match self.engine.take() {
            Some(engine) => engine,
            None => {
                let mut engine = (self.factory)().map_err(|err| {
                    error!(%err, "failed to create emulator engine");
                    EnvError::HandleInit(err)
                })?;
                engine.set_frame_skip(self.config.frame_skip);
                info!(frame_skip = self.config.frame_skip, "emulator engine created");

                engine
            }
        };

        Ok(self.engine.insert(engine))
    }

    pub fn load_rom<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let path = path.as_ref();
        let engine = self.engine_mut()?;

        if let Err(err) = check_rom_file(path) {
            warn!(path = %path.display(), %err, "refusing cartridge");
            return Err(err);
        }

        if let Err(err) = engine.load_rom(path) {
            warn!(path = %path.display(), %err, "engine refused cartridge");
            return Err(EnvError::RomLoadError {
                path: path.to_owned(),
                reason: err.to_string(),
            });
        }

        let catalog = match ActionCatalog::new(engine.minimal_action_set()) {
            Some(catalog) => catalog,
            None => {
                // the engine already switched cartridges, so the old catalog
                // does not describe it anymore
                self.catalog = None;
                self.rom_path = None;
                error!(path = %path.display(), "engine reported no legal actions");
                return Err(EnvError::EngineFault(EngineError::new(
                    "the cartridge has an empty minimal action set",
                )));
            }
        };

        info!(
            path = %path.display(),
            actions = catalog.len(),
            "cartridge loaded"
        );

        self.catalog = Some(catalog);
        self.rom_path = Some(path.to_owned());
        self.episode = EpisodeStats::default();

        Ok(())
    }

    pub fn set_frame_skip(&mut self, frame_skip: u32) -> Result<()> {
        check_frame_skip(frame_skip)?;

        self.engine_mut()?.set_frame_skip(frame_skip);
        debug!(frame_skip, "frame skip changed");

        Ok(())
    }

    pub fn frame_skip(&mut self) -> Result<u32> {
        Ok(self.engine_mut()?.frame_skip())
    }

    pub fn action_count(&self) -> Result<usize> {
        Ok(self.catalog()?.len())
    }

    pub fn catalog(&self) -> Result<&ActionCatalog> {
        self.catalog.as_ref().ok_or(EnvError::NotInitialized)
    }

    pub fn action_at(&self, index: usize) -> Result<Action> {
        let catalog = self.catalog()?;

        catalog.get(index).ok_or(EnvError::InvalidActionIndex {
            index,
            count: catalog.len(),
        })
    }

    /// Apply the action at position `index` of the catalog and return the
    /// reward it produced.
    pub fn act(&mut self, index: usize) -> Result<i32> {
        let action = match self.action_at(index) {
            Err(EnvError::InvalidActionIndex { index, count }) => {
                warn!(index, count, "action index out of range");
                return Err(EnvError::InvalidActionIndex { index, count });
            }
            other => other?,
        };

        let engine = self.engine.as_mut().ok_or(EnvError::NotInitialized)?;

        if engine.game_over() {
            warn!(index, "action submitted after game over");
            return Err(EnvError::EpisodeOver);
        }

        let reward = engine.act(action);
        self.episode.record(reward);

        if engine.game_over() {
            info!(
                total_reward = self.episode.total_reward,
                steps = self.episode.steps,
                "game over"
            );
        }

        Ok(reward)
    }

    pub fn step(&mut self, index: usize) -> Result<StepOutcome> {
        let reward = self.act(index)?;

        Ok(StepOutcome {
            reward,
            game_over: self.is_game_over(),
        })
    }

    /// Creates the engine if needed. `false` when no cartridge is loaded or
    /// the engine cannot be created.
    pub fn is_game_over(&mut self) -> bool {
        if let Err(err) = self.ensure_handle() {
            debug!(%err, "no engine to query for game over");
            return false;
        }

        self.loaded_engine()
            .map(|engine| engine.game_over())
            .unwrap_or(false)
    }

    pub fn state(&self) -> GameState {
        match self.loaded_engine() {
            Err(_) => GameState::Uninitialized,
            Ok(engine) if engine.game_over() => GameState::Over,
            Ok(_) => GameState::Playing,
        }
    }

    /// The current frame, or `None` once the game is over.
    pub fn screen(&self) -> Result<Option<Observation>> {
        let engine = self.loaded_engine()?;

        if engine.game_over() {
            return Ok(None);
        }

        let mut data = vec![0.0; OBSERVATION_SIZE];
        convert_frame(engine, &mut data)?;

        Ok(Some(Observation::from_planar(data)))
    }

    /// Write the current frame into `buffer` instead of allocating one.
    ///
    /// Returns `false`, leaving `buffer` untouched, once the game is over.
    pub fn screen_into(&self, buffer: &mut [f32]) -> Result<bool> {
        let engine = self.loaded_engine()?;

        if buffer.len() != OBSERVATION_SIZE {
            return Err(EnvError::ShapeMismatch {
                expected: OBSERVATION_SIZE,
                actual: buffer.len(),
            });
        }

        if engine.game_over() {
            return Ok(false);
        }

        convert_frame(engine, buffer)?;

        Ok(true)
    }

    pub fn reset_game(&mut self) -> Result<()> {
        if self.catalog.is_none() {
            return Err(EnvError::NotInitialized);
        }

        self.engine_mut()?.reset_game();
        self.episode = EpisodeStats::default();
        debug!("game reset");

        Ok(())
    }

    pub fn episode(&self) -> EpisodeStats {
        self.episode
    }

    pub fn rom_path(&self) -> Option<&Path> {
        self.rom_path.as_deref()
    }

    pub fn config(&self) -> &EnvConfig {
        &self.config
    }

    fn loaded_engine(&self) -> Result<&E> {
        if self.catalog.is_none() {
            return Err(EnvError::NotInitialized);
        }

        self.engine.as_ref().ok_or(EnvError::NotInitialized)
    }
}

impl<E: Engine + Default + 'static> ArcadeEnvironment<E> {
    pub fn with_default_engine() -> Self {
        Self::new(|| Ok(E::default()))
    }
}

fn check_rom_file(path: &Path) -> Result<()> {
    let file = File::open(path).map_err(|err| EnvError::rom_io(path.to_owned(), err))?;
    let metadata = file
        .metadata()
        .map_err(|err| EnvError::rom_io(path.to_owned(), err))?;

    if metadata.is_file() {
        Ok(())
    } else {
        Err(EnvError::RomLoadError {
            path: path.to_owned(),
            reason: "not a regular file".to_owned(),
        })
    }
}

fn convert_frame<E: Engine>(engine: &E, out: &mut [f32]) -> Result<()> {
    let raw = engine.screen();

    if raw.len() != SCREEN_PIXELS {
        return Err(EnvError::EngineFault(EngineError::new(format!(
            "engine frame has {} pixels, expected {}",
            raw.len(),
            SCREEN_PIXELS
        ))));
    }

    write_planar(raw, |code| engine.palette_color(code), out);

    Ok(())
}
