//! Game configuration: every tunable constant the core accepts as input.
//!
//! Defaults come from `constants.rs`; a TOML file may override any subset
//! of fields. A config only reaches a session after `validate()` passes.

use crate::constants::*;
use crate::error::{GameError, Result};
use crate::game::collision::CollisionMode;
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizeRatioRange {
    pub min: f64,
    pub max: f64,
}
impl Default for SizeRatioRange {
    fn default() -> Self {
        Self {
            min: STONE_SIZE_RATIO_MIN,
            max: STONE_SIZE_RATIO_MAX,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnCooldownConfig {
    /// Starting ceiling, in ticks between spawns.
    pub initial: u32,
    pub floor: u32,
    pub step: u32,
}
impl Default for SpawnCooldownConfig {
    fn default() -> Self {
        Self {
            initial: SPAWN_COOLDOWN_INITIAL,
            floor: SPAWN_COOLDOWN_FLOOR,
            step: SPAWN_COOLDOWN_STEP,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoneCapConfig {
    pub initial: usize,
    pub max: usize,
}
impl Default for StoneCapConfig {
    fn default() -> Self {
        Self {
            initial: STONE_CAP_INITIAL,
            max: STONE_CAP_MAX,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen_width: i32,
    pub screen_height: i32,
    pub tick_rate: u32,
    pub player_speed: i32,
    pub player_spawn_offset: i32,
    pub stone_base_size: i32,
    pub stone_size_ratio: SizeRatioRange,
    /// Global fall-speed constant; a stone falls `max(1, floor(ratio * stone_speed))` px per tick.
    pub stone_speed: f64,
    pub band_top: i32,
    pub spawn_cooldown: SpawnCooldownConfig,
    pub stone_cap: StoneCapConfig,
    pub lives: u32,
    pub max_placement_attempts: u32,
    /// Pigeon hits and spawn probes; `mask` unless set to `bounding_box`.
    pub collision_mode: CollisionMode,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            tick_rate: TICK_RATE,
            player_speed: PLAYER_SPEED,
            player_spawn_offset: PLAYER_SPAWN_OFFSET,
            stone_base_size: STONE_BASE_SIZE,
            stone_size_ratio: SizeRatioRange::default(),
            stone_speed: STONE_SPEED,
            band_top: BAND_TOP,
            spawn_cooldown: SpawnCooldownConfig::default(),
            stone_cap: StoneCapConfig::default(),
            lives: LIVES_INITIAL,
            max_placement_attempts: MAX_PLACEMENT_ATTEMPTS,
            collision_mode: CollisionMode::default(),
        }
    }
}

impl GameConfig {
    /// Load a config file, falling back to defaults for omitted fields.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| GameError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config: GameConfig = toml::from_str(&text).map_err(|source| GameError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }

    /// Pixel width (and height) of a stone drawn with the given size ratio.
    pub fn stone_size_for(&self, size_ratio: f64) -> i32 {
        ((self.stone_base_size as f64 * size_ratio).round() as i32).max(1)
    }

    pub fn widest_stone(&self) -> i32 {
        self.stone_size_for(self.stone_size_ratio.max)
    }

    pub fn validate(&self) -> Result<()> {
        if self.screen_width <= 0 || self.screen_height <= 0 {
            return Err(GameError::invalid(format!(
                "screen must have positive size, got {}x{}",
                self.screen_width, self.screen_height
            )));
        }
        if self.tick_rate == 0 {
            return Err(GameError::invalid("tick_rate must be positive"));
        }
        let reach = self.screen_width.max(self.screen_height);
        if self.player_speed <= 0 || self.player_speed > reach {
            return Err(GameError::invalid(format!(
                "player_speed {} must be within 1..={reach}",
                self.player_speed
            )));
        }
        if self.player_spawn_offset <= 0 || self.player_spawn_offset > self.screen_height {
            return Err(GameError::invalid(format!(
                "player_spawn_offset {} must be within 1..={}",
                self.player_spawn_offset, self.screen_height
            )));
        }
        if PIGEON_WIDTH >= self.screen_width {
            return Err(GameError::invalid(format!(
                "pigeon ({PIGEON_WIDTH}px) is wider than the screen ({}px)",
                self.screen_width
            )));
        }
        let range = self.stone_size_ratio;
        if !(range.min > 0.0 && range.min <= range.max && range.max.is_finite()) {
            return Err(GameError::invalid(format!(
                "stone_size_ratio must satisfy 0 < min <= max, got {}..{}",
                range.min, range.max
            )));
        }
        if self.stone_base_size <= 0 {
            return Err(GameError::invalid("stone_base_size must be positive"));
        }
        let widest = self.widest_stone();
        if widest >= self.screen_width {
            return Err(GameError::invalid(format!(
                "widest stone ({widest}px) does not fit a {}px screen",
                self.screen_width
            )));
        }
        if !(self.stone_speed > 0.0 && self.stone_speed.is_finite()) {
            return Err(GameError::invalid("stone_speed must be positive"));
        }
        // The fastest stone may cross the screen in one tick, not more
        let fastest = self.stone_speed * range.max;
        if fastest > self.screen_height as f64 {
            return Err(GameError::invalid(format!(
                "stone_speed {} lets a stone fall {fastest}px per tick on a {}px screen",
                self.stone_speed, self.screen_height
            )));
        }
        if self.band_top < 0 || self.band_top >= self.screen_height {
            return Err(GameError::invalid(format!(
                "band_top {} lies outside the screen",
                self.band_top
            )));
        }
        let cooldown = self.spawn_cooldown;
        if cooldown.floor > cooldown.initial {
            return Err(GameError::invalid(format!(
                "spawn_cooldown floor {} exceeds initial {}",
                cooldown.floor, cooldown.initial
            )));
        }
        let cap = self.stone_cap;
        if cap.max == 0 || cap.initial > cap.max {
            return Err(GameError::invalid(format!(
                "stone_cap must satisfy initial <= max and max > 0, got {}..{}",
                cap.initial, cap.max
            )));
        }
        if self.lives == 0 {
            return Err(GameError::invalid("lives must be positive"));
        }
        if self.max_placement_attempts == 0 {
            return Err(GameError::invalid("max_placement_attempts must be positive"));
        }
        Ok(())
    }
}
