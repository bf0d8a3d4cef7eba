//! Session state: the pigeon, the live stones, lives, points and difficulty.

use super::difficulty::DifficultyState;
use super::entity::{DrawCommand, Entity, TextKind};
use super::pigeon::Pigeon;
use super::spawn::{find_spawn_x, Placement, SpawnBand};
use super::sprites::stone_mask;
use super::stone::Stone;
use crate::config::GameConfig;
use crate::constants::{HEART_MARGIN, HEART_SIZE, HUD_MARGIN};
use crate::error::Result;
use rand::Rng;
use std::time::Duration;

/// Main game state for one continuously running play session.
#[derive(Debug, Clone)]
pub struct Session {
    pub config: GameConfig,
    pub lives: u32,
    pub points: u64,
    /// Set on the tick `lives` reaches zero; cleared only by `reset()`.
    pub game_over: bool,
    /// Cleared by a quit request; the front-end exits its loop.
    pub running: bool,
    pub stones: Vec<Stone>,
    pub pigeon: Pigeon,
    pub difficulty: DifficultyState,

    // -- Timing --
    /// Wall time not yet consumed by a tick.
    pub accumulated_time: Duration,
    /// Ticks stepped since the last reset.
    pub tick_count: u64,
}

impl Session {
    /// Build a session, rejecting configs that cannot produce a playable field.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            lives: config.lives,
            points: 0,
            game_over: false,
            running: true,
            stones: Vec::new(),
            pigeon: Pigeon::new(&config),
            difficulty: DifficultyState::new(&config),
            accumulated_time: Duration::ZERO,
            tick_count: 0,
            config,
        })
    }

    /// Length of one fixed tick, to the nanosecond.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs(1) / self.config.tick_rate
    }

    pub fn live_stone_count(&self) -> usize {
        self.stones.iter().filter(|s| s.is_falling()).count()
    }

    /// Back to a fresh session with the same config.
    pub fn reset(&mut self) {
        self.lives = self.config.lives;
        self.points = 0;
        self.game_over = false;
        self.stones.clear();
        self.pigeon.reset();
        self.difficulty.reset();
        self.accumulated_time = Duration::ZERO;
        self.tick_count = 0;
        tracing::info!("session reset");
    }

    /// Draw a size, find a spot on the band and add a new stone.
    pub fn spawn_stone<R: Rng>(&mut self, rng: &mut R) -> Placement {
        let range = self.config.stone_size_ratio;
        let size_ratio = rng.gen_range(range.min..=range.max);
        let mask = stone_mask(self.config.stone_size_for(size_ratio));
        let placement = find_spawn_x(
            rng,
            &self.stones,
            &mask,
            SpawnBand {
                screen_width: self.config.screen_width,
                band_top: self.config.band_top,
                max_attempts: self.config.max_placement_attempts,
                collision_mode: self.config.collision_mode,
            },
        );
        if placement.is_degraded() {
            tracing::warn!(
                x = placement.x(),
                live = self.stones.len(),
                "stone placement degraded after {} attempts",
                self.config.max_placement_attempts
            );
        }

        let stone = Stone::new(
            placement.x(),
            self.config.band_top,
            size_ratio,
            self.config.stone_speed,
            mask,
        );
        tracing::debug!(
            x = stone.left,
            size_ratio,
            fall_speed = stone.fall_speed,
            "stone spawned"
        );
        self.stones.push(stone);
        placement
    }

    /// Entities in paint order: background, stones, pigeon, hearts.
    pub fn entities(&self) -> Vec<Entity<'_>> {
        let mut entities = Vec::with_capacity(self.stones.len() + self.lives as usize + 2);
        entities.push(Entity::Background);
        entities.extend(
            self.stones
                .iter()
                .filter(|s| s.is_falling())
                .map(Entity::Stone),
        );
        entities.push(Entity::Pigeon(&self.pigeon));
        for slot in 0..self.lives as i32 {
            entities.push(Entity::Heart {
                x: self.config.screen_width - HUD_MARGIN - (slot + 1) * (HEART_SIZE + HEART_MARGIN)
                    + HEART_MARGIN,
                y: HUD_MARGIN,
            });
        }
        entities
    }

    /// Everything the renderer needs for one frame.
    pub fn draw_list(&self) -> Vec<DrawCommand> {
        let mut commands: Vec<DrawCommand> =
            self.entities().iter().map(Entity::draw_command).collect();
        commands.push(DrawCommand::Text {
            text: format!("Points: {}", self.points),
            x: HUD_MARGIN,
            y: HUD_MARGIN,
            kind: TextKind::Score,
        });
        if self.game_over {
            let cx = self.config.screen_width / 2;
            let cy = self.config.screen_height / 2;
            commands.push(DrawCommand::Text {
                text: "GAME OVER".to_string(),
                x: cx,
                y: cy - HEART_SIZE,
                kind: TextKind::Overlay,
            });
            commands.push(DrawCommand::Text {
                text: format!("{} points - press Space to play again", self.points),
                x: cx,
                y: cy,
                kind: TextKind::Overlay,
            });
        }
        commands
    }
}
