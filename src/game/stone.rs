//! Falling stones.

use super::collision::{Mask, Rect, Shape};
use super::sprites::stone_mask;
use crate::config::GameConfig;
use crate::constants::POINTS_PER_SIZE_RATIO;

/// Lifecycle of a stone. Both non-`Falling` states are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoneState {
    Falling,
    /// Fell past the bottom edge.
    Exited,
    /// Consumed by a collision with the pigeon.
    Destroyed,
}

/// Reported by [`Stone::advance`] on the tick a stone leaves the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StoneExit {
    pub points: u64,
}

#[derive(Debug, Clone)]
pub struct Stone {
    pub top: i32,
    pub left: i32,
    pub size_ratio: f64,
    pub fall_speed: i32,
    pub state: StoneState,
    mask: Mask,
}

/// `max(1, floor(size_ratio * global_speed))`
pub fn fall_speed_for(size_ratio: f64, global_speed: f64) -> i32 {
    ((size_ratio * global_speed).floor() as i32).max(1)
}

/// `floor(size_ratio * 10)`
pub fn points_for(size_ratio: f64) -> u64 {
    (size_ratio * POINTS_PER_SIZE_RATIO).floor().max(0.0) as u64
}

impl Stone {
    pub fn new(left: i32, top: i32, size_ratio: f64, global_speed: f64, mask: Mask) -> Self {
        Self {
            top,
            left,
            size_ratio,
            fall_speed: fall_speed_for(size_ratio, global_speed),
            state: StoneState::Falling,
            mask,
        }
    }

    /// A stone at the spawn band sized from `config`.
    pub fn spawn(config: &GameConfig, left: i32, size_ratio: f64) -> Self {
        let mask = stone_mask(config.stone_size_for(size_ratio));
        Self::new(left, config.band_top, size_ratio, config.stone_speed, mask)
    }

    pub fn mask(&self) -> &Mask {
        &self.mask
    }

    pub fn size(&self) -> i32 {
        self.mask.width()
    }

    pub fn shape(&self) -> Shape<'_> {
        Shape::new(self.left, self.top, &self.mask)
    }

    pub fn rect(&self) -> Rect {
        self.shape().rect()
    }

    pub fn is_falling(&self) -> bool {
        self.state == StoneState::Falling
    }

    /// One physics tick. Returns the exit report on the tick the stone
    /// passes `screen_height`.
    pub fn advance(&mut self, screen_height: i32) -> Option<StoneExit> {
        if !self.is_falling() {
            return None;
        }
        self.top = self.top.saturating_add(self.fall_speed);
        if self.top > screen_height {
            self.state = StoneState::Exited;
            return Some(StoneExit {
                points: points_for(self.size_ratio),
            });
        }
        None
    }

    pub fn destroy(&mut self) {
        if self.is_falling() {
            self.state = StoneState::Destroyed;
        }
    }
}
