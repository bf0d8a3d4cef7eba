//! Spawn cadence and stone cap, tightened every time a stone exits.

use crate::config::GameConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifficultyState {
    /// Ticks between spawns once the counter is refilled.
    pub cooldown_ceiling: u32,
    /// Ticks left until the next spawn is due.
    pub cooldown_counter: u32,
    pub cooldown_floor: u32,
    pub cooldown_step: u32,
    pub stone_cap: usize,
    pub stone_cap_max: usize,
    initial_ceiling: u32,
    initial_cap: usize,
}

impl DifficultyState {
    pub fn new(config: &GameConfig) -> Self {
        let cooldown = config.spawn_cooldown;
        Self {
            cooldown_ceiling: cooldown.initial,
            cooldown_counter: cooldown.initial,
            cooldown_floor: cooldown.floor,
            cooldown_step: cooldown.step,
            stone_cap: config.stone_cap.initial,
            stone_cap_max: config.stone_cap.max,
            initial_ceiling: cooldown.initial,
            initial_cap: config.stone_cap.initial,
        }
    }

    /// Ramp applied when a stone falls off the bottom edge.
    pub fn on_stone_exited(&mut self) {
        if self.cooldown_ceiling > self.cooldown_floor {
            self.cooldown_ceiling = self
                .cooldown_ceiling
                .saturating_sub(self.cooldown_step)
                .max(self.cooldown_floor);
        } else {
            self.cooldown_ceiling = self.cooldown_floor;
        }

        if self.stone_cap < self.stone_cap_max {
            self.stone_cap += 1;
        } else {
            self.stone_cap = self.stone_cap_max;
        }
    }

    /// Count one tick down. Returns true when a spawn is due and there is
    /// room under the cap; the caller then spawns and calls [`Self::rearm`].
    pub fn tick_cooldown(&mut self, live_stones: usize) -> bool {
        self.cooldown_counter = self.cooldown_counter.saturating_sub(1);
        self.cooldown_counter == 0 && live_stones < self.stone_cap
    }

    pub fn rearm(&mut self) {
        self.cooldown_counter = self.cooldown_ceiling;
    }

    pub fn reset(&mut self) {
        self.cooldown_ceiling = self.initial_ceiling;
        self.cooldown_counter = self.initial_ceiling;
        self.stone_cap = self.initial_cap;
    }

    pub fn at_max(&self) -> bool {
        self.cooldown_ceiling == self.cooldown_floor && self.stone_cap == self.stone_cap_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{SpawnCooldownConfig, StoneCapConfig};

    fn config(initial: u32, floor: u32, step: u32, cap: usize, cap_max: usize) -> GameConfig {
        GameConfig {
            spawn_cooldown: SpawnCooldownConfig {
                initial,
                floor,
                step,
            },
            stone_cap: StoneCapConfig {
                initial: cap,
                max: cap_max,
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_exit_tightens_cooldown_and_raises_cap() {
        let mut d = DifficultyState::new(&config(100, 20, 5, 3, 10));
        d.on_stone_exited();
        assert_eq!(d.cooldown_ceiling, 95);
        assert_eq!(d.stone_cap, 4);
    }

    #[test]
    fn test_ramp_is_monotone_and_clamped() {
        let mut d = DifficultyState::new(&config(37, 20, 5, 3, 6));
        let mut prev_ceiling = d.cooldown_ceiling;
        let mut prev_cap = d.stone_cap;
        for _ in 0..50 {
            d.on_stone_exited();
            assert!(d.cooldown_ceiling <= prev_ceiling);
            assert!(d.stone_cap >= prev_cap);
            assert!(d.cooldown_ceiling >= 20);
            assert!(d.stone_cap <= 6);
            prev_ceiling = d.cooldown_ceiling;
            prev_cap = d.stone_cap;
        }
        // 37 -> 32 -> 27 -> 22 -> 20 (step would overshoot the floor)
        assert_eq!(d.cooldown_ceiling, 20);
        assert_eq!(d.stone_cap, 6);
        assert!(d.at_max());
    }

    #[test]
    fn test_exit_does_not_touch_counter() {
        let mut d = DifficultyState::new(&config(100, 20, 5, 3, 10));
        d.cooldown_counter = 42;
        d.on_stone_exited();
        assert_eq!(d.cooldown_counter, 42);
    }

    #[test]
    fn test_tick_cooldown_counts_down_to_spawn() {
        let mut d = DifficultyState::new(&config(3, 1, 1, 2, 4));
        assert!(!d.tick_cooldown(0));
        assert!(!d.tick_cooldown(0));
        assert!(d.tick_cooldown(0));
        d.rearm();
        assert_eq!(d.cooldown_counter, 3);
    }

    #[test]
    fn test_full_field_holds_spawn_at_zero() {
        let mut d = DifficultyState::new(&config(1, 1, 1, 2, 4));
        assert!(!d.tick_cooldown(2));
        assert_eq!(d.cooldown_counter, 0);
        // Stays due until a slot opens
        assert!(!d.tick_cooldown(2));
        assert!(d.tick_cooldown(1));
    }

    #[test]
    fn test_reset_restores_initial_values() {
        let mut d = DifficultyState::new(&config(100, 20, 5, 3, 10));
        for _ in 0..10 {
            d.on_stone_exited();
        }
        d.cooldown_counter = 1;
        d.reset();
        assert_eq!(d, DifficultyState::new(&config(100, 20, 5, 3, 10)));
    }
}
