//! The player-controlled pigeon: movement intents, facing and flap animation.

use super::collision::{collides, CollisionMode, Mask, Rect, Shape};
use super::sprites::pigeon_mask;
use super::stone::Stone;
use crate::config::GameConfig;
use crate::constants::{PIGEON_ANIM_COOLDOWN, PIGEON_ANIM_FRAMES, PIGEON_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Signed unit step along the direction's axis (screen y grows downward).
    pub fn sign(&self) -> i32 {
        match self {
            Self::Left | Self::Up => -1,
            Self::Right | Self::Down => 1,
        }
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Facing {
    Left,
    Right,
}

impl Facing {
    pub fn sign(&self) -> i32 {
        match self {
            Self::Left => -1,
            Self::Right => 1,
        }
    }
}

/// Movement intent on one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AxisIntent {
    pub moving: bool,
    /// -1 or +1 once set; keeps the last direction after release.
    pub direction: i32,
}

impl AxisIntent {
    pub fn velocity(&self, speed: i32) -> i32 {
        if self.moving {
            self.direction * speed
        } else {
            0
        }
    }
}

#[derive(Debug, Clone)]
pub struct Pigeon {
    pub x: i32,
    pub y: i32,
    pub horizontal: AxisIntent,
    pub vertical: AxisIntent,
    pub facing: Facing,
    pub speed: i32,
    pub anim_frame: u8,
    anim_cooldown: u8,
    spawn: (i32, i32),
    mask_right: Mask,
    mask_left: Mask,
}

impl Pigeon {
    pub fn new(config: &GameConfig) -> Self {
        let spawn = (
            (config.screen_width - PIGEON_WIDTH) / 2,
            config.screen_height - config.player_spawn_offset,
        );
        let mask_right = pigeon_mask();
        let mask_left = mask_right.mirrored();
        Self {
            x: spawn.0,
            y: spawn.1,
            horizontal: AxisIntent::default(),
            vertical: AxisIntent::default(),
            facing: Facing::Right,
            speed: config.player_speed,
            anim_frame: 0,
            anim_cooldown: PIGEON_ANIM_COOLDOWN,
            spawn,
            mask_right,
            mask_left,
        }
    }

    pub fn spawn_position(&self) -> (i32, i32) {
        self.spawn
    }

    /// Start moving in `direction`. A horizontal press opposite the current
    /// facing turns the pigeon around once.
    pub fn press(&mut self, direction: Direction) {
        let sign = direction.sign();
        if direction.is_horizontal() {
            self.horizontal = AxisIntent {
                moving: true,
                direction: sign,
            };
            if sign != self.facing.sign() {
                self.facing = if sign < 0 { Facing::Left } else { Facing::Right };
            }
        } else {
            self.vertical = AxisIntent {
                moving: true,
                direction: sign,
            };
        }
    }

    /// Stop the axis only if it is still moving in `direction`.
    pub fn release(&mut self, direction: Direction) {
        let axis = if direction.is_horizontal() {
            &mut self.horizontal
        } else {
            &mut self.vertical
        };
        if axis.moving && axis.direction == direction.sign() {
            axis.moving = false;
        }
    }

    /// True if the axis of `direction` is currently moving that way.
    pub fn is_moving(&self, direction: Direction) -> bool {
        let axis = if direction.is_horizontal() {
            self.horizontal
        } else {
            self.vertical
        };
        axis.moving && axis.direction == direction.sign()
    }

    /// Apply one tick of movement. No screen clamping.
    pub fn apply_movement(&mut self) {
        self.x = self.x.saturating_add(self.horizontal.velocity(self.speed));
        self.y = self.y.saturating_add(self.vertical.velocity(self.speed));
    }

    pub fn animate(&mut self) {
        if self.anim_cooldown == 0 {
            self.anim_frame = (self.anim_frame + 1) % PIGEON_ANIM_FRAMES;
            self.anim_cooldown = PIGEON_ANIM_COOLDOWN;
        } else {
            self.anim_cooldown -= 1;
        }
    }

    /// Back to the spawn point. Movement intents and facing are kept.
    pub fn recenter(&mut self) {
        (self.x, self.y) = self.spawn;
    }

    /// Full reset used when a new session starts.
    pub fn reset(&mut self) {
        self.recenter();
        self.horizontal = AxisIntent::default();
        self.vertical = AxisIntent::default();
        self.facing = Facing::Right;
        self.anim_frame = 0;
        self.anim_cooldown = PIGEON_ANIM_COOLDOWN;
    }

    pub fn mask(&self) -> &Mask {
        match self.facing {
            Facing::Right => &self.mask_right,
            Facing::Left => &self.mask_left,
        }
    }

    pub fn shape(&self) -> Shape<'_> {
        Shape::new(self.x, self.y, self.mask())
    }

    pub fn rect(&self) -> Rect {
        self.shape().rect()
    }

    /// Index of the first falling stone that overlaps the pigeon's mask.
    pub fn first_hit(&self, stones: &[Stone], mode: CollisionMode) -> Option<usize> {
        let me = self.shape();
        stones
            .iter()
            .position(|stone| stone.is_falling() && collides(&me, &stone.shape(), mode))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::PIGEON_HEIGHT;

    fn pigeon() -> Pigeon {
        Pigeon::new(&GameConfig::default())
    }

    #[test]
    fn test_spawns_centered_above_bottom() {
        let p = pigeon();
        assert_eq!((p.x, p.y), ((1000 - PIGEON_WIDTH) / 2, 750 - 120));
        assert_eq!(p.facing, Facing::Right);
        assert!(!p.horizontal.moving);
        assert!(!p.vertical.moving);
    }

    #[test]
    fn test_axes_move_independently() {
        let mut p = pigeon();
        let (x0, y0) = (p.x, p.y);
        p.press(Direction::Right);
        p.press(Direction::Up);
        p.apply_movement();
        assert_eq!((p.x, p.y), (x0 + 6, y0 - 6));

        p.release(Direction::Up);
        p.apply_movement();
        assert_eq!((p.x, p.y), (x0 + 12, y0 - 6));
    }

    #[test]
    fn test_release_of_other_direction_keeps_moving() {
        let mut p = pigeon();
        p.press(Direction::Left);
        p.release(Direction::Right);
        assert!(p.is_moving(Direction::Left));
        p.release(Direction::Left);
        assert!(!p.is_moving(Direction::Left));
    }

    #[test]
    fn test_facing_flips_once_on_direction_change() {
        let mut p = pigeon();
        let right_mask = p.mask().clone();

        p.press(Direction::Left);
        assert_eq!(p.facing, Facing::Left);
        assert_eq!(*p.mask(), right_mask.mirrored());

        // Moving on keeps the facing; a repeated press does not flip back
        p.apply_movement();
        p.press(Direction::Left);
        assert_eq!(p.facing, Facing::Left);

        p.press(Direction::Right);
        assert_eq!(p.facing, Facing::Right);
        assert_eq!(*p.mask(), right_mask);
    }

    #[test]
    fn test_vertical_press_keeps_facing() {
        let mut p = pigeon();
        p.press(Direction::Left);
        p.press(Direction::Down);
        assert_eq!(p.facing, Facing::Left);
    }

    #[test]
    fn test_movement_is_not_clamped() {
        let mut p = pigeon();
        p.press(Direction::Left);
        for _ in 0..200 {
            p.apply_movement();
        }
        assert!(p.x < 0);
    }

    #[test]
    fn test_movement_saturates_at_the_coordinate_limit() {
        let mut p = pigeon();
        p.x = i32::MAX - 2;
        p.press(Direction::Right);
        p.apply_movement();
        assert_eq!(p.x, i32::MAX);
        assert_eq!(p.rect().right(), i32::MAX);
    }

    #[test]
    fn test_recenter_keeps_intents() {
        let mut p = pigeon();
        p.press(Direction::Left);
        p.apply_movement();
        p.recenter();
        assert_eq!((p.x, p.y), p.spawn_position());
        assert!(p.is_moving(Direction::Left));

        p.reset();
        assert!(!p.is_moving(Direction::Left));
        assert_eq!(p.facing, Facing::Right);
    }

    #[test]
    fn test_animation_cycles_six_frames() {
        let mut p = pigeon();
        // Frame advances on every sixth call (cooldown 5..0)
        for _ in 0..5 {
            p.animate();
        }
        assert_eq!(p.anim_frame, 0);
        p.animate();
        assert_eq!(p.anim_frame, 1);
        for _ in 0..(6 * 5) {
            p.animate();
        }
        assert_eq!(p.anim_frame, 0);
    }

    #[test]
    fn test_first_hit_picks_first_enumerated() {
        let config = GameConfig::default();
        let p = pigeon();
        let far = Stone::spawn(&config, 1, 0.1);
        let mut a = Stone::spawn(&config, p.x, 0.3);
        a.top = p.y;
        let mut b = a.clone();
        b.left += 4;
        assert_eq!(p.first_hit(&[far.clone(), a, b], CollisionMode::Mask), Some(1));
        assert_eq!(p.first_hit(&[far], CollisionMode::Mask), None);
    }

    #[test]
    fn test_corner_overlap_only_hits_in_bounding_box_mode() {
        let config = GameConfig::default();
        let p = pigeon();
        // Stone box overlaps the pigeon box by a 5x5 corner where neither mask is opaque
        let mut stone = Stone::spawn(&config, p.x - 55, 0.3);
        stone.top = p.y - 55;
        let stones = [stone];
        assert_eq!(p.first_hit(&stones, CollisionMode::Mask), None);
        assert_eq!(p.first_hit(&stones, CollisionMode::BoundingBox), Some(0));
    }

    #[test]
    fn test_pigeon_height_matches_mask() {
        assert_eq!(pigeon().rect().height, PIGEON_HEIGHT);
    }
}
