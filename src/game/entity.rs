//! Drawable entities and the per-frame draw list handed to the renderer.

use super::pigeon::{Facing, Pigeon};
use super::stone::Stone;

/// Which artwork a renderer should use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteId {
    Background,
    Pigeon { frame: u8, facing: Facing },
    /// Round stone of `size` x `size` pixels.
    Stone { size: i32 },
    Heart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextKind {
    Score,
    Overlay,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrawCommand {
    Sprite {
        sprite: SpriteId,
        x: i32,
        y: i32,
    },
    /// `x`/`y` is the anchor; overlay text is centered on it.
    Text {
        text: String,
        x: i32,
        y: i32,
        kind: TextKind,
    },
}

/// Everything that shows up on screen as a sprite.
#[derive(Debug, Clone, Copy)]
pub enum Entity<'a> {
    Background,
    Pigeon(&'a Pigeon),
    Stone(&'a Stone),
    Heart { x: i32, y: i32 },
}

impl Entity<'_> {
    /// Top-left corner in screen pixels.
    pub fn position(&self) -> (i32, i32) {
        match self {
            Self::Background => (0, 0),
            Self::Pigeon(p) => (p.x, p.y),
            Self::Stone(s) => (s.left, s.top),
            Self::Heart { x, y } => (*x, *y),
        }
    }

    pub fn visual(&self) -> SpriteId {
        match self {
            Self::Background => SpriteId::Background,
            Self::Pigeon(p) => SpriteId::Pigeon {
                frame: p.anim_frame,
                facing: p.facing,
            },
            Self::Stone(s) => SpriteId::Stone { size: s.size() },
            Self::Heart { .. } => SpriteId::Heart,
        }
    }

    pub fn draw_command(&self) -> DrawCommand {
        let (x, y) = self.position();
        DrawCommand::Sprite {
            sprite: self.visual(),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;

    #[test]
    fn test_stone_draw_command() {
        let stone = Stone::spawn(&GameConfig::default(), 40, 0.25);
        assert_eq!(
            Entity::Stone(&stone).draw_command(),
            DrawCommand::Sprite {
                sprite: SpriteId::Stone { size: 50 },
                x: 40,
                y: 15,
            }
        );
    }

    #[test]
    fn test_pigeon_visual_tracks_facing() {
        let mut pigeon = Pigeon::new(&GameConfig::default());
        pigeon.press(crate::game::pigeon::Direction::Left);
        assert_eq!(
            Entity::Pigeon(&pigeon).visual(),
            SpriteId::Pigeon {
                frame: 0,
                facing: Facing::Left
            }
        );
    }

    #[test]
    fn test_background_at_origin() {
        assert_eq!(Entity::Background.position(), (0, 0));
        assert_eq!(Entity::Heart { x: 3, y: 4 }.position(), (3, 4));
    }
}
