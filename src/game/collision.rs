//! Bounding-box and per-pixel mask collision between positioned sprites.

use serde::{Deserialize, Serialize};

/// Per-pixel opacity mask, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: i32,
    height: i32,
    bits: Vec<bool>,
}

impl Mask {
    /// Build a mask by sampling `opaque(x, y)` for every pixel.
    pub fn from_fn(width: i32, height: i32, opaque: impl Fn(i32, i32) -> bool) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        let mut bits = Vec::with_capacity((width * height) as usize);
        for y in 0..height {
            for x in 0..width {
                bits.push(opaque(x, y));
            }
        }
        Self {
            width,
            height,
            bits,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Out-of-bounds pixels are transparent.
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x >= self.width || y >= self.height {
            return false;
        }
        self.bits[(y * self.width + x) as usize]
    }

    pub fn mirrored(&self) -> Self {
        Self::from_fn(self.width, self.height, |x, y| {
            self.get(self.width - 1 - x, y)
        })
    }
}

#[cfg(test)]
impl Mask {
    /// Fully opaque rectangle.
    pub fn solid(width: i32, height: i32) -> Self {
        Self::from_fn(width, height, |_, _| true)
    }

    pub fn opaque_count(&self) -> usize {
        self.bits.iter().filter(|b| **b).count()
    }
}

/// Axis-aligned rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.left.saturating_add(self.width)
    }

    pub fn bottom(&self) -> i32 {
        self.top.saturating_add(self.height)
    }

    /// Edges that merely touch do not overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left < other.right()
            && other.left < self.right()
            && self.top < other.bottom()
            && other.top < self.bottom()
    }

    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        if !self.overlaps(other) {
            return None;
        }
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        Some(Rect {
            left,
            top,
            width: self.right().min(other.right()) - left,
            height: self.bottom().min(other.bottom()) - top,
        })
    }
}

/// A mask placed at a screen position (top-left corner).
#[derive(Debug, Clone, Copy)]
pub struct Shape<'a> {
    pub left: i32,
    pub top: i32,
    pub mask: &'a Mask,
}

impl<'a> Shape<'a> {
    pub fn new(left: i32, top: i32, mask: &'a Mask) -> Self {
        Self { left, top, mask }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            left: self.left,
            top: self.top,
            width: self.mask.width(),
            height: self.mask.height(),
        }
    }
}

/// How precisely shapes are tested against each other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionMode {
    BoundingBox,
    #[default]
    Mask,
}

/// Bounding-box overlap only.
pub fn collide_rect(a: &Shape, b: &Shape) -> bool {
    a.rect().overlaps(&b.rect())
}

/// Bounding-box pass, then a scan of the overlap region for a pixel opaque in both masks.
pub fn collide_mask(a: &Shape, b: &Shape) -> bool {
    let Some(overlap) = a.rect().intersection(&b.rect()) else {
        return false;
    };
    for y in overlap.top..overlap.bottom() {
        for x in overlap.left..overlap.right() {
            if a.mask.get(x - a.left, y - a.top) && b.mask.get(x - b.left, y - b.top) {
                return true;
            }
        }
    }
    false
}

pub fn collides(a: &Shape, b: &Shape, mode: CollisionMode) -> bool {
    match mode {
        CollisionMode::BoundingBox => collide_rect(a, b),
        CollisionMode::Mask => collide_mask(a, b),
    }
}
