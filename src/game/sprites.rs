//! Procedural opacity masks standing in for the pigeon and stone artwork.

use super::collision::Mask;
use crate::constants::{PIGEON_HEIGHT, PIGEON_WIDTH};

fn in_ellipse(x: i32, y: i32, cx: f64, cy: f64, rx: f64, ry: f64) -> bool {
    let dx = (x as f64 + 0.5 - cx) / rx;
    let dy = (y as f64 + 0.5 - cy) / ry;
    dx * dx + dy * dy <= 1.0
}

/// Round boulder filling a `size` x `size` box.
pub fn stone_mask(size: i32) -> Mask {
    let r = size as f64 / 2.0;
    Mask::from_fn(size, size, |x, y| in_ellipse(x, y, r, r, r, r))
}

/// Right-facing pigeon: body, head and a beak wedge on the right edge.
pub fn pigeon_mask() -> Mask {
    let w = PIGEON_WIDTH as f64;
    let h = PIGEON_HEIGHT as f64;
    let body = (w * 0.42, h * 0.6, w * 0.4, h * 0.36);
    let head = (w * 0.72, h * 0.32, w * 0.15, h * 0.25);
    let beak_top = h * 0.26;
    let beak_bottom = h * 0.42;
    let beak_start = w * 0.84;

    Mask::from_fn(PIGEON_WIDTH, PIGEON_HEIGHT, |x, y| {
        if in_ellipse(x, y, body.0, body.1, body.2, body.3)
            || in_ellipse(x, y, head.0, head.1, head.2, head.3)
        {
            return true;
        }
        // Beak narrows linearly toward the tip
        let px = x as f64 + 0.5;
        let py = y as f64 + 0.5;
        if px < beak_start || px > w {
            return false;
        }
        let t = (px - beak_start) / (w - beak_start);
        let mid = (beak_top + beak_bottom) / 2.0;
        let half = (beak_bottom - beak_top) / 2.0 * (1.0 - t);
        (py - mid).abs() <= half
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stone_mask_is_round() {
        let mask = stone_mask(20);
        assert_eq!(mask.width(), 20);
        assert_eq!(mask.height(), 20);
        // Center opaque, corners transparent
        assert!(mask.get(10, 10));
        assert!(!mask.get(0, 0));
        assert!(!mask.get(19, 19));
        assert!(!mask.get(0, 19));
    }

    #[test]
    fn test_single_pixel_stone() {
        let mask = stone_mask(1);
        assert!(mask.get(0, 0));
        assert_eq!(mask.opaque_count(), 1);
    }

    #[test]
    fn test_pigeon_mask_faces_right() {
        let mask = pigeon_mask();
        assert_eq!(mask.width(), PIGEON_WIDTH);
        assert_eq!(mask.height(), PIGEON_HEIGHT);

        // Beak pixel near the right edge, nothing mirrored on the left
        let beak_y = (PIGEON_HEIGHT as f64 * 0.34) as i32;
        let beak_x = PIGEON_WIDTH - 6;
        assert!(mask.get(beak_x, beak_y));
        assert!(!mask.get(PIGEON_WIDTH - 1 - beak_x, beak_y));
    }

    #[test]
    fn test_pigeon_mirror_keeps_area() {
        let mask = pigeon_mask();
        assert_eq!(mask.opaque_count(), mask.mirrored().opaque_count());
        assert_ne!(mask, mask.mirrored());
    }
}
