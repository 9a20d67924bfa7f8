//! Axis-aligned collision detection
//!
//! Exact rectangle overlap, no forgiveness margin. Edges that merely touch
//! do not collide.

use serde::{Deserialize, Serialize};

use super::state::{Obstacle, Player};

/// Axis-aligned rectangle, y pointing down
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Strict overlap test
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// All components are finite and the size is non-negative
    pub fn is_finite(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.width.is_finite()
            && self.height.is_finite()
            && self.width >= 0.0
            && self.height >= 0.0
    }
}

/// Find the first obstacle overlapping the player.
///
/// Returns that obstacle's id. Malformed obstacles are skipped.
pub fn find_collision(player: &Player, obstacles: &[Obstacle]) -> Option<u32> {
    let player_rect = player.rect();
    obstacles
        .iter()
        .filter(|o| {
            let rect = o.rect();
            if rect.is_finite() {
                true
            } else {
                log::debug!("Skipping malformed obstacle {}: {:?}", o.id, rect);
                false
            }
        })
        .find(|o| player_rect.overlaps(&o.rect()))
        .map(|o| o.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::ObstacleKind;
    use crate::tuning::Tuning;
    use glam::Vec2;
    use proptest::prelude::*;

    fn obstacle(id: u32, x: f32, y: f32, w: f32, h: f32) -> Obstacle {
        Obstacle {
            id,
            kind: ObstacleKind::Ground { sprite: 0 },
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[test]
    fn test_reference_rects() {
        let player = Rect::new(50.0, 150.0, 20.0, 30.0);
        assert!(player.overlaps(&Rect::new(55.0, 150.0, 10.0, 20.0)));
        assert!(!player.overlaps(&Rect::new(71.0, 150.0, 10.0, 20.0)));
    }

    #[test]
    fn test_touching_edges_do_not_collide() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(!a.overlaps(&Rect::new(10.0, 0.0, 10.0, 10.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 10.0, 10.0, 10.0)));
        assert!(a.overlaps(&Rect::new(9.99, 9.99, 10.0, 10.0)));
    }

    #[test]
    fn test_find_collision_returns_first_hit() {
        let player = Player::new(&Tuning::default());
        let obstacles = vec![
            obstacle(1, 300.0, 150.0, 10.0, 30.0),
            obstacle(2, 55.0, 160.0, 10.0, 20.0),
            obstacle(3, 60.0, 160.0, 10.0, 20.0),
        ];
        assert_eq!(find_collision(&player, &obstacles), Some(2));
    }

    #[test]
    fn test_find_collision_skips_malformed() {
        let player = Player::new(&Tuning::default());
        let obstacles = vec![
            obstacle(1, f32::NAN, 150.0, 10.0, 30.0),
            obstacle(2, 55.0, 150.0, f32::INFINITY, 20.0),
        ];
        assert_eq!(find_collision(&player, &obstacles), None);
    }

    #[test]
    fn test_no_obstacles_no_collision() {
        let player = Player::new(&Tuning::default());
        assert_eq!(find_collision(&player, &[]), None);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-100.0f32..700.0, -50.0f32..250.0, 0.0f32..60.0, 0.0f32..60.0)
            .prop_map(|(x, y, w, h)| Rect::new(x, y, w, h))
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(a in rect_strategy(), b in rect_strategy()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        #[test]
        fn prop_disjoint_on_x_never_overlaps(a in rect_strategy(), gap in 0.0f32..50.0, b in rect_strategy()) {
            let shifted = Rect::new(a.right() + gap, b.y, b.width, b.height);
            prop_assert!(!a.overlaps(&shifted));
        }
    }
}
