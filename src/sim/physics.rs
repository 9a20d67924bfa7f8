//! Player vertical motion
//!
//! Semi-implicit Euler per frame tick: velocity first, then position.

use super::state::Player;
use crate::consts::GROUND_LINE;
use crate::tuning::Tuning;

/// Integrate one frame of gravity and clamp to the ground line
pub fn update_player(player: &mut Player) {
    player.vy += player.gravity;
    player.pos.y += player.vy;

    if player.pos.y >= GROUND_LINE {
        player.pos.y = GROUND_LINE;
        player.vy = 0.0;
        player.airborne = false;
    }
}

/// Start a jump. Returns false (and changes nothing) while airborne.
pub fn jump(player: &mut Player) -> bool {
    if player.airborne {
        return false;
    }
    player.vy = -player.jump_impulse;
    player.airborne = true;
    true
}

/// Peak rise of a jump as produced by [`update_player`].
///
/// Frame `k` moves the player up by `impulse - k * gravity` while that is
/// positive, so the rise is the closed-form sum over those `n` frames.
pub fn jump_clearance(tuning: &Tuning) -> f32 {
    if tuning.gravity.is_nan() || tuning.gravity <= 0.0 {
        return f32::INFINITY;
    }

    let impulse = f64::from(tuning.jump_impulse);
    let gravity = f64::from(tuning.gravity);
    let n = ((impulse / gravity).ceil() - 1.0).max(0.0);
    (n * impulse - gravity * n * (n + 1.0) / 2.0) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn player() -> Player {
        Player::new(&Tuning::default())
    }

    #[test]
    fn test_grounded_player_stays_put() {
        let mut p = player();
        for _ in 0..10 {
            update_player(&mut p);
        }
        assert_eq!(p.pos.y, GROUND_LINE);
        assert_eq!(p.vy, 0.0);
        assert!(!p.airborne);
    }

    #[test]
    fn test_jump_arc_lands() {
        let mut p = player();
        assert!(jump(&mut p));
        assert_eq!(p.vy, -15.0);

        update_player(&mut p);
        assert!(p.airborne);
        assert!(p.pos.y < GROUND_LINE);

        let mut ticks = 1;
        while p.airborne {
            update_player(&mut p);
            ticks += 1;
            assert!(ticks < 100, "player never landed");
        }
        assert_eq!(p.pos.y, GROUND_LINE);
        assert_eq!(p.vy, 0.0);
    }

    #[test]
    fn test_jump_is_idempotent_while_airborne() {
        let mut p = player();
        assert!(jump(&mut p));
        update_player(&mut p);
        let vy = p.vy;
        assert!(!jump(&mut p));
        assert!(!jump(&mut p));
        assert_eq!(p.vy, vy);
    }

    #[test]
    fn test_clearance_matches_simulated_peak() {
        let tuning = Tuning::default();
        let mut p = player();
        jump(&mut p);
        let mut peak = p.pos.y;
        while p.airborne {
            update_player(&mut p);
            peak = peak.min(p.pos.y);
        }
        let rise = GROUND_LINE - peak;
        assert!((rise - jump_clearance(&tuning)).abs() < 1e-3);
    }

    #[test]
    fn test_clearance_with_tiny_gravity_returns() {
        let tuning = Tuning {
            gravity: 1e-7,
            ..Tuning::default()
        };
        let clearance = jump_clearance(&tuning);
        assert!(clearance.is_finite());
        assert!(clearance > 1e8);
    }

    #[test]
    fn test_clearance_without_upward_frames() {
        let tuning = Tuning {
            gravity: 20.0,
            ..Tuning::default()
        };
        assert_eq!(jump_clearance(&tuning), 0.0);
    }

    proptest! {
        #[test]
        fn prop_never_below_ground(jump_at in proptest::collection::vec(any::<bool>(), 1..200)) {
            let mut p = player();
            for press in jump_at {
                if press {
                    jump(&mut p);
                }
                update_player(&mut p);
                prop_assert!(p.pos.y <= GROUND_LINE);
                prop_assert_eq!(p.airborne, p.pos.y < GROUND_LINE);
            }
        }
    }
}
