//! Collision detection between the bot and grid obstacles
//!
//! Everything here is a pure function of positions. The tick decides
//! what a hit means.

use super::obstacle::Obstacle;
use crate::consts::*;

/// Inclusive axis-aligned overlap test between the bot footprint and an
/// obstacle footprint
///
/// Exact edge contact counts as overlap on both axes.
pub fn footprints_overlap(bot_x: f32, bot_z: f32, obs: &Obstacle) -> bool {
    let reach = BOT_HALF + OBSTACLE_HALF;
    (bot_x - obs.x).abs() <= reach && (bot_z - obs.z).abs() <= reach
}

/// Whether a jump height clears obstacles entirely
///
/// A bot at exactly the clearance height has not cleared.
pub fn clears_vertically(jump_height: f32) -> bool {
    jump_height > VERTICAL_CLEARANCE
}

/// Scan every obstacle for a solid overlap with the bot
///
/// Full linear scan, returning the index of the first hit. Obstacles
/// outside their visibility window never hit; a bot high enough on its
/// jump arc passes over everything.
pub fn scan(bot_x: f32, bot_z: f32, jump_height: f32, obstacles: &[Obstacle]) -> Option<usize> {
    if clears_vertically(jump_height) {
        return None;
    }
    obstacles
        .iter()
        .position(|obs| obs.is_present() && footprints_overlap(bot_x, bot_z, obs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::obstacle::Behavior;

    fn solid_at(x: f32, z: f32) -> Obstacle {
        Obstacle {
            x,
            z,
            lift: 0.0,
            lift_dir: 1.0,
            visibility: 0,
            behavior: Behavior::Oscillate,
        }
    }

    fn ghost_at(x: f32, z: f32) -> Obstacle {
        Obstacle {
            visibility: BLINK_PERIOD * 2 / 3,
            ..solid_at(x, z)
        }
    }

    #[test]
    fn test_overlap_at_exact_edge_contact() {
        let obs = solid_at(0.5, 0.5);
        let reach = BOT_HALF + OBSTACLE_HALF;
        // Touching edges on x, dead center on z
        assert!(footprints_overlap(0.5 + reach, 0.5, &obs));
        assert!(footprints_overlap(0.5 - reach, 0.5, &obs));
        // Touching corner on both axes
        assert!(footprints_overlap(0.5 + reach, 0.5 + reach, &obs));
    }

    #[test]
    fn test_no_overlap_just_past_edge() {
        let obs = solid_at(0.5, 0.5);
        let reach = BOT_HALF + OBSTACLE_HALF;
        assert!(!footprints_overlap(0.5 + reach + 0.001, 0.5, &obs));
        assert!(!footprints_overlap(0.5, 0.5 - reach - 0.001, &obs));
    }

    #[test]
    fn test_scan_hits_grounded_bot() {
        let obstacles = [solid_at(-0.4, 0.2), solid_at(0.5, 0.5)];
        assert_eq!(scan(0.5, 0.5, 0.0, &obstacles), Some(1));
        assert_eq!(scan(-0.4, 0.2, 0.0, &obstacles), Some(0));
        assert_eq!(scan(0.0, 0.0, 0.0, &obstacles), None);
    }

    #[test]
    fn test_scan_skips_invisible_obstacles() {
        let obstacles = [ghost_at(0.5, 0.5)];
        assert_eq!(scan(0.5, 0.5, 0.0, &obstacles), None);
    }

    #[test]
    fn test_airborne_bot_clears_above_threshold() {
        let obstacles = [solid_at(0.5, 0.5)];
        assert_eq!(scan(0.5, 0.5, VERTICAL_CLEARANCE + 0.001, &obstacles), None);
        // At exactly the clearance bound the hit still lands
        assert_eq!(scan(0.5, 0.5, VERTICAL_CLEARANCE, &obstacles), Some(0));
        // Low arc does not help
        assert_eq!(scan(0.5, 0.5, 0.05, &obstacles), Some(0));
    }
}
