//! Scene assembly: world state to vertex list
//!
//! Rebuilt from scratch every frame; the pipeline uploads whatever this
//! produces.

use glam::{Mat4, Vec3};

use super::mesh::{Coloring, RAINBOW, Vertex, colors, push_cuboid};
use crate::consts::*;
use crate::sim::WorldState;

/// Barrel half-extents; the long axis points across the grid
const BARREL_HALF: Vec3 = Vec3::new(0.02, 0.02, 0.1);
/// Muzzle position in barrel-local space
const MUZZLE: Vec3 = Vec3::new(0.0, 0.0, -0.14);
/// Flash cuboid half-extent at full intensity
const FLASH_HALF: f32 = 0.04;

/// Build the frame's vertex list from the world
pub fn build_scene(state: &WorldState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((state.obstacles.len() + 4) * 36);

    // Ground slab
    push_cuboid(
        &mut vertices,
        Mat4::from_translation(Vec3::new(0.0, GROUND_DROP, 0.0)),
        Vec3::splat(GROUND_HALF),
        Coloring::PerVertex(&RAINBOW),
    );

    // Bot, yawed about its own center, riding the jump arc
    let player = &state.player;
    let bot_center = player.position() + Vec3::new(0.0, BOT_DRAW_DROP + player.jump.height, 0.0);
    push_cuboid(
        &mut vertices,
        Mat4::from_translation(bot_center) * Mat4::from_rotation_y(player.yaw_degrees.to_radians()),
        Vec3::splat(BOT_HALF),
        Coloring::PerVertex(&RAINBOW),
    );

    // Obstacles inside their visible window
    for obs in &state.obstacles {
        if !obs.is_present() {
            continue;
        }
        let center = Vec3::new(obs.x, BOT_BASE[1] + OBSTACLE_DROP + obs.lift, obs.z);
        push_cuboid(
            &mut vertices,
            Mat4::from_translation(center),
            Vec3::splat(OBSTACLE_HALF),
            Coloring::Uniform(colors::OBSTACLE),
        );
    }

    // Canon barrel, pitched about x
    let canon = &state.canon;
    let barrel = Mat4::from_translation(Vec3::from(CANON_POS))
        * Mat4::from_rotation_x(-canon.pitch_degrees.to_radians());
    push_cuboid(
        &mut vertices,
        barrel,
        BARREL_HALF,
        Coloring::Uniform(colors::CANON),
    );

    // Muzzle flash, shrinking as it decays
    if canon.flash > 0.0 {
        let muzzle = barrel.transform_point3(MUZZLE);
        push_cuboid(
            &mut vertices,
            Mat4::from_translation(muzzle),
            Vec3::splat(FLASH_HALF * canon.flash),
            Coloring::Uniform(colors::FLASH),
        );
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::WorldState;

    #[test]
    fn test_scene_counts_visible_cuboids() {
        let state = WorldState::new(11);
        let present = state.obstacles.iter().filter(|o| o.is_present()).count();
        let vertices = build_scene(&state);
        // Ground + bot + canon + visible obstacles, no flash at rest
        assert_eq!(vertices.len(), (3 + present) * 36);
    }

    #[test]
    fn test_hidden_obstacles_are_not_drawn() {
        let mut state = WorldState::new(12);
        for obs in &mut state.obstacles {
            obs.visibility = crate::consts::BLINK_PERIOD;
        }
        let vertices = build_scene(&state);
        assert_eq!(vertices.len(), 3 * 36);
    }

    #[test]
    fn test_flash_adds_one_cuboid() {
        let mut state = WorldState::new(13);
        let base = build_scene(&state).len();
        state.canon.fire();
        assert_eq!(build_scene(&state).len(), base + 36);
    }

    #[test]
    fn test_bot_rides_jump_arc() {
        let mut state = WorldState::new(14);
        state.obstacles.clear();

        // Bot vertices sit right after the ground block
        let grounded = build_scene(&state);
        state.player.jump.airborne = true;
        state.player.jump.height = 0.1;
        let airborne = build_scene(&state);

        for i in 36..72 {
            let dy = airborne[i].position[1] - grounded[i].position[1];
            assert!((dy - 0.1).abs() < 1e-5);
        }
    }
}
