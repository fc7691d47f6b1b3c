//! Fixed timestep simulation tick
//!
//! Core loop that advances the world deterministically.

use glam::Vec2;

use super::collision;
use super::state::{GameEvent, GamePhase, WorldState};
use crate::clamp_offset;
use crate::consts::*;

/// Input commands for a single tick (deterministic)
///
/// Every field is a one-shot: the embedding loop clears the struct
/// after each processed tick.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    /// Signed movement steps along x and z
    pub step_x: i32,
    pub step_z: i32,
    /// Launch a jump
    pub jump: bool,
    /// Cycle the camera mode
    pub cycle_camera: bool,
    /// Flip the airborne drift orientation
    pub flip_facing: bool,
    /// Toggle the canon pitch sweep
    pub toggle_sweep: bool,
    /// Fire the canon
    pub fire: bool,
    /// Signed speed-adjust presses
    pub speed_steps: i32,
    /// Camera pan deltas from the arrow keys
    pub pan_x: f32,
    pub pan_z: f32,
    /// Mouse-look deltas in pixels
    pub look_dx: f32,
    pub look_dy: f32,
}

/// Advance the world by one fixed timestep
///
/// Returns the milestones crossed during this tick. A lost world stays
/// frozen and reports nothing.
pub fn tick(state: &mut WorldState, input: &FrameInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::Lost {
        return events;
    }

    state.time_ticks += 1;

    // Decay the muzzle flash
    state.canon.flash *= 0.95;
    if state.canon.flash < 0.01 {
        state.canon.flash = 0.0;
    }

    // Movement, clamped to the grid
    let step = state.player.move_step;
    if input.step_x != 0 {
        state.player.offset.x = clamp_offset(state.player.offset.x + input.step_x as f32 * step);
    }
    if input.step_z != 0 {
        state.player.offset.y = clamp_offset(state.player.offset.y + input.step_z as f32 * step);
    }

    if input.speed_steps != 0 {
        state.player.move_step = (state.player.move_step
            + input.speed_steps as f32 * MOVE_STEP_DELTA)
            .clamp(MOVE_STEP_MIN, MOVE_STEP_MAX);
    }

    if input.flip_facing {
        state.player.facing.flip();
    }

    if input.jump {
        state.player.jump.trigger();
    }

    // Camera
    if input.cycle_camera {
        state.camera.cycle();
    }
    if input.pan_x != 0.0 || input.pan_z != 0.0 {
        state.camera.pan(input.pan_x, input.pan_z);
    }
    if input.look_dx != 0.0 || input.look_dy != 0.0 {
        state.camera.look_offset.x += input.look_dx / 1000.0;
        state.camera.look_offset.y += input.look_dy / 1000.0;
        state.camera.look_yaw_degrees -= input.look_dx / 100.0;
    }
    if state.camera.drives_bot_yaw() {
        state.player.yaw_degrees = state.camera.look_yaw_degrees;
    }

    // Canon
    if input.toggle_sweep {
        state.canon.sweeping = !state.canon.sweeping;
    }
    if input.fire {
        state.canon.fire();
    }
    state.canon.advance();

    // Jump arc, with a sideways nudge while airborne
    state.player.jump.advance(dt);
    if state.player.jump.airborne {
        state.player.offset.y =
            clamp_offset(state.player.offset.y + JUMP_DRIFT * state.player.facing.sign());
    }

    // Obstacle animation
    for obs in &mut state.obstacles {
        obs.advance();
    }

    // A hit ends the run immediately
    let bot = state.player.position();
    if collision::scan(bot.x, bot.z, state.player.jump.height, &state.obstacles).is_some() {
        state.phase = GamePhase::Lost;
        events.push(GameEvent::HitObstacle);
        return events;
    }

    // Reaching the far corner rebuilds a denser field and restarts the
    // crossing from the anchor
    if state.player.at_destination() {
        state.grow_obstacles();
        state.player.offset = Vec2::ZERO;
        state.level += 1;
        events.push(GameEvent::ReachedGoal {
            obstacle_count: state.obstacles.len(),
        });
    }

    events
}
