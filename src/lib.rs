//! Grid Dash - a 3D obstacle-crossing demo
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, obstacles, jump physics, cameras)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven gameplay balance

pub mod renderer;
pub mod sim;
pub mod tuning;

pub use tuning::Tuning;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (120 Hz for smooth physics)
    pub const SIM_DT: f32 = 1.0 / 120.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Ground slab half-extent (playfield spans -1..1 on x and z)
    pub const GROUND_HALF: f32 = 1.0;
    /// Ground cube center sits slightly below the origin
    pub const GROUND_DROP: f32 = -0.03;

    /// Bot anchor corner; camera formulas measure from here
    pub const BOT_BASE: [f32; 3] = [-0.97, 1.1, -0.97];
    /// Bot cube half-extent
    pub const BOT_HALF: f32 = 0.05;
    /// Drawn bot cube sits this far below the anchor
    pub const BOT_DRAW_DROP: f32 = -0.09;
    /// Distance covered by one movement key press
    pub const MOVE_STEP: f32 = 0.05;
    /// Step size change per speed-adjust key press
    pub const MOVE_STEP_DELTA: f32 = 0.01;
    pub const MOVE_STEP_MIN: f32 = 0.01;
    pub const MOVE_STEP_MAX: f32 = 0.2;
    /// Maximum accumulated offset along either grid axis
    pub const OFFSET_MAX: f32 = 1.95;
    /// Offset on both axes at which the far corner counts as reached
    pub const DESTINATION: f32 = 1.9;

    /// Obstacle population
    pub const INITIAL_OBSTACLES: usize = 6;
    pub const MAX_OBSTACLES: usize = 50;
    /// Obstacle cube half-extent
    pub const OBSTACLE_HALF: f32 = 0.05;
    /// Obstacle cube center sits this far below the bot anchor
    pub const OBSTACLE_DROP: f32 = -0.12;
    /// Blink counter wraps back to 1 past this value
    pub const BLINK_PERIOD: u32 = 1500;
    /// Vertical oscillation step per tick
    pub const LIFT_RATE: f32 = 0.001;
    /// Oscillation bounds; direction flips once either is exceeded
    pub const LIFT_MAX: f32 = 0.05;
    pub const LIFT_MIN: f32 = -0.1;

    /// Jump launch speed (units/s upward)
    pub const JUMP_VELOCITY: f32 = 1.2;
    /// Gravity (units/s², negative is down)
    pub const GRAVITY: f32 = -2.4;
    /// Arc counts as landed once height falls below this
    pub const LANDING_EPSILON: f32 = -0.01;
    /// Sideways nudge per tick while airborne, signed by facing
    pub const JUMP_DRIFT: f32 = 0.002;
    /// Obstacles can be cleared only above this jump height
    pub const VERTICAL_CLEARANCE: f32 = 0.12;

    /// Tower camera eye position
    pub const TOWER_EYE: [f32; 3] = [1.2, 1.4, 1.2];
    /// Pan distance per arrow key press
    pub const PAN_STEP: f32 = 0.1;
    /// Zoom change per wheel notch, and its soft limit
    pub const ZOOM_STEP: f32 = 20.0;
    pub const ZOOM_LIMIT: f32 = 300.0;
    /// Projection parameters
    pub const FOV_Y_DEGREES: f32 = 90.0;
    pub const Z_NEAR: f32 = 0.1;
    pub const Z_FAR: f32 = 500.0;

    /// Canon base position (far corner of the grid)
    pub const CANON_POS: [f32; 3] = [0.9, 1.03, 0.9];
    /// Canon pitch sweep step per tick and its bound (degrees)
    pub const CANON_PITCH_STEP: f32 = 0.3;
    pub const CANON_PITCH_LIMIT: f32 = 30.0;
}

/// Clamp an accumulated movement offset to the playable range
#[inline]
pub fn clamp_offset(v: f32) -> f32 {
    v.clamp(0.0, consts::OFFSET_MAX)
}

/// Vertical displacement of the jump arc at elapsed time `t`
///
/// Projectile formula with a halving convention: the raw displacement
/// `u*t + g*t²/2` is divided by two again, shortening the arc without
/// changing its shape.
#[inline]
pub fn jump_height(t: f32) -> f32 {
    (consts::JUMP_VELOCITY * t + 0.5 * consts::GRAVITY * t * t) / 2.0
}
