//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod camera;
pub mod collision;
pub mod jump;
pub mod obstacle;
pub mod state;
pub mod tick;

pub use camera::{CameraMode, CameraRig, CameraView};
pub use collision::{clears_vertically, footprints_overlap, scan};
pub use jump::Jump;
pub use obstacle::{Behavior, Obstacle};
pub use state::{Canon, Facing, GameEvent, GamePhase, Player, WorldState};
pub use tick::{FrameInput, tick};
