//! Game state and core simulation types

use glam::{Vec2, Vec3};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::camera::CameraRig;
use super::jump::Jump;
use super::obstacle::{Behavior, Obstacle};
use crate::consts::*;
use crate::tuning::Tuning;

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active play
    Running,
    /// The bot hit a solid obstacle; the simulation is frozen
    Lost,
}

/// Milestones reported to the embedding loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bot overlapped a solid obstacle
    HitObstacle,
    /// The bot crossed to the far corner and the field was rebuilt
    ReachedGoal { obstacle_count: usize },
}

/// Airborne drift orientation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Forward,
    Back,
}

impl Facing {
    pub fn flip(&mut self) {
        *self = match self {
            Facing::Forward => Facing::Back,
            Facing::Back => Facing::Forward,
        };
    }

    /// Drift sign along the z axis
    pub fn sign(self) -> f32 {
        match self {
            Facing::Forward => 1.0,
            Facing::Back => -1.0,
        }
    }
}

/// The player-controlled bot
#[derive(Debug, Clone)]
pub struct Player {
    /// Accumulated movement from the start corner (x, z)
    pub offset: Vec2,
    pub jump: Jump,
    pub facing: Facing,
    /// Distance covered per movement key press
    pub move_step: f32,
    /// Render yaw in degrees
    pub yaw_degrees: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            offset: Vec2::ZERO,
            jump: Jump::default(),
            facing: Facing::default(),
            move_step: MOVE_STEP,
            yaw_degrees: 180.0,
        }
    }
}

impl Player {
    /// Anchor position plus accumulated movement (jump height excluded)
    pub fn position(&self) -> Vec3 {
        Vec3::from(BOT_BASE) + Vec3::new(self.offset.x, 0.0, self.offset.y)
    }

    /// Whether both axes have crossed the destination threshold
    pub fn at_destination(&self) -> bool {
        self.offset.x >= DESTINATION && self.offset.y >= DESTINATION
    }
}

/// Canon in the far corner of the grid
#[derive(Debug, Clone)]
pub struct Canon {
    /// Barrel pitch in degrees
    pub pitch_degrees: f32,
    /// Sweep direction, +1.0 or -1.0
    pub sweep_dir: f32,
    /// Whether the pitch sweep is running
    pub sweeping: bool,
    /// Muzzle flash intensity, decaying toward zero
    pub flash: f32,
}

impl Default for Canon {
    fn default() -> Self {
        Self {
            pitch_degrees: 0.0,
            sweep_dir: 1.0,
            sweeping: false,
            flash: 0.0,
        }
    }
}

impl Canon {
    /// Advance one tick of the pitch sweep
    pub fn advance(&mut self) {
        if !self.sweeping {
            return;
        }
        // Same flip-then-step scheme the obstacles use
        if self.pitch_degrees > CANON_PITCH_LIMIT || self.pitch_degrees < -CANON_PITCH_LIMIT {
            self.sweep_dir = -self.sweep_dir;
        }
        self.pitch_degrees += CANON_PITCH_STEP * self.sweep_dir;
    }

    /// Light the muzzle flash at full intensity
    pub fn fire(&mut self) {
        self.flash = 1.0;
    }
}

/// Complete world state (deterministic)
#[derive(Debug, Clone)]
pub struct WorldState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Seeded RNG; every draw goes through here
    pub rng: Pcg32,
    /// Crossings completed, starting at 1
    pub level: u32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    pub player: Player,
    /// Live obstacles; length always equals the live count
    pub obstacles: Vec<Obstacle>,
    pub camera: CameraRig,
    pub canon: Canon,
}

impl WorldState {
    /// Create a world with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_tuning(seed, &Tuning::default())
    }

    /// Create a world with the given tuning
    pub fn with_tuning(seed: u64, tuning: &Tuning) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 1,
            time_ticks: 0,
            phase: GamePhase::Running,
            player: Player {
                move_step: tuning.move_step,
                ..Default::default()
            },
            obstacles: Vec::new(),
            camera: CameraRig::default(),
            canon: Canon::default(),
        };

        let count = tuning.initial_obstacles;
        for _ in 0..count {
            let obstacle = state.spawn_obstacle(count);
            state.obstacles.push(obstacle);
        }

        state
    }

    /// Roll a fresh obstacle
    ///
    /// `population` is the field size the behavior split is computed
    /// against. The draw order is fixed; reordering it reshuffles every
    /// world built from a given seed.
    pub fn spawn_obstacle(&mut self, population: usize) -> Obstacle {
        let lift = self.rng.random_range(0..5u32) as f32 / 100.0;
        let sign = if self.rng.random_range(0..2u32) == 0 {
            1.0
        } else {
            -1.0
        };
        let group = self.rng.random_range(0..population as u32);
        let visibility = self.rng.random_range(0..BLINK_PERIOD);
        // Both coordinates share one sign, so fields cluster along the
        // diagonal the bot travels
        let x = sign * self.rng.random_range(0..10u32) as f32 / 10.0;
        let z = sign * self.rng.random_range(0..10u32) as f32 / 10.0;

        let behavior = if group % (population as u32 / 2).max(1) == 0 {
            Behavior::Blink
        } else {
            Behavior::Oscillate
        };

        Obstacle {
            x,
            z,
            lift,
            lift_dir: sign,
            visibility,
            behavior,
        }
    }

    /// Double the field for the next crossing, capped at `MAX_OBSTACLES`
    ///
    /// Existing obstacles keep their positions and behaviors; only the
    /// additions are rolled fresh.
    pub fn grow_obstacles(&mut self) {
        let target = (self.obstacles.len() * 2).min(MAX_OBSTACLES);
        while self.obstacles.len() < target {
            let obstacle = self.spawn_obstacle(target);
            self.obstacles.push(obstacle);
        }
    }
}
