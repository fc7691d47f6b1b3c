//! Data-driven gameplay balance
//!
//! Optional JSON overrides for the built-in defaults, pointed at by the
//! `GRID_DASH_TUNING` environment variable. Missing or malformed files
//! fall back to defaults so the demo always starts.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Tunable gameplay parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Distance covered by one movement key press
    pub move_step: f32,
    /// Obstacle count at level one
    pub initial_obstacles: usize,
    /// Multiplier on mouse-look deltas
    pub look_sensitivity: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            move_step: MOVE_STEP,
            initial_obstacles: INITIAL_OBSTACLES,
            look_sensitivity: 1.0,
        }
    }
}

impl Tuning {
    /// Load tuning overrides, falling back to defaults on any failure
    pub fn load() -> Self {
        let Ok(path) = std::env::var("GRID_DASH_TUNING") else {
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Tuning>(&text) {
                Ok(tuning) => {
                    log::info!("Loaded tuning from {}", path);
                    tuning.sanitized()
                }
                Err(e) => {
                    log::warn!("Bad tuning file {}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Could not read tuning file {}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Clamp loaded values into ranges the simulation can handle
    fn sanitized(mut self) -> Self {
        self.move_step = self.move_step.clamp(MOVE_STEP_MIN, MOVE_STEP_MAX);
        self.initial_obstacles = self.initial_obstacles.clamp(2, MAX_OBSTACLES);
        if !self.look_sensitivity.is_finite() || self.look_sensitivity <= 0.0 {
            self.look_sensitivity = 1.0;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tuning_matches_consts() {
        let t = Tuning::default();
        assert_eq!(t.move_step, MOVE_STEP);
        assert_eq!(t.initial_obstacles, INITIAL_OBSTACLES);
        assert_eq!(t.look_sensitivity, 1.0);
    }

    #[test]
    fn test_sanitize_clamps_bad_values() {
        let t = Tuning {
            move_step: 99.0,
            initial_obstacles: 10_000,
            look_sensitivity: f32::NAN,
        }
        .sanitized();
        assert_eq!(t.move_step, MOVE_STEP_MAX);
        assert_eq!(t.initial_obstacles, MAX_OBSTACLES);
        assert_eq!(t.look_sensitivity, 1.0);
    }

    #[test]
    fn test_tuning_roundtrip() {
        let t = Tuning {
            move_step: 0.08,
            initial_obstacles: 10,
            look_sensitivity: 2.0,
        };
        let json = serde_json::to_string(&t).unwrap();
        let back: Tuning = serde_json::from_str(&json).unwrap();
        assert_eq!(back.move_step, t.move_step);
        assert_eq!(back.initial_obstacles, t.initial_obstacles);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let back: Tuning = serde_json::from_str(r#"{"move_step": 0.1}"#).unwrap();
        assert_eq!(back.move_step, 0.1);
        assert_eq!(back.initial_obstacles, INITIAL_OBSTACLES);
    }
}
