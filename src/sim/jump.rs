//! Projectile jump arc

use crate::consts::*;
use crate::jump_height;

/// Player jump state
#[derive(Debug, Clone, Copy, Default)]
pub struct Jump {
    /// Mid-air flag gating kinematic updates
    pub airborne: bool,
    /// Seconds since launch
    pub elapsed: f32,
    /// Current vertical displacement
    pub height: f32,
}

impl Jump {
    /// Launch into the arc; ignored while already airborne
    pub fn trigger(&mut self) {
        if !self.airborne {
            self.airborne = true;
            self.elapsed = 0.0;
            self.height = 0.0;
        }
    }

    /// Advance the arc by `dt` seconds
    ///
    /// Height is recomputed from the total elapsed time every tick;
    /// nothing is integrated frame to frame. Landing happens once the
    /// computed height dips below `LANDING_EPSILON`.
    pub fn advance(&mut self, dt: f32) {
        if !self.airborne {
            return;
        }
        self.elapsed += dt;
        self.height = jump_height(self.elapsed);
        if self.height < LANDING_EPSILON {
            self.airborne = false;
            self.elapsed = 0.0;
            self.height = 0.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_launches_once() {
        let mut jump = Jump::default();
        jump.trigger();
        assert!(jump.airborne);

        // A second trigger mid-air must not restart the arc
        jump.advance(0.3);
        let elapsed = jump.elapsed;
        jump.trigger();
        assert_eq!(jump.elapsed, elapsed);
    }

    #[test]
    fn test_advance_grounded_is_noop() {
        let mut jump = Jump::default();
        jump.advance(SIM_DT);
        assert!(!jump.airborne);
        assert_eq!(jump.height, 0.0);
    }

    #[test]
    fn test_height_uses_halved_displacement() {
        let mut jump = Jump::default();
        jump.trigger();

        let mut t = 0.0;
        for _ in 0..30 {
            jump.advance(SIM_DT);
            t += SIM_DT;
            let raw = JUMP_VELOCITY * t + 0.5 * GRAVITY * t * t;
            assert!((jump.height - raw / 2.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_arc_rises_to_apex_then_falls() {
        // Apex of (1.2t - 1.2t^2)/2 is 0.15 at t = 0.5
        assert!((jump_height(0.5) - 0.15).abs() < 1e-6);
        assert!(jump_height(0.25) < jump_height(0.5));
        assert!(jump_height(0.75) < jump_height(0.5));
    }

    #[test]
    fn test_landing_resets_state() {
        let mut jump = Jump::default();
        jump.trigger();

        let mut ticks = 0;
        while jump.airborne && ticks < 200 {
            jump.advance(SIM_DT);
            ticks += 1;
        }
        assert!(!jump.airborne, "arc never landed");
        assert_eq!(jump.height, 0.0);
        assert_eq!(jump.elapsed, 0.0);
        // Full arc takes just over a second at 120 Hz
        assert!(ticks > 100 && ticks < 150);
    }
}
