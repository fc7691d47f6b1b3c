//! Obstacle animation: vertical oscillation and blink cycles

use crate::consts::*;

/// How an obstacle animates, chosen once at spawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Behavior {
    /// Bobs vertically between fixed bounds
    Oscillate,
    /// Counts through a visibility cycle, present only while low
    Blink,
}

/// A single grid obstacle
#[derive(Debug, Clone, Copy)]
pub struct Obstacle {
    /// Cube center on the grid plane
    pub x: f32,
    pub z: f32,
    /// Vertical offset from resting height (oscillators only)
    pub lift: f32,
    /// Oscillation direction, +1.0 up or -1.0 down
    pub lift_dir: f32,
    /// Blink phase counter in [0, BLINK_PERIOD]
    pub visibility: u32,
    pub behavior: Behavior,
}

impl Obstacle {
    /// Advance one tick of animation
    pub fn advance(&mut self) {
        match self.behavior {
            Behavior::Blink => {
                self.visibility += 1;
                if self.visibility > BLINK_PERIOD {
                    self.visibility = 1;
                }
            }
            Behavior::Oscillate => {
                // Flip happens the tick after a bound is crossed, so lift
                // overshoots by exactly one step before turning around
                if self.lift > LIFT_MAX || self.lift < LIFT_MIN {
                    self.lift_dir = -self.lift_dir;
                }
                self.lift += LIFT_RATE * self.lift_dir;
            }
        }
    }

    /// Whether the obstacle is currently drawn and tangible
    ///
    /// The counter never advances for oscillators, so one that spawns at
    /// or past the threshold stays absent for its whole life.
    pub fn is_present(&self) -> bool {
        self.visibility < BLINK_PERIOD * 2 / 3
    }
}
