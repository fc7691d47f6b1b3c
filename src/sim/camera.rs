//! Camera mode state machine
//!
//! Five fixed view strategies. Each maps the bot position, pan offsets,
//! and mouse-look state to the eye/target pair consumed by the view
//! matrix. Switching is instantaneous, with no transition states.

use glam::{Vec2, Vec3};

use crate::consts::*;

/// Available view strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Fixed vantage above the far corner, pannable with arrows
    #[default]
    Tower,
    /// First person from inside the bot cube
    BotEye,
    /// Just above and behind the bot
    BotHead,
    /// Straight down over the start corner
    Top,
    /// Trailing rig above the bot with its own pan
    Helicopter,
}

impl CameraMode {
    pub const COUNT: usize = 5;

    /// Next mode in the cycle
    pub fn next(self) -> Self {
        match self {
            CameraMode::Tower => CameraMode::BotEye,
            CameraMode::BotEye => CameraMode::BotHead,
            CameraMode::BotHead => CameraMode::Top,
            CameraMode::Top => CameraMode::Helicopter,
            CameraMode::Helicopter => CameraMode::Tower,
        }
    }
}

/// Eye/target pair for view-matrix computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraView {
    pub eye: Vec3,
    pub target: Vec3,
}

/// Camera state: active mode plus pan and mouse-look accumulators
#[derive(Debug, Clone, Default)]
pub struct CameraRig {
    pub mode: CameraMode,
    /// Tower pan offsets (x, z)
    pub tower_pan: Vec2,
    /// Helicopter rig pan offsets (x, z)
    pub heli_pan: Vec2,
    /// Mouse-look offset added to the view target (x, z)
    pub look_offset: Vec2,
    /// Accumulated mouse-look yaw in degrees; the bot snaps to this
    /// while a bot-anchored mode is active
    pub look_yaw_degrees: f32,
}

impl CameraRig {
    /// Cycle to the next mode; entering Helicopter recenters its rig
    pub fn cycle(&mut self) {
        self.mode = self.mode.next();
        if self.mode == CameraMode::Helicopter {
            self.heli_pan = Vec2::ZERO;
        }
    }

    /// Route an arrow-key pan to whichever rig the mode uses
    pub fn pan(&mut self, dx: f32, dz: f32) {
        if self.mode == CameraMode::Helicopter {
            self.heli_pan += Vec2::new(dx, dz);
        } else {
            self.tower_pan += Vec2::new(dx, dz);
        }
    }

    /// Whether the bot's yaw follows the mouse in the current mode
    pub fn drives_bot_yaw(&self) -> bool {
        matches!(self.mode, CameraMode::BotEye | CameraMode::BotHead)
    }

    /// Compute the eye/target pair for the current mode
    ///
    /// `bot` is the bot's anchor plus accumulated movement. Top mode
    /// hovers over the start corner and ignores that movement.
    pub fn view(&self, bot: Vec3) -> CameraView {
        let mut view = match self.mode {
            CameraMode::Tower => CameraView {
                eye: Vec3::from(TOWER_EYE) + Vec3::new(self.tower_pan.x, 0.0, self.tower_pan.y),
                target: Vec3::ZERO,
            },
            CameraMode::BotEye => CameraView {
                eye: bot,
                target: bot + Vec3::new(0.0, 0.0, -0.2),
            },
            CameraMode::BotHead => CameraView {
                eye: bot + Vec3::new(0.0, 0.2, 0.4),
                target: bot,
            },
            CameraMode::Top => CameraView {
                eye: Vec3::from(BOT_BASE) + Vec3::new(0.0, 1.0, 0.0),
                target: Vec3::ZERO,
            },
            CameraMode::Helicopter => CameraView {
                eye: bot + Vec3::new(self.heli_pan.x, 0.8, 1.0 + self.heli_pan.y),
                target: bot,
            },
        };
        view.target.x += self.look_offset.x;
        view.target.z += self.look_offset.y;
        view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cycle_returns_to_start() {
        let mut rig = CameraRig::default();
        let start = rig.mode;
        for _ in 0..CameraMode::COUNT {
            rig.cycle();
        }
        assert_eq!(rig.mode, start);
    }

    #[test]
    fn test_all_modes_distinct_within_cycle() {
        let mut rig = CameraRig::default();
        let mut seen = vec![rig.mode];
        for _ in 0..CameraMode::COUNT - 1 {
            rig.cycle();
            assert!(!seen.contains(&rig.mode));
            seen.push(rig.mode);
        }
    }

    #[test]
    fn test_entering_helicopter_resets_its_pan() {
        let mut rig = CameraRig {
            mode: CameraMode::Helicopter,
            heli_pan: Vec2::new(0.5, -0.3),
            ..Default::default()
        };
        // Leave and come back around
        for _ in 0..CameraMode::COUNT {
            rig.pan(0.1, 0.1);
            rig.cycle();
        }
        assert_eq!(rig.mode, CameraMode::Helicopter);
        assert_eq!(rig.heli_pan, Vec2::ZERO);
    }

    #[test]
    fn test_pan_routing_by_mode() {
        let mut rig = CameraRig::default();
        rig.pan(0.1, 0.0);
        assert_eq!(rig.tower_pan, Vec2::new(0.1, 0.0));
        assert_eq!(rig.heli_pan, Vec2::ZERO);

        rig.mode = CameraMode::Helicopter;
        rig.pan(0.0, -0.2);
        assert_eq!(rig.heli_pan, Vec2::new(0.0, -0.2));
        assert_eq!(rig.tower_pan, Vec2::new(0.1, 0.0));
    }

    #[test]
    fn test_top_view_ignores_bot_movement() {
        let rig = CameraRig {
            mode: CameraMode::Top,
            ..Default::default()
        };
        let base = Vec3::from(BOT_BASE);
        let moved = base + Vec3::new(1.0, 0.0, 1.5);
        assert_eq!(rig.view(base).eye, rig.view(moved).eye);
        assert_eq!(rig.view(moved).eye.y, BOT_BASE[1] + 1.0);
    }

    #[test]
    fn test_bot_eye_sits_at_bot() {
        let rig = CameraRig {
            mode: CameraMode::BotEye,
            ..Default::default()
        };
        let bot = Vec3::new(0.3, 1.1, -0.4);
        let view = rig.view(bot);
        assert_eq!(view.eye, bot);
        assert!(view.target.z < bot.z);
    }

    #[test]
    fn test_look_offset_shifts_target_only() {
        let rig = CameraRig {
            look_offset: Vec2::new(0.25, -0.1),
            ..Default::default()
        };
        let plain = CameraRig::default().view(Vec3::ZERO);
        let shifted = rig.view(Vec3::ZERO);
        assert_eq!(shifted.eye, plain.eye);
        assert!((shifted.target.x - plain.target.x - 0.25).abs() < 1e-6);
        assert!((shifted.target.z - plain.target.z + 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_yaw_follows_mouse_only_in_bot_views() {
        let mut rig = CameraRig::default();
        assert!(!rig.drives_bot_yaw());
        rig.mode = CameraMode::BotEye;
        assert!(rig.drives_bot_yaw());
        rig.mode = CameraMode::BotHead;
        assert!(rig.drives_bot_yaw());
        rig.mode = CameraMode::Top;
        assert!(!rig.drives_bot_yaw());
    }
}
