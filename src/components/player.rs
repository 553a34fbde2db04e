//! Player-specific motion state.
//!
//! The player is the only physically simulated actor: a vertical velocity
//! integrated under constant gravity, plus the bookkeeping for the turn
//! animation (last resolved horizontal direction and whether a turn is
//! currently playing).

use bevy_ecs::prelude::Component;

/// Horizontal speed per tick, in pixels.
pub const MOVE_SPEED: f32 = 4.0;
/// Downward acceleration per tick.
pub const GRAVITY: f32 = 0.6;
/// Initial vertical velocity of a jump (negative is up).
pub const JUMP_SPEED: f32 = -12.0;
/// How close to the ground the player must be for a jump to start.
pub const GROUND_EPSILON: f32 = 0.5;

#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    /// Vertical velocity in pixels per tick.
    pub vy: f32,
    /// Last resolved horizontal intent: -1 left, 1 right, 0 neutral.
    pub last_dir: i8,
    /// A turn animation is playing; cleared when its clock completes one
    /// full loop, or preempted by jump/crouch.
    pub turning: bool,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            vy: 0.0,
            last_dir: 0,
            turning: false,
        }
    }
}
