//! The scripted distance actor.
//!
//! Two independent visual phases: a looping frame window picked by how close
//! the player is horizontally, and an attack slide of a fixed frame range
//! triggered by bounding-box overlap. The loop is driven by wall-clock
//! elapsed time, not by the shared animation clocks.

use bevy_ecs::prelude::Component;

/// Frames cycled while the player is within the near threshold.
pub const NEAR_WINDOW: usize = 7;
/// Frames cycled otherwise.
pub const FAR_WINDOW: usize = 3;
/// Seconds each loop frame stays on screen.
pub const LOOP_FRAME_SECONDS: f32 = 0.2;
/// Near threshold as a fraction of the surface width.
pub const NEAR_THRESHOLD_RATIO: f32 = 0.4;
/// First frame of the attack slide.
pub const ATTACK_FIRST_FRAME: usize = 7;
/// Last frame of the attack slide.
pub const ATTACK_LAST_FRAME: usize = 9;
/// Seconds for the attack slide to cross the screen.
pub const ATTACK_SECONDS: f32 = 0.6;
/// Per-frame phase offset of the sliding attack frames.
pub const ATTACK_STAGGER: f32 = 0.15;
/// Warning shown while the attack is running.
pub const ATTACK_WARNING: &str = "不要靠近我";

/// The actor's anchor is its [`MapPosition`](crate::components::mapposition);
/// the attack frames slide away from it at draw time but the anchor itself
/// never moves, so the warning bubble stays pinned.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Sentinel {
    /// Loop frame currently displayed (near or far window).
    pub loop_frame: usize,
    /// Player is within the near threshold this tick.
    pub near: bool,
    /// Attack slide in progress.
    pub attacking: bool,
    /// Attack slide progress, 0 at trigger, grows by `delta / ATTACK_SECONDS`.
    pub attack_t: f32,
}
