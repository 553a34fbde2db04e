//! Simulation time resource.
//!
//! Updated once per frame by [`crate::systems::time::update_world_time`].
//! Every timed behavior (frame advances, typewriter reveal, attack slide)
//! reads `elapsed`/`delta` from here instead of a real clock, so tests can
//! drive time explicitly.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Seconds since startup, scaled.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}
