//! Stage layout: the ground line shared by all grounded actors.
//!
//! The ground sits at half the surface height and is re-derived on window
//! resize, which also re-anchors the grounded actors.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct Stage {
    /// World-space y of the ground (y grows downward).
    pub ground_y: f32,
}

impl Stage {
    pub fn from_surface_height(height: f32) -> Self {
        Self {
            ground_y: height / 2.0,
        }
    }
}
