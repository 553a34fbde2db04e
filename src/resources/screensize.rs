//! Current drawing surface dimensions in pixels.
//!
//! Refreshed from the window each frame so resize-dependent logic (player x
//! clamp, sentinel distance threshold) always sees the live size.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Clone, Copy, Debug)]
pub struct ScreenSize {
    pub w: i32,
    pub h: i32,
}

impl ScreenSize {
    pub fn width(&self) -> f32 {
        self.w as f32
    }

    pub fn height(&self) -> f32 {
        self.h as f32
    }
}
