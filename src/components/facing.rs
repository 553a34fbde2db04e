//! Horizontal facing of an actor: +1 faces right, -1 faces left.
//!
//! Used as the x scale factor when drawing, so flipping is free.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct Facing(pub f32);

impl Facing {
    pub fn right() -> Self {
        Facing(1.0)
    }

    pub fn left() -> Self {
        Facing(-1.0)
    }
}
