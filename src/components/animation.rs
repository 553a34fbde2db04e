//! Active animation set of an actor.
//!
//! The set's frame progress lives in the shared
//! [`ClockStore`](crate::resources::clockstore::ClockStore); this component
//! only says which set the actor currently displays.

use bevy_ecs::prelude::Component;

use crate::resources::spritestore::AnimKey;

#[derive(Component, Clone, Copy, Debug, PartialEq)]
pub struct ActiveAnim {
    pub key: AnimKey,
}

impl ActiveAnim {
    pub fn new(key: AnimKey) -> Self {
        Self { key }
    }
}
