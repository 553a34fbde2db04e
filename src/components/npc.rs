//! The conversational NPC.
//!
//! Carries its two animation sets; the proximity system swaps the entity's
//! [`ActiveAnim`](crate::components::animation::ActiveAnim) between them and
//! drives the dialogue triggers.

use bevy_ecs::prelude::Component;

use crate::resources::spritestore::AnimKey;

#[derive(Component, Clone, Copy, Debug)]
pub struct Npc {
    /// Set looping while nobody is close.
    pub idle: AnimKey,
    /// Set looping while the player overlaps.
    pub contact: AnimKey,
}

impl Default for Npc {
    fn default() -> Self {
        Self {
            idle: AnimKey::NpcIdle,
            contact: AnimKey::NpcContact,
        }
    }
}
