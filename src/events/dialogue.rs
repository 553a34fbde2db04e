//! Dialogue trigger events and their observers.
//!
//! The proximity system only decides *that* a conversation should start or
//! stop; the transitions themselves happen here, keeping the trigger source
//! decoupled from the dialogue data.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::dialogue::Dialogue;
use crate::resources::worldtime::WorldTime;

/// Fired when the player's box first overlaps the NPC while no conversation
/// is active.
#[derive(Event, Debug, Clone, Copy)]
pub struct DialogueStartEvent {}

/// Fired when overlap ends while a conversation is active.
#[derive(Event, Debug, Clone, Copy)]
pub struct DialogueEndEvent {}

/// Start the greeting reveal. A no-op if a conversation is already running,
/// so a duplicate trigger cannot restart the typewriter mid-sentence.
pub fn observe_dialogue_start(
    _trigger: On<DialogueStartEvent>,
    mut dialogue: ResMut<Dialogue>,
    time: Res<WorldTime>,
) {
    if dialogue.active() {
        debug!("dialogue start ignored, conversation already active");
        return;
    }
    debug!("dialogue started");
    dialogue.start(time.elapsed);
}

/// Force the conversation back to idle, wherever it was.
pub fn observe_dialogue_end(_trigger: On<DialogueEndEvent>, mut dialogue: ResMut<Dialogue>) {
    debug!("dialogue ended, phase was {:?}", dialogue.phase);
    dialogue.reset();
}
