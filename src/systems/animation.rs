//! Animation clock advancement.
//!
//! Each tick this advances, at the shared 12 fps rate:
//! - the player's *active* set only (inactive sets keep their progress), and
//! - both NPC sets unconditionally, so idle/contact switches resume a live
//!   loop instead of a stale frame.
//!
//! The sentinel's loop is derived directly from elapsed time in
//! [`crate::systems::sentinel`] and does not use the clock store.
//!
//! Turn completion is detected here: when the turn set wraps back to frame 0
//! after advancing, the player becomes idle-eligible again.

use bevy_ecs::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::resources::clockstore::{ClockStore, FRAME_INTERVAL};
use crate::resources::spritestore::{AnimKey, SpriteStore};
use crate::resources::worldtime::WorldTime;

pub fn advance_animation_clocks(
    mut q_player: Query<(&mut Player, &ActiveAnim)>,
    q_npc: Query<&Npc>,
    mut clocks: ResMut<ClockStore>,
    sprites: Res<SpriteStore>,
    time: Res<WorldTime>,
) {
    let now = time.elapsed;

    for (mut player, active) in q_player.iter_mut() {
        let advanced = clocks.advance(active.key, now, FRAME_INTERVAL, sprites.len(active.key));

        // One full loop of the turn set ends the turn: exactly when the
        // clock wraps to 0 after having advanced, never before.
        if player.turning && active.key == AnimKey::PlayerTurn && advanced == Some(0) {
            player.turning = false;
        }
    }

    for npc in q_npc.iter() {
        clocks.advance(npc.idle, now, FRAME_INTERVAL, sprites.len(npc.idle));
        clocks.advance(npc.contact, now, FRAME_INTERVAL, sprites.len(npc.contact));
    }
}
