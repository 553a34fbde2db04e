//! Player/NPC proximity detection.
//!
//! Center-distance AABB overlap against the *currently displayed* frames, so
//! the effective contact area breathes with the animation. Entering overlap
//! switches the NPC to its contact set and starts the dialogue; leaving
//! switches back to idle and ends it.

use bevy_ecs::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::events::dialogue::{DialogueEndEvent, DialogueStartEvent};
use crate::resources::clockstore::ClockStore;
use crate::resources::dialogue::Dialogue;
use crate::resources::spritestore::SpriteStore;
use crate::resources::worldtime::WorldTime;

/// Overlap test for two center-anchored frames.
///
/// Holds exactly when the center distance on each axis is under the average
/// of the two extents on that axis. Strict inequality: touching edges do not
/// count as overlap.
pub fn frames_overlap(
    ax: f32,
    ay: f32,
    aw: f32,
    ah: f32,
    bx: f32,
    by: f32,
    bw: f32,
    bh: f32,
) -> bool {
    (ax - bx).abs() * 2.0 < (aw + bw) && (ay - by).abs() * 2.0 < (ah + bh)
}

/// Switch the NPC between idle and contact sets based on frame overlap with
/// the player, and raise dialogue start/end events on the transitions.
///
/// The target set's clock is reset on every switch so the new loop starts at
/// frame 0. If either actor's current frame is missing (set not loaded or
/// index out of range) the check is skipped and the NPC keeps its state.
pub fn npc_proximity(
    q_player: Query<(&MapPosition, &ActiveAnim), With<Player>>,
    mut q_npc: Query<(&Npc, &MapPosition, &mut ActiveAnim), Without<Player>>,
    sprites: Res<SpriteStore>,
    mut clocks: ResMut<ClockStore>,
    dialogue: Res<Dialogue>,
    time: Res<WorldTime>,
    mut commands: Commands,
) {
    let Ok((p_pos, p_anim)) = q_player.single() else {
        return;
    };
    let Some(p_frame) = sprites.frame(p_anim.key, clocks.frame(p_anim.key)) else {
        return;
    };
    let (p_w, p_h) = (p_frame.width, p_frame.height);

    for (npc, n_pos, mut n_anim) in q_npc.iter_mut() {
        let Some(n_frame) = sprites.frame(n_anim.key, clocks.frame(n_anim.key)) else {
            continue;
        };

        let overlap = frames_overlap(
            p_pos.pos.x,
            p_pos.pos.y,
            p_w,
            p_h,
            n_pos.pos.x,
            n_pos.pos.y,
            n_frame.width,
            n_frame.height,
        );

        if overlap {
            if n_anim.key != npc.contact {
                n_anim.key = npc.contact;
                clocks.reset(npc.contact, time.elapsed);
            }
            if !dialogue.active() {
                commands.trigger(DialogueStartEvent {});
            }
        } else {
            if n_anim.key != npc.idle {
                n_anim.key = npc.idle;
                clocks.reset(npc.idle, time.elapsed);
            }
            if dialogue.active() {
                commands.trigger(DialogueEndEvent {});
            }
        }
    }
}
