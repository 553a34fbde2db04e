//! Sentinel behavior.
//!
//! Per tick: derive the looping frame from wall-clock elapsed time (near
//! window of 7 frames when the player is horizontally close, far window of 3
//! otherwise), then manage the attack slide: trigger on frame overlap with
//! the player, cancel the moment overlap ends, advance progress while it
//! runs. Both the loop and the slide are resolved against the anchor; the
//! slide itself is a draw-time offset.

use bevy_ecs::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::mapposition::MapPosition;
use crate::components::player::Player;
use crate::components::sentinel::{
    FAR_WINDOW, LOOP_FRAME_SECONDS, NEAR_THRESHOLD_RATIO, NEAR_WINDOW, Sentinel,
};
use crate::resources::clockstore::ClockStore;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::{AnimKey, SpriteStore};
use crate::resources::worldtime::WorldTime;

pub fn sentinel_update(
    mut q_sentinel: Query<(&mut Sentinel, &MapPosition), Without<Player>>,
    q_player: Query<(&MapPosition, &ActiveAnim), With<Player>>,
    sprites: Res<SpriteStore>,
    clocks: Res<ClockStore>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
) {
    let player = q_player.single().ok();

    for (mut sentinel, anchor) in q_sentinel.iter_mut() {
        // Near/far window from horizontal distance alone.
        sentinel.near = match player {
            Some((p_pos, _)) => {
                (p_pos.pos.x - anchor.pos.x).abs() < screen.width() * NEAR_THRESHOLD_RATIO
            }
            None => false,
        };
        let window = if sentinel.near { NEAR_WINDOW } else { FAR_WINDOW };

        // The loop runs on elapsed wall-clock time, so switching windows
        // re-indexes into the new window rather than restarting it.
        sentinel.loop_frame = (time.elapsed / LOOP_FRAME_SECONDS) as usize % window;

        // Attack trigger and cancel, both against the displayed loop frame
        // at the anchor. Missing frames suppress the overlap check.
        let overlap = match player {
            Some((p_pos, p_anim)) => {
                let p_frame = sprites.frame(p_anim.key, clocks.frame(p_anim.key));
                let s_frame = sprites.frame(AnimKey::Sentinel, sentinel.loop_frame);
                match (p_frame, s_frame) {
                    (Some(p), Some(s)) => super::proximity::frames_overlap(
                        p_pos.pos.x,
                        p_pos.pos.y,
                        p.width,
                        p.height,
                        anchor.pos.x,
                        anchor.pos.y,
                        s.width,
                        s.height,
                    ),
                    _ => false,
                }
            }
            None => false,
        };

        if overlap && !sentinel.attacking {
            sentinel.attacking = true;
            sentinel.attack_t = 0.0;
        }
        if !overlap {
            sentinel.attacking = false;
            sentinel.attack_t = 0.0;
        }
        if sentinel.attacking {
            sentinel.attack_t += time.delta / crate::components::sentinel::ATTACK_SECONDS;
        }
    }
}
