//! Player motion and animation-set resolver.
//!
//! One tick of the player state machine: resolve the horizontal intent,
//! detect direction reversals that start the turn animation, pick the active
//! sprite set by priority (jump > crouch > turn > idle), then integrate the
//! per-tick physics (constant-gravity jump arc, ground clamp, screen clamp).

use bevy_ecs::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::player::{GRAVITY, GROUND_EPSILON, JUMP_SPEED, MOVE_SPEED, Player};
use crate::resources::clockstore::ClockStore;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::AnimKey;
use crate::resources::stage::Stage;
use crate::resources::worldtime::WorldTime;

/// Advance the player one tick.
///
/// Contract
/// - Reads held directions from [`InputState`].
/// - Mutates position, facing, motion state, and the active animation set.
/// - Resets the turn clock when a turn starts; the clock system clears
///   `turning` once the loop completes.
pub fn player_controller(
    mut query: Query<(&mut Player, &mut MapPosition, &mut ActiveAnim, &mut Facing)>,
    input: Res<InputState>,
    stage: Res<Stage>,
    screen: Res<ScreenSize>,
    time: Res<WorldTime>,
    mut clocks: ResMut<ClockStore>,
) {
    let up = input.dir_up.active;
    let down = input.dir_down.active;
    let left = input.dir_left.active;
    let right = input.dir_right.active;

    for (mut player, mut position, mut active, mut facing) in query.iter_mut() {
        // Resolved horizontal intent: left wins over right, neutral when
        // neither is held.
        let current_dir: i8 = if left {
            -1
        } else if right {
            1
        } else {
            0
        };

        // A turn starts only on a reversal: nonzero intent flipping to the
        // opposite nonzero intent. Releasing to neutral never triggers.
        if current_dir != 0 && current_dir != player.last_dir && player.last_dir != 0 {
            player.turning = true;
            clocks.reset(AnimKey::PlayerTurn, time.elapsed);
        }

        // Active set by priority. Jump and crouch preempt an in-progress
        // turn; holding left/right without a reversal stays on idle.
        active.key = if up {
            player.turning = false;
            AnimKey::PlayerJump
        } else if down {
            player.turning = false;
            AnimKey::PlayerCrouch
        } else if player.turning {
            AnimKey::PlayerTurn
        } else {
            AnimKey::PlayerIdle
        };

        player.last_dir = current_dir;

        // Horizontal movement, left applied before right. Holding both nets
        // to zero displacement; that canceling is intentional and tested.
        if left {
            position.pos.x -= MOVE_SPEED;
            facing.0 = -1.0;
        }
        if right {
            position.pos.x += MOVE_SPEED;
            facing.0 = 1.0;
        }

        // Jump only from (epsilon of) the ground with no vertical motion,
        // so holding Up airborne cannot re-trigger.
        if up && (position.pos.y - stage.ground_y).abs() < GROUND_EPSILON && player.vy == 0.0 {
            player.vy = JUMP_SPEED;
        }

        // Gravity and ground clamp run unconditionally every tick.
        player.vy += GRAVITY;
        position.pos.y += player.vy;
        if position.pos.y > stage.ground_y {
            position.pos.y = stage.ground_y;
            player.vy = 0.0;
        }

        // Keep the player inside the visible surface.
        position.pos.x = position.pos.x.clamp(1.0, screen.width() - 1.0);
    }
}
