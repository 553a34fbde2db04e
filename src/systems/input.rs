//! Keyboard polling.
//!
//! Reads raylib's keyboard state into the [`InputState`] resource once per
//! frame: held/just-pressed flags for the bound keys and the frame's typed
//! character stream for dialogue text capture.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::resources::input::{BoolState, InputState};

pub fn update_input_state(mut input: ResMut<InputState>, mut rl: NonSendMut<RaylibHandle>) {
    poll_key(&mut input.dir_up, &rl);
    poll_key(&mut input.dir_down, &rl);
    poll_key(&mut input.dir_left, &rl);
    poll_key(&mut input.dir_right, &rl);
    poll_key(&mut input.submit, &rl);
    poll_key(&mut input.backspace, &rl);

    input.typed.clear();
    while let Some(ch) = rl.get_char_pressed() {
        input.typed.push(ch);
    }
}

fn poll_key(state: &mut BoolState, rl: &RaylibHandle) {
    state.active = rl.is_key_down(state.key_binding);
    state.just_pressed = rl.is_key_pressed(state.key_binding);
}
