//! Dialogue state machine tick.
//!
//! Runs the typewriter reveals, captures typed input, submits questions to
//! the chat bridge, and applies replies coming back from it. Phase
//! transitions mirror the conversation: greeting types out, input opens,
//! submission parks the machine until a reply with the matching sequence
//! number arrives, the reply types out, then input reopens.

use bevy_ecs::prelude::*;
use log::debug;

use crate::events::chat::{ChatCmd, ChatReply};
use crate::resources::dialogue::{Dialogue, DialoguePhase, MAX_INPUT_CHARS, TYPING_INTERVAL};
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn dialogue_system(
    mut dialogue: ResMut<Dialogue>,
    time: Res<WorldTime>,
    input: Res<InputState>,
    mut cmds: MessageWriter<ChatCmd>,
    mut replies: MessageReader<ChatReply>,
) {
    let now = time.elapsed;

    // Apply replies first so a reply landing this tick starts revealing this
    // tick. A reply is only honored while we are actually waiting for it and
    // its sequence number matches the last submission; anything else is a
    // leftover from a conversation that already ended.
    for reply in replies.read() {
        if dialogue.phase == DialoguePhase::ReplyPending && reply.seq == dialogue.seq {
            dialogue.reply = reply.text.clone();
            dialogue.cursor = 0;
            dialogue.last_reveal = now;
            dialogue.phase = DialoguePhase::NpcReplying;
        } else {
            debug!("discarding stale chat reply (seq {})", reply.seq);
        }
    }

    match dialogue.phase {
        DialoguePhase::NpcTyping => {
            if now - dialogue.last_reveal >= TYPING_INTERVAL {
                dialogue.last_reveal = now;
                if dialogue.cursor < dialogue.greeting.chars().count() {
                    dialogue.cursor += 1;
                } else {
                    dialogue.phase = DialoguePhase::AwaitingInput;
                    dialogue.input.clear();
                    dialogue.reply.clear();
                }
            }
        }
        DialoguePhase::NpcReplying => {
            if now - dialogue.last_reveal >= TYPING_INTERVAL {
                dialogue.last_reveal = now;
                if dialogue.cursor < dialogue.reply.chars().count() {
                    dialogue.cursor += 1;
                } else {
                    dialogue.phase = DialoguePhase::ReplyShown;
                }
            }
        }
        DialoguePhase::AwaitingInput | DialoguePhase::ReplyShown => {
            capture_input(&mut dialogue, &input, &mut cmds);
        }
        DialoguePhase::Idle | DialoguePhase::ReplyPending => {}
    }
}

/// Append printable typed characters (up to the input cap), handle
/// backspace, and submit on Enter when the trimmed text is nonempty.
fn capture_input(
    dialogue: &mut Dialogue,
    input: &InputState,
    cmds: &mut MessageWriter<ChatCmd>,
) {
    for &ch in &input.typed {
        if !ch.is_control() && dialogue.input.chars().count() < MAX_INPUT_CHARS {
            dialogue.input.push(ch);
        }
    }

    if input.backspace.just_pressed {
        dialogue.input.pop();
    }

    if input.submit.just_pressed {
        let text = dialogue.input.trim();
        if !text.is_empty() {
            dialogue.submitted = text.to_string();
            dialogue.seq += 1;
            cmds.write(ChatCmd::Ask {
                seq: dialogue.seq,
                message: dialogue.submitted.clone(),
            });
            debug!("submitted question (seq {})", dialogue.seq);
            dialogue.input.clear();
            dialogue.reply.clear();
            dialogue.cursor = 0;
            dialogue.phase = DialoguePhase::ReplyPending;
        }
    }
}
