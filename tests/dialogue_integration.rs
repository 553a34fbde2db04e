//! Dialogue machine integration tests: typewriter reveals, input capture,
//! submission, reply handling, and the chat worker thread.

use std::time::Duration;

use bevy_ecs::message::Messages;
use bevy_ecs::prelude::*;
use crossbeam_channel::unbounded;

use pigpen::events::chat::{ChatCmd, ChatReply};
use pigpen::resources::chat::{setup_chat, shutdown_chat};
use pigpen::resources::dialogue::{
    Dialogue, DialoguePhase, MAX_INPUT_CHARS, NPC_GREETING, TYPING_INTERVAL,
};
use pigpen::resources::input::InputState;
use pigpen::resources::worldtime::WorldTime;
use pigpen::systems::chat::{
    DEFAULT_CANNED_REPLY, chat_thread, forward_chat_cmds, poll_chat_replies, update_chat_cmds,
    update_chat_replies,
};
use pigpen::systems::dialogue::dialogue_system;

fn make_world() -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta: 1.0 / 60.0,
        time_scale: 1.0,
    });
    world.insert_resource(InputState::default());
    world.insert_resource(Dialogue::default());
    world.init_resource::<Messages<ChatCmd>>();
    world.init_resource::<Messages<ChatReply>>();
    world
}

fn tick_dialogue(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(dialogue_system);
    schedule.run(world);
}

fn advance_time(world: &mut World, dt: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.elapsed += dt;
    wt.delta = dt;
}

/// One typewriter step: advance past the reveal interval, then tick.
fn reveal_step(world: &mut World) {
    advance_time(world, TYPING_INTERVAL);
    tick_dialogue(world);
}

fn press_keys(world: &mut World, f: impl Fn(&mut InputState)) {
    let mut input = world.resource_mut::<InputState>();
    *input = InputState::default();
    f(&mut input);
}

fn queued_cmds(world: &mut World) -> Vec<ChatCmd> {
    world
        .resource_mut::<Messages<ChatCmd>>()
        .drain()
        .collect()
}

/// Drive the machine from a fresh start to `AwaitingInput`.
fn run_greeting(world: &mut World) {
    let now = world.resource::<WorldTime>().elapsed;
    world.resource_mut::<Dialogue>().start(now);
    let chars = NPC_GREETING.chars().count();
    for _ in 0..=chars {
        reveal_step(world);
    }
}

// --------------- greeting reveal ---------------

#[test]
fn greeting_reveals_one_char_per_interval() {
    let mut world = make_world();
    world.resource_mut::<Dialogue>().start(0.0);

    // A tick inside the interval reveals nothing.
    tick_dialogue(&mut world);
    assert_eq!(world.resource::<Dialogue>().cursor, 0);

    reveal_step(&mut world);
    {
        let d = world.resource::<Dialogue>();
        assert_eq!(d.cursor, 1);
        assert_eq!(d.shown_greeting(), NPC_GREETING.chars().take(1).collect::<String>());
        assert_eq!(d.phase, DialoguePhase::NpcTyping);
    }

    // Full reveal, then one more interval to open input.
    let chars = NPC_GREETING.chars().count();
    for _ in 1..chars {
        reveal_step(&mut world);
    }
    {
        let d = world.resource::<Dialogue>();
        assert_eq!(d.shown_greeting(), NPC_GREETING);
        assert_eq!(d.phase, DialoguePhase::NpcTyping);
    }

    reveal_step(&mut world);
    assert_eq!(world.resource::<Dialogue>().phase, DialoguePhase::AwaitingInput);
}

// --------------- input capture ---------------

#[test]
fn typed_characters_append_to_the_buffer() {
    let mut world = make_world();
    run_greeting(&mut world);

    press_keys(&mut world, |i| i.typed = vec!['h', 'i', '!']);
    tick_dialogue(&mut world);
    assert_eq!(world.resource::<Dialogue>().input, "hi!");

    // Control characters are dropped, printable ones keep appending.
    press_keys(&mut world, |i| i.typed = vec!['\u{8}', '嗨']);
    tick_dialogue(&mut world);
    assert_eq!(world.resource::<Dialogue>().input, "hi!嗨");
}

#[test]
fn input_stops_growing_at_the_cap() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "嗨".repeat(MAX_INPUT_CHARS);
    press_keys(&mut world, |i| i.typed = vec!['x']);
    tick_dialogue(&mut world);

    assert_eq!(
        world.resource::<Dialogue>().input.chars().count(),
        MAX_INPUT_CHARS
    );
}

#[test]
fn backspace_removes_the_last_character() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "嗨呀".to_string();
    press_keys(&mut world, |i| i.backspace.just_pressed = true);
    tick_dialogue(&mut world);
    assert_eq!(world.resource::<Dialogue>().input, "嗨");

    // Backspace on an empty buffer is a no-op.
    world.resource_mut::<Dialogue>().input.clear();
    press_keys(&mut world, |i| i.backspace.just_pressed = true);
    tick_dialogue(&mut world);
    assert_eq!(world.resource::<Dialogue>().input, "");
}

// --------------- submission ---------------

#[test]
fn blank_submission_is_ignored() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "   ".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);
    tick_dialogue(&mut world);

    let d = world.resource::<Dialogue>();
    assert_eq!(d.phase, DialoguePhase::AwaitingInput);
    assert_eq!(d.seq, 0);
    assert!(queued_cmds(&mut world).is_empty());
}

#[test]
fn submission_sends_trimmed_text_and_parks_pending() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "  test  ".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);
    tick_dialogue(&mut world);

    {
        let d = world.resource::<Dialogue>();
        assert_eq!(d.phase, DialoguePhase::ReplyPending);
        assert_eq!(d.seq, 1);
        assert_eq!(d.submitted, "test");
        assert!(d.input.is_empty());
    }

    let cmds = queued_cmds(&mut world);
    assert_eq!(cmds.len(), 1);
    match &cmds[0] {
        ChatCmd::Ask { seq, message } => {
            assert_eq!(*seq, 1);
            assert_eq!(message, "test");
        }
        other => panic!("unexpected command {other:?}"),
    }
}

// --------------- replies ---------------

#[test]
fn matching_reply_types_out_then_reopens_input() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "test".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);
    tick_dialogue(&mut world);
    press_keys(&mut world, |_| {});

    world
        .resource_mut::<Messages<ChatReply>>()
        .write(ChatReply {
            seq: 1,
            text: "ok".to_string(),
        });
    tick_dialogue(&mut world);
    {
        let d = world.resource::<Dialogue>();
        assert_eq!(d.phase, DialoguePhase::NpcReplying);
        assert_eq!(d.reply, "ok");
        assert_eq!(d.cursor, 0);
    }

    reveal_step(&mut world);
    reveal_step(&mut world);
    assert_eq!(world.resource::<Dialogue>().shown_reply(), "ok");

    reveal_step(&mut world);
    assert_eq!(world.resource::<Dialogue>().phase, DialoguePhase::ReplyShown);

    // Settled: further ticks neither advance the cursor nor change phase.
    reveal_step(&mut world);
    let d = world.resource::<Dialogue>();
    assert_eq!(d.phase, DialoguePhase::ReplyShown);
    assert_eq!(d.cursor, 2);
}

#[test]
fn reply_with_wrong_sequence_is_discarded() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "test".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);
    tick_dialogue(&mut world);
    press_keys(&mut world, |_| {});

    world
        .resource_mut::<Messages<ChatReply>>()
        .write(ChatReply {
            seq: 99,
            text: "stale".to_string(),
        });
    tick_dialogue(&mut world);

    let d = world.resource::<Dialogue>();
    assert_eq!(d.phase, DialoguePhase::ReplyPending);
    assert!(d.reply.is_empty());
}

#[test]
fn reply_landing_after_reset_is_discarded() {
    let mut world = make_world();
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "test".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);
    tick_dialogue(&mut world);
    press_keys(&mut world, |_| {});

    // The player walked away mid-request, then came back.
    world.resource_mut::<Dialogue>().reset();
    let now = world.resource::<WorldTime>().elapsed;
    world.resource_mut::<Dialogue>().start(now);

    world
        .resource_mut::<Messages<ChatReply>>()
        .write(ChatReply {
            seq: 1,
            text: "late".to_string(),
        });
    tick_dialogue(&mut world);

    let d = world.resource::<Dialogue>();
    assert_eq!(d.phase, DialoguePhase::NpcTyping);
    assert!(d.reply.is_empty());
}

#[test]
fn failed_chat_lookup_falls_back_to_the_default_reply() {
    let mut world = make_world();
    // Offline mode short-circuits the HTTP call, exercising the same
    // fallback path a transport failure takes.
    setup_chat(
        &mut world,
        "http://localhost:1/unused".to_string(),
        true,
    );
    run_greeting(&mut world);

    world.resource_mut::<Dialogue>().input = "unknown question".to_string();
    press_keys(&mut world, |i| i.submit.just_pressed = true);

    // One persistent schedule, like the real frame loop, so message cursors
    // survive across ticks.
    let mut schedule = Schedule::default();
    schedule.add_systems(
        (
            update_chat_cmds,
            forward_chat_cmds,
            poll_chat_replies,
            update_chat_replies,
        )
            .chain(),
    );
    schedule.add_systems(dialogue_system.after(update_chat_replies));

    let mut replying = false;
    for _ in 0..500 {
        advance_time(&mut world, TYPING_INTERVAL);
        schedule.run(&mut world);
        press_keys(&mut world, |_| {});
        if world.resource::<Dialogue>().phase == DialoguePhase::NpcReplying {
            replying = true;
            break;
        }
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(replying, "reply never arrived from the chat thread");
    assert_eq!(world.resource::<Dialogue>().reply, DEFAULT_CANNED_REPLY);

    // The reveal then runs to completion as usual.
    let chars = DEFAULT_CANNED_REPLY.chars().count();
    for _ in 0..=chars {
        advance_time(&mut world, TYPING_INTERVAL);
        schedule.run(&mut world);
    }
    assert_eq!(world.resource::<Dialogue>().phase, DialoguePhase::ReplyShown);

    shutdown_chat(&mut world);
}

// --------------- chat worker thread ---------------

#[test]
fn offline_thread_answers_from_the_canned_table() {
    let (tx_cmd, rx_cmd) = unbounded();
    let (tx_reply, rx_reply) = unbounded();
    let handle = std::thread::spawn(move || {
        chat_thread(rx_cmd, tx_reply, "http://localhost:1/unused".to_string(), true)
    });

    tx_cmd
        .send(ChatCmd::Ask {
            seq: 7,
            message: "ㄋㄧˇㄐㄧㄠˋㄕㄜˊㄇㄜ˙".to_string(),
        })
        .unwrap();
    let reply = rx_reply.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(reply.seq, 7);
    assert_eq!(reply.text, "你不需要知道");

    tx_cmd
        .send(ChatCmd::Ask {
            seq: 8,
            message: "something unknown".to_string(),
        })
        .unwrap();
    let reply = rx_reply.recv_timeout(Duration::from_secs(5)).unwrap();
    assert_eq!(reply.seq, 8);
    assert_eq!(reply.text, DEFAULT_CANNED_REPLY);

    tx_cmd.send(ChatCmd::Shutdown).unwrap();
    handle.join().unwrap();
}
