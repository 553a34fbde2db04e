//! ECS resources bridging the main thread with the background chat thread.
//!
//! Call [`setup_chat`] once during initialization to spawn the thread and
//! insert the [`ChatBridge`] plus the `Messages` queues; call
//! [`shutdown_chat`] during teardown to stop the thread gracefully. The tick
//! never blocks on the network: requests go out over a channel, replies are
//! drained non-blockingly each frame.

use bevy_ecs::prelude::*;
use crossbeam_channel::{Receiver, Sender, unbounded};

use crate::events::chat::{ChatCmd, ChatReply};
use crate::systems::chat::chat_thread;

/// Shared bridge between the ECS world and the chat thread.
#[derive(Resource)]
pub struct ChatBridge {
    /// Sender for [`ChatCmd`] messages (ECS -> chat thread).
    pub tx_cmd: Sender<ChatCmd>,
    /// Receiver for [`ChatReply`] messages (chat thread -> ECS).
    pub rx_reply: Receiver<ChatReply>,
    /// Join handle for the background chat thread.
    pub handle: std::thread::JoinHandle<()>,
}

/// Spawn the chat thread and register bridge resources.
///
/// `endpoint` is the chat service URL; with `offline` set the thread skips
/// the network entirely and answers from the local canned table.
pub fn setup_chat(world: &mut World, endpoint: String, offline: bool) {
    let (tx_cmd, rx_cmd) = unbounded::<ChatCmd>();
    let (tx_reply, rx_reply) = unbounded::<ChatReply>();

    let handle = std::thread::spawn(move || chat_thread(rx_cmd, tx_reply, endpoint, offline));

    world.insert_resource(ChatBridge {
        tx_cmd,
        rx_reply,
        handle,
    });
    world.insert_resource(Messages::<ChatCmd>::default());
    world.insert_resource(Messages::<ChatReply>::default());
}

/// Gracefully request shutdown of the chat thread and join it.
pub fn shutdown_chat(world: &mut World) {
    if let Some(bridge) = world.remove_resource::<ChatBridge>() {
        let _ = bridge.tx_cmd.send(ChatCmd::Shutdown);
        let _ = bridge.handle.join();
    }
}
