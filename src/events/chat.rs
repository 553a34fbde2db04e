//! Messages exchanged with the background chat thread.
//!
//! Commands travel ECS -> chat thread, replies travel back. Both directions
//! are mirrored into Bevy ECS message queues so systems (and tests) can
//! write/read them without touching the channels directly.

use bevy_ecs::message::Message;

/// Commands sent *to* the chat thread.
#[derive(Message, Debug, Clone)]
pub enum ChatCmd {
    /// Request a reply for the player's submitted line.
    Ask { seq: u64, message: String },
    Shutdown,
}

/// Replies sent *back* from the chat thread.
///
/// `seq` echoes the request sequence so stale completions (player already
/// walked away, a newer question was asked) can be told apart and dropped.
#[derive(Message, Debug, Clone)]
pub struct ChatReply {
    pub seq: u64,
    pub text: String,
}
