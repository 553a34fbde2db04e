//! Dialogue state.
//!
//! Single conversation slot shared by the whole game: the NPC greets with a
//! typewriter reveal, the player types a line, the chat thread produces a
//! reply which is revealed the same way. Proximity loss forces the machine
//! back to [`DialoguePhase::Idle`] from anywhere, discarding everything in
//! progress.
//!
//! The resource only holds data and small transitions; the per-tick driving
//! logic lives in [`crate::systems::dialogue`].

use bevy_ecs::prelude::Resource;

/// Seconds between revealed characters, for greeting and reply alike.
pub const TYPING_INTERVAL: f32 = 0.04;

/// Upper bound on the player's input buffer, in chars.
pub const MAX_INPUT_CHARS: usize = 200;

/// What the NPC says when the conversation opens.
pub const NPC_GREETING: &str = "找我有什麼事嗎？";

/// Phases of the conversation, in the order they normally occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialoguePhase {
    Idle,
    /// NPC is revealing the greeting character by character.
    NpcTyping,
    /// Greeting fully shown; the input buffer captures keystrokes.
    AwaitingInput,
    /// Submitted text is with the chat thread; tick keeps running.
    ReplyPending,
    /// Reply arrived and is being revealed.
    NpcReplying,
    /// Reply fully shown; stays until resubmission or proximity loss.
    ReplyShown,
}

#[derive(Resource, Debug, Clone)]
pub struct Dialogue {
    pub phase: DialoguePhase,
    /// Static greeting text revealed during [`DialoguePhase::NpcTyping`].
    pub greeting: String,
    /// Player's in-progress input buffer.
    pub input: String,
    /// Last submitted player line.
    pub submitted: String,
    /// Reply text, complete once received; revealed via `cursor`.
    pub reply: String,
    /// Typed-character cursor, in chars, used for greeting and reply reveal.
    pub cursor: usize,
    /// Simulation time of the last character reveal.
    pub last_reveal: f32,
    /// Sequence number of the most recent chat request. Replies carrying an
    /// older sequence are stale and get discarded.
    pub seq: u64,
}

impl Default for Dialogue {
    fn default() -> Self {
        Self {
            phase: DialoguePhase::Idle,
            greeting: NPC_GREETING.to_string(),
            input: String::new(),
            submitted: String::new(),
            reply: String::new(),
            cursor: 0,
            last_reveal: 0.0,
            seq: 0,
        }
    }
}

impl Dialogue {
    pub fn active(&self) -> bool {
        self.phase != DialoguePhase::Idle
    }

    /// Begin the conversation: greeting reveal from the first character.
    /// Any leftovers from a previous conversation are cleared.
    pub fn start(&mut self, now: f32) {
        self.phase = DialoguePhase::NpcTyping;
        self.cursor = 0;
        self.last_reveal = now;
        self.input.clear();
        self.submitted.clear();
        self.reply.clear();
    }

    /// Force back to idle from any phase, discarding typing, input, and
    /// reply state. A still in-flight chat request keeps running but its
    /// reply will no longer match the pending phase and gets dropped.
    pub fn reset(&mut self) {
        self.phase = DialoguePhase::Idle;
        self.cursor = 0;
        self.input.clear();
        self.submitted.clear();
        self.reply.clear();
    }

    /// Greeting prefix revealed so far.
    pub fn shown_greeting(&self) -> String {
        self.greeting.chars().take(self.cursor).collect()
    }

    /// Reply prefix revealed so far.
    pub fn shown_reply(&self) -> String {
        self.reply.chars().take(self.cursor).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_with_the_canonical_greeting() {
        let d = Dialogue::default();
        assert_eq!(d.phase, DialoguePhase::Idle);
        assert!(!d.active());
        assert_eq!(d.greeting, NPC_GREETING);
    }

    #[test]
    fn start_clears_previous_conversation() {
        let mut d = Dialogue::default();
        d.reply = "old reply".into();
        d.submitted = "old line".into();
        d.input = "half-typed".into();
        d.cursor = 4;

        d.start(2.5);
        assert_eq!(d.phase, DialoguePhase::NpcTyping);
        assert_eq!(d.cursor, 0);
        assert_eq!(d.last_reveal, 2.5);
        assert!(d.input.is_empty());
        assert!(d.submitted.is_empty());
        assert!(d.reply.is_empty());
    }

    #[test]
    fn reset_from_any_phase_clears_everything() {
        for phase in [
            DialoguePhase::NpcTyping,
            DialoguePhase::AwaitingInput,
            DialoguePhase::ReplyPending,
            DialoguePhase::NpcReplying,
            DialoguePhase::ReplyShown,
        ] {
            let mut d = Dialogue::default();
            d.phase = phase;
            d.input = "abc".into();
            d.reply = "xyz".into();
            d.submitted = "q".into();
            d.cursor = 2;

            d.reset();
            assert_eq!(d.phase, DialoguePhase::Idle, "from {phase:?}");
            assert!(d.input.is_empty());
            assert!(d.reply.is_empty());
            assert!(d.submitted.is_empty());
            assert_eq!(d.cursor, 0);
        }
    }

    #[test]
    fn shown_text_respects_char_boundaries() {
        let mut d = Dialogue::default();
        d.cursor = 2;
        // Greeting is CJK; byte slicing would panic, char slicing must not.
        assert_eq!(d.shown_greeting(), "找我");

        d.reply = "ok".into();
        assert_eq!(d.shown_reply(), "ok");
    }
}
