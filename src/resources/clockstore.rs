//! Animation clocks.
//!
//! One [`AnimClock`] per [`AnimKey`], not per actor: actors that display the
//! same set share its frame progress, exactly one clock instance per set.
//! Clocks advance by polling ([`ClockStore::advance`]) with the current
//! simulation time, which keeps frame progression deterministic in tests.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::spritestore::AnimKey;

/// Frames per second shared by every sprite set in this demo. The API takes
/// the interval per call, so per-set rates stay possible.
pub const ANIM_FPS: f32 = 12.0;

/// Seconds between frame advances at [`ANIM_FPS`].
pub const FRAME_INTERVAL: f32 = 1.0 / ANIM_FPS;

/// Playback state of a single animation set.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimClock {
    /// Current frame index, always valid into the owning set when the set is
    /// non-empty.
    pub frame: usize,
    /// Simulation time of the last advance, in seconds.
    pub last_advance: f32,
}

/// Registry of animation clocks keyed by set.
#[derive(Resource, Default)]
pub struct ClockStore {
    clocks: FxHashMap<AnimKey, AnimClock>,
}

impl ClockStore {
    /// Current frame index of a set (0 for sets that never advanced).
    pub fn frame(&self, key: AnimKey) -> usize {
        self.clocks.get(&key).map_or(0, |c| c.frame)
    }

    /// Rewind a set to frame 0 and restart its interval from `now`.
    pub fn reset(&mut self, key: AnimKey, now: f32) {
        let clock = self.clocks.entry(key).or_default();
        clock.frame = 0;
        clock.last_advance = now;
    }

    /// Advance a set if `interval` seconds have passed since its last
    /// advance. Returns the new frame index when an advance happened.
    ///
    /// A set with zero frames is never advanced into.
    pub fn advance(
        &mut self,
        key: AnimKey,
        now: f32,
        interval: f32,
        frame_count: usize,
    ) -> Option<usize> {
        if frame_count == 0 {
            return None;
        }
        let clock = self.clocks.entry(key).or_default();
        if now - clock.last_advance < interval {
            return None;
        }
        clock.frame = (clock.frame + 1) % frame_count;
        clock.last_advance = now;
        Some(clock.frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_wraps_modulo_frame_count() {
        let mut clocks = ClockStore::default();
        let n = 7;
        for k in 1..=25usize {
            let now = k as f32 * FRAME_INTERVAL;
            let idx = clocks.advance(AnimKey::PlayerTurn, now, FRAME_INTERVAL, n);
            assert_eq!(idx, Some(k % n));
        }
        assert_eq!(clocks.frame(AnimKey::PlayerTurn), 25 % n);
    }

    #[test]
    fn advance_is_rate_limited() {
        let mut clocks = ClockStore::default();
        assert!(
            clocks
                .advance(AnimKey::PlayerIdle, 0.05, FRAME_INTERVAL, 10)
                .is_none()
        );
        assert_eq!(clocks.frame(AnimKey::PlayerIdle), 0);
        assert_eq!(
            clocks.advance(AnimKey::PlayerIdle, FRAME_INTERVAL, FRAME_INTERVAL, 10),
            Some(1)
        );
    }

    #[test]
    fn zero_frame_set_is_never_advanced() {
        let mut clocks = ClockStore::default();
        assert!(
            clocks
                .advance(AnimKey::PlayerCrouch, 100.0, FRAME_INTERVAL, 0)
                .is_none()
        );
        assert_eq!(clocks.frame(AnimKey::PlayerCrouch), 0);
    }

    #[test]
    fn clocks_are_independent_per_set() {
        let mut clocks = ClockStore::default();
        clocks.advance(AnimKey::NpcIdle, 1.0, FRAME_INTERVAL, 14);
        assert_eq!(clocks.frame(AnimKey::NpcIdle), 1);
        assert_eq!(clocks.frame(AnimKey::NpcContact), 0);
    }

    #[test]
    fn reset_rewinds_and_restarts_interval() {
        let mut clocks = ClockStore::default();
        clocks.advance(AnimKey::NpcContact, 1.0, FRAME_INTERVAL, 9);
        clocks.reset(AnimKey::NpcContact, 1.0);
        assert_eq!(clocks.frame(AnimKey::NpcContact), 0);
        // Interval restarts from the reset time.
        assert!(
            clocks
                .advance(
                    AnimKey::NpcContact,
                    1.0 + FRAME_INTERVAL * 0.5,
                    FRAME_INTERVAL,
                    9
                )
                .is_none()
        );
        assert_eq!(
            clocks.advance(AnimKey::NpcContact, 1.0 + FRAME_INTERVAL, FRAME_INTERVAL, 9),
            Some(1)
        );
    }
}
