//! Sprite set registry.
//!
//! Maps every [`AnimKey`] to its ordered list of frames. Sets are loaded once
//! at startup from an explicit manifest (folder plus frame filenames) and are
//! read-only afterwards. Frame pixel sizes live here so that headless systems
//! (proximity checks, tests) never need the GPU textures themselves; those are
//! kept separately in [`crate::resources::texturestore::TextureStore`].

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

/// Closed set of animation identifiers known to the game.
///
/// Using an enum instead of free-form string keys means a reference to a
/// nonexistent set is a compile error, not a runtime lookup miss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimKey {
    PlayerIdle,
    PlayerJump,
    PlayerMove,
    PlayerCrouch,
    PlayerTurn,
    NpcIdle,
    NpcContact,
    Sentinel,
}

impl AnimKey {
    /// Every key, in load order.
    pub const ALL: [AnimKey; 8] = [
        AnimKey::PlayerIdle,
        AnimKey::PlayerJump,
        AnimKey::PlayerMove,
        AnimKey::PlayerCrouch,
        AnimKey::PlayerTurn,
        AnimKey::NpcIdle,
        AnimKey::NpcContact,
        AnimKey::Sentinel,
    ];

    /// Asset folder holding this set's frames.
    ///
    /// `PlayerMove` and `PlayerTurn` share the `d4` sheet but stay separate
    /// sets with separate clocks.
    pub fn folder(self) -> &'static str {
        match self {
            AnimKey::PlayerIdle => "e5pig",
            AnimKey::PlayerJump => "c3",
            AnimKey::PlayerMove | AnimKey::PlayerTurn => "d4",
            AnimKey::PlayerCrouch => "b2",
            AnimKey::NpcIdle => "122b",
            AnimKey::NpcContact => "121a",
            AnimKey::Sentinel => "123c",
        }
    }

    /// Ordered frame filenames. Listing them explicitly avoids probing the
    /// filesystem for frames that do not exist (the idle sheet skips 5 and 6).
    pub fn files(self) -> &'static [&'static str] {
        match self {
            AnimKey::PlayerIdle => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "7.png", "8.png", "9.png", "10.png",
                "11.png",
            ],
            AnimKey::PlayerJump => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
                "9.png", "10.png", "11.png", "12.png", "13.png", "14.png",
            ],
            AnimKey::PlayerMove | AnimKey::PlayerTurn => {
                &["0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png"]
            }
            AnimKey::PlayerCrouch => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
                "9.png", "10.png",
            ],
            AnimKey::NpcIdle => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
                "9.png", "10.png", "11.png", "12.png", "13.png",
            ],
            AnimKey::NpcContact => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
            ],
            AnimKey::Sentinel => &[
                "0.png", "1.png", "2.png", "3.png", "4.png", "5.png", "6.png", "7.png", "8.png",
                "9.png",
            ],
        }
    }
}

/// A single loaded frame: texture key plus its pixel dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Key into the texture store, e.g. `"e5pig/0.png"`.
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}

/// Ordered frame sequence for one animation set. May be empty when the
/// assets failed to load; consumers must treat that as "no frame available".
#[derive(Debug, Clone, Default)]
pub struct SpriteSet {
    pub frames: Vec<Frame>,
}

impl SpriteSet {
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }
}

/// Central registry of sprite sets, immutable after load.
#[derive(Resource, Default)]
pub struct SpriteStore {
    sets: FxHashMap<AnimKey, SpriteSet>,
}

impl SpriteStore {
    pub fn insert(&mut self, key: AnimKey, set: SpriteSet) {
        self.sets.insert(key, set);
    }

    pub fn set(&self, key: AnimKey) -> Option<&SpriteSet> {
        self.sets.get(&key)
    }

    /// Frame count of a set; zero when missing or empty.
    pub fn len(&self, key: AnimKey) -> usize {
        self.sets.get(&key).map_or(0, SpriteSet::len)
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    pub fn frame(&self, key: AnimKey, index: usize) -> Option<&Frame> {
        self.sets.get(&key).and_then(|s| s.frame(index))
    }
}
