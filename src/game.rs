//! Stage setup: sprite loading and actor spawning.
//!
//! Runs once at startup, before the raylib handle moves into the world.
//! Frames live under `assets/<folder>/<file>.png` per the manifest in
//! [`AnimKey`]; a frame that fails to load is skipped with a warning, so a
//! fully missing folder leaves that set empty and the renderer falls back to
//! a placeholder label.

use bevy_ecs::prelude::*;
use log::{info, warn};
use raylib::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::components::sentinel::Sentinel;
use crate::resources::spritestore::{AnimKey, Frame, SpriteSet, SpriteStore};
use crate::resources::stage::Stage;
use crate::resources::texturestore::TextureStore;

/// Load every sprite set in the manifest into `textures`, returning the
/// frame index keyed by animation set.
pub fn load_sprites(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &mut TextureStore,
) -> SpriteStore {
    let mut store = SpriteStore::default();

    for key in AnimKey::ALL {
        let folder = key.folder();
        let mut set = SpriteSet::default();

        for file in key.files() {
            let path = format!("./assets/{folder}/{file}");
            let tex_key = format!("{folder}/{file}");
            match rl.load_texture(thread, &path) {
                Ok(tex) => {
                    set.frames
                        .push(Frame::new(&tex_key, tex.width as f32, tex.height as f32));
                    textures.insert(&tex_key, tex);
                }
                Err(e) => warn!("skipping frame {path}: {e}"),
            }
        }

        info!("loaded {} frames for {:?}", set.len(), key);
        store.insert(key, set);
    }

    store
}

/// Spawn the three actors at their stage positions: player at center stage,
/// NPC at three quarters across, sentinel at one quarter, all grounded.
pub fn spawn_actors(world: &mut World, surface_w: f32) {
    let ground_y = world.resource::<Stage>().ground_y;

    world.spawn((
        Player::default(),
        MapPosition::new(surface_w / 2.0, ground_y),
        ActiveAnim::new(AnimKey::PlayerIdle),
        Facing::right(),
    ));

    world.spawn((
        Npc::default(),
        MapPosition::new(surface_w * 0.75, ground_y),
        ActiveAnim::new(AnimKey::NpcIdle),
    ));

    world.spawn((Sentinel::default(), MapPosition::new(surface_w * 0.25, ground_y)));
}
