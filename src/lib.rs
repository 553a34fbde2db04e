//! Canvas-style sprite stage: a keyboard-driven player, a conversational
//! NPC wired to an HTTP chat collaborator, and a scripted sentinel, all on a
//! bevy_ecs world rendered with raylib.
//!
//! The binary in `main.rs` owns window setup and the frame loop; everything
//! else lives here so integration tests can drive a headless world.

pub mod components;
pub mod events;
pub mod game;
pub mod resources;
pub mod systems;
