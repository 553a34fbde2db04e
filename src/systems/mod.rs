//! Per-frame systems.
//!
//! Submodules overview:
//! - [`animation`] – shared 12 fps clock advancement and turn completion
//! - [`chat`] – chat worker thread plus the channel/queue bridge systems
//! - [`dialogue`] – typewriter reveals, input capture, submission, replies
//! - [`input`] – raylib keyboard polling into [`crate::resources::input`]
//! - [`player`] – motion resolver and active-set selection
//! - [`proximity`] – player/NPC frame overlap and dialogue triggers
//! - [`render`] – frame drawing, sprites and speech bubbles
//! - [`sentinel`] – near/far loop windows and the attack slide
//! - [`time`] – world clock update

pub mod animation;
pub mod chat;
pub mod dialogue;
pub mod input;
pub mod player;
pub mod proximity;
pub mod render;
pub mod sentinel;
pub mod time;
