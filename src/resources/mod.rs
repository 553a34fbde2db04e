//! ECS resources made available to systems.
//!
//! Overview
//! - [`chat`] – bridge and channels for the background chat thread
//! - [`clockstore`] – per-set animation clocks, one per sprite set
//! - [`dialogue`] – the single conversation slot and its phase machine
//! - [`gameconfig`] – window and chat settings loaded from `config.ini`
//! - [`input`] – per-frame keyboard state (directions + text capture)
//! - [`screensize`] – current drawing surface dimensions in pixels
//! - [`spritestore`] – sprite set registry with per-frame pixel sizes
//! - [`stage`] – ground line shared by grounded actors
//! - [`texturestore`] – loaded textures keyed by string IDs (non-send)
//! - [`worldtime`] – simulation time and delta

pub mod chat;
pub mod clockstore;
pub mod dialogue;
pub mod gameconfig;
pub mod input;
pub mod screensize;
pub mod spritestore;
pub mod stage;
pub mod texturestore;
pub mod worldtime;
