//! ECS components for the three actors.
//!
//! Submodules overview:
//! - [`animation`] – which sprite set an actor currently displays
//! - [`facing`] – horizontal facing used as the draw-time mirror factor
//! - [`mapposition`] – world-space center position (y grows downward)
//! - [`npc`] – the conversational NPC's idle/contact set pair
//! - [`player`] – vertical velocity and turn-animation bookkeeping
//! - [`sentinel`] – the distance actor's loop and attack-slide state

pub mod animation;
pub mod facing;
pub mod mapposition;
pub mod npc;
pub mod player;
pub mod sentinel;
