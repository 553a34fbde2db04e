//! Event and message types exchanged across systems.
//!
//! Submodules:
//! - [`chat`] – commands and replies for the background chat thread
//! - [`dialogue`] – conversation start/end triggers and their observers

pub mod chat;
pub mod dialogue;
