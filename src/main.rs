//! Pigpen stage entry point.
//!
//! A small canvas-style scene built with:
//! - **raylib** for windowing, graphics, and text
//! - **bevy_ecs** for entity-component-system architecture
//!
//! Three actors share the stage: a keyboard-driven player pig, a
//! conversational NPC whose replies come from an HTTP chat endpoint (with a
//! canned-answer fallback), and a scripted sentinel that charges when the
//! player gets too close.
//!
//! # Main Loop
//!
//! 1. Initialize the raylib window, ECS world, and resources
//! 2. Load the sprite-set manifest from `assets/` and spawn the actors
//! 3. Register dialogue observers and the per-frame schedule
//! 4. Run the frame loop: input, player motion, animation clocks,
//!    proximity, sentinel, chat bridge, dialogue, render
//! 5. Join the chat thread on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::components::sentinel::Sentinel;
use crate::events::dialogue::{observe_dialogue_end, observe_dialogue_start};
use crate::resources::chat::{setup_chat, shutdown_chat};
use crate::resources::clockstore::ClockStore;
use crate::resources::dialogue::Dialogue;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::screensize::ScreenSize;
use crate::resources::stage::Stage;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use crate::systems::animation::advance_animation_clocks;
use crate::systems::chat::{
    forward_chat_cmds, poll_chat_replies, update_chat_cmds, update_chat_replies,
};
use crate::systems::dialogue::dialogue_system;
use crate::systems::input::update_input_state;
use crate::systems::player::player_controller;
use crate::systems::proximity::npc_proximity;
use crate::systems::render::render_system;
use crate::systems::sentinel::sentinel_update;
use crate::systems::time::update_world_time;
use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use std::path::PathBuf;

/// Pigpen, a talkative sprite stage
#[derive(Parser)]
#[command(version, about = "A keyboard-driven pig, a chatty NPC, and a territorial sentinel.")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Chat endpoint URL, overriding the configuration file
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,

    /// Skip HTTP entirely and answer from the canned table
    #[arg(long)]
    offline: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults
    if let Some(endpoint) = cli.endpoint {
        config.chat_endpoint = endpoint;
    }
    if cli.offline {
        config.chat_offline = true;
    }

    // --------------- Raylib window & assets ---------------
    let (mut rl, thread) = raylib::init()
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Pigpen")
        .build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen {
        rl.toggle_fullscreen();
    }

    let mut textures = TextureStore::default();
    let sprites = game::load_sprites(&mut rl, &thread, &mut textures);

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    let surface_w = rl.get_screen_width() as f32;
    let surface_h = rl.get_screen_height() as f32;

    world.insert_resource(WorldTime::default());
    world.insert_resource(ScreenSize {
        w: surface_w as i32,
        h: surface_h as i32,
    });
    world.insert_resource(Stage::from_surface_height(surface_h));
    world.insert_resource(InputState::default());
    world.insert_resource(sprites);
    world.insert_resource(ClockStore::default());
    world.insert_resource(Dialogue::default());

    // Chat bridge before anything that may write commands.
    setup_chat(&mut world, config.chat_endpoint.clone(), config.chat_offline);

    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    game::spawn_actors(&mut world, surface_w);

    world.spawn(Observer::new(observe_dialogue_start));
    world.spawn(Observer::new(observe_dialogue_end));
    // Ensure observers are registered before any system can trigger them.
    world.flush();

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(player_controller.after(update_input_state));
    update.add_systems(advance_animation_clocks.after(player_controller));
    update.add_systems(npc_proximity.after(advance_animation_clocks));
    update.add_systems(sentinel_update.after(advance_animation_clocks));
    update.add_systems(
        // chat bridge systems must run together, in order
        (
            // First, advance ChatCmd messages and forward them to the chat thread
            update_chat_cmds,
            forward_chat_cmds,
            // Then, pull chat thread replies and advance them
            poll_chat_replies,
            update_chat_replies,
        )
            .chain(),
    );
    update.add_systems(dialogue_system.after(npc_proximity).after(update_chat_replies));
    update.add_systems(
        render_system
            .after(dialogue_system)
            .after(sentinel_update)
            .after(npc_proximity),
    );

    update
        .initialize(&mut world)
        .expect("Failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // Track window resizes: re-derive the stage and drop grounded
        // actors onto the new ground line.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        let old = *world.resource::<ScreenSize>();
        if new_w != old.w || new_h != old.h {
            world.insert_resource(ScreenSize { w: new_w, h: new_h });
            let stage = Stage::from_surface_height(new_h as f32);
            world.insert_resource(stage);
            reground_actors(&mut world, stage.ground_y);
        }
    }

    shutdown_chat(&mut world);
}

/// Snap every grounded actor back onto the ground line after a resize.
fn reground_actors(world: &mut World, ground_y: f32) {
    let mut q_player = world.query::<(&mut MapPosition, &mut Player)>();
    for (mut pos, mut player) in q_player.iter_mut(world) {
        pos.pos.y = ground_y;
        player.vy = 0.0;
    }
    let mut q_npc = world.query_filtered::<&mut MapPosition, With<Npc>>();
    for mut pos in q_npc.iter_mut(world) {
        pos.pos.y = ground_y;
    }
    let mut q_sentinel = world.query_filtered::<&mut MapPosition, With<Sentinel>>();
    for mut pos in q_sentinel.iter_mut(world) {
        pos.pos.y = ground_y;
    }
}
