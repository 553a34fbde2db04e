//! Frame rendering.
//!
//! Draw order: background fill, sentinel (loop frames or the staggered
//! attack slide), NPC, player, then speech bubbles on top. All sprites draw
//! center-anchored; the player and sentinel mirror horizontally via a
//! negative source-rectangle width. A sprite set that failed to load renders
//! a placeholder label instead of a frame.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::animation::ActiveAnim;
use crate::components::facing::Facing;
use crate::components::mapposition::MapPosition;
use crate::components::npc::Npc;
use crate::components::player::Player;
use crate::components::sentinel::{
    ATTACK_FIRST_FRAME, ATTACK_LAST_FRAME, ATTACK_STAGGER, ATTACK_WARNING, Sentinel,
};
use crate::resources::clockstore::ClockStore;
use crate::resources::dialogue::{Dialogue, DialoguePhase};
use crate::resources::screensize::ScreenSize;
use crate::resources::spritestore::{AnimKey, Frame, SpriteStore};
use crate::resources::texturestore::TextureStore;

/// Stage fill, the olive `#606C38`.
const BACKGROUND: Color = Color::new(0x60, 0x6C, 0x38, 255);

/// Widest a speech bubble may grow before text wraps.
const BUBBLE_MAX_WIDTH: f32 = 320.0;
/// Narrowest a bubble renders, even for a single character.
const BUBBLE_MIN_WIDTH: f32 = 80.0;
const BUBBLE_PADDING: f32 = 10.0;
/// Gap between a bubble's bottom edge and the actor's top edge.
const BUBBLE_GAP: f32 = 20.0;
/// Margin kept between a bubble and the surface edges.
const BUBBLE_MARGIN: f32 = 8.0;
/// Corner radius of the bubble rectangle, in pixels.
const BUBBLE_CORNER: f32 = 8.0;
const BUBBLE_FONT_SIZE: i32 = 16;
const BUBBLE_LINE_HEIGHT: f32 = 20.0;

/// How far past the right edge the attack slide targets.
const ATTACK_OVERSHOOT: f32 = 100.0;

/// Measures string width in pixels for the default font.
fn measure_text(text: &str, font_size: i32) -> i32 {
    let c_text = std::ffi::CString::new(text).unwrap();
    unsafe { raylib::ffi::MeasureText(c_text.as_ptr(), font_size) }
}

pub fn render_system(
    mut rl: NonSendMut<RaylibHandle>,
    thread: NonSend<RaylibThread>,
    textures: NonSend<TextureStore>,
    sprites: Res<SpriteStore>,
    clocks: Res<ClockStore>,
    dialogue: Res<Dialogue>,
    screen: Res<ScreenSize>,
    q_player: Query<(&MapPosition, &ActiveAnim, &Facing), With<Player>>,
    q_npc: Query<(&MapPosition, &ActiveAnim), (With<Npc>, Without<Player>)>,
    q_sentinel: Query<(&Sentinel, &MapPosition)>,
) {
    let mut d = rl.begin_drawing(&thread);
    d.clear_background(BACKGROUND);

    for (sentinel, anchor) in q_sentinel.iter() {
        draw_sentinel(&mut d, &textures, &sprites, &screen, sentinel, anchor);
    }

    let npc = q_npc.single().ok();
    if let Some((n_pos, n_anim)) = npc {
        match sprites.frame(n_anim.key, clocks.frame(n_anim.key)) {
            Some(frame) => draw_frame(&mut d, &textures, frame, n_pos.pos, false),
            None => draw_missing_set(&mut d, n_anim.key, n_pos.pos),
        }
    }

    let player = q_player.single().ok();
    if let Some((p_pos, p_anim, facing)) = player {
        match sprites.frame(p_anim.key, clocks.frame(p_anim.key)) {
            Some(frame) => draw_frame(&mut d, &textures, frame, p_pos.pos, facing.0 < 0.0),
            None => draw_missing_set(&mut d, p_anim.key, p_pos.pos),
        }
    }

    draw_dialogue_bubbles(&mut d, &sprites, &clocks, &dialogue, &screen, player, npc);
}

/// Slide progress of one attack frame: the base progress plus the frame's
/// phase lead, capped at the end of the slide.
fn attack_phase(attack_t: f32, frame_offset: usize) -> f32 {
    (attack_t + frame_offset as f32 * ATTACK_STAGGER).min(1.0)
}

fn draw_sentinel(
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    sprites: &SpriteStore,
    screen: &ScreenSize,
    sentinel: &Sentinel,
    anchor: &MapPosition,
) {
    if sentinel.attacking {
        // Staggered slide of the attack frames from the anchor off the right
        // edge; each later frame of the range runs a fixed phase ahead of
        // the first, leading the charge.
        for (i, idx) in (ATTACK_FIRST_FRAME..=ATTACK_LAST_FRAME).enumerate() {
            let t = attack_phase(sentinel.attack_t, i);
            let target_x = screen.width() + ATTACK_OVERSHOOT;
            let x = anchor.pos.x + (target_x - anchor.pos.x) * t;
            if let Some(frame) = sprites.frame(AnimKey::Sentinel, idx) {
                let at = Vector2 { x, y: anchor.pos.y };
                draw_frame(d, textures, frame, at, true);
            }
        }

        // The warning stays pinned to the anchor, sized off the last attack
        // frame so the bubble clears the sprite.
        let anchor_h = sprites
            .frame(AnimKey::Sentinel, ATTACK_LAST_FRAME)
            .map_or(0.0, |f| f.height);
        draw_bubble(
            d,
            screen,
            anchor.pos.x,
            anchor.pos.y - anchor_h / 2.0,
            ATTACK_WARNING,
        );
    } else {
        match sprites.frame(AnimKey::Sentinel, sentinel.loop_frame) {
            Some(frame) => draw_frame(d, textures, frame, anchor.pos, true),
            None => draw_missing_set(d, AnimKey::Sentinel, anchor.pos),
        }
    }
}

fn draw_dialogue_bubbles(
    d: &mut RaylibDrawHandle,
    sprites: &SpriteStore,
    clocks: &ClockStore,
    dialogue: &Dialogue,
    screen: &ScreenSize,
    player: Option<(&MapPosition, &ActiveAnim, &Facing)>,
    npc: Option<(&MapPosition, &ActiveAnim)>,
) {
    let npc_top = npc.map(|(pos, anim)| {
        let h = sprites
            .frame(anim.key, clocks.frame(anim.key))
            .map_or(0.0, |f| f.height);
        (pos.pos.x, pos.pos.y - h / 2.0)
    });
    let player_top = player.map(|(pos, anim, _)| {
        let h = sprites
            .frame(anim.key, clocks.frame(anim.key))
            .map_or(0.0, |f| f.height);
        (pos.pos.x, pos.pos.y - h / 2.0)
    });

    match dialogue.phase {
        DialoguePhase::Idle | DialoguePhase::ReplyPending => {}
        DialoguePhase::NpcTyping => {
            if let Some((x, y)) = npc_top {
                draw_bubble(d, screen, x, y, &dialogue.shown_greeting());
            }
        }
        DialoguePhase::AwaitingInput => {
            if let Some((x, y)) = npc_top {
                draw_bubble(d, screen, x, y, &dialogue.greeting);
            }
            if let Some((x, y)) = player_top {
                draw_bubble(d, screen, x, y, &format!("{}_", dialogue.input));
            }
        }
        DialoguePhase::NpcReplying => {
            if let Some((x, y)) = npc_top {
                draw_bubble(d, screen, x, y, &dialogue.shown_reply());
            }
        }
        DialoguePhase::ReplyShown => {
            if let Some((x, y)) = npc_top {
                draw_bubble(d, screen, x, y, &dialogue.reply);
            }
            if let Some((x, y)) = player_top {
                draw_bubble(d, screen, x, y, &format!("{}_", dialogue.input));
            }
        }
    }
}

/// Draw one frame center-anchored at `at`, optionally mirrored.
fn draw_frame(
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    frame: &Frame,
    at: Vector2,
    mirror: bool,
) {
    let Some(tex) = textures.get(&frame.tex_key) else {
        return;
    };
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: if mirror { -frame.width } else { frame.width },
        height: frame.height,
    };
    let dest = Rectangle {
        x: at.x,
        y: at.y,
        width: frame.width,
        height: frame.height,
    };
    let origin = Vector2 {
        x: frame.width / 2.0,
        y: frame.height / 2.0,
    };
    d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
}

/// Placeholder for a sprite set with no loaded frames.
fn draw_missing_set(d: &mut RaylibDrawHandle, key: AnimKey, at: Vector2) {
    let label = format!("Animation \"{}\" not loaded", key.folder());
    let w = measure_text(&label, BUBBLE_FONT_SIZE);
    d.draw_text(
        &label,
        at.x as i32 - w / 2,
        at.y as i32,
        BUBBLE_FONT_SIZE,
        Color::RAYWHITE,
    );
}

/// Speech bubble whose bottom edge floats a fixed gap above `(cx, top_y)`,
/// kept fully on the surface.
fn draw_bubble(d: &mut RaylibDrawHandle, screen: &ScreenSize, cx: f32, top_y: f32, text: &str) {
    let lines = wrap_text(text, BUBBLE_MAX_WIDTH - 2.0 * BUBBLE_PADDING);
    let text_w = lines
        .iter()
        .map(|l| measure_text(l, BUBBLE_FONT_SIZE) as f32)
        .fold(0.0, f32::max);

    let (x, y, w, h) = bubble_layout(cx, top_y, text_w, lines.len(), screen.width());
    let rect = Rectangle {
        x,
        y,
        width: w,
        height: h,
    };
    let roundness = (BUBBLE_CORNER / (w.min(h) / 2.0)).min(1.0);
    d.draw_rectangle_rounded(rect, roundness, 8, Color::WHITE);
    d.draw_rectangle_rounded_lines(rect, roundness, 8, Color::BLACK);

    for (i, line) in lines.iter().enumerate() {
        d.draw_text(
            line,
            (x + BUBBLE_PADDING) as i32,
            (y + BUBBLE_PADDING + i as f32 * BUBBLE_LINE_HEIGHT) as i32,
            BUBBLE_FONT_SIZE,
            Color::BLACK,
        );
    }
}

/// Bubble rectangle for already-measured text: `(x, y, w, h)`.
///
/// Width is clamped to `[BUBBLE_MIN_WIDTH, BUBBLE_MAX_WIDTH]` and x is
/// clamped so the bubble keeps a margin inside the surface instead of
/// following its anchor off-screen. When the surface is too narrow for both
/// margins, the left margin wins.
fn bubble_layout(
    cx: f32,
    top_y: f32,
    text_w: f32,
    line_count: usize,
    surface_w: f32,
) -> (f32, f32, f32, f32) {
    let w = (text_w + 2.0 * BUBBLE_PADDING).clamp(BUBBLE_MIN_WIDTH, BUBBLE_MAX_WIDTH);
    let h = line_count.max(1) as f32 * BUBBLE_LINE_HEIGHT + 2.0 * BUBBLE_PADDING;
    let x = (cx - w / 2.0)
        .min(surface_w - w - BUBBLE_MARGIN)
        .max(BUBBLE_MARGIN);
    let y = top_y - BUBBLE_GAP - h;
    (x, y, w, h)
}

/// Greedy per-character wrap; suits CJK text where word breaks carry no
/// whitespace.
fn wrap_text(text: &str, max_width: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for ch in text.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && measure_text(&candidate, BUBBLE_FONT_SIZE) as f32 > max_width {
            lines.push(current);
            current = ch.to_string();
        } else {
            current = candidate;
        }
    }
    lines.push(current);
    lines
}
