/// Rendering layer — all terminal I/O lives here.
///
/// Each function receives a mutable writer and an immutable view of the
/// game state.  No game logic is performed; this module only translates
/// world coordinates into terminal cells.  `render` is called exactly once
/// per loop iteration.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use space_invaders::assets::Sprite;
use space_invaders::effects::Effect;
use space_invaders::entities::{Entity, Facing, GameState, Phase, Point};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_HUD_PHASE: Color = Color::Green;
const C_PLAYER: Color = Color::White;
const C_ENEMY: Color = Color::Green;
const C_BULLET_PLAYER: Color = Color::Cyan;
const C_BULLET_ENEMY: Color = Color::Magenta;
const C_TRACKS: Color = Color::DarkYellow;
const C_EXPLOSION: Color = Color::Red;
const C_COUNTDOWN: Color = Color::Yellow;
const C_HINT: Color = Color::DarkGrey;

// ── World → terminal mapping ──────────────────────────────────────────────────

/// Terminal grid the world is projected onto.  Row 0 is the HUD, rows 1 and
/// `rows - 2` are the border, the last row is the controls hint.
#[derive(Clone, Copy, Debug)]
pub struct Viewport {
    pub cols: u16,
    pub rows: u16,
}

impl Viewport {
    pub fn current() -> std::io::Result<Self> {
        let (cols, rows) = terminal::size()?;
        Ok(Self { cols, rows })
    }

    /// Terminal cell for a world point, or `None` if it falls outside the
    /// play area.
    fn cell(&self, state: &GameState, p: Point) -> Option<(u16, u16)> {
        let inner_w = self.cols.saturating_sub(2) as f32;
        let inner_h = self.rows.saturating_sub(4) as f32;
        let fx = (p.x + state.width / 2.0) / state.width;
        let fy = (state.height / 2.0 - p.y) / state.height;
        if !(0.0..1.0).contains(&fx) || !(0.0..1.0).contains(&fy) {
            return None;
        }
        Some((1 + (fx * inner_w) as u16, 2 + (fy * inner_h) as u16))
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
) -> std::io::Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, view)?;
    draw_hud(out, view, state)?;

    for track in &state.decorations {
        draw_entity(out, view, state, track, C_TRACKS)?;
    }
    for enemy in &state.enemies {
        draw_entity(out, view, state, &enemy.entity, C_ENEMY)?;
    }
    for bullet in &state.bullets {
        let color = match bullet.facing() {
            Facing::North => C_BULLET_PLAYER,
            Facing::South => C_BULLET_ENEMY,
        };
        draw_entity(out, view, state, &bullet.entity, color)?;
    }

    draw_entity(out, view, state, &state.player.entity, C_PLAYER)?;

    for effect in &state.effects {
        draw_effect(out, view, state, effect)?;
    }

    draw_controls_hint(out, view)?;

    if let Phase::GameOver { .. } = state.phase {
        draw_game_over(out, view, state)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, view.rows.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    let w = view.cols as usize;
    let h = view.rows;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    out.queue(cursor::MoveTo(0, h.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    for row in 2..h.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(view.cols.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(state.score.to_string()))?;

    let phase_str = match state.phase {
        Phase::Startup { .. } => "[ GET READY ]",
        Phase::Spawning { .. } => "[ INCOMING ]",
        Phase::Active => "",
        Phase::GameOver { .. } => "[ DESTROYED ]",
    };
    let px = (view.cols / 2).saturating_sub(phase_str.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(px, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_PHASE))?;
    out.queue(Print(phase_str))?;

    let enemies_str = format!("Enemies:{:>3}", state.enemies.len());
    let ex = view
        .cols
        .saturating_sub(enemies_str.chars().count() as u16 + 1);
    out.queue(cursor::MoveTo(ex, 0))?;
    out.queue(style::SetForegroundColor(C_ENEMY))?;
    out.queue(Print(&enemies_str))?;

    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

/// Draw an entity's glyph centred on its cell.  Hidden entities are skipped.
fn draw_entity<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
    entity: &Entity,
    color: Color,
) -> std::io::Result<()> {
    if !entity.is_visible() {
        return Ok(());
    }
    draw_sprite(out, view, state, entity.sprite, entity.pos, color)
}

fn draw_sprite<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
    sprite: Sprite,
    pos: Point,
    color: Color,
) -> std::io::Result<()> {
    let Some((col, row)) = view.cell(state, pos) else {
        return Ok(());
    };
    let glyph = sprite.glyph();
    let half = glyph.chars().count() as u16 / 2;
    let col = col.saturating_sub(half).max(1);
    out.queue(cursor::MoveTo(col, row))?;
    out.queue(style::SetForegroundColor(color))?;
    out.queue(Print(glyph))?;
    Ok(())
}

fn draw_effect<W: Write>(
    out: &mut W,
    view: Viewport,
    state: &GameState,
    effect: &Effect,
) -> std::io::Result<()> {
    match effect {
        Effect::Explosion { pos, .. } => match effect.sprite() {
            Some(sprite) => draw_sprite(out, view, state, sprite, *pos, C_EXPLOSION),
            None => Ok(()),
        },
        Effect::Countdown { value, .. } => {
            let label = format!("─── {} ───", value);
            let col = (view.cols / 2).saturating_sub(label.chars().count() as u16 / 2);
            out.queue(cursor::MoveTo(col, view.rows / 2))?;
            out.queue(style::SetForegroundColor(C_COUNTDOWN))?;
            out.queue(Print(label))?;
            Ok(())
        }
    }
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, view: Viewport) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, view.rows.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("← → / A D : Move   SPACE : Shoot   Q : Quit"))?;
    Ok(())
}

// ── Game-over overlay ─────────────────────────────────────────────────────────

fn draw_game_over<W: Write>(out: &mut W, view: Viewport, state: &GameState) -> std::io::Result<()> {
    let score_line = format!("Final {}", state.score);

    let lines: &[(&str, Color)] = &[
        ("╔════════════════════╗", Color::Red),
        ("║    GAME  OVER      ║", Color::Red),
        ("╚════════════════════╝", Color::Red),
    ];

    let cx = view.cols / 2;
    let total_rows = lines.len() + 1;
    let start_row = (view.rows / 2).saturating_sub(total_rows as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }

    let score_row = start_row + lines.len() as u16;
    let col = cx.saturating_sub(score_line.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(col, score_row))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(&score_line))?;

    Ok(())
}
