//! Rendering layer. All terminal I/O lives here.
//!
//! Each function receives a mutable writer and an immutable `FrameView`.
//! No game logic is performed; this module only translates the snapshot
//! into terminal commands, scaling playfield pixels down to character cells.

use std::io::Write;

use crossterm::{
    cursor,
    style::{self, Color, Print},
    terminal,
    QueueableCommand,
};
use flappy_bird::entities::{EndReason, FrameView, PipeKind, Sprite};

// ── Colour palette ────────────────────────────────────────────────────────────

const C_BORDER: Color = Color::DarkBlue;
const C_HUD_SCORE: Color = Color::Yellow;
const C_BIRD: Color = Color::Yellow;
const C_PIPE_BODY: Color = Color::Green;
const C_PIPE_CAP: Color = Color::DarkGreen;
const C_HINT: Color = Color::DarkGrey;
const C_PAUSED: Color = Color::Cyan;

// ── Playfield → terminal mapping ─────────────────────────────────────────────

/// Cell rectangle the playfield is drawn into: inside the border, between
/// the HUD row and the hint row.
struct Viewport {
    left: u16,
    top: u16,
    cols: u16,
    rows: u16,
    scale_x: f64,
    scale_y: f64,
}

impl Viewport {
    fn new(view: &FrameView, width: u16, height: u16) -> Self {
        let cols = width.saturating_sub(2).max(1);
        let rows = height.saturating_sub(4).max(1);
        Self {
            left: 1,
            top: 2,
            cols,
            rows,
            scale_x: cols as f64 / view.playfield_width,
            scale_y: rows as f64 / view.playfield_height,
        }
    }

    /// Column for playfield x, or `None` if it falls outside the viewport.
    fn col(&self, x: f64) -> Option<u16> {
        let c = (x * self.scale_x).floor();
        (c >= 0.0 && c < self.cols as f64).then(|| self.left + c as u16)
    }

    fn row(&self, y: f64) -> Option<u16> {
        let r = (y * self.scale_y).floor();
        (r >= 0.0 && r < self.rows as f64).then(|| self.top + r as u16)
    }

    /// Clipped cell ranges covered by an unrotated sprite.
    fn cells(&self, sprite: &Sprite) -> (Vec<u16>, Vec<u16>) {
        let x0 = (sprite.position.x * self.scale_x).floor().max(0.0);
        let x1 = ((sprite.position.x + sprite.width) * self.scale_x)
            .ceil()
            .min(self.cols as f64);
        let y0 = (sprite.position.y * self.scale_y).floor().max(0.0);
        let y1 = ((sprite.position.y + sprite.height) * self.scale_y)
            .ceil()
            .min(self.rows as f64);
        let cols = (x0 as u16..x1.max(x0) as u16).map(|c| self.left + c).collect();
        let rows = (y0 as u16..y1.max(y0) as u16).map(|r| self.top + r).collect();
        (cols, rows)
    }
}

// ── Public entry point ────────────────────────────────────────────────────────

/// Render one complete frame.
pub fn render<W: Write>(out: &mut W, view: &FrameView) -> std::io::Result<()> {
    let (width, height) = terminal::size()?;
    let viewport = Viewport::new(view, width, height);

    out.queue(terminal::Clear(terminal::ClearType::All))?;

    draw_border(out, width, height)?;
    draw_hud(out, view, width)?;

    for pipe in &view.pipes {
        draw_pipe(out, &viewport, &pipe.sprite, pipe.kind)?;
    }
    draw_bird(out, &viewport, &view.bird)?;
    draw_controls_hint(out, height)?;

    if view.ended {
        draw_game_over(out, view, width, height)?;
    } else if view.paused {
        draw_centered(out, &[("‖  PAUSED  ‖", C_PAUSED)], width, height)?;
    }

    // Park cursor in a harmless spot and flush
    out.queue(style::ResetColor)?;
    out.queue(cursor::MoveTo(0, height.saturating_sub(1)))?;
    out.flush()?;
    Ok(())
}

// ── Border ────────────────────────────────────────────────────────────────────

fn draw_border<W: Write>(out: &mut W, width: u16, height: u16) -> std::io::Result<()> {
    let w = width as usize;

    out.queue(style::SetForegroundColor(C_BORDER))?;

    // Row 1: top bar
    out.queue(cursor::MoveTo(0, 1))?;
    out.queue(Print(format!("┌{}┐", "─".repeat(w.saturating_sub(2)))))?;

    // Row h-2: bottom bar (the ground)
    out.queue(cursor::MoveTo(0, height.saturating_sub(2)))?;
    out.queue(Print(format!("└{}┘", "─".repeat(w.saturating_sub(2)))))?;

    // Side walls
    for row in 2..height.saturating_sub(2) {
        out.queue(cursor::MoveTo(0, row))?;
        out.queue(Print("│"))?;
        out.queue(cursor::MoveTo(width.saturating_sub(1), row))?;
        out.queue(Print("│"))?;
    }

    Ok(())
}

// ── HUD (row 0) ───────────────────────────────────────────────────────────────

fn draw_hud<W: Write>(out: &mut W, view: &FrameView, width: u16) -> std::io::Result<()> {
    let score = format!("SCORE: {}", view.score);
    let x = (width / 2).saturating_sub(score.chars().count() as u16 / 2);
    out.queue(cursor::MoveTo(x, 0))?;
    out.queue(style::SetForegroundColor(C_HUD_SCORE))?;
    out.queue(Print(score))?;
    Ok(())
}

// ── Entities ──────────────────────────────────────────────────────────────────

fn draw_pipe<W: Write>(
    out: &mut W,
    viewport: &Viewport,
    sprite: &Sprite,
    kind: PipeKind,
) -> std::io::Result<()> {
    let (cols, rows) = viewport.cells(sprite);
    if cols.is_empty() || rows.is_empty() {
        return Ok(());
    }

    // The cap faces the gap: top row of a bottom pipe, last row of a top pipe.
    let cap_row = match kind {
        PipeKind::Bottom => rows[0],
        PipeKind::Top => rows[rows.len() - 1],
    };
    let first_col = cols[0];
    let span = cols.len();

    for &row in &rows {
        out.queue(cursor::MoveTo(first_col, row))?;
        if row == cap_row {
            out.queue(style::SetForegroundColor(C_PIPE_CAP))?;
            out.queue(Print("▀".repeat(span)))?;
        } else {
            out.queue(style::SetForegroundColor(C_PIPE_BODY))?;
            out.queue(Print("█".repeat(span)))?;
        }
    }
    Ok(())
}

fn draw_bird<W: Write>(out: &mut W, viewport: &Viewport, bird: &Sprite) -> std::io::Result<()> {
    // One glyph at the sprite center, chosen by tilt:
    //   nose up ↗   level →   nose down ↘
    let cx = bird.position.x + bird.width / 2.0;
    let cy = bird.position.y + bird.height / 2.0;
    let glyph = if bird.rotation_angle < -10.0 {
        "↗"
    } else if bird.rotation_angle > 10.0 {
        "↘"
    } else {
        "→"
    };

    if let (Some(col), Some(row)) = (viewport.col(cx), viewport.row(cy)) {
        out.queue(cursor::MoveTo(col.saturating_sub(1), row))?;
        out.queue(style::SetForegroundColor(C_BIRD))?;
        out.queue(Print(format!("@{}", glyph)))?;
    }
    Ok(())
}

// ── Controls hint (last row) ──────────────────────────────────────────────────

fn draw_controls_hint<W: Write>(out: &mut W, height: u16) -> std::io::Result<()> {
    out.queue(cursor::MoveTo(1, height.saturating_sub(1)))?;
    out.queue(style::SetForegroundColor(C_HINT))?;
    out.queue(Print("SPACE / ↑ : Flap (tap, don't hold)   P : Pause   Q : Quit"))?;
    Ok(())
}

// ── Overlays ──────────────────────────────────────────────────────────────────

fn draw_centered<W: Write>(
    out: &mut W,
    lines: &[(&str, Color)],
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cx = width / 2;
    let start_row = (height / 2).saturating_sub(lines.len() as u16 / 2);

    for (i, (msg, color)) in lines.iter().enumerate() {
        let row = start_row + i as u16;
        let col = cx.saturating_sub(msg.chars().count() as u16 / 2);
        out.queue(cursor::MoveTo(col, row))?;
        out.queue(style::SetForegroundColor(*color))?;
        out.queue(Print(*msg))?;
    }
    Ok(())
}

fn draw_game_over<W: Write>(
    out: &mut W,
    view: &FrameView,
    width: u16,
    height: u16,
) -> std::io::Result<()> {
    let cause = match view.end_reason {
        Some(EndReason::Collision) => "Hit a pipe",
        Some(EndReason::OutOfBounds) => "Flew out of the sky",
        None => "",
    };
    let score_line = format!("Final Score: {}", view.score);
    let lines: &[(&str, Color)] = &[
        ("╔══════════════════╗", Color::Red),
        ("║    GAME  OVER    ║", Color::Red),
        ("╚══════════════════╝", Color::Red),
        (cause, Color::DarkGrey),
        (&score_line, Color::Yellow),
        ("R - Play Again  Q - Quit", Color::White),
    ];
    draw_centered(out, lines, width, height)
}
