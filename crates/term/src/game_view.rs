//! GameView: maps a `SessionSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The lane is one row of blocks. A solid cell is `cell_w` columns of `█`, a gap
//! is left blank. The camera scrolls with the player so the runner stays near the
//! left quarter of the screen once it has moved past it.

use crate::core::SessionSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{CellType, GameState, MotionKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const BLOCK_GLYPH: char = '█';
const PLAYER_GLYPH: char = '@';
const FALLEN_GLYPH: char = 'x';
const FINISH_GLYPH: char = '|';

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const HINT: CellStyle = CellStyle::fg(Rgb::new(150, 150, 150)).dim();
const BLOCK: CellStyle = CellStyle::fg(Rgb::new(170, 140, 100));
const PLAYER: CellStyle = CellStyle::fg(Rgb::new(255, 220, 80)).bold();
const FALLEN: CellStyle = CellStyle::fg(Rgb::RED).bold();
const FINISH: CellStyle = CellStyle::fg(Rgb::new(80, 200, 120)).bold();
const WIN: CellStyle = CellStyle::fg(Rgb::BLUE).on(Rgb::WHITE).bold();
const DIE: CellStyle = CellStyle::fg(Rgb::RED).bold();

/// A lightweight terminal renderer for the lane.
pub struct GameView {
    /// Track cell width in terminal columns.
    cell_w: u16,
    /// Columns the camera keeps to the left of the player.
    lead_cols: Option<u16>,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            lead_cols: None,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            lead_cols: None,
        }
    }

    /// Pin the camera lead instead of using a quarter of the viewport.
    pub fn with_lead_cols(mut self, lead_cols: u16) -> Self {
        self.lead_cols = Some(lead_cols);
        self
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    /// Row holding the blocks.
    pub fn track_row(&self, viewport: Viewport) -> u16 {
        (viewport.height / 2).saturating_add(1)
    }

    /// Leftmost track column visible on screen for a player at `x` cells.
    pub fn camera_col(&self, viewport: Viewport, x: f32) -> u16 {
        let lead = self.lead_cols.unwrap_or(viewport.width / 4);
        self.player_col(x).saturating_sub(lead)
    }

    fn player_col(&self, x: f32) -> u16 {
        let col = (x.max(0.0) * self.cell_w as f32).round();
        if col >= u16::MAX as f32 {
            u16::MAX
        } else {
            col as u16
        }
    }

    /// Render the current frame into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::new(' ', CellStyle::fg(Rgb::BLACK)));
        if viewport.width == 0 || viewport.height == 0 {
            return;
        }

        self.draw_hud(snap, fb);
        self.draw_track(snap, viewport, fb);
        self.draw_player(snap, viewport, fb);

        match snap.state {
            GameState::Init => self.draw_start_menu(viewport, fb),
            GameState::Win | GameState::Die => self.draw_end_menu(snap, viewport, fb),
            GameState::Playing => {}
        }
    }

    /// Render into a fresh framebuffer.
    pub fn render(&self, snap: &SessionSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_hud(&self, snap: &SessionSnapshot, fb: &mut FrameBuffer) {
        if snap.state == GameState::Init {
            fb.put_str_centered(0, "LANE RUNNER", TEXT.bold());
            return;
        }
        fb.put_str(1, 0, "Steps: ", TEXT);
        fb.put_u32(8, 0, snap.steps, TEXT.bold());
    }

    fn draw_track(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let row = self.track_row(viewport);
        let cam = self.camera_col(viewport, snap.position.x) as usize;
        let cell_w = self.cell_w as usize;
        let width = viewport.width as usize;

        let first = cam / cell_w;
        for (i, cell) in snap.track.iter().enumerate().skip(first) {
            let left = i * cell_w;
            if left >= cam + width {
                break;
            }
            if *cell == CellType::Gap {
                continue;
            }
            for dx in 0..cell_w {
                let col = left + dx;
                if col >= cam && col < cam + width {
                    fb.put_char((col - cam) as u16, row, BLOCK_GLYPH, BLOCK);
                }
            }
        }

        let finish = snap.track.len() * cell_w;
        if finish >= cam && finish < cam + width {
            let col = (finish - cam) as u16;
            fb.put_char(col, row, FINISH_GLYPH, FINISH);
            fb.put_char(col, row.saturating_sub(1), FINISH_GLYPH, FINISH);
        }
    }

    fn draw_player(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let row = self.track_row(viewport);
        let cam = self.camera_col(viewport, snap.position.x);
        let col = self.player_col(snap.position.x).saturating_sub(cam);

        match snap.motion {
            MotionKind::Dying => fb.put_char(col, row, FALLEN_GLYPH, FALLEN),
            _ if snap.in_flight => fb.put_char(col, row.saturating_sub(2), PLAYER_GLYPH, PLAYER),
            _ => fb.put_char(col, row.saturating_sub(1), PLAYER_GLYPH, PLAYER),
        }
    }

    fn draw_start_menu(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        let top = self.track_row(viewport).saturating_add(2);
        fb.put_str_centered(top, "Press Enter to start", TEXT.bold());
        fb.put_str_centered(top + 1, "Left/j: jump 1   Right/k: jump 2", HINT);
        fb.put_str_centered(top + 2, "mouse: left 1, right 2   q: quit", HINT);
    }

    fn draw_end_menu(&self, snap: &SessionSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        let top = self.track_row(viewport).saturating_add(2);
        let (headline, style, score) = match snap.result {
            Some(result) => (
                result.headline(),
                if result.won { WIN } else { DIE },
                result.final_score,
            ),
            None if snap.state == GameState::Win => ("You Win!", WIN, snap.steps),
            None => ("You Died!", DIE, snap.steps),
        };
        fb.put_str_centered(top, headline, style);

        let label = "Your Score: ";
        let digits = digit_count(score);
        let x = viewport.width.saturating_sub(label.len() as u16 + digits) / 2;
        fb.put_str(x, top + 1, label, TEXT);
        fb.put_u32(x + label.len() as u16, top + 1, score, TEXT.bold());

        fb.put_str_centered(top + 2, "r: replay   q: quit", HINT);
    }
}

fn digit_count(mut n: u32) -> u16 {
    let mut d = 1;
    while n >= 10 {
        n /= 10;
        d += 1;
    }
    d
}
