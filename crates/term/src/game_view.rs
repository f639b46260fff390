//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{narrow_text, CellStyle, FrameBuffer, Rgb};
use crate::toast::ToastQueue;
use crate::types::{Glyph, Position, BOARD_HEIGHT, BOARD_WIDTH, BURN_ROW};

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

const HELP_LINES: [&str; 8] = [
    "←↑↓→ / hjkl: styr",
    "mellanslag: snabbfall",
    "1 2 3: hastighet",
    "m: ljud  r: nytt spel",
    "c / b: säg senaste bokstav",
    "q: avsluta",
    "Samla bokstäver i boken",
    "Se upp för elden!",
];

/// Word game renderer.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    show_help: bool,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps the grid roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            show_help: false,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn help_visible(&self) -> bool {
        self.show_help
    }

    pub fn set_help(&mut self, visible: bool) {
        self.show_help = visible;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        toasts: &ToastQueue,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = BOARD_HEIGHT as u16;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w + PANEL_MIN_W + 2) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + TOAST_ROWS) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let pos = Position::new(x, y);
                match snap.board.glyph_at(pos) {
                    Some(glyph) => self.draw_glyph(fb, start_x, start_y, snap, pos, glyph),
                    None if y == BURN_ROW => self.draw_flame(fb, start_x, start_y, pos),
                    None => self.draw_empty_cell(fb, start_x, start_y, pos),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);
        self.draw_toasts(fb, toasts, viewport, start_x, start_y + frame_h);

        if snap.word_completed {
            self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GRATTIS!");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, toasts: &ToastQueue, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, toasts, viewport, &mut fb);
        fb
    }

    /// Terminal column and row of the left half of a board cell
    pub fn cell_origin(&self, start_x: u16, start_y: u16, pos: Position) -> (u16, u16) {
        (
            start_x + 1 + (pos.x as u16) * self.cell_w,
            start_y + 1 + pos.y as u16,
        )
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn put_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        pos: Position,
        chars: [char; 2],
        style: CellStyle,
    ) {
        let (px, py) = self.cell_origin(start_x, start_y, pos);
        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
        fb.put_char(px, py, chars[0], style);
        if self.cell_w > 1 {
            fb.put_char(px + 1, py, chars[1], style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Position) {
        let style = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        self.put_cell(fb, start_x, start_y, pos, ['·', ' '], style);
    }

    fn draw_flame(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, pos: Position) {
        let fg = if pos.x % 2 == 0 {
            Rgb::new(255, 140, 0)
        } else {
            Rgb::new(230, 60, 30)
        };
        let style = CellStyle::new(fg, Rgb::new(70, 20, 10));
        self.put_cell(fb, start_x, start_y, pos, ['^', '^'], style);
    }

    fn draw_glyph(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        snap: &GameSnapshot,
        pos: Position,
        glyph: Glyph,
    ) {
        let (chars, style) = match glyph {
            Glyph::Book => (
                ['[', ']'],
                CellStyle::new(Rgb::new(240, 200, 90), Rgb::new(90, 60, 30)).bold(),
            ),
            Glyph::Fire => (
                ['^', '^'],
                CellStyle::new(Rgb::new(255, 80, 40), Rgb::new(110, 30, 10)).bold(),
            ),
            Glyph::Target(c) => (
                [c, ' '],
                CellStyle::new(Rgb::new(140, 140, 150), PLAY_BG).dim(),
            ),
            Glyph::Letter(c) if snap.is_matched(pos) => (
                [c, ' '],
                CellStyle::new(Rgb::new(100, 230, 120), Rgb::new(20, 60, 30)).bold(),
            ),
            Glyph::Letter(c) => (
                [c, ' '],
                CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(50, 70, 150)).bold(),
            ),
        };
        self.put_cell(fb, start_x, start_y, pos, chars, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < PANEL_MIN_W {
            return;
        }

        let label = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let matched = CellStyle::new(Rgb::new(100, 230, 120), PANEL_BG).bold();
        let dim = value.dim();

        let mut y = start_y;
        fb.put_str(panel_x, y, "Bilda ordet:", label);
        y = y.saturating_add(1);
        for (i, slot) in snap.targets.iter().enumerate() {
            let style = if snap.is_matched(slot.position()) {
                matched
            } else {
                dim
            };
            fb.put_char(panel_x + (i as u16) * 2, y, slot.letter, style);
        }
        y = y.saturating_add(1);
        fb.put_str_max(panel_x, y, snap.category.label(), panel_w, dim);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Samlade bokstäver", label);
        y = y.saturating_add(1);
        fb.put_str_max(panel_x, y, &tail_fit(&snap.collected_letters, panel_w), panel_w, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Brända bokstäver", label);
        y = y.saturating_add(1);
        fb.put_str_max(panel_x, y, &tail_fit(&snap.burned_letters, panel_w), panel_w, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "Hastighet:", label);
        let n = fb.put_str(panel_x + 11, y, snap.speed.label(), value);
        if snap.fast_falling {
            fb.put_str(panel_x + 12 + n, y, "↓↓", value);
        }
        y = y.saturating_add(1);
        let sound = if snap.sound_enabled { "Ljud på" } else { "Ljud av" };
        fb.put_str(panel_x, y, sound, value);
        y = y.saturating_add(2);

        if self.show_help {
            fb.put_str(panel_x, y, "Hur man spelar", label);
            y = y.saturating_add(1);
            for line in HELP_LINES {
                if y >= viewport.height {
                    break;
                }
                fb.put_str_max(panel_x, y, line, panel_w, value);
                y = y.saturating_add(1);
            }
        } else {
            fb.put_str_max(panel_x, y, "?: hjälp  q: avsluta", panel_w, dim);
        }
    }

    fn draw_toasts(
        &self,
        fb: &mut FrameBuffer,
        toasts: &ToastQueue,
        viewport: Viewport,
        x: u16,
        top: u16,
    ) {
        let title = CellStyle::new(Rgb::new(255, 220, 120), PANEL_BG).bold();
        let body = CellStyle::new(Rgb::new(220, 220, 220), PANEL_BG);

        // Newest first, directly under the board.
        for (row, toast) in toasts.iter().rev().enumerate() {
            let y = top.saturating_add(row as u16);
            if y >= viewport.height {
                break;
            }
            let max = viewport.width.saturating_sub(x);
            let n = fb.put_str_max(x, y, &narrow_text(&toast.title), max, title);
            fb.put_str_max(
                x + n + 1,
                y,
                &toast.description,
                max.saturating_sub(n + 1),
                body,
            );
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 230, 80), PANEL_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }
}

/// Narrowest side panel worth drawing
const PANEL_MIN_W: u16 = 12;

/// Rows reserved under the board for toasts when centering
const TOAST_ROWS: u16 = 3;

/// The most recent letters that fit in `width` columns, space separated
fn tail_fit(letters: &[char], width: u16) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }
    let fit = ((width as usize) + 1) / 2;
    let skip = letters.len().saturating_sub(fit.max(1));
    let mut out = String::with_capacity(fit * 2);
    for (i, c) in letters[skip..].iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push(*c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tail_fit_keeps_newest() {
        assert_eq!(tail_fit(&[], 10), "-");
        assert_eq!(tail_fit(&['A', 'B'], 10), "A B");
        assert_eq!(tail_fit(&['A', 'B', 'C', 'D'], 5), "B C D");
    }
}
