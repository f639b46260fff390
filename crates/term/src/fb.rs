//! Framebuffer and style types for terminal rendering.
//!
//! One cell is one terminal column. Text writers skip characters that are not
//! exactly one column wide (emoji, combining marks) so cell indices stay equal
//! to screen columns for the diff renderer.

use unicode_width::UnicodeWidthChar;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Minimal per-cell styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellStyle {
    pub fg: Rgb,
    pub bg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl CellStyle {
    pub const fn new(fg: Rgb, bg: Rgb) -> Self {
        Self {
            fg,
            bg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub fn into_cell(self, ch: char) -> Cell {
        Cell { ch, style: self }
    }
}

impl Default for CellStyle {
    fn default() -> Self {
        Self::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0))
    }
}

/// A single terminal cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    pub style: CellStyle,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: CellStyle::default(),
        }
    }
}

/// True when `ch` takes exactly one terminal column
pub fn is_narrow(ch: char) -> bool {
    ch.width() == Some(1)
}

/// `s` without the characters a cell cannot hold, trailing blanks trimmed
pub fn narrow_text(s: &str) -> String {
    let mut out: String = s.chars().filter(|c| is_narrow(*c)).collect();
    out.truncate(out.trim_end().len());
    out
}

/// 2D framebuffer of styled character cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![Cell::default(); len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Resize, keeping the allocation when possible.
    pub fn resize(&mut self, width: u16, height: u16) {
        if self.width == width && self.height == height {
            return;
        }
        self.width = width;
        self.height = height;
        let len = (width as usize) * (height as usize);
        self.cells.resize(len, Cell::default());
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Cell> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = cell;
        }
    }

    pub fn clear(&mut self, cell: Cell) {
        self.cells.fill(cell);
    }

    pub fn put_char(&mut self, x: u16, y: u16, ch: char, style: CellStyle) {
        self.set(x, y, Cell { ch, style });
    }

    /// Write `s` from (x, y), clipped at the right edge. Returns columns written.
    pub fn put_str(&mut self, x: u16, y: u16, s: &str, style: CellStyle) -> u16 {
        self.put_str_max(x, y, s, u16::MAX, style)
    }

    /// Like [`FrameBuffer::put_str`], writing at most `max` columns.
    pub fn put_str_max(&mut self, x: u16, y: u16, s: &str, max: u16, style: CellStyle) -> u16 {
        let mut written = 0u16;
        for ch in s.chars().filter(|c| is_narrow(*c)) {
            let cx = x.saturating_add(written);
            if cx >= self.width || written >= max {
                break;
            }
            self.put_char(cx, y, ch, style);
            written += 1;
        }
        written
    }

    pub fn fill_rect(&mut self, x: u16, y: u16, w: u16, h: u16, ch: char, style: CellStyle) {
        for dy in 0..h {
            for dx in 0..w {
                self.put_char(x.saturating_add(dx), y.saturating_add(dy), ch, style);
            }
        }
    }

    /// Row `y` as a string (tests and debugging)
    pub fn row_text(&self, y: u16) -> String {
        (0..self.width)
            .filter_map(|x| self.get(x, y).map(|c| c.ch))
            .collect()
    }

    /// True when any row contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        (0..self.height).any(|y| self.row_text(y).contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn put_str_clips_at_edge() {
        let mut fb = FrameBuffer::new(4, 1);
        let n = fb.put_str(2, 0, "ÅÄÖ", CellStyle::default());
        assert_eq!(n, 2);
        assert_eq!(fb.row_text(0), "  ÅÄ");
    }

    #[test]
    fn put_str_max_limits_width() {
        let mut fb = FrameBuffer::new(10, 1);
        fb.put_str_max(0, 0, "BOKSTAV", 3, CellStyle::default());
        assert_eq!(fb.row_text(0), "BOK       ");
    }

    #[test]
    fn put_str_skips_wide_characters() {
        let mut fb = FrameBuffer::new(8, 1);
        let n = fb.put_str(0, 0, "Eld 🔥!", CellStyle::default());
        assert_eq!(n, 5);
        assert_eq!(fb.row_text(0), "Eld !   ");
        assert!(fb.cells().iter().all(|c| is_narrow(c.ch)));
    }

    #[test]
    fn narrow_text_drops_emoji_and_trailing_space() {
        assert_eq!(narrow_text("Grattis! 🎉"), "Grattis!");
        assert_eq!(narrow_text("Brända bokstäver"), "Brända bokstäver");
    }

    #[test]
    fn resize_and_out_of_bounds() {
        let mut fb = FrameBuffer::new(2, 2);
        fb.set(5, 5, Cell::default());
        fb.resize(3, 1);
        assert_eq!(fb.cells().len(), 3);
        assert!(fb.get(0, 1).is_none());
    }
}
