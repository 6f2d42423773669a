//! Canvas — 2D character grid for painting brackets as text.
//!
//! Lines are stored as junction arms so that crossings and corners resolve
//! to the right glyph no matter the drawing order. Text always wins over
//! lines in the same cell.

use super::charset::{Arms, CharSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Cell {
    Empty,
    Line(Arms),
    Text(char),
}

/// A 2D character grid used as a painting surface.
pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub charset: CharSet,
    cells: Vec<Vec<Cell>>,
}

impl Canvas {
    pub fn new(width: usize, height: usize, charset: CharSet) -> Self {
        Self {
            width,
            height,
            charset,
            cells: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn get(&self, col: usize, row: usize) -> char {
        match self.cells.get(row).and_then(|r| r.get(col)) {
            Some(Cell::Text(ch)) => *ch,
            Some(Cell::Line(arms)) => arms.to_char(self.charset),
            _ => ' ',
        }
    }

    /// Add line arms to a cell; ignored where text was written.
    fn add_arms(&mut self, col: usize, row: usize, arms: Arms) {
        if row >= self.height || col >= self.width {
            return;
        }
        let cell = &mut self.cells[row][col];
        *cell = match *cell {
            Cell::Empty => Cell::Line(arms),
            Cell::Line(existing) => Cell::Line(existing.merge(arms)),
            text @ Cell::Text(_) => text,
        };
    }

    /// Draw a horizontal line from x1 to x2 (inclusive) at row y.
    pub fn hline(&mut self, y: usize, x1: usize, x2: usize) {
        let (lo, hi) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        if lo == hi {
            self.add_arms(lo, y, Arms::new(false, false, true, true));
            return;
        }
        for col in lo..=hi {
            let arms = Arms::new(false, false, col > lo, col < hi);
            self.add_arms(col, y, arms);
        }
    }

    /// Draw a vertical line from y1 to y2 (inclusive) at column x.
    pub fn vline(&mut self, x: usize, y1: usize, y2: usize) {
        let (lo, hi) = if y1 <= y2 { (y1, y2) } else { (y2, y1) };
        if lo == hi {
            return;
        }
        for row in lo..=hi {
            let arms = Arms::new(row > lo, row < hi, false, false);
            self.add_arms(x, row, arms);
        }
    }

    /// Write a string starting at (col, row), clipped to the canvas.
    pub fn write_str(&mut self, col: usize, row: usize, s: &str) {
        if row >= self.height {
            return;
        }
        for (i, ch) in s.chars().enumerate() {
            let c = col + i;
            if c >= self.width {
                break;
            }
            self.cells[row][c] = Cell::Text(ch);
        }
    }

    /// Write a string centred on `center`, clipped at both edges.
    pub fn write_centered(&mut self, center: usize, row: usize, s: &str) {
        let len = s.chars().count();
        let start = center.saturating_sub(len / 2);
        self.write_str(start, row, s);
    }

    /// Write a string whose last character lands on `end`.
    pub fn write_right_aligned(&mut self, end: usize, row: usize, s: &str) {
        let len = s.chars().count();
        let start = (end + 1).saturating_sub(len);
        let skip = len.saturating_sub(end + 1);
        let clipped: String = s.chars().skip(skip).collect();
        self.write_str(start, row, &clipped);
    }

    /// Render the canvas to a string, trimming trailing whitespace per line.
    pub fn render_to_string(&self) -> String {
        let mut lines: Vec<String> = (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| self.get(col, row))
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

impl std::fmt::Display for Canvas {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render_to_string())
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
