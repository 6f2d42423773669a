//! Text renderer — draws both sides of a bracket on a character canvas.
//!
//! Team labels sit beside their entry lines on the outer edge of each side;
//! the two finals face each other across a small gap in the middle.

use super::Renderer;
use super::canvas::Canvas;
use super::charset::CharSet;
use crate::config::RenderConfig;
use crate::figure::{Figure, Panel};
use crate::layout::types::{DrawDirection, Segment};

/// Columns between the two finals.
const CENTER_GAP: usize = 4;
/// Spaces between a label and its entry line.
const LABEL_GAP: usize = 1;
const LOGO_MARKER: &str = "[logo]";

/// Renders a figure to Unicode or ASCII text.
pub struct AsciiRenderer {
    pub unicode: bool,
    pub cols_per_unit: f64,
    pub rows_per_unit: f64,
}

impl AsciiRenderer {
    pub fn new(unicode: bool) -> Self {
        Self::from_config(&RenderConfig {
            unicode,
            ..RenderConfig::default()
        })
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            unicode: config.unicode,
            cols_per_unit: config.cols_per_unit,
            rows_per_unit: config.rows_per_unit,
        }
    }
}

/// Data extents of a panel's lines.
#[derive(Clone, Copy)]
struct Extent {
    min_x: f64,
    max_x: f64,
    min_y: f64,
    max_y: f64,
}

impl Extent {
    fn of(lines: &[Segment]) -> Self {
        let mut e = Extent {
            min_x: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            min_y: f64::INFINITY,
            max_y: f64::NEG_INFINITY,
        };
        for s in lines {
            for p in [s.from, s.to] {
                e.min_x = e.min_x.min(p.x);
                e.max_x = e.max_x.max(p.x);
                e.min_y = e.min_y.min(p.y);
                e.max_y = e.max_y.max(p.y);
            }
        }
        if lines.is_empty() {
            e = Extent {
                min_x: 0.0,
                max_x: 0.0,
                min_y: 0.0,
                max_y: 0.0,
            };
        }
        e
    }
}

/// Grid placement of one panel.
struct Placement {
    base_col: usize,
    body_top: usize,
    extent: Extent,
    cols_per_unit: f64,
    rows_per_unit: f64,
}

impl Placement {
    fn col(&self, x: f64) -> usize {
        self.base_col + ((x - self.extent.min_x) * self.cols_per_unit).round() as usize
    }

    fn row(&self, y: f64) -> usize {
        self.body_top + ((self.extent.max_y - y) * self.rows_per_unit).round() as usize
    }

    fn width(&self) -> usize {
        ((self.extent.max_x - self.extent.min_x) * self.cols_per_unit).round() as usize + 1
    }

    fn height(&self) -> usize {
        ((self.extent.max_y - self.extent.min_y) * self.rows_per_unit).round() as usize + 1
    }
}

fn label_width(panel: &Panel) -> usize {
    panel
        .texts
        .iter()
        .map(|t| t.text.chars().count())
        .max()
        .unwrap_or(0)
}

impl AsciiRenderer {
    fn draw_panel(&self, canvas: &mut Canvas, panel: &Panel, at: &Placement) {
        for s in &panel.lines {
            if s.is_horizontal() {
                canvas.hline(at.row(s.from.y), at.col(s.from.x), at.col(s.to.x));
            } else if s.is_vertical() {
                canvas.vline(at.col(s.from.x), at.row(s.from.y), at.row(s.to.y));
            }
        }
        for label in &panel.layout.labels {
            let row = at.row(label.line.from.y);
            match panel.layout.direction {
                DrawDirection::Right => {
                    let outer = at.col(label.line.from.x.min(label.line.to.x));
                    if let Some(end) = outer.checked_sub(LABEL_GAP + 1) {
                        canvas.write_right_aligned(end, row, &label.text);
                    }
                }
                DrawDirection::Left => {
                    let outer = at.col(label.line.from.x.max(label.line.to.x));
                    canvas.write_str(outer + LABEL_GAP + 1, row, &label.text);
                }
            }
        }
    }
}

impl Renderer for AsciiRenderer {
    fn render(&self, figure: &Figure) -> String {
        let [left, right] = &figure.panels;
        let (le, re) = (Extent::of(&left.lines), Extent::of(&right.lines));

        let title_rows = usize::from(figure.title.is_some());
        let subtitle_rows = usize::from(left.subtitle.is_some() || right.subtitle.is_some());
        let body_top = title_rows + subtitle_rows + usize::from(title_rows + subtitle_rows > 0);

        let left_margin = label_width(left) + LABEL_GAP;
        let lp = Placement {
            base_col: left_margin,
            body_top,
            extent: le,
            cols_per_unit: self.cols_per_unit,
            rows_per_unit: self.rows_per_unit,
        };
        let rp = Placement {
            base_col: lp.base_col + lp.width() + CENTER_GAP,
            extent: re,
            ..lp
        };
        let right_margin = label_width(right) + LABEL_GAP;

        let width = rp.base_col + rp.width() + right_margin;
        let body_rows = lp.height().max(rp.height());
        let footer_rows = if figure.footer.is_some() { 2 } else { 0 };
        let height = body_top + body_rows + footer_rows;

        let charset = if self.unicode {
            CharSet::Unicode
        } else {
            CharSet::Ascii
        };
        let mut canvas = Canvas::new(width, height, charset);

        if let Some(title) = &figure.title {
            canvas.write_centered(width / 2, 0, &title.text);
        }
        for (panel, at) in [(left, &lp), (right, &rp)] {
            if let Some(subtitle) = &panel.subtitle {
                canvas.write_centered(at.base_col + at.width() / 2, title_rows, subtitle);
            }
            self.draw_panel(&mut canvas, panel, at);
        }

        if figure.logo.is_some() {
            let center = lp.base_col + lp.width() + CENTER_GAP / 2;
            let row = left
                .layout
                .final_position
                .map_or(body_top, |p| lp.row(p.y) + 2);
            canvas.write_centered(center, row, LOGO_MARKER);
        }

        if let Some(footer) = &figure.footer {
            canvas.write_right_aligned(width.saturating_sub(1), height - 1, &footer.text);
        }

        canvas.render_to_string()
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
