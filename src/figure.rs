//! Figure — the in-memory drawing produced by a draw call.
//!
//! Two panels sit side by side, each with its own data coordinates
//! (`x_limits`, `y_limits`). Panel frames, the logo box and figure-level
//! text are placed in figure fractions, `(0, 0)` bottom-left.

use serde::Serialize;

use crate::layout::types::{Position, Segment, SubBracketLayout};
use crate::logo::Logo;

/// Font size of first-round team labels, in points.
pub const LABEL_FONT_SIZE: f64 = 10.5;
pub const TITLE_FONT_SIZE: f64 = 20.0;
pub const SUBTITLE_FONT_SIZE: f64 = 12.0;
pub const FOOTER_FONT_SIZE: f64 = 10.5;

/// Subplot margins in figure fractions.
const MARGIN_LEFT: f64 = 0.125;
const MARGIN_RIGHT: f64 = 0.9;
const MARGIN_BOTTOM: f64 = 0.11;
const MARGIN_TOP: f64 = 0.88;
/// Gap between the panels as a fraction of one panel's width; negative
/// values pull the two sides into each other.
const PANEL_SPACING: f64 = -0.2;

/// Logo box `[left, bottom, width, height]` in figure fractions.
pub const LOGO_FRAME: Frame = Frame {
    left: 0.42,
    bottom: 0.32,
    width: 0.15,
    height: 0.15,
};

// ─── Frame ───────────────────────────────────────────────────────────────────

/// A rectangle in figure fractions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    pub left: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// Frames of the left and right panels.
pub fn panel_frames() -> [Frame; 2] {
    let total = MARGIN_RIGHT - MARGIN_LEFT;
    let width = total / (2.0 + PANEL_SPACING);
    let height = MARGIN_TOP - MARGIN_BOTTOM;
    let left = Frame {
        left: MARGIN_LEFT,
        bottom: MARGIN_BOTTOM,
        width,
        height,
    };
    let right = Frame {
        left: MARGIN_RIGHT - width,
        ..left
    };
    [left, right]
}

// ─── Text ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Anchor {
    Start,
    Middle,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Baseline {
    Bottom,
    Center,
    Top,
}

/// A piece of text with its placement and style.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextItem {
    pub text: String,
    pub position: Position,
    pub size: f64,
    pub anchor: Anchor,
    pub baseline: Baseline,
    pub bold: bool,
    pub italic: bool,
    pub monospace: bool,
}

impl TextItem {
    pub fn new(text: impl Into<String>, position: Position, size: f64) -> Self {
        Self {
            text: text.into(),
            position,
            size,
            anchor: Anchor::Middle,
            baseline: Baseline::Center,
            bold: false,
            italic: false,
            monospace: false,
        }
    }
}

// ─── Panel ───────────────────────────────────────────────────────────────────

/// One side of the bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub frame: Frame,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub subtitle: Option<String>,
    /// Lines in data coordinates.
    pub lines: Vec<Segment>,
    /// Team labels in data coordinates.
    pub texts: Vec<TextItem>,
    pub layout: SubBracketLayout,
}

impl Panel {
    pub fn from_layout(layout: SubBracketLayout, frame: Frame, subtitle: Option<String>) -> Self {
        let lines = layout.segments().collect();
        let texts = layout
            .labels
            .iter()
            .map(|l| TextItem {
                bold: true,
                monospace: true,
                ..TextItem::new(l.text.clone(), l.anchor, LABEL_FONT_SIZE)
            })
            .collect();
        Self {
            frame,
            x_limits: layout.x_limits,
            y_limits: layout.y_limits,
            subtitle,
            lines,
            texts,
            layout,
        }
    }

    /// Map a data point to figure fractions.
    pub fn to_figure(&self, p: Position) -> Position {
        let (x0, x1) = self.x_limits;
        let (y0, y1) = self.y_limits;
        Position::new(
            self.frame.left + (p.x - x0) / (x1 - x0) * self.frame.width,
            self.frame.bottom + (p.y - y0) / (y1 - y0) * self.frame.height,
        )
    }
}

// ─── Figure ──────────────────────────────────────────────────────────────────

/// A placed logo image.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedLogo {
    pub frame: Frame,
    pub image: Logo,
}

/// Everything needed to render a bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    /// Size in figure units (inches at the renderer's dpi).
    pub width: f64,
    pub height: f64,
    pub title: Option<TextItem>,
    pub panels: [Panel; 2],
    pub logo: Option<PlacedLogo>,
    pub footer: Option<TextItem>,
}

impl Figure {
    pub fn left(&self) -> &Panel {
        &self.panels[0]
    }

    pub fn right(&self) -> &Panel {
        &self.panels[1]
    }

    /// Every first-round label, left panel first.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.panels
            .iter()
            .flat_map(|p| p.texts.iter().map(|t| t.text.as_str()))
    }
}

/// Centred super-title near the top edge.
pub fn title_text(title: &str) -> TextItem {
    TextItem {
        baseline: Baseline::Top,
        ..TextItem::new(title, Position::new(0.5, 0.98), TITLE_FONT_SIZE)
    }
}

/// `"{handle} | {website}"` in the bottom-right corner.
pub fn footer_text(social_handle: &str, website: &str) -> TextItem {
    TextItem {
        anchor: Anchor::End,
        baseline: Baseline::Bottom,
        italic: true,
        ..TextItem::new(
            format!("{social_handle} | {website}"),
            Position::new(0.95, 0.02),
            FOOTER_FONT_SIZE,
        )
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
