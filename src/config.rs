//! Configuration for the layout and rendering pipeline.

use serde::{Deserialize, Serialize};

/// Geometry constants shared by every round of a sub-bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Vertical distance between adjacent leaf entrants.
    pub unit_height: f64,
    /// Horizontal distance between consecutive rounds.
    pub round_width: f64,
    /// Length of the entry line each leaf label sits on.
    pub entry_line: f64,
    /// Width of the drawing surface, in layout units.
    pub figure_width: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            unit_height: 1.0,
            round_width: 4.0,
            entry_line: 2.5,
            figure_width: 30.0,
        }
    }
}

impl LayoutConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Elbow offset from a child toward its parent.
    pub fn elbow_offset(&self) -> f64 {
        self.round_width / 3.0
    }
}

/// Output options for the renderers.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Use Unicode box-drawing characters (true) or plain ASCII (false).
    pub unicode: bool,
    /// Pixels per figure unit in SVG output; font sizes are points at this density.
    pub dpi: f64,
    /// Character cells per horizontal layout unit in text output.
    pub cols_per_unit: f64,
    /// Character rows per vertical layout unit in text output.
    pub rows_per_unit: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            unicode: true,
            dpi: 100.0,
            cols_per_unit: 6.0,
            rows_per_unit: 2.0,
        }
    }
}

impl RenderConfig {
    pub fn new() -> Self {
        Self::default()
    }
}
