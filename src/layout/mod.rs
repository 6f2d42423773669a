//! Layout engine — seeding, region crossover and per-side geometry,
//! assembled into a [`Figure`].

pub mod geometry;
pub mod regions;
pub mod tree;
pub mod types;

pub use geometry::layout_sub_bracket;
pub use regions::split_regions;
pub use tree::{MatchRecord, MatchTree};
pub use types::{DrawDirection, Position, Segment, SubBracketLayout};

use std::path::PathBuf;

use crate::config::LayoutConfig;
use crate::error::Result;
use crate::figure::{self, Figure, LOGO_FRAME, Panel, PlacedLogo};
use crate::logo::Logo;
use crate::seeding::{self, BracketSize, MatchupPair, SwapPair, TeamTable};

/// Inputs of a single draw call. Empty strings count as absent.
#[derive(Debug, Clone, Default)]
pub struct DrawRequest {
    pub left_teams: Vec<String>,
    pub right_teams: Vec<String>,
    pub title: Option<String>,
    pub logo_path: Option<PathBuf>,
    pub subtitle_left: Option<String>,
    pub subtitle_right: Option<String>,
    pub social_handle: Option<String>,
    pub website: Option<String>,
}

impl DrawRequest {
    pub fn new(left_teams: Vec<String>, right_teams: Vec<String>) -> Self {
        Self {
            left_teams,
            right_teams,
            ..Self::default()
        }
    }
}

fn present(s: &Option<String>) -> Option<&str> {
    s.as_deref().filter(|s| !s.is_empty())
}

/// Immutable bracket configuration: size, pairing table and geometry.
#[derive(Debug, Clone)]
pub struct BracketLayoutEngine {
    size: BracketSize,
    pairs: &'static [MatchupPair],
    config: LayoutConfig,
}

impl BracketLayoutEngine {
    /// Engine for a 16- or 32-entrant bracket with default geometry.
    pub fn new(bracket_size: u32) -> Result<Self> {
        Self::with_config(bracket_size, LayoutConfig::default())
    }

    pub fn with_config(bracket_size: u32, config: LayoutConfig) -> Result<Self> {
        let size = BracketSize::try_from(bracket_size)?;
        Ok(Self {
            size,
            pairs: size.seed_pairs(),
            config,
        })
    }

    pub fn size(&self) -> BracketSize {
        self.size
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn seed_pairs(&self) -> &'static [MatchupPair] {
        self.pairs
    }

    /// Seeded labels for one region in first-round order.
    pub fn tournament_seeds(
        &self,
        table: &TeamTable,
        swap: Option<SwapPair>,
        suffix: &str,
    ) -> Result<Vec<String>> {
        seeding::tournament_seeds(table, self.pairs, swap, suffix)
    }

    /// Lay out both sides and assemble the figure.
    ///
    /// Everything that can fail (entrant counts, the logo read) is checked
    /// before any geometry is built.
    pub fn draw_bracket(&self, req: &DrawRequest) -> Result<Figure> {
        let (physical_left, physical_right) =
            split_regions(&req.left_teams, &req.right_teams, self.size)?;
        let logo = req
            .logo_path
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Logo::load)
            .transpose()?;

        log::info!(
            "drawing {}-team bracket ({} per side)",
            self.size,
            physical_left.len()
        );

        let [left_frame, right_frame] = figure::panel_frames();
        let left = layout_sub_bracket(&physical_left, DrawDirection::Right, &self.config);
        let right = layout_sub_bracket(&physical_right, DrawDirection::Left, &self.config);

        let footer = match (present(&req.social_handle), present(&req.website)) {
            (Some(handle), Some(site)) => Some(figure::footer_text(handle, site)),
            _ => None,
        };

        Ok(Figure {
            width: self.config.figure_width,
            height: req.left_teams.len() as f64 * self.config.unit_height + 2.0,
            title: present(&req.title).map(figure::title_text),
            panels: [
                Panel::from_layout(left, left_frame, present(&req.subtitle_left).map(str::to_owned)),
                Panel::from_layout(
                    right,
                    right_frame,
                    present(&req.subtitle_right).map(str::to_owned),
                ),
            ],
            logo: logo.map(|image| PlacedLogo {
                frame: LOGO_FRAME,
                image,
            }),
            footer,
        })
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
