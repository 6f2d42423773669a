//! bracket-drawer — single-elimination tournament bracket layout and rendering.
//!
//! Public API: [`BracketLayoutEngine`] for layout, [`renderers`] for output,
//! and [`render_rosters`] for the roster-to-image path used by the CLI.

pub mod config;
pub mod error;
pub mod figure;
pub mod layout;
pub mod logo;
pub mod renderers;
pub mod seeding;

#[cfg(feature = "wasm")]
mod wasm;

pub use config::{LayoutConfig, RenderConfig};
pub use error::{BracketError, Result};
pub use figure::Figure;
pub use layout::{BracketLayoutEngine, DrawRequest};
pub use renderers::{AsciiRenderer, Format, JsonRenderer, Renderer, SvgRenderer};
pub use seeding::{BracketSize, MatchupPair, SwapPair, TeamTable, seed_pairs};

/// Seeding options for one region's roster.
#[derive(Debug, Clone, Default)]
pub struct RegionSeeding {
    pub swap: Option<SwapPair>,
    pub suffix: String,
}

/// Seed two rosters and lay them out as a figure.
///
/// Each roster must hold exactly `bracket_size / 2` teams in seed order.
pub fn seed_and_draw(
    engine: &BracketLayoutEngine,
    left: (&TeamTable, &RegionSeeding),
    right: (&TeamTable, &RegionSeeding),
    mut request: DrawRequest,
) -> Result<Figure> {
    let half = engine.size().half();
    for (name, table) in [("left", left.0), ("right", right.0)] {
        if table.len() != half {
            return Err(BracketError::InvalidArgument(format!(
                "{name} roster has {} teams; a {}-team bracket needs {half}",
                table.len(),
                engine.size()
            )));
        }
    }
    request.left_teams = engine.tournament_seeds(left.0, left.1.swap, &left.1.suffix)?;
    request.right_teams = engine.tournament_seeds(right.0, right.1.swap, &right.1.suffix)?;
    engine.draw_bracket(&request)
}

/// Parse two CSV rosters, seed them, and render in `format`.
pub fn render_rosters(
    bracket_size: u32,
    left_csv: &str,
    right_csv: &str,
    seeding: (&RegionSeeding, &RegionSeeding),
    request: DrawRequest,
    format: Format,
    config: &RenderConfig,
) -> Result<String> {
    let engine = BracketLayoutEngine::new(bracket_size)?;
    let left = TeamTable::parse_csv(left_csv)?;
    let right = TeamTable::parse_csv(right_csv)?;
    let figure = seed_and_draw(&engine, (&left, seeding.0), (&right, seeding.1), request)?;
    Ok(match format {
        Format::Svg => SvgRenderer::from_config(config).render(&figure),
        Format::Text => AsciiRenderer::from_config(config).render(&figure),
        Format::Json => JsonRenderer::new(true).render(&figure),
    })
}
