//! Renderer registry and Renderer trait.

pub mod ascii;
pub mod canvas;
pub mod charset;
pub mod json;
pub mod svg;

pub use ascii::AsciiRenderer;
pub use json::JsonRenderer;
pub use svg::SvgRenderer;

use crate::figure::Figure;

/// Trait for figure renderers.
pub trait Renderer {
    /// Render a figure to a string.
    fn render(&self, figure: &Figure) -> String;
}

/// Output format selectable by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    #[default]
    Svg,
    Text,
    Json,
}

impl std::str::FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "svg" => Ok(Format::Svg),
            "text" | "txt" | "ascii" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => Err(format!("unknown format '{other}'; use svg, text or json")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("SVG".parse::<Format>(), Ok(Format::Svg));
        assert_eq!("ascii".parse::<Format>(), Ok(Format::Text));
        assert_eq!("json".parse::<Format>(), Ok(Format::Json));
        assert!("png".parse::<Format>().is_err());
    }
}
