//! SVG renderer — converts a figure to an SVG document string.
//!
//! Figure units are scaled by `dpi`; font sizes are points, so a size is
//! `pt * dpi / 72` pixels. Figure fractions have their origin bottom-left
//! and are flipped into SVG's top-left space here.

use super::Renderer;
use crate::config::RenderConfig;
use crate::figure::{Anchor, Baseline, Figure, Frame, Panel, SUBTITLE_FONT_SIZE, TextItem};
use crate::layout::types::{Position, Segment};

// ── Constants ────────────────────────────────────────────────────────────────

const POINTS_PER_INCH: f64 = 72.0;
const LINE_WIDTH_PT: f64 = 1.0;
/// Gap between a panel's top edge and its subtitle baseline, in points.
const SUBTITLE_PAD_PT: f64 = 6.0;
const MONO_FAMILY: &str = "DejaVu Sans Mono, monospace";
const SANS_FAMILY: &str = "DejaVu Sans, sans-serif";

// ── Helpers ──────────────────────────────────────────────────────────────────

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a coordinate with at most two decimals.
fn num(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" { "0".to_string() } else { s.to_string() }
}

fn anchor_attr(a: Anchor) -> &'static str {
    match a {
        Anchor::Start => "start",
        Anchor::Middle => "middle",
        Anchor::End => "end",
    }
}

fn baseline_attr(b: Baseline) -> &'static str {
    match b {
        Baseline::Bottom => "auto",
        Baseline::Center => "central",
        Baseline::Top => "hanging",
    }
}

// ── Renderer ─────────────────────────────────────────────────────────────────

/// Renders a figure to SVG with absolute pixel coordinates.
pub struct SvgRenderer {
    pub dpi: f64,
}

impl SvgRenderer {
    pub fn new(dpi: f64) -> Self {
        Self { dpi }
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self::new(config.dpi)
    }

    fn font_px(&self, pt: f64) -> f64 {
        pt * self.dpi / POINTS_PER_INCH
    }
}

/// Pixel mapping for one figure.
struct Surface {
    w: f64,
    h: f64,
}

impl Surface {
    /// Figure fraction → pixel.
    fn px(&self, p: Position) -> (f64, f64) {
        (p.x * self.w, (1.0 - p.y) * self.h)
    }

    fn rect(&self, f: Frame) -> (f64, f64, f64, f64) {
        let (x, y_bottom) = self.px(Position::new(f.left, f.bottom));
        let (w, h) = (f.width * self.w, f.height * self.h);
        (x, y_bottom - h, w, h)
    }
}

impl SvgRenderer {
    fn render_text(&self, item: &TextItem, x: f64, y: f64) -> String {
        let family = if item.monospace { MONO_FAMILY } else { SANS_FAMILY };
        let mut attrs = format!(
            r#"x="{}" y="{}" font-family="{family}" font-size="{}" text-anchor="{}" dominant-baseline="{}""#,
            num(x),
            num(y),
            num(self.font_px(item.size)),
            anchor_attr(item.anchor),
            baseline_attr(item.baseline),
        );
        if item.bold {
            attrs.push_str(r#" font-weight="bold""#);
        }
        if item.italic {
            attrs.push_str(r#" font-style="italic""#);
        }
        format!("<text {attrs}>{}</text>", escape(&item.text))
    }

    fn render_segment(&self, surface: &Surface, panel: &Panel, s: &Segment) -> String {
        let (x1, y1) = surface.px(panel.to_figure(s.from));
        let (x2, y2) = surface.px(panel.to_figure(s.to));
        format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}"/>"#,
            num(x1),
            num(y1),
            num(x2),
            num(y2)
        )
    }

    fn render_panel(&self, surface: &Surface, panel: &Panel) -> String {
        let mut parts = Vec::with_capacity(panel.lines.len() + panel.texts.len() + 3);

        parts.push(format!(
            r#"<g fill="none" stroke="black" stroke-width="{}" stroke-linecap="square">"#,
            num(self.font_px(LINE_WIDTH_PT))
        ));
        for s in &panel.lines {
            parts.push(self.render_segment(surface, panel, s));
        }
        parts.push("</g>".to_string());

        for t in &panel.texts {
            let (x, y) = surface.px(panel.to_figure(t.position));
            parts.push(self.render_text(t, x, y));
        }

        if let Some(subtitle) = &panel.subtitle {
            let f = panel.frame;
            let (x, y) = surface.px(Position::new(f.left + f.width / 2.0, f.bottom + f.height));
            let item = TextItem {
                baseline: Baseline::Bottom,
                ..TextItem::new(subtitle.clone(), Position::new(0.0, 0.0), SUBTITLE_FONT_SIZE)
            };
            parts.push(self.render_text(&item, x, y - self.font_px(SUBTITLE_PAD_PT)));
        }

        parts.join("\n")
    }
}

impl Renderer for SvgRenderer {
    fn render(&self, figure: &Figure) -> String {
        let surface = Surface {
            w: figure.width * self.dpi,
            h: figure.height * self.dpi,
        };
        let (w, h) = (num(surface.w), num(surface.h));

        let mut parts = vec![
            format!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#
            ),
            format!(r#"<rect width="{w}" height="{h}" fill="white"/>"#),
        ];

        for panel in &figure.panels {
            parts.push(self.render_panel(&surface, panel));
        }

        if let Some(title) = &figure.title {
            let (x, y) = surface.px(title.position);
            parts.push(self.render_text(title, x, y));
        }

        if let Some(logo) = &figure.logo {
            let (x, y, lw, lh) = surface.rect(logo.frame);
            parts.push(format!(
                r#"<image x="{}" y="{}" width="{}" height="{}" preserveAspectRatio="xMidYMid meet" href="{}"/>"#,
                num(x),
                num(y),
                num(lw),
                num(lh),
                logo.image.data_uri()
            ));
        }

        if let Some(footer) = &figure.footer {
            let (x, y) = surface.px(footer.position);
            parts.push(self.render_text(footer, x, y));
        }

        parts.push("</svg>".to_string());
        parts.join("\n")
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
