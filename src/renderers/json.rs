//! JSON dump of a figure, for consumers that draw it themselves.
//!
//! Each panel also carries a `matches` list derived from its match tree.

use serde_json::{Value, json};

use super::Renderer;
use crate::figure::Figure;
use crate::layout::MatchTree;

pub struct JsonRenderer {
    pub pretty: bool,
}

impl JsonRenderer {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    fn to_value(figure: &Figure) -> serde_json::Result<Value> {
        let mut value = serde_json::to_value(figure)?;
        for (i, panel) in figure.panels.iter().enumerate() {
            let matches = MatchTree::from_layout(&panel.layout).matches();
            value["panels"][i]["matches"] = serde_json::to_value(matches)?;
        }
        Ok(value)
    }
}

impl Renderer for JsonRenderer {
    fn render(&self, figure: &Figure) -> String {
        let out = Self::to_value(figure).and_then(|v| {
            if self.pretty {
                serde_json::to_string_pretty(&v)
            } else {
                serde_json::to_string(&v)
            }
        });
        out.unwrap_or_else(|e| {
            log::error!("figure serialization failed: {e}");
            json!({ "error": e.to_string() }).to_string()
        })
    }
}
