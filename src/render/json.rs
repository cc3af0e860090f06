//! JSON renderer — structured output for tooling integration.
//!
//! Serializes the matched records directly, one array per lookup.

use crate::error::Result;
use crate::model::Command;
use crate::render::Renderer;

pub struct JsonRenderer;

impl Renderer for JsonRenderer {
    fn render(&self, commands: &[&Command]) -> Result<String> {
        let mut out = serde_json::to_string_pretty(commands)?;
        out.push('\n');
        Ok(out)
    }
}
