//! Renderer module — trait-based format dispatch.

pub mod json;
pub mod markdown;
pub mod snippet;
pub mod text;

use crate::error::{CmdDocError, Result};
use crate::model::Command;

/// Trait for rendering lookup results into a specific output format.
pub trait Renderer {
    fn render(&self, commands: &[&Command]) -> Result<String>;
}

/// Create a renderer for the given format name.
pub fn create_renderer(format: &str) -> Result<Box<dyn Renderer>> {
    match format {
        "text" | "txt" => Ok(Box::new(text::TextRenderer)),
        "markdown" | "md" => Ok(Box::new(markdown::MarkdownRenderer)),
        "json" => Ok(Box::new(json::JsonRenderer)),
        "snippet" => Ok(Box::new(snippet::SnippetRenderer)),
        _ => Err(CmdDocError::UnknownFormat(format.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_formats() {
        for f in ["text", "txt", "markdown", "md", "json", "snippet"] {
            assert!(create_renderer(f).is_ok(), "{}", f);
        }
    }

    #[test]
    fn unknown_format() {
        let err = create_renderer("xml").err().unwrap();
        assert!(err.to_string().starts_with("unknown format: xml"));
    }
}
