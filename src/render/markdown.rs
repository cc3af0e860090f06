//! Markdown renderer — help blocks for hover popups and docs pages.

use crate::error::Result;
use crate::model::Command;
use crate::render::Renderer;

pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, commands: &[&Command]) -> Result<String> {
        let mut output = String::new();
        for cmd in commands {
            // Bare symbols still get a heading so every match is visible
            let block = cmd
                .markdown()
                .unwrap_or_else(|| format!("```\n{}\n```", cmd.signature()));
            if !output.is_empty() {
                output.push_str("\n---\n\n");
            }
            output.push_str(&block);
            output.push('\n');
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn blocks_are_separated() {
        let a = parse_line("Sin#(angle#) : Sine|/mod/brl.mod/math.mod/Sin");
        let b = parse_line("PI|/mod/brl.mod/math.mod/PI");
        let out = MarkdownRenderer.render(&[&a, &b]).unwrap();
        assert!(out.starts_with("```\nSin#(angle:Float)\n```\n\nSine"));
        assert!(out.contains("\n---\n\n```\nPI\n```\n"));
        assert!(out.contains("*Module* `brl.mod/math.mod`"));
    }
}
