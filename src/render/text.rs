//! Plain-text renderer for terminal output.

use crate::error::Result;
use crate::model::Command;
use crate::render::Renderer;

pub struct TextRenderer;

impl Renderer for TextRenderer {
    fn render(&self, commands: &[&Command]) -> Result<String> {
        let mut lines: Vec<String> = Vec::new();
        for cmd in commands {
            lines.push(cmd.signature());
            if let Some(ref module) = cmd.module {
                lines.push(format!("  Module: {}", module));
            }
            if let Some(ref desc) = cmd.description {
                lines.push(format!("  {}", desc));
            }
            if !cmd.url.is_empty() {
                lines.push(format!("  {}", cmd.link()));
            }
        }
        let mut out = lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn renders_signature_module_description_and_link() {
        let cmd = parse_line("Abs:Int( n:Int ) : Absolute value|/docs/html/Modules/brl/math/index.html#Abs");
        let out = TextRenderer.render(&[&cmd]).unwrap();
        assert_eq!(
            out,
            "Abs:Int(n:Int)\n  Module: brl/math\n  Absolute value\n  /docs/html/Modules/brl/math/index.html#Abs\n"
        );
    }

    #[test]
    fn nothing_to_render() {
        assert_eq!(TextRenderer.render(&[]).unwrap(), "");
    }
}
