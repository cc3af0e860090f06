//! Completion snippets with numbered tab stops, e.g. `DrawRect(${1:x}, ${2:y})`.

use crate::error::Result;
use crate::model::Command;
use crate::render::Renderer;

pub struct SnippetRenderer;

impl Renderer for SnippetRenderer {
    fn render(&self, commands: &[&Command]) -> Result<String> {
        let mut out = String::new();
        for cmd in commands {
            out.push_str(&snippet(cmd));
            out.push('\n');
        }
        Ok(out)
    }
}

/// Insertion text for one command. Non-callable symbols insert their name.
pub fn snippet(cmd: &Command) -> String {
    let params = match cmd.params {
        Some(ref params) if cmd.is_function => params,
        _ => return cmd.real_name.clone(),
    };
    let stops: Vec<String> = params
        .iter()
        .enumerate()
        .map(|(i, p)| format!("${{{}:{}}}", i + 1, escape(&p.name)))
        .collect();
    format!("{}({})", cmd.real_name, stops.join(", "))
}

/// Escape characters with meaning inside a snippet placeholder.
fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '$' | '}' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_line;

    #[test]
    fn function_gets_tab_stops() {
        let cmd = parse_line("DrawRect(x#, y#, w#, h#)|/mod/brl.mod/max2d.mod/DrawRect");
        assert_eq!(snippet(&cmd), "DrawRect(${1:x}, ${2:y}, ${3:w}, ${4:h})");
    }

    #[test]
    fn no_params() {
        let cmd = parse_line("Flip()|/mod/brl.mod/graphics.mod/Flip");
        assert_eq!(snippet(&cmd), "Flip()");
    }

    #[test]
    fn constant_inserts_name() {
        let cmd = parse_line("PI:Double|/mod/brl.mod/math.mod/PI");
        assert_eq!(snippet(&cmd), "PI");
    }

    #[test]
    fn placeholder_text_is_escaped() {
        assert_eq!(escape("a$b}c"), "a\\$b\\}c");
    }
}
