//! Catalog line parser.
//!
//! A catalog line looks like
//!
//! ```text
//! Name[:Returns][(Params)][:Returns][ : Description] | ... | Path[#Anchor]
//! ```
//!
//! Fields are peeled off the left side in a fixed order (description,
//! parameter list, return type) so that a colon inside a description can
//! never be mistaken for a return type. Each step cuts the left side at the
//! byte offset where its field started. The return type may sit either
//! before the parameter list or after its closing parenthesis.

use crate::model::{Command, NO_NAME};
use crate::parser::params;

const DESCRIPTION_SEPARATOR: &str = " : ";

/// Parse one non-blank catalog line into a Command.
///
/// Never fails: malformed input degrades to partially-populated records.
pub fn parse_line(line: &str) -> Command {
    let mut fields = line.split('|');
    let left_side = fields.next().unwrap_or_default().trim();
    let right_side = fields.next_back().unwrap_or(line).trim();

    let mut cmd = Command::default();

    // URL and anchor
    match right_side.find('#') {
        Some(pos) => {
            cmd.url = right_side[..pos].to_string();
            cmd.url_location = Some(right_side[pos..].to_string());
        }
        None => cmd.url = right_side.to_string(),
    }
    cmd.module = module_from_url(&cmd.url);

    let mut left = left_side;
    // Text after the closing parenthesis of the parameter list
    let mut trailing = "";

    // Description
    if let Some(pos) = left.find(DESCRIPTION_SEPARATOR) {
        let desc = left[pos + DESCRIPTION_SEPARATOR.len()..].trim();
        if !desc.is_empty() {
            cmd.description = Some(desc.to_string());
        }
        left = &left[..pos];
    }

    // Parameter list
    if let Some(open) = left.find('(') {
        let inner = &left[open + 1..];
        let raw = match inner.rfind(')') {
            Some(close) => {
                trailing = &inner[close + 1..];
                &inner[..close]
            }
            None => inner,
        };
        let parsed = params::parse(raw);
        cmd.is_function = true;
        cmd.params_pretty = params::render_pretty(&parsed);
        cmd.params = Some(parsed);
        cmd.params_raw = Some(raw.to_string());
        left = &left[..open];
    }

    // Return type, before the parameter list or after it
    if let Some(pos) = left.find(':') {
        let ret = left[pos + 1..].trim();
        if !ret.is_empty() {
            cmd.returns = Some(ret.to_string());
        }
        left = &left[..pos];
    }
    if cmd.returns.is_none() {
        if let Some(pos) = trailing.find(':') {
            let ret = trailing[pos + 1..].trim();
            if !ret.is_empty() {
                cmd.returns = Some(ret.to_string());
            }
        }
    }

    let name = left.trim();
    cmd.real_name = if name.is_empty() {
        NO_NAME.to_string()
    } else {
        name.to_string()
    };
    cmd.search_name = cmd.real_name.to_lowercase();

    cmd
}

/// Derive the owning module from a documentation path.
///
/// Two tree shapes are known:
/// `/docs/html/Modules/<a>/<b>/...` gives `a/b`, and
/// `/mod/<a>/<b>/...` gives `a/b`.
pub fn module_from_url(url: &str) -> Option<String> {
    let segments: Vec<&str> = url.split('/').collect();
    let (first, second) = match segments.get(1) {
        Some(s) if s.eq_ignore_ascii_case("docs") => (4, 5),
        Some(s) if s.eq_ignore_ascii_case("mod") => (2, 3),
        _ => return None,
    };
    match (segments.get(first), segments.get(second)) {
        (Some(a), Some(b)) => Some(format!("{}/{}", a, b)),
        _ => None,
    }
}
