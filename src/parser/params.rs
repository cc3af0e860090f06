//! Parameter list parser — character-by-character state machine.
//!
//! Recovers `name`, `type` and `default` from the text between a command's
//! parentheses. Types come either from an explicit `:Type` or from a legacy
//! sigil suffix on the name (`%` Int, `#` Float, `!` Double, `$` String).
//! Defaults may be quoted strings containing commas and spaces.

use crate::model::{Param, DEFAULT_PARAM_TYPE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Name,
    Type,
    Default,
}

struct ParamParser {
    mode: Mode,
    in_string: bool,
    /// Param for the segment being read; `None` until its first character
    current: Option<Param>,
    params: Vec<Param>,
}

/// Parse a raw parameter list into ordered params.
///
/// Empty or whitespace-only input yields no params.
pub fn parse(raw: &str) -> Vec<Param> {
    let raw = raw.trim();
    let mut p = ParamParser {
        mode: Mode::Name,
        in_string: false,
        current: None,
        params: Vec::new(),
    };

    for ch in raw.chars() {
        p.feed(ch);
    }
    p.finish()
}

/// Render params as `name:type[ = default]` joined by `", "`.
pub fn render_pretty(params: &[Param]) -> String {
    params
        .iter()
        .map(|p| {
            if p.default.is_empty() {
                format!("{}:{}", p.name, p.ty)
            } else {
                format!("{}:{} = {}", p.name, p.ty, p.default)
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl ParamParser {
    fn feed(&mut self, ch: char) {
        let separator = ch == ',' && !(self.mode == Mode::Default && self.in_string);
        if separator {
            self.end_segment();
            return;
        }

        let mode = self.mode;
        let in_string = self.in_string;
        let param = self.current.get_or_insert_with(Param::default);

        match mode {
            Mode::Name => match ch {
                ':' => {
                    param.ty.clear();
                    self.mode = Mode::Type;
                }
                '=' => self.mode = Mode::Default,
                '%' | '#' | '!' | '$' => {
                    param.ty = sigil_type(ch).to_string();
                    self.mode = Mode::Type;
                }
                ' ' => {}
                _ => param.name.push(ch),
            },
            Mode::Type => match ch {
                '=' => self.mode = Mode::Default,
                ' ' => {}
                _ => param.ty.push(ch),
            },
            Mode::Default => {
                if ch == '"' {
                    param.default.push(ch);
                    self.in_string = !in_string;
                } else if in_string || ch != ' ' {
                    param.default.push(ch);
                }
            }
        }
    }

    /// Close the current segment; the next character starts a fresh param.
    fn end_segment(&mut self) {
        if let Some(param) = self.current.take() {
            self.params.push(param);
        }
        self.mode = Mode::Name;
        self.in_string = false;
    }

    fn finish(mut self) -> Vec<Param> {
        self.end_segment();
        self.params
    }
}

fn sigil_type(sigil: char) -> &'static str {
    match sigil {
        '#' => "Float",
        '!' => "Double",
        '$' => "String",
        _ => DEFAULT_PARAM_TYPE,
    }
}
