//! Data model for parsed catalog entries — format-agnostic.

use serde::Serialize;

/// Placeholder used when a catalog line carries no usable name.
pub const NO_NAME: &str = "No Name";

/// Type assumed for parameters without a sigil or explicit `:Type`.
pub const DEFAULT_PARAM_TYPE: &str = "Int";

/// One documented API entry (function or non-callable symbol).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Command {
    /// Display name, original casing
    pub real_name: String,
    /// Lowercased `real_name`, the lookup key (not unique)
    pub search_name: String,
    pub description: Option<String>,
    /// True if the signature had a parameter list
    pub is_function: bool,
    pub returns: Option<String>,
    /// Present only when `is_function`
    pub params: Option<Vec<Param>>,
    /// Unparsed text between the parentheses, kept for diagnostics
    pub params_raw: Option<String>,
    /// Canonical `name:type = default, ...` rendering of `params`
    pub params_pretty: String,
    pub url: String,
    /// In-page anchor, including the leading `#`
    pub url_location: Option<String>,
    /// Two-segment owner path derived from `url`, e.g. `brl.mod/math.mod`
    pub module: Option<String>,
}

/// One formal parameter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Param {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: String,
    pub default: String,
}

impl Default for Param {
    fn default() -> Self {
        Self {
            name: String::new(),
            ty: DEFAULT_PARAM_TYPE.to_string(),
            default: String::new(),
        }
    }
}

impl Command {
    /// True when the command takes at least one parameter.
    pub fn has_parameters(&self) -> bool {
        self.params.as_ref().is_some_and(|p| !p.is_empty())
    }

    /// Human help line: `Name[:Returns][(params)]`.
    pub fn signature(&self) -> String {
        let mut sig = self.real_name.clone();
        if let Some(ref ret) = self.returns {
            sig.push(':');
            sig.push_str(ret);
        }
        if self.is_function {
            sig.push('(');
            sig.push_str(&self.params_pretty);
            sig.push(')');
        }
        sig
    }

    /// Full documentation link, anchor included.
    pub fn link(&self) -> String {
        match self.url_location {
            Some(ref anchor) => format!("{}{}", self.url, anchor),
            None => self.url.clone(),
        }
    }

    /// Markdown help block. `None` when the record carries nothing beyond
    /// its name.
    pub fn markdown(&self) -> Option<String> {
        if self.description.is_none() && self.returns.is_none() && !self.is_function {
            return None;
        }

        let mut lines: Vec<String> = Vec::new();
        lines.push("```".to_string());
        lines.push(self.signature());
        lines.push("```".to_string());

        if let Some(ref desc) = self.description {
            lines.push(String::new());
            lines.push(desc.clone());
        }

        if let Some(ref params) = self.params {
            if !params.is_empty() {
                lines.push(String::new());
                for p in params {
                    if p.default.is_empty() {
                        lines.push(format!("* `{}`: {}", p.name, p.ty));
                    } else {
                        lines.push(format!("* `{}`: {} (default `{}`)", p.name, p.ty, p.default));
                    }
                }
            }
        }

        if let Some(ref ret) = self.returns {
            lines.push(String::new());
            lines.push(format!("**Returns** `{}`", ret));
        }

        if let Some(ref module) = self.module {
            lines.push(String::new());
            lines.push(format!("*Module* `{}`", module));
        }

        if !self.url.is_empty() {
            lines.push(String::new());
            lines.push(format!("[Documentation]({})", self.link()));
        }

        Some(lines.join("\n"))
    }
}

/// Inclusion-only predicates for index lookups. A `false` flag never
/// excludes a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    pub has_description: bool,
    pub has_markdown: bool,
    pub has_parameters: bool,
}

impl Filter {
    /// Check whether a command satisfies every requested predicate.
    pub fn matches(&self, cmd: &Command) -> bool {
        if self.has_description && cmd.description.is_none() {
            return false;
        }
        if self.has_parameters && !cmd.has_parameters() {
            return false;
        }
        if self.has_markdown && cmd.markdown().is_none() {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Command {
        Command {
            real_name: "Abs".to_string(),
            search_name: "abs".to_string(),
            description: Some("Absolute value".to_string()),
            is_function: true,
            returns: Some("Int".to_string()),
            params: Some(vec![Param {
                name: "n".to_string(),
                ..Param::default()
            }]),
            params_raw: Some("n".to_string()),
            params_pretty: "n:Int".to_string(),
            url: "/docs/html/Modules/brl/math/index.html".to_string(),
            url_location: Some("#Abs".to_string()),
            module: Some("brl/math".to_string()),
        }
    }

    #[test]
    fn param_defaults_to_int() {
        let p = Param::default();
        assert_eq!(p.ty, "Int");
        assert!(p.name.is_empty());
        assert!(p.default.is_empty());
    }

    #[test]
    fn signature_includes_returns_and_params() {
        assert_eq!(sample().signature(), "Abs:Int(n:Int)");
    }

    #[test]
    fn signature_of_constant() {
        let cmd = Command {
            real_name: "PI".to_string(),
            search_name: "pi".to_string(),
            ..Command::default()
        };
        assert_eq!(cmd.signature(), "PI");
    }

    #[test]
    fn markdown_absent_for_bare_symbol() {
        let cmd = Command {
            real_name: "PI".to_string(),
            search_name: "pi".to_string(),
            url: "/mod/brl.mod/math.mod/PI".to_string(),
            ..Command::default()
        };
        assert!(cmd.markdown().is_none());
    }

    #[test]
    fn markdown_lists_params_and_link() {
        let md = sample().markdown().unwrap();
        assert!(md.starts_with("```\nAbs:Int(n:Int)\n```"));
        assert!(md.contains("Absolute value"));
        assert!(md.contains("* `n`: Int"));
        assert!(md.contains("(/docs/html/Modules/brl/math/index.html#Abs)"));
    }

    #[test]
    fn default_filter_matches_everything() {
        let bare = Command::default();
        assert!(Filter::default().matches(&bare));
        assert!(Filter::default().matches(&sample()));
    }

    #[test]
    fn filter_requires_each_flag() {
        let bare = Command {
            is_function: true,
            params: Some(Vec::new()),
            ..Command::default()
        };
        let f = Filter {
            has_parameters: true,
            ..Filter::default()
        };
        assert!(!f.matches(&bare));
        assert!(f.matches(&sample()));

        let f = Filter {
            has_description: true,
            ..Filter::default()
        };
        assert!(!f.matches(&bare));
        assert!(f.matches(&sample()));
    }
}
