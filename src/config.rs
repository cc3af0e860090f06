//! Catalog and rebuild-command resolution.
//!
//! An explicit catalog path always wins; otherwise both the catalog and the
//! regeneration tool are located relative to an installation root.

use crate::error::{CmdDocError, Result};
use std::path::{Path, PathBuf};

/// Catalog location relative to an installation root.
pub const CATALOG_RELATIVE: &str = "docs/html/Modules/commands.txt";

/// Regeneration tool relative to an installation root.
pub const REBUILD_TOOL_RELATIVE: &str = "bin/makedocs";

/// Resolved locations for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub catalog: Option<PathBuf>,
    pub root: Option<PathBuf>,
}

/// A program plus arguments that regenerates the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RebuildCommand {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl Config {
    pub fn new(catalog: Option<PathBuf>, root: Option<PathBuf>) -> Self {
        Self { catalog, root }
    }

    /// Path of the catalog file.
    pub fn catalog_path(&self) -> Result<PathBuf> {
        if let Some(ref path) = self.catalog {
            return Ok(path.clone());
        }
        self.root
            .as_deref()
            .map(|root| root.join(CATALOG_RELATIVE))
            .ok_or(CmdDocError::NoCatalog)
    }

    /// Rebuild command: explicit `argv` first, then the tool under the root.
    pub fn rebuild_command(&self, argv: &[String]) -> Result<RebuildCommand> {
        if let Some((program, args)) = argv.split_first() {
            return Ok(RebuildCommand {
                program: PathBuf::from(program),
                args: args.to_vec(),
            });
        }
        match self.root.as_deref() {
            Some(root) => Ok(RebuildCommand {
                program: rebuild_tool(root),
                args: Vec::new(),
            }),
            None => Err(CmdDocError::NoRebuildCommand),
        }
    }
}

fn rebuild_tool(root: &Path) -> PathBuf {
    let tool = root.join(REBUILD_TOOL_RELATIVE);
    if cfg!(windows) {
        tool.with_extension("exe")
    } else {
        tool
    }
}
