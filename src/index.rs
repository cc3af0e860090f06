//! In-memory command index over a catalog source.
//!
//! The index is a derived cache: it is filled wholesale from its source on
//! first use, marked stale after a rebuild, and refilled on the next
//! [`CommandIndex::ensure_populated`] call. It is never edited in place.

use crate::config::RebuildCommand;
use crate::error::{CmdDocError, Result};
use crate::model::{Command, Filter};
use crate::parser;
use crate::rebuild;
use std::fs;
use std::path::PathBuf;

/// Where the raw catalog text comes from.
pub trait CatalogSource {
    fn read(&self) -> Result<String>;

    /// Human-readable location for log messages.
    fn describe(&self) -> String;
}

/// Catalog stored in a file on disk.
#[derive(Debug, Clone)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl CatalogSource for FileCatalog {
    fn read(&self) -> Result<String> {
        fs::read_to_string(&self.path).map_err(|source| CmdDocError::CatalogRead {
            path: self.path.clone(),
            source,
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Default)]
enum IndexState {
    #[default]
    Empty,
    Populated(Vec<Command>),
    /// Catalog was regenerated; contents must be reloaded before use.
    Stale,
}

pub struct CommandIndex {
    source: Box<dyn CatalogSource>,
    state: IndexState,
}

impl CommandIndex {
    pub fn new(source: impl CatalogSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            state: IndexState::Empty,
        }
    }

    /// Index over a catalog file.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::new(FileCatalog::new(path))
    }

    /// Load the catalog unless the index already holds records.
    ///
    /// Read failures are logged, not returned. Returns whether the index is
    /// populated afterwards.
    pub fn ensure_populated(&mut self, notify_if_empty: bool) -> bool {
        if self.is_populated() {
            return true;
        }

        match self.source.read() {
            Ok(text) => {
                let commands = parser::parse_catalog(&text);
                tracing::debug!(
                    source = %self.source.describe(),
                    count = commands.len(),
                    "loaded catalog"
                );
                self.state = if commands.is_empty() {
                    IndexState::Empty
                } else {
                    IndexState::Populated(commands)
                };
            }
            Err(e) => {
                tracing::warn!("{}", e);
                self.state = IndexState::Empty;
            }
        }

        let populated = self.is_populated();
        if !populated && notify_if_empty {
            tracing::warn!(
                source = %self.source.describe(),
                "command index is empty; run `cmddoc rebuild` to regenerate the catalog"
            );
        }
        populated
    }

    /// Look up commands by case-insensitive exact name, in catalog order.
    ///
    /// With no name every record passing `filter` is returned. Several
    /// records can share a name when modules define the same symbol.
    pub fn find(&self, name: Option<&str>, filter: &Filter) -> Vec<&Command> {
        let needle = name.map(str::to_lowercase);
        self.commands()
            .iter()
            .filter(|cmd| needle.as_deref().map_or(true, |n| cmd.search_name == n))
            .filter(|cmd| filter.matches(cmd))
            .collect()
    }

    /// All loaded records, in catalog order.
    pub fn commands(&self) -> &[Command] {
        match self.state {
            IndexState::Populated(ref commands) => commands.as_slice(),
            IndexState::Empty | IndexState::Stale => &[],
        }
    }

    /// Drop the loaded records; the next `ensure_populated` reloads.
    pub fn invalidate(&mut self) {
        self.state = IndexState::Stale;
    }

    /// Regenerate the catalog, then invalidate regardless of the outcome.
    pub fn rebuild(&mut self, cmd: &RebuildCommand) -> Result<()> {
        let result = rebuild::regenerate(cmd);
        self.invalidate();
        result
    }

    pub fn is_populated(&self) -> bool {
        matches!(self.state, IndexState::Populated(ref c) if !c.is_empty())
    }

    pub fn len(&self) -> usize {
        self.commands().len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands().is_empty()
    }
}
