use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CmdDocError {
    #[error("failed to read catalog {}: {source}", path.display())]
    CatalogRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to spawn rebuild command `{program}`: {source}")]
    RebuildSpawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("rebuild command `{program}` exited with {status}")]
    RebuildFailed { program: String, status: ExitStatus },

    #[error("no rebuild command configured; pass one after `rebuild --` or set --root")]
    NoRebuildCommand,

    #[error("no catalog configured; use --catalog or --root")]
    NoCatalog,

    #[error("unknown format: {0}. Use text, markdown, json, or snippet")]
    UnknownFormat(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CmdDocError>;
