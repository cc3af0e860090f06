//! cmddoc — parse a pipe-delimited command catalog into a queryable index.
//!
//! Each catalog line documents one command:
//!
//! ```text
//! Abs:Int( n:Int ) : Absolute value|/docs/html/Modules/brl/math/index.html#Abs
//! ```
//!
//! [`parser`] turns lines into [`Command`] records, [`index::CommandIndex`]
//! caches them and answers case-insensitive name lookups, and [`render`]
//! formats results for terminals, popups and completion providers.

pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod parser;
pub mod rebuild;
pub mod render;

pub use config::{Config, RebuildCommand};
pub use error::{CmdDocError, Result};
pub use index::{CatalogSource, CommandIndex, FileCatalog};
pub use model::{Command, Filter, Param};
