//! Command-line side of vrs.
//!
//! `orchestration` holds the entry operations, which take every input
//! explicitly. Defaults that depend on the process environment are resolved
//! here, before an operation is called.

pub mod args;
pub mod orchestration;

pub use args::{Args, Command};

use std::path::PathBuf;

use crate::error::{Result, VrsError};

/// Returns `dir` when given, the current working directory otherwise.
pub fn base_dir_or_current(dir: Option<PathBuf>) -> Result<PathBuf> {
    match dir {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().map_err(|source| VrsError::Read {
            path: PathBuf::from("."),
            source,
        }),
    }
}
