pub mod cli;
pub mod config;
pub mod error;
pub mod files;
pub mod git;
pub mod logging;
pub mod substitution;
pub mod ui;
pub mod version;

pub use cli::orchestration::{
    bump, init, read_current_version, BumpOptions, BumpOutcome, InitOptions, ReadCurrentOptions,
};
pub use config::{Profile, SyncFile, SyncSpec, VersionConfig, CONFIG_FILE_NAME};
pub use error::{Result, VrsError};
