use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Command-line arguments of the `vrs` binary
#[derive(Parser, Debug)]
#[command(
    name = "vrs",
    version,
    about = "Bump the project version and keep it in sync across files"
)]
pub struct Args {
    #[arg(
        short,
        long,
        global = true,
        env = "VRS_DIR",
        help = "Project directory holding vrs.yml [default: current directory]"
    )]
    pub dir: Option<PathBuf>,

    #[arg(long, global = true, help = "Do not stage, commit or tag changes")]
    pub no_commit: bool,

    #[arg(long, global = true, help = "Do not push commits and tags")]
    pub no_push: bool,

    #[arg(short, long, global = true, help = "Print debug logs to stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Command {
    /// Create vrs.yml at version 0.0.0, replacing any existing one
    Init,

    /// Increment the minor version and update every sync target
    Bump {
        #[arg(
            short,
            long = "profile",
            value_delimiter = ',',
            help = "Activate a profile's sync targets (repeatable)"
        )]
        profiles: Vec<String>,
    },

    /// Print the current version
    Current,
}

impl Args {
    /// Commit mode, on unless `--no-commit`
    pub fn git_commit(&self) -> bool {
        !self.no_commit
    }

    /// Push mode, on unless `--no-push`
    pub fn git_push(&self) -> bool {
        !self.no_push
    }
}
