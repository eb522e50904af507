use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::error::{Result, VrsError};
use crate::version;

/// [super::Committer] backed by the `git` executable.
///
/// Every step runs as its own `git` process with the working directory pinned
/// to the project directory. Output goes straight to the terminal and only the
/// exit status decides success.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: PathBuf,
    work_dir: PathBuf,
}

impl GitCli {
    /// Runs `git` from `PATH` inside `work_dir`
    pub fn new(work_dir: impl Into<PathBuf>) -> Self {
        GitCli {
            program: PathBuf::from("git"),
            work_dir: work_dir.into(),
        }
    }

    /// Uses a specific executable instead of `git` from `PATH`
    pub fn with_program(mut self, program: impl Into<PathBuf>) -> Self {
        self.program = program.into();
        self
    }

    fn run(&self, args: &[&str]) -> Result<()> {
        let command_line = format!("git {}", args.join(" "));
        debug!(command = %command_line, dir = %self.work_dir.display(), "running");

        let status = Command::new(&self.program)
            .args(args)
            .current_dir(&self.work_dir)
            .status()
            .map_err(|e| VrsError::command(&command_line, e.to_string()))?;

        if status.success() {
            Ok(())
        } else {
            Err(VrsError::command(command_line, status.to_string()))
        }
    }
}

impl super::Committer for GitCli {
    fn stage(&self, path: &str) -> Result<()> {
        self.run(&["add", path])
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.run(&["commit", "-m", message])
    }

    fn tag(&self, version: &str) -> Result<()> {
        self.run(&["tag", &version::tag_name(version)])
    }

    fn push(&self) -> Result<()> {
        self.run(&["push"])
    }

    fn push_tags(&self) -> Result<()> {
        self.run(&["push", "--tags"])
    }
}
