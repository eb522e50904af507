//! Version-control abstraction layer
//!
//! The bump workflow only ever needs five primitive steps from version
//! control: stage a file, commit, tag, push, and push tags. They are modelled
//! by the [Committer] trait so the workflow can run against a real `git`
//! binary or a recording fake.
//!
//! - [cli::GitCli]: spawns `git` in the project directory
//! - [mock::MockCommitter]: records calls, optionally failing on one step
//!
//! ```rust
//! # use vrs::git::Committer;
//! # fn example<C: Committer>(git: &C) -> vrs::Result<()> {
//! git.stage("vrs.yml")?;
//! git.commit("Version bump.")?;
//! git.tag("0.2.0")?;
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod mock;

pub use cli::GitCli;
pub use mock::{GitCall, MockCommitter};

use crate::error::Result;

/// Primitive version-control steps.
///
/// Each step is independent and may fail on its own. A failed step is never
/// retried and nothing already applied is undone.
pub trait Committer: Send + Sync {
    /// Stage a single file, given relative to the project directory
    fn stage(&self, path: &str) -> Result<()>;

    /// Commit everything currently staged
    fn commit(&self, message: &str) -> Result<()>;

    /// Create the tag `v<version>` on the current commit
    fn tag(&self, version: &str) -> Result<()>;

    /// Publish commits to the configured remote
    fn push(&self) -> Result<()>;

    /// Publish tags to the configured remote
    fn push_tags(&self) -> Result<()>;
}
