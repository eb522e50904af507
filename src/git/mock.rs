use std::sync::Mutex;

use crate::error::{Result, VrsError};
use crate::git::Committer;

/// One recorded version-control step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitCall {
    Stage(String),
    Commit(String),
    Tag(String),
    Push,
    PushTags,
}

impl GitCall {
    fn same_step(&self, other: &GitCall) -> bool {
        std::mem::discriminant(self) == std::mem::discriminant(other)
    }
}

/// Committer for testing without a git binary.
///
/// Records every call in order. A call matching the configured failure step is
/// recorded and then fails.
#[derive(Debug, Default)]
pub struct MockCommitter {
    calls: Mutex<Vec<GitCall>>,
    fail_on: Option<GitCall>,
    fail_any: bool,
}

impl MockCommitter {
    /// Create a committer where every step succeeds
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail on the call equal to `call`
    pub fn failing_on(call: GitCall) -> Self {
        MockCommitter {
            fail_on: Some(call),
            ..Default::default()
        }
    }

    /// Fail on the first call of the same kind as `call`, whatever its argument
    pub fn failing_on_any(call: GitCall) -> Self {
        MockCommitter {
            fail_on: Some(call),
            fail_any: true,
            ..Default::default()
        }
    }

    /// Calls recorded so far
    pub fn calls(&self) -> Vec<GitCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: GitCall) -> Result<()> {
        let fails = match &self.fail_on {
            Some(target) if self.fail_any => target.same_step(&call),
            Some(target) => *target == call,
            None => false,
        };

        let description = format!("{:?}", call);
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }

        if fails {
            Err(VrsError::command(description, "injected failure"))
        } else {
            Ok(())
        }
    }
}

impl Committer for MockCommitter {
    fn stage(&self, path: &str) -> Result<()> {
        self.record(GitCall::Stage(path.to_string()))
    }

    fn commit(&self, message: &str) -> Result<()> {
        self.record(GitCall::Commit(message.to_string()))
    }

    fn tag(&self, version: &str) -> Result<()> {
        self.record(GitCall::Tag(crate::version::tag_name(version)))
    }

    fn push(&self) -> Result<()> {
        self.record(GitCall::Push)
    }

    fn push_tags(&self) -> Result<()> {
        self.record(GitCall::PushTags)
    }
}
