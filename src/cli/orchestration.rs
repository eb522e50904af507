//! Entry operations: init, bump and read-current.
//!
//! Each operation loads the version file fresh from disk, acts, and persists
//! the whole document again. Steps take effect one after another and nothing
//! is rolled back, so a failure leaves every earlier step in place.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::config::{self, VersionConfig, CONFIG_FILE_NAME, INITIAL_VERSION};
use crate::error::Result;
use crate::git::Committer;
use crate::substitution::{self, Substitution};
use crate::version;

/// Commit message for a freshly created version file
pub const INIT_COMMIT_MESSAGE: &str = "Initialized versioon file.";

/// Commit message for the version file after a bump
pub const BUMP_COMMIT_MESSAGE: &str = "Version bump.";

/// Commit message for each synced file
pub const SYNC_COMMIT_MESSAGE: &str = "Bumped version.";

/// Arguments for [init]
#[derive(Debug, Clone, PartialEq)]
pub struct InitOptions {
    pub base_dir: PathBuf,
    pub git_commit: bool,
    pub git_push: bool,
}

/// Arguments for [bump]
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOptions {
    pub base_dir: PathBuf,
    pub git_commit: bool,
    pub git_push: bool,
    /// Profiles whose sync targets apply in addition to the global ones
    pub active_profiles: Vec<String>,
}

/// Arguments for [read_current_version]
///
/// The git flags are accepted for symmetry with the other operations and
/// have no effect.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadCurrentOptions {
    pub base_dir: PathBuf,
    pub git_commit: bool,
    pub git_push: bool,
}

/// Result of a successful bump
#[derive(Debug, Clone, PartialEq)]
pub struct BumpOutcome {
    pub previous_version: String,
    pub new_version: String,
    /// Sync targets rewritten, in processing order
    pub synced_files: Vec<String>,
}

/// Persists `config` and, in commit mode, records it as a tagged commit.
///
/// Sequence: write the version file, stage it, commit with `message`, tag
/// `v<version>`, then push commits and tags when `push` is set. Any failing
/// step stops the sequence.
fn save_and_commit<C: Committer>(
    git: &C,
    base_dir: &Path,
    config: &VersionConfig,
    commit: bool,
    push: bool,
    message: &str,
) -> Result<()> {
    config::save(base_dir, config)?;

    if !commit {
        return Ok(());
    }

    git.stage(CONFIG_FILE_NAME)?;
    git.commit(message)?;
    git.tag(&config.version)?;

    if push {
        git.push()?;
        git.push_tags()?;
    }

    Ok(())
}

/// Creates the version file at `0.0.0`.
///
/// An existing version file is overwritten, resetting its version and dropping
/// its sync targets and profiles.
pub fn init<C: Committer>(options: &InitOptions, git: &C) -> Result<()> {
    if config::config_path(&options.base_dir).exists() {
        warn!(
            dir = %options.base_dir.display(),
            "overwriting existing {}", CONFIG_FILE_NAME
        );
    }

    let config = VersionConfig::new(INITIAL_VERSION);
    save_and_commit(
        git,
        &options.base_dir,
        &config,
        options.git_commit,
        options.git_push,
        INIT_COMMIT_MESSAGE,
    )?;

    info!(version = INITIAL_VERSION, "initialized version file");
    Ok(())
}

/// Bumps the minor version and propagates it to every sync target.
///
/// Workflow:
/// 1. Load the version file and compute the next version
/// 2. Persist it and, in commit mode, commit, tag and optionally push
/// 3. Rewrite each global sync target, then each target of the active
///    profiles, committing every file separately in commit mode
///
/// The tag is created before the sync targets are rewritten, so the tagged
/// commit holds only the version file change.
///
/// # Returns
/// * `Ok(BumpOutcome)` - Versions before and after, plus the files synced
/// * `Err` - The first failing step; everything before it stays applied
pub fn bump<C: Committer>(options: &BumpOptions, git: &C) -> Result<BumpOutcome> {
    let mut config = config::load(&options.base_dir)?;

    let previous_version = config.version.clone();
    let new_version = version::bump(&previous_version)?;
    info!(from = %previous_version, to = %new_version, "bumping version");

    config.version = new_version.clone();
    save_and_commit(
        git,
        &options.base_dir,
        &config,
        options.git_commit,
        options.git_push,
        BUMP_COMMIT_MESSAGE,
    )?;

    let mut synced_files = Vec::new();
    for file in config.sync_targets(&options.active_profiles) {
        let substitution = Substitution::for_file(file, &previous_version);
        debug!(file = %file.name, ?substitution, "syncing version");

        substitution::rewrite(
            &options.base_dir.join(&file.name),
            &substitution,
            &new_version,
        )?;

        if options.git_commit {
            git.stage(&file.name)?;
            git.commit(SYNC_COMMIT_MESSAGE)?;
        }

        synced_files.push(file.name.clone());
    }

    Ok(BumpOutcome {
        previous_version,
        new_version,
        synced_files,
    })
}

/// Returns the version recorded in the version file, unchanged.
pub fn read_current_version(options: &ReadCurrentOptions) -> Result<String> {
    Ok(config::load(&options.base_dir)?.version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Profile, SyncFile, SyncSpec};
    use crate::git::{GitCall, MockCommitter};
    use crate::VrsError;
    use std::fs;
    use tempfile::TempDir;

    fn bump_options(dir: &TempDir, commit: bool, push: bool) -> BumpOptions {
        BumpOptions {
            base_dir: dir.path().to_path_buf(),
            git_commit: commit,
            git_push: push,
            active_profiles: Vec::new(),
        }
    }

    fn stage(path: &str) -> GitCall {
        GitCall::Stage(path.to_string())
    }

    fn commit(message: &str) -> GitCall {
        GitCall::Commit(message.to_string())
    }

    #[test]
    fn test_init_writes_initial_version_and_commits() {
        let dir = TempDir::new().unwrap();
        let git = MockCommitter::new();
        let options = InitOptions {
            base_dir: dir.path().to_path_buf(),
            git_commit: true,
            git_push: true,
        };

        init(&options, &git).unwrap();

        assert_eq!(config::load(dir.path()).unwrap(), VersionConfig::new("0.0.0"));
        assert_eq!(
            git.calls(),
            vec![
                stage("vrs.yml"),
                commit(INIT_COMMIT_MESSAGE),
                GitCall::Tag("v0.0.0".to_string()),
                GitCall::Push,
                GitCall::PushTags,
            ]
        );
    }

    #[test]
    fn test_init_overwrites_existing_config() {
        let dir = TempDir::new().unwrap();
        let mut existing = VersionConfig::new("4.2.0");
        existing.sync = Some(SyncSpec {
            files: vec![SyncFile::literal("README.md")],
        });
        config::save(dir.path(), &existing).unwrap();

        let options = InitOptions {
            base_dir: dir.path().to_path_buf(),
            git_commit: false,
            git_push: false,
        };
        init(&options, &MockCommitter::new()).unwrap();

        assert_eq!(config::load(dir.path()).unwrap(), VersionConfig::new("0.0.0"));
    }

    #[test]
    fn test_bump_without_commit_touches_no_git() {
        let dir = TempDir::new().unwrap();
        config::save(dir.path(), &VersionConfig::new("1.4.0")).unwrap();
        let git = MockCommitter::new();

        let outcome = bump(&bump_options(&dir, false, true), &git).unwrap();

        assert_eq!(outcome.previous_version, "1.4.0");
        assert_eq!(outcome.new_version, "1.5.0");
        assert!(outcome.synced_files.is_empty());
        assert!(git.calls().is_empty());
        assert_eq!(config::load(dir.path()).unwrap().version, "1.5.0");
    }

    #[test]
    fn test_bump_commit_without_push() {
        let dir = TempDir::new().unwrap();
        config::save(dir.path(), &VersionConfig::new("0.1.0")).unwrap();
        let git = MockCommitter::new();

        bump(&bump_options(&dir, true, false), &git).unwrap();

        assert_eq!(
            git.calls(),
            vec![
                stage("vrs.yml"),
                commit(BUMP_COMMIT_MESSAGE),
                GitCall::Tag("v0.2.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_bump_syncs_each_file_in_its_own_commit_after_tag() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "v0.1.0").unwrap();
        fs::write(dir.path().join("app.yml"), "version: 0.1.0").unwrap();

        let mut cfg = VersionConfig::new("0.1.0");
        cfg.sync = Some(SyncSpec {
            files: vec![
                SyncFile::literal("README.md"),
                SyncFile::with_pattern("app.yml", r"\d+\.\d+\.\d+"),
            ],
        });
        config::save(dir.path(), &cfg).unwrap();

        let git = MockCommitter::new();
        let outcome = bump(&bump_options(&dir, true, true), &git).unwrap();

        assert_eq!(outcome.synced_files, vec!["README.md", "app.yml"]);
        assert_eq!(
            git.calls(),
            vec![
                stage("vrs.yml"),
                commit(BUMP_COMMIT_MESSAGE),
                GitCall::Tag("v0.2.0".to_string()),
                GitCall::Push,
                GitCall::PushTags,
                stage("README.md"),
                commit(SYNC_COMMIT_MESSAGE),
                stage("app.yml"),
                commit(SYNC_COMMIT_MESSAGE),
            ]
        );
        assert_eq!(
            fs::read_to_string(dir.path().join("app.yml")).unwrap(),
            "version: 0.2.0"
        );
    }

    #[test]
    fn test_bump_applies_only_active_profiles() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("docs.md"), "0.1.0").unwrap();
        fs::write(dir.path().join("web.json"), "0.1.0").unwrap();

        let mut cfg = VersionConfig::new("0.1.0");
        cfg.profiles = vec![
            Profile {
                name: "docs".to_string(),
                sync: Some(SyncSpec {
                    files: vec![SyncFile::literal("docs.md")],
                }),
            },
            Profile {
                name: "web".to_string(),
                sync: Some(SyncSpec {
                    files: vec![SyncFile::literal("web.json")],
                }),
            },
        ];
        config::save(dir.path(), &cfg).unwrap();

        let mut options = bump_options(&dir, false, false);
        options.active_profiles = vec!["web".to_string()];
        let outcome = bump(&options, &MockCommitter::new()).unwrap();

        assert_eq!(outcome.synced_files, vec!["web.json"]);
        assert_eq!(fs::read_to_string(dir.path().join("docs.md")).unwrap(), "0.1.0");
        assert_eq!(fs::read_to_string(dir.path().join("web.json")).unwrap(), "0.2.0");
    }

    #[test]
    fn test_bump_malformed_version_leaves_file_untouched() {
        let dir = TempDir::new().unwrap();
        config::save(dir.path(), &VersionConfig::new("1.x.0")).unwrap();
        let before = fs::read(config::config_path(dir.path())).unwrap();
        let git = MockCommitter::new();

        let err = bump(&bump_options(&dir, true, true), &git).unwrap_err();

        assert!(matches!(err, VrsError::MalformedVersion { .. }));
        assert_eq!(fs::read(config::config_path(dir.path())).unwrap(), before);
        assert!(git.calls().is_empty());
    }

    #[test]
    fn test_bump_tag_failure_keeps_persisted_version() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("README.md"), "0.1.0").unwrap();
        let mut cfg = VersionConfig::new("0.1.0");
        cfg.sync = Some(SyncSpec {
            files: vec![SyncFile::literal("README.md")],
        });
        config::save(dir.path(), &cfg).unwrap();

        let git = MockCommitter::failing_on_any(GitCall::Tag(String::new()));
        let err = bump(&bump_options(&dir, true, true), &git).unwrap_err();

        assert!(matches!(err, VrsError::CommandFailure { .. }));
        assert_eq!(config::load(dir.path()).unwrap().version, "0.2.0");
        assert_eq!(fs::read_to_string(dir.path().join("README.md")).unwrap(), "0.1.0");
        assert_eq!(
            git.calls(),
            vec![
                stage("vrs.yml"),
                commit(BUMP_COMMIT_MESSAGE),
                GitCall::Tag("v0.2.0".to_string()),
            ]
        );
    }

    #[test]
    fn test_bump_sync_failure_keeps_earlier_files() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "0.1.0").unwrap();
        fs::write(dir.path().join("c.txt"), "0.1.0").unwrap();
        let mut cfg = VersionConfig::new("0.1.0");
        cfg.sync = Some(SyncSpec {
            files: vec![
                SyncFile::literal("a.txt"),
                SyncFile::literal("missing.txt"),
                SyncFile::literal("c.txt"),
            ],
        });
        config::save(dir.path(), &cfg).unwrap();

        let err = bump(&bump_options(&dir, false, false), &MockCommitter::new()).unwrap_err();

        assert!(matches!(err, VrsError::Read { .. }));
        assert_eq!(fs::read_to_string(dir.path().join("a.txt")).unwrap(), "0.2.0");
        assert_eq!(fs::read_to_string(dir.path().join("c.txt")).unwrap(), "0.1.0");
    }

    #[test]
    fn test_bump_without_config_is_not_found() {
        let dir = TempDir::new().unwrap();
        let err = bump(&bump_options(&dir, true, true), &MockCommitter::new()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_current_version() {
        let dir = TempDir::new().unwrap();
        config::save(dir.path(), &VersionConfig::new("2.9.beta")).unwrap();

        let options = ReadCurrentOptions {
            base_dir: dir.path().to_path_buf(),
            git_commit: true,
            git_push: true,
        };
        assert_eq!(read_current_version(&options).unwrap(), "2.9.beta");
    }
}
