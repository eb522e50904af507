use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, VrsError};
use crate::files;

/// Name of the version file kept at the root of every tracked project.
pub const CONFIG_FILE_NAME: &str = "vrs.yml";

/// Version assigned by `vrs init`.
pub const INITIAL_VERSION: &str = "0.0.0";

/// The persisted version state of a project.
///
/// Holds the current version string, the files kept in sync with it on every
/// bump, and named profiles that contribute extra sync targets when active.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct VersionConfig {
    pub version: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncSpec>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub profiles: Vec<Profile>,
}

/// A set of files whose content tracks the current version.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SyncSpec {
    #[serde(default)]
    pub files: Vec<SyncFile>,
}

/// One sync target.
///
/// Without a pattern, every literal occurrence of the previous version is
/// replaced. With a pattern, every regex match is replaced instead.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct SyncFile {
    /// Path relative to the project base directory
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
}

impl SyncFile {
    /// Creates a literal-mode sync target.
    pub fn literal(name: impl Into<String>) -> Self {
        SyncFile {
            name: name.into(),
            pattern: None,
        }
    }

    /// Creates a pattern-mode sync target.
    pub fn with_pattern(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        SyncFile {
            name: name.into(),
            pattern: Some(pattern.into()),
        }
    }

    /// The configured pattern, treating an empty string as absent.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref().filter(|p| !p.is_empty())
    }
}

/// A named bundle of extra sync targets, applied only when active.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
pub struct Profile {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sync: Option<SyncSpec>,
}

impl VersionConfig {
    /// Creates a config holding only a version.
    pub fn new(version: impl Into<String>) -> Self {
        VersionConfig {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Sync targets for this bump: the global ones first, then those of each
    /// profile named in `active_profiles`, in the order profiles are declared.
    ///
    /// Profiles sharing a name all apply.
    pub fn sync_targets<'a>(&'a self, active_profiles: &'a [String]) -> Vec<&'a SyncFile> {
        let global = self.sync.iter();
        let profiles = self
            .profiles
            .iter()
            .filter(|profile| active_profiles.iter().any(|active| *active == profile.name))
            .filter_map(|profile| profile.sync.as_ref());

        global
            .chain(profiles)
            .flat_map(|spec| spec.files.iter())
            .collect()
    }
}

/// Path of the version file inside `base_dir`.
pub fn config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(CONFIG_FILE_NAME)
}

/// Loads the version file from `base_dir`.
///
/// # Returns
/// * `Ok(VersionConfig)` - The parsed document
/// * `Err(VrsError::NotFound)` - If `base_dir` has no version file
/// * `Err(VrsError::Read | VrsError::Parse)` - If the file is unreadable or malformed
pub fn load(base_dir: &Path) -> Result<VersionConfig> {
    let path = config_path(base_dir);

    let content = match files::read(&path) {
        Ok(content) => content,
        Err(VrsError::Read { source, .. }) if source.kind() == ErrorKind::NotFound => {
            return Err(VrsError::NotFound {
                dir: base_dir.to_path_buf(),
            });
        }
        Err(e) => return Err(e),
    };

    serde_yaml::from_str(&content).map_err(|source| VrsError::Parse { path, source })
}

/// Writes the whole document to `base_dir`, replacing any existing version file.
pub fn save(base_dir: &Path, config: &VersionConfig) -> Result<()> {
    let yaml = serde_yaml::to_string(config).map_err(VrsError::Serialize)?;
    files::write_private(&config_path(base_dir), yaml.as_bytes())
}
