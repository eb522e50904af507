//! Whole-file write primitive shared by the version file and sync targets.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::{Result, VrsError};

/// Mode applied when a file is created. Existing files keep their mode.
#[cfg(unix)]
const OWNER_ONLY_MODE: u32 = 0o600;

/// Reads an entire file as UTF-8 text.
pub fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| VrsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads an entire file as raw bytes.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).map_err(|source| VrsError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Truncates `path` and writes `contents` in place.
///
/// Newly created files are readable and writable by the owner only. The write
/// is not atomic: an interrupted write can leave a truncated file behind.
pub fn write_private(path: &Path, contents: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(OWNER_ONLY_MODE);
    }

    let to_write_error = |source: std::io::Error| VrsError::Write {
        path: path.to_path_buf(),
        source,
    };

    let mut file = options.open(path).map_err(to_write_error)?;
    file.write_all(contents).map_err(to_write_error)?;

    Ok(())
}
