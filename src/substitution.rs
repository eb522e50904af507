//! Rewrites the version inside sync target files.
//!
//! Two modes exist. Literal mode replaces every occurrence of the previous
//! version string. Pattern mode replaces every match of a regular expression,
//! for files where the version does not appear in its bare form.

use regex::bytes::{NoExpand, Regex};
use std::path::Path;
use tracing::{debug, warn};

use crate::config::SyncFile;
use crate::error::{Result, VrsError};
use crate::files;

/// What to look for when rewriting a file.
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution<'a> {
    /// Exact previous version string
    Literal(&'a str),
    /// Regular expression source
    Pattern(&'a str),
}

impl<'a> Substitution<'a> {
    /// Picks the mode for a sync target: pattern mode when it has a
    /// non-empty pattern, literal mode on `old_version` otherwise.
    pub fn for_file(file: &'a SyncFile, old_version: &'a str) -> Self {
        match file.pattern() {
            Some(pattern) => Substitution::Pattern(pattern),
            None => Substitution::Literal(old_version),
        }
    }

    fn mode(&self) -> &'static str {
        match self {
            Substitution::Literal(_) => "literal",
            Substitution::Pattern(_) => "pattern",
        }
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|source| VrsError::InvalidPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// Applies `substitution` to `content`, returning the new bytes and the number
/// of replacements made.
///
/// Content is matched as raw bytes, so files that are not valid UTF-8 are
/// rewritten with every unmatched byte left as it was. In pattern mode
/// `new_version` goes through the regex replacement syntax, so `$name` or
/// `${1}` inside it expand to capture groups.
pub fn substitute(
    content: &[u8],
    substitution: &Substitution<'_>,
    new_version: &str,
) -> Result<(Vec<u8>, usize)> {
    match *substitution {
        Substitution::Literal(old) => {
            if old.is_empty() {
                return Ok((content.to_vec(), 0));
            }
            let re = compile(&regex::escape(old))?;
            let count = re.find_iter(content).count();
            let replaced = re.replace_all(content, NoExpand(new_version.as_bytes()));
            Ok((replaced.into_owned(), count))
        }
        Substitution::Pattern(pattern) => {
            let re = compile(pattern)?;
            let count = re.find_iter(content).count();
            let replaced = re.replace_all(content, new_version.as_bytes());
            Ok((replaced.into_owned(), count))
        }
    }
}

/// Rewrites the file at `path` in place.
///
/// The file is written back even when nothing matched; zero replacements is
/// not an error.
///
/// # Returns
/// * `Ok(usize)` - Number of replacements made
/// * `Err` - If the file cannot be read or written, or the pattern is invalid
pub fn rewrite(path: &Path, substitution: &Substitution<'_>, new_version: &str) -> Result<usize> {
    let original = files::read_bytes(path)?;
    let (rewritten, count) = substitute(&original, substitution, new_version)?;

    if count == 0 {
        warn!(
            file = %path.display(),
            mode = substitution.mode(),
            "no version occurrence found"
        );
    } else {
        debug!(
            file = %path.display(),
            mode = substitution.mode(),
            replacements = count,
            "rewrote version"
        );
    }

    files::write_private(path, &rewritten)?;
    Ok(count)
}
