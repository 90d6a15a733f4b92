//! Secret file probing.
//!
//! An option's value may be read from a file whose path is given by an
//! environment variable. [`first_existing`] picks that file among several
//! ranked candidates.

use std::io;
use std::path::{Path, PathBuf};

use tracing::debug;

/// Outcome of checking a single candidate path.
#[derive(Debug)]
pub enum ProbeOutcome {
    /// A filesystem entry exists at the path.
    Found,
    /// Nothing exists at the path.
    Absent,
    /// The path could not be checked (permission denied, broken symlink,
    /// too many links, ...).
    Inaccessible(io::Error),
}

impl ProbeOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, ProbeOutcome::Found)
    }
}

/// Check whether a filesystem entry exists at `path`.
///
/// Symlinks are followed, so a dangling link is reported as
/// [`ProbeOutcome::Absent`].
pub fn probe_path(path: &Path) -> ProbeOutcome {
    match std::fs::metadata(path) {
        Ok(_) => ProbeOutcome::Found,
        Err(e) if e.kind() == io::ErrorKind::NotFound => ProbeOutcome::Absent,
        Err(e) => ProbeOutcome::Inaccessible(e),
    }
}

/// Return the first candidate that exists, scanning left to right.
///
/// Empty candidates are skipped. A candidate that cannot be checked is
/// treated exactly like one that does not exist; the error is only logged.
/// Returns `None` when no candidate exists or the input is empty.
///
/// # Examples
///
/// ```
/// use tierflag_core::probe::first_existing;
///
/// assert_eq!(first_existing(["", ""]), None);
/// ```
pub fn first_existing<I, S>(candidates: I) -> Option<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for candidate in candidates {
        let candidate = candidate.as_ref();
        if candidate.is_empty() {
            continue;
        }

        let path = Path::new(candidate);
        match probe_path(path) {
            ProbeOutcome::Found => return Some(path.to_path_buf()),
            ProbeOutcome::Absent => {}
            ProbeOutcome::Inaccessible(e) => {
                debug!(
                    event = "core.probe.inaccessible",
                    path = candidate,
                    error = %e
                );
            }
        }
    }
    None
}

/// Conventional location of a per-user default value file:
/// `<config_dir>/<app>/defaults/<name>`.
///
/// Returns `None` when the platform has no configuration directory.
pub fn defaults_path(app: &str, name: &str) -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(app).join("defaults").join(name))
}
