//! Run configuration
//!
//! The only configurable input is where the assets live; whether the names
//! get sorted is the one behavioural switch.

use std::env::current_exe;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;
use shellexpand::tilde;

use crate::constants::DEFAULT_ASSETS_SUBPATH;
use crate::errors::{Result, file_system_error};

/// Resolved settings for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory whose entries are listed
    pub assets_dir: PathBuf,
    /// Sort the kept names instead of keeping enumeration order
    pub sort: bool,
}

impl Settings {
    /// Creates settings for an explicit assets directory
    pub fn new(assets_dir: impl Into<PathBuf>, sort: bool) -> Self {
        Settings {
            assets_dir: assets_dir.into(),
            sort,
        }
    }

    /// Builds settings from the raw `--assets` value, if any
    ///
    /// A leading `~` in the path is expanded to the home directory. Without a
    /// path, the executable-relative default location is used.
    ///
    /// # Errors
    /// Returns a `FileSystem` error if the default location is needed and the
    /// executable cannot be located
    pub fn resolve(assets: Option<&str>, sort: bool) -> Result<Self> {
        let assets_dir = match assets {
            Some(path) => PathBuf::from(tilde(path).as_ref()),
            None => default_assets_dir()?,
        };
        debug!("Assets directory: {}", assets_dir.display());

        Ok(Settings::new(assets_dir, sort))
    }
}

/// The assets directory next to the running executable
///
/// Symlinks are resolved first, so a linked binary still finds the assets
/// of the tree it actually lives in.
///
/// # Errors
/// Returns a `FileSystem` error if the executable path cannot be determined
pub fn default_assets_dir() -> Result<PathBuf> {
    let executable = current_exe()
        .map_err(|e| file_system_error(e, PathBuf::new(), "locate the running executable"))?;
    let executable = executable
        .canonicalize()
        .map_err(|e| file_system_error(e, executable.clone(), "resolve"))?;

    Ok(assets_dir_for(&executable)?.join(DEFAULT_ASSETS_SUBPATH))
}

fn assets_dir_for(executable: &Path) -> Result<&Path> {
    executable.parent().ok_or_else(|| {
        file_system_error(
            io::Error::new(io::ErrorKind::NotFound, "no parent directory"),
            executable.to_path_buf(),
            "resolve the directory of",
        )
    })
}
