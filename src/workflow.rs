//! Listing workflow
//!
//! Orchestrates a run: scan the assets directory, keep the image names,
//! optionally sort them, and write the array literal.

use std::io::Write;

use log::{debug, info};

use crate::constants::IMAGE_EXTENSION;
use crate::discovery::{filter_by_extension, scan_directory};
use crate::errors::Result;
use crate::output::write_array;
use crate::settings::Settings;

/// Collects the image names from the configured assets directory
///
/// # Errors
/// Returns a `FileSystem` error if the directory cannot be listed
pub fn list_assets(settings: &Settings) -> Result<Vec<String>> {
    let entries = scan_directory(&settings.assets_dir)?;
    let total = entries.len();

    let mut images = filter_by_extension(entries, IMAGE_EXTENSION);
    debug!(
        "Kept {} of {} entries ending in {}",
        images.len(),
        total,
        IMAGE_EXTENSION
    );

    if settings.sort {
        images.sort();
    }

    Ok(images)
}

/// Lists the assets and writes them to `writer` as an array literal
///
/// # Returns
/// * `Result<usize>` - The number of names written
///
/// # Errors
/// Returns a `FileSystem` error if the directory cannot be listed, or an
/// `Output` error if writing fails. Nothing is written when listing fails.
pub fn run<W: Write>(settings: &Settings, mut writer: W) -> Result<usize> {
    let images = list_assets(settings)?;
    write_array(&mut writer, &images)?;

    info!(
        "Listed {} image(s) from {}",
        images.len(),
        settings.assets_dir.display()
    );

    Ok(images.len())
}
