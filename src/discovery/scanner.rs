//! Directory scanning functionality
//!
//! This module contains the function that enumerates a directory's entries.

use std::fs::read_dir;
use std::io;
use std::path::Path;

use log::{debug, trace, warn};

use crate::constants::IMAGE_EXTENSION;
use crate::errors::{Result, file_system_error};

/// Scans a directory and returns the names of all its entries
///
/// Names come back in the order the filesystem enumerates them. Nothing is
/// filtered here: hidden entries, subdirectories and special files are all
/// returned. Entry names that are not valid Unicode are skipped with a
/// warning, unless they end with the image extension: such an entry would
/// be listed but cannot be printed back verbatim, so the scan fails.
///
/// # Arguments
/// * `directory` - The directory to scan
///
/// # Returns
/// * `Result<Vec<String>>` - The entry names or an error
///
/// # Errors
/// Returns a `FileSystem` error if the directory cannot be opened, one of
/// its entries cannot be read, or an image entry has a non-Unicode name
pub fn scan_directory(directory: &Path) -> Result<Vec<String>> {
    debug!("Scanning directory: {}", directory.display());

    let entries = read_dir(directory)
        .map_err(|e| file_system_error(e, directory.to_path_buf(), "read directory"))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| file_system_error(e, directory.to_path_buf(), "read entry in"))?;
        match entry.file_name().into_string() {
            Ok(name) => {
                trace!("Found entry: {name}");
                names.push(name);
            }
            Err(raw) if raw.as_encoded_bytes().ends_with(IMAGE_EXTENSION.as_bytes()) => {
                return Err(file_system_error(
                    io::Error::new(
                        io::ErrorKind::InvalidData,
                        format!("image name is not valid Unicode: {raw:?}"),
                    ),
                    directory.to_path_buf(),
                    "read entry in",
                ));
            }
            Err(raw) => warn!("Skipping entry with non-Unicode name: {raw:?}"),
        }
    }

    debug!("Found {} entries in directory", names.len());

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{File, create_dir};
    use tempfile::tempdir;

    #[test]
    fn test_scan_directory_returns_every_entry() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("a.jpg")).expect("Failed to create file");
        File::create(temp_dir.path().join(".hidden")).expect("Failed to create file");
        create_dir(temp_dir.path().join("nested")).expect("Failed to create directory");

        let mut names = scan_directory(temp_dir.path()).unwrap();
        names.sort();

        assert_eq!(names, vec![".hidden", "a.jpg", "nested"]);
    }

    #[test]
    fn test_scan_empty_directory() {
        let temp_dir = tempdir().expect("Failed to create temp directory");

        assert!(scan_directory(temp_dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_scan_missing_directory() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let missing = temp_dir.path().join("does_not_exist");

        let error = scan_directory(&missing).unwrap_err();
        assert!(error.is_file_system());
        assert!(error.to_string().contains("does_not_exist"));
    }

    #[test]
    fn test_scan_file_instead_of_directory() {
        let temp_dir = tempdir().expect("Failed to create temp directory");
        let file = temp_dir.path().join("not_a_dir.jpg");
        File::create(&file).expect("Failed to create file");

        let error = scan_directory(&file).unwrap_err();
        assert!(error.is_file_system());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_fails_on_non_unicode_image_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempdir().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("ok.jpg")).expect("Failed to create file");
        File::create(temp_dir.path().join(OsStr::from_bytes(b"caf\xe9.jpg")))
            .expect("Failed to create file");

        let error = scan_directory(temp_dir.path()).unwrap_err();
        assert!(error.is_file_system());
        assert!(error.to_string().contains("not valid Unicode"));
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_scan_skips_non_unicode_non_image_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let temp_dir = tempdir().expect("Failed to create temp directory");
        File::create(temp_dir.path().join("ok.jpg")).expect("Failed to create file");
        File::create(temp_dir.path().join(OsStr::from_bytes(b"caf\xe9.png")))
            .expect("Failed to create file");

        assert_eq!(scan_directory(temp_dir.path()).unwrap(), vec!["ok.jpg"]);
    }
}
