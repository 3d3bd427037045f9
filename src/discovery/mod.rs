//! Asset discovery module
//!
//! This module contains components for listing a directory and picking out
//! the image entries.

mod matcher;
mod scanner;

pub use matcher::{filter_by_extension, matches_extension};
pub use scanner::scan_directory;
