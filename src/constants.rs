/// Constants used throughout the application
///
/// This module centralises all constants used in the application to make
/// them easier to manage and update.

/// Extension an entry name must end with to be listed
///
/// The comparison is case-sensitive and literal.
pub const IMAGE_EXTENSION: &str = ".jpg";

/// Location of the assets directory relative to the executable's directory
pub const DEFAULT_ASSETS_SUBPATH: &str = "app/src/main/assets";

/// Opening line of the emitted array literal
pub const ARRAY_OPEN: &str = "{";

/// Closing line of the emitted array literal
pub const ARRAY_CLOSE: &str = "}";

/// Help text for the assets command-line option
pub const ASSETS_HELP: &str =
    "Directory to list [default: <executable dir>/app/src/main/assets]";

/// Help text for the sort command-line option
pub const SORT_HELP: &str = "Sort the listed names instead of keeping directory order";

/// Help text for the verbose command-line option
pub const VERBOSE_HELP: &str = "Increase verbosity level (can be used multiple times)";

/// Help text for the quiet command-line option
pub const QUIET_HELP: &str = "Only log errors";

/// Help text for the log file command-line option
pub const LOG_FILE_HELP: &str = "Also write log records to this file";

/// No log file unless one is requested
pub const LOG_FILE_DEFAULT: &str = "";
