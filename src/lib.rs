//! Lists the image assets of a directory and prints them as an array literal
//!
//! ```no_run
//! use art_file_finder::prelude::*;
//!
//! let settings = Settings::new("app/src/main/assets", false);
//! let count = run(&settings, std::io::stdout().lock())?;
//! # Ok::<(), Error>(())
//! ```

pub mod cli;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod logging;
pub mod output;
pub mod settings;
pub mod workflow;

pub mod prelude {
    pub use crate::cli::{get_log_file, get_matches, get_settings, get_verbosity};
    pub use crate::errors::{Error, Result, file_system_error, output_error};
    pub use crate::logging::{LogLevel, init_logger};
    pub use crate::output::{format_array, write_array};
    pub use crate::settings::{Settings, default_assets_dir};
    pub use crate::workflow::{list_assets, run};
}
