//! Array literal output
//!
//! Renders a list of names as a brace-delimited block of quoted strings:
//!
//! ```text
//! {
//! "earth.jpg",
//! "sushi.jpg"
//! }
//! ```

use std::io::Write;

use crate::constants::{ARRAY_CLOSE, ARRAY_OPEN};
use crate::errors::{Result, output_error};

/// Writes `names` to `writer` as an array literal
///
/// Every entry but the last gets a trailing comma. Names are written as-is,
/// without escaping.
///
/// # Errors
/// Returns an `Output` error if the writer fails
pub fn write_array<W: Write>(writer: &mut W, names: &[String]) -> Result<()> {
    writeln!(writer, "{ARRAY_OPEN}").map_err(output_error)?;
    for (index, name) in names.iter().enumerate() {
        let separator = if index + 1 < names.len() { "," } else { "" };
        writeln!(writer, "\"{name}\"{separator}").map_err(output_error)?;
    }
    writeln!(writer, "{ARRAY_CLOSE}").map_err(output_error)?;
    writer.flush().map_err(output_error)
}

/// Renders `names` as an array literal string
pub fn format_array(names: &[String]) -> String {
    let mut buffer = Vec::new();
    write_array(&mut buffer, names).expect("writing to a Vec cannot fail");
    String::from_utf8_lossy(&buffer).into_owned()
}
