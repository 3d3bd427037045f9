//! Extension matching functionality

/// Checks whether an entry name ends with the given extension
///
/// The comparison is a literal, case-sensitive suffix match on the whole
/// name, so a file called exactly `.jpg` matches `.jpg`.
pub fn matches_extension(name: &str, extension: &str) -> bool {
    name.ends_with(extension)
}

/// Keeps the names ending with `extension`, preserving their order
pub fn filter_by_extension<I>(names: I, extension: &str) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    names
        .into_iter()
        .filter(|name| matches_extension(name, extension))
        .collect()
}
