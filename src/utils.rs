/// Join strings with a separator
pub fn join_strings<S: AsRef<str>>(strings: &[S], separator: &str) -> String {
    strings
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<&str>>()
        .join(separator)
}

/// Append an extension to a base name
pub fn with_extension(base: &str, extension: &str) -> String {
    format!("{}.{}", base, extension)
}
