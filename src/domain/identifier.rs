/// Derives a template identifier from a folder or display name.
///
/// Lowercases the name and replaces every character outside `a-z`, `0-9`
/// and `-` with `-`. Runs of symbols are not collapsed.
pub fn normalize_identifier(name: &str) -> String {
    name.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' {
                c
            } else {
                '-'
            }
        })
        .collect()
}
