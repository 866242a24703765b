//! Section header parsing

/// Extract the section name from a trimmed header line
///
/// The name is the substring strictly between the `[` and the first `]`,
/// with no further trimming; anything after the `]` is ignored. Returns
/// `None` when the line does not start with `[` or has no closing `]`.
pub fn section_name(line: &str) -> Option<&str> {
    let rest = line.strip_prefix('[')?;
    let end = rest.find(']')?;
    Some(&rest[..end])
}
