use std::collections::HashSet;

/// Compute the extensions that are desired but not installed.
///
/// Both inputs are sorted first so the result (and any debug output) is
/// deterministic. The result:
/// - follows the sorted order of `desired`,
/// - never contains the empty string (blank lines in the list),
/// - holds each identifier once even if `desired` repeats it.
///
/// Comparison is exact and case-sensitive; `installed` is expected to be
/// trimmed already.
pub fn missing_extensions(mut desired: Vec<String>, mut installed: Vec<String>) -> Vec<String> {
    desired.sort();
    installed.sort();

    let installed: HashSet<&str> = installed.iter().map(String::as_str).collect();
    let mut missing: Vec<String> = desired
        .into_iter()
        .filter(|ext| !ext.is_empty() && !installed.contains(ext.as_str()))
        .collect();
    missing.dedup();
    missing
}
