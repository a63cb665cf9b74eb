//! PEP 503 project name normalization

/// Lowercases `name` and collapses every run of `-`, `_` and `.` into one `-`
///
/// Idempotent: normalizing an already normalized name returns it unchanged.
pub fn normalize_package_name(name: &str) -> String {
    let mut normalized = String::with_capacity(name.len());
    let mut in_separator = false;

    for c in name.chars() {
        if matches!(c, '-' | '_' | '.') {
            if !in_separator {
                normalized.push('-');
            }
            in_separator = true;
        } else {
            normalized.extend(c.to_lowercase());
            in_separator = false;
        }
    }

    normalized
}
