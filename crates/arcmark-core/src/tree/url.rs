//! URL cleanup for `savedURL` values.

/// Normalizes an exported URL.
///
/// - Collapses the escaped double slash `\\//` into `//`
/// - Drops every remaining backslash
/// - Trims surrounding whitespace
///
/// Empty input stays empty; no default URL is substituted.
pub fn clean_url(raw: &str) -> String {
    let collapsed = raw.replace("\\\\//", "//");
    let stripped: String = collapsed.chars().filter(|&c| c != '\\').collect();
    stripped.trim().to_string()
}
