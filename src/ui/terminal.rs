//! Terminal capability detection.

/// Whether the terminal can draw the Unicode checkbox icons.
pub fn supports_unicode() -> bool {
    supports_unicode_impl(|key| std::env::var(key).ok())
}

fn supports_unicode_impl(get_env: impl Fn(&str) -> Option<String>) -> bool {
    let term = get_env("TERM").unwrap_or_default();
    if term.eq_ignore_ascii_case("dumb") {
        return false;
    }

    const KEYS: &[&str] = &["LC_ALL", "LC_CTYPE", "LANG"];
    for k in KEYS {
        if let Some(val) = get_env(k) {
            let v = val.to_lowercase();
            if v.contains("utf-8") || v.contains("utf8") {
                return true;
            }
            // First non-empty locale variable wins.
            if !v.is_empty() && v != "c" && v != "posix" {
                return false;
            }
        }
    }

    true
}
