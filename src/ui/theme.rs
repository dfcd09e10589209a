//! Design tokens for checktree output.
//!
//! All icons must be sourced from this module.

/// Unicode icons
pub mod icons {
    // Checkbox states
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    pub const WARNING: &str = "⚠";
}

/// ASCII fallbacks for terminals without Unicode
pub mod icons_ascii {
    // Checkbox states
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    pub const WARNING: &str = "[WARN]";
}

/// Pick the Unicode or ASCII variant of an icon
pub fn icon(unicode: &'static str, ascii: &'static str, supports_unicode: bool) -> &'static str {
    if supports_unicode {
        unicode
    } else {
        ascii
    }
}
