use std::path::Path;

use crate::config::ConfigWarning;

use super::theme::{icon, icons, icons_ascii};

/// Format unknown-key warnings from a definition file, one block per key.
pub fn format_config_warnings(
    path: &Path,
    warnings: &[ConfigWarning],
    supports_unicode: bool,
) -> String {
    let warn = icon(icons::WARNING, icons_ascii::WARNING, supports_unicode);
    let mut out = String::new();
    for w in warnings {
        match w.line {
            Some(line) => out.push_str(&format!(
                "{warn} Unknown key '{}' in {}:{}\n",
                w.key,
                path.display(),
                line
            )),
            None => out.push_str(&format!(
                "{warn} Unknown key '{}' in {}\n",
                w.key,
                path.display()
            )),
        }

        if let Some(suggestion) = &w.suggestion {
            out.push_str(&format!("   Did you mean '{}'?\n", suggestion));
        }
    }
    out
}

pub fn print_config_warnings(path: &Path, warnings: &[ConfigWarning], supports_unicode: bool) {
    eprint!("{}", format_config_warnings(path, warnings, supports_unicode));
}
