//! Definition file loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{CheckTreeError, CheckTreeResult};

use super::types::{FilterDefinition, FilterOptions};

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load a definition and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> CheckTreeResult<(FilterDefinition, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse(&content, path)
}

/// Parse definition text; `path` only labels errors and warnings.
pub fn parse(content: &str, path: &Path) -> CheckTreeResult<(FilterDefinition, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let mut definition: FilterDefinition = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| CheckTreeError::InvalidDefinition {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    definition.options = with_env_overrides(definition.options);
    definition.options.validate()?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((definition, warnings))
}

/// Apply environment variable overrides (CHECKTREE_* prefix)
pub fn with_env_overrides(options: FilterOptions) -> FilterOptions {
    with_env_overrides_from(options, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut options: FilterOptions,
    get_env: impl Fn(&str) -> Option<String>,
) -> FilterOptions {
    // CHECKTREE_NO_COLLAPSE
    if let Some(val) = get_env("CHECKTREE_NO_COLLAPSE") {
        if val != "0" && val.to_lowercase() != "false" {
            options.replace_children_with_parent_on_all_checked = false;
        }
    }

    // CHECKTREE_OTHER_BUCKET
    if let Some(name) = get_env("CHECKTREE_OTHER_BUCKET") {
        if !name.trim().is_empty() {
            options.other_rename = Some(name.trim().to_string());
        }
    }

    options
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "options",
        "replace_children_with_parent_on_all_checked",
        "other_rename",
        "child_other_title_override",
        "bucket_names",
        "parent",
        "child",
        "filter",
        "key",
        "parents",
        "children",
        "mapping",
        "parent_sort",
        "child_sort",
        "labels",
        "include_other",
        "standalone",
        "value",
        "title",
        "group_with_children",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
