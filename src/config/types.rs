//! Configuration type definitions

use std::collections::{BTreeMap, HashMap};
use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::{Enumeration, Labels, LookupCache, Mapping, SortWeights};
use crate::error::{CheckTreeError, CheckTreeResult};
use crate::filter::{NestedFilter, StandaloneFilter};

use super::loader::{self, ConfigWarning};

/// Bucket and key of the other pseudo-child unless renamed
pub const OTHER_DEFAULT: &str = "OTHER";

/// Label of the other pseudo-child unless overridden
pub const OTHER_LABEL_DEFAULT: &str = "Other";

fn default_true() -> bool {
    true
}

fn default_parent_bucket() -> String {
    "parent".to_string()
}

fn default_child_bucket() -> String {
    "child".to_string()
}

/// Names of the parent and child buckets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketNames {
    #[serde(default = "default_parent_bucket")]
    pub parent: String,

    #[serde(default = "default_child_bucket")]
    pub child: String,
}

impl Default for BucketNames {
    fn default() -> Self {
        Self {
            parent: default_parent_bucket(),
            child: default_child_bucket(),
        }
    }
}

/// Whether parents get an "other" pseudo-child.
///
/// Accepts either form in TOML:
///   include_other = true
///   include_other = { DOG = true }
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IncludeOther {
    All(bool),
    PerParent(BTreeMap<String, bool>),
}

impl Default for IncludeOther {
    fn default() -> Self {
        IncludeOther::All(false)
    }
}

impl IncludeOther {
    /// Other pseudo-child shown under `parent_value`
    pub fn for_parent(&self, parent_value: &str) -> bool {
        match self {
            IncludeOther::All(enabled) => *enabled,
            IncludeOther::PerParent(parents) => parents.get(parent_value).copied().unwrap_or(false),
        }
    }

    /// Other pseudo-child shown under at least one parent
    pub fn any(&self) -> bool {
        match self {
            IncludeOther::All(enabled) => *enabled,
            IncludeOther::PerParent(parents) => parents.values().any(|enabled| *enabled),
        }
    }
}

impl From<bool> for IncludeOther {
    fn from(enabled: bool) -> Self {
        IncludeOther::All(enabled)
    }
}

/// Store-wide filter options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOptions {
    /// Collapse a fully checked child group into its parent
    #[serde(default = "default_true")]
    pub replace_children_with_parent_on_all_checked: bool,

    /// Name of the other bucket and key of the other pseudo-child
    #[serde(default)]
    pub other_rename: Option<String>,

    /// Label shown for the other pseudo-child
    #[serde(default)]
    pub child_other_title_override: Option<String>,

    #[serde(default)]
    pub bucket_names: BucketNames,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            replace_children_with_parent_on_all_checked: true,
            other_rename: None,
            child_other_title_override: None,
            bucket_names: BucketNames::default(),
        }
    }
}

impl FilterOptions {
    pub fn other_bucket(&self) -> &str {
        self.other_rename.as_deref().unwrap_or(OTHER_DEFAULT)
    }

    pub fn other_label(&self) -> &str {
        self.child_other_title_override
            .as_deref()
            .or(self.other_rename.as_deref())
            .unwrap_or(OTHER_LABEL_DEFAULT)
    }

    /// Reject bucket naming that would make buckets alias each other
    pub fn validate(&self) -> CheckTreeResult<()> {
        let BucketNames { parent, child } = &self.bucket_names;
        let other = self.other_bucket();

        if parent.is_empty() || child.is_empty() || other.is_empty() {
            return Err(CheckTreeError::misuse("bucket names must not be empty"));
        }
        if parent == child {
            return Err(CheckTreeError::misuse(format!(
                "parent and child buckets are both named '{parent}'"
            )));
        }
        if other == parent || other == child {
            return Err(CheckTreeError::misuse(format!(
                "other bucket '{other}' collides with the parent/child bucket names"
            )));
        }
        Ok(())
    }

    /// Apply environment variable overrides (CHECKTREE_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}

/// One nested filter as written in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NestedFilterDef {
    pub key: String,

    /// Parent key → value
    pub parents: IndexMap<String, String>,

    /// Child key → value
    pub children: IndexMap<String, String>,

    /// Parent value → child values
    pub mapping: IndexMap<String, Vec<String>>,

    #[serde(default)]
    pub parent_sort: Option<HashMap<String, i64>>,

    #[serde(default)]
    pub child_sort: Option<HashMap<String, i64>>,

    #[serde(default)]
    pub labels: BTreeMap<String, String>,

    #[serde(default)]
    pub include_other: IncludeOther,
}

impl NestedFilterDef {
    /// Build the runtime filter, sharing reverse lookups through `cache`
    pub fn build(&self, cache: &mut LookupCache) -> NestedFilter {
        let parents = Arc::new(Enumeration::from_pairs(self.parents.clone()));
        let children = Arc::new(Enumeration::from_pairs(self.children.clone()));
        let mapping: Mapping = self.mapping.clone().into_iter().collect();

        let mut builder = NestedFilter::builder(&self.key, parents, children, mapping)
            .include_other(self.include_other.clone())
            .labels(self.labels.clone().into_iter().collect::<Labels>());
        if let Some(weights) = &self.parent_sort {
            builder = builder.parent_sort(weights.clone().into_iter().collect::<SortWeights>());
        }
        if let Some(weights) = &self.child_sort {
            builder = builder.child_sort(weights.clone().into_iter().collect::<SortWeights>());
        }
        builder.build_with_cache(cache)
    }
}

/// One standalone checkbox as written in a definition file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StandaloneDef {
    pub key: String,
    pub value: String,
    pub title: String,

    #[serde(default)]
    pub group_with_children: bool,
}

impl StandaloneDef {
    pub fn build(&self) -> StandaloneFilter {
        StandaloneFilter::new(&self.key, &self.value, &self.title)
            .group_with_children(self.group_with_children)
    }
}

/// A filter definition file: store options plus the filters to mount
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilterDefinition {
    #[serde(default)]
    pub options: FilterOptions,

    #[serde(default, rename = "filter")]
    pub filters: Vec<NestedFilterDef>,

    #[serde(default)]
    pub standalone: Vec<StandaloneDef>,
}

impl FilterDefinition {
    /// Load a definition from a TOML file
    pub fn load(path: &Path) -> CheckTreeResult<Self> {
        let (definition, _warnings) = loader::load_with_warnings(path)?;
        Ok(definition)
    }

    /// Load a definition and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> CheckTreeResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse a definition from TOML text
    pub fn from_toml_str(content: &str) -> CheckTreeResult<Self> {
        loader::parse(content, Path::new("<inline>")).map(|(definition, _)| definition)
    }

    /// Build every nested filter, in file order
    pub fn nested_filters(&self) -> Vec<NestedFilter> {
        let mut cache = LookupCache::new();
        self.filters.iter().map(|def| def.build(&mut cache)).collect()
    }

    /// Build every standalone filter, in file order
    pub fn standalone_filters(&self) -> Vec<StandaloneFilter> {
        self.standalone.iter().map(StandaloneDef::build).collect()
    }
}
