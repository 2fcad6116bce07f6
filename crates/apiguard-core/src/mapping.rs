//! # Declared Mapping
//!
//! The scanner's output: every resource path declared in the contract
//! document's route section, each with the set of verbs declared beneath
//! it. Owned by the caller once returned.

use std::collections::btree_map::{self, BTreeMap};

use serde::{Deserialize, Serialize};

use crate::path::ResourcePath;
use crate::verb::{Verb, VerbSet};

/// Mapping from declared [`ResourcePath`] to its [`VerbSet`].
///
/// Serializes as `{"/path": ["get", "post"]}`. A path declared with no
/// verb lines maps to an empty set, which is distinct from the path being
/// absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeclaredMapping(BTreeMap<ResourcePath, VerbSet>);

impl DeclaredMapping {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure `path` has an entry, creating an empty verb set if needed.
    ///
    /// An existing entry is left untouched, so a repeated path key merges
    /// into the verbs already collected.
    pub fn declare_path(&mut self, path: ResourcePath) -> &mut VerbSet {
        self.0.entry(path).or_default()
    }

    /// Record `verb` under `path`, declaring the path if necessary.
    pub fn declare_verb(&mut self, path: &ResourcePath, verb: Verb) {
        self.declare_path(path.clone()).insert(verb);
    }

    pub fn contains_path(&self, path: &ResourcePath) -> bool {
        self.0.contains_key(path)
    }

    /// Verbs declared for `path`, or `None` if the path is absent.
    pub fn verbs(&self, path: &ResourcePath) -> Option<&VerbSet> {
        self.0.get(path)
    }

    /// Number of declared paths.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of (path, verb) operations declared.
    pub fn operation_count(&self) -> usize {
        self.0.values().map(VerbSet::len).sum()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, ResourcePath, VerbSet> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a DeclaredMapping {
    type Item = (&'a ResourcePath, &'a VerbSet);
    type IntoIter = btree_map::Iter<'a, ResourcePath, VerbSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(ResourcePath, VerbSet)> for DeclaredMapping {
    fn from_iter<I: IntoIterator<Item = (ResourcePath, VerbSet)>>(iter: I) -> Self {
        let mut mapping = Self::new();
        for (path, verbs) in iter {
            mapping.declare_path(path).extend_from(&verbs);
        }
        mapping
    }
}
