//! Output schema data structures
//!
//! This module defines the public output contract: the [`ArtifactSet`]
//! mapping canonical relative paths to rendered file contents, and the
//! [`Summary`] describing what was detected, defaulted, or overridden.
//! Both are plain serializable values; writing them to disk or a terminal
//! is the caller's concern.

use crate::profile::ProjectProfile;
use crate::resolver::FieldProvenance;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The complete set of generated configuration files for one profile.
///
/// Keys are canonical relative paths (e.g. `.github/workflows/ci-cd.yml`);
/// values are full file contents. The map is ordered, so iteration and
/// serialization are deterministic, and no two entries share a path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtifactSet {
    files: BTreeMap<String, String>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts an artifact, returning any previous content for the path.
    /// Generation treats a collision as an internal defect.
    pub fn insert(&mut self, path: impl Into<String>, content: impl Into<String>) -> Option<String> {
        self.files.insert(path.into(), content.into())
    }

    pub fn get(&self, path: &str) -> Option<&str> {
        self.files.get(path).map(String::as_str)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.files.iter().map(|(p, c)| (p.as_str(), c.as_str()))
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

impl<'a> IntoIterator for &'a ArtifactSet {
    type Item = (&'a String, &'a String);
    type IntoIter = std::collections::btree_map::Iter<'a, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.files.iter()
    }
}

/// Human-readable account of one generation run: the resolved profile,
/// where each field came from, and which files were produced. A derived
/// view only - never fed back into resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub profile: ProjectProfile,
    pub provenance: FieldProvenance,
    pub files: Vec<String>,
}

impl Summary {
    pub fn new(profile: ProjectProfile, provenance: FieldProvenance, artifacts: &ArtifactSet) -> Self {
        Self {
            profile,
            provenance,
            files: artifacts.paths().map(str::to_string).collect(),
        }
    }
}
