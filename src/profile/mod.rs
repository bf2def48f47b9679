//! Project profile types
//!
//! The profile is the central value object of the pipeline: detection fills a
//! [`PartialProfile`] from free text, the resolver completes it into a
//! [`ProjectProfile`], and generation consumes the completed profile
//! read-only. A completed profile is never mutated.

#[macro_use]
pub mod id_enum_macro;

pub mod datastore_id;
pub mod environment_id;
pub mod framework_id;
pub mod language_id;
pub mod platform_id;

pub use datastore_id::DatastoreId;
pub use environment_id::EnvironmentId;
pub use framework_id::FrameworkId;
pub use language_id::LanguageId;
pub use platform_id::PlatformId;

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// App name used when the description names no project.
pub const DEFAULT_APP_NAME: &str = "my-app";

/// Raw signals extracted from the project description. Every field is
/// optional; an empty partial profile is valid input to the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<LanguageId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<FrameworkId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<PlatformId>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub datastores: BTreeSet<DatastoreId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub environments: Vec<EnvironmentId>,
}

impl PartialProfile {
    pub fn is_empty(&self) -> bool {
        self.app_name.is_none()
            && self.language.is_none()
            && self.framework.is_none()
            && self.platform.is_none()
            && self.datastores.is_empty()
            && self.environments.is_empty()
    }
}

/// Explicit, already-typed overrides supplied by the CLI. Overrides win
/// unconditionally over detected values for the same field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub app_name: Option<String>,
    pub language: Option<LanguageId>,
    pub platform: Option<PlatformId>,
}

/// Output-shaping flags. Not populated by detection; each has a documented
/// default and a CLI switch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Upload a coverage report artifact from the test job. Default: true.
    pub coverage: bool,
    /// Run the linter in the test job (non-blocking). Default: true.
    pub lint: bool,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            coverage: true,
            lint: true,
        }
    }
}

/// Where a resolved field value came from. Surfaced in the summary so users
/// can see what was inferred versus assumed; never fed back into resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Detected,
    Defaulted,
    Overridden,
}

/// Fully-resolved project profile. Satisfies every cross-field invariant:
/// the framework belongs to the language, every datastore is supported by
/// the platform, and the environment list is a non-empty promotion chain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectProfile {
    pub app_name: String,
    pub language: LanguageId,
    pub framework: FrameworkId,
    pub platform: PlatformId,
    pub datastores: BTreeSet<DatastoreId>,
    pub environments: Vec<EnvironmentId>,
    #[serde(default)]
    pub options: GenerateOptions,
}

impl ProjectProfile {
    /// The application listen port, derived from the language convention.
    pub fn app_port(&self) -> u16 {
        self.language.default_port()
    }
}
