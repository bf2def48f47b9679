//! Defaults resolver
//!
//! Completes a [`PartialProfile`] into a [`ProjectProfile`], applying one
//! deterministic default per absent field and validating cross-field
//! legality. Fields resolve in a fixed order - app name, language,
//! framework, platform, datastores, environments, options - because later
//! defaults depend on earlier resolved values.
//!
//! Explicit overrides win unconditionally over detected values. Signals
//! that cannot be reconciled (a detected framework belonging to a different
//! detected language, or a datastore the platform cannot provision) fail
//! with [`ProfileError`] rather than producing an illegal profile.

use crate::profile::{
    DatastoreId, EnvironmentId, FrameworkId, GenerateOptions, LanguageId, Overrides,
    PartialProfile, PlatformId, ProjectProfile, Provenance, DEFAULT_APP_NAME,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Resolution failures. Both variants name the conflicting fields so the
/// message can point at the exact irreconcilable signals.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    #[error(
        "framework '{framework}' belongs to {framework_language}, \
         but the description names {language} - pick one or drop the other"
    )]
    FrameworkConflict {
        language: LanguageId,
        framework: FrameworkId,
        framework_language: LanguageId,
    },

    #[error("{platform} has no managed {datastore} offering; choose aws, gcp, or azure")]
    UnsupportedDatastore {
        platform: PlatformId,
        datastore: DatastoreId,
    },
}

/// Per-field provenance of a resolved profile, surfaced in the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldProvenance {
    pub app_name: Provenance,
    pub language: Provenance,
    pub framework: Provenance,
    pub platform: Provenance,
    pub datastores: Provenance,
    pub environments: Provenance,
}

/// A completed profile together with where each field value came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub profile: ProjectProfile,
    pub provenance: FieldProvenance,
}

/// Resolves a partial profile into a complete, legal one.
///
/// Every returned profile satisfies the profile invariants: the framework
/// belongs to the language, each datastore is supported by the platform,
/// and the environment list is a non-empty, duplicate-free promotion chain.
pub fn resolve(
    partial: &PartialProfile,
    overrides: &Overrides,
    options: GenerateOptions,
) -> Result<Resolution, ProfileError> {
    let (app_name, app_name_src) = match (&overrides.app_name, &partial.app_name) {
        (Some(name), _) => (name.clone(), Provenance::Overridden),
        (None, Some(name)) => (name.clone(), Provenance::Detected),
        (None, None) => (DEFAULT_APP_NAME.to_string(), Provenance::Defaulted),
    };

    // A detected framework is itself a language signal, so the language
    // default consults it before falling back to Node.
    let (language, language_src) = match (overrides.language, partial.language) {
        (Some(lang), _) => (lang, Provenance::Overridden),
        (None, Some(lang)) => (lang, Provenance::Detected),
        (None, None) => match partial.framework {
            Some(fw) => (fw.language(), Provenance::Detected),
            None => (LanguageId::Node, Provenance::Defaulted),
        },
    };

    let (framework, framework_src) = match partial.framework {
        Some(fw) if fw.language() == language => (fw, Provenance::Detected),
        Some(fw) => {
            if language_src == Provenance::Overridden {
                // The override outranks the detected framework signal; the
                // framework re-defaults for the overridden language.
                debug!(%fw, %language, "discarding detected framework, language was overridden");
                (language.default_framework(), Provenance::Defaulted)
            } else {
                return Err(ProfileError::FrameworkConflict {
                    language,
                    framework: fw,
                    framework_language: fw.language(),
                });
            }
        }
        None => (language.default_framework(), Provenance::Defaulted),
    };

    let (platform, platform_src) = match (overrides.platform, partial.platform) {
        (Some(platform), _) => (platform, Provenance::Overridden),
        (None, Some(platform)) => (platform, Provenance::Detected),
        (None, None) => (PlatformId::Heroku, Provenance::Defaulted),
    };

    let datastores = partial.datastores.clone();
    for datastore in &datastores {
        if !platform.supported_datastores().contains(datastore) {
            return Err(ProfileError::UnsupportedDatastore {
                platform,
                datastore: *datastore,
            });
        }
    }
    let datastores_src = if datastores.is_empty() {
        Provenance::Defaulted
    } else {
        Provenance::Detected
    };

    let (environments, environments_src) = if partial.environments.is_empty() {
        let defaults = if platform.multi_stage() {
            vec![EnvironmentId::Staging, EnvironmentId::Production]
        } else {
            vec![EnvironmentId::Production]
        };
        (defaults, Provenance::Defaulted)
    } else {
        let mut envs = partial.environments.clone();
        envs.sort();
        envs.dedup();
        (envs, Provenance::Detected)
    };

    let resolution = Resolution {
        profile: ProjectProfile {
            app_name,
            language,
            framework,
            platform,
            datastores,
            environments,
            options,
        },
        provenance: FieldProvenance {
            app_name: app_name_src,
            language: language_src,
            framework: framework_src,
            platform: platform_src,
            datastores: datastores_src,
            environments: environments_src,
        },
    };
    debug!(profile = ?resolution.profile, "profile resolved");
    Ok(resolution)
}
