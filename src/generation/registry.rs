//! Template registry
//!
//! Static lookup tables driving generation: which artifact kinds apply to a
//! (language, platform) pair, and which secrets each platform expects the
//! user to configure. Adding a platform or language means adding rows here,
//! not adding branches elsewhere.

use crate::profile::{LanguageId, PlatformId};

/// One generated file's logical identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ArtifactKind {
    /// CI/CD workflow definition.
    Workflow,
    /// `.env.example` template.
    EnvTemplate,
    /// Setup and troubleshooting documentation.
    SetupDocs,
    /// Heroku process file.
    Procfile,
    /// Heroku `app.json` manifest.
    AppManifest,
    /// Container build file.
    Dockerfile,
    /// Container build exclusion list.
    DockerIgnore,
}

impl ArtifactKind {
    /// Canonical relative output path for this artifact.
    pub fn path(&self) -> &'static str {
        match self {
            ArtifactKind::Workflow => ".github/workflows/ci-cd.yml",
            ArtifactKind::EnvTemplate => ".env.example",
            ArtifactKind::SetupDocs => "PIPELINE_README.md",
            ArtifactKind::Procfile => "Procfile",
            ArtifactKind::AppManifest => "app.json",
            ArtifactKind::Dockerfile => "Dockerfile",
            ArtifactKind::DockerIgnore => ".dockerignore",
        }
    }
}

/// A secret the generated pipeline references but never contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SecretSpec {
    pub name: &'static str,
    pub description: &'static str,
}

/// One registry row: the artifact kinds generated for a language/platform
/// pair. The workflow, env template, and docs are universal; the platform
/// decides the rest.
#[derive(Debug, Clone, Copy)]
pub struct TemplateRow {
    pub language: LanguageId,
    pub platform: PlatformId,
    pub artifacts: &'static [ArtifactKind],
}

const HEROKU_ARTIFACTS: &[ArtifactKind] = &[
    ArtifactKind::Workflow,
    ArtifactKind::EnvTemplate,
    ArtifactKind::SetupDocs,
    ArtifactKind::Procfile,
    ArtifactKind::AppManifest,
];

const CONTAINER_ARTIFACTS: &[ArtifactKind] = &[
    ArtifactKind::Workflow,
    ArtifactKind::EnvTemplate,
    ArtifactKind::SetupDocs,
    ArtifactKind::Dockerfile,
    ArtifactKind::DockerIgnore,
];

const BASE_ARTIFACTS: &[ArtifactKind] = &[
    ArtifactKind::Workflow,
    ArtifactKind::EnvTemplate,
    ArtifactKind::SetupDocs,
];

const ROWS: &[TemplateRow] = &[
    TemplateRow { language: LanguageId::Node, platform: PlatformId::Heroku, artifacts: HEROKU_ARTIFACTS },
    TemplateRow { language: LanguageId::Node, platform: PlatformId::Aws, artifacts: CONTAINER_ARTIFACTS },
    TemplateRow { language: LanguageId::Node, platform: PlatformId::Gcp, artifacts: CONTAINER_ARTIFACTS },
    TemplateRow { language: LanguageId::Node, platform: PlatformId::Azure, artifacts: BASE_ARTIFACTS },
    TemplateRow { language: LanguageId::Python, platform: PlatformId::Heroku, artifacts: HEROKU_ARTIFACTS },
    TemplateRow { language: LanguageId::Python, platform: PlatformId::Aws, artifacts: CONTAINER_ARTIFACTS },
    TemplateRow { language: LanguageId::Python, platform: PlatformId::Gcp, artifacts: CONTAINER_ARTIFACTS },
    TemplateRow { language: LanguageId::Python, platform: PlatformId::Azure, artifacts: BASE_ARTIFACTS },
];

/// Looks up the registry row for a language/platform pair. Every pair in
/// the closed matrix has a row; `None` signals a registry gap, which the
/// pipeline reports as a defect rather than a user error.
pub fn row(language: LanguageId, platform: PlatformId) -> Option<&'static TemplateRow> {
    ROWS.iter()
        .find(|r| r.language == language && r.platform == platform)
}

/// Fixed, ordered list of credential secrets per platform. Static registry
/// data: derived from the platform alone, independent of the profile.
pub fn secret_catalog(platform: PlatformId) -> &'static [SecretSpec] {
    match platform {
        PlatformId::Heroku => &[
            SecretSpec { name: "HEROKU_API_KEY", description: "Heroku API key used for deployments" },
            SecretSpec { name: "HEROKU_EMAIL", description: "Email associated with the Heroku account" },
        ],
        PlatformId::Aws => &[
            SecretSpec { name: "AWS_ACCESS_KEY_ID", description: "AWS access key" },
            SecretSpec { name: "AWS_SECRET_ACCESS_KEY", description: "AWS secret key" },
            SecretSpec { name: "AWS_REGION", description: "AWS region for deployment" },
        ],
        PlatformId::Gcp => &[
            SecretSpec { name: "GCP_SA_KEY", description: "Google Cloud service account JSON key" },
            SecretSpec { name: "GCP_REGION", description: "GCP region for deployment" },
        ],
        PlatformId::Azure => &[
            SecretSpec { name: "AZURE_CREDENTIALS", description: "Azure service principal credentials" },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_platform_pair_has_a_row() {
        for language in LanguageId::all_variants() {
            for platform in PlatformId::all_variants() {
                assert!(
                    row(*language, *platform).is_some(),
                    "registry gap for {language}/{platform}"
                );
            }
        }
    }

    #[test]
    fn test_row_artifact_paths_are_unique() {
        for r in ROWS {
            let mut paths: Vec<_> = r.artifacts.iter().map(|k| k.path()).collect();
            paths.sort();
            paths.dedup();
            assert_eq!(paths.len(), r.artifacts.len());
        }
    }

    #[test]
    fn test_heroku_rows_carry_platform_manifests() {
        let r = row(LanguageId::Node, PlatformId::Heroku).unwrap();
        assert!(r.artifacts.contains(&ArtifactKind::Procfile));
        assert!(r.artifacts.contains(&ArtifactKind::AppManifest));
        assert!(!r.artifacts.contains(&ArtifactKind::Dockerfile));
    }

    #[test]
    fn test_container_rows_carry_docker_files() {
        for platform in [PlatformId::Aws, PlatformId::Gcp] {
            let r = row(LanguageId::Python, platform).unwrap();
            assert!(r.artifacts.contains(&ArtifactKind::Dockerfile));
            assert!(r.artifacts.contains(&ArtifactKind::DockerIgnore));
            assert!(!r.artifacts.contains(&ArtifactKind::Procfile));
        }
    }

    #[test]
    fn test_every_platform_has_secrets() {
        for platform in PlatformId::all_variants() {
            assert!(!secret_catalog(*platform).is_empty());
        }
    }
}
