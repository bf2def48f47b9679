//! Generation pipeline
//!
//! Maps a completed [`ProjectProfile`] onto its [`ArtifactSet`]. The
//! registry decides which artifacts apply, the render context computes every
//! shared identifier once, and each render function produces one file's
//! text. The pipeline is a pure function of the profile: identical profiles
//! always yield byte-identical artifact sets.

pub mod context;
pub mod docker;
pub mod docs;
pub mod heroku;
pub mod registry;
pub mod workflow;

pub use context::RenderContext;
pub use registry::{ArtifactKind, SecretSpec, TemplateRow};

use crate::output::ArtifactSet;
use crate::profile::{LanguageId, PlatformId, ProjectProfile};
use thiserror::Error;
use tracing::debug;

/// Generation failures. With the closed language/platform matrix every pair
/// has a registry row, so this surfaces configuration-completeness bugs
/// rather than user input problems.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error(
        "no template registered for {language} on {platform}; \
         this is a pipewright defect, please report it"
    )]
    MissingTemplate {
        language: LanguageId,
        platform: PlatformId,
    },
}

/// Renders the full artifact set for a profile.
pub fn generate(profile: &ProjectProfile) -> Result<ArtifactSet, GenerationError> {
    let row = registry::row(profile.language, profile.platform).ok_or(
        GenerationError::MissingTemplate {
            language: profile.language,
            platform: profile.platform,
        },
    )?;

    let ctx = RenderContext::new(profile);
    let mut artifacts = ArtifactSet::new();

    for kind in row.artifacts {
        let content = match kind {
            ArtifactKind::Workflow => workflow::render(&ctx),
            ArtifactKind::EnvTemplate => docs::render_env_template(&ctx),
            ArtifactKind::SetupDocs => docs::render_readme(&ctx),
            ArtifactKind::Procfile => heroku::render_procfile(&ctx),
            ArtifactKind::AppManifest => heroku::render_app_manifest(&ctx),
            ArtifactKind::Dockerfile => docker::render_dockerfile(&ctx),
            ArtifactKind::DockerIgnore => docker::render_dockerignore().to_string(),
        };
        let previous = artifacts.insert(kind.path(), content);
        debug_assert!(previous.is_none(), "duplicate artifact path {}", kind.path());
    }

    debug!(
        language = %profile.language,
        platform = %profile.platform,
        files = artifacts.len(),
        "artifact set generated"
    );
    Ok(artifacts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{
        DatastoreId, EnvironmentId, FrameworkId, GenerateOptions,
    };

    fn heroku_profile() -> ProjectProfile {
        ProjectProfile {
            app_name: "my-app".to_string(),
            language: LanguageId::Node,
            framework: FrameworkId::Express,
            platform: PlatformId::Heroku,
            datastores: [DatastoreId::Postgres].into_iter().collect(),
            environments: vec![EnvironmentId::Staging, EnvironmentId::Production],
            options: GenerateOptions::default(),
        }
    }

    #[test]
    fn test_heroku_artifact_set_contents() {
        let artifacts = generate(&heroku_profile()).unwrap();

        let paths: Vec<_> = artifacts.paths().collect();
        assert_eq!(
            paths,
            vec![
                ".env.example",
                ".github/workflows/ci-cd.yml",
                "PIPELINE_README.md",
                "Procfile",
                "app.json",
            ]
        );
    }

    #[test]
    fn test_container_platform_artifact_set_contents() {
        let mut profile = heroku_profile();
        profile.platform = PlatformId::Aws;
        let artifacts = generate(&profile).unwrap();

        assert!(artifacts.contains("Dockerfile"));
        assert!(artifacts.contains(".dockerignore"));
        assert!(!artifacts.contains("Procfile"));
        assert!(!artifacts.contains("app.json"));
    }

    #[test]
    fn test_generation_is_deterministic() {
        let profile = heroku_profile();
        let a = generate(&profile).unwrap();
        let b = generate(&profile).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_database_tokens_identical_across_artifacts() {
        let mut profile = heroku_profile();
        profile.platform = PlatformId::Aws;
        let artifacts = generate(&profile).unwrap();

        let workflow = artifacts.get(".github/workflows/ci-cd.yml").unwrap();
        let env = artifacts.get(".env.example").unwrap();

        // Same host port and env var name everywhere the database appears.
        assert!(workflow.contains("5432:5432"));
        assert!(workflow.contains("DATABASE_URL:"));
        assert!(env.contains("DATABASE_URL="));
        assert!(env.contains(":5432/dbname"));
    }
}
