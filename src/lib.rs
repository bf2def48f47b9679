//! pipewright - CI/CD configuration generator
//!
//! This library turns a short free-text project description into a
//! consistent bundle of CI/CD configuration files: a GitHub Actions
//! workflow, platform manifests, container files, an environment template,
//! and setup documentation.
//!
//! # Core Concepts
//!
//! - **Detection**: lexical scanning of the description against a static
//!   trigger lexicon, producing a partial project profile
//! - **Resolution**: completing the partial profile with deterministic
//!   defaults and validating cross-field legality
//! - **Generation**: mapping the completed profile onto rendered artifacts,
//!   with every shared identifier computed once so files never drift apart
//!
//! # Example Usage
//!
//! ```
//! use pipewright::detection::detect;
//! use pipewright::generation::generate;
//! use pipewright::profile::{GenerateOptions, Overrides};
//! use pipewright::resolver::resolve;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let partial = detect("Node.js Express app with PostgreSQL on Heroku");
//! let resolution = resolve(&partial, &Overrides::default(), GenerateOptions::default())?;
//! let artifacts = generate(&resolution.profile)?;
//!
//! assert!(artifacts.contains("Procfile"));
//! assert!(artifacts.contains(".github/workflows/ci-cd.yml"));
//! # Ok(())
//! # }
//! ```
//!
//! The whole pipeline is synchronous and pure: identical input always
//! produces a byte-identical artifact set, and nothing in the core performs
//! I/O.

// Public modules
pub mod cli;
pub mod config;
pub mod detection;
pub mod generation;
pub mod output;
pub mod profile;
pub mod resolver;
pub mod util;

// Re-export key types for convenient access
pub use config::{ConfigError, PipewrightConfig};
pub use generation::{generate, GenerationError};
pub use output::{ArtifactSet, Summary};
pub use profile::{PartialProfile, ProjectProfile};
pub use resolver::{resolve, ProfileError, Resolution};
pub use util::{init_default, init_from_env, init_logging, LoggingConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_name_is_pipewright() {
        assert_eq!(NAME, "pipewright");
    }
}
