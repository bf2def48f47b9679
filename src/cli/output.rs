//! Output formatting for multiple formats
//!
//! Formatters for the resolved profile, the generation summary, and artifact
//! previews, in JSON, YAML, or human-readable text. Human output optionally
//! uses ANSI styling when attached to a terminal.

use anyhow::{Context, Result};

use crate::output::{ArtifactSet, Summary};
use crate::profile::Provenance;
use crate::resolver::Resolution;

/// Output format enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON format (machine-readable)
    Json,
    /// YAML format (human-friendly, version-control friendly)
    Yaml,
    /// Human-readable formatted text
    Human,
}

/// Output formatter for profiles, summaries, and artifact previews
pub struct OutputFormatter {
    format: OutputFormat,
    color: bool,
}

impl OutputFormatter {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    /// Formats a resolution (profile + provenance) for the detect command.
    pub fn format_resolution(&self, resolution: &Resolution) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(resolution)
                .context("Failed to serialize resolution to JSON"),
            OutputFormat::Yaml => serde_yaml::to_string(resolution)
                .context("Failed to serialize resolution to YAML"),
            OutputFormat::Human => Ok(self.human_resolution(resolution)),
        }
    }

    /// Formats the post-generation summary.
    pub fn format_summary(&self, summary: &Summary) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(summary)
                .context("Failed to serialize summary to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(summary).context("Failed to serialize summary to YAML")
            }
            OutputFormat::Human => Ok(self.human_summary(summary)),
        }
    }

    /// Formats the full artifact set, for preview or machine consumption.
    pub fn format_artifacts(&self, artifacts: &ArtifactSet) -> Result<String> {
        match self.format {
            OutputFormat::Json => serde_json::to_string_pretty(artifacts)
                .context("Failed to serialize artifacts to JSON"),
            OutputFormat::Yaml => {
                serde_yaml::to_string(artifacts).context("Failed to serialize artifacts to YAML")
            }
            OutputFormat::Human => Ok(self.human_artifacts(artifacts)),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            format!("\x1b[1m{text}\x1b[0m")
        } else {
            text.to_string()
        }
    }

    fn human_resolution(&self, resolution: &Resolution) -> String {
        let profile = &resolution.profile;
        let prov = &resolution.provenance;
        let mut out = String::new();

        out.push_str(&self.bold("Resolved Configuration"));
        out.push('\n');
        out.push_str(&format!(
            "  Name:         {} {}\n",
            profile.app_name,
            tag(prov.app_name)
        ));
        out.push_str(&format!(
            "  Language:     {} {} {}\n",
            profile.language,
            profile.language.version(),
            tag(prov.language)
        ));
        out.push_str(&format!(
            "  Framework:    {} {}\n",
            profile.framework,
            tag(prov.framework)
        ));
        out.push_str(&format!(
            "  Platform:     {} {}\n",
            profile.platform,
            tag(prov.platform)
        ));
        let datastores = if profile.datastores.is_empty() {
            "none".to_string()
        } else {
            profile
                .datastores
                .iter()
                .map(|d| d.name())
                .collect::<Vec<_>>()
                .join(", ")
        };
        out.push_str(&format!(
            "  Datastores:   {} {}\n",
            datastores,
            tag(prov.datastores)
        ));
        out.push_str(&format!(
            "  Environments: {} {}\n",
            profile
                .environments
                .iter()
                .map(|e| e.name())
                .collect::<Vec<_>>()
                .join(" -> "),
            tag(prov.environments)
        ));
        out
    }

    fn human_summary(&self, summary: &Summary) -> String {
        let mut out = self.human_resolution(&Resolution {
            profile: summary.profile.clone(),
            provenance: summary.provenance,
        });
        out.push('\n');
        out.push_str(&self.bold("Generated Files"));
        out.push('\n');
        for file in &summary.files {
            out.push_str(&format!("  - {file}\n"));
        }
        out
    }

    fn human_artifacts(&self, artifacts: &ArtifactSet) -> String {
        let mut out = String::new();
        for (path, content) in artifacts.iter() {
            out.push_str(&self.bold(&format!("--- {path} ---")));
            out.push('\n');
            out.push_str(content);
            if !content.ends_with('\n') {
                out.push('\n');
            }
            out.push('\n');
        }
        out
    }
}

fn tag(provenance: Provenance) -> &'static str {
    match provenance {
        Provenance::Detected => "(detected)",
        Provenance::Defaulted => "(default)",
        Provenance::Overridden => "(override)",
    }
}
