//! Command handlers
//!
//! Wire the pure detection/resolution/generation pipeline to the terminal:
//! read the description, apply typed overrides, format or write the result,
//! and map errors to exit codes. Exit code 1 is a user-input problem
//! (irreconcilable description), 2 an internal defect.

use super::commands::{DetectArgs, GenerateArgs};
use super::output::{OutputFormat, OutputFormatter};
use super::writer::write_artifacts;
use crate::config::PipewrightConfig;
use crate::detection::detect;
use crate::generation::generate;
use crate::output::Summary;
use crate::profile::{GenerateOptions, Overrides};
use crate::resolver::resolve;
use std::io::Read;
use tracing::error;

pub fn handle_generate(args: &GenerateArgs, config: &PipewrightConfig, quiet: bool) -> i32 {
    let description = match read_description(args.description.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "failed to read project description");
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let overrides = Overrides {
        app_name: args.name.clone(),
        language: args.language,
        platform: args.platform,
    };
    let options = GenerateOptions {
        coverage: !args.no_coverage,
        lint: !args.no_lint,
    };

    let resolution = match resolve(&detect(&description), &overrides, options) {
        Ok(resolution) => resolution,
        Err(e) => {
            error!(error = %e, "could not resolve a legal project profile");
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let artifacts = match generate(&resolution.profile) {
        Ok(artifacts) => artifacts,
        Err(e) => {
            error!(error = %e, "artifact generation failed");
            eprintln!("Error: {e}");
            return 2;
        }
    };

    let formatter = formatter(args.format.into(), config);
    let summary = Summary::new(resolution.profile.clone(), resolution.provenance, &artifacts);

    if args.preview {
        // Preview prints the files themselves; the summary goes first in
        // human mode so the listing has context.
        let output = match args.format.into() {
            OutputFormat::Human => {
                let mut text = formatter.format_summary(&summary).unwrap_or_default();
                text.push('\n');
                text.push_str(&formatter.format_artifacts(&artifacts).unwrap_or_default());
                text.push_str("Preview mode - no files were written\n");
                text
            }
            _ => match formatter.format_artifacts(&artifacts) {
                Ok(output) => output,
                Err(e) => {
                    eprintln!("Error: {e}");
                    return 2;
                }
            },
        };
        println!("{output}");
        return 0;
    }

    let output_dir = args
        .output
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());
    if let Err(e) = write_artifacts(&artifacts, &output_dir, args.force) {
        error!(error = %e, "failed to write artifacts");
        eprintln!("Error: {e:#}");
        return 1;
    }

    if !quiet {
        match formatter.format_summary(&summary) {
            Ok(text) => println!("{text}"),
            Err(e) => {
                eprintln!("Error: {e}");
                return 2;
            }
        }
        println!(
            "Wrote {} files to {}\n\nNext steps:\n  1. Review the generated files\n  2. Copy them into your repository\n  3. Configure the secrets listed in PIPELINE_README.md\n  4. Push and watch the pipeline run",
            artifacts.len(),
            output_dir.display()
        );
    }

    0
}

pub fn handle_detect(args: &DetectArgs, config: &PipewrightConfig) -> i32 {
    let description = match read_description(args.description.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            error!(error = %e, "failed to read project description");
            eprintln!("Error: {e}");
            return 1;
        }
    };

    let overrides = Overrides {
        app_name: None,
        language: args.language,
        platform: args.platform,
    };

    let resolution = match resolve(&detect(&description), &overrides, GenerateOptions::default()) {
        Ok(resolution) => resolution,
        Err(e) => {
            error!(error = %e, "could not resolve a legal project profile");
            eprintln!("Error: {e}");
            return 1;
        }
    };

    match formatter(args.format.into(), config).format_resolution(&resolution) {
        Ok(output) => {
            println!("{output}");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

fn formatter(format: OutputFormat, config: &PipewrightConfig) -> OutputFormatter {
    let color = format == OutputFormat::Human && !config.no_color && atty::is(atty::Stream::Stdout);
    OutputFormatter::new(format, color)
}

/// The description comes from the argument when given, otherwise from
/// stdin when piped. An empty description is valid input: the pipeline
/// falls through to the full default chain.
fn read_description(arg: Option<&str>) -> std::io::Result<String> {
    match arg {
        Some(text) => Ok(text.to_string()),
        None => {
            if atty::is(atty::Stream::Stdin) {
                Ok(String::new())
            } else {
                let mut text = String::new();
                std::io::stdin().read_to_string(&mut text)?;
                Ok(text)
            }
        }
    }
}
