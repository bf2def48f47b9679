use crate::profile::{LanguageId, PlatformId};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Generate CI/CD configuration from a plain-language project description
#[derive(Parser, Debug)]
#[command(
    name = "pipewright",
    about = "Generate CI/CD configuration from a plain-language project description",
    version,
    long_about = "pipewright turns a one-sentence project description into a consistent \
                  bundle of CI/CD files: a GitHub Actions workflow, platform manifests, \
                  container files, an environment template, and setup documentation.\n\n\
                  Supported languages: Node.js, Python. \
                  Supported platforms: Heroku, AWS, GCP, Azure."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Generate the full configuration bundle",
        long_about = "Detects your stack from the description, fills gaps with sensible \
                      defaults, and renders every applicable configuration file.\n\n\
                      Examples:\n  \
                      pipewright generate \"Node.js Express app with PostgreSQL on Heroku\"\n  \
                      pipewright generate --lang python --platform aws \"api with staging\"\n  \
                      pipewright generate --preview \"Django app with redis\""
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Show the resolved project profile without generating files",
        long_about = "Runs detection and resolution only, reporting each field's value and \
                      whether it was detected, defaulted, or overridden.\n\n\
                      Examples:\n  \
                      pipewright detect \"Python FastAPI with staging and production on AWS\"\n  \
                      pipewright detect --format json \"node app\""
    )]
    Detect(DetectArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "DESCRIPTION",
        help = "Project description (read from stdin when omitted)"
    )]
    pub description: Option<String>,

    #[arg(
        short = 'l',
        long = "lang",
        value_parser = parse_language,
        help = "Override the detected language (node|python)"
    )]
    pub language: Option<LanguageId>,

    #[arg(
        short = 'P',
        long = "platform",
        value_parser = parse_platform,
        help = "Override the detected platform (heroku|aws|gcp|azure)"
    )]
    pub platform: Option<PlatformId>,

    #[arg(short = 'n', long, value_name = "NAME", help = "Override the project name")]
    pub name: Option<String>,

    #[arg(
        short = 'o',
        long,
        value_name = "DIR",
        help = "Output directory (default: ./pipeline-config)"
    )]
    pub output: Option<PathBuf>,

    #[arg(short = 'p', long, help = "Preview generated files without writing")]
    pub preview: bool,

    #[arg(long, help = "Overwrite files that already exist in the output directory")]
    pub force: bool,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,

    #[arg(long, help = "Skip the coverage upload step in the workflow")]
    pub no_coverage: bool,

    #[arg(long, help = "Skip the lint step in the workflow")]
    pub no_lint: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    #[arg(
        value_name = "DESCRIPTION",
        help = "Project description (read from stdin when omitted)"
    )]
    pub description: Option<String>,

    #[arg(
        short = 'l',
        long = "lang",
        value_parser = parse_language,
        help = "Override the detected language (node|python)"
    )]
    pub language: Option<LanguageId>,

    #[arg(
        short = 'P',
        long = "platform",
        value_parser = parse_platform,
        help = "Override the detected platform (heroku|aws|gcp|azure)"
    )]
    pub platform: Option<PlatformId>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

fn parse_language(s: &str) -> Result<LanguageId, String> {
    LanguageId::from_name(s)
        .ok_or_else(|| format!("Invalid language: {}. Valid options: node, python", s))
}

fn parse_platform(s: &str) -> Result<PlatformId, String> {
    PlatformId::from_name(s)
        .ok_or_else(|| format!("Invalid platform: {}. Valid options: heroku, aws, gcp, azure", s))
}
