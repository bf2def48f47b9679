use pipewright::cli::commands::{CliArgs, Commands};
use pipewright::cli::handlers::{handle_detect, handle_generate};
use pipewright::config::PipewrightConfig;
use pipewright::util::logging::{init_logging, parse_level, LoggingConfig};
use pipewright::VERSION;

use clap::Parser;
use std::env;
use tracing::{debug, Level};

fn main() {
    let args = CliArgs::parse();
    init_logging_from_args(&args);

    debug!("pipewright v{} starting", VERSION);
    debug!("Arguments: {:?}", args);

    let config = PipewrightConfig::default();
    if let Err(e) = config.validate() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    let exit_code = match &args.command {
        Commands::Generate(generate_args) => handle_generate(generate_args, &config, args.quiet),
        Commands::Detect(detect_args) => handle_detect(detect_args, &config),
    };

    std::process::exit(exit_code);
}

fn init_logging_from_args(args: &CliArgs) {
    let level = if let Some(level_str) = &args.log_level {
        parse_level(level_str)
    } else if args.verbose {
        Level::DEBUG
    } else if args.quiet {
        Level::ERROR
    } else {
        let level_str = env::var("PIPEWRIGHT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        parse_level(&level_str)
    };

    let use_json = env::var("PIPEWRIGHT_LOG_JSON")
        .ok()
        .and_then(|v| v.parse::<bool>().ok())
        .unwrap_or(false);

    init_logging(LoggingConfig {
        level,
        use_json,
        ..Default::default()
    });
}
