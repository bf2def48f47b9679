pub mod commands;
pub mod handlers;
pub mod output;
pub mod writer;

pub use commands::{CliArgs, Commands, DetectArgs, GenerateArgs, OutputFormatArg};
pub use output::{OutputFormat, OutputFormatter};
