use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Deterministic Dockerfile generation for JVM application workspaces
#[derive(Parser, Debug)]
#[command(
    name = "jarpack",
    about = "Deterministic Dockerfile generation for JVM application workspaces",
    version,
    author,
    long_about = "jarpack inspects a workspace, decides which build tooling should produce \
                  the deployable artifact (Maven, Gradle, a custom script, or a prebuilt \
                  archive), and writes a multi-stage Dockerfile plus a .dockerignore file \
                  into the workspace."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(
        short = 'v',
        long,
        global = true,
        help = "Increase verbosity (can be used multiple times)"
    )]
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
        about = "Generate Docker resources for a workspace",
        long_about = "Selects the build pipeline for the workspace and writes the generated \
                      Dockerfile and .dockerignore into its root.\n\n\
                      Examples:\n  \
                      jarpack generate\n  \
                      jarpack generate /path/to/workspace\n  \
                      jarpack generate --jdk openjdk17\n  \
                      jarpack generate --set jetty_quickstart=true --no-source-build"
    )]
    Generate(GenerateArgs),

    #[command(
        about = "Show the selected pipeline without writing files",
        long_about = "Performs configuration merging and step selection, then prints the \
                      ordered step sequence and the effective runtime configuration.\n\n\
                      Examples:\n  \
                      jarpack plan\n  \
                      jarpack plan /path/to/workspace --format json"
    )]
    Plan(PlanArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the workspace (defaults to current directory)"
    )]
    pub workspace: Option<PathBuf>,

    #[arg(
        long,
        value_name = "REL_PATH",
        help = "Workspace-relative path to the app.yaml document (replaces the default search)"
    )]
    pub config: Option<PathBuf>,

    #[arg(long, value_name = "JDK", help = "Override the jdk setting")]
    pub jdk: Option<String>,

    #[arg(long, value_name = "SERVER", help = "Override the server setting")]
    pub server: Option<String>,

    #[arg(
        long = "set",
        value_name = "KEY=VALUE",
        value_parser = parse_key_value,
        help = "Override any runtime_config setting (repeatable)"
    )]
    pub set: Vec<(String, String)>,

    #[arg(
        long,
        help = "Disable source builds; package a prebuilt artifact even if a build descriptor exists"
    )]
    pub no_source_build: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct PlanArgs {
    #[command(flatten)]
    pub generate: GenerateArgs,

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

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    s.split_once('=')
        .map(|(key, value)| (key.trim().to_string(), value.to_string()))
        .filter(|(key, _)| !key.is_empty())
        .ok_or_else(|| format!("Invalid override '{}': expected KEY=VALUE", s))
}
