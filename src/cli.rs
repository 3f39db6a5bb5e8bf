//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// assetpack - asset bundle compressor
///
/// Combines the script and stylesheet files of declared asset bundles into
/// per-target output files and writes a manifest mapping bundles to targets.
#[derive(Parser, Debug)]
#[command(
    name = "assetpack",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Combine asset bundles into compressed targets",
    long_about = "Combine asset bundles into compressed targets. The script and stylesheet files \
                  of the bundles each target lists are joined into per-target outputs, and a \
                  manifest maps every bundle to the target that now serves it.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  assetpack compress assets.yaml config/assets-prod.yaml\n    \
                  assetpack compress assets.yaml out.yaml --js-compressor \"uglifyjs {from} -o {to}\"\n    \
                  assetpack completions bash"
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Only print errors
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build targets and write the bundle manifest
    Compress(CompressArgs),

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the compress command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Concatenate every target's files:\n    assetpack compress assets.yaml config/assets-prod.yaml\n\n\
                  Minify scripts with an external tool:\n    \
                  assetpack compress assets.yaml out.yaml --js-compressor \"uglifyjs {from} -o {to}\"\n\n\
                  In a compressor template, {from} expands to every input file and {to} to the output file.")]
pub struct CompressArgs {
    /// Configuration file declaring bundles and targets
    pub config_file: PathBuf,

    /// Path of the manifest to write
    pub bundle_file: PathBuf,

    /// Command template used to compress scripts (default: concatenate)
    #[arg(long, value_name = "CMD")]
    pub js_compressor: Option<String>,

    /// Command template used to compress stylesheets (default: concatenate)
    #[arg(long, value_name = "CMD")]
    pub css_compressor: Option<String>,
}

/// Arguments for the completions command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
