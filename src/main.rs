//! assetpack - asset bundle compressor
//!
//! Combines the files of declared asset bundles into per-target outputs and
//! writes a manifest that redirects every absorbed bundle to its target.

use clap::Parser;

mod builder;
mod cli;
mod commands;
mod config;
mod domain;
mod error;
mod logger;
mod manifest;
mod progress;
mod registry;
mod resolver;
mod rewriter;

#[cfg(test)]
mod test_fixtures;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    logger::init_logger(cli.verbose, cli.quiet, cli.no_color);

    let result = match cli.command {
        Commands::Compress(args) => commands::compress::run(args, cli.quiet),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
