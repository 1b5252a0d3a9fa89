// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

use clap::Parser;

use posenet_pipeline::cli::args::{Cli, Commands};
use posenet_pipeline::cli::run::run_pipeline;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run(args) => run_pipeline(&args),
    }
}
