//! CLI Adapter.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::app::api::{self, InvocationOptions};
use crate::app::logging::init_logging;
use crate::domain::{StepFailure, StepParameters, StepStage};

#[derive(Parser)]
#[command(name = "pubset")]
#[command(version)]
#[command(about = "Resolve published URLs of configuration publish sets", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Save the URL of a named publish set to a file
    #[clap(visible_alias = "lpu")]
    ListPublishedUrl(ListPublishedUrlArgs),
}

#[derive(Args)]
struct ListPublishedUrlArgs {
    /// Configuration ID (conflicts with --configuration-file)
    #[arg(long, default_value = "")]
    configuration_id: String,
    /// JSON file whose "id" field holds the configuration ID
    #[arg(long, default_value = "")]
    configuration_file: String,
    /// Name of the publish set
    #[arg(long, default_value = "")]
    url_name: String,
    /// File receiving the URL
    #[arg(long, default_value = "")]
    url_file: String,
    /// Directory relative file names are resolved against (default: current directory)
    #[arg(long)]
    workspace: Option<PathBuf>,
    /// Config file (default: <workspace>/pubset.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the API base URL
    #[arg(long)]
    base_url: Option<Url>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::ListPublishedUrl(args) => run_list_published_url(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_list_published_url(args: ListPublishedUrlArgs) -> Result<(), StepFailure> {
    let workspace = match args.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().map_err(|e| StepStage::Validating.fail(e.into()))?,
    };

    let params = StepParameters::new(
        args.configuration_id,
        args.configuration_file,
        args.url_name,
        args.url_file,
    );
    let options =
        InvocationOptions { workspace, config_path: args.config, base_url: args.base_url };

    let outcome = api::list_published_url(params, &options)?;
    println!("✅ Saved published URL to {}", outcome.url_file.display());
    Ok(())
}
