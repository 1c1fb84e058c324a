//! CLI binary entry point for adf-codegen

#[cfg(feature = "cli")]
use adf_codegen::cli::commands::generate::{GenerateArgs, handle_generate};
#[cfg(feature = "cli")]
use adf_codegen::cli::commands::validate::handle_validate;
#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "adf-codegen")]
#[command(about = "Generate Azure Data Factory resources from a project model")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand)]
enum Commands {
    /// Generate pipeline, dataset and linked service JSON plus a deployment script
    Generate {
        /// Model file (.yaml, .yml or .json) or a directory of model files
        input: PathBuf,
        /// Output directory (overrides adf-codegen.toml and ADF_CODEGEN_OUTPUT_DIR)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Configuration file (default: ./adf-codegen.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Write compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
        /// Don't write deploy.ps1
        #[arg(long)]
        no_deploy_script: bool,
        /// Skip project validation before generating
        #[arg(long)]
        no_validate: bool,
    },
    /// Validate a project model without generating anything
    Validate {
        /// Model file or directory of model files
        input: PathBuf,
    },
}

#[cfg(feature = "cli")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(feature = "cli")]
fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            input,
            output,
            config,
            compact,
            no_deploy_script,
            no_validate,
        } => {
            let args = GenerateArgs {
                input,
                output,
                config,
                compact,
                no_deploy_script,
                skip_validation: no_validate,
            };
            handle_generate(&args).map(|_| ())
        }
        Commands::Validate { input } => handle_validate(&input),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature is not enabled. Build with --features cli");
    std::process::exit(1);
}
