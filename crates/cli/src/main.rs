//! apidoc CLI
//!
//! Command-line interface for rendering documentation as native apidoc or
//! OpenAPI 3 documents.

use anyhow::{Context, Result};
use apidoc_common::Document;
use apidoc_output::{Options, OutputType};
use clap::{Parser, Subcommand};
use colored::*;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "apidoc")]
#[command(version, about = "Render API documentation as apidoc or OpenAPI documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a documentation file
    #[command(after_help = "EXAMPLES:\n  \
        # Render OpenAPI YAML next to the input\n  \
        apidoc render --input apidoc.yaml --output openapi.yaml --type openapi+yaml\n\n  \
        # Only the public endpoints, into a directory\n  \
        apidoc render --input apidoc.json --output ./docs --type openapi+json --group public\n\n  \
        # Use output options from a config file\n  \
        apidoc render --input apidoc.yaml --config output.yaml")]
    Render {
        /// Path to the documentation file (.json, .yaml or .yml)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file or directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output type (see `apidoc formats`)
        #[arg(short = 't', long = "type")]
        output_type: Option<String>,

        /// Comma-separated list of groups (tags) to render
        #[arg(short, long, value_delimiter = ',')]
        group: Option<Vec<String>>,

        /// YAML file with output options; flags take precedence
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// List supported output types
    Formats,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose);

    if cli.verbose {
        println!("{} Verbose mode enabled", "→".cyan());
    }

    match cli.command {
        Commands::Render {
            input,
            output,
            output_type,
            group,
            config,
        } => {
            let options = resolve_options(config.as_deref(), output, output_type, group)?;
            render_command(&input, &options, cli.verbose)?;
        }
        Commands::Formats => formats_command(),
    }

    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over `--verbose`
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Merge config-file options with command-line flags
fn resolve_options(
    config: Option<&Path>,
    output: Option<PathBuf>,
    output_type: Option<String>,
    groups: Option<Vec<String>>,
) -> Result<Options> {
    let mut options = match config {
        Some(path) => Options::load(path)
            .with_context(|| format!("Failed to load options from {}", path.display()))?,
        None => Options::default(),
    };

    if let Some(output) = output {
        options.path = output;
    }
    if let Some(output_type) = output_type {
        options.output_type = output_type;
    }
    if let Some(groups) = groups {
        options.groups = groups;
    }
    if options.path.as_os_str().is_empty() {
        options.path = PathBuf::from(".");
    }

    Ok(options)
}

fn render_command(input: &Path, options: &Options, verbose: bool) -> Result<()> {
    println!("{} Reading documentation: {}", "→".cyan(), input.display());

    let doc = Document::load(input).context("Failed to load documentation")?;

    if verbose {
        println!("  Title: {}", doc.title);
        println!("  Version: {}", doc.version);
        println!("  Endpoints: {}", doc.endpoints.len());
        if !options.groups.is_empty() {
            println!("  Groups: {}", options.groups.join(", "));
        }
    }

    tracing::debug!(?options, "resolved output options");
    let target = options.sanitize().context("Invalid output options")?;
    println!(
        "{} Rendering {} to {}",
        "→".cyan(),
        target.output_type().to_string().yellow(),
        target.path().display()
    );

    let rendered = target.render(&doc).context("Failed to render documentation")?;

    println!("\n{}", "✓ Render complete!".green().bold());
    println!("  📄 {}", rendered.path.display());
    println!("  Endpoints: {}", rendered.endpoints);
    if verbose {
        println!("  Bytes: {}", rendered.bytes);
        println!("  Elapsed: {:?}", rendered.elapsed);
    }

    Ok(())
}

fn formats_command() {
    println!("{}", "Output types:".bold());
    for output_type in OutputType::ALL {
        let note = match output_type.marshaler() {
            Ok(_) => String::new(),
            Err(_) => format!(" {}", "(not supported)".red()),
        };
        println!(
            "  • {} → {}{}",
            output_type.to_string().cyan(),
            output_type.default_filename(),
            note
        );
    }
}
