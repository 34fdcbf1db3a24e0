//! sbom-doc: SBOM document rendering tool
//!
//! Renders an SPDX or CycloneDX SBOM as a console, Markdown, HTML, JSON or
//! PDF report with an NTIA minimum-elements summary.

use anyhow::{bail, Context, Result};
use clap::Parser;
use sbom_doc::{
    builder::{create_builder_with_options, BuilderOptions, OutputFormat},
    parsers::parse_sbom,
    report::generate_document,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "sbom-doc")]
#[command(version)]
#[command(about = "Render SBOMs as console, Markdown, HTML, JSON or PDF documents", long_about = None)]
#[command(after_help = "EXAMPLES:
    # Print a report to the terminal
    sbom-doc --input sample.spdx.json

    # Write a Markdown report
    sbom-doc --input sample.spdx.json --format markdown --output report.md

    # JSON to stdout for further processing
    sbom-doc --input sample.cdx.json --format json | jq '.\"NTIA Summary\"'

    # PDF (requires an output path)
    sbom-doc --input sample.spdx.json --format pdf --output report.pdf")]
struct Cli {
    /// Input SBOM file (SPDX or CycloneDX JSON)
    #[arg(short, long)]
    input: PathBuf,

    /// Output format
    #[arg(short, long, default_value = "console")]
    format: OutputFormat,

    /// Output file path (text formats fall back to stdout; required for pdf)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Font directory for PDF rendering (overrides the system search)
    #[arg(long, env = "SBOM_DOC_FONT_DIR")]
    font_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,
}

fn init_tracing(verbose: bool, quiet: bool) {
    let default_level = if verbose {
        "sbom_doc=debug,info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    // Fail before any rendering work: PDF cannot stream to stdout.
    if cli.format == OutputFormat::Pdf && cli.output.is_none() {
        bail!("--output is required for the pdf format");
    }

    let sbom = parse_sbom(&cli.input)
        .with_context(|| format!("reading SBOM from {}", cli.input.display()))?;
    tracing::debug!(
        packages = sbom.package_count(),
        files = sbom.file_count(),
        relationships = sbom.relationship_count(),
        "parsed {}",
        cli.input.display()
    );

    let options = BuilderOptions {
        no_color: cli.no_color,
        font_dir: cli.font_dir.clone(),
    };
    let mut builder = create_builder_with_options(cli.format, &options);
    let summary = generate_document(
        &sbom,
        &cli.input.display().to_string(),
        builder.as_mut(),
        cli.output.as_deref(),
    )
    .with_context(|| format!("generating {} report", cli.format))?;

    if let Some(output) = &cli.output {
        tracing::info!(
            conformant = summary.is_conformant(),
            "wrote {}",
            output.display()
        );
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(err) = run(&cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
