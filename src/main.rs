//! openapi-httpdomain CLI entrypoint
//! Loads an OpenAPI document and prints the example block of every request
//! body and response that has one.
#![deny(unsafe_code)]

// Internal imports (std, crate)
use std::io::{self, Write};
use std::path::PathBuf;

use openapi_httpdomain::core::{MarkupFlavor, RendererConfig};
use openapi_httpdomain::infrastructure::{DocumentLoader, HttpExampleFetcher};
use openapi_httpdomain::openapi::ContentSection;
use openapi_httpdomain::renderer::{ExampleFetcher, HttpDomainRenderer};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "openapi-httpdomain")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Render example blocks for every operation of an OpenAPI document
    Render {
        /// Path or URL to OpenAPI document (YAML or JSON)
        #[arg(long)]
        schema_path: String,
        /// TOML renderer configuration file
        #[arg(long)]
        config: Option<PathBuf>,
        /// Preferred content-type, may be repeated; replaces the configured list
        #[arg(long = "prefer")]
        prefer: Vec<String>,
        /// Markup flavor (restructuredtext, markdown, commonmark)
        #[arg(long)]
        markup: Option<MarkupFlavor>,
    },
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout carries only markup
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Render {
            schema_path,
            config,
            prefer,
            markup,
        } => render(&schema_path, config, prefer, markup),
    }
}

/// Render every content section of the document to stdout
fn render(
    schema_path: &str,
    config_path: Option<PathBuf>,
    prefer: Vec<String>,
    markup: Option<MarkupFlavor>,
) -> anyhow::Result<()> {
    let mut config = match &config_path {
        Some(path) => RendererConfig::from_file(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => RendererConfig::default(),
    };
    if !prefer.is_empty() {
        config.response_example_preference = prefer;
    }
    if let Some(markup) = markup {
        config.markup = markup;
    }

    let fetcher =
        HttpExampleFetcher::new(config.fetch_timeout()).context("Failed to create HTTP client")?;
    let document = DocumentLoader::new(fetcher.clone())
        .load(schema_path)
        .with_context(|| format!("Failed to load OpenAPI document {schema_path}"))?;

    info!(
        title = document.title().unwrap_or(""),
        markup = %config.markup,
        "Rendering examples"
    );

    let sections = document
        .content_sections()
        .context("Failed to collect request and response content")?;
    let renderer = HttpDomainRenderer::with_fetcher(config, fetcher);

    let stdout = io::stdout();
    let rendered = write_sections(&mut stdout.lock(), &renderer, &sections)
        .context("Failed to write rendered examples")?;

    info!(
        rendered,
        sections = sections.len(),
        "Finished rendering examples"
    );
    Ok(())
}

/// Write a heading, a blank line, the block and a blank line for every
/// section that has an example; returns how many were written
fn write_sections<W: Write, F: ExampleFetcher>(
    out: &mut W,
    renderer: &HttpDomainRenderer<F>,
    sections: &[ContentSection],
) -> io::Result<usize> {
    let mut rendered = 0usize;
    for section in sections {
        let mut lines = renderer.render_content(&section.content).peekable();
        if lines.peek().is_none() {
            continue;
        }
        writeln!(out, "{}", section.heading())?;
        writeln!(out)?;
        for line in lines {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        rendered += 1;
    }
    Ok(rendered)
}
