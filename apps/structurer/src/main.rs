mod config;
mod errors;
mod keywords;
mod models;
mod pipeline;
mod structure;

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{HeaderMode, PipelineOptions};
use crate::errors::AppError;
use crate::keywords::KeywordSet;
use crate::models::StyledBlock;
use crate::pipeline::structure_resume;

/// Structures raw resume text into a role-tagged block sequence for the
/// external renderer.
#[derive(Debug, Parser)]
#[command(name = "structurer", version)]
struct Cli {
    /// Path to the resume text file; reads stdin when omitted
    resume: Option<PathBuf>,

    /// Path to a JSON array of keyword phrases to emphasize
    #[arg(long)]
    keywords: Option<PathBuf>,

    /// Use the strict canonical header vocabulary instead of the loose
    /// rendering heuristic
    #[arg(long)]
    strict_headers: bool,

    /// Keep markdown artifacts instead of stripping them before segmentation
    #[arg(long)]
    keep_markdown: bool,
}

fn main() -> Result<()> {
    // Structured logging goes to stderr; stdout carries the block JSON.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let text = read_resume_text(cli.resume.as_deref())?;
    let keyword_set = match cli.keywords.as_deref() {
        Some(path) => read_keywords(path)?,
        None => KeywordSet::default(),
    };

    let options = PipelineOptions {
        header_mode: if cli.strict_headers {
            HeaderMode::Strict
        } else {
            HeaderMode::Loose
        },
        strip_markdown: !cli.keep_markdown,
    };

    let blocks = structure_resume(&text, &keyword_set, &options);
    info!(
        blocks = blocks.len(),
        keywords = keyword_set.len(),
        "structured resume"
    );

    write_blocks(&blocks)?;
    Ok(())
}

fn read_resume_text(path: Option<&Path>) -> Result<String, AppError> {
    match path {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Reads the keyword file. Malformed content is coerced to an empty set by
/// the parser; only the file read itself can fail.
fn read_keywords(path: &Path) -> Result<KeywordSet, AppError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(KeywordSet::from_json(&raw))
}

fn write_blocks(blocks: &[StyledBlock]) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(blocks)?);
    Ok(())
}
