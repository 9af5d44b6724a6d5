//! CLI shell around the embed operation.
//!
//! The core takes an explicit [`EmbedJob`]; this module is the thin caller
//! that fills one in from arguments, supplies defaults (constant name from
//! the input file stem, MIME type from the extension), and reports the
//! outcome to the operator.

use std::path::{Path, PathBuf};

use clap::Parser;
use console::style;
use tracing::info;

use crate::embed::{embed, EmbedJob, OutputFormat};
use crate::utils::mime_for_path;

#[derive(Parser)]
#[command(name = "basset")]
#[command(about = "Embed a binary asset as a base64 string constant in a generated source file")]
#[command(version)]
pub struct Cli {
    /// Binary asset to embed
    input: PathBuf,

    /// Generated source file to write (created or overwritten)
    #[arg(short, long)]
    output: PathBuf,

    /// Constant name to bind the payload to (default: derived from the
    /// input file stem, e.g. Gina_Sig.jpg -> GINA_SIG_BASE64)
    #[arg(short, long)]
    name: Option<String>,

    /// Emit a data: URI instead of bare base64
    #[arg(long)]
    data_uri: bool,

    /// MIME type for the data URI (default: guessed from the input
    /// extension; implies --data-uri)
    #[arg(long)]
    mime: Option<String>,

    /// Emit a plain `const` declaration without the `export` keyword
    #[arg(long)]
    no_export: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

/// Derive a constant name from an asset path.
///
/// Uppercases the file stem, collapses non-alphanumeric runs to `_`,
/// prefixes a leading digit with `_`, and appends `_BASE64`.
pub fn constant_name_for(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();

    let mut name = String::with_capacity(stem.len());
    let mut last_was_sep = true;
    for c in stem.chars() {
        if c.is_ascii_alphanumeric() {
            name.push(c.to_ascii_uppercase());
            last_was_sep = false;
        } else if !last_was_sep {
            name.push('_');
            last_was_sep = true;
        }
    }
    let name = name.trim_end_matches('_');
    let name = if name.is_empty() { "ASSET" } else { name };

    if name.starts_with(|c: char| c.is_ascii_digit()) {
        format!("_{}_BASE64", name)
    } else {
        format!("{}_BASE64", name)
    }
}

/// Parse arguments, run the embed, and report the result.
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.data_uri || cli.mime.is_some() {
        let mime = cli.mime.unwrap_or_else(|| mime_for_path(&cli.input));
        OutputFormat::DataUri(mime)
    } else {
        OutputFormat::Raw
    };

    let constant_name = cli
        .name
        .unwrap_or_else(|| constant_name_for(&cli.input));

    let job = EmbedJob {
        input: cli.input,
        output: cli.output,
        constant_name,
        format,
        export: !cli.no_export,
    };

    info!(
        input = %job.input.display(),
        constant = %job.constant_name,
        "embedding asset"
    );

    let report = embed(&job)?;

    println!(
        "{} Embedded {} ({} bytes) as {} in {}",
        style("✓").green(),
        job.input.display(),
        report.input_bytes,
        job.constant_name,
        report.output.display()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constant_name_from_stem() {
        assert_eq!(
            constant_name_for(Path::new("Gina_Sig.jpg")),
            "GINA_SIG_BASE64"
        );
        assert_eq!(
            constant_name_for(Path::new("assets/new pt-packet.pdf")),
            "NEW_PT_PACKET_BASE64"
        );
    }

    #[test]
    fn test_constant_name_leading_digit() {
        assert_eq!(
            constant_name_for(Path::new("2025_packet.pdf")),
            "_2025_PACKET_BASE64"
        );
    }

    #[test]
    fn test_constant_name_degenerate_stem() {
        assert_eq!(constant_name_for(Path::new("---.bin")), "ASSET_BASE64");
        assert_eq!(constant_name_for(Path::new("")), "ASSET_BASE64");
    }
}
