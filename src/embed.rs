//! Core embed operation: read a binary asset, base64-encode it, and write a
//! one-line constant declaration to a generated source file.
//!
//! The whole input is buffered in memory; asset sizes here are documents and
//! images, well within process memory. The output write goes through a temp
//! file in the destination directory and is renamed into place, so a failed
//! run never leaves a truncated fragment behind.

use std::io;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::debug;

/// How the payload is emitted in the generated fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Bare base64 text.
    Raw,
    /// `data:<mime>;base64,<payload>` URI with the given MIME type.
    DataUri(String),
}

impl OutputFormat {
    /// The string prepended to the base64 payload inside the quotes.
    pub fn prefix(&self) -> String {
        match self {
            Self::Raw => String::new(),
            Self::DataUri(mime) => format!("data:{};base64,", mime),
        }
    }
}

/// One embed invocation, fully specified by the caller.
///
/// Constant-name validity against the target language is the caller's
/// responsibility; the core interpolates the name as given.
#[derive(Debug, Clone)]
pub struct EmbedJob {
    /// Binary file to read.
    pub input: PathBuf,
    /// Generated source file to create or overwrite.
    pub output: PathBuf,
    /// Identifier the fragment binds the payload to.
    pub constant_name: String,
    /// Bare base64 or data URI.
    pub format: OutputFormat,
    /// Prepend the `export ` keyword to the declaration.
    pub export: bool,
}

/// Errors from a single embed run, split by which file and stage failed.
#[derive(Debug, Error)]
pub enum EmbedError {
    #[error("failed to read input {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("output directory does not exist: {0}")]
    MissingOutputDir(PathBuf),

    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// What a successful run produced, for operator-facing reporting.
#[derive(Debug)]
pub struct EmbedReport {
    pub output: PathBuf,
    pub input_bytes: usize,
    pub payload_chars: usize,
}

/// Render the one-line fragment the downstream build consumes.
///
/// Grammar: `[export ]const <NAME> = "<prefix><payload>";` plus a trailing
/// newline. An empty payload is valid (base64 of an empty file).
pub fn render_fragment(
    constant_name: &str,
    payload: &str,
    format: &OutputFormat,
    export: bool,
) -> String {
    let export_kw = if export { "export " } else { "" };
    format!(
        "{}const {} = \"{}{}\";\n",
        export_kw,
        constant_name,
        format.prefix(),
        payload
    )
}

/// Read the input, encode it, and overwrite the output with the rendered
/// fragment. The input is read before the output is touched, so an
/// unreadable input leaves any prior output file intact.
pub fn embed(job: &EmbedJob) -> Result<EmbedReport, EmbedError> {
    let bytes = std::fs::read(&job.input).map_err(|source| EmbedError::Read {
        path: job.input.clone(),
        source,
    })?;
    debug!(input = %job.input.display(), bytes = bytes.len(), "read asset");

    let payload = STANDARD.encode(&bytes);
    let fragment = render_fragment(&job.constant_name, &payload, &job.format, job.export);

    write_atomic(&job.output, fragment.as_bytes())?;
    debug!(output = %job.output.display(), "wrote fragment");

    Ok(EmbedReport {
        output: job.output.clone(),
        input_bytes: bytes.len(),
        payload_chars: payload.len(),
    })
}

/// Write via a temp file in the destination directory, then rename over the
/// target. Rename is atomic on the same filesystem, which the shared parent
/// directory guarantees.
fn write_atomic(output: &Path, contents: &[u8]) -> Result<(), EmbedError> {
    let parent = match output.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };
    if !parent.is_dir() {
        return Err(EmbedError::MissingOutputDir(parent));
    }

    let write_err = |source: io::Error| EmbedError::Write {
        path: output.to_path_buf(),
        source,
    };

    let mut tmp = NamedTempFile::new_in(&parent).map_err(write_err)?;
    io::Write::write_all(&mut tmp, contents).map_err(write_err)?;
    tmp.persist(output)
        .map_err(|e| write_err(e.error))
        .map(|_| ())
}
