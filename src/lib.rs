//! basset - embed binary assets as base64 string constants.
//!
//! Reads a binary file (a PDF, an image), base64-encodes it, and writes a
//! one-line `export const NAME = "...";` declaration to a generated source
//! file for consumption by a downstream web-application build.

pub mod cli;
pub mod embed;
pub mod utils;
