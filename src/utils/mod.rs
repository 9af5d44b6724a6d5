//! Shared utility functions.
//!
//! - `mime`: MIME type resolution for data URIs

mod mime;

pub use mime::mime_for_path;
