//! MIME type resolution for data-URI payloads.

use std::path::Path;

/// Fallback for extensions `mime_guess` cannot place.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolve the MIME type for an asset from its file extension.
///
/// Covers the formats this tool is pointed at in practice (pdf, jpeg, png,
/// webfonts) through `mime_guess`; anything unrecognized comes back as
/// `application/octet-stream`, which a data URI consumer treats as opaque
/// bytes.
pub fn mime_for_path(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_raw()
        .unwrap_or(OCTET_STREAM)
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_asset_types() {
        assert_eq!(mime_for_path(Path::new("Gina_Sig.jpg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("logo.png")), "image/png");
        assert_eq!(
            mime_for_path(Path::new("packet_2025.pdf")),
            "application/pdf"
        );
        assert_eq!(mime_for_path(Path::new("icon.svg")), "image/svg+xml");
    }

    #[test]
    fn test_unknown_extension_falls_back() {
        assert_eq!(mime_for_path(Path::new("blob.xyzzy")), OCTET_STREAM);
        assert_eq!(mime_for_path(Path::new("no_extension")), OCTET_STREAM);
    }
}
