//! MIME type detection module
//!
//! Returns the corresponding Content-Type based on file extension.

/// Get MIME Content-Type based on file extension (case-insensitive)
///
/// Unmapped extensions resolve to `application/octet-stream`.
pub fn get_content_type(extension: Option<&str>) -> &'static str {
    let lower = extension.map(str::to_ascii_lowercase);
    match lower.as_deref() {
        Some("css") => "text/css",
        Some("js") => "application/javascript",
        Some("html") => "text/html",
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_types() {
        assert_eq!(get_content_type(Some("css")), "text/css");
        assert_eq!(get_content_type(Some("js")), "application/javascript");
        assert_eq!(get_content_type(Some("html")), "text/html");
        assert_eq!(get_content_type(Some("png")), "image/png");
        assert_eq!(get_content_type(Some("jpg")), "image/jpeg");
        assert_eq!(get_content_type(Some("jpeg")), "image/jpeg");
        assert_eq!(get_content_type(Some("svg")), "image/svg+xml");
        assert_eq!(get_content_type(Some("ico")), "image/x-icon");
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(get_content_type(Some("CSS")), "text/css");
        assert_eq!(get_content_type(Some("Jpeg")), "image/jpeg");
    }

    #[test]
    fn test_unknown_extension() {
        assert_eq!(get_content_type(Some("bin")), "application/octet-stream");
        assert_eq!(get_content_type(Some("xyz")), "application/octet-stream");
        assert_eq!(get_content_type(None), "application/octet-stream");
    }
}
