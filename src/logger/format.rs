//! Access log formatting module

use chrono::Local;
use hyper::{Method, Uri, Version};

/// A single access-log line for an incoming request.
pub struct AccessLogEntry<'a> {
    pub method: &'a Method,
    pub uri: &'a Uri,
    pub version: Version,
}

impl AccessLogEntry<'_> {
    /// Format as `[timestamp] METHOD /path HTTP-version`
    pub fn format(&self) -> String {
        let timestamp = Local::now().format("%d/%b/%Y:%H:%M:%S %z");
        format!(
            "[{timestamp}] {} {} {:?}",
            self.method, self.uri, self.version
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_contains_method_and_path() {
        let uri: Uri = "/pain-points".parse().unwrap();
        let entry = AccessLogEntry {
            method: &Method::GET,
            uri: &uri,
            version: Version::HTTP_11,
        };
        let line = entry.format();
        assert!(line.contains("GET /pain-points"));
        assert!(line.contains("HTTP/1.1"));
    }
}
