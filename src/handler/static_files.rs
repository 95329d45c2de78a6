//! Static asset resolution and serving module
//!
//! Maps a requested path to a real file strictly inside the asset root.
//! The containment check is the traversal-prevention invariant: a resolved
//! [`AssetResult::Found`] path is always inside the root, even for inputs
//! like `../../etc/passwd`, encoded slashes, or absolute-looking paths.

use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Outcome of resolving a requested path against the asset root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetResult {
    Found {
        path: PathBuf,
        content_type: &'static str,
    },
    NotFound,
}

/// Resolves request paths to files inside a fixed root directory.
pub struct StaticAssetResolver {
    root: PathBuf,
}

impl StaticAssetResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Resolve a raw request path to an asset file.
    ///
    /// The path is percent-decoded, lexically normalized (leading slashes
    /// stripped, `.`/`..` segments collapsed without ever escaping the
    /// root), joined to the root, then canonicalized and prefix-checked
    /// against the canonical root. Anything that is not a regular in-root
    /// file resolves to `NotFound`.
    pub async fn resolve(&self, request_path: &str) -> AssetResult {
        let Ok(decoded) = urlencoding::decode(request_path) else {
            return AssetResult::NotFound;
        };
        let Some(relative) = sanitize_path(&decoded) else {
            return AssetResult::NotFound;
        };

        let root = match fs::canonicalize(&self.root).await {
            Ok(p) => p,
            Err(e) => {
                logger::log_warning(&format!(
                    "Asset root not found or inaccessible '{}': {e}",
                    self.root.display()
                ));
                return AssetResult::NotFound;
            }
        };

        // File not found is common (404), no need to log
        let Ok(canonical) = fs::canonicalize(root.join(&relative)).await else {
            return AssetResult::NotFound;
        };
        if !canonical.starts_with(&root) {
            logger::log_warning(&format!(
                "Path traversal attempt blocked: {} -> {}",
                request_path,
                canonical.display()
            ));
            return AssetResult::NotFound;
        }

        match fs::metadata(&canonical).await {
            Ok(meta) if meta.is_file() => {}
            _ => return AssetResult::NotFound,
        }

        let content_type =
            mime::get_content_type(relative.extension().and_then(|e| e.to_str()));
        AssetResult::Found {
            path: canonical,
            content_type,
        }
    }
}

/// Serve an already-resolved asset file.
///
/// A read failure here is distinct from absence: the path resolved, so a
/// failed read (permissions, race with deletion) is a 500, not a 404.
pub async fn serve(path: &Path, content_type: &str, is_head: bool) -> Response<Full<Bytes>> {
    match fs::read(path).await {
        Ok(content) => http::build_asset_response(content, content_type, is_head),
        Err(e) => {
            logger::log_error(&format!("Failed to read asset '{}': {e}", path.display()));
            http::build_500_response()
        }
    }
}

/// Lexically normalize a decoded request path into a root-relative path.
///
/// Returns `None` for the empty path or any path whose `..` segments would
/// climb above the root.
fn sanitize_path(path: &str) -> Option<PathBuf> {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "" | "." => {}
            ".." => {
                segments.pop()?;
            }
            s => segments.push(s),
        }
    }
    if segments.is_empty() {
        return None;
    }
    Some(segments.iter().collect())
}
