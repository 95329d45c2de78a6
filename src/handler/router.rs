//! Request routing dispatch module
//!
//! Entry point for HTTP request processing. Static asset resolution is
//! attempted before logical-route matching on every GET, so a static file
//! shadowing a logical route wins. The router itself is stateless; each
//! request is classified independently.

use crate::config::AppState;
use crate::handler::static_files::{self, AssetResult};
use crate::handler::tls;
use crate::http;
use crate::logger;
use crate::render;
use crate::store::{split_lines, Document, DocumentStore};
use http_body_util::{BodyExt, Full};
use hyper::body::{Bytes, Incoming};
use hyper::{Method, Request, Response};
use serde::Deserialize;
use std::convert::Infallible;
use std::sync::Arc;

/// The fixed logical routes behind static resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalRoute {
    ReadView,
    AdminView,
    AdminSubmit,
    NotFound,
}

/// Classify (method, path) into a logical route.
pub fn match_logical(method: &Method, path: &str) -> LogicalRoute {
    match (method, path) {
        (&Method::GET | &Method::HEAD, "/" | "/pain-points") => LogicalRoute::ReadView,
        (&Method::GET | &Method::HEAD, "/admin") => LogicalRoute::AdminView,
        (&Method::POST, "/admin") => LogicalRoute::AdminSubmit,
        _ => LogicalRoute::NotFound,
    }
}

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let is_head = method == Method::HEAD;

    if state.access_log {
        logger::log_request(&method, req.uri(), req.version());
    }

    if state.config.server.enforce_https {
        if let Some(resp) = tls::check(&req) {
            return Ok(resp);
        }
    }

    // Static assets take precedence over logical routes on GET
    if matches!(method, Method::GET | Method::HEAD) {
        if let AssetResult::Found {
            path: file,
            content_type,
        } = state.assets.resolve(&path).await
        {
            return Ok(static_files::serve(&file, content_type, is_head).await);
        }
    }

    let response = match match_logical(&method, &path) {
        LogicalRoute::ReadView => {
            let doc = state.store.load().await;
            http::build_html_response(render::pain_points_page(&doc), is_head)
        }
        LogicalRoute::AdminView => {
            let doc = state.store.load().await;
            http::build_html_response(render::admin_page(&doc), is_head)
        }
        LogicalRoute::AdminSubmit => handle_admin_submit(req, &state).await,
        LogicalRoute::NotFound => http::build_404_response(),
    };
    Ok(response)
}

/// Read and apply an admin form submission
async fn handle_admin_submit(
    req: Request<Incoming>,
    state: &Arc<AppState>,
) -> Response<Full<Bytes>> {
    if let Some(resp) = check_body_size(&req, state.config.http.max_body_size) {
        return resp;
    }

    let body = match req.into_body().collect().await {
        Ok(collected) => collected.to_bytes(),
        Err(e) => {
            logger::log_warning(&format!("Failed to read request body: {e}"));
            return http::build_400_response();
        }
    };

    apply_admin_update(&state.store, &body).await
}

/// Admin form payload: two newline-delimited text blobs. An absent field
/// is treated as empty.
#[derive(Debug, Default, Deserialize)]
struct AdminForm {
    #[serde(default)]
    sustainability: String,
    #[serde(default)]
    integrations: String,
}

/// Parse a form-encoded body, replace the stored document, and redirect.
///
/// A save failure is a 500; the router never redirects as if the save
/// succeeded when it did not.
pub async fn apply_admin_update(store: &DocumentStore, body: &[u8]) -> Response<Full<Bytes>> {
    let form: AdminForm = match serde_urlencoded::from_bytes(body) {
        Ok(form) => form,
        Err(e) => {
            logger::log_warning(&format!("Malformed admin form body: {e}"));
            return http::build_400_response();
        }
    };

    let doc = Document {
        sustainability: split_lines(&form.sustainability),
        integrations: split_lines(&form.integrations),
    };

    match store.save(&doc).await {
        Ok(()) => http::build_redirect_response("/pain-points"),
        Err(e) => {
            logger::log_error(&format!("Failed to persist document: {e}"));
            http::build_500_response()
        }
    }
}

/// Validate Content-Length header and return 413 if exceeded
fn check_body_size(req: &Request<Incoming>, max_body_size: u64) -> Option<Response<Full<Bytes>>> {
    let content_length = req.headers().get("content-length")?;
    content_length.to_str().map_or_else(
        |_| {
            logger::log_warning("Content-Length header contains non-ASCII characters");
            None
        },
        |size_str| match size_str.parse::<u64>() {
            Ok(size) if size > max_body_size => {
                logger::log_error(&format!(
                    "Request body too large: {size} bytes (max: {max_body_size})"
                ));
                Some(http::build_413_response())
            }
            Err(_) => {
                logger::log_warning(&format!(
                    "Invalid Content-Length value: '{size_str}', skipping size check"
                ));
                None
            }
            _ => None,
        },
    )
}
