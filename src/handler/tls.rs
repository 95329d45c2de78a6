//! HTTPS enforcement middleware
//!
//! Consulted by the router before dispatch when the production flag is
//! set. Trusts the `X-Forwarded-Proto` header set by the fronting proxy:
//! plain-HTTP GETs are redirected to the HTTPS URL, other methods are
//! refused.

use crate::http;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Method, Request, Response};

/// Check the forwarded protocol; returns a response when the request must
/// be intercepted, `None` when it may proceed over HTTPS.
pub fn check<B>(req: &Request<B>) -> Option<Response<Full<Bytes>>> {
    let proto = req
        .headers()
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok());
    if proto == Some("https") {
        return None;
    }

    if matches!(*req.method(), Method::GET | Method::HEAD) {
        let Some(host) = req.headers().get("host").and_then(|v| v.to_str().ok()) else {
            return Some(http::build_400_response());
        };
        let uri = req.uri();
        let target = format!(
            "https://{host}{}",
            uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str())
        );
        return Some(http::build_permanent_redirect_response(&target));
    }

    Some(http::build_403_response(
        "Please use HTTPS when submitting data to this server",
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(method: Method, proto: Option<&str>) -> Request<Full<Bytes>> {
        let mut builder = Request::builder()
            .method(method)
            .uri("/admin")
            .header("host", "example.com");
        if let Some(p) = proto {
            builder = builder.header("x-forwarded-proto", p);
        }
        builder.body(Full::new(Bytes::new())).unwrap()
    }

    #[test]
    fn test_https_passes_through() {
        assert!(check(&request(Method::GET, Some("https"))).is_none());
        assert!(check(&request(Method::POST, Some("https"))).is_none());
    }

    #[test]
    fn test_plain_get_redirects() {
        let resp = check(&request(Method::GET, Some("http"))).unwrap();
        assert_eq!(resp.status(), 301);
        assert_eq!(
            resp.headers().get("Location").unwrap(),
            "https://example.com/admin"
        );
    }

    #[test]
    fn test_plain_post_is_refused() {
        let resp = check(&request(Method::POST, None)).unwrap();
        assert_eq!(resp.status(), 403);
    }
}
