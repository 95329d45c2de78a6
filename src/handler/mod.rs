//! Request handler module
//!
//! Responsible for request routing dispatch and business logic processing:
//! static asset serving, the read and admin views, and admin form writes.

pub mod router;
pub mod static_files;
pub mod tls;

// Re-export main entry point
pub use router::handle_request;
pub use static_files::{AssetResult, StaticAssetResolver};
