//! HTTP protocol layer module
//!
//! Provides HTTP protocol-related base functionality, decoupled from
//! specific business logic.

pub mod mime;
pub mod response;

// Re-export commonly used builders
pub use response::{
    build_400_response, build_403_response, build_404_response, build_413_response,
    build_500_response, build_asset_response, build_html_response,
    build_permanent_redirect_response, build_redirect_response,
};
