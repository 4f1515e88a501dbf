//! Native Web API wrappers.
//!
//! Thin wrappers over `web_sys` instead of the `gloo-*` family, to keep
//! the wasm binary small. All direct browser API access lives here.

mod http;
pub mod route;
pub mod router;
mod storage;

pub use http::{HttpClient, HttpError, HttpRequestBuilder, HttpResponse, RequestBody};
pub use storage::LocalStorage;
