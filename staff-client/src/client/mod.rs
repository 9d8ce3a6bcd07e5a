//! Client module - transports and the typed employee service API.
//!
//! Workflows only see [`EmployeeApi`]; the transport underneath is either the
//! network client or an in-process Router.

pub mod api;
pub mod http;
pub mod http_oneshot;

// Re-export main types
pub use api::EmployeeApi;
pub use http::{HttpClient, NetworkHttpClient, RawResponse};
pub use http_oneshot::OneshotHttpClient;
