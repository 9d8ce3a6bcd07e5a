//! In-memory stand-in for the employee service
//!
//! Serves the four routes the console uses with the same observable
//! behaviour as the real service: 20 records per roster page, plain-text
//! error bodies, plain-text promotion replies. Used by the client's tests and
//! runnable on its own for local development.

pub mod api;
pub mod state;

pub use api::{app, router};
pub use state::{AppState, Store};
