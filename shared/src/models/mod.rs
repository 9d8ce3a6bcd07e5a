//! Data models
//!
//! Wire shapes of the employee service. Field names follow the service's
//! camelCase JSON; history lists keep the service's own names on the wire.

pub mod department;
pub mod employee;
pub mod promotion;
pub mod roster;

// Re-exports
pub use department::*;
pub use employee::*;
pub use promotion::*;
pub use roster::*;
