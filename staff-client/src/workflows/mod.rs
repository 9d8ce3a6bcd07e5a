//! Workflow logic: input preparation and response classification.
//!
//! Everything here is synchronous and side-effect free; [`Console`](crate::Console)
//! wires it to the transport and the view-state slots.

pub mod directory;
pub mod lookup;
pub mod promotion;
pub mod roster;

pub use directory::DepartmentDirectory;
