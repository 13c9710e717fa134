//! Configuration types
//!
//! Board configuration is compile-time only: immutable, role-tagged
//! structures collected in one static table.

pub mod board;
pub mod types;

pub use board::{BoardResources, CPE5GD02};
pub use types::*;
