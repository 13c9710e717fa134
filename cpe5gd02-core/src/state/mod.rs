//! Bring-up state machine
//!
//! Makes the load-bearing order of bring-up explicit. Each step names the
//! state it requires and the state it leaves behind, so ordering can be
//! checked without running any registration.

pub mod machine;
pub mod step;

pub use machine::BringupState;
pub use step::Step;
