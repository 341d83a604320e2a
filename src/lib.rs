//! Lane Hopper (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benches can use `lane_hopper::{core,input,term,types}`.

pub use lane_hopper_core as core;
pub use lane_hopper_input as input;
pub use lane_hopper_term as term;
pub use lane_hopper_types as types;
