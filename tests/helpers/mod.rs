// Test Helper Modules
//
// Shared by contract and integration tests. Include with:
//
//   #[path = "../helpers/mod.rs"]
//   mod helpers;
//
// Each test binary uses a different subset of helpers.
#![allow(dead_code)]

pub mod test_data;
pub mod test_server;

// Re-export commonly used types and functions
pub use assertions::*;
pub use test_data::*;
pub use test_server::*;
