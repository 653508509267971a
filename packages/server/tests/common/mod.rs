// Each integration test binary compiles its own copy of this module, so
// helpers unused by a particular binary are expected.
#![allow(dead_code)]

pub mod fixtures;
pub mod harness;
pub mod http;

pub use harness::TestHarness;
pub use http::{TestClient, TestResponse};
