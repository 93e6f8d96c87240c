// tests/support/mod.rs
// Shared by several integration test binaries; each binary uses a different
// subset, so dead_code / unused_imports are allowed here.
#[allow(dead_code, unused_imports)]
pub mod mocks;

#[allow(dead_code, unused_imports)]
pub mod helpers;

#[allow(unused_imports)]
pub use helpers::*;
#[allow(unused_imports)]
pub use mocks::*;
