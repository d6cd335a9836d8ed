//! Library surface of the jsty binary, split out so the driver can be
//! exercised by integration tests.

pub mod args;
pub mod driver;
pub mod tracing_config;
