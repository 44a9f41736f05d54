//! Logging utilities.
//!
//! Logger initialization lives here so binaries only make one call. Everything
//! else in the workspace logs through the `log` facade.

mod init;

pub use init::{init_logging, LoggingConfig};
