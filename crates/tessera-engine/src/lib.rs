//! Tessera engine crate.
//!
//! Window + GPU runtime, host page parsing, shader loading and the square
//! renderer used by the demo binary.

pub mod device;
pub mod window;
pub mod time;
pub mod core;

pub mod logging;
pub mod math;
pub mod page;
pub mod paint;
pub mod render;
pub mod shader;
