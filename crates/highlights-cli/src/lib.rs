//! Book highlights viewer library.
//!
//! Configuration, logging, the load cycle and the terminal views used by
//! the `highlights` binary.

pub mod config;
pub mod load;
pub mod logging;
pub mod render;
