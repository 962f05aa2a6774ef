//! # Runtime Module
//!
//! Runtime components for the service: initialization, the serve loop and
//! shutdown signal handling.

pub mod initialization;
pub mod serve_loop;
pub mod shutdown;

pub use initialization::*;
pub use serve_loop::*;
pub use shutdown::*;
