//! Core module tree: the diffusion energy model and its support code.

#[macro_use]
pub mod debug; // gated debug logging (DIFFUSION_DEBUG=1) provides debug_log! macro
pub mod diffusion;
pub mod error;

pub use error::{CoreError, CoreResult};
