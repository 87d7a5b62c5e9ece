//! Aeromx Common - Shared constants and utilities for aeromx crates

pub mod constants;
pub mod utils;

pub use constants::*;
pub use utils::*;
