//! Layout engine for the care guide grid
//!
//! This module turns pole counts and panel flags into pixel geometry:
//! canvas size, per-pole origins, and the tips panel box.

pub mod config;
pub mod engine;
pub mod error;
pub mod types;

pub use config::LayoutConfig;
pub use engine::{compute, LayoutInput};
pub use error::LayoutError;
pub use types::*;
