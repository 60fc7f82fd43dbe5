//! SVG renderer for care guides
//!
//! This module takes a validated document and its layout and produces an
//! SVG element tree, serialized to a string with appropriate CSS classes.

pub mod config;
pub mod guide;
pub mod svg;

pub use config::SvgConfig;
pub use guide::render_tree;
pub use svg::{Element, Node};
