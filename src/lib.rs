//! Moss Pole Guide - care guide diagrams for climbing plants
//!
//! This library validates a guide document, lays out its moss poles on a
//! grid, and renders the result as SVG.
//!
//! # Example
//!
//! ```rust
//! use moss_pole_guide::render;
//!
//! let svg = render(r#"{
//!     "config": {},
//!     "poles": [{
//!         "name": "Monstera",
//!         "humidityTop": "70-80",
//!         "humidityMiddle": "65-75",
//!         "humidityBottom": "60-70"
//!     }]
//! }"#).unwrap();
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Monstera"));
//! ```

pub mod color;
pub mod error;
pub mod input;
pub mod layout;
pub mod model;
pub mod presets;
pub mod renderer;
pub mod text;
pub mod validate;

pub use color::{HexColor, RandomSource};
pub use error::{FieldError, ParseError, SchemaError};
pub use input::{parse_input, InputFormat};
pub use layout::{Layout, LayoutConfig, LayoutError};
pub use model::{Document, Pole};
pub use renderer::{render_tree, Element, SvgConfig};
pub use validate::validate;

use rand::rngs::StdRng;
use rand::SeedableRng;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The input text is not valid JSON/TOML
    #[error("{0}")]
    Parse(#[from] ParseError),

    /// The document does not match the schema
    #[error("{0}")]
    Schema(#[from] SchemaError),

    /// Error during layout
    #[error("layout error: {0}")]
    Layout(#[from] LayoutError),
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Seed for the speckle texture; `None` draws fresh entropy per render
    pub seed: Option<u64>,
    /// Format of the source text
    pub format: InputFormat,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Make the speckle texture reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the input format
    pub fn with_format(mut self, format: InputFormat) -> Self {
        self.format = format;
        self
    }

    /// A fresh random source for one render
    fn random_source(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}

/// Parse and validate source text into a document
pub fn load_document(source: &str, format: InputFormat) -> Result<Document, RenderError> {
    let raw = parse_input(source, format)?;
    Ok(validate(&raw)?)
}

/// Render JSON source to SVG with default configuration
///
/// This is the main entry point for the library. It parses and validates
/// the source, computes layout, and generates SVG output.
pub fn render(source: &str) -> Result<String, RenderError> {
    render_with_config(source, &RenderConfig::default())
}

/// Render source text to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use moss_pole_guide::{render_with_config, InputFormat, RenderConfig, SvgConfig};
///
/// let source = r#"
/// [config.title]
/// enabled = false
///
/// [[poles]]
/// name = "Pothos"
/// humidityTop = "60-70"
/// humidityMiddle = "55-65"
/// humidityBottom = "50-60"
/// "#;
/// let config = RenderConfig::new()
///     .with_format(InputFormat::Toml)
///     .with_svg(SvgConfig::default().with_pretty_print(false))
///     .with_seed(7);
///
/// let svg = render_with_config(source, &config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 630 650""#));
/// ```
pub fn render_with_config(source: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let document = load_document(source, config.format)?;
    render_document(&document, config)
}

/// Render an already validated document
pub fn render_document(document: &Document, config: &RenderConfig) -> Result<String, RenderError> {
    let mut source = config.random_source();
    render_document_with(document, config, &mut source)
}

/// Render a validated document drawing speckles from `source`
pub fn render_document_with(
    document: &Document,
    config: &RenderConfig,
    source: &mut dyn RandomSource,
) -> Result<String, RenderError> {
    let tree = build_tree(document, config, source)?;
    Ok(tree.to_svg(&config.svg))
}

/// Lay out and build the element tree without serializing it
pub fn build_tree(
    document: &Document,
    config: &RenderConfig,
    source: &mut dyn RandomSource,
) -> Result<Element, RenderError> {
    let input = layout::LayoutInput::from_document(document, &config.layout);
    let layout = layout::compute(&input, &config.layout)?;
    Ok(render_tree(document, &layout, &config.svg, source))
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "config": {},
        "poles": [{
            "name": "Monstera",
            "humidityTop": "70-80",
            "humidityMiddle": "65-75",
            "humidityBottom": "60-70"
        }]
    }"#;

    #[test]
    fn test_render_minimal() {
        let svg = render(MINIMAL).unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"viewBox="0 0 630 680""#));
        assert!(svg.contains("70-80%"));
    }

    #[test]
    fn test_render_malformed_input() {
        let err = render("{ not json").unwrap_err();
        assert!(matches!(err, RenderError::Parse(_)));
    }

    #[test]
    fn test_render_schema_error() {
        let err = render(r#"{"config": {}, "poles": []}"#).unwrap_err();
        assert!(matches!(err, RenderError::Schema(_)));
        assert!(err.to_string().contains("At least one moss pole is required"));
    }

    #[test]
    fn test_seeded_renders_match() {
        let config = RenderConfig::new().with_seed(11);
        assert_eq!(
            render_with_config(MINIMAL, &config).unwrap(),
            render_with_config(MINIMAL, &config).unwrap()
        );
    }

    #[test]
    fn test_empty_document_fails_layout() {
        let mut doc = load_document(MINIMAL, InputFormat::Json).unwrap();
        doc.poles.clear();
        let err = render_document(&doc, &RenderConfig::default()).unwrap_err();
        assert!(matches!(err, RenderError::Layout(LayoutError::EmptyGrid { .. })));
    }
}
