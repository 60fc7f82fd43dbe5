//! Output options for the SVG writer

/// How the guide tree is turned into text
#[derive(Debug, Clone, PartialEq)]
pub struct SvgConfig {
    /// Emit `<?xml ...?>` before the root so the output is a file of its own
    pub standalone: bool,

    /// Indent nested elements two spaces per level
    pub pretty_print: bool,

    /// Prepended to every class and id, keeping several inline guides on one
    /// page from sharing pattern ids
    pub id_prefix: String,

    /// `font-family` for all guide text; unset leaves it to the viewer
    pub font_family: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: false,
            pretty_print: true,
            id_prefix: "mpg-".to_string(),
            font_family: None,
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Use `prefix` for classes and ids; an empty prefix emits bare names
    pub fn with_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }

    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = Some(family.into());
        self
    }

    /// `name` with the configured prefix
    pub fn prefixed(&self, name: &str) -> String {
        format!("{}{}", self.id_prefix, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_embed_inline() {
        let config = SvgConfig::default();
        assert!(!config.standalone);
        assert!(config.pretty_print);
        assert!(config.font_family.is_none());
        assert_eq!(config.prefixed("pole"), "mpg-pole");
    }

    #[test]
    fn test_prefix_can_be_replaced_or_dropped() {
        let config = SvgConfig::new().with_id_prefix("guide2-");
        assert_eq!(config.prefixed("droplet"), "guide2-droplet");
        assert_eq!(config.with_id_prefix("").prefixed("droplet"), "droplet");
    }
}
