//! Configuration for the layout engine

/// Geometric constants for the guide grid
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutConfig {
    /// Horizontal distance between neighbouring poles
    pub pole_spacing: f64,

    /// Vertical distance between rows of poles
    pub row_spacing: f64,

    /// Width of the care tips side panel
    pub tips_panel_width: f64,

    /// Left padding when the tips panel is shown
    pub side_padding_with_tips: f64,

    /// Left padding without the tips panel
    pub side_padding: f64,

    /// Title baseline / top padding when the title is shown
    pub top_padding_with_title: f64,

    /// Top padding without a title
    pub top_padding: f64,

    pub bottom_padding: f64,

    /// Top of the first pole row when the title is shown
    pub pole_top_with_title: f64,

    /// Top of the first pole row without a title
    pub pole_top: f64,

    /// Top edge of the tips panel
    pub tips_panel_top: f64,

    /// How far the tips panel is pulled left into the last pole column
    pub tips_panel_overlap: f64,

    /// Space reserved for the tips panel header
    pub tips_header_height: f64,

    /// Height of one wrapped tip line
    pub tip_line_height: f64,

    /// Extra space after each tip
    pub tip_gap: f64,

    /// Inner horizontal margin the tip text wraps within
    pub tips_text_margin: f64,

    /// Header baseline below the panel top
    pub tips_header_baseline: f64,

    /// First tip baseline below the panel top
    pub tips_first_line_offset: f64,

    /// Indent of a tip's bulleted first line
    pub tip_indent: f64,

    /// Indent of a tip's continuation lines
    pub tip_continuation_indent: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            pole_spacing: 300.0,
            row_spacing: 600.0,
            tips_panel_width: 180.0,
            side_padding_with_tips: 150.0,
            side_padding: 50.0,
            top_padding_with_title: 40.0,
            top_padding: 10.0,
            bottom_padding: 40.0,
            pole_top_with_title: 80.0,
            pole_top: 20.0,
            tips_panel_top: 80.0,
            tips_panel_overlap: 20.0,
            tips_header_height: 40.0,
            tip_line_height: 20.0,
            tip_gap: 10.0,
            tips_text_margin: 40.0,
            tips_header_baseline: 20.0,
            tips_first_line_offset: 50.0,
            tip_indent: 10.0,
            tip_continuation_indent: 20.0,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the horizontal and vertical grid spacing
    pub fn with_spacing(mut self, pole_spacing: f64, row_spacing: f64) -> Self {
        self.pole_spacing = pole_spacing;
        self.row_spacing = row_spacing;
        self
    }

    /// Set the tips panel width
    pub fn with_tips_panel_width(mut self, width: f64) -> Self {
        self.tips_panel_width = width;
        self
    }

    /// Width available to tip text before wrapping
    pub fn tip_wrap_width(&self) -> f64 {
        self.tips_panel_width - self.tips_text_margin
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.pole_spacing, 300.0);
        assert_eq!(config.row_spacing, 600.0);
        assert_eq!(config.tips_panel_width, 180.0);
        assert_eq!(config.side_padding_with_tips, 150.0);
        assert_eq!(config.side_padding, 50.0);
        assert_eq!(config.bottom_padding, 40.0);
        assert_eq!(config.tip_wrap_width(), 140.0);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_spacing(200.0, 500.0)
            .with_tips_panel_width(240.0);

        assert_eq!(config.pole_spacing, 200.0);
        assert_eq!(config.row_spacing, 500.0);
        assert_eq!(config.tip_wrap_width(), 200.0);
    }
}
