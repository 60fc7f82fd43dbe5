//! Grid layout computation
//!
//! Everything here is a pure function of counts and flags; the same input
//! always yields the same geometry.

use crate::model::Document;
use crate::text::wrap;

use super::{
    BoundingBox, Layout, LayoutConfig, LayoutError, Point, PolePlacement, TipLine, TipsPanelLayout,
};

/// What the layout depends on, extracted from a document
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutInput {
    pub pole_count: usize,
    pub poles_per_row: usize,
    pub title_enabled: bool,
    /// Wrapped lines per tip, `None` when the tips panel is hidden
    pub wrapped_tips: Option<Vec<Vec<String>>>,
}

impl LayoutInput {
    /// Collect counts and flags from a document, wrapping tips to the panel width
    pub fn from_document(doc: &Document, config: &LayoutConfig) -> Self {
        let tips = &doc.config.care_tips;
        let wrapped_tips = tips.enabled.then(|| {
            tips.tips
                .iter()
                .map(|tip| wrap(tip, config.tip_wrap_width()))
                .collect()
        });

        Self {
            pole_count: doc.poles.len(),
            poles_per_row: usize::from(doc.config.visual.poles_per_row),
            title_enabled: doc.config.title.enabled,
            wrapped_tips,
        }
    }
}

/// Compute the canvas size and every element position
pub fn compute(input: &LayoutInput, config: &LayoutConfig) -> Result<Layout, LayoutError> {
    if input.pole_count == 0 || input.poles_per_row == 0 {
        return Err(LayoutError::empty_grid(input.pole_count, input.poles_per_row));
    }

    let tips_enabled = input.wrapped_tips.is_some();
    let side_padding = if tips_enabled {
        config.side_padding_with_tips
    } else {
        config.side_padding
    };
    let top_padding = if input.title_enabled {
        config.top_padding_with_title
    } else {
        config.top_padding
    };
    let pole_top = if input.title_enabled {
        config.pole_top_with_title
    } else {
        config.pole_top
    };

    let num_rows = input.pole_count.div_ceil(input.poles_per_row);
    let columns = input.poles_per_row.min(input.pole_count);
    let grid_width = columns as f64 * config.pole_spacing;

    let panel_width = if tips_enabled {
        config.tips_panel_width
    } else {
        0.0
    };
    let width = LayoutError::check_finite("width", grid_width + side_padding + panel_width)?;
    let height = LayoutError::check_finite(
        "height",
        num_rows as f64 * config.row_spacing + top_padding + config.bottom_padding,
    )?;

    let tips_panel = match &input.wrapped_tips {
        Some(lines) => Some(tips_panel(lines, side_padding + grid_width, config)?),
        None => None,
    };

    let poles = (0..input.pole_count)
        .map(|index| {
            let row = index / input.poles_per_row;
            let col = index % input.poles_per_row;
            let origin = Point::new(
                side_padding + col as f64 * config.pole_spacing,
                pole_top + row as f64 * config.row_spacing,
            );
            tracing::trace!(index, row, col, x = origin.x, y = origin.y, "placed pole");
            PolePlacement {
                index,
                row,
                col,
                origin,
            }
        })
        .collect();

    tracing::debug!(width, height, num_rows, columns, tips_enabled, "layout computed");

    Ok(Layout {
        width,
        height,
        num_rows,
        columns,
        side_padding,
        top_padding,
        bottom_padding: config.bottom_padding,
        title_anchor: input
            .title_enabled
            .then(|| Point::new(width / 2.0, top_padding)),
        tips_panel,
        poles,
    })
}

fn tips_panel(
    tips: &[Vec<String>],
    grid_right: f64,
    config: &LayoutConfig,
) -> Result<TipsPanelLayout, LayoutError> {
    let body: f64 = tips
        .iter()
        .map(|tip| tip.len() as f64 * config.tip_line_height + config.tip_gap)
        .sum();
    let height = LayoutError::check_finite("tips panel height", config.tips_header_height + body)?;
    let bounds = BoundingBox::new(
        grid_right - config.tips_panel_overlap,
        config.tips_panel_top,
        config.tips_panel_width,
        height,
    );

    let mut lines = Vec::new();
    let mut y = bounds.y + config.tips_first_line_offset;
    for (tip, wrapped) in tips.iter().enumerate() {
        for (i, text) in wrapped.iter().enumerate() {
            let indent = if i == 0 {
                config.tip_indent
            } else {
                config.tip_continuation_indent
            };
            lines.push(TipLine {
                tip,
                text: text.clone(),
                bullet: i == 0,
                position: Point::new(bounds.x + indent, y),
            });
            y += config.tip_line_height;
        }
        y += config.tip_gap;
    }

    Ok(TipsPanelLayout {
        header: Point::new(
            bounds.x + config.tip_indent,
            bounds.y + config.tips_header_baseline,
        ),
        bounds,
        lines,
    })
}
