//! Care guide composition
//!
//! Draws the title, tips panel and every pole onto the canvas computed by the
//! layout engine. The only randomness is the speckle texture of each pole.

use crate::color::{decide_accent, pick_speckle_color, RandomSource};
use crate::layout::{Layout, PolePlacement, TipsPanelLayout};
use crate::model::{Document, HumidityRange, Pole};

use super::svg::Element;
use super::SvgConfig;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Speckle pattern tile
pub const PATTERN_WIDTH: f64 = 75.0;
pub const PATTERN_HEIGHT: f64 = 420.0;
pub const SPECKLE_ROW_SPACING: f64 = 15.0;
pub const SPECKLES_PER_ROW: usize = 5;
pub const SPECKLE_SIZE: f64 = 10.0;
const PATTERN_BACKING: &str = "#f5f5f5";

const POT_PATH: &str = "M20 420 L120 420 L110 480 L30 480 Z";
const SOIL_PATH: &str = "M30 425 L110 425 L108 435 L32 435 Z";
const SOIL_COLOR: &str = "#3a2410";
const POLE_BASE_COLOR: &str = "#8B7355";
const DROPLET_PATH: &str = "M15,3 L21,12 A6,6 0 1,1 9,12 L15,3Z";
const DROPLET_COLOR: &str = "#4299e1";

/// Pole body rectangle in pole-local coordinates
pub const POLE_BODY: (f64, f64, f64, f64) = (40.0, 20.0, 60.0, 400.0);

/// Vertical offsets of the top, middle and bottom humidity readouts
const HUMIDITY_OFFSETS: [f64; 3] = [45.0, 215.0, 385.0];
const SENSOR_LABEL: [&str; 3] = ["Place", "sensor", "here"];
pub const TIPS_HEADER: &str = "General Care Tips:";

/// Build the complete SVG tree for a validated document
pub fn render_tree(
    doc: &Document,
    layout: &Layout,
    config: &SvgConfig,
    source: &mut dyn RandomSource,
) -> Element {
    let visual = &doc.config.visual;
    let text_color = visual.text_color.as_str();

    let mut svg = Element::new("svg")
        .attr("viewBox", layout.view_box())
        .attr("xmlns", SVG_NAMESPACE)
        .child(
            Element::new("rect")
                .attr("width", layout.width)
                .attr("height", layout.height)
                .attr("fill", visual.background_color.as_str()),
        );
    if let Some(family) = &config.font_family {
        svg.attrs.insert(2, ("font-family", family.clone()));
    }

    let mut defs = Element::new("defs");
    for placement in &layout.poles {
        defs.push(speckle_pattern(
            &pattern_id(config, placement.index),
            visual.algae_percentage,
            source,
        ));
    }
    defs.push(
        Element::new("symbol")
            .attr("id", config.prefixed("droplet"))
            .attr("viewBox", "0 0 30 30")
            .child(
                Element::new("path")
                    .attr("d", DROPLET_PATH)
                    .attr("fill", DROPLET_COLOR),
            ),
    );
    svg.push(defs);

    if let Some(anchor) = layout.title_anchor {
        svg.push(
            Element::new("text")
                .attr("class", config.prefixed("title"))
                .attr("x", anchor.x)
                .attr("y", anchor.y)
                .attr("text-anchor", "middle")
                .attr("font-size", 24)
                .attr("fill", text_color)
                .text(doc.config.title.text.as_str()),
        );
    }

    if let Some(panel) = &layout.tips_panel {
        svg.push(tips_panel(panel, doc, config));
    }

    for (pole, placement) in doc.poles.iter().zip(&layout.poles) {
        svg.push(pole_group(pole, placement, text_color, config));
    }

    tracing::debug!(
        poles = layout.poles.len(),
        title = layout.title_anchor.is_some(),
        tips = layout.tips_panel.is_some(),
        "guide tree built"
    );

    svg
}

pub fn pattern_id(config: &SvgConfig, index: usize) -> String {
    config.prefixed(&format!("pole-pattern-{}", index))
}

/// One tileable moss texture: rows of small squares on a light backing
pub fn speckle_pattern(id: &str, algae_percentage: u8, source: &mut dyn RandomSource) -> Element {
    let mut pattern = Element::new("pattern")
        .attr("id", id)
        .attr("x", 5)
        .attr("y", 5)
        .attr("width", PATTERN_WIDTH)
        .attr("height", PATTERN_HEIGHT)
        .attr("patternUnits", "userSpaceOnUse");

    let rows = (PATTERN_HEIGHT / SPECKLE_ROW_SPACING).ceil() as usize;
    for row in 0..rows {
        let y = row as f64 * SPECKLE_ROW_SPACING;
        pattern.push(
            Element::new("rect")
                .attr("width", PATTERN_WIDTH)
                .attr("height", SPECKLE_ROW_SPACING)
                .attr("fill", PATTERN_BACKING)
                .attr("y", y),
        );
        for i in 0..SPECKLES_PER_ROW {
            let is_algae = decide_accent(algae_percentage, source);
            pattern.push(
                Element::new("rect")
                    .attr("x", i as f64 * SPECKLE_ROW_SPACING)
                    .attr("y", y)
                    .attr("width", SPECKLE_SIZE)
                    .attr("height", SPECKLE_SIZE)
                    .attr("fill", pick_speckle_color(is_algae, source))
                    .attr("stroke", "black")
                    .attr("stroke-width", 1),
            );
        }
    }
    pattern
}

fn tips_panel(panel: &TipsPanelLayout, doc: &Document, config: &SvgConfig) -> Element {
    let visual = &doc.config.visual;
    let text_color = visual.text_color.as_str();
    let b = panel.bounds;

    let mut group = Element::new("g")
        .attr("class", config.prefixed("tips-panel"))
        .child(
            Element::new("rect")
                .attr("x", b.x)
                .attr("y", b.y)
                .attr("width", b.width)
                .attr("height", b.height)
                .attr("fill", visual.background_color.as_str())
                .attr("rx", 5)
                .attr("stroke", text_color)
                .attr("stroke-width", 1),
        )
        .child(
            Element::new("text")
                .attr("x", panel.header.x)
                .attr("y", panel.header.y)
                .attr("font-size", 16)
                .attr("font-weight", "bold")
                .attr("fill", text_color)
                .text(TIPS_HEADER),
        );

    for line in &panel.lines {
        let content = if line.bullet {
            format!("• {}", line.text)
        } else {
            line.text.clone()
        };
        group.push(
            Element::new("text")
                .attr("class", config.prefixed("tip"))
                .attr("x", line.position.x)
                .attr("y", line.position.y)
                .attr("font-size", 14)
                .attr("fill", text_color)
                .text(content),
        );
    }
    group
}

fn pole_group(
    pole: &Pole,
    placement: &PolePlacement,
    text_color: &str,
    config: &SvgConfig,
) -> Element {
    let pot_color = pole.resolved_pot_color();
    let (bx, by, bw, bh) = POLE_BODY;
    let body = || {
        Element::new("rect")
            .attr("x", bx)
            .attr("y", by)
            .attr("width", bw)
            .attr("height", bh)
    };

    let mut group = Element::new("g")
        .attr("class", config.prefixed("pole"))
        .attr(
            "transform",
            format!("translate({},{})", placement.origin.x, placement.origin.y),
        )
        .child(
            Element::new("path")
                .attr("class", config.prefixed("pot"))
                .attr("d", POT_PATH)
                .attr("fill", pot_color.as_str()),
        )
        .child(
            Element::new("ellipse")
                .attr("class", config.prefixed("pot-rim"))
                .attr("cx", 70)
                .attr("cy", 420)
                .attr("rx", 50)
                .attr("ry", 10)
                .attr("fill", pole.rim_color().as_str()),
        )
        .child(
            Element::new("path")
                .attr("d", SOIL_PATH)
                .attr("fill", SOIL_COLOR),
        )
        .child(body().attr("fill", POLE_BASE_COLOR).attr("rx", 5))
        .child(
            body()
                .attr(
                    "fill",
                    format!("url(#{})", pattern_id(config, placement.index)),
                )
                .attr("rx", 5),
        )
        .child(
            body()
                .attr("fill", "none")
                .attr("stroke", "black")
                .attr("stroke-width", 2)
                .attr("rx", 5),
        );

    let readings = [
        &pole.humidity_top,
        &pole.humidity_middle,
        &pole.humidity_bottom,
    ];
    for (range, offset) in readings.into_iter().zip(HUMIDITY_OFFSETS) {
        group.push(humidity_readout(range, offset, text_color, config));
    }

    if pole.display_sensor_place {
        group.push(sensor_callout(text_color, config));
    }

    group.child(
        Element::new("text")
            .attr("class", config.prefixed("pole-name"))
            .attr("x", 70)
            .attr("y", 520)
            .attr("text-anchor", "middle")
            .attr("font-size", 16)
            .attr("font-weight", "bold")
            .attr("fill", text_color)
            .text(pole.name.as_str()),
    )
}

fn humidity_readout(
    range: &HumidityRange,
    offset: f64,
    text_color: &str,
    config: &SvgConfig,
) -> Element {
    Element::new("g")
        .attr("class", config.prefixed("humidity"))
        .attr("transform", format!("translate(95,{})", offset))
        .child(
            Element::new("use")
                .attr("x", 10)
                .attr("href", format!("#{}", config.prefixed("droplet")))
                .attr("width", 30)
                .attr("height", 30),
        )
        .child(
            Element::new("text")
                .attr("x", 35)
                .attr("y", 16)
                .attr("font-size", 16)
                .attr("fill", text_color)
                .text(format!("{}%", range.as_str())),
        )
}

fn sensor_callout(text_color: &str, config: &SvgConfig) -> Element {
    let mut group = Element::new("g")
        .attr("class", config.prefixed("sensor-callout"))
        .child(
            Element::new("line")
                .attr("x1", 110)
                .attr("y1", 240)
                .attr("x2", 150)
                .attr("y2", 240)
                .attr("stroke", text_color)
                .attr("stroke-width", 2)
                .attr("stroke-dasharray", "5,5"),
        )
        .child(
            Element::new("circle")
                .attr("cx", 160)
                .attr("cy", 240)
                .attr("r", 5)
                .attr("fill", text_color),
        );

    for (i, word) in SENSOR_LABEL.iter().enumerate() {
        group.push(
            Element::new("text")
                .attr("x", 170)
                .attr("y", 245 + 15 * i)
                .attr("font-size", 12)
                .attr("fill", text_color)
                .text(*word),
        );
    }
    group
}
