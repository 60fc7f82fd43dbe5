//! End-to-end tests: source text through validation, layout and the element tree

use pretty_assertions::assert_eq;

use moss_pole_guide::color::{BROWN_MOSS_COLORS, GREEN_MOSS_COLORS};
use moss_pole_guide::presets;
use moss_pole_guide::{
    build_tree, load_document, render_with_config, Document, Element, InputFormat, Pole,
    RandomSource, RenderConfig, RenderError, SvgConfig,
};

/// Always draws the same value
struct Constant(f64);

impl RandomSource for Constant {
    fn next_float(&mut self) -> f64 {
        self.0
    }
}

fn tree(doc: &Document) -> Element {
    build_tree(doc, &RenderConfig::default(), &mut Constant(0.5)).expect("Should render")
}

fn with_class<'a>(root: &'a Element, class: &str) -> Vec<&'a Element> {
    root.find_all(|e| e.has_class(class))
}

fn pole_json(name: &str, sensor: bool) -> String {
    format!(
        r#"{{"name": "{}", "humidityTop": "70-80", "humidityMiddle": "65-75",
            "humidityBottom": "60-70", "displaySensorPlace": {}}}"#,
        name, sensor
    )
}

fn document(config: &str, poles: &[String]) -> Document {
    let source = format!(r#"{{"config": {}, "poles": [{}]}}"#, config, poles.join(","));
    load_document(&source, InputFormat::Json).expect("Should validate")
}

#[test]
fn test_default_guide_structure() {
    let doc = presets::default_document();
    let root = tree(&doc);

    assert_eq!(root.get("viewBox"), Some("0 0 1530 680"));
    assert_eq!(with_class(&root, "mpg-pot").len(), 4);

    let names: Vec<String> = with_class(&root, "mpg-pole-name")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(
        names,
        vec![
            "Monstera Albo",
            "Philodendron Gloriosum",
            "M. Esqueleto",
            "Anthurium Clarinervium"
        ]
    );

    let titles = with_class(&root, "mpg-title");
    assert_eq!(titles.len(), 1);
    assert_eq!(titles[0].text_content(), "Moss Pole Care Guide");
    assert_eq!(titles[0].get("x"), Some("765"));
}

#[test]
fn test_pot_colors_follow_document() {
    let doc = presets::default_document();
    let root = tree(&doc);

    let fills: Vec<&str> = with_class(&root, "mpg-pot")
        .iter()
        .filter_map(|e| e.get("fill"))
        .collect();
    assert_eq!(fills, vec!["#EA4335", "#FBBC05", "#34A853", "#4285F4"]);
}

#[test]
fn test_missing_pot_color_uses_terracotta() {
    let doc = document("{}", &[pole_json("Pothos", false)]);
    let root = tree(&doc);

    let pot = with_class(&root, "mpg-pot")[0];
    assert_eq!(pot.get("fill"), Some("#cc7f63"));
    let rim = with_class(&root, "mpg-pot-rim")[0];
    assert_eq!(rim.get("fill"), Some("#b26b52"));
}

#[test]
fn test_rim_darkens_given_pot_color() {
    let doc = presets::default_document();
    let root = tree(&doc);

    let rims: Vec<&str> = with_class(&root, "mpg-pot-rim")
        .iter()
        .filter_map(|e| e.get("fill"))
        .collect();
    assert_eq!(rims, vec!["#d62f21", "#e7a800", "#20943f", "#2e71e0"]);
}

#[test]
fn test_sensor_callout_only_when_requested() {
    let doc = presets::default_document();
    let root = tree(&doc);

    let flags: Vec<bool> = with_class(&root, "mpg-pole")
        .iter()
        .map(|pole| !with_class(pole, "mpg-sensor-callout").is_empty())
        .collect();
    assert_eq!(flags, vec![true, false, true, false]);

    let callout = with_class(&root, "mpg-sensor-callout")[0];
    assert_eq!(callout.text_content(), "Placesensorhere");
}

#[test]
fn test_humidity_labels_in_order() {
    let doc = presets::default_document();
    let root = tree(&doc);
    let last = with_class(&root, "mpg-pole")[3];

    let labels: Vec<String> = with_class(last, "mpg-humidity")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(labels, vec!["75-85%", "70-80%", "65-75%"]);
}

#[test]
fn test_grid_wraps_rows() {
    let poles: Vec<String> = (0..5).map(|i| pole_json(&format!("P{}", i), false)).collect();
    let doc = document(r#"{"visual": {"polesPerRow": 2}}"#, &poles);
    let root = tree(&doc);

    // 2 columns, 3 rows, title and tips on
    assert_eq!(root.get("viewBox"), Some("0 0 930 1880"));

    let transforms: Vec<&str> = with_class(&root, "mpg-pole")
        .iter()
        .filter_map(|e| e.get("transform"))
        .collect();
    assert_eq!(
        transforms,
        vec![
            "translate(150,80)",
            "translate(450,80)",
            "translate(150,680)",
            "translate(450,680)",
            "translate(150,1280)"
        ]
    );
}

#[test]
fn test_canvas_without_title_or_tips() {
    let poles: Vec<String> = (0..3).map(|i| pole_json(&format!("P{}", i), false)).collect();
    let doc = document(
        r#"{"title": {"enabled": false}, "careTips": {"enabled": false}}"#,
        &poles,
    );
    let root = tree(&doc);

    assert_eq!(root.get("viewBox"), Some("0 0 950 650"));
    assert!(with_class(&root, "mpg-title").is_empty());
    assert!(with_class(&root, "mpg-tips-panel").is_empty());
    assert_eq!(
        with_class(&root, "mpg-pole")[0].get("transform"),
        Some("translate(50,20)")
    );
}

#[test]
fn test_tips_panel_wraps_long_tips() {
    let doc = document(
        r#"{"careTips": {"tips": ["Keep the moss damp but never soaking wet"]}}"#,
        &[pole_json("Pothos", false)],
    );
    let root = tree(&doc);

    let lines: Vec<String> = with_class(&root, "mpg-tip")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(lines, vec!["• Keep the moss damp but", "never soaking wet"]);
}

fn speckle_fills(root: &Element) -> Vec<String> {
    root.find_all(|e| e.name == "pattern")
        .iter()
        .flat_map(|p| p.elements())
        .filter(|e| e.get("stroke") == Some("black"))
        .filter_map(|e| e.get("fill").map(str::to_string))
        .collect()
}

#[test]
fn test_algae_extremes_choose_palette() {
    let pole = [pole_json("Pothos", false)];

    let bare = tree(&document(r#"{"visual": {"algaePercentage": 0}}"#, &pole));
    let fills = speckle_fills(&bare);
    assert_eq!(fills.len(), 28 * 5);
    assert!(fills.iter().all(|f| BROWN_MOSS_COLORS.contains(&f.as_str())));

    let lush = tree(&document(r#"{"visual": {"algaePercentage": 100}}"#, &pole));
    assert!(speckle_fills(&lush)
        .iter()
        .all(|f| GREEN_MOSS_COLORS.contains(&f.as_str())));
}

#[test]
fn test_each_pole_gets_its_own_pattern() {
    let doc = presets::default_document();
    let root = tree(&doc);

    let ids: Vec<&str> = root
        .find_all(|e| e.name == "pattern")
        .iter()
        .filter_map(|e| e.get("id"))
        .collect();
    assert_eq!(
        ids,
        vec![
            "mpg-pole-pattern-0",
            "mpg-pole-pattern-1",
            "mpg-pole-pattern-2",
            "mpg-pole-pattern-3"
        ]
    );
}

#[test]
fn test_names_are_escaped_in_output() {
    let source = r#"{"config": {}, "poles": [{"name": "Pink <Princess> & co",
        "humidityTop": "70-80", "humidityMiddle": "65-75", "humidityBottom": "60-70"}]}"#;
    let svg = render_with_config(source, &RenderConfig::new().with_seed(3)).unwrap();

    assert!(svg.contains("Pink &lt;Princess&gt; &amp; co"));
    assert!(!svg.contains("<Princess>"));
}

#[test]
fn test_font_family_and_prefix() {
    let doc = presets::default_document();
    let config = RenderConfig::new().with_svg(
        SvgConfig::default()
            .with_id_prefix("")
            .with_font_family("Georgia, serif"),
    );
    let root = build_tree(&doc, &config, &mut Constant(0.5)).unwrap();

    assert_eq!(root.get("font-family"), Some("Georgia, serif"));
    assert_eq!(with_class(&root, "pole").len(), 4);
    assert_eq!(
        root.find_all(|e| e.get("id") == Some("pole-pattern-0")).len(),
        1
    );
}

#[test]
fn test_toml_matches_json() {
    let toml = r##"
[config.visual]
backgroundColor = "#F0F0F0"

[[poles]]
name = "Monstera"
humidityTop = "70-80"
humidityMiddle = "65-75"
humidityBottom = "60-70"
"##;
    let json = r##"{"config": {"visual": {"backgroundColor": "#F0F0F0"}}, "poles": [{
        "name": "Monstera", "humidityTop": "70-80",
        "humidityMiddle": "65-75", "humidityBottom": "60-70"}]}"##;

    let config = RenderConfig::new().with_seed(42);
    let from_toml = render_with_config(toml, &config.clone().with_format(InputFormat::Toml));
    let from_json = render_with_config(json, &config);
    assert_eq!(from_toml.unwrap(), from_json.unwrap());
}

#[test]
fn test_validation_errors_are_collected() {
    let source = r##"{"config": {"visual": {"backgroundColor": "red"}},
        "poles": [{"name": "", "humidityTop": "70%", "humidityMiddle": "65-75",
                   "humidityBottom": "60-70", "potColor": "#12"}]}"##;

    match load_document(source, InputFormat::Json) {
        Err(RenderError::Schema(err)) => {
            assert_eq!(err.errors.len(), 4);
            assert!(err.has_path("config.visual.backgroundColor"));
            assert!(err.has_path("poles[0].name"));
            assert!(err.has_path("poles[0].humidityTop"));
            assert!(err.has_path("poles[0].potColor"));
        }
        other => panic!("Expected schema error, got {:?}", other),
    }
}

#[test]
fn test_every_preset_renders() {
    for preset in presets::PRESETS {
        let doc = preset.load().unwrap();
        let root = tree(&doc);
        assert_eq!(
            with_class(&root, "mpg-pole").len(),
            doc.poles.len(),
            "preset {}",
            preset.slug
        );
    }
}

#[test]
fn test_new_pole_template_drops_into_a_document() {
    let snippet = serde_json::to_string(&Pole::template()).unwrap();
    let doc = document("{}", &[snippet]);

    assert_eq!(doc.poles[0], Pole::template());
    let root = tree(&doc);
    assert_eq!(
        with_class(&root, "mpg-pole-name")[0].text_content(),
        "New Plant"
    );
}

#[test]
fn test_largest_preset_fills_four_rows() {
    let doc = presets::find("pros-ultimate-guide").unwrap().load().unwrap();
    let root = tree(&doc);

    assert_eq!(root.get("viewBox"), Some("0 0 1530 2480"));
    assert_eq!(with_class(&root, "mpg-pole").len(), 15);
    assert_eq!(
        with_class(&root, "mpg-pole")[14].get("transform"),
        Some("translate(750,1880)")
    );
    // every tip is longer than one panel line
    let tips = with_class(&root, "mpg-tip");
    let bullets = tips
        .iter()
        .filter(|e| e.text_content().starts_with("• "))
        .count();
    assert_eq!(bullets, 7);
    assert!(tips.len() > 14);
}
