//! Schema validation and defaulting
//!
//! Turns a generic parsed value into a [`Document`]. Absent fields take their
//! documented default; a field that is present is always checked, so `0`,
//! `false` and `""` are never mistaken for "not given". Every failing field
//! is reported, not just the first.

use serde_json::{Map, Value};

use crate::color::HexColor;
use crate::error::{FieldError, SchemaError};
use crate::model::*;

const COLOR_MESSAGE: &str = "Color must be a valid hex code (e.g., #FF0000)";
const HUMIDITY_MESSAGE: &str = "Format should be XX-XX";

/// Validate a parsed document, filling in defaults
pub fn validate(raw: &Value) -> Result<Document, SchemaError> {
    let mut v = Validator::default();
    let document = v.document(raw);

    match document {
        Some(document) if v.errors.is_empty() => {
            tracing::debug!(
                poles = document.poles.len(),
                per_row = document.config.visual.poles_per_row,
                "document validated"
            );
            Ok(document)
        }
        _ => {
            tracing::debug!(errors = v.errors.len(), "document rejected");
            Err(SchemaError { errors: v.errors })
        }
    }
}

#[derive(Default)]
struct Validator {
    errors: Vec<FieldError>,
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

impl Validator {
    fn fail(&mut self, path: &str, message: impl Into<String>) {
        self.errors.push(FieldError::new(path, message));
    }

    fn object<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a Map<String, Value>> {
        let obj = value.as_object();
        if obj.is_none() {
            self.fail(path, "expected an object");
        }
        obj
    }

    fn document(&mut self, raw: &Value) -> Option<Document> {
        let root = self.object(raw, "")?;

        let config = match root.get("config") {
            Some(value) => self.config(value, "config"),
            None => {
                self.fail("config", "Required");
                None
            }
        };
        let poles = self.poles(root.get("poles"));

        Some(Document {
            config: config?,
            poles: poles?,
        })
    }

    fn config(&mut self, value: &Value, path: &str) -> Option<Config> {
        let obj = self.object(value, path)?;

        let visual = self.section(obj, path, "visual", Self::visual, default_visual);
        let title = self.section(obj, path, "title", Self::title, default_title);
        let care_tips = self.section(obj, path, "careTips", Self::care_tips, default_care_tips);

        Some(Config {
            visual: visual?,
            title: title?,
            care_tips: care_tips?,
        })
    }

    /// Validate an optional sub-object, or take its default when absent
    fn section<T>(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        check: fn(&mut Self, &Map<String, Value>, &str) -> Option<T>,
        default: fn() -> T,
    ) -> Option<T> {
        let path = join(path, key);
        match obj.get(key) {
            None => Some(default()),
            Some(value) => {
                let inner = self.object(value, &path)?;
                check(self, inner, &path)
            }
        }
    }

    fn visual(&mut self, obj: &Map<String, Value>, path: &str) -> Option<VisualConfig> {
        let background_color =
            self.color_or(obj, path, "backgroundColor", default_background_color);
        let text_color = self.color_or(obj, path, "textColor", default_text_color);
        let algae_percentage =
            self.int_in_range(obj, path, "algaePercentage", 0, 100, DEFAULT_ALGAE_PERCENTAGE);
        let poles_per_row = self.int_in_range(
            obj,
            path,
            "polesPerRow",
            1,
            MAX_POLES_PER_ROW,
            DEFAULT_POLES_PER_ROW,
        );

        Some(VisualConfig {
            background_color: background_color?,
            text_color: text_color?,
            algae_percentage: algae_percentage?,
            poles_per_row: poles_per_row?,
        })
    }

    fn title(&mut self, obj: &Map<String, Value>, path: &str) -> Option<TitleConfig> {
        let enabled = self.bool_or(obj, path, "enabled", true);
        let text = match obj.get("text") {
            None => Some(DEFAULT_TITLE.to_string()),
            Some(value) => {
                let path = join(path, "text");
                match self.string(value, &path) {
                    Some(s) if s.is_empty() => {
                        self.fail(&path, "Title text is required when enabled");
                        None
                    }
                    other => other.map(str::to_string),
                }
            }
        };

        Some(TitleConfig {
            enabled: enabled?,
            text: text?,
        })
    }

    fn care_tips(&mut self, obj: &Map<String, Value>, path: &str) -> Option<CareTipsConfig> {
        let enabled = self.bool_or(obj, path, "enabled", true);
        let tips = match obj.get("tips") {
            None => Some(default_tips()),
            Some(value) => self.tips(value, &join(path, "tips")),
        };

        Some(CareTipsConfig {
            enabled: enabled?,
            tips: tips?,
        })
    }

    fn tips(&mut self, value: &Value, path: &str) -> Option<Vec<String>> {
        let Some(items) = value.as_array() else {
            self.fail(path, "expected an array");
            return None;
        };
        if items.is_empty() {
            self.fail(path, "At least one care tip is required");
            return None;
        }

        let tips: Vec<Option<String>> = items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                self.string(item, &format!("{}[{}]", path, i))
                    .map(str::to_string)
            })
            .collect();
        tips.into_iter().collect()
    }

    fn poles(&mut self, value: Option<&Value>) -> Option<Vec<Pole>> {
        let Some(value) = value else {
            self.fail("poles", "Required");
            return None;
        };
        let Some(items) = value.as_array() else {
            self.fail("poles", "expected an array");
            return None;
        };
        if items.is_empty() {
            self.fail("poles", "At least one moss pole is required");
            return None;
        }

        let poles: Vec<Option<Pole>> = items
            .iter()
            .enumerate()
            .map(|(i, item)| self.pole(item, &format!("poles[{}]", i)))
            .collect();
        poles.into_iter().collect()
    }

    fn pole(&mut self, value: &Value, path: &str) -> Option<Pole> {
        let obj = self.object(value, path)?;

        let name = self.name(obj, path);
        let humidity_top = self.humidity(obj, path, "humidityTop");
        let humidity_middle = self.humidity(obj, path, "humidityMiddle");
        let humidity_bottom = self.humidity(obj, path, "humidityBottom");
        let pot_color = match obj.get("potColor") {
            None => Some(None),
            Some(value) => self.color(value, &join(path, "potColor")).map(Some),
        };
        let display_sensor_place = self.bool_or(obj, path, "displaySensorPlace", false);

        Some(Pole {
            name: name?,
            humidity_top: humidity_top?,
            humidity_middle: humidity_middle?,
            humidity_bottom: humidity_bottom?,
            pot_color: pot_color?,
            display_sensor_place: display_sensor_place?,
        })
    }

    fn name(&mut self, obj: &Map<String, Value>, path: &str) -> Option<String> {
        let path = join(path, "name");
        let value = self.required(obj, &path, "name")?;
        let name = self.string(value, &path)?;
        if name.trim().is_empty() {
            self.fail(&path, "Name is required");
            return None;
        }
        Some(name.to_string())
    }

    fn humidity(&mut self, obj: &Map<String, Value>, path: &str, key: &str) -> Option<HumidityRange> {
        let path = join(path, key);
        let value = self.required(obj, &path, key)?;
        let text = self.string(value, &path)?;
        let range = HumidityRange::parse(text);
        if range.is_none() {
            self.fail(&path, HUMIDITY_MESSAGE);
        }
        range
    }

    fn required<'a>(
        &mut self,
        obj: &'a Map<String, Value>,
        path: &str,
        key: &str,
    ) -> Option<&'a Value> {
        let value = obj.get(key);
        if value.is_none() {
            self.fail(path, "Required");
        }
        value
    }

    fn string<'a>(&mut self, value: &'a Value, path: &str) -> Option<&'a str> {
        let s = value.as_str();
        if s.is_none() {
            self.fail(path, "expected a string");
        }
        s
    }

    fn color(&mut self, value: &Value, path: &str) -> Option<HexColor> {
        let text = self.string(value, path)?;
        match text.parse() {
            Ok(color) => Some(color),
            Err(_) => {
                self.fail(path, COLOR_MESSAGE);
                None
            }
        }
    }

    fn color_or(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        default: fn() -> HexColor,
    ) -> Option<HexColor> {
        match obj.get(key) {
            None => Some(default()),
            Some(value) => self.color(value, &join(path, key)),
        }
    }

    fn bool_or(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        default: bool,
    ) -> Option<bool> {
        match obj.get(key) {
            None => Some(default),
            Some(value) => {
                let b = value.as_bool();
                if b.is_none() {
                    self.fail(&join(path, key), "expected a boolean");
                }
                b
            }
        }
    }

    fn int_in_range(
        &mut self,
        obj: &Map<String, Value>,
        path: &str,
        key: &str,
        min: u8,
        max: u8,
        default: u8,
    ) -> Option<u8> {
        let Some(value) = obj.get(key) else {
            return Some(default);
        };
        let path = join(path, key);

        let Some(n) = value.as_f64() else {
            self.fail(&path, "expected a number");
            return None;
        };
        if n.fract() != 0.0 {
            self.fail(&path, "expected an integer");
            return None;
        }
        if n < f64::from(min) {
            self.fail(&path, format!("must be at least {}", min));
            return None;
        }
        if n > f64::from(max) {
            self.fail(&path, format!("must be at most {}", max));
            return None;
        }
        Some(n as u8)
    }
}

fn default_visual() -> VisualConfig {
    VisualConfig {
        background_color: default_background_color(),
        text_color: default_text_color(),
        algae_percentage: DEFAULT_ALGAE_PERCENTAGE,
        poles_per_row: DEFAULT_POLES_PER_ROW,
    }
}

fn default_title() -> TitleConfig {
    TitleConfig {
        enabled: true,
        text: DEFAULT_TITLE.to_string(),
    }
}

fn default_tips() -> Vec<String> {
    DEFAULT_TIPS.iter().map(|t| t.to_string()).collect()
}

fn default_care_tips() -> CareTipsConfig {
    CareTipsConfig {
        enabled: true,
        tips: default_tips(),
    }
}
