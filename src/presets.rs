//! Bundled example guides

use crate::input::{parse_input, InputFormat};
use crate::model::Document;
use crate::{validate, RenderError};

/// A named example document shipped with the crate
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    /// Identifier used on the command line
    pub slug: &'static str,
    pub title: &'static str,
    pub source: &'static str,
    pub format: InputFormat,
}

pub const PRESETS: &[Preset] = &[
    Preset {
        slug: "default",
        title: "Moss Pole Care Guide",
        source: include_str!("../presets/default.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "pros-ultimate-guide",
        title: "Pro's Ultimate Guide",
        source: include_str!("../presets/pros-ultimate-guide.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "beginners-starter-kit",
        title: "Beginner's Starter Kit",
        source: include_str!("../presets/beginners-starter-kit.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "rare-aroids-collection",
        title: "Rare Aroids Collection",
        source: include_str!("../presets/rare-aroids-collection.toml"),
        format: InputFormat::Toml,
    },
    Preset {
        slug: "variegated-beauties",
        title: "Variegated Beauties",
        source: include_str!("../presets/variegated-beauties.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "compact-setup",
        title: "Compact Setup",
        source: include_str!("../presets/compact-setup.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "philodendron-paradise",
        title: "Philodendron Paradise",
        source: include_str!("../presets/philodendron-paradise.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "anthurium-showcase",
        title: "Anthurium Showcase",
        source: include_str!("../presets/anthurium-showcase.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "terrarium-setup",
        title: "Terrarium Setup",
        source: include_str!("../presets/terrarium-setup.toml"),
        format: InputFormat::Toml,
    },
    Preset {
        slug: "low-light-warriors",
        title: "Low Light Warriors",
        source: include_str!("../presets/low-light-warriors.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "desert-dwellers",
        title: "Desert Dwellers",
        source: include_str!("../presets/desert-dwellers.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "rare-monstera-collection",
        title: "Rare Monstera Collection",
        source: include_str!("../presets/rare-monstera-collection.json"),
        format: InputFormat::Json,
    },
    Preset {
        slug: "variegated-aroids-collection",
        title: "Variegated Aroids Collection",
        source: include_str!("../presets/variegated-aroids-collection.json"),
        format: InputFormat::Json,
    },
];

/// Look up a preset by slug
pub fn find(slug: &str) -> Option<&'static Preset> {
    PRESETS.iter().find(|p| p.slug == slug)
}

impl Preset {
    /// Parse and validate the bundled source
    pub fn load(&self) -> Result<Document, RenderError> {
        let raw = parse_input(self.source, self.format)?;
        Ok(validate(&raw)?)
    }
}

/// The guide shown when nothing else is loaded
pub fn default_document() -> Document {
    PRESETS[0]
        .load()
        .expect("Default preset should be a valid document")
}
