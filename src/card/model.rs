use std::collections::BTreeSet;

use crate::foundation::core::Rgba8;
use crate::foundation::error::{CardError, CardResult};

/// Codec schema version written into every card.
pub const CARD_SCHEMA_VERSION: u32 = 1;

/// Base frame of the card template.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Frame {
    Normal,
    #[default]
    Effect,
    Ritual,
    Fusion,
    Synchro,
    DarkSynchro,
    Xyz,
    Link,
    Token,
    Spell,
    Trap,
    Skill,
}

impl Frame {
    /// Asset slug used by frame path templates.
    pub fn slug(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Effect => "effect",
            Self::Ritual => "ritual",
            Self::Fusion => "fusion",
            Self::Synchro => "synchro",
            Self::DarkSynchro => "dark-synchro",
            Self::Xyz => "xyz",
            Self::Link => "link",
            Self::Token => "token",
            Self::Spell => "spell",
            Self::Trap => "trap",
            Self::Skill => "skill",
        }
    }
}

/// Foil finish. Anything but `Normal` swaps frame and border assets for foiled variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Foil {
    #[default]
    Normal,
    Gold,
    Platinum,
}

impl Foil {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Gold => "gold",
            Self::Platinum => "platinum",
        }
    }

    pub fn is_foiled(self) -> bool {
        self != Self::Normal
    }
}

/// Print format. Controls set-id tracking and offsets.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardFormat {
    #[default]
    Tcg,
    Ocg,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Attribute {
    Dark,
    Divine,
    Earth,
    Fire,
    #[default]
    Light,
    Water,
    Wind,
    Spell,
    Trap,
}

impl Attribute {
    pub fn slug(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Divine => "divine",
            Self::Earth => "earth",
            Self::Fire => "fire",
            Self::Light => "light",
            Self::Water => "water",
            Self::Wind => "wind",
            Self::Spell => "spell",
            Self::Trap => "trap",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sticker {
    #[default]
    NoSticker,
    Silver,
    Gold,
    Grey,
    Lscg,
    Lscs,
}

impl Sticker {
    pub fn slug(self) -> Option<&'static str> {
        match self {
            Self::NoSticker => None,
            Self::Silver => Some("silver"),
            Self::Gold => Some("gold"),
            Self::Grey => Some("grey"),
            Self::Lscg => Some("lscg"),
            Self::Lscs => Some("lscs"),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NameStyleType {
    #[default]
    Auto,
    Custom,
}

/// Fill, optional stroke and optional glow color for a text run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextStyle {
    pub fill: Rgba8,
    #[serde(default)]
    pub stroke: Option<Rgba8>,
    #[serde(default)]
    pub shadow: Option<Rgba8>,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            fill: Rgba8::BLACK,
            stroke: None,
            shadow: None,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectStyle {
    /// Allow effect lines to be condensed further before shrinking the font.
    pub condense_tolerant: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CropUnit {
    #[default]
    Percent,
    Px,
}

/// Crop rectangle applied to the artwork by the external cropping tool.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PictureCrop {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub unit: CropUnit,
}

impl Default for PictureCrop {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 100.0,
            height: 100.0,
            unit: CropUnit::Percent,
        }
    }
}

impl PictureCrop {
    pub fn is_valid(&self) -> bool {
        [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Where the artwork bitmap came from. Never serialized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArtSource {
    /// Uploaded from the local machine; card data cannot carry it.
    Internal,
    #[default]
    External,
}

/// Link arrow direction, numbered like a numeric keypad (5 is the card itself).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum LinkArrow {
    BottomLeft = 1,
    Bottom = 2,
    BottomRight = 3,
    Left = 4,
    Right = 6,
    TopLeft = 7,
    Top = 8,
    TopRight = 9,
}

impl LinkArrow {
    pub const ALL: [Self; 8] = [
        Self::BottomLeft,
        Self::Bottom,
        Self::BottomRight,
        Self::Left,
        Self::Right,
        Self::TopLeft,
        Self::Top,
        Self::TopRight,
    ];

    pub fn code(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for LinkArrow {
    type Error = CardError;

    fn try_from(v: u8) -> CardResult<Self> {
        Self::ALL
            .into_iter()
            .find(|a| a.code() == v)
            .ok_or_else(|| CardError::validation(format!("invalid link arrow {v}")))
    }
}

impl From<LinkArrow> for u8 {
    fn from(a: LinkArrow) -> Self {
        a.code()
    }
}

/// Stat value as printed: digits, `?`, `∞`, or a mix of digits and `?`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(transparent)]
pub struct Stat(pub String);

impl Stat {
    pub const UNKNOWN: &'static str = "?";
    pub const INFINITY: &'static str = "∞";

    pub fn new(v: impl Into<String>) -> Self {
        Self(v.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<'de> serde::Deserialize<'de> for Stat {
    fn deserialize<D: serde::Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Int(i64),
        }

        Ok(match Raw::deserialize(d)? {
            Raw::Text(s) => Self(s),
            Raw::Int(n) => Self(n.to_string()),
        })
    }
}

/// The card record. Immutable by replacement: edits produce a new value.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Card {
    pub version: u32,
    pub frame: Frame,
    pub foil: Foil,
    pub format: CardFormat,
    pub name: String,
    #[serde(rename = "nameStyleType")]
    pub name_style_type: NameStyleType,
    #[serde(rename = "nameStyle")]
    pub name_style: TextStyle,
    pub attribute: Attribute,
    #[serde(rename = "subFamily")]
    pub sub_family: String,
    pub star: u32,
    pub type_ability: Vec<String>,
    pub effect: String,
    #[serde(rename = "effectStyle")]
    pub effect_style: EffectStyle,
    #[serde(rename = "isPendulum")]
    pub is_pendulum: bool,
    pub pendulum_effect: String,
    pub blue_scale: String,
    pub red_scale: String,
    pub atk: Stat,
    pub def: Stat,
    pub link_map: BTreeSet<LinkArrow>,
    pub set_id: String,
    pub passcode: String,
    #[serde(rename = "isFirstEdition")]
    pub is_first_edition: bool,
    #[serde(rename = "isLimitedEdition")]
    pub is_limited_edition: bool,
    #[serde(rename = "isDuelTerminalCard")]
    pub is_duel_terminal_card: bool,
    #[serde(rename = "isSpeedCard")]
    pub is_speed_card: bool,
    #[serde(rename = "isLegacyCard")]
    pub is_legacy_card: bool,
    pub creator: String,
    pub sticker: Sticker,
    #[serde(rename = "pictureCrop")]
    pub picture_crop: PictureCrop,
    #[serde(skip)]
    pub art_source: ArtSource,
}

impl Default for Card {
    fn default() -> Self {
        Self {
            version: CARD_SCHEMA_VERSION,
            frame: Frame::Effect,
            foil: Foil::Normal,
            format: CardFormat::Tcg,
            name: "Lantern Drake of the Quiet Forge".to_string(),
            name_style_type: NameStyleType::Auto,
            name_style: TextStyle::default(),
            attribute: Attribute::Light,
            sub_family: "NO ICON".to_string(),
            star: 4,
            type_ability: vec!["Dragon".to_string(), "Effect".to_string()],
            effect: "When this card is Normal Summoned: You can add 1 \"Forge\" Spell from your \
                     Deck to your hand. You can only use this effect of \"Lantern Drake of the \
                     Quiet Forge\" once per turn."
                .to_string(),
            effect_style: EffectStyle::default(),
            is_pendulum: false,
            pendulum_effect: String::new(),
            blue_scale: "4".to_string(),
            red_scale: "4".to_string(),
            atk: Stat::new("1800"),
            def: Stat::new("1200"),
            link_map: BTreeSet::new(),
            set_id: "CSMT-EN001".to_string(),
            passcode: "20261018".to_string(),
            is_first_edition: false,
            is_limited_edition: false,
            is_duel_terminal_card: false,
            is_speed_card: false,
            is_legacy_card: false,
            creator: String::new(),
            sticker: Sticker::NoSticker,
            picture_crop: PictureCrop::default(),
            art_source: ArtSource::External,
        }
    }
}

impl Card {
    /// Validate invariants that the type system does not carry.
    pub fn validate(&self) -> CardResult<()> {
        if self.version != CARD_SCHEMA_VERSION {
            return Err(CardError::validation(format!(
                "unsupported card schema version {}",
                self.version
            )));
        }
        if !self.picture_crop.is_valid() {
            return Err(CardError::validation(
                "picture crop values must be finite and >= 0",
            ));
        }
        if self.is_legacy_card {
            let set = [
                self.is_first_edition,
                self.is_limited_edition,
                self.is_duel_terminal_card,
                self.is_speed_card,
            ]
            .into_iter()
            .filter(|f| *f)
            .count();
            if set > 1 {
                return Err(CardError::validation(
                    "legacy cards carry at most one era mark",
                ));
            }
        } else {
            if self.is_first_edition && self.is_limited_edition {
                return Err(CardError::validation(
                    "first edition and limited edition are exclusive",
                ));
            }
            if self.is_duel_terminal_card && self.is_speed_card {
                return Err(CardError::validation(
                    "duel terminal and speed duel marks are exclusive",
                ));
            }
        }
        Ok(())
    }

    /// Card data can only be shared when the artwork is reachable from elsewhere.
    pub fn art_is_portable(&self) -> bool {
        self.art_source == ArtSource::External
    }
}

#[cfg(test)]
#[path = "../../tests/unit/card/model.rs"]
mod tests;
