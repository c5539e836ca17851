//! Layout constants of the card template, in design units (813 x 1185).

use crate::foundation::core::Rect;
use crate::text::metrics::{FontFamily, FontSpec};

/// Legacy template width; older constants are authored in this space and scaled up.
const LEGACY_WIDTH: f64 = 549.0;

/// Scale a legacy-template coordinate into design units.
pub const fn legacy(v: f64) -> f64 {
    v * (813.0 / LEGACY_WIDTH)
}

// Frame and artwork.
pub const FOIL_ART_POS: (f64, f64) = (0.0, legacy(120.0));
pub const FOIL_EFFECT_POS: (f64, f64) = (0.0, legacy(580.0));
pub const ART_RECT: Rect = Rect::new(
    legacy(67.0),
    legacy(147.0),
    legacy(67.0 + 416.0),
    legacy(147.0 + 416.0),
);
pub const PENDULUM_ART_RECT: Rect = Rect::new(
    legacy(38.0),
    legacy(144.0),
    legacy(38.0 + 474.0),
    legacy(144.0 + 470.0),
);

// Link overlay.
pub const LINK_OVERLAY_POS: (f64, f64) = (legacy(66.0), legacy(146.0));
pub const LINK_OVERLAY_FOIL_POS: (f64, f64) = (0.0, legacy(110.0));
pub const LINK_COUNT_FONT: FontSpec = FontSpec::new(FontFamily::RushDuelNumbers, legacy(24.0)).bold();
pub const LINK_COUNT_SCALE_X: f64 = 1.2;
/// Right edge and baseline of the link rating.
pub const LINK_COUNT_POS: (f64, f64) = (legacy(505.0), legacy(746.0));

/// Link arrow rectangles as (x, y, width, height), indexed by keypad code - 1. Index 4 is the
/// card center and never used.
pub const LINK_ARROW_RECTS: [(f64, f64, f64, f64); 9] = [
    (80.0, 795.0, 58.0, 58.0),
    (358.0, 832.0, 97.0, 33.0),
    (675.0, 795.0, 58.0, 58.0),
    (68.0, 477.0, 33.0, 97.0),
    (0.0, 0.0, 0.0, 0.0),
    (712.0, 477.0, 33.0, 97.0),
    (80.0, 198.0, 58.0, 58.0),
    (358.0, 186.0, 97.0, 33.0),
    (675.0, 198.0, 58.0, 58.0),
];

// Header.
pub const NAME_POS: (f64, f64) = (legacy(40.52), legacy(78.0));
pub const NAME_MAX_WIDTH: f64 = legacy(409.0);
pub const NAME_FONT: FontSpec = FontSpec::new(FontFamily::MatrixRegularSmallCaps, 56.3);
pub const ATTRIBUTE_POS: (f64, f64) = (legacy(458.0), legacy(37.0));

pub const STAR_SIZE: f64 = legacy(34.0);
pub const STAR_GAP: f64 = legacy(2.3636);
pub const STAR_TOP: f64 = legacy(99.0);
pub const STAR_MAX: u32 = 13;
/// Right edge of a level row.
pub const STAR_LEVEL_EDGE: f64 = legacy(492.0);
/// Left edge of a rank row.
pub const STAR_RANK_EDGE: f64 = legacy(57.0);
pub const HEADER_WIDTH: f64 = 813.0;

pub const SPELL_TRAP_ICON_EDGE: f64 = legacy(491.0);
pub const SPELL_TRAP_ICON_GAP: f64 = legacy(7.0);
pub const SPELL_TRAP_ICON_TOP: f64 = legacy(103.0);
pub const SPELL_TRAP_ICON_SIZE: f64 = legacy(29.0);

/// Spell/trap property icons with an asset.
pub const SPELL_TRAP_ICONS: &[&str] = &[
    "CONTINUOUS",
    "COUNTER",
    "EQUIP",
    "FIELD",
    "QUICK-PLAY",
    "RITUAL",
];
pub const NO_ICON: &str = "NO ICON";

// Pendulum.
pub const SCALE_FONT_SIZE: f64 = 41.5;
pub const BLUE_SCALE_EDGE: f64 = 88.0;
pub const RED_SCALE_EDGE: f64 = 725.0;
pub const SCALE_TOP: f64 = 745.0;

// Type line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TypeLineMetrics {
    /// Left anchor for left-aligned lines, right anchor otherwise.
    pub anchor: f64,
    pub baseline: f64,
    pub font: FontSpec,
    pub bracket_font: FontSpec,
}

pub const TYPE_SMALL: TypeLineMetrics = TypeLineMetrics {
    anchor: 62.0,
    baseline: 897.0,
    font: FontSpec::new(FontFamily::StoneSerifBold, 23.5),
    bracket_font: FontSpec::new(FontFamily::StoneSerifBold, 24.5),
};
pub const TYPE_MEDIUM: TypeLineMetrics = TypeLineMetrics {
    anchor: 62.0,
    baseline: 897.0,
    font: FontSpec::new(FontFamily::StoneSerifBold, 27.0),
    bracket_font: FontSpec::new(FontFamily::StoneSerifBold, 28.0),
};
pub const TYPE_LARGE: TypeLineMetrics = TypeLineMetrics {
    anchor: 742.0,
    baseline: 188.0,
    font: FontSpec::new(FontFamily::StoneSerifBold, 36.0),
    bracket_font: FontSpec::new(FontFamily::StoneSerifBold, 37.0),
};
/// Pendulum monsters print the type line below the pendulum box.
pub const TYPE_PENDULUM_SHIFT: f64 = 39.0;
pub const TYPE_RIGHT_MARGIN: f64 = 752.3;

// Effect boxes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectPreset {
    pub font_size: f64,
    pub line_height: f64,
}

const fn preset(font_size: f64, line_height: f64) -> EffectPreset {
    EffectPreset {
        font_size,
        line_height,
    }
}

pub const MONSTER_EFFECT_BOX: Rect = Rect::new(62.0, 905.0, 752.0, 1072.0);
pub const PENDULUM_MONSTER_EFFECT_BOX: Rect = Rect::new(62.0, 944.0, 752.0, 1072.0);
pub const SPELL_TRAP_EFFECT_BOX: Rect = Rect::new(62.0, 878.0, 752.0, 1112.0);
pub const PENDULUM_EFFECT_BOX: Rect = Rect::new(126.0, 767.0, 687.0, 885.0);

pub const MONSTER_EFFECT_PRESETS: &[EffectPreset] = &[
    preset(24.0, 25.5),
    preset(22.0, 23.2),
    preset(20.0, 21.0),
    preset(18.5, 19.4),
    preset(17.0, 17.8),
    preset(15.5, 16.2),
    preset(14.0, 14.7),
];
pub const SPELL_TRAP_EFFECT_PRESETS: &[EffectPreset] = &[
    preset(25.0, 26.5),
    preset(23.0, 24.3),
    preset(21.0, 22.1),
    preset(19.0, 20.0),
    preset(17.5, 18.4),
    preset(16.0, 16.8),
    preset(14.5, 15.2),
];
pub const PENDULUM_EFFECT_PRESETS: &[EffectPreset] = &[
    preset(21.0, 22.2),
    preset(19.0, 20.0),
    preset(17.5, 18.4),
    preset(16.0, 16.8),
    preset(14.5, 15.2),
    preset(13.0, 13.7),
];
pub const EFFECT_FAMILY: FontFamily = FontFamily::MatrixBook;
pub const FLAVOR_FAMILY: FontFamily = FontFamily::StoneSerifRegular;

// Stats.
pub const STAT_BOX_WIDTH: f64 = 73.97;
pub const STAT_NUMBER_OFFSET: f64 = -1.0;
pub const STAT_FONT: FontSpec = FontSpec::new(FontFamily::MatrixBoldSmallCaps, 36.18);
pub const STAT_INFINITY_FONT: FontSpec = FontSpec::new(FontFamily::Matrix, 36.18).bold();
pub const STAT_UNKNOWN_FONT: FontSpec = FontSpec::new(FontFamily::MatrixBoldSmallCaps, 34.0);
pub const STAT_UNKNOWN_SCALE_Y: f64 = 1.29;
pub const STAT_LABEL_FONT: FontSpec = FontSpec::new(FontFamily::Matrix, 35.73).bold();
pub const STAT_SLASH_FONT: FontSpec = FontSpec::new(FontFamily::Matrix, 34.74).bold();
pub const STAT_BASELINE: f64 = 1107.0;
pub const ATK_LABEL_EDGE: f64 = 420.0;
pub const ATK_EDGE: f64 = 507.0;
pub const DEF_LABEL_EDGE: f64 = 594.0;
pub const DEF_EDGE: f64 = 681.0;

// Footer.
pub const FOOTER_FONT: FontSpec = FontSpec::new(FontFamily::StoneSerifRegular, 22.0);
pub const SET_ID_PENDULUM_POS: (f64, f64) = (66.65, 1105.01);
pub const SET_ID_LINK_POS: (f64, f64) = (666.56, 872.94);
pub const SET_ID_POS: (f64, f64) = (728.78, 871.50);
pub const PASSCODE_POS: (f64, f64) = (legacy(25.0), 1150.93);
pub const PASSCODE_TRACKING: f64 = 0.1;
pub const FIRST_EDITION_MIN_EDGE: f64 = 99.0;
pub const FIRST_EDITION_GAP: f64 = 15.0;
pub const LIMITED_EDITION_FONT: FontSpec =
    FontSpec::new(FontFamily::PalatinoLinotypeBold, 22.22);
pub const CREATOR_FONT: FontSpec = FontSpec::new(FontFamily::StoneSerifRegular, 18.5);
/// Right edge and baseline of the creator credit.
pub const CREATOR_POS: (f64, f64) = (776.0, 1150.93);
pub const STICKER_POS: (f64, f64) = (legacy(499.0), legacy(750.0));

/// Bottom-left corner of the artwork where era marks sit, as (left, baseline).
pub const ART_MARK_POS: (f64, f64) = (108.0, 822.0);
pub const PENDULUM_ART_MARK_POS: (f64, f64) = (70.0, 750.0);
/// Height of an era mark image drawn over the artwork.
pub const ART_MARK_HEIGHT: f64 = 30.0;
