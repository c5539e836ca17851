/// Font families the card template is designed around.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FontFamily {
    StoneSerifBold,
    StoneSerifRegular,
    Matrix,
    PalatinoLinotypeBold,
    MatrixBook,
    MatrixBoldSmallCaps,
    MatrixRegularSmallCaps,
    RushDuelNumbers,
}

impl FontFamily {
    pub const ALL: [Self; 8] = [
        Self::StoneSerifBold,
        Self::StoneSerifRegular,
        Self::Matrix,
        Self::PalatinoLinotypeBold,
        Self::MatrixBook,
        Self::MatrixBoldSmallCaps,
        Self::MatrixRegularSmallCaps,
        Self::RushDuelNumbers,
    ];

    /// Family name as published by the font files.
    pub fn family_name(self) -> &'static str {
        match self {
            Self::StoneSerifBold => "stone-serif-bold",
            Self::StoneSerifRegular => "stone-serif-regular",
            Self::Matrix => "matrix",
            Self::PalatinoLinotypeBold => "palatino-linotype-bold",
            Self::MatrixBook => "MatrixBook",
            Self::MatrixBoldSmallCaps => "MatrixBoldSmallCaps",
            Self::MatrixRegularSmallCaps => "MatrixRegularSmallCaps",
            Self::RushDuelNumbers => "Yugioh Rush Duel Numbers V4",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    pub family: FontFamily,
    /// Size in design units.
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
}

impl FontSpec {
    pub const fn new(family: FontFamily, size: f64) -> Self {
        Self {
            family,
            size,
            bold: false,
            italic: false,
        }
    }

    pub const fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub const fn italic(mut self) -> Self {
        self.italic = true;
        self
    }
}

/// Horizontal advance measurement, the only font query layout needs.
pub trait TextMetrics {
    /// Advance width of `text` in design units, including trailing whitespace.
    fn advance(&self, font: &FontSpec, text: &str) -> f64;
}

/// Deterministic per-character advances. Used for layout-only runs and tests where real font
/// files are not available.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedAdvanceMetrics;

impl FixedAdvanceMetrics {
    fn char_ratio(c: char) -> f64 {
        match c {
            '1' => 0.32,
            '0'..='9' => 0.55,
            ' ' => 0.25,
            '?' => 0.5,
            '∞' => 0.8,
            'i' | 'l' | 'j' | '.' | ',' | '\'' | '!' | ':' | ';' | '|' => 0.26,
            '[' | ']' | '/' | '(' | ')' => 0.3,
            'm' | 'w' | 'M' | 'W' => 0.8,
            c if c.is_uppercase() => 0.64,
            _ => 0.5,
        }
    }
}

impl TextMetrics for FixedAdvanceMetrics {
    fn advance(&self, font: &FontSpec, text: &str) -> f64 {
        let weight = if font.bold { 1.05 } else { 1.0 };
        text.chars()
            .map(|c| Self::char_ratio(c) * font.size * weight)
            .sum()
    }
}
