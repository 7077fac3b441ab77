//! Colors and theme resolution
//!
//! Color preferences hold a hex literal, a color name, or the token `"material"`,
//! which defers to the host's current theme. Hosts plug their theme in
//! through [`ThemeResolver`].

use std::fmt;

/// Stored token meaning "take the color from the host theme"
pub const MATERIAL_TOKEN: &str = "material";

/// A 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    /// Fully transparent black
    pub const TRANSPARENT: Color = Color(0x0000_0000);

    /// Build a color from its channels
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Color(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Parse a hex literal or one of the named colors, ignoring case
    pub fn parse(value: &str) -> Option<Self> {
        if value.starts_with('#') {
            return Self::parse_hex(value);
        }
        let name = value.to_ascii_lowercase();
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|&(_, argb)| Color(argb))
    }

    /// Parse `#RRGGBB` (opaque) or `#AARRGGBB`
    pub fn parse_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Color(0xFF00_0000 | value)),
            8 => Some(Color(value)),
            _ => None,
        }
    }

    /// Alpha channel
    pub fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Red channel
    pub fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Green channel
    pub fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Blue channel
    pub fn blue(self) -> u8 {
        self.0 as u8
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

/// Color names accepted in place of a hex literal
const NAMED_COLORS: &[(&str, u32)] = &[
    ("black", 0xFF00_0000),
    ("darkgray", 0xFF44_4444),
    ("gray", 0xFF88_8888),
    ("lightgray", 0xFFCC_CCCC),
    ("white", 0xFFFF_FFFF),
    ("red", 0xFFFF_0000),
    ("green", 0xFF00_FF00),
    ("blue", 0xFF00_00FF),
    ("yellow", 0xFFFF_FF00),
    ("cyan", 0xFF00_FFFF),
    ("magenta", 0xFFFF_00FF),
    ("aqua", 0xFF00_FFFF),
    ("fuchsia", 0xFFFF_00FF),
    ("darkgrey", 0xFF44_4444),
    ("grey", 0xFF88_8888),
    ("lightgrey", 0xFFCC_CCCC),
    ("lime", 0xFF00_FF00),
    ("maroon", 0xFF80_0000),
    ("navy", 0xFF00_0080),
    ("olive", 0xFF80_8000),
    ("purple", 0xFF80_0080),
    ("silver", 0xFFC0_C0C0),
    ("teal", 0xFF00_8080),
];

/// Parsed form of a stored color preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorSetting {
    /// Resolve from the host theme
    Material,
    /// A literal color string, not yet validated
    Literal(String),
}

impl ColorSetting {
    /// Classify a stored value
    pub fn parse(raw: &str) -> Self {
        if raw == MATERIAL_TOKEN {
            ColorSetting::Material
        } else {
            ColorSetting::Literal(raw.to_string())
        }
    }
}

/// Theme attributes a color preference can defer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeAttribute {
    /// Primary accent color, used for text
    ColorPrimary,
    /// Color drawn on top of the primary color, used for the background
    ColorOnPrimary,
}

/// Host capability that resolves theme attributes to concrete colors
#[cfg_attr(test, mockall::automock)]
pub trait ThemeResolver: Send + Sync {
    /// Resolve `attr` against the current theme
    fn resolve(&self, attr: ThemeAttribute) -> Color;
}

/// Resolver backed by fixed colors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StaticTheme {
    /// Value for [`ThemeAttribute::ColorPrimary`]
    pub primary: Color,
    /// Value for [`ThemeAttribute::ColorOnPrimary`]
    pub on_primary: Color,
}

impl StaticTheme {
    /// Create a theme from explicit colors
    pub fn new(primary: Color, on_primary: Color) -> Self {
        Self { primary, on_primary }
    }

    /// Material baseline light scheme
    pub fn light() -> Self {
        Self::new(Color(0xFF67_50A4), Color(0xFFFF_FFFF))
    }

    /// Material baseline dark scheme
    pub fn dark() -> Self {
        Self::new(Color(0xFFD0_BCFF), Color(0xFF38_1E72))
    }
}

impl Default for StaticTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl ThemeResolver for StaticTheme {
    fn resolve(&self, attr: ThemeAttribute) -> Color {
        match attr {
            ThemeAttribute::ColorPrimary => self.primary,
            ThemeAttribute::ColorOnPrimary => self.on_primary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_argb() {
        let color = Color::parse_hex("#FFF3F3F3").unwrap();
        assert_eq!(color, Color(0xFFF3_F3F3));
        assert_eq!(color.alpha(), 0xFF);
        assert_eq!(color.red(), 0xF3);

        assert_eq!(Color::parse_hex("#00000000"), Some(Color::TRANSPARENT));
    }

    #[test]
    fn test_parse_hex_rgb_is_opaque() {
        let color = Color::parse_hex("#1e3a5f").unwrap();
        assert_eq!(color, Color::from_argb(0xFF, 0x1E, 0x3A, 0x5F));
    }

    #[test]
    fn test_parse_hex_rejects_garbage() {
        assert_eq!(Color::parse_hex("FFFFFF"), None);
        assert_eq!(Color::parse_hex("#FFF"), None);
        assert_eq!(Color::parse_hex("#GG0000"), None);
        assert_eq!(Color::parse_hex("#+FFFFF"), None);
        assert_eq!(Color::parse_hex(MATERIAL_TOKEN), None);
    }

    #[test]
    fn test_parse_named_colors() {
        assert_eq!(Color::parse("red"), Some(Color(0xFFFF_0000)));
        assert_eq!(Color::parse("Gray"), Some(Color(0xFF88_8888)));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
        assert_eq!(Color::parse("TEAL"), Some(Color(0xFF00_8080)));
        assert_eq!(Color::parse("#FF000080"), Color::parse("navy"));
        assert_eq!(Color::parse("orange"), None);
        assert_eq!(Color::parse(MATERIAL_TOKEN), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Color::from_argb(0x80, 0x12, 0xAB, 0x00).to_string(), "#8012AB00");
    }

    #[test]
    fn test_color_setting_parse() {
        assert_eq!(ColorSetting::parse("material"), ColorSetting::Material);
        assert_eq!(
            ColorSetting::parse("#FF000000"),
            ColorSetting::Literal("#FF000000".to_string())
        );
    }

    #[test]
    fn test_static_theme_resolve() {
        let theme = StaticTheme::new(Color(1), Color(2));
        assert_eq!(theme.resolve(ThemeAttribute::ColorPrimary), Color(1));
        assert_eq!(theme.resolve(ThemeAttribute::ColorOnPrimary), Color(2));
        assert_ne!(StaticTheme::light(), StaticTheme::dark());
    }
}
