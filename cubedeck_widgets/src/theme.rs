use ratatui::style::Color;

/// Colour theme for the TUI
pub struct Theme;

impl Theme {
    // Backgrounds
    pub const BG: Color = Color::Rgb(13, 17, 23);
    pub const PANEL_BG: Color = Color::Rgb(17, 17, 17);
    pub const INPUT_BG: Color = Color::Rgb(9, 9, 9);

    // Borders
    pub const BORDER: Color = Color::Rgb(55, 65, 81);
    pub const BORDER_FOCUSED: Color = Color::Rgb(37, 99, 235);

    // Deck list
    pub const CURSOR: Color = Color::Rgb(255, 214, 10);
    pub const SELECTED: Color = Color::Rgb(16, 185, 129);
    pub const UNSELECTED: Color = Color::Rgb(100, 100, 120);

    /// Chip background when a deck colour can't be shown
    pub const CHIP_FALLBACK: Color = Color::Rgb(119, 119, 119);
    /// Swatch when a deck has no colour at all
    pub const SWATCH_FALLBACK: Color = Color::Rgb(255, 255, 255);

    // Feedback
    pub const EXPORT: Color = Color::Rgb(22, 163, 74);
    pub const DANGER: Color = Color::Rgb(239, 68, 68);

    // UI elements
    pub const GOLD: Color = Color::Rgb(255, 183, 3);
    pub const DIM_TEXT: Color = Color::Rgb(100, 100, 120);
    pub const BRIGHT_TEXT: Color = Color::Rgb(238, 238, 238);
    pub const MUTED_TEXT: Color = Color::Rgb(156, 163, 175);
}

/// Map a CSS colour string to a terminal colour.
///
/// Understands `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`/`rgba()` and
/// the common named colours. Alpha is ignored.
pub fn css_colour(value: &str) -> Option<Color> {
    let value = value.trim().to_ascii_lowercase();
    if value.is_empty() {
        return None;
    }
    if let Some(hex) = value.strip_prefix('#') {
        return hex_colour(hex);
    }
    if let Some(args) = value
        .strip_prefix("rgba(")
        .or_else(|| value.strip_prefix("rgb("))
    {
        return rgb_function(args.strip_suffix(')')?);
    }
    named_colour(&value)
}

/// Background for a deck chip, grey when the colour is unknown
pub fn chip_colour(value: &str) -> Color {
    css_colour(value).unwrap_or(Theme::CHIP_FALLBACK)
}

/// Black or white, whichever reads better on `bg`
pub fn contrast_text(bg: Color) -> Color {
    match bg {
        Color::Rgb(r, g, b) => {
            let luma = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
            if luma > 140.0 {
                Color::Black
            } else {
                Color::White
            }
        }
        _ => Color::Black,
    }
}

fn hex_colour(hex: &str) -> Option<Color> {
    let digit = |i: usize| u8::from_str_radix(hex.get(i..i + 1)?, 16).ok();
    let pair = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        3 | 4 => Some(Color::Rgb(
            digit(0)? * 17,
            digit(1)? * 17,
            digit(2)? * 17,
        )),
        6 | 8 => Some(Color::Rgb(pair(0)?, pair(2)?, pair(4)?)),
        _ => None,
    }
}

fn rgb_function(args: &str) -> Option<Color> {
    let parts: Vec<&str> = args.split([',', ' ', '/']).filter(|p| !p.is_empty()).collect();
    if parts.len() < 3 {
        return None;
    }
    let channel = |p: &str| -> Option<u8> {
        let v = match p.strip_suffix('%') {
            Some(pct) => pct.parse::<f32>().ok()? * 2.55,
            None => p.parse::<f32>().ok()?,
        };
        Some(v.round().clamp(0.0, 255.0) as u8)
    };
    Some(Color::Rgb(
        channel(parts[0])?,
        channel(parts[1])?,
        channel(parts[2])?,
    ))
}

fn named_colour(name: &str) -> Option<Color> {
    let rgb = match name {
        "black" => (0, 0, 0),
        "white" => (255, 255, 255),
        "red" => (255, 0, 0),
        "green" => (0, 128, 0),
        "lime" => (0, 255, 0),
        "blue" => (0, 0, 255),
        "yellow" => (255, 255, 0),
        "orange" => (255, 165, 0),
        "purple" => (128, 0, 128),
        "violet" => (238, 130, 238),
        "indigo" => (75, 0, 130),
        "pink" => (255, 192, 203),
        "brown" => (165, 42, 42),
        "teal" => (0, 128, 128),
        "cyan" | "aqua" => (0, 255, 255),
        "magenta" | "fuchsia" => (255, 0, 255),
        "navy" => (0, 0, 128),
        "maroon" => (128, 0, 0),
        "olive" => (128, 128, 0),
        "silver" => (192, 192, 192),
        "gray" | "grey" => (128, 128, 128),
        "gold" => (255, 215, 0),
        "crimson" => (220, 20, 60),
        "tan" => (210, 180, 140),
        "salmon" => (250, 128, 114),
        "turquoise" => (64, 224, 208),
        _ => return None,
    };
    Some(Color::Rgb(rgb.0, rgb.1, rgb.2))
}
