//! Theme system for the diary
//!
//! Provides:
//! - Theme struct with all UI colors
//! - Light/dark mode flag with a toggle
//! - Built-in presets (light, dark, catppuccin, nord, gruvbox)
//! - Hex color parsing
//! - 256-color fallback

use ratatui::style::Color;
use thiserror::Error;

/// Theme colors for the UI
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    /// Screen background
    pub background: Color,
    /// Card and input field background
    pub surface: Color,
    /// Primary text (titles, typed input)
    pub foreground: Color,
    /// Secondary text (dates, subtitle, icons)
    pub dimmed: Color,
    /// Card preview text
    pub preview: Color,
    /// Placeholder text in empty fields
    pub placeholder: Color,
    /// Buttons, stars, focused borders
    pub accent: Color,
    /// Text drawn on top of the accent color
    pub on_accent: Color,
    /// Dividers and unfocused borders
    pub border: Color,
    /// Background of the selected card
    pub selection_bg: Color,
    /// Background of the theme toggle button
    pub toggle_bg: Color,
}

impl Theme {
    /// Light palette of the diary
    pub fn light() -> Self {
        Self {
            background: Color::Rgb(255, 255, 255),    // #ffffff
            surface: Color::Rgb(248, 249, 250),       // #f8f9fa
            foreground: Color::Rgb(0, 0, 0),          // #000000
            dimmed: Color::Rgb(102, 102, 102),        // #666666
            preview: Color::Rgb(102, 102, 102),       // #666666
            placeholder: Color::Rgb(153, 153, 153),   // #999999
            accent: Color::Rgb(0, 102, 255),          // #0066ff
            on_accent: Color::Rgb(255, 255, 255),     // #ffffff
            border: Color::Rgb(240, 240, 240),        // #f0f0f0
            selection_bg: Color::Rgb(226, 232, 240),  // #e2e8f0
            toggle_bg: Color::Rgb(226, 232, 240),     // #e2e8f0
        }
    }

    /// Dark palette of the diary
    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(26, 32, 44),       // #1a202c
            surface: Color::Rgb(45, 55, 72),          // #2d3748
            foreground: Color::Rgb(255, 255, 255),    // #ffffff
            dimmed: Color::Rgb(160, 174, 192),        // #a0aec0
            preview: Color::Rgb(203, 213, 224),       // #cbd5e0
            placeholder: Color::Rgb(160, 174, 192),   // #a0aec0
            accent: Color::Rgb(0, 102, 255),          // #0066ff
            on_accent: Color::Rgb(255, 255, 255),     // #ffffff
            border: Color::Rgb(45, 55, 72),           // #2d3748
            selection_bg: Color::Rgb(74, 85, 104),    // #4a5568
            toggle_bg: Color::Rgb(45, 55, 72),        // #2d3748
        }
    }

    /// Catppuccin Mocha theme
    pub fn catppuccin_mocha() -> Self {
        Self {
            background: Color::Rgb(30, 30, 46),       // #1e1e2e (base)
            surface: Color::Rgb(49, 50, 68),          // #313244 (surface0)
            foreground: Color::Rgb(205, 214, 244),    // #cdd6f4 (text)
            dimmed: Color::Rgb(166, 173, 200),        // #a6adc8 (subtext0)
            preview: Color::Rgb(186, 194, 222),       // #bac2de (subtext1)
            placeholder: Color::Rgb(147, 153, 178),   // #9399b2 (overlay2)
            accent: Color::Rgb(137, 180, 250),        // #89b4fa (blue)
            on_accent: Color::Rgb(30, 30, 46),        // #1e1e2e (base)
            border: Color::Rgb(69, 71, 90),           // #45475a (surface1)
            selection_bg: Color::Rgb(88, 91, 112),    // #585b70 (surface2)
            toggle_bg: Color::Rgb(49, 50, 68),        // #313244 (surface0)
        }
    }

    /// Catppuccin Latte theme (light)
    pub fn catppuccin_latte() -> Self {
        Self {
            background: Color::Rgb(239, 241, 245),    // #eff1f5 (base)
            surface: Color::Rgb(230, 233, 239),       // #e6e9ef (mantle)
            foreground: Color::Rgb(76, 79, 105),      // #4c4f69 (text)
            dimmed: Color::Rgb(108, 111, 133),        // #6c6f85 (subtext0)
            preview: Color::Rgb(92, 95, 119),         // #5c5f77 (subtext1)
            placeholder: Color::Rgb(140, 143, 161),   // #8c8fa1 (overlay2)
            accent: Color::Rgb(30, 102, 245),         // #1e66f5 (blue)
            on_accent: Color::Rgb(239, 241, 245),     // #eff1f5 (base)
            border: Color::Rgb(204, 208, 218),        // #ccd0da (surface0)
            selection_bg: Color::Rgb(188, 192, 204),  // #bcc0cc (surface1)
            toggle_bg: Color::Rgb(204, 208, 218),     // #ccd0da (surface0)
        }
    }

    /// Nord theme
    pub fn nord() -> Self {
        Self {
            background: Color::Rgb(46, 52, 64),       // #2e3440 (nord0)
            surface: Color::Rgb(59, 66, 82),          // #3b4252 (nord1)
            foreground: Color::Rgb(236, 239, 244),    // #eceff4 (nord6)
            dimmed: Color::Rgb(216, 222, 233),        // #d8dee9 (nord4)
            preview: Color::Rgb(229, 233, 240),       // #e5e9f0 (nord5)
            placeholder: Color::Rgb(76, 86, 106),     // #4c566a (nord3)
            accent: Color::Rgb(136, 192, 208),        // #88c0d0 (nord8)
            on_accent: Color::Rgb(46, 52, 64),        // #2e3440 (nord0)
            border: Color::Rgb(67, 76, 94),           // #434c5e (nord2)
            selection_bg: Color::Rgb(67, 76, 94),     // #434c5e (nord2)
            toggle_bg: Color::Rgb(59, 66, 82),        // #3b4252 (nord1)
        }
    }

    /// Gruvbox dark theme
    pub fn gruvbox() -> Self {
        Self {
            background: Color::Rgb(40, 40, 40),       // #282828 (bg)
            surface: Color::Rgb(60, 56, 54),          // #3c3836 (bg1)
            foreground: Color::Rgb(235, 219, 178),    // #ebdbb2 (fg)
            dimmed: Color::Rgb(168, 153, 132),        // #a89984 (gray)
            preview: Color::Rgb(213, 196, 161),       // #d5c4a1 (fg2)
            placeholder: Color::Rgb(146, 131, 116),   // #928374 (gray)
            accent: Color::Rgb(215, 153, 33),         // #d79921 (yellow)
            on_accent: Color::Rgb(40, 40, 40),        // #282828 (bg)
            border: Color::Rgb(80, 73, 69),           // #504945 (bg2)
            selection_bg: Color::Rgb(80, 73, 69),     // #504945 (bg2)
            toggle_bg: Color::Rgb(60, 56, 54),        // #3c3836 (bg1)
        }
    }

    /// Load theme from preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" | "default" => Some(Self::light()),
            "dark" => Some(Self::dark()),
            "catppuccin-mocha" | "catppuccin_mocha" | "catppuccin" => Some(Self::catppuccin_mocha()),
            "catppuccin-latte" | "catppuccin_latte" => Some(Self::catppuccin_latte()),
            "nord" => Some(Self::nord()),
            "gruvbox" | "gruvbox-dark" | "gruvbox_dark" => Some(Self::gruvbox()),
            _ => None,
        }
    }

    /// Replace the accent color
    pub fn with_accent(mut self, accent: Color) -> Self {
        self.accent = accent;
        self
    }

    /// Convert to 256-color approximation for limited terminals
    pub fn to_256_color(&self) -> Self {
        Self {
            background: approximate_256(self.background),
            surface: approximate_256(self.surface),
            foreground: approximate_256(self.foreground),
            dimmed: approximate_256(self.dimmed),
            preview: approximate_256(self.preview),
            placeholder: approximate_256(self.placeholder),
            accent: approximate_256(self.accent),
            on_accent: approximate_256(self.on_accent),
            border: approximate_256(self.border),
            selection_bg: approximate_256(self.selection_bg),
            toggle_bg: approximate_256(self.toggle_bg),
        }
    }
}

/// Light/dark flag. Starts light; only `toggle` changes it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    pub fn from_dark(dark: bool) -> Self {
        if dark {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }

    pub fn toggle(&mut self) {
        *self = match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        };
    }
}

/// The two palettes the mode flag picks between
#[derive(Debug, Clone, PartialEq)]
pub struct ThemeSet {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for ThemeSet {
    fn default() -> Self {
        Self {
            light: Theme::light(),
            dark: Theme::dark(),
        }
    }
}

impl ThemeSet {
    pub fn get(&self, mode: ThemeMode) -> &Theme {
        match mode {
            ThemeMode::Light => &self.light,
            ThemeMode::Dark => &self.dark,
        }
    }
}

/// Parse hex color string to Color
/// Supports: #rrggbb, #rgb, rrggbb, rgb
pub fn parse_hex_color(s: &str) -> Result<Color, ColorError> {
    let s = s.trim().trim_start_matches('#');
    if !s.is_ascii() {
        return Err(ColorError::InvalidHex);
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&s[range], 16).map_err(|_| ColorError::InvalidHex)
    };

    match s.len() {
        // #rgb -> #rrggbb
        3 => Ok(Color::Rgb(
            channel(0..1)? * 17,
            channel(1..2)? * 17,
            channel(2..3)? * 17,
        )),
        // #rrggbb, or #rrggbbaa with alpha ignored
        6 | 8 => Ok(Color::Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
        _ => Err(ColorError::InvalidLength),
    }
}

/// Color parsing error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    #[error("invalid color length (expected 3, 6, or 8 hex chars)")]
    InvalidLength,
    #[error("invalid hex character")]
    InvalidHex,
}

/// Approximate RGB color to nearest 256-color palette entry
fn approximate_256(color: Color) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            // 6x6x6 color cube starts at index 16
            // Each axis: 0, 95, 135, 175, 215, 255 -> indices 0-5
            let r_idx = if r < 48 { 0 } else { (r - 35) / 40 };
            let g_idx = if g < 48 { 0 } else { (g - 35) / 40 };
            let b_idx = if b < 48 { 0 } else { (b - 35) / 40 };
            let idx = 16 + 36 * r_idx + 6 * g_idx + b_idx;
            Color::Indexed(idx)
        }
        c => c,
    }
}
