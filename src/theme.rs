//! Theme support for the novel reader.
//!
//! Two built-in color schemes, light and dark, selected by the persisted
//! dark-mode flag. Each theme is a complete palette applied on top of egui's
//! base visuals.

use egui::Color32;

/// Color palette for a reader theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Background colors
    pub background: Color32,
    pub panel_background: Color32,
    pub page: Color32,

    // Foreground colors
    pub text: Color32,
    pub text_dim: Color32,
    pub heading: Color32,

    // Interactive colors
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub accent: Color32,
}

/// A complete theme definition with metadata and color palette.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub dark: bool,
    pub colors: ThemeColors,
}

impl Theme {
    /// Applies this theme's colors to egui visuals.
    pub fn apply(&self, visuals: &mut egui::Visuals) {
        let colors = &self.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.window_fill = colors.background;
        visuals.extreme_bg_color = colors.page;
        visuals.faint_bg_color = colors.hover;

        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.accent;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.accent;
    }
}

/// Returns the theme matching the persisted dark-mode flag.
pub fn theme_for(dark_mode: bool) -> Theme {
    if dark_mode {
        dark_theme()
    } else {
        light_theme()
    }
}

/// Creates the default light reading theme (warm paper tones).
pub fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        dark: false,
        colors: ThemeColors {
            background: hex_to_color32("#f4f1ea"),
            panel_background: hex_to_color32("#ece8de"),
            page: hex_to_color32("#fdfbf5"),

            text: hex_to_color32("#2b2b2b"),
            text_dim: hex_to_color32("#7a756a"),
            heading: hex_to_color32("#1a1a1a"),

            selection: hex_to_color32("#cfe0f5"),
            hover: hex_to_color32("#e2ddd1"),
            border: hex_to_color32("#b8b2a4"),
            accent: hex_to_color32("#2d6a9f"),
        },
    }
}

/// Creates the dark reading theme.
pub fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        dark: true,
        colors: ThemeColors {
            background: hex_to_color32("#1e1f22"),
            panel_background: hex_to_color32("#26272b"),
            page: hex_to_color32("#17181a"),

            text: hex_to_color32("#d6d3cc"),
            text_dim: hex_to_color32("#8a877f"),
            heading: hex_to_color32("#f1eee6"),

            selection: hex_to_color32("#34455c"),
            hover: hex_to_color32("#33343a"),
            border: hex_to_color32("#4a4b52"),
            accent: hex_to_color32("#6aa2d8"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32.
///
/// Malformed input falls back to black in release builds; debug builds
/// assert, so a typo in a palette definition fails a test run instead of
/// silently rendering black.
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');
    debug_assert!(
        hex.len() == 6 && hex.bytes().all(|b| b.is_ascii_hexdigit()),
        "malformed hex color: {:?}",
        hex
    );

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}
