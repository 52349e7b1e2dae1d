//! Theme catalog: the fixed set of named color palettes a page can use.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the fixed named palettes applied to a rendered page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(type_name = "theme", rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Aurora,
    Ocean,
    Sunset,
    Forest,
}

impl Theme {
    /// All themes, in display order.
    pub const ALL: [Theme; 4] = [Theme::Aurora, Theme::Ocean, Theme::Sunset, Theme::Forest];

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Aurora => "aurora",
            Theme::Ocean => "ocean",
            Theme::Sunset => "sunset",
            Theme::Forest => "forest",
        }
    }

    /// Human-readable palette name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Aurora => "Aurora",
            Theme::Ocean => "Ocean",
            Theme::Sunset => "Sunset",
            Theme::Forest => "Forest",
        }
    }

    /// Returns the palette for this theme in the requested mode.
    pub fn palette(&self, dark: bool) -> &'static ThemeColors {
        let (light, dark_palette) = match self {
            Theme::Aurora => (&AURORA_LIGHT, &AURORA_DARK),
            Theme::Ocean => (&OCEAN_LIGHT, &OCEAN_DARK),
            Theme::Sunset => (&SUNSET_LIGHT, &SUNSET_DARK),
            Theme::Forest => (&FOREST_LIGHT, &FOREST_DARK),
        };
        if dark { dark_palette } else { light }
    }

    /// Renders the palette as inline CSS custom properties for templates.
    pub fn css_vars(&self, dark: bool) -> String {
        let c = self.palette(dark);
        format!(
            "--theme-primary:{};--theme-secondary:{};--theme-background:{};\
             --theme-surface:{};--theme-text:{};--theme-text-muted:{};--theme-border:{}",
            c.primary, c.secondary, c.background, c.surface, c.text, c.text_muted, c.border
        )
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aurora" => Ok(Theme::Aurora),
            "ocean" => Ok(Theme::Ocean),
            "sunset" => Ok(Theme::Sunset),
            "forest" => Ok(Theme::Forest),
            _ => Err(()),
        }
    }
}

/// Resolved color values for one theme mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeColors {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
}

static AURORA_LIGHT: ThemeColors = ThemeColors {
    primary: "rgb(139, 92, 246)",
    secondary: "rgb(236, 72, 153)",
    background: "rgb(250, 250, 250)",
    surface: "rgb(255, 255, 255)",
    text: "rgb(17, 24, 39)",
    text_muted: "rgb(107, 114, 128)",
    border: "rgb(229, 231, 235)",
};

static AURORA_DARK: ThemeColors = ThemeColors {
    primary: "rgb(167, 139, 250)",
    secondary: "rgb(244, 114, 182)",
    background: "rgb(17, 24, 39)",
    surface: "rgb(31, 41, 55)",
    text: "rgb(243, 244, 246)",
    text_muted: "rgb(156, 163, 175)",
    border: "rgb(55, 65, 81)",
};

static OCEAN_LIGHT: ThemeColors = ThemeColors {
    primary: "rgb(59, 130, 246)",
    secondary: "rgb(6, 182, 212)",
    background: "rgb(248, 250, 252)",
    surface: "rgb(255, 255, 255)",
    text: "rgb(15, 23, 42)",
    text_muted: "rgb(100, 116, 139)",
    border: "rgb(226, 232, 240)",
};

static OCEAN_DARK: ThemeColors = ThemeColors {
    primary: "rgb(96, 165, 250)",
    secondary: "rgb(34, 211, 238)",
    background: "rgb(15, 23, 42)",
    surface: "rgb(30, 41, 59)",
    text: "rgb(241, 245, 249)",
    text_muted: "rgb(148, 163, 184)",
    border: "rgb(51, 65, 85)",
};

static SUNSET_LIGHT: ThemeColors = ThemeColors {
    primary: "rgb(251, 146, 60)",
    secondary: "rgb(250, 204, 21)",
    background: "rgb(255, 251, 235)",
    surface: "rgb(255, 255, 255)",
    text: "rgb(28, 25, 23)",
    text_muted: "rgb(120, 113, 108)",
    border: "rgb(231, 229, 228)",
};

static SUNSET_DARK: ThemeColors = ThemeColors {
    primary: "rgb(253, 186, 116)",
    secondary: "rgb(252, 211, 77)",
    background: "rgb(28, 25, 23)",
    surface: "rgb(41, 37, 36)",
    text: "rgb(245, 245, 244)",
    text_muted: "rgb(168, 162, 158)",
    border: "rgb(68, 64, 60)",
};

static FOREST_LIGHT: ThemeColors = ThemeColors {
    primary: "rgb(34, 197, 94)",
    secondary: "rgb(168, 85, 247)",
    background: "rgb(247, 254, 231)",
    surface: "rgb(255, 255, 255)",
    text: "rgb(20, 28, 16)",
    text_muted: "rgb(87, 96, 83)",
    border: "rgb(217, 229, 209)",
};

static FOREST_DARK: ThemeColors = ThemeColors {
    primary: "rgb(74, 222, 128)",
    secondary: "rgb(196, 181, 253)",
    background: "rgb(20, 28, 16)",
    surface: "rgb(31, 41, 27)",
    text: "rgb(240, 253, 244)",
    text_muted: "rgb(134, 160, 139)",
    border: "rgb(47, 61, 43)",
};
