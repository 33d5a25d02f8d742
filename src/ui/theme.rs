use ratatui::style::Color;

/// Theme color palette defining all colors used in the application.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    // Primary colors
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub accent: ColorSpec,

    // Text colors
    pub text: ColorSpec,
    pub text_secondary: ColorSpec,
    pub text_muted: ColorSpec,

    // Background colors
    pub background: ColorSpec,
    pub surface: ColorSpec,

    // Status colors
    pub success: ColorSpec,
    pub warning: ColorSpec,
    pub error: ColorSpec,
    pub info: ColorSpec,

    // UI element colors
    pub border_active: ColorSpec,
    pub border_normal: ColorSpec,
    pub highlight_bg: ColorSpec,
    pub highlight_fg: ColorSpec,

    // Footer mode colors
    pub footer_search: ColorSpec,
    pub footer_debug: ColorSpec,
    pub footer_delete: ColorSpec,
    pub footer_form: ColorSpec,
    pub footer_normal: ColorSpec,
}

/// An RGB triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

const fn rgb(r: u8, g: u8, b: u8) -> ColorSpec {
    ColorSpec { r, g, b }
}

const BLACK: ColorSpec = rgb(0, 0, 0);

impl ColorSpec {
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::tokyo_night()
    }
}

/// Theme names in cycling order.
const THEME_NAMES: [&str; 5] = [
    "tokyo-night",
    "tokyo-night-day",
    "dracula",
    "catppuccin-mocha",
    "rose-pine-dawn",
];

impl Theme {
    pub fn tokyo_night() -> Self {
        Theme {
            name: "tokyo-night",
            primary: rgb(125, 207, 255),
            secondary: rgb(158, 206, 106),
            accent: rgb(255, 159, 196),
            text: rgb(169, 177, 214),
            text_secondary: rgb(192, 202, 245),
            text_muted: rgb(117, 121, 148),
            background: rgb(26, 27, 38),
            surface: rgb(36, 40, 59),
            success: rgb(158, 206, 106),
            warning: rgb(255, 202, 40),
            error: rgb(247, 118, 142),
            info: rgb(125, 207, 255),
            border_active: rgb(125, 207, 255),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(125, 207, 255),
            highlight_fg: rgb(26, 27, 38),
            footer_search: rgb(125, 207, 255),
            footer_debug: rgb(158, 206, 106),
            footer_delete: rgb(247, 118, 142),
            footer_form: rgb(255, 202, 40),
            footer_normal: BLACK,
        }
    }

    pub fn tokyo_night_day() -> Self {
        Theme {
            name: "tokyo-night-day",
            primary: rgb(38, 139, 210),
            secondary: rgb(34, 154, 83),
            accent: rgb(220, 50, 47),
            text: rgb(26, 27, 38),
            text_secondary: rgb(36, 40, 59),
            text_muted: rgb(117, 121, 148),
            background: rgb(234, 238, 255),
            surface: rgb(203, 211, 255),
            success: rgb(34, 154, 83),
            warning: rgb(196, 157, 0),
            error: rgb(220, 50, 47),
            info: rgb(38, 139, 210),
            border_active: rgb(38, 139, 210),
            border_normal: rgb(117, 121, 148),
            highlight_bg: rgb(38, 139, 210),
            highlight_fg: rgb(234, 238, 255),
            footer_search: rgb(38, 139, 210),
            footer_debug: rgb(34, 154, 83),
            footer_delete: rgb(220, 50, 47),
            footer_form: rgb(196, 157, 0),
            footer_normal: BLACK,
        }
    }

    pub fn dracula() -> Self {
        Theme {
            name: "dracula",
            primary: rgb(189, 147, 249),
            secondary: rgb(139, 233, 253),
            accent: rgb(255, 121, 198),
            text: rgb(248, 248, 242),
            text_secondary: rgb(189, 147, 249),
            text_muted: rgb(98, 114, 164),
            background: rgb(40, 42, 54),
            surface: rgb(68, 71, 90),
            success: rgb(80, 250, 123),
            warning: rgb(255, 184, 108),
            error: rgb(255, 85, 85),
            info: rgb(139, 233, 253),
            border_active: rgb(189, 147, 249),
            border_normal: rgb(98, 114, 164),
            highlight_bg: rgb(139, 233, 253),
            highlight_fg: rgb(40, 42, 54),
            footer_search: rgb(139, 233, 253),
            footer_debug: rgb(80, 250, 123),
            footer_delete: rgb(255, 85, 85),
            footer_form: rgb(255, 184, 108),
            footer_normal: BLACK,
        }
    }

    pub fn catppuccin_mocha() -> Self {
        Theme {
            name: "catppuccin-mocha",
            primary: rgb(203, 166, 247),
            secondary: rgb(166, 227, 161),
            accent: rgb(250, 179, 135),
            text: rgb(205, 214, 244),
            text_secondary: rgb(186, 194, 222),
            text_muted: rgb(166, 173, 200),
            background: rgb(17, 17, 27),
            surface: rgb(24, 24, 37),
            success: rgb(166, 227, 161),
            warning: rgb(249, 226, 175),
            error: rgb(243, 139, 168),
            info: rgb(137, 180, 250),
            border_active: rgb(203, 166, 247),
            border_normal: rgb(166, 173, 200),
            highlight_bg: rgb(137, 180, 250),
            highlight_fg: rgb(17, 17, 27),
            footer_search: rgb(137, 180, 250),
            footer_debug: rgb(166, 227, 161),
            footer_delete: rgb(243, 139, 168),
            footer_form: rgb(249, 226, 175),
            footer_normal: BLACK,
        }
    }

    pub fn rose_pine_dawn() -> Self {
        Theme {
            name: "rose-pine-dawn",
            primary: rgb(161, 119, 255),
            secondary: rgb(59, 247, 209),
            accent: rgb(255, 109, 146),
            text: rgb(88, 82, 96),
            text_secondary: rgb(121, 117, 147),
            text_muted: rgb(152, 147, 165),
            background: rgb(250, 244, 237),
            surface: rgb(255, 250, 243),
            success: rgb(59, 247, 209),
            warning: rgb(255, 210, 0),
            error: rgb(235, 111, 146),
            info: rgb(61, 174, 233),
            border_active: rgb(161, 119, 255),
            border_normal: rgb(88, 82, 96),
            highlight_bg: rgb(61, 174, 233),
            highlight_fg: BLACK,
            footer_search: rgb(61, 174, 233),
            footer_debug: rgb(59, 247, 209),
            footer_delete: rgb(235, 111, 146),
            footer_form: rgb(255, 210, 0),
            footer_normal: BLACK,
        }
    }

    /// Get a theme by name.
    ///
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "tokyo-night" => Some(Self::tokyo_night()),
            "tokyo-night-day" => Some(Self::tokyo_night_day()),
            "dracula" => Some(Self::dracula()),
            "catppuccin-mocha" => Some(Self::catppuccin_mocha()),
            "rose-pine-dawn" => Some(Self::rose_pine_dawn()),
            _ => None,
        }
    }

    /// Get list of all available theme names.
    ///
    pub fn available_themes() -> &'static [&'static str] {
        &THEME_NAMES
    }

    /// Return the theme following this one in the cycle.
    ///
    pub fn next(&self) -> Self {
        let position = THEME_NAMES
            .iter()
            .position(|name| *name == self.name)
            .unwrap_or(0);
        let next_name = THEME_NAMES[(position + 1) % THEME_NAMES.len()];
        Self::from_name(next_name).unwrap_or_default()
    }
}
