use ratatui::style::Color;

/// Selects one of the two palettes.
///
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeFlag {
    #[default]
    Dark,
    Light,
}

impl ThemeFlag {
    /// Interpret a persisted value. Only the literal `"dark"` selects the
    /// dark palette; anything else reads as light.
    ///
    pub fn from_stored(value: &str) -> Self {
        if value == "dark" {
            ThemeFlag::Dark
        } else {
            ThemeFlag::Light
        }
    }

    /// Return the value written to storage.
    ///
    pub fn as_str(self) -> &'static str {
        match self {
            ThemeFlag::Dark => "dark",
            ThemeFlag::Light => "light",
        }
    }

    /// Return the opposite flag.
    ///
    pub fn toggled(self) -> Self {
        match self {
            ThemeFlag::Dark => ThemeFlag::Light,
            ThemeFlag::Light => ThemeFlag::Dark,
        }
    }

    /// Return the palette for this flag.
    ///
    pub fn palette(self) -> &'static Palette {
        match self {
            ThemeFlag::Dark => &Palette::DARK,
            ThemeFlag::Light => &Palette::LIGHT,
        }
    }
}

/// Named set of colors associated with one theme flag.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub background: ColorSpec,
    pub text: ColorSpec,
    pub primary: ColorSpec,
    pub secondary: ColorSpec,
    pub title: ColorSpec,
    pub button_hover: ColorSpec,
    pub border: ColorSpec,
    pub error: ColorSpec,
}

/// RGB color triple.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSpec {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl ColorSpec {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        ColorSpec { r, g, b }
    }

    pub fn to_color(self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Mix towards `other` by `amount` (0.0 keeps self, 1.0 yields other).
    /// Used in place of alpha, which terminals don't have.
    ///
    pub fn blend(self, other: ColorSpec, amount: f32) -> ColorSpec {
        let amount = amount.clamp(0.0, 1.0);
        let mix = |from: u8, to: u8| -> u8 {
            let value = f32::from(from) + (f32::from(to) - f32::from(from)) * amount;
            value.round() as u8
        };
        ColorSpec {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
        }
    }
}

impl Palette {
    // Translucent whites and blacks are pre-blended against the background.
    pub const DARK: Palette = Palette {
        name: "dark",
        background: ColorSpec::new(0, 0, 0),
        text: ColorSpec::new(255, 255, 255),
        primary: ColorSpec::new(255, 215, 0),
        secondary: ColorSpec::new(204, 204, 204),
        title: ColorSpec::new(128, 128, 128),
        button_hover: ColorSpec::new(255, 215, 0),
        border: ColorSpec::new(64, 64, 64),
        error: ColorSpec::new(255, 68, 68),
    };

    pub const LIGHT: Palette = Palette {
        name: "light",
        background: ColorSpec::new(255, 255, 255),
        text: ColorSpec::new(0, 0, 0),
        primary: ColorSpec::new(26, 26, 26),
        secondary: ColorSpec::new(51, 51, 51),
        title: ColorSpec::new(153, 153, 153),
        button_hover: ColorSpec::new(26, 26, 26),
        border: ColorSpec::new(191, 191, 191),
        error: ColorSpec::new(255, 68, 68),
    };
}
