//! Light and dark themes

use std::error::Error;
use std::fmt::{Display, Formatter};

use csscolorparser::Color;


/// The UI theme
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Default for Theme {
    fn default() -> Self {
        Self::Light
    }
}

impl Theme {
    /// Interpret a stored preference. Only `"dark"` means dark, anything else (or nothing) means light.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("dark") => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// The colors of this theme
    pub fn palette(&self) -> Result<Palette, Box<dyn Error>> {
        match self {
            // lavender/white
            Theme::Light => Palette::from_css("lavender", "#1f2937", "#6d28d9"),
            // black/white
            Theme::Dark => Palette::from_css("black", "white", "#a78bfa"),
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "{}", self.as_str())
    }
}


/// The colors a host uses to draw a theme
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accent: Color,
}

impl Palette {
    pub fn from_css(background: &str, foreground: &str, accent: &str) -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            background: csscolorparser::parse(background)?,
            foreground: csscolorparser::parse(foreground)?,
            accent: csscolorparser::parse(accent)?,
        })
    }

    /// ANSI escape sequence that draws text in `color` on a 24-bit terminal
    pub fn ansi_fg(color: &Color) -> String {
        let (r, g, b) = rgb8(color);
        format!("\x1b[38;2;{};{};{}m", r, g, b)
    }

    /// ANSI escape sequence that paints the background in `color` on a 24-bit terminal
    pub fn ansi_bg(color: &Color) -> String {
        let (r, g, b) = rgb8(color);
        format!("\x1b[48;2;{};{};{}m", r, g, b)
    }

    /// Wrap `text` so that it is drawn with the accent color
    pub fn accented(&self, text: &str) -> String {
        format!("{}{}{}", Self::ansi_fg(&self.accent), text, ANSI_RESET)
    }
}

pub const ANSI_RESET: &str = "\x1b[0m";

fn rgb8(color: &Color) -> (u8, u8, u8) {
    let (r, g, b, _) = color.rgba_u8();
    (r, g, b)
}
