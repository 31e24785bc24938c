//! Static stylesheet
//!
//! One JSON stylesheet is embedded in the binary and parsed once at startup.
//! It defines a style class for each visual element: the root container,
//! thumbnails, the full image, the navigation button and its container.

use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};
use serde::Deserialize;
use tracing::warn;

use crate::error::GalleryError;

const EMBEDDED_STYLESHEET: &str = include_str!("../../assets/style.json");

/// One class as written in the JSON file
#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
struct ClassSource {
    background: Option<String>,
    hover_background: Option<String>,
    text: Option<String>,
    border_color: Option<String>,
    border_width: f32,
    border_radius: f32,
}

#[derive(Deserialize, Debug, Clone, Default)]
#[serde(default, deny_unknown_fields)]
struct StylesheetSource {
    root: ClassSource,
    thumbnail: ClassSource,
    full_image: ClassSource,
    nav_button: ClassSource,
    button_box: ClassSource,
}

/// A parsed style class. Unset colours fall back to the theme.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ClassStyle {
    pub background: Option<Color>,
    /// Background while hovered or pressed (buttons only)
    pub hover_background: Option<Color>,
    pub text: Option<Color>,
    pub border: Border,
}

impl ClassStyle {
    fn from_source(source: &ClassSource) -> Result<Self, GalleryError> {
        let color = |value: &Option<String>| value.as_deref().map(parse_color).transpose();

        Ok(ClassStyle {
            background: color(&source.background)?,
            hover_background: color(&source.hover_background)?,
            text: color(&source.text)?,
            border: Border {
                color: color(&source.border_color)?.unwrap_or(Color::TRANSPARENT),
                width: source.border_width,
                radius: source.border_radius.into(),
            },
        })
    }

    /// Style for a `container` carrying this class
    pub fn container_style(&self) -> container::Style {
        container::Style {
            text_color: self.text,
            background: self.background.map(Background::Color),
            border: self.border,
            ..container::Style::default()
        }
    }

    /// Style for a `button` carrying this class
    pub fn button_style(&self, theme: &Theme, status: button::Status) -> button::Style {
        let mut style = button::primary(theme, status);

        let background = match status {
            button::Status::Hovered | button::Status::Pressed => {
                self.hover_background.or(self.background)
            }
            _ => self.background,
        };

        if let Some(background) = background {
            style.background = Some(Background::Color(background));
        }
        if let Some(text) = self.text {
            style.text_color = text;
        }
        style.border = self.border;

        style
    }
}

/// All style classes used by the gallery
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Stylesheet {
    pub root: ClassStyle,
    pub thumbnail: ClassStyle,
    pub full_image: ClassStyle,
    pub nav_button: ClassStyle,
    pub button_box: ClassStyle,
}

impl Stylesheet {
    /// Parse a stylesheet from JSON
    pub fn parse(json: &str) -> Result<Self, GalleryError> {
        let source: StylesheetSource = serde_json::from_str(json)?;

        Ok(Stylesheet {
            root: ClassStyle::from_source(&source.root)?,
            thumbnail: ClassStyle::from_source(&source.thumbnail)?,
            full_image: ClassStyle::from_source(&source.full_image)?,
            nav_button: ClassStyle::from_source(&source.nav_button)?,
            button_box: ClassStyle::from_source(&source.button_box)?,
        })
    }

    /// Load the embedded stylesheet, or theme defaults if it is broken
    pub fn load() -> Self {
        Self::parse(EMBEDDED_STYLESHEET).unwrap_or_else(|err| {
            warn!("{err}; using default styles");
            Stylesheet::default()
        })
    }
}

/// Parse `#rrggbb` or `#rrggbbaa`
pub fn parse_color(value: &str) -> Result<Color, GalleryError> {
    let invalid = || GalleryError::InvalidColor(value.to_string());

    let hex = value.strip_prefix('#').ok_or_else(invalid)?;
    if !matches!(hex.len(), 6 | 8) || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    let channel = |at: usize| u8::from_str_radix(&hex[at..at + 2], 16).map_err(|_| invalid());

    let alpha = if hex.len() == 8 {
        f32::from(channel(6)?) / 255.0
    } else {
        1.0
    };

    Ok(Color::from_rgba8(channel(0)?, channel(2)?, channel(4)?, alpha))
}
