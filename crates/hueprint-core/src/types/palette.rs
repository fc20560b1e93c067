//! The 15-role color palette that every page template renders from.

use std::collections::BTreeMap;
use std::fmt;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use super::color::Color;
use crate::errors::ColorError;

/// Semantic role of a palette color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteRole {
    Brand,
    Accent,
    ButtonPrimary,
    ButtonText,
    ButtonSecondary,
    ButtonSecondaryText,
    TextPrimary,
    TextSecondary,
    #[serde(rename = "section-bg-1")]
    SectionBg1,
    #[serde(rename = "section-bg-2")]
    SectionBg2,
    #[serde(rename = "section-bg-3")]
    SectionBg3,
    Border,
    Highlight,
    InputBg,
    InputText,
}

impl PaletteRole {
    pub const COUNT: usize = 15;

    /// All roles, in palette order.
    pub const ALL: [PaletteRole; Self::COUNT] = [
        Self::Brand,
        Self::Accent,
        Self::ButtonPrimary,
        Self::ButtonText,
        Self::ButtonSecondary,
        Self::ButtonSecondaryText,
        Self::TextPrimary,
        Self::TextSecondary,
        Self::SectionBg1,
        Self::SectionBg2,
        Self::SectionBg3,
        Self::Border,
        Self::Highlight,
        Self::InputBg,
        Self::InputText,
    ];

    /// Wire id, as used by templates and stored palettes.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Accent => "accent",
            Self::ButtonPrimary => "button-primary",
            Self::ButtonText => "button-text",
            Self::ButtonSecondary => "button-secondary",
            Self::ButtonSecondaryText => "button-secondary-text",
            Self::TextPrimary => "text-primary",
            Self::TextSecondary => "text-secondary",
            Self::SectionBg1 => "section-bg-1",
            Self::SectionBg2 => "section-bg-2",
            Self::SectionBg3 => "section-bg-3",
            Self::Border => "border",
            Self::Highlight => "highlight",
            Self::InputBg => "input-bg",
            Self::InputText => "input-text",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|role| role.as_str() == s)
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for PaletteRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One color per [`PaletteRole`]. A palette is always complete.
///
/// Serializes as `{ "brand": "#RRGGBB", ... }` with keys in role order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct ColorPalette {
    colors: [Color; PaletteRole::COUNT],
}

impl ColorPalette {
    /// Palette with every role set to `color`. Mostly useful as a base for
    /// builders and tests.
    pub fn filled(color: Color) -> Self {
        Self {
            colors: [color; PaletteRole::COUNT],
        }
    }

    /// Build from `(role, color)` pairs. Every role must appear; a repeated
    /// role keeps its last value.
    pub fn from_roles<I>(entries: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (PaletteRole, Color)>,
    {
        let mut slots: [Option<Color>; PaletteRole::COUNT] = [None; PaletteRole::COUNT];
        for (role, color) in entries {
            slots[role.index()] = Some(color);
        }

        let mut colors = [Color::BLACK; PaletteRole::COUNT];
        for role in PaletteRole::ALL {
            colors[role.index()] = slots[role.index()].ok_or_else(|| ColorError::MissingRole {
                role: role.as_str().to_string(),
            })?;
        }
        Ok(Self { colors })
    }

    /// Build from the string map the palette editor hands over.
    ///
    /// Fails on the first unknown role, bad hex value, or missing role.
    pub fn from_hex_map<'a, I>(entries: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut parsed = Vec::with_capacity(PaletteRole::COUNT);
        for (key, value) in entries {
            let role = PaletteRole::parse(key).ok_or_else(|| ColorError::UnknownRole {
                role: key.to_string(),
            })?;
            parsed.push((role, Color::parse(value)?));
        }
        Self::from_roles(parsed)
    }

    pub fn get(&self, role: PaletteRole) -> Color {
        self.colors[role.index()]
    }

    pub fn set(&mut self, role: PaletteRole, color: Color) {
        self.colors[role.index()] = color;
    }

    pub fn with(mut self, role: PaletteRole, color: Color) -> Self {
        self.set(role, color);
        self
    }

    /// `(role, color)` in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (PaletteRole, Color)> + '_ {
        PaletteRole::ALL.iter().map(move |&role| (role, self.get(role)))
    }

    /// `{role-id: "#RRGGBB"}`.
    pub fn to_hex_map(&self) -> BTreeMap<String, String> {
        self.iter()
            .map(|(role, color)| (role.as_str().to_string(), color.to_hex()))
            .collect()
    }
}

impl TryFrom<BTreeMap<String, String>> for ColorPalette {
    type Error = ColorError;

    fn try_from(map: BTreeMap<String, String>) -> Result<Self, Self::Error> {
        Self::from_hex_map(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}

impl From<ColorPalette> for BTreeMap<String, String> {
    fn from(palette: ColorPalette) -> Self {
        palette.to_hex_map()
    }
}

impl Serialize for ColorPalette {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(PaletteRole::COUNT))?;
        for (role, color) in self.iter() {
            map.serialize_entry(role.as_str(), &color)?;
        }
        map.end()
    }
}
