//! APU Border Styles
//!
//! [`BorderStyle`] selects a glyph table. Resolving a style with a
//! [`Decoration`] produces a [`GlyphBundle`], or `None` for borderless
//! rendering.
//!
//! `Custom` wraps another style with its own decoration. Chains are unwound
//! until a style with a table (or `None`) is reached; each wrapper's
//! decoration replaces the one passed in, so the wrapper closest to the
//! table wins. A chain that contains itself cannot be built from owned
//! boxes, so unwinding always terminates.

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use super::decoration::Decoration;
use super::glyphs::{tables, GlyphBundle, GlyphTable};

/// Border style for frames and grid dividers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderStyle {
    Single,
    Double,
    DoubleHeavyEdge,
    DoubleLightEdge,
    Block100,
    Block75,
    Block50,
    HalfBlock,
    Ascii,
    AsciiAlt,
    AsciiSlanted,
    /// Another style drawn with a caller-chosen decoration
    Custom {
        base: Box<BorderStyle>,
        decoration: Decoration,
    },
    None,
}

impl BorderStyle {
    /// Every enumerable style: the built-ins followed by `None`
    pub const ALL: [BorderStyle; 12] = [
        BorderStyle::Single,
        BorderStyle::Double,
        BorderStyle::DoubleHeavyEdge,
        BorderStyle::DoubleLightEdge,
        BorderStyle::Block100,
        BorderStyle::Block75,
        BorderStyle::Block50,
        BorderStyle::HalfBlock,
        BorderStyle::Ascii,
        BorderStyle::AsciiAlt,
        BorderStyle::AsciiSlanted,
        BorderStyle::None,
    ];

    /// Wrap `base` so it always resolves with `decoration`
    pub fn custom(base: BorderStyle, decoration: Decoration) -> Self {
        BorderStyle::Custom {
            base: Box::new(base),
            decoration,
        }
    }

    /// Stable snake_case name, matching the serde representation
    pub fn name(&self) -> &'static str {
        match self {
            BorderStyle::Single => "single",
            BorderStyle::Double => "double",
            BorderStyle::DoubleHeavyEdge => "double_heavy_edge",
            BorderStyle::DoubleLightEdge => "double_light_edge",
            BorderStyle::Block100 => "block100",
            BorderStyle::Block75 => "block75",
            BorderStyle::Block50 => "block50",
            BorderStyle::HalfBlock => "half_block",
            BorderStyle::Ascii => "ascii",
            BorderStyle::AsciiAlt => "ascii_alt",
            BorderStyle::AsciiSlanted => "ascii_slanted",
            BorderStyle::Custom { .. } => "custom",
            BorderStyle::None => "none",
        }
    }

    /// Look up an enumerable style by name.
    ///
    /// Case-insensitive; `-` and `_` separators are optional, so
    /// "double-heavy-edge", "double_heavy_edge" and "doubleHeavyEdge" all
    /// match. `custom` is parametric and never matches.
    pub fn from_name(s: &str) -> Option<Self> {
        let wanted: String = s
            .trim()
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .flat_map(char::to_lowercase)
            .collect();

        Self::ALL
            .into_iter()
            .find(|style| style.name().replace('_', "") == wanted)
    }

    /// Check if this style draws a border
    pub fn has_border(&self) -> bool {
        match self {
            BorderStyle::None => false,
            BorderStyle::Custom { base, .. } => base.has_border(),
            _ => true,
        }
    }

    /// Raw glyph table for a built-in style
    pub fn table(&self) -> Option<&'static GlyphTable> {
        match self {
            BorderStyle::Single => Some(&tables::SINGLE),
            BorderStyle::Double => Some(&tables::DOUBLE),
            BorderStyle::DoubleHeavyEdge => Some(&tables::DOUBLE_HEAVY_EDGE),
            BorderStyle::DoubleLightEdge => Some(&tables::DOUBLE_LIGHT_EDGE),
            BorderStyle::Block100 => Some(&tables::BLOCK_100),
            BorderStyle::Block75 => Some(&tables::BLOCK_75),
            BorderStyle::Block50 => Some(&tables::BLOCK_50),
            BorderStyle::HalfBlock => Some(&tables::HALF_BLOCK),
            BorderStyle::Ascii => Some(&tables::ASCII),
            BorderStyle::AsciiAlt => Some(&tables::ASCII_ALT),
            BorderStyle::AsciiSlanted => Some(&tables::ASCII_SLANTED),
            BorderStyle::Custom { .. } | BorderStyle::None => None,
        }
    }

    /// Resolve to a decorated glyph bundle, or `None` for no border
    pub fn resolve(&self, decoration: &Decoration) -> Option<GlyphBundle> {
        let mut style = self;
        let mut decoration = decoration;

        while let BorderStyle::Custom { base, decoration: inner } = style {
            trace!("unwrapping custom border over '{}'", base.name());
            style = &**base;
            decoration = inner;
        }

        if *style == BorderStyle::None {
            return None;
        }

        match style.table() {
            Some(table) => Some(table.decorate(decoration)),
            None => {
                debug!("border style '{}' has no glyph table", style.name());
                None
            }
        }
    }

    /// Resolve with the default light-gray decoration
    pub fn resolve_default(&self) -> Option<GlyphBundle> {
        self.resolve(&Decoration::default())
    }
}

impl Default for BorderStyle {
    fn default() -> Self {
        BorderStyle::Single
    }
}
