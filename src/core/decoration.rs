//! APU Decoration - attribute wrapper for border glyphs
//!
//! A decoration is an opaque prefix (normally an SGR escape sequence) that
//! is written before a glyph. Non-empty decorations are closed with
//! [`RESET`]; the empty decoration leaves glyphs untouched.

use std::fmt;
use std::ops::Add;

use serde::{Deserialize, Serialize};

use super::color::{Attrs, Color};

/// ANSI control sequence introducer
const CSI: &str = "\x1b[";

/// SGR reset, appended after every decorated glyph
pub const RESET: &str = "\x1b[0m";

/// A terminal attribute applied to border glyphs
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Decoration {
    prefix: String,
}

impl Decoration {
    /// The neutral decoration: no prefix, no reset
    pub const fn none() -> Self {
        Self { prefix: String::new() }
    }

    /// Wrap an arbitrary prefix supplied by the caller
    pub fn raw(prefix: impl Into<String>) -> Self {
        Self { prefix: prefix.into() }
    }

    /// Foreground color only
    pub fn fg(color: Color) -> Self {
        Self::sgr(Some(color), None, Attrs::default())
    }

    /// Build a single SGR sequence: attributes first, then fg, then bg
    pub fn sgr(fg: Option<Color>, bg: Option<Color>, attrs: Attrs) -> Self {
        let mut codes = attrs.sgr_codes();
        if let Some(fg) = fg {
            codes.push(fg.fg_code());
        }
        if let Some(bg) = bg {
            codes.push(bg.bg_code());
        }

        if codes.is_empty() {
            return Self::none();
        }

        let code_strs: Vec<String> = codes.iter().map(|c| c.to_string()).collect();
        Self::raw(format!("{}{}m", CSI, code_strs.join(";")))
    }

    /// Compose two decorations; `other` is emitted after `self`
    pub fn then(mut self, other: &Decoration) -> Self {
        self.prefix.push_str(&other.prefix);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Suffix written after a glyph: [`RESET`] unless the decoration is empty
    pub fn reset_suffix(&self) -> &'static str {
        if self.is_empty() { "" } else { RESET }
    }

    /// Apply this decoration to a single character
    pub fn decorate(&self, glyph: char) -> DecoratedGlyph {
        let suffix = self.reset_suffix();
        let mut text = String::with_capacity(self.prefix.len() + glyph.len_utf8() + suffix.len());
        text.push_str(&self.prefix);
        text.push(glyph);
        text.push_str(suffix);
        DecoratedGlyph { glyph, text }
    }
}

impl Default for Decoration {
    /// Light gray foreground
    fn default() -> Self {
        Self::fg(Color::White)
    }
}

impl Add for Decoration {
    type Output = Decoration;

    fn add(self, rhs: Decoration) -> Decoration {
        self.then(&rhs)
    }
}

/// A glyph rendered with its decoration
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DecoratedGlyph {
    /// The undecorated character
    pub glyph: char,
    /// Prefix + glyph + reset, ready to write to a terminal
    pub text: String,
}

impl DecoratedGlyph {
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for DecoratedGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
