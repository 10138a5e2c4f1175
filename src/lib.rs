//! APU Borders - box-drawing border styles for character-cell displays
//!
//! # Overview
//!
//! This crate provides:
//! - A closed catalog of border styles (line drawing, block shading, ASCII)
//! - Custom styles that pin a decoration onto any other style
//! - Resolution of a style and decoration into a bundle of 15 decorated glyphs
//!
//! Drawing the bundle at screen positions is left to the renderer.
//!
//! # Example
//!
//! ```
//! use apu_borders::{resolve, BorderStyle, Color, Decoration};
//!
//! let bundle = resolve(&BorderStyle::Single, &Decoration::none()).unwrap();
//! assert_eq!(bundle.top.left.text, "┌");
//!
//! let red = BorderStyle::custom(BorderStyle::Double, Decoration::fg(Color::Red));
//! let bundle = resolve(&red, &Decoration::default()).unwrap();
//! assert_eq!(bundle.top.left.text, "\x1b[31m╔\x1b[0m");
//!
//! assert!(resolve(&BorderStyle::None, &Decoration::default()).is_none());
//! ```

pub mod core;

// Re-export commonly used types
pub use core::{
    Attrs, BorderStyle, Color, DecoratedGlyph, Decoration, GlyphBundle, GlyphTable,
    HorizontalTriple, LineTriple, RESET,
};

/// Resolve `style` with `decoration`; `None` means draw no border
pub fn resolve(style: &BorderStyle, decoration: &Decoration) -> Option<GlyphBundle> {
    style.resolve(decoration)
}

/// Resolve `style` with the default light-gray decoration
pub fn resolve_default(style: &BorderStyle) -> Option<GlyphBundle> {
    style.resolve_default()
}
