//! APU Border Core
//!
//! - Color: ANSI palette and text attributes
//! - Decoration: attribute wrapper applied to glyphs
//! - Glyphs: raw glyph tables and decorated bundles
//! - Style: the border style selector and its resolution

pub mod color;
pub mod decoration;
pub mod glyphs;
pub mod style;

pub use color::{Attrs, Color};
pub use decoration::{DecoratedGlyph, Decoration, RESET};
pub use glyphs::{tables, GlyphBundle, GlyphTable, HorizontalTriple, LineTriple};
pub use style::BorderStyle;
