//! APU Glyphs - border character tables and resolved bundles
//!
//! A [`GlyphTable`] holds the raw characters of one border style. Applying a
//! [`Decoration`] to it yields a [`GlyphBundle`], which a renderer reads to
//! draw frame corners, edges, and interior dividers.

use serde::Serialize;

use super::decoration::{DecoratedGlyph, Decoration};

/// Raw characters for one border style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlyphTable {
    pub top: [char; 3],        // Top-left corner, top tee, top-right corner
    pub middle: [char; 3],     // Left tee, cross, right tee
    pub bottom: [char; 3],     // Bottom-left corner, bottom tee, bottom-right corner
    pub horizontal: [char; 3], // Fill for top edge, row dividers, bottom edge
    pub vertical: [char; 3],   // Left edge, column dividers, right edge
}

impl GlyphTable {
    /// Decorate all 15 characters with the same decoration
    pub fn decorate(&self, decoration: &Decoration) -> GlyphBundle {
        GlyphBundle {
            top: LineTriple::decorated(self.top, decoration),
            middle: LineTriple::decorated(self.middle, decoration),
            bottom: LineTriple::decorated(self.bottom, decoration),
            horizontal: HorizontalTriple::decorated(self.horizontal, decoration),
            vertical: LineTriple::decorated(self.vertical, decoration),
        }
    }
}

/// Predefined glyph tables
pub mod tables {
    use super::GlyphTable;

    pub const SINGLE: GlyphTable = GlyphTable {
        top: ['┌', '┬', '┐'],
        middle: ['├', '┼', '┤'],
        bottom: ['└', '┴', '┘'],
        horizontal: ['─', '─', '─'],
        vertical: ['│', '│', '│'],
    };

    pub const DOUBLE: GlyphTable = GlyphTable {
        top: ['╔', '╦', '╗'],
        middle: ['╠', '╬', '╣'],
        bottom: ['╚', '╩', '╝'],
        horizontal: ['═', '═', '═'],
        vertical: ['║', '║', '║'],
    };

    /// Double horizontals, single verticals
    pub const DOUBLE_LIGHT_EDGE: GlyphTable = GlyphTable {
        top: ['╒', '╤', '╕'],
        middle: ['╞', '╪', '╡'],
        bottom: ['╘', '╧', '╛'],
        horizontal: ['═', '═', '═'],
        vertical: ['│', '│', '│'],
    };

    /// Single horizontals, double verticals
    pub const DOUBLE_HEAVY_EDGE: GlyphTable = GlyphTable {
        top: ['╓', '╥', '╖'],
        middle: ['╟', '╫', '╢'],
        bottom: ['╙', '╨', '╜'],
        horizontal: ['─', '─', '─'],
        vertical: ['║', '║', '║'],
    };

    pub const BLOCK_100: GlyphTable = GlyphTable {
        top: ['█', '█', '█'],
        middle: ['█', '┼', '█'],
        bottom: ['█', '█', '█'],
        horizontal: ['█', '─', '█'],
        vertical: ['█', '│', '█'],
    };

    pub const BLOCK_75: GlyphTable = GlyphTable {
        top: ['▓', '▓', '▓'],
        middle: ['▓', '┼', '▓'],
        bottom: ['▓', '▓', '▓'],
        horizontal: ['▓', '─', '▓'],
        vertical: ['▓', '│', '▓'],
    };

    pub const BLOCK_50: GlyphTable = GlyphTable {
        top: ['░', '░', '░'],
        middle: ['░', '┼', '░'],
        bottom: ['░', '░', '░'],
        horizontal: ['░', '─', '░'],
        vertical: ['░', '│', '░'],
    };

    pub const HALF_BLOCK: GlyphTable = GlyphTable {
        top: ['▛', '▀', '▜'],
        middle: ['▌', '┼', '▐'],
        bottom: ['▙', '▃', '▟'],
        horizontal: ['▀', '─', '▃'],
        vertical: ['▌', '│', '▐'],
    };

    pub const ASCII: GlyphTable = GlyphTable {
        top: ['+', '+', '+'],
        middle: ['+', '+', '+'],
        bottom: ['+', '+', '+'],
        horizontal: ['-', '-', '-'],
        vertical: ['|', '|', '|'],
    };

    pub const ASCII_ALT: GlyphTable = GlyphTable {
        top: ['-', '-', '-'],
        middle: ['|', '+', '|'],
        bottom: ['-', '-', '-'],
        horizontal: ['-', '-', '-'],
        vertical: ['|', '|', '|'],
    };

    pub const ASCII_SLANTED: GlyphTable = GlyphTable {
        top: ['/', '-', '\\'],
        middle: ['|', '+', '|'],
        bottom: ['\\', '-', '/'],
        horizontal: ['-', '-', '-'],
        vertical: ['|', '|', '|'],
    };
}

/// Left / middle / right glyphs of a row, or of the vertical sides
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct LineTriple {
    pub left: DecoratedGlyph,
    pub middle: DecoratedGlyph,
    pub right: DecoratedGlyph,
}

impl LineTriple {
    fn decorated([left, middle, right]: [char; 3], decoration: &Decoration) -> Self {
        Self {
            left: decoration.decorate(left),
            middle: decoration.decorate(middle),
            right: decoration.decorate(right),
        }
    }

    /// Undecorated characters, left to right
    pub fn chars(&self) -> [char; 3] {
        [self.left.glyph, self.middle.glyph, self.right.glyph]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecoratedGlyph> {
        [&self.left, &self.middle, &self.right].into_iter()
    }
}

/// Horizontal fill glyphs for the top edge, row dividers, and bottom edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct HorizontalTriple {
    pub top: DecoratedGlyph,
    pub middle: DecoratedGlyph,
    pub bottom: DecoratedGlyph,
}

impl HorizontalTriple {
    fn decorated([top, middle, bottom]: [char; 3], decoration: &Decoration) -> Self {
        Self {
            top: decoration.decorate(top),
            middle: decoration.decorate(middle),
            bottom: decoration.decorate(bottom),
        }
    }

    /// Undecorated characters, top to bottom
    pub fn chars(&self) -> [char; 3] {
        [self.top.glyph, self.middle.glyph, self.bottom.glyph]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DecoratedGlyph> {
        [&self.top, &self.middle, &self.bottom].into_iter()
    }
}

/// A fully resolved, decorated border style
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GlyphBundle {
    pub top: LineTriple,
    pub middle: LineTriple,
    pub bottom: LineTriple,
    pub horizontal: HorizontalTriple,
    pub vertical: LineTriple,
}

impl GlyphBundle {
    /// The 15 undecorated characters in table order:
    /// top, middle, bottom, horizontal, vertical
    pub fn glyphs(&self) -> [char; 15] {
        let mut out = [' '; 15];
        let rows = [
            self.top.chars(),
            self.middle.chars(),
            self.bottom.chars(),
            self.horizontal.chars(),
            self.vertical.chars(),
        ];
        for (i, row) in rows.iter().enumerate() {
            out[i * 3..i * 3 + 3].copy_from_slice(row);
        }
        out
    }

    /// Iterate over all 15 decorated glyphs in table order
    pub fn iter(&self) -> impl Iterator<Item = &DecoratedGlyph> {
        self.top
            .iter()
            .chain(self.middle.iter())
            .chain(self.bottom.iter())
            .chain(self.horizontal.iter())
            .chain(self.vertical.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::color::Color;

    #[test]
    fn test_decorate_table_plain() {
        let bundle = tables::SINGLE.decorate(&Decoration::none());
        assert_eq!(bundle.top.left.text, "┌");
        assert_eq!(bundle.middle.middle.text, "┼");
        assert_eq!(bundle.bottom.right.text, "┘");
        assert_eq!(bundle.horizontal.chars(), ['─', '─', '─']);
    }

    #[test]
    fn test_every_glyph_shares_decoration() {
        let decoration = Decoration::fg(Color::Cyan);
        let bundle = tables::HALF_BLOCK.decorate(&decoration);
        assert_eq!(bundle.iter().count(), 15);
        for g in bundle.iter() {
            assert_eq!(g.text, format!("\x1b[36m{}\x1b[0m", g.glyph));
        }
    }

    #[test]
    fn test_iter_matches_glyphs() {
        let bundle = tables::DOUBLE_LIGHT_EDGE.decorate(&Decoration::none());
        let from_iter: Vec<char> = bundle.iter().map(|g| g.glyph).collect();
        assert_eq!(from_iter, bundle.glyphs().to_vec());
    }

    #[test]
    fn test_glyphs_table_order() {
        let bundle = tables::ASCII_SLANTED.decorate(&Decoration::default());
        let expected: Vec<char> = "/-\\|+|\\-/---|||".chars().collect();
        assert_eq!(bundle.glyphs().to_vec(), expected);
    }
}
