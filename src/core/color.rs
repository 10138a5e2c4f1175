//! APU Color - terminal attribute primitives
//!
//! The 16-color ANSI palette and text attributes that feed a
//! [`Decoration`](super::decoration::Decoration).

use serde::{Deserialize, Serialize};

/// Standard ANSI 16-color palette
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    /// Light gray on most terminals
    #[default]
    White = 7,
    BrightBlack = 8,   // Dark gray
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl From<u8> for Color {
    fn from(v: u8) -> Self {
        match v {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            8 => Color::BrightBlack,
            9 => Color::BrightRed,
            10 => Color::BrightGreen,
            11 => Color::BrightYellow,
            12 => Color::BrightBlue,
            13 => Color::BrightMagenta,
            14 => Color::BrightCyan,
            15 => Color::BrightWhite,
            _ => Color::White,
        }
    }
}

impl Color {
    /// Look up a color by its snake_case name ("bright_red", "gray", ...)
    pub fn from_name(s: &str) -> Option<Self> {
        let name = s.trim().to_lowercase().replace('-', "_");
        let color = match name.as_str() {
            "black" => Color::Black,
            "red" => Color::Red,
            "green" => Color::Green,
            "yellow" => Color::Yellow,
            "blue" => Color::Blue,
            "magenta" => Color::Magenta,
            "cyan" => Color::Cyan,
            "white" | "light_gray" | "light_grey" => Color::White,
            "bright_black" | "gray" | "grey" => Color::BrightBlack,
            "bright_red" => Color::BrightRed,
            "bright_green" => Color::BrightGreen,
            "bright_yellow" => Color::BrightYellow,
            "bright_blue" => Color::BrightBlue,
            "bright_magenta" => Color::BrightMagenta,
            "bright_cyan" => Color::BrightCyan,
            "bright_white" => Color::BrightWhite,
            _ => return None,
        };
        Some(color)
    }

    /// Get ANSI SGR code for foreground
    pub fn fg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 30 + v } else { 90 + (v - 8) }
    }

    /// Get ANSI SGR code for background
    pub fn bg_code(&self) -> u8 {
        let v = *self as u8;
        if v < 8 { 40 + v } else { 100 + (v - 8) }
    }
}

/// Text attributes (bold, blink, etc.)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Attrs {
    pub bold: bool,
    pub dim: bool,
    pub italic: bool,
    pub underline: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl Attrs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn dim(mut self) -> Self {
        self.dim = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn blink(mut self) -> Self {
        self.blink = true;
        self
    }

    pub fn reverse(mut self) -> Self {
        self.reverse = true;
        self
    }

    /// Check if any attributes are set
    pub fn any(&self) -> bool {
        self.bold || self.dim || self.italic || self.underline || self.blink || self.reverse
    }

    /// ANSI SGR codes for these attributes, in ascending order
    pub fn sgr_codes(&self) -> Vec<u8> {
        let mut codes = Vec::new();
        if self.bold {
            codes.push(1);
        }
        if self.dim {
            codes.push(2);
        }
        if self.italic {
            codes.push(3);
        }
        if self.underline {
            codes.push(4);
        }
        if self.blink {
            codes.push(5);
        }
        if self.reverse {
            codes.push(7);
        }
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_codes() {
        assert_eq!(Color::Black.fg_code(), 30);
        assert_eq!(Color::White.fg_code(), 37);
        assert_eq!(Color::BrightRed.fg_code(), 91);
        assert_eq!(Color::Black.bg_code(), 40);
        assert_eq!(Color::BrightWhite.bg_code(), 107);
    }

    #[test]
    fn test_color_from_u8_out_of_range() {
        assert_eq!(Color::from(12), Color::BrightBlue);
        assert_eq!(Color::from(200), Color::White);
    }

    #[test]
    fn test_color_from_name() {
        assert_eq!(Color::from_name("Bright-Red"), Some(Color::BrightRed));
        assert_eq!(Color::from_name("grey"), Some(Color::BrightBlack));
        assert_eq!(Color::from_name("light_gray"), Some(Color::White));
        assert_eq!(Color::from_name("chartreuse"), None);
    }

    #[test]
    fn test_attrs_sgr_order() {
        let attrs = Attrs::new().reverse().bold().underline();
        assert!(attrs.any());
        assert_eq!(attrs.sgr_codes(), vec![1, 4, 7]);
        assert!(!Attrs::default().any());
    }
}
