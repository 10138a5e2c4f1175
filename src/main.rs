//! APU Borders preview binary
//!
//! Run with: cargo run -- [styles...] [options]
//!
//! Options:
//!   --fg <color>   Foreground color for the border (name or 0-15)
//!   --bg <color>   Background color for the border (name or 0-15)
//!   --bold, --dim, --italic, --underline, --blink, --reverse
//!                  Text attributes for the border glyphs
//!   --plain        No decoration at all
//!   --json         Print resolved bundles as JSON
//!   --list         Print style names and exit

use std::env;
use std::process;

use log::{debug, info};
use serde::Serialize;

use apu_borders::{Attrs, BorderStyle, Color, DecoratedGlyph, Decoration, GlyphBundle};

/// Width of one preview cell
const CELL_WIDTH: usize = 3;

/// What the command line asked for
#[derive(Debug, PartialEq)]
enum Action {
    Preview(Options),
    List,
    Help,
}

/// Preview options
#[derive(Debug, Default, PartialEq)]
struct Options {
    styles: Vec<BorderStyle>,
    fg: Option<Color>,
    bg: Option<Color>,
    attrs: Attrs,
    plain: bool,
    json: bool,
}

impl Options {
    /// Styles to preview and the decoration to resolve them with.
    ///
    /// Any explicit color or attribute pins a custom decoration onto every
    /// selected style.
    fn selection(&self) -> (Vec<BorderStyle>, Decoration) {
        let mut styles = if self.styles.is_empty() {
            BorderStyle::ALL.to_vec()
        } else {
            self.styles.clone()
        };

        let decoration = if self.plain {
            Decoration::none()
        } else {
            Decoration::default()
        };

        let custom = Decoration::sgr(self.fg, self.bg, self.attrs);
        if !custom.is_empty() {
            debug!("wrapping styles with custom decoration {:?}", custom.prefix());
            styles = styles
                .into_iter()
                .map(|style| BorderStyle::custom(style, custom.clone()))
                .collect();
        }

        (styles, decoration)
    }
}

/// JSON entry for one style
#[derive(Serialize)]
struct BundleEntry<'a> {
    style: &'a BorderStyle,
    bundle: Option<GlyphBundle>,
}

/// Parse a color name, or an ANSI palette index 0-15
fn parse_color(s: &str) -> Option<Color> {
    match s.trim().parse::<u8>() {
        Ok(v) if v < 16 => Some(Color::from(v)),
        Ok(_) => None,
        Err(_) => Color::from_name(s),
    }
}

/// Parse command line arguments (program name excluded)
fn parse_args(args: &[String]) -> Result<Action, String> {
    let mut opts = Options::default();

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            flag @ ("--fg" | "--bg") => {
                let name = args.get(i + 1).ok_or_else(|| format!("{} requires a color", flag))?;
                let color = parse_color(name).ok_or_else(|| format!("unknown color '{}'", name))?;
                if flag == "--fg" {
                    opts.fg = Some(color);
                } else {
                    opts.bg = Some(color);
                }
                i += 2;
                continue;
            }
            "--bold" => opts.attrs = opts.attrs.bold(),
            "--dim" => opts.attrs = opts.attrs.dim(),
            "--italic" => opts.attrs = opts.attrs.italic(),
            "--underline" => opts.attrs = opts.attrs.underline(),
            "--blink" => opts.attrs = opts.attrs.blink(),
            "--reverse" => opts.attrs = opts.attrs.reverse(),
            "--plain" => opts.plain = true,
            "--json" => opts.json = true,
            "--list" => return Ok(Action::List),
            "--help" | "-h" => return Ok(Action::Help),
            arg => {
                let style = BorderStyle::from_name(arg)
                    .ok_or_else(|| format!("unknown border style '{}' (see --list)", arg))?;
                opts.styles.push(style);
            }
        }
        i += 1;
    }

    Ok(Action::Preview(opts))
}

fn print_help() {
    println!("APU Borders v0.1.0");
    println!();
    println!("Usage: apu-borders [styles...] [options]");
    println!();
    println!("Options:");
    println!("  --fg <color>   Foreground color (e.g. bright_cyan, or 0-15)");
    println!("  --bg <color>   Background color");
    println!("  --bold         Bold border glyphs");
    println!("  --dim          Dim border glyphs");
    println!("  --italic       Italic border glyphs");
    println!("  --underline    Underlined border glyphs");
    println!("  --blink        Blinking border glyphs");
    println!("  --reverse      Reverse-video border glyphs");
    println!("  --plain        No decoration");
    println!("  --json         Print resolved bundles as JSON");
    println!("  --list         List style names");
    println!("  --help, -h     Show this help");
}

/// Resolved bundles as pretty-printed JSON
fn render_json(
    styles: &[BorderStyle],
    decoration: &Decoration,
) -> Result<String, serde_json::Error> {
    let entries: Vec<BundleEntry> = styles
        .iter()
        .map(|style| BundleEntry {
            style,
            bundle: style.resolve(decoration),
        })
        .collect();
    serde_json::to_string_pretty(&entries)
}

/// Named previews for every style
fn render_previews(styles: &[BorderStyle], decoration: &Decoration) -> String {
    let mut output = String::new();
    for style in styles {
        output.push_str(&display_name(style));
        output.push('\n');
        match style.resolve(decoration) {
            Some(bundle) => output.push_str(&preview(&bundle)),
            None => output.push_str("  (no border)\n"),
        }
        output.push('\n');
    }
    output
}

/// Name of the innermost style of a custom chain
fn display_name(style: &BorderStyle) -> String {
    match style {
        BorderStyle::Custom { base, .. } => format!("{} (custom)", display_name(base)),
        other => other.name().to_string(),
    }
}

/// One preview row: left, fill, middle, fill, right
fn preview_row(
    left: &DecoratedGlyph,
    fill: &str,
    middle: &DecoratedGlyph,
    right: &DecoratedGlyph,
) -> String {
    format!("  {}{}{}{}{}\n", left, fill, middle, fill, right)
}

/// Draw a two-by-two grid with every glyph of the bundle
fn preview(b: &GlyphBundle) -> String {
    let fill = |g: &DecoratedGlyph| g.to_string().repeat(CELL_WIDTH);
    let blank = " ".repeat(CELL_WIDTH);

    let top = preview_row(&b.top.left, &fill(&b.horizontal.top), &b.top.middle, &b.top.right);
    let content = preview_row(&b.vertical.left, &blank, &b.vertical.middle, &b.vertical.right);
    let divider = preview_row(
        &b.middle.left,
        &fill(&b.horizontal.middle),
        &b.middle.middle,
        &b.middle.right,
    );
    let bottom = preview_row(
        &b.bottom.left,
        &fill(&b.horizontal.bottom),
        &b.bottom.middle,
        &b.bottom.right,
    );

    [top, content.clone(), divider, content, bottom].concat()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = env::args().skip(1).collect();

    let opts = match parse_args(&args) {
        Ok(Action::Preview(opts)) => opts,
        Ok(Action::List) => {
            for style in BorderStyle::ALL {
                println!("{}", style.name());
            }
            return Ok(());
        }
        Ok(Action::Help) => {
            print_help();
            return Ok(());
        }
        Err(message) => {
            eprintln!("Error: {}", message);
            process::exit(2);
        }
    };

    let (styles, decoration) = opts.selection();
    info!("previewing {} border style(s)", styles.len());

    if opts.json {
        println!("{}", render_json(&styles, &decoration)?);
    } else {
        print!("{}", render_previews(&styles, &decoration));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn options(list: &[&str]) -> Options {
        match parse_args(&args(list)) {
            Ok(Action::Preview(opts)) => opts,
            other => panic!("expected preview options, got {:?}", other),
        }
    }

    #[test]
    fn test_preview_plain_single() {
        let bundle = BorderStyle::Single.resolve(&Decoration::none()).unwrap();
        let expected = concat!(
            "  ┌───┬───┐\n",
            "  │   │   │\n",
            "  ├───┼───┤\n",
            "  │   │   │\n",
            "  └───┴───┘\n",
        );
        assert_eq!(preview(&bundle), expected);
    }

    #[test]
    fn test_display_name_nested_custom() {
        let inner = BorderStyle::custom(BorderStyle::HalfBlock, Decoration::none());
        let style = BorderStyle::custom(inner, Decoration::fg(Color::Red));
        assert_eq!(display_name(&style), "half_block (custom) (custom)");
    }

    #[test]
    fn test_default_selection() {
        let (styles, decoration) = options(&[]).selection();
        assert_eq!(styles, BorderStyle::ALL.to_vec());
        assert_eq!(decoration, Decoration::default());

        let (_, decoration) = options(&["--plain"]).selection();
        assert!(decoration.is_empty());
    }

    #[test]
    fn test_fg_wraps_styles_in_custom() {
        let (styles, decoration) = options(&["single", "--fg", "red"]).selection();
        assert_eq!(styles.len(), 1);
        assert!(matches!(styles[0], BorderStyle::Custom { .. }));

        let bundle = styles[0].resolve(&decoration).unwrap();
        assert_eq!(bundle.top.left.text, "\x1b[31m┌\x1b[0m");
        for g in bundle.iter() {
            assert!(g.text.starts_with("\x1b[31m"));
        }
    }

    #[test]
    fn test_attribute_flags() {
        let opts = options(&["ascii", "--dim", "--underline", "--bg", "4"]);
        assert_eq!(opts.attrs, Attrs::new().dim().underline());
        assert_eq!(opts.bg, Some(Color::Blue));

        let (styles, decoration) = opts.selection();
        let bundle = styles[0].resolve(&decoration).unwrap();
        assert_eq!(bundle.vertical.left.text, "\x1b[2;4;44m|\x1b[0m");

        let opts = options(&["--bold", "--italic", "--blink", "--reverse"]);
        assert_eq!(opts.attrs.sgr_codes(), vec![1, 3, 5, 7]);
    }

    #[test]
    fn test_parse_color_numeric_and_named() {
        assert_eq!(parse_color("12"), Some(Color::BrightBlue));
        assert_eq!(parse_color("0"), Some(Color::Black));
        assert_eq!(parse_color("16"), None);
        assert_eq!(parse_color("bright_cyan"), Some(Color::BrightCyan));
        assert_eq!(parse_color("mauve"), None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["rounded"])).is_err());
        assert!(parse_args(&args(&["--fg"])).is_err());
        assert!(parse_args(&args(&["--fg", "99"])).is_err());
        assert_eq!(parse_args(&args(&["single", "--list"])), Ok(Action::List));
        assert_eq!(parse_args(&args(&["-h"])), Ok(Action::Help));
    }

    #[test]
    fn test_json_output_includes_custom() {
        let (styles, decoration) = options(&["double", "none", "--fg", "green"]).selection();
        let json = render_json(&styles, &decoration).unwrap();
        assert!(json.contains("\"custom\""));

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["style"]["custom"]["base"], "double");
        assert_eq!(value[0]["bundle"]["top"]["left"]["glyph"], "╔");
        assert_eq!(value[0]["bundle"]["top"]["left"]["text"], "\u{1b}[32m╔\u{1b}[0m");
        assert!(value[1]["bundle"].is_null());
    }

    #[test]
    fn test_render_previews_borderless() {
        let output = render_previews(&[BorderStyle::None], &Decoration::none());
        assert_eq!(output, "none\n  (no border)\n\n");
    }
}
