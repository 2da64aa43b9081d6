//! Terminal rendering for clubcal types.
//!
//! Extension trait that adds colored event cards using owo_colors.

use clubcal_core::Event;
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!(
            "{} {}",
            color_swatch(&self.color),
            self.title.bold()
        ));
        lines.push(format!("   {}", self.club.dimmed()));
        lines.push(format!("   {}", self.render_time_range()));
        lines.push(format!("   {}", self.description));
        lines.push(format!("   Venue: {}", self.venue));
        lines.push(format!("   {}", format!("id {}", self.id).dimmed()));

        lines.join("\n")
    }
}

/// A block in the event's display color, or a plain bullet when the color
/// doesn't parse.
fn color_swatch(color: &str) -> String {
    match parse_hex_color(color) {
        Some((r, g, b)) => "█".truecolor(r, g, b).to_string(),
        None => "•".to_string(),
    }
}

/// Parse "#rgb" or "#rrggbb" into an RGB triple.
fn parse_hex_color(s: &str) -> Option<(u8, u8, u8)> {
    let hex = s.strip_prefix('#')?;
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        3 => {
            let mut digits = hex.chars().map(|c| c.to_digit(16));
            let r = digits.next()?? as u8;
            let g = digits.next()?? as u8;
            let b = digits.next()?? as u8;
            Some((r * 17, g * 17, b * 17))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some((r, g, b))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_six_digit_hex() {
        assert_eq!(parse_hex_color("#1e90ff"), Some((0x1e, 0x90, 0xff)));
        assert_eq!(parse_hex_color("#000000"), Some((0, 0, 0)));
    }

    #[test]
    fn parses_three_digit_hex() {
        assert_eq!(parse_hex_color("#fff"), Some((255, 255, 255)));
        assert_eq!(parse_hex_color("#f00"), Some((255, 0, 0)));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert_eq!(parse_hex_color("1e90ff"), None);
        assert_eq!(parse_hex_color("#12345"), None);
        assert_eq!(parse_hex_color("#gggggg"), None);
        assert_eq!(parse_hex_color("blue"), None);
        assert_eq!(parse_hex_color(""), None);
    }
}
