//! Terminal styling and color utilities.
//!
//! ANSI escape codes and color detection for the text renderers. Every
//! renderer takes a [`ColorPalette`], so disabling color swaps the codes for
//! empty strings without touching the layout.

use std::env;
use std::ffi::OsStr;

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";

    /// Bold reverse green for the origin tag.
    pub const TAG_ORIGIN: &str = "\x1b[1;7;32m";
    /// Bold reverse cyan for stopover tags.
    pub const TAG_STOP: &str = "\x1b[1;7;36m";
    /// Bold reverse magenta for the destination tag.
    pub const TAG_DESTINATION: &str = "\x1b[1;7;35m";

    /// Bright bold white for city names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for secondary elements.
    pub const GRAY: &str = "\x1b[90m";
    /// Green for costs.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for failures.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub tag_origin: &'static str,
    pub tag_stop: &'static str,
    pub tag_destination: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            tag_origin: colors::TAG_ORIGIN,
            tag_stop: colors::TAG_STOP,
            tag_destination: colors::TAG_DESTINATION,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            tag_origin: "",
            tag_stop: "",
            tag_destination: "",
            white_bold: "",
            gray: "",
            green: "",
            red: "",
        }
    }

    /// Create a palette from the `NO_COLOR` and `TERM` environment variables.
    #[must_use]
    pub fn detect() -> Self {
        let no_color = env::var_os("NO_COLOR");
        let term = env::var_os("TERM");
        Self::for_terminal(no_color.as_deref(), term.as_deref())
    }

    /// Palette for the given `NO_COLOR` and `TERM` values.
    ///
    /// Any `NO_COLOR` value disables color (<https://no-color.org/>), as does
    /// `TERM=dumb`.
    #[must_use]
    pub fn for_terminal(no_color: Option<&OsStr>, term: Option<&OsStr>) -> Self {
        let dumb = term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"));
        if no_color.is_some() || dumb {
            Self::plain()
        } else {
            Self::colored()
        }
    }

    /// Palette for the `--no-color` flag: plain when disabled, detected otherwise.
    #[must_use]
    pub fn resolve(no_color: bool) -> Self {
        if no_color {
            Self::plain()
        } else {
            Self::detect()
        }
    }

    /// Tag color for a route step given its marker.
    #[must_use]
    pub fn tag_for(&self, marker: char) -> &'static str {
        match marker {
            '+' => self.tag_origin,
            '-' => self.tag_destination,
            _ => self.tag_stop,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Group the digits of `n` in threes with commas.
///
/// ```
/// # use flightroute_cli::terminal::group_digits;
/// assert_eq!(group_digits(950), "950");
/// assert_eq!(group_digits(1234567), "1,234,567");
/// ```
#[must_use]
pub fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let lead = digits.len() % 3;
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (position, digit) in digits.chars().enumerate() {
        if position > 0 && (position + 3 - lead) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a cost in dollars, e.g. `$1,250`.
#[must_use]
pub fn format_cost(cost: u64) -> String {
    format!("${}", group_digits(cost))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_group_in_threes() {
        assert_eq!(group_digits(0), "0");
        assert_eq!(group_digits(999), "999");
        assert_eq!(group_digits(1_000), "1,000");
        assert_eq!(group_digits(123_456), "123,456");
        assert_eq!(group_digits(u64::MAX), "18,446,744,073,709,551,615");
    }

    #[test]
    fn costs_carry_a_dollar_sign() {
        assert_eq!(format_cost(950), "$950");
        assert_eq!(format_cost(1250), "$1,250");
    }

    #[test]
    fn plain_palette_is_empty() {
        let p = ColorPalette::plain();
        assert!([p.reset, p.tag_origin, p.tag_stop, p.green, p.red]
            .iter()
            .all(|code| code.is_empty()));
        assert!(!ColorPalette::colored().reset.is_empty());
    }

    #[test]
    fn no_color_flag_forces_plain() {
        assert_eq!(ColorPalette::resolve(true), ColorPalette::plain());
    }

    #[test]
    fn terminal_settings_pick_palette() {
        let xterm = Some(OsStr::new("xterm-256color"));
        assert_eq!(ColorPalette::for_terminal(None, xterm), ColorPalette::colored());
        assert_eq!(ColorPalette::for_terminal(None, None), ColorPalette::colored());
        assert_eq!(
            ColorPalette::for_terminal(Some(OsStr::new("1")), xterm),
            ColorPalette::plain()
        );
        assert_eq!(
            ColorPalette::for_terminal(Some(OsStr::new("")), xterm),
            ColorPalette::plain()
        );
        assert_eq!(
            ColorPalette::for_terminal(None, Some(OsStr::new("DUMB"))),
            ColorPalette::plain()
        );
    }

    #[test]
    fn markers_map_to_tags() {
        let p = ColorPalette::colored();
        assert_eq!(p.tag_for('+'), colors::TAG_ORIGIN);
        assert_eq!(p.tag_for('|'), colors::TAG_STOP);
        assert_eq!(p.tag_for('-'), colors::TAG_DESTINATION);
    }
}
