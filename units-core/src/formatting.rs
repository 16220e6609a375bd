//! Formatting utilities for dimensioned values
//!
//! A value prints as its magnitude followed by the dimension's unit tokens,
//! e.g. `750000 m s^-1`. Precision, width and justification come either from
//! an explicit [`FormatConfig`] or from the standard format specifiers.

use std::fmt;

use units_math::Dim;

/// Formatting flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatFlags(u8);

impl FormatFlags {
    /// No flags set
    pub const NO_FLAGS: FormatFlags = FormatFlags(0x00);
    /// Pad on the left
    pub const RIGHT_JUSTIFY: FormatFlags = FormatFlags(0x01);
    /// Print the magnitude only
    pub const NO_UNITS: FormatFlags = FormatFlags(0x02);
    /// Split padding between both sides, extra on the right
    pub const CENTER: FormatFlags = FormatFlags(0x04);
    /// Always print the sign of the magnitude
    pub const SIGN_PLUS: FormatFlags = FormatFlags(0x08);

    /// Whether `flag` is set
    pub fn has_flag(self, flag: FormatFlags) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Set `flag`
    pub fn set_flag(&mut self, flag: FormatFlags) {
        self.0 |= flag.0;
    }

    /// Clear `flag`
    pub fn clear_flag(&mut self, flag: FormatFlags) {
        self.0 &= !flag.0;
    }
}

impl Default for FormatFlags {
    fn default() -> Self {
        Self::NO_FLAGS
    }
}

/// Format configuration for displaying dimensioned values
#[derive(Debug, Clone, Default)]
pub struct FormatConfig {
    /// Digits after the decimal point (None prints the shortest exact form)
    pub precision: Option<usize>,

    /// Minimum width for output
    pub min_width: Option<usize>,

    /// Maximum width for output (truncation)
    pub max_width: Option<usize>,

    /// Format flags
    pub flags: FormatFlags,

    /// Padding character (None pads with spaces)
    pub fill: Option<char>,
}

impl FormatConfig {
    /// Default configuration: shortest magnitude, no padding
    pub fn new() -> Self {
        Default::default()
    }

    /// Configuration matching the specifiers of a `{}` placeholder
    ///
    /// Honors precision, width, fill, `<`/`^`/`>` alignment and the `+` flag.
    pub fn from_formatter(f: &fmt::Formatter<'_>) -> Self {
        let mut config = Self { precision: f.precision(), min_width: f.width(), ..Default::default() };
        match f.align() {
            Some(fmt::Alignment::Right) => config.flags.set_flag(FormatFlags::RIGHT_JUSTIFY),
            Some(fmt::Alignment::Center) => config.flags.set_flag(FormatFlags::CENTER),
            Some(fmt::Alignment::Left) | None => {}
        }
        if f.sign_plus() {
            config.flags.set_flag(FormatFlags::SIGN_PLUS);
        }
        if f.fill() != ' ' {
            config.fill = Some(f.fill());
        }
        config
    }

    /// Fix the digits after the decimal point
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Set the minimum and optional maximum width
    pub fn with_width(mut self, min: usize, max: Option<usize>) -> Self {
        self.min_width = Some(min);
        self.max_width = max;
        self
    }

    /// Replace all flags
    pub fn with_flags(mut self, flags: FormatFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Pad on the left
    pub fn right_justify(mut self) -> Self {
        self.flags.set_flag(FormatFlags::RIGHT_JUSTIFY);
        self
    }

    /// Pad on both sides
    pub fn center(mut self) -> Self {
        self.flags.set_flag(FormatFlags::CENTER);
        self
    }

    /// Pad with `fill` instead of spaces
    pub fn with_fill(mut self, fill: char) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Omit the unit tokens
    pub fn without_units(mut self) -> Self {
        self.flags.set_flag(FormatFlags::NO_UNITS);
        self
    }
}

/// Unit tokens of a dimension without the leading separator
///
/// A dimensionless value has no tokens and renders as `dimensionless`.
pub fn format_dim(dim: &Dim) -> String {
    if dim.is_dimensionless() {
        "dimensionless".to_string()
    } else {
        dim.to_string().trim_start().to_string()
    }
}

/// Format a magnitude and its dimension with full formatting options
pub fn format_dimval<T: fmt::Display>(value: T, dim: Dim, config: &FormatConfig) -> String {
    let sign_plus = config.flags.has_flag(FormatFlags::SIGN_PLUS);
    let mut text = match (config.precision, sign_plus) {
        (Some(precision), true) => format!("{value:+.precision$}"),
        (Some(precision), false) => format!("{value:.precision$}"),
        (None, true) => format!("{value:+}"),
        (None, false) => value.to_string(),
    };
    if !config.flags.has_flag(FormatFlags::NO_UNITS) {
        text.push_str(&dim.to_string());
    }
    apply_width_formatting(&text, config)
}

/// Apply width formatting and justification
pub fn apply_width_formatting(text: &str, config: &FormatConfig) -> String {
    let min_width = config.min_width.unwrap_or(0);
    let len = text.chars().count();

    // First truncate if max_width is specified
    let mut result = match config.max_width {
        Some(max_w) if len > max_w => {
            if max_w > 3 {
                let kept: String = text.chars().take(max_w - 3).collect();
                format!("{kept}...")
            } else {
                text.chars().take(max_w).collect()
            }
        }
        _ => text.to_string(),
    };

    // Then apply minimum width padding
    let len = result.chars().count();
    if len < min_width {
        let fill = config.fill.unwrap_or(' ');
        let total = min_width - len;
        let left = if config.flags.has_flag(FormatFlags::CENTER) {
            total / 2
        } else if config.flags.has_flag(FormatFlags::RIGHT_JUSTIFY) {
            total
        } else {
            0
        };
        let pad = |n: usize| std::iter::repeat(fill).take(n).collect::<String>();
        result = format!("{}{result}{}", pad(left), pad(total - left));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn speed() -> Dim {
        Dim::from_integers([-1, 1, 0, 0, 0]).unwrap()
    }

    #[test]
    fn test_flags() {
        let mut flags = FormatFlags::default();
        assert!(!flags.has_flag(FormatFlags::RIGHT_JUSTIFY));
        flags.set_flag(FormatFlags::RIGHT_JUSTIFY);
        flags.set_flag(FormatFlags::NO_UNITS);
        assert!(flags.has_flag(FormatFlags::RIGHT_JUSTIFY));
        flags.clear_flag(FormatFlags::RIGHT_JUSTIFY);
        assert!(!flags.has_flag(FormatFlags::RIGHT_JUSTIFY));
        assert!(flags.has_flag(FormatFlags::NO_UNITS));
    }

    #[test]
    fn test_format_dim() {
        assert_eq!(format_dim(&speed()), "m s^-1");
        assert_eq!(format_dim(&Dim::NUL), "dimensionless");
    }

    #[test]
    fn test_format_dimval_simple() {
        let config = FormatConfig::default();
        assert_eq!(format_dimval(750000.0, speed(), &config), "750000 m s^-1");
        assert_eq!(format_dimval(2.5, Dim::NUL, &config), "2.5");
    }

    #[test]
    fn test_format_dimval_with_precision() {
        let config = FormatConfig::new().with_precision(2);
        assert_eq!(format_dimval(1.0 / 3.0, Dim::MASS, &config), "0.33 kg");
    }

    #[test]
    fn test_format_dimval_without_units() {
        let config = FormatConfig::new().without_units();
        assert_eq!(format_dimval(4.0, speed(), &config), "4");
    }

    #[test]
    fn test_width_formatting() {
        let config = FormatConfig::default().with_width(10, None);
        assert_eq!(apply_width_formatting("3 kg", &config), "3 kg      ");

        let config = FormatConfig::default().with_width(10, None).right_justify();
        assert_eq!(apply_width_formatting("3 kg", &config), "      3 kg");
    }

    #[test]
    fn test_width_formatting_truncation() {
        let config = FormatConfig::default().with_width(5, Some(8));
        assert_eq!(apply_width_formatting("123", &config), "123  ");
        assert_eq!(apply_width_formatting("750000 m s^-1", &config), "75000...");

        let config = FormatConfig::default().with_width(0, Some(2));
        assert_eq!(apply_width_formatting("1 m", &config), "1 ");
    }

    #[test]
    fn test_from_formatter() {
        struct Probe;
        impl fmt::Display for Probe {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let config = FormatConfig::from_formatter(f);
                write!(f, "{:?}/{:?}/{}", config.precision, config.min_width, config.flags.has_flag(FormatFlags::RIGHT_JUSTIFY))
            }
        }
        assert_eq!(format!("{}", Probe), "None/None/false");
        assert_eq!(format!("{:>8.3}", Probe), "Some(3)/Some(8)/true");
    }

    #[test]
    fn test_center_and_fill() {
        let config = FormatConfig::new().with_width(10, None).center();
        assert_eq!(apply_width_formatting("3 kg", &config), "   3 kg   ");
        assert_eq!(apply_width_formatting("3 kg.", &config), "  3 kg.   ");

        let config = FormatConfig::new().with_width(8, None).right_justify().with_fill('*');
        assert_eq!(apply_width_formatting("3 kg", &config), "****3 kg");
    }

    #[test]
    fn test_from_formatter_alignment_sign_and_fill() {
        struct Spec;
        impl fmt::Display for Spec {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let config = FormatConfig::from_formatter(f);
                let flags = config.flags;
                write!(
                    f,
                    "{}{}{}/{:?}",
                    u8::from(flags.has_flag(FormatFlags::CENTER)),
                    u8::from(flags.has_flag(FormatFlags::RIGHT_JUSTIFY)),
                    u8::from(flags.has_flag(FormatFlags::SIGN_PLUS)),
                    config.fill
                )
            }
        }
        assert_eq!(format!("{:^4}", Spec), "100/None");
        assert_eq!(format!("{:*>+4}", Spec), "011/Some('*')");
        assert_eq!(format!("{:<4}", Spec), "000/None");
    }

    #[test]
    fn test_sign_plus() {
        let mut config = FormatConfig::new();
        config.flags.set_flag(FormatFlags::SIGN_PLUS);
        assert_eq!(format_dimval(2.0, Dim::MASS, &config), "+2 kg");
        assert_eq!(format_dimval(-2.0, Dim::MASS, &config.clone().with_precision(1)), "-2.0 kg");
    }
}
