use std::fmt;

/// An 8-bit RGB triple parsed from a hex color string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Hex string (after stripping '#') was not 3 or 6 digits long
    InvalidLength(usize),
    /// A character outside 0-9 / a-f / A-F
    InvalidDigit,
}

impl fmt::Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorParseError::InvalidLength(len) => {
                write!(f, "expected 3 or 6 hex digits, got {}", len)
            }
            ColorParseError::InvalidDigit => write!(f, "non-hex digit in color"),
        }
    }
}

impl std::error::Error for ColorParseError {}

impl Rgb {
    /// Parse a hex color like "#1a2b3c", "1a2b3c", "#abc" or "abc".
    ///
    /// The 3-digit shorthand duplicates each digit ("abc" -> "aabbcc").
    pub fn parse(input: &str) -> Result<Rgb, ColorParseError> {
        let hex = input.strip_prefix('#').unwrap_or(input);

        let expanded: String = if hex.chars().count() == 3 {
            hex.chars().flat_map(|c| [c, c]).collect()
        } else {
            hex.to_string()
        };

        if !expanded.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit);
        }
        // All-ASCII from here on, so byte length == digit count
        if expanded.len() != 6 {
            return Err(ColorParseError::InvalidLength(hex.chars().count()));
        }

        let channel = |s: &str| {
            u8::from_str_radix(s, 16).map_err(|_| ColorParseError::InvalidDigit)
        };

        Ok(Rgb {
            r: channel(&expanded[0..2])?,
            g: channel(&expanded[2..4])?,
            b: channel(&expanded[4..6])?,
        })
    }
}
