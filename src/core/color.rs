//! SGR codes for the dial, the purple text and the header banner.

use std::fmt::{self, Write as _};

#[derive(Debug)]
pub enum ColorError {
    InvalidHexDigit,
    InvalidHexLength,
}

/// One SGR code: a palette parameter (`35` → `ESC[35m`) or a 24-bit
/// foreground.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum AnsiCode {
    Sgr(&'static str),
    Rgb(u8, u8, u8),
}

/// Names `--color` accepts, in the order `colors` lists them.
pub const NAMED: [(&str, AnsiCode); 9] = [
    ("black", AnsiCode::black()),
    ("red", AnsiCode::Sgr("31")),
    ("green", AnsiCode::green()),
    ("yellow", AnsiCode::Sgr("33")),
    ("blue", AnsiCode::Sgr("34")),
    ("magenta", AnsiCode::magenta()),
    ("cyan", AnsiCode::cyan()),
    ("white", AnsiCode::Sgr("37")),
    ("purple", AnsiCode::purple()),
];

impl AnsiCode {
    pub const fn black() -> Self {
        Self::Sgr("30")
    }
    pub const fn green() -> Self {
        Self::Sgr("32")
    }
    /// Dial accent.
    pub const fn magenta() -> Self {
        Self::Sgr("35")
    }
    pub const fn cyan() -> Self {
        Self::Sgr("36")
    }
    /// The light purple used for date, digital time and footer.
    pub const fn purple() -> Self {
        Self::Sgr("95")
    }
    pub const fn bold() -> Self {
        Self::Sgr("1")
    }
    pub const fn bg_purple() -> Self {
        Self::Sgr("45")
    }
    pub const fn reset() -> Self {
        Self::Sgr("0")
    }

    /// A name from [`NAMED`] (any case, `bright-magenta` = purple) or `#rrggbb`.
    pub fn from_name(s: &str) -> Result<Self, ColorError> {
        let key = s.trim().to_ascii_lowercase();
        if key == "bright-magenta" {
            return Ok(Self::purple());
        }
        NAMED
            .iter()
            .find(|(name, _)| *name == key)
            .map_or_else(|| Self::from_hex(&key), |&(_, code)| Ok(code))
    }

    pub fn from_hex(hex: &str) -> Result<Self, ColorError> {
        let h = hex.trim().trim_start_matches('#');
        if h.len() != 6 || !h.is_ascii() {
            return Err(ColorError::InvalidHexLength);
        }
        let byte = |s: &str| u8::from_str_radix(s, 16).map_err(|_| ColorError::InvalidHexDigit);
        Ok(Self::Rgb(byte(&h[..2])?, byte(&h[2..4])?, byte(&h[4..])?))
    }
}

impl fmt::Display for AnsiCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sgr(p) => write!(f, "\x1b[{p}m"),
            Self::Rgb(r, g, b) => write!(f, "\x1b[38;2;{r};{g};{b}m"),
        }
    }
}

/// Wrap `text` in colour + reset sequence.
#[inline]
#[must_use]
pub fn colorize(c: &AnsiCode, text: &str) -> String {
    paint(std::slice::from_ref(c), text)
}

/// Like [`colorize`] but stacks several codes (e.g. bold + colour).
#[must_use]
pub fn paint(codes: &[AnsiCode], text: &str) -> String {
    let mut out = String::with_capacity(text.len() + codes.len() * 8 + 4);
    for c in codes {
        // writing into a String cannot fail
        let _ = write!(out, "{c}");
    }
    out.push_str(text);
    let _ = write!(out, "{}", AnsiCode::reset());
    out
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorError::InvalidHexDigit => f.write_str("invalid hex colour digit"),
            ColorError::InvalidHexLength => f.write_str("hex colour must be exactly 6 digits"),
        }
    }
}
impl std::error::Error for ColorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_resolve_case_insensitively() {
        assert_eq!(AnsiCode::from_name(" Purple ").unwrap(), AnsiCode::purple());
        assert_eq!(AnsiCode::from_name("CYAN").unwrap(), AnsiCode::cyan());
        assert_eq!(
            AnsiCode::from_name("bright-magenta").unwrap(),
            AnsiCode::purple()
        );
        for (name, code) in NAMED {
            assert_eq!(AnsiCode::from_name(name).unwrap(), code);
        }
    }

    #[test]
    fn hex_builds_true_colour_escape() {
        let c = AnsiCode::from_name("#6048c1").unwrap();
        assert_eq!(c, AnsiCode::Rgb(0x60, 0x48, 0xc1));
        assert_eq!(c.to_string(), "\x1b[38;2;96;72;193m");
        assert_eq!(
            AnsiCode::Rgb(255, 255, 255).to_string(),
            "\x1b[38;2;255;255;255m"
        );
    }

    #[test]
    fn bad_hex_is_rejected() {
        assert!(matches!(
            AnsiCode::from_hex("#12345"),
            Err(ColorError::InvalidHexLength)
        ));
        assert!(matches!(
            AnsiCode::from_hex("#zz0000"),
            Err(ColorError::InvalidHexDigit)
        ));
        assert!(AnsiCode::from_name("not-a-colour").is_err());
    }

    #[test]
    fn paint_stacks_codes_then_resets() {
        let s = paint(&[AnsiCode::bold(), AnsiCode::magenta()], "12");
        assert_eq!(s, "\x1b[1m\x1b[35m12\x1b[0m");
        assert_eq!(colorize(&AnsiCode::Sgr("31"), "x"), "\x1b[31mx\x1b[0m");
    }
}
