//! Read loosely formatted color strings.
//!
//! Three shapes are accepted, tried in this order:
//! * `rgb(r, g, b)`
//! * `hsl(h, s%, l%)`, the `%` signs being optional
//! * a hex string with an optional leading `#`
//!
//! Anything that is not `rgb(...)` or `hsl(...)` is read as hex. Hex strings
//! are only checked for length: more than 6 characters is an error, shorter
//! strings are returned as they are.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::{Captures, Regex};

use crate::{
    color::Channel,
    convert::normalize_hex,
    error::{Error, Result},
    hsl::Hsl,
    rgb::Rgb,
};

static RGB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)$").expect("valid regex")
});

static HSL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^hsl\(\s*(\d+)\s*,\s*(\d+)%*\s*,\s*(\d+)%*\s*\)$").expect("valid regex")
});

/// Number of characters a hex string may have at most.
const MAX_HEX_LEN: usize = 6;

/// The shapes a color string can take.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Notation {
    /// `rgb(r, g, b)`
    Rgb,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `#RRGGBB` or `RRGGBB`
    Hex,
}

impl fmt::Display for Notation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Notation::Rgb => "RGB",
            Notation::Hsl => "HSL",
            Notation::Hex => "hex",
        })
    }
}

/// A color string that was successfully read, tagged with its notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorString {
    /// Read from `rgb(...)`.
    Rgb(Rgb),
    /// Read from `hsl(...)`.
    Hsl(Hsl),
    /// A normalized hex string, `#` stripped and uppercased.
    Hex(String),
}

impl ColorString {
    /// Read a color string, trying `rgb(...)`, then `hsl(...)`, then hex.
    pub fn parse(input: &str) -> Result<Self> {
        if let Some(channels) = channels(&RGB_RE, input, Notation::Rgb) {
            log::trace!("reading {input:?} as rgb()");
            return Ok(Self::Rgb(channels?.into()));
        }

        if let Some(channels) = channels(&HSL_RE, input, Notation::Hsl) {
            log::trace!("reading {input:?} as hsl()");
            return Ok(Self::Hsl(channels?.into()));
        }

        log::trace!("reading {input:?} as hex");
        let hex = normalize_hex(input);
        if hex.chars().count() > MAX_HEX_LEN {
            return Err(Error::InvalidFormat(Notation::Hex));
        }

        Ok(Self::Hex(hex))
    }

    /// The notation this color was read from.
    pub fn notation(&self) -> Notation {
        match self {
            ColorString::Rgb(_) => Notation::Rgb,
            ColorString::Hsl(_) => Notation::Hsl,
            ColorString::Hex(_) => Notation::Hex,
        }
    }

    /// Convert to a normalized hex string.
    pub fn to_hex(&self) -> String {
        match self {
            ColorString::Rgb(rgb) => rgb.to_hex(),
            ColorString::Hsl(hsl) => hsl.to_hex(),
            ColorString::Hex(hex) => hex.clone(),
        }
    }
}

impl FromStr for ColorString {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Read an `rgb(r, g, b)` string.
    fn from_str(s: &str) -> Result<Self> {
        channels(&RGB_RE, s, Notation::Rgb)
            .unwrap_or(Err(Error::InvalidFormat(Notation::Rgb)))
            .map(Self::from)
    }
}

impl FromStr for Hsl {
    type Err = Error;

    /// Read an `hsl(h, s%, l%)` string.
    fn from_str(s: &str) -> Result<Self> {
        channels(&HSL_RE, s, Notation::Hsl)
            .unwrap_or(Err(Error::InvalidFormat(Notation::Hsl)))
            .map(Self::from)
    }
}

/// Parse `rgb(...)`, `hsl(...)` or hex input into a normalized hex string.
pub fn parse_to_hex(input: &str) -> Result<String> {
    Ok(ColorString::parse(input)?.to_hex())
}

/// Match `input` against `re` and read the three captured channels.
///
/// Returns `None` when the pattern does not match at all, and an error when
/// it matches but a capture does not fit in a [`Channel`].
fn channels(
    re: &Regex,
    input: &str,
    notation: Notation,
) -> Option<Result<(Channel, Channel, Channel)>> {
    let captures = re.captures(input)?;
    Some(read_channels(&captures).ok_or(Error::InvalidFormat(notation)))
}

fn read_channels(captures: &Captures<'_>) -> Option<(Channel, Channel, Channel)> {
    let channel = |i: usize| captures.get(i)?.as_str().parse::<Channel>().ok();
    Some((channel(1)?, channel(2)?, channel(3)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        assert_eq!(parse_to_hex("rgb(255, 0, 0)"), Ok("FF0000".to_string()));
        assert_eq!(
            parse_to_hex("hsl(0, 100%, 50%)"),
            Ok("FF0000".to_string())
        );
        assert_eq!(parse_to_hex("#ff0000"), Ok("FF0000".to_string()));
        assert_eq!(parse_to_hex("ff0000"), Ok("FF0000".to_string()));
    }

    #[test]
    fn hex_longer_than_six_is_rejected() {
        assert_eq!(
            parse_to_hex("FF00FF00"),
            Err(Error::InvalidFormat(Notation::Hex))
        );
        assert_eq!(
            parse_to_hex("#FF00FF0"),
            Err(Error::InvalidFormat(Notation::Hex))
        );
    }

    #[test]
    fn short_hex_passes_through() {
        assert_eq!(parse_to_hex("#abc"), Ok("ABC".to_string()));
        assert_eq!(parse_to_hex(""), Ok(String::new()));
    }

    #[test]
    fn whitespace_around_separators() {
        assert_eq!(parse_to_hex("rgb(  0,128 ,  128 )"), Ok("008080".to_string()));
        assert_eq!(parse_to_hex("hsl( 180 , 100 , 25 )"), Ok("008080".to_string()));
        assert_eq!(parse_to_hex("hsl(180,100%%,25%)"), Ok("008080".to_string()));
    }

    #[test]
    fn malformed_functions_fall_through_to_hex() {
        // Not an rgb() string, and far too long for hex.
        assert_eq!(
            parse_to_hex("rgb(1.5, 0, 0)"),
            Err(Error::InvalidFormat(Notation::Hex))
        );
        assert_eq!(
            parse_to_hex(" rgb(0, 0, 0)"),
            Err(Error::InvalidFormat(Notation::Hex))
        );
        assert_eq!(
            parse_to_hex("RGB(0, 0, 0)"),
            Err(Error::InvalidFormat(Notation::Hex))
        );
    }

    #[test]
    fn captures_that_overflow_a_channel() {
        assert_eq!(
            parse_to_hex("rgb(99999999999, 0, 0)"),
            Err(Error::InvalidFormat(Notation::Rgb))
        );
        assert_eq!(
            parse_to_hex("hsl(0, 99999999999%, 0%)"),
            Err(Error::InvalidFormat(Notation::Hsl))
        );
    }

    #[test]
    fn tagged_variants() {
        let color = ColorString::parse("rgb(1, 2, 3)").unwrap();
        assert_eq!(color, ColorString::Rgb(Rgb::new(1, 2, 3)));
        assert_eq!(color.notation(), Notation::Rgb);

        let color: ColorString = "hsl(120, 100%, 25%)".parse().unwrap();
        assert_eq!(color, ColorString::Hsl(Hsl::new(120, 100, 25)));
        assert_eq!(color.notation(), Notation::Hsl);
        assert_eq!(color.to_hex(), "008000");

        let color = ColorString::parse("#c0c0c0").unwrap();
        assert_eq!(color, ColorString::Hex("C0C0C0".to_string()));
        assert_eq!(color.notation(), Notation::Hex);
    }

    #[test]
    fn models_from_str() {
        assert_eq!("rgb(0, 0, 128)".parse::<Rgb>(), Ok(Rgb::new(0, 0, 128)));
        assert_eq!(
            "hsl(0, 100%, 50%)".parse::<Rgb>(),
            Err(Error::InvalidFormat(Notation::Rgb))
        );
        assert_eq!("hsl(240, 100%, 25%)".parse::<Hsl>(), Ok(Hsl::new(240, 100, 25)));
        assert_eq!(
            "#000080".parse::<Hsl>(),
            Err(Error::InvalidFormat(Notation::Hsl))
        );
    }

    #[test]
    fn display_is_accepted_back() {
        let rgb = Rgb::new(250, 128, 114);
        assert_eq!(rgb.to_string().parse::<Rgb>(), Ok(rgb));

        let hsl = Hsl::new(6, 93, 71);
        assert_eq!(hsl.to_string().parse::<Hsl>(), Ok(hsl));
        assert_eq!(parse_to_hex(&hsl.to_string()), Ok(hsl.to_hex()));
    }
}
