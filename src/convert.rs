//! Conversions between the hex, RGB and HSL notations.
//!
//! The math runs on un-rounded [`Components`] in `util`. The public functions
//! round the results back to integer channels: `rgb_to_hsl` floors,
//! `hsl_to_rgb` takes the ceiling. The two directions are tuned against each
//! other so that integer round trips through either notation reproduce the
//! original channels.
//!
//! ```rust
//! use tinct::{hex_to_hsl, hsl_to_hex, Hsl};
//! let hsl = hex_to_hsl("#800080").unwrap();
//! assert_eq!(hsl, Hsl::new(300, 100, 25));
//! assert_eq!(hsl_to_hex(300, 100, 25), "800080");
//! ```

use crate::{
    color::{Channel, Components},
    error::{Error, Result},
    hsl::Hsl,
    rgb::Rgb,
};

impl Rgb {
    /// Read a color from a hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = normalize_hex(hex);
        Ok(Self::new(
            hex_to_int(&digits, 0)?,
            hex_to_int(&digits, 2)?,
            hex_to_int(&digits, 4)?,
        ))
    }

    /// Convert this color to a normalized hex string.
    pub fn to_hex(&self) -> String {
        let digits = [self.red, self.green, self.blue]
            .map(util::pad_hex)
            .concat();
        normalize_hex(&digits)
    }

    /// Convert this color to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::rgb_to_hsl(&self.to_components());
        Hsl::new(
            util::to_channel(hue.floor()),
            util::to_channel(saturation.floor()),
            util::to_channel(lightness.floor()),
        )
    }
}

impl Hsl {
    /// Read a color from a hex string, with or without a leading `#`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        Ok(Rgb::from_hex(hex)?.to_hsl())
    }

    /// Convert this color to the RGB notation.
    pub fn to_rgb(&self) -> Rgb {
        let Components(red, green, blue) = util::hsl_to_rgb(&self.to_components());
        Rgb::new(
            util::to_channel((red * 255.0).ceil()),
            util::to_channel((green * 255.0).ceil()),
            util::to_channel((blue * 255.0).ceil()),
        )
    }

    /// Convert this color to a normalized hex string.
    pub fn to_hex(&self) -> String {
        self.to_rgb().to_hex()
    }
}

/// Strip an optional leading `#` and uppercase the digits.
pub fn normalize_hex(hex: &str) -> String {
    hex.strip_prefix('#').unwrap_or(hex).to_ascii_uppercase()
}

/// Convert RGB channels to a normalized hex string.
///
/// No bounds checks are done: a channel above 255 produces more than two
/// digits.
pub fn rgb_to_hex(r: Channel, g: Channel, b: Channel) -> String {
    Rgb::new(r, g, b).to_hex()
}

/// Convert HSL channels to a normalized hex string.
pub fn hsl_to_hex(h: Channel, s: Channel, l: Channel) -> String {
    Hsl::new(h, s, l).to_hex()
}

/// Convert HSL channels to RGB.
pub fn hsl_to_rgb(h: Channel, s: Channel, l: Channel) -> Rgb {
    Hsl::new(h, s, l).to_rgb()
}

/// Convert RGB channels to HSL.
pub fn rgb_to_hsl(r: Channel, g: Channel, b: Channel) -> Hsl {
    Rgb::new(r, g, b).to_hsl()
}

/// Read a hex string, with or without a leading `#`, into RGB channels.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb> {
    Rgb::from_hex(hex)
}

/// Read a hex string, with or without a leading `#`, into HSL channels.
pub fn hex_to_hsl(hex: &str) -> Result<Hsl> {
    Hsl::from_hex(hex)
}

/// Parse the (at most) two hex digits starting at byte offset `index`.
pub fn hex_to_int(hex: &str, index: usize) -> Result<Channel> {
    let end = index.saturating_add(2).min(hex.len());
    let digits = hex.get(index..end).unwrap_or_default();

    let invalid = || Error::InvalidHexDigits {
        digits: digits.to_string(),
        index,
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid());
    }

    Channel::from_str_radix(digits, 16).map_err(|_| invalid())
}

mod util {
    use crate::{
        color::{Channel, Component, Components},
        math::{max3, min3},
    };

    /// Format a channel as hex, with a leading zero below 16.
    pub fn pad_hex(channel: Channel) -> String {
        let digits = if channel < 0 {
            format!("-{:x}", channel.unsigned_abs())
        } else {
            format!("{channel:x}")
        };

        if channel < 16 {
            format!("0{digits}")
        } else {
            digits
        }
    }

    /// Convert an already rounded component to a channel. Saturates at the
    /// channel limits.
    pub fn to_channel(value: Component) -> Channel {
        value as Channel
    }

    /// Convert 0-255 RGB components to HSL components: hue in degrees,
    /// saturation and lightness in percent. Nothing is rounded.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(red, green, blue) = from.map(|c| c / 255.0);

        let min = min3(red, green, blue);
        let max = max3(red, green, blue);
        let delta = max - min;

        let lightness = (max + min) / 2.0;

        if delta == 0.0 {
            return Components(0.0, 0.0, lightness * 100.0);
        }

        let saturation = delta / (1.0 - (2.0 * lightness - 1.0).abs());

        let mut hue = 60.0
            * if max == red {
                ((green - blue) % 6.0) / delta
            } else if max == green {
                2.0 + (blue - red) / delta
            } else {
                4.0 + (red - green) / delta
            };

        if hue < 0.0 {
            hue += 360.0;
        }

        Components(hue, saturation * 100.0, lightness * 100.0)
    }

    /// Convert HSL components (degrees, percent, percent) to RGB components
    /// in `[0, 1]`. Nothing is rounded.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let Components(hue, saturation, lightness) = *from;

        let lightness = if lightness > 100.0 {
            1.0
        } else {
            lightness / 100.0
        };
        let saturation = if saturation > 100.0 {
            1.0
        } else {
            saturation / 100.0
        };

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let hue_point = hue_point(hue);
        let secondary = chroma * (1.0 - ((hue_point % 2.0) - 1.0).abs());
        let offset = lightness - chroma / 2.0;

        let (red, green, blue) = match hue_point.floor() as u8 {
            0 => (chroma, secondary, 0.0),
            1 => (secondary, chroma, 0.0),
            2 => (0.0, chroma, secondary),
            3 => (0.0, secondary, chroma),
            4 => (secondary, 0.0, chroma),
            _ => (chroma, 0.0, secondary),
        };

        Components(red + offset, green + offset, blue + offset)
    }

    /// Map a hue in degrees onto one of the six 60° sectors, as a value in
    /// `[0, 6)`. Hues above 360 are reduced once by a full turn; anything
    /// still outside the wheel is wrapped.
    fn hue_point(hue: Component) -> Component {
        let hue_point = if hue > 360.0 {
            (hue - 360.0) / 60.0
        } else {
            hue / 60.0
        };

        if (0.0..6.0).contains(&hue_point) {
            return hue_point;
        }

        log::debug!("wrapping hue {hue} onto the color wheel");

        // rem_euclid can round up to exactly 6.0 for tiny negative values.
        let wrapped = hue_point.rem_euclid(6.0);
        if wrapped >= 6.0 {
            0.0
        } else {
            wrapped
        }
    }

}
