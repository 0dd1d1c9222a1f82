//! Model a color with the HSL notation.

use std::fmt;

use crate::color::Channel;

tinct_macros::gen_model! {
    /// A color specified with the HSL notation.
    pub struct Hsl {
        /// The hue of the color in degrees, conceptually in `[0, 360)`.
        pub hue: Channel,
        /// The saturation of the color in percent.
        saturation: Channel,
        /// The lightness of the color in percent.
        lightness: Channel,
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            self.hue, self.saturation, self.lightness
        )
    }
}
