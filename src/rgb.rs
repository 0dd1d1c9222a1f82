//! Model a color with the RGB notation.

use std::fmt;

use crate::color::Channel;

tinct_macros::gen_model! {
    /// A color specified with red, green and blue channels, each
    /// conceptually in `[0, 255]`.
    pub struct Rgb {
        /// The red channel of the color.
        pub red: Channel,
        /// The green channel of the color.
        pub green: Channel,
        /// The blue channel of the color.
        pub blue: Channel,
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.red, self.green, self.blue)
    }
}
