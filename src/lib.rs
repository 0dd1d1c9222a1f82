//! tinct converts colors between hex strings, RGB triplets and HSL triplets,
//! and reads loosely formatted `rgb(...)`, `hsl(...)` and hex strings into a
//! canonical hex form.
//!
//! ```rust
//! use tinct::{parse_to_hex, rgb_to_hsl, Hsl};
//! assert_eq!(parse_to_hex("rgb(255, 0, 0)").unwrap(), "FF0000");
//! assert_eq!(rgb_to_hsl(0, 0, 255), Hsl::new(240, 100, 50));
//! ```

#![deny(missing_docs)]


mod color;
mod convert;
mod error;
mod hsl;
mod math;
mod parse;
mod rgb;

pub use color::{Channel, Component, Components};
pub use convert::{
    hex_to_hsl, hex_to_int, hex_to_rgb, hsl_to_hex, hsl_to_rgb, normalize_hex, rgb_to_hex,
    rgb_to_hsl,
};
pub use error::{Error, Result};
pub use hsl::Hsl;
pub use parse::{parse_to_hex, ColorString, Notation};
pub use rgb::Rgb;
