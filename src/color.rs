//! Scalar types shared by every color model.

/// An integer value that all model channels are stored as.
///
/// Channels are not bounded: values outside the range a notation expects
/// pass through the conversions unchanged.
pub type Channel = i32;

/// A 64-bit floating point value used for all intermediate math.
pub type Component = f64;

/// Represent the three un-rounded components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}
