//! Math utility functions.

use num_traits::Float;

/// Return the smallest of three values.
pub fn min3<T: Float>(a: T, b: T, c: T) -> T {
    a.min(b).min(c)
}

/// Return the largest of three values.
pub fn max3<T: Float>(a: T, b: T, c: T) -> T {
    a.max(b).max(c)
}
