/*!
    Rational number type for frame rates.
*/

use std::fmt;

/**
    A rational number represented as a numerator and denominator.

    Used for frame rates (e.g., 24000/1001 for 23.976 fps). Both parts
    are strictly positive.
*/
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    pub num: u32,
    pub den: u32,
}

impl Rational {
    /**
        Create a new rational number.

        # Panics

        Panics if `num` or `den` is zero.
    */
    #[inline]
    pub const fn new(num: u32, den: u32) -> Self {
        assert!(num != 0, "numerator cannot be zero");
        assert!(den != 0, "denominator cannot be zero");
        Self { num, den }
    }

    /**
        Convert to f64.
    */
    #[inline]
    pub fn to_f64(self) -> f64 {
        self.num as f64 / self.den as f64
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

impl From<(u32, u32)> for Rational {
    fn from((num, den): (u32, u32)) -> Self {
        Self::new(num, den)
    }
}

impl From<u32> for Rational {
    fn from(num: u32) -> Self {
        Self::new(num, 1)
    }
}
