use core::fmt;

/// A transaction amount rendered as fixed-point text with two fraction digits.
///
/// - The decimal point is always present (`0` renders as `0.00`).
/// - No thousands separators and no currency symbol.
/// - Negative values keep their sign (`-1.5` renders as `-1.50`).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Amount(f64);

impl Amount {
    /// The zero amount, used when a request carries none.
    pub const ZERO: Self = Self(0.0);

    /// Construct from an `f64` value.
    #[inline]
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Return the underlying value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Returns `true` iff the amount is neither NaN nor infinite.
    #[inline]
    #[must_use]
    pub fn is_finite(self) -> bool {
        self.0.is_finite()
    }
}

impl From<f64> for Amount {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::Amount;
    use alloc::string::ToString;

    #[test]
    fn renders_two_fraction_digits() {
        assert_eq!(Amount::ZERO.to_string(), "0.00");
        assert_eq!(Amount::new(20.67).to_string(), "20.67");
        assert_eq!(Amount::new(5.5).to_string(), "5.50");
        assert_eq!(Amount::new(1234567.0).to_string(), "1234567.00");
    }

    #[test]
    fn rounds_to_nearest_cent() {
        assert_eq!(Amount::new(0.006).to_string(), "0.01");
        assert_eq!(Amount::new(9.994).to_string(), "9.99");
        assert_eq!(Amount::new(19.999).to_string(), "20.00");
    }

    #[test]
    fn ties_follow_binary_value() {
        // 0.125 and 0.375 are exact binary ties and round to even; 2.675 is stored just below.
        assert_eq!(Amount::new(0.125).to_string(), "0.12");
        assert_eq!(Amount::new(0.375).to_string(), "0.38");
        assert_eq!(Amount::new(2.675).to_string(), "2.67");
    }

    #[test]
    fn keeps_sign_of_negative_amounts() {
        assert_eq!(Amount::new(-1.5).to_string(), "-1.50");
    }
}
