//! Fixed-point token amounts
//!
//! Raw chain balances are integers in a token's smallest unit. They are
//! carried as a signed `i128` together with the token's decimal precision so
//! that scaling never goes through floating point.
//!
//! # Units
//!
//! - `inner` is the amount in smallest units at `precision`
//! - `precision` is at most [`MAX_PRECISION`], so every scale factor fits in `i128`
//! - Results of subtraction may be negative

use std::fmt;

use serde::{Serialize, Serializer};

use crate::errors::AmountError;

/// Largest supported precision (10^38 < i128::MAX)
pub const MAX_PRECISION: u32 = 38;

/// Signed fixed-point decimal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FixedPointNumber {
    inner: i128,
    precision: u32,
}

fn scale(precision: u32) -> Option<i128> {
    10i128.checked_pow(precision)
}

impl FixedPointNumber {
    /// Build from an unsigned raw chain value. Values above `i128::MAX` saturate
    /// with a warning; use [`checked_from_inner`](Self::checked_from_inner) to reject them.
    pub fn from_inner(raw: u128, precision: u32) -> Self {
        Self::checked_from_inner(raw, precision).unwrap_or_else(|| {
            tracing::warn!(raw = %raw, precision, "Raw amount exceeds i128::MAX, saturating");
            Self {
                inner: i128::MAX,
                precision,
            }
        })
    }

    /// Build from an unsigned raw chain value, `None` above `i128::MAX`
    pub fn checked_from_inner(raw: u128, precision: u32) -> Option<Self> {
        i128::try_from(raw).ok().map(|inner| Self { inner, precision })
    }

    pub fn from_signed_inner(inner: i128, precision: u32) -> Self {
        Self { inner, precision }
    }

    pub fn zero(precision: u32) -> Self {
        Self {
            inner: 0,
            precision,
        }
    }

    pub fn inner(&self) -> i128 {
        self.inner
    }

    pub fn precision(&self) -> u32 {
        self.precision
    }

    pub fn is_negative(&self) -> bool {
        self.inner < 0
    }

    pub fn is_zero(&self) -> bool {
        self.inner == 0
    }

    /// Raw smallest-unit value, if non-negative
    pub fn to_inner_u128(&self) -> Option<u128> {
        u128::try_from(self.inner).ok()
    }

    /// Exact conversion to another precision.
    ///
    /// Returns `None` if the conversion would drop non-zero digits or overflow.
    pub fn with_precision(&self, precision: u32) -> Option<Self> {
        let inner = if precision >= self.precision {
            self.inner
                .checked_mul(scale(precision - self.precision)?)?
        } else {
            let divisor = scale(self.precision - precision)?;
            if self.inner % divisor != 0 {
                return None;
            }
            self.inner / divisor
        };
        Some(Self { inner, precision })
    }

    /// Subtract, aligning both sides to the larger precision. Saturates on overflow.
    pub fn minus(&self, rhs: &Self) -> Self {
        let precision = self.precision.max(rhs.precision);
        let lhs = self.aligned(precision);
        let rhs = rhs.aligned(precision);
        Self {
            inner: lhs.saturating_sub(rhs),
            precision,
        }
    }

    /// Add, aligning both sides to the larger precision. Saturates on overflow.
    pub fn plus(&self, rhs: &Self) -> Self {
        let precision = self.precision.max(rhs.precision);
        let lhs = self.aligned(precision);
        let rhs = rhs.aligned(precision);
        Self {
            inner: lhs.saturating_add(rhs),
            precision,
        }
    }

    /// Multiply by `numerator / denominator`, rounding up to the next smallest unit.
    pub fn mul_ratio_ceil(&self, numerator: u32, denominator: u32) -> Self {
        let denominator = i128::from(denominator.max(1));
        let product = self.inner.saturating_mul(i128::from(numerator));
        let quotient = product / denominator;
        let inner = if product % denominator > 0 {
            quotient + 1
        } else {
            quotient
        };
        Self {
            inner,
            precision: self.precision,
        }
    }

    /// Zero if negative, otherwise unchanged
    pub fn clamp_zero(&self) -> Self {
        if self.is_negative() {
            Self::zero(self.precision)
        } else {
            *self
        }
    }

    /// Parse a decimal string such as "1.25" at the given precision.
    ///
    /// Fractional digits beyond `precision` are rejected rather than rounded.
    pub fn parse(value: &str, precision: u32) -> Result<Self, AmountError> {
        let value = value.trim();
        let (negative, digits) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() && frac_part.is_empty() {
            return Err(AmountError::Invalid(value.to_string()));
        }
        if !int_part.chars().chain(frac_part.chars()).all(|c| c.is_ascii_digit()) {
            return Err(AmountError::Invalid(value.to_string()));
        }

        let frac_trimmed = frac_part.trim_end_matches('0');
        if frac_trimmed.len() as u32 > precision {
            return Err(AmountError::TooManyDecimals {
                value: value.to_string(),
                precision,
            });
        }

        let unit = scale(precision).ok_or(AmountError::Overflow)?;
        let int_value: i128 = if int_part.is_empty() {
            0
        } else {
            int_part.parse().map_err(|_| AmountError::Overflow)?
        };

        let frac_value: i128 = if frac_trimmed.is_empty() {
            0
        } else {
            let padding = scale(precision - frac_trimmed.len() as u32).ok_or(AmountError::Overflow)?;
            let digits: i128 = frac_trimmed.parse().map_err(|_| AmountError::Overflow)?;
            digits * padding
        };

        let magnitude = int_value
            .checked_mul(unit)
            .and_then(|v| v.checked_add(frac_value))
            .ok_or(AmountError::Overflow)?;

        Ok(Self {
            inner: if negative { -magnitude } else { magnitude },
            precision,
        })
    }

    fn aligned(&self, precision: u32) -> i128 {
        let factor = scale(precision.saturating_sub(self.precision)).unwrap_or(i128::MAX);
        self.inner.saturating_mul(factor)
    }
}

impl fmt::Display for FixedPointNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(unit) = 10u128.checked_pow(self.precision) else {
            return write!(f, "{}e-{}", self.inner, self.precision);
        };

        let sign = if self.inner < 0 { "-" } else { "" };
        let magnitude = self.inner.unsigned_abs();
        let int_part = magnitude / unit;
        let frac_part = magnitude % unit;

        if frac_part == 0 {
            return write!(f, "{}{}", sign, int_part);
        }

        let frac = format!("{:0width$}", frac_part, width = self.precision as usize);
        write!(f, "{}{}.{}", sign, int_part, frac.trim_end_matches('0'))
    }
}

impl Serialize for FixedPointNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
