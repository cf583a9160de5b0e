//! Transfer capacity calculator
//!
//! Pure math for the maximum transferable amount.
//! No I/O, no async - just deterministic calculations.
//!
//! # Units
//!
//! - Balances: fixed-point at the token's precision
//! - Fee estimates: smallest native unit (only non-zero for the native token)
//! - Results may be negative; callers clamp before display

use xbridge_core::{FixedPointNumber, Token};

/// Fee safety margin applied to the estimate (x1.2)
pub const FEE_MARGIN_NUMERATOR: u32 = 12;
pub const FEE_MARGIN_DENOMINATOR: u32 = 10;

/// Fee with margin at `decimals`, rounded up to the next smallest unit
pub fn fee_with_margin(fee_raw: u128, decimals: u32) -> FixedPointNumber {
    FixedPointNumber::from_inner(fee_raw, decimals)
        .mul_ratio_ceil(FEE_MARGIN_NUMERATOR, FEE_MARGIN_DENOMINATOR)
}

/// `available - fee * 1.2 - ed`, never clamped
pub fn max_input(available: &FixedPointNumber, fee_raw: u128, token: &Token) -> FixedPointNumber {
    available
        .minus(&fee_with_margin(fee_raw, token.decimals))
        .minus(&token.ed_amount())
}
