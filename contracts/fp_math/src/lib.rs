//! Integer fixed-point helpers shared by the sale contracts.
//!
//! Every helper works on non-negative `i128` values (the amount type of the
//! Soroban token interface) and returns `None` instead of wrapping or panicking.
#![no_std]

/// One whole in basis points.
pub const BPS_DENOMINATOR: i128 = 10_000;

/// `10^exp`, or `None` when it does not fit in an `i128`.
pub fn pow10(exp: u32) -> Option<i128> {
    10_i128.checked_pow(exp)
}

fn checked_product(a: i128, b: i128, denominator: i128) -> Option<i128> {
    if a < 0 || b < 0 || denominator <= 0 {
        return None;
    }
    a.checked_mul(b)
}

/// `floor(a * b / denominator)`.
pub fn mul_div_floor(a: i128, b: i128, denominator: i128) -> Option<i128> {
    checked_product(a, b, denominator)?.checked_div(denominator)
}

/// `ceil(a * b / denominator)`.
pub fn mul_div_ceil(a: i128, b: i128, denominator: i128) -> Option<i128> {
    let product = checked_product(a, b, denominator)?;
    let quotient = product.checked_div(denominator)?;
    if product.checked_rem(denominator)? > 0 {
        quotient.checked_add(1)
    } else {
        Some(quotient)
    }
}

/// Portion of `amount` represented by `bps`, rounded down.
pub fn apply_bps(amount: i128, bps: u32) -> Option<i128> {
    mul_div_floor(amount, i128::from(bps), BPS_DENOMINATOR)
}
