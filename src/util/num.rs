use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{ToPrimitive, Zero};

use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Widest integer literal, in bits, the analyzer accepts.
pub const INTEGER_LITERAL_BITS: u64 = 32;

/// Largest exponent `^` accepts.
pub const MAX_EXPONENT: u32 = 1 << 16;

/// Divides two decimals, keeping the dividend's scale and rounding half to
/// even.
///
/// ## Parameters
/// - `dividend`: The value being divided. Its scale is the result's scale.
/// - `divisor`: The value to divide by.
///
/// ## Returns
/// - `Some(quotient)`: The rounded quotient.
/// - `None`: If `divisor` is zero.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use plc::util::num::divide_half_even;
///
/// let d = |s: &str| BigDecimal::from_str(s).unwrap();
///
/// assert_eq!(divide_half_even(&d("5.0"), &d("2.0")), Some(d("2.5")));
/// assert_eq!(divide_half_even(&d("0.5"), &d("2")), Some(d("0.2")));
/// assert_eq!(divide_half_even(&d("1.5"), &d("2")), Some(d("0.8")));
/// assert_eq!(divide_half_even(&d("1.0"), &d("0.0")), None);
/// ```
#[must_use]
pub fn divide_half_even(dividend: &BigDecimal, divisor: &BigDecimal) -> Option<BigDecimal> {
    if divisor.is_zero() {
        return None;
    }

    let (dividend_digits, scale) = dividend.as_bigint_and_exponent();
    let (divisor_digits, divisor_scale) = divisor.as_bigint_and_exponent();

    // dividend / divisor * 10^scale == dividend_digits * 10^divisor_scale / divisor_digits
    let shift = u32::try_from(divisor_scale.unsigned_abs()).ok()?;
    let (numerator, denominator) = if divisor_scale >= 0 {
        (dividend_digits * BigInt::from(10).pow(shift), divisor_digits)
    } else {
        (dividend_digits, divisor_digits * BigInt::from(10).pow(shift))
    };

    Some(BigDecimal::new(round_half_even(&numerator, &denominator), scale))
}

/// Integer division of `numerator` by a non-zero `denominator`, rounded half
/// to even.
fn round_half_even(numerator: &BigInt, denominator: &BigInt) -> BigInt {
    let quotient = numerator / denominator;
    let remainder = numerator % denominator;
    if remainder.is_zero() {
        return quotient;
    }

    let twice = remainder.magnitude() * 2u32;
    let away = match twice.cmp(denominator.magnitude()) {
        std::cmp::Ordering::Less => false,
        std::cmp::Ordering::Greater => true,
        std::cmp::Ordering::Equal => !(&quotient % 2u32).is_zero(),
    };
    if !away {
        return quotient;
    }

    if (numerator.sign() == Sign::Minus) == (denominator.sign() == Sign::Minus) {
        quotient + 1
    } else {
        quotient - 1
    }
}

/// Raises a decimal to a non-negative integer power exactly.
///
/// The result's scale is the base's scale times `exponent`.
///
/// ## Returns
/// `None` if the resulting scale does not fit in an `i64`.
///
/// ## Example
/// ```
/// use std::str::FromStr;
///
/// use bigdecimal::BigDecimal;
/// use plc::util::num::decimal_pow;
///
/// let result = decimal_pow(&BigDecimal::from_str("1.5").unwrap(), 2).unwrap();
/// assert_eq!(result.to_string(), "2.25");
/// ```
#[must_use]
pub fn decimal_pow(base: &BigDecimal, exponent: u32) -> Option<BigDecimal> {
    let (digits, scale) = base.as_bigint_and_exponent();
    let scale = scale.checked_mul(i64::from(exponent))?;
    Some(BigDecimal::new(digits.pow(exponent), scale))
}

/// Converts an `^` exponent to a `u32`.
///
/// ## Errors
/// Returns `RuntimeError::InvalidExponent` if the exponent is negative or
/// above [`MAX_EXPONENT`].
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use plc::{error::RuntimeError, util::num::exponent_to_u32};
///
/// assert_eq!(exponent_to_u32(&BigInt::from(3), 0).unwrap(), 3);
/// assert!(matches!(exponent_to_u32(&BigInt::from(-1), 7),
///                  Err(RuntimeError::InvalidExponent { offset: 7 })));
/// ```
pub fn exponent_to_u32(exponent: &BigInt, offset: usize) -> EvalResult<u32> {
    exponent.to_u32()
            .filter(|n| *n <= MAX_EXPONENT)
            .ok_or(RuntimeError::InvalidExponent { offset })
}

/// Converts a list index to a `usize`, checking it against the list length.
///
/// ## Errors
/// Returns `RuntimeError::IndexOutOfBounds` if the index is negative or not
/// below `length`.
///
/// ## Example
/// ```
/// use num_bigint::BigInt;
/// use plc::util::num::checked_index;
///
/// assert_eq!(checked_index(&BigInt::from(2), 3, 0).unwrap(), 2);
/// assert!(checked_index(&BigInt::from(3), 3, 0).is_err());
/// assert!(checked_index(&BigInt::from(-1), 3, 0).is_err());
/// ```
pub fn checked_index(index: &BigInt, length: usize, offset: usize) -> EvalResult<usize> {
    index.to_usize()
         .filter(|i| *i < length)
         .ok_or_else(|| RuntimeError::IndexOutOfBounds { index: index.clone(),
                                                         length,
                                                         offset })
}
