//! Overflow-safe integer sign utilities
//!
//! Every comparator in this crate reduces to [`sign_of_difference`], which
//! compares its arguments directly instead of subtracting them.

/// Get the magnitude of the given integer.
///
/// The result is unsigned so that `i32::MIN` has a representable magnitude.
pub fn absolute_value(value: i32) -> u32 {
    value.unsigned_abs()
}

/// Get the magnitude of the given integer as the same signed width.
///
/// Returns `None` for `i32::MIN`, whose magnitude does not fit in an `i32`.
pub fn checked_absolute_value(value: i32) -> Option<i32> {
    value.checked_abs()
}

/// Get the sign of the given integer: `-1`, `0` or `1`.
pub fn sign_of(value: i32) -> i32 {
    (0 < value) as i32 - (value < 0) as i32
}

/// Get the sign of `a - b` without computing the difference.
pub fn sign_of_difference<T: Ord>(a: T, b: T) -> i32 {
    if a < b {
        -1
    } else if a > b {
        1
    } else {
        0
    }
}

/// Copy the sign of `sign` onto the magnitude of `magnitude`.
///
/// A zero `sign` counts as positive. Returns `None` when the result does not
/// fit in an `i32`.
pub fn copy_sign(magnitude: i32, sign: i32) -> Option<i32> {
    let magnitude = absolute_value(magnitude);
    if sign < 0 {
        0i32.checked_sub_unsigned(magnitude)
    } else {
        i32::try_from(magnitude).ok()
    }
}
