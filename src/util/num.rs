/// Promotes an integer operand to a double.
///
/// Integers beyond `2^53` lose precision, as with any mixed integer and double
/// arithmetic.
///
/// ## Example
/// ```
/// use matlang::util::num::promote;
///
/// assert_eq!(promote(42), 42.0);
/// assert_eq!(promote(-7), -7.0);
/// ```
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn promote(value: i64) -> f64 {
    value as f64
}

/// Converts a declared matrix size to `usize`, rejecting negative values.
///
/// ## Example
/// ```
/// use matlang::util::num::to_size;
///
/// assert_eq!(to_size(3), Some(3));
/// assert_eq!(to_size(-1), None);
/// ```
#[must_use]
pub fn to_size(value: i64) -> Option<usize> {
    usize::try_from(value).ok()
}
