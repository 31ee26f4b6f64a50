/// Numeric conversion helpers.
///
/// Integer to double promotion for mixed arithmetic, and the conversion of
/// declared matrix sizes to `usize`.
pub mod num;
