/// Operand classification and dispatch by operator family.
pub mod core;
/// `+` and `-`.
pub mod additive;
/// `*` and `/`.
pub mod multiplicative;
/// `^`.
pub mod power;
/// Comparisons, `and` and `or`.
pub mod logical;
