//! Field predicates shared by the catalog and the auth gate.
//!
//! All pure, all total: they answer yes/no and never fail.

/// Text that is not empty once surrounding whitespace is ignored.
pub fn non_empty(s: &str) -> bool {
    !s.trim().is_empty()
}

/// `min <= value <= max`.
pub fn in_range<T: PartialOrd>(value: T, min: T, max: T) -> bool {
    min <= value && value <= max
}

/// Non-empty text made of letters only (any script).
pub fn alphabetic(s: &str) -> bool {
    !s.is_empty() && s.chars().all(char::is_alphabetic)
}

/// A finite number strictly greater than zero.
pub fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

/// Length in characters (not bytes) within `[min, max]`.
pub fn char_len_within(s: &str, min: usize, max: usize) -> bool {
    in_range(s.chars().count(), min, max)
}
