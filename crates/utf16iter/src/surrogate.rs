//! UTF-16 surrogate ranges and classification.

/// First code unit of the high (leading) surrogate range.
pub const HIGH_SURROGATE_MIN: u16 = 0xD800;
/// Last code unit of the high (leading) surrogate range.
pub const HIGH_SURROGATE_MAX: u16 = 0xDBFF;
/// First code unit of the low (trailing) surrogate range.
pub const LOW_SURROGATE_MIN: u16 = 0xDC00;
/// Last code unit of the low (trailing) surrogate range.
pub const LOW_SURROGATE_MAX: u16 = 0xDFFF;

/// Returns `true` for code units in `0xD800..=0xDBFF`.
#[must_use]
pub const fn is_high_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX)
}

/// Returns `true` for code units in `0xDC00..=0xDFFF`.
#[must_use]
pub const fn is_low_surrogate(unit: u16) -> bool {
    matches!(unit, LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX)
}

/// Returns `true` for any surrogate code unit, high or low.
#[must_use]
pub const fn is_surrogate(unit: u16) -> bool {
    matches!(unit, HIGH_SURROGATE_MIN..=LOW_SURROGATE_MAX)
}

/// Combines a high/low surrogate pair into the scalar value it encodes.
///
/// Callers must have verified the ranges; out-of-range inputs produce
/// garbage, not a panic.
pub(crate) fn combine(high: u16, low: u16) -> u32 {
    let high = u32::from(high).wrapping_sub(u32::from(HIGH_SURROGATE_MIN));
    let low = u32::from(low).wrapping_sub(u32::from(LOW_SURROGATE_MIN));
    ((high << 10) | low).wrapping_add(0x1_0000)
}
