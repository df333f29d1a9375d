use alloc::{string::String, vec::Vec};

use quickcheck_macros::quickcheck;

use crate::{Element, Utf16Text, is_surrogate};

/// Concatenating every yielded element's units reconstructs the input
/// exactly, for arbitrary (possibly ill-formed) unit sequences.
#[quickcheck]
fn roundtrip_arbitrary_units(units: Vec<u16>) -> bool {
    let text = Utf16Text::from(units.clone());
    let mut out = Vec::new();
    for element in &text {
        out.extend_from_slice(element.units());
    }
    out == units
}

/// Without surrogates, every step yields exactly one unit and the step
/// count equals the unit count.
#[quickcheck]
fn bmp_only_one_step_per_unit(units: Vec<u16>) -> bool {
    let units: Vec<u16> = units
        .into_iter()
        .map(|u| if is_surrogate(u) { u & 0x07FF } else { u })
        .collect();
    let text = Utf16Text::from(units.clone());
    text.code_points().all(|e| e.unit_len() == 1) && text.code_points().count() == units.len()
}

/// A single scalar value is always one non-done step, then done.
#[quickcheck]
fn single_char_is_single_step(c: char) -> bool {
    let mut iter = Utf16Text::from(c).code_points();
    let first = iter.step();
    let end = iter.step();
    first.value == Some(Element::from(c)) && !first.done && end.done
}

/// Well-formed text decodes back to the original string, element by
/// element.
#[quickcheck]
fn valid_text_decodes_elementwise(s: String) -> bool {
    let text = Utf16Text::from(s.as_str());
    let decoded: String = text.code_points().map(|e| e.to_char_lossy()).collect();
    decoded == s
}

/// After the first done result, every further step is `(None, true)`.
#[quickcheck]
fn terminal_results_are_idempotent(units: Vec<u16>) -> bool {
    let mut iter = Utf16Text::from(units).code_points();
    while !iter.step().done {}
    (0..3).all(|_| {
        let result = iter.step();
        result.done && result.value.is_none()
    })
}

/// The element count always lies within the `size_hint` bounds taken
/// before iteration.
#[quickcheck]
fn size_hint_brackets_count(units: Vec<u16>) -> bool {
    let iter = Utf16Text::from(units).code_points();
    let (low, high) = iter.size_hint();
    let count = iter.count();
    low <= count && count <= high.unwrap_or(usize::MAX)
}
