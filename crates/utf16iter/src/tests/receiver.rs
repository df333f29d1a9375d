use alloc::string::{String, ToString};

use crate::{CodePointIter, Element, ResultFactory, next_on, next_on_with};

#[test]
fn valid_receiver_steps() {
    let mut iter = CodePointIter::new("ok");
    let result = next_on(&mut iter).unwrap();
    assert_eq!(result.value, Some(Element::Unit(0x6F)));
    assert!(!result.done);
}

#[test]
fn foreign_receiver_is_rejected() {
    let mut receiver = String::from("never went through the factory");
    let err = next_on(&mut receiver).unwrap_err();
    assert_eq!(err.method(), "String Iterator.prototype.next");
    assert_eq!(
        err.to_string(),
        "incompatible method receiver: String Iterator.prototype.next"
    );
}

#[test]
fn rejected_receiver_is_untouched() {
    let mut receiver = 5_u32;
    assert!(next_on(&mut receiver).is_err());
    assert_eq!(receiver, 5);
}

struct CharFactory;

impl ResultFactory for CharFactory {
    type Result = Option<char>;

    fn build(&self, value: Option<Element>, _done: bool) -> Option<char> {
        value.map(|e| e.to_char_lossy())
    }
}

#[test]
fn factory_variant_uses_caller_factory() {
    let mut iter = CodePointIter::new("x");
    assert_eq!(next_on_with(&mut iter, &CharFactory).unwrap(), Some('x'));
    assert_eq!(next_on_with(&mut iter, &CharFactory).unwrap(), None);

    let mut receiver = 0_i64;
    assert!(next_on_with(&mut receiver, &CharFactory).is_err());
}

#[test]
fn type_tag_in_debug_output() {
    let iter = CodePointIter::new("a");
    assert_eq!(CodePointIter::TYPE_TAG, "String Iterator");
    assert!(alloc::format!("{iter:?}").contains("String Iterator"));
}
