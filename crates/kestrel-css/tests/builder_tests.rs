//! Integration tests for compound selector construction.

use kestrel_css::SelectorError;
use kestrel_css::selector::{
    CompoundSelector, SelectorPart, attr, class, element, id, pseudo_class, pseudo_element,
};

// Serialization
// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)

#[test]
fn test_single_parts() {
    assert_eq!(element("div").stringify(), "div");
    assert_eq!(id("main").stringify(), "#main");
    assert_eq!(class("btn").stringify(), ".btn");
    assert_eq!(attr("href").stringify(), "[href]");
    assert_eq!(pseudo_class("hover").stringify(), ":hover");
    assert_eq!(pseudo_element("before").stringify(), "::before");
}

#[test]
fn test_id_with_repeated_classes() {
    let selector = id("main")
        .class("container")
        .unwrap()
        .class("editable")
        .unwrap();
    assert_eq!(selector.stringify(), "#main.container.editable");
}

#[test]
fn test_element_attribute_pseudo_class() {
    let selector = element("a")
        .attr("href$=\".png\"")
        .unwrap()
        .pseudo_class("focus")
        .unwrap();
    assert_eq!(selector.stringify(), "a[href$=\".png\"]:focus");
}

#[test]
fn test_every_part_in_order() {
    let selector = element("li")
        .id("first")
        .unwrap()
        .class("item")
        .unwrap()
        .attr("data-x")
        .unwrap()
        .pseudo_class("hover")
        .unwrap()
        .pseudo_element("after")
        .unwrap();
    assert_eq!(selector.stringify(), "li#first.item[data-x]:hover::after");
    assert_eq!(selector.last_part(), Some(SelectorPart::PseudoElement));
}

#[test]
fn test_values_are_not_validated() {
    let selector = element("").attr("not valid css ]]").unwrap();
    assert_eq!(selector.stringify(), "[not valid css ]]]");
}

#[test]
fn test_display_and_as_ref_match_stringify() {
    let selector = element("p").class("lead").unwrap();
    assert_eq!(selector.to_string(), "p.lead");
    assert_eq!(selector.as_ref(), "p.lead");
    assert_eq!(selector.as_str(), "p.lead");
}

#[test]
fn test_serialize_as_string() {
    let selector = element("p").pseudo_class("first-child").unwrap();
    let json = serde_json::to_string(&selector).unwrap();
    assert_eq!(json, "\"p:first-child\"");
}

// Immutability

#[test]
fn test_append_leaves_receiver_untouched() {
    let base = element("div");
    let one = base.class("one").unwrap();
    let two = base.class("two").unwrap();

    assert_eq!(base.stringify(), "div");
    assert_eq!(base.last_part(), Some(SelectorPart::Element));
    assert_eq!(one.stringify(), "div.one");
    assert_eq!(two.stringify(), "div.two");
}

#[test]
fn test_failed_append_leaves_receiver_usable() {
    let base = id("x");
    assert!(base.element("y").is_err());
    assert_eq!(base.class("ok").unwrap().stringify(), "#x.ok");
}

#[test]
fn test_empty_selector() {
    let empty = CompoundSelector::new();
    assert!(empty.is_empty());
    assert_eq!(empty.stringify(), "");
    assert_eq!(empty.last_part(), None);

    let selector = empty.pseudo_element("marker").unwrap();
    assert!(!selector.is_empty());
    assert_eq!(selector.stringify(), "::marker");
}

// Errors

#[test]
fn test_duplicate_element() {
    let err = element("div").element("span").unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            part: SelectorPart::Element
        }
    );
}

#[test]
fn test_duplicate_pseudo_element() {
    let err = pseudo_element("before")
        .pseudo_element("after")
        .unwrap_err();
    assert_eq!(
        err,
        SelectorError::DuplicatePart {
            part: SelectorPart::PseudoElement
        }
    );
}

#[test]
fn test_order_element_after_id() {
    let err = id("x").element("y").unwrap_err();
    assert_eq!(
        err,
        SelectorError::Order {
            part: SelectorPart::Element,
            after: SelectorPart::Id
        }
    );
}

#[test]
fn test_order_class_after_pseudo_class() {
    let err = element("a")
        .pseudo_class("hover")
        .unwrap()
        .class("active")
        .unwrap_err();
    assert!(matches!(
        err,
        SelectorError::Order {
            part: SelectorPart::Class,
            after: SelectorPart::PseudoClass
        }
    ));
}

#[test]
fn test_order_anything_after_pseudo_element() {
    let selector = pseudo_element("after");
    assert!(matches!(
        selector.pseudo_class("hover"),
        Err(SelectorError::Order { .. })
    ));
    assert!(matches!(selector.attr("x"), Err(SelectorError::Order { .. })));
    assert!(matches!(selector.id("x"), Err(SelectorError::Order { .. })));
}

#[test]
fn test_error_messages() {
    let duplicate = element("div").element("span").unwrap_err();
    assert_eq!(
        duplicate.to_string(),
        "element may occur at most once in a compound selector"
    );

    let order = class("x").id("y").unwrap_err();
    assert!(order.to_string().starts_with("id cannot follow class"));
}

// Parts

#[test]
fn test_part_ranks() {
    assert_eq!(SelectorPart::Element.rank(), 0);
    assert_eq!(SelectorPart::PseudoElement.rank(), 5);
    assert_eq!(SelectorPart::from_rank(3), Some(SelectorPart::Attribute));
    assert_eq!(SelectorPart::from_rank(6), None);
    assert!(SelectorPart::Id < SelectorPart::Class);
}

#[test]
fn test_part_uniqueness() {
    assert!(SelectorPart::Element.is_unique());
    assert!(SelectorPart::PseudoElement.is_unique());
    assert!(!SelectorPart::Id.is_unique());
    assert!(!SelectorPart::Class.is_unique());
    assert!(!SelectorPart::Attribute.is_unique());
    assert!(!SelectorPart::PseudoClass.is_unique());
}

#[test]
fn test_part_display() {
    assert_eq!(SelectorPart::PseudoClass.to_string(), "pseudo-class");
    assert_eq!(SelectorPart::Attribute.to_string(), "attribute");
}
