//! CSS selector construction
//!
//! Builds selector text part by part per
//! [Selectors Level 4](https://www.w3.org/TR/selectors-4/), enforcing the
//! canonical part order of a compound selector.
//!
//! ```
//! use kestrel_css::selector::{combine, element, id};
//!
//! let nav = id("main").class("container")?.class("editable")?;
//! assert_eq!(nav.stringify(), "#main.container.editable");
//!
//! let list = combine(element("div"), "+", element("span"));
//! assert_eq!(list.stringify(), "div + span");
//! # Ok::<(), kestrel_css::SelectorError>(())
//! ```

mod combinator;

use std::fmt;

#[cfg(feature = "selector-trace")]
use kestrel_common::warning::warn_once;
use serde::{Serialize, Serializer};
use strum_macros::{Display, EnumIter};

use crate::error::SelectorError;

pub use combinator::Combinator;

/// Warning text for an empty fragment value, reported by `selector-trace`.
pub const EMPTY_VALUE_WARNING: &str = "empty fragment value";

/// Warning text for an unrecognized combinator token, reported by `selector-trace`.
pub const NON_STANDARD_COMBINATOR_WARNING: &str = "non-standard combinator token";

/// [§ 5 Elemental selectors](https://www.w3.org/TR/selectors-4/#elemental-selectors)
/// [§ 6 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
///
/// One kind of fragment in a compound selector.
///
/// Variants are declared in rank order, so the derived `Ord` is the order
/// in which parts must be appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
pub enum SelectorPart {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Examples: `div`, `p`, `span`
    #[strum(to_string = "element")]
    Element,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Examples: `#main`, `#nav-bar`
    #[strum(to_string = "id")]
    Id,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Examples: `.highlight`, `.btn`
    #[strum(to_string = "class")]
    Class,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Examples: `[href]`, `[src$=".png"]`
    #[strum(to_string = "attribute")]
    Attribute,

    /// [§ 4 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Examples: `:hover`, `:nth-child(2)`
    #[strum(to_string = "pseudo-class")]
    PseudoClass,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Examples: `::before`, `::placeholder`
    #[strum(to_string = "pseudo-element")]
    PseudoElement,
}

impl SelectorPart {
    /// Position of this part in the canonical order (element = 0 through
    /// pseudo-element = 5).
    #[must_use]
    pub const fn rank(self) -> u8 {
        self as u8
    }

    /// Look up a part by its rank.
    #[must_use]
    pub const fn from_rank(rank: u8) -> Option<Self> {
        match rank {
            0 => Some(Self::Element),
            1 => Some(Self::Id),
            2 => Some(Self::Class),
            3 => Some(Self::Attribute),
            4 => Some(Self::PseudoClass),
            5 => Some(Self::PseudoElement),
            _ => None,
        }
    }

    /// Element and pseudo-element may appear at most once per compound selector.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::PseudoElement)
    }

    /// Render `value` as this kind of fragment.
    ///
    /// The value is inserted verbatim; no escaping or syntax checking is done.
    #[must_use]
    pub fn format(self, value: &str) -> String {
        match self {
            Self::Element => value.to_string(),
            Self::Id => format!("#{value}"),
            Self::Class => format!(".{value}"),
            Self::Attribute => format!("[{value}]"),
            Self::PseudoClass => format!(":{value}"),
            Self::PseudoElement => format!("::{value}"),
        }
    }
}

/// [§ 4.2 Compound selectors](https://www.w3.org/TR/selectors-4/#compound)
///
/// "A compound selector is a sequence of simple selectors that are not
/// separated by a combinator."
///
/// An immutable, partially built selector. Every append returns a new
/// selector and leaves the receiver untouched, so a prefix can be reused
/// as the base for several selectors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CompoundSelector {
    /// Serialized text accumulated so far.
    text: String,
    /// Highest-ranked part appended so far, `None` while empty.
    last: Option<SelectorPart>,
}

impl CompoundSelector {
    /// An empty selector that accepts any part.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            text: String::new(),
            last: None,
        }
    }

    /// The most recently appended part.
    #[must_use]
    pub const fn last_part(&self) -> Option<SelectorPart> {
        self.last
    }

    /// Whether no part has been appended yet.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.last.is_none()
    }

    /// Append `value` as a fragment of kind `part`.
    ///
    /// # Errors
    ///
    /// Returns [`SelectorError::DuplicatePart`] if `part` is an element or
    /// pseudo-element and the selector already ends with one, and
    /// [`SelectorError::Order`] if a later-ranked part is already present.
    pub fn push(&self, part: SelectorPart, value: &str) -> Result<Self, SelectorError> {
        self.check(part)?;
        Ok(self.appended(part, value))
    }

    /// Append a type selector (`div`).
    ///
    /// # Errors
    ///
    /// Fails if the selector already has an element or any later part.
    pub fn element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Element, value)
    }

    /// Append an ID selector (`#value`).
    ///
    /// # Errors
    ///
    /// Fails if a class, attribute, pseudo-class or pseudo-element is already present.
    pub fn id(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Id, value)
    }

    /// Append a class selector (`.value`).
    ///
    /// # Errors
    ///
    /// Fails if an attribute, pseudo-class or pseudo-element is already present.
    pub fn class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Class, value)
    }

    /// Append an attribute selector (`[value]`).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-class or pseudo-element is already present.
    pub fn attr(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::Attribute, value)
    }

    /// Append a pseudo-class (`:value`).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_class(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::PseudoClass, value)
    }

    /// Append a pseudo-element (`::value`).
    ///
    /// # Errors
    ///
    /// Fails if a pseudo-element is already present.
    pub fn pseudo_element(&self, value: &str) -> Result<Self, SelectorError> {
        self.push(SelectorPart::PseudoElement, value)
    }

    /// The selector text built so far.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Borrow the selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    fn check(&self, part: SelectorPart) -> Result<(), SelectorError> {
        let Some(after) = self.last else {
            return Ok(());
        };

        if part.is_unique() && after == part {
            return Err(SelectorError::DuplicatePart { part });
        }
        if after > part {
            return Err(SelectorError::Order { part, after });
        }
        Ok(())
    }

    /// Append without checking order. Callers run `check` first unless the selector is empty.
    fn appended(&self, part: SelectorPart, value: &str) -> Self {
        let mut text = self.text.clone();
        text.push_str(&part.format(value));

        #[cfg(feature = "selector-trace")]
        {
            if value.is_empty() {
                warn_once("Selector", EMPTY_VALUE_WARNING);
            }
            eprintln!("[selector-trace] append {part} {value:?} -> {text:?}");
        }

        Self {
            text,
            last: Some(part),
        }
    }
}

/// [§ 4.3 Complex selectors](https://www.w3.org/TR/selectors-4/#complex)
///
/// "A complex selector is a chain of one or more compound selectors separated
/// by combinators."
///
/// Produced by [`combine`]. A complex selector is terminal: it has no part
/// methods, so it can only be combined further or serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ComplexSelector {
    /// Serialized text.
    text: String,
    /// Combinators from left to right.
    combinators: Vec<Combinator>,
}

impl ComplexSelector {
    /// Combinators joining the compound selectors, from left to right.
    #[must_use]
    pub fn combinators(&self) -> &[Combinator] {
        &self.combinators
    }

    /// The selector text.
    #[must_use]
    pub fn stringify(&self) -> String {
        self.text.clone()
    }

    /// Borrow the selector text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl From<CompoundSelector> for ComplexSelector {
    fn from(compound: CompoundSelector) -> Self {
        Self {
            text: compound.text,
            combinators: Vec::new(),
        }
    }
}

impl From<&CompoundSelector> for ComplexSelector {
    fn from(compound: &CompoundSelector) -> Self {
        Self::from(compound.clone())
    }
}

impl From<&ComplexSelector> for ComplexSelector {
    fn from(complex: &ComplexSelector) -> Self {
        complex.clone()
    }
}

/// Start a selector with a type selector (`div`).
#[must_use]
pub fn element(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::Element, value)
}

/// Start a selector with an ID selector (`#value`).
#[must_use]
pub fn id(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::Id, value)
}

/// Start a selector with a class selector (`.value`).
#[must_use]
pub fn class(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::Class, value)
}

/// Start a selector with an attribute selector (`[value]`).
#[must_use]
pub fn attr(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::Attribute, value)
}

/// Start a selector with a pseudo-class (`:value`).
#[must_use]
pub fn pseudo_class(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::PseudoClass, value)
}

/// Start a selector with a pseudo-element (`::value`).
#[must_use]
pub fn pseudo_element(value: &str) -> CompoundSelector {
    CompoundSelector::new().appended(SelectorPart::PseudoElement, value)
}

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// Join two selectors as `left + " " + combinator + " " + right`.
///
/// Either side may itself be the result of an earlier `combine`. The token
/// is not validated: unrecognized tokens are kept verbatim. With the
/// `selector-trace` feature they are also reported through the warning
/// system under a single fixed message; otherwise `combine` has no side
/// effects.
#[must_use]
pub fn combine(
    left: impl Into<ComplexSelector>,
    combinator: &str,
    right: impl Into<ComplexSelector>,
) -> ComplexSelector {
    let left = left.into();
    let right = right.into();
    let combinator = Combinator::from_token(combinator);

    let text = format!("{} {combinator} {}", left.text, right.text);

    #[cfg(feature = "selector-trace")]
    {
        if !combinator.is_standard() {
            warn_once("Selector", NON_STANDARD_COMBINATOR_WARNING);
        }
        eprintln!("[selector-trace] combine {combinator:?} -> {text:?}");
    }

    let mut combinators = left.combinators;
    combinators.push(combinator);
    combinators.extend(right.combinators);

    ComplexSelector { text, combinators }
}

impl fmt::Display for CompoundSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl fmt::Display for ComplexSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for CompoundSelector {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl AsRef<str> for ComplexSelector {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Serialize for CompoundSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

impl Serialize for ComplexSelector {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}
