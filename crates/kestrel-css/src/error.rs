//! Errors raised while appending parts to a compound selector.

use thiserror::Error;

use crate::selector::SelectorPart;

/// A rejected append. The selector it was called on is left unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum SelectorError {
    /// An element or pseudo-element was appended to a selector that
    /// already ends with one.
    #[error("{part} may occur at most once in a compound selector")]
    DuplicatePart {
        /// The part that was appended twice.
        part: SelectorPart,
    },

    /// A part was appended after a part that must come later.
    #[error(
        "{part} cannot follow {after}: parts must appear in the order element, id, class, \
         attribute, pseudo-class, pseudo-element"
    )]
    Order {
        /// The part that was being appended.
        part: SelectorPart,
        /// The last part already present in the selector.
        after: SelectorPart,
    },
}
