//! CSS selector construction for the Kestrel toolkit.
//!
//! # Scope
//!
//! This crate implements:
//! - **Compound selectors** ([§ 4.2](https://www.w3.org/TR/selectors-4/#compound))
//!   - Type, ID, class, attribute, pseudo-class and pseudo-element parts
//!   - Canonical part ordering and uniqueness checks
//!
//! - **Complex selectors** ([§ 4.3](https://www.w3.org/TR/selectors-4/#complex))
//!   - Joining two selectors with a combinator token
//!
//! - **Serialization** ([§ 4.1 CSSOM](https://www.w3.org/TR/cssom-1/#serializing-selectors))
//!   - Selectors serialize to the exact text they were built from
//!
//! # Not Implemented
//!
//! - Selector parsing
//! - Matching selectors against a document
//! - Validation of fragment values (any string is accepted)

/// Error types for selector construction.
pub mod error;
/// Selector builder per [Selectors Level 4](https://www.w3.org/TR/selectors-4/).
pub mod selector;

// Re-exports for convenience
pub use error::SelectorError;
pub use selector::{
    Combinator, ComplexSelector, CompoundSelector, SelectorPart, attr, class, combine, element,
    id, pseudo_class, pseudo_element,
};
