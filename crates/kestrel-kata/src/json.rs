//! Typed JSON round trips.
//!
//! The target type plays the role of a prototype: deserialized data gains
//! the target's methods.
//!
//! ```
//! use kestrel_kata::json::{Rectangle, from_json};
//! let rect: Rectangle = from_json(r#"{ "width": 10, "height": 20 }"#)?;
//! assert!((rect.area() - 200.0).abs() < f64::EPSILON);
//! # Ok::<(), kestrel_kata::KataError>(())
//! ```

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::KataError;

/// Serialize `value` as compact JSON.
///
/// # Errors
///
/// Returns [`KataError::Json`] if `value` cannot be represented as JSON
/// (for example a map with non-string keys).
pub fn to_json<T: Serialize>(value: &T) -> Result<String, KataError> {
    Ok(serde_json::to_string(value)?)
}

/// Deserialize `json` into a `T`.
///
/// Fields not present on `T` are ignored.
///
/// # Errors
///
/// Returns [`KataError::Json`] if `json` is malformed or does not fit `T`.
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, KataError> {
    Ok(serde_json::from_str(json)?)
}

/// A width × height rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// `width * height`
    #[must_use]
    pub fn area(&self) -> f64 {
        self.width * self.height
    }
}
