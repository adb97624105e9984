//! Combinator tokens joining two selectors.

use std::fmt;

/// [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
///
/// "A combinator is punctuation that represents a particular kind of
/// relationship between the selectors on either side."
///
/// Tokens are classified but never rejected. A token that is not one of the
/// standard combinators is kept as [`Combinator::Other`] and serializes back
/// to exactly the text it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    ///
    /// Token: a single space. Because `combine` pads the token with a space
    /// on each side, `div` and `span` joined this way serialize as `div   span`.
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    ///
    /// Token: `>`
    Child,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    ///
    /// Token: `+`
    NextSibling,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    ///
    /// Token: `~`
    SubsequentSibling,

    /// [§ 16.5 Column combinator](https://www.w3.org/TR/selectors-4/#the-column-combinator)
    ///
    /// Token: `||`
    Column,

    /// Any other token, stored verbatim.
    Other(String),
}

impl Combinator {
    /// Classify a combinator token. Never fails.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            " " => Self::Descendant,
            ">" => Self::Child,
            "+" => Self::NextSibling,
            "~" => Self::SubsequentSibling,
            "||" => Self::Column,
            other => Self::Other(other.to_string()),
        }
    }

    /// The token this combinator serializes to.
    #[must_use]
    pub fn token(&self) -> &str {
        match self {
            Self::Descendant => " ",
            Self::Child => ">",
            Self::NextSibling => "+",
            Self::SubsequentSibling => "~",
            Self::Column => "||",
            Self::Other(token) => token,
        }
    }

    /// Whether this is one of the combinators defined by Selectors Level 4.
    #[must_use]
    pub const fn is_standard(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for Combinator {
    fn from(token: &str) -> Self {
        Self::from_token(token)
    }
}

impl fmt::Display for Combinator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
