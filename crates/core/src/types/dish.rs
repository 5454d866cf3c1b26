//! Dish name type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`DishName`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DishNameError {
    /// The input is empty or only whitespace.
    #[error("dish name cannot be empty")]
    Empty,
}

/// The name of a menu dish.
///
/// Dish names are the identity of a cart line: two adds with the same name
/// land on the same line. Matching is exact, so the name is stored as given
/// and never trimmed or case-folded.
///
/// ## Constraints
///
/// - Must contain at least one non-whitespace character
///
/// ## Examples
///
/// ```
/// use tandoor_core::DishName;
///
/// assert!(DishName::parse("Paneer Tikka").is_ok());
/// assert!(DishName::parse("").is_err());
/// assert!(DishName::parse("   ").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "String", into = "String")]
pub struct DishName(String);

impl DishName {
    /// Parse a `DishName` from a string.
    ///
    /// # Errors
    ///
    /// Returns [`DishNameError::Empty`] if the input is blank.
    pub fn parse(s: &str) -> Result<Self, DishNameError> {
        if s.trim().is_empty() {
            return Err(DishNameError::Empty);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the name as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `DishName` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for DishName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for DishName {
    type Err = DishNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for DishName {
    type Error = DishNameError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<DishName> for String {
    fn from(name: DishName) -> Self {
        name.0
    }
}

impl AsRef<str> for DishName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for DishName {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
