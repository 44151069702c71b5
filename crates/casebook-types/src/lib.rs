//! Validated text primitives shared across the casebook crates.

use std::borrow::Borrow;

/// Errors that can occur when creating validated text types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TextError {
    /// The input text was empty or contained only whitespace
    #[error("Text cannot be empty")]
    Empty,
}

/// A string type that guarantees non-empty content.
///
/// This type wraps a `String` and ensures it contains at least one non-whitespace character.
/// The input is automatically trimmed of leading and trailing whitespace during construction.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NonEmptyText(String);

impl NonEmptyText {
    /// Creates a new `NonEmptyText` from the given input.
    ///
    /// The input is trimmed of leading and trailing whitespace. If the trimmed
    /// result is empty, an error is returned.
    ///
    /// # Arguments
    ///
    /// * `input` - Any type that can be converted to a string reference
    ///
    /// # Returns
    ///
    /// Returns `Ok(NonEmptyText)` if the trimmed input is non-empty,
    /// or `Err(TextError::Empty)` if it's empty or contains only whitespace.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NonEmptyText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for NonEmptyText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for NonEmptyText {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NonEmptyText {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NonEmptyText::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A normalised symptom label.
///
/// Symptoms carry no identity beyond their text: the input is trimmed and lower-cased, so
/// `" Fever "` and `"fever"` are the same symptom.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symptom(String);

impl Symptom {
    /// Normalises `input` into a symptom.
    ///
    /// # Errors
    ///
    /// Returns `TextError::Empty` if the input is empty or whitespace only.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TextError> {
        let trimmed = input.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TextError::Empty);
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symptom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Symptom {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// Ordering and hashing of `Symptom` are those of the inner string, so set lookups by `&str`
// stay consistent.
impl Borrow<str> for Symptom {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_empty_text_trims_input() {
        let text = NonEmptyText::new("  Alice Smith \n").expect("should accept padded text");
        assert_eq!(text.as_str(), "Alice Smith");
    }

    #[test]
    fn non_empty_text_rejects_whitespace() {
        assert_eq!(NonEmptyText::new("   "), Err(TextError::Empty));
        assert_eq!(NonEmptyText::new(""), Err(TextError::Empty));
    }

    #[test]
    fn symptom_is_trimmed_and_lower_cased() {
        let symptom = Symptom::new("  Shortness Of BREATH ").expect("valid symptom");
        assert_eq!(symptom.as_str(), "shortness of breath");

        let upper = Symptom::new("FEVER").expect("valid symptom");
        let lower = Symptom::new("fever").expect("valid symptom");
        assert_eq!(upper, lower);
    }

    #[test]
    fn symptom_rejects_empty_input() {
        assert_eq!(Symptom::new(" \t "), Err(TextError::Empty));
    }

    #[test]
    fn non_empty_text_deserialisation_trims_and_validates() {
        let text: NonEmptyText =
            serde_json::from_str("\" Ada Lovelace\"").expect("should deserialise");
        assert_eq!(text.as_str(), "Ada Lovelace");

        let err = serde_json::from_str::<NonEmptyText>("\"  \"").expect_err("empty should fail");
        assert!(err.to_string().contains("Text cannot be empty"));
    }
}
