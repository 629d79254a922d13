// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

use crate::{ColorizeError, ColorizeResult};

/// The result of formatting some text. It always holds text that is safe to display:
/// - On success, the formatted text and no error.
/// - On failure, the original, unformatted text along with the error.
///
/// This lets callers decide whether to handle the error or just print the text
/// regardless.
///
/// ```rust
/// use r3bl_colorize::{ColorSupport, TextFormatter};
///
/// let formatter = TextFormatter::new(ColorSupport::NoColor);
/// let it = formatter.foreground("Hello", "#FF0000");
///
/// // Ignore the error, the text is still usable.
/// println!("{it}");
/// assert_eq!(it.text(), "Hello");
///
/// // Or handle it.
/// assert!(it.into_result().is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Colorized {
    text: String,
    error: Option<ColorizeError>,
}

impl Colorized {
    #[must_use]
    pub fn ok(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            error: None,
        }
    }

    /// `original_text` is returned as is, since nothing could be applied to it.
    #[must_use]
    pub fn fallback(original_text: impl Into<String>, error: ColorizeError) -> Self {
        Self {
            text: original_text.into(),
            error: Some(error),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str { &self.text }

    #[must_use]
    pub fn error(&self) -> Option<&ColorizeError> { self.error.as_ref() }

    #[must_use]
    pub fn is_ok(&self) -> bool { self.error.is_none() }

    /// Drop the error (if any) and keep the displayable text.
    #[must_use]
    pub fn into_text(self) -> String { self.text }

    #[must_use]
    pub fn into_parts(self) -> (String, Option<ColorizeError>) { (self.text, self.error) }

    /// # Errors
    ///
    /// Returns the error if formatting failed, discarding the fallback text.
    pub fn into_result(self) -> ColorizeResult<String> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.text),
        }
    }
}

impl Display for Colorized {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result { write!(f, "{}", self.text) }
}

impl From<Colorized> for String {
    fn from(value: Colorized) -> Self { value.into_text() }
}
