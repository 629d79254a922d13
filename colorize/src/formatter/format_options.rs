// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallstr::SmallString;
use smallvec::SmallVec;

pub mod sizing {
    use super::{SmallString, SmallVec};

    /// Large enough for `#RRGGBB` and every style name, so these never spill to the
    /// heap.
    pub const DEFAULT_STRING_STORAGE_SIZE: usize = 16;
    pub type InlineString = SmallString<[u8; DEFAULT_STRING_STORAGE_SIZE]>;

    /// There are 7 styles, duplicates are allowed but unusual.
    pub const MAX_STYLE_NAMES_SIZE: usize = 8;
    pub type InlineVecStyleNames = SmallVec<[InlineString; MAX_STYLE_NAMES_SIZE]>;
}
use sizing::{InlineString, InlineVecStyleNames};

/// What to apply to a piece of text. At least one field has to be populated,
/// otherwise [`crate::TextFormatter::format`] reports
/// [`crate::ColorizeError::NoOptions`].
///
/// An empty string for `background` or `foreground` is treated the same as `None`.
///
/// ```rust
/// use r3bl_colorize::FormatOptions;
///
/// let options = FormatOptions::default()
///     .bg("#0000FF")
///     .fg("#FF0000")
///     .styles(["bold", "underline"]);
/// assert!(!options.is_empty());
/// assert!(FormatOptions::default().is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Hex color code, eg: `#0000FF`.
    pub background: Option<InlineString>,
    /// Hex color code, eg: `#FF0000`.
    pub foreground: Option<InlineString>,
    /// Style names applied in order, eg: `bold`. Unknown names are skipped.
    pub styles: InlineVecStyleNames,
}

impl FormatOptions {
    #[must_use]
    pub fn bg(mut self, hex: &str) -> Self {
        self.background = Some(hex.into());
        self
    }

    #[must_use]
    pub fn fg(mut self, hex: &str) -> Self {
        self.foreground = Some(hex.into());
        self
    }

    #[must_use]
    pub fn style(mut self, name: &str) -> Self {
        self.styles.push(name.into());
        self
    }

    #[must_use]
    pub fn styles<S: AsRef<str>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.styles
            .extend(names.into_iter().map(|it| InlineString::from(it.as_ref())));
        self
    }

    /// The background hex code, if one was requested.
    #[must_use]
    pub fn requested_background(&self) -> Option<&str> {
        self.background.as_deref().filter(|it| !it.is_empty())
    }

    /// The foreground hex code, if one was requested.
    #[must_use]
    pub fn requested_foreground(&self) -> Option<&str> {
        self.foreground.as_deref().filter(|it| !it.is_empty())
    }

    /// `true` when no color and no style has been requested.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.requested_background().is_none()
            && self.requested_foreground().is_none()
            && self.styles.is_empty()
    }
}
