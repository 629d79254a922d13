// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convenience functions that use [`global_color_support::detect()`]. They are thin
//! wrappers around [`TextFormatter`] and add no behavior of their own.

use crate::{ColorContext, Colorized, ColorizeResult, FormatOptions, TextFormatter,
            global_color_support};

/// The escape sequence for `hex` in the given `color_context`, so that the same color
/// can be reused in many places. Append [`crate::SGR_RESET`] after the text.
///
/// ```rust
/// use r3bl_colorize::{ColorContext, SGR_RESET, get_color_code};
///
/// if let Ok(red) = get_color_code("#FF0000", ColorContext::Foreground) {
///     let warning = format!("{red}Warning: This text is red{SGR_RESET}");
///     println!("{warning}");
/// }
/// ```
///
/// # Errors
///
/// See [`TextFormatter::color_code`].
pub fn get_color_code(hex: &str, color_context: ColorContext) -> ColorizeResult<String> {
    TextFormatter::from_env().color_code(hex, color_context)
}

/// See [`TextFormatter::format`].
#[must_use]
pub fn format_text(text: &str, options: &FormatOptions) -> Colorized {
    TextFormatter::from_env().format(text, options)
}

/// See [`TextFormatter::foreground`].
#[must_use]
pub fn foreground_text(text: &str, hex: &str) -> Colorized {
    TextFormatter::from_env().foreground(text, hex)
}

/// See [`TextFormatter::background`].
#[must_use]
pub fn background_text(text: &str, hex: &str) -> Colorized {
    TextFormatter::from_env().background(text, hex)
}

/// See [`TextFormatter::style`].
#[must_use]
pub fn style_text<S: AsRef<str>>(
    text: &str,
    style_names: impl IntoIterator<Item = S>,
) -> String {
    TextFormatter::from_env().style(text, style_names)
}
