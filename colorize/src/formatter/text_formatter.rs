// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorContext, ColorSupport, ColorSupportFlags, Colorized, ColorizeError,
            ColorizeResult, FormatOptions, SGR_RESET, generate_color_code_from_hex,
            global_color_support, resolve_style};

/// Formats text for a given [`ColorSupport`].
///
/// The color support is injected rather than read from the environment on every
/// call, so you can construct a formatter for any terminal in tests. Use
/// [`TextFormatter::from_env`] to get one for the current process.
///
/// Each call works on its own values, so a formatter can be shared across threads.
///
/// ```rust
/// use r3bl_colorize::{ColorSupport, FormatOptions, TextFormatter};
///
/// let formatter = TextFormatter::new(ColorSupport::Ansi256);
/// let it = formatter.format("Hi", &FormatOptions::default().fg("#FF0000"));
/// assert_eq!(it.text(), "\x1b[38;5;196mHi\x1b[0m");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextFormatter {
    pub color_support: ColorSupport,
}

impl From<ColorSupport> for TextFormatter {
    fn from(color_support: ColorSupport) -> Self { Self::new(color_support) }
}

impl From<ColorSupportFlags> for TextFormatter {
    fn from(flags: ColorSupportFlags) -> Self { Self::new(flags.into()) }
}

impl TextFormatter {
    #[must_use]
    pub const fn new(color_support: ColorSupport) -> Self { Self { color_support } }

    /// Uses [`global_color_support::detect()`], which is cached.
    #[must_use]
    pub fn from_env() -> Self { Self::new(global_color_support::detect()) }

    /// Apply `options` to `text`. The steps are:
    ///
    /// 1. Empty `options` is a [`ColorizeError::NoOptions`] error.
    /// 2. [`ColorSupport::NoColor`] is a [`ColorizeError::UnsupportedTerminal`] error.
    /// 3. Style codes are added in order, unknown style names are skipped.
    /// 4. The background color code is added, an invalid hex code is a
    ///    [`ColorizeError::InvalidHex`] error.
    /// 5. Same for the foreground color.
    /// 6. The text is added, followed by [`SGR_RESET`] if any code was added.
    ///
    /// All errors return the original `text` unchanged, see [`Colorized`]. If nothing
    /// could be applied (eg: all styles unknown, no colors) then `text` is returned
    /// unchanged and without an error.
    #[must_use]
    pub fn format(&self, text: &str, options: &FormatOptions) -> Colorized {
        if options.is_empty() {
            tracing::debug!(message = "🚫 no formatting options provided", text = ?text);
            return Colorized::fallback(text, ColorizeError::NoOptions);
        }

        if !self.color_support.is_color_supported() {
            tracing::debug!(
                message = "🚫 terminal has no color support",
                color_support = %self.color_support
            );
            return Colorized::fallback(text, ColorizeError::UnsupportedTerminal);
        }

        match self.try_generate_prefix(options) {
            Ok(prefix) if prefix.is_empty() => Colorized::ok(text),
            Ok(prefix) => Colorized::ok(format!("{prefix}{text}{SGR_RESET}")),
            Err(error) => Colorized::fallback(text, error),
        }
    }

    /// Color the text itself.
    #[must_use]
    pub fn foreground(&self, text: &str, hex: &str) -> Colorized {
        self.format(text, &FormatOptions::default().fg(hex))
    }

    /// Color the cells behind the text.
    #[must_use]
    pub fn background(&self, text: &str, hex: &str) -> Colorized {
        self.format(text, &FormatOptions::default().bg(hex))
    }

    /// Apply styles only. Style problems are never errors, so this returns the text
    /// directly. If the terminal has no color support, or no style name is known,
    /// `text` comes back unchanged.
    #[must_use]
    pub fn style<S: AsRef<str>>(
        &self,
        text: &str,
        style_names: impl IntoIterator<Item = S>,
    ) -> String {
        self.format(text, &FormatOptions::default().styles(style_names))
            .into_text()
    }

    /// The escape sequence for `hex` on its own, so it can be saved and reused. Append
    /// [`SGR_RESET`] after the text it applies to.
    ///
    /// # Errors
    ///
    /// [`ColorizeError::InvalidHex`] if `hex` is invalid (checked first), or
    /// [`ColorizeError::UnsupportedTerminal`] if there's no color support.
    pub fn color_code(
        &self,
        hex: &str,
        color_context: ColorContext,
    ) -> ColorizeResult<String> {
        let code = generate_color_code_from_hex(hex, color_context, self.color_support)?;
        Ok(code.to_string())
    }

    /// Styles, then background, then foreground.
    fn try_generate_prefix(&self, options: &FormatOptions) -> ColorizeResult<String> {
        let mut acc = String::new();

        for code in options.styles.iter().filter_map(|name| resolve_style(name.as_str())) {
            acc.push_str(&code.to_string());
        }

        let colors = [
            (options.requested_background(), ColorContext::Background),
            (options.requested_foreground(), ColorContext::Foreground),
        ];
        for (maybe_hex, color_context) in colors {
            if let Some(hex) = maybe_hex {
                acc.push_str(&self.color_code(hex, color_context)?);
            }
        }

        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    const TEXT: &str = "Hello, world!";

    fn options_valid() -> Vec<FormatOptions> {
        vec![
            FormatOptions::default().fg("#FF0000"),
            FormatOptions::default().bg("#0000FF"),
            FormatOptions::default().fg("#FF0000").bg("#0000FF"),
            FormatOptions::default().style("bold"),
            FormatOptions::default().fg("#FF0000").style("bold"),
            FormatOptions::default().bg("#0000FF").style("bold"),
            FormatOptions::default()
                .fg("#FF0000")
                .bg("#0000FF")
                .style("bold"),
        ]
    }

    fn options_invalid() -> Vec<FormatOptions> {
        vec![
            FormatOptions::default().fg("#FF00000"),
            FormatOptions::default().bg("#0000FF0"),
            FormatOptions::default().fg("#FF00000").bg("#0000FF0"),
            FormatOptions::default().fg("#FF00000").style("bold-italic"),
            FormatOptions::default().bg("#0000FF0").style("bold-italic"),
            FormatOptions::default()
                .fg("#FF00000")
                .bg("#0000FF0")
                .style("bold-italic"),
        ]
    }

    #[test_case(ColorSupport::Truecolor)]
    #[test_case(ColorSupport::Ansi256)]
    #[test_case(ColorSupport::NoColor)]
    fn test_no_options(color_support: ColorSupport) {
        let it = TextFormatter::new(color_support).format("", &FormatOptions::default());
        assert_eq!(it, Colorized::fallback("", ColorizeError::NoOptions));
    }

    #[test_case(ColorSupport::Truecolor)]
    #[test_case(ColorSupport::Ansi256)]
    fn test_valid_options(color_support: ColorSupport) {
        let formatter = TextFormatter::new(color_support);
        for options in options_valid() {
            let it = formatter.format(TEXT, &options);
            assert!(it.is_ok(), "{options:?} -> {it:?}");
            assert!(it.text().ends_with(&format!("{TEXT}{SGR_RESET}")));
        }
    }

    #[test_case(ColorSupport::Truecolor)]
    #[test_case(ColorSupport::Ansi256)]
    fn test_invalid_options_return_original_text(color_support: ColorSupport) {
        let formatter = TextFormatter::new(color_support);
        for options in options_invalid() {
            let it = formatter.format(TEXT, &options);
            assert_eq!(it.text(), TEXT);
            assert!(
                matches!(it.error(), Some(ColorizeError::InvalidHex { .. })),
                "{options:?} -> {it:?}"
            );
        }
    }

    #[test]
    fn test_no_color_support() {
        let formatter = TextFormatter::new(ColorSupport::NoColor);
        for options in options_valid() {
            assert_eq!(
                formatter.format(TEXT, &options),
                Colorized::fallback(TEXT, ColorizeError::UnsupportedTerminal)
            );
        }
    }

    #[test]
    fn test_truecolor_foreground() {
        let it = TextFormatter::new(ColorSupport::Truecolor).foreground(TEXT, "#FF0000");
        assert_eq!(it, Colorized::ok(format!("\x1b[38;2;255;0;0m{TEXT}\x1b[0m")));
    }

    #[test]
    fn test_ansi256_foreground() {
        let it = TextFormatter::new(ColorSupport::Ansi256).foreground(TEXT, "#FF0000");
        assert_eq!(it, Colorized::ok(format!("\x1b[38;5;196m{TEXT}\x1b[0m")));
    }

    #[test]
    fn test_background() {
        let it = TextFormatter::new(ColorSupport::Truecolor).background(TEXT, "0000ff");
        assert_eq!(it, Colorized::ok(format!("\x1b[48;2;0;0;255m{TEXT}\x1b[0m")));

        let it = TextFormatter::new(ColorSupport::Ansi256).background(TEXT, "0000ff");
        assert_eq!(it, Colorized::ok(format!("\x1b[48;5;21m{TEXT}\x1b[0m")));
    }

    #[test]
    fn test_order_is_styles_background_foreground() {
        let options = FormatOptions::default()
            .fg("#FF0000")
            .bg("#0000FF")
            .styles(["underline", "bold"]);
        let it = TextFormatter::new(ColorSupport::Truecolor).format(TEXT, &options);
        assert_eq!(
            it.text(),
            format!(
                "\x1b[4m\x1b[1m\x1b[48;2;0;0;255m\x1b[38;2;255;0;0m{TEXT}\x1b[0m"
            )
        );
    }

    #[test]
    fn test_invalid_background_short_circuits_valid_foreground() {
        let options = FormatOptions::default().fg("#FF0000").bg("#0000FG");
        let it = TextFormatter::new(ColorSupport::Truecolor).format(TEXT, &options);
        assert_eq!(
            it,
            Colorized::fallback(TEXT, ColorizeError::new_invalid_hex("#0000FG"))
        );
    }

    #[test]
    fn test_styles() {
        let formatter = TextFormatter::new(ColorSupport::Truecolor);
        for name in ["bold", "italic", "underline"] {
            assert!(formatter.style(TEXT, [name]).len() > TEXT.len());
        }
        assert_eq!(
            formatter.style(TEXT, ["bold", "italic", "underline"]),
            format!("\x1b[1m\x1b[3m\x1b[4m{TEXT}\x1b[0m")
        );
    }

    #[test_case(&["invalid-style"])]
    #[test_case(&["invalid", "bold-italic"])]
    fn test_unknown_styles_leave_text_unchanged(style_names: &[&str]) {
        let formatter = TextFormatter::new(ColorSupport::Truecolor);
        assert_eq!(formatter.style(TEXT, style_names), TEXT);

        let it = formatter.format(TEXT, &FormatOptions::default().styles(style_names));
        assert_eq!(it, Colorized::ok(TEXT));
    }

    #[test]
    fn test_unknown_styles_are_skipped_among_known() {
        let formatter = TextFormatter::new(ColorSupport::Truecolor);
        assert_eq!(
            formatter.style(TEXT, ["nope", "bold"]),
            format!("\x1b[1m{TEXT}\x1b[0m")
        );
    }

    #[test]
    fn test_color_code() {
        let truecolor = TextFormatter::new(ColorSupport::Truecolor);
        assert_eq!(
            truecolor.color_code("#FF0000", ColorContext::Foreground),
            Ok("\x1b[38;2;255;0;0m".to_string())
        );
        assert_eq!(
            truecolor.color_code("#FF00", ColorContext::Foreground),
            Err(ColorizeError::new_invalid_hex("#FF00"))
        );

        let no_color = TextFormatter::new(ColorSupport::NoColor);
        assert_eq!(
            no_color.color_code("#FF0000", ColorContext::Background),
            Err(ColorizeError::UnsupportedTerminal)
        );
    }

    #[test]
    fn test_from_flags() {
        let formatter = TextFormatter::from(ColorSupportFlags {
            truecolor: true,
            ansi256: true,
        });
        assert_eq!(formatter.color_support, ColorSupport::Truecolor);
    }
}
