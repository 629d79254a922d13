// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Errors that can be produced while turning hex colors into escape sequences.
//!
//! None of these are fatal. Every function that returns one of them also hands back
//! text that is safe to display, see [`crate::Colorized`].

pub type ColorizeResult<T> = Result<T, ColorizeError>;

/// Note that an unknown style name is not an error, it is simply skipped.
///
/// | Variant                 | Cause                                              |
/// | :---------------------- | :------------------------------------------------- |
/// | [`InvalidHex`]          | Input does not match `#RRGGBB` (the `#` optional)  |
/// | [`NoOptions`]           | No color and no style was requested                |
/// | [`UnsupportedTerminal`] | Neither truecolor nor ANSI 256 colors are detected |
///
/// [`InvalidHex`]: Self::InvalidHex
/// [`NoOptions`]: Self::NoOptions
/// [`UnsupportedTerminal`]: Self::UnsupportedTerminal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, miette::Diagnostic)]
pub enum ColorizeError {
    #[error("Invalid hex color code: '{input}'")]
    #[diagnostic(
        code(r3bl_colorize::invalid_hex),
        help("Use 6 hex digits with an optional leading '#', eg: '#FF0000' or 'ff0000'")
    )]
    InvalidHex {
        /// The input exactly as it was provided.
        input: String,
    },

    #[error("No formatting options provided")]
    #[diagnostic(
        code(r3bl_colorize::no_options),
        help("Provide at least one of: background color, foreground color, style")
    )]
    NoOptions,

    #[error("Terminal supports neither true color nor 256 colors")]
    #[diagnostic(
        code(r3bl_colorize::unsupported_terminal),
        help("Set COLORTERM=truecolor or TERM=xterm-256color if your terminal supports it")
    )]
    UnsupportedTerminal,
}

impl ColorizeError {
    #[must_use]
    pub fn new_invalid_hex(input: impl Into<String>) -> Self {
        Self::InvalidHex {
            input: input.into(),
        }
    }
}
