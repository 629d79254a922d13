// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # r3bl_colorize
//!
//! Format text for display in ANSI capable terminals using hex color codes (eg:
//! `#FF0000`) and named text styles (eg: `bold`, `underline`).
//!
//! The escape sequences that are generated depend on what the terminal supports:
//!
//! | Color support        | Foreground          | Background          |
//! | :------------------- | :------------------ | :------------------ |
//! | Truecolor (24-bit)   | `ESC[38;2;R;G;Bm`   | `ESC[48;2;R;G;Bm`   |
//! | ANSI 256 (8-bit)     | `ESC[38;5;Nm`       | `ESC[48;5;Nm`       |
//! | No color             | error, text as is   | error, text as is   |
//!
//! When only 256 colors are available, the RGB value is reduced to the closest entry
//! in the xterm 256-color palette, see [`convert_rgb_into_ansi256`].
//!
//! ## Errors never lose your text
//!
//! Every formatting function returns a [`Colorized`] which holds the text that is
//! safe to display (the formatted text on success, the original text otherwise)
//! alongside an optional [`ColorizeError`]. You can ignore the error and still print
//! something sensible.
//!
//! ```rust
//! use r3bl_colorize::{ColorSupport, FormatOptions, SGR_RESET, TextFormatter};
//!
//! let formatter = TextFormatter::new(ColorSupport::Truecolor);
//!
//! let it = formatter.format("Hello", &FormatOptions::default().fg("#FF0000").style("bold"));
//! assert!(it.is_ok());
//! assert_eq!(it.text(), format!("\x1b[1m\x1b[38;2;255;0;0mHello{SGR_RESET}"));
//!
//! // Invalid hex color code: the original text is returned along with the error.
//! let it = formatter.foreground("Hello", "#FF000H");
//! assert!(it.error().is_some());
//! assert_eq!(it.text(), "Hello");
//! ```
//!
//! ## Color support
//!
//! [`TextFormatter`] takes the [`ColorSupport`] explicitly, which is what you want in
//! tests. The free functions ([`format_text`], [`foreground_text`],
//! [`background_text`], [`style_text`], [`get_color_code`]) use
//! [`global_color_support::detect()`] which inspects the environment once and caches
//! the result.

// https://github.com/rust-lang/rust-clippy
// https://rust-lang.github.io/rust-clippy/master/index.html
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]
#![warn(rust_2018_idioms)]

// Attach.
mod ansi_escape_codes;
mod color;
mod colorize_error;
mod detect_color_support;
mod formatter;
mod generator;
mod style;

// Re-export.
pub use ansi_escape_codes::*;
pub use color::*;
pub use colorize_error::*;
pub use detect_color_support::*;
pub use formatter::*;
pub use generator::*;
pub use style::*;
