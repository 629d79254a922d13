// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ColorSupport, ColorizeError, ColorizeResult, RgbValue, SgrCode,
            TransformColor};

/// Whether a color applies to the text itself or to the cell behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorContext {
    Foreground,
    Background,
}

/// Generate the escape sequence for `rgb_color`.
///
/// | [`ColorSupport`] | [`ColorContext::Foreground`] | [`ColorContext::Background`] |
/// | :--------------- | :--------------------------- | :--------------------------- |
/// | `Truecolor`      | `ESC[38;2;R;G;Bm`            | `ESC[48;2;R;G;Bm`            |
/// | `Ansi256`        | `ESC[38;5;Nm`                | `ESC[48;5;Nm`                |
/// | `NoColor`        | error                        | error                        |
///
/// In `Ansi256` mode, `N` comes from [`crate::convert_rgb_into_ansi256`].
///
/// # Errors
///
/// Returns [`ColorizeError::UnsupportedTerminal`] if `color_support` is
/// [`ColorSupport::NoColor`], since no escape sequence can safely be produced.
pub fn generate_color_code(
    rgb_color: RgbValue,
    color_context: ColorContext,
    color_support: ColorSupport,
) -> ColorizeResult<SgrCode> {
    match color_support {
        ColorSupport::Truecolor => {
            let RgbValue { red, green, blue } = rgb_color;
            Ok(match color_context {
                ColorContext::Foreground => SgrCode::ForegroundRGB(red, green, blue),
                ColorContext::Background => SgrCode::BackgroundRGB(red, green, blue),
            })
        }
        ColorSupport::Ansi256 => {
            let index = rgb_color.as_ansi().index;
            Ok(match color_context {
                ColorContext::Foreground => SgrCode::ForegroundAnsi256(index),
                ColorContext::Background => SgrCode::BackgroundAnsi256(index),
            })
        }
        ColorSupport::NoColor => Err(ColorizeError::UnsupportedTerminal),
    }
}

/// Validate `hex` and generate its escape sequence.
///
/// The hex code is checked before the color support, so an invalid hex code is
/// always reported as [`ColorizeError::InvalidHex`].
///
/// # Errors
///
/// See [`RgbValue::try_from_hex_color`] and [`generate_color_code`].
pub fn generate_color_code_from_hex(
    hex: &str,
    color_context: ColorContext,
    color_support: ColorSupport,
) -> ColorizeResult<SgrCode> {
    let rgb_color = RgbValue::try_from_hex_color(hex)?;
    generate_color_code(rgb_color, color_context, color_support)
}
