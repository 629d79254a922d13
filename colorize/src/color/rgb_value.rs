// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! RGB (24-bit truecolor) color representation.
//!
//! This is the most precise color representation supported by modern terminals.

use std::str::FromStr;

use super::{AnsiValue, convert::convert_rgb_into_ansi256, parse_hex_color};
use crate::{ColorizeError, ColorizeResult, TransformColor};

/// Represents a color in RGB (24-bit truecolor) format.
///
/// Values are [Copy] and immutable once created. Each formatting call creates its own
/// value from the hex string it is given.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct RgbValue {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl From<(u8, u8, u8)> for RgbValue {
    fn from((red, green, blue): (u8, u8, u8)) -> Self { Self::from_u8(red, green, blue) }
}

impl From<u32> for RgbValue {
    /// Takes the lower 24 bits, eg: `0x12AB34`.
    fn from(value: u32) -> Self {
        let [_, red, green, blue] = value.to_be_bytes();
        Self { red, green, blue }
    }
}

impl RgbValue {
    #[must_use]
    pub const fn from_u8(red: u8, green: u8, blue: u8) -> Self { Self { red, green, blue } }

    /// Validate and convert a hex color code (`#RRGGBB` or `RRGGBB`, case-insensitive).
    /// The whole input has to be a color, leading or trailing characters are rejected.
    ///
    /// # Errors
    ///
    /// Returns [`ColorizeError::InvalidHex`] holding the original `input` if it is not
    /// a valid hex color code.
    pub fn try_from_hex_color(input: &str) -> ColorizeResult<RgbValue> {
        match parse_hex_color(input) {
            Ok(("", color)) => Ok(color),
            _ => {
                // % is Display, ? is Debug.
                tracing::debug!(message = "🎨 rejected hex color code", input = ?input);
                Err(ColorizeError::new_invalid_hex(input))
            }
        }
    }
}

impl FromStr for RgbValue {
    type Err = ColorizeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> { Self::try_from_hex_color(s) }
}

impl TransformColor for RgbValue {
    fn as_rgb(&self) -> RgbValue { *self }

    fn as_ansi(&self) -> AnsiValue { convert_rgb_into_ansi256(*self) }
}
