// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! ANSI 256-color palette representation.
//!
//! Each index (0-255) maps to a specific color in the xterm palette.

use super::{RgbValue, convert::convert_ansi256_into_rgb};
use crate::TransformColor;

/// Represents a color in the ANSI 256-color palette format.
#[derive(Clone, PartialEq, Eq, Hash, Copy, Debug)]
pub struct AnsiValue {
    pub index: u8,
}

impl From<u8> for AnsiValue {
    fn from(index: u8) -> Self { Self { index } }
}

impl From<RgbValue> for AnsiValue {
    fn from(rgb: RgbValue) -> Self { rgb.as_ansi() }
}

impl From<AnsiValue> for RgbValue {
    fn from(ansi: AnsiValue) -> Self { ansi.as_rgb() }
}

impl TransformColor for AnsiValue {
    fn as_rgb(&self) -> RgbValue { convert_ansi256_into_rgb(*self) }

    fn as_ansi(&self) -> AnsiValue { *self }
}

impl AnsiValue {
    #[must_use]
    pub const fn new(color: u8) -> Self { Self { index: color } }

    /// Indices 0-15: the standard 16 terminal colors.
    #[must_use]
    pub const fn is_basic(&self) -> bool { self.index < 16 }

    /// Indices 232-255: the 24 step grayscale ramp.
    #[must_use]
    pub const fn is_grayscale_ramp(&self) -> bool { self.index >= 232 }
}
