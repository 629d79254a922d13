// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! More info:
//! - <https://commons.wikimedia.org/wiki/File:Xterm_256color_chart.svg>
//! - <https://www.ditig.com/256-colors-cheat-sheet>
//! - <https://en.wikipedia.org/wiki/ANSI_escape_code#8-bit>
//! - <https://en.wikipedia.org/wiki/8-bit_color>
//!
//! The xterm 256-color palette is laid out as follows:
//!
//! ```text
//! 0..=15     16 system colors
//! 16..=231   6 x 6 x 6 color cube, index = 16 + 36r + 6g + b
//! 232..=255  24 step grayscale ramp
//! ```

use super::{AnsiValue, RgbValue};

pub mod xterm_constants {
    /// Scales a 0-255 channel into the 6 levels (0-5) of the color cube. This is
    /// `255 / 5` computed in integers.
    pub const SCALING_FACTOR: f64 = 51.0;
    /// Added before rounding. Keep as is, existing output depends on it.
    pub const ROUNDING_BIAS: f64 = 0.4;
    pub const MAX_LEVEL: u8 = 5;

    pub const XTERM_BLACK: u8 = 0;
    pub const XTERM_WHITE: u8 = 15;

    pub const GRAY_OFFSET: u8 = 232;
    /// Only every 5th entry of the grayscale ramp is used.
    pub const GRAY_STEP: u8 = 5;

    pub const COLOR_CUBE_OFFSET: u8 = 16;
    pub const COLOR_CUBE_RED_FACTOR: u8 = 36;
    pub const COLOR_CUBE_GREEN_FACTOR: u8 = 6;

    /// Channel value for each of the 6 cube levels.
    pub const COLOR_CUBE_LEVELS: [u8; 6] = [0, 95, 135, 175, 215, 255];

    /// xterm defaults for the 16 system colors.
    #[rustfmt::skip]
    pub const SYSTEM_COLORS: [(u8, u8, u8); 16] = [
        (0, 0, 0),       (128, 0, 0),   (0, 128, 0),   (128, 128, 0),
        (0, 0, 128),     (128, 0, 128), (0, 128, 128), (192, 192, 192),
        (128, 128, 128), (255, 0, 0),   (0, 255, 0),   (255, 255, 0),
        (0, 0, 255),     (255, 0, 255), (0, 255, 255), (255, 255, 255),
    ];
}

/// Reduce an RGB color to the nearest index in the xterm 256-color palette. This is a
/// lossy, many to one mapping.
///
/// 1. Each channel is scaled into a level in `0..=5` using
///    `round(c / 51 + 0.4)`.
/// 2. If all three levels are equal the color is a gray: level 0 is black (index 0),
///    level 5 is white (index 15), and levels 1-4 map to `232 + (level - 1) * 5`.
/// 3. Otherwise the index is `16 + 36r + 6g + b` in the color cube.
#[must_use]
pub fn convert_rgb_into_ansi256(rgb_color: RgbValue) -> AnsiValue {
    use xterm_constants::{COLOR_CUBE_GREEN_FACTOR, COLOR_CUBE_OFFSET,
                          COLOR_CUBE_RED_FACTOR, GRAY_OFFSET, GRAY_STEP, MAX_LEVEL,
                          XTERM_BLACK, XTERM_WHITE};

    let RgbValue { red, green, blue } = rgb_color;
    let (r, g, b) = (
        channel_into_level(red),
        channel_into_level(green),
        channel_into_level(blue),
    );

    let index = if r == g && g == b {
        match r {
            0 => XTERM_BLACK,
            MAX_LEVEL => XTERM_WHITE,
            level => GRAY_OFFSET + (level - 1) * GRAY_STEP,
        }
    } else {
        COLOR_CUBE_OFFSET + COLOR_CUBE_RED_FACTOR * r + COLOR_CUBE_GREEN_FACTOR * g + b
    };

    AnsiValue::new(index)
}

/// The canonical RGB value of a palette entry.
#[must_use]
pub fn convert_ansi256_into_rgb(ansi_color: AnsiValue) -> RgbValue {
    use xterm_constants::{COLOR_CUBE_LEVELS, COLOR_CUBE_OFFSET, GRAY_OFFSET,
                          SYSTEM_COLORS};

    let index = ansi_color.index;
    if ansi_color.is_basic() {
        return SYSTEM_COLORS[usize::from(index)].into();
    }
    if ansi_color.is_grayscale_ramp() {
        let gray = 8 + 10 * (index - GRAY_OFFSET);
        return RgbValue::from_u8(gray, gray, gray);
    }
    let cube = index - COLOR_CUBE_OFFSET;
    RgbValue::from_u8(
        COLOR_CUBE_LEVELS[usize::from(cube / 36)],
        COLOR_CUBE_LEVELS[usize::from((cube / 6) % 6)],
        COLOR_CUBE_LEVELS[usize::from(cube % 6)],
    )
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn channel_into_level(channel: u8) -> u8 {
    use xterm_constants::{MAX_LEVEL, ROUNDING_BIAS, SCALING_FACTOR};
    let level = (f64::from(channel) / SCALING_FACTOR + ROUNDING_BIAS).round();
    level.clamp(0.0, f64::from(MAX_LEVEL)) as u8
}
