// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::str::FromStr;

use crate::SgrCode;

/// Text styles that can be requested by name, eg: `"bold"`.
///
/// Unlike colors, an unknown style name is not an error. It resolves to no code and
/// is skipped.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::EnumString,
    strum_macros::EnumIter,
    strum_macros::AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum TextStyle {
    Bold,
    Italic,
    Underline,
    Blink,
    Reverse,
    Hidden,
    Stroke,
}

impl TextStyle {
    #[rustfmt::skip]
    #[must_use]
    pub const fn sgr_code(&self) -> SgrCode {
        match self {
            TextStyle::Bold      => SgrCode::Bold,
            TextStyle::Italic    => SgrCode::Italic,
            TextStyle::Underline => SgrCode::Underline,
            TextStyle::Blink     => SgrCode::SlowBlink,
            TextStyle::Reverse   => SgrCode::Invert,
            TextStyle::Hidden    => SgrCode::Hidden,
            TextStyle::Stroke    => SgrCode::Strikethrough,
        }
    }
}

/// Look up the escape code for a style name. Names are matched exactly (lowercase).
#[must_use]
pub fn resolve_style(name: &str) -> Option<SgrCode> {
    match TextStyle::from_str(name) {
        Ok(style) => Some(style.sgr_code()),
        Err(_) => {
            tracing::trace!(message = "⏭️ skipping unknown style", name = ?name);
            None
        }
    }
}
