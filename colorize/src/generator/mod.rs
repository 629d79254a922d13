// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Convert an [`RgbValue`] into the [`SgrCode`] escape sequence that the detected
//! [`ColorSupport`] can display.
//!
//! [`ColorSupport`]: crate::ColorSupport
//! [`RgbValue`]: crate::RgbValue
//! [`SgrCode`]: crate::SgrCode

// Attach.
mod color_code;

// Re-export.
pub use color_code::*;
