// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Core color types and conversions.
//!
//! This module provides:
//! - **Primitive types**: [`RgbValue`] (24-bit truecolor) and [`AnsiValue`] (256-color
//!   palette)
//! - **Abstraction**: [`TransformColor`] trait for color representation conversion
//! - **Parsing**: hex color codes (eg: `#FF0000`) into [`RgbValue`]
//! - **Conversion logic**: RGB to ANSI 256 reduction, see [`convert_rgb_into_ansi256`]

// Attach.
mod ansi_value;
mod convert;
mod hex_color_parser;
mod rgb_value;
mod transform_color;

// Re-export.
pub use ansi_value::*;
pub use convert::*;
pub use hex_color_parser::*;
pub use rgb_value::*;
pub use transform_color::*;
