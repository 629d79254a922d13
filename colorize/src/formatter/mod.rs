// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Apply styles and colors to text.
//!
//! The output is assembled in this order: style codes, background code, foreground
//! code, the text, and finally [`crate::SGR_RESET`] (only if a code was prepended).
//!
//! ```text
//! ESC[1m ESC[48;2;0;0;255m ESC[38;2;255;0;0m Hello ESC[0m
//! └─┬──┘ └──────┬────────┘ └──────┬───────┘ └─┬─┘ └─┬─┘
//!  style    background        foreground     text  reset
//! ```

// Attach.
mod colorized;
mod format_options;
mod public_api;
mod text_formatter;

// Re-export.
pub use colorized::*;
pub use format_options::*;
pub use public_api::*;
pub use text_formatter::*;
