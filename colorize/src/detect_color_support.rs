// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::{env,
          sync::atomic::{AtomicI8, Ordering}};

/// # Terminal color support detection
///
/// The environment is examined once and the result is memoized, so that formatting
/// lots of strings doesn't repeatedly look up environment variables.
///
/// ```rust
/// use r3bl_colorize::global_color_support;
///
/// // Examines the environment on the first call, then returns the cached value.
/// let color_support = global_color_support::detect();
///
/// // Force re-detection if you know the environment has changed.
/// global_color_support::clear_cache();
/// ```
///
/// There is no way to override the detected value here. If you need a specific
/// [`ColorSupport`] (eg: in tests), pass it to [`crate::TextFormatter::new`] instead.
pub mod global_color_support {
    use super::{AtomicI8, ColorSupport, Ordering,
                examine_env_vars_to_determine_color_support};

    /// Memoized result of [`examine_env_vars_to_determine_color_support()`].
    static COLOR_SUPPORT_CACHED: AtomicI8 = AtomicI8::new(NOT_SET_VALUE);

    const NOT_SET_VALUE: i8 = -1;

    /// Returns the cached color support, running detection on a cache miss.
    #[must_use]
    pub fn detect() -> ColorSupport {
        if let Ok(cached) = try_get_cached() {
            return cached;
        }
        let detected = examine_env_vars_to_determine_color_support();
        set_cached(detected);
        // % is Display, ? is Debug.
        tracing::debug!(message = "🖍️ cached color support", color_support = %detected);
        detected
    }

    /// Clear the cached result, forcing re-detection on the next call to [`detect()`].
    pub fn clear_cache() { COLOR_SUPPORT_CACHED.store(NOT_SET_VALUE, Ordering::Release); }

    /// # Errors
    ///
    /// Returns `Err(())` if nothing has been cached yet.
    #[allow(clippy::result_unit_err)]
    pub fn try_get_cached() -> Result<ColorSupport, ()> {
        ColorSupport::try_from(COLOR_SUPPORT_CACHED.load(Ordering::Acquire))
    }

    fn set_cached(value: ColorSupport) {
        COLOR_SUPPORT_CACHED.store(i8::from(value), Ordering::Release);
    }
}

/// The color depth that escape sequences are generated for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::EnumIter,
)]
pub enum ColorSupport {
    /// 24-bit RGB, `ESC[38;2;R;G;Bm`.
    #[strum(serialize = "truecolor")]
    Truecolor,
    /// xterm 256-color palette, `ESC[38;5;Nm`.
    #[strum(serialize = "ansi256")]
    Ansi256,
    #[strum(serialize = "no-color")]
    NoColor,
}

impl ColorSupport {
    #[must_use]
    pub const fn is_color_supported(&self) -> bool { !matches!(self, ColorSupport::NoColor) }
}

/// The two raw signals that color support is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSupportFlags {
    pub truecolor: bool,
    pub ansi256: bool,
}

impl From<ColorSupportFlags> for ColorSupport {
    /// Truecolor takes precedence over ANSI 256 when both are set.
    fn from(flags: ColorSupportFlags) -> Self {
        match (flags.truecolor, flags.ansi256) {
            (true, _) => ColorSupport::Truecolor,
            (false, true) => ColorSupport::Ansi256,
            (false, false) => ColorSupport::NoColor,
        }
    }
}

impl ColorSupportFlags {
    /// Read the flags from `COLORTERM`, `TERM` and `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        let colorterm = env::var("COLORTERM").ok();
        let term = env::var("TERM").ok();
        let no_color = env::var("NO_COLOR").ok();
        Self::from_env_values(colorterm.as_deref(), term.as_deref(), no_color.as_deref())
    }

    /// - `truecolor`: `COLORTERM` is `truecolor` or `24bit`.
    /// - `ansi256`: `TERM` starts with `xterm` or ends with `256color`.
    /// - `NO_COLOR` set to anything other than empty or `0` clears both.
    ///
    /// More info: <https://no-color.org/>
    #[must_use]
    pub fn from_env_values(
        colorterm: Option<&str>,
        term: Option<&str>,
        no_color: Option<&str>,
    ) -> Self {
        if helpers::is_no_color(no_color) {
            return Self::default();
        }
        Self {
            truecolor: colorterm.is_some_and(helpers::check_truecolor),
            ansi256: term.is_some_and(helpers::check_256_color),
        }
    }
}

/// Determine color support from the environment variables, without any caching.
/// Prefer [`global_color_support::detect()`].
#[must_use]
pub fn examine_env_vars_to_determine_color_support() -> ColorSupport {
    let flags = ColorSupportFlags::from_env();
    tracing::debug!(message = "🔍 examined env vars for color support", flags = ?flags);
    ColorSupport::from(flags)
}

mod helpers {
    pub fn check_truecolor(colorterm: &str) -> bool {
        matches!(colorterm, "truecolor" | "24bit")
    }

    pub fn check_256_color(term: &str) -> bool {
        term.starts_with("xterm") || term.ends_with("256color")
    }

    pub fn is_no_color(no_color: Option<&str>) -> bool {
        !matches!(no_color, None | Some("" | "0"))
    }
}

/// These trait implementations allow us to use `ColorSupport` and `i8`
/// interchangeably, which is needed for the atomic cache.
mod convert_between_color_and_i8 {
    use super::ColorSupport;

    impl TryFrom<i8> for ColorSupport {
        type Error = ();

        #[rustfmt::skip]
        fn try_from(value: i8) -> Result<Self, Self::Error> {
            match value {
                1 => Ok(ColorSupport::Ansi256),
                2 => Ok(ColorSupport::Truecolor),
                3 => Ok(ColorSupport::NoColor),
                _ => Err(()),
            }
        }
    }

    impl From<ColorSupport> for i8 {
        #[rustfmt::skip]
        fn from(value: ColorSupport) -> Self {
            match value {
                ColorSupport::Ansi256   => 1,
                ColorSupport::Truecolor => 2,
                ColorSupport::NoColor   => 3,
            }
        }
    }
}
