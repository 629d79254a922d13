// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Run with `cargo run --example main -- --color-support ansi256`. Set
//! `RUST_LOG=debug` to see what the library logs.

use std::str::FromStr;

use clap::Parser;
use r3bl_colorize::{ColorContext, ColorSupport, FormatOptions, RgbValue, SGR_RESET,
                    TextFormatter, TransformColor, convert_rgb_into_ansi256,
                    global_color_support};
use tracing_subscriber::EnvFilter;

/// Value of `--color-support`. `detect` reads the environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorSupportChoice {
    Detect,
    Use(ColorSupport),
}

impl FromStr for ColorSupportChoice {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "detect" => Ok(Self::Detect),
            _ => s.parse().map(Self::Use),
        }
    }
}

impl ColorSupportChoice {
    fn resolve(self) -> ColorSupport {
        match self {
            Self::Detect => global_color_support::detect(),
            Self::Use(color_support) => color_support,
        }
    }
}

#[derive(Debug, Parser)]
#[command(about = "Print text formatted with hex colors and styles")]
struct CliArgs {
    /// One of: truecolor, ansi256, no-color, detect.
    #[arg(long, short = 'c', default_value = "detect")]
    color_support: ColorSupportChoice,

    /// Text to format.
    #[arg(default_value = "Hello, world!")]
    text: String,
}

fn main() -> miette::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli_args = CliArgs::parse();
    let color_support = cli_args.color_support.resolve();
    let formatter = TextFormatter::new(color_support);
    let text = cli_args.text.as_str();

    println!("> Color support: {color_support}");

    // Foreground, background, styles.
    {
        println!("{}", formatter.foreground(text, "#FF0000"));
        println!("{}", formatter.background(text, "#0000FF"));
        println!("{}", formatter.style(text, ["bold", "underline"]));
        println!(
            "{}",
            formatter.format(
                text,
                &FormatOptions::default()
                    .fg("#FFD700")
                    .bg("#4B0082")
                    .styles(["italic", "stroke"]),
            )
        );
    }

    // Grayscale ramp.
    {
        let line: String = (0..=255u8)
            .step_by(32)
            .map(|it| format!("{it:02X}{it:02X}{it:02X}"))
            .map(|hex| formatter.background("  ", &hex).into_text())
            .collect();
        println!("{line}");

        // What each gray is reduced to in 256 color mode.
        for it in (0..=255u8).step_by(32) {
            let ansi = convert_rgb_into_ansi256(RgbValue::from_u8(it, it, it));
            let RgbValue { red, green, blue } = ansi.as_rgb();
            println!(
                "  #{it:02X}{it:02X}{it:02X} -> {index:>3} -> ({red}, {green}, {blue})",
                index = ansi.index
            );
        }
    }

    // Save a color code and reuse it.
    if let Ok(red) = formatter.color_code("#FF0000", ColorContext::Foreground) {
        println!("{red}Warning: This text is red{SGR_RESET}");
        println!("{red}\u{2665}{SGR_RESET}");
    }

    // Errors still hand back displayable text.
    {
        let it = formatter.foreground(text, "#FF000H");
        println!("{it}");
        if let Some(error) = it.error() {
            eprintln!("{:?}", miette::Report::new(error.clone()));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    use super::*;

    #[test_case("truecolor", ColorSupportChoice::Use(ColorSupport::Truecolor))]
    #[test_case("ansi256", ColorSupportChoice::Use(ColorSupport::Ansi256))]
    #[test_case("no-color", ColorSupportChoice::Use(ColorSupport::NoColor))]
    #[test_case("detect", ColorSupportChoice::Detect)]
    fn test_parse_color_support_flag(value: &str, expected: ColorSupportChoice) {
        let cli_args = CliArgs::try_parse_from(["main", "--color-support", value]);
        assert_eq!(cli_args.map(|it| it.color_support).ok(), Some(expected));
    }

    #[test]
    fn test_color_support_flag_defaults_to_detect() {
        let cli_args = CliArgs::try_parse_from(["main"]);
        assert_eq!(
            cli_args.map(|it| it.color_support).ok(),
            Some(ColorSupportChoice::Detect)
        );
    }

    #[test]
    fn test_unknown_color_support_is_rejected() {
        assert!(CliArgs::try_parse_from(["main", "-c", "sixteen"]).is_err());
    }

    #[test_case(ColorSupport::Truecolor)]
    #[test_case(ColorSupport::NoColor)]
    fn test_explicit_choice_skips_detection(color_support: ColorSupport) {
        assert_eq!(ColorSupportChoice::Use(color_support).resolve(), color_support);
    }
}
