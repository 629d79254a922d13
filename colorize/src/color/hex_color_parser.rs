// Copyright (c) 2023-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! This module contains a parser that parses a hex color string into a [`RgbValue`]
//! struct. The hex color string has the format `#RRGGBB` where the leading `#` is
//! optional, eg: `#FF0000` or `ff0000` for red. Hex digits are case-insensitive.

use nom::{IResult,
          Parser,
          bytes::complete::{tag, take_while_m_n},
          combinator::{map_res, opt}};

use crate::RgbValue;

/// Parse function that generates an [`RgbValue`] struct from the start of `input`.
/// Anything after the 6 hex digits is returned as the remainder, it is up to the
/// caller to decide whether that is acceptable. [`RgbValue::try_from_hex_color`]
/// does not accept any remainder.
///
/// # Errors
///
/// Returns a [`nom::Err`] if `input` does not start with an optional `#` followed by
/// 6 hex digits.
pub fn parse_hex_color(input: &str) -> IResult<&str, RgbValue> {
    let (input, _) = opt(tag("#")).parse(input)?;
    let (input, (red, green, blue)) = (
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
        helper_fns::parse_hex_seg,
    )
        .parse(input)?;
    Ok((input, RgbValue { red, green, blue }))
}

/// Helper functions to match and parse hex digits.
mod helper_fns {
    use super::{IResult, Parser, map_res, take_while_m_n};

    /// This function is used by [`map_res`] and it returns a [Result], not [`IResult`].
    pub fn parse_str_to_hex_num(input: &str) -> Result<u8, std::num::ParseIntError> {
        u8::from_str_radix(input, 16)
    }

    /// As long as this returns `true` items will be taken from the input.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }

    /// Exactly 2 hex digits, eg: `FF`.
    pub fn parse_hex_seg(input: &str) -> IResult<&str, u8> {
        map_res(
            take_while_m_n(2, 2, match_is_hex_digit),
            parse_str_to_hex_num,
        )
        .parse(input)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn parse_valid_color() {
        let mut input = String::new();
        input.push_str("#2F14DF");
        input.push('🔅');

        let result = parse_hex_color(&input);

        let Ok((remainder, color)) = result else {
            panic!("expected a color");
        };
        assert_eq!(remainder, "🔅");
        assert_eq!(color, RgbValue::from_u8(47, 20, 223));
    }

    #[test]
    fn parse_valid_color_without_hash() {
        let result = parse_hex_color("12abAB");
        assert_eq!(result, Ok(("", RgbValue::from_u8(18, 171, 171))));
    }

    #[test]
    fn parse_invalid_color() {
        assert!(parse_hex_color("🔅#2F14DF").is_err());
        assert!(parse_hex_color("##2F14DF").is_err());
        assert!(parse_hex_color("#2F14D").is_err());
        assert!(parse_hex_color("#2F14DG").is_err());
    }
}
