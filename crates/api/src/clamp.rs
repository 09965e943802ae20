// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clamping of raw form input before it reaches the order store.
//!
//! The store enforces limits by rejecting values; the browsing surface
//! instead coerces whatever was typed into range.

use galley_order_domain::{ItemField, ItemUpdate, MAX_COMMENT_CHARS, MAX_QUANTITY};

/// Counts the ASCII digits in `bytes` starting at `from`.
fn count_digits(bytes: &[u8], from: usize) -> usize {
    bytes
        .get(from..)
        .map_or(0, |rest| rest.iter().take_while(|b| b.is_ascii_digit()).count())
}

/// Parses the longest leading decimal number in `raw`, ignoring trailing text.
///
/// Leading whitespace is skipped and a signed `Infinity` is accepted, so
/// `"12abc"` reads as 12 and `"Infinity"` as positive infinity.
fn parse_leading_number(raw: &str) -> Option<f64> {
    let text: &str = raw.trim_start();
    let unsigned: &str = text.strip_prefix(['+', '-']).unwrap_or(text);
    if unsigned.starts_with("Infinity") {
        return Some(if text.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let bytes: &[u8] = text.as_bytes();
    let mut end: usize = text.len() - unsigned.len();
    let integer_digits: usize = count_digits(bytes, end);
    end += integer_digits;
    let mut mantissa_digits: usize = integer_digits;
    if bytes.get(end) == Some(&b'.') {
        let fraction_digits: usize = count_digits(bytes, end + 1);
        mantissa_digits += fraction_digits;
        end += 1 + fraction_digits;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exponent_end: usize = end + 1;
        if matches!(bytes.get(exponent_end), Some(b'+' | b'-')) {
            exponent_end += 1;
        }
        let exponent_digits: usize = count_digits(bytes, exponent_end);
        if exponent_digits > 0 {
            end = exponent_end + exponent_digits;
        }
    }

    text[..end].parse::<f64>().ok()
}

/// Coerces raw quantity input into `0..=MAX_QUANTITY`.
///
/// The leading number of the input is used, so trailing units are ignored.
/// Input with no leading number becomes 0, infinities clamp to the bounds,
/// and fractions are truncated.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn clamp_quantity_input(raw: &str) -> u32 {
    let parsed: f64 = parse_leading_number(raw)
        .filter(|value| !value.is_nan())
        .unwrap_or(0.0);
    parsed.clamp(0.0, f64::from(MAX_QUANTITY)).trunc() as u32
}

/// Keeps at most `MAX_COMMENT_CHARS` characters of a comment.
#[must_use]
pub fn clamp_comment_input(raw: &str) -> String {
    raw.chars().take(MAX_COMMENT_CHARS).collect()
}

/// Builds a store update from raw input, clamping it for `field`.
#[must_use]
pub fn clamp_item_input(field: ItemField, raw: &str) -> ItemUpdate {
    match field {
        ItemField::Quantity => ItemUpdate::Quantity(clamp_quantity_input(raw)),
        ItemField::ChefComment => ItemUpdate::ChefComment(clamp_comment_input(raw)),
        ItemField::ShopperComment => ItemUpdate::ShopperComment(clamp_comment_input(raw)),
    }
}
