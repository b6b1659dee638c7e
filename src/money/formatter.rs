// Canonical amount formatting
//
// Converts raw text-entry input into the canonical display form used
// everywhere else: integer digits grouped in threes with `.`, a single `,`
// before exactly two centavo digits, e.g. "1.234,50". The empty string is
// the canonical form of "nothing entered yet".
//
// normalize() is deliberately lenient and total: it is fed a live keystroke
// stream, where failing on a stray character would be worse than discarding
// it. The integer/fraction split is done on the digit text itself, never
// through floating point, so two-decimal money survives unharmed.

use super::{Amount, AmountError};

/// Reduce arbitrary input to canonical amount text.
///
/// Keeps ASCII digits and the first `,` (the decimal separator); everything
/// else, including any later commas, is discarded as a stray character. With
/// no digits left the result is `""`. A comma in the input forces a
/// two-digit centavo part (truncated, then zero-padded); without one the
/// result is a plain grouped integer, matching what was literally typed.
///
/// Idempotent: feeding the output back in returns it unchanged.
pub fn normalize(raw: &str) -> String {
    let mut integer = String::new();
    let mut fraction = String::new();
    let mut seen_comma = false;

    for ch in raw.chars() {
        match ch {
            '0'..='9' => {
                if seen_comma {
                    fraction.push(ch);
                } else {
                    integer.push(ch);
                }
            }
            ',' if !seen_comma => seen_comma = true,
            _ => {}
        }
    }

    if integer.is_empty() && fraction.is_empty() {
        return String::new();
    }

    // Leading zeros go, but the integer part never renders empty
    let trimmed = integer.trim_start_matches('0');
    let integer = if trimmed.is_empty() { "0" } else { trimmed };

    if seen_comma {
        let mut cents: String = fraction.chars().take(2).collect();
        while cents.len() < 2 {
            cents.push('0');
        }
        format!("{},{}", group_thousands(integer), cents)
    } else {
        group_thousands(integer)
    }
}

/// Insert a `.` before every block of three trailing digits that still has
/// digits to its left.
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }

    out
}

/// Parse canonical amount text into a numeric [`Amount`].
///
/// The empty string is zero. The only failure is magnitude: an integer part
/// of more than 12 digits is reported rather than wrapped, so the form can
/// reject the input.
pub fn to_number(text: &str) -> Result<Amount, AmountError> {
    // Tolerate non-canonical callers by running the text through the same
    // lenient cleanup before splitting
    let canonical = normalize(text);
    let ungrouped: String = canonical.chars().filter(|&c| c != '.').collect();
    let (unit_digits, cent_digits) = match ungrouped.split_once(',') {
        Some((left, right)) => (left, right),
        None => (ungrouped.as_str(), ""),
    };

    let unit_digits = unit_digits.trim_start_matches('0');
    if unit_digits.len() > 12 {
        return Err(AmountError::MagnitudeExceeded {
            digits: unit_digits.len(),
        });
    }

    let mut units: u64 = 0;
    for ch in unit_digits.chars() {
        units = units * 10 + u64::from(ch as u8 - b'0');
    }

    let mut cent_chars = cent_digits.chars();
    let d1 = cent_chars.next().unwrap_or('0');
    let d2 = cent_chars.next().unwrap_or('0');
    let cents = u64::from(d1 as u8 - b'0') * 10 + u64::from(d2 as u8 - b'0');

    Ok(Amount::from_units_cents(units, cents))
}

/// Render an [`Amount`] in canonical form.
///
/// Persisted values always carry their centavo part, so the comma is always
/// present here, unlike in-progress keystroke text.
pub fn from_number(value: Amount) -> String {
    format!(
        "{},{:02}",
        group_thousands(&value.units().to_string()),
        value.cents_part()
    )
}

/// Compute where the caret lands in `new_text` after `old_text` was
/// reformatted, so that it stays anchored to the same logical digit instead
/// of jumping to the end.
///
/// Counts digit-or-comma characters before the old offset and finds the
/// position just past that many counted characters in the new text; grouping
/// dots are transparent to the user's notion of "position in the number".
/// When the edit removed digits, the caret is additionally nudged left past
/// any grouping dot so it never lands just after a freshly-moved dot.
///
/// This is a UX heuristic, not a parser; its only guarantee is that the
/// returned offset is a valid character index into `new_text`.
pub fn remap_cursor(old_text: &str, new_text: &str, old_offset: usize) -> usize {
    fn counted(c: char) -> bool {
        c.is_ascii_digit() || c == ','
    }

    let anchor = old_text
        .chars()
        .take(old_offset)
        .filter(|&c| counted(c))
        .count();

    let new_len = new_text.chars().count();
    let mut pos = new_len;
    let mut seen = 0;
    for (i, ch) in new_text.chars().enumerate() {
        if counted(ch) {
            seen += 1;
            if seen > anchor {
                pos = i;
                break;
            }
        }
    }

    let old_counted = old_text.chars().filter(|&c| counted(c)).count();
    let new_counted = new_text.chars().filter(|&c| counted(c)).count();
    if new_counted < old_counted {
        let chars: Vec<char> = new_text.chars().collect();
        while pos > 0 && chars.get(pos - 1) == Some(&'.') {
            pos -= 1;
        }
    }

    pos.min(new_len)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_plain_integer() {
        // No comma typed, no forced decimal
        assert_eq!(normalize("1234"), "1.234");
        assert_eq!(normalize("12"), "12");
        assert_eq!(normalize("1234567"), "1.234.567");
    }

    #[test]
    fn test_normalize_pads_centavos() {
        assert_eq!(normalize("1234,5"), "1.234,50");
        assert_eq!(normalize("0,1"), "0,10");
        assert_eq!(normalize("5,"), "5,00");
    }

    #[test]
    fn test_normalize_truncates_excess_centavos() {
        assert_eq!(normalize("1,999"), "1,99");
    }

    #[test]
    fn test_normalize_strips_stray_characters() {
        assert_eq!(normalize("R$ 1.234,50"), "1.234,50");
        assert_eq!(normalize("a1b2c3"), "123");
        assert_eq!(normalize("abc"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_second_comma_is_stray() {
        // The later comma is a stray character, its digits join the centavos
        assert_eq!(normalize("1,2,3"), "1,23");
    }

    #[test]
    fn test_normalize_leading_zeros() {
        assert_eq!(normalize("0005"), "5");
        assert_eq!(normalize("000"), "0");
        assert_eq!(normalize(",5"), "0,50");
        assert_eq!(normalize(","), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in [
            "", "0", "1234", "1234,5", "0,1", "1.234,50", "1.000.000,00", "abc", "1,2,3",
            "000,999", "999999999999",
        ] {
            let once = normalize(raw);
            assert_eq!(normalize(&once), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_grouping_separator_count() {
        // floor((n-1)/3) dots for an n-digit integer part
        for n in 1..=15 {
            let digits = "9".repeat(n);
            let dots = normalize(&digits).matches('.').count();
            assert_eq!(dots, (n - 1) / 3, "wrong dot count for {n} digits");
        }
    }

    #[test]
    fn test_to_number() {
        assert_eq!(to_number("1.234,50"), Ok(Amount::from_units_cents(1234, 50)));
        assert_eq!(to_number("0,00"), Ok(Amount::zero()));
        assert_eq!(to_number(""), Ok(Amount::zero()));
        assert_eq!(to_number("5"), Ok(Amount::from_units_cents(5, 0)));
        assert_eq!(to_number("1.234,50").unwrap().to_f64(), 1234.50);
    }

    #[test]
    fn test_to_number_magnitude_exceeded() {
        // 13 integer digits is one too many
        let text = normalize("1000000000000");
        assert!(matches!(
            to_number(&text),
            Err(AmountError::MagnitudeExceeded { .. })
        ));
        // 12 digits is still a receipt
        let text = normalize("999999999999");
        assert_eq!(
            to_number(&text),
            Ok(Amount::from_units_cents(999_999_999_999, 0))
        );
    }

    #[test]
    fn test_from_number() {
        assert_eq!(from_number(Amount::from_units_cents(1234, 50)), "1.234,50");
        assert_eq!(from_number(Amount::zero()), "0,00");
        assert_eq!(from_number(Amount::from_units_cents(1_000_000, 0)), "1.000.000,00");
    }

    #[test]
    fn test_round_trip() {
        // Through the number and back, canonical text is stable up to
        // zero-padding of the centavo part
        for raw in ["5", "05", "1234,5", "1.234,50", "0,1", "1000000"] {
            let canonical = normalize(raw);
            let amount = to_number(&canonical).unwrap();
            let rendered = normalize(&from_number(amount));
            assert_eq!(to_number(&rendered).unwrap(), amount, "round trip moved {raw:?}");
        }
        assert_eq!(
            normalize(&from_number(to_number(&normalize("5")).unwrap())),
            normalize(&from_number(to_number(&normalize("05")).unwrap())),
        );
    }

    #[test]
    fn test_remap_cursor_append_at_end() {
        // "1234" typed, fourth digit forced a grouping dot in
        assert_eq!(remap_cursor("1234", "1.234", 4), 5);
    }

    #[test]
    fn test_remap_cursor_insert_in_middle() {
        // "1.2934" is the spliced raw text with the caret after the new '9'
        assert_eq!(remap_cursor("1.2934", "12.934", 4), 4);
        let new = "12.934";
        assert_eq!(&new[4..5], "3");
    }

    #[test]
    fn test_remap_cursor_deletion_skips_fresh_dot() {
        // Deleting a digit regroups the dots; the caret must not land just
        // after one of them
        let pos = remap_cursor("1.234.567", "123.567", 5);
        assert!(pos <= 7);
        let chars: Vec<char> = "123.567".chars().collect();
        if pos > 0 {
            assert_ne!(chars[pos - 1], '.');
        }
    }

    #[test]
    fn test_remap_cursor_always_in_bounds() {
        let samples = ["", "1", "1.234", "1.234,50", "12,00", "999.999.999"];
        for old in samples {
            for new in samples {
                for offset in 0..=old.chars().count() + 2 {
                    let pos = remap_cursor(old, new, offset);
                    assert!(
                        pos <= new.chars().count(),
                        "out of bounds: {old:?} -> {new:?} at {offset}"
                    );
                }
            }
        }
    }
}
