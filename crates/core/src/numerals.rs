//! Arabic-Indic rendering of numbers shown in the quiz.

const LOCAL_DIGITS: [char; 10] = ['٠', '١', '٢', '٣', '٤', '٥', '٦', '٧', '٨', '٩'];
const MINUS_SIGN: char = '\u{2212}';
const DECIMAL_SEPARATOR: char = '\u{066B}';

/// Render `value` with local digits, minus sign and decimal separator.
///
/// Characters other than ASCII digits, `-` and `.` pass through untouched.
#[must_use]
pub fn to_local_digits(value: impl std::fmt::Display) -> String {
    localize(&value.to_string())
}

/// Same mapping as [`to_local_digits`] applied to already formatted text.
#[must_use]
pub fn localize(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '-' => MINUS_SIGN,
            '.' => DECIMAL_SEPARATOR,
            '0'..='9' => LOCAL_DIGITS[usize::from(ch as u8 - b'0')],
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_every_digit() {
        assert_eq!(to_local_digits(1_234_567_890_u64), "١٢٣٤٥٦٧٨٩٠");
    }

    #[test]
    fn maps_sign_and_separator() {
        assert_eq!(to_local_digits(-12.5), "−١٢٫٥");
    }

    #[test]
    fn leaves_other_text_alone() {
        assert_eq!(localize("3/5 x"), "٣/٥ x");
        assert_eq!(localize(""), "");
    }
}
