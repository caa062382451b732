use std::borrow::Cow;

use super::tables::DIGIT_WORDS;

/// Replace every ASCII digit with its Sinhala number word.
///
/// Digits are expanded one at a time, so "10" reads as "one zero". Text
/// without digits is returned borrowed.
pub fn expand_digits(text: &str) -> Cow<'_, str> {
    if !text.chars().any(|c| c.is_ascii_digit()) {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len() * 3);
    for ch in text.chars() {
        match DIGIT_WORDS.get(&ch) {
            Some(word) => out.push_str(word),
            None => out.push(ch),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_each_digit_in_place() {
        assert_eq!(expand_digits("5"), "පහ");
        assert_eq!(expand_digits("10"), "එකශුන්ය");
        assert_eq!(expand_digits("මට 2 ක්"), "මට දෙක ක්");
    }

    #[test]
    fn borrows_text_without_digits() {
        assert!(matches!(expand_digits("මට බඩේ"), Cow::Borrowed(_)));
        assert!(matches!(expand_digits(""), Cow::Borrowed(_)));
    }

    #[test]
    fn leaves_sinhala_archaic_numbers_alone() {
        assert_eq!(expand_digits("\u{111E1}"), "\u{111E1}");
    }
}
