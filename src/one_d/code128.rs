//! Контрольная цифра весовых кодов, печатаемых в Code 128.
//!
//! Не mod 103 самой символики (его считает рендер), а прикладная цифра внутри
//! данных: сумма всех десятичных цифр по модулю 10.

use super::digit_char;

/// Сумма цифр mod 10. Нецифровые символы пропускаются.
///
/// ```
/// use bargen::one_d::code128::mod10_digit_sum;
///
/// assert_eq!(mod10_digit_sum("12345"), 5);
/// assert_eq!(mod10_digit_sum("1a2b3"), mod10_digit_sum("123"));
/// ```
#[must_use]
pub fn mod10_digit_sum(code: &str) -> u8 {
    let sum: u32 = code.chars().filter_map(|c| c.to_digit(10)).sum();
    u8::try_from(sum % 10).unwrap_or_default()
}

/// Последний символ совпадает с mod10-цифрой всего, что перед ним.
#[must_use]
pub fn has_valid_mod10(code: &str) -> bool {
    let mut chars = code.chars();
    match chars.next_back() {
        Some(last) => last == digit_char(mod10_digit_sum(chars.as_str())),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("12345", 5)]
    #[case("A1B2C3", 6)]
    #[case("0000", 0)]
    #[case("55", 0)]
    #[case("999", 7)]
    #[case("", 0)]
    #[case("7", 7)]
    #[case("1234567890", 5)]
    fn digit_sum_cases(#[case] code: &str, #[case] expected: u8) {
        assert_eq!(mod10_digit_sum(code), expected);
    }

    #[test]
    fn interleaved_non_digits_are_ignored() {
        assert_eq!(mod10_digit_sum("1a2b3"), mod10_digit_sum("123"));
        assert_eq!(mod10_digit_sum("4-9 0/0"), mod10_digit_sum("4900"));
    }

    #[rstest]
    #[case("123455", true)]
    #[case("123456", false)]
    #[case("0", true)]
    #[case("", false)]
    fn trailing_check(#[case] code: &str, #[case] expected: bool) {
        assert_eq!(has_valid_mod10(code), expected);
    }
}
