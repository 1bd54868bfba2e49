//! Паддинг числовых полей.
//!
//! Две разные политики для длинного ввода:
//! - [`zero_pad`] пропускает лишние цифры как есть (без обрезки);
//! - [`pad_gtin14`] всегда отдаёт ровно 14 символов (берёт первые 14).
//!
//! Максимальную длину проверяет вызывающий (см. ручную форму в `one_d`).

use std::fmt::Display;

/// Длина GTIN в элементной строке GS1 (AI 01).
pub const GTIN_LEN: usize = 14;

/// Оставить только ASCII-цифры.
#[inline]
#[must_use]
pub fn digits_only(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

/// Убрать нецифровые символы и дополнить нулями слева до `length`.
/// Если цифр уже не меньше `length`, строка возвращается без изменений.
///
/// ```
/// use bargen::core::pad::zero_pad;
///
/// assert_eq!(zero_pad("42", 5), "00042");
/// assert_eq!(zero_pad(&1500, 7), "0001500");
/// assert_eq!(zero_pad("123456", 4), "123456");
/// ```
#[must_use]
pub fn zero_pad<T: Display + ?Sized>(value: &T, length: usize) -> String {
    let digits = digits_only(&value.to_string());
    format!("{digits:0>length$}")
}

/// GTIN-14: цифры, ведущие нули до 14, затем первые 14 символов.
///
/// ```
/// use bargen::core::pad::pad_gtin14;
///
/// assert_eq!(pad_gtin14("4810099003310"), "04810099003310");
/// assert_eq!(pad_gtin14("123456789012345678"), "12345678901234");
/// ```
#[must_use]
pub fn pad_gtin14(value: &str) -> String {
    let mut padded = zero_pad(value, GTIN_LEN);
    // только ASCII-цифры, поэтому обрезка по байтам безопасна
    padded.truncate(GTIN_LEN);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("123", "00000000000123")]
    #[case("12345678901234", "12345678901234")]
    #[case("123456789012345678", "12345678901234")]
    #[case("ABC123DEF456", "00000000123456")]
    #[case("", "00000000000000")]
    #[case("123 456 789", "00000123456789")]
    #[case("123-456-789-012", "00123456789012")]
    #[case("ABCDEF", "00000000000000")]
    fn gtin14_cases(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(pad_gtin14(input), expected);
    }

    #[rstest]
    #[case("123", 6, "000123")]
    #[case("12345", 5, "12345")]
    #[case("123456", 4, "123456")]
    #[case("ABC123", 6, "000123")]
    #[case("", 5, "00000")]
    #[case("123", 0, "123")]
    #[case("1A2B3C", 8, "00000123")]
    fn zero_pad_cases(#[case] input: &str, #[case] len: usize, #[case] expected: &str) {
        assert_eq!(zero_pad(input, len), expected);
    }

    #[test]
    fn zero_pad_accepts_numbers() {
        assert_eq!(zero_pad(&123u32, 6), "000123");
        assert_eq!(zero_pad(&0u32, 5), "00000");
    }

    #[test]
    fn gtin14_ends_with_input_digits() {
        for s in ["1", "42", "4810099003310", "00000000000001"] {
            let g = pad_gtin14(s);
            assert_eq!(g.len(), GTIN_LEN);
            assert!(g.ends_with(s), "{g} должен оканчиваться на {s}");
        }
    }

    #[test]
    fn zero_pad_length_is_max_of_width_and_digits() {
        for (s, n) in [("12a34", 3), ("x", 4), ("9876543210", 12), ("-7-", 1)] {
            let out = zero_pad(s, n);
            assert_eq!(out.len(), n.max(digits_only(s).len()));
            assert!(out.chars().all(|c| c.is_ascii_digit()));
        }
    }
}
