//! EAN-13: контрольная цифра и проверка.
//!
//! Стандартный алгоритм EAN/UPC: веса 1,3,1,3,... слева направо
//! (чётный индекс: 1, нечётный: 3), контрольная = (10 - sum mod 10) mod 10.
//! Применяется к любой длине, которую передаст вызывающий; для EAN-13 это 12 цифр.

use super::digit_char;

/// Длина полного EAN-13 вместе с контрольной цифрой.
pub const EAN13_LEN: usize = 13;

/// Контрольная цифра EAN-13. Нецифровой символ считается нулём, но позицию занимает.
///
/// ```
/// use bargen::one_d::ean13::ean13_checksum;
///
/// assert_eq!(ean13_checksum("590123412345"), 7);
/// ```
#[must_use]
pub fn ean13_checksum(code: &str) -> u8 {
    let mut sum = 0u32;
    for (i, c) in code.chars().enumerate() {
        let w = if i % 2 == 0 { 1 } else { 3 };
        sum += c.to_digit(10).unwrap_or(0) * w;
    }
    let check = (10 - (sum % 10)) % 10;
    u8::try_from(check).unwrap_or_default()
}

/// 13 цифр, последняя совпадает с контрольной по первым 12.
#[must_use]
pub fn is_valid_ean13(code: &str) -> bool {
    if code.len() != EAN13_LEN || !code.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    let (body, check) = code.split_at(EAN13_LEN - 1);
    check.starts_with(digit_char(ean13_checksum(body)))
}

/// 12 цифр → 13 с дописанной контрольной. Для остального ввода `None`.
#[must_use]
pub fn complete_ean13(body: &str) -> Option<String> {
    if body.len() != EAN13_LEN - 1 || !body.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let mut out = String::with_capacity(EAN13_LEN);
    out.push_str(body);
    out.push(digit_char(ean13_checksum(body)));
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("590123412345", 7)]
    #[case("400638133393", 1)]
    #[case("221234506789", 3)]
    #[case("000000000000", 0)]
    #[case("", 0)]
    fn checksum_cases(#[case] body: &str, #[case] expected: u8) {
        assert_eq!(ean13_checksum(body), expected);
    }

    #[test]
    fn non_digits_count_as_zero_in_place() {
        // позиция сохраняется: 'x' на нечётном месте весит 3*0
        assert_eq!(ean13_checksum("5x0123412345"), ean13_checksum("500123412345"));
    }

    #[rstest]
    #[case("5901234123457", true)]
    #[case("5901234123458", false)]
    #[case("590123412345", false)]
    #[case("59012341234a7", false)]
    fn validation(#[case] code: &str, #[case] ok: bool) {
        assert_eq!(is_valid_ean13(code), ok);
    }

    #[test]
    fn completed_code_validates() {
        for body in ["590123412345", "221234506789", "480000000001", "999999999999"] {
            let full = complete_ean13(body).expect("12 digits");
            assert!(is_valid_ean13(&full), "{full}");
            assert!(full.starts_with(body));
        }
        assert_eq!(complete_ean13("12345"), None);
        assert_eq!(complete_ean13("12345678901a"), None);
    }
}
