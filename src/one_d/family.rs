//! Пять семейств линейных кодов для ручной формы «Штрих-код».
//!
//! Каждое семейство: префикс, упорядоченные поля фиксированной ширины,
//! формат отрисовки и способ получения контрольной цифры.
//!
//! | id                  | префикс | поля                          | контроль   | длина | формат  |
//! |---------------------|---------|-------------------------------|------------|-------|---------|
//! | `code128_19_piece`  | 47      | productCode 9, discount 2, quantity 5 | mod10 | 19 | CODE128 |
//! | `code128_19_weight` | 49      | productCode 9, discount 2, weight 5   | mod10 | 19 | CODE128 |
//! | `code128_19_price`  | 44      | productCode 9, price 7        | mod10      | 19    | CODE128 |
//! | `code128_16_cas`    | 77      | productCode 6, weight 7       | всегда `0` | 16    | CODE128 |
//! | `ean13_weight`      | 22      | productCode 5, weight 5       | EAN-13     | 13    | EAN13   |

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::code128::mod10_digit_sum;
use super::digit_char;
use super::ean13::ean13_checksum;
use crate::core::error::{FieldViolation, ParseError, ValidationError};
use crate::core::pad::{digits_only, zero_pad};
use crate::core::types::BarcodeFormat;

/// Значения полей формы по имени поля. Отсутствующее поле = пустая строка.
pub type FieldValues = BTreeMap<String, String>;

/// Описание одного поля.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub length: usize,
}

const fn field(name: &'static str, label: &'static str, length: usize) -> FieldSpec {
    FieldSpec {
        name,
        label,
        length,
    }
}

const PIECE_FIELDS: [FieldSpec; 3] = [
    field("productCode", "Код товара (9)", 9),
    field("discount", "Скидка (2)", 2),
    field("quantity", "Кол-во (5)", 5),
];

const WEIGHT_FIELDS: [FieldSpec; 3] = [
    field("productCode", "Код товара (9)", 9),
    field("discount", "Скидка (2)", 2),
    field("weight", "Вес (5)", 5),
];

const PRICE_FIELDS: [FieldSpec; 2] = [
    field("productCode", "Код товара (9)", 9),
    field("price", "Цена (7)", 7),
];

const CAS_FIELDS: [FieldSpec; 2] = [
    field("productCode", "Код товара (6)", 6),
    field("weight", "Вес (7)", 7),
];

const EAN13_WEIGHT_FIELDS: [FieldSpec; 2] = [
    field("productCode", "Код товара (5)", 5),
    field("weight", "Вес (5)", 5),
];

/// Откуда берётся контрольная цифра.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CheckDigit {
    /// Фиксированная цифра (CAS: весы пересчитывают сами). Не «исправлять».
    Fixed(char),
    /// Сумма цифр mod 10.
    Mod10DigitSum,
    /// Стандартный EAN-13.
    Ean13,
}

impl CheckDigit {
    /// Контрольная цифра для `payload` (префикс + поля).
    #[must_use]
    pub fn compute(self, payload: &str) -> char {
        match self {
            Self::Fixed(c) => c,
            Self::Mod10DigitSum => digit_char(mod10_digit_sum(payload)),
            Self::Ean13 => digit_char(ean13_checksum(payload)),
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_fixed(self) -> bool {
        matches!(self, Self::Fixed(_))
    }
}

/// Семейство линейного кода. Закрытый набор вместо таблицы со строковыми ключами.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BarcodeFamily {
    /// Штучный товар, префикс 47.
    #[serde(rename = "code128_19_piece")]
    Piece47,
    /// Весовой товар со скидкой, префикс 49.
    #[serde(rename = "code128_19_weight")]
    Weight49,
    /// Товар с ценой, префикс 44.
    #[serde(rename = "code128_19_price")]
    Price44,
    /// Весы CAS, префикс 77.
    #[serde(rename = "code128_16_cas")]
    Cas77,
    /// EAN-13 весовой, префикс 22.
    #[serde(rename = "ean13_weight")]
    Ean13Weight22,
}

impl BarcodeFamily {
    pub const ALL: [Self; 5] = [
        Self::Piece47,
        Self::Weight49,
        Self::Price44,
        Self::Cas77,
        Self::Ean13Weight22,
    ];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Piece47 => "code128_19_piece",
            Self::Weight49 => "code128_19_weight",
            Self::Price44 => "code128_19_price",
            Self::Cas77 => "code128_16_cas",
            Self::Ean13Weight22 => "ean13_weight",
        }
    }

    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Piece47 => "47",
            Self::Weight49 => "49",
            Self::Price44 => "44",
            Self::Cas77 => "77",
            Self::Ean13Weight22 => "22",
        }
    }

    #[must_use]
    pub const fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Piece47 => &PIECE_FIELDS,
            Self::Weight49 => &WEIGHT_FIELDS,
            Self::Price44 => &PRICE_FIELDS,
            Self::Cas77 => &CAS_FIELDS,
            Self::Ean13Weight22 => &EAN13_WEIGHT_FIELDS,
        }
    }

    #[must_use]
    pub const fn format(self) -> BarcodeFormat {
        match self {
            Self::Ean13Weight22 => BarcodeFormat::Ean13,
            _ => BarcodeFormat::Code128,
        }
    }

    #[must_use]
    pub const fn check_digit(self) -> CheckDigit {
        match self {
            Self::Cas77 => CheckDigit::Fixed('0'),
            Self::Ean13Weight22 => CheckDigit::Ean13,
            _ => CheckDigit::Mod10DigitSum,
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Piece47 => "Штучный товар - 19 символов",
            Self::Weight49 => "Весовой товар со скидкой - 19 символов",
            Self::Price44 => "Товар с ценой - 19 символов",
            Self::Cas77 => "CAS весы - 16 символов",
            Self::Ean13Weight22 => "EAN-13 весовой - 13 символов",
        }
    }

    /// Длина без контрольной цифры.
    #[must_use]
    pub fn payload_len(self) -> usize {
        self.prefix().len() + self.fields().iter().map(|f| f.length).sum::<usize>()
    }

    /// Полная длина кода.
    #[must_use]
    pub fn total_len(self) -> usize {
        self.payload_len() + 1
    }

    /// Префикс + поля с нулями слева. Любое поле длиннее своей ширины
    /// (после очистки от нецифровых символов) даёт ошибку по всем таким полям.
    ///
    /// # Errors
    ///
    /// [`ValidationError`] со списком всех превысивших ширину полей.
    pub fn build_payload(self, values: &FieldValues) -> Result<String, ValidationError> {
        let mut payload = String::with_capacity(self.payload_len());
        payload.push_str(self.prefix());

        let mut violations = Vec::new();
        for spec in self.fields() {
            let raw = values.get(spec.name).map_or("", String::as_str);
            let digits = digits_only(raw);
            if digits.len() > spec.length {
                violations.push(FieldViolation {
                    field: spec.name,
                    max_len: spec.length,
                    actual_len: digits.len(),
                });
                continue;
            }
            payload.push_str(&zero_pad(&digits, spec.length));
        }

        if violations.is_empty() {
            Ok(payload)
        } else {
            Err(ValidationError {
                family: self.id(),
                violations,
            })
        }
    }
}

impl fmt::Display for BarcodeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BarcodeFamily {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ParseError::UnknownFamily(s.to_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn values(pairs: &[(&str, &str)]) -> FieldValues {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[rstest]
    #[case(BarcodeFamily::Piece47, 19)]
    #[case(BarcodeFamily::Weight49, 19)]
    #[case(BarcodeFamily::Price44, 19)]
    #[case(BarcodeFamily::Cas77, 16)]
    #[case(BarcodeFamily::Ean13Weight22, 13)]
    fn total_lengths(#[case] family: BarcodeFamily, #[case] len: usize) {
        assert_eq!(family.total_len(), len);
    }

    #[test]
    fn ids_round_trip_through_from_str() {
        for family in BarcodeFamily::ALL {
            assert_eq!(family.id().parse::<BarcodeFamily>(), Ok(family));
        }
        assert!("code39".parse::<BarcodeFamily>().is_err());
    }

    #[test]
    fn serde_uses_string_ids() {
        let json = serde_json::to_string(&BarcodeFamily::Cas77).expect("serialize");
        assert_eq!(json, "\"code128_16_cas\"");
        let back: BarcodeFamily = serde_json::from_str("\"ean13_weight\"").expect("parse");
        assert_eq!(back, BarcodeFamily::Ean13Weight22);
    }

    #[test]
    fn only_cas_has_fixed_digit() {
        for family in BarcodeFamily::ALL {
            assert_eq!(
                family.check_digit().is_fixed(),
                family == BarcodeFamily::Cas77
            );
        }
    }

    #[test]
    fn payload_pads_fields_in_order() {
        let payload = BarcodeFamily::Price44
            .build_payload(&values(&[("productCode", "123"), ("price", "9 990")]))
            .expect("valid");
        assert_eq!(payload, "440000001230009990");
        assert_eq!(payload.len(), BarcodeFamily::Price44.payload_len());
    }

    #[test]
    fn missing_fields_are_zero() {
        let payload = BarcodeFamily::Piece47
            .build_payload(&FieldValues::new())
            .expect("valid");
        assert_eq!(payload, "470000000000000000");
    }

    #[test]
    fn every_overlong_field_is_reported() {
        let err = BarcodeFamily::Weight49
            .build_payload(&values(&[
                ("productCode", "1234567890"),
                ("discount", "5"),
                ("weight", "123456"),
            ]))
            .expect_err("must fail");
        assert_eq!(err.family, "code128_19_weight");
        assert_eq!(
            err.violations,
            vec![
                FieldViolation {
                    field: "productCode",
                    max_len: 9,
                    actual_len: 10
                },
                FieldViolation {
                    field: "weight",
                    max_len: 5,
                    actual_len: 6
                },
            ]
        );
    }
}
