//! Весовые штрих-коды для карусели (префиксы 77, 49, 22).
//!
//! В отличие от ручной формы, здесь нет проверки ширины: поля проходят через
//! [`zero_pad`], и слишком длинное значение уходит в код целиком.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::family::BarcodeFamily;
use crate::core::error::ParseError;
use crate::core::pad::zero_pad;
use crate::core::types::EncodedCode;

/// Префикс весового кода.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum WeightPrefix {
    /// CAS: 77 + PLU(6) + вес(7) + `0` = 16, Code128.
    #[serde(rename = "77")]
    Cas77,
    /// 49 + PLU(9) + скидка(2) + вес(5) + mod10 = 19, Code128.
    #[serde(rename = "49")]
    Discount49,
    /// 22 + PLU(5) + вес(5) + EAN-13 = 13.
    #[serde(rename = "22")]
    Ean22,
}

impl WeightPrefix {
    pub const ALL: [Self; 3] = [Self::Cas77, Self::Ean22, Self::Discount49];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.family().prefix()
    }

    /// Семейство с той же раскладкой полей и тем же контролем.
    #[must_use]
    pub const fn family(self) -> BarcodeFamily {
        match self {
            Self::Cas77 => BarcodeFamily::Cas77,
            Self::Discount49 => BarcodeFamily::Weight49,
            Self::Ean22 => BarcodeFamily::Ean13Weight22,
        }
    }
}

impl fmt::Display for WeightPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WeightPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| ParseError::UnknownPrefix(s.to_owned()))
    }
}

/// Код + исходные значения (для подписи в карусели, в сам код не входят).
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WeightBarcode {
    #[serde(flatten)]
    pub code: EncodedCode,
    pub prefix: WeightPrefix,
    pub plu: String,
    /// Граммы.
    pub weight: u32,
    /// Проценты; хранится только для префикса 49, у остальных `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u32>,
}

/// Собрать весовой код: префикс, поля с нулями слева, контрольная цифра
/// (`0` для 77, EAN-13 для 22, mod10 для 49).
///
/// ```
/// use bargen::one_d::weight::{generate_weight_barcode, WeightPrefix};
///
/// let bc = generate_weight_barcode(WeightPrefix::Ean22, "12345", 6789, None);
/// assert_eq!(bc.code.code, "2212345067893");
/// ```
#[must_use]
pub fn generate_weight_barcode(
    prefix: WeightPrefix,
    plu: &str,
    weight: u32,
    discount: Option<u32>,
) -> WeightBarcode {
    let family = prefix.family();

    let mut payload = String::with_capacity(family.payload_len());
    payload.push_str(family.prefix());
    for spec in family.fields() {
        let part = match spec.name {
            "productCode" => zero_pad(plu, spec.length),
            "discount" => zero_pad(&discount.unwrap_or(0), spec.length),
            _ => zero_pad(&weight, spec.length),
        };
        payload.push_str(&part);
    }

    payload.push(family.check_digit().compute(&payload));
    debug!(prefix = %prefix, code = %payload, "весовой штрих-код");

    WeightBarcode {
        code: EncodedCode::new(payload, family.format()),
        prefix,
        plu: plu.to_owned(),
        weight,
        discount: discount.filter(|_| prefix == WeightPrefix::Discount49),
    }
}
