// src/core/types.rs
//
// Общие типы результата, независимые от конкретных генераторов.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::error::ParseError;

/// Формат отрисовки линейного кода. Сама символика (наборы Code128 и т.п.)
/// на стороне рендера, сюда попадает только тег.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum BarcodeFormat {
    #[serde(rename = "CODE128")]
    Code128,
    #[serde(rename = "EAN13")]
    Ean13,
    #[serde(rename = "UPC")]
    Upc,
    #[serde(rename = "ITF14")]
    Itf14,
}

impl BarcodeFormat {
    /// Форматы, доступные для ручного ввода (`SimpleGen`).
    pub const SIMPLE: [Self; 4] = [Self::Code128, Self::Ean13, Self::Upc, Self::Itf14];

    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Code128 => "CODE128",
            Self::Ean13 => "EAN13",
            Self::Upc => "UPC",
            Self::Itf14 => "ITF14",
        }
    }
}

impl fmt::Display for BarcodeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BarcodeFormat {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::SIMPLE
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseError::UnknownFormat(s.to_owned()))
    }
}

/// Готовый код + тег формата: единственное, что уходит в слой рендера.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct EncodedCode {
    pub code: String,
    pub format: BarcodeFormat,
}

impl EncodedCode {
    #[inline]
    pub fn new(code: impl Into<String>, format: BarcodeFormat) -> Self {
        Self {
            code: code.into(),
            format,
        }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.code.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl fmt::Display for EncodedCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.format, self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("CODE128", BarcodeFormat::Code128)]
    #[case("ean13", BarcodeFormat::Ean13)]
    #[case(" UPC ", BarcodeFormat::Upc)]
    #[case("ITF14", BarcodeFormat::Itf14)]
    fn format_parses_case_insensitive(#[case] raw: &str, #[case] expected: BarcodeFormat) {
        assert_eq!(raw.parse::<BarcodeFormat>(), Ok(expected));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert_eq!(
            "QR".parse::<BarcodeFormat>(),
            Err(ParseError::UnknownFormat("QR".to_owned()))
        );
    }

    #[test]
    fn encoded_code_serializes_with_render_tag() {
        let code = EncodedCode::new("5901234123457", BarcodeFormat::Ean13);
        let json = serde_json::to_string(&code).expect("serialize");
        assert_eq!(json, r#"{"code":"5901234123457","format":"EAN13"}"#);
    }
}
