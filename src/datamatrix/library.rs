//! Библиотека GTIN для ротации `DataMatrix`.
//!
//! Многострочный ввод: одна строка на товар, нецифровое вычищается, строки
//! короче [`MIN_GTIN_DIGITS`] цифр отбрасываются. Каждый GTIN помнит свой шаблон.

use serde::{Deserialize, Serialize};

use super::Template;
use crate::core::pad::digits_only;

/// Минимум цифр, чтобы строка считалась штрих-кодом (EAN-8 и длиннее).
pub const MIN_GTIN_DIGITS: usize = 8;

/// Элемент библиотеки.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DmItem {
    pub gtin: String,
    pub template: Template,
    /// Участвует ли в ротации.
    pub active: bool,
}

impl DmItem {
    /// Активный элемент.
    #[must_use]
    pub fn new(gtin: impl Into<String>, template: Template) -> Self {
        Self {
            gtin: gtin.into(),
            template,
            active: true,
        }
    }
}

/// Строки ввода → GTIN из одних цифр, не короче [`MIN_GTIN_DIGITS`].
///
/// ```
/// use bargen::datamatrix::parse_gtin_list;
///
/// assert_eq!(parse_gtin_list("4810-0990-03310\n1234567\n\n12345678"), ["4810099003310", "12345678"]);
/// ```
#[must_use]
pub fn parse_gtin_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| digits_only(line.trim()))
        .filter(|gtin| gtin.len() >= MIN_GTIN_DIGITS)
        .collect()
}

/// То же, сразу в элементы с выбранным шаблоном.
#[must_use]
pub fn parse_dm_items(text: &str, template: Template) -> Vec<DmItem> {
    parse_gtin_list(text)
        .into_iter()
        .map(|gtin| DmItem::new(gtin, template))
        .collect()
}
