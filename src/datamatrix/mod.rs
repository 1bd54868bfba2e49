//! GS1 `DataMatrix`: шаблоны маркировки.
//!
//! Публичное API:
//! - `Template`: Тип 1 (табак/вода) и Тип 2 (одежда/обувь);
//! - `generate_type1` / `generate_type2`: элементная строка с сырыми GS (0x1D);
//! - `DataMatrixCode`: результат с использованным GTIN и именем шаблона;
//! - `parse_gtin_list` / `DmItem`: библиотека GTIN для ротации.
//!
//! Отрисовка символа на стороне рендера, сюда не входит.

mod gs1;
mod library;

pub use gs1::{generate_type1, generate_type2, type1_len, type2_len, GS};
pub use library::{parse_dm_items, parse_gtin_list, DmItem, MIN_GTIN_DIGITS};

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::core::error::ParseError;

/// Шаблон `DataMatrix`.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    /// Табак/вода: короткий серийник.
    #[default]
    Type1,
    /// Одежда/обувь: длинный серийник + ключ + подпись.
    Type2,
}

impl Template {
    pub const ALL: [Self; 2] = [Self::Type1, Self::Type2];

    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Type1 => "type1",
            Self::Type2 => "type2",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Type1 => "Тип 1",
            Self::Type2 => "Тип 2",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Type1 => "Табак/Вода - короткий серийник",
            Self::Type2 => "Одежда/Обувь - длинный серийник",
        }
    }

    /// Длина готовой элементной строки.
    #[must_use]
    pub const fn code_len(self) -> usize {
        match self {
            Self::Type1 => type1_len(),
            Self::Type2 => type2_len(),
        }
    }

    /// Элементная строка по GTIN (нецифровые символы отбрасываются).
    pub fn generate<R: Rng + ?Sized>(self, gtin: &str, rng: &mut R) -> String {
        match self {
            Self::Type1 => generate_type1(gtin, rng),
            Self::Type2 => generate_type2(gtin, rng),
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Template {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.id() == s)
            .ok_or_else(|| ParseError::UnknownTemplate(s.to_owned()))
    }
}

/// Сгенерированный `DataMatrix`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct DataMatrixCode {
    /// Элементная строка с сырыми GS.
    pub code: String,
    pub template: Template,
    /// GTIN в том виде, в каком пришёл (или взят из демо-списка).
    pub gtin: String,
}

impl DataMatrixCode {
    #[inline]
    #[must_use]
    pub fn template_name(&self) -> &'static str {
        self.template.display_name()
    }

    /// Для вывода в консоль/лог: GS заменён на видимый `<GS>`.
    #[must_use]
    pub fn printable(&self) -> String {
        self.code.replace(GS, "<GS>")
    }
}
