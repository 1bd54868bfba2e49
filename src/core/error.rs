//! Ошибки крейта.
//!
//! Ядро кодирования почти тотально: нецифровые символы молча вычищаются,
//! ошибкой считается только превышение ширины поля в ручной форме
//! ([`ValidationError`]). Остальные перечисления покрывают разбор строковых
//! id, пакетную генерацию, конфигурацию и экспорт истории.

use std::fmt;

use thiserror::Error;

/// Ошибки разбора строковых идентификаторов (префиксы, семейства, шаблоны, форматы).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("неизвестный префикс весового штрих-кода: '{0}'")]
    UnknownPrefix(String),

    #[error("неизвестный тип штрих-кода: '{0}'")]
    UnknownFamily(String),

    #[error("неизвестный шаблон DataMatrix: '{0}'")]
    UnknownTemplate(String),

    #[error("неизвестный формат штрих-кода: '{0}'")]
    UnknownFormat(String),
}

/// Одно поле, не уместившееся в свою ширину.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldViolation {
    /// Имя поля из конфигурации семейства (`productCode`, `weight`, ...).
    pub field: &'static str,
    /// Максимум цифр для поля.
    pub max_len: usize,
    /// Сколько цифр осталось после очистки ввода.
    pub actual_len: usize,
}

impl fmt::Display for FieldViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: максимум {} цифр (получено {})",
            self.field, self.max_len, self.actual_len
        )
    }
}

/// Ручная форма: хотя бы одно поле длиннее допустимого. Код не строится.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{family}: {}", join_violations(.violations))]
pub struct ValidationError {
    /// Строковый id семейства (`code128_19_piece`, ...).
    pub family: &'static str,
    /// Все нарушения, в порядке полей конфигурации.
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Нарушение по конкретному полю (для подсветки в форме).
    #[must_use]
    pub fn violation_for(&self, field: &str) -> Option<&FieldViolation> {
        self.violations.iter().find(|v| v.field == field)
    }
}

fn join_violations(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Ошибки пакетной генерации весовых кодов (карусель).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("не выбран ни один префикс")]
    NoPrefixes,

    #[error("не задан ни один PLU код")]
    NoPlu,

    #[error("минимальный вес {min} должен быть меньше максимального {max}")]
    InvalidWeightRange { min: u32, max: u32 },
}

/// Ошибки загрузки/проверки конфигурации.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("некорректный JSON конфигурации: {message}")]
    Parse { message: String },

    #[error("некорректный диапазон веса: min {min}, max {max}")]
    InvalidWeightRange { min: u32, max: u32 },

    #[error("некорректный диапазон скидки: min {min}, max {max}")]
    InvalidDiscountRange { min: u32, max: u32 },

    #[error("лимит истории должен быть больше нуля")]
    ZeroHistoryLimit,

    #[error("демо-список GTIN пуст")]
    EmptyDemoList,
}

/// Ошибки экспорта/импорта журнала истории.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("не удалось сериализовать историю: {message}")]
    Serialize { message: String },

    #[error("некорректный JSON истории: {message}")]
    Parse { message: String },
}
