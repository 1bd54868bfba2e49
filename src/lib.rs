#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Публичные модули
pub mod api;        // высокий уровень: сессия Generator (RNG, демо-курсор, история)
pub mod core;       // общие типы, ошибки, паддинг, случайные токены
pub mod prelude;    // удобные re-export'ы

pub mod one_d;      // 1D: весовые/ценовые семейства, EAN-13 и mod10
pub mod datamatrix; // GS1 `DataMatrix` шаблоны (Тип 1 / Тип 2)
pub mod demo;       // демо-список GTIN и курсор по нему
pub mod history;    // ограниченный журнал сгенерированных кодов
pub mod batch;      // пакетная генерация весовых штрих-кодов для карусели
pub mod config;     // конфигурация генератора (serde/JSON)

// Базовые типы в корень
pub use crate::core::types::{BarcodeFormat, EncodedCode};

// Слой совместимости со строковыми id (сохранённые данные, старый API форм)
mod compat;
pub use compat::*;

pub use crate::api::{Generator, GeneratorBuilder};
pub use crate::datamatrix::{DataMatrixCode, Template};
pub use crate::one_d::family::BarcodeFamily;
pub use crate::one_d::weight::{WeightBarcode, WeightPrefix};

/// One-shot без сессии: `DataMatrix` по GTIN и шаблону с OS-засеянным RNG.
/// История и демо-курсор не используются, для этого есть [`Generator`].
#[inline]
#[must_use]
pub fn encode_datamatrix(gtin: &str, template: Template) -> String {
    let mut rng = crate::core::random::os_rng();
    template.generate(gtin, &mut rng)
}

/// One-shot для ручных кодов (`SimpleGen`): дописывает контрольную цифру EAN-13 к 12 цифрам.
#[inline]
#[must_use]
pub fn encode_simple(value: &str, format: BarcodeFormat) -> EncodedCode {
    one_d::generate_simple(value, format)
}
