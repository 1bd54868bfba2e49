// src/compat.rs
//! Совместимость со строковыми id (сохранённые папки, старый API формы).
//! Строки разбираются в закрытые enum'ы, дальше работает типизированный путь.

use rand::Rng;
use tracing::warn;

use crate::core::types::EncodedCode;
use crate::datamatrix::Template;
use crate::one_d::family::{BarcodeFamily, FieldValues};
use crate::one_d::generate_from_field_config;

/// Старый вход формы: `type_id` вида `code128_19_piece`.
/// Неизвестный id или непрошедшая проверка полей → `None`.
pub fn generate_from_config<R: Rng + ?Sized>(
    type_id: &str,
    values: &FieldValues,
    simulate_error: bool,
    rng: &mut R,
) -> Option<EncodedCode> {
    let family = type_id
        .parse::<BarcodeFamily>()
        .inspect_err(|err| warn!(error = %err, "тип из старого API не найден"))
        .ok()?;
    generate_from_field_config(family, values, simulate_error, rng).ok()
}

/// Шаблон `DataMatrix` по id (`type1`/`type2`), как он хранится в папках.
#[must_use]
pub fn template_by_id(id: &str) -> Option<Template> {
    id.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seeded_rng;

    #[test]
    fn known_id_generates() {
        let mut values = FieldValues::new();
        values.insert("productCode".to_owned(), "1".to_owned());
        values.insert("weight".to_owned(), "2500".to_owned());
        let out = generate_from_config("code128_16_cas", &values, false, &mut seeded_rng(3));
        assert_eq!(out.map(|c| c.code), Some("7700000100025000".to_owned()));
    }

    #[test]
    fn unknown_id_and_invalid_fields_give_none() {
        let mut rng = seeded_rng(3);
        assert!(generate_from_config("code39", &FieldValues::new(), false, &mut rng).is_none());

        let mut values = FieldValues::new();
        values.insert("productCode".to_owned(), "1234567".to_owned());
        assert!(generate_from_config("code128_16_cas", &values, false, &mut rng).is_none());
    }

    #[test]
    fn template_lookup() {
        assert_eq!(template_by_id("type2"), Some(Template::Type2));
        assert_eq!(template_by_id("тип 1"), None);
    }
}
