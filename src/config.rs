//! Конфигурация генератора.
//!
//! JSON в camelCase, все поля необязательные:
//!
//! ```
//! use bargen::config::GeneratorConfig;
//!
//! let cfg = GeneratorConfig::from_json(r#"{"historyLimit": 20, "weight": {"min": 100, "max": 900}}"#)
//!     .expect("valid config");
//! assert_eq!(cfg.history_limit, 20);
//! assert_eq!(cfg.weight.fixed, 500);
//! ```

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::history::DEFAULT_HISTORY_LIMIT;

/// Вес по умолчанию, граммы.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WeightDefaults {
    pub min: u32,
    pub max: u32,
    pub fixed: u32,
}

impl Default for WeightDefaults {
    fn default() -> Self {
        Self {
            min: 150,
            max: 8000,
            fixed: 500,
        }
    }
}

/// Скидка по умолчанию, проценты.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscountDefaults {
    pub min: u32,
    pub max: u32,
    pub fixed: u32,
}

impl Default for DiscountDefaults {
    fn default() -> Self {
        Self {
            min: 5,
            max: 30,
            fixed: 0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Сколько записей держит журнал истории.
    pub history_limit: usize,
    pub weight: WeightDefaults,
    pub discount: DiscountDefaults,
    /// Зерно RNG; без него из ОС.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    /// Свой список GTIN вместо встроенного демо.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub demo_gtins: Option<Vec<String>>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            history_limit: DEFAULT_HISTORY_LIMIT,
            weight: WeightDefaults::default(),
            discount: DiscountDefaults::default(),
            seed: None,
            demo_gtins: None,
        }
    }
}

impl GeneratorConfig {
    /// Разобрать и проверить JSON.
    ///
    /// # Errors
    ///
    /// [`ConfigError::Parse`] для некорректного JSON, остальные варианты приходят
    /// из [`GeneratorConfig::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// # Errors
    ///
    /// Нулевой лимит истории, `weight.min >= weight.max`, `discount.min > discount.max`,
    /// пустой явный демо-список.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.history_limit == 0 {
            return Err(ConfigError::ZeroHistoryLimit);
        }
        if self.weight.min >= self.weight.max {
            return Err(ConfigError::InvalidWeightRange {
                min: self.weight.min,
                max: self.weight.max,
            });
        }
        if self.discount.min > self.discount.max {
            return Err(ConfigError::InvalidDiscountRange {
                min: self.discount.min,
                max: self.discount.max,
            });
        }
        if self.demo_gtins.as_ref().is_some_and(Vec::is_empty) {
            return Err(ConfigError::EmptyDemoList);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn empty_object_gives_defaults() {
        let cfg = GeneratorConfig::from_json("{}").expect("valid");
        assert_eq!(cfg, GeneratorConfig::default());
        assert_eq!(cfg.history_limit, 50);
        assert_eq!(cfg.weight, WeightDefaults { min: 150, max: 8000, fixed: 500 });
        assert_eq!(cfg.discount, DiscountDefaults { min: 5, max: 30, fixed: 0 });
    }

    #[test]
    fn camel_case_fields() {
        let cfg = GeneratorConfig::from_json(
            r#"{"historyLimit": 5, "seed": 7, "demoGtins": ["4810099003310"]}"#,
        )
        .expect("valid");
        assert_eq!(cfg.history_limit, 5);
        assert_eq!(cfg.seed, Some(7));
        assert_eq!(cfg.demo_gtins.as_deref().map(<[String]>::len), Some(1));
    }

    #[rstest]
    #[case(r#"{"historyLimit": 0}"#, ConfigError::ZeroHistoryLimit)]
    #[case(r#"{"weight": {"min": 500, "max": 500}}"#, ConfigError::InvalidWeightRange { min: 500, max: 500 })]
    #[case(r#"{"discount": {"min": 40, "max": 10}}"#, ConfigError::InvalidDiscountRange { min: 40, max: 10 })]
    #[case(r#"{"demoGtins": []}"#, ConfigError::EmptyDemoList)]
    fn invalid_configs(#[case] json: &str, #[case] expected: ConfigError) {
        assert_eq!(GeneratorConfig::from_json(json), Err(expected));
    }

    #[test]
    fn malformed_json() {
        assert!(matches!(
            GeneratorConfig::from_json("not json"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
