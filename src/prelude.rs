//! Удобный импорт: `use bargen::prelude::*;`

pub use crate::api::{Generator, GeneratorBuilder};
pub use crate::batch::{DiscountMode, WeightBatchRequest, WeightItem, WeightMode};
pub use crate::config::GeneratorConfig;
pub use crate::core::error::{
    BatchError, ConfigError, FieldViolation, HistoryError, ParseError, ValidationError,
};
pub use crate::core::pad::{digits_only, pad_gtin14, zero_pad};
pub use crate::core::random::Alphabet;
pub use crate::core::types::{BarcodeFormat, EncodedCode};
pub use crate::datamatrix::{
    parse_dm_items, parse_gtin_list, DataMatrixCode, DmItem, Template, GS,
};
pub use crate::demo::{DemoGtinCursor, DEMO_GTINS};
pub use crate::history::{HistoryEntry, HistoryKind, HistoryLog};
pub use crate::one_d::code128::mod10_digit_sum;
pub use crate::one_d::ean13::{ean13_checksum, is_valid_ean13};
pub use crate::one_d::family::{BarcodeFamily, CheckDigit, FieldSpec, FieldValues};
pub use crate::one_d::weight::{WeightBarcode, WeightPrefix};
pub use crate::one_d::{generate_from_field_config, generate_simple};
