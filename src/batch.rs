//! Пакетная генерация весовых кодов для карусели.
//!
//! Для каждого PLU и каждой вариации вес и скидка выбираются один раз,
//! затем на каждый выбранный префикс выпускается отдельный код.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::core::error::BatchError;
use crate::core::pad::digits_only;
use crate::core::random::random_in_range;
use crate::one_d::weight::{generate_weight_barcode, WeightBarcode, WeightPrefix};

/// Вариаций на один PLU, если не задано.
pub const DEFAULT_VARIATIONS: usize = 10;

const MAX_CAPACITY_HINT: usize = 4096;

/// Как выбирается вес (граммы).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WeightMode {
    Fixed(u32),
    Random { min: u32, max: u32 },
}

/// Как выбирается скидка (проценты). Попадает только в коды с префиксом 49.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DiscountMode {
    Fixed(u32),
    /// Перевёрнутые границы меняются местами.
    Random { min: u32, max: u32 },
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WeightBatchRequest {
    /// Только цифры, без пустых (см. [`parse_plu_list`]).
    pub plu_list: Vec<String>,
    /// 0 трактуется как [`DEFAULT_VARIATIONS`].
    pub variations: usize,
    pub prefixes: Vec<WeightPrefix>,
    pub weight: WeightMode,
    pub discount: DiscountMode,
}

impl WeightBatchRequest {
    /// Запрос с умолчаниями из конфигурации: случайный вес в диапазоне,
    /// фиксированная скидка, все три префикса.
    #[must_use]
    pub fn with_defaults(plu_list: Vec<String>, config: &GeneratorConfig) -> Self {
        Self {
            plu_list,
            variations: DEFAULT_VARIATIONS,
            prefixes: WeightPrefix::ALL.to_vec(),
            weight: WeightMode::Random {
                min: config.weight.min,
                max: config.weight.max,
            },
            discount: DiscountMode::Fixed(config.discount.fixed),
        }
    }

    /// Имя папки по умолчанию: `FIX 500 PLU 123` или `RND PLU 123`.
    #[must_use]
    pub fn default_label(&self) -> String {
        let first = self.plu_list.first().map_or("", String::as_str);
        match self.weight {
            WeightMode::Fixed(w) => format!("FIX {w} PLU {first}"),
            WeightMode::Random { .. } => format!("RND PLU {first}"),
        }
    }

    fn variations(&self) -> usize {
        if self.variations == 0 {
            DEFAULT_VARIATIONS
        } else {
            self.variations
        }
    }
}

/// Элемент карусели.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct WeightItem {
    /// `{индекс PLU}_{вариация}_{префикс}`.
    pub id: String,
    #[serde(flatten)]
    pub barcode: WeightBarcode,
    /// Участвует ли в ротации.
    pub active: bool,
}

/// Многострочный ввод PLU: по одному на строку, нецифровое вычищается,
/// пустые строки пропускаются.
#[must_use]
pub fn parse_plu_list(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| digits_only(line.trim()))
        .filter(|plu| !plu.is_empty())
        .collect()
}

/// Сгенерировать все элементы запроса.
///
/// # Errors
///
/// [`BatchError::NoPrefixes`], [`BatchError::NoPlu`], либо
/// [`BatchError::InvalidWeightRange`] для случайного веса с `min >= max`.
pub fn generate_weight_batch<R: Rng + ?Sized>(
    request: &WeightBatchRequest,
    rng: &mut R,
) -> Result<Vec<WeightItem>, BatchError> {
    validate(request).inspect_err(|err| warn!(error = %err, "пакет отклонён"))?;

    let variations = request.variations();
    let mut items = Vec::with_capacity(capacity_hint(request, variations));

    for (plu_idx, plu) in request.plu_list.iter().enumerate() {
        for variation in 0..variations {
            let weight = match request.weight {
                WeightMode::Fixed(w) => w,
                WeightMode::Random { min, max } => random_in_range(min, max, rng),
            };
            let discount = match request.discount {
                DiscountMode::Fixed(d) => d,
                DiscountMode::Random { min, max } => random_in_range(min, max, rng),
            };

            for &prefix in &request.prefixes {
                let discount = (prefix == WeightPrefix::Discount49).then_some(discount);
                items.push(WeightItem {
                    id: format!("{plu_idx}_{variation}_{prefix}"),
                    barcode: generate_weight_barcode(prefix, plu, weight, discount),
                    active: true,
                });
            }
        }
    }

    debug!(count = items.len(), "пакет весовых кодов");
    Ok(items)
}

/// Предварительная ёмкость: не больше [`MAX_CAPACITY_HINT`], без переполнения.
fn capacity_hint(request: &WeightBatchRequest, variations: usize) -> usize {
    request
        .plu_list
        .len()
        .saturating_mul(variations)
        .saturating_mul(request.prefixes.len())
        .min(MAX_CAPACITY_HINT)
}

fn validate(request: &WeightBatchRequest) -> Result<(), BatchError> {
    if request.prefixes.is_empty() {
        return Err(BatchError::NoPrefixes);
    }
    if request.plu_list.is_empty() {
        return Err(BatchError::NoPlu);
    }
    if let WeightMode::Random { min, max } = request.weight {
        if min >= max {
            return Err(BatchError::InvalidWeightRange { min, max });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::random::seeded_rng;
    use rand_chacha::ChaCha8Rng;
    use rstest::{fixture, rstest};

    #[fixture]
    fn rng() -> ChaCha8Rng {
        seeded_rng(11)
    }

    fn request(plus: &[&str]) -> WeightBatchRequest {
        WeightBatchRequest {
            plu_list: plus.iter().map(|p| (*p).to_owned()).collect(),
            variations: 3,
            prefixes: vec![WeightPrefix::Cas77, WeightPrefix::Ean22, WeightPrefix::Discount49],
            weight: WeightMode::Random { min: 150, max: 8000 },
            discount: DiscountMode::Random { min: 30, max: 5 },
        }
    }

    #[test]
    fn plu_list_parsing() {
        assert_eq!(parse_plu_list("123\n\n  45-6 \nabc\n7"), ["123", "456", "7"]);
        assert!(parse_plu_list("\n \n").is_empty());
    }

    #[rstest]
    fn item_count_and_order(mut rng: ChaCha8Rng) {
        let items = generate_weight_batch(&request(&["123", "456"]), &mut rng).expect("valid");
        assert_eq!(items.len(), 2 * 3 * 3);
        let prefixes: Vec<WeightPrefix> = items.iter().take(3).map(|i| i.barcode.prefix).collect();
        assert_eq!(
            prefixes,
            [WeightPrefix::Cas77, WeightPrefix::Ean22, WeightPrefix::Discount49]
        );
        assert_eq!(items[0].id, "0_0_77");
        assert_eq!(items[17].id, "1_2_49");
        assert!(items.iter().all(|i| i.active));
    }

    #[rstest]
    fn variation_shares_weight_across_prefixes(mut rng: ChaCha8Rng) {
        let items = generate_weight_batch(&request(&["123"]), &mut rng).expect("valid");
        for chunk in items.chunks(3) {
            let w = chunk[0].barcode.weight;
            assert!((150..=8000).contains(&w));
            assert!(chunk.iter().all(|i| i.barcode.weight == w));
        }
    }

    #[rstest]
    fn discount_only_on_prefix_49(mut rng: ChaCha8Rng) {
        let items = generate_weight_batch(&request(&["123"]), &mut rng).expect("valid");
        for item in &items {
            match item.barcode.prefix {
                WeightPrefix::Discount49 => {
                    let d = item.barcode.discount.expect("discount for 49");
                    assert!((5..=30).contains(&d));
                }
                _ => assert_eq!(item.barcode.discount, None),
            }
        }
    }

    #[rstest]
    fn fixed_modes(mut rng: ChaCha8Rng) {
        let mut req = request(&["42"]);
        req.weight = WeightMode::Fixed(500);
        req.discount = DiscountMode::Fixed(7);
        req.prefixes = vec![WeightPrefix::Discount49];
        req.variations = 0;
        let items = generate_weight_batch(&req, &mut rng).expect("valid");
        assert_eq!(items.len(), DEFAULT_VARIATIONS);
        assert!(items
            .iter()
            .all(|i| i.barcode.code.code == items[0].barcode.code.code));
        assert_eq!(req.default_label(), "FIX 500 PLU 42");
    }

    #[rstest]
    fn rejections(mut rng: ChaCha8Rng) {
        let mut req = request(&["1"]);
        req.prefixes.clear();
        assert_eq!(generate_weight_batch(&req, &mut rng), Err(BatchError::NoPrefixes));

        let req = request(&[]);
        assert_eq!(generate_weight_batch(&req, &mut rng), Err(BatchError::NoPlu));

        let mut req = request(&["1"]);
        req.weight = WeightMode::Random { min: 900, max: 100 };
        assert_eq!(
            generate_weight_batch(&req, &mut rng),
            Err(BatchError::InvalidWeightRange { min: 900, max: 100 })
        );
    }

    #[rstest]
    #[case(&["1"], 10, 30)]
    #[case(&["1", "2"], usize::MAX, MAX_CAPACITY_HINT)]
    #[case(&["1", "2", "3", "4"], usize::MAX / 2, MAX_CAPACITY_HINT)]
    fn capacity_hint_is_bounded(
        #[case] plus: &[&str],
        #[case] variations: usize,
        #[case] expected: usize,
    ) {
        assert_eq!(capacity_hint(&request(plus), variations), expected);
    }

    #[test]
    fn defaults_from_config() {
        let req = WeightBatchRequest::with_defaults(vec!["5".to_owned()], &GeneratorConfig::default());
        assert_eq!(req.weight, WeightMode::Random { min: 150, max: 8000 });
        assert_eq!(req.discount, DiscountMode::Fixed(0));
        assert_eq!(req.prefixes.len(), 3);
        assert_eq!(req.default_label(), "RND PLU 5");
    }
}
