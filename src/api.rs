// src/api.rs
//
// Верхнеуровневый API: сессия генерации. Кодировщики в `one_d`/`datamatrix`
// остаются чистыми функциями; всё изменяемое (RNG, курсор демо-GTIN, журнал)
// принадлежит `Generator`.

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::batch::{generate_weight_batch, WeightBatchRequest, WeightItem};
use crate::config::GeneratorConfig;
use crate::core::error::{BatchError, ConfigError, ValidationError};
use crate::core::random::{os_rng, seeded_rng};
use crate::core::types::{BarcodeFormat, EncodedCode};
use crate::datamatrix::{DataMatrixCode, DmItem, Template};
use crate::demo::DemoGtinCursor;
use crate::history::{HistoryKind, HistoryLog};
use crate::one_d::family::{BarcodeFamily, FieldValues};
use crate::one_d::weight::{generate_weight_barcode, WeightBarcode, WeightPrefix};
use crate::one_d::{generate_from_field_config, generate_simple};

/// Сессия генерации: RNG, курсор демо-GTIN, журнал и конфигурация.
///
/// Собирается через [`GeneratorBuilder`] или [`Generator::with_rng`].
#[derive(Debug)]
pub struct Generator<R = ChaCha8Rng> {
    rng: R,
    demo: DemoGtinCursor,
    history: HistoryLog,
    config: GeneratorConfig,
}

impl Generator<ChaCha8Rng> {
    /// Умолчания: RNG из ОС, встроенный демо-список, журнал на 50 записей.
    #[must_use]
    pub fn new() -> Self {
        Self::with_parts(
            os_rng(),
            DemoGtinCursor::default(),
            GeneratorConfig::default(),
        )
    }

    /// Из проверенной конфигурации (зерно, лимит истории, демо-список).
    ///
    /// # Errors
    ///
    /// Ошибки [`GeneratorConfig::validate`].
    pub fn from_config(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let rng = config.seed.map_or_else(os_rng, seeded_rng);
        Self::with_rng(rng, config)
    }
}

impl Default for Generator<ChaCha8Rng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> Generator<R> {
    /// Со своим RNG (например, `StdRng` или мок в тестах). Поле `seed`
    /// конфигурации здесь не используется.
    ///
    /// # Errors
    ///
    /// Ошибки [`GeneratorConfig::validate`] и пустой демо-список.
    pub fn with_rng(rng: R, config: GeneratorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let demo = match &config.demo_gtins {
            Some(list) => DemoGtinCursor::new(list.clone())?,
            None => DemoGtinCursor::default(),
        };
        Ok(Self::with_parts(rng, demo, config))
    }

    fn with_parts(rng: R, demo: DemoGtinCursor, config: GeneratorConfig) -> Self {
        Self {
            rng,
            demo,
            history: HistoryLog::with_limit(config.history_limit),
            config,
        }
    }

    /// `DataMatrix` по GTIN; без GTIN (или с пустым) берётся следующий демо-GTIN.
    /// Результат попадает в журнал как `DM`.
    pub fn generate_dm(&mut self, gtin: Option<&str>, template: Template) -> DataMatrixCode {
        let gtin = match gtin.map(str::trim) {
            Some(g) if !g.is_empty() => g.to_owned(),
            _ => self.demo.next_gtin().to_owned(),
        };
        let code = template.generate(&gtin, &mut self.rng);
        debug!(template = template.id(), gtin = %gtin, "DataMatrix");
        self.history.record(HistoryKind::DataMatrix, code.as_str());

        DataMatrixCode {
            code,
            template,
            gtin,
        }
    }

    /// По одному коду на каждый активный элемент библиотеки, в её порядке.
    /// Каждый код попадает в журнал как `DM`.
    pub fn generate_dm_items(&mut self, items: &[DmItem]) -> Vec<DataMatrixCode> {
        items
            .iter()
            .filter(|item| item.active)
            .map(|item| self.generate_dm(Some(item.gtin.as_str()), item.template))
            .collect()
    }

    /// Ручная форма. Успешный код попадает в журнал как `BC`.
    ///
    /// # Errors
    ///
    /// [`ValidationError`], если какое-то поле длиннее своей ширины.
    pub fn generate_barcode(
        &mut self,
        family: BarcodeFamily,
        values: &FieldValues,
        simulate_error: bool,
    ) -> Result<EncodedCode, ValidationError> {
        let out = generate_from_field_config(family, values, simulate_error, &mut self.rng)?;
        self.history.record(HistoryKind::Barcode, out.code.as_str());
        Ok(out)
    }

    /// Одиночный весовой код, показанный в карусели. Попадает в журнал как `WC`.
    pub fn generate_weight_barcode(
        &mut self,
        prefix: WeightPrefix,
        plu: &str,
        weight: u32,
        discount: Option<u32>,
    ) -> WeightBarcode {
        let bc = generate_weight_barcode(prefix, plu, weight, discount);
        self.history.record(HistoryKind::WeightCarousel, bc.code.code.as_str());
        bc
    }

    /// Ручной ввод `SimpleGen` (в журнал не пишется).
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn generate_simple(&self, value: &str, format: BarcodeFormat) -> EncodedCode {
        generate_simple(value, format)
    }

    /// Запрос пакета с умолчаниями из конфигурации сессии.
    #[must_use]
    pub fn weight_batch_request(&self, plu_list: Vec<String>) -> WeightBatchRequest {
        WeightBatchRequest::with_defaults(plu_list, &self.config)
    }

    /// Пакет весовых кодов для карусели (в журнал не пишется).
    ///
    /// # Errors
    ///
    /// См. [`BatchError`].
    pub fn generate_weight_batch(
        &mut self,
        request: &WeightBatchRequest,
    ) -> Result<Vec<WeightItem>, BatchError> {
        generate_weight_batch(request, &mut self.rng)
    }

    #[inline]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    #[inline]
    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    #[inline]
    pub fn demo(&self) -> &DemoGtinCursor {
        &self.demo
    }

    #[inline]
    pub fn demo_mut(&mut self) -> &mut DemoGtinCursor {
        &mut self.demo
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    #[inline]
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }
}

/// Пошаговая сборка `Generator`.
#[derive(Default)]
pub struct GeneratorBuilder {
    config: GeneratorConfig,
}

impl GeneratorBuilder {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn config(mut self, config: GeneratorConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn history_limit(mut self, limit: usize) -> Self {
        self.config.history_limit = limit;
        self
    }

    #[must_use]
    pub fn demo_gtins<I, S>(mut self, gtins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.demo_gtins = Some(gtins.into_iter().map(Into::into).collect());
        self
    }

    /// # Errors
    ///
    /// Ошибки [`GeneratorConfig::validate`].
    pub fn build(self) -> Result<Generator, ConfigError> {
        Generator::from_config(self.config)
    }
}
