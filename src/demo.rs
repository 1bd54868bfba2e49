//! Демо-список GTIN и курсор по нему.
//!
//! Реальные штрих-коды товаров: источник GTIN, когда вызывающий свой не дал.
//! Индекс ротации живёт в [`DemoGtinCursor`], а не в глобальном состоянии.

use crate::core::error::ConfigError;

/// Реальные GTIN для демо-режима.
pub const DEMO_GTINS: [&str; 132] = [
    "4811220000307", "4811220000215", "4810206001604", "4810206001598", "4810206001543",
    "4810099003310", "4810168005436", "4810099003464", "4810099004522", "4810168007157",
    "4811468003047", "4810322002547", "4810268011436", "4810093009318", "4810099004775",
    "4810806002230", "4811293001829", "4810806002223", "4810206002076", "4810806002537",
    "4810439004557", "4810168006853", "4810268007842", "4810405002211", "4810223004695",
    "4810223010924", "4810223003865", "4810168007829", "4810268011429", "4810405002198",
    "4810223003728", "4810268011412", "4810168007645", "4810108006837", "4810099007769",
    "4810099007752", "4810927001020", "4810168007836", "4810168007669", "4810268009037",
    "4811198003317", "4810206001710", "4810099003600", "4810093002500", "4810099003662",
    "4810108002372", "4810268008702", "4810099007561", "4810099003150", "4607037122574",
    "4810206001628", "4810268010828", "4810099004645", "4810099003471", "4811293000808",
    "4810223003698", "4810268008801", "4810223003773", "4810099008346", "4810099008353",
    "4810099008438", "4810099008445", "4810223004107", "4810223004190", "4810439001754",
    "4810065000787", "4810223004060", "4810268011672", "4810268010712", "4810268010613",
    "4810223004084", "4810223004077", "4810701000126", "4810405002327", "4810099003624",
    "4810168007843", "4810168007867", "4810268002298", "4810806001493", "4810099004539",
    "4810099004454", "4810223004022", "4810223004251", "4810806000748", "4810273001446",
    "4810223004145", "4810108005465", "4810405001412", "4810099003341", "4810021000325",
    "4810206002090", "4810557006341", "4810099005734", "4810405002976", "4810206001765",
    "4810168045494", "4811194005575", "4811377000588", "4810223003810", "4810263009032",
    "4810168007096", "4810168007102", "4810206001666", "4810099004300", "4810268004001",
    "4811585000035", "4810268012723", "4810439001747", "4810099007103", "4810806002544",
    "4811220002127", "4810065000893", "4810223004565", "4811269002522", "4810099007783",
    "4810099007806", "4810223002417", "4810223002738", "4810223004046", "4810223002226",
    "4811220003209", "4810268005572", "4810767003529", "4810806000137", "4810223003940",
    "4810099003587", "4810108001726", "4810065001081", "4810206001758", "4811220005418",
    "4810099004478", "4811234005855",
];

/// Циклический курсор по списку GTIN.
#[derive(Clone, Debug)]
pub struct DemoGtinCursor {
    gtins: Vec<String>,
    index: usize,
}

impl Default for DemoGtinCursor {
    fn default() -> Self {
        Self {
            gtins: DEMO_GTINS.iter().map(|g| (*g).to_owned()).collect(),
            index: 0,
        }
    }
}

impl DemoGtinCursor {
    /// Курсор по своему списку.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EmptyDemoList`] для пустого списка.
    pub fn new(gtins: Vec<String>) -> Result<Self, ConfigError> {
        if gtins.is_empty() {
            return Err(ConfigError::EmptyDemoList);
        }
        Ok(Self { gtins, index: 0 })
    }

    /// Текущий GTIN; курсор сдвигается, после последнего снова первый.
    pub fn next_gtin(&mut self) -> &str {
        let i = self.index;
        self.index = (self.index + 1) % self.gtins.len();
        &self.gtins[i]
    }

    #[inline]
    pub fn reset(&mut self) {
        self.index = 0;
    }

    #[inline]
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.gtins.len()
    }

    /// Всегда `false`: пустой курсор не создаётся.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gtins.is_empty()
    }
}
