//! Журнал сгенерированных кодов: новые сверху, не больше `limit` записей.

use std::collections::VecDeque;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::error::HistoryError;

/// Лимит журнала по умолчанию.
pub const DEFAULT_HISTORY_LIMIT: usize = 50;

/// Откуда пришёл код.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum HistoryKind {
    /// `DataMatrix`.
    #[serde(rename = "DM")]
    DataMatrix,
    /// Линейный штрих-код из ручной формы.
    #[serde(rename = "BC")]
    Barcode,
    /// Весовой код, показанный в карусели.
    #[serde(rename = "WC")]
    WeightCarousel,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: u64,
    /// Unix-время в миллисекундах.
    pub timestamp_ms: u64,
    #[serde(rename = "type")]
    pub kind: HistoryKind,
    pub code: String,
}

#[derive(Clone, Debug)]
pub struct HistoryLog {
    items: VecDeque<HistoryEntry>,
    limit: usize,
    next_id: u64,
}

impl Default for HistoryLog {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl HistoryLog {
    /// Лимит 0 трактуется как 1.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            items: VecDeque::with_capacity(limit),
            limit,
            next_id: 1,
        }
    }

    /// Добавить запись с текущим временем.
    pub fn record(&mut self, kind: HistoryKind, code: impl Into<String>) -> &HistoryEntry {
        self.record_at(kind, code, now_ms())
    }

    /// Добавить запись с заданным временем. Самые старые сверх лимита отбрасываются.
    pub fn record_at(
        &mut self,
        kind: HistoryKind,
        code: impl Into<String>,
        timestamp_ms: u64,
    ) -> &HistoryEntry {
        let entry = HistoryEntry {
            id: self.next_id,
            timestamp_ms,
            kind,
            code: code.into(),
        };
        self.next_id = self.next_id.saturating_add(1);
        self.items.push_front(entry);
        self.items.truncate(self.limit);
        trace!(len = self.items.len(), "запись в историю");
        &self.items[0]
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Записи, новые первыми.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.items.iter()
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.items.front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Экспорт в JSON-массив (новые первыми).
    ///
    /// # Errors
    ///
    /// [`HistoryError::Serialize`], если serde не справился.
    pub fn to_json(&self) -> Result<String, HistoryError> {
        serde_json::to_string_pretty(&self.items).map_err(|e| HistoryError::Serialize {
            message: e.to_string(),
        })
    }

    /// Импорт из JSON-массива; лишнее сверх `limit` отбрасывается с конца.
    ///
    /// # Errors
    ///
    /// [`HistoryError::Parse`] для некорректного JSON.
    pub fn from_json(json: &str, limit: usize) -> Result<Self, HistoryError> {
        let items: Vec<HistoryEntry> =
            serde_json::from_str(json).map_err(|e| HistoryError::Parse {
                message: e.to_string(),
            })?;
        let mut log = Self::with_limit(limit);
        log.next_id = items.iter().map(|e| e.id).max().map_or(1, |id| id.saturating_add(1));
        log.items = items.into_iter().take(log.limit).collect();
        Ok(log)
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_bounded() {
        let mut log = HistoryLog::with_limit(3);
        for i in 0..5 {
            log.record_at(HistoryKind::Barcode, format!("code{i}"), i);
        }
        let codes: Vec<&str> = log.iter().map(|e| e.code.as_str()).collect();
        assert_eq!(codes, ["code4", "code3", "code2"]);
        assert_eq!(log.latest().map(|e| e.id), Some(5));
    }

    #[test]
    fn default_limit_is_fifty() {
        let mut log = HistoryLog::default();
        for _ in 0..60 {
            log.record(HistoryKind::DataMatrix, "x");
        }
        assert_eq!(log.len(), DEFAULT_HISTORY_LIMIT);
    }

    #[test]
    fn clear_empties_log() {
        let mut log = HistoryLog::default();
        log.record(HistoryKind::DataMatrix, "x");
        log.clear();
        assert!(log.is_empty());
    }

    #[test]
    fn json_round_trip_keeps_ids_going() {
        let mut log = HistoryLog::with_limit(10);
        log.record_at(HistoryKind::DataMatrix, "dm", 1_700_000_000_000);
        log.record_at(HistoryKind::Barcode, "bc", 1_700_000_000_001);

        let json = log.to_json().expect("serialize");
        assert!(json.contains("\"type\": \"BC\""));
        assert!(json.contains("\"timestampMs\": 1700000000001"));

        let mut restored = HistoryLog::from_json(&json, 10).expect("parse");
        assert_eq!(restored.len(), 2);
        assert_eq!(restored.record(HistoryKind::Barcode, "next").id, 3);
    }

    #[test]
    fn max_imported_id_does_not_overflow() {
        let json = format!(r#"[{{"id": {}, "timestampMs": 1, "type": "DM", "code": "x"}}]"#, u64::MAX);
        let mut restored = HistoryLog::from_json(&json, 5).expect("parse");
        assert_eq!(restored.record_at(HistoryKind::Barcode, "a", 2).id, u64::MAX);
        assert_eq!(restored.record_at(HistoryKind::Barcode, "b", 3).id, u64::MAX);
        assert_eq!(restored.len(), 3);
    }

    #[test]
    fn import_trims_to_limit() {
        let mut log = HistoryLog::with_limit(10);
        for i in 0..10 {
            log.record_at(HistoryKind::Barcode, i.to_string(), i);
        }
        let json = log.to_json().expect("serialize");
        let restored = HistoryLog::from_json(&json, 4).expect("parse");
        assert_eq!(restored.len(), 4);
        assert_eq!(restored.latest().map(|e| e.code.as_str()), Some("9"));
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(
            HistoryLog::from_json("{", 5),
            Err(HistoryError::Parse { .. })
        ));
    }
}
