//! Сортировка по числовому полю или полю-дате.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use contracts::shared::list_query::SortOrder;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

use crate::path::FieldPath;
use crate::record::Record;

/// Куда ставить записи, у которых ключ не найден или не приводится к числу
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingKeys {
    /// Меньше любого значения: первыми по возрастанию, последними по убыванию
    #[default]
    Lowest,
    /// Больше любого значения
    Highest,
}

/// Сравнимое представление ключа: число или момент времени в миллисекундах.
///
/// Строка сначала читается как число, потом как дата. Поэтому `"2024"` — это
/// число 2024, а `"2024-01-01"` — миллисекунды от эпохи; в одной колонке
/// такие значения между собой не сопоставимы.
pub fn sort_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => parse_sortable_str(s.trim()),
        _ => None,
    }
}

fn parse_sortable_str(s: &str) -> Option<f64> {
    if s.is_empty() {
        return None;
    }
    if let Ok(n) = s.parse::<f64>() {
        return n.is_finite().then_some(n);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.timestamp_millis() as f64);
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc().timestamp_millis() as f64);
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis() as f64)
}

/// Параметры сортировки: ключ, направление и место для пустых ключей
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sorter {
    pub key: FieldPath,
    pub order: SortOrder,
    pub missing: MissingKeys,
}

impl Sorter {
    pub fn new(key: FieldPath, order: SortOrder) -> Self {
        Self {
            key,
            order,
            missing: MissingKeys::default(),
        }
    }

    pub fn with_missing(mut self, missing: MissingKeys) -> Self {
        self.missing = missing;
        self
    }

    fn compare_keys(&self, a: Option<f64>, b: Option<f64>) -> Ordering {
        let ascending = match (a, b) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (None, None) => Ordering::Equal,
            (None, Some(_)) => match self.missing {
                MissingKeys::Lowest => Ordering::Less,
                MissingKeys::Highest => Ordering::Greater,
            },
            (Some(_), None) => match self.missing {
                MissingKeys::Lowest => Ordering::Greater,
                MissingKeys::Highest => Ordering::Less,
            },
        };
        match self.order {
            SortOrder::Descending => ascending.reverse(),
            _ => ascending,
        }
    }

    /// Новая упорядоченная последовательность; вход не изменяется.
    /// Сортировка стабильная: равные ключи сохраняют исходный порядок.
    pub fn apply<T: Record + Clone>(&self, items: &[T]) -> Vec<T> {
        if self.order.is_none() {
            return items.to_vec();
        }

        let mut keyed: Vec<(Option<f64>, &T)> = items
            .iter()
            .map(|item| (item.field(&self.key).and_then(sort_value), item))
            .collect();
        keyed.sort_by(|(a, _), (b, _)| self.compare_keys(*a, *b));

        let unresolved = keyed.iter().filter(|(key, _)| key.is_none()).count();
        if unresolved > 0 {
            tracing::debug!(
                "sort by '{}': {} of {} items have no sortable value",
                self.key,
                unresolved,
                items.len()
            );
        }

        keyed.into_iter().map(|(_, item)| item.clone()).collect()
    }
}

/// Отсортировать `items` по ключу; пустые ключи считаются наименьшими
pub fn sort_items<T: Record + Clone>(items: &[T], key: &FieldPath, order: SortOrder) -> Vec<T> {
    Sorter::new(key.clone(), order).apply(items)
}
