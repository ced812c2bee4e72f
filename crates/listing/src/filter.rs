//! Свободный поиск по текстовым полям плюс точные select-фильтры.

use contracts::shared::list_query::ALL;
use serde_json::{Number, Value};
use std::borrow::Cow;

use crate::error::ListError;
use crate::path::FieldPath;
use crate::record::Record;

/// Ожидаемое значение select-фильтра
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectValue {
    /// `"all"`: поле не ограничено
    Any,
    /// `"true"` / `"false"`: сравнение по булеву смыслу поля
    Flag(bool),
    /// Строгое равенство с текстовым видом поля
    Exact(String),
}

impl SelectValue {
    /// Значения из UI всегда строки
    pub fn parse(raw: &str) -> Self {
        match raw {
            ALL => SelectValue::Any,
            "true" => SelectValue::Flag(true),
            "false" => SelectValue::Flag(false),
            other => SelectValue::Exact(other.to_string()),
        }
    }

    pub fn is_active(&self) -> bool {
        !matches!(self, SelectValue::Any)
    }

    pub fn matches(&self, field: Option<&Value>) -> bool {
        match self {
            SelectValue::Any => true,
            SelectValue::Flag(expected) => match field {
                Some(Value::Bool(actual)) => actual == expected,
                Some(Value::String(s)) => s.parse::<bool>().ok() == Some(*expected),
                _ => false,
            },
            SelectValue::Exact(expected) => match field {
                Some(Value::String(s)) => s == expected,
                Some(Value::Number(n)) => number_text(n) == *expected,
                _ => false,
            },
        }
    }
}

/// Условие фильтрации списка: поисковая строка по набору полей и select-фильтры
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    /// Поисковая строка в нижнем регистре; пустая — совпадает всё
    term: String,
    fields: Vec<FieldPath>,
    selects: Vec<(FieldPath, SelectValue)>,
}

impl SearchFilter {
    pub fn new(search_term: &str, fields: Vec<FieldPath>) -> Self {
        Self {
            term: search_term.to_lowercase(),
            fields,
            selects: Vec::new(),
        }
    }

    pub fn with_select(mut self, field: FieldPath, expected: &str) -> Self {
        self.selects.push((field, SelectValue::parse(expected)));
        self
    }

    pub fn term(&self) -> &str {
        &self.term
    }

    /// Фильтр ничего не отсекает
    pub fn is_pass_through(&self) -> bool {
        self.term.is_empty() && !self.selects.iter().any(|(_, v)| v.is_active())
    }

    pub fn matches<R: Record + ?Sized>(&self, item: &R) -> bool {
        self.matches_text(item) && self.matches_selects(item)
    }

    fn matches_text<R: Record + ?Sized>(&self, item: &R) -> bool {
        if self.term.is_empty() {
            return true;
        }
        self.fields.iter().any(|path| {
            item.field(path)
                .and_then(searchable_text)
                .map_or(false, |text| text.to_lowercase().contains(&self.term))
        })
    }

    fn matches_selects<R: Record + ?Sized>(&self, item: &R) -> bool {
        self.selects
            .iter()
            .all(|(path, expected)| !expected.is_active() || expected.matches(item.field(path)))
    }

    /// Отобрать подходящие элементы, сохраняя их исходный порядок
    pub fn apply<T: Record + Clone>(&self, items: &[T]) -> Vec<T> {
        if self.is_pass_through() {
            return items.to_vec();
        }
        let result: Vec<T> = items.iter().filter(|item| self.matches(*item)).cloned().collect();
        tracing::debug!(
            "filter '{}': {} of {} items matched",
            self.term,
            result.len(),
            items.len()
        );
        result
    }
}

/// Текст поля для поиска: строки как есть, числа и флаги в виде строки
fn searchable_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(number_text(n))),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        _ => None,
    }
}

/// Число как его вводят в UI: целое `f64` без хвоста `.0` (`1200.0` → `"1200"`)
fn number_text(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}

/// Отфильтровать `items` по поисковой строке и select-фильтрам.
///
/// Пути проверяются до начала фильтрации; неверный путь — ошибка вызова.
pub fn filter_items<T, S>(
    items: &[T],
    search_term: &str,
    search_fields: &[S],
    select_filters: &[(S, S)],
) -> Result<Vec<T>, ListError>
where
    T: Record + Clone,
    S: AsRef<str>,
{
    let mut filter = SearchFilter::new(search_term, FieldPath::parse_all(search_fields)?);
    for (field, expected) in select_filters {
        filter = filter.with_select(FieldPath::parse(field.as_ref())?, expected.as_ref());
    }
    Ok(filter.apply(items))
}
