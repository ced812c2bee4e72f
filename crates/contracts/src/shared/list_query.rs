use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Значение select-фильтра, означающее "без ограничения по полю"
pub const ALL: &str = "all";

/// Направление сортировки списка
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
    /// Исходный порядок элементов
    #[default]
    None,
}

impl SortOrder {
    /// Следующее состояние при клике по заголовку колонки: asc → desc → none
    pub fn cycle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::None,
            SortOrder::None => SortOrder::Ascending,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, SortOrder::None)
    }
}

/// Состояние списка, которое живет в query-строке страницы
///
/// Пример: `?search=ali&filters[status]=confirmed&sort_key=check_in&sort_order=desc&page=2`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ListQuery {
    /// Строка свободного поиска
    pub search: String,

    /// Select-фильтры: путь к полю → ожидаемое значение (`"all"` = любое)
    pub filters: BTreeMap<String, String>,

    /// Путь к полю сортировки; `None` — порядок по умолчанию
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_key: Option<String>,

    pub sort_order: SortOrder,

    /// Номер страницы, начиная с 1
    pub page: u32,

    /// Размер страницы; `None` — из настроек
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            filters: BTreeMap::new(),
            sort_key: None,
            sort_order: SortOrder::None,
            page: 1,
            page_size: None,
        }
    }
}

impl ListQuery {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.insert(field.into(), value.into());
        self
    }

    pub fn with_sort(mut self, key: impl Into<String>, order: SortOrder) -> Self {
        self.sort_key = Some(key.into());
        self.sort_order = order;
        self
    }

    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    /// Активные select-фильтры (без `"all"`)
    pub fn active_filters(&self) -> impl Iterator<Item = (&str, &str)> {
        self.filters
            .iter()
            .filter(|(_, value)| value.as_str() != ALL)
            .map(|(field, value)| (field.as_str(), value.as_str()))
    }
}
