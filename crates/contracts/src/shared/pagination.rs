use serde::{Deserialize, Serialize};

/// Состояние пагинации списка (страницы нумеруются с 1)
///
/// Флаги `has_next`/`has_prev` приходят с сервера и считаются источником
/// истины: они могут отличаться от того, что следует из `current_page` и
/// `total_pages` (например, сервер знает, что следующая страница пуста).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationState {
    pub current_page: u32,
    pub total_pages: u32,
    pub has_next: bool,
    pub has_prev: bool,
}

impl PaginationState {
    pub fn new(current_page: u32, total_pages: u32, has_next: bool, has_prev: bool) -> Self {
        Self {
            current_page,
            total_pages,
            has_next,
            has_prev,
        }
    }

    /// Пустой список: одна (первая) страница без переходов
    pub fn empty() -> Self {
        Self::new(1, 0, false, false)
    }

    pub fn is_empty(&self) -> bool {
        self.total_pages == 0
    }
}

impl Default for PaginationState {
    fn default() -> Self {
        Self::empty()
    }
}

/// Запрошенный переход между страницами
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageRequest {
    Next,
    Previous,
    First,
    Last,
    /// Переход на конкретную страницу (например, из селектора)
    Page(u32),
}

/// Параметры страницы в URL (`?page=3&page_size=50`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageQuery {
    pub page: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}
