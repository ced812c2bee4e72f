//! Вычисление целевой страницы для кнопок пагинации.
//!
//! Пагинатор только считает номер страницы; переход (обновление `?page=`)
//! выполняет вызывающий код.

use contracts::shared::pagination::{PageQuery, PageRequest, PaginationState};

use crate::error::ListError;

/// Целевая страница для запроса навигации.
///
/// Флаги `has_next`/`has_prev` решают, разрешен ли переход; если нет,
/// возвращается текущая страница. Результат никогда не меньше 1 и не больше
/// `total_pages`.
pub fn target_page(state: &PaginationState, request: PageRequest) -> u32 {
    let current = state.current_page;
    if state.total_pages == 0 {
        return current;
    }

    match request {
        PageRequest::Previous if state.has_prev => current.saturating_sub(1).max(1),
        PageRequest::Next if state.has_next => current.saturating_add(1).min(state.total_pages),
        PageRequest::First if state.has_prev => 1,
        PageRequest::Last if state.has_next => state.total_pages,
        PageRequest::Page(page) => page.clamp(1, state.total_pages),
        _ => current,
    }
}

pub fn next_page(state: &PaginationState) -> u32 {
    target_page(state, PageRequest::Next)
}

pub fn previous_page(state: &PaginationState) -> u32 {
    target_page(state, PageRequest::Previous)
}

/// Активна ли кнопка: переход меняет текущую страницу
pub fn can_navigate(state: &PaginationState, request: PageRequest) -> bool {
    target_page(state, request) != state.current_page
}

/// Состояние пагинации для списка из `total_count` элементов.
///
/// Страница вне диапазона прижимается к последней (или к 1 для пустого списка).
pub fn compute_state(
    page: u32,
    total_count: usize,
    page_size: u32,
) -> Result<PaginationState, ListError> {
    if page_size == 0 {
        return Err(ListError::ZeroPageSize);
    }

    let page_size = page_size as usize;
    let total_pages = u32::try_from(total_count.div_ceil(page_size)).unwrap_or(u32::MAX);
    let current_page = page.clamp(1, total_pages.max(1));

    Ok(PaginationState {
        current_page,
        total_pages,
        has_next: current_page < total_pages,
        has_prev: current_page > 1,
    })
}

/// Элементы одной страницы списка
pub fn page_window<T>(items: &[T], page: u32, page_size: u32) -> Result<&[T], ListError> {
    if page_size == 0 {
        return Err(ListError::ZeroPageSize);
    }
    let page_size = page_size as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(page_size);
    if start >= items.len() {
        return Ok(&[]);
    }
    let end = start.saturating_add(page_size).min(items.len());
    Ok(&items[start..end])
}

/// Query-строка для перехода на страницу: `?page=3` или `?page=3&page_size=50`
pub fn page_href(page: u32, page_size: Option<u32>) -> Result<String, ListError> {
    let query = serde_qs::to_string(&PageQuery { page, page_size })?;
    Ok(format!("?{}", query))
}
