//! Полный цикл обновления списка: фильтр → сортировка → окно страницы.

use contracts::shared::list_query::{ListQuery, SortOrder};
use contracts::shared::pagination::{PageRequest, PaginationState};

use crate::error::ListError;
use crate::filter::SearchFilter;
use crate::paginator::{compute_state, page_window, target_page};
use crate::path::FieldPath;
use crate::presets::ListPreset;
use crate::record::Record;
use crate::settings;
use crate::sort::Sorter;

/// Одна страница списка после фильтрации и сортировки
#[derive(Debug, Clone, PartialEq)]
pub struct ListPage<T> {
    pub items: Vec<T>,
    pub pagination: PaginationState,
    /// Количество элементов после фильтрации (на всех страницах)
    pub total_count: usize,
    pub page_size: u32,
}

fn resolve_sort<'a>(query: &'a ListQuery, preset: &ListPreset) -> (&'a str, SortOrder) {
    match query.sort_key.as_deref() {
        Some(key) if preset.allows_sort(key) => (key, query.sort_order),
        Some(key) => {
            tracing::warn!("{}: sorting by '{}' is not supported", preset.name, key);
            preset.default_sort
        }
        None => preset.default_sort,
    }
}

pub fn build_page<T: Record + Clone>(
    items: &[T],
    query: &ListQuery,
    preset: &ListPreset,
) -> Result<ListPage<T>, ListError> {
    let config = settings::get();

    let mut filter = SearchFilter::new(&query.search, preset.search_paths()?);
    for (field, value) in query.active_filters() {
        if !preset.allows_select(field) {
            tracing::warn!("{}: filter by '{}' is not supported", preset.name, field);
            continue;
        }
        filter = filter.with_select(FieldPath::parse(field)?, value);
    }
    let filtered = filter.apply(items);

    let (sort_key, sort_order) = resolve_sort(query, preset);
    let sorted = Sorter::new(FieldPath::parse(sort_key)?, sort_order)
        .with_missing(config.sorting.missing_keys)
        .apply(&filtered);

    let page_size = config.page_size_or_default(query.page_size);
    let pagination = compute_state(query.page, sorted.len(), page_size)?;
    let page_items = page_window(&sorted, pagination.current_page, page_size)?.to_vec();

    tracing::debug!(
        "{}: page {}/{} with {} of {} items",
        preset.name,
        pagination.current_page,
        pagination.total_pages,
        page_items.len(),
        sorted.len()
    );

    Ok(ListPage {
        items: page_items,
        pagination,
        total_count: sorted.len(),
        page_size,
    })
}

/// Запрос списка после навигации по страницам
pub fn navigate(query: &ListQuery, pagination: &PaginationState, request: PageRequest) -> ListQuery {
    ListQuery {
        page: target_page(pagination, request),
        ..query.clone()
    }
}

/// Смена размера страницы возвращает на первую страницу
pub fn change_page_size(query: &ListQuery, page_size: u32) -> ListQuery {
    ListQuery {
        page: 1,
        page_size: Some(page_size),
        ..query.clone()
    }
}

/// Новый поиск начинается с первой страницы
pub fn change_search(query: &ListQuery, search: &str) -> ListQuery {
    ListQuery {
        page: 1,
        search: search.to_string(),
        ..query.clone()
    }
}

/// Разобрать query-строку адреса (`?search=...&page=2`)
pub fn parse_list_query(query_string: &str) -> Result<ListQuery, ListError> {
    let qs_config = serde_qs::Config::new(5, false);
    let mut query: ListQuery = qs_config.deserialize_str(query_string.trim_start_matches('?'))?;
    if query.page == 0 {
        query.page = 1;
    }
    Ok(query)
}

/// Query-строка для состояния списка
pub fn list_href(query: &ListQuery) -> Result<String, ListError> {
    Ok(format!("?{}", serde_qs::to_string(query)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets::{BOOKINGS, UNITS};
    use serde_json::{json, Value};

    fn units() -> Vec<Value> {
        (1..=120)
            .map(|n| {
                json!({
                    "name": format!("{}{}", n / 10 + 1, (b'A' + (n % 10) as u8) as char),
                    "property": { "name": if n % 2 == 0 { "Seaside" } else { "Hilltop" } },
                    "rent": 500 + (n * 37) % 1000,
                    "floor": n / 10,
                    "bedrooms": n % 3 + 1,
                    "status": if n % 4 == 0 { "occupied" } else { "available" },
                    "is_furnished": n % 5 == 0,
                })
            })
            .collect()
    }

    fn rent(item: &Value) -> i64 {
        item["rent"].as_i64().unwrap()
    }

    #[test]
    fn test_default_query_uses_preset_sort_and_page_size() {
        let page = build_page(&units(), &ListQuery::default(), &UNITS).unwrap();
        assert_eq!(page.page_size, 50);
        assert_eq!(page.total_count, 120);
        assert_eq!(page.items.len(), 50);
        assert_eq!(page.pagination, PaginationState::new(1, 3, true, false));
        assert!(page.items.windows(2).all(|w| rent(&w[0]) <= rent(&w[1])));
    }

    #[test]
    fn test_search_filter_sort_and_page() {
        let query = ListQuery::default()
            .with_search("seaside")
            .with_filter("status", "available")
            .with_filter("is_furnished", "all")
            .with_sort("rent", SortOrder::Descending)
            .with_page(2)
            .with_page_size(100);
        let page = build_page(&units(), &query, &UNITS).unwrap();

        // чётные n из 1..=120, кроме кратных 4
        assert_eq!(page.total_count, 30);
        assert_eq!(page.pagination, PaginationState::new(1, 1, false, false));
        assert!(page.items.iter().all(|u| u["property"]["name"] == "Seaside"));
        assert!(page.items.iter().all(|u| u["status"] == "available"));
        assert!(page.items.windows(2).all(|w| rent(&w[0]) >= rent(&w[1])));
    }

    #[test]
    fn test_boolean_select_filter() {
        let query = ListQuery::default().with_filter("is_furnished", "true");
        let page = build_page(&units(), &query, &UNITS).unwrap();
        assert_eq!(page.total_count, 24);
        assert!(page.items.iter().all(|u| u["is_furnished"] == true));
    }

    #[test]
    fn test_unsupported_filter_and_sort_are_ignored() {
        let query = ListQuery::default()
            .with_filter("floor", "3")
            .with_sort("name", SortOrder::Ascending);
        let page = build_page(&units(), &query, &UNITS).unwrap();
        assert_eq!(page.total_count, 120);
        assert!(page.items.windows(2).all(|w| rent(&w[0]) <= rent(&w[1])));
    }

    #[test]
    fn test_empty_result() {
        let query = ListQuery::default().with_search("no such unit").with_page(4);
        let page = build_page(&units(), &query, &UNITS).unwrap();
        assert!(page.items.is_empty());
        assert_eq!(page.pagination, PaginationState::empty());
    }

    #[test]
    fn test_navigation_helpers() {
        let query = ListQuery::default().with_page(2).with_search("sea");
        let state = PaginationState::new(2, 3, true, true);
        assert_eq!(navigate(&query, &state, PageRequest::Next).page, 3);
        assert_eq!(navigate(&query, &state, PageRequest::Previous).page, 1);

        let resized = change_page_size(&query, 100);
        assert_eq!((resized.page, resized.page_size), (1, Some(100)));
        assert_eq!(resized.search, "sea");

        let searched = change_search(&query, "hill");
        assert_eq!((searched.page, searched.search.as_str()), (1, "hill"));
    }

    #[test]
    fn test_parse_list_query() {
        let query = parse_list_query(
            "?search=ali&filters[status]=confirmed&sort_key=check_in&sort_order=desc&page=2",
        )
        .unwrap();
        assert_eq!(query.search, "ali");
        assert_eq!(query.filters.get("status").map(String::as_str), Some("confirmed"));
        assert_eq!(query.sort_key.as_deref(), Some("check_in"));
        assert_eq!(query.sort_order, SortOrder::Descending);
        assert_eq!(query.page, 2);
        assert_eq!(query.page_size, None);

        let empty = parse_list_query("").unwrap();
        assert_eq!(empty, ListQuery::default());
    }

    #[test]
    fn test_list_href_is_readable_back() {
        let query = ListQuery::default()
            .with_search("ali")
            .with_filter("status", "pending")
            .with_sort("check_in", SortOrder::Ascending)
            .with_page(3);
        let href = list_href(&query).unwrap();
        assert!(href.starts_with('?'));
        assert!(href.contains("page=3"));
        assert_eq!(parse_list_query(&href).unwrap(), query);
    }

    #[test]
    fn test_bookings_page_over_nested_guest() {
        let bookings = vec![
            json!({ "guest": { "first_name": "Alice", "last_name": "Moreau", "email": "a@x.io" },
                    "unit": { "name": "2A", "property_name": "Seaside" },
                    "check_in": "2024-03-10", "status": "confirmed" }),
            json!({ "guest": { "first_name": "Bob", "last_name": "Ali", "email": "b@x.io" },
                    "unit": { "name": "3B", "property_name": "Hilltop" },
                    "check_in": "2024-04-02", "status": "pending" }),
            json!({ "guest": null,
                    "unit": { "name": "4C", "property_name": "Seaside" },
                    "check_in": "2024-02-01", "status": "confirmed" }),
        ];
        let page = build_page(&bookings, &ListQuery::default().with_search("ali"), &BOOKINGS).unwrap();
        let names: Vec<&str> = page
            .items
            .iter()
            .map(|b| b["guest"]["first_name"].as_str().unwrap())
            .collect();
        // сортировка по умолчанию: check_in по убыванию
        assert_eq!(names, vec!["Bob", "Alice"]);
    }
}
