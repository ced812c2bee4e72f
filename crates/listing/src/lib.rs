//! Поиск, фильтрация, сортировка и пагинация списков панели управления.
//!
//! Поток данных односторонний: коллекция сущностей → [`filter`] → [`sort`] →
//! окно страницы ([`paginator`]). Каждый этап — чистая функция, вход не
//! изменяется.

pub mod config;
pub mod error;
pub mod filter;
pub mod paginator;
pub mod path;
pub mod presets;
pub mod record;
pub mod settings;
pub mod sort;
pub mod view;

pub use error::ListError;
pub use filter::{filter_items, SearchFilter, SelectValue};
pub use paginator::{can_navigate, compute_state, next_page, page_window, previous_page, target_page};
pub use path::FieldPath;
pub use record::{into_rows, Record, Row};
pub use sort::{sort_items, MissingKeys, Sorter};
pub use view::{build_page, ListPage};
