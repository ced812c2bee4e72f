use thiserror::Error;

/// Ошибки вызова утилит списков.
///
/// Это ошибки программиста на границе вызова (неверный путь, нулевой размер
/// страницы); для документированных входов утилиты ошибок не возвращают.
#[derive(Debug, Error)]
pub enum ListError {
    #[error("Invalid field path '{path}': {reason}")]
    InvalidPath { path: String, reason: &'static str },

    #[error("Page size must be greater than zero")]
    ZeroPageSize,

    #[error("Failed to convert record: {0}")]
    Record(#[from] serde_json::Error),

    #[error("Query string error: {0}")]
    Query(#[from] serde_qs::Error),
}
