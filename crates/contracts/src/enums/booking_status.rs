use serde::{Deserialize, Serialize};

/// Статус бронирования
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    CheckedIn,
    CheckedOut,
    Cancelled,
}

impl BookingStatus {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::CheckedIn => "checked_in",
            BookingStatus::CheckedOut => "checked_out",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            BookingStatus::Pending => "Ожидает подтверждения",
            BookingStatus::Confirmed => "Подтверждено",
            BookingStatus::CheckedIn => "Заселен",
            BookingStatus::CheckedOut => "Выселен",
            BookingStatus::Cancelled => "Отменено",
        }
    }

    pub fn all() -> Vec<BookingStatus> {
        vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(BookingStatus::Pending),
            "confirmed" => Some(BookingStatus::Confirmed),
            "checked_in" => Some(BookingStatus::CheckedIn),
            "checked_out" => Some(BookingStatus::CheckedOut),
            "cancelled" => Some(BookingStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
