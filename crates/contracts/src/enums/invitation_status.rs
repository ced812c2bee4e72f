use serde::{Deserialize, Serialize};

/// Статус приглашения пользователя
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Expired,
    Revoked,
}

impl InvitationStatus {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "pending",
            InvitationStatus::Accepted => "accepted",
            InvitationStatus::Expired => "expired",
            InvitationStatus::Revoked => "revoked",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            InvitationStatus::Pending => "Ожидает",
            InvitationStatus::Accepted => "Принято",
            InvitationStatus::Expired => "Истекло",
            InvitationStatus::Revoked => "Отозвано",
        }
    }

    pub fn all() -> Vec<InvitationStatus> {
        vec![
            InvitationStatus::Pending,
            InvitationStatus::Accepted,
            InvitationStatus::Expired,
            InvitationStatus::Revoked,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "pending" => Some(InvitationStatus::Pending),
            "accepted" => Some(InvitationStatus::Accepted),
            "expired" => Some(InvitationStatus::Expired),
            "revoked" => Some(InvitationStatus::Revoked),
            _ => None,
        }
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
