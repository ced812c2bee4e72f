use serde::{Deserialize, Serialize};

/// Роль пользователя панели
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Manager,
    Staff,
}

impl UserRole {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Staff => "staff",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            UserRole::Admin => "Администратор",
            UserRole::Manager => "Менеджер",
            UserRole::Staff => "Сотрудник",
        }
    }

    pub fn all() -> Vec<UserRole> {
        vec![
            UserRole::Admin,
            UserRole::Manager,
            UserRole::Staff,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "admin" => Some(UserRole::Admin),
            "manager" => Some(UserRole::Manager),
            "staff" => Some(UserRole::Staff),
            _ => None,
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(UserRole::from_code("manager"), Some(UserRole::Manager));
        assert_eq!(UserRole::from_code("Manager"), None);
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }
}
