use serde::{Deserialize, Serialize};

/// Состояние позиции инвентаря
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemCondition {
    New,
    Good,
    Worn,
    Damaged,
}

impl ItemCondition {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            ItemCondition::New => "new",
            ItemCondition::Good => "good",
            ItemCondition::Worn => "worn",
            ItemCondition::Damaged => "damaged",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            ItemCondition::New => "Новое",
            ItemCondition::Good => "Хорошее",
            ItemCondition::Worn => "Изношено",
            ItemCondition::Damaged => "Повреждено",
        }
    }

    pub fn all() -> Vec<ItemCondition> {
        vec![
            ItemCondition::New,
            ItemCondition::Good,
            ItemCondition::Worn,
            ItemCondition::Damaged,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "new" => Some(ItemCondition::New),
            "good" => Some(ItemCondition::Good),
            "worn" => Some(ItemCondition::Worn),
            "damaged" => Some(ItemCondition::Damaged),
            _ => None,
        }
    }
}

impl std::fmt::Display for ItemCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
