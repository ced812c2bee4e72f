use serde::{Deserialize, Serialize};

/// Статус помещения (юнита)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitStatus {
    Available,
    Occupied,
    Maintenance,
}

impl UnitStatus {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            UnitStatus::Available => "available",
            UnitStatus::Occupied => "occupied",
            UnitStatus::Maintenance => "maintenance",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            UnitStatus::Available => "Свободно",
            UnitStatus::Occupied => "Занято",
            UnitStatus::Maintenance => "На обслуживании",
        }
    }

    pub fn all() -> Vec<UnitStatus> {
        vec![
            UnitStatus::Available,
            UnitStatus::Occupied,
            UnitStatus::Maintenance,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "available" => Some(UnitStatus::Available),
            "occupied" => Some(UnitStatus::Occupied),
            "maintenance" => Some(UnitStatus::Maintenance),
            _ => None,
        }
    }
}

impl std::fmt::Display for UnitStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
