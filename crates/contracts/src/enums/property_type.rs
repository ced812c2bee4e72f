use serde::{Deserialize, Serialize};

/// Тип объекта недвижимости
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyType {
    Apartment,
    House,
    Hotel,
    Hostel,
    Villa,
}

impl PropertyType {
    /// Код значения (совпадает с сериализованным видом и значением select-фильтра)
    pub fn code(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "apartment",
            PropertyType::House => "house",
            PropertyType::Hotel => "hotel",
            PropertyType::Hostel => "hostel",
            PropertyType::Villa => "villa",
        }
    }

    /// Получить человекочитаемое название
    pub fn display_name(&self) -> &'static str {
        match self {
            PropertyType::Apartment => "Апартаменты",
            PropertyType::House => "Дом",
            PropertyType::Hotel => "Гостиница",
            PropertyType::Hostel => "Хостел",
            PropertyType::Villa => "Вилла",
        }
    }

    pub fn all() -> Vec<PropertyType> {
        vec![
            PropertyType::Apartment,
            PropertyType::House,
            PropertyType::Hotel,
            PropertyType::Hostel,
            PropertyType::Villa,
        ]
    }

    /// Парсинг из строки
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "apartment" => Some(PropertyType::Apartment),
            "house" => Some(PropertyType::House),
            "hotel" => Some(PropertyType::Hotel),
            "hostel" => Some(PropertyType::Hostel),
            "villa" => Some(PropertyType::Villa),
            _ => None,
        }
    }
}

impl std::fmt::Display for PropertyType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
