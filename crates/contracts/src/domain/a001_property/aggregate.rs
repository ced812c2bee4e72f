use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::enums::PropertyType;

/// Объект недвижимости (дом, гостиница, комплекс апартаментов)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: Uuid,
    pub name: String,
    pub address: String,
    pub city: String,
    pub property_type: PropertyType,
    pub units_count: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Property {
    pub fn summary(&self) -> PropertySummary {
        PropertySummary {
            id: self.id,
            name: self.name.clone(),
        }
    }
}

/// Краткая ссылка на объект, вложенная в юниты и инвентарь
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySummary {
    pub id: Uuid,
    pub name: String,
}
