use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_property::PropertySummary;
use crate::enums::UnitStatus;

/// Помещение внутри объекта (квартира, номер)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Unit {
    pub id: Uuid,
    pub property: PropertySummary,
    /// Номер/обозначение, например "2A"
    pub name: String,
    pub floor: i32,
    pub bedrooms: u8,
    /// Стоимость аренды за месяц
    pub rent: f64,
    pub status: UnitStatus,
    pub is_furnished: bool,
    pub created_at: DateTime<Utc>,
}

impl Unit {
    pub fn summary(&self) -> UnitSummary {
        UnitSummary {
            id: self.id,
            name: self.name.clone(),
            property_name: self.property.name.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitSummary {
    pub id: Uuid,
    pub name: String,
    pub property_name: String,
}
