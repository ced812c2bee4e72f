use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a001_property::PropertySummary;
use crate::enums::ItemCondition;

/// Позиция инвентаря объекта
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InventoryItem {
    pub id: Uuid,
    pub property: PropertySummary,
    pub name: String,
    pub category: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub condition: ItemCondition,
    pub last_checked_at: Option<NaiveDate>,
}

impl InventoryItem {
    pub fn total_value(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }
}
