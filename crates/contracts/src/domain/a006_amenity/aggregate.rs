use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Удобство (Wi-Fi, парковка, бассейн)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amenity {
    pub id: Uuid,
    pub name: String,
    pub category: String,
    pub icon: Option<String>,
    pub is_available: bool,
}
