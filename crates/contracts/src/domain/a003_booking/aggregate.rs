use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::a002_unit::UnitSummary;
use crate::domain::a004_guest::GuestSummary;
use crate::enums::BookingStatus;

/// Бронирование юнита гостем
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub unit: UnitSummary,
    pub guest: GuestSummary,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub guests_count: u32,
    pub total_amount: f64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    /// Количество ночей проживания
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days().max(0)
    }
}
