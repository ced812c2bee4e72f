//! Настройки списков по разделам панели: поля поиска, select-фильтры, сортировка.

use contracts::shared::list_query::SortOrder;

use crate::error::ListError;
use crate::path::FieldPath;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPreset {
    pub name: &'static str,
    /// Поля свободного поиска
    pub search_fields: &'static [&'static str],
    /// Поля, доступные для select-фильтров
    pub select_fields: &'static [&'static str],
    /// Поля, по которым разрешена сортировка
    pub sort_fields: &'static [&'static str],
    pub default_sort: (&'static str, SortOrder),
}

impl ListPreset {
    pub fn search_paths(&self) -> Result<Vec<FieldPath>, ListError> {
        FieldPath::parse_all(self.search_fields)
    }

    pub fn allows_select(&self, field: &str) -> bool {
        self.select_fields.iter().any(|f| *f == field)
    }

    pub fn allows_sort(&self, field: &str) -> bool {
        self.sort_fields.iter().any(|f| *f == field)
    }
}

pub const PROPERTIES: ListPreset = ListPreset {
    name: "properties",
    search_fields: &["name", "address", "city"],
    select_fields: &["property_type", "city", "is_active"],
    sort_fields: &["units_count", "created_at"],
    default_sort: ("created_at", SortOrder::Descending),
};

pub const UNITS: ListPreset = ListPreset {
    name: "units",
    search_fields: &["name", "property.name"],
    select_fields: &["status", "bedrooms", "is_furnished"],
    sort_fields: &["rent", "floor", "bedrooms", "created_at"],
    default_sort: ("rent", SortOrder::Ascending),
};

pub const BOOKINGS: ListPreset = ListPreset {
    name: "bookings",
    search_fields: &[
        "guest.first_name",
        "guest.last_name",
        "guest.email",
        "unit.name",
        "unit.property_name",
    ],
    select_fields: &["status", "unit.property_name"],
    sort_fields: &["check_in", "check_out", "total_amount", "created_at"],
    default_sort: ("check_in", SortOrder::Descending),
};

pub const GUESTS: ListPreset = ListPreset {
    name: "guests",
    search_fields: &["first_name", "last_name", "email", "phone"],
    select_fields: &["nationality", "is_vip"],
    sort_fields: &["total_bookings", "created_at"],
    default_sort: ("created_at", SortOrder::Descending),
};

pub const INVENTORY: ListPreset = ListPreset {
    name: "inventory",
    search_fields: &["name", "category", "property.name"],
    select_fields: &["category", "condition", "property.name"],
    sort_fields: &["quantity", "unit_price", "last_checked_at"],
    default_sort: ("quantity", SortOrder::Ascending),
};

pub const AMENITIES: ListPreset = ListPreset {
    name: "amenities",
    search_fields: &["name", "category"],
    select_fields: &["category", "is_available"],
    sort_fields: &[],
    default_sort: ("name", SortOrder::None),
};

pub const USERS: ListPreset = ListPreset {
    name: "users",
    search_fields: &["username", "full_name", "email"],
    select_fields: &["role", "is_active"],
    sort_fields: &["created_at", "last_login_at"],
    default_sort: ("created_at", SortOrder::Descending),
};

pub const INVITATIONS: ListPreset = ListPreset {
    name: "invitations",
    search_fields: &["email", "invited_by"],
    select_fields: &["status", "role"],
    sort_fields: &["created_at", "expires_at"],
    default_sort: ("expires_at", SortOrder::Ascending),
};

pub const ALL_PRESETS: &[&ListPreset] = &[
    &PROPERTIES,
    &UNITS,
    &BOOKINGS,
    &GUESTS,
    &INVENTORY,
    &AMENITIES,
    &USERS,
    &INVITATIONS,
];

pub fn by_name(name: &str) -> Option<&'static ListPreset> {
    ALL_PRESETS.iter().copied().find(|preset| preset.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Record, Row};
    use chrono::{NaiveDate, TimeZone, Utc};
    use contracts::domain::a001_property::{Property, PropertySummary};
    use contracts::domain::a002_unit::{Unit, UnitSummary};
    use contracts::domain::a003_booking::Booking;
    use contracts::domain::a004_guest::Guest;
    use contracts::domain::a005_inventory::InventoryItem;
    use contracts::domain::a006_amenity::Amenity;
    use contracts::enums::*;
    use contracts::system::invitations::Invitation;
    use contracts::system::users::User;
    use uuid::Uuid;

    fn assert_paths_resolve<R: Record>(preset: &ListPreset, record: &R) {
        let paths = preset
            .search_fields
            .iter()
            .chain(preset.select_fields)
            .chain(preset.sort_fields);
        for path in paths {
            let path = FieldPath::parse(path).unwrap();
            assert!(
                record.field(&path).is_some(),
                "{}: path '{}' does not resolve",
                preset.name,
                path
            );
        }
    }

    fn property_summary() -> PropertySummary {
        PropertySummary {
            id: Uuid::new_v4(),
            name: "Seaside Residence".to_string(),
        }
    }

    #[test]
    fn test_domain_presets_resolve() {
        let created_at = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();
        let property = Property {
            id: Uuid::new_v4(),
            name: "Seaside Residence".to_string(),
            address: "12 Harbour St".to_string(),
            city: "Lisbon".to_string(),
            property_type: PropertyType::Apartment,
            units_count: 12,
            is_active: true,
            created_at,
        };
        let unit = Unit {
            id: Uuid::new_v4(),
            property: property.summary(),
            name: "2A".to_string(),
            floor: 2,
            bedrooms: 1,
            rent: 1200.0,
            status: UnitStatus::Available,
            is_furnished: true,
            created_at,
        };
        let guest = Guest {
            id: Uuid::new_v4(),
            first_name: "Alice".to_string(),
            last_name: "Moreau".to_string(),
            email: "alice@example.com".to_string(),
            phone: Some("+351 900 000 000".to_string()),
            nationality: Some("FR".to_string()),
            is_vip: false,
            total_bookings: 3,
            created_at,
        };
        let booking = Booking {
            id: Uuid::new_v4(),
            unit: unit.summary(),
            guest: guest.summary(),
            check_in: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            check_out: NaiveDate::from_ymd_opt(2024, 3, 14).unwrap(),
            guests_count: 2,
            total_amount: 480.0,
            status: BookingStatus::Confirmed,
            notes: None,
            created_at,
        };
        let item = InventoryItem {
            id: Uuid::new_v4(),
            property: property_summary(),
            name: "Bath towel".to_string(),
            category: "linen".to_string(),
            quantity: 40,
            unit_price: 7.5,
            condition: ItemCondition::Good,
            last_checked_at: NaiveDate::from_ymd_opt(2024, 2, 1),
        };
        let amenity = Amenity {
            id: Uuid::new_v4(),
            name: "Pool".to_string(),
            category: "outdoor".to_string(),
            icon: None,
            is_available: true,
        };

        assert_paths_resolve(&PROPERTIES, &Row::new(property).unwrap());
        assert_paths_resolve(&UNITS, &Row::new(unit).unwrap());
        assert_paths_resolve(&GUESTS, &Row::new(guest).unwrap());
        assert_paths_resolve(&BOOKINGS, &Row::new(booking).unwrap());
        assert_paths_resolve(&INVENTORY, &Row::new(item).unwrap());
        assert_paths_resolve(&AMENITIES, &Row::new(amenity).unwrap());
    }

    #[test]
    fn test_system_presets_resolve() {
        let user = User {
            id: "u-1".to_string(),
            username: "ann".to_string(),
            email: Some("ann@example.com".to_string()),
            full_name: Some("Ann Lee".to_string()),
            role: UserRole::Manager,
            is_active: true,
            created_at: "2024-01-02T10:00:00Z".to_string(),
            updated_at: "2024-01-02T10:00:00Z".to_string(),
            last_login_at: Some("2024-05-01T08:15:00Z".to_string()),
            created_by: None,
        };
        let invitation = Invitation {
            id: "inv-1".to_string(),
            email: "new.staff@example.com".to_string(),
            role: UserRole::Staff,
            status: InvitationStatus::Pending,
            invited_by: Some("ann".to_string()),
            created_at: "2024-05-01T08:15:00Z".to_string(),
            expires_at: "2024-05-08T08:15:00Z".to_string(),
        };

        assert_paths_resolve(&USERS, &Row::new(user).unwrap());
        assert_paths_resolve(&INVITATIONS, &Row::new(invitation).unwrap());
    }

    #[test]
    fn test_by_name() {
        assert_eq!(by_name("bookings"), Some(&BOOKINGS));
        assert!(by_name("payments").is_none());
        for preset in ALL_PRESETS {
            assert!(preset.search_paths().is_ok(), "{}", preset.name);
        }
    }

    #[test]
    fn test_unit_summary_carries_property_name() {
        let summary = UnitSummary {
            id: Uuid::new_v4(),
            name: "3B".to_string(),
            property_name: property_summary().name,
        };
        let row = Row::new(summary).unwrap();
        let path = FieldPath::parse("property_name").unwrap();
        assert_eq!(row.field(&path).and_then(|v| v.as_str()), Some("Seaside Residence"));
    }
}
