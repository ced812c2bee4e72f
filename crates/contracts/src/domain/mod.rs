pub mod a001_property;
pub mod a002_unit;
pub mod a003_booking;
pub mod a004_guest;
pub mod a005_inventory;
pub mod a006_amenity;
