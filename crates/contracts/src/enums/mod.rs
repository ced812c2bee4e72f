pub mod booking_status;
pub mod invitation_status;
pub mod item_condition;
pub mod property_type;
pub mod unit_status;
pub mod user_role;

pub use booking_status::BookingStatus;
pub use invitation_status::InvitationStatus;
pub use item_condition::ItemCondition;
pub use property_type::PropertyType;
pub use unit_status::UnitStatus;
pub use user_role::UserRole;
