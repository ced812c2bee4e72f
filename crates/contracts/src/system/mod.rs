pub mod invitations;
pub mod users;
