use serde::{Deserialize, Serialize};

use crate::enums::{InvitationStatus, UserRole};

/// Приглашение нового пользователя в панель
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub status: InvitationStatus,
    pub invited_by: Option<String>,
    pub created_at: String,
    pub expires_at: String,
}
