use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::therapist::TherapistId;

pub type UserId = u32;

/// Staff role. Determines the URL prefix a user lives under and how much
/// of the patient roster they may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Role {
    Admin,
    Therapist,
    Secretary,
    Accountant,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Therapist, Role::Secretary, Role::Accountant];

    /// Lowercase form used as the first URL path segment.
    pub fn path_segment(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Therapist => "therapist",
            Role::Secretary => "secretary",
            Role::Accountant => "accountant",
        }
    }

    /// Human-readable title shown in the settings screens.
    pub fn title(&self) -> &'static str {
        match self {
            Role::Admin => "System administrator",
            Role::Therapist => "Therapist",
            Role::Secretary => "Secretariat",
            Role::Accountant => "Accounting",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub name: String,
    pub role: Role,
    /// Set only for `Role::Therapist` users; links the account to its
    /// therapist record.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub therapist_id: Option<TherapistId>,
}

/// Input for creating a user. The password is required at creation and
/// discarded by the mock data layer.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub therapist_id: Option<TherapistId>,
    pub password: String,
}
