// ── Session user ──
//
// The console takes the signed-in user as given. Only `kind` matters to
// the rest of the system: it picks the dashboard.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum UserKind {
    Admin,
    Client,
}

/// Landing page for a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
pub enum Dashboard {
    #[strum(to_string = "admin dashboard")]
    Admin,
    #[strum(to_string = "client dashboard")]
    Client,
}

impl Dashboard {
    pub fn route(self) -> &'static str {
        match self {
            Self::Admin => "/admin",
            Self::Client => "/client-dashboard",
        }
    }
}

/// The persisted signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: UserKind,
}

impl SessionUser {
    /// New user with a freshly generated id.
    pub fn new(email: impl Into<String>, name: impl Into<String>, kind: UserKind) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            email: email.into(),
            name: name.into(),
            kind,
        }
    }

    pub fn dashboard(&self) -> Dashboard {
        match self.kind {
            UserKind::Admin => Dashboard::Admin,
            UserKind::Client => Dashboard::Client,
        }
    }
}
