use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Seeker,
    Landlord,
    Admin,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Seeker, Role::Landlord, Role::Admin];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Seeker => "SEEKER",
            Role::Landlord => "LANDLORD",
            Role::Admin => "ADMIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRole(pub String);

impl fmt::Display for UnknownRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown role: {}", self.0)
    }
}

impl std::error::Error for UnknownRole {}

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "SEEKER" => Ok(Role::Seeker),
            "LANDLORD" => Ok(Role::Landlord),
            "ADMIN" => Ok(Role::Admin),
            _ => Err(UnknownRole(value.to_string())),
        }
    }
}

/// An authenticated user as handed over by the auth layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub display_name: String,
    pub role: Role,
    pub token: Option<String>,
}

/// What the current user is allowed to look at, resolved once from the session role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewer {
    Seeker { user_id: i64 },
    Landlord { landlord_id: i64 },
    Admin,
}

impl Session {
    pub fn viewer(&self) -> Viewer {
        match self.role {
            Role::Seeker => Viewer::Seeker {
                user_id: self.user_id,
            },
            Role::Landlord => Viewer::Landlord {
                landlord_id: self.user_id,
            },
            Role::Admin => Viewer::Admin,
        }
    }
}
