use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix used by older accounts for the same role names (`ROLE_ADMIN`, ...).
const LEGACY_ROLE_PREFIX: &str = "ROLE_";

/// Canonical user role.
///
/// The backend hands out both bare role names and `ROLE_`-prefixed ones for the
/// same role. Both parse to the same variant, and serialization always writes
/// the bare form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Role {
    Admin,
    TravelAgency,
    Traveller,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::TravelAgency, Role::Traveller];

    /// Wire name understood by the backend.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::TravelAgency => "TRAVEL_AGENCY",
            Role::Traveller => "TRAVELLER",
        }
    }

    /// Human readable name for menus and forms.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::TravelAgency => "Travel Agency",
            Role::Traveller => "Traveller",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        let bare = upper.strip_prefix(LEGACY_ROLE_PREFIX).unwrap_or(&upper);

        match bare {
            "ADMIN" => Ok(Role::Admin),
            "TRAVEL_AGENCY" => Ok(Role::TravelAgency),
            "TRAVELLER" => Ok(Role::Traveller),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

impl TryFrom<String> for Role {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Role::from_str(&value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// The authenticated user, the unit of session state.
///
/// Login and registration responses never agreed on the id field name, so
/// `userId` and `ID` are accepted as well. Unknown fields such as the legacy
/// `isLoggedIn` flag are ignored: holding an identity is being logged in.
pub struct Identity {
    /// Username, also used by the backend to scope bookings and complaints.
    pub username: String,
    /// Normalized role.
    pub role: Role,
    /// Numeric user id when the backend provided one.
    #[serde(default, alias = "userId", alias = "ID", skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Agency display name, only meaningful for travel agency accounts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_agency_name: Option<String>,
}

impl Identity {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            id: None,
            email: None,
            name: None,
            travel_agency_name: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }

    /// Check if the identity holds any of the given roles
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.contains(&self.role)
    }

    /// Name shown in the navigation bar.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().filter(|n| !n.trim().is_empty()).unwrap_or(&self.username)
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.role)
    }
}

/// Reasons a login response cannot be turned into an [`Identity`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("login response did not include a username")]
    MissingUsername,
    #[error("login response did not include a role")]
    MissingRole,
    #[error("login response carried an unknown role '{0}'")]
    UnknownRole(String),
    #[error("login response reported the user as logged out")]
    NotLoggedIn,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
/// Credentials submitted to the login endpoint (sent as query parameters).
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Body returned by a successful login.
pub struct LoginResponse {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default, alias = "userId", alias = "ID")]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub travel_agency_name: Option<String>,
    #[serde(default)]
    pub is_logged_in: Option<bool>,
}

impl LoginResponse {
    /// Build the session identity strictly from what the server returned.
    ///
    /// Nothing is filled in on the client side: a response without a usable
    /// username or role is rejected instead of guessed.
    pub fn into_identity(self) -> Result<Identity, IdentityError> {
        if self.is_logged_in == Some(false) {
            return Err(IdentityError::NotLoggedIn);
        }

        let username = self
            .username
            .filter(|u| !u.trim().is_empty())
            .ok_or(IdentityError::MissingUsername)?;
        let raw_role = self.role.filter(|r| !r.trim().is_empty()).ok_or(IdentityError::MissingRole)?;
        let role = Role::from_str(&raw_role).map_err(|_| IdentityError::UnknownRole(raw_role))?;

        Ok(Identity {
            username,
            role,
            id: self.id,
            email: self.email,
            name: self.name,
            travel_agency_name: self.travel_agency_name,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Account registration payload.
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    /// Required when registering a travel agency.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub travel_agency_name: Option<String>,
}

impl RegisterRequest {
    /// Credentials for the follow-up login after a successful registration.
    pub fn login_request(&self) -> LoginRequest {
        LoginRequest {
            username: self.username.clone(),
            password: self.password.clone(),
        }
    }
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
