use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use crate::common::not_blank;

/// Dashboard role carried by the authenticated session.
///
/// - `SuperAdmin`: platform operator. Manages users, companies and all shipments.
/// - `CompanyAdmin`: operator of one carrier company. Manages its trips and shipments.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum UserRole {
    #[serde(rename = "superAdmin")]
    SuperAdmin,
    #[serde(rename = "companyAdmin")]
    CompanyAdmin,
}

impl UserRole {
    pub const ALL: [UserRole; 2] = [UserRole::SuperAdmin, UserRole::CompanyAdmin];

    /// Parse the role string issued by the API. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "superAdmin" => Some(UserRole::SuperAdmin),
            "companyAdmin" => Some(UserRole::CompanyAdmin),
            _ => None,
        }
    }

    /// Wire form, as stored in the session.
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "superAdmin",
            UserRole::CompanyAdmin => "companyAdmin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            UserRole::SuperAdmin => "Super Admin",
            UserRole::CompanyAdmin => "Company Admin",
        }
    }
}

/// Login form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct LoginRequest {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Email or Username is required."))
    )]
    pub username_or_email: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Password is required."))
    )]
    pub password: String,
}

impl LoginRequest {
    pub fn new(username_or_email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username_or_email: username_or_email.into(),
            password: password.into(),
        }
    }
}

/// The authenticated user as returned by the login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: String,
    #[serde(default, alias = "full_name")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub role: String,
}

/// Successful login answer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: AuthUser,
}

/// The persisted authentication session.
///
/// `role` is kept as the raw string the API issued so that an unknown role
/// survives a reload and simply yields no navigation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Session {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

impl Session {
    pub fn from_login(response: &LoginResponse) -> Self {
        Self {
            token: Some(response.token.clone()),
            role: Some(response.user.role.clone()).filter(|role| !role.is_empty()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    pub fn user_role(&self) -> Option<UserRole> {
        self.role.as_deref().and_then(UserRole::parse)
    }
}
