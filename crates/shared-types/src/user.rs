use serde::{Deserialize, Serialize};

use crate::common::{matches_query, Attachment, Searchable};

#[cfg(feature = "validation")]
use crate::common::{image_attachment, not_blank};

/// A dashboard user account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default, rename = "full_name")]
    pub full_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Searchable for User {
    fn matches(&self, query: &str) -> bool {
        matches_query(query, [self.full_name.as_str(), self.email.as_str()])
    }
}

/// Form for creating a user. Sent as multipart so a profile image can ride along.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CreateUserRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, message = "Username must be at least 3 characters"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Full name is required"))
    )]
    pub full_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 6, message = "Password must be at least 6 characters"))
    )]
    pub password: String,
    pub phone: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Role is required"))
    )]
    pub role: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "image_attachment", message = "Profile image must be a png, jpeg or gif"))
    )]
    pub image: Option<Attachment>,
}

/// Profile update form. Absent fields are left untouched by the API.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct UpdateUserRequest {
    pub full_name: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub status: Option<String>,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "image_attachment", message = "Profile image must be a png, jpeg or gif"))
    )]
    pub image: Option<Attachment>,
}
