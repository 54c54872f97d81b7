use serde::{Deserialize, Serialize};

use crate::common::{matches_query, Attachment, Searchable};

#[cfg(feature = "validation")]
use crate::common::{image_attachment, not_blank};

/// A carrier company registered on the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub company_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub place: String,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Searchable for Company {
    fn matches(&self, query: &str) -> bool {
        matches_query(
            query,
            [
                self.name.as_str(),
                self.email.as_str(),
                self.phone_number.as_deref().unwrap_or_default(),
            ],
        )
    }
}

/// Create/edit form for a company. Sent as multipart with an optional logo.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct CompanyForm {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Company name is required"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Valid email is required"))
    )]
    pub email: String,
    pub phone_number: String,
    pub place: String,
    pub is_active: bool,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "image_attachment", message = "Logo must be a png, jpeg or gif"))
    )]
    pub logo: Option<Attachment>,
}
