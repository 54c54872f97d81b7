use serde::{Deserialize, Serialize};

use crate::common::{matches_query, Searchable};

/// A UN/LOCODE port entry used to pick trip endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Port {
    pub id: i64,
    #[serde(default)]
    pub locode: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub country_name: String,
    #[serde(default)]
    pub port_code: String,
    #[serde(default)]
    pub port_name: String,
}

impl Port {
    /// Label shown in the trip form's location picker.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.port_name, self.port_code)
    }
}

impl Searchable for Port {
    fn matches(&self, query: &str) -> bool {
        matches_query(
            query,
            [
                self.port_name.as_str(),
                self.port_code.as_str(),
                self.locode.as_str(),
            ],
        )
    }
}
