use serde::{Deserialize, Serialize};

use crate::common::{matches_query, Searchable};

#[cfg(feature = "validation")]
use crate::common::not_blank;

/// A tracked shipment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shipment {
    pub shipment_id: i64,
    #[serde(default)]
    pub tracking_number: String,
    #[serde(default)]
    pub carrier_id: i64,
    #[serde(default)]
    pub current_status: String,
    #[serde(default)]
    pub current_location: String,
    #[serde(default)]
    pub estimated_delivery_date: String,
    #[serde(default)]
    pub origin_address: String,
    #[serde(default)]
    pub destination_address: String,
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Searchable for Shipment {
    fn matches(&self, query: &str) -> bool {
        matches_query(
            query,
            [
                self.tracking_number.as_str(),
                self.origin_address.as_str(),
                self.destination_address.as_str(),
            ],
        )
    }
}

/// Create/update body for a shipment (JSON).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct ShipmentForm {
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Tracking number is required"))
    )]
    pub tracking_number: String,
    pub carrier_id: i64,
    pub current_status: String,
    pub current_location: String,
    pub estimated_delivery_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Origin address is required"))
    )]
    pub origin_address: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Destination address is required"))
    )]
    pub destination_address: String,
    pub user_id: i64,
}
