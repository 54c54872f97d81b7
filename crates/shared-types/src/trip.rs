use serde::{Deserialize, Serialize};
use std::fmt;

use crate::common::{matches_query, Searchable};

#[cfg(feature = "validation")]
use crate::common::not_blank;

/// Transport mode of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceType {
    Land,
    Sea,
    Air,
}

impl ServiceType {
    pub const ALL: [ServiceType; 3] = [ServiceType::Land, ServiceType::Sea, ServiceType::Air];

    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceType::Land => "land",
            ServiceType::Sea => "sea",
            ServiceType::Air => "air",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "land" => Some(ServiceType::Land),
            "sea" => Some(ServiceType::Sea),
            "air" => Some(ServiceType::Air),
            _ => None,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Vehicle used on one leg of a trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VehicleType {
    Ship,
    Truck,
    Air,
}

/// One leg of a trip, as returned by the trip details endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetail {
    pub detail_id: i64,
    pub sequence_number: i32,
    #[serde(default)]
    pub departure_location: String,
    #[serde(default)]
    pub arrival_location: String,
    pub vehicle_type: VehicleType,
    #[serde(default)]
    pub vehicle_model: String,
    #[serde(default)]
    pub carrier_company: String,
    #[serde(default)]
    pub estimated_time_minutes: i64,
    #[serde(default)]
    pub estimated_arrival: String,
    #[serde(default)]
    pub route_description: String,
    #[serde(default, rename = "CO2Emissions")]
    pub co2_emissions: String,
}

/// A scheduled trip offered by a carrier company.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub trip_id: i64,
    pub company_id: i64,
    #[serde(default)]
    pub from_location: String,
    #[serde(default)]
    pub to_location: String,
    #[serde(default)]
    pub trip_date: String,
    pub service_type: ServiceType,
    /// Decimal price as sent by the API, e.g. `"2.50"`.
    #[serde(default)]
    pub price_per_kg: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub deleted_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<TripDetail>>,
}

impl Trip {
    /// Legs in travel order.
    pub fn legs(&self) -> Vec<&TripDetail> {
        let mut legs: Vec<&TripDetail> = self.details.iter().flatten().collect();
        legs.sort_by_key(|d| d.sequence_number);
        legs
    }
}

impl Searchable for Trip {
    fn matches(&self, query: &str) -> bool {
        matches_query(
            query,
            [
                self.from_location.as_str(),
                self.to_location.as_str(),
                self.service_type.as_str(),
            ],
        )
    }
}

/// Add/edit trip form (JSON body).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct TripForm {
    #[cfg_attr(
        feature = "validation",
        validate(range(min = 1, message = "Company ID is required"))
    )]
    pub company_id: i64,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "From location is required"))
    )]
    pub from_location: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "To location is required"))
    )]
    pub to_location: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "not_blank", message = "Trip date is required"))
    )]
    pub trip_date: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "service_type", message = "Service type must be land, sea or air"))
    )]
    pub service_type: String,
    #[cfg_attr(
        feature = "validation",
        validate(custom(function = "price", message = "Price per kg must be a non-negative number"))
    )]
    pub price_per_kg: String,
}

#[cfg(feature = "validation")]
fn service_type(value: &str) -> Result<(), validator::ValidationError> {
    ServiceType::parse(value)
        .map(|_| ())
        .ok_or_else(|| validator::ValidationError::new("service_type"))
}

#[cfg(feature = "validation")]
fn price(value: &str) -> Result<(), validator::ValidationError> {
    match value.trim().parse::<f64>() {
        Ok(p) if p >= 0.0 && p.is_finite() => Ok(()),
        _ => Err(validator::ValidationError::new("price")),
    }
}
