//! Binding of each entity type to its endpoints and request bodies.

use reqwest::Method;
use serde::de::DeserializeOwned;
use shared_types::{
    AppError, Company, CompanyForm, CreateUserRequest, Port, Shipment, ShipmentForm, Trip,
    TripForm, UpdateUserRequest, User,
};
use validator::{Validate, ValidationErrors};

use crate::body::RequestBody;

/// Endpoint set for one entity. `{id}` in a path is replaced by the record id.
#[derive(Debug)]
pub struct Endpoints {
    pub list: &'static str,
    /// Key holding the array when the list answer is wrapped in an object.
    pub list_key: Option<&'static str>,
    pub detail: &'static str,
    /// Key holding the record when single-record answers are wrapped.
    pub item_key: Option<&'static str>,
    pub create: Option<&'static str>,
    pub update: Option<(Method, &'static str)>,
    pub messages: Messages,
}

/// Fallback error messages, used when the API answer carries none.
#[derive(Debug)]
pub struct Messages {
    pub fetch_all: &'static str,
    pub fetch_one: &'static str,
    pub create: &'static str,
    pub update: &'static str,
}

impl Endpoints {
    pub fn detail_path(&self, id: i64) -> String {
        self.detail.replace("{id}", &id.to_string())
    }
}

/// An entity the dashboard keeps a remote collection of.
pub trait Resource: DeserializeOwned + Clone + Send + Sync + 'static {
    /// Singular name used in logs.
    const NAME: &'static str;

    type CreateForm: Validate + Send;
    type UpdateForm: Validate + Send;

    fn id(&self) -> i64;

    fn endpoints() -> &'static Endpoints;

    fn create_body(form: Self::CreateForm) -> Result<RequestBody, AppError>;

    fn update_body(id: i64, form: Self::UpdateForm) -> Result<RequestBody, AppError>;

    /// Pull the record out of a single-record answer.
    fn decode_item(value: serde_json::Value) -> Result<Self, AppError> {
        decode(unwrap_key(value, Self::endpoints().item_key)?, Self::NAME)
    }

    /// Pull the records out of a list answer.
    fn decode_list(value: serde_json::Value) -> Result<Vec<Self>, AppError> {
        decode(unwrap_key(value, Self::endpoints().list_key)?, Self::NAME)
    }
}

fn unwrap_key(value: serde_json::Value, key: Option<&str>) -> Result<serde_json::Value, AppError> {
    match key {
        None => Ok(value),
        Some(key) => match value {
            serde_json::Value::Object(mut map) => map
                .remove(key)
                .ok_or_else(|| AppError::decode(format!("Response is missing `{key}`"))),
            _ => Err(AppError::decode(format!("Expected an object holding `{key}`"))),
        },
    }
}

fn decode<T: DeserializeOwned>(value: serde_json::Value, name: &str) -> Result<T, AppError> {
    serde_json::from_value(value).map_err(|e| AppError::decode(format!("Malformed {name} data: {e}")))
}

/// Form type of a read-only resource. Uninhabited: create and update
/// cannot be called on such a slice.
#[derive(Debug)]
pub enum ReadOnly {}

impl Validate for ReadOnly {
    fn validate(&self) -> Result<(), ValidationErrors> {
        match *self {}
    }
}

// ── Users ─────────────────────────────────────────────

static USER_ENDPOINTS: Endpoints = Endpoints {
    list: "/get-users",
    list_key: None,
    detail: "/get-user/{id}",
    item_key: None,
    create: Some("/create-user"),
    update: Some((Method::PUT, "/update-user-profile")),
    messages: Messages {
        fetch_all: "Failed to fetch users",
        fetch_one: "Failed to fetch user",
        create: "Failed to create user",
        update: "Failed to update user profile",
    },
};

impl Resource for User {
    const NAME: &'static str = "user";
    type CreateForm = CreateUserRequest;
    type UpdateForm = UpdateUserRequest;

    fn id(&self) -> i64 {
        self.user_id
    }

    fn endpoints() -> &'static Endpoints {
        &USER_ENDPOINTS
    }

    fn create_body(form: CreateUserRequest) -> Result<RequestBody, AppError> {
        Ok(RequestBody::form()
            .text("username", form.username)
            .text("full_name", form.full_name)
            .text("email", form.email)
            .text("password", form.password)
            .text("phone", form.phone)
            .text("role", form.role)
            .file("image", form.image)
            .build())
    }

    // The profile endpoint has no id in its path; the id travels in the form.
    fn update_body(id: i64, form: UpdateUserRequest) -> Result<RequestBody, AppError> {
        Ok(RequestBody::form()
            .text("userId", id.to_string())
            .text_opt("full_name", form.full_name)
            .text_opt("email", form.email)
            .text_opt("phone", form.phone)
            .text_opt("role", form.role)
            .text_opt("status", form.status)
            .file("image", form.image)
            .build())
    }
}

// ── Companies ─────────────────────────────────────────

static COMPANY_ENDPOINTS: Endpoints = Endpoints {
    list: "/get-companies",
    list_key: None,
    detail: "/get-company/{id}",
    item_key: None,
    create: Some("/create-company"),
    update: Some((Method::PUT, "/update-company/{id}")),
    messages: Messages {
        fetch_all: "Failed to fetch companies",
        fetch_one: "Failed to fetch company",
        create: "Failed to create company",
        update: "Failed to update company",
    },
};

fn company_form(form: CompanyForm) -> RequestBody {
    RequestBody::form()
        .text("name", form.name)
        .text("email", form.email)
        .text("phoneNumber", form.phone_number)
        .text("place", form.place)
        .text("isActive", form.is_active.to_string())
        .file("logo", form.logo)
        .build()
}

impl Resource for Company {
    const NAME: &'static str = "company";
    type CreateForm = CompanyForm;
    type UpdateForm = CompanyForm;

    fn id(&self) -> i64 {
        self.company_id
    }

    fn endpoints() -> &'static Endpoints {
        &COMPANY_ENDPOINTS
    }

    fn create_body(form: CompanyForm) -> Result<RequestBody, AppError> {
        Ok(company_form(form))
    }

    fn update_body(_id: i64, form: CompanyForm) -> Result<RequestBody, AppError> {
        Ok(company_form(form))
    }
}

// ── Shipments ─────────────────────────────────────────

static SHIPMENT_ENDPOINTS: Endpoints = Endpoints {
    list: "/get-all-shipments",
    list_key: None,
    detail: "/get-shipment/{id}",
    item_key: None,
    create: Some("/create-shipment"),
    update: Some((Method::PUT, "/update-shipment/{id}")),
    messages: Messages {
        fetch_all: "Failed to fetch shipments",
        fetch_one: "Failed to fetch shipment",
        create: "Failed to create shipment",
        update: "Failed to update shipment",
    },
};

impl Resource for Shipment {
    const NAME: &'static str = "shipment";
    type CreateForm = ShipmentForm;
    type UpdateForm = ShipmentForm;

    fn id(&self) -> i64 {
        self.shipment_id
    }

    fn endpoints() -> &'static Endpoints {
        &SHIPMENT_ENDPOINTS
    }

    fn create_body(form: ShipmentForm) -> Result<RequestBody, AppError> {
        RequestBody::json(&form)
    }

    fn update_body(_id: i64, form: ShipmentForm) -> Result<RequestBody, AppError> {
        RequestBody::json(&form)
    }
}

// ── Trips ─────────────────────────────────────────────

static TRIP_ENDPOINTS: Endpoints = Endpoints {
    list: "/getAllTrips",
    list_key: Some("trips"),
    detail: "/trips/{id}/details",
    item_key: Some("trip"),
    create: Some("/addTrip"),
    update: Some((Method::PUT, "/trips/{id}")),
    messages: Messages {
        fetch_all: "Failed to fetch trips",
        fetch_one: "Failed to fetch trip details",
        create: "Failed to add trip",
        update: "Failed to update trip",
    },
};

impl Resource for Trip {
    const NAME: &'static str = "trip";
    type CreateForm = TripForm;
    type UpdateForm = TripForm;

    fn id(&self) -> i64 {
        self.trip_id
    }

    fn endpoints() -> &'static Endpoints {
        &TRIP_ENDPOINTS
    }

    fn create_body(form: TripForm) -> Result<RequestBody, AppError> {
        RequestBody::json(&normalized_trip(form))
    }

    fn update_body(_id: i64, form: TripForm) -> Result<RequestBody, AppError> {
        RequestBody::json(&normalized_trip(form))
    }
}

fn normalized_trip(mut form: TripForm) -> TripForm {
    form.service_type = form.service_type.trim().to_lowercase();
    form.price_per_kg = form.price_per_kg.trim().to_string();
    form
}

// ── Ports ─────────────────────────────────────────────

static PORT_ENDPOINTS: Endpoints = Endpoints {
    list: "/port-codes",
    list_key: Some("portCodes"),
    detail: "/port-codes/{id}",
    item_key: None,
    create: None,
    update: None,
    messages: Messages {
        fetch_all: "Failed to fetch port codes",
        fetch_one: "Failed to fetch port code",
        create: "Port codes are read-only",
        update: "Port codes are read-only",
    },
};

impl Resource for Port {
    const NAME: &'static str = "port";
    type CreateForm = ReadOnly;
    type UpdateForm = ReadOnly;

    fn id(&self) -> i64 {
        self.id
    }

    fn endpoints() -> &'static Endpoints {
        &PORT_ENDPOINTS
    }

    fn create_body(form: ReadOnly) -> Result<RequestBody, AppError> {
        match form {}
    }

    fn update_body(_id: i64, form: ReadOnly) -> Result<RequestBody, AppError> {
        match form {}
    }
}
