pub mod common;
pub mod config;
pub mod error;
pub mod models;

// Logistics entities
pub mod company;
pub mod port;
pub mod shipment;
pub mod trip;
pub mod user;

pub use common::*;
pub use config::*;
pub use error::*;
pub use models::*;

pub use company::*;
pub use port::*;
pub use shipment::*;
pub use trip::*;
pub use user::*;
