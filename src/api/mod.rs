//! API Binding Layer
//!
//! Thin bindings to the backend REST API, organized by domain. The backend
//! contract is fixed: compartment lists arrive sorted by `sort_order`, and
//! the bulk reorder call applies all-or-nothing.

mod client;
mod gateway;
mod fridge_api;
mod food_api;
mod notification_api;

pub use client::{ApiClient, ApiConfig};
pub use gateway::CompartmentGateway;
pub use fridge_api::{FridgeUpdate, NewCompartment, NewFridge};
pub use notification_api::NotificationSettingsUpdate;
