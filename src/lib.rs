//! Fridge Elf Client
//!
//! Client-side domain and REST bindings for the Fridge Elf inventory
//! tracker. Layered architecture:
//! - domain: Core entities and business rules
//! - api: Thin bindings to the backend REST API
//! - reorder: Compartment ordering sessions and the commit flow
//! - capacity: Fridge usage estimation
//!
//! Rendering, routing and authentication flows live in the embedding
//! application; this crate only hands it data.

pub mod domain;
pub mod api;
pub mod reorder;
pub mod capacity;

pub use api::{ApiClient, ApiConfig, CompartmentGateway};
pub use capacity::{estimate_usage, CapacityUsage, DEFAULT_ITEM_VOLUME_LITERS};
pub use domain::{
    Compartment, CompartmentCategory, CompartmentMode, DomainError, DomainResult, Entity,
    FoodItem, FoodItemStatus, Fridge, FridgeDetail, NotificationSettings, StorageType,
};
pub use reorder::{commit_reorder, CompartmentOrder, ReorderSession};
