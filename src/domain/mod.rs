//! Domain Layer
//!
//! Contains all domain entities and core abstractions.
//! This layer has NO external dependencies (except serde/chrono for serialization).

mod entity;
mod compartment;
mod fridge;
mod food_item;
mod notification;

pub use entity::{Entity, DomainError, DomainResult};
pub use compartment::{Compartment, CompartmentCategory};
pub use fridge::{Fridge, FridgeDetail, CompartmentMode};
pub use food_item::{FoodItem, FoodItemStatus, StorageType};
pub use notification::NotificationSettings;
