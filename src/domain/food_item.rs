//! Food Item Entity
//!
//! Logged food items as the client sees them. The capacity estimator only
//! cares about `volume_liters` and `status`; the remaining fields ride along
//! for the add/edit screens.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Where the item is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageType {
    #[default]
    Refrigerated,
    Frozen,
}

impl StorageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            StorageType::Refrigerated => "refrigerated",
            StorageType::Frozen => "frozen",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "frozen" => StorageType::Frozen,
            _ => StorageType::Refrigerated,
        }
    }
}

/// Lifecycle status: active items sit in the fridge, archived ones were
/// consumed or thrown out and no longer occupy space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FoodItemStatus {
    #[default]
    Active,
    Archived,
}

/// A logged food item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    /// Unique identifier
    pub id: u32,
    /// Owning fridge
    pub fridge_id: u32,
    pub name: String,
    /// Declared volume; absent or zero means unknown
    pub volume_liters: Option<f64>,
    pub storage_type: StorageType,
    /// Compartment the item was filed under, if any
    pub compartment_id: Option<u32>,
    #[serde(default)]
    pub status: FoodItemStatus,
    pub expiry_date: Option<NaiveDate>,
    pub price: Option<f64>,
    pub purchase_date: Option<NaiveDate>,
}

impl FoodItem {
    pub fn new(id: u32, fridge_id: u32, name: String, storage_type: StorageType) -> Self {
        Self {
            id,
            fridge_id,
            name,
            volume_liters: None,
            storage_type,
            compartment_id: None,
            status: FoodItemStatus::Active,
            expiry_date: None,
            price: None,
            purchase_date: None,
        }
    }

    /// Whether the declared volume is usable for measurement (present and > 0)
    pub fn has_measured_volume(&self) -> bool {
        matches!(self.volume_liters, Some(v) if v > 0.0)
    }
}

impl Entity for FoodItem {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
