//! Fridge Entity
//!
//! A fridge owns an ordered collection of compartments. The backend derives
//! `compartment_mode` instead of storing it: a fridge is "detailed" exactly
//! when at least one compartment exists, "simple" otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::compartment::Compartment;
use super::entity::Entity;

/// Whether the fridge tracks individual compartments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompartmentMode {
    #[default]
    Simple,
    Detailed,
}

impl CompartmentMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompartmentMode::Simple => "simple",
            CompartmentMode::Detailed => "detailed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "detailed" => CompartmentMode::Detailed,
            _ => CompartmentMode::Simple,
        }
    }
}

/// A fridge as returned by the list endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fridge {
    /// Unique identifier
    pub id: u32,
    /// Owning user
    pub user_id: u32,
    /// Manufacturer model, if known
    pub model_name: Option<String>,
    /// Total capacity in liters (positive in valid data)
    pub total_capacity_liters: f64,
    pub compartment_mode: CompartmentMode,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Entity for Fridge {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}

/// A fridge plus its compartments, sorted ascending by `sort_order`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FridgeDetail {
    #[serde(flatten)]
    pub fridge: Fridge,
    pub compartments: Vec<Compartment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_serialization() {
        assert_eq!(CompartmentMode::Detailed.as_str(), "detailed");
        assert_eq!(CompartmentMode::from_str("simple"), CompartmentMode::Simple);
        assert_eq!(CompartmentMode::from_str("garbage"), CompartmentMode::Simple);
    }

    #[test]
    fn test_detail_deserializes_flattened() {
        let json = r#"{
            "id": 3,
            "user_id": 9,
            "model_name": null,
            "total_capacity_liters": 420.0,
            "compartment_mode": "simple",
            "created_at": null,
            "updated_at": null,
            "compartments": []
        }"#;
        let detail: FridgeDetail = serde_json::from_str(json).unwrap();
        assert_eq!(detail.fridge.id, 3);
        assert_eq!(detail.fridge.total_capacity_liters, 420.0);
        assert!(detail.compartments.is_empty());
    }
}
