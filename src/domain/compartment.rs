//! Compartment Entity
//!
//! A named subdivision of a fridge (e.g. "top shelf") with a fixed parent
//! category and a manually adjustable display order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Parent category determines which half of the fridge a compartment lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CompartmentCategory {
    #[default]
    Refrigerated,
    Frozen,
}

impl CompartmentCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompartmentCategory::Refrigerated => "refrigerated",
            CompartmentCategory::Frozen => "frozen",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "frozen" => CompartmentCategory::Frozen,
            _ => CompartmentCategory::Refrigerated,
        }
    }
}

/// A fridge compartment
///
/// `sort_order` is the zero-based display rank within the owning fridge.
/// After any committed reorder the sort orders of a fridge's compartments
/// are exactly {0, 1, ..., n-1} with no gaps or duplicates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compartment {
    /// Unique identifier
    pub id: u32,
    /// Owning fridge
    pub fridge_id: u32,
    /// Display name
    pub name: String,
    /// Refrigerated or frozen section
    pub category: CompartmentCategory,
    /// Declared capacity, if the user bothered to enter one
    pub capacity_liters: Option<f64>,
    /// Zero-based display position within the fridge
    pub sort_order: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Compartment {
    /// Create a new compartment at the given position
    pub fn new(id: u32, fridge_id: u32, name: String, category: CompartmentCategory, sort_order: i32) -> Self {
        Self {
            id,
            fridge_id,
            name,
            category,
            capacity_liters: None,
            sort_order,
            created_at: None,
            updated_at: None,
        }
    }

    /// Next available sort position for a new compartment (max + 1, 0 when empty)
    pub fn next_sort_order(existing: &[Compartment]) -> i32 {
        existing.iter().map(|c| c.sort_order).max().map_or(0, |max| max + 1)
    }

    /// Default compartment set seeded during fridge setup
    pub fn default_set(fridge_id: u32) -> Vec<Compartment> {
        let defaults = [
            ("Main shelf", CompartmentCategory::Refrigerated),
            ("Crisper drawer", CompartmentCategory::Refrigerated),
            ("Door shelf", CompartmentCategory::Refrigerated),
            ("Freezer tray", CompartmentCategory::Frozen),
        ];
        defaults
            .iter()
            .enumerate()
            .map(|(pos, (name, category))| {
                Compartment::new(0, fridge_id, name.to_string(), *category, pos as i32)
            })
            .collect()
    }
}

impl Entity for Compartment {
    type Id = u32;

    fn id(&self) -> Self::Id {
        self.id
    }
}
