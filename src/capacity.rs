//! Capacity Estimator
//!
//! Derives a display-only usage percentage for a fridge from a
//! mixed-precision inventory: items with a declared volume are summed
//! exactly, items without one are assumed to occupy half a liter each.

use serde::{Deserialize, Serialize};

use crate::domain::{FoodItem, FoodItemStatus, Fridge};

/// Assumed volume for items with no usable declared volume
pub const DEFAULT_ITEM_VOLUME_LITERS: f64 = 0.5;

/// Result of a capacity estimate
///
/// The two intermediate sums are exposed alongside the percentage so the
/// display layer can show "measured + assumed" breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityUsage {
    /// Sum of declared volumes (items with volume > 0)
    pub measured_liters: f64,
    /// Heuristic volume of the remaining items (count * 0.5 L)
    pub estimated_liters: f64,
    /// Rounded usage percentage, capped at 100
    pub used_percent: u32,
}

impl CapacityUsage {
    pub fn total_liters(&self) -> f64 {
        self.measured_liters + self.estimated_liters
    }
}

/// Estimate how full a fridge is
///
/// Only active items count; archived items no longer occupy space. With no
/// fridge, or a capacity that fails the positive-capacity invariant, the
/// percentage is 0 and no division is attempted (the sums are still
/// reported).
pub fn estimate_usage(fridge: Option<&Fridge>, items: &[FoodItem]) -> CapacityUsage {
    let mut measured_liters = 0.0;
    let mut unmeasured_count = 0u32;

    for item in items.iter().filter(|i| i.status == FoodItemStatus::Active) {
        if item.has_measured_volume() {
            measured_liters += item.volume_liters.unwrap_or(0.0);
        } else {
            unmeasured_count += 1;
        }
    }

    let estimated_liters = f64::from(unmeasured_count) * DEFAULT_ITEM_VOLUME_LITERS;

    let used_percent = match fridge {
        Some(f) if f.total_capacity_liters > 0.0 => {
            let ratio = (measured_liters + estimated_liters) / f.total_capacity_liters;
            (ratio * 100.0).round().min(100.0) as u32
        }
        _ => 0,
    };

    CapacityUsage {
        measured_liters,
        estimated_liters,
        used_percent,
    }
}
