//! Fridge Endpoints
//!
//! Bindings for fridge and compartment CRUD plus the bulk reorder call.

use reqwest::Method;
use serde::Serialize;

use crate::domain::{Compartment, CompartmentCategory, DomainResult, Fridge, FridgeDetail};
use crate::reorder::CompartmentOrder;
use super::client::ApiClient;

// ========================
// Request Bodies
// ========================

#[derive(Debug, Clone, Serialize)]
pub struct NewFridge {
    pub model_name: Option<String>,
    pub total_capacity_liters: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FridgeUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_capacity_liters: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewCompartment {
    pub name: String,
    pub category: CompartmentCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity_liters: Option<f64>,
    pub sort_order: i32,
}

// ========================
// Bindings
// ========================

impl ApiClient {
    /// List the user's fridges
    pub async fn list_fridges(&self) -> DomainResult<Vec<Fridge>> {
        let response = self.request(Method::GET, "/fridges").send().await?;
        Self::expect_json(response).await
    }

    /// Fetch a single fridge with its compartments (sorted by `sort_order`)
    pub async fn get_fridge(&self, id: u32) -> DomainResult<FridgeDetail> {
        let response = self
            .request(Method::GET, &format!("/fridges/{}", id))
            .send()
            .await?;
        Self::expect_json(response).await
    }

    pub async fn create_fridge(&self, fridge: &NewFridge) -> DomainResult<Fridge> {
        let response = self
            .request(Method::POST, "/fridges")
            .json(fridge)
            .send()
            .await?;
        let created: Fridge = Self::expect_json(response).await?;
        log::info!("created fridge {}", created.id);
        Ok(created)
    }

    pub async fn update_fridge(&self, id: u32, update: &FridgeUpdate) -> DomainResult<Fridge> {
        let response = self
            .request(Method::PUT, &format!("/fridges/{}", id))
            .json(update)
            .send()
            .await?;
        Self::expect_json(response).await
    }

    /// Add a compartment to a fridge
    pub async fn create_compartment(
        &self,
        fridge_id: u32,
        compartment: &NewCompartment,
    ) -> DomainResult<Compartment> {
        let response = self
            .request(Method::POST, &format!("/fridges/{}/compartments", fridge_id))
            .json(compartment)
            .send()
            .await?;
        let created: Compartment = Self::expect_json(response).await?;
        log::info!("created compartment {} in fridge {}", created.id, fridge_id);
        Ok(created)
    }

    /// Rewrite all compartment positions of a fridge in one request
    ///
    /// The backend applies the batch all-or-nothing; on failure the previous
    /// order remains persisted.
    pub async fn reorder_compartments(
        &self,
        fridge_id: u32,
        orders: &[CompartmentOrder],
    ) -> DomainResult<()> {
        let response = self
            .request(Method::PUT, &format!("/fridges/{}/compartments/reorder", fridge_id))
            .json(orders)
            .send()
            .await?;
        Self::expect_ok(response).await
    }
}
