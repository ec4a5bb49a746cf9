//! Food Item Endpoints

use reqwest::Method;

use crate::domain::{DomainResult, FoodItem};
use super::client::ApiClient;

impl ApiClient {
    /// List the food items of a fridge, including nullable `volume_liters`
    /// and `compartment_id`
    pub async fn list_food_items(&self, fridge_id: u32) -> DomainResult<Vec<FoodItem>> {
        let response = self
            .request(Method::GET, "/food-items")
            .query(&[("fridge_id", fridge_id)])
            .send()
            .await?;
        Self::expect_json(response).await
    }
}
