//! Persistence Gateway
//!
//! Abstract seam between the ordering service and whatever stores the
//! order. The real implementation is [`ApiClient`]; tests swap in an
//! in-memory one.

use async_trait::async_trait;

use crate::domain::{Compartment, DomainResult};
use crate::reorder::CompartmentOrder;
use super::client::ApiClient;

/// Gateway for compartment order persistence
#[async_trait]
pub trait CompartmentGateway: Send + Sync {
    /// Fetch the authoritative compartment list, sorted by `sort_order`
    async fn fetch_compartments(&self, fridge_id: u32) -> DomainResult<Vec<Compartment>>;

    /// Apply a full set of new positions in one all-or-nothing update
    async fn apply_order(&self, fridge_id: u32, orders: &[CompartmentOrder]) -> DomainResult<()>;
}

#[async_trait]
impl CompartmentGateway for ApiClient {
    async fn fetch_compartments(&self, fridge_id: u32) -> DomainResult<Vec<Compartment>> {
        let detail = self.get_fridge(fridge_id).await?;
        let mut compartments = detail.compartments;
        // Display order must follow sort_order regardless of wire order
        compartments.sort_by_key(|c| c.sort_order);
        Ok(compartments)
    }

    async fn apply_order(&self, fridge_id: u32, orders: &[CompartmentOrder]) -> DomainResult<()> {
        self.reorder_compartments(fridge_id, orders).await
    }
}
