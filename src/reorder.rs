//! Compartment Ordering Service
//!
//! Holds a mutable working copy of a fridge's compartment list during a
//! reorder interaction and produces the canonical persisted order on commit.
//!
//! The move operation is a pure positional splice, decoupled from any input
//! device: drag handlers translate pointer events into (source, target)
//! index pairs and everything below that is unit-testable. Malformed indices
//! are forgiving no-ops so spurious drag events never corrupt the copy.

use serde::{Deserialize, Serialize};

use crate::api::CompartmentGateway;
use crate::domain::{Compartment, DomainResult};

/// One entry of the bulk reorder request: `{id, sort_order}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompartmentOrder {
    pub id: u32,
    pub sort_order: i32,
}

/// An exclusive, in-memory reorder session over one fridge's compartments
///
/// The session owns its working copy; the caller keeps no aliased view of
/// the original list. A session is consumed by [`commit`](Self::commit) or
/// [`cancel`](Self::cancel). Concurrent external mutation of the underlying
/// list mid-session is last-write-wins at commit time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderSession {
    working: Vec<Compartment>,
    moved: bool,
}

impl ReorderSession {
    /// Snapshot the current order into a working copy
    ///
    /// An empty list produces a valid no-op session.
    pub fn begin(compartments: Vec<Compartment>) -> Self {
        Self {
            working: compartments,
            moved: false,
        }
    }

    /// Read-only view of the working copy, valid after every move
    pub fn compartments(&self) -> &[Compartment] {
        &self.working
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    /// Whether any move has actually changed the working copy
    pub fn is_moved(&self) -> bool {
        self.moved
    }

    /// Remove the element at `source` and reinsert it at `target`
    ///
    /// Returns `false` without touching the working copy when either index
    /// is out of bounds or `source == target`. Dropped drag events and
    /// drops back onto the original slot both land here.
    pub fn move_item(&mut self, source: usize, target: usize) -> bool {
        let len = self.working.len();
        if source >= len || target >= len || source == target {
            return false;
        }

        let compartment = self.working.remove(source);
        self.working.insert(target, compartment);
        self.moved = true;
        true
    }

    /// Discard the working copy; no external effect
    pub fn cancel(self) {}

    /// Consume the session, yielding `{id, sort_order}` pairs
    ///
    /// Positions start at 0 and increase by 1 in working-copy order, so a
    /// committed fridge always ends up with contiguous sort orders.
    pub fn commit(self) -> Vec<CompartmentOrder> {
        self.working
            .iter()
            .enumerate()
            .map(|(index, c)| CompartmentOrder {
                id: c.id,
                sort_order: index as i32,
            })
            .collect()
    }
}

/// Commit a reorder session through the persistence gateway
///
/// Sends the new positions as a single all-or-nothing bulk update, then
/// refetches the authoritative list so the caller never displays an order
/// the backend has not confirmed. A session with no effective move skips
/// the update entirely. On backend rejection the error is returned and the
/// previously persisted order remains the truth; the caller re-fetches when
/// it is ready to redraw.
pub async fn commit_reorder<G>(
    gateway: &G,
    fridge_id: u32,
    session: ReorderSession,
) -> DomainResult<Vec<Compartment>>
where
    G: CompartmentGateway + ?Sized,
{
    if !session.is_moved() {
        return gateway.fetch_compartments(fridge_id).await;
    }

    let orders = session.commit();
    if let Err(e) = gateway.apply_order(fridge_id, &orders).await {
        log::error!("bulk reorder rejected for fridge {}: {}", fridge_id, e);
        return Err(e);
    }
    log::info!("reordered {} compartments in fridge {}", orders.len(), fridge_id);

    gateway.fetch_compartments(fridge_id).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CompartmentCategory, DomainError};
    use async_trait::async_trait;
    use std::sync::Mutex;

    fn sample(n: u32) -> Vec<Compartment> {
        (0..n)
            .map(|i| {
                Compartment::new(
                    100 + i,
                    1,
                    format!("Shelf {}", i),
                    CompartmentCategory::Refrigerated,
                    i as i32,
                )
            })
            .collect()
    }

    fn ids(session: &ReorderSession) -> Vec<u32> {
        session.compartments().iter().map(|c| c.id).collect()
    }

    #[test]
    fn test_move_forward() {
        let mut session = ReorderSession::begin(sample(4));
        assert!(session.move_item(0, 2));
        assert_eq!(ids(&session), vec![101, 102, 100, 103]);
        assert!(session.is_moved());
    }

    #[test]
    fn test_move_backward_preserves_relative_order() {
        let mut session = ReorderSession::begin(sample(5));
        assert!(session.move_item(3, 1));
        assert_eq!(ids(&session), vec![100, 103, 101, 102, 104]);
    }

    #[test]
    fn test_move_out_of_bounds_is_noop() {
        let mut session = ReorderSession::begin(sample(3));
        let before = session.clone();

        assert!(!session.move_item(3, 0));
        assert!(!session.move_item(0, 3));
        assert!(!session.move_item(7, 9));
        assert_eq!(session, before);
        assert!(!session.is_moved());
    }

    #[test]
    fn test_move_onto_self_is_noop() {
        let mut session = ReorderSession::begin(sample(3));
        let before = session.clone();

        assert!(!session.move_item(1, 1));
        assert_eq!(session, before);
        assert!(!session.is_moved());
    }

    #[test]
    fn test_move_on_empty_session() {
        let mut session = ReorderSession::begin(Vec::new());
        assert!(!session.move_item(0, 0));
        assert!(session.is_empty());
    }

    #[test]
    fn test_commit_yields_contiguous_orders() {
        let mut session = ReorderSession::begin(sample(4));
        session.move_item(2, 0);
        session.move_item(1, 3);

        let orders = session.commit();
        assert_eq!(orders.len(), 4);
        for (i, order) in orders.iter().enumerate() {
            assert_eq!(order.sort_order, i as i32);
        }
    }

    #[test]
    fn test_begin_commit_round_trip() {
        let compartments = sample(3);
        let orders = ReorderSession::begin(compartments.clone()).commit();

        let expected: Vec<CompartmentOrder> = compartments
            .iter()
            .enumerate()
            .map(|(i, c)| CompartmentOrder { id: c.id, sort_order: i as i32 })
            .collect();
        assert_eq!(orders, expected);
    }

    #[test]
    fn test_commit_is_a_permutation_of_input() {
        let mut session = ReorderSession::begin(sample(6));
        session.move_item(5, 0);
        session.move_item(2, 4);
        session.move_item(1, 3);

        let mut committed: Vec<u32> = session.commit().iter().map(|o| o.id).collect();
        committed.sort_unstable();
        assert_eq!(committed, vec![100, 101, 102, 103, 104, 105]);
    }

    /// In-memory gateway standing in for the REST backend
    struct MockGateway {
        stored: Mutex<Vec<Compartment>>,
        reject: bool,
    }

    impl MockGateway {
        fn new(compartments: Vec<Compartment>) -> Self {
            Self { stored: Mutex::new(compartments), reject: false }
        }

        fn rejecting(compartments: Vec<Compartment>) -> Self {
            Self { stored: Mutex::new(compartments), reject: true }
        }
    }

    #[async_trait]
    impl CompartmentGateway for MockGateway {
        async fn fetch_compartments(&self, _fridge_id: u32) -> DomainResult<Vec<Compartment>> {
            let mut list = self.stored.lock().unwrap().clone();
            list.sort_by_key(|c| c.sort_order);
            Ok(list)
        }

        async fn apply_order(&self, _fridge_id: u32, orders: &[CompartmentOrder]) -> DomainResult<()> {
            if self.reject {
                return Err(DomainError::Api("update failed".to_string()));
            }
            let mut stored = self.stored.lock().unwrap();
            for order in orders {
                if let Some(c) = stored.iter_mut().find(|c| c.id == order.id) {
                    c.sort_order = order.sort_order;
                }
            }
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_commit_reorder_persists_and_refetches() {
        let gateway = MockGateway::new(sample(3));
        let mut session = ReorderSession::begin(sample(3));
        session.move_item(2, 0);

        let confirmed = commit_reorder(&gateway, 1, session).await.unwrap();
        let confirmed_ids: Vec<u32> = confirmed.iter().map(|c| c.id).collect();
        assert_eq!(confirmed_ids, vec![102, 100, 101]);
        for (i, c) in confirmed.iter().enumerate() {
            assert_eq!(c.sort_order, i as i32);
        }
    }

    #[tokio::test]
    async fn test_commit_reorder_without_moves_skips_update() {
        let gateway = MockGateway::rejecting(sample(3));
        let session = ReorderSession::begin(sample(3));

        // A rejecting gateway would fail any apply_order call; an unmoved
        // session never issues one.
        let confirmed = commit_reorder(&gateway, 1, session).await.unwrap();
        assert_eq!(confirmed.len(), 3);
    }

    #[tokio::test]
    async fn test_commit_reorder_surfaces_backend_rejection() {
        let gateway = MockGateway::rejecting(sample(3));
        let mut session = ReorderSession::begin(sample(3));
        session.move_item(0, 2);

        let result = commit_reorder(&gateway, 1, session).await;
        assert!(matches!(result, Err(DomainError::Api(_))));

        // Previously persisted order is untouched
        let stored = gateway.fetch_compartments(1).await.unwrap();
        let stored_ids: Vec<u32> = stored.iter().map(|c| c.id).collect();
        assert_eq!(stored_ids, vec![100, 101, 102]);
    }
}
