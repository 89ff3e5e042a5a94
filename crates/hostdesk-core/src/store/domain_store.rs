// ── Central domain store ──
//
// One instance per `Console`. Holds the four shared collections, the
// global `loading`/`error` pair, and a per-operation status table.
// Mutations are `pub(crate)`: only the console applies transitions.

use std::sync::Arc;
use std::sync::atomic::AtomicU64;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use tokio::sync::watch;

use super::collection::EntityCollection;
use super::transition::SequenceToken;
use crate::model::{Industry, Lead, Service, ServiceCategory};
use crate::operation::OperationKind;
use crate::stream::EntityStream;

/// Global request-lifecycle flags.
///
/// Last writer wins: with two operations in flight, whichever settles
/// last decides both fields. Use [`DomainStore::operation_status`] when
/// concurrent operations must report independently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct StoreStatus {
    pub loading: bool,
    pub error: Option<String>,
}

/// Lifecycle of the most recently dispatched operation of one kind.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "message", rename_all = "snake_case")]
pub enum OperationStatus {
    #[default]
    Idle,
    Loading,
    Succeeded,
    Failed(String),
}

/// Point-in-time copy of everything the store holds.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StoreSnapshot {
    pub industries: Arc<Vec<Arc<Industry>>>,
    pub service_categories: Arc<Vec<Arc<ServiceCategory>>>,
    pub created_services: Arc<Vec<Arc<Service>>>,
    pub leads: Arc<Vec<Arc<Lead>>>,
    pub loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone)]
pub(crate) struct OperationRecord {
    pub(crate) latest: SequenceToken,
    pub(crate) status: OperationStatus,
}

/// Reactive store for all console records.
pub struct DomainStore {
    pub(crate) industries: EntityCollection<Industry>,
    pub(crate) service_categories: EntityCollection<ServiceCategory>,
    pub(crate) created_services: EntityCollection<Service>,
    pub(crate) leads: EntityCollection<Lead>,
    pub(crate) status: watch::Sender<StoreStatus>,
    pub(crate) operations: DashMap<OperationKind, OperationRecord>,
    pub(crate) next_token: AtomicU64,
    /// Bumped once per applied transition.
    pub(crate) revision: watch::Sender<u64>,
    pub(crate) last_fulfilled: watch::Sender<Option<DateTime<Utc>>>,
}

impl DomainStore {
    pub fn new() -> Self {
        let (status, _) = watch::channel(StoreStatus::default());
        let (revision, _) = watch::channel(0);
        let (last_fulfilled, _) = watch::channel(None);

        Self {
            industries: EntityCollection::new(),
            service_categories: EntityCollection::new(),
            created_services: EntityCollection::new(),
            leads: EntityCollection::new(),
            status,
            operations: DashMap::new(),
            next_token: AtomicU64::new(0),
            revision,
            last_fulfilled,
        }
    }

    // ── Snapshot accessors ───────────────────────────────────────────

    pub fn snapshot(&self) -> StoreSnapshot {
        let status = self.status();
        StoreSnapshot {
            industries: self.industries.snapshot(),
            service_categories: self.service_categories.snapshot(),
            created_services: self.created_services.snapshot(),
            leads: self.leads.snapshot(),
            loading: status.loading,
            error: status.error,
        }
    }

    pub fn industries_snapshot(&self) -> Arc<Vec<Arc<Industry>>> {
        self.industries.snapshot()
    }

    pub fn service_categories_snapshot(&self) -> Arc<Vec<Arc<ServiceCategory>>> {
        self.service_categories.snapshot()
    }

    pub fn created_services_snapshot(&self) -> Arc<Vec<Arc<Service>>> {
        self.created_services.snapshot()
    }

    pub fn leads_snapshot(&self) -> Arc<Vec<Arc<Lead>>> {
        self.leads.snapshot()
    }

    // ── Count accessors ──────────────────────────────────────────────

    pub fn industry_count(&self) -> usize {
        self.industries.len()
    }

    pub fn service_count(&self) -> usize {
        self.created_services.len()
    }

    pub fn lead_count(&self) -> usize {
        self.leads.len()
    }

    // ── Status ───────────────────────────────────────────────────────

    pub fn status(&self) -> StoreStatus {
        self.status.borrow().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.status.borrow().loading
    }

    pub fn error(&self) -> Option<String> {
        self.status.borrow().error.clone()
    }

    pub fn operation_status(&self, kind: OperationKind) -> OperationStatus {
        self.operations
            .get(&kind)
            .map(|r| r.status.clone())
            .unwrap_or_default()
    }

    /// When the last operation fulfilled, if any has.
    pub fn last_fulfilled(&self) -> Option<DateTime<Utc>> {
        *self.last_fulfilled.borrow()
    }

    /// Number of transitions applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    // ── Subscriptions ────────────────────────────────────────────────

    pub fn subscribe_industries(&self) -> EntityStream<Industry> {
        EntityStream::new(self.industries.subscribe())
    }

    pub fn subscribe_service_categories(&self) -> EntityStream<ServiceCategory> {
        EntityStream::new(self.service_categories.subscribe())
    }

    pub fn subscribe_created_services(&self) -> EntityStream<Service> {
        EntityStream::new(self.created_services.subscribe())
    }

    pub fn subscribe_leads(&self) -> EntityStream<Lead> {
        EntityStream::new(self.leads.subscribe())
    }

    pub fn subscribe_status(&self) -> watch::Receiver<StoreStatus> {
        self.status.subscribe()
    }

    /// Fires once per applied transition, whatever it touched.
    pub fn subscribe_revisions(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

impl Default for DomainStore {
    fn default() -> Self {
        Self::new()
    }
}
