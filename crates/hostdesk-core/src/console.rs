// ── Console ──
//
// The dependency-injected state container: one API client, one domain
// store, and the dispatch loop that ties a network call to its store
// transitions. Build one per process (or per test case).

use std::future::Future;
use std::sync::Arc;

use tracing::{debug, info, warn};

use hostdesk_api::{ApiClient, CustomerCreate, IndustryCreate, ServiceCreate};

use crate::config::ConsoleConfig;
use crate::error::CoreError;
use crate::model::{Industry, Lead, Service, ServiceCategory};
use crate::operation::{
    CreateIndustryRequest, CreateLeadRequest, CreateServiceRequest, Operation, OperationKind,
    OperationOutput,
};
use crate::store::{DomainStore, SequenceToken, StoreSnapshot, Transition};

/// Entry point for consumers.
///
/// Cheaply cloneable via `Arc<ConsoleInner>`; clones share one store.
#[derive(Clone)]
pub struct Console {
    inner: Arc<ConsoleInner>,
}

struct ConsoleInner {
    config: ConsoleConfig,
    client: ApiClient,
    store: Arc<DomainStore>,
}

impl Console {
    /// Build a console and its HTTP client from configuration.
    pub fn new(config: ConsoleConfig) -> Result<Self, CoreError> {
        let client = ApiClient::new(config.api_url.clone(), &config.transport())?;
        Ok(Self::with_client(config, client))
    }

    /// Build a console around an existing API client.
    pub fn with_client(config: ConsoleConfig, client: ApiClient) -> Self {
        Self {
            inner: Arc::new(ConsoleInner {
                config,
                client,
                store: Arc::new(DomainStore::new()),
            }),
        }
    }

    pub fn config(&self) -> &ConsoleConfig {
        &self.inner.config
    }

    pub fn store(&self) -> &Arc<DomainStore> {
        &self.inner.store
    }

    pub fn snapshot(&self) -> StoreSnapshot {
        self.inner.store.snapshot()
    }

    // ── Dispatch ─────────────────────────────────────────────────────

    /// Run one operation against the API and fold its outcome into the store.
    ///
    /// Validation and the pending transition happen before this returns,
    /// so `store().is_loading()` is already `true` when the caller gets
    /// the future back. A validation failure leaves the store untouched
    /// and the future resolves to the error without a network call.
    ///
    /// Dropping the future before it resolves rejects the operation with
    /// `"cancelled"`, so no kind is left loading.
    pub fn dispatch(
        &self,
        op: Operation,
    ) -> impl Future<Output = Result<OperationOutput, CoreError>> + Send + 'static {
        let kind = op.kind();
        let started = op
            .validate()
            .map(|()| InFlight::begin(Arc::clone(&self.inner.store), kind));
        let console = self.clone();

        async move {
            let flight = started.inspect_err(|e| debug!(%kind, error = %e, "rejected locally"))?;
            console.settle(flight, op).await
        }
    }

    async fn settle(
        &self,
        flight: InFlight,
        op: Operation,
    ) -> Result<OperationOutput, CoreError> {
        match route_operation(&self.inner.client, &self.inner.config, op).await {
            Ok(output) => {
                flight.fulfill(output.clone());
                Ok(output)
            }
            Err(err) => {
                warn!(kind = %flight.kind, error = %err, "operation failed");
                flight.reject(err.message().to_owned());
                Err(err)
            }
        }
    }

    // ── Typed wrappers ───────────────────────────────────────────────

    pub async fn fetch_industries(&self) -> Result<Vec<Industry>, CoreError> {
        match self.dispatch(Operation::FetchIndustries).await? {
            OperationOutput::Industries(list) => Ok(list),
            other => Err(unexpected(OperationKind::FetchIndustries, &other)),
        }
    }

    pub async fn create_industry(&self, req: CreateIndustryRequest) -> Result<Industry, CoreError> {
        match self.dispatch(Operation::CreateIndustry(req)).await? {
            OperationOutput::Industry(industry) => {
                info!(id = industry.id, name = %industry.name, "industry created");
                Ok(industry)
            }
            other => Err(unexpected(OperationKind::CreateIndustry, &other)),
        }
    }

    pub async fn fetch_service_categories(&self) -> Result<Vec<ServiceCategory>, CoreError> {
        match self.dispatch(Operation::FetchServiceCategories).await? {
            OperationOutput::ServiceCategories(list) => Ok(list),
            other => Err(unexpected(OperationKind::FetchServiceCategories, &other)),
        }
    }

    pub async fn create_service(&self, req: CreateServiceRequest) -> Result<Service, CoreError> {
        match self.dispatch(Operation::CreateService(req)).await? {
            OperationOutput::Service(service) => {
                info!(id = service.id, name = %service.name, "service created");
                Ok(service)
            }
            other => Err(unexpected(OperationKind::CreateService, &other)),
        }
    }

    pub async fn fetch_services(&self) -> Result<Vec<Service>, CoreError> {
        match self.dispatch(Operation::FetchServices).await? {
            OperationOutput::Services(list) => Ok(list),
            other => Err(unexpected(OperationKind::FetchServices, &other)),
        }
    }

    pub async fn create_lead(&self, req: CreateLeadRequest) -> Result<Lead, CoreError> {
        match self.dispatch(Operation::CreateLead(req)).await? {
            OperationOutput::Lead(lead) => {
                info!(id = ?lead.id, email = %lead.email, "lead created");
                Ok(lead)
            }
            other => Err(unexpected(OperationKind::CreateLead, &other)),
        }
    }

    pub async fn fetch_leads(&self) -> Result<Vec<Lead>, CoreError> {
        match self.dispatch(Operation::FetchLeads).await? {
            OperationOutput::Leads(list) => Ok(list),
            other => Err(unexpected(OperationKind::FetchLeads, &other)),
        }
    }
}

fn unexpected(kind: OperationKind, output: &OperationOutput) -> CoreError {
    CoreError::Internal(format!("{kind} produced a {} result", output.kind()))
}

// ── In-flight guard ──────────────────────────────────────────────────

const CANCELLED: &str = "cancelled";

/// A dispatched operation whose pending transition has been applied.
///
/// Exactly one settling transition reaches the store: `fulfill`, `reject`,
/// or the cancellation applied on drop.
struct InFlight {
    store: Arc<DomainStore>,
    kind: OperationKind,
    token: Option<SequenceToken>,
}

impl InFlight {
    fn begin(store: Arc<DomainStore>, kind: OperationKind) -> Self {
        let token = store.begin(kind);
        Self {
            store,
            kind,
            token: Some(token),
        }
    }

    fn fulfill(mut self, output: OperationOutput) {
        if let Some(token) = self.token.take() {
            self.store.apply(Transition::Fulfilled { token, output });
        }
    }

    fn reject(mut self, message: String) {
        if let Some(token) = self.token.take() {
            self.store.apply(Transition::Rejected {
                kind: self.kind,
                token,
                message,
            });
        }
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        if let Some(token) = self.token.take() {
            debug!(kind = %self.kind, "dropped before settling");
            self.store.apply(Transition::Rejected {
                kind: self.kind,
                token,
                message: CANCELLED.into(),
            });
        }
    }
}

// ── Operation routing ────────────────────────────────────────────────

/// Exactly one client call per operation.
async fn route_operation(
    client: &ApiClient,
    config: &ConsoleConfig,
    op: Operation,
) -> Result<OperationOutput, CoreError> {
    match op {
        Operation::FetchIndustries => {
            let list = client.list_industries().await?;
            Ok(OperationOutput::Industries(
                list.into_iter().map(Industry::from).collect(),
            ))
        }
        Operation::CreateIndustry(req) => {
            let created = client.create_industry(&IndustryCreate::from(&req)).await?;
            Ok(OperationOutput::Industry(created.into()))
        }
        Operation::FetchServiceCategories => {
            let list = client.list_service_categories().await?;
            Ok(OperationOutput::ServiceCategories(
                list.into_iter().map(ServiceCategory::from).collect(),
            ))
        }
        Operation::CreateService(req) => {
            let created = client.create_service(&ServiceCreate::from(&req)).await?;
            Ok(OperationOutput::Service(created.into()))
        }
        Operation::FetchServices => {
            let list = client
                .list_services(config.services_page, config.services_limit)
                .await?;
            Ok(OperationOutput::Services(
                list.into_iter().map(Service::from).collect(),
            ))
        }
        Operation::CreateLead(req) => {
            let created = client.create_customer(&CustomerCreate::from(&req)).await?;
            Ok(OperationOutput::Lead(created.into()))
        }
        Operation::FetchLeads => {
            let list = client.list_customers().await?;
            Ok(OperationOutput::Leads(
                list.into_iter().map(Lead::from).collect(),
            ))
        }
    }
}
