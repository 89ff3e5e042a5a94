// ── Operation API ──
//
// Every remote interaction flows through a unified `Operation` enum.
// `Console::dispatch` applies the pending transition, makes exactly one
// client call, then applies fulfilled or rejected.

pub mod requests;

use serde::Serialize;
use strum::{Display, EnumIter, IntoStaticStr};

use crate::error::CoreError;
use crate::model::{Industry, Lead, Service, ServiceCategory};

pub use requests::{CreateIndustryRequest, CreateLeadRequest, CreateServiceRequest};

/// The seven async operations the console knows how to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    // ── Industries ───────────────────────────────────────────────────
    FetchIndustries,
    CreateIndustry(CreateIndustryRequest),

    // ── Services ─────────────────────────────────────────────────────
    FetchServiceCategories,
    CreateService(CreateServiceRequest),
    FetchServices,

    // ── Leads ────────────────────────────────────────────────────────
    CreateLead(CreateLeadRequest),
    FetchLeads,
}

impl Operation {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::FetchIndustries => OperationKind::FetchIndustries,
            Self::CreateIndustry(_) => OperationKind::CreateIndustry,
            Self::FetchServiceCategories => OperationKind::FetchServiceCategories,
            Self::CreateService(_) => OperationKind::CreateService,
            Self::FetchServices => OperationKind::FetchServices,
            Self::CreateLead(_) => OperationKind::CreateLead,
            Self::FetchLeads => OperationKind::FetchLeads,
        }
    }

    /// Local checks that must pass before the store or network is touched.
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        match self {
            Self::CreateIndustry(req) => req.validate(),
            Self::CreateService(req) => req.validate(),
            Self::CreateLead(req) => req.validate(),
            Self::FetchIndustries
            | Self::FetchServiceCategories
            | Self::FetchServices
            | Self::FetchLeads => Ok(()),
        }
    }
}

/// Payload-free operation discriminant, used to key per-operation status
/// and sequence tokens.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, EnumIter, IntoStaticStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum OperationKind {
    FetchIndustries,
    CreateIndustry,
    FetchServiceCategories,
    CreateService,
    FetchServices,
    CreateLead,
    FetchLeads,
}

impl OperationKind {
    /// Fetches replace their collection; creates append to it.
    pub fn replaces_collection(self) -> bool {
        matches!(
            self,
            Self::FetchIndustries
                | Self::FetchServiceCategories
                | Self::FetchServices
                | Self::FetchLeads
        )
    }
}

/// What a successful operation produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationOutput {
    Industries(Vec<Industry>),
    Industry(Industry),
    ServiceCategories(Vec<ServiceCategory>),
    Services(Vec<Service>),
    Service(Service),
    Leads(Vec<Lead>),
    Lead(Lead),
}

impl OperationOutput {
    pub fn kind(&self) -> OperationKind {
        match self {
            Self::Industries(_) => OperationKind::FetchIndustries,
            Self::Industry(_) => OperationKind::CreateIndustry,
            Self::ServiceCategories(_) => OperationKind::FetchServiceCategories,
            Self::Services(_) => OperationKind::FetchServices,
            Self::Service(_) => OperationKind::CreateService,
            Self::Leads(_) => OperationKind::FetchLeads,
            Self::Lead(_) => OperationKind::CreateLead,
        }
    }
}
