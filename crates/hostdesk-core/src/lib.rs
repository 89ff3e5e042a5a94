//! Client-side state and data synchronization for the hostdesk console.
//!
//! This crate sits between `hostdesk-api` and presentation front ends:
//!
//! - **[`Console`]**: the dependency-injected container. Owns one
//!   [`ApiClient`](hostdesk_api::ApiClient) and one [`DomainStore`].
//!   [`Console::dispatch`] runs an [`Operation`] through its
//!   pending → fulfilled/rejected lifecycle.
//!
//! - **[`DomainStore`]**: ordered collections of industries, service
//!   categories, services, and leads held in `tokio::sync::watch`
//!   channels, plus the global `loading`/`error` flags and per-operation
//!   [`OperationStatus`].
//!
//! - **[`EntityStream<T>`]**: subscription handle for one collection.
//!
//! - **Views** ([`view`]): pure projections of a [`StoreSnapshot`] into
//!   customer rows, industry rows, and the grouped service catalog.
//!
//! - **Forms** ([`LeadDraft`], [`ServiceDraft`]): raw user input
//!   normalized into validated requests.

pub mod config;
pub mod console;
pub mod convert;
pub mod error;
pub mod form;
pub mod model;
pub mod operation;
pub mod store;
pub mod stream;
pub mod validation;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────────
pub use config::{ConsoleConfig, DEFAULT_API_URL, TlsVerification};
pub use console::Console;
pub use error::CoreError;
pub use form::{CustomFieldDraft, LeadDraft, ServiceDraft};
pub use operation::{
    CreateIndustryRequest, CreateLeadRequest, CreateServiceRequest, Operation, OperationKind,
    OperationOutput,
};
pub use store::{DomainStore, OperationStatus, StoreSnapshot, StoreStatus};
pub use stream::{EntityStream, SnapshotStream};
pub use validation::{is_valid_email, validate_email};

pub use model::{
    Billing, BillingKind, CustomField, Dashboard, FieldKind, Industry, Lead, Service,
    ServiceCategory, SessionUser, UserKind,
};
