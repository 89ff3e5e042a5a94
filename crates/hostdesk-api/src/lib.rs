//! Async client for the CloudHouse console REST API.
//!
//! - **[`ApiClient`]** issues one HTTP call per method against the
//!   `/api/v1` resources (industries, service categories, services,
//!   customers) and returns the decoded payload with its envelope stripped.
//! - **[`TransportConfig`]** builds the underlying `reqwest::Client`
//!   (TLS trust, optional timeout).
//! - **[`models`]** holds the wire types, named and shaped exactly as the
//!   server sends them. `hostdesk-core` converts them into domain types.

pub mod client;
pub mod customers;
pub mod error;
pub mod industries;
pub mod models;
pub mod services;
pub mod transport;

pub use client::ApiClient;
pub use error::Error;
pub use models::{
    BillingType, CustomFieldWire, CustomerCreate, CustomerResponse, Envelope, FieldType,
    IndustryCreate, IndustryResponse, SelectOption, ServiceCategoryResponse, ServiceCreate,
    ServiceResponse,
};
pub use services::{DEFAULT_SERVICES_LIMIT, DEFAULT_SERVICES_PAGE};
pub use transport::{TlsMode, TransportConfig};
