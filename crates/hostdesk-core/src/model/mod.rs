// ── Domain model ──
//
// Canonical console records. Wire shapes live in `hostdesk-api`;
// `crate::convert` maps between the two.

pub mod industry;
pub mod lead;
pub mod service;
pub mod session;

pub use industry::Industry;
pub use lead::Lead;
pub use service::{Billing, BillingKind, CustomField, FieldKind, Service, ServiceCategory};
pub use session::{Dashboard, SessionUser, UserKind};
