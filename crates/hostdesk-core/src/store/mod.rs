// ── Domain store ──
//
// Ordered entity storage with push-based change notification, plus the
// request-lifecycle status the operation wrappers drive.

mod collection;
mod domain_store;
mod transition;

pub use domain_store::{DomainStore, OperationStatus, StoreSnapshot, StoreStatus};
pub(crate) use transition::{SequenceToken, Transition};
