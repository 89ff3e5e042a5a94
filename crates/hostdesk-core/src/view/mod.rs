// ── Derived view bindings ──
//
// Pure projections of a `StoreSnapshot` plus local UI state into
// renderable rows. Nothing here mutates the store.

pub mod customers;
pub mod industries;
pub mod merge;
pub mod seed;
pub mod services;

pub use customers::{
    CustomerDirectory, CustomerRow, CustomerSearch, NO_PRODUCT, UNKNOWN_INDUSTRY, customer_rows,
    industry_label,
};
pub use industries::IndustryListView;
pub use merge::merge_seeded;
pub use seed::{seed_customers, seed_services};
pub use services::{CatalogEntry, UNCATEGORIZED, category_options, service_catalog};
