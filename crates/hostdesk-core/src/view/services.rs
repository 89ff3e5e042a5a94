// ── Service catalog ──

use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::Serialize;

use super::merge::merge_seeded;
use crate::model::{Billing, Service, ServiceCategory};
use crate::store::StoreSnapshot;

/// Group label for a service whose category the store does not know.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// One card of the service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u64,
    pub name: String,
    pub category: String,
    /// `monthly` or `one-time`.
    pub billing: String,
    pub price: Option<Decimal>,
    pub features: Vec<String>,
    pub active: bool,
}

impl CatalogEntry {
    fn from_service(service: &Service, categories: &[std::sync::Arc<ServiceCategory>]) -> Self {
        let category = categories
            .iter()
            .find(|c| c.id == service.category_id)
            .map_or_else(|| UNCATEGORIZED.to_owned(), |c| c.name.clone());
        let billing = match service.billing {
            Billing::OneTime { .. } => "one-time",
            Billing::Recurring { .. } => "monthly",
        };
        Self {
            id: service.id,
            name: service.name.clone(),
            category,
            billing: billing.to_owned(),
            price: service.billing.headline_cost(),
            features: service.features.clone(),
            active: true,
        }
    }
}

/// Seed services plus fetched services, grouped by category in the order
/// each category first appears.
pub fn service_catalog(
    snapshot: &StoreSnapshot,
    seed: &[CatalogEntry],
) -> IndexMap<String, Vec<CatalogEntry>> {
    let remote = snapshot
        .created_services
        .iter()
        .map(|s| CatalogEntry::from_service(s, &snapshot.service_categories));

    let mut groups: IndexMap<String, Vec<CatalogEntry>> = IndexMap::new();
    for entry in merge_seeded(seed.iter().cloned(), remote, |e| e.id) {
        groups.entry(entry.category.clone()).or_default().push(entry);
    }
    groups
}

/// `(id, name)` choices for a category picker.
pub fn category_options(snapshot: &StoreSnapshot) -> Vec<(u64, String)> {
    snapshot
        .service_categories
        .iter()
        .map(|c| (c.id, c.name.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::view::seed::seed_services;

    fn service(id: u64, name: &str, category_id: u64) -> Arc<Service> {
        Arc::new(Service {
            id,
            name: name.into(),
            category_id,
            billing: Billing::OneTime {
                cost: Some(Decimal::new(9900, 2)),
            },
            features: Vec::new(),
            custom_fields: Vec::new(),
        })
    }

    fn snapshot(services: Vec<Arc<Service>>) -> StoreSnapshot {
        StoreSnapshot {
            service_categories: Arc::new(vec![
                Arc::new(ServiceCategory {
                    id: 1,
                    name: "Server Management".into(),
                }),
                Arc::new(ServiceCategory {
                    id: 7,
                    name: "Email".into(),
                }),
            ]),
            created_services: Arc::new(services),
            ..StoreSnapshot::default()
        }
    }

    #[test]
    fn seed_groups_in_first_appearance_order() {
        let catalog = service_catalog(&StoreSnapshot::default(), &seed_services());
        let groups: Vec<_> = catalog.keys().cloned().collect();
        assert_eq!(groups, ["Server Management", "Web Development"]);
        assert_eq!(catalog["Server Management"].len(), 3);
        assert_eq!(catalog["Web Development"].len(), 2);
    }

    #[test]
    fn fetched_services_join_or_open_groups() {
        let snap = snapshot(vec![
            service(20, "Mailbox", 7),
            service(21, "Patch Pack", 1),
            service(22, "Mystery", 99),
        ]);
        let catalog = service_catalog(&snap, &seed_services());

        assert_eq!(catalog["Server Management"].len(), 4);
        assert_eq!(catalog["Email"][0].name, "Mailbox");
        assert_eq!(catalog[UNCATEGORIZED][0].name, "Mystery");
        assert_eq!(catalog[UNCATEGORIZED][0].billing, "one-time");
    }

    #[test]
    fn seed_wins_on_id_collision() {
        let snap = snapshot(vec![service(1, "Remote One", 1)]);
        let catalog = service_catalog(&snap, &seed_services());
        assert_eq!(catalog["Server Management"][0].name, "Basic Care");
        assert_eq!(catalog["Server Management"].len(), 3);
    }

    #[test]
    fn category_options_pairs_ids_and_names() {
        let options = category_options(&snapshot(Vec::new()));
        assert_eq!(
            options,
            [(1, "Server Management".to_owned()), (7, "Email".to_owned())]
        );
    }
}
