// ── Customer directory ──
//
// The customer list shows the seed customers followed by every fetched
// lead. Lead rows are numbered after the seed, so the row count is
// always `seed + leads` before search narrows it.

use std::sync::Arc;

use serde::Serialize;
use tokio::sync::watch;

use super::merge::merge_seeded;
use crate::model::{Industry, Lead};
use crate::store::{DomainStore, StoreSnapshot};

/// Industry label for an id the store does not know.
pub const UNKNOWN_INDUSTRY: &str = "Unknown";
/// Product-interest placeholder for leads.
pub const NO_PRODUCT: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerRow {
    /// Display position, starting at 1.
    pub id: u64,
    pub company_name: String,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub industry: String,
    pub product_interested: String,
    pub address: String,
    pub notes: String,
    /// Server id of the backing lead; `None` for seed rows.
    pub lead_id: Option<u64>,
}

impl CustomerRow {
    fn from_lead(display_id: u64, lead: &Lead, industries: &[Arc<Industry>]) -> Self {
        Self {
            id: display_id,
            company_name: lead.company_name.clone(),
            contact_name: lead.full_name.clone(),
            phone: lead.phone.clone(),
            email: lead.email.clone(),
            industry: industry_label(industries, lead.industry_id).to_owned(),
            product_interested: NO_PRODUCT.to_owned(),
            address: lead.address.clone(),
            notes: lead.note.clone(),
            lead_id: lead.id,
        }
    }
}

/// Name of the industry with `id`, or [`UNKNOWN_INDUSTRY`] when it is
/// missing or has an empty name.
pub fn industry_label(industries: &[Arc<Industry>], id: u64) -> &str {
    industries
        .iter()
        .find(|i| i.id == id)
        .map(|i| i.name.as_str())
        .filter(|name| !name.is_empty())
        .unwrap_or(UNKNOWN_INDUSTRY)
}

/// Case-insensitive substring filter over the visible text columns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerSearch {
    needle: String,
}

impl CustomerSearch {
    pub fn new(term: &str) -> Self {
        Self {
            needle: term.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, row: &CustomerRow) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        [
            &row.company_name,
            &row.contact_name,
            &row.email,
            &row.industry,
            &row.product_interested,
        ]
        .iter()
        .any(|field| field.to_lowercase().contains(&self.needle))
    }
}

/// Seed rows, then one row per lead, filtered by `search`.
pub fn customer_rows(
    snapshot: &StoreSnapshot,
    seed: &[CustomerRow],
    search: &CustomerSearch,
) -> Vec<CustomerRow> {
    let offset = u64::try_from(seed.len()).unwrap_or(u64::MAX);
    let lead_rows = snapshot
        .leads
        .iter()
        .zip(1..)
        .map(|(lead, n)| CustomerRow::from_lead(offset + n, lead, &snapshot.industries));

    merge_seeded(seed.iter().cloned(), lead_rows, |row| row.id)
        .into_iter()
        .filter(|row| search.matches(row))
        .collect()
}

/// Live customer list bound to a store.
///
/// Re-derives its rows from the store's current snapshot on demand, and
/// can wait for the next store transition.
pub struct CustomerDirectory {
    store: Arc<DomainStore>,
    seed: Vec<CustomerRow>,
    search: CustomerSearch,
    revisions: watch::Receiver<u64>,
}

impl CustomerDirectory {
    pub fn new(store: Arc<DomainStore>, seed: Vec<CustomerRow>) -> Self {
        let revisions = store.subscribe_revisions();
        Self {
            store,
            seed,
            search: CustomerSearch::default(),
            revisions,
        }
    }

    pub fn set_search(&mut self, term: &str) {
        self.search = CustomerSearch::new(term);
    }

    pub fn rows(&self) -> Vec<CustomerRow> {
        customer_rows(&self.store.snapshot(), &self.seed, &self.search)
    }

    /// Wait for the store to change and return the re-derived rows.
    /// `None` once the store is gone.
    pub async fn changed(&mut self) -> Option<Vec<CustomerRow>> {
        self.revisions.changed().await.ok()?;
        self.revisions.borrow_and_update();
        Some(self.rows())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::view::seed::seed_customers;
    use pretty_assertions::assert_eq;

    fn industry(id: u64, name: &str) -> Arc<Industry> {
        Arc::new(Industry {
            id,
            name: name.into(),
            description: String::new(),
            active: true,
        })
    }

    fn lead(id: u64, company: &str, industry_id: u64) -> Arc<Lead> {
        Arc::new(Lead {
            id: Some(id),
            full_name: format!("{company} Contact"),
            company_name: company.into(),
            email: format!("hello@{}.io", company.to_lowercase()),
            phone: "+91 1".into(),
            address: "1 Road".into(),
            city: "Kochi".into(),
            state: "Kerala".into(),
            zip_code: "0123".into(),
            country: "IN".into(),
            country_code: "+91".into(),
            note: "note".into(),
            industry_id,
        })
    }

    fn snapshot(industries: Vec<Arc<Industry>>, leads: Vec<Arc<Lead>>) -> StoreSnapshot {
        StoreSnapshot {
            industries: Arc::new(industries),
            leads: Arc::new(leads),
            ..StoreSnapshot::default()
        }
    }

    #[test]
    fn row_count_is_seed_plus_leads() {
        let seed = seed_customers();
        let snap = snapshot(
            vec![industry(1, "Tech")],
            vec![lead(10, "Alpha", 1), lead(11, "Beta", 1)],
        );

        let rows = customer_rows(&snap, &seed, &CustomerSearch::default());

        assert_eq!(rows.len(), seed.len() + 2);
        assert_eq!(rows[3].id, 4);
        assert_eq!(rows[4].id, 5);
        assert_eq!(rows[3].lead_id, Some(10));
        assert_eq!(rows[3].product_interested, NO_PRODUCT);
    }

    #[test]
    fn industry_resolves_or_falls_back_to_unknown() {
        let snap = snapshot(
            vec![industry(1, "Tech"), industry(2, "Retail")],
            vec![lead(10, "Alpha", 2), lead(11, "Beta", 42)],
        );

        let rows = customer_rows(&snap, &[], &CustomerSearch::default());

        assert_eq!(rows[0].industry, "Retail");
        assert_eq!(rows[1].industry, UNKNOWN_INDUSTRY);
    }

    #[test]
    fn empty_industry_name_reads_as_unknown() {
        let industries = vec![industry(1, ""), industry(2, "Retail")];

        assert_eq!(industry_label(&industries, 1), UNKNOWN_INDUSTRY);
        assert_eq!(industry_label(&industries, 2), "Retail");
    }

    #[test]
    fn search_is_case_insensitive_over_visible_columns() {
        let seed = seed_customers();
        let snap = snapshot(vec![industry(1, "Hospitality")], vec![lead(10, "Alpha", 1)]);

        let by_company = customer_rows(&snap, &seed, &CustomerSearch::new("GREEN energy"));
        assert_eq!(by_company.len(), 1);
        assert_eq!(by_company[0].contact_name, "Mike Wilson");

        let by_industry = customer_rows(&snap, &seed, &CustomerSearch::new("hospital"));
        assert_eq!(by_industry.len(), 1);
        assert_eq!(by_industry[0].company_name, "Alpha");

        let by_product = customer_rows(&snap, &seed, &CustomerSearch::new("crm"));
        assert_eq!(by_product.len(), 1);

        let none = customer_rows(&snap, &seed, &CustomerSearch::new("zzz"));
        assert!(none.is_empty());
    }

    #[test]
    fn notes_and_address_are_not_searched() {
        let snap = snapshot(Vec::new(), vec![lead(10, "Alpha", 1)]);
        let rows = customer_rows(&snap, &[], &CustomerSearch::new("1 Road"));
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn directory_rederives_after_store_change() {
        let store = Arc::new(DomainStore::new());
        let mut directory = CustomerDirectory::new(Arc::clone(&store), seed_customers());
        assert_eq!(directory.rows().len(), 3);

        store.leads.replace(vec![Lead::clone(&lead(10, "Alpha", 1))]);
        store.revision.send_modify(|r| *r += 1);

        let rows = directory.changed().await.unwrap();
        assert_eq!(rows.len(), 4);

        directory.set_search("alpha");
        assert_eq!(directory.rows().len(), 1);
    }
}
