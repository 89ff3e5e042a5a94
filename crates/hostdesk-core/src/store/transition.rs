// ── Store transitions ──
//
// The three request-lifecycle transitions and the rules for applying
// them. Fetch results only replace a collection when they belong to the
// newest dispatch of their kind; creates always land.

use std::sync::atomic::Ordering;

use chrono::Utc;
use tracing::debug;

use super::DomainStore;
use super::domain_store::{OperationRecord, OperationStatus};
use crate::operation::{OperationKind, OperationOutput};

/// Monotonic dispatch tag. Larger is newer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) struct SequenceToken(pub(crate) u64);

#[derive(Debug, Clone)]
pub(crate) enum Transition {
    Pending {
        kind: OperationKind,
        token: SequenceToken,
    },
    Fulfilled {
        token: SequenceToken,
        output: OperationOutput,
    },
    Rejected {
        kind: OperationKind,
        token: SequenceToken,
        message: String,
    },
}

impl DomainStore {
    /// Allocate a token and apply the pending transition for `kind`.
    pub(crate) fn begin(&self, kind: OperationKind) -> SequenceToken {
        let token = SequenceToken(self.next_token.fetch_add(1, Ordering::Relaxed) + 1);
        self.apply(Transition::Pending { kind, token });
        token
    }

    pub(crate) fn apply(&self, transition: Transition) {
        match transition {
            Transition::Pending { kind, token } => {
                self.operations.insert(
                    kind,
                    OperationRecord {
                        latest: token,
                        status: OperationStatus::Loading,
                    },
                );
                self.status.send_modify(|s| {
                    s.loading = true;
                    s.error = None;
                });
                debug!(%kind, token = token.0, "pending");
            }
            Transition::Fulfilled { token, output } => {
                let kind = output.kind();
                let current = self.is_current(kind, token);
                self.apply_output(output, current);
                if current {
                    self.set_operation_status(kind, OperationStatus::Succeeded);
                }
                self.status.send_modify(|s| s.loading = false);
                self.last_fulfilled.send_replace(Some(Utc::now()));
                debug!(%kind, token = token.0, current, "fulfilled");
            }
            Transition::Rejected {
                kind,
                token,
                message,
            } => {
                if self.is_current(kind, token) {
                    self.set_operation_status(kind, OperationStatus::Failed(message.clone()));
                }
                debug!(%kind, token = token.0, %message, "rejected");
                self.status.send_modify(|s| {
                    s.loading = false;
                    s.error = Some(message);
                });
            }
        }
        self.revision.send_modify(|r| *r += 1);
    }

    fn apply_output(&self, output: OperationOutput, current: bool) {
        let kind = output.kind();
        if kind.replaces_collection() && !current {
            debug!(%kind, "stale fetch result dropped");
            return;
        }
        match output {
            OperationOutput::Industries(list) => self.industries.replace(list),
            OperationOutput::Industry(industry) => self.industries.push(industry),
            OperationOutput::ServiceCategories(list) => self.service_categories.replace(list),
            OperationOutput::Services(list) => self.created_services.replace(list),
            OperationOutput::Service(service) => {
                self.created_services.upsert_by(service, |a, b| a.id == b.id);
            }
            OperationOutput::Leads(list) => self.leads.replace(list),
            OperationOutput::Lead(lead) => self.leads.push(lead),
        }
    }

    fn is_current(&self, kind: OperationKind, token: SequenceToken) -> bool {
        self.operations
            .get(&kind)
            .is_none_or(|record| record.latest <= token)
    }

    fn set_operation_status(&self, kind: OperationKind, status: OperationStatus) {
        if let Some(mut record) = self.operations.get_mut(&kind) {
            record.status = status;
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::model::{Industry, Lead};
    use crate::store::StoreStatus;

    fn industry(id: u64, name: &str) -> Industry {
        Industry {
            id,
            name: name.into(),
            description: String::new(),
            active: true,
        }
    }

    fn lead(email: &str) -> Lead {
        Lead {
            id: None,
            full_name: "Contact".into(),
            company_name: "Co".into(),
            email: email.into(),
            phone: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip_code: String::new(),
            country: String::new(),
            country_code: String::new(),
            note: String::new(),
            industry_id: 1,
        }
    }

    #[test]
    fn pending_sets_loading_and_clears_error() {
        let store = DomainStore::new();
        store.status.send_replace(StoreStatus {
            loading: false,
            error: Some("old".into()),
        });

        store.begin(OperationKind::FetchIndustries);

        assert!(store.is_loading());
        assert!(store.error().is_none());
        assert_eq!(
            store.operation_status(OperationKind::FetchIndustries),
            OperationStatus::Loading
        );
    }

    #[test]
    fn pending_keeps_existing_collection() {
        let store = DomainStore::new();
        store.industries.replace(vec![industry(1, "Tech")]);

        store.begin(OperationKind::FetchIndustries);

        assert_eq!(store.industry_count(), 1);
    }

    #[test]
    fn fulfilled_fetch_replaces_and_create_appends() {
        let store = DomainStore::new();

        let t = store.begin(OperationKind::FetchIndustries);
        store.apply(Transition::Fulfilled {
            token: t,
            output: OperationOutput::Industries(vec![industry(1, "Tech")]),
        });
        let t = store.begin(OperationKind::CreateIndustry);
        store.apply(Transition::Fulfilled {
            token: t,
            output: OperationOutput::Industry(industry(2, "Retail")),
        });

        let names: Vec<_> = store
            .industries_snapshot()
            .iter()
            .map(|i| i.name.clone())
            .collect();
        assert_eq!(names, ["Tech", "Retail"]);
        assert!(!store.is_loading());
        assert!(store.last_fulfilled().is_some());
    }

    #[test]
    fn rejected_records_error_and_leaves_collection() {
        let store = DomainStore::new();
        store.leads.replace(vec![lead("a@b.io")]);

        let t = store.begin(OperationKind::CreateLead);
        store.apply(Transition::Rejected {
            kind: OperationKind::CreateLead,
            token: t,
            message: "Request failed with status code 500".into(),
        });

        assert_eq!(store.lead_count(), 1);
        assert!(!store.is_loading());
        assert_eq!(
            store.error().as_deref(),
            Some("Request failed with status code 500")
        );
        assert_eq!(
            store.operation_status(OperationKind::CreateLead),
            OperationStatus::Failed("Request failed with status code 500".into())
        );
    }

    #[test]
    fn stale_fetch_does_not_replace() {
        let store = DomainStore::new();
        let older = store.begin(OperationKind::FetchIndustries);
        let newer = store.begin(OperationKind::FetchIndustries);

        store.apply(Transition::Fulfilled {
            token: newer,
            output: OperationOutput::Industries(vec![industry(2, "New")]),
        });
        store.apply(Transition::Fulfilled {
            token: older,
            output: OperationOutput::Industries(vec![industry(1, "Old")]),
        });

        let snap = store.industries_snapshot();
        assert_eq!(snap.len(), 1);
        assert_eq!(snap[0].name, "New");
        assert!(!store.is_loading());
    }

    #[test]
    fn creates_are_never_dropped_as_stale() {
        let store = DomainStore::new();
        let first = store.begin(OperationKind::CreateLead);
        let second = store.begin(OperationKind::CreateLead);

        store.apply(Transition::Fulfilled {
            token: second,
            output: OperationOutput::Lead(lead("two@b.io")),
        });
        store.apply(Transition::Fulfilled {
            token: first,
            output: OperationOutput::Lead(lead("one@b.io")),
        });

        assert_eq!(store.lead_count(), 2);
    }

    #[test]
    fn global_status_is_last_writer_wins() {
        let store = DomainStore::new();
        let fetch = store.begin(OperationKind::FetchLeads);
        let create = store.begin(OperationKind::CreateIndustry);

        store.apply(Transition::Rejected {
            kind: OperationKind::CreateIndustry,
            token: create,
            message: "boom".into(),
        });
        store.apply(Transition::Fulfilled {
            token: fetch,
            output: OperationOutput::Leads(Vec::new()),
        });

        // The fetch settled last but fulfilled does not clear the error.
        assert_eq!(store.error().as_deref(), Some("boom"));
        assert!(!store.is_loading());
        assert_eq!(
            store.operation_status(OperationKind::FetchLeads),
            OperationStatus::Succeeded
        );
        assert_eq!(
            store.operation_status(OperationKind::CreateIndustry),
            OperationStatus::Failed("boom".into())
        );
        assert_eq!(
            store.operation_status(OperationKind::FetchIndustries),
            OperationStatus::Idle
        );
    }

    #[test]
    fn every_transition_bumps_revision() {
        let store = DomainStore::new();
        let t = store.begin(OperationKind::FetchLeads);
        store.apply(Transition::Fulfilled {
            token: t,
            output: OperationOutput::Leads(vec![lead("a@b.io")]),
        });
        assert_eq!(store.revision(), 2);
    }
}
