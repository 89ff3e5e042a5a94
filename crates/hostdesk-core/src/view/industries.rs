// ── Industry list ──
//
// Toggling and removing industries only changes what this view shows.
// Neither is sent to the server.

use std::collections::{HashMap, HashSet};

use crate::model::Industry;
use crate::store::StoreSnapshot;

/// Local toggle/remove state layered over the fetched industries.
#[derive(Debug, Clone, Default)]
pub struct IndustryListView {
    active: HashMap<u64, bool>,
    removed: HashSet<u64>,
}

impl IndustryListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip the active flag of `id` as currently shown in `snapshot`.
    pub fn toggle(&mut self, snapshot: &StoreSnapshot, id: u64) {
        let shown = self.active.get(&id).copied().or_else(|| {
            snapshot
                .industries
                .iter()
                .find(|i| i.id == id)
                .map(|i| i.active)
        });
        if let Some(shown) = shown {
            self.active.insert(id, !shown);
        }
    }

    /// Hide `id` from this view.
    pub fn remove(&mut self, id: u64) {
        self.removed.insert(id);
    }

    pub fn rows(&self, snapshot: &StoreSnapshot) -> Vec<Industry> {
        snapshot
            .industries
            .iter()
            .filter(|i| !self.removed.contains(&i.id))
            .map(|i| Industry {
                active: self.active.get(&i.id).copied().unwrap_or(i.active),
                ..Industry::clone(i)
            })
            .collect()
    }
}
