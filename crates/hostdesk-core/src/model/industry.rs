// ── Industry ──

use serde::{Deserialize, Serialize};

/// A customer vertical used to classify leads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Industry {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub active: bool,
}
