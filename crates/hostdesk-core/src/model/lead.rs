// ── Lead / customer ──
//
// Leads and customers are the same backing resource. The server assigns
// `id` on create; records staged locally have none.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: Option<u64>,
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub country_code: String,
    pub note: String,
    pub industry_id: u64,
}
