// Console API wire types
//
// Request and response bodies exactly as the server speaks them
// (snake_case, numeric ids, decimal costs as strings). Response fields
// use `#[serde(default)]` liberally because the backend omits empty
// values rather than sending nulls.

use serde::{Deserialize, Deserializer, Serialize};

// ── Response envelopes ──────────────────────────────────────────────

/// Where the useful payload sits inside a response body.
///
/// The backend is not consistent: list endpoints for industries and
/// categories use `{ data }`, paginated lists use `{ message: { data } }`,
/// and some create endpoints return the record bare.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Envelope {
    /// `{ "data": ... }`
    Data,
    /// `{ "message": { "data": ... } }`, falling back to a bare `message` array.
    MessageData,
    /// `{ "data": ... }` when present, otherwise the whole body.
    DataOrBody,
}

impl Envelope {
    /// Pull the payload out of a decoded body, or `None` if it's missing.
    pub fn extract(self, body: serde_json::Value) -> Option<serde_json::Value> {
        match self {
            Self::Data => take_non_null(body, "/data"),
            Self::MessageData => {
                let message = body.pointer("/message")?;
                if message.is_array() {
                    return Some(message.clone());
                }
                take_non_null(body, "/message/data")
            }
            Self::DataOrBody => match body.pointer("/data") {
                Some(data) if !data.is_null() => Some(data.clone()),
                _ => Some(body),
            },
        }
    }
}

fn take_non_null(body: serde_json::Value, pointer: &str) -> Option<serde_json::Value> {
    body.pointer(pointer).filter(|v| !v.is_null()).cloned()
}

// ── Industry ────────────────────────────────────────────────────────

/// Industry as returned by `GET/POST /api/v1/industry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryResponse {
    pub id: u64,
    pub industry_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: Option<bool>,
}

/// Body of `POST /api/v1/industry`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndustryCreate {
    pub industry_name: String,
    pub description: String,
}

// ── Service categories ──────────────────────────────────────────────

/// Entry of `GET /api/v1/service/categories`.
///
/// Older deployments label the category as `category`, newer ones as `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategoryResponse {
    pub id: u64,
    #[serde(alias = "category")]
    pub name: String,
}

// ── Services ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillingType {
    #[serde(rename = "onetime")]
    OneTime,
    Recurring,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Digit,
    Password,
    #[serde(alias = "selection")]
    Select,
}

/// One selectable value of a `select` custom field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub options: String,
}

/// A custom input field attached to a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomFieldWire {
    pub field_name: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub is_mandatory: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field_select: Option<Vec<SelectOption>>,
}

/// Body of `POST /api/v1/services`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCreate {
    pub name: String,
    pub category_id: u64,
    #[serde(rename = "type")]
    pub billing_type: BillingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub one_time_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yearly_cost: Option<String>,
    pub features: Vec<String>,
    pub custom_fields: Vec<CustomFieldWire>,
}

/// Service as returned by the create and paginated list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceResponse {
    pub id: u64,
    pub name: String,
    #[serde(default)]
    pub category_id: Option<u64>,
    #[serde(rename = "type", default)]
    pub billing_type: Option<BillingType>,
    #[serde(default, deserialize_with = "decimal_string")]
    pub one_time_cost: Option<String>,
    #[serde(default, deserialize_with = "decimal_string")]
    pub monthly_cost: Option<String>,
    #[serde(default, deserialize_with = "decimal_string")]
    pub yearly_cost: Option<String>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub custom_fields: Vec<CustomFieldWire>,
}

/// Accept a decimal sent either as a JSON string or a JSON number.
fn decimal_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        Some(serde_json::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    })
}

// ── Customers / leads ───────────────────────────────────────────────

/// Body of `POST /api/v1/customer`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerCreate {
    pub full_name: String,
    pub company_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub country_code: String,
    pub note: String,
    pub industry_id: u64,
}

/// Customer (lead) record as returned by the customer endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerResponse {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip_code: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub country_code: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub industry_id: u64,
}
