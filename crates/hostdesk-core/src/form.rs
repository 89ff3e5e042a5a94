// ── Form payload builders ──
//
// Drafts hold raw user input exactly as typed. `into_request` normalizes
// it into a validated request, or reports the first problem found.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{Billing, BillingKind, CustomField, FieldKind};
use crate::operation::{CreateLeadRequest, CreateServiceRequest};
use crate::validation::{require, validate_email};

// ── Lead ───────────────────────────────────────────────────────────

/// Raw input of the "add customer" form.
///
/// Location fields default to the head office so a quick capture only
/// needs company, contact, and email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LeadDraft {
    pub company_name: String,
    pub contact_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub notes: String,
    pub industry_id: u64,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub country_code: String,
}

impl Default for LeadDraft {
    fn default() -> Self {
        Self {
            company_name: String::new(),
            contact_name: String::new(),
            email: String::new(),
            phone: String::new(),
            address: String::new(),
            notes: String::new(),
            industry_id: 1,
            city: "Kochi".into(),
            state: "Kerala".into(),
            zip_code: "0123".into(),
            country: "IN".into(),
            country_code: "+91".into(),
        }
    }
}

impl LeadDraft {
    pub fn into_request(self) -> Result<CreateLeadRequest, CoreError> {
        require("company name", &self.company_name)?;
        require("contact name", &self.contact_name)?;
        let email = self.email.trim().to_owned();
        validate_email(&email)?;

        Ok(CreateLeadRequest {
            full_name: self.contact_name.trim().to_owned(),
            company_name: self.company_name.trim().to_owned(),
            email,
            phone: self.phone.trim().to_owned(),
            address: self.address.trim().to_owned(),
            city: self.city.trim().to_owned(),
            state: self.state.trim().to_owned(),
            zip_code: self.zip_code.trim().to_owned(),
            country: self.country.trim().to_owned(),
            country_code: self.country_code.trim().to_owned(),
            note: self.notes.trim().to_owned(),
            industry_id: self.industry_id,
        })
    }
}

// ── Service ────────────────────────────────────────────────────────

/// One row of the custom-field editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomFieldDraft {
    pub name: String,
    /// `string`, `digit`, `password`, `select` or `selection`.
    pub field_type: String,
    pub mandatory: bool,
    pub options: Vec<String>,
}

/// Raw input of the "create service" form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceDraft {
    pub name: String,
    pub category_id: Option<u64>,
    pub billing: BillingKind,
    pub one_time_cost: String,
    pub monthly_cost: String,
    pub yearly_cost: String,
    pub features: Vec<String>,
    pub custom_fields: Vec<CustomFieldDraft>,
}

impl ServiceDraft {
    pub fn into_request(self) -> Result<CreateServiceRequest, CoreError> {
        let name = self.name.trim().to_owned();
        require("service name", &name)?;
        let category_id = self
            .category_id
            .ok_or_else(|| CoreError::validation("service category is required"))?;

        let billing = match self.billing {
            BillingKind::OneTime => Billing::OneTime {
                cost: Some(parse_cost("one-time cost", &self.one_time_cost)?),
            },
            BillingKind::Recurring => Billing::Recurring {
                monthly: Some(parse_cost("monthly cost", &self.monthly_cost)?),
                yearly: Some(parse_cost("yearly cost", &self.yearly_cost)?),
            },
        };

        let features = non_blank(self.features);

        let custom_fields = self
            .custom_fields
            .into_iter()
            .filter(|f| !f.name.trim().is_empty())
            .map(|f| {
                let kind = FieldKind::from_str(f.field_type.trim()).map_err(|_| {
                    CoreError::validation(format!(
                        "unknown field type {:?} for field {:?}",
                        f.field_type, f.name
                    ))
                })?;
                Ok(CustomField::new(
                    kind,
                    f.name.trim().to_owned(),
                    f.mandatory,
                    non_blank(f.options),
                ))
            })
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(CreateServiceRequest {
            name,
            category_id,
            billing,
            features,
            custom_fields,
        })
    }
}

/// Parse a cost and fix it to two decimal places.
fn parse_cost(label: &str, raw: &str) -> Result<Decimal, CoreError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(CoreError::validation(format!("{label} is required")));
    }
    let value = Decimal::from_str(raw)
        .map_err(|_| CoreError::validation(format!("{label} must be a number, got {raw:?}")))?;
    if value.is_sign_negative() {
        return Err(CoreError::validation(format!("{label} cannot be negative")));
    }
    let mut value = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    value.rescale(2);
    Ok(value)
}

fn non_blank(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}
