// ── Typed request structs for Operation payloads ──

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::model::{Billing, CustomField};
use crate::validation::{require, validate_email};

// ── Industry ───────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateIndustryRequest {
    pub name: String,
    pub description: String,
}

impl CreateIndustryRequest {
    /// Trimmed request; an empty name is rejected.
    pub fn new(name: &str, description: &str) -> Result<Self, CoreError> {
        let req = Self {
            name: name.trim().to_owned(),
            description: description.trim().to_owned(),
        };
        req.validate()?;
        Ok(req)
    }

    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        require("industry name", &self.name)
    }
}

// ── Service ────────────────────────────────────────────────────────

/// Built by [`ServiceDraft::into_request`](crate::ServiceDraft::into_request).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateServiceRequest {
    pub name: String,
    pub category_id: u64,
    pub billing: Billing,
    pub features: Vec<String>,
    pub custom_fields: Vec<CustomField>,
}

impl CreateServiceRequest {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        require("service name", &self.name)?;
        match &self.billing {
            Billing::OneTime { cost: None } => {
                Err(CoreError::validation("one-time cost is required"))
            }
            Billing::Recurring { monthly: None, .. } | Billing::Recurring { yearly: None, .. } => {
                Err(CoreError::validation("monthly and yearly costs are required"))
            }
            _ => Ok(()),
        }
    }
}

// ── Lead ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateLeadRequest {
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

impl CreateLeadRequest {
    pub(crate) fn validate(&self) -> Result<(), CoreError> {
        validate_email(&self.email)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    #[test]
    fn industry_name_is_trimmed_and_required() {
        let req = CreateIndustryRequest::new("  Energy ", " Solar ").unwrap();
        assert_eq!(req.name, "Energy");
        assert_eq!(req.description, "Solar");
        assert!(CreateIndustryRequest::new("   ", "x").is_err());
    }

    #[test]
    fn service_requires_costs_for_its_billing() {
        let mut req = CreateServiceRequest {
            name: "Basic Care".into(),
            category_id: 1,
            billing: Billing::Recurring {
                monthly: Some(Decimal::new(1500, 2)),
                yearly: None,
            },
            features: Vec::new(),
            custom_fields: Vec::new(),
        };
        assert!(req.validate().is_err());

        req.billing = Billing::OneTime {
            cost: Some(Decimal::new(50000, 2)),
        };
        assert!(req.validate().is_ok());
    }
}
