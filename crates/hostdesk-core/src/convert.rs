// ── Wire/domain type conversions ──
//
// Bridges `hostdesk_api` bodies and canonical `hostdesk_core::model`
// types in both directions. Response conversions fill defaults for
// missing optional data; request conversions format decimals as the
// two-place strings the server expects.

use std::str::FromStr;

use rust_decimal::Decimal;

use hostdesk_api::{
    BillingType, CustomFieldWire, CustomerCreate, CustomerResponse, FieldType, IndustryCreate,
    IndustryResponse, SelectOption, ServiceCategoryResponse, ServiceCreate, ServiceResponse,
};

use crate::model::{Billing, CustomField, FieldKind, Industry, Lead, Service, ServiceCategory};
use crate::operation::{CreateIndustryRequest, CreateLeadRequest, CreateServiceRequest};

// ── Helpers ────────────────────────────────────────────────────────

/// Parse an optional decimal string, silently dropping unparseable values.
fn parse_decimal(raw: Option<&str>) -> Option<Decimal> {
    raw.and_then(|s| Decimal::from_str(s.trim()).ok())
}

fn format_decimal(value: Option<Decimal>) -> Option<String> {
    value.map(|mut v| {
        v.rescale(2);
        v.to_string()
    })
}

fn field_kind(wire: FieldType) -> FieldKind {
    match wire {
        FieldType::String => FieldKind::Text,
        FieldType::Digit => FieldKind::Digit,
        FieldType::Password => FieldKind::Password,
        FieldType::Select => FieldKind::Select,
    }
}

fn field_type(kind: FieldKind) -> FieldType {
    match kind {
        FieldKind::Text => FieldType::String,
        FieldKind::Digit => FieldType::Digit,
        FieldKind::Password => FieldType::Password,
        FieldKind::Select => FieldType::Select,
    }
}

// ── Responses → domain ─────────────────────────────────────────────

impl From<IndustryResponse> for Industry {
    fn from(i: IndustryResponse) -> Self {
        Self {
            id: i.id,
            name: i.industry_name,
            description: i.description,
            active: i.status.unwrap_or(false),
        }
    }
}

impl From<ServiceCategoryResponse> for ServiceCategory {
    fn from(c: ServiceCategoryResponse) -> Self {
        Self {
            id: c.id,
            name: c.name,
        }
    }
}

impl From<CustomFieldWire> for CustomField {
    fn from(f: CustomFieldWire) -> Self {
        let options = f
            .field_select
            .unwrap_or_default()
            .into_iter()
            .map(|o| o.options)
            .collect();
        CustomField::new(field_kind(f.field_type), f.field_name, f.is_mandatory, options)
    }
}

impl From<ServiceResponse> for Service {
    fn from(s: ServiceResponse) -> Self {
        // An untyped record is one-time only if that is the cost it carries.
        let one_time = match s.billing_type {
            Some(BillingType::OneTime) => true,
            Some(BillingType::Recurring) => false,
            None => s.one_time_cost.is_some() && s.monthly_cost.is_none(),
        };
        let billing = if one_time {
            Billing::OneTime {
                cost: parse_decimal(s.one_time_cost.as_deref()),
            }
        } else {
            Billing::Recurring {
                monthly: parse_decimal(s.monthly_cost.as_deref()),
                yearly: parse_decimal(s.yearly_cost.as_deref()),
            }
        };

        Self {
            id: s.id,
            name: s.name,
            category_id: s.category_id.unwrap_or_default(),
            billing,
            features: s.features,
            custom_fields: s.custom_fields.into_iter().map(CustomField::from).collect(),
        }
    }
}

impl From<CustomerResponse> for Lead {
    fn from(c: CustomerResponse) -> Self {
        Self {
            id: c.id,
            full_name: c.full_name,
            company_name: c.company_name,
            email: c.email,
            phone: c.phone_number,
            address: c.address,
            city: c.city,
            state: c.state,
            zip_code: c.zip_code,
            country: c.country,
            country_code: c.country_code,
            note: c.note,
            industry_id: c.industry_id,
        }
    }
}

// ── Requests → wire ────────────────────────────────────────────────

impl From<&CreateIndustryRequest> for IndustryCreate {
    fn from(r: &CreateIndustryRequest) -> Self {
        Self {
            industry_name: r.name.clone(),
            description: r.description.clone(),
        }
    }
}

impl From<&CustomField> for CustomFieldWire {
    fn from(f: &CustomField) -> Self {
        let field_select = match f {
            CustomField::Select { options, .. } => Some(
                options
                    .iter()
                    .map(|o| SelectOption { options: o.clone() })
                    .collect(),
            ),
            _ => None,
        };
        Self {
            field_name: f.name().to_owned(),
            field_type: field_type(f.kind()),
            is_mandatory: f.is_mandatory(),
            field_select,
        }
    }
}

impl From<&CreateServiceRequest> for ServiceCreate {
    fn from(r: &CreateServiceRequest) -> Self {
        let (billing_type, one_time_cost, monthly_cost, yearly_cost) = match r.billing {
            Billing::OneTime { cost } => (BillingType::OneTime, format_decimal(cost), None, None),
            Billing::Recurring { monthly, yearly } => (
                BillingType::Recurring,
                None,
                format_decimal(monthly),
                format_decimal(yearly),
            ),
        };
        Self {
            name: r.name.clone(),
            category_id: r.category_id,
            billing_type,
            one_time_cost,
            monthly_cost,
            yearly_cost,
            features: r.features.clone(),
            custom_fields: r.custom_fields.iter().map(CustomFieldWire::from).collect(),
        }
    }
}

impl From<&CreateLeadRequest> for CustomerCreate {
    fn from(r: &CreateLeadRequest) -> Self {
        Self {
            full_name: r.full_name.clone(),
            company_name: r.company_name.clone(),
            email: r.email.clone(),
            phone_number: r.phone.clone(),
            address: r.address.clone(),
            city: r.city.clone(),
            state: r.state.clone(),
            zip_code: r.zip_code.clone(),
            country: r.country.clone(),
            country_code: r.country_code.clone(),
            note: r.note.clone(),
            industry_id: r.industry_id,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn industry_without_status_is_inactive() {
        let industry = Industry::from(IndustryResponse {
            id: 2,
            industry_name: "Retail".into(),
            description: String::new(),
            status: None,
        });
        assert!(!industry.active);
        assert_eq!(industry.name, "Retail");
    }

    #[test]
    fn untyped_service_infers_billing_from_costs() {
        let svc = Service::from(ServiceResponse {
            id: 4,
            name: "Website Design".into(),
            category_id: None,
            billing_type: None,
            one_time_cost: Some("500".into()),
            monthly_cost: None,
            yearly_cost: None,
            features: Vec::new(),
            custom_fields: Vec::new(),
        });
        assert_eq!(svc.category_id, 0);
        assert_eq!(
            svc.billing,
            Billing::OneTime {
                cost: Some(Decimal::new(500, 0))
            }
        );
    }

    #[test]
    fn service_request_formats_two_decimal_costs() {
        let req = CreateServiceRequest {
            name: "Basic Care".into(),
            category_id: 1,
            billing: Billing::Recurring {
                monthly: Some(Decimal::new(15, 0)),
                yearly: Some(Decimal::new(1505, 1)),
            },
            features: vec!["24/7 Monitoring".into()],
            custom_fields: vec![
                CustomField::Select {
                    name: "Region".into(),
                    mandatory: true,
                    options: vec!["EU".into()],
                },
                CustomField::Digit {
                    name: "Cores".into(),
                    mandatory: false,
                },
            ],
        };
        let wire = ServiceCreate::from(&req);

        assert_eq!(wire.billing_type, BillingType::Recurring);
        assert_eq!(wire.monthly_cost.as_deref(), Some("15.00"));
        assert_eq!(wire.yearly_cost.as_deref(), Some("150.50"));
        assert!(wire.one_time_cost.is_none());
        assert_eq!(wire.custom_fields[0].field_type, FieldType::Select);
        assert_eq!(
            wire.custom_fields[0].field_select,
            Some(vec![SelectOption {
                options: "EU".into()
            }])
        );
        assert!(wire.custom_fields[1].field_select.is_none());
    }

    #[test]
    fn custom_field_round_trips_through_wire() {
        let field = CustomField::Select {
            name: "Plan".into(),
            mandatory: false,
            options: vec!["A".into(), "B".into()],
        };
        assert_eq!(CustomField::from(CustomFieldWire::from(&field)), field);
    }

    #[test]
    fn lead_request_maps_phone_to_phone_number() {
        let req = CreateLeadRequest {
            full_name: "Ravi".into(),
            company_name: "Spice Route".into(),
            email: "ravi@spiceroute.in".into(),
            phone: "+91 99999 00000".into(),
            address: String::new(),
            city: "Kochi".into(),
            state: "Kerala".into(),
            zip_code: "0123".into(),
            country: "IN".into(),
            country_code: "+91".into(),
            note: String::new(),
            industry_id: 3,
        };
        let wire = CustomerCreate::from(&req);
        assert_eq!(wire.phone_number, "+91 99999 00000");
        assert_eq!(wire.industry_id, 3);
    }
}
