// ── Service domain types ──
//
// Billing and custom fields are tagged variants: each variant carries
// only the members valid for it, so a one-time service cannot hold a
// monthly cost and a text field cannot hold select options.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCategory {
    pub id: u64,
    pub name: String,
}

/// Billing discriminant, as typed into a form or CLI flag.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum BillingKind {
    #[serde(rename = "onetime", alias = "one-time")]
    #[strum(to_string = "onetime", serialize = "one-time")]
    OneTime,
    #[default]
    #[strum(to_string = "recurring", serialize = "monthly")]
    Recurring,
}

/// How a service is charged. Costs carry exactly two decimal places.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Billing {
    #[serde(rename = "onetime")]
    OneTime { cost: Option<Decimal> },
    Recurring {
        monthly: Option<Decimal>,
        yearly: Option<Decimal>,
    },
}

impl Billing {
    pub fn kind(&self) -> BillingKind {
        match self {
            Self::OneTime { .. } => BillingKind::OneTime,
            Self::Recurring { .. } => BillingKind::Recurring,
        }
    }

    /// Headline price: the one-time cost, or the monthly cost.
    pub fn headline_cost(&self) -> Option<Decimal> {
        match self {
            Self::OneTime { cost } => *cost,
            Self::Recurring { monthly, .. } => *monthly,
        }
    }
}

/// Custom-field discriminant. `selection` is accepted as a spelling of
/// `select`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(ascii_case_insensitive)]
pub enum FieldKind {
    #[strum(to_string = "string", serialize = "text")]
    Text,
    #[strum(to_string = "digit")]
    Digit,
    #[strum(to_string = "password")]
    Password,
    #[strum(to_string = "select", serialize = "selection")]
    Select,
}

/// An input the customer fills in when ordering a service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field_type", rename_all = "lowercase")]
pub enum CustomField {
    #[serde(rename = "string")]
    Text { name: String, mandatory: bool },
    Digit { name: String, mandatory: bool },
    Password { name: String, mandatory: bool },
    Select {
        name: String,
        mandatory: bool,
        options: Vec<String>,
    },
}

impl CustomField {
    /// Build a field of the given kind. `options` is ignored unless the
    /// kind is `Select`.
    pub fn new(kind: FieldKind, name: String, mandatory: bool, options: Vec<String>) -> Self {
        match kind {
            FieldKind::Text => Self::Text { name, mandatory },
            FieldKind::Digit => Self::Digit { name, mandatory },
            FieldKind::Password => Self::Password { name, mandatory },
            FieldKind::Select => Self::Select {
                name,
                mandatory,
                options,
            },
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Text { .. } => FieldKind::Text,
            Self::Digit { .. } => FieldKind::Digit,
            Self::Password { .. } => FieldKind::Password,
            Self::Select { .. } => FieldKind::Select,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Text { name, .. }
            | Self::Digit { name, .. }
            | Self::Password { name, .. }
            | Self::Select { name, .. } => name,
        }
    }

    pub fn is_mandatory(&self) -> bool {
        match self {
            Self::Text { mandatory, .. }
            | Self::Digit { mandatory, .. }
            | Self::Password { mandatory, .. }
            | Self::Select { mandatory, .. } => *mandatory,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            Self::Select { options, .. } => options,
            _ => &[],
        }
    }
}

/// A sellable service offering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u64,
    pub name: String,
    /// `0` when the server did not say.
    pub category_id: u64,
    pub billing: Billing,
    pub features: Vec<String>,
    pub custom_fields: Vec<CustomField>,
}
