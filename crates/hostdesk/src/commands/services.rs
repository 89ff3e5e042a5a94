//! Service catalog command handlers.

use std::sync::Arc;

use indexmap::IndexMap;
use tabled::Tabled;

use hostdesk_core::view::{CatalogEntry, category_options, seed_services, service_catalog};
use hostdesk_core::{
    Billing, BillingKind, Console, CustomFieldDraft, Service, ServiceCategory, ServiceDraft,
};

use crate::cli::{BillingArg, GlobalOpts, ServiceCreateArgs, ServicesArgs, ServicesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table rows ──────────────────────────────────────────────────────

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Category")]
    name: String,
}

impl From<&Arc<ServiceCategory>> for CategoryRow {
    fn from(c: &Arc<ServiceCategory>) -> Self {
        Self {
            id: c.id,
            name: c.name.clone(),
        }
    }
}

#[derive(Tabled)]
struct CatalogRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Billing")]
    billing: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Features")]
    features: String,
}

impl From<&CatalogEntry> for CatalogRow {
    fn from(e: &CatalogEntry) -> Self {
        Self {
            id: e.id,
            name: e.name.clone(),
            billing: e.billing.clone(),
            price: e.price.map(|p| format!("${p}")).unwrap_or_default(),
            features: e.features.join(", "),
        }
    }
}

fn service_detail(service: &Service) -> String {
    let pricing = match &service.billing {
        Billing::OneTime { cost } => format!("one-time {}", money(*cost)),
        Billing::Recurring { monthly, yearly } => {
            format!("{}/mo, {}/yr", money(*monthly), money(*yearly))
        }
    };
    let mut lines = vec![
        format!("ID:       {}", service.id),
        format!("Name:     {}", service.name),
        format!("Category: {}", service.category_id),
        format!("Pricing:  {pricing}"),
    ];
    if !service.features.is_empty() {
        lines.push(format!("Features: {}", service.features.join(", ")));
    }
    for field in &service.custom_fields {
        let mandatory = if field.is_mandatory() { " (required)" } else { "" };
        let options = if field.options().is_empty() {
            String::new()
        } else {
            format!(" [{}]", field.options().join(" | "))
        };
        lines.push(format!(
            "Field:    {} {}{mandatory}{options}",
            field.name(),
            field.kind()
        ));
    }
    lines.join("\n")
}

fn money(value: Option<rust_decimal::Decimal>) -> String {
    value.map_or_else(|| "-".into(), |v| format!("${v}"))
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: ServicesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        ServicesCommand::Categories => {
            util::with_spinner(
                console,
                global,
                "Loading categories",
                console.fetch_service_categories(),
            )
            .await?;

            let snap = console.store().service_categories_snapshot();
            let out = output::render_list(
                global.output,
                snap.as_slice(),
                |c| CategoryRow::from(c),
                |c| c.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ServicesCommand::List { all } => {
            util::with_spinner(console, global, "Loading services", async {
                tokio::try_join!(console.fetch_service_categories(), console.fetch_services())
            })
            .await?;

            let seed = if all { seed_services() } else { Vec::new() };
            let catalog = service_catalog(&console.snapshot(), &seed);
            let out = render_catalog(global, &catalog, color)?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        ServicesCommand::Create(create) => {
            let draft = build_draft(create)?;
            if draft.category_id.is_none() {
                util::with_spinner(
                    console,
                    global,
                    "Loading categories",
                    console.fetch_service_categories(),
                )
                .await?;
                let choices: Vec<String> = category_options(&console.snapshot())
                    .into_iter()
                    .map(|(id, name)| format!("{id}: {name}"))
                    .collect();
                return Err(CliError::Validation {
                    field: "category".into(),
                    reason: format!("required; choose one of {}", choices.join(", ")),
                });
            }

            let req = draft.into_request()?;
            let created = util::with_spinner(
                console,
                global,
                "Creating service",
                console.create_service(req),
            )
            .await?;

            output::success(
                &format!("Service '{}' created", created.name),
                global.quiet,
                color,
            );
            let out = output::render_single(global.output, &created, service_detail, |s| {
                s.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

fn render_catalog(
    global: &GlobalOpts,
    catalog: &IndexMap<String, Vec<CatalogEntry>>,
    color: bool,
) -> Result<String, CliError> {
    match global.output {
        crate::cli::OutputFormat::Table => Ok(catalog
            .iter()
            .map(|(category, entries)| {
                let rows: Vec<CatalogRow> = entries.iter().map(CatalogRow::from).collect();
                format!(
                    "{}\n{}",
                    output::heading(category, color),
                    output::render_table(&rows)
                )
            })
            .collect::<Vec<_>>()
            .join("\n\n")),
        format => {
            let flat: Vec<&CatalogEntry> = catalog.values().flatten().collect();
            output::render_list(format, &flat, |e| CatalogRow::from(*e), |e| e.id.to_string())
        }
    }
}

// ── Draft building ──────────────────────────────────────────────────

fn build_draft(args: ServiceCreateArgs) -> Result<ServiceDraft, CliError> {
    if let Some(ref path) = args.from_file {
        return util::read_json_file(path);
    }

    let billing = match args.billing {
        BillingArg::Onetime => BillingKind::OneTime,
        BillingArg::Recurring => BillingKind::Recurring,
    };
    let custom_fields = args
        .fields
        .iter()
        .map(String::as_str)
        .map(parse_field)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ServiceDraft {
        name: args.name.unwrap_or_default(),
        category_id: args.category,
        billing,
        one_time_cost: args.cost.unwrap_or_default(),
        monthly_cost: args.monthly.unwrap_or_default(),
        yearly_cost: args.yearly.unwrap_or_default(),
        features: args.features,
        custom_fields,
    })
}

/// Parse `name:type[:mandatory][:opt1|opt2]`.
///
/// The third segment is a flag when it reads `mandatory`, `required` or
/// `optional`; anything else is taken as the option list.
fn parse_field(raw: &str) -> Result<CustomFieldDraft, CliError> {
    let mut parts = raw.split(':');
    let (Some(name), Some(field_type)) = (parts.next(), parts.next()) else {
        return Err(CliError::Validation {
            field: "field".into(),
            reason: format!("expected name:type[:mandatory][:opt1|opt2], got {raw:?}"),
        });
    };

    let mut mandatory = false;
    let mut options = Vec::new();
    for part in parts {
        match part.trim() {
            "mandatory" | "required" => mandatory = true,
            "optional" | "" => {}
            list => options.extend(list.split('|').map(str::to_owned)),
        }
    }

    Ok(CustomFieldDraft {
        name: name.to_owned(),
        field_type: field_type.to_owned(),
        mandatory,
        options,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn parse_field_reads_flag_and_options() {
        let field = parse_field("Region:select:mandatory:EU|US").unwrap();
        assert_eq!(field.name, "Region");
        assert_eq!(field.field_type, "select");
        assert!(field.mandatory);
        assert_eq!(field.options, vec!["EU".to_owned(), "US".to_owned()]);
    }

    #[test]
    fn parse_field_options_without_flag() {
        let field = parse_field("Plan:selection:Basic|Pro").unwrap();
        assert!(!field.mandatory);
        assert_eq!(field.options.len(), 2);
    }

    #[test]
    fn parse_field_requires_type() {
        assert!(parse_field("Domain").is_err());
    }

    #[test]
    fn flags_build_a_recurring_draft() {
        let args = ServiceCreateArgs {
            from_file: None,
            name: Some("Managed VPS".into()),
            category: Some(1),
            billing: BillingArg::Recurring,
            cost: None,
            monthly: Some("35".into()),
            yearly: Some("350".into()),
            features: vec!["Weekly patching".into()],
            fields: vec!["Domain:string:required".into()],
        };
        let req = build_draft(args).unwrap().into_request().unwrap();
        assert_eq!(req.billing.kind(), BillingKind::Recurring);
        assert_eq!(req.custom_fields.len(), 1);
        assert!(req.custom_fields[0].is_mandatory());
    }
}
