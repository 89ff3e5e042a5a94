//! Customer and lead command handlers.

use std::sync::Arc;

use tabled::Tabled;

use hostdesk_core::view::{CustomerDirectory, CustomerRow, seed_customers};
use hostdesk_core::{Console, Lead, LeadDraft};

use crate::cli::{CustomerAddArgs, CustomersArgs, CustomersCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CustomerTableRow {
    #[tabled(rename = "#")]
    id: u64,
    #[tabled(rename = "Company")]
    company: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Phone")]
    phone: String,
    #[tabled(rename = "Industry")]
    industry: String,
    #[tabled(rename = "Product")]
    product: String,
}

impl From<&CustomerRow> for CustomerTableRow {
    fn from(r: &CustomerRow) -> Self {
        Self {
            id: r.id,
            company: r.company_name.clone(),
            contact: r.contact_name.clone(),
            email: r.email.clone(),
            phone: r.phone.clone(),
            industry: r.industry.clone(),
            product: r.product_interested.clone(),
        }
    }
}

fn lead_detail(lead: &Lead) -> String {
    let id = lead.id.map_or_else(|| "-".into(), |id| id.to_string());
    format!(
        "ID:       {id}\n\
         Company:  {}\n\
         Contact:  {}\n\
         Email:    {}\n\
         Phone:    {}\n\
         Location: {}, {}, {} {}\n\
         Industry: {}",
        lead.company_name,
        lead.full_name,
        lead.email,
        lead.phone,
        lead.city,
        lead.state,
        lead.country,
        lead.zip_code,
        lead.industry_id,
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: CustomersArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    match args.command {
        CustomersCommand::List { search } => {
            util::with_spinner(console, global, "Loading customers", async {
                tokio::try_join!(console.fetch_industries(), console.fetch_leads())
            })
            .await?;

            let mut directory = CustomerDirectory::new(Arc::clone(console.store()), seed_customers());
            if let Some(ref term) = search {
                directory.set_search(term);
            }
            let rows = directory.rows();
            let out = output::render_list(
                global.output,
                &rows,
                |r| CustomerTableRow::from(r),
                |r| r.email.clone(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CustomersCommand::Add(add) => {
            let req = lead_draft(add).into_request()?;
            let created = util::with_spinner(
                console,
                global,
                "Saving lead",
                console.create_lead(req),
            )
            .await?;

            output::success(
                &format!("Lead for {} saved", created.company_name),
                global.quiet,
                output::should_color(global.color),
            );
            let out = output::render_single(global.output, &created, lead_detail, |l| {
                l.email.clone()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}

/// Flags over the form defaults; unset location flags keep the defaults.
fn lead_draft(args: CustomerAddArgs) -> LeadDraft {
    let defaults = LeadDraft::default();
    LeadDraft {
        company_name: args.company,
        contact_name: args.contact,
        email: args.email,
        phone: args.phone,
        address: args.address,
        notes: args.notes,
        industry_id: args.industry,
        city: args.city.unwrap_or(defaults.city),
        state: args.state.unwrap_or(defaults.state),
        zip_code: args.zip_code.unwrap_or(defaults.zip_code),
        country: args.country.unwrap_or(defaults.country),
        country_code: args.country_code.unwrap_or(defaults.country_code),
    }
}
