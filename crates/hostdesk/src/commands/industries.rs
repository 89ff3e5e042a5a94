//! Industry command handlers.

use tabled::Tabled;

use hostdesk_core::view::IndustryListView;
use hostdesk_core::{Console, CreateIndustryRequest, Industry};

use crate::cli::{GlobalOpts, IndustriesArgs, IndustriesCommand};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct IndustryRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Status")]
    status: String,
}

impl IndustryRow {
    fn new(industry: &Industry, color: bool) -> Self {
        Self {
            id: industry.id,
            name: industry.name.clone(),
            description: industry.description.clone(),
            status: output::active_label(industry.active, color),
        }
    }
}

fn detail(industry: &Industry) -> String {
    format!(
        "ID:          {}\nName:        {}\nDescription: {}\nActive:      {}",
        industry.id, industry.name, industry.description, industry.active
    )
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(
    console: &Console,
    args: IndustriesArgs,
    global: &GlobalOpts,
) -> Result<(), CliError> {
    let color = output::should_color(global.color);

    match args.command {
        IndustriesCommand::List => {
            util::with_spinner(
                console,
                global,
                "Loading industries",
                console.fetch_industries(),
            )
            .await?;

            let rows = IndustryListView::new().rows(&console.snapshot());
            let out = output::render_list(
                global.output,
                &rows,
                |i| IndustryRow::new(i, color),
                |i| i.id.to_string(),
            )?;
            output::print_output(&out, global.quiet);
            Ok(())
        }

        IndustriesCommand::Create { name, description } => {
            let req = CreateIndustryRequest::new(&name, &description)?;
            let created = util::with_spinner(
                console,
                global,
                "Creating industry",
                console.create_industry(req),
            )
            .await?;

            output::success(
                &format!("Industry '{}' created", created.name),
                global.quiet,
                color,
            );
            let out = output::render_single(global.output, &created, detail, |i| {
                i.id.to_string()
            })?;
            output::print_output(&out, global.quiet);
            Ok(())
        }
    }
}
