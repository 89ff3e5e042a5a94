//! Clap derive structures for the `hostdesk` CLI.
//!
//! Defines the command tree, global flags, and shared value enums. This
//! file is also compiled by `build.rs` for man pages, so it may only
//! depend on `clap` and `clap_complete`.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

// ── Top-Level CLI ────────────────────────────────────────────────────

/// hostdesk -- console for CloudHouse hosting services and customer leads
#[derive(Debug, Parser)]
#[command(
    name = "hostdesk",
    version,
    about = "Manage hosting industries, services, and customer leads",
    long_about = "Command-line console for the CloudHouse hosting API.\n\n\
        Browse and create industries, service categories, services, and\n\
        customer leads, and manage the locally signed-in console user.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Config profile to use
    #[arg(long, short = 'p', env = "HOSTDESK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// API base URL (overrides profile)
    #[arg(long, env = "HOSTDESK_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Output format
    #[arg(
        long,
        short = 'o',
        env = "HOSTDESK_OUTPUT",
        default_value = "table",
        global = true
    )]
    pub output: OutputFormat,

    /// When to use color output
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorMode,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept invalid TLS certificates
    #[arg(long, short = 'k', env = "HOSTDESK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds (no timeout when unset)
    #[arg(long, env = "HOSTDESK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and create industries
    #[command(alias = "ind", alias = "i")]
    Industries(IndustriesArgs),

    /// Browse service categories and services, create services
    #[command(alias = "svc", alias = "s")]
    Services(ServicesArgs),

    /// Browse customers and capture new leads
    #[command(alias = "cust", alias = "c")]
    Customers(CustomersArgs),

    /// Show or change the signed-in console user
    Session(SessionArgs),

    /// Manage configuration profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  INDUSTRIES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct IndustriesArgs {
    #[command(subcommand)]
    pub command: IndustriesCommand,
}

#[derive(Debug, Subcommand)]
pub enum IndustriesCommand {
    /// List industries
    #[command(alias = "ls")]
    List,

    /// Create an industry
    Create {
        /// Industry name
        #[arg(long)]
        name: String,

        /// Free-text description
        #[arg(long, default_value = "")]
        description: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SERVICES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ServicesArgs {
    #[command(subcommand)]
    pub command: ServicesCommand,
}

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List service categories
    #[command(alias = "cats")]
    Categories,

    /// List the service catalog grouped by category
    #[command(alias = "ls")]
    List {
        /// Include the built-in catalog entries
        #[arg(long)]
        all: bool,
    },

    /// Create a service
    Create(ServiceCreateArgs),
}

#[derive(Debug, Args)]
pub struct ServiceCreateArgs {
    /// Read the whole service draft from a JSON file
    #[arg(long, short = 'F', conflicts_with_all = ["name", "category"])]
    pub from_file: Option<PathBuf>,

    /// Service name
    #[arg(long, required_unless_present = "from_file")]
    pub name: Option<String>,

    /// Category id (see `services categories`)
    #[arg(long, required_unless_present = "from_file")]
    pub category: Option<u64>,

    /// Billing type
    #[arg(long, value_enum, default_value = "recurring")]
    pub billing: BillingArg,

    /// One-time cost (onetime billing)
    #[arg(long)]
    pub cost: Option<String>,

    /// Monthly cost (recurring billing)
    #[arg(long)]
    pub monthly: Option<String>,

    /// Yearly cost (recurring billing)
    #[arg(long)]
    pub yearly: Option<String>,

    /// Feature line (repeatable)
    #[arg(long = "feature")]
    pub features: Vec<String>,

    /// Custom field as name:type[:mandatory][:opt1|opt2] (repeatable)
    #[arg(long = "field")]
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BillingArg {
    /// Single up-front payment
    #[value(alias = "one-time")]
    Onetime,
    /// Monthly and yearly pricing
    #[value(alias = "monthly")]
    Recurring,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CUSTOMERS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CustomersArgs {
    #[command(subcommand)]
    pub command: CustomersCommand,
}

#[derive(Debug, Subcommand)]
pub enum CustomersCommand {
    /// List customers and fetched leads
    #[command(alias = "ls")]
    List {
        /// Case-insensitive search over company, contact, email, industry, product
        #[arg(long, short = 's')]
        search: Option<String>,
    },

    /// Capture a new customer lead
    Add(CustomerAddArgs),
}

#[derive(Debug, Args)]
pub struct CustomerAddArgs {
    /// Company name
    #[arg(long)]
    pub company: String,

    /// Contact person
    #[arg(long)]
    pub contact: String,

    /// Contact email
    #[arg(long)]
    pub email: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    #[arg(long, default_value = "")]
    pub address: String,

    #[arg(long, default_value = "")]
    pub notes: String,

    /// Industry id (see `industries list`)
    #[arg(long, default_value_t = 1)]
    pub industry: u64,

    #[arg(long)]
    pub city: Option<String>,

    #[arg(long)]
    pub state: Option<String>,

    #[arg(long)]
    pub zip_code: Option<String>,

    #[arg(long)]
    pub country: Option<String>,

    #[arg(long)]
    pub country_code: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  SESSION
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct SessionArgs {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Debug, Subcommand)]
pub enum SessionCommand {
    /// Show the signed-in user and their dashboard
    Show,

    /// Sign a user in locally
    Set {
        #[arg(long)]
        email: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Account kind
        #[arg(long, value_enum, default_value = "client")]
        kind: UserKindArg,
    },

    /// Sign out
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UserKindArg {
    Admin,
    Client,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create a profile with guided setup
    Init,

    /// Display the resolved configuration
    Show,

    /// Print the config file location
    Path,

    /// Set the default profile
    Use {
        /// Profile name to set as default
        name: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
