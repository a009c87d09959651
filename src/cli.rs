use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "workbrand",
    version,
    about = "Employer brand scoring and competitor comparison CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Directory holding workbrand.toml and the data directory
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Compare a company against a competitor, analyzing unknown names
    Compare(CompareCommand),
    /// Show one stored or benchmark company without analyzing
    Show(ShowCommand),
    /// Parse generated analysis text and cap its total
    Normalize(NormalizeCommand),
    /// Manage stored company records
    #[command(subcommand)]
    Companies(CompaniesCommand),
    /// Manage user accounts
    #[command(subcommand)]
    Users(UsersCommand),
    /// List upcoming fiscal quarters
    Calendar(CalendarCommand),
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Clone, Debug, ValueEnum)]
pub enum RoleArg {
    Admin,
    User,
}

#[derive(Args)]
pub struct CompareCommand {
    pub company: String,
    #[arg(long)]
    pub competitor: String,
    /// Recorded as the owner of a newly analyzed company
    #[arg(long)]
    pub email: Option<String>,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
    /// Analyze without writing new records
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Args)]
pub struct ShowCommand {
    pub company: String,
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct NormalizeCommand {
    /// File with generated text; reads stdin when omitted
    pub input: Option<PathBuf>,
    /// Company name used for defaulted fields
    #[arg(long, default_value = "Unknown Company")]
    pub company: String,
}

#[derive(Subcommand)]
pub enum CompaniesCommand {
    List {
        /// List the bundled benchmark competitors instead
        #[arg(long)]
        benchmarks: bool,
    },
    /// Add a blank profile
    Add {
        name: String,
        #[arg(long)]
        email: Option<String>,
    },
    Delete {
        name: String,
    },
}

#[derive(Subcommand)]
pub enum UsersCommand {
    List,
    Get {
        id: String,
    },
    Add(AddUserCommand),
    Delete {
        id: String,
    },
    ToggleStatus {
        id: String,
    },
    ToggleRole {
        id: String,
    },
    Rename {
        id: String,
        name: String,
    },
    Preferences(PreferencesCommand),
    Stats,
}

#[derive(Args)]
pub struct AddUserCommand {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub company: String,
    #[arg(long, value_enum, default_value = "user")]
    pub role: RoleArg,
}

#[derive(Args)]
pub struct PreferencesCommand {
    pub id: String,
    #[arg(long)]
    pub email_notifications: Option<bool>,
    #[arg(long)]
    pub show_date_time: Option<bool>,
    #[arg(long)]
    pub timezone: Option<String>,
}

#[derive(Args)]
pub struct CalendarCommand {
    #[arg(long, default_value_t = 6)]
    pub count: usize,
    /// Overrides [calendar] fiscal_year_start
    #[arg(long)]
    pub fiscal_year_start: Option<u32>,
    /// Reference date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    pub today: Option<chrono::NaiveDate>,
}
