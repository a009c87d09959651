mod calendar;
mod catalog;
mod cli;
mod compare;
mod config;
mod error;
mod generator;
mod report;
mod scoring;
mod store;
mod types;

use crate::catalog::Catalog;
use crate::compare::Comparator;
use crate::error::WorkbrandError;
use crate::generator::client::{ChatClient, TextGenerator};
use crate::store::memory::MemoryStore;
use crate::store::{CompanyRepository, JsonFileStore, UserDirectory};
use crate::types::company::CompanyData;
use crate::types::config::WorkbrandConfig;
use crate::types::user::{NewUser, PreferenceUpdate, Role, User};
use clap::Parser;
use std::io::Read;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const INVALID_INPUT: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn output_format(format: &cli::ReportFormat) -> report::OutputFormat {
    match format {
        cli::ReportFormat::Json => report::OutputFormat::Json,
        cli::ReportFormat::Md => report::OutputFormat::Md,
    }
}

fn run() -> Result<i32, WorkbrandError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let cfg = config::load_config(&cli.root)?;
    let companies = JsonFileStore::new(cfg.companies_path(&cli.root));
    debug!("company database at {}", companies.path().display());

    match cli.command {
        cli::Commands::Compare(cmd) => {
            let catalog = Catalog::builtin()?;
            let client = ChatClient::from_env(&cfg.generator)?;
            let generator = client.as_ref().map(|client| client as &dyn TextGenerator);

            let scratch;
            let repository: &dyn CompanyRepository = if cmd.dry_run {
                scratch = MemoryStore::with_companies(companies.all()?);
                &scratch
            } else {
                &companies
            };

            let comparison = Comparator::new(&catalog, repository)
                .with_generator(generator, cfg.generator.api_key_env.clone())
                .compare(&cmd.company, &cmd.competitor, cmd.email.as_deref())?;
            println!(
                "{}",
                report::render_comparison(&comparison, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Show(cmd) => {
            let catalog = Catalog::builtin()?;
            let company = Comparator::new(&catalog, &companies).lookup(&cmd.company)?;
            println!(
                "{}",
                report::render_company(&company, output_format(&cmd.format))?
            );
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Normalize(cmd) => {
            let text = match &cmd.input {
                Some(path) => std::fs::read_to_string(path)?,
                None => {
                    let mut buffer = String::new();
                    std::io::stdin().read_to_string(&mut buffer)?;
                    buffer
                }
            };
            let mut data = generator::parse::parse_analysis(&cmd.company, &text)?;
            let outcome = scoring::normalize_in_place(&mut data);
            if outcome.rescaled() {
                info!(
                    "normalized total {} -> {}",
                    outcome.previous_total, outcome.new_total
                );
            } else {
                debug!("total {} is within the ceiling", outcome.previous_total);
            }
            println!("{}", serde_json::to_string_pretty(&data)?);
            Ok(exit_code::SUCCESS)
        }
        cli::Commands::Companies(cmd) => run_companies(cmd, &companies),
        cli::Commands::Users(cmd) => run_users(cmd, &UserDirectory::new(cfg.users_path(&cli.root))),
        cli::Commands::Calendar(cmd) => run_calendar(cmd, &cfg),
    }
}

fn run_companies(
    cmd: cli::CompaniesCommand,
    companies: &JsonFileStore,
) -> Result<i32, WorkbrandError> {
    match cmd {
        cli::CompaniesCommand::List { benchmarks: true } => {
            for entry in Catalog::builtin()?.benchmarks() {
                println!("{}\t{}\t{}", entry.id, entry.display_name, entry.data.total_score());
            }
            Ok(exit_code::SUCCESS)
        }
        cli::CompaniesCommand::List { benchmarks: false } => {
            let records = companies.all()?;
            if records.is_empty() {
                println!("companies: none stored");
                return Ok(exit_code::SUCCESS);
            }
            for (name, stored) in records {
                println!(
                    "{}\t{}\t{}",
                    name,
                    stored.data.total_score(),
                    stored.email.as_deref().unwrap_or("-")
                );
            }
            Ok(exit_code::SUCCESS)
        }
        cli::CompaniesCommand::Add { name, email } => {
            if name.trim().is_empty() {
                return Err(WorkbrandError::InvalidInput(
                    "company name is required".to_string(),
                ));
            }
            if companies.get(&name)?.is_some() {
                return Err(WorkbrandError::InvalidInput(format!(
                    "company {} already exists",
                    name.trim()
                )));
            }
            companies.save(&name, CompanyData::blank(), email)?;
            println!("added {}", store::normalize_key(&name));
            Ok(exit_code::SUCCESS)
        }
        cli::CompaniesCommand::Delete { name } => {
            if !companies.delete(&name)? {
                return Err(WorkbrandError::NotFound(format!("company {}", name.trim())));
            }
            println!("deleted {}", store::normalize_key(&name));
            Ok(exit_code::SUCCESS)
        }
    }
}

fn print_user(user: &User) {
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        user.id,
        user.name,
        user.email,
        user.company_name,
        user.role.as_str(),
        user.status.as_str()
    );
}

fn run_users(cmd: cli::UsersCommand, users: &UserDirectory) -> Result<i32, WorkbrandError> {
    debug!("user directory at {}", users.path().display());
    match cmd {
        cli::UsersCommand::List => {
            for user in users.list()? {
                print_user(&user);
            }
        }
        cli::UsersCommand::Get { id } => {
            let user = users.get(&id)?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        cli::UsersCommand::Add(add) => {
            let role = match add.role {
                cli::RoleArg::Admin => Role::Admin,
                cli::RoleArg::User => Role::User,
            };
            print_user(&users.add(NewUser {
                name: add.name,
                email: add.email,
                company_name: add.company,
                role,
            })?);
        }
        cli::UsersCommand::Delete { id } => {
            let removed = users.delete(&id)?;
            println!("deleted user {} ({})", removed.id, removed.email);
        }
        cli::UsersCommand::ToggleStatus { id } => print_user(&users.toggle_status(&id)?),
        cli::UsersCommand::ToggleRole { id } => print_user(&users.toggle_role(&id)?),
        cli::UsersCommand::Rename { id, name } => print_user(&users.rename(&id, &name)?),
        cli::UsersCommand::Preferences(prefs) => {
            let user = users.update_preferences(
                &prefs.id,
                PreferenceUpdate {
                    email_notifications: prefs.email_notifications,
                    show_date_time: prefs.show_date_time,
                    timezone: prefs.timezone,
                },
            )?;
            println!("{}", serde_json::to_string_pretty(&user.preferences)?);
        }
        cli::UsersCommand::Stats => {
            let stats = users.stats()?;
            println!(
                "total: {}\nactive: {}\nadmins: {}\ncompanies: {}",
                stats.total,
                stats.active,
                stats.admins,
                users.companies()?.len()
            );
        }
    }
    Ok(exit_code::SUCCESS)
}

fn run_calendar(cmd: cli::CalendarCommand, cfg: &WorkbrandConfig) -> Result<i32, WorkbrandError> {
    let start_month = cmd
        .fiscal_year_start
        .unwrap_or(cfg.calendar.fiscal_year_start);
    let today = cmd
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    for slot in calendar::upcoming_quarters(today, start_month, cmd.count)? {
        let months = calendar::quarter_months(slot.start)?
            .iter()
            .map(|month| month.format("%B %Y").to_string())
            .collect::<Vec<_>>()
            .join(", ");
        println!("{}\t{}\t{}", slot.label, slot.start, months);
    }
    Ok(exit_code::SUCCESS)
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            let code = if e.is_user_error() {
                exit_code::INVALID_INPUT
            } else {
                exit_code::RUNTIME_FAILURE
            };
            std::process::exit(code);
        }
    }
}
