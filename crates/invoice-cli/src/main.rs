use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use invoice_application::InvoiceDesk;
use invoice_core::form::FormMode;
use invoice_core::reference::ReferenceKind;
use invoice_infrastructure::{AppConfig, JsonFileStore};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "invoice-desk")]
#[command(about = "Invoice Desk - capture invoices with draft persistence", long_about = None)]
struct Cli {
    /// Directory holding the session and draft files
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Path to config.toml (defaults to the platform config directory)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Open a session
    Login {
        #[arg(short, long, default_value = "")]
        username: String,
        #[arg(short, long, default_value = "")]
        password: String,
    },
    /// Close the session and discard the draft
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Render the invoice form
    Show {
        /// Tab to render
        #[arg(long, default_value_t = FormMode::VendorDetails)]
        mode: FormMode,
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set fields (`path=value`) and save the draft
    Set {
        #[arg(required = true, value_parser = commands::form::parse_assignment)]
        assignments: Vec<(String, String)>,
    },
    /// Append blank expense lines and save the draft
    AddExpense {
        #[arg(long, default_value_t = 1)]
        count: usize,
    },
    /// Save the current form as a draft
    SaveDraft,
    /// Apply optional assignments, then submit the invoice (the draft keeps it)
    Submit {
        #[arg(value_parser = commands::form::parse_assignment)]
        assignments: Vec<(String, String)>,
    },
    /// List reference options
    Options {
        kind: ReferenceKind,
    },
    /// Attach an invoice file (read only; fields are not populated)
    Attach {
        file: PathBuf,
    },
}

fn init_tracing(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load_from(path),
        None => AppConfig::load_default(),
    }
    .context("Failed to load configuration")?;
    init_tracing(&config);

    let storage_dir = match cli.data_dir {
        Some(dir) => dir,
        None => config
            .resolve_storage_dir()
            .context("Failed to resolve storage directory")?,
    };
    tracing::debug!(dir = %storage_dir.display(), "opening store");
    let desk = InvoiceDesk::open(Arc::new(JsonFileStore::new(storage_dir)));

    match cli.command {
        Commands::Login { username, password } => {
            commands::session::login(&desk, &username, &password)?
        }
        Commands::Logout => commands::session::logout(&desk)?,
        Commands::Whoami => commands::session::whoami(&desk),
        Commands::Show { mode, json } => commands::form::show(&desk, mode, json)?,
        Commands::Set { assignments } => commands::form::set(&desk, &assignments)?,
        Commands::AddExpense { count } => commands::form::add_expense(&desk, count)?,
        Commands::SaveDraft => commands::form::save_draft(&desk)?,
        Commands::Submit { assignments } => commands::form::submit(&desk, &assignments)?,
        Commands::Options { kind } => commands::options::list(&desk, kind),
        Commands::Attach { file } => commands::attach::run(&desk, &file)?,
    }

    Ok(())
}
