use chrono::{Local, NaiveDate};
use clap::Parser;
use workjournal::application::{
    init::init, record_entry, ConfigService, EntrySubmission, WeeklyViewService,
};
use workjournal::cli::{format_recorded, format_weekly_view, Cli, Commands};
use workjournal::domain::time_ref::resolve_date;
use workjournal::error::Result;
use workjournal::infrastructure::logging::init_logging;
use workjournal::infrastructure::{Config, FileSystemRepository, JournalRepository};
use workjournal::web;

/// Log filter for one-shot commands unless `--log-level` says otherwise
const CLI_LOG_LEVEL: &str = "warn";

fn main() {
    let cli = Cli::parse();

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let today = Local::now().date_naive();
    if !matches!(cli.command, Commands::Serve { .. }) {
        init_logging(cli.log_level.as_deref().unwrap_or(CLI_LOG_LEVEL));
    }

    match cli.command {
        Commands::Init { path } => {
            init(&path)?;
            Ok(())
        }
        Commands::Add {
            category,
            date,
            text,
        } => {
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config)?;
            let submission = EntrySubmission::new(date, category, text.join(" "));
            let entry = record_entry(&store, &submission, today)?;
            println!("{}", format_recorded(&entry));
            Ok(())
        }
        Commands::List { from, to } => {
            let from = parse_bound(from.as_deref(), today)?;
            let to = parse_bound(to.as_deref(), today)?;
            let (repo, config) = open_workspace()?;
            let store = repo.open_store(&config)?;
            let weeks = WeeklyViewService::new(&store).execute(from, to)?;
            println!("{}", format_weekly_view(&weeks).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let (repo, _) = open_workspace()?;
            let service = ConfigService::new(repo);

            if list {
                let config = service.list()?;
                println!("database = {}", config.database.display());
                println!("bind = {}", config.bind);
                println!("log_level = {}", config.log_level);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
            } else {
                println!("Usage: workjournal config [--list | <key> [<value>]]");
                println!("Valid keys: database, bind, log_level");
            }
            Ok(())
        }
        Commands::Serve { bind } => {
            let (repo, config) = open_workspace()?;
            init_logging(cli.log_level.as_deref().unwrap_or(&config.log_level));
            let store = repo.open_store(&config)?;
            let addr = bind.unwrap_or_else(|| config.bind.clone());
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(web::serve(store, &addr))
        }
    }
}

fn open_workspace() -> Result<(FileSystemRepository, Config)> {
    let repo = FileSystemRepository::discover()?;
    let config = repo.load_config()?;
    Ok((repo, config))
}

fn parse_bound(input: Option<&str>, today: NaiveDate) -> Result<Option<NaiveDate>> {
    input.map(|s| resolve_date(s, today)).transpose()
}
