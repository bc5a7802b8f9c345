use clap::Parser;
use quotebook::application::{
    init::init, list_quotes, AddQuoteService, ConfigService, ImportExportService, ImportMode,
    ShowQuoteService, SyncService, WatchOptions,
};
use quotebook::cli::{self, Cli, Commands};
use quotebook::domain::CategoryFilter;
use quotebook::error::QuoteError;
use quotebook::infrastructure::{FileSystemRepository, HttpQuoteSource, QuoteRepository};
use std::io::IsTerminal;
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_tracing(cli.verbose) {
        eprintln!("Warning: failed to initialize logging: {}", e);
    }

    match run(cli) {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose {
            "quotebook=debug"
        } else {
            "quotebook=warn"
        })
    });

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}

fn run(cli: Cli) -> Result<(), QuoteError> {
    match cli.command {
        Some(Commands::Init { path, empty }) => init(&path, empty),
        Some(Commands::Show { category }) => show(category.as_deref()),
        Some(Commands::Add { text, category }) => {
            let repo = FileSystemRepository::discover()?;
            let quote = AddQuoteService::new(repo).execute(&text, &category)?;
            println!("Added quote to '{}'", quote.category);
            Ok(())
        }
        Some(Commands::List { category }) => {
            let repo = FileSystemRepository::discover()?;
            let filter: CategoryFilter = category
                .as_deref()
                .map(|c| c.parse::<CategoryFilter>().unwrap_or_default())
                .unwrap_or_default();
            let quotes = list_quotes::list_quotes(&repo, &filter)?;
            print!("{}", cli::format_quote_list(&quotes));
            Ok(())
        }
        Some(Commands::Categories) => {
            let repo = FileSystemRepository::discover()?;
            let categories = list_quotes::list_categories(&repo)?;
            print!("{}", cli::format_category_list(&categories));
            Ok(())
        }
        Some(Commands::Filter { category }) => {
            let repo = FileSystemRepository::discover()?;
            let (filter, active) = ShowQuoteService::new(repo).select(&category)?;
            println!("{}", cli::format_filter_heading(&filter, active.len()));
            print!("{}", cli::format_quote_list(&active));
            Ok(())
        }
        Some(Commands::Import {
            file,
            skip_duplicates,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let mode = if skip_duplicates {
                ImportMode::SkipDuplicates
            } else {
                ImportMode::Append
            };
            let added = ImportExportService::new(repo).import(&file, mode)?;
            println!("Quotes imported successfully: {} added", added);
            Ok(())
        }
        Some(Commands::Export { file }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ImportExportService::new(repo);
            if file == Path::new("-") {
                println!("{}", service.export_json()?);
            } else {
                let count = service.export_to(&file)?;
                println!("Exported {} quotes to {}", count, file.display());
            }
            Ok(())
        }
        Some(Commands::Sync {
            watch,
            interval,
            ticks,
            no_push,
            status,
        }) => {
            let repo = FileSystemRepository::discover()?;
            let config = repo.load_config()?;
            let source = HttpQuoteSource::from_config(&config)?;
            let push = config.push_on_sync && !no_push;
            let service = SyncService::new(repo, source);

            if status {
                println!("{}", cli::format_sync_state(&service.status()?));
            } else if watch {
                let options = WatchOptions {
                    interval: Duration::from_secs(interval.unwrap_or(config.sync_interval_secs)),
                    ticks,
                    push,
                };
                service.watch(&options, |report| {
                    println!("{}", cli::format_sync_report(report));
                });
            } else {
                let report = service.run_once(push)?;
                println!("{}", cli::format_sync_report(&report));
            }
            Ok(())
        }
        Some(Commands::Config { key, value, list }) => {
            let repo = FileSystemRepository::discover()?;
            let service = ConfigService::new(repo);

            if list {
                for (k, v) in service.list()? {
                    println!("{} = {}", k, v);
                }
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", service.get(&k)?);
                }
                Ok(())
            } else {
                println!("Usage: quotebook config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: {}",
                    quotebook::infrastructure::Config::KEYS.join(", ")
                );
                Ok(())
            }
        }
        None => show(None),
    }
}

fn show(category: Option<&str>) -> Result<(), QuoteError> {
    let repo = FileSystemRepository::discover()?;
    let outcome = ShowQuoteService::new(repo).execute(category, &mut rand::thread_rng())?;
    println!("{}", cli::format_shown_quote(outcome.quote.as_ref()));
    Ok(())
}
