//! CLI entrypoint for whatsapp-menu
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use menu_application::{
    CheckoutUseCase, LinkLauncher, LoadCatalogUseCase, MenuStore, OrderLogger, SessionOptions,
    order_mode_from_url,
};
use menu_domain::{BrandConfig, Language, MenuCatalog, SortMode};
use menu_infrastructure::{
    ConfigLoader, DeferredLinkLauncher, FileConfig, JsonCatalogSource, JsonlOrderLogger,
    SystemLinkLauncher,
};
use menu_presentation::{Cli, ConsoleFormatter, ListingRequest, TuiApp, build_listing};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let _log_guard = init_logging(&cli);

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_ref());
        return Ok(());
    }

    // === Configuration ===
    let file_config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow!("failed to load configuration: {}", e))?
    };
    let (brand, issues) = file_config.build()?;
    for issue in &issues {
        warn!("{}", issue.message);
    }
    if !issues.is_empty() {
        eprintln!("{}", ConsoleFormatter::format_issues(&issues));
    }
    let brand = Arc::new(brand);

    // === Catalog ===
    let catalog_path = cli
        .catalog
        .clone()
        .unwrap_or_else(|| file_config.catalog.path.clone());
    let source = Arc::new(JsonCatalogSource::new(catalog_path));
    let catalog = LoadCatalogUseCase::new(source)
        .execute()
        .context("failed to load the menu catalog")?;
    let catalog = Arc::new(catalog);

    // === Session ===
    let order_mode = cli.order || cli.url.as_deref().is_some_and(order_mode_from_url);
    let session = SessionOptions::default()
        .with_order_mode(order_mode)
        .with_language(cli.lang.map(Language::from));

    if cli.listing_mode() {
        print_listing(&cli, catalog, brand, &session);
        return Ok(());
    }

    run_tui(&cli, &file_config, catalog, brand, &session).await
}

/// Route logs to stderr for listing mode and to a file for the TUI
fn init_logging(cli: &Cli) -> Option<WorkerGuard> {
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    if cli.listing_mode() || cli.show_config {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return None;
    }

    // Writing to the terminal would corrupt the UI
    let (dir, file_name) = match &cli.log_file {
        Some(path) => {
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("."));
            (dir, path.file_name()?.to_string_lossy().into_owned())
        }
        None => (
            dirs::data_dir()?.join("whatsapp-menu"),
            "whatsapp-menu.log".to_string(),
        ),
    };
    let appender = RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(dir)
        .ok()?;
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();
    Some(guard)
}

fn print_listing(
    cli: &Cli,
    catalog: Arc<MenuCatalog>,
    brand: Arc<BrandConfig>,
    session: &SessionOptions,
) {
    let mut store = MenuStore::from_session(catalog, brand, session);

    let request = if cli.all {
        ListingRequest::all()
    } else {
        let category = cli
            .category
            .clone()
            .unwrap_or_else(|| store.state().selected_category.clone());
        ListingRequest::category(category)
    };
    let request = request
        .with_query(cli.search.clone().unwrap_or_default())
        .with_sort(SortMode::from(cli.sort));

    let listed = build_listing(&mut store, &request);
    if listed.is_empty()
        && let Some(id) = &cli.category
    {
        warn!("Unknown category '{}'", id);
    }

    let output = if cli.json {
        ConsoleFormatter::format_json(&listed)
    } else {
        let language = store.state().language;
        ConsoleFormatter::format(store.config().brand_name.get(language), &listed, language)
    };
    println!("{}", output);
}

async fn run_tui(
    cli: &Cli,
    file_config: &FileConfig,
    catalog: Arc<MenuCatalog>,
    brand: Arc<BrandConfig>,
    session: &SessionOptions,
) -> Result<()> {
    // === Dependency Injection ===
    let deferred = Arc::new(DeferredLinkLauncher::new());
    let launcher: Arc<dyn LinkLauncher> = if cli.print_link {
        deferred.clone()
    } else {
        let system = SystemLinkLauncher::default();
        if !system.is_available() {
            warn!("No URL opener found; order links will be shown in the status bar");
        }
        Arc::new(system)
    };

    let mut checkout = CheckoutUseCase::new(brand.clone(), launcher);
    if file_config.order_log.enabled {
        match file_config
            .order_log
            .resolved_path()
            .and_then(JsonlOrderLogger::new)
        {
            Some(logger) => {
                info!("Order log: {}", logger.path().display());
                let logger: Arc<dyn OrderLogger> = Arc::new(logger);
                checkout = checkout.with_order_logger(logger);
            }
            None => warn!("Order log is enabled but could not be opened"),
        }
    }

    let store = MenuStore::from_session(catalog, brand, session);
    let mut app = TuiApp::new(store, checkout);
    app.run().await.context("terminal UI failed")?;

    let links = deferred.links();
    if !links.is_empty() {
        println!("{}", ConsoleFormatter::format_links(&links));
    }
    Ok(())
}
