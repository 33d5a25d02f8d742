use anyhow::{Context, Result};
use clap::{crate_description, crate_name, crate_version, App as Cli, Arg, ArgMatches};
use inventario_tui::app::App;
use inventario_tui::config::Config;
use inventario_tui::inventory::{demo_products, load_products, ProductStore};
use inventario_tui::logger::{CustomLogger, LogBuffer};
use log::LevelFilter;
use std::path::Path;

fn cli() -> Cli<'static, 'static> {
    Cli::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("import")
                .short("i")
                .long("import")
                .value_name("FILE")
                .help("YAML or JSON list of products to load at start")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("demo")
                .long("demo")
                .value_name("N")
                .help("Seed N generated products")
                .takes_value(true),
        )
}

/// Build the initial product collection from the command line options.
///
fn initial_store(matches: &ArgMatches) -> Result<ProductStore> {
    let mut store = ProductStore::new();
    if let Some(path) = matches.value_of("import") {
        let products = load_products(Path::new(path))?;
        store.extend(products);
    }
    if let Some(count) = matches.value_of("demo") {
        let count: usize = count
            .parse()
            .with_context(|| format!("Invalid --demo value '{}'", count))?;
        for draft in demo_products(count) {
            store.add(draft);
        }
    }
    Ok(store)
}

#[tokio::main]
async fn main() -> Result<()> {
    let matches = cli().get_matches();
    // Must precede Config::load, which warns on invalid values
    let log_buffer = LogBuffer::default();
    CustomLogger::init(log_buffer.clone(), LevelFilter::Debug)?;

    let mut config = Config::new();
    config
        .load(matches.value_of("config"))
        .context("Failed to load configuration")?;
    let store = initial_store(&matches)?;
    App::start(config, store, log_buffer).await
}
