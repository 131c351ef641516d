//! Entry point: load settings and the appliance catalog, then start the command loop.

use std::io;
use std::process;

use anyhow::{Result, bail};
use crossterm::style::Stylize;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use co2_scenarios::app::{App, Console};
use co2_scenarios::cli;
use co2_scenarios::config::AppConfig;
use co2_scenarios::loader::load_appliances_from_file;
use co2_scenarios::logging;
use co2_scenarios::outcome::{self, Outcome};

fn run() -> Result<()> {
    let cli = cli::parse_args();
    logging::enable(cli.verbose);

    let mut config = match &cli.config {
        Some(path) => AppConfig::from_toml_file(path)?,
        None => AppConfig::default(),
    };
    cli.apply_overrides(&mut config);

    let errors = config.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        bail!("invalid configuration ({} errors)", errors.len());
    }

    let catalog_path = config.catalog.path.clone();
    let catalog = match outcome::capture(|| load_appliances_from_file(&catalog_path)) {
        Outcome::Data(catalog) => catalog,
        Outcome::Error(err) => return Err(err),
    };

    let rng = match config.report.seed {
        Some(seed) => {
            info!(seed, "using fixed seed");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let console = Console::new(io::stdin().lock(), io::stdout().lock());
    let mut app = App::new(catalog, config, console, rng);
    app.run()?;
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red());
        process::exit(1);
    }
}
