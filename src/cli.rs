use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::AppConfig;

/// Interactive household CO2 scenario modeling.
#[derive(Debug, Parser)]
#[command(name = "co2-scenarios", version)]
pub struct CliOptions {
    /// Load settings from a TOML file
    #[arg(long, short, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Appliance catalog JSON file (overrides the config file)
    #[arg(long, value_name = "PATH")]
    pub catalog: Option<PathBuf>,
    /// Seed for reproducible scenario reports (overrides the config file)
    #[arg(long)]
    pub seed: Option<u64>,
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(long, short, action = ArgAction::Count)]
    pub verbose: u8,
}

impl CliOptions {
    /// Applies flag overrides on top of file settings.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(path) = &self.catalog {
            config.catalog.path = path.clone();
        }
        if let Some(seed) = self.seed {
            config.report.seed = Some(seed);
        }
    }
}

pub fn parse_args() -> CliOptions {
    CliOptions::parse()
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;

    #[test]
    fn defaults_without_flags() {
        let opts = CliOptions::try_parse_from(["co2-scenarios"]).expect("parse should succeed");
        assert!(opts.config.is_none());
        assert!(opts.catalog.is_none());
        assert!(opts.seed.is_none());
        assert_eq!(opts.verbose, 0);
    }

    #[test]
    fn supports_catalog_and_seed() {
        let opts = CliOptions::try_parse_from([
            "co2-scenarios",
            "--catalog",
            "fixtures/appliances.json",
            "--seed",
            "42",
            "-vv",
        ])
        .expect("parse should succeed");
        assert_eq!(
            opts.catalog.as_deref(),
            Some(Path::new("fixtures/appliances.json"))
        );
        assert_eq!(opts.seed, Some(42));
        assert_eq!(opts.verbose, 2);
    }

    #[test]
    fn rejects_non_numeric_seed() {
        let result = CliOptions::try_parse_from(["co2-scenarios", "--seed", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn overrides_replace_file_settings() {
        let opts = CliOptions::try_parse_from(["co2-scenarios", "--catalog", "x.json", "--seed", "7"])
            .expect("parse should succeed");
        let mut config = AppConfig::default();
        opts.apply_overrides(&mut config);
        assert_eq!(config.catalog.path, PathBuf::from("x.json"));
        assert_eq!(config.report.seed, Some(7));
    }
}
