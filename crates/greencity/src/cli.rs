//! Command line interface definition and entry point.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use greencity_config::{ConfigError, GreenCityConfig};
use greencity_console::{DEFAULT_DIRECTIVE, QUIET_DIRECTIVE};
use greencity_solver::KnapsackSolver;
use tracing::{debug, info};

use crate::catalog::load_catalog;
use crate::error::{AppError, Result};
use crate::progress::TracingProgressListener;
use crate::session::{ScriptedPrompt, Session, SessionSummary, TerminalPrompt};

/// GreenCity: pick the sustainability devices that do the most good for a budget.
#[derive(Parser, Debug)]
#[command(name = "greencity")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Device catalog CSV. Defaults to `catalog.path` from the config, then
    /// `dataset/green_city_devices.csv`.
    pub catalog: Option<PathBuf>,

    /// Configuration file (TOML or YAML). Defaults apply if it is missing.
    #[arg(short, long, default_value = "greencity.toml")]
    pub config: PathBuf,

    /// Directory for saved reports, overriding `report.output_dir`.
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Budget to optimize for; repeat for several. Skips the prompt.
    #[arg(short, long = "budget", value_name = "AMOUNT", allow_negative_numbers = true)]
    pub budgets: Vec<f64>,

    /// Only log warnings and errors.
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter for this invocation.
    pub fn log_directive(&self) -> &'static str {
        if self.quiet {
            QUIET_DIRECTIVE
        } else {
            DEFAULT_DIRECTIVE
        }
    }
}

/// Loads the catalog and runs either the given budgets or the interactive
/// prompt, writing reports to stdout and the output directory.
///
/// # Errors
///
/// Fails on an unreadable or invalid config, a missing or unreadable
/// catalog, an output directory that cannot be created, or console I/O.
pub fn run(cli: &Cli) -> Result<SessionSummary> {
    let mut config = load_config(&cli.config)?;
    if let Some(dir) = &cli.output_dir {
        config = config.with_output_dir(dir);
    }

    let catalog_path = cli.catalog.clone().unwrap_or_else(|| config.catalog_path());
    if !catalog_path.is_file() {
        return Err(AppError::CatalogNotFound(
            std::path::absolute(&catalog_path).unwrap_or(catalog_path),
        ));
    }
    info!("Loading dataset from: {}", catalog_path.display());
    let devices = load_catalog(&catalog_path, &config.catalog)?;

    std::fs::create_dir_all(&config.report.output_dir)?;

    let solver = KnapsackSolver::new(config.optimizer.clone())
        .with_listener(Arc::new(TracingProgressListener));
    let stdout = io::stdout().lock();

    if cli.budgets.is_empty() {
        let prompt = TerminalPrompt::new(&config.report);
        Session::new(&devices, &solver, &config.report, prompt, stdout).run()
    } else {
        let prompt = ScriptedPrompt::new(cli.budgets.iter().copied());
        Session::new(&devices, &solver, &config.report, prompt, stdout).run()
    }
}

/// Loads `path`, falling back to defaults if it does not exist.
pub fn load_config(path: &Path) -> Result<GreenCityConfig> {
    match GreenCityConfig::load(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::Io(err)) if err.kind() == io::ErrorKind::NotFound => {
            debug!("No config at {}, using defaults", path.display());
            Ok(GreenCityConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_defaults() {
        let cli = Cli::try_parse_from(["greencity"]).unwrap();
        assert_eq!(cli.catalog, None);
        assert_eq!(cli.config, PathBuf::from("greencity.toml"));
        assert!(cli.budgets.is_empty());
        assert_eq!(cli.log_directive(), DEFAULT_DIRECTIVE);
    }

    #[test]
    fn test_parse_batch_options() {
        let cli = Cli::try_parse_from([
            "greencity",
            "devices.csv",
            "-b",
            "5000",
            "--budget",
            "12500.5",
            "-o",
            "reports",
            "-q",
        ])
        .unwrap();

        assert_eq!(cli.catalog, Some(PathBuf::from("devices.csv")));
        assert_eq!(cli.budgets, [5000.0, 12500.5]);
        assert_eq!(cli.output_dir, Some(PathBuf::from("reports")));
        assert_eq!(cli.log_directive(), QUIET_DIRECTIVE);
    }

    #[test]
    fn test_rejects_non_numeric_budget() {
        assert!(Cli::try_parse_from(["greencity", "-b", "lots"]).is_err());
    }

    #[test]
    fn test_missing_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config(&dir.path().join("absent.toml")).unwrap();
        assert_eq!(config, GreenCityConfig::default());
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("greencity.toml");
        std::fs::write(&path, "[optimizer]\nmax_table_bytes = 0\n").unwrap();

        assert!(matches!(
            load_config(&path),
            Err(AppError::Config(ConfigError::Invalid(_)))
        ));
    }
}
