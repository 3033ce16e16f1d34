//! Command handlers

use crate::cli::{Cli, Commands};
use crate::output::{output_catalog, output_destinations, output_search, output_summaries};
use chrono::{Local, NaiveDate};
use lanerate_app::app::query_service::{get_catalog, get_destinations, get_lane_summaries};
use lanerate_app::app::{handle_search, SearchRequest};
use lanerate_app::config::{validate_margin, Config};
use lanerate_app::export::export_search_to_excel;
use lanerate_app::repository::open_shipment_repo;
use lanerate_domain::model::LaneQuery;
use lanerate_infra::csv_loader::save_shipments;
use lanerate_infra::SyntheticShipmentSource;
use lanerate_types::{Error, OutputFormat, Result, TrailerType};
use std::path::{Path, PathBuf};

/// Execute CLI command
pub fn execute(cli: Cli) -> Result<()> {
    match &cli.command {
        // Reads the config file itself so `--reset` works on an invalid one
        Commands::Config {
            show,
            set_margin,
            set_output,
            set_data,
            clear_data,
            reset,
        } => cmd_config(
            &Config::config_path()?,
            *show,
            *set_margin,
            *set_output,
            set_data.clone(),
            *clear_data,
            *reset,
        ),

        Commands::Search {
            origin,
            destination,
            trailer,
            margin,
            from,
            to,
            export,
        } => {
            let (config, output_format) = load_config(&cli)?;
            let request = SearchRequest::new(LaneQuery::new(origin.clone(), destination.clone(), *trailer))
                .with_pickup_window(*from, *to);
            let request = match margin {
                Some(m) => request.with_margin(*m),
                None => request,
            };
            cmd_search(&cli, &config, output_format, request, export.clone())
        }

        Commands::Options { origin } => {
            let (config, output_format) = load_config(&cli)?;
            cmd_options(&cli, &config, output_format, origin.as_deref())
        }

        Commands::Summary { trailer } => {
            let (config, output_format) = load_config(&cli)?;
            cmd_summary(&cli, &config, output_format, *trailer)
        }

        Commands::Generate {
            output,
            count,
            seed,
        } => {
            let (config, _) = load_config(&cli)?;
            cmd_generate(&config, output.clone(), *count, *seed)
        }
    }
}

/// Stored config plus the effective output format
fn load_config(cli: &Cli) -> Result<(Config, OutputFormat)> {
    let config = Config::load()?;
    let output_format = cli.format.unwrap_or(config.output_format);
    tracing::debug!(format = %output_format, data = ?cli.data, margin = config.margin, "loaded configuration");
    Ok((config, output_format))
}

fn cmd_search(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    request: SearchRequest,
    export: Option<PathBuf>,
) -> Result<()> {
    let repo = open_shipment_repo(config, cli.data.clone())?;
    let response = handle_search(repo.as_ref(), &request, config.margin)
        .map_err(|e| Error::Service(e.to_string()))?;

    output_search(output_format, &response)?;

    if let Some(path) = export {
        export_search_to_excel(&response, &path)?;
        eprintln!("Exported to: {}", path.display());
    }

    Ok(())
}

fn cmd_options(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    origin: Option<&str>,
) -> Result<()> {
    let repo = open_shipment_repo(config, cli.data.clone())?;

    match origin {
        Some(origin) => {
            let destinations = get_destinations(repo.as_ref(), origin)
                .map_err(|e| Error::Service(e.to_string()))?;
            output_destinations(output_format, origin, &destinations)
        }
        None => {
            let catalog = get_catalog(repo.as_ref()).map_err(|e| Error::Service(e.to_string()))?;
            output_catalog(output_format, &catalog)
        }
    }
}

fn cmd_summary(
    cli: &Cli,
    config: &Config,
    output_format: OutputFormat,
    trailer: Option<TrailerType>,
) -> Result<()> {
    let repo = open_shipment_repo(config, cli.data.clone())?;
    let summaries =
        get_lane_summaries(repo.as_ref(), trailer).map_err(|e| Error::Service(e.to_string()))?;
    output_summaries(output_format, &summaries)
}

fn cmd_generate(
    config: &Config,
    output: PathBuf,
    count: Option<usize>,
    seed: Option<u64>,
) -> Result<()> {
    let anchor: NaiveDate = Local::now().date_naive();
    let source = SyntheticShipmentSource::new(
        seed.unwrap_or(config.synthetic_seed),
        count.unwrap_or(config.synthetic_count),
        anchor,
    );
    let records = source.generate();
    save_shipments(&output, &records).map_err(|e| Error::CsvLoader(e.to_string()))?;
    println!(
        "Wrote {} records (seed {}) to {}",
        records.len(),
        source.seed(),
        output.display()
    );
    Ok(())
}

fn cmd_config(
    path: &Path,
    show: bool,
    set_margin: Option<f64>,
    set_output: Option<OutputFormat>,
    set_data: Option<PathBuf>,
    clear_data: bool,
    reset: bool,
) -> Result<()> {
    if reset {
        let config = Config::default();
        config.save_to(path)?;
        println!("Configuration reset to defaults");
        return Ok(());
    }

    let mut config = Config::load_from(path)?;
    let mut changed = false;

    if let Some(margin) = set_margin {
        validate_margin(margin)?;
        config.margin = margin;
        changed = true;
        println!("Margin set to: ${:.2}", margin);
    }

    if let Some(format) = set_output {
        config.output_format = format;
        changed = true;
        println!("Output format set to: {}", format);
    }

    if let Some(path) = set_data {
        if !path.exists() {
            return Err(Error::FileNotFound(path.display().to_string()));
        }
        println!("Data file set to: {}", path.display());
        config.data_path = Some(path);
        changed = true;
    } else if clear_data {
        config.data_path = None;
        changed = true;
        println!("Data file cleared (synthetic data will be used)");
    }

    if changed {
        config.save_to(path)?;
    }

    if show || !changed {
        println!("{}", config);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(path: &Path, content: &str) {
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_reset_recovers_invalid_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("lane-rate").join("config.json");
        write_config(&path, r#"{"margin": -5.0}"#);
        assert!(Config::load_from(&path).is_err());

        cmd_config(&path, false, None, None, None, false, true).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), Config::default());
    }

    #[test]
    fn test_set_margin_persists() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        cmd_config(&path, false, Some(75.0), Some(OutputFormat::Json), None, false, false).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.margin, 75.0);
        assert_eq!(config.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_set_negative_margin_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");

        assert!(cmd_config(&path, false, Some(-1.0), None, None, false, false).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_set_missing_data_file_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let missing = dir.path().join("loads.csv");

        let err = cmd_config(&path, false, None, None, Some(missing), false, false).unwrap_err();
        assert!(matches!(err, Error::FileNotFound(_)));
    }
}
