//! Output formatting module

use lanerate_app::app::SearchResponse;
use lanerate_domain::service::{generate_search_report, generate_summary_report, LaneCatalog, LaneSummary};
use lanerate_types::{OutputFormat, Result};

pub fn output_search(output_format: OutputFormat, response: &SearchResponse) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::to_string_pretty(response)?;
        println!("{}", content);
    } else {
        println!("{}", generate_search_report(&response.outcome));
        if response.outcome.is_empty() {
            eprintln!("Warning: {}", response.message);
        }
    }
    Ok(())
}

pub fn output_catalog(output_format: OutputFormat, catalog: &LaneCatalog) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(catalog)?);
        return Ok(());
    }

    if catalog.is_empty() {
        println!("No loads in the data set.");
        return Ok(());
    }

    println!("\nOrigins");
    println!("=======");
    for origin in &catalog.origins {
        println!("  {}", origin);
    }
    println!("\nDestinations");
    println!("============");
    for destination in &catalog.destinations {
        println!("  {}", destination);
    }
    println!("\nTrailer types");
    println!("=============");
    for trailer in &catalog.trailer_types {
        println!("  {}", trailer);
    }
    Ok(())
}

pub fn output_destinations(
    output_format: OutputFormat,
    origin: &str,
    destinations: &[String],
) -> Result<()> {
    if output_format == OutputFormat::Json {
        let content = serde_json::json!({
            "origin": origin,
            "destinations": destinations,
        });
        println!("{}", serde_json::to_string_pretty(&content)?);
        return Ok(());
    }

    if destinations.is_empty() {
        println!("No loads from {}.", origin);
        return Ok(());
    }
    println!("\nDestinations from {}", origin);
    println!("{}", "=".repeat(18 + origin.chars().count()));
    for destination in destinations {
        println!("  {}", destination);
    }
    Ok(())
}

pub fn output_summaries(output_format: OutputFormat, summaries: &[LaneSummary]) -> Result<()> {
    if output_format == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
    } else {
        println!("{}", generate_summary_report(summaries));
    }
    Ok(())
}
