//! Series fetch and CSV export.

use anyhow::Context;
use chrono::{DateTime, Utc};
use log::info;
use met_client::PortalClient;
use met_core::field::{field_by_code, FIELDS};
use met_core::filter::Filter;
use met_core::run::recent_runs;

/// Fetch one series payload and write it to a CSV file.
///
/// Output columns: `series,name,value,min,max`. `min`/`max` are empty for
/// points without uncertainty bounds.
pub async fn run_fetch_series(
    field: &str,
    area: &str,
    resolution: &str,
    run: Option<&str>,
    output: &str,
    base_url: &str,
) -> anyhow::Result<()> {
    if field_by_code(field).is_none() {
        anyhow::bail!("unknown field code: {} (try `list-fields`)", field);
    }

    let reftime: DateTime<Utc> = match run {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .with_context(|| format!("invalid run time: {}", s))?
            .with_timezone(&Utc),
        None => *recent_runs(Utc::now(), 1)
            .first()
            .context("could not determine the latest run")?,
    };

    let filter = Filter::new(field, reftime, resolution, area);
    info!(
        "Fetching {} for {} at {} from {}",
        field, area, reftime, base_url
    );

    let client = PortalClient::new(base_url);
    let series = client.fetch_series(&filter).await?;

    let mut writer = csv::Writer::from_path(output)?;
    writer.write_record(["series", "name", "value", "min", "max"])?;
    let mut rows = 0usize;
    for s in &series {
        for p in &s.points {
            writer.write_record([
                s.name.clone(),
                p.name.label(),
                p.value.to_string(),
                p.min.map_or(String::new(), |v| v.to_string()),
                p.max.map_or(String::new(), |v| v.to_string()),
            ])?;
            rows += 1;
        }
    }
    writer.flush()?;

    info!(
        "Wrote {} rows across {} series to {}",
        rows,
        series.len(),
        output
    );
    Ok(())
}

/// Print the field catalog.
pub fn run_list_fields() -> anyhow::Result<()> {
    println!(
        "{:<12} {:<40} {:<8} {}",
        "CODE", "NAME", "UNIT", "ACCUMULATION"
    );
    for field in FIELDS {
        let accumulation = field
            .accumulation_hours
            .map_or("-".to_string(), |h| format!("{} h", h));
        println!(
            "{:<12} {:<40} {:<8} {}",
            field.code, field.name, field.unit, accumulation
        );
    }
    Ok(())
}
