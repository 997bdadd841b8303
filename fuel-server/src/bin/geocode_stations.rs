//! Offline dataset preparation: clean a raw station price CSV and geocode
//! the rows that lack coordinates, so the server can load the result
//! instantly at startup.
//!
//! Usage:
//!     geocode-stations <input.csv> <output.csv>
//!
//! Geocoding runs sequentially with a small delay between requests to
//! stay inside MapQuest's free-tier rate limit; a full dataset takes a
//! few minutes.

use std::fs::File;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use csv::Writer;

use fuel_server::mapquest::{MapquestClient, MapquestConfig};
use fuel_server::stations::{RawStationRow, read_rows};

/// Delay between geocoding requests.
const REQUEST_DELAY: Duration = Duration::from_millis(210);

#[tokio::main]
async fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(input), Some(output)) = (args.next(), args.next()) else {
        bail!("usage: geocode-stations <input.csv> <output.csv>");
    };

    let api_key = std::env::var("MAPQUEST_API_KEY")
        .context("MAPQUEST_API_KEY not set; get a free key at https://developer.mapquest.com/")?;
    let client = MapquestClient::new(MapquestConfig::new(api_key))
        .context("failed to create MapQuest client")?;

    let file = File::open(&input).with_context(|| format!("failed to open {input}"))?;
    let (rows, report) = read_rows(file).context("failed to read station CSV")?;

    let needs_geocoding = rows
        .iter()
        .filter(|r| r.latitude.is_none() || r.longitude.is_none())
        .count();

    println!(
        "{} rows read, {} valid after cleaning ({} invalid, {} duplicates)",
        report.rows_read,
        rows.len(),
        report.invalid,
        report.duplicates
    );
    println!(
        "{} rows need geocoding (~{} minutes)",
        needs_geocoding,
        (needs_geocoding as u64 * REQUEST_DELAY.as_millis() as u64) / 60_000 + 1
    );

    let mut geocoded = 0usize;
    let mut failed = 0usize;
    let mut out_rows: Vec<RawStationRow> = Vec::with_capacity(rows.len());

    for mut row in rows {
        if row.latitude.is_none() || row.longitude.is_none() {
            let address = format!("{}, {}, {}, USA", row.address, row.city, row.state);

            match client.geocode(&address).await {
                Ok(Some(point)) => {
                    row.latitude = Some(point.lat);
                    row.longitude = Some(point.lon);
                    geocoded += 1;
                }
                Ok(None) => failed += 1,
                Err(e) => {
                    // Transient provider errors shouldn't sink the whole run
                    eprintln!("geocoding failed for {}: {e}", row.name);
                    failed += 1;
                }
            }

            let done = geocoded + failed;
            if done % 100 == 0 {
                println!("  geocoded {done}/{needs_geocoding} rows ({failed} failures)");
            }

            tokio::time::sleep(REQUEST_DELAY).await;
        }

        if row.latitude.is_some() && row.longitude.is_some() {
            out_rows.push(row);
        }
    }

    write_csv(&output, &out_rows).with_context(|| format!("failed to write {output}"))?;

    println!(
        "done: {} rows written to {output} ({geocoded} geocoded, {failed} failures dropped)",
        out_rows.len()
    );

    Ok(())
}

/// Write cleaned, geocoded rows with the canonical header.
fn write_csv(path: &str, rows: &[RawStationRow]) -> Result<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record([
        "opis_id",
        "name",
        "address",
        "city",
        "state",
        "retail_price",
        "latitude",
        "longitude",
    ])?;

    for row in rows {
        // write_csv is only called with fully geocoded rows
        let (lat, lon) = (row.latitude.unwrap_or_default(), row.longitude.unwrap_or_default());
        wtr.write_record([
            row.opis_id.to_string(),
            row.name.clone(),
            row.address.clone(),
            row.city.clone(),
            row.state.as_str().to_string(),
            row.retail_price.to_string(),
            lat.to_string(),
            lon.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
