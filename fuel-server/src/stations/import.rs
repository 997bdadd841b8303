//! CSV import with data cleaning.
//!
//! The source dataset (an OPIS truckstop price export) is messy: column
//! names vary, text fields carry stray whitespace, prices and ids are
//! sometimes malformed, and the same OPIS id can appear with several
//! prices. Import applies the full cleaning pipeline and reports what it
//! dropped, so a bad dataset is visible at startup rather than as silently
//! missing stops.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use tracing::warn;

use crate::domain::{FuelStation, StateCode};

use super::error::ImportError;

/// Field length caps carried over from the original schema.
const MAX_NAME_LEN: usize = 200;
const MAX_ADDRESS_LEN: usize = 300;
const MAX_CITY_LEN: usize = 100;

/// A cleaned station row whose coordinates may still be missing.
///
/// The server importer requires coordinates; the offline geocoding tool
/// consumes rows without them and fills them in.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStationRow {
    pub opis_id: u32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: StateCode,
    pub retail_price: f64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl RawStationRow {
    /// Convert into a [`FuelStation`] if coordinates are present.
    pub fn into_station(self) -> Option<FuelStation> {
        let (lat, lon) = (self.latitude?, self.longitude?);
        Some(FuelStation {
            opis_id: self.opis_id,
            name: self.name,
            address: self.address,
            city: self.city,
            state: self.state,
            retail_price: self.retail_price,
            latitude: lat,
            longitude: lon,
        })
    }
}

/// What the cleaning pipeline did with the input rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Data rows read from the CSV.
    pub rows_read: usize,

    /// Stations that made it into the store.
    pub imported: usize,

    /// Rows dropped for failing validation (bad state, price, or id).
    pub invalid: usize,

    /// Rows dropped as duplicate OPIS ids (the cheaper row wins).
    pub duplicates: usize,

    /// Rows dropped for missing or out-of-range coordinates.
    pub missing_coords: usize,
}

impl fmt::Display for ImportReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} rows read, {} imported ({} invalid, {} duplicates, {} missing coordinates)",
            self.rows_read, self.imported, self.invalid, self.duplicates, self.missing_coords
        )
    }
}

/// Read and clean station rows, keeping rows without coordinates.
///
/// Applies header normalization, field cleaning, validation, and
/// duplicate removal (cheapest price wins per OPIS id). The returned
/// report's `imported` and `missing_coords` fields are left at zero; the
/// caller decides what to do with coordinate-less rows.
pub fn read_rows<R: Read>(reader: R) -> Result<(Vec<RawStationRow>, ImportReport), ImportError> {
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = rdr
        .headers()?
        .iter()
        .map(normalize_header)
        .collect();

    let col = |name: &str| headers.iter().position(|h| h.as_str() == name);

    let required = ["opis_id", "name", "city", "state", "retail_price"];
    let missing: Vec<String> = required
        .iter()
        .filter(|&&name| col(name).is_none())
        .map(|&name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    let idx_opis = col("opis_id").unwrap();
    let idx_name = col("name").unwrap();
    let idx_city = col("city").unwrap();
    let idx_state = col("state").unwrap();
    let idx_price = col("retail_price").unwrap();
    let idx_address = col("address");
    let idx_lat = col("latitude");
    let idx_lon = col("longitude");

    let mut report = ImportReport::default();
    let mut rows = Vec::new();

    for record in rdr.records() {
        let record = record?;
        report.rows_read += 1;

        let field = |idx: usize| record.get(idx).unwrap_or("");

        let Some(opis_id) = parse_opis_id(field(idx_opis)) else {
            report.invalid += 1;
            continue;
        };

        let name = truncate_chars(&clean_text(field(idx_name)), MAX_NAME_LEN);
        let city = truncate_chars(&clean_text(field(idx_city)), MAX_CITY_LEN);
        if name.is_empty() || city.is_empty() {
            report.invalid += 1;
            continue;
        }

        let Some(state) = parse_state(field(idx_state)) else {
            report.invalid += 1;
            continue;
        };

        let Some(retail_price) = parse_price(field(idx_price)) else {
            report.invalid += 1;
            continue;
        };

        let address = idx_address
            .map(|i| truncate_chars(&clean_text(field(i)), MAX_ADDRESS_LEN))
            .unwrap_or_default();

        let latitude = idx_lat.and_then(|i| parse_coord(field(i), 90.0));
        let longitude = idx_lon.and_then(|i| parse_coord(field(i), 180.0));

        rows.push(RawStationRow {
            opis_id,
            name,
            address,
            city,
            state,
            retail_price,
            latitude,
            longitude,
        });
    }

    report.duplicates = dedupe_cheapest(&mut rows);

    Ok((rows, report))
}

/// Load the station dataset from a CSV file.
///
/// Rows without usable coordinates are dropped and counted; run
/// `geocode-stations` over the raw CSV first to fill them in.
pub fn load_stations(path: impl AsRef<Path>) -> Result<(Vec<FuelStation>, ImportReport), ImportError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ImportError::Open {
        path: path.display().to_string(),
        source,
    })?;
    load_stations_from_reader(file)
}

/// Load the station dataset from any CSV reader.
pub fn load_stations_from_reader<R: Read>(
    reader: R,
) -> Result<(Vec<FuelStation>, ImportReport), ImportError> {
    let (rows, mut report) = read_rows(reader)?;

    let mut stations = Vec::with_capacity(rows.len());
    for row in rows {
        match row.into_station() {
            Some(station) => stations.push(station),
            None => report.missing_coords += 1,
        }
    }
    report.imported = stations.len();

    if report.missing_coords > 0 {
        warn!(
            missing = report.missing_coords,
            "stations without coordinates were skipped; run geocode-stations to fill them in"
        );
    }

    Ok((stations, report))
}

/// Normalize a CSV header: trim, lowercase, spaces to underscores, and map
/// the known vendor spellings onto canonical names.
fn normalize_header(raw: &str) -> String {
    let name = raw.trim().to_lowercase().replace(' ', "_");
    match name.as_str() {
        "opis_truckstop_id" => "opis_id".to_string(),
        "truckstop_name" => "name".to_string(),
        _ => name,
    }
}

/// Trim and collapse internal whitespace runs to single spaces.
fn clean_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Truncate to at most `max` characters.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// OPIS ids sometimes arrive as floats ("123.0"); accept those too.
fn parse_opis_id(s: &str) -> Option<u32> {
    let s = s.trim();
    if let Ok(id) = s.parse::<u32>() {
        return Some(id);
    }
    let as_float = s.parse::<f64>().ok()?;
    if as_float.fract() == 0.0 && as_float >= 0.0 && as_float <= f64::from(u32::MAX) {
        Some(as_float as u32)
    } else {
        None
    }
}

/// Uppercase, truncate to two characters, and require a valid state code.
fn parse_state(s: &str) -> Option<StateCode> {
    let cleaned = clean_text(s).to_uppercase();
    let two: String = cleaned.chars().take(2).collect();
    StateCode::parse(&two).ok()
}

/// Prices must be numeric and in the plausible [0, 10] USD/gallon band.
fn parse_price(s: &str) -> Option<f64> {
    let price = s.trim().parse::<f64>().ok()?;
    if price.is_finite() && (0.0..=10.0).contains(&price) {
        Some(price)
    } else {
        None
    }
}

/// A coordinate must parse and lie within ±limit degrees.
fn parse_coord(s: &str, limit: f64) -> Option<f64> {
    let v = s.trim().parse::<f64>().ok()?;
    if v.is_finite() && v.abs() <= limit {
        Some(v)
    } else {
        None
    }
}

/// Keep the cheapest row per OPIS id. Returns the number of rows dropped.
fn dedupe_cheapest(rows: &mut Vec<RawStationRow>) -> usize {
    use std::collections::HashSet;

    let before = rows.len();

    // Stable sort by price, then first-seen wins per id
    rows.sort_by(|a, b| a.retail_price.total_cmp(&b.retail_price));
    let mut seen = HashSet::new();
    rows.retain(|row| seen.insert(row.opis_id));

    before - rows.len()
}
