use crate::error::RecordError;
use crate::types::DonationRecord;
use std::collections::HashSet;
use tracing::debug;

/// One literal row: city, latitude, longitude, donation count, total amount.
pub type Row<'a> = (&'a str, f64, f64, u64, u64);

const SAMPLE_ROWS: [Row<'static>; 6] = [
    ("Sydney", -33.8688, 151.2093, 1250, 125000),
    ("Melbourne", -37.8136, 144.9631, 980, 98000),
    ("Brisbane", -27.4698, 153.0251, 650, 65000),
    ("Perth", -31.9505, 115.8605, 420, 42000),
    ("Adelaide", -34.9285, 138.6007, 380, 38000),
    ("Canberra", -35.2809, 149.1300, 280, 28000),
];

/// The built-in donation dataset, in table order.
///
/// Deterministic: every call yields an identical sequence.
pub fn records() -> Result<Vec<DonationRecord>, RecordError> {
    from_rows(&SAMPLE_ROWS)
}

/// Validates literal rows into records, rejecting duplicate city names.
pub fn from_rows(rows: &[Row<'_>]) -> Result<Vec<DonationRecord>, RecordError> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut records = Vec::with_capacity(rows.len());

    for &(city, lat, lon, donations, total) in rows {
        if !seen.insert(city) {
            return Err(RecordError::DuplicateCity(city.to_string()));
        }
        records.push(DonationRecord::new(city, lat, lon, donations, total)?);
    }

    debug!("Built dataset with {} records", records.len());
    Ok(records)
}
