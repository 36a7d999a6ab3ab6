use std::path::Path;

use anyhow::Context;
use log::warn;
use serde::Deserialize;

use crate::constants::Weight;

/// A priced one-way fare record as it appears in the data files.
/// The graph treats every fare as bidirectional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Fare {
    pub origin: String,
    pub destination: String,
    pub price: Weight,
}

impl Fare {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, price: Weight) -> Self {
        Fare {
            origin: origin.into(),
            destination: destination.into(),
            price,
        }
    }

    fn is_valid(&self) -> bool {
        self.price.is_finite() && self.price >= 0.0
    }
}

/// Loads fares from a JSON array of `{origin, destination, price}` objects.
///
/// A missing or unreadable file is an error; individual malformed entries
/// (missing fields, non-numeric or negative prices) are skipped with a
/// warning so one bad row cannot take down the whole fare table.
pub fn load_fares_json(path: &Path) -> anyhow::Result<Vec<Fare>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read fare file {}", path.display()))?;
    let entries: Vec<serde_json::Value> = serde_json::from_str(&raw)
        .with_context(|| format!("Fare file {} is not a JSON array", path.display()))?;

    let mut fares = Vec::with_capacity(entries.len());
    for entry in entries {
        match serde_json::from_value::<Fare>(entry.clone()) {
            Ok(fare) if fare.is_valid() => fares.push(fare),
            Ok(fare) => warn!("Ignoring fare with invalid price: {:?}", fare),
            Err(_) => warn!("Ignoring malformed fare entry: {}", entry),
        }
    }
    Ok(fares)
}

/// Loads fares from a CSV file with an `origin,destination,price` header.
/// Same skip-and-warn policy as [`load_fares_json`].
pub fn load_fares_csv(path: &Path) -> anyhow::Result<Vec<Fare>> {
    let mut reader = csv::Reader::from_path(path)
        .with_context(|| format!("Failed to open fare file {}", path.display()))?;

    let mut fares = Vec::new();
    for record in reader.deserialize::<Fare>() {
        match record {
            Ok(fare) if fare.is_valid() => fares.push(fare),
            Ok(fare) => warn!("Ignoring fare with invalid price: {:?}", fare),
            Err(err) => warn!("Ignoring malformed fare record: {}", err),
        }
    }
    Ok(fares)
}

/// Macro to create a fare between two airport codes
///
/// fare!("CCS", "AUA", 40.0)
#[macro_export]
macro_rules! fare {
    ($origin:expr, $destination:expr, $price:expr) => {
        $crate::fares::Fare::new($origin, $destination, $price)
    };
}
