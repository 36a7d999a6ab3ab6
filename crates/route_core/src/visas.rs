use std::path::Path;

use anyhow::Context;
use rustc_hash::{FxHashMap, FxHashSet};

/// Map from airport code to whether a visa is required to transit there.
pub type VisaRequirements = FxHashMap<String, bool>;

/// Loads the visa-requirement map from a JSON object of `code: bool` pairs.
pub fn load_visa_requirements(path: &Path) -> anyhow::Result<VisaRequirements> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read visa file {}", path.display()))?;
    let visas: VisaRequirements = serde_json::from_str(&raw)
        .with_context(|| format!("Visa file {} is not a JSON object of booleans", path.display()))?;
    Ok(visas)
}

/// Derives the set of airports a route may use.
///
/// A traveler holding a visa may use every airport; without one, only
/// airports whose requirement flag is false.
pub fn allowed_airports(visas: &VisaRequirements, has_visa: bool) -> FxHashSet<String> {
    visas
        .iter()
        .filter(|(_, requires_visa)| has_visa || !**requires_visa)
        .map(|(code, _)| code.clone())
        .collect()
}
