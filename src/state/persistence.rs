use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{FuelProduct, Session};

/// Load the fuel product catalog from a CSV file.
///
/// Expected headers: `id,name,carbs_per_serving,serving_label`.
/// Deduplicates by id (last occurrence wins) and returns products ordered by id.
pub fn load_products<P: AsRef<Path>>(path: P) -> Result<Vec<FuelProduct>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path.as_ref())?;

    let mut seen: BTreeMap<i64, FuelProduct> = BTreeMap::new();
    for record in reader.deserialize() {
        let product: FuelProduct = record?;
        if !product.is_valid() {
            warn!(id = product.id, name = %product.name, "skipping invalid fuel product");
            continue;
        }
        seen.insert(product.id, product);
    }

    debug!(count = seen.len(), path = %path.as_ref().display(), "loaded fuel products");
    Ok(seen.into_values().collect())
}

/// Load session history from a JSON file.
pub fn load_sessions<P: AsRef<Path>>(path: P) -> Result<Vec<Session>> {
    let content = fs::read_to_string(path)?;
    let sessions: Vec<Session> = serde_json::from_str(&content)?;
    Ok(sessions)
}

/// Save session history to a JSON file.
pub fn save_sessions<P: AsRef<Path>>(path: P, sessions: &[Session]) -> Result<()> {
    let json = serde_json::to_string_pretty(sessions)?;
    fs::write(path, json)?;
    Ok(())
}
