//! Results handed over by the lookup side of the application. Only the name, the kind and
//! already resolved coordinates matter to the star map.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde_derive::{Deserialize, Serialize};

use crate::catalog::StarCatalog;
use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EquatorialCoordinates {
    #[serde(alias = "ra")]
    pub ra_hours: f64,
    #[serde(alias = "dec")]
    pub dec_degrees: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub name: String,
    pub kind: String,
    #[serde(default)]
    pub coordinates: Option<EquatorialCoordinates>,
}

impl SearchResult {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        SearchResult {
            name: name.into(),
            kind: kind.into(),
            coordinates: None,
        }
    }

    pub fn at(mut self, ra_hours: f64, dec_degrees: f64) -> Self {
        self.coordinates = Some(EquatorialCoordinates {
            ra_hours,
            dec_degrees,
        });
        self
    }
}

/// reads a JSON array of search results
pub fn load_search_results(path: impl AsRef<Path>) -> Result<Vec<SearchResult>> {
    let reader = BufReader::new(File::open(path)?);
    Ok(serde_json::from_reader(reader)?)
}

/// fills in coordinates the lookup could not resolve from the named stars of the catalog.
/// Returns how many results were filled in
pub fn resolve_from_catalog(results: &mut [SearchResult], catalog: &StarCatalog) -> usize {
    let mut resolved = 0;
    for result in results.iter_mut().filter(|r| r.coordinates.is_none()) {
        if let Some(star) = catalog.find(&result.name) {
            result.coordinates = Some(EquatorialCoordinates {
                ra_hours: star.ra_hours,
                dec_degrees: star.dec_degrees,
            });
            resolved += 1;
        }
    }
    resolved
}
