mod bright_stars;
mod constellations;
pub mod star;
#[cfg(test)]
mod tests;

use std::sync::Arc;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_derive::{Deserialize, Serialize};

use crate::error::{Result, StarMapError};

pub use constellations::{
    build_constellation_graph, ConstellationEdge, CONSTELLATION_MAGNITUDE_LIMIT,
    CONSTELLATION_MAX_SEPARATION_DEG,
};
pub use star::{CelestialPoint, SYNTHETIC_PREFIX};

/// settings for the generated part of the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// number of random background points appended after the named stars
    pub background_count: usize,
    /// brightest magnitude a background point may have
    pub faint_magnitude_min: f64,
    /// faintest magnitude a background point may have
    pub faint_magnitude_max: f64,
    /// fixes the background points when set; unseeded runs differ every time
    pub seed: Option<u64>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        CatalogConfig {
            background_count: 300,
            faint_magnitude_min: 3.5,
            faint_magnitude_max: 6.0,
            seed: None,
        }
    }
}

impl CatalogConfig {
    /// the faint magnitude range has to be finite and ordered
    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.faint_magnitude_min, self.faint_magnitude_max);
        if !min.is_finite() || !max.is_finite() {
            return Err(StarMapError::invalid_config("faint magnitude range must be finite"));
        }
        if min > max {
            return Err(StarMapError::invalid_config(format!(
                "faint magnitude range is reversed: {} > {}",
                min, max
            )));
        }
        Ok(())
    }
}

/// returns the named bright stars followed by `config.background_count` synthetic background
/// points, uniformly distributed in right ascension, declination and magnitude.
/// A config that fails `CatalogConfig::validate` does not panic: when the faint range is
/// empty or not finite every background point gets `faint_magnitude_min`
pub fn build_catalog(config: &CatalogConfig) -> Vec<Arc<CelestialPoint>> {
    match config.seed {
        Some(seed) => build_catalog_with(config, &mut StdRng::seed_from_u64(seed)),
        None => build_catalog_with(config, &mut rand::thread_rng()),
    }
}

fn build_catalog_with(config: &CatalogConfig, rng: &mut impl Rng) -> Vec<Arc<CelestialPoint>> {
    let mut stars: Vec<Arc<CelestialPoint>> = bright_stars::BRIGHT_STARS
        .iter()
        .map(|&(name, ra, dec, magnitude)| Arc::new(CelestialPoint::new(name, ra, dec, magnitude)))
        .collect();

    let (faint_min, faint_max) = (config.faint_magnitude_min, config.faint_magnitude_max);
    for i in 0..config.background_count {
        let magnitude = if faint_max > faint_min && (faint_max - faint_min).is_finite() {
            rng.gen_range(faint_min..faint_max)
        } else {
            faint_min
        };
        stars.push(Arc::new(CelestialPoint::new(
            format!("{}{}", SYNTHETIC_PREFIX, i),
            rng.gen_range(0.0..24.0),
            rng.gen_range(-90.0..=90.0),
            magnitude,
        )));
    }
    stars
}

/// the star catalog together with the constellation lines derived from it. Built once, never
/// mutated afterwards
#[derive(Debug, Clone, Default)]
pub struct StarCatalog {
    pub stars: Vec<Arc<CelestialPoint>>,
    pub constellations: Vec<ConstellationEdge>,
}

impl StarCatalog {
    pub fn build(config: &CatalogConfig) -> StarCatalog {
        let stars = build_catalog(config);
        let constellations = build_constellation_graph(&stars);
        let longest = constellations
            .iter()
            .map(|e| e.separation_deg())
            .fold(0.0, f64::max);
        info!(
            "built star catalog: {} stars ({} named), {} constellation lines, longest {:.1} deg",
            stars.len(),
            stars.iter().filter(|s| !s.is_synthetic()).count(),
            constellations.len(),
            longest
        );
        StarCatalog {
            stars,
            constellations,
        }
    }

    /// case insensitive lookup of a named star, background points are never returned
    pub fn find(&self, name: &str) -> Option<&Arc<CelestialPoint>> {
        self.stars
            .iter()
            .find(|s| !s.is_synthetic() && s.name.eq_ignore_ascii_case(name))
    }
}
