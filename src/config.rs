use std::fs;
use std::path::Path;

use flexi_logger::LogSpecification;
use serde_derive::{Deserialize, Serialize};

use crate::catalog::CatalogConfig;
use crate::error::{Result, StarMapError};
use crate::sky_view::CanvasSize;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StarMapConfig {
    pub catalog: CatalogConfig,
    pub canvas: CanvasSize,
    pub show_constellations: bool,
    /// flexi_logger spec, e.g. "info" or "star_map=debug"
    pub log_level: String,
}

impl Default for StarMapConfig {
    fn default() -> Self {
        StarMapConfig {
            catalog: CatalogConfig::default(),
            canvas: CanvasSize::default(),
            show_constellations: true,
            log_level: "info".to_string(),
        }
    }
}

impl StarMapConfig {
    /// reads a JSON config file, fields left out keep their defaults
    pub fn load(path: impl AsRef<Path>) -> Result<StarMapConfig> {
        let contents = fs::read_to_string(path)?;
        let config: StarMapConfig = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// `load` for a given path, defaults when there is none
    pub fn load_or_default(path: Option<&Path>) -> Result<StarMapConfig> {
        match path {
            Some(p) => StarMapConfig::load(p),
            None => Ok(StarMapConfig::default()),
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.catalog.validate()?;
        if !(self.canvas.width > 0.0 && self.canvas.height > 0.0) {
            return Err(StarMapError::invalid_config(format!(
                "canvas must have a positive size, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if let Err(e) = LogSpecification::parse(&self.log_level) {
            return Err(StarMapError::invalid_config(format!(
                "log_level '{}' is not a valid log specification: {}",
                self.log_level, e
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let file = write_config(r#"{"catalog": {"seed": 12, "background_count": 40}}"#);
        let config = StarMapConfig::load(file.path()).unwrap();
        assert_eq!(config.catalog.seed, Some(12));
        assert_eq!(config.catalog.background_count, 40);
        assert_eq!(config.catalog.faint_magnitude_max, 6.0);
        assert_eq!(config.canvas, CanvasSize::new(800.0, 600.0));
        assert!(config.show_constellations);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_reversed_faint_range_is_rejected() {
        let file = write_config(
            r#"{"catalog": {"faint_magnitude_min": 6.0, "faint_magnitude_max": 4.0}}"#,
        );
        let err = StarMapConfig::load(file.path()).unwrap_err();
        assert!(matches!(err, StarMapError::InvalidConfig { .. }), "{}", err);
    }

    #[test]
    fn test_empty_canvas_is_rejected() {
        let file = write_config(r#"{"canvas": {"width": 0, "height": 600}}"#);
        assert!(matches!(
            StarMapConfig::load(file.path()),
            Err(StarMapError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_invalid_log_level_is_rejected() {
        let file = write_config(r#"{"log_level": "verbose=="}"#);
        assert!(matches!(
            StarMapConfig::load(file.path()),
            Err(StarMapError::InvalidConfig { .. })
        ));

        let file = write_config(r#"{"log_level": "star_map=debug"}"#);
        assert_eq!(StarMapConfig::load(file.path()).unwrap().log_level, "star_map=debug");
    }

    #[test]
    fn test_canvas_override_is_validated() {
        let mut config = StarMapConfig::default();
        config.canvas.width = -5.0;
        assert!(matches!(
            config.validate(),
            Err(StarMapError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_malformed_json() {
        let file = write_config("{not json");
        assert!(matches!(
            StarMapConfig::load(file.path()),
            Err(StarMapError::Json(_))
        ));
    }

    #[test]
    fn test_no_path_gives_defaults() {
        assert_eq!(
            StarMapConfig::load_or_default(None).unwrap(),
            StarMapConfig::default()
        );
    }
}
