pub mod catalog;
pub mod config;
pub mod error;
pub mod logging;
pub mod search;
pub mod sky_view;

pub use catalog::{CatalogConfig, CelestialPoint, ConstellationEdge, StarCatalog};
pub use config::StarMapConfig;
pub use error::{Result, StarMapError};
pub use search::{EquatorialCoordinates, SearchResult};
pub use sky_view::{
    CanvasSize, DrawCommand, InputEvent, PlottedObject, ScreenPoint, SkyView, ViewportState,
};
