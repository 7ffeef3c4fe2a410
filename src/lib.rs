//! # mirrormap
//!
//! Slippy-map coordinate math for smart-mirror dashboards.
//!
//! A mirror panel shows a fixed map: OpenStreetMap tiles underneath,
//! weather radar and live aircraft on top, all centered on a configured
//! home location. Every one of those layers needs the same two answers:
//! which tile does a location fall in, and where on the panel does it
//! land. This crate gives both through a single Web Mercator projection,
//! so the layers stay pixel-aligned no matter who asks.
//!
//! ```
//! use mirrormap::{GeoPoint, Viewport};
//!
//! let viewport = Viewport::new(GeoPoint::new(39.8283, -98.5795), 9, 800.0, 600.0);
//!
//! // The home location is always the middle of the panel.
//! let home = viewport.locate(viewport.center);
//! assert_eq!((home.x, home.y), (400.0, 300.0));
//!
//! // Base-map tiles to fetch, with their on-panel positions.
//! for tile in viewport.visible_tiles() {
//!     println!("{} at ({}, {})", tile.id, tile.origin.x, tile.origin.y);
//! }
//! ```
//!
//! Coordinate inputs are never rejected: latitudes clamp to the Web
//! Mercator limit, longitudes wrap around the globe, and non-finite
//! values fall back to zero. Errors only come out of the parsing
//! surfaces ([`GeoPoint`]/[`TileId`] `FromStr`).

pub mod constants;
pub mod geo;
pub mod mercator;
pub mod prelude;
pub mod tile;
pub mod viewport;

// Re-export public API
pub use geo::{GeoBounds, GeoPoint};
pub use tile::{TileCoordinate, TileId};
pub use viewport::{to_viewport_pixel, PlacedTile, Viewport, ViewportPixel};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors from the parsing surfaces. The coordinate transforms
/// themselves clamp and wrap bad input instead of failing.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid coordinate pair '{0}': expected 'lat,lon' in decimal degrees")]
    ParseCoordinates(String),

    #[error("invalid tile path '{0}': expected 'zoom/x/y'")]
    ParseTile(String),

    #[error("tile {x}/{y} does not exist at zoom {zoom}")]
    TileOutOfRange { x: u32, y: u32, zoom: u8 },
}
