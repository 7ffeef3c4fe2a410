//! Prelude module for common mirrormap types
//!
//! Re-exports the most commonly used types and constants for easy
//! importing with `use mirrormap::prelude::*;`

pub use crate::constants::{EARTH_RADIUS, MAX_LATITUDE, MAX_ZOOM, MIN_ZOOM, TILE_SIZE};
pub use crate::geo::{GeoBounds, GeoPoint};
pub use crate::tile::{TileCoordinate, TileId};
pub use crate::viewport::{to_viewport_pixel, PlacedTile, Viewport, ViewportPixel};
pub use crate::{Error, Result};
