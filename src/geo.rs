//! Geographic points and bounds in decimal degrees (WGS 84).

use crate::constants::EARTH_RADIUS;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A geographic location in decimal degrees.
///
/// `GeoPoint` is a plain carrier: it stores whatever it is given,
/// including out-of-range or non-finite values. The projection entry
/// points clamp and wrap on the way in, so feeds with glitchy telemetry
/// can pass positions straight through.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north.
    pub lat: f64,
    /// Longitude in degrees, positive east.
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Whether both components are finite and inside the usual
    /// geographic ranges. Useful for filtering feeds before display.
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon)
    }

    /// Great-circle distance to `other` in meters (haversine formula).
    pub fn distance_to(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let a = (d_lat / 2.0).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Initial great-circle bearing towards `other`, in degrees
    /// clockwise from true north, in `[0, 360)`.
    pub fn bearing_to(&self, other: &GeoPoint) -> f64 {
        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let y = d_lon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

        let bearing = y.atan2(x).to_degrees().rem_euclid(360.0);
        if bearing >= 360.0 {
            0.0
        } else {
            bearing
        }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.6},{:.6}", self.lat, self.lon)
    }
}

/// Parses `"lat,lon"` in decimal degrees, e.g. `"39.8283,-98.5795"`.
impl FromStr for GeoPoint {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').collect();
        if parts.len() != 2 {
            return Err(Error::ParseCoordinates(s.to_string()));
        }
        let lat = parts[0]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::ParseCoordinates(s.to_string()))?;
        let lon = parts[1]
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::ParseCoordinates(s.to_string()))?;
        Ok(GeoPoint::new(lat, lon))
    }
}

impl From<GeoPoint> for geo_types::Point<f64> {
    fn from(p: GeoPoint) -> Self {
        // geo-types convention: x is longitude, y is latitude.
        geo_types::Point::new(p.lon, p.lat)
    }
}

impl From<geo_types::Point<f64>> for GeoPoint {
    fn from(p: geo_types::Point<f64>) -> Self {
        GeoPoint::new(p.y(), p.x())
    }
}

impl From<GeoPoint> for geo_types::Coord<f64> {
    fn from(p: GeoPoint) -> Self {
        geo_types::Coord { x: p.lon, y: p.lat }
    }
}

impl From<geo_types::Coord<f64>> for GeoPoint {
    fn from(c: geo_types::Coord<f64>) -> Self {
        GeoPoint::new(c.y, c.x)
    }
}

/// An axis-aligned geographic rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoBounds {
    pub south_west: GeoPoint,
    pub north_east: GeoPoint,
}

impl GeoBounds {
    pub fn new(south_west: GeoPoint, north_east: GeoPoint) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    pub fn from_corners(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(GeoPoint::new(south, west), GeoPoint::new(north, east))
    }

    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lon >= self.south_west.lon
            && point.lon <= self.north_east.lon
    }

    pub fn intersects(&self, other: &GeoBounds) -> bool {
        self.south_west.lat <= other.north_east.lat
            && self.north_east.lat >= other.south_west.lat
            && self.south_west.lon <= other.north_east.lon
            && self.north_east.lon >= other.south_west.lon
    }

    /// Grows the bounds to include `point`.
    pub fn extend(&mut self, point: &GeoPoint) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lon = self.south_west.lon.min(point.lon);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lon = self.north_east.lon.max(point.lon);
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lon + self.north_east.lon) / 2.0,
        )
    }

    /// Smallest bounds covering both rectangles.
    pub fn union(&self, other: &GeoBounds) -> GeoBounds {
        GeoBounds::new(
            GeoPoint::new(
                self.south_west.lat.min(other.south_west.lat),
                self.south_west.lon.min(other.south_west.lon),
            ),
            GeoPoint::new(
                self.north_east.lat.max(other.north_east.lat),
                self.north_east.lon.max(other.north_east.lon),
            ),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geo_point_creation() {
        let p = GeoPoint::new(40.7128, -74.0060);
        assert_eq!(p.lat, 40.7128);
        assert_eq!(p.lon, -74.0060);
        assert!(p.is_valid());
    }

    #[test]
    fn test_is_valid_rejects_out_of_range() {
        assert!(!GeoPoint::new(91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(-91.0, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, 181.0).is_valid());
        assert!(!GeoPoint::new(0.0, -181.0).is_valid());
        assert!(!GeoPoint::new(f64::NAN, 0.0).is_valid());
        assert!(!GeoPoint::new(0.0, f64::INFINITY).is_valid());
        assert!(GeoPoint::new(90.0, 180.0).is_valid());
    }

    #[test]
    fn test_distance_one_degree_of_longitude_at_equator() {
        let a = GeoPoint::new(0.0, 0.0);
        let b = GeoPoint::new(0.0, 1.0);
        let d = a.distance_to(&b);
        // One degree of arc on the equatorial circle.
        let expected = EARTH_RADIUS * 1.0_f64.to_radians();
        assert!((d - expected).abs() < 1.0);
    }

    #[test]
    fn test_distance_london_to_paris() {
        let london = GeoPoint::new(51.5074, -0.1278);
        let paris = GeoPoint::new(48.8566, 2.3522);
        let d = london.distance_to(&paris);
        assert!(d > 330_000.0 && d < 350_000.0, "got {}", d);
    }

    #[test]
    fn test_distance_is_symmetric() {
        let a = GeoPoint::new(40.7128, -74.0060);
        let b = GeoPoint::new(34.0522, -118.2437);
        assert!((a.distance_to(&b) - b.distance_to(&a)).abs() < 1e-6);
        assert_eq!(a.distance_to(&a), 0.0);
    }

    #[test]
    fn test_bearing_cardinal_directions() {
        let origin = GeoPoint::new(0.0, 0.0);
        assert!((origin.bearing_to(&GeoPoint::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((origin.bearing_to(&GeoPoint::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((origin.bearing_to(&GeoPoint::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((origin.bearing_to(&GeoPoint::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_coordinate_pair() {
        let p: GeoPoint = "39.8283,-98.5795".parse().unwrap();
        assert_eq!(p.lat, 39.8283);
        assert_eq!(p.lon, -98.5795);

        let spaced: GeoPoint = " 51.5074 , -0.1278 ".parse().unwrap();
        assert_eq!(spaced.lat, 51.5074);
        assert_eq!(spaced.lon, -0.1278);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("".parse::<GeoPoint>().is_err());
        assert!("39.8283".parse::<GeoPoint>().is_err());
        assert!("a,b".parse::<GeoPoint>().is_err());
        assert!("1,2,3".parse::<GeoPoint>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        let p = GeoPoint::new(39.8283, -98.5795);
        let back: GeoPoint = p.to_string().parse().unwrap();
        assert!((back.lat - p.lat).abs() < 1e-6);
        assert!((back.lon - p.lon).abs() < 1e-6);
    }

    #[test]
    fn test_serde_field_names() {
        let p = GeoPoint::new(39.8283, -98.5795);
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"lat":39.8283,"lon":-98.5795}"#);
        let back: GeoPoint = serde_json::from_str(&json).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn test_geo_types_interop() {
        let p = GeoPoint::new(40.7128, -74.0060);
        let gt: geo_types::Point<f64> = p.into();
        assert_eq!(gt.x(), -74.0060);
        assert_eq!(gt.y(), 40.7128);
        assert_eq!(GeoPoint::from(gt), p);

        let c: geo_types::Coord<f64> = p.into();
        assert_eq!(c.x, -74.0060);
        assert_eq!(GeoPoint::from(c), p);
    }

    #[test]
    fn test_bounds_contains_and_extend() {
        let mut bounds = GeoBounds::from_corners(39.0, -100.0, 41.0, -97.0);
        assert!(bounds.contains(&GeoPoint::new(39.8283, -98.5795)));
        assert!(!bounds.contains(&GeoPoint::new(42.0, -98.5795)));

        bounds.extend(&GeoPoint::new(42.5, -96.0));
        assert!(bounds.contains(&GeoPoint::new(42.0, -96.5)));
        assert_eq!(bounds.north_east.lat, 42.5);
    }

    #[test]
    fn test_bounds_intersects() {
        let a = GeoBounds::from_corners(0.0, 0.0, 10.0, 10.0);
        let b = GeoBounds::from_corners(5.0, 5.0, 15.0, 15.0);
        let c = GeoBounds::from_corners(20.0, 20.0, 30.0, 30.0);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_bounds_union() {
        let a = GeoBounds::from_corners(0.0, 0.0, 10.0, 10.0);
        let b = GeoBounds::from_corners(5.0, -5.0, 15.0, 8.0);
        let u = a.union(&b);
        assert_eq!(u.south_west, GeoPoint::new(0.0, -5.0));
        assert_eq!(u.north_east, GeoPoint::new(15.0, 10.0));
        assert!(u.contains(&GeoPoint::new(12.0, 9.0)));
        assert_eq!(a.union(&a), a);

        // Union covers disjoint rectangles too.
        let c = GeoBounds::from_corners(20.0, 20.0, 30.0, 30.0);
        assert!(a.union(&c).contains(&GeoPoint::new(15.0, 15.0)));
    }

    #[test]
    fn test_bounds_center() {
        let bounds = GeoBounds::from_corners(39.0, -100.0, 41.0, -98.0);
        let c = bounds.center();
        assert!((c.lat - 40.0).abs() < 1e-12);
        assert!((c.lon - -99.0).abs() < 1e-12);
    }
}
