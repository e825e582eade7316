pub mod wgs84;

use geo_types::{Coord, Point};

/// A WGS84 position in degrees, read as `(longitude, latitude)`.
///
/// Lets the projection entry points take plain `(lon, lat)` tuples as well as
/// `geo_types::Coord<f64>` and `geo_types::Point<f64>`.
pub trait Coordinate {
    /// Longitude in degrees, positive east of Greenwich.
    fn x(&self) -> f64;
    /// Latitude in degrees, positive north of the equator.
    fn y(&self) -> f64;
}

impl Coordinate for (f64, f64) {
    fn x(&self) -> f64 {
        self.0
    }
    fn y(&self) -> f64 {
        self.1
    }
}

impl Coordinate for Coord<f64> {
    fn x(&self) -> f64 {
        self.x
    }
    fn y(&self) -> f64 {
        self.y
    }
}

impl Coordinate for Point<f64> {
    fn x(&self) -> f64 {
        Point::x(*self)
    }
    fn y(&self) -> f64 {
        Point::y(*self)
    }
}
