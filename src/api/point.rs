use crate::coord::Coordinate;
use crate::core::constants::{MERCATOR_SIZE, TILE_SHIFT};
use crate::core::convert::{
    is_valid_latitude, mercator_from_latitude, mercator_from_longitude, mercator_to_latitude,
    mercator_to_longitude,
};
use crate::core::zoom::{checked_get_x, checked_get_y, get_x, get_y};
use crate::error::MercatorError;
use geo_types::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A position in storage Mercator space.
///
/// `x` grows eastwards from the antimeridian and `y` grows southwards from
/// the northern edge of the map, both in pixels at zoom 26.
///
/// # Example
///
/// ```
/// use mercator_coords::MercatorPoint;
///
/// let berlin = MercatorPoint::from_lon_lat(13.4050, 52.5200);
/// let (px, py) = berlin.at_zoom(12);
/// let (tx, ty) = berlin.tile(12);
/// assert_eq!((px >> 8, py >> 8), (tx, ty));
///
/// let back = berlin.to_wgs84();
/// assert!((back.x() - 13.4050).abs() < 1e-5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MercatorPoint {
    pub x: i32,
    pub y: i32,
}

impl MercatorPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Projects a WGS84 `(lon, lat)` coordinate into storage space.
    pub fn from_wgs84(coord: &impl Coordinate) -> Self {
        Self::from_lon_lat(coord.x(), coord.y())
    }

    pub fn from_lon_lat(lon: f64, lat: f64) -> Self {
        Self {
            x: mercator_from_longitude(lon),
            y: mercator_from_latitude(lat),
        }
    }

    /// Like [`MercatorPoint::from_lon_lat`], but refuses inputs that fall
    /// outside the projection's domain.
    ///
    /// # Errors
    ///
    /// - [`MercatorError::InvalidLongitude`] - NaN or outside [-180, 180]
    /// - [`MercatorError::InvalidLatitude`] - NaN or beyond ±85.0511°
    pub fn from_lon_lat_checked(lon: f64, lat: f64) -> Result<Self, MercatorError> {
        if !(-180.0..=180.0).contains(&lon) {
            return Err(MercatorError::InvalidLongitude(lon));
        }
        if !is_valid_latitude(lat) {
            return Err(MercatorError::InvalidLatitude(lat));
        }
        Ok(Self::from_lon_lat(lon, lat))
    }

    /// Converts back to a WGS84 point (`x` = longitude, `y` = latitude).
    pub fn to_wgs84(&self) -> Point<f64> {
        Point::new(
            mercator_to_longitude(f64::from(self.x)),
            mercator_to_latitude(f64::from(self.y)),
        )
    }

    /// Pixel coordinates at `zoom`, see [`get_x`].
    pub fn at_zoom(&self, zoom: i32) -> (i32, i32) {
        (get_x(self.x, zoom), get_y(self.y, zoom))
    }

    pub fn checked_at_zoom(&self, zoom: i32) -> Result<(i32, i32), MercatorError> {
        Ok((checked_get_x(self.x, zoom)?, checked_get_y(self.y, zoom)?))
    }

    /// Column and row of the 256-pixel tile holding this point at `zoom`.
    pub fn tile(&self, zoom: i32) -> (i32, i32) {
        let (px, py) = self.at_zoom(zoom);
        (px >> TILE_SHIFT, py >> TILE_SHIFT)
    }

    /// Whether both axes lie in `[0, MERCATOR_SIZE)`.
    pub fn is_in_storage_range(&self) -> bool {
        (0..MERCATOR_SIZE).contains(&self.x) && (0..MERCATOR_SIZE).contains(&self.y)
    }
}

impl From<(i32, i32)> for MercatorPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

impl From<Coord<i32>> for MercatorPoint {
    fn from(c: Coord<i32>) -> Self {
        Self { x: c.x, y: c.y }
    }
}

impl From<MercatorPoint> for Coord<i32> {
    fn from(p: MercatorPoint) -> Self {
        Coord { x: p.x, y: p.y }
    }
}
