use crate::api::point::MercatorPoint;
use crate::core::constants::{MAX_LATITUDE, MERCATOR_SIZE};
use crate::core::zoom::tile_index;
use geo::BoundingRect;
use geo_types::{Rect, coord};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// An axis-aligned box in storage Mercator space, corners inclusive.
///
/// `min` is the north-west corner and `max` the south-east one, since `y`
/// grows southwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MercatorRect {
    pub min: MercatorPoint,
    pub max: MercatorPoint,
}

impl MercatorRect {
    /// Builds a box from any two opposite corners.
    pub fn new(a: MercatorPoint, b: MercatorPoint) -> Self {
        Self {
            min: MercatorPoint::new(a.x.min(b.x), a.y.min(b.y)),
            max: MercatorPoint::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The whole of storage space.
    pub fn world() -> Self {
        Self {
            min: MercatorPoint::new(0, 0),
            max: MercatorPoint::new(MERCATOR_SIZE - 1, MERCATOR_SIZE - 1),
        }
    }

    /// Projects a WGS84 rectangle (`x` = longitude, `y` = latitude).
    pub fn from_wgs84_rect(rect: &Rect<f64>) -> Self {
        let a = MercatorPoint::from_lon_lat(rect.min().x, rect.min().y);
        let b = MercatorPoint::from_lon_lat(rect.max().x, rect.max().y);
        Self::new(a, b)
    }

    /// Box covering a WGS84 geometry, or `None` if it has no coordinates.
    ///
    /// # Example
    /// ```
    /// use mercator_coords::MercatorRect;
    /// use geo_types::line_string;
    ///
    /// let route = line_string![
    ///     (x: -2.248, y: 53.481),
    ///     (x: -1.548, y: 53.801),
    ///     (x: -0.127, y: 51.507),
    /// ];
    /// let bbox = MercatorRect::from_geometry(&route).unwrap();
    /// assert!(bbox.width() > 0 && bbox.height() > 0);
    /// ```
    pub fn from_geometry<G>(geometry: &G) -> Option<Self>
    where
        G: BoundingRect<f64>,
    {
        let rect: Option<Rect<f64>> = geometry.bounding_rect().into();
        let bbox = rect.map(|r| Self::from_wgs84_rect(&r));
        log::trace!("bounding box in storage space: {:?}", bbox);
        bbox
    }

    /// Horizontal extent in storage units; never overflows, even for
    /// corners saturated at `i32::MIN`/`i32::MAX`.
    pub fn width(&self) -> u32 {
        self.max.x.abs_diff(self.min.x)
    }

    pub fn height(&self) -> u32 {
        self.max.y.abs_diff(self.min.y)
    }

    pub fn contains(&self, point: &MercatorPoint) -> bool {
        (self.min.x..=self.max.x).contains(&point.x)
            && (self.min.y..=self.max.y).contains(&point.y)
    }

    /// Converts back to a WGS84 rectangle.
    pub fn to_wgs84_rect(&self) -> Rect<f64> {
        let nw = self.min.to_wgs84();
        let se = self.max.to_wgs84();
        Rect::new(coord! { x: nw.x(), y: nw.y() }, coord! { x: se.x(), y: se.y() })
    }

    /// The box with both corners rescaled to pixel space at `zoom`.
    pub fn at_zoom(&self, zoom: i32) -> Self {
        Self {
            min: self.min.at_zoom(zoom).into(),
            max: self.max.at_zoom(zoom).into(),
        }
    }

    /// Tile columns and rows touched by the box at `zoom`.
    pub fn tile_range(&self, zoom: i32) -> (RangeInclusive<i32>, RangeInclusive<i32>) {
        (
            tile_index(self.min.x, zoom)..=tile_index(self.max.x, zoom),
            tile_index(self.min.y, zoom)..=tile_index(self.max.y, zoom),
        )
    }

    /// Latitude span the box covers, clamped to the projection's bound.
    pub fn latitude_span(&self) -> (f64, f64) {
        let r = self.to_wgs84_rect();
        (r.min().y.max(-MAX_LATITUDE), r.max().y.min(MAX_LATITUDE))
    }
}
