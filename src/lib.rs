//! # mercator-coords
//!
//! Converts WGS84 longitude/latitude into an integer "storage" Mercator space
//! defined at zoom 26, and rescales those integers to the pixel space of any
//! other zoom level.
//!
//! ### 1. Plain functions
//!
//! ```
//! use mercator_coords::{
//!     MERCATOR_SIZE, get_x, get_y, mercator_from_latitude, mercator_from_longitude,
//!     mercator_to_latitude, mercator_to_longitude,
//! };
//!
//! let mx = mercator_from_longitude(-2.248);
//! let my = mercator_from_latitude(53.481);
//! assert!(mx < MERCATOR_SIZE / 2 && my < MERCATOR_SIZE / 2);
//!
//! // Pixel coordinates at zoom 12.
//! let (px, py) = (get_x(mx, 12), get_y(my, 12));
//! assert_eq!((px, py), (mx >> 6, my >> 6));
//!
//! let lon = mercator_to_longitude(mx as f64);
//! let lat = mercator_to_latitude(my as f64);
//! assert!((lon + 2.248).abs() < 1e-5 && (lat - 53.481).abs() < 1e-5);
//! ```
//!
//! ### 2. `MercatorPoint` and `MercatorRect`
//!
//! ```
//! use mercator_coords::{MercatorPoint, MercatorRect};
//! use geo_types::point;
//!
//! let p = MercatorPoint::from_wgs84(&point! { x: 13.405, y: 52.52 });
//! let (tx, ty) = p.tile(10);
//!
//! let bbox = MercatorRect::from_geometry(&point! { x: 13.405, y: 52.52 }).unwrap();
//! let (cols, rows) = bbox.tile_range(10);
//! assert!(cols.contains(&tx) && rows.contains(&ty));
//! ```
//!
//! ### 3. Batches
//!
//! ```
//! use mercator_coords::{MercatorPointsToWgs84, ToMercatorPoints};
//!
//! let coords = vec![(0.0, 0.0), (13.405, 52.52)];
//! let pixels = coords.to_mercator_points().to_zoom(18);
//! assert_eq!(pixels[0], (1 << 25, 1 << 25));
//! ```

pub mod api;
pub mod coord;
pub mod core;
pub mod error;

pub use api::{
    MercatorPoint, MercatorPointsToWgs84, MercatorRect, ToMercatorPoints, mercator_line_to_wgs84,
    wgs84_line_to_mercator,
};
pub use crate::coord::{Coordinate, wgs84};
pub use crate::core::{
    MAX_LATITUDE, MAX_TARGET_ZOOM, MERCATOR_SHIFT, MERCATOR_SIZE, TILE_SHIFT, TILE_SIZE,
    checked_get_x, checked_get_y, get_x, get_y, is_valid_latitude, mercator_from_latitude,
    mercator_from_longitude, mercator_to_latitude, mercator_to_longitude, tile_index, zoom_shift,
    zoom_to_storage,
};
pub use error::MercatorError;

pub use geo_types;
