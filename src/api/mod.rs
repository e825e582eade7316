pub mod batch;
pub mod point;
pub mod rect;

pub use batch::{
    MercatorPointsToWgs84, ToMercatorPoints, mercator_line_to_wgs84, wgs84_line_to_mercator,
};
pub use point::MercatorPoint;
pub use rect::MercatorRect;
