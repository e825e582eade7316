pub mod constants;
pub mod convert;
pub mod zoom;

pub use constants::{
    MAX_LATITUDE, MAX_TARGET_ZOOM, MERCATOR_SHIFT, MERCATOR_SIZE, TILE_SHIFT, TILE_SIZE,
};
pub use convert::{
    is_valid_latitude, mercator_from_latitude, mercator_from_longitude, mercator_to_latitude,
    mercator_to_longitude,
};
pub use zoom::{
    checked_get_x, checked_get_y, get_x, get_y, tile_index, zoom_shift, zoom_to_storage,
};
