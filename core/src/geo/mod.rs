pub mod circle;
pub mod coordinate;
pub mod distance;

pub use circle::Circle;
pub use coordinate::Coordinate;
pub use distance::{haversine_distance, EARTH_RADIUS_M};
