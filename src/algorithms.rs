pub mod point_in_polygon;

#[doc(inline)]
pub use point_in_polygon::{inside_polygon, inside_polygon_unchecked, is_inside, locate};
