mod bounding_box;
mod directed_edge;
pub(crate) mod point;
pub mod polygon;

pub use bounding_box::BoundingBox;
pub use directed_edge::DirectedEdge;

#[doc(inline)]
pub use crate::data::polygon::{EdgeIter, Iter, Polygon, PolygonView, PolygonWithHoles};
pub use point::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

impl PointLocation {
  /// Points on the boundary count as inside.
  pub fn is_inside(self) -> bool {
    self != PointLocation::Outside
  }
}
