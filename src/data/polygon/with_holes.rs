use crate::data::{BoundingBox, Point, PointLocation, Polygon};
use crate::PolygonScalar;

/// An outer boundary with zero or more holes cut out of it.
///
/// The bounding box of the boundary is computed once at construction and used to
/// reject far away points before running the O(n) test.
#[derive(Debug, Clone)]
pub struct PolygonWithHoles<T> {
  boundary: Polygon<T>,
  holes: Vec<Polygon<T>>,
  bbox: Option<BoundingBox<T>>,
}

impl<T> PolygonWithHoles<T>
where
  T: PolygonScalar,
{
  pub fn new(boundary: Polygon<T>, holes: Vec<Polygon<T>>) -> PolygonWithHoles<T> {
    let bbox = boundary.bounding_box();
    PolygonWithHoles {
      boundary,
      holes,
      bbox,
    }
  }

  pub fn boundary(&self) -> &Polygon<T> {
    &self.boundary
  }

  pub fn holes(&self) -> &[Polygon<T>] {
    &self.holes
  }

  /// The boundaries of the holes are part of the region's boundary. A point strictly
  /// inside a hole is outside the region.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use inside_polygon::data::{Point, PointLocation, Polygon, PolygonWithHoles};
  /// let outer = Polygon::new(vec![0, 10, 10, 0], vec![0, 0, 10, 10])?;
  /// let hole = Polygon::new(vec![4, 6, 6, 4], vec![4, 4, 6, 6])?;
  /// let region = PolygonWithHoles::new(outer, vec![hole]);
  /// assert_eq!(region.locate(&Point::new([2, 2])), PointLocation::Inside);
  /// assert_eq!(region.locate(&Point::new([5, 5])), PointLocation::Outside);
  /// assert_eq!(region.locate(&Point::new([4, 5])), PointLocation::OnBoundary);
  /// # Ok::<(), inside_polygon::Error>(())
  /// ```
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    match &self.bbox {
      Some(bbox) if bbox.contains(pt.as_refs()) => {}
      _ => return PointLocation::Outside,
    }
    // Holes usually have fewer vertices than the boundary.
    for hole in &self.holes {
      match hole.locate(pt) {
        PointLocation::Inside => return PointLocation::Outside,
        PointLocation::OnBoundary => return PointLocation::OnBoundary,
        PointLocation::Outside => {}
      }
    }
    self.boundary.locate(pt)
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    self.locate(pt).is_inside()
  }
}
