use super::Point;

/// Axis-aligned, closed bounding box.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundingBox<T> {
  pub min: Point<T>,
  pub max: Point<T>,
}

impl<T> BoundingBox<T>
where
  T: Ord + Clone,
{
  /// Returns `None` if there are no coordinates.
  ///
  /// Only the first `min(x_coords.len(), y_coords.len())` pairs are considered.
  pub fn from_coords(x_coords: &[T], y_coords: &[T]) -> Option<BoundingBox<T>> {
    let min_x = x_coords.iter().min()?;
    let max_x = x_coords.iter().max()?;
    let min_y = y_coords.iter().min()?;
    let max_y = y_coords.iter().max()?;
    Some(BoundingBox {
      min: Point::new([min_x.clone(), min_y.clone()]),
      max: Point::new([max_x.clone(), max_y.clone()]),
    })
  }

  pub fn contains(&self, pt: [&T; 2]) -> bool {
    let [x, y] = pt;
    x >= self.min.x_coord()
      && x <= self.max.x_coord()
      && y >= self.min.y_coord()
      && y <= self.max.y_coord()
  }
}
