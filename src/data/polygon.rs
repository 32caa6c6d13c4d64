use log::debug;

use crate::algorithms::point_in_polygon;
use crate::data::{BoundingBox, Point, PointLocation};
use crate::Error;
use crate::PolygonScalar;

mod iter;
pub use iter::*;

mod with_holes;
pub use with_holes::*;

// Lengths must match and there must be at least three vertices.
fn validate_coords<T>(x_coords: &[T], y_coords: &[T]) -> Result<(), Error> {
  if x_coords.len() != y_coords.len() {
    debug!(
      "rejecting polygon: {} x-coordinates but {} y-coordinates",
      x_coords.len(),
      y_coords.len()
    );
    return Err(Error::MismatchedCoordinates {
      x_len: x_coords.len(),
      y_len: y_coords.len(),
    });
  }
  if x_coords.len() < 3 {
    debug!("rejecting polygon with {} vertices", x_coords.len());
    return Err(Error::InsufficientVertices);
  }
  Ok(())
}

///////////////////////////////////////////////////////////////////////////////
// Polygon

/// A polygon stored as two parallel coordinate sequences. Vertex `i` is
/// `(x_coords[i], y_coords[i])` and the last vertex connects back to the first.
///
/// The polygon is not required to be simple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polygon<T> {
  pub(crate) x_coords: Vec<T>,
  pub(crate) y_coords: Vec<T>,
}

impl<T> Polygon<T> {
  pub fn new_unchecked(x_coords: Vec<T>, y_coords: Vec<T>) -> Polygon<T> {
    Polygon { x_coords, y_coords }
  }

  pub fn new(x_coords: Vec<T>, y_coords: Vec<T>) -> Result<Polygon<T>, Error> {
    validate_coords(&x_coords, &y_coords)?;
    Ok(Polygon { x_coords, y_coords })
  }

  pub fn from_points(points: Vec<Point<T>>) -> Result<Polygon<T>, Error> {
    let (x_coords, y_coords) = points
      .into_iter()
      .map(|pt| {
        let [x, y] = pt.array;
        (x, y)
      })
      .unzip();
    Polygon::new(x_coords, y_coords)
  }

  pub fn validate(&self) -> Result<(), Error> {
    validate_coords(&self.x_coords, &self.y_coords)
  }

  pub fn view(&self) -> PolygonView<'_, T> {
    PolygonView {
      x_coords: &self.x_coords,
      y_coords: &self.y_coords,
    }
  }

  pub fn len(&self) -> usize {
    self.x_coords.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x_coords.is_empty()
  }

  pub fn x_coords(&self) -> &[T] {
    &self.x_coords
  }

  pub fn y_coords(&self) -> &[T] {
    &self.y_coords
  }

  /// # Panics
  ///
  /// Panics if `idx` is out of bounds.
  pub fn vertex(&self, idx: usize) -> [&T; 2] {
    self.view().vertex(idx)
  }

  pub fn iter(&self) -> Iter<'_, T> {
    self.view().iter()
  }

  pub fn iter_edges(&self) -> EdgeIter<'_, T> {
    self.view().iter_edges()
  }

  pub fn bounding_box(&self) -> Option<BoundingBox<T>>
  where
    T: Ord + Clone,
  {
    self.view().bounding_box()
  }

  // O(n)
  pub fn locate(&self, pt: &Point<T>) -> PointLocation
  where
    T: PolygonScalar,
  {
    point_in_polygon::locate(pt, self.view())
  }

  // O(n)
  pub fn contains(&self, pt: &Point<T>) -> bool
  where
    T: PolygonScalar,
  {
    self.locate(pt).is_inside()
  }
}

///////////////////////////////////////////////////////////////////////////////
// PolygonView

/// Borrowed form of [`Polygon`] over coordinate slices owned by the caller.
#[derive(Debug)]
pub struct PolygonView<'a, T> {
  x_coords: &'a [T],
  y_coords: &'a [T],
}

impl<T> Copy for PolygonView<'_, T> {}
impl<T> Clone for PolygonView<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> PolygonView<'a, T> {
  pub fn new_unchecked(x_coords: &'a [T], y_coords: &'a [T]) -> PolygonView<'a, T> {
    PolygonView { x_coords, y_coords }
  }

  pub fn new(x_coords: &'a [T], y_coords: &'a [T]) -> Result<PolygonView<'a, T>, Error> {
    validate_coords(x_coords, y_coords)?;
    Ok(PolygonView { x_coords, y_coords })
  }

  pub fn validate(&self) -> Result<(), Error> {
    validate_coords(self.x_coords, self.y_coords)
  }

  /// Number of vertices, taken from the x-coordinates.
  pub fn len(&self) -> usize {
    self.x_coords.len()
  }

  pub fn is_empty(&self) -> bool {
    self.x_coords.is_empty()
  }

  pub fn x_coords(&self) -> &'a [T] {
    self.x_coords
  }

  pub fn y_coords(&self) -> &'a [T] {
    self.y_coords
  }

  /// # Panics
  ///
  /// Panics if `idx` is out of bounds for either coordinate slice.
  pub fn vertex(&self, idx: usize) -> [&'a T; 2] {
    [&self.x_coords[idx], &self.y_coords[idx]]
  }

  pub fn iter(&self) -> Iter<'a, T> {
    Iter {
      polygon: *self,
      next: 0,
    }
  }

  /// Edges in evaluation order: the closing edge from the last vertex to the
  /// first comes first, followed by `(0, 1)`, `(1, 2)`, ...
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use inside_polygon::data::PolygonView;
  /// let xs = [0, 10, 5];
  /// let ys = [0, 0, 10];
  /// let triangle = PolygonView::new(&xs, &ys)?;
  /// let srcs: Vec<_> = triangle.iter_edges().map(|edge| edge.src).collect();
  /// assert_eq!(srcs, vec![[&5, &10], [&0, &0], [&10, &0]]);
  /// # Ok::<(), inside_polygon::Error>(())
  /// ```
  pub fn iter_edges(&self) -> EdgeIter<'a, T> {
    EdgeIter {
      polygon: *self,
      prev: self.len().saturating_sub(1),
      next: 0,
    }
  }

  pub fn bounding_box(&self) -> Option<BoundingBox<T>>
  where
    T: Ord + Clone,
  {
    BoundingBox::from_coords(self.x_coords, self.y_coords)
  }

  // O(n)
  pub fn locate(&self, pt: &Point<T>) -> PointLocation
  where
    T: PolygonScalar,
  {
    point_in_polygon::locate(pt, *self)
  }

  // O(n)
  pub fn contains(&self, pt: &Point<T>) -> bool
  where
    T: PolygonScalar,
  {
    self.locate(pt).is_inside()
  }
}

impl<'a, T> From<&'a Polygon<T>> for PolygonView<'a, T> {
  fn from(polygon: &'a Polygon<T>) -> PolygonView<'a, T> {
    polygon.view()
  }
}
