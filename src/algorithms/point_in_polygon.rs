// https://en.wikipedia.org/wiki/Point_in_polygon#Ray_casting_algorithm
use std::cmp::Ordering;

use crate::data::{Point, PointLocation, PolygonView};
use crate::Error;
use crate::PolygonScalar;

/// Locate `pt` relative to `polygon` with the even-odd rule.
///
/// A horizontal ray is cast from `pt` towards increasing x and the edges it crosses
/// are counted. Crossings are found by comparing cross-multiplied slopes, so no
/// division takes place and, for fixed-width integers, nothing can overflow. Points
/// on an edge or vertex are reported as [`PointLocation::OnBoundary`].
///
/// The polygon does not have to be simple. Self-intersecting input gets whatever
/// the crossing count yields.
///
/// # Time complexity
///
/// $O(n)$
///
/// # Examples
///
/// ```rust
/// # use inside_polygon::algorithms::locate;
/// # use inside_polygon::data::{Point, PointLocation, PolygonView};
/// let xs = [0, 10, 5];
/// let ys = [0, 0, 10];
/// let triangle = PolygonView::new(&xs, &ys)?;
/// assert_eq!(locate(&Point::new([5, 5]), triangle), PointLocation::Inside);
/// assert_eq!(locate(&Point::new([5, 0]), triangle), PointLocation::OnBoundary);
/// assert_eq!(locate(&Point::new([5, 11]), triangle), PointLocation::Outside);
/// # Ok::<(), inside_polygon::Error>(())
/// ```
pub fn locate<T>(pt: &Point<T>, polygon: PolygonView<'_, T>) -> PointLocation
where
  T: PolygonScalar,
{
  let q = pt.as_refs();
  let [x, y] = q;
  let mut inside = false;

  if polygon.is_empty() {
    return PointLocation::Outside;
  }
  // The edge from the last to the first vertex is checked first.
  let [_, y_last] = polygon.vertex(polygon.len() - 1);
  let mut y_gt_y1 = y > y_last;
  for edge in polygon.iter_edges() {
    if edge.contains(q) {
      return PointLocation::OnBoundary;
    }
    let [x1, _] = edge.src;
    let [x2, y2] = edge.dst;
    let y_gt_y2 = y > y2;
    if y_gt_y1 ^ y_gt_y2 {
      // The edge crosses the horizontal line through `pt`. Only crossings at or to
      // the right of `pt` are counted.
      let x_le_x1 = x <= x1;
      let x_le_x2 = x <= x2;
      if x_le_x1 && x_le_x2 {
        inside = !inside;
      } else if x_le_x1 || x_le_x2 {
        // One endpoint on either side. Compare (y2 - y)/(y2 - y1) against
        // (x2 - x)/(x2 - x1) with the divisors moved to the other side. Whether
        // the edge goes up or down decides the direction of the inequality.
        // Equal slopes count as a crossing.
        let crossing = match T::cmp_slope(edge.src, edge.dst, q) {
          Ordering::Equal => true,
          Ordering::Less => y_gt_y1,
          Ordering::Greater => !y_gt_y1,
        };
        if crossing {
          inside = !inside;
        }
      }
    }
    y_gt_y1 = y_gt_y2;
  }

  if inside {
    PointLocation::Inside
  } else {
    PointLocation::Outside
  }
}

/// Returns `true` if `pt` lies inside `polygon` or on its boundary.
///
/// See [`locate`].
pub fn is_inside<T>(pt: &Point<T>, polygon: PolygonView<'_, T>) -> bool
where
  T: PolygonScalar,
{
  locate(pt, polygon).is_inside()
}

/// Flat call interface: the vertex count is the length of the coordinate slices.
///
/// Mismatched slice lengths and polygons with fewer than three vertices are
/// rejected.
///
/// # Examples
///
/// ```rust
/// # use inside_polygon::algorithms::inside_polygon;
/// # use inside_polygon::Error;
/// let xs = [0_i32, 10, 5];
/// let ys = [0_i32, 0, 10];
/// assert_eq!(inside_polygon(5, 11, &xs, &ys), Ok(false));
/// assert_eq!(
///   inside_polygon(5, 5, &xs, &ys[..2]),
///   Err(Error::MismatchedCoordinates { x_len: 3, y_len: 2 })
/// );
/// ```
pub fn inside_polygon<T>(x: T, y: T, x_coords: &[T], y_coords: &[T]) -> Result<bool, Error>
where
  T: PolygonScalar,
{
  let polygon = PolygonView::new(x_coords, y_coords)?;
  Ok(is_inside(&Point::new([x, y]), polygon))
}

/// Like [`inside_polygon`] without validating the input.
///
/// Fewer than three vertices give a deterministic answer: a single vertex or a
/// segment only contains the points on it.
///
/// # Panics
///
/// Panics if `y_coords` is shorter than `x_coords`.
pub fn inside_polygon_unchecked<T>(x: T, y: T, x_coords: &[T], y_coords: &[T]) -> bool
where
  T: PolygonScalar,
{
  is_inside(
    &Point::new([x, y]),
    PolygonView::new_unchecked(x_coords, y_coords),
  )
}
