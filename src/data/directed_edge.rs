use std::cmp::Ordering;

use crate::PolygonScalar;

///////////////////////////////////////////////////////////////////////////////
// DirectedEdge

// Directed edge from `src` to `dst`. Both endpoints borrow from the polygon's
// coordinate storage.
#[derive(Debug, Eq, PartialEq)]
pub struct DirectedEdge<'a, T> {
  pub src: [&'a T; 2],
  pub dst: [&'a T; 2],
}

impl<T> Copy for DirectedEdge<'_, T> {}
impl<T> Clone for DirectedEdge<'_, T> {
  fn clone(&self) -> Self {
    *self
  }
}

impl<'a, T> DirectedEdge<'a, T>
where
  T: PolygonScalar,
{
  /// Returns `true` if `pt` lies on the closed segment between `src` and `dst`.
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use inside_polygon::data::DirectedEdge;
  /// let edge = DirectedEdge { src: [&0, &0], dst: [&10, &5] };
  /// assert!(edge.contains([&4, &2]));
  /// assert!(edge.contains([&10, &5]));
  /// assert!(!edge.contains([&12, &6]));
  /// assert!(!edge.contains([&4, &3]));
  /// ```
  pub fn contains(&self, pt: [&T; 2]) -> bool {
    fn between<U: Ord>(a: &U, b: &U, v: &U) -> bool {
      if a <= b {
        a <= v && v <= b
      } else {
        b <= v && v <= a
      }
    }
    let [x1, y1] = self.src;
    let [x2, y2] = self.dst;
    let [x, y] = pt;
    between(x1, x2, x)
      && between(y1, y2, y)
      && T::cmp_slope(self.src, self.dst, pt) == Ordering::Equal
  }

  pub fn is_horizontal(&self) -> bool {
    self.src[1] == self.dst[1]
  }
}
