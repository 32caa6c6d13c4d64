// Strategies and helpers for property tests:
//  * points
//  * polygons (any vertex list, not necessarily simple)
//  * an exact reference classifier over rationals
use crate::data::{Point, PointLocation, Polygon};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Zero;
use proptest::arbitrary::*;
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::sample::Index;

pub fn init_logging() {
  drop(env_logger::builder().is_test(true).try_init());
}

///////////////////////////////////////////////////////////////////////////////
// Points

impl<T> Arbitrary for Point<T>
where
  T: Arbitrary + 'static,
{
  type Parameters = ();
  type Strategy = BoxedStrategy<Point<T>>;
  fn arbitrary_with(_params: ()) -> Self::Strategy {
    any::<(T, T)>()
      .prop_map(|(x, y)| Point::new([x, y]))
      .boxed()
  }
}

fn small() -> impl Strategy<Value = i32> {
  -8..=8
}

fn near_limits() -> impl Strategy<Value = i32> {
  prop_oneof![i32::MIN..i32::MIN + 4, i32::MAX - 3..=i32::MAX, -2..=2]
}

pub fn any_point_small() -> impl Strategy<Value = Point<i32>> {
  (-10..=10, -10..=10).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn any_point_near_limits() -> impl Strategy<Value = Point<i32>> {
  (near_limits(), near_limits()).prop_map(|(x, y)| Point::new([x, y]))
}

///////////////////////////////////////////////////////////////////////////////
// Polygons

fn from_pairs(pts: Vec<(i32, i32)>) -> Polygon<i32> {
  let (xs, ys) = pts.into_iter().unzip();
  Polygon::new_unchecked(xs, ys)
}

pub fn any_polygon_i32() -> impl Strategy<Value = Polygon<i32>> {
  vec(any::<(i32, i32)>(), 3..12).prop_map(from_pairs)
}

// Small coordinates produce many collinear, horizontal and degenerate edges.
pub fn any_polygon_small() -> impl Strategy<Value = Polygon<i32>> {
  vec((small(), small()), 3..10).prop_map(from_pairs)
}

pub fn any_polygon_near_limits() -> impl Strategy<Value = Polygon<i32>> {
  vec((near_limits(), near_limits()), 3..8).prop_map(from_pairs)
}

// A polygon with an edge from `p` to `p + k*d` and the point `p + t*d`, 0 < t < k.
pub fn polygon_with_edge_point() -> impl Strategy<Value = (Polygon<i32>, Point<i32>)> {
  (
    vec((-(1 << 20)..(1 << 20), -(1 << 20)..(1 << 20)), 1..8),
    (-(1 << 30)..(1 << 30), -(1 << 30)..(1 << 30)),
    (-1000..=1000, -1000..=1000),
    2..10_i32,
    any::<Index>(),
    any::<Index>(),
  )
    .prop_map(|(mut others, (px, py), (dx, dy), k, t, at)| {
      let t = 1 + t.index(k as usize - 1) as i32;
      let at = at.index(others.len() + 1);
      others.insert(at, (px + k * dx, py + k * dy));
      others.insert(at, (px, py));
      (from_pairs(others), Point::new([px + t * dx, py + t * dy]))
    })
}

pub fn rotate<T: Clone>(poly: &Polygon<T>, k: usize) -> Polygon<T> {
  let mut xs = poly.x_coords().to_vec();
  let mut ys = poly.y_coords().to_vec();
  if !xs.is_empty() {
    let k = k % xs.len();
    xs.rotate_left(k);
    ys.rotate_left(k);
  }
  Polygon::new_unchecked(xs, ys)
}

pub fn reverse<T: Clone>(poly: &Polygon<T>) -> Polygon<T> {
  let mut xs = poly.x_coords().to_vec();
  let mut ys = poly.y_coords().to_vec();
  xs.reverse();
  ys.reverse();
  Polygon::new_unchecked(xs, ys)
}

pub fn to_bigint(poly: &Polygon<i32>) -> Polygon<BigInt> {
  Polygon::new_unchecked(
    poly.x_coords().iter().map(|&v| BigInt::from(v)).collect(),
    poly.y_coords().iter().map(|&v| BigInt::from(v)).collect(),
  )
}

///////////////////////////////////////////////////////////////////////////////
// Reference classifier

// Computes the crossing x-coordinate exactly with a division. Uses the opposite
// half-open convention (y < y_vertex) of the library code.
pub fn reference_locate(poly: &Polygon<i32>, pt: &Point<i32>) -> PointLocation {
  let x = BigInt::from(pt[0]);
  let y = BigInt::from(pt[1]);
  let n = poly.len();
  let mut crossings = 0;
  for i in 0..n {
    let j = (i + n - 1) % n;
    let xa = BigInt::from(poly.x_coords()[j]);
    let ya = BigInt::from(poly.y_coords()[j]);
    let xb = BigInt::from(poly.x_coords()[i]);
    let yb = BigInt::from(poly.y_coords()[i]);

    let cross = (&xb - &xa) * (&y - &ya) - (&yb - &ya) * (&x - &xa);
    let in_x = (&xa).min(&xb) <= &x && &x <= (&xa).max(&xb);
    let in_y = (&ya).min(&yb) <= &y && &y <= (&ya).max(&yb);
    if cross.is_zero() && in_x && in_y {
      return PointLocation::OnBoundary;
    }

    if (ya > y) != (yb > y) {
      let cx = BigRational::from_integer(xa.clone())
        + BigRational::new((&y - &ya) * (&xb - &xa), &yb - &ya);
      if BigRational::from_integer(x.clone()) < cx {
        crossings += 1;
      }
    }
  }
  if crossings % 2 == 1 {
    PointLocation::Inside
  } else {
    PointLocation::Outside
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_square() {
    let square = Polygon::new(vec![0, 10, 10, 0], vec![0, 0, 10, 10]).unwrap();
    let at = |x, y| reference_locate(&square, &Point::new([x, y]));
    assert_eq!(at(5, 5), PointLocation::Inside);
    assert_eq!(at(0, 0), PointLocation::OnBoundary);
    assert_eq!(at(5, 0), PointLocation::OnBoundary);
    assert_eq!(at(-1, 5), PointLocation::Outside);
    assert_eq!(at(15, 5), PointLocation::Outside);
  }

  #[test]
  fn rotate_and_reverse() {
    let poly = Polygon::new(vec![0, 1, 2, 3], vec![4, 5, 6, 7]).unwrap();
    let rotated = rotate(&poly, 5);
    assert_eq!(rotated.x_coords(), &[1, 2, 3, 0]);
    assert_eq!(rotated.y_coords(), &[5, 6, 7, 4]);
    let reversed = reverse(&poly);
    assert_eq!(reversed.x_coords(), &[3, 2, 1, 0]);
    assert_eq!(reversed.y_coords(), &[7, 6, 5, 4]);
  }
}
