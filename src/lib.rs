#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Exact point-in-polygon classification for integer coordinates.
//!
//! Every comparison is carried out without division and without floating point
//! arithmetic. For the fixed-width integer types the intermediate products are
//! formed in an integer type of twice the width, so no input can overflow.
//!
//! ```rust
//! # use inside_polygon::algorithms::inside_polygon;
//! let xs = [0, 10, 10, 0];
//! let ys = [0, 0, 10, 10];
//! assert_eq!(inside_polygon(5, 5, &xs, &ys), Ok(true));
//! assert_eq!(inside_polygon(5, 0, &xs, &ys), Ok(true)); // On the boundary.
//! assert_eq!(inside_polygon(15, 5, &xs, &ys), Ok(false));
//! assert!(inside_polygon(5, 5, &xs[..2], &ys[..2]).is_err());
//! ```
use std::cmp::Ordering;
use std::fmt::Debug;
use std::ops::BitXor;

pub mod algorithms;
pub mod data;

#[cfg(test)]
pub mod testing;

/// Reasons a coordinate list is rejected as a polygon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
  /// Fewer than three vertices.
  InsufficientVertices,
  /// The x and y coordinate sequences have different lengths.
  MismatchedCoordinates { x_len: usize, y_len: usize },
}

impl std::fmt::Display for Error {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
    match self {
      Error::InsufficientVertices => write!(f, "Invalid polygon: insufficient vertices"),
      Error::MismatchedCoordinates { x_len, y_len } => write!(
        f,
        "Invalid polygon: {} x-coordinates but {} y-coordinates",
        x_len, y_len
      ),
    }
  }
}

impl std::error::Error for Error {}

pub trait PolygonScalar: Debug + Clone + Ord {
  /// Compare `(y2 - y) * (x2 - x1)` with `(y2 - y1) * (x2 - x)` where
  /// `p1 = (x1, y1)`, `p2 = (x2, y2)` and `q = (x, y)`.
  ///
  /// `Ordering::Equal` means that `q` lies on the line through `p1` and `p2`.
  /// The comparison is exact and never overflows.
  fn cmp_slope(p1: [&Self; 2], p2: [&Self; 2], q: [&Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $ulong:ty ) => {
    impl PolygonScalar for $ty {
      fn cmp_slope(p1: [&Self; 2], p2: [&Self; 2], q: [&Self; 2]) -> Ordering {
        // Return the absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        // diff(a,b) = (c, sign) where a = if sign { b-c } else { b+c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let [x1, y1] = p1;
        let [x2, y2] = p2;
        let [x, y] = q;
        // slope1 = (y2 - y) * (x2 - x1)
        let (a, a_neg) = diff(*y2, *y);
        let (b, b_neg) = diff(*x2, *x1);
        let slope1_neg = a_neg.bitxor(b_neg) && a != 0 && b != 0;
        // slope2 = (y2 - y1) * (x2 - x)
        let (c, c_neg) = diff(*y2, *y1);
        let (d, d_neg) = diff(*x2, *x);
        let slope2_neg = c_neg.bitxor(d_neg) && c != 0 && d != 0;
        match (slope1_neg, slope2_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (c * d).cmp(&(a * b)),
          (false, false) => (a * b).cmp(&(c * d)),
        }
      }
    }
  };
}

macro_rules! arbitrary_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl PolygonScalar for $ty {
        fn cmp_slope(p1: [&Self; 2], p2: [&Self; 2], q: [&Self; 2]) -> Ordering {
          let slope1 = (p2[1] - q[1]) * (p2[0] - p1[0]);
          let slope2 = (p2[1] - p1[1]) * (p2[0] - q[0]);
          slope1.cmp(&slope2)
        }
      }
    )*
  };
}

fixed_precision!(i8, u8, u16);
fixed_precision!(i16, u16, u32);
fixed_precision!(i32, u32, u64);
fixed_precision!(i64, u64, u128);
fixed_precision!(isize, usize, u128);
arbitrary_precision!(num_bigint::BigInt);

#[cfg(feature = "rug")]
impl PolygonScalar for rug::Integer {
  fn cmp_slope(p1: [&Self; 2], p2: [&Self; 2], q: [&Self; 2]) -> Ordering {
    let slope1 = rug::Integer::from(p2[1] - q[1]) * rug::Integer::from(p2[0] - p1[0]);
    let slope2 = rug::Integer::from(p2[1] - p1[1]) * rug::Integer::from(p2[0] - q[0]);
    slope1.cmp(&slope2)
  }
}
