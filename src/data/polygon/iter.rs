use crate::data::DirectedEdge;
use crate::data::PolygonView;

pub struct Iter<'a, T: 'a> {
  pub(crate) polygon: PolygonView<'a, T>,
  pub(crate) next: usize,
}

impl<T> Clone for Iter<'_, T> {
  fn clone(&self) -> Self {
    Iter {
      polygon: self.polygon,
      next: self.next,
    }
  }
}

impl<'a, T> Iterator for Iter<'a, T> {
  type Item = [&'a T; 2];
  fn next(&mut self) -> Option<Self::Item> {
    if self.next >= self.polygon.len() {
      return None;
    }
    let out = self.polygon.vertex(self.next);
    self.next += 1;
    Some(out)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for Iter<'_, T> {
  fn len(&self) -> usize {
    self.polygon.len().saturating_sub(self.next)
  }
}

// Yields (vertex[i-1 mod n], vertex[i]) for i in 0..n.
pub struct EdgeIter<'a, T: 'a> {
  pub(crate) polygon: PolygonView<'a, T>,
  pub(crate) prev: usize,
  pub(crate) next: usize,
}

impl<T> Clone for EdgeIter<'_, T> {
  fn clone(&self) -> Self {
    EdgeIter {
      polygon: self.polygon,
      prev: self.prev,
      next: self.next,
    }
  }
}

impl<'a, T> Iterator for EdgeIter<'a, T> {
  type Item = DirectedEdge<'a, T>;
  fn next(&mut self) -> Option<Self::Item> {
    if self.next >= self.polygon.len() {
      return None;
    }
    let edge = DirectedEdge {
      src: self.polygon.vertex(self.prev),
      dst: self.polygon.vertex(self.next),
    };
    self.prev = self.next;
    self.next += 1;
    Some(edge)
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (self.len(), Some(self.len()))
  }
}

impl<T> ExactSizeIterator for EdgeIter<'_, T> {
  fn len(&self) -> usize {
    self.polygon.len().saturating_sub(self.next)
  }
}
