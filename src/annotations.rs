//! Point annotations placed by clicking on a slice.

/// A user-placed marker in slice index space.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Ordered list of annotation points.
///
/// One global store shared across all three views and all slice indices;
/// points carry no axis or slice tag and are drawn identically on every
/// plane. Append-only except for removal of the most recent point.
#[derive(Clone, Debug, Default)]
pub struct AnnotationStore {
    points: Vec<Point>,
}

impl AnnotationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point. No deduplication and no bound checking here; the
    /// caller clamps click coordinates to the plane before adding.
    pub fn add(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Remove the most recently added point. A no-op on an empty store.
    pub fn remove_last(&mut self) {
        self.points.pop();
    }

    /// All points in insertion order.
    pub fn all(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Drop every point. Used when a new volume replaces the coordinate
    /// space the points were placed in.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_then_remove_last_keeps_earlier_points() {
        let mut store = AnnotationStore::new();
        let p1 = Point::new(3, 4);
        let p2 = Point::new(7, 1);
        store.add(p1);
        store.add(p2);
        store.remove_last();
        assert_eq!(store.all(), &[p1]);
    }

    #[test]
    fn remove_last_on_empty_store_is_a_noop() {
        let mut store = AnnotationStore::new();
        store.remove_last();
        assert!(store.is_empty());
    }

    #[test]
    fn duplicate_points_are_kept() {
        let mut store = AnnotationStore::new();
        store.add(Point::new(1, 1));
        store.add(Point::new(1, 1));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn clear_empties_the_store() {
        let mut store = AnnotationStore::new();
        store.add(Point::new(0, 0));
        store.clear();
        assert!(store.is_empty());
    }
}
