use std::fmt;

use hashbrown::{HashMap, HashSet};
use tracing::trace;

use crate::graph::{Point, VisitorSet};

/// Neighbor lists for a set of grid points under the shared row/column rule.
///
/// # Invariants
/// - Every point of the input appears exactly once in `order`, at its first occurrence.
/// - `neighbors[p]` lists the other points sharing a row or column with `p`, in
///   input order. Duplicate input points therefore show up once per occurrence.
/// - The map is never modified after [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct AdjacencyMap {
    order: Vec<Point>,
    neighbors: HashMap<Point, Vec<Point>>,
}

impl AdjacencyMap {
    /// Links every pair of points that share a row or column. Quadratic in the
    /// number of points.
    pub fn build(points: &[Point]) -> Self {
        let mut map = AdjacencyMap::default();
        for &point in points {
            if map.neighbors.contains_key(&point) {
                continue;
            }
            let linked: Vec<Point> = points
                .iter()
                .copied()
                .filter(|other| point.is_neighbor_of(other))
                .collect();
            trace!(%point, degree = linked.len(), "linked point");
            map.order.push(point);
            map.neighbors.insert(point, linked);
        }
        map
    }

    /// Neighbors of `point`, or an empty slice for a point not in the map.
    pub fn neighbors(&self, point: &Point) -> &[Point] {
        self.neighbors.get(point).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Distinct points in first-seen order.
    pub fn points(&self) -> &[Point] {
        &self.order
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterative depth-first traversal from `start`, recording every reached point
    /// (including `start`) in `visited`.
    ///
    /// Points already marked in `visited` are not expanded again, so a single set
    /// can be shared across several calls.
    pub fn traverse<V: VisitorSet<Point>>(&self, start: Point, visited: &mut V) {
        let mut stack = vec![start];
        while let Some(current) = stack.pop() {
            if visited.is_visited(&current) {
                continue;
            }
            visited.mark_visited(current);
            stack.extend(
                self.neighbors(&current)
                    .iter()
                    .filter(|child| !visited.is_visited(child)),
            );
        }
    }

    /// Every point reachable from `start`, `start` included.
    ///
    /// A start point that is not in the map only reaches itself.
    pub fn reachable_from(&self, start: Point) -> HashSet<Point> {
        let mut visited = HashSet::new();
        self.traverse(start, &mut visited);
        visited
    }

    /// Groups the points into connected components, ordered by their first point.
    pub fn connected_components(&self) -> Vec<HashSet<Point>> {
        let mut seen: HashSet<Point> = HashSet::with_capacity(self.len());
        let mut components = Vec::new();
        for &point in &self.order {
            if seen.contains(&point) {
                continue;
            }
            let component = self.reachable_from(point);
            seen.extend(component.iter().copied());
            components.push(component);
        }
        components
    }
}

impl fmt::Display for AdjacencyMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, point) in self.order.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{point}: [")?;
            for (j, neighbor) in self.neighbors(point).iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stones() -> Vec<Point> {
        [[0, 0], [0, 1], [1, 0], [1, 2], [2, 1], [2, 2]]
            .into_iter()
            .map(Point::from)
            .collect()
    }

    #[test]
    fn origin_neighbors() {
        let map = AdjacencyMap::build(&stones());
        let origin = map.neighbors(&Point::new(0, 0));
        assert!(origin.contains(&Point::new(0, 1)));
        assert!(origin.contains(&Point::new(1, 0)));
        for far in [Point::new(1, 2), Point::new(2, 1), Point::new(2, 2)] {
            assert!(!origin.contains(&far));
        }
    }

    #[test]
    fn neighbor_lists_follow_input_order() {
        let map = AdjacencyMap::build(&stones());
        assert_eq!(
            map.neighbors(&Point::new(1, 0)),
            &[Point::new(0, 0), Point::new(1, 2)]
        );
        assert_eq!(map.points(), stones().as_slice());
    }

    #[test]
    fn six_stones_are_connected() {
        let map = AdjacencyMap::build(&stones());
        let all: HashSet<Point> = stones().into_iter().collect();
        for point in stones() {
            assert_eq!(map.reachable_from(point), all, "from {point}");
        }
        assert_eq!(map.connected_components().len(), 1);
    }

    #[test]
    fn isolated_point_reaches_only_itself() {
        let points = vec![Point::new(0, 0), Point::new(0, 3), Point::new(5, 5)];
        let map = AdjacencyMap::build(&points);
        let reached = map.reachable_from(Point::new(5, 5));
        assert_eq!(reached.len(), 1);
        assert!(reached.contains(&Point::new(5, 5)));
        assert!(map.neighbors(&Point::new(5, 5)).is_empty());
    }

    #[test]
    fn unknown_start_is_a_singleton() {
        let map = AdjacencyMap::build(&stones());
        let outsider = Point::new(9, 9);
        let reached = map.reachable_from(outsider);
        assert_eq!(reached.len(), 1);
        assert!(reached.contains(&outsider));
    }

    #[test]
    fn components_split_disjoint_groups() {
        let points: Vec<Point> = [[0, 0], [0, 4], [7, 7], [7, 9], [3, 3]]
            .into_iter()
            .map(Point::from)
            .collect();
        let map = AdjacencyMap::build(&points);
        let components = map.connected_components();
        let sizes: Vec<usize> = components.iter().map(HashSet::len).collect();
        assert_eq!(sizes, vec![2, 2, 1]);
        assert!(components[0].contains(&Point::new(0, 4)));
    }

    #[test]
    fn duplicate_points_keep_one_key() {
        let points = vec![Point::new(0, 0), Point::new(0, 1), Point::new(0, 0)];
        let map = AdjacencyMap::build(&points);
        assert_eq!(map.len(), 2);
        assert_eq!(map.neighbors(&Point::new(0, 1)), &[Point::new(0, 0), Point::new(0, 0)]);
        assert_eq!(map.reachable_from(Point::new(0, 0)).len(), 2);
    }

    #[test]
    fn traversal_reuses_caller_set() {
        let map = AdjacencyMap::build(&stones());
        let mut visited = HashSet::new();
        visited.insert(Point::new(0, 1));
        map.traverse(Point::new(2, 2), &mut visited);
        assert_eq!(visited.len(), 6);
    }

    #[test]
    fn empty_map() {
        let map = AdjacencyMap::build(&[]);
        assert!(map.is_empty());
        assert_eq!(map.to_string(), "{}");
        assert!(map.connected_components().is_empty());
    }

    #[test]
    fn display_lists_neighbors() {
        let map = AdjacencyMap::build(&[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(map.to_string(), "{(0, 0): [(0, 1)], (0, 1): [(0, 0)]}");
    }
}
