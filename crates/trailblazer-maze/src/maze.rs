//! The [`Maze`] result type.

use std::collections::BTreeSet;
use std::fmt;

use trailblazer_core::{Cell, Dims, Edge};
use trailblazer_paths::{AstarPather, DisjointSet, Pather, WeightedPather, manhattan};

/// A set of open passages over a grid.
///
/// Built mazes are spanning trees: `rows * cols - 1` passages connecting
/// every cell with exactly one route between any two cells.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Maze {
    dims: Dims,
    edges: BTreeSet<Edge>,
}

impl Maze {
    /// A grid with every wall standing.
    pub fn new(dims: Dims) -> Self {
        Self {
            dims,
            edges: BTreeSet::new(),
        }
    }

    /// A maze with the given passages open.
    pub fn from_edges(dims: Dims, edges: impl IntoIterator<Item = Edge>) -> Self {
        Self {
            dims,
            edges: edges.into_iter().collect(),
        }
    }

    /// Open the passage `edge`. Returns `false` if it was already open.
    pub fn insert(&mut self, edge: Edge) -> bool {
        self.edges.insert(edge)
    }

    /// Grid dimensions.
    #[inline]
    pub fn dims(&self) -> Dims {
        self.dims
    }

    /// Open passages in ascending order.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        self.edges.iter().copied()
    }

    /// Number of open passages.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Whether no passage is open.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether there is an open passage between `a` and `b`.
    pub fn is_open(&self, a: Cell, b: Cell) -> bool {
        Edge::new(a, b).is_some_and(|e| self.edges.contains(&e))
    }

    /// Cells reachable from `c` in one step.
    pub fn passages(&self, c: Cell) -> impl Iterator<Item = Cell> + '_ {
        c.neighbors_4().into_iter().filter(move |&n| self.is_open(c, n))
    }

    /// Whether the passages form a spanning tree over the whole grid.
    ///
    /// Replays every edge through a fresh [`DisjointSet`]: each must merge
    /// two different regions, and a single region must remain.
    pub fn is_spanning_tree(&self) -> bool {
        if self.dims.is_empty() || self.edges.len() != self.dims.len() - 1 {
            return false;
        }
        let mut regions = DisjointSet::for_dims(self.dims);
        for e in &self.edges {
            let (a, b) = e.cells();
            if !a.is_adjacent(b) || !self.dims.contains(a) || !self.dims.contains(b) {
                return false;
            }
            if !matches!(regions.join(a, b), Ok(true)) {
                return false;
            }
        }
        regions.components() == 1
    }

    /// Draw the maze as ASCII art, marking the given cells with `*`.
    pub fn render(&self, marked: &[Cell]) -> String {
        let mut out = String::new();
        let cols = self.dims.cols;

        out.push('+');
        for _ in 0..cols {
            out.push_str("---+");
        }
        out.push('\n');

        for row in 0..self.dims.rows {
            out.push('|');
            for col in 0..cols {
                let c = Cell::new(row, col);
                out.push_str(if marked.contains(&c) { " * " } else { "   " });
                let open = self.is_open(c, c.shift(0, 1));
                out.push(if open { ' ' } else { '|' });
            }
            out.push('\n');

            out.push('+');
            for col in 0..cols {
                let c = Cell::new(row, col);
                let open = self.is_open(c, c.shift(1, 0));
                out.push_str(if open { "   +" } else { "---+" });
            }
            out.push('\n');
        }
        out
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&[]))
    }
}

// ---------------------------------------------------------------------------
// Solving: passages as a unit-cost graph
// ---------------------------------------------------------------------------

impl Pather for Maze {
    fn dims(&self) -> Dims {
        self.dims
    }

    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        buf.extend(self.passages(c));
    }
}

impl WeightedPather for Maze {
    fn cost(&self, _from: Cell, _to: Cell) -> f64 {
        1.0
    }
}

impl AstarPather for Maze {
    fn estimate(&self, from: Cell, to: Cell) -> f64 {
        manhattan(from, to) as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailblazer_paths::{Error, astar_path, dijkstra_path};

    /// A 2x3 comb: the top row is open, every column hangs down from it.
    fn comb() -> Maze {
        Maze::from_edges(
            Dims::new(2, 3),
            [
                Edge::horizontal(Cell::new(0, 0)),
                Edge::horizontal(Cell::new(0, 1)),
                Edge::vertical(Cell::new(0, 0)),
                Edge::vertical(Cell::new(0, 1)),
                Edge::vertical(Cell::new(0, 2)),
            ],
        )
    }

    #[test]
    fn comb_is_a_spanning_tree() {
        let m = comb();
        assert_eq!(m.len(), 5);
        assert!(m.is_spanning_tree());
        assert!(m.is_open(Cell::new(1, 1), Cell::new(0, 1)));
        assert!(!m.is_open(Cell::new(1, 0), Cell::new(1, 1)));
        let mut p: Vec<_> = m.passages(Cell::new(0, 1)).collect();
        p.sort();
        assert_eq!(p, vec![Cell::new(0, 0), Cell::new(0, 2), Cell::new(1, 1)]);
    }

    #[test]
    fn cycles_and_gaps_are_not_trees() {
        let mut m = comb();
        m.insert(Edge::horizontal(Cell::new(1, 0)));
        assert!(!m.is_spanning_tree());

        // Right count, but one cell is cut off and a cycle closes elsewhere.
        let cyclic = Maze::from_edges(
            Dims::new(2, 3),
            [
                Edge::horizontal(Cell::new(0, 0)),
                Edge::horizontal(Cell::new(1, 0)),
                Edge::vertical(Cell::new(0, 0)),
                Edge::vertical(Cell::new(0, 1)),
                Edge::horizontal(Cell::new(0, 1)),
            ],
        );
        assert!(!cyclic.is_spanning_tree());
        assert!(!Maze::new(Dims::new(2, 2)).is_spanning_tree());
        assert!(Maze::new(Dims::new(1, 1)).is_spanning_tree());
    }

    #[test]
    fn render_comb() {
        let expected = "\
+---+---+---+
|           |
+   +   +   +
|   |   |   |
+---+---+---+
";
        assert_eq!(comb().to_string(), expected);
        let marked = comb().render(&[Cell::new(1, 2)]);
        assert!(marked.contains("|   |   | * |"));
    }

    #[test]
    fn solve_follows_passages() {
        let m = comb();
        let start = Cell::new(1, 0);
        let end = Cell::new(1, 2);
        let path = astar_path(&m, start, end, &mut ()).unwrap();
        assert_eq!(
            path.cells(),
            &[
                Cell::new(1, 0),
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
            ]
        );
        assert_eq!(dijkstra_path(&m, start, end, &mut ()).unwrap(), path);
    }

    #[test]
    fn walled_cells_are_unreachable() {
        let m = Maze::new(Dims::new(2, 2));
        let start = Cell::new(0, 0);
        let end = Cell::new(1, 1);
        assert_eq!(
            dijkstra_path(&m, start, end, &mut ()),
            Err(Error::NoPath { start, end })
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn maze_round_trip() {
        let m = Maze::from_edges(
            Dims::new(1, 3),
            [
                Edge::horizontal(Cell::new(0, 0)),
                Edge::horizontal(Cell::new(0, 1)),
            ],
        );
        let json = serde_json::to_string(&m).unwrap();
        let back: Maze = serde_json::from_str(&json).unwrap();
        assert_eq!(m, back);
    }

    #[test]
    fn diagonal_passages_are_rejected() {
        let json = r#"{
            "dims": {"rows": 2, "cols": 2},
            "edges": [
                {"start": {"row": 0, "col": 0}, "end": {"row": 1, "col": 1}},
                {"start": {"row": 0, "col": 0}, "end": {"row": 0, "col": 1}},
                {"start": {"row": 0, "col": 1}, "end": {"row": 1, "col": 1}}
            ]
        }"#;
        assert!(serde_json::from_str::<Maze>(json).is_err());
    }

    #[test]
    fn reversed_passages_stay_open() {
        let json = r#"{
            "dims": {"rows": 1, "cols": 3},
            "edges": [
                {"start": {"row": 0, "col": 1}, "end": {"row": 0, "col": 0}},
                {"start": {"row": 0, "col": 2}, "end": {"row": 0, "col": 1}}
            ]
        }"#;
        let m: Maze = serde_json::from_str(json).unwrap();
        assert!(m.is_open(Cell::new(0, 0), Cell::new(0, 1)));
        assert!(m.edges().any(|e| e == Edge::horizontal(Cell::new(0, 1))));
        assert!(m.is_spanning_tree());
    }

    #[test]
    fn passages_outside_the_grid_fail_the_tree_check() {
        let json = r#"{
            "dims": {"rows": 1, "cols": 2},
            "edges": [
                {"start": {"row": 0, "col": 1}, "end": {"row": 0, "col": 2}}
            ]
        }"#;
        let m: Maze = serde_json::from_str(json).unwrap();
        assert!(!m.is_spanning_tree());
    }
}
