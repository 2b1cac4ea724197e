use trailblazer_core::{Cell, Dims};

/// Minimal search interface: the grid and its adjacency.
pub trait Pather {
    /// Dimensions of the grid being searched.
    fn dims(&self) -> Dims;

    /// Append neighbors of `c` into `buf`. The caller clears `buf` before calling.
    ///
    /// Defaults to the in-bounds orthogonal neighbors (up, right, down, left).
    fn neighbors(&self, c: Cell, buf: &mut Vec<Cell>) {
        let dims = self.dims();
        for n in c.neighbors_4() {
            if dims.contains(n) {
                buf.push(n);
            }
        }
    }
}

/// Pather with weighted (non-negative cost) edges.
pub trait WeightedPather: Pather {
    /// Cost of moving from `from` to adjacent `to`. Must be >= 0.
    fn cost(&self, from: Cell, to: Cell) -> f64;
}

/// Full A* pather with an admissible heuristic.
pub trait AstarPather: WeightedPather {
    /// Heuristic estimate of the cost from `from` to `to`.
    /// Must never overestimate the true cost (admissible).
    fn estimate(&self, from: Cell, to: Cell) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Open(Dims);

    impl Pather for Open {
        fn dims(&self) -> Dims {
            self.0
        }
    }

    #[test]
    fn default_neighbors_stay_in_bounds() {
        let p = Open(Dims::new(3, 4));
        let mut buf = Vec::new();
        p.neighbors(Cell::new(0, 3), &mut buf);
        assert_eq!(buf, vec![Cell::new(1, 3), Cell::new(0, 2)]);

        buf.clear();
        p.neighbors(Cell::new(1, 1), &mut buf);
        assert_eq!(
            buf,
            vec![Cell::new(0, 1), Cell::new(1, 2), Cell::new(2, 1), Cell::new(1, 0)]
        );
    }

    #[test]
    fn default_neighbors_append_to_buffer() {
        let p = Open(Dims::new(1, 1));
        let mut buf = vec![Cell::new(9, 9)];
        p.neighbors(Cell::ZERO, &mut buf);
        assert_eq!(buf, vec![Cell::new(9, 9)]);
    }
}
